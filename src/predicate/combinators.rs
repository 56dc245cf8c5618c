//! Core predicate trait and logical combinators

/// A composable predicate over values of type T.
///
/// # Example
///
/// ```rust
/// use exclusive_name::predicate::*;
///
/// let has_value = present::<String>();
/// assert!(has_value.check(&Some(String::new())));
/// assert!(!has_value.check(&None));
/// ```
pub trait Predicate<T: ?Sized>: Send + Sync {
    /// Check if the value satisfies this predicate.
    fn check(&self, value: &T) -> bool;
}

impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        self(value)
    }
}

/// Extension trait for predicate combinators.
///
/// All methods return concrete types, so a composed predicate costs the same
/// as the hand-written boolean expression.
pub trait PredicateExt<T: ?Sized>: Predicate<T> + Sized {
    /// Both predicates must hold.
    fn and<P: Predicate<T>>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// Either predicate must hold.
    fn or<P: Predicate<T>>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }

    /// Exactly one of the two predicates must hold.
    ///
    /// ```rust
    /// use exclusive_name::predicate::*;
    ///
    /// let p = (|x: &i32| *x > 0).xor(|x: &i32| *x % 2 == 0);
    /// assert!(p.check(&3));
    /// assert!(p.check(&-2));
    /// assert!(!p.check(&4));
    /// assert!(!p.check(&-3));
    /// ```
    fn xor<P: Predicate<T>>(self, other: P) -> Xor<Self, P> {
        Xor(self, other)
    }

    /// Invert the predicate.
    fn not(self) -> Not<Self> {
        Not(self)
    }
}

impl<T: ?Sized, P: Predicate<T>> PredicateExt<T> for P {}

/// AND combinator - both predicates must be true.
#[derive(Clone, Copy, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for And<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) && self.1.check(value)
    }
}

/// OR combinator - either predicate must be true.
#[derive(Clone, Copy, Debug)]
pub struct Or<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for Or<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) || self.1.check(value)
    }
}

/// XOR combinator - exactly one predicate must be true.
#[derive(Clone, Copy, Debug)]
pub struct Xor<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for Xor<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) != self.1.check(value)
    }
}

/// NOT combinator - inverts the predicate.
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(pub P);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Not<P> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        !self.0.check(value)
    }
}
