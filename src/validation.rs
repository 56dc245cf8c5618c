//! Validation type for accumulating errors
//!
//! `Validation` looks like `Result`, but combining two failures keeps both
//! error sets instead of dropping the second one. [`Rule::check`](crate::Rule::check)
//! reports through it, and the form layer turns that outcome into a `Result`
//! with [`Validation::into_result`] when submitting.
//!
//! # Examples
//!
//! ```
//! use exclusive_name::{Field, FieldErrors, Validation};
//!
//! let first = Validation::<(), _>::failure(FieldErrors::single(Field::FirstName, "missing"));
//! let nick = Validation::<(), _>::failure(FieldErrors::single(Field::NickName, "missing"));
//!
//! match first.and(nick) {
//!     Validation::Failure(errors) => assert_eq!(errors.len(), 2),
//!     Validation::Success(_) => unreachable!(),
//! }
//! ```

use crate::Semigroup;

/// A validation that either succeeds with a value or fails with accumulated errors
///
/// # Type Parameters
///
/// * `T` - The type of the success value
/// * `E` - The type of the error value (must implement `Semigroup` for accumulation)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation<T, E> {
    /// Successful validation with a value
    Success(T),
    /// Failed validation with accumulated errors
    Failure(E),
}

impl<T, E> Validation<T, E> {
    /// Create a successful validation
    #[inline]
    pub fn success(value: T) -> Self {
        Validation::Success(value)
    }

    /// Create a failed validation
    #[inline]
    pub fn failure(error: E) -> Self {
        Validation::Failure(error)
    }

    /// Create a validation from a Result
    ///
    /// # Examples
    ///
    /// ```
    /// use exclusive_name::Validation;
    ///
    /// let v = Validation::from_result(Ok::<_, String>(42));
    /// assert_eq!(v, Validation::Success(42));
    /// ```
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Validation::Success(value),
            Err(error) => Validation::Failure(error),
        }
    }

    /// Convert this validation to a Result
    ///
    /// This is the bridge to `?`-based code such as
    /// [`FormState::submit`](crate::form::FormState::submit).
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Validation::Success(value) => Ok(value),
            Validation::Failure(error) => Err(error),
        }
    }

    /// Check if this validation is successful
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Validation::Success(_))
    }

    /// Check if this validation failed
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Validation::Failure(_))
    }

    /// Transform the success value if present
    #[inline]
    pub fn map<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Validation::Success(value) => Validation::Success(f(value)),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }

    /// Transform the error value if present
    #[inline]
    pub fn map_err<E2, F>(self, f: F) -> Validation<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Validation::Success(value) => Validation::Success(value),
            Validation::Failure(error) => Validation::Failure(f(error)),
        }
    }
}

impl<T, E: Semigroup> Validation<T, E> {
    /// Combine two validations, accumulating errors using the Semigroup instance
    ///
    /// If both validations are successful, returns a success with a tuple of both values.
    /// If either or both fail, accumulates the errors using `Semigroup::combine`.
    ///
    /// # Examples
    ///
    /// ```
    /// use exclusive_name::Validation;
    ///
    /// let v1 = Validation::<i32, _>::failure(vec!["error1"]);
    /// let v2 = Validation::<i32, _>::failure(vec!["error2"]);
    /// assert_eq!(v1.and(v2), Validation::Failure(vec!["error1", "error2"]));
    /// ```
    pub fn and<U>(self, other: Validation<U, E>) -> Validation<(T, U), E> {
        match (self, other) {
            (Validation::Success(a), Validation::Success(b)) => Validation::Success((a, b)),
            (Validation::Failure(e1), Validation::Failure(e2)) => {
                Validation::Failure(e1.combine(e2))
            }
            (Validation::Failure(e), _) => Validation::Failure(e),
            (_, Validation::Failure(e)) => Validation::Failure(e),
        }
    }

    /// Chain a dependent validation
    ///
    /// The function is only called if the current validation is successful.
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> Validation<U, E>,
    {
        match self {
            Validation::Success(value) => f(value),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }

    /// Combine every validation produced by an iterator
    ///
    /// Returns all success values if nothing failed, otherwise every error
    /// folded together in iteration order.
    ///
    /// # Examples
    ///
    /// ```
    /// use exclusive_name::Validation;
    ///
    /// let result = Validation::all_iter(vec![
    ///     Validation::<i32, _>::failure(vec!["error1"]),
    ///     Validation::success(2),
    ///     Validation::failure(vec!["error2"]),
    /// ]);
    /// assert_eq!(result, Validation::Failure(vec!["error1", "error2"]));
    /// ```
    pub fn all_iter<I>(validations: I) -> Validation<Vec<T>, E>
    where
        I: IntoIterator<Item = Validation<T, E>>,
    {
        let mut successes = Vec::new();
        let mut failures: Option<E> = None;

        for validation in validations {
            match validation {
                Validation::Success(value) => successes.push(value),
                Validation::Failure(error) => {
                    failures = Some(match failures {
                        Some(acc) => acc.combine(error),
                        None => error,
                    });
                }
            }
        }

        match failures {
            Some(errors) => Validation::Failure(errors),
            None => Validation::Success(successes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success() {
        let v = Validation::<_, Vec<&str>>::success(42);
        assert!(v.is_success());
        assert!(!v.is_failure());
    }

    #[test]
    fn test_failure() {
        let v = Validation::<i32, _>::failure(vec!["error"]);
        assert!(v.is_failure());
        assert!(!v.is_success());
    }

    #[test]
    fn test_from_result_roundtrip() {
        let ok = Validation::from_result(Ok::<_, String>(1));
        assert_eq!(ok.into_result(), Ok(1));

        let err = Validation::from_result(Err::<i32, _>("bad".to_string()));
        assert_eq!(err.into_result(), Err("bad".to_string()));
    }

    #[test]
    fn test_map_on_failure_is_untouched() {
        let v = Validation::<i32, _>::failure(vec!["error"]);
        assert_eq!(v.map(|x| x * 2), Validation::Failure(vec!["error"]));
    }

    #[test]
    fn test_map_err_on_failure() {
        let v = Validation::<i32, _>::failure(vec!["a", "b"]);
        assert_eq!(v.map_err(|e| e.len()), Validation::Failure(2));
    }

    #[test]
    fn test_and_both_success() {
        let v1 = Validation::<_, Vec<&str>>::success(1);
        let v2 = Validation::<_, Vec<&str>>::success("x");
        assert_eq!(v1.and(v2), Validation::Success((1, "x")));
    }

    #[test]
    fn test_and_both_failure() {
        let v1 = Validation::<i32, _>::failure(vec!["error1"]);
        let v2 = Validation::<i32, _>::failure(vec!["error2"]);
        assert_eq!(v1.and(v2), Validation::Failure(vec!["error1", "error2"]));
    }

    #[test]
    fn test_and_second_failure() {
        let v1 = Validation::<_, Vec<&str>>::success(1);
        let v2 = Validation::<i32, _>::failure(vec!["error2"]);
        assert_eq!(v1.and(v2), Validation::Failure(vec!["error2"]));
    }

    #[test]
    fn test_and_then_short_circuits() {
        let v = Validation::<i32, _>::failure(vec!["first"]);
        let result = v.and_then(|_| Validation::<i32, _>::failure(vec!["never"]));
        assert_eq!(result, Validation::Failure(vec!["first"]));
    }

    #[test]
    fn test_all_iter_empty() {
        let result = Validation::<i32, Vec<&str>>::all_iter(Vec::new());
        assert_eq!(result, Validation::Success(vec![]));
    }

    #[test]
    fn test_all_iter_all_success() {
        let result = Validation::<_, Vec<&str>>::all_iter(vec![
            Validation::success(1),
            Validation::success(2),
        ]);
        assert_eq!(result, Validation::Success(vec![1, 2]));
    }

    #[test]
    fn test_all_iter_collects_every_failure() {
        let result = Validation::all_iter(vec![
            Validation::<i32, _>::failure(vec!["a"]),
            Validation::failure(vec!["b"]),
            Validation::failure(vec!["c"]),
        ]);
        assert_eq!(result, Validation::Failure(vec!["a", "b", "c"]));
    }
}
