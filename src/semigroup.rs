//! Semigroup trait for associative error accumulation
//!
//! Validation in this crate never stops at the first problem: every violated
//! field is reported in one pass. The `Semigroup` trait is what makes that
//! possible, describing how two bundles of errors merge into one.
//!
//! # Laws
//!
//! `combine` must be associative:
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```
//! use exclusive_name::{Field, FieldErrors, Semigroup};
//!
//! let v = vec!["first"].combine(vec!["second"]);
//! assert_eq!(v, vec!["first", "second"]);
//!
//! let a = FieldErrors::single(Field::FirstName, "too long");
//! let b = FieldErrors::single(Field::NickName, "taken");
//! let both = a.combine(b);
//! assert_eq!(both.len(), 2);
//! ```

/// A type that supports an associative binary operation
///
/// `combine` takes `self` by value. Clone beforehand if the originals are
/// still needed.
pub trait Semigroup: Sized {
    /// Combine this value with another value associatively
    ///
    /// # Examples
    ///
    /// ```
    /// use exclusive_name::Semigroup;
    ///
    /// let s = "first".to_string().combine("Name".to_string());
    /// assert_eq!(s, "firstName");
    /// ```
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl Semigroup for String {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_semigroup() {
        let v1 = vec!["a", "b"];
        let v2 = vec!["c"];
        assert_eq!(v1.combine(v2), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_vec_semigroup_empty() {
        let v1: Vec<&str> = vec![];
        assert_eq!(v1.combine(vec!["x"]), vec!["x"]);
    }

    #[test]
    fn test_string_semigroup() {
        let s = "you must ".to_string().combine("provide".to_string());
        assert_eq!(s, "you must provide");
    }

    #[test]
    fn test_vec_associativity() {
        let a = vec![1, 2];
        let b = vec![3];
        let c = vec![4, 5];

        let left = a.clone().combine(b.clone()).combine(c.clone());
        let right = a.combine(b.combine(c));

        assert_eq!(left, right);
    }

    #[test]
    fn test_string_associativity() {
        let a = "first".to_string();
        let b = "Name".to_string();
        let c = "!".to_string();

        let left = a.clone().combine(b.clone()).combine(c.clone());
        let right = a.combine(b.combine(c));

        assert_eq!(left, right);
    }
}
