//! Testing utilities
//!
//! Assertion macros for validation results and error maps, and (behind the
//! `proptest` feature) `Arbitrary` implementations for the crate's types.
//!
//! # Examples
//!
//! ```rust
//! use exclusive_name::{assert_field_errors, assert_invalid, assert_valid};
//! use exclusive_name::{validate, Field, FormValues, Violation};
//!
//! assert_valid!(validate(&FormValues::new().with_first_name("a")));
//! assert_invalid!(validate(&FormValues::new()));
//! assert_field_errors!(
//!     validate(&FormValues::new()),
//!     Violation::BothAbsent.message(),
//!     [Field::FirstName, Field::NickName]
//! );
//! ```

/// Assert that a [`FieldErrors`](crate::FieldErrors) map is empty.
#[macro_export]
macro_rules! assert_valid {
    ($errors:expr) => {{
        let errors: $crate::FieldErrors = $errors;
        if !errors.is_valid() {
            panic!("Expected valid, got errors: {:?}", errors);
        }
    }};
}

/// Assert that a [`FieldErrors`](crate::FieldErrors) map has at least one entry.
#[macro_export]
macro_rules! assert_invalid {
    ($errors:expr) => {{
        let errors: $crate::FieldErrors = $errors;
        if errors.is_valid() {
            panic!("Expected errors, got a valid result");
        }
    }};
}

/// Assert that exactly the listed fields carry `message`, and nothing else
/// has an error.
#[macro_export]
macro_rules! assert_field_errors {
    ($errors:expr, $message:expr, [$($field:expr),+ $(,)?]) => {{
        let errors: $crate::FieldErrors = $errors;
        let message: &str = $message;
        let expected: ::std::vec::Vec<$crate::Field> = vec![$($field),+];
        for field in &expected {
            match errors.get(*field) {
                Some(actual) => assert_eq!(actual, message, "wrong message on {}", field),
                None => panic!("Expected error on {}, got {:?}", field, errors),
            }
        }
        assert_eq!(
            errors.len(),
            expected.len(),
            "unexpected extra errors: {:?}",
            errors
        );
    }};
}

#[cfg(feature = "proptest")]
mod arbitrary {
    use proptest::prelude::*;

    use crate::{Field, FormValues, Violation};

    impl Arbitrary for Field {
        type Parameters = ();
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
            prop_oneof![Just(Field::FirstName), Just(Field::NickName)].boxed()
        }
    }

    impl Arbitrary for Violation {
        type Parameters = ();
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
            prop_oneof![Just(Violation::BothAbsent), Just(Violation::BothPresent)].boxed()
        }
    }

    impl Arbitrary for FormValues {
        type Parameters = ();
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
            (any::<Option<String>>(), any::<Option<String>>())
                .prop_map(|(first, nick)| FormValues::from_parts(first, nick))
                .boxed()
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Field, FieldErrors, Violation};

    #[test]
    fn assert_valid_macro() {
        assert_valid!(FieldErrors::new());
    }

    #[test]
    fn assert_invalid_macro() {
        assert_invalid!(FieldErrors::single(Field::FirstName, "x"));
    }

    #[test]
    fn assert_field_errors_macro() {
        assert_field_errors!(
            FieldErrors::from_violation(Violation::BothPresent),
            Violation::BothPresent.message(),
            [Field::FirstName, Field::NickName]
        );
    }

    #[test]
    #[should_panic(expected = "Expected valid, got errors")]
    fn assert_valid_panics_on_errors() {
        assert_valid!(FieldErrors::single(Field::NickName, "x"));
    }

    #[test]
    #[should_panic(expected = "Expected errors, got a valid result")]
    fn assert_invalid_panics_on_valid() {
        assert_invalid!(FieldErrors::new());
    }

    #[test]
    #[should_panic(expected = "unexpected extra errors")]
    fn assert_field_errors_panics_on_extra_field() {
        assert_field_errors!(
            FieldErrors::from_violation(Violation::BothAbsent),
            Violation::BothAbsent.message(),
            [Field::FirstName]
        );
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use crate::{validate, FormValues};
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn arbitrary_values_always_validate_without_panicking(values in any::<FormValues>()) {
                let errors = validate(&values);
                prop_assert!(errors.is_empty() || errors.len() == 2);
            }
        }
    }
}
