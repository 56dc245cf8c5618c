//! Property-based tests for the exclusive-presence rule

use exclusive_name::errors::{BOTH_ABSENT_MESSAGE, BOTH_PRESENT_MESSAGE};
use exclusive_name::{
    validate, ExclusivePresence, Field, FieldErrors, FormValues, Semigroup, Violation,
};
use proptest::prelude::*;

fn form_values() -> impl Strategy<Value = FormValues> {
    (any::<Option<String>>(), any::<Option<String>>())
        .prop_map(|(first, nick)| FormValues::from_parts(first, nick))
}

fn field() -> impl Strategy<Value = Field> {
    prop_oneof![Just(Field::FirstName), Just(Field::NickName)]
}

fn field_errors() -> impl Strategy<Value = FieldErrors> {
    prop::collection::vec((field(), ".*"), 0..4)
        .prop_map(|entries| entries.into_iter().collect())
}

proptest! {
    #[test]
    fn prop_first_name_alone_is_valid(s in any::<String>()) {
        prop_assert!(validate(&FormValues::new().with_first_name(s)).is_valid());
    }

    #[test]
    fn prop_nick_name_alone_is_valid(s in any::<String>()) {
        prop_assert!(validate(&FormValues::new().with_nick_name(s)).is_valid());
    }

    #[test]
    fn prop_both_present_always_fails(a in any::<String>(), b in any::<String>()) {
        let errors = validate(&FormValues::new().with_first_name(a).with_nick_name(b));
        prop_assert_eq!(errors.len(), 2);
        prop_assert_eq!(errors.get(Field::FirstName), Some(BOTH_PRESENT_MESSAGE));
        prop_assert_eq!(errors.get(Field::NickName), Some(BOTH_PRESENT_MESSAGE));
    }

    #[test]
    fn prop_idempotent(values in form_values()) {
        prop_assert_eq!(validate(&values), validate(&values));
    }

    #[test]
    fn prop_symmetric(values in form_values()) {
        prop_assert_eq!(
            ExclusivePresence::classify(&values),
            ExclusivePresence::classify(&values.clone().swapped())
        );
        prop_assert_eq!(validate(&values), validate(&values.swapped()));
    }

    #[test]
    fn prop_reports_all_fields_or_none(values in form_values()) {
        let errors = validate(&values);
        match ExclusivePresence::classify(&values) {
            None => prop_assert!(errors.is_valid()),
            Some(violation) => {
                for field in Field::ALL {
                    prop_assert_eq!(errors.get(field), Some(violation.message()));
                }
            }
        }
    }

    #[test]
    fn prop_valid_iff_exactly_one_present(values in form_values()) {
        let exactly_one = values.first_name.is_some() != values.nick_name.is_some();
        prop_assert_eq!(validate(&values).is_valid(), exactly_one);
    }

    #[test]
    fn prop_field_errors_combine_associative(
        a in field_errors(),
        b in field_errors(),
        c in field_errors(),
    ) {
        let left = a.clone().combine(b.clone()).combine(c.clone());
        let right = a.combine(b.combine(c));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_field_errors_combine_right_wins(a in field_errors(), b in field_errors()) {
        let combined = a.clone().combine(b.clone());
        for field in Field::ALL {
            let expected = b.get(field).or_else(|| a.get(field));
            prop_assert_eq!(combined.get(field), expected);
        }
    }
}

#[test]
fn both_absent_is_the_only_empty_case() {
    let errors = validate(&FormValues::new());
    assert_eq!(errors, FieldErrors::from_violation(Violation::BothAbsent));
    assert_eq!(errors.get(Field::NickName), Some(BOTH_ABSENT_MESSAGE));
}
