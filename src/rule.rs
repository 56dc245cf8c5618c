//! The exclusive-presence rule
//!
//! Exactly one of `firstName` and `nickName` must be present. When the rule
//! is broken, the same message is reported on both fields so the UI can show
//! it beneath either input:
//!
//! | firstName | nickName | result |
//! |-----------|----------|--------|
//! | absent    | absent   | both fields: [`BOTH_ABSENT_MESSAGE`](crate::errors::BOTH_ABSENT_MESSAGE) |
//! | present   | absent   | valid |
//! | absent    | present  | valid |
//! | present   | present  | both fields: [`BOTH_PRESENT_MESSAGE`](crate::errors::BOTH_PRESENT_MESSAGE) |
//!
//! Content is never inspected: `Some("")` is present.
//!
//! # Example
//!
//! ```
//! use exclusive_name::{validate, Field, FormValues};
//!
//! assert!(validate(&FormValues::new().with_nick_name("ace")).is_valid());
//!
//! let errors = validate(&FormValues::new());
//! assert_eq!(
//!     errors.get(Field::FirstName),
//!     Some("you must provide either a firstName or a nickName"),
//! );
//! ```

use futures::future::{ready, Ready};

use crate::errors::{FieldErrors, Messages, Violation};
use crate::predicate::{field_present, Predicate, PredicateExt};
use crate::{Field, FormValues, Validation};

/// A stateless check over a record of form values.
///
/// Rules are plain values: construct one and hand it to whatever needs to
/// validate, such as [`FormState`](crate::form::FormState).
pub trait Rule<V>: Send + Sync {
    /// Run the rule. Every violated field is reported at once.
    fn check(&self, values: &V) -> Validation<(), FieldErrors>;

    /// Run the rule and return the error map directly (empty when valid).
    fn errors(&self, values: &V) -> FieldErrors {
        match self.check(values) {
            Validation::Success(()) => FieldErrors::new(),
            Validation::Failure(errors) => errors,
        }
    }
}

/// "firstName or nickName, never both."
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusivePresence {
    messages: Messages,
}

impl ExclusivePresence {
    /// The rule with the canonical messages.
    pub fn new() -> Self {
        Self::default()
    }

    /// The rule reporting `messages` instead of the canonical ones.
    ///
    /// ```
    /// use exclusive_name::errors::Messages;
    /// use exclusive_name::{ExclusivePresence, Field, FormValues, Rule};
    ///
    /// let rule = ExclusivePresence::with_messages(Messages {
    ///     both_absent: "tell us what to call you".into(),
    ///     both_present: "one name is enough".into(),
    /// });
    /// let errors = rule.errors(&FormValues::new());
    /// assert_eq!(errors.get(Field::NickName), Some("tell us what to call you"));
    /// ```
    pub fn with_messages(messages: Messages) -> Self {
        Self { messages }
    }

    /// The messages this rule reports.
    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    /// Which violation, if any, `values` commits.
    pub fn classify(values: &FormValues) -> Option<Violation> {
        let has_first = field_present(Field::FirstName);
        let exactly_one = has_first.xor(field_present(Field::NickName));
        if exactly_one.check(values) {
            None
        } else if values.is_present(Field::FirstName) {
            Some(Violation::BothPresent)
        } else {
            Some(Violation::BothAbsent)
        }
    }
}

impl Rule<FormValues> for ExclusivePresence {
    fn check(&self, values: &FormValues) -> Validation<(), FieldErrors> {
        match Self::classify(values) {
            None => Validation::success(()),
            Some(violation) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(?violation, "exclusive presence violated");

                Validation::failure(FieldErrors::from_violation_with(violation, &self.messages))
            }
        }
    }
}

/// Validate `values` with the canonical messages.
///
/// Never fails: violations come back as the returned map, which is empty when
/// the values are acceptable.
pub fn validate(values: &FormValues) -> FieldErrors {
    ExclusivePresence::classify(values)
        .map(FieldErrors::from_violation)
        .unwrap_or_default()
}

/// Awaitable form of [`validate`] for form-binding code that expects an async
/// validator. Resolves immediately.
///
/// ```
/// use exclusive_name::{validate_async, FormValues};
///
/// # tokio_test::block_on(async {
/// let errors = validate_async(&FormValues::new().with_first_name("a")).await;
/// assert!(errors.is_valid());
/// # });
/// ```
pub fn validate_async(values: &FormValues) -> Ready<FieldErrors> {
    ready(validate(values))
}
