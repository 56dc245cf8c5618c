//! Violations of the exclusive-presence rule and the per-field error map
//!
//! Violations are data, not panics. [`ExclusivePresence`](crate::ExclusivePresence)
//! classifies a record into at most one [`Violation`] and spreads its message
//! over both fields in a [`FieldErrors`] map, which is what the UI layer
//! displays beneath each input.
//!
//! # Example
//!
//! ```
//! use exclusive_name::{Field, FieldErrors, Violation};
//!
//! let errors = FieldErrors::from_violation(Violation::BothPresent);
//! assert_eq!(
//!     errors.get(Field::NickName),
//!     Some("you cannot provide both firstName and nickName"),
//! );
//! ```

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::error::Error as StdError;
use std::fmt;

use crate::{Field, Semigroup, Validation};

/// Message attached to both fields when neither is filled in.
pub const BOTH_ABSENT_MESSAGE: &str = "you must provide either a firstName or a nickName";

/// Message attached to both fields when both are filled in.
pub const BOTH_PRESENT_MESSAGE: &str = "you cannot provide both firstName and nickName";

/// The two ways a record can break the exclusive-presence rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Violation {
    /// Neither `firstName` nor `nickName` was supplied.
    BothAbsent,
    /// `firstName` and `nickName` were both supplied.
    BothPresent,
}

impl Violation {
    /// The canonical user-facing message.
    pub const fn message(self) -> &'static str {
        match self {
            Violation::BothAbsent => BOTH_ABSENT_MESSAGE,
            Violation::BothPresent => BOTH_PRESENT_MESSAGE,
        }
    }

    /// Fields the violation is reported on. Always both.
    pub const fn fields(self) -> [Field; 2] {
        Field::ALL
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl StdError for Violation {}

/// Messages used when reporting each [`Violation`].
///
/// `Messages::default()` borrows the canonical English strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    /// Reported for [`Violation::BothAbsent`].
    pub both_absent: Cow<'static, str>,
    /// Reported for [`Violation::BothPresent`].
    pub both_present: Cow<'static, str>,
}

impl Messages {
    /// Pick the message for `violation`.
    pub fn for_violation(&self, violation: Violation) -> &str {
        match violation {
            Violation::BothAbsent => &self.both_absent,
            Violation::BothPresent => &self.both_present,
        }
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            both_absent: Cow::Borrowed(BOTH_ABSENT_MESSAGE),
            both_present: Cow::Borrowed(BOTH_PRESENT_MESSAGE),
        }
    }
}

/// Field name to error message. Empty means valid.
///
/// Holds at most one message per field. Combining two maps keeps every key;
/// when both carry the same field the message from the right-hand side wins.
///
/// With the `serde` feature this serializes as a JSON object keyed by
/// `"firstName"` / `"nickName"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FieldErrors {
    errors: BTreeMap<Field, String>,
}

impl FieldErrors {
    /// An empty (valid) map.
    pub fn new() -> Self {
        Self::default()
    }

    /// A map with a single entry.
    pub fn single(field: Field, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.insert(field, message);
        errors
    }

    /// The canonical report of `violation`: its message on every field.
    pub fn from_violation(violation: Violation) -> Self {
        Self::report(violation, violation.message())
    }

    /// Report `violation` on every field using the given messages.
    pub fn from_violation_with(violation: Violation, messages: &Messages) -> Self {
        Self::report(violation, messages.for_violation(violation))
    }

    fn report(violation: Violation, message: &str) -> Self {
        violation
            .fields()
            .into_iter()
            .map(|field| FieldErrors::single(field, message))
            .fold(FieldErrors::new(), Semigroup::combine)
    }

    /// Set the message for `field`, returning any previous message.
    pub fn insert(&mut self, field: Field, message: impl Into<String>) -> Option<String> {
        self.errors.insert(field, message.into())
    }

    /// The message for `field`, if it has one.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Whether `field` has an error.
    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    /// True when no field has an error.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of fields with an error.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Same as [`is_valid`](Self::is_valid).
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Entries in field order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.errors
            .iter()
            .map(|(field, msg)| (*field, msg.as_str()))
    }

    /// Fields with an error, in field order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.errors.keys().copied()
    }

    /// Keep only the entries whose field satisfies `keep`.
    pub fn retain(mut self, mut keep: impl FnMut(Field) -> bool) -> Self {
        self.errors.retain(|field, _| keep(*field));
        self
    }

    /// `Success(value)` when empty, otherwise `Failure(self)`.
    pub fn into_validation<T>(self, value: T) -> Validation<T, FieldErrors> {
        if self.is_valid() {
            Validation::success(value)
        } else {
            Validation::failure(self)
        }
    }
}

impl Semigroup for FieldErrors {
    fn combine(mut self, other: Self) -> Self {
        self.errors.extend(other.errors);
        self
    }
}

impl FromIterator<(Field, String)> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = (Field, String)>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for FieldErrors {
    type Item = (Field, String);
    type IntoIter = std::collections::btree_map::IntoIter<Field, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            return f.write_str("no field errors");
        }
        for (i, (field, message)) in self.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {}", field, message)?;
        }
        Ok(())
    }
}

impl StdError for FieldErrors {}
