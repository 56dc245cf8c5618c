//! The record handed to the validator

use crate::Field;

/// Values collected from the form.
///
/// `None` means the field is absent. Any `Some`, including `Some("")`, is
/// present.
///
/// With the `serde` feature the record reads and writes the camelCase keys the
/// form-binding layer uses; a missing key and `null` both mean absent.
///
/// # Example
///
/// ```
/// use exclusive_name::{Field, FormValues};
///
/// let values = FormValues::new().with_first_name("Ada");
/// assert!(values.is_present(Field::FirstName));
/// assert!(!values.is_present(Field::NickName));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct FormValues {
    /// `firstName`
    #[cfg_attr(feature = "serde", serde(default))]
    pub first_name: Option<String>,
    /// `nickName`
    #[cfg_attr(feature = "serde", serde(default))]
    pub nick_name: Option<String>,
}

impl FormValues {
    /// Both fields absent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from the two raw optional values.
    pub fn from_parts(first_name: Option<String>, nick_name: Option<String>) -> Self {
        Self {
            first_name,
            nick_name,
        }
    }

    /// Set `firstName`.
    pub fn with_first_name(mut self, value: impl Into<String>) -> Self {
        self.first_name = Some(value.into());
        self
    }

    /// Set `nickName`.
    pub fn with_nick_name(mut self, value: impl Into<String>) -> Self {
        self.nick_name = Some(value.into());
        self
    }

    /// Borrow the value of `field`.
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::FirstName => self.first_name.as_deref(),
            Field::NickName => self.nick_name.as_deref(),
        }
    }

    /// Replace the value of `field`, returning the previous one.
    pub fn set(&mut self, field: Field, value: Option<String>) -> Option<String> {
        let slot = match field {
            Field::FirstName => &mut self.first_name,
            Field::NickName => &mut self.nick_name,
        };
        std::mem::replace(slot, value)
    }

    /// Whether `field` holds a value (the empty string counts).
    pub fn is_present(&self, field: Field) -> bool {
        self.get(field).is_some()
    }

    /// The same record with the two fields exchanged.
    pub fn swapped(self) -> Self {
        Self {
            first_name: self.nick_name,
            nick_name: self.first_name,
        }
    }
}
