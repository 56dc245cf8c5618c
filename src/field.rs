//! Names of the validated form fields

use std::fmt;
use std::str::FromStr;

/// One of the two fields the exclusive-presence rule looks at.
///
/// The derived ordering follows declaration order, so error maps keyed by
/// `Field` always list `firstName` before `nickName`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Field {
    /// `firstName`
    #[cfg_attr(feature = "serde", serde(rename = "firstName"))]
    FirstName,
    /// `nickName`
    #[cfg_attr(feature = "serde", serde(rename = "nickName"))]
    NickName,
}

impl Field {
    /// Every field, in display order.
    pub const ALL: [Field; 2] = [Field::FirstName, Field::NickName];

    /// The key the form-binding layer uses for this field.
    ///
    /// ```
    /// use exclusive_name::Field;
    ///
    /// assert_eq!(Field::NickName.as_str(), "nickName");
    /// ```
    pub const fn as_str(self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::NickName => "nickName",
        }
    }

    /// The other field of the pair.
    pub const fn sibling(self) -> Field {
        match self {
            Field::FirstName => Field::NickName,
            Field::NickName => Field::FirstName,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Returned when a key does not name a validated field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownField(pub String);

impl fmt::Display for UnknownField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown field: {}", self.0)
    }
}

impl std::error::Error for UnknownField {}

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        assert_eq!(Field::FirstName.to_string(), "firstName");
        assert_eq!(Field::NickName.to_string(), "nickName");
    }

    #[test]
    fn test_parse() {
        assert_eq!("firstName".parse::<Field>(), Ok(Field::FirstName));
        assert_eq!("nickName".parse::<Field>(), Ok(Field::NickName));
        assert_eq!(
            "lastName".parse::<Field>(),
            Err(UnknownField("lastName".to_string()))
        );
    }

    #[test]
    fn test_sibling_is_involution() {
        for field in Field::ALL {
            assert_ne!(field.sibling(), field);
            assert_eq!(field.sibling().sibling(), field);
        }
    }

    #[test]
    fn test_ordering() {
        assert!(Field::FirstName < Field::NickName);
    }
}
