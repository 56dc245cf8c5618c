//! # exclusive-name
//!
//! A pure validation rule for a two-field form: the user must give a first
//! name **or** a nickname, never both and never neither.
//!
//! The rule is a plain value, the record it checks is plain data, and every
//! violation is returned as a per-field error map rather than raised. Form
//! plumbing (touched tracking, submit gating) lives in [`form`]; rendering is
//! left to the caller.
//!
//! ## Quick Example
//!
//! ```rust
//! use exclusive_name::{validate, Field, FormValues};
//!
//! // Exactly one field: valid
//! assert!(validate(&FormValues::new().with_first_name("Ada")).is_valid());
//!
//! // Both fields: the message lands on both
//! let errors = validate(&FormValues::new().with_first_name("Ada").with_nick_name("ace"));
//! for field in Field::ALL {
//!     assert_eq!(
//!         errors.get(field),
//!         Some("you cannot provide both firstName and nickName"),
//!     );
//! }
//! ```
//!
//! ## Features
//!
//! - `serde`: (de)serialize [`FormValues`], [`Field`] and [`FieldErrors`]
//!   using the camelCase keys of the form layer.
//! - `tracing`: emit `debug` events when the rule fires and when a form is
//!   submitted.
//! - `proptest`: `Arbitrary` implementations for property tests.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod errors;
pub mod field;
pub mod form;
pub mod predicate;
pub mod rule;
pub mod semigroup;
pub mod testing;
pub mod validation;
pub mod values;

// Re-exports
pub use errors::{FieldErrors, Violation};
pub use field::Field;
pub use rule::{validate, validate_async, ExclusivePresence, Rule};
pub use semigroup::Semigroup;
pub use validation::Validation;
pub use values::FormValues;

/// The outcome of [`validate`]: an empty map means valid.
pub type ValidationResult = FieldErrors;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::errors::{FieldErrors, Messages, Violation};
    pub use crate::field::Field;
    pub use crate::form::FormState;
    pub use crate::rule::{validate, validate_async, ExclusivePresence, Rule};
    pub use crate::semigroup::Semigroup;
    pub use crate::validation::Validation;
    pub use crate::values::FormValues;
    pub use crate::ValidationResult;
}
