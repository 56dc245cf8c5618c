//! Predicate combinators for field presence checks
//!
//! The exclusive-presence rule is "first name present XOR nickname present".
//! This module supplies the pieces it is assembled from: the `Predicate`
//! trait, the logical combinators, and predicates over optional values and
//! form fields.
//!
//! # Example
//!
//! ```rust
//! use exclusive_name::{Field, FormValues};
//! use exclusive_name::predicate::*;
//!
//! let exactly_one = field_present(Field::FirstName).xor(field_present(Field::NickName));
//!
//! assert!(exactly_one.check(&FormValues::new().with_first_name("Ada")));
//! assert!(!exactly_one.check(&FormValues::new()));
//! ```

mod combinators;
mod presence;

pub use combinators::{And, Not, Or, Predicate, PredicateExt, Xor};
pub use presence::{absent, field_absent, field_present, present, Absent, FieldPresent, Present};
