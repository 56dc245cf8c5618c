//! Presence predicates
//!
//! A value is present when it is `Some`, whatever it holds. In particular the
//! empty string is present; emptiness is a content question these predicates
//! never ask.

use std::marker::PhantomData;

use super::combinators::Predicate;
use crate::{Field, FormValues};

/// Holds for `Some(_)`.
#[derive(Debug)]
pub struct Present<S>(PhantomData<fn() -> S>);

impl<S> Clone for Present<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for Present<S> {}

impl<S> Predicate<Option<S>> for Present<S> {
    #[inline]
    fn check(&self, value: &Option<S>) -> bool {
        value.is_some()
    }
}

/// Holds for `None`.
#[derive(Debug)]
pub struct Absent<S>(PhantomData<fn() -> S>);

impl<S> Clone for Absent<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for Absent<S> {}

impl<S> Predicate<Option<S>> for Absent<S> {
    #[inline]
    fn check(&self, value: &Option<S>) -> bool {
        value.is_none()
    }
}

/// Predicate that an optional value is present.
///
/// ```rust
/// use exclusive_name::predicate::*;
///
/// assert!(present::<String>().check(&Some(String::new())));
/// ```
pub fn present<S>() -> Present<S> {
    Present(PhantomData)
}

/// Predicate that an optional value is absent.
pub fn absent<S>() -> Absent<S> {
    Absent(PhantomData)
}

/// Holds when the named field of a [`FormValues`] is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPresent(pub Field);

impl Predicate<FormValues> for FieldPresent {
    #[inline]
    fn check(&self, values: &FormValues) -> bool {
        values.is_present(self.0)
    }
}

/// Predicate that `field` is present in the form values.
pub fn field_present(field: Field) -> FieldPresent {
    FieldPresent(field)
}

/// Predicate that `field` is absent from the form values.
pub fn field_absent(field: Field) -> super::Not<FieldPresent> {
    super::Not(FieldPresent(field))
}
