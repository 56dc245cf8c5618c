//! Form state around a rule
//!
//! `FormState` is the UI-independent half of a form: it owns the current
//! values, remembers which fields the user has touched, and decides which
//! errors are worth showing. Rendering stays with the caller.
//!
//! Errors are always computed over the whole record, but a field only
//! displays its error after it has been touched. Submitting touches every
//! field.
//!
//! There are two ways to change a value. [`FormState::input`] takes raw text
//! from an input widget and treats a cleared input as absent, so deleting a
//! nickname really removes it. [`FormState::set`] stores exactly what it is
//! given; `Some("")` stays present and the rule will see it that way.
//!
//! # Example
//!
//! ```
//! use exclusive_name::form::FormState;
//! use exclusive_name::{ExclusivePresence, Field};
//!
//! let mut form = FormState::new(ExclusivePresence::new());
//! assert!(form.visible_error(Field::FirstName).is_none());
//!
//! form.touch(Field::FirstName);
//! assert!(form.visible_error(Field::FirstName).is_some());
//!
//! form.set(Field::NickName, Some("ace".into()));
//! let submitted = form.submit(|values| values.nick_name.clone());
//! assert_eq!(submitted, Ok(Some("ace".to_string())));
//! ```

use std::collections::BTreeSet;

use crate::errors::FieldErrors;
use crate::rule::Rule;
use crate::{Field, FormValues};

/// Values, touched fields and the rule that judges them.
#[derive(Debug, Clone)]
pub struct FormState<R> {
    initial: FormValues,
    values: FormValues,
    touched: BTreeSet<Field>,
    rule: R,
}

impl<R: Rule<FormValues>> FormState<R> {
    /// An empty, untouched form.
    pub fn new(rule: R) -> Self {
        Self::with_values(rule, FormValues::new())
    }

    /// A form pre-filled with `values`. Nothing is touched yet.
    ///
    /// `values` also become the baseline [`is_dirty`](Self::is_dirty)
    /// compares against and [`reset`](Self::reset) returns to.
    pub fn with_values(rule: R, values: FormValues) -> Self {
        Self {
            initial: values.clone(),
            values,
            touched: BTreeSet::new(),
            rule,
        }
    }

    /// Current values.
    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// Current value of `field`.
    pub fn value(&self, field: Field) -> Option<&str> {
        self.values.get(field)
    }

    /// The values the form started with.
    pub fn initial_values(&self) -> &FormValues {
        &self.initial
    }

    /// Store `value` as is. Does not mark the field touched; that happens
    /// on blur.
    pub fn set(&mut self, field: Field, value: Option<String>) -> Option<String> {
        self.values.set(field, value)
    }

    /// Store text typed into the input bound to `field`.
    ///
    /// An empty input means the user cleared the field, so it becomes absent.
    /// Anything else, whitespace included, is stored as present.
    ///
    /// ```
    /// use exclusive_name::form::FormState;
    /// use exclusive_name::{ExclusivePresence, Field};
    ///
    /// let mut form = FormState::new(ExclusivePresence::new());
    /// form.input(Field::NickName, "ace");
    /// form.input(Field::NickName, "");
    /// assert_eq!(form.value(Field::NickName), None);
    /// ```
    pub fn input(&mut self, field: Field, text: &str) -> Option<String> {
        if text.is_empty() {
            self.set(field, None)
        } else {
            self.set(field, Some(text.to_string()))
        }
    }

    /// Whether `field` differs from its initial value.
    pub fn is_dirty(&self, field: Field) -> bool {
        self.values.get(field) != self.initial.get(field)
    }

    /// Mark `field` as interacted with.
    pub fn touch(&mut self, field: Field) {
        self.touched.insert(field);
    }

    /// Whether the user has interacted with `field`.
    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    /// Every error for the current values, touched or not.
    pub fn errors(&self) -> FieldErrors {
        self.rule.errors(&self.values)
    }

    /// True when the current values pass the rule.
    pub fn is_valid(&self) -> bool {
        self.rule.check(&self.values).is_success()
    }

    /// The error to show beneath `field`, if it has one and is touched.
    pub fn visible_error(&self, field: Field) -> Option<String> {
        if !self.is_touched(field) {
            return None;
        }
        self.errors().get(field).map(str::to_string)
    }

    /// All errors that should currently be displayed.
    pub fn visible_errors(&self) -> FieldErrors {
        self.errors().retain(|field| self.is_touched(field))
    }

    /// Touch every field, validate, and hand the values to `handler` if they
    /// pass. On failure the handler is not called and the full error map is
    /// returned.
    pub fn submit<T, F>(&mut self, handler: F) -> Result<T, FieldErrors>
    where
        F: FnOnce(&FormValues) -> T,
    {
        self.touched.extend(Field::ALL);

        match self.rule.check(&self.values).into_result() {
            Ok(()) => {
                #[cfg(feature = "tracing")]
                tracing::debug!("form submitted");

                Ok(handler(&self.values))
            }
            Err(errors) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(fields = errors.len(), "form submission rejected");

                Err(errors)
            }
        }
    }

    /// Return to the initial values and forget touched fields.
    pub fn reset(&mut self) {
        self.values = self.initial.clone();
        self.touched.clear();
    }
}
