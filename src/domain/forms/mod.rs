// SPDX-License-Identifier: MPL-2.0
//! Contact and booking forms.
//!
//! Validation collects every failing rule at once so the visitor sees the
//! whole list before anything is sent. Each failure carries an i18n key;
//! the wording lives in the translation files.

pub mod booking;
pub mod contact;

pub use booking::BookingForm;
pub use contact::{ContactForm, MessageCounter};

use std::fmt;

/// A form field that can fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Subject,
    Message,
    Date,
    Time,
    Guests,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Subject => "subject",
            Field::Message => "message",
            Field::Date => "date",
            Field::Time => "time",
            Field::Guests => "guests",
        };
        f.write_str(name)
    }
}

/// One failed validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    /// i18n key of the message shown to the visitor.
    pub key: &'static str,
}

/// Ordered list of validation failures; empty means the form is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: Field, key: &'static str) {
        self.errors.push(FieldError { field, key });
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// Returns `true` if `field` failed at least one rule.
    #[must_use]
    pub fn has(&self, field: Field) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// Message keys in rule order.
    #[must_use]
    pub fn keys(&self) -> Vec<&'static str> {
        self.errors.iter().map(|e| e.key).collect()
    }

    /// Converts to `Ok(())` when empty.
    ///
    /// # Errors
    ///
    /// Returns `self` when at least one rule failed.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// Minimum trimmed length check shared by both forms.
pub(crate) fn has_min_chars(value: &str, min: usize) -> bool {
    value.trim().chars().count() >= min
}
