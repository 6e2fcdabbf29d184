// SPDX-License-Identifier: MPL-2.0
//! Contact form.

use super::{has_min_chars, Field, ValidationErrors};
use crate::config::defaults::{
    MESSAGE_SOFT_LIMIT, MESSAGE_WARNING_THRESHOLD, MIN_MESSAGE_CHARS, MIN_NAME_CHARS,
    MIN_PHONE_CHARS, MIN_SUBJECT_CHARS,
};
use regex::Regex;
use std::sync::LazyLock;

pub const NAME_TOO_SHORT_KEY: &str = "form-error-name-too-short";
pub const EMAIL_INVALID_KEY: &str = "form-error-email-invalid";
pub const PHONE_INVALID_KEY: &str = "form-error-phone-invalid";
pub const SUBJECT_TOO_SHORT_KEY: &str = "form-error-subject-too-short";
pub const MESSAGE_TOO_SHORT_KEY: &str = "form-error-message-too-short";

/// Loose email shape: something, `@`, something, `.`, something.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email regex should compile"));

/// Values typed into the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// Checks every rule and returns all failures in field order.
    #[must_use]
    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();

        if !has_min_chars(&self.name, MIN_NAME_CHARS) {
            errors.push(Field::Name, NAME_TOO_SHORT_KEY);
        }
        if !is_valid_email(&self.email) {
            errors.push(Field::Email, EMAIL_INVALID_KEY);
        }
        if !has_min_chars(&self.phone, MIN_PHONE_CHARS) {
            errors.push(Field::Phone, PHONE_INVALID_KEY);
        }
        if !has_min_chars(&self.subject, MIN_SUBJECT_CHARS) {
            errors.push(Field::Subject, SUBJECT_TOO_SHORT_KEY);
        }
        if !has_min_chars(&self.message, MIN_MESSAGE_CHARS) {
            errors.push(Field::Message, MESSAGE_TOO_SHORT_KEY);
        }

        errors
    }

    /// Clears every field after a successful send.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Character counter shown under the message field.
    #[must_use]
    pub fn message_counter(&self) -> MessageCounter {
        MessageCounter::for_text(&self.message)
    }
}

#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// State of the `n/500 characters` counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageCounter {
    pub length: usize,
    pub limit: usize,
    /// Highlight the counter: the visitor is close to the limit.
    pub warning: bool,
}

impl MessageCounter {
    #[must_use]
    pub fn for_text(text: &str) -> Self {
        let length = text.chars().count();
        Self {
            length,
            limit: MESSAGE_SOFT_LIMIT,
            warning: length > MESSAGE_WARNING_THRESHOLD,
        }
    }
}
