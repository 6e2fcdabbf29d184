// SPDX-License-Identifier: MPL-2.0
//! Toast content: what to say and how urgent it is.
//!
//! Identity and display timing belong to the [`Manager`](super::Manager),
//! which stamps each toast when it accepts it and again when it is shown.

use crate::config::{NOTIFICATION_LONG_SECS, NOTIFICATION_SHORT_SECS};
use std::time::Duration;

/// Handle returned by [`Manager::push`](super::Manager::push).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(pub(super) u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Success,
    Info,
    Warning,
    Error,
}

impl Severity {
    /// Style suffix used by the page (`notification-<name>`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }

    /// Time on screen once shown. Every toast leaves on its own.
    #[must_use]
    pub fn dismiss_after(self) -> Duration {
        match self {
            Severity::Success | Severity::Info => Duration::from_secs(NOTIFICATION_SHORT_SECS),
            Severity::Warning | Severity::Error => Duration::from_secs(NOTIFICATION_LONG_SECS),
        }
    }
}

/// A message for the visitor, resolved through i18n at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    severity: Severity,
    message_key: String,
    message_args: Vec<(String, String)>,
}

impl Notification {
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            severity,
            message_key: message_key.into(),
            message_args: Vec::new(),
        }
    }

    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, message_key)
    }

    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    /// Adds a named Fluent argument (`{ $key }` in the message).
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.message_args.push((key.into(), value.to_string()));
        self
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn message_args(&self) -> &[(String, String)] {
        &self.message_args
    }
}
