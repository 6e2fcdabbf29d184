// SPDX-License-Identifier: MPL-2.0
//! Form submission port definition.
//!
//! This module defines the [`FormSubmitter`] trait and the JSON payloads
//! exchanged with the site backend.

use crate::config::{BOOKING_ENDPOINT, CONTACT_ENDPOINT};
use crate::domain::forms::{BookingForm, ContactForm};
use serde::{Deserialize, Serialize};
use std::future::Future;
use thiserror::Error;

// =============================================================================
// SubmitError
// =============================================================================

/// Errors that can occur while delivering a form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The backend answered `{"success": false}`.
    #[error("the server rejected the submission")]
    Rejected,

    /// The request never produced a response (connection, timeout, ...).
    #[error("request failed: {0}")]
    Transport(String),

    /// The backend answered with a non-success HTTP status.
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// The response body was not the expected JSON.
    #[error("invalid response body: {0}")]
    Decode(String),
}

// =============================================================================
// Payloads
// =============================================================================

/// Contact form fields as sent on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

/// Booking form fields as sent on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingPayload {
    pub name: String,
    pub phone: String,
    pub date: String,
    pub time: String,
    pub guests: String,
}

/// A form ready to be delivered.
///
/// Serializes to the form fields plus a `"type"` discriminator
/// (`"contact_form"` or `"table_booking"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SubmissionRequest {
    ContactForm(ContactPayload),
    TableBooking(BookingPayload),
}

impl SubmissionRequest {
    /// Backend script handling this request, relative to the site root.
    #[must_use]
    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::ContactForm(_) => CONTACT_ENDPOINT,
            Self::TableBooking(_) => BOOKING_ENDPOINT,
        }
    }
}

impl From<&ContactForm> for SubmissionRequest {
    fn from(form: &ContactForm) -> Self {
        Self::ContactForm(ContactPayload {
            name: form.name.clone(),
            email: form.email.clone(),
            phone: form.phone.clone(),
            subject: form.subject.clone(),
            message: form.message.clone(),
        })
    }
}

impl From<&BookingForm> for SubmissionRequest {
    fn from(form: &BookingForm) -> Self {
        Self::TableBooking(BookingPayload {
            name: form.name.clone(),
            phone: form.phone.clone(),
            date: form.date.clone(),
            time: form.time.clone(),
            guests: form.guests.clone(),
        })
    }
}

/// Backend answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub success: bool,
}

impl SubmitResponse {
    /// Maps `success: false` to [`SubmitError::Rejected`].
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::Rejected`] when the backend refused the form.
    pub fn into_result(self) -> Result<(), SubmitError> {
        if self.success {
            Ok(())
        } else {
            Err(SubmitError::Rejected)
        }
    }
}

// =============================================================================
// FormSubmitter Trait
// =============================================================================

/// Delivers validated forms to the site backend.
///
/// One call performs exactly one attempt.
pub trait FormSubmitter: Send + Sync {
    /// Sends `request` and waits for the backend verdict.
    fn submit(
        &self,
        request: &SubmissionRequest,
    ) -> impl Future<Output = Result<(), SubmitError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn contact_request_carries_type_discriminator() {
        let form = ContactForm {
            name: "Thandi".into(),
            email: "thandi@example.com".into(),
            phone: "0821234567".into(),
            subject: "Birthday".into(),
            message: "Table for a birthday party".into(),
        };
        let value = serde_json::to_value(SubmissionRequest::from(&form)).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "contact_form",
                "name": "Thandi",
                "email": "thandi@example.com",
                "phone": "0821234567",
                "subject": "Birthday",
                "message": "Table for a birthday party",
            })
        );
    }

    #[test]
    fn booking_request_targets_booking_script() {
        let form = BookingForm {
            name: "Sipho".into(),
            phone: "0821234567".into(),
            date: "2026-10-24".into(),
            time: "19:00".into(),
            guests: "4".into(),
        };
        let request = SubmissionRequest::from(&form);
        assert_eq!(request.endpoint(), BOOKING_ENDPOINT);

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["type"], "table_booking");
        assert_eq!(value["guests"], "4");
    }

    #[test]
    fn response_maps_to_result() {
        let ok: SubmitResponse = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert_eq!(ok.into_result(), Ok(()));
        let refused: SubmitResponse =
            serde_json::from_str(r#"{"success":false,"message":"nope"}"#).unwrap();
        assert_eq!(refused.into_result(), Err(SubmitError::Rejected));
    }
}
