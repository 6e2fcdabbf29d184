// SPDX-License-Identifier: MPL-2.0
//! Contact and booking submission workflow.
//!
//! Validate, send once, report the outcome through a notification. A failed
//! send keeps everything the visitor typed so they can try again.

use super::port::{FormSubmitter, SubmissionRequest, SubmitError};
use crate::domain::forms::{BookingForm, ContactForm, ValidationErrors};
use crate::ui::notifications::{Manager, Notification};
use chrono::NaiveDate;

pub const CONTACT_SUCCESS_KEY: &str = "notification-contact-success";
pub const CONTACT_ERROR_KEY: &str = "notification-contact-error";
pub const BOOKING_SUCCESS_KEY: &str = "notification-booking-success";
pub const BOOKING_ERROR_KEY: &str = "notification-booking-error";

/// Result of one submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The backend accepted the form; it has been cleared.
    Sent,
    /// Validation failed; nothing was sent.
    Rejected(ValidationErrors),
    /// The send failed; the form is untouched.
    Failed(SubmitError),
}

impl SubmitOutcome {
    #[must_use]
    pub fn is_sent(&self) -> bool {
        matches!(self, Self::Sent)
    }
}

/// Validates and sends the contact form.
pub async fn submit_contact<S: FormSubmitter>(
    submitter: &S,
    form: &mut ContactForm,
    notifications: &mut Manager,
) -> SubmitOutcome {
    if let Err(errors) = form.validate().into_result() {
        log::debug!("contact form rejected: {:?}", errors.keys());
        return SubmitOutcome::Rejected(errors);
    }

    let request = SubmissionRequest::from(&*form);
    match submitter.submit(&request).await {
        Ok(()) => {
            log::info!("contact message sent");
            form.clear();
            notifications.clear_form_errors();
            notifications.push(Notification::success(CONTACT_SUCCESS_KEY));
            SubmitOutcome::Sent
        }
        Err(err) => {
            log::warn!("contact message failed: {err}");
            notifications.push(Notification::error(CONTACT_ERROR_KEY));
            SubmitOutcome::Failed(err)
        }
    }
}

/// Validates and sends the booking form. `today` bounds the booking date.
pub async fn submit_booking<S: FormSubmitter>(
    submitter: &S,
    form: &mut BookingForm,
    today: NaiveDate,
    notifications: &mut Manager,
) -> SubmitOutcome {
    if let Err(errors) = form.validate(today).into_result() {
        log::debug!("booking form rejected: {:?}", errors.keys());
        return SubmitOutcome::Rejected(errors);
    }

    let request = SubmissionRequest::from(&*form);
    match submitter.submit(&request).await {
        Ok(()) => {
            let guests = form.guests.trim().to_string();
            let date = form.date.trim().to_string();
            log::info!("booking sent for {guests} guests on {date}");
            form.reset(today);
            notifications.clear_form_errors();
            notifications.push(
                Notification::success(BOOKING_SUCCESS_KEY)
                    .with_arg("guests", guests)
                    .with_arg("date", date),
            );
            SubmitOutcome::Sent
        }
        Err(err) => {
            log::warn!("booking failed: {err}");
            notifications.push(Notification::error(BOOKING_ERROR_KEY));
            SubmitOutcome::Failed(err)
        }
    }
}
