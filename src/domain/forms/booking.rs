// SPDX-License-Identifier: MPL-2.0
//! Table booking form.

use super::{Field, ValidationErrors};
use chrono::{Days, NaiveDate};

pub const NAME_REQUIRED_KEY: &str = "form-error-name-required";
pub const PHONE_REQUIRED_KEY: &str = "form-error-phone-required";
pub const DATE_REQUIRED_KEY: &str = "form-error-date-required";
pub const DATE_INVALID_KEY: &str = "form-error-date-invalid";
pub const DATE_IN_PAST_KEY: &str = "form-error-date-past";
pub const TIME_REQUIRED_KEY: &str = "form-error-time-required";
pub const GUESTS_REQUIRED_KEY: &str = "form-error-guests-required";
pub const GUESTS_INVALID_KEY: &str = "form-error-guests-invalid";

/// Date format used by the booking date input.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Values typed into the booking form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingForm {
    pub name: String,
    pub phone: String,
    /// `YYYY-MM-DD`.
    pub date: String,
    pub time: String,
    pub guests: String,
}

impl BookingForm {
    /// Creates an empty form with the date preset to the day after `today`.
    #[must_use]
    pub fn new(today: NaiveDate) -> Self {
        Self {
            date: default_date(today),
            ..Self::default()
        }
    }

    /// Checks every rule and returns all failures in field order.
    ///
    /// `today` is the earliest date that can be booked.
    #[must_use]
    pub fn validate(&self, today: NaiveDate) -> ValidationErrors {
        let mut errors = ValidationErrors::new();

        if self.name.trim().is_empty() {
            errors.push(Field::Name, NAME_REQUIRED_KEY);
        }
        if self.phone.trim().is_empty() {
            errors.push(Field::Phone, PHONE_REQUIRED_KEY);
        }
        let date = self.date.trim();
        if date.is_empty() {
            errors.push(Field::Date, DATE_REQUIRED_KEY);
        } else {
            match NaiveDate::parse_from_str(date, DATE_FORMAT) {
                Ok(parsed) if parsed < today => errors.push(Field::Date, DATE_IN_PAST_KEY),
                Ok(_) => {}
                Err(_) => errors.push(Field::Date, DATE_INVALID_KEY),
            }
        }
        if self.time.trim().is_empty() {
            errors.push(Field::Time, TIME_REQUIRED_KEY);
        }
        let guests = self.guests.trim();
        if guests.is_empty() {
            errors.push(Field::Guests, GUESTS_REQUIRED_KEY);
        } else if !matches!(guests.parse::<u32>(), Ok(n) if n > 0) {
            errors.push(Field::Guests, GUESTS_INVALID_KEY);
        }

        errors
    }

    /// Clears the form after a successful booking and presets the date again.
    pub fn reset(&mut self, today: NaiveDate) {
        *self = Self::new(today);
    }
}

/// The date input defaults to tomorrow.
#[must_use]
pub fn default_date(today: NaiveDate) -> String {
    today
        .checked_add_days(Days::new(1))
        .unwrap_or(today)
        .format(DATE_FORMAT)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn valid_form() -> BookingForm {
        BookingForm {
            name: "Sipho".into(),
            phone: "0821234567".into(),
            date: "2026-10-24".into(),
            time: "19:00".into(),
            guests: "4".into(),
        }
    }

    #[test]
    fn new_form_defaults_to_tomorrow() {
        let form = BookingForm::new(today());
        assert_eq!(form.date, "2026-10-20");
        assert!(form.name.is_empty());
    }

    #[test]
    fn default_date_rolls_over_month_end() {
        let last_day = NaiveDate::from_ymd_opt(2026, 12, 31).unwrap();
        assert_eq!(default_date(last_day), "2027-01-01");
    }

    #[test]
    fn valid_form_has_no_errors() {
        assert!(valid_form().validate(today()).is_empty());
    }

    #[test]
    fn booking_today_is_allowed() {
        let form = BookingForm {
            date: "2026-10-19".into(),
            ..valid_form()
        };
        assert!(form.validate(today()).is_empty());
    }

    #[test]
    fn empty_form_reports_required_fields() {
        let errors = BookingForm::default().validate(today());
        assert_eq!(
            errors.keys(),
            vec![
                NAME_REQUIRED_KEY,
                PHONE_REQUIRED_KEY,
                DATE_REQUIRED_KEY,
                TIME_REQUIRED_KEY,
                GUESTS_REQUIRED_KEY,
            ]
        );
    }

    #[test]
    fn past_date_is_rejected() {
        let form = BookingForm {
            date: "2026-10-18".into(),
            ..valid_form()
        };
        assert_eq!(form.validate(today()).keys(), vec![DATE_IN_PAST_KEY]);
    }

    #[test]
    fn malformed_date_is_rejected() {
        let form = BookingForm {
            date: "19/10/2026".into(),
            ..valid_form()
        };
        assert_eq!(form.validate(today()).keys(), vec![DATE_INVALID_KEY]);
    }

    #[test]
    fn guests_must_be_a_positive_number() {
        for guests in ["0", "-2", "a few", "2.5"] {
            let form = BookingForm {
                guests: guests.into(),
                ..valid_form()
            };
            assert_eq!(form.validate(today()).keys(), vec![GUESTS_INVALID_KEY]);
        }
    }

    #[test]
    fn reset_clears_and_presets_date() {
        let mut form = valid_form();
        form.reset(today());
        assert_eq!(form, BookingForm::new(today()));
    }
}
