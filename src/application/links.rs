// SPDX-License-Identifier: MPL-2.0
//! Outbound deep links: WhatsApp, phone, mail, maps.
//!
//! Every function returns a ready-to-open URL string; opening it is the
//! rendering layer's job.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;
use std::sync::LazyLock;

const WHATSAPP_BASE: &str = "https://wa.me/";
const MAPS_SEARCH: &str = "https://www.google.com/maps/search/?api=1&query=";

/// Characters left alone by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');
const DEFAULT_PAGE: &str = "index.html";

/// Text shared from the gallery when the platform has no share sheet.
pub const SHARE_TEXT: &str = "Check out this amazing photo from Eatery at Flamingo!";

static WHATSAPP_NUMBER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"wa\.me/\d+").expect("whatsapp regex should compile"));

/// Canned WhatsApp enquiries offered on the contact page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickContact {
    Reservation,
    Catering,
    Events,
    CarWash,
    General,
}

impl QuickContact {
    /// Maps a `data-contact-type` value; anything unknown is a general enquiry.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "reservation" => Self::Reservation,
            "catering" => Self::Catering,
            "events" => Self::Events,
            "carwash" => Self::CarWash,
            _ => Self::General,
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Reservation => {
                "Hi Eatery at Flamingo, I would like to make a reservation. Please provide available time slots."
            }
            Self::Catering => {
                "Hi Eatery at Flamingo, I am interested in your catering services. Please send me more information."
            }
            Self::Events => {
                "Hi Eatery at Flamingo, I would like to inquire about hosting an event at your venue."
            }
            Self::CarWash => {
                "Hi Eatery at Flamingo, I am interested in your car wash services. Please provide more details."
            }
            Self::General => {
                "Hi Eatery at Flamingo, I would like to get more information about your services."
            }
        }
    }
}

/// `https://wa.me/<number>`, with a prefilled message when `text` is given.
///
/// An empty `number` opens the WhatsApp contact picker.
#[must_use]
pub fn whatsapp_url(number: &str, text: Option<&str>) -> String {
    match text {
        Some(text) => format!("{WHATSAPP_BASE}{number}?text={}", encode_component(text)),
        None => format!("{WHATSAPP_BASE}{number}"),
    }
}

/// Percent-encodes `text` the way the site's scripts do (space is `%20`).
#[must_use]
pub fn encode_component(text: &str) -> String {
    utf8_percent_encode(text, URI_COMPONENT).to_string()
}

#[must_use]
pub fn quick_contact_url(kind: QuickContact, number: &str) -> String {
    whatsapp_url(number, Some(kind.message()))
}

/// Points an existing `wa.me/<digits>` link at `number`.
#[must_use]
pub fn rewrite_whatsapp_href(href: &str, number: &str) -> String {
    WHATSAPP_NUMBER_PATTERN
        .replace(href, format!("wa.me/{number}").as_str())
        .into_owned()
}

/// `tel:` link from a displayed number; everything but digits is dropped.
#[must_use]
pub fn tel_url(text: &str) -> String {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    format!("tel:{digits}")
}

#[must_use]
pub fn mailto_url(address: &str) -> String {
    format!("mailto:{}", address.trim())
}

/// Google Maps search for `address`.
#[must_use]
pub fn maps_url(address: &str) -> String {
    format!("{MAPS_SEARCH}{}", encode_component(address))
}

/// WhatsApp share link used when the platform has no native share.
#[must_use]
pub fn share_url(text: &str, page_url: &str) -> String {
    whatsapp_url("", Some(&format!("{text} {page_url}")))
}

/// Page whose navigation link is highlighted for `path`.
#[must_use]
pub fn active_nav_page(path: &str) -> &str {
    match path.rsplit('/').next() {
        Some(page) if !page.is_empty() => page,
        _ => DEFAULT_PAGE,
    }
}
