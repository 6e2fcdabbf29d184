// SPDX-License-Identifier: MPL-2.0
//! Values derived from a [`ViewSnapshot`] for drawing.
//!
//! Nothing here holds state; the rendering layer recomputes these after each
//! [`Effect`](crate::application::viewer::Effect).

use crate::application::viewer::ViewSnapshot;
use crate::config::{GALLERY_DOWNLOAD_NAME, PLACEHOLDER_MENU_IMAGE};
use crate::domain::media::GalleryId;
use crate::domain::ui::ZoomLevel;
use chrono::{Datelike, NaiveDate, Weekday};

/// Counter shown under the viewer, e.g. `"2 / 5"`.
#[must_use]
pub fn counter_text(snapshot: &ViewSnapshot) -> String {
    match snapshot.current_index {
        Some(index) => format!("{} / {}", index + 1, snapshot.visible.len()),
        None => "0 / 0".to_string(),
    }
}

/// Where a page sits in the three-page carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagePosition {
    Center,
    Left,
    Right,
    Hidden,
}

impl PagePosition {
    /// Style class of the page element.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Center => "center",
            Self::Left => "left",
            Self::Right => "right",
            Self::Hidden => "hidden",
        }
    }
}

/// Position of page `index` relative to `current` in a list of `len` pages.
///
/// A lone page is always centered.
#[must_use]
pub fn page_position(index: usize, current: usize, len: usize) -> PagePosition {
    if len == 1 || index == current {
        PagePosition::Center
    } else if index + 1 == current {
        PagePosition::Left
    } else if index == current + 1 {
        PagePosition::Right
    } else {
        PagePosition::Hidden
    }
}

/// Scale applied to page `position`; only the centered page zooms.
#[must_use]
pub fn page_scale(position: PagePosition, zoom: ZoomLevel) -> f32 {
    match position {
        PagePosition::Center => zoom.value(),
        _ => 1.0,
    }
}

/// Image shown instead of a page that failed to load.
///
/// Only menu pages have a placeholder; other galleries show nothing.
#[must_use]
pub fn fallback_source(gallery: &GalleryId) -> Option<&'static str> {
    gallery.menu_tab().map(|_| PLACEHOLDER_MENU_IMAGE)
}

/// File name offered when downloading the current image.
///
/// Menu pages are numbered within the filtered tab; every other gallery
/// shares one name.
#[must_use]
pub fn download_name(snapshot: &ViewSnapshot) -> Option<String> {
    let index = snapshot.current_index?;
    Some(match snapshot.gallery.menu_tab() {
        Some(tab) => format!("eatery-menu-{tab}-page-{}.jpg", index + 1),
        None => GALLERY_DOWNLOAD_NAME.to_string(),
    })
}

/// `data-day` key of the opening-hours row to highlight on `date`.
#[must_use]
pub fn current_day_key(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

/// One entry of the thumbnail strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    pub index: usize,
    pub source_ref: String,
    pub active: bool,
}

#[must_use]
pub fn thumbnails(snapshot: &ViewSnapshot) -> Vec<Thumbnail> {
    snapshot
        .visible
        .iter()
        .enumerate()
        .map(|(index, item)| Thumbnail {
            index,
            source_ref: item.source_ref().to_string(),
            active: snapshot.current_index == Some(index),
        })
        .collect()
}
