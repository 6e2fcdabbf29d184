// SPDX-License-Identifier: MPL-2.0
//! Core media types for the domain layer.
//!
//! These types represent pure data without any presentation dependencies.

use std::fmt;

/// Identifies which gallery a collection was loaded from.
///
/// The viewer is handed this at load time instead of deriving it from the
/// page markup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum GalleryId {
    /// The photo gallery page.
    Gallery,
    /// One tab of the menu viewer (`food`, `alcohol`, ...).
    Menu(String),
    /// The services section of the home page.
    Services,
    /// Any standalone image marked as viewable.
    #[default]
    General,
}

impl GalleryId {
    /// Returns the menu tab id for menu galleries.
    #[must_use]
    pub fn menu_tab(&self) -> Option<&str> {
        match self {
            Self::Menu(tab) => Some(tab),
            _ => None,
        }
    }
}

impl fmt::Display for GalleryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gallery => write!(f, "gallery"),
            Self::Menu(tab) => write!(f, "menu-{tab}"),
            Self::Services => write!(f, "services"),
            Self::General => write!(f, "general"),
        }
    }
}

/// A single image shown by the viewer.
///
/// Items are immutable once loaded. Two items are the same item when their
/// `source_ref` matches.
///
/// # Example
///
/// ```
/// use eatery_flamingo::domain::media::MediaItem;
///
/// let page = MediaItem::new("images/menu-food-1.jpg", "Starters", "starters");
/// assert_eq!(page.category(), "starters");
/// ```
#[derive(Debug, Clone, Eq)]
pub struct MediaItem {
    source_ref: String,
    label: String,
    category: String,
}

impl MediaItem {
    #[must_use]
    pub fn new(
        source_ref: impl Into<String>,
        label: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            source_ref: source_ref.into(),
            label: label.into(),
            category: category.into(),
        }
    }

    /// Image location; also the item's identity.
    #[must_use]
    pub fn source_ref(&self) -> &str {
        &self.source_ref
    }

    /// Human readable description (the image alt text).
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }
}

impl PartialEq for MediaItem {
    fn eq(&self, other: &Self) -> bool {
        self.source_ref == other.source_ref
    }
}
