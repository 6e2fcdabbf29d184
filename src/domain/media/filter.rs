// SPDX-License-Identifier: MPL-2.0
//! Media filtering types for the domain layer.
//!
//! # Available Filters
//!
//! - [`CategoryFilter`]: Filter by category ("all" or one category)
//! - [`SearchFilter`]: Case-insensitive text search over labels and categories
//! - [`MediaFilter`]: Combined filter with AND logic
//!
//! Filtering never reorders: [`MediaFilter::apply`] yields a subsequence of
//! its input.

use super::MediaItem;

/// Selector value meaning "no category restriction".
pub const ALL_CATEGORIES: &str = "all";

// =============================================================================
// Category Filter
// =============================================================================

/// Filter by category.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Show every item.
    #[default]
    All,
    /// Show only items whose category equals this string exactly.
    Category(String),
}

impl CategoryFilter {
    /// Builds a filter from a selector value; `"all"` selects everything.
    #[must_use]
    pub fn from_selector(selector: &str) -> Self {
        if selector == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Category(selector.to_string())
        }
    }

    /// Returns the selector value this filter was built from.
    #[must_use]
    pub fn selector(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Category(category) => category,
        }
    }

    #[must_use]
    pub fn matches(&self, item: &MediaItem) -> bool {
        match self {
            Self::All => true,
            Self::Category(category) => item.category() == category,
        }
    }

    /// Returns `true` if this filter is active (not `All`).
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::All)
    }
}

// =============================================================================
// Search Filter
// =============================================================================

/// Case-insensitive substring search.
///
/// An empty term matches everything and counts as inactive.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchFilter {
    term: String,
}

impl SearchFilter {
    #[must_use]
    pub fn new(term: &str) -> Self {
        Self {
            term: term.trim().to_lowercase(),
        }
    }

    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }

    #[must_use]
    pub fn matches(&self, item: &MediaItem) -> bool {
        if self.term.is_empty() {
            return true;
        }
        item.label().to_lowercase().contains(&self.term)
            || item.category().to_lowercase().contains(&self.term)
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.term.is_empty()
    }
}

// =============================================================================
// Composite Media Filter
// =============================================================================

/// Combined media filter with AND logic.
///
/// All active filters must match for an item to be included.
/// When no filters are active, all items match.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MediaFilter {
    /// Filter by category.
    pub category: CategoryFilter,
    /// Free-text search.
    pub search: SearchFilter,
}

impl MediaFilter {
    /// Creates a new filter with no active criteria (matches all items).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn matches(&self, item: &MediaItem) -> bool {
        self.category.matches(item) && self.search.matches(item)
    }

    /// Returns the matching items in their original order.
    #[must_use]
    pub fn apply(&self, items: &[MediaItem]) -> Vec<MediaItem> {
        items
            .iter()
            .filter(|item| self.matches(item))
            .cloned()
            .collect()
    }

    /// Returns `true` if any filter is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.category.is_active() || self.search.is_active()
    }

    /// Returns the number of active filter criteria.
    #[must_use]
    pub fn active_count(&self) -> usize {
        usize::from(self.category.is_active()) + usize::from(self.search.is_active())
    }

    /// Resets all filters to their default (inactive) state.
    pub fn clear(&mut self) {
        self.category = CategoryFilter::default();
        self.search = SearchFilter::default();
    }
}

// =============================================================================
// Tests
// =============================================================================
