// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for UI values,
//! ensuring they are always within valid ranges.

use crate::config::defaults::{
    DEFAULT_SWIPE_THRESHOLD, DEFAULT_ZOOM, MAX_SWIPE_THRESHOLD, MAX_ZOOM, MIN_SWIPE_THRESHOLD,
    MIN_ZOOM, ZOOM_STEP,
};

// =============================================================================
// ZoomLevel
// =============================================================================

/// Viewer scale factor, guaranteed to be within 0.5–2.0.
///
/// The value is kept on the 0.1 grid so repeated steps never drift: ten
/// steps up from 1.0 land exactly on 2.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomLevel(f32);

impl ZoomLevel {
    /// Creates a zoom level, clamping to the valid range and snapping to
    /// one decimal place.
    #[must_use]
    pub fn new(factor: f32) -> Self {
        let factor = if factor.is_nan() { DEFAULT_ZOOM } else { factor };
        let snapped = (factor * 10.0).round() / 10.0;
        Self(snapped.clamp(MIN_ZOOM, MAX_ZOOM))
    }

    /// Returns the raw scale factor.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the zoom as a percentage (e.g., 1.0 → 100%).
    #[must_use]
    pub fn as_percent(self) -> f32 {
        (self.0 * 100.0).round()
    }

    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= MIN_ZOOM
    }

    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= MAX_ZOOM
    }

    /// Whether this is the natural (unzoomed) scale.
    #[must_use]
    pub fn is_default(self) -> bool {
        self == Self::default()
    }

    /// Increases zoom by one step.
    #[must_use]
    pub fn zoom_in(self) -> Self {
        Self::new(self.0 + ZOOM_STEP)
    }

    /// Decreases zoom by one step.
    #[must_use]
    pub fn zoom_out(self) -> Self {
        Self::new(self.0 - ZOOM_STEP)
    }
}

impl Default for ZoomLevel {
    fn default() -> Self {
        Self(DEFAULT_ZOOM)
    }
}

// =============================================================================
// SwipeThreshold
// =============================================================================

/// Minimum horizontal travel, in screen units, for a touch to count as a swipe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeThreshold(f32);

impl SwipeThreshold {
    /// Creates a threshold, clamping to the valid range.
    #[must_use]
    pub fn new(distance: f32) -> Self {
        if distance.is_nan() {
            return Self::default();
        }
        Self(distance.clamp(MIN_SWIPE_THRESHOLD, MAX_SWIPE_THRESHOLD))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for SwipeThreshold {
    fn default() -> Self {
        Self(DEFAULT_SWIPE_THRESHOLD)
    }
}
