// SPDX-License-Identifier: MPL-2.0
//! Touch and keyboard input mapped to viewer triggers.

use crate::domain::ui::SwipeThreshold;

/// Direction of navigation requested by a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// Classifies a horizontal touch from `start_x` to `end_x`.
///
/// Moving left past the threshold means "next", moving right past it means
/// "previous". Anything shorter is a tap.
#[must_use]
pub fn classify_swipe(start_x: f32, end_x: f32, threshold: SwipeThreshold) -> Option<Direction> {
    let threshold = threshold.value();
    if end_x < start_x - threshold {
        Some(Direction::Next)
    } else if end_x > start_x + threshold {
        Some(Direction::Previous)
    } else {
        None
    }
}

/// Remembers where the current touch began.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TouchTracker {
    start_x: Option<f32>,
}

impl TouchTracker {
    pub fn begin(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    /// Ends the touch. A touch end without a start is ignored.
    pub fn end(&mut self, x: f32, threshold: SwipeThreshold) -> Option<Direction> {
        let start_x = self.start_x.take()?;
        classify_swipe(start_x, x, threshold)
    }
}

/// Keys the viewer reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Escape,
    Other,
}

impl Key {
    /// Maps a DOM `KeyboardEvent.key` name.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            "Escape" | "Esc" => Self::Escape,
            _ => Self::Other,
        }
    }
}
