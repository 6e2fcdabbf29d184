// SPDX-License-Identifier: MPL-2.0
//! Navigation capabilities derived from the collection state.

use super::state::CollectionState;
use crate::config::NavigationMode;

/// Navigation state information for UI rendering.
///
/// A snapshot of what the prev/next controls should look like, so the
/// rendering layer never has to reason about wrap-around itself.
// has_next/has_previous differ from at_first/at_last when wrapping.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationInfo {
    /// Whether `next` would move.
    pub has_next: bool,
    /// Whether `previous` would move.
    pub has_previous: bool,
    /// Whether the current item is the first visible one.
    pub at_first: bool,
    /// Whether the current item is the last visible one.
    pub at_last: bool,
    /// Current position in the visible list (0-indexed), if any.
    pub current_index: Option<usize>,
    /// Number of items in the unfiltered catalog.
    pub total_count: usize,
    /// Number of items matching the current filter.
    pub filtered_count: usize,
    /// Whether a filter is currently active.
    pub filter_active: bool,
}

impl NavigationInfo {
    #[must_use]
    pub fn from_state(state: &CollectionState, mode: NavigationMode) -> Self {
        let len = state.len();
        let current_index = state.current_index();
        let at_first = current_index == Some(0);
        let at_last = current_index.is_some_and(|i| i + 1 == len);

        let (has_next, has_previous) = match mode {
            NavigationMode::Wrap => (len > 1, len > 1),
            NavigationMode::Clamp => (len > 0 && !at_last, len > 0 && !at_first),
        };

        Self {
            has_next,
            has_previous,
            at_first,
            at_last,
            current_index,
            total_count: state.items().len(),
            filtered_count: len,
            filter_active: state.filter().is_active(),
        }
    }
}

/// Index reached by one step forward, or `None` if the step is a no-op.
#[must_use]
pub fn step_forward(current: usize, len: usize, mode: NavigationMode) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let target = match mode {
        NavigationMode::Wrap => (current + 1) % len,
        NavigationMode::Clamp => (current + 1).min(len - 1),
    };
    (target != current).then_some(target)
}

/// Index reached by one step backward, or `None` if the step is a no-op.
#[must_use]
pub fn step_backward(current: usize, len: usize, mode: NavigationMode) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let target = match mode {
        NavigationMode::Wrap => (current + len - 1) % len,
        NavigationMode::Clamp => current.saturating_sub(1),
    };
    (target != current).then_some(target)
}
