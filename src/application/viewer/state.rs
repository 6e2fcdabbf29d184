// SPDX-License-Identifier: MPL-2.0
//! Collection state owned by the viewer.

use crate::domain::media::{CategoryFilter, GalleryId, MediaFilter, MediaItem, SearchFilter};
use crate::domain::ui::ZoomLevel;
use std::sync::Arc;

/// The catalog of the active tab/gallery plus everything derived from it.
///
/// Invariants:
/// - `visible` is `items` filtered by `filter`, in original order
/// - `current_index < visible.len()` whenever `visible` is non-empty, else 0
/// - `zoom` stays within 0.5–2.0 (enforced by [`ZoomLevel`])
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionState {
    gallery: GalleryId,
    items: Arc<[MediaItem]>,
    filter: MediaFilter,
    visible: Arc<[MediaItem]>,
    current_index: usize,
    zoom: ZoomLevel,
}

impl CollectionState {
    /// Creates a fresh state: no filter, first item, natural zoom.
    #[must_use]
    pub fn new(gallery: GalleryId, items: Vec<MediaItem>) -> Self {
        let items: Arc<[MediaItem]> = items.into();
        Self {
            gallery,
            visible: Arc::clone(&items),
            items,
            filter: MediaFilter::default(),
            current_index: 0,
            zoom: ZoomLevel::default(),
        }
    }

    #[must_use]
    pub fn gallery(&self) -> &GalleryId {
        &self.gallery
    }

    /// The full unfiltered catalog.
    #[must_use]
    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    #[must_use]
    pub fn filter(&self) -> &MediaFilter {
        &self.filter
    }

    /// Items matching the filter, in catalog order.
    #[must_use]
    pub fn visible(&self) -> &[MediaItem] {
        &self.visible
    }

    pub(crate) fn visible_shared(&self) -> Arc<[MediaItem]> {
        Arc::clone(&self.visible)
    }

    /// Position in `visible`; `None` when nothing is visible.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        if self.visible.is_empty() {
            None
        } else {
            Some(self.current_index)
        }
    }

    #[must_use]
    pub fn current_item(&self) -> Option<&MediaItem> {
        self.visible.get(self.current_index)
    }

    #[must_use]
    pub fn zoom(&self) -> ZoomLevel {
        self.zoom
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    pub(super) fn set_category(&mut self, category: CategoryFilter) {
        self.filter.category = category;
        self.recompute();
    }

    pub(super) fn set_search(&mut self, search: SearchFilter) {
        self.filter.search = search;
        self.recompute();
    }

    /// Moves to `index` if it addresses a visible item.
    pub(super) fn select(&mut self, index: usize) -> bool {
        if index < self.visible.len() && index != self.current_index {
            self.current_index = index;
            true
        } else {
            false
        }
    }

    pub(super) fn set_zoom(&mut self, zoom: ZoomLevel) -> bool {
        if zoom == self.zoom {
            false
        } else {
            self.zoom = zoom;
            true
        }
    }

    /// Rebuilds `visible` and rewinds to the first item.
    ///
    /// Identity of the item at a given position may change with the filter,
    /// so the previous index is never carried over.
    fn recompute(&mut self) {
        self.visible = if self.filter.is_active() {
            self.filter.apply(&self.items).into()
        } else {
            Arc::clone(&self.items)
        };
        self.current_index = 0;
    }
}

impl Default for CollectionState {
    fn default() -> Self {
        Self::new(GalleryId::default(), Vec::new())
    }
}
