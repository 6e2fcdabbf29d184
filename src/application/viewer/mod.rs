// SPDX-License-Identifier: MPL-2.0
//! Paged media viewer.
//!
//! One state machine backs the gallery lightbox, the services images and the
//! menu page viewer. It owns a [`CollectionState`], reacts to inbound
//! [`Message`]s and answers with an [`Effect`] describing what the rendering
//! layer has to do. Every operation is total: out-of-range requests and
//! requests on an empty collection are absorbed and yield [`Effect::None`].
//!
//! # Example
//!
//! ```
//! use eatery_flamingo::application::viewer::{Effect, PagedMediaViewer, ViewerOptions};
//! use eatery_flamingo::domain::media::MediaItem;
//!
//! let mut viewer = PagedMediaViewer::new(ViewerOptions::default());
//! viewer.load(vec![
//!     MediaItem::new("a.jpg", "A", "x"),
//!     MediaItem::new("b.jpg", "B", "y"),
//!     MediaItem::new("c.jpg", "C", "x"),
//! ]);
//! viewer.set_filter("x");
//! assert!(matches!(viewer.next(), Effect::Render(_)));
//! assert_eq!(viewer.current_item().map(|i| i.source_ref()), Some("c.jpg"));
//! ```

pub mod gesture;
pub mod navigation;
pub mod state;

pub use gesture::{Direction, Key, TouchTracker};
pub use navigation::NavigationInfo;
pub use state::CollectionState;

use crate::config::{Config, NavigationMode};
use crate::domain::media::{CategoryFilter, GalleryId, MediaItem, SearchFilter};
use crate::domain::ui::{SwipeThreshold, ZoomLevel};
use std::sync::Arc;

/// Behavior knobs fixed for the lifetime of a viewer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewerOptions {
    pub navigation_mode: NavigationMode,
    pub swipe_threshold: SwipeThreshold,
}

impl ViewerOptions {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            navigation_mode: config.navigation_mode(),
            swipe_threshold: SwipeThreshold::new(config.swipe_threshold()),
        }
    }
}

/// Whether the visible set has anything to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewStatus {
    Showing,
    /// The filter matched nothing (or the catalog is empty).
    Empty,
}

/// Everything the rendering layer needs to draw the viewer.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewSnapshot {
    pub gallery: GalleryId,
    pub visible: Arc<[MediaItem]>,
    pub current_index: Option<usize>,
    pub zoom: ZoomLevel,
    pub is_open: bool,
    /// Active category selector (`"all"` when unfiltered).
    pub category: String,
    pub search: String,
    pub status: ViewStatus,
}

impl ViewSnapshot {
    #[must_use]
    pub fn current_item(&self) -> Option<&MediaItem> {
        self.current_index.and_then(|i| self.visible.get(i))
    }
}

/// Inbound triggers delivered by the rendering layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Load {
        gallery: GalleryId,
        items: Vec<MediaItem>,
    },
    SetFilter(String),
    SetSearch(String),
    GoTo(usize),
    Next,
    Previous,
    ZoomIn,
    ZoomOut,
    ResetZoom,
    /// Double click: zoom in from natural size, otherwise reset.
    ToggleZoom,
    Open,
    OpenAt(usize),
    Close,
    TouchStart(f32),
    TouchEnd(f32),
    Key(Key),
}

/// Outbound notification produced by a trigger.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Nothing changed.
    None,
    /// State changed; redraw from the snapshot.
    Render(ViewSnapshot),
    /// The overlay was opened; the rendering layer locks page scrolling.
    Opened(ViewSnapshot),
    /// The overlay was closed; the rendering layer must release any scroll lock.
    Closed(ViewSnapshot),
}

impl Effect {
    #[must_use]
    pub fn snapshot(&self) -> Option<&ViewSnapshot> {
        match self {
            Effect::None => None,
            Effect::Render(s) | Effect::Opened(s) | Effect::Closed(s) => Some(s),
        }
    }

    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Effect::None)
    }
}

/// Lightbox / carousel state machine.
#[derive(Debug, Clone, Default)]
pub struct PagedMediaViewer {
    state: CollectionState,
    is_open: bool,
    options: ViewerOptions,
    touch: TouchTracker,
}

impl PagedMediaViewer {
    /// Creates a closed viewer with an empty collection.
    #[must_use]
    pub fn new(options: ViewerOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Handle an inbound trigger.
    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::Load { gallery, items } => self.load_gallery(gallery, items),
            Message::SetFilter(category) => self.set_filter(&category),
            Message::SetSearch(term) => self.set_search(&term),
            Message::GoTo(index) => self.go_to(index),
            Message::Next => self.next(),
            Message::Previous => self.previous(),
            Message::ZoomIn => self.zoom_in(),
            Message::ZoomOut => self.zoom_out(),
            Message::ResetZoom => self.reset_zoom(),
            Message::ToggleZoom => self.toggle_zoom(),
            Message::Open => self.open(),
            Message::OpenAt(index) => self.open_at(index),
            Message::Close => self.close(),
            Message::TouchStart(x) => {
                self.touch.begin(x);
                Effect::None
            }
            Message::TouchEnd(x) => match self.touch.end(x, self.options.swipe_threshold) {
                Some(direction) => self.step(direction),
                None => Effect::None,
            },
            Message::Key(key) => self.handle_key(key),
        }
    }

    // =========================================================================
    // Collection
    // =========================================================================

    /// Replaces the collection with `items` from an unspecified gallery.
    pub fn load(&mut self, items: Vec<MediaItem>) -> Effect {
        self.load_gallery(GalleryId::default(), items)
    }

    /// Replaces the collection; resets filter, position and zoom.
    pub fn load_gallery(&mut self, gallery: GalleryId, items: Vec<MediaItem>) -> Effect {
        log::debug!("viewer: loading {} items for {gallery}", items.len());
        self.state = CollectionState::new(gallery, items);
        self.touch = TouchTracker::default();
        self.render()
    }

    /// Restricts the visible items to `category` (`"all"` clears it).
    ///
    /// Always rewinds to the first visible item. An empty result is reported
    /// through [`ViewStatus::Empty`] and closes an open overlay.
    pub fn set_filter(&mut self, category: &str) -> Effect {
        self.state
            .set_category(CategoryFilter::from_selector(category));
        log::debug!(
            "viewer: category '{category}' leaves {} of {} items",
            self.state.len(),
            self.state.items().len()
        );
        self.refiltered()
    }

    /// Restricts the visible items to those whose label or category contains
    /// `term`. Combines with the category filter.
    pub fn set_search(&mut self, term: &str) -> Effect {
        self.state.set_search(SearchFilter::new(term));
        self.refiltered()
    }

    /// The overlay is never left open on an empty visible set.
    fn refiltered(&mut self) -> Effect {
        if self.is_open && self.state.is_empty() {
            self.close()
        } else {
            self.render()
        }
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    pub fn go_to(&mut self, index: usize) -> Effect {
        if self.state.select(index) {
            self.render()
        } else {
            Effect::None
        }
    }

    pub fn next(&mut self) -> Effect {
        self.step(Direction::Next)
    }

    pub fn previous(&mut self) -> Effect {
        self.step(Direction::Previous)
    }

    fn step(&mut self, direction: Direction) -> Effect {
        let Some(current) = self.state.current_index() else {
            return Effect::None;
        };
        let len = self.state.len();
        let mode = self.options.navigation_mode;
        let target = match direction {
            Direction::Next => navigation::step_forward(current, len, mode),
            Direction::Previous => navigation::step_backward(current, len, mode),
        };
        match target {
            Some(index) => self.go_to(index),
            None => Effect::None,
        }
    }

    /// Maps a swipe from `start_x` to `end_x` onto `next`/`previous`.
    pub fn swipe(&mut self, start_x: f32, end_x: f32) -> Effect {
        match gesture::classify_swipe(start_x, end_x, self.options.swipe_threshold) {
            Some(direction) => self.step(direction),
            None => Effect::None,
        }
    }

    /// Arrow keys navigate; Escape closes the overlay, or resets zoom when
    /// the viewer is inline.
    pub fn handle_key(&mut self, key: Key) -> Effect {
        match key {
            Key::ArrowLeft => self.previous(),
            Key::ArrowRight => self.next(),
            Key::Escape if self.is_open => self.close(),
            Key::Escape => self.reset_zoom(),
            Key::Other => Effect::None,
        }
    }

    // =========================================================================
    // Zoom
    // =========================================================================

    pub fn zoom_in(&mut self) -> Effect {
        let zoom = self.state.zoom().zoom_in();
        self.apply_zoom(zoom)
    }

    pub fn zoom_out(&mut self) -> Effect {
        let zoom = self.state.zoom().zoom_out();
        self.apply_zoom(zoom)
    }

    pub fn reset_zoom(&mut self) -> Effect {
        self.apply_zoom(ZoomLevel::default())
    }

    pub fn toggle_zoom(&mut self) -> Effect {
        if self.state.zoom().is_default() {
            self.zoom_in()
        } else {
            self.reset_zoom()
        }
    }

    fn apply_zoom(&mut self, zoom: ZoomLevel) -> Effect {
        if self.state.set_zoom(zoom) {
            self.render()
        } else {
            Effect::None
        }
    }

    // =========================================================================
    // Overlay
    // =========================================================================

    /// Opens the overlay on the current item. Nothing to show means no-op.
    pub fn open(&mut self) -> Effect {
        if self.is_open || self.state.is_empty() {
            return Effect::None;
        }
        self.is_open = true;
        Effect::Opened(self.snapshot())
    }

    /// Opens the overlay on the visible item at `index`.
    pub fn open_at(&mut self, index: usize) -> Effect {
        if index >= self.state.len() {
            return Effect::None;
        }
        self.state.select(index);
        self.is_open = true;
        Effect::Opened(self.snapshot())
    }

    /// Opens the overlay on the visible item whose identity is `source_ref`.
    pub fn open_item(&mut self, source_ref: &str) -> Effect {
        match self
            .state
            .visible()
            .iter()
            .position(|item| item.source_ref() == source_ref)
        {
            Some(index) => self.open_at(index),
            None => Effect::None,
        }
    }

    /// Closes the overlay.
    ///
    /// Always yields [`Effect::Closed`] so a scroll lock left behind by the
    /// rendering layer is released even if the viewer was already closed.
    pub fn close(&mut self) -> Effect {
        self.is_open = false;
        self.touch = TouchTracker::default();
        Effect::Closed(self.snapshot())
    }

    // =========================================================================
    // Queries
    // =========================================================================

    #[must_use]
    pub fn current_item(&self) -> Option<&MediaItem> {
        self.state.current_item()
    }

    #[must_use]
    pub fn state(&self) -> &CollectionState {
        &self.state
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    #[must_use]
    pub fn options(&self) -> ViewerOptions {
        self.options
    }

    #[must_use]
    pub fn navigation_info(&self) -> NavigationInfo {
        NavigationInfo::from_state(&self.state, self.options.navigation_mode)
    }

    #[must_use]
    pub fn snapshot(&self) -> ViewSnapshot {
        let filter = self.state.filter();
        ViewSnapshot {
            gallery: self.state.gallery().clone(),
            visible: self.state.visible_shared(),
            current_index: self.state.current_index(),
            zoom: self.state.zoom(),
            is_open: self.is_open,
            category: filter.category.selector().to_string(),
            search: filter.search.term().to_string(),
            status: if self.state.is_empty() {
                ViewStatus::Empty
            } else {
                ViewStatus::Showing
            },
        }
    }

    fn render(&self) -> Effect {
        Effect::Render(self.snapshot())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(source: &str, category: &str) -> MediaItem {
        MediaItem::new(source, source.to_uppercase(), category)
    }

    fn loaded(mode: NavigationMode) -> PagedMediaViewer {
        let mut viewer = PagedMediaViewer::new(ViewerOptions {
            navigation_mode: mode,
            ..ViewerOptions::default()
        });
        viewer.load(vec![item("a", "x"), item("b", "y"), item("c", "x")]);
        viewer
    }

    fn current(viewer: &PagedMediaViewer) -> Option<&str> {
        viewer.current_item().map(MediaItem::source_ref)
    }

    #[test]
    fn filter_then_wrap_scenario() {
        let mut viewer = loaded(NavigationMode::Wrap);
        viewer.set_filter("x");

        let refs: Vec<_> = viewer.state().visible().iter().map(MediaItem::source_ref).collect();
        assert_eq!(refs, vec!["a", "c"]);
        assert_eq!(viewer.state().current_index(), Some(0));
        assert_eq!(current(&viewer), Some("a"));

        viewer.next();
        assert_eq!(current(&viewer), Some("c"));
        viewer.next();
        assert_eq!(current(&viewer), Some("a"));
    }

    #[test]
    fn empty_viewer_absorbs_everything() {
        let mut viewer = PagedMediaViewer::default();
        assert!(matches!(viewer.load(Vec::new()), Effect::Render(_)));
        assert!(viewer.next().is_none());
        assert!(viewer.previous().is_none());
        assert!(viewer.go_to(0).is_none());
        assert!(viewer.open().is_none());
        assert!(!viewer.is_open());
        assert_eq!(viewer.current_item(), None);
        assert_eq!(viewer.snapshot().status, ViewStatus::Empty);
    }

    #[test]
    fn load_resets_filter_index_and_zoom() {
        let mut viewer = loaded(NavigationMode::Wrap);
        viewer.set_filter("x");
        viewer.set_search("c");
        viewer.next();
        viewer.zoom_in();

        viewer.load(vec![item("d", "z"), item("e", "z")]);
        assert_eq!(viewer.state().current_index(), Some(0));
        assert!(!viewer.state().filter().is_active());
        assert!(viewer.state().zoom().is_default());
        assert_eq!(viewer.state().len(), 2);
    }

    #[test]
    fn filter_resets_index_even_when_same_category() {
        let mut viewer = loaded(NavigationMode::Wrap);
        viewer.set_filter("x");
        viewer.next();
        let effect = viewer.set_filter("x");
        assert!(matches!(effect, Effect::Render(_)));
        assert_eq!(viewer.state().current_index(), Some(0));
    }

    #[test]
    fn unmatched_filter_reports_empty() {
        let mut viewer = loaded(NavigationMode::Wrap);
        let effect = viewer.set_filter("nothing");
        let snapshot = effect.snapshot().expect("filter always renders");
        assert_eq!(snapshot.status, ViewStatus::Empty);
        assert_eq!(snapshot.category, "nothing");
        assert_eq!(snapshot.current_index, None);

        viewer.set_filter("all");
        assert_eq!(viewer.state().len(), 3);
    }

    #[test]
    fn emptying_filter_closes_the_overlay() {
        let mut viewer = loaded(NavigationMode::Wrap);
        viewer.open();

        let effect = viewer.set_filter("nothing");
        assert!(matches!(&effect, Effect::Closed(s) if !s.is_open && s.status == ViewStatus::Empty));
        assert!(!viewer.is_open());
        assert_eq!(viewer.current_item(), None);

        viewer.set_filter("all");
        viewer.open();
        assert!(matches!(viewer.set_search("zzz"), Effect::Closed(_)));
        assert!(!viewer.is_open());
    }

    #[test]
    fn narrowing_filter_keeps_the_overlay_open() {
        let mut viewer = loaded(NavigationMode::Wrap);
        viewer.open();
        assert!(matches!(viewer.set_filter("y"), Effect::Render(s) if s.is_open));
        assert!(viewer.is_open());
    }

    #[test]
    fn search_combines_with_category() {
        let mut viewer = loaded(NavigationMode::Wrap);
        viewer.set_filter("x");
        viewer.set_search("C");
        assert_eq!(current(&viewer), Some("c"));
        assert_eq!(viewer.state().len(), 1);
        assert_eq!(viewer.snapshot().search, "c");
    }

    #[test]
    fn go_to_out_of_range_is_ignored() {
        let mut viewer = loaded(NavigationMode::Wrap);
        viewer.go_to(1);
        assert!(viewer.go_to(3).is_none());
        assert!(viewer.go_to(usize::MAX).is_none());
        assert_eq!(viewer.state().current_index(), Some(1));
    }

    #[test]
    fn previous_wraps_to_last() {
        let mut viewer = loaded(NavigationMode::Wrap);
        viewer.previous();
        assert_eq!(current(&viewer), Some("c"));
    }

    #[test]
    fn clamp_mode_stops_at_ends() {
        let mut viewer = loaded(NavigationMode::Clamp);
        assert!(viewer.previous().is_none());
        viewer.next();
        viewer.next();
        assert_eq!(current(&viewer), Some("c"));
        assert!(viewer.next().is_none());
        assert!(!viewer.navigation_info().has_next);
        assert!(viewer.navigation_info().has_previous);
    }

    #[test]
    fn zoom_is_clamped_and_reports_no_change_at_bounds() {
        let mut viewer = loaded(NavigationMode::Wrap);
        for _ in 0..10 {
            assert!(matches!(viewer.zoom_in(), Effect::Render(_)));
        }
        assert!(viewer.zoom_in().is_none());
        assert_eq!(viewer.state().zoom().value(), 2.0);

        viewer.reset_zoom();
        for _ in 0..5 {
            viewer.zoom_out();
        }
        assert!(viewer.zoom_out().is_none());
        assert_eq!(viewer.state().zoom().value(), 0.5);
        assert!(viewer.reset_zoom().snapshot().is_some());
        assert!(viewer.reset_zoom().is_none());
    }

    #[test]
    fn toggle_zoom_steps_in_then_resets() {
        let mut viewer = loaded(NavigationMode::Wrap);
        viewer.toggle_zoom();
        assert!((viewer.state().zoom().value() - 1.1).abs() < f32::EPSILON);
        viewer.toggle_zoom();
        assert!(viewer.state().zoom().is_default());
    }

    #[test]
    fn open_and_close_lifecycle() {
        let mut viewer = loaded(NavigationMode::Wrap);
        let opened = viewer.open_at(2);
        assert!(matches!(&opened, Effect::Opened(s) if s.is_open && s.current_index == Some(2)));
        assert!(viewer.open().is_none());

        let closed = viewer.close();
        assert!(matches!(&closed, Effect::Closed(s) if !s.is_open));
        // Closing again still asks the renderer to release the scroll lock.
        assert!(matches!(viewer.close(), Effect::Closed(_)));
    }

    #[test]
    fn open_at_out_of_range_stays_closed() {
        let mut viewer = loaded(NavigationMode::Wrap);
        assert!(viewer.open_at(5).is_none());
        assert!(!viewer.is_open());
    }

    #[test]
    fn open_item_finds_by_identity() {
        let mut viewer = loaded(NavigationMode::Wrap);
        assert!(matches!(viewer.open_item("b"), Effect::Opened(_)));
        assert_eq!(current(&viewer), Some("b"));
        viewer.close();
        assert!(viewer.open_item("missing").is_none());
    }

    #[test]
    fn escape_closes_overlay_or_resets_zoom() {
        let mut viewer = loaded(NavigationMode::Wrap);
        viewer.zoom_in();
        viewer.open();
        assert!(matches!(viewer.handle_key(Key::Escape), Effect::Closed(_)));
        assert!(!viewer.state().zoom().is_default());
        assert!(matches!(viewer.handle_key(Key::Escape), Effect::Render(_)));
        assert!(viewer.state().zoom().is_default());
    }

    #[test]
    fn arrow_keys_navigate() {
        let mut viewer = loaded(NavigationMode::Wrap);
        viewer.handle_key(Key::ArrowRight);
        assert_eq!(current(&viewer), Some("b"));
        viewer.handle_key(Key::ArrowLeft);
        assert_eq!(current(&viewer), Some("a"));
        assert!(viewer.handle_key(Key::Other).is_none());
    }

    #[test]
    fn touch_messages_drive_swipes() {
        let mut viewer = loaded(NavigationMode::Wrap);
        assert!(viewer.handle(Message::TouchStart(300.0)).is_none());
        viewer.handle(Message::TouchEnd(200.0));
        assert_eq!(current(&viewer), Some("b"));

        viewer.handle(Message::TouchStart(100.0));
        assert!(viewer.handle(Message::TouchEnd(140.0)).is_none());
        assert_eq!(current(&viewer), Some("b"));

        assert!(matches!(viewer.swipe(0.0, 60.0), Effect::Render(_)));
        assert_eq!(current(&viewer), Some("a"));
    }

    #[test]
    fn handle_dispatches_load_with_gallery() {
        let mut viewer = PagedMediaViewer::default();
        let effect = viewer.handle(Message::Load {
            gallery: GalleryId::Services,
            items: vec![item("s", "services")],
        });
        assert_eq!(
            effect.snapshot().map(|s| s.gallery.clone()),
            Some(GalleryId::Services)
        );
    }

    #[test]
    fn options_from_config() {
        let config = Config {
            navigation_mode: Some(NavigationMode::Clamp),
            swipe_threshold: Some(25.0),
            ..Config::default()
        };
        let options = ViewerOptions::from_config(&config);
        assert_eq!(options.navigation_mode, NavigationMode::Clamp);
        assert_eq!(options.swipe_threshold.value(), 25.0);
    }
}
