// SPDX-License-Identifier: MPL-2.0
//! Menu page browser: tab selection on top of a [`PagedMediaViewer`].

use super::catalog::{Catalog, Tab};
use super::viewer::{Effect, Message, PagedMediaViewer, ViewerOptions};
use crate::domain::media::GalleryId;
use crate::ui::presentation;

/// How the active tab is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuViewMode {
    /// Scanned menu pages in the viewer.
    #[default]
    Images,
    /// The typed-out menu.
    Text,
}

impl MenuViewMode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Images => "images",
            Self::Text => "text",
        }
    }
}

/// Browses the scanned menu pages tab by tab.
#[derive(Debug, Clone)]
pub struct MenuBrowser {
    catalog: Catalog,
    active_tab: Option<String>,
    view_mode: MenuViewMode,
    viewer: PagedMediaViewer,
}

impl MenuBrowser {
    /// Creates a browser with the first tab active.
    #[must_use]
    pub fn new(catalog: Catalog, options: ViewerOptions) -> Self {
        let mut browser = Self {
            catalog,
            active_tab: None,
            view_mode: MenuViewMode::default(),
            viewer: PagedMediaViewer::new(options),
        };
        if let Some(id) = browser.catalog.first_tab().map(|tab| tab.id.clone()) {
            browser.activate_tab(&id);
        }
        browser
    }

    /// Switches to tab `id`, resetting filter, page and zoom.
    ///
    /// Unknown ids are ignored.
    pub fn activate_tab(&mut self, id: &str) -> Effect {
        let Some(tab) = self.catalog.tab(id) else {
            log::debug!("menu: ignoring unknown tab '{id}'");
            return Effect::None;
        };
        let gallery = GalleryId::Menu(tab.id.clone());
        let pages = tab.pages.clone();
        self.active_tab = Some(tab.id.clone());
        self.viewer.load_gallery(gallery, pages)
    }

    /// Forwards a viewer trigger for the active tab.
    pub fn handle(&mut self, message: Message) -> Effect {
        self.viewer.handle(message)
    }

    #[must_use]
    pub fn active_tab(&self) -> Option<&Tab> {
        self.active_tab
            .as_deref()
            .and_then(|id| self.catalog.tab(id))
    }

    /// Distinct categories of the active tab, in first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        if let Some(tab) = self.active_tab() {
            for page in &tab.pages {
                if !categories.contains(&page.category()) {
                    categories.push(page.category());
                }
            }
        }
        categories
    }

    /// File name offered when downloading the current page.
    #[must_use]
    pub fn download_name(&self) -> Option<String> {
        self.active_tab.as_ref()?;
        presentation::download_name(&self.viewer.snapshot())
    }

    #[must_use]
    pub fn view_mode(&self) -> MenuViewMode {
        self.view_mode
    }

    /// Switches between page images and the text menu.
    ///
    /// The viewer keeps its page, filter and zoom across switches.
    pub fn set_view_mode(&mut self, mode: MenuViewMode) -> Effect {
        if self.view_mode == mode {
            return Effect::None;
        }
        log::debug!("menu: showing {}", mode.as_str());
        self.view_mode = mode;
        Effect::Render(self.viewer.snapshot())
    }

    pub fn toggle_view_mode(&mut self) -> Effect {
        match self.view_mode {
            MenuViewMode::Images => self.set_view_mode(MenuViewMode::Text),
            MenuViewMode::Text => self.set_view_mode(MenuViewMode::Images),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn viewer(&self) -> &PagedMediaViewer {
        &self.viewer
    }

    pub fn viewer_mut(&mut self) -> &mut PagedMediaViewer {
        &mut self.viewer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NavigationMode;

    fn browser() -> MenuBrowser {
        MenuBrowser::new(Catalog::builtin(), ViewerOptions::default())
    }

    #[test]
    fn starts_on_first_tab() {
        let browser = browser();
        assert_eq!(browser.active_tab().map(|t| t.id.as_str()), Some("food"));
        assert_eq!(browser.viewer().state().len(), 5);
        assert_eq!(
            browser.viewer().state().gallery(),
            &GalleryId::Menu("food".into())
        );
    }

    #[test]
    fn activating_a_tab_resets_the_viewer() {
        let mut browser = browser();
        browser.handle(Message::SetFilter("mains".into()));
        browser.handle(Message::Next);
        browser.handle(Message::ZoomIn);

        let effect = browser.activate_tab("alcohol");
        assert!(matches!(effect, Effect::Render(_)));
        let state = browser.viewer().state();
        assert_eq!(state.len(), 2);
        assert_eq!(state.current_index(), Some(0));
        assert!(!state.filter().is_active());
        assert!(state.zoom().is_default());
    }

    #[test]
    fn unknown_tab_is_ignored() {
        let mut browser = browser();
        browser.handle(Message::Next);
        assert!(browser.activate_tab("wine").is_none());
        assert_eq!(browser.active_tab().map(|t| t.id.as_str()), Some("food"));
        assert_eq!(browser.viewer().state().current_index(), Some(1));
    }

    #[test]
    fn categories_are_distinct_in_page_order() {
        let browser = browser();
        assert_eq!(browser.categories(), vec!["starters", "mains", "desserts"]);
    }

    #[test]
    fn download_name_follows_current_page() {
        let mut browser = browser();
        assert_eq!(
            browser.download_name().as_deref(),
            Some("eatery-menu-food-page-1.jpg")
        );
        browser.handle(Message::GoTo(3));
        assert_eq!(
            browser.download_name().as_deref(),
            Some("eatery-menu-food-page-4.jpg")
        );

        browser.handle(Message::SetFilter("nothing".into()));
        assert_eq!(browser.download_name(), None);
    }

    #[test]
    fn view_mode_toggles_without_touching_the_viewer() {
        let mut browser = browser();
        assert_eq!(browser.view_mode(), MenuViewMode::Images);
        browser.handle(Message::GoTo(2));
        browser.handle(Message::ZoomIn);

        assert!(matches!(browser.toggle_view_mode(), Effect::Render(_)));
        assert_eq!(browser.view_mode(), MenuViewMode::Text);
        assert_eq!(browser.viewer().state().current_index(), Some(2));
        assert!(!browser.viewer().state().zoom().is_default());

        assert!(browser.set_view_mode(MenuViewMode::Text).is_none());
        browser.toggle_view_mode();
        assert_eq!(browser.view_mode(), MenuViewMode::Images);
    }

    #[test]
    fn view_mode_survives_tab_switch() {
        let mut browser = browser();
        browser.set_view_mode(MenuViewMode::Text);
        browser.activate_tab("beers");
        assert_eq!(browser.view_mode(), MenuViewMode::Text);
    }

    #[test]
    fn clamp_mode_is_passed_to_the_viewer() {
        let options = ViewerOptions {
            navigation_mode: NavigationMode::Clamp,
            ..ViewerOptions::default()
        };
        let mut browser = MenuBrowser::new(Catalog::builtin(), options);
        browser.activate_tab("beers");
        assert!(browser.handle(Message::Next).is_none());
    }
}
