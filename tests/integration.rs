// SPDX-License-Identifier: MPL-2.0
use eatery_flamingo::application::catalog::Catalog;
use eatery_flamingo::application::menu::MenuBrowser;
use eatery_flamingo::application::viewer::{
    Effect, Key, Message, PagedMediaViewer, ViewStatus, ViewerOptions,
};
use eatery_flamingo::config::{self, Config, NavigationMode};
use eatery_flamingo::domain::media::MediaItem;
use eatery_flamingo::i18n::fluent::I18n;
use eatery_flamingo::ui::presentation::counter_text;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        language: Some("en-US".to_string()),
        ..Config::default()
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to fr
    let french_config = Config {
        language: Some("fr".to_string()),
        ..Config::default()
    };
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn clamp_mode_from_config_file_reaches_the_viewer() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "navigation_mode = \"clamp\"\nswipe_threshold = 20.0\n")
        .expect("Failed to write config");

    let config = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(config.navigation_mode(), NavigationMode::Clamp);

    let mut viewer = PagedMediaViewer::new(ViewerOptions::from_config(&config));
    viewer.load(vec![
        MediaItem::new("a.jpg", "A", "x"),
        MediaItem::new("b.jpg", "B", "x"),
    ]);
    assert!(matches!(viewer.swipe(100.0, 75.0), Effect::Render(_)));
    assert!(viewer.next().is_none());
}

#[test]
fn lightbox_session_over_a_filtered_gallery() {
    let mut viewer = PagedMediaViewer::new(ViewerOptions::default());
    viewer.load(vec![
        MediaItem::new("images/food-1.jpg", "Grilled chicken", "food"),
        MediaItem::new("images/venue-1.jpg", "Dining area", "venue"),
        MediaItem::new("images/food-2.jpg", "Pizza", "food"),
        MediaItem::new("images/events-1.jpg", "Birthday party", "events"),
    ]);

    viewer.handle(Message::SetFilter("food".into()));
    let opened = viewer.open_item("images/food-2.jpg");
    let snapshot = opened.snapshot().expect("opening renders");
    assert!(snapshot.is_open);
    assert_eq!(counter_text(snapshot), "2 / 2");

    viewer.handle(Message::Key(Key::ArrowRight));
    assert_eq!(
        viewer.current_item().map(MediaItem::label),
        Some("Grilled chicken")
    );

    viewer.handle(Message::ZoomIn);
    viewer.handle(Message::ZoomIn);
    let closed = viewer.handle(Message::Key(Key::Escape));
    assert!(matches!(closed, Effect::Closed(ref s) if !s.is_open));
    assert!(!viewer.state().zoom().is_default());
}

#[test]
fn menu_browser_reports_empty_category() {
    let mut browser = MenuBrowser::new(Catalog::builtin(), ViewerOptions::default());
    browser.activate_tab("beers");
    let effect = browser.handle(Message::SetFilter("desserts".into()));
    let snapshot = effect.snapshot().expect("filter renders");
    assert_eq!(snapshot.status, ViewStatus::Empty);
    assert_eq!(counter_text(snapshot), "0 / 0");

    let i18n = I18n::new(Some("en-US".into()), &Config::default());
    assert_eq!(
        i18n.tr("viewer-empty-result"),
        "No menu pages found for this category"
    );
}
