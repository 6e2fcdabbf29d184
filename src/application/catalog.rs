// SPDX-License-Identifier: MPL-2.0
//! Menu catalog: the ordered tabs of the menu page and their scanned pages.
//!
//! The site ships a built-in catalog. A TOML file with the same shape can
//! replace it:
//!
//! ```toml
//! [[tabs]]
//! id = "food"
//! title = "Food Menu"
//!
//! [[tabs.pages]]
//! src = "images/menu-food-1.jpg"
//! alt = "Food Menu Page 1 - Starters & Appetizers"
//! category = "starters"
//! ```

use crate::config::DEFAULT_IMAGE_LABEL;
use crate::domain::media::MediaItem;
use crate::error::{Error, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// One menu tab (food, alcohol, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct Tab {
    pub id: String,
    pub title: String,
    pub pages: Vec<MediaItem>,
}

/// Ordered list of menu tabs. Tab ids are unique.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    tabs: Vec<Tab>,
}

#[derive(Debug, Deserialize)]
struct RawCatalog {
    #[serde(default)]
    tabs: Vec<RawTab>,
}

#[derive(Debug, Deserialize)]
struct RawTab {
    id: String,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    pages: Vec<RawPage>,
}

#[derive(Debug, Deserialize)]
struct RawPage {
    src: String,
    #[serde(default)]
    alt: String,
    category: String,
}

impl Catalog {
    /// Builds a catalog from tabs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Catalog`] when there are no tabs or a tab id repeats.
    pub fn new(tabs: Vec<Tab>) -> Result<Self> {
        if tabs.is_empty() {
            return Err(Error::Catalog("catalog has no tabs".into()));
        }
        let mut seen = HashSet::new();
        for tab in &tabs {
            if !seen.insert(tab.id.as_str()) {
                return Err(Error::Catalog(format!("duplicate tab '{}'", tab.id)));
            }
        }
        Ok(Self { tabs })
    }

    /// The menu published on the site.
    #[must_use]
    pub fn builtin() -> Self {
        let tab = |id: &str, title: &str, pages: &[(&str, &str)]| Tab {
            id: id.to_string(),
            title: title.to_string(),
            pages: pages
                .iter()
                .enumerate()
                .map(|(i, (alt, category))| {
                    MediaItem::new(format!("images/menu-{id}-{}.jpg", i + 1), *alt, *category)
                })
                .collect(),
        };

        Self {
            tabs: vec![
                tab(
                    "food",
                    "Food Menu",
                    &[
                        ("Food Menu Page 1 - Starters & Appetizers", "starters"),
                        ("Food Menu Page 2 - Main Courses", "mains"),
                        ("Food Menu Page 3 - Grills & Specialties", "mains"),
                        ("Food Menu Page 4 - Pizza & Pasta", "mains"),
                        ("Food Menu Page 5 - Desserts & Drinks", "desserts"),
                    ],
                ),
                tab(
                    "alcohol",
                    "Alcohol Specials",
                    &[
                        ("Alcohol Menu Page 1 - Cocktails", "cocktails"),
                        ("Alcohol Menu Page 2 - Shooters & Spirits", "spirits"),
                    ],
                ),
                tab("beers", "Beers & Ciders", &[("Beers & Ciders Menu", "beers")]),
                tab(
                    "spirits",
                    "Premium Spirits",
                    &[("Premium Spirits Menu", "spirits")],
                ),
            ],
        }
    }

    /// Reads a catalog from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Catalog`] when the file cannot be read, is not valid
    /// TOML, or describes an invalid catalog.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|err| Error::Catalog(format!("{}: {err}", path.display())))?;
        let catalog = Self::from_toml(&content)?;
        log::debug!(
            "Loaded catalog with {} tabs from {}",
            catalog.tabs.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Parses a catalog from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Catalog`] on malformed input.
    pub fn from_toml(content: &str) -> Result<Self> {
        let raw: RawCatalog =
            toml::from_str(content).map_err(|err| Error::Catalog(err.to_string()))?;

        let tabs = raw
            .tabs
            .into_iter()
            .map(|tab| Tab {
                title: tab.title.unwrap_or_else(|| tab.id.clone()),
                pages: tab
                    .pages
                    .into_iter()
                    .map(|page| {
                        let label = if page.alt.trim().is_empty() {
                            DEFAULT_IMAGE_LABEL.to_string()
                        } else {
                            page.alt
                        };
                        MediaItem::new(page.src, label, page.category)
                    })
                    .collect(),
                id: tab.id,
            })
            .collect();

        Self::new(tabs)
    }

    #[must_use]
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    #[must_use]
    pub fn tab(&self, id: &str) -> Option<&Tab> {
        self.tabs.iter().find(|tab| tab.id == id)
    }

    #[must_use]
    pub fn first_tab(&self) -> Option<&Tab> {
        self.tabs.first()
    }
}
