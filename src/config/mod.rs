// SPDX-License-Identifier: MPL-2.0
//! This module handles the site configuration, including loading and saving
//! preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use eatery_flamingo::config::{self, Config, NavigationMode};
//!
//! let mut config = config::load().unwrap_or_default();
//! config.navigation_mode = Some(NavigationMode::Clamp);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use crate::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// How `next`/`previous` behave at the ends of the visible collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationMode {
    /// Carousel behavior: the last item is followed by the first.
    #[default]
    Wrap,
    /// Page behavior: navigation stops at the first and last item.
    Clamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub language: Option<String>,
    #[serde(default)]
    pub navigation_mode: Option<NavigationMode>,
    #[serde(default)]
    pub swipe_threshold: Option<f32>,
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub whatsapp_number: Option<String>,
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            navigation_mode: Some(NavigationMode::Wrap),
            swipe_threshold: Some(DEFAULT_SWIPE_THRESHOLD),
            base_url: Some(DEFAULT_BASE_URL.to_string()),
            whatsapp_number: Some(DEFAULT_WHATSAPP_NUMBER.to_string()),
            catalog_path: None,
            request_timeout_secs: Some(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl Config {
    #[must_use]
    pub fn navigation_mode(&self) -> NavigationMode {
        self.navigation_mode.unwrap_or_default()
    }

    #[must_use]
    pub fn swipe_threshold(&self) -> f32 {
        self.swipe_threshold.unwrap_or(DEFAULT_SWIPE_THRESHOLD)
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    #[must_use]
    pub fn whatsapp_number(&self) -> &str {
        self.whatsapp_number
            .as_deref()
            .unwrap_or(DEFAULT_WHATSAPP_NUMBER)
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.request_timeout_secs
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        )
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    paths::get_app_config_dir().map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Records `language` in the settings file, keeping every other setting.
pub fn save_language(language: &str) -> Result<Config> {
    let mut config = load()?;
    config.language = Some(language.to_string());
    save(&config)?;
    Ok(config)
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            log::warn!("Ignoring invalid config at {}: {err}", path.display());
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
