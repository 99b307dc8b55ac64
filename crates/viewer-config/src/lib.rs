pub mod content;
pub mod error;

pub use content::{Portfolio, Profile, Project, ProjectStats, SocialLink};
pub use error::{ConfigError, ConfigResult, ContentError, ContentResult};

use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use viewer_types::FALLBACK_TITLE;

const APP_DIR: &str = "folio";
const SETTINGS_FILE: &str = "settings.toml";
pub const CONTENT_FILE: &str = "portfolio.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AppTheme {
    #[default]
    System,
    Dark,
    Light,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub app_theme: AppTheme,
    /// Portfolio content file, defaults to `portfolio.toml` next to the settings
    pub content_path: Option<PathBuf>,
    /// Used for image alt text when a gallery has no title
    pub fallback_title: String,
    /// The counter is never shown for galleries with fewer than two images
    pub show_counter: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            app_theme: AppTheme::default(),
            content_path: None,
            fallback_title: FALLBACK_TITLE.to_string(),
            show_counter: true,
        }
    }
}

impl ViewerConfig {
    pub fn resolved_content_path(&self) -> Option<PathBuf> {
        self.content_path
            .clone()
            .or_else(|| config_dir().map(|dir| dir.join(CONTENT_FILE)))
    }
}

pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR))
}

fn settings_path() -> ConfigResult<PathBuf> {
    config_dir()
        .map(|dir| dir.join(SETTINGS_FILE))
        .ok_or(ConfigError::NoConfigDir)
}

/// Load settings from the user's config directory.
///
/// A missing file is not an error, defaults are returned instead.
pub fn load() -> ConfigResult<ViewerConfig> {
    load_from_path(&settings_path()?)
}

pub fn save(config: &ViewerConfig) -> ConfigResult<()> {
    save_to_path(config, &settings_path()?)
}

pub fn load_from_path(path: &Path) -> ConfigResult<ViewerConfig> {
    if !path.exists() {
        tracing::debug!("no settings at {}, using defaults", path.display());
        return Ok(ViewerConfig::default());
    }

    let raw = fs::read_to_string(path)?;
    Ok(toml::from_str(&raw)?)
}

pub fn save_to_path(config: &ViewerConfig, path: &Path) -> ConfigResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let raw = toml::to_string_pretty(config)?;
    fs::write(path, raw)?;
    tracing::debug!("settings written to {}", path.display());

    Ok(())
}
