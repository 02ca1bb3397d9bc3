// SPDX-License-Identifier: MPL-2.0
//! Loading and saving user preferences from a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[lightbox]` - Carousel animation, drag threshold, backdrop dismissal
//! - `[gallery]` - Thumbnail grid columns and breakpoint
//!
//! Every field is optional. Values outside their valid range are clamped
//! when read through the accessor methods, never rejected.
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI argument or `ICED_LIGHTBOX_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_lightbox::config;
//!
//! let (mut config, _warning) = config::load();
//! config.general.language = Some("fr".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::lightbox::{DragThreshold, GalleryColumns, ScrollDuration};
use crate::error::{Error, Result};
use crate::ui::lightbox::Settings as LightboxSettings;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Lightbox behaviour.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LightboxConfig {
    /// Duration of animated slide changes in milliseconds (0 = instant).
    #[serde(
        default = "default_scroll_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub scroll_duration_ms: Option<u32>,

    /// Fraction of a slide a drag must cover to change slides.
    #[serde(
        default = "default_drag_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub drag_threshold: Option<f32>,

    /// Whether pressing the backdrop closes the lightbox.
    #[serde(
        default = "default_backdrop_closes",
        skip_serializing_if = "Option::is_none"
    )]
    pub backdrop_closes: Option<bool>,
}

impl Default for LightboxConfig {
    fn default() -> Self {
        Self {
            scroll_duration_ms: default_scroll_duration_ms(),
            drag_threshold: default_drag_threshold(),
            backdrop_closes: default_backdrop_closes(),
        }
    }
}

impl LightboxConfig {
    /// Validated lightbox settings, with missing values defaulted.
    #[must_use]
    pub fn settings(&self) -> LightboxSettings {
        LightboxSettings {
            scroll_duration: ScrollDuration::new(
                self.scroll_duration_ms.unwrap_or(DEFAULT_SCROLL_DURATION_MS),
            ),
            drag_threshold: DragThreshold::new(
                self.drag_threshold.unwrap_or(DEFAULT_DRAG_THRESHOLD),
            ),
            backdrop_closes: self.backdrop_closes.unwrap_or(DEFAULT_BACKDROP_CLOSES),
        }
    }
}

/// Thumbnail grid layout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Columns below the wide breakpoint.
    #[serde(
        default = "default_columns_narrow",
        skip_serializing_if = "Option::is_none"
    )]
    pub columns_narrow: Option<u16>,

    /// Columns at or above the wide breakpoint.
    #[serde(
        default = "default_columns_wide",
        skip_serializing_if = "Option::is_none"
    )]
    pub columns_wide: Option<u16>,

    /// Window width at which the wide column count applies.
    #[serde(
        default = "default_wide_breakpoint",
        skip_serializing_if = "Option::is_none"
    )]
    pub wide_breakpoint: Option<f32>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            columns_narrow: default_columns_narrow(),
            columns_wide: default_columns_wide(),
            wide_breakpoint: default_wide_breakpoint(),
        }
    }
}

impl GalleryConfig {
    /// Column count for a window of the given width.
    #[must_use]
    pub fn columns_for_width(&self, window_width: f32) -> GalleryColumns {
        if window_width >= self.wide_breakpoint() {
            GalleryColumns::new(self.columns_wide.unwrap_or(DEFAULT_COLUMNS_WIDE))
        } else {
            GalleryColumns::new(self.columns_narrow.unwrap_or(DEFAULT_COLUMNS_NARROW))
        }
    }

    /// Breakpoint clamped to the accepted range; non-finite values use the default.
    #[must_use]
    pub fn wide_breakpoint(&self) -> f32 {
        match self.wide_breakpoint {
            Some(value) if value.is_finite() => value.clamp(MIN_WIDE_BREAKPOINT, MAX_WIDE_BREAKPOINT),
            _ => DEFAULT_WIDE_BREAKPOINT,
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub lightbox: LightboxConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_scroll_duration_ms() -> Option<u32> {
    Some(DEFAULT_SCROLL_DURATION_MS)
}

fn default_drag_threshold() -> Option<f32> {
    Some(DEFAULT_DRAG_THRESHOLD)
}

fn default_backdrop_closes() -> Option<bool> {
    Some(DEFAULT_BACKDROP_CLOSES)
}

fn default_columns_narrow() -> Option<u16> {
    Some(DEFAULT_COLUMNS_NARROW)
}

fn default_columns_wide() -> Option<u16> {
    Some(DEFAULT_COLUMNS_WIDE)
}

fn default_wide_breakpoint() -> Option<f32> {
    Some(DEFAULT_WIDE_BREAKPOINT)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    ThemeMode::parse(&raw).ok_or_else(|| D::Error::custom(format!("invalid theme_mode: {}", raw)))
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            return match load_from_path(&path) {
                Ok(config) => (config, None),
                Err(error) => {
                    tracing::warn!(path = %path.display(), %error, "falling back to default config");
                    (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    )
                }
            };
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
