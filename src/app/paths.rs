// SPDX-License-Identifier: MPL-2.0
//! Config directory resolution.
//!
//! # Resolution Order
//!
//! 1. **Explicit override** - parameter to [`get_app_config_dir_with_override`] (for tests)
//! 2. **CLI argument** (`--config-dir`) - set once via [`init_cli_override`]
//! 3. **Environment variable** (`ICED_LIGHTBOX_CONFIG_DIR`)
//! 4. **Platform default** - via `dirs` crate, with the app name appended
//!
//! ```ignore
//! paths::init_cli_override(flags.config_dir);
//! ```

use std::path::PathBuf;
use std::sync::OnceLock;
use tracing::warn;

/// Application name used for directory naming.
pub const APP_NAME: &str = "IcedLightbox";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_LIGHTBOX_CONFIG_DIR";

/// Global CLI override for the config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--config-dir` argument.
///
/// Only the first call has an effect; later calls are logged and ignored.
pub fn init_cli_override(config_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        warn!("config dir override already initialized, ignoring");
    }
}

fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

/// Returns the application config directory path.
///
/// Platform defaults:
/// - Linux: `~/.config/IcedLightbox/`
/// - macOS: `~/Library/Application Support/IcedLightbox/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\IcedLightbox\`
///
/// Returns `None` if no config directory can be determined.
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory path with an optional override.
///
/// `override_path` wins over every other source.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = get_cli_config_dir() {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}
