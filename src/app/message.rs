// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::gallery::Gallery;
use crate::error::Error;
use crate::ui::gallery_grid;
use crate::ui::lightbox;
use iced::Size;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Grid(gallery_grid::Message),
    Lightbox(lightbox::Message),
    /// Result from loading a manifest or scanning a directory.
    GalleryLoaded(Result<Gallery, Error>),
    /// Result from the "Open folder" dialog.
    OpenFolderResult(Option<PathBuf>),
    WindowResized(Size),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Manifest file or image directory to show on startup.
    pub path: Option<String>,
    /// Image to open in the lightbox once the gallery has loaded.
    pub open_index: Option<usize>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_LIGHTBOX_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
