// SPDX-License-Identifier: MPL-2.0
//! Application root state: the gallery page hosting the lightbox.
//!
//! The `App` owns the lightbox open request (`Option<usize>`). Thumbnails set
//! it, [`lightbox::Effect::CloseRequested`] clears it, and every change is
//! pushed to the lightbox through [`lightbox::State::sync_request`].

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config, GalleryConfig};
use crate::domain::gallery::Gallery;
use crate::error::Error;
use crate::gallery_source;
use crate::i18n::fluent::I18n;
use crate::ui::lightbox;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use tracing::{info, warn};

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    gallery_config: GalleryConfig,
    gallery: Gallery,
    gallery_error: Option<Error>,
    /// Message key of a settings problem found at startup.
    config_warning: Option<String>,
    window_size: Size,
    /// `Some(index)` while the lightbox should be showing.
    lightbox_request: Option<usize>,
    lightbox: lightbox::State,
    /// `--open` index, applied once the startup gallery has loaded.
    pending_open: Option<usize>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("images", &self.gallery.len())
            .field("lightbox_request", &self.lightbox_request)
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_WIDTH: f32 = lightbox::DEFAULT_VIEWPORT.width;
pub const WINDOW_DEFAULT_HEIGHT: f32 = lightbox::DEFAULT_VIEWPORT.height;
pub const MIN_WINDOW_WIDTH: f32 = 480.0;
pub const MIN_WINDOW_HEIGHT: f32 = 360.0;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; flags are consumed on first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            theme_mode: ThemeMode::System,
            gallery_config: GalleryConfig::default(),
            gallery: Gallery::default(),
            gallery_error: None,
            config_warning: None,
            window_size: lightbox::DEFAULT_VIEWPORT,
            lightbox_request: None,
            lightbox: lightbox::State::default(),
            pending_open: None,
        }
    }
}

impl App {
    /// Initializes application state and starts loading the gallery named
    /// on the command line, if any.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_override(flags.config_dir.clone());
        let (config, config_warning) = config::load();
        let app = Self::with_config(&flags, &config, config_warning);
        info!(locale = %app.i18n.current_locale(), "application started");

        let task = match flags.path {
            Some(path) => load_gallery(PathBuf::from(path)),
            None => Task::none(),
        };

        (app, task)
    }

    /// Builds the initial state from loaded settings.
    fn with_config(flags: &Flags, config: &Config, config_warning: Option<String>) -> Self {
        if let Some(key) = &config_warning {
            warn!(key, "using default settings");
        }

        App {
            i18n: I18n::new(flags.lang.clone(), config),
            theme_mode: config.general.theme_mode,
            gallery_config: config.gallery.clone(),
            config_warning,
            lightbox: lightbox::State::new(config.lightbox.settings()),
            pending_open: flags.open_index,
            ..Self::default()
        }
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.gallery.heading() {
            Some(heading) => format!("{heading} - {app_name}"),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            gallery: &self.gallery,
            columns: self.gallery_config.columns_for_width(self.window_size.width),
            notice: self.config_warning.as_deref(),
            error: self.gallery_error.as_ref(),
            lightbox: &self.lightbox,
        })
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            self.lightbox.subscription().map(Message::Lightbox),
        ])
    }

    /// Pushes the current open request and image list to the lightbox.
    fn sync_lightbox(&mut self) -> Task<Message> {
        let images = self.gallery.shared_images();
        self.lightbox
            .sync_request(&images, self.lightbox_request)
            .map(Message::Lightbox)
    }
}

/// Loads a gallery from disk off the UI thread.
fn load_gallery(path: PathBuf) -> Task<Message> {
    info!(path = %path.display(), "loading gallery");
    Task::perform(gallery_source::load_async(path), Message::GalleryLoaded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gallery::ImageDescriptor;
    use crate::ui::gallery_grid;
    use crate::ui::lightbox::CloseReason;

    fn app_with_images(count: usize) -> App {
        let images = (0..count)
            .map(|i| ImageDescriptor::new(format!("/tmp/{i}.png"), format!("alt {i}"), format!("{i}")))
            .collect();
        App {
            gallery: Gallery::new(images),
            ..App::default()
        }
    }

    #[test]
    fn thumbnail_press_opens_lightbox() {
        let mut app = app_with_images(4);
        let _ = app.update(Message::Grid(gallery_grid::Message::ThumbnailPressed(2)));

        assert_eq!(app.lightbox_request, Some(2));
        assert_eq!(app.lightbox.slides().map(|s| s.current_index), Some(2));
    }

    #[test]
    fn close_effect_clears_request() {
        let mut app = app_with_images(3);
        let _ = app.update(Message::Grid(gallery_grid::Message::ThumbnailPressed(0)));
        let _ = app.update(Message::Lightbox(lightbox::Message::Close(CloseReason::Escape)));

        assert_eq!(app.lightbox_request, None);
        assert!(!app.lightbox.is_open());
    }

    #[test]
    fn loaded_gallery_applies_pending_open() {
        let mut app = App {
            pending_open: Some(1),
            ..App::default()
        };
        let gallery = Gallery::new(vec![
            ImageDescriptor::new("/a.png", "a", "a"),
            ImageDescriptor::new("/b.png", "b", "b"),
        ]);
        let _ = app.update(Message::GalleryLoaded(Ok(gallery)));

        assert_eq!(app.lightbox_request, Some(1));
        assert_eq!(app.lightbox.slides().map(|s| s.current_index), Some(1));
        assert_eq!(app.pending_open, None);
    }

    #[test]
    fn failed_load_keeps_previous_gallery() {
        let mut app = app_with_images(2);
        let _ = app.update(Message::GalleryLoaded(Err(Error::Io("gone".into()))));

        assert_eq!(app.gallery.len(), 2);
        assert!(app.gallery_error.is_some());
    }

    #[test]
    fn resize_reaches_lightbox() {
        let mut app = app_with_images(2);
        let size = Size::new(800.0, 600.0);
        let _ = app.update(Message::WindowResized(size));

        assert_eq!(app.window_size, size);
        assert_eq!(app.lightbox.viewport(), size);
    }

    #[test]
    fn unreadable_settings_surface_a_notice() {
        let dir = tempfile::tempdir().expect("temp dir");
        std::fs::write(dir.path().join("settings.toml"), "[[[ broken").expect("write");
        let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

        let flags = Flags {
            lang: Some("fr".to_string()),
            ..Flags::default()
        };
        let app = App::with_config(&flags, &config, warning);

        let key = app.config_warning.as_deref().expect("warning kept for the grid");
        assert_eq!(key, "notification-config-load-error");
        assert!(app.i18n.tr(key).contains("défaut"));
    }

    #[test]
    fn readable_settings_have_no_notice() {
        let app = App::with_config(&Flags::default(), &config::Config::default(), None);
        assert!(app.config_warning.is_none());
    }

    #[test]
    fn title_includes_heading() {
        let mut app = app_with_images(1);
        app.i18n = I18n::new(Some("en-US".to_string()), &config::Config::default());
        assert_eq!(app.title(), "Gallery");
        app.gallery = app.gallery.clone().with_heading("Trips");
        assert_eq!(app.title(), "Trips - Gallery");
    }
}
