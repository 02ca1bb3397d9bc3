// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::{load_gallery, App, Message};
use crate::domain::gallery::Gallery;
use crate::error::Error;
use crate::ui::gallery_grid::{self, Event as GridEvent};
use crate::ui::lightbox::{self, Effect as LightboxEffect};
use iced::{Size, Task};
use std::path::PathBuf;
use tracing::{info, warn};

impl App {
    pub(super) fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Grid(grid_message) => self.handle_grid_message(&grid_message),
            Message::Lightbox(lightbox_message) => self.handle_lightbox_message(lightbox_message),
            Message::GalleryLoaded(result) => self.handle_gallery_loaded(result),
            Message::OpenFolderResult(path) => match path {
                Some(path) => load_gallery(path),
                None => Task::none(),
            },
            Message::WindowResized(size) => self.handle_window_resized(size),
        }
    }

    fn handle_grid_message(&mut self, message: &gallery_grid::Message) -> Task<Message> {
        match gallery_grid::update(message) {
            GridEvent::OpenLightbox(index) => {
                self.lightbox_request = Some(index);
                self.sync_lightbox()
            }
            GridEvent::OpenFolder => open_folder_dialog(self.i18n.tr("gallery-open-folder-dialog")),
        }
    }

    fn handle_lightbox_message(&mut self, message: lightbox::Message) -> Task<Message> {
        let (effect, task) = self.lightbox.handle_message(message);
        let task = task.map(Message::Lightbox);
        match effect {
            LightboxEffect::None => task,
            LightboxEffect::CloseRequested(_) => {
                self.lightbox_request = None;
                Task::batch([task, self.sync_lightbox()])
            }
        }
    }

    fn handle_gallery_loaded(&mut self, result: Result<Gallery, Error>) -> Task<Message> {
        match result {
            Ok(gallery) => {
                info!(images = gallery.len(), "gallery loaded");
                self.gallery = gallery;
                self.gallery_error = None;
                // A new list never keeps a session built for the old one.
                self.lightbox_request = self.pending_open.take();
                self.sync_lightbox()
            }
            Err(err) => {
                warn!(error = %err, "failed to load gallery");
                self.pending_open = None;
                self.gallery_error = Some(err);
                Task::none()
            }
        }
    }

    fn handle_window_resized(&mut self, size: Size) -> Task<Message> {
        self.window_size = size;
        self.handle_lightbox_message(lightbox::Message::ViewportResized(size))
    }
}

/// Asks the user for an image folder.
fn open_folder_dialog(title: String) -> Task<Message> {
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .set_title(title)
                .pick_folder()
                .await
                .map(|handle| PathBuf::from(handle.path()))
        },
        Message::OpenFolderResult,
    )
}
