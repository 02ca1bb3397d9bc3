// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The gallery grid is always rendered; the lightbox, when showing, is
//! stacked over it as a modal.

use super::Message;
use crate::domain::gallery::Gallery;
use crate::domain::lightbox::GalleryColumns;
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::gallery_grid;
use crate::ui::lightbox::{self, CloseReason, ViewEnv};
use crate::ui::modal::modal;
use iced::widget::Container;
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a Gallery,
    pub columns: GalleryColumns,
    pub notice: Option<&'a str>,
    pub error: Option<&'a Error>,
    pub lightbox: &'a lightbox::State,
}

/// Renders the gallery page and, when requested, the lightbox over it.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let grid = gallery_grid::view(gallery_grid::ViewContext {
        i18n: ctx.i18n,
        gallery: ctx.gallery,
        columns: ctx.columns,
        notice: ctx.notice,
        error: ctx.error,
    })
    .map(Message::Grid);

    let page = Container::new(grid)
        .width(Length::Fill)
        .height(Length::Fill);

    match ctx.lightbox.view(ViewEnv { i18n: ctx.i18n }) {
        Some(overlay) => modal(
            page,
            overlay.map(Message::Lightbox),
            Some(Message::Lightbox(lightbox::Message::Close(
                CloseReason::Backdrop,
            ))),
        ),
        None => page.into(),
    }
}
