// SPDX-License-Identifier: MPL-2.0
//! Thumbnail grid page.
//!
//! Shows the gallery heading, an image count and the thumbnails laid out in
//! rows of [`GalleryColumns`]. Pressing a thumbnail asks the host to open the
//! lightbox at that index; the grid itself holds no state.

use crate::domain::gallery::{Gallery, ImageDescriptor};
use crate::domain::lightbox::GalleryColumns;
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::image::{Handle, Image};
use iced::widget::{button, scrollable, Column, Container, Row, Space, Text};
use iced::{ContentFit, Element, Length};

/// Contextual data needed to render the grid.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a Gallery,
    pub columns: GalleryColumns,
    /// Message key of a startup notice, such as unreadable settings.
    pub notice: Option<&'a str>,
    pub error: Option<&'a Error>,
}

/// Messages emitted by the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    ThumbnailPressed(usize),
    OpenFolder,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    OpenLightbox(usize),
    OpenFolder,
}

/// Process a grid message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::ThumbnailPressed(index) => Event::OpenLightbox(*index),
        Message::OpenFolder => Event::OpenFolder,
    }
}

/// Localized message key for a gallery load failure.
#[must_use]
pub fn error_key(error: &Error) -> &'static str {
    match error {
        Error::Manifest(err) => err.i18n_key(),
        Error::Io(_) | Error::Config(_) => "error-io",
    }
}

/// Message keys shown under the header: the startup notice first, then the
/// last load failure.
fn status_keys<'a>(notice: Option<&'a str>, error: Option<&Error>) -> Vec<&'a str> {
    notice.into_iter().chain(error.map(error_key)).collect()
}

/// Splits `len` items into consecutive index ranges of `columns` items.
fn row_ranges(len: usize, columns: usize) -> impl Iterator<Item = std::ops::Range<usize>> {
    let columns = columns.max(1);
    (0..len)
        .step_by(columns)
        .map(move |start| start..(start + columns).min(len))
}

/// Render the grid page.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let heading = ctx
        .gallery
        .heading()
        .map_or_else(|| ctx.i18n.tr("gallery-heading-default"), str::to_string);
    let count = ctx.gallery.len().to_string();

    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Bottom)
        .push(Text::new(heading).size(typography::TITLE_LG))
        .push(
            Text::new(
                ctx.i18n
                    .tr_with_args("gallery-image-count", &[("count", count.as_str())]),
            )
            .size(typography::BODY),
        );

    let mut content = Column::new()
        .width(Length::Fill)
        .spacing(spacing::LG)
        .padding(spacing::MD)
        .push(header);

    for key in status_keys(ctx.notice, ctx.error) {
        content = content.push(
            Container::new(Text::new(ctx.i18n.tr(key)).size(typography::BODY))
                .style(styles::container::error_text),
        );
    }

    if ctx.gallery.is_empty() {
        content = content.push(empty_state(ctx.i18n));
    } else {
        content = content.push(grid(ctx.gallery.images(), ctx.columns));
    }

    scrollable(content).into()
}

fn grid(images: &[ImageDescriptor], columns: GalleryColumns) -> Element<'_, Message> {
    let columns = columns.as_usize();

    let rows: Vec<Element<'_, Message>> = row_ranges(images.len(), columns)
        .map(|range| {
            let filled = range.len();
            let mut row = Row::new().spacing(spacing::MD).width(Length::Fill);
            for index in range {
                row = row.push(thumbnail(index, &images[index]));
            }
            // Pad the last row so its cells keep the same width.
            for _ in filled..columns {
                row = row.push(Space::new().width(Length::Fill));
            }
            row.into()
        })
        .collect();

    Column::with_children(rows)
        .spacing(spacing::MD)
        .width(Length::Fill)
        .into()
}

fn thumbnail(index: usize, image: &ImageDescriptor) -> Element<'_, Message> {
    let picture = Image::new(Handle::from_path(image.local_path()))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::THUMBNAIL_HEIGHT))
        .content_fit(ContentFit::Cover);

    let card = Column::new()
        .spacing(spacing::XS)
        .width(Length::Fill)
        .push(picture)
        .push(Text::new(image.label()).size(typography::CAPTION));

    button(card)
        .width(Length::Fill)
        .padding(spacing::XS)
        .style(styles::button::thumbnail)
        .on_press(Message::ThumbnailPressed(index))
        .into()
}

fn empty_state<'a>(i18n: &I18n) -> Element<'a, Message> {
    let open_button = button(Text::new(i18n.tr("gallery-open-folder")).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button_primary)
        .on_press(Message::OpenFolder);

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(Text::new(i18n.tr("gallery-empty")).size(typography::BODY_LG))
        .push(open_button);

    Container::new(
        Container::new(content)
            .padding(spacing::LG)
            .width(Length::Fixed(sizing::EMPTY_STATE_WIDTH))
            .align_x(Horizontal::Center)
            .style(styles::container::panel),
    )
    .width(Length::Fill)
    .align_x(Horizontal::Center)
    .into()
}
