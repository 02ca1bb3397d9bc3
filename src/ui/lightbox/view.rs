// SPDX-License-Identifier: MPL-2.0
//! Lightbox overlay rendering.
//!
//! Layout, top to bottom: counter and close control, the slide strip with
//! the previous/next arrows layered on it, then the caption of the current
//! slide. Arrows are left out entirely when the engine cannot scroll that
//! way.

use super::{CloseReason, Message, Session, State};
use crate::carousel::CarouselEngine;
use crate::domain::gallery::ImageDescriptor;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette::WHITE, radius, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::locked_scrollable;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::image::{Handle, Image};
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{
    button, mouse_area, tooltip, Column, Container, Id, Row, Scrollable, Space, Stack, Text,
};
use iced::{mouse, ContentFit, Element, Length};

/// Inputs the lightbox view needs from the host.
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
}

impl<E: CarouselEngine> State<E> {
    /// Overlay content, or `None` while closed.
    ///
    /// The host layers this over its own view with [`crate::ui::modal`].
    pub fn view<'a>(&'a self, env: ViewEnv<'a>) -> Option<Element<'a, Message>> {
        match &self.phase {
            super::Phase::Closed => None,
            super::Phase::Empty { .. } => Some(empty_view(env.i18n)),
            super::Phase::Open(session) => Some(session_view(session, self.slide_width(), env.i18n)),
        }
    }
}

fn close_button<'a>(i18n: &I18n) -> Element<'a, Message> {
    let close = button(Text::new("✕").size(typography::TITLE_MD))
        .padding(spacing::XS)
        .style(styles::button_overlay(
            WHITE,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_HOVER,
        ))
        .on_press(Message::Close(CloseReason::CloseButton));

    tooltip(
        close,
        Text::new(i18n.tr("lightbox-close")).size(typography::CAPTION),
        tooltip::Position::Bottom,
    )
    .into()
}

fn empty_view<'a>(i18n: &I18n) -> Element<'a, Message> {
    let top_bar = Row::new()
        .push(Space::new().width(Length::Fill))
        .push(close_button(i18n));

    let message = Container::new(Text::new(i18n.tr("lightbox-no-images")).size(typography::BODY_LG))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center);

    Column::new()
        .padding(spacing::MD)
        .width(Length::Fixed(sizing::EMPTY_STATE_WIDTH))
        .height(Length::Shrink)
        .push(top_bar)
        .push(message)
        .into()
}

fn session_view<'a, E: CarouselEngine>(
    session: &'a Session<E>,
    slide_width: f32,
    i18n: &I18n,
) -> Element<'a, Message> {
    let slides = session.slides();

    let counter = Container::new(Text::new(slides.counter_label()).size(typography::BODY))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::overlay::indicator(radius::FULL));

    let top_bar = Row::new()
        .align_y(Vertical::Center)
        .push(counter)
        .push(Space::new().width(Length::Fill))
        .push(close_button(i18n));

    let mut strip = Stack::new().push(slide_strip(session, slide_width));

    if slides.can_scroll_prev {
        strip = strip.push(arrow("◀", Message::Previous, Horizontal::Left));
    }
    if slides.can_scroll_next {
        strip = strip.push(arrow("▶", Message::Next, Horizontal::Right));
    }

    let caption = session
        .current_image()
        .map(ImageDescriptor::label)
        .unwrap_or_default();
    let caption_band = Container::new(Text::new(caption).size(typography::BODY_LG))
        .width(Length::Fill)
        .padding(spacing::SM)
        .align_x(Horizontal::Center)
        .style(styles::overlay::caption);

    Column::new()
        .spacing(spacing::XS)
        .width(Length::Fixed(slide_width))
        .height(Length::Fill)
        .padding([spacing::MD, 0.0])
        .push(top_bar)
        .push(strip)
        .push(caption_band)
        .into()
}

fn slide_strip<'a, E: CarouselEngine>(
    session: &'a Session<E>,
    slide_width: f32,
) -> Element<'a, Message> {
    let row = session
        .images()
        .iter()
        .fold(Row::new().height(Length::Fill), |row, image| {
            row.push(slide(image, slide_width))
        });

    let scrollable = Scrollable::new(row)
        .id(Id::new(super::STRIP_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .direction(Direction::Horizontal(Scrollbar::hidden()));

    let interaction = if session.engine().is_dragging() {
        mouse::Interaction::Grabbing
    } else {
        mouse::Interaction::Grab
    };

    mouse_area(locked_scrollable(scrollable))
        .interaction(interaction)
        .on_press(Message::PointerPressed)
        .on_release(Message::PointerReleased)
        .on_move(Message::PointerMoved)
        .on_exit(Message::PointerLeft)
        .into()
}

fn slide<'a>(image: &ImageDescriptor, slide_width: f32) -> Element<'a, Message> {
    let picture = Image::new(Handle::from_path(image.local_path()))
        .content_fit(ContentFit::Contain)
        .width(Length::Fill)
        .height(Length::Fill);

    Container::new(picture)
        .width(Length::Fixed(slide_width))
        .height(Length::Fill)
        .padding([0.0, spacing::XS])
        .into()
}

fn arrow<'a>(glyph: &'a str, on_press: Message, side: Horizontal) -> Element<'a, Message> {
    let control = button(Text::new(glyph).size(typography::TITLE_LG))
        .padding(spacing::SM)
        .style(styles::button_overlay(
            WHITE,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_HOVER,
        ))
        .on_press(on_press);

    Container::new(control)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .align_x(side)
        .align_y(Vertical::Center)
        .into()
}
