// SPDX-License-Identifier: MPL-2.0
//! Modal primitive: centered content over a dimmed, input-blocking backdrop.

use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::keyboard::{key::Named, Key};
use iced::widget::{mouse_area, opaque, Container, Stack};
use iced::{Element, Length};

/// Layers `content` over `base`.
///
/// The base view receives no pointer input while the modal is shown.
/// Pressing the backdrop emits `on_blur` when one is given; presses on the
/// content itself never reach the backdrop.
pub fn modal<'a, Message>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    on_blur: Option<Message>,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let backdrop = Container::new(opaque(content))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::overlay::backdrop);

    let blocker = match on_blur {
        Some(message) => opaque(mouse_area(backdrop).on_press(message)),
        None => opaque(backdrop),
    };

    Stack::new().push(base).push(blocker).into()
}

/// Whether `key` dismisses a modal.
#[must_use]
pub fn is_dismiss_key(key: &Key) -> bool {
    matches!(key, Key::Named(Named::Escape))
}
