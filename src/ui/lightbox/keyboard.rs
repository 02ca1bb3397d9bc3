// SPDX-License-Identifier: MPL-2.0
//! Keyboard surface of the lightbox.
//!
//! While the lightbox is showing, ArrowLeft, ArrowRight and Escape are
//! routed here regardless of which widget reported the event, so the host
//! view underneath never reacts to them.

use super::{CloseReason, Message};
use crate::ui::modal;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, Event, Subscription};

/// Maps a key press to a lightbox message.
#[must_use]
pub fn map_key(key: &Key) -> Option<Message> {
    if modal::is_dismiss_key(key) {
        return Some(Message::Close(CloseReason::Escape));
    }
    match key {
        Key::Named(Named::ArrowLeft) => Some(Message::Previous),
        Key::Named(Named::ArrowRight) => Some(Message::Next),
        _ => None,
    }
}

fn on_event(event: Event, _status: event::Status, _window: iced::window::Id) -> Option<Message> {
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => map_key(&key),
        _ => None,
    }
}

/// Listens for lightbox keys.
///
/// Key presses are taken even when a host widget already captured them.
#[must_use]
pub fn subscription() -> Subscription<Message> {
    event::listen_with(on_event)
}
