// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Window resizes drive both the grid's column count and the lightbox's
//! slide width. Lightbox keys and frame ticks come from the lightbox's own
//! subscription.

use super::Message;
use iced::{event, window, Subscription};

/// Routes window events that the application cares about.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        _ => None,
    })
}
