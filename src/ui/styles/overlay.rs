// SPDX-License-Identifier: MPL-2.0
//! Lightbox overlay styles: backdrop, slide counter and caption band.

use crate::ui::design_tokens::{
    opacity,
    palette::{BLACK, WHITE},
};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

fn indicator_background() -> Color {
    Color {
        a: opacity::OVERLAY_STRONG,
        ..BLACK
    }
}

fn indicator_border() -> Color {
    Color {
        a: opacity::OVERLAY_SUBTLE,
        ..WHITE
    }
}

/// Dimmed full-window layer behind the lightbox content.
#[must_use]
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP,
            ..BLACK
        })),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Pill used for the slide counter.
pub fn indicator(rad: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(indicator_background())),
        text_color: Some(WHITE),
        border: Border {
            color: indicator_border(),
            width: 1.0,
            radius: rad.into(),
        },
        ..Default::default()
    }
}

/// Band under the strip holding the caption.
#[must_use]
pub fn caption(_theme: &Theme) -> container::Style {
    container::Style {
        text_color: Some(WHITE),
        ..Default::default()
    }
}
