// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Surface behind the empty-state and error blocks of the gallery page.
///
/// Derived from the active theme background so it reads well in light and
/// dark modes.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Text color for gallery load errors.
#[must_use]
pub fn error_text(_theme: &Theme) -> container::Style {
    container::Style {
        text_color: Some(palette::ERROR_500),
        ..Default::default()
    }
}
