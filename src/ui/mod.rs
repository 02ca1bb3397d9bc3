// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`gallery_grid`] - Thumbnail grid page
//! - [`lightbox`] - Modal carousel over the grid
//!
//! # Shared Infrastructure
//!
//! - [`modal`] - Overlay primitive with an input-blocking backdrop
//! - [`widgets`] - Custom Iced widgets
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod gallery_grid;
pub mod lightbox;
pub mod modal;
pub mod styles;
pub mod theming;
pub mod widgets;
