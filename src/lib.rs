// SPDX-License-Identifier: MPL-2.0
//! `iced_lightbox` is an image gallery with a lightbox carousel, built with
//! the Iced GUI framework.
//!
//! A gallery comes from a TOML manifest or an image folder and is shown as a
//! thumbnail grid. Any thumbnail opens a modal carousel whose slide position
//! is owned by a [`carousel::CarouselEngine`].

#![doc(html_root_url = "https://docs.rs/iced_lightbox/0.1.0")]

pub mod app;
pub mod carousel;
pub mod config;
pub mod domain;
pub mod error;
pub mod gallery_source;
pub mod i18n;
pub mod ui;
