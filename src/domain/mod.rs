// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core gallery types with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`gallery`]: Gallery content ([`ImageDescriptor`](gallery::ImageDescriptor),
//!   [`Gallery`](gallery::Gallery), [`clamp_index`](gallery::clamp_index))
//! - [`lightbox`]: Lightbox value objects ([`ScrollDuration`](lightbox::ScrollDuration),
//!   [`DragThreshold`](lightbox::DragThreshold), [`GalleryColumns`](lightbox::GalleryColumns))

pub mod gallery;
pub mod lightbox;
