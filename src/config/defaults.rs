// SPDX-License-Identifier: MPL-2.0
//! Default values for configuration settings.
//!
//! Bounds for validated settings live with their newtypes in
//! [`crate::domain::lightbox`]; they are re-exported here so the config
//! layer has a single place to look.
//!
//! # Categories
//!
//! - **Lightbox**: Scroll animation and drag commit threshold
//! - **Gallery**: Grid columns and responsive breakpoint

pub use crate::domain::lightbox::{column_bounds, drag_threshold_bounds, scroll_duration_bounds};

// ==========================================================================
// Lightbox Defaults
// ==========================================================================

/// Default carousel scroll duration in milliseconds.
pub const DEFAULT_SCROLL_DURATION_MS: u32 = scroll_duration_bounds::DEFAULT_MS;

/// Default drag threshold, as a fraction of the slide width.
pub const DEFAULT_DRAG_THRESHOLD: f32 = drag_threshold_bounds::DEFAULT;

/// Whether pressing the backdrop closes the lightbox by default.
pub const DEFAULT_BACKDROP_CLOSES: bool = true;

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Default column count below the wide breakpoint.
pub const DEFAULT_COLUMNS_NARROW: u16 = column_bounds::DEFAULT_NARROW;

/// Default column count at or above the wide breakpoint.
pub const DEFAULT_COLUMNS_WIDE: u16 = column_bounds::DEFAULT_WIDE;

/// Window width, in logical pixels, at which the grid switches to the wide
/// column count.
pub const DEFAULT_WIDE_BREAKPOINT: f32 = 768.0;

/// Smallest accepted breakpoint.
pub const MIN_WIDE_BREAKPOINT: f32 = 0.0;

/// Largest accepted breakpoint.
pub const MAX_WIDE_BREAKPOINT: f32 = 10_000.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_SCROLL_DURATION_MS <= scroll_duration_bounds::MAX_MS);
    assert!(DEFAULT_COLUMNS_NARROW <= DEFAULT_COLUMNS_WIDE);
    assert!(DEFAULT_COLUMNS_WIDE <= column_bounds::MAX);
    assert!(DEFAULT_WIDE_BREAKPOINT > MIN_WIDE_BREAKPOINT);
    assert!(DEFAULT_WIDE_BREAKPOINT < MAX_WIDE_BREAKPOINT);
};
