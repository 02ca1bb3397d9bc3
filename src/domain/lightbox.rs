// SPDX-License-Identifier: MPL-2.0
//! Lightbox and gallery newtypes.
//!
//! This module provides type-safe wrappers for carousel and grid settings,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Scroll Duration
// =============================================================================

/// Carousel scroll animation bounds, in milliseconds.
pub mod scroll_duration_bounds {
    /// Minimum duration (0 = every scroll is a jump).
    pub const MIN_MS: u32 = 0;
    /// Maximum duration.
    pub const MAX_MS: u32 = 2000;
    /// Default duration.
    pub const DEFAULT_MS: u32 = 250;
}

/// Duration of an animated carousel scroll, guaranteed to be within 0–2000 ms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollDuration(u32);

impl ScrollDuration {
    /// Creates a new scroll duration, clamping to the valid range.
    #[must_use]
    pub fn new(millis: u32) -> Self {
        Self(millis.clamp(
            scroll_duration_bounds::MIN_MS,
            scroll_duration_bounds::MAX_MS,
        ))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns the value as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(u64::from(self.0))
    }

    /// Returns true if scrolls complete instantly.
    #[must_use]
    pub fn is_instant(self) -> bool {
        self.0 == 0
    }
}

impl Default for ScrollDuration {
    fn default() -> Self {
        Self(scroll_duration_bounds::DEFAULT_MS)
    }
}

// =============================================================================
// Drag Threshold
// =============================================================================

/// Drag commit threshold bounds, as a fraction of the slide width.
pub mod drag_threshold_bounds {
    /// Minimum fraction.
    pub const MIN: f32 = 0.05;
    /// Maximum fraction.
    pub const MAX: f32 = 0.9;
    /// Default fraction.
    pub const DEFAULT: f32 = 0.2;
}

/// Fraction of a slide a drag must cover before release moves to the
/// neighbouring slide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragThreshold(f32);

impl DragThreshold {
    /// Creates a new threshold, clamping to the valid range.
    /// Non-finite input falls back to the default.
    #[must_use]
    pub fn new(fraction: f32) -> Self {
        if !fraction.is_finite() {
            return Self::default();
        }
        Self(fraction.clamp(drag_threshold_bounds::MIN, drag_threshold_bounds::MAX))
    }

    /// Returns the raw fraction.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the threshold in pixels for a given slide width.
    #[must_use]
    pub fn pixels(self, slide_width: f32) -> f32 {
        self.0 * slide_width.max(0.0)
    }
}

impl Default for DragThreshold {
    fn default() -> Self {
        Self(drag_threshold_bounds::DEFAULT)
    }
}

// =============================================================================
// Gallery Columns
// =============================================================================

/// Thumbnail grid column bounds.
pub mod column_bounds {
    /// Minimum column count.
    pub const MIN: u16 = 1;
    /// Maximum column count.
    pub const MAX: u16 = 6;
    /// Default column count below the wide breakpoint.
    pub const DEFAULT_NARROW: u16 = 2;
    /// Default column count at or above the wide breakpoint.
    pub const DEFAULT_WIDE: u16 = 3;
}

/// Number of thumbnail columns, guaranteed to be within 1–6.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryColumns(u16);

impl GalleryColumns {
    /// Creates a new column count, clamping to the valid range.
    #[must_use]
    pub fn new(count: u16) -> Self {
        Self(count.clamp(column_bounds::MIN, column_bounds::MAX))
    }

    /// Returns the column count.
    #[must_use]
    pub fn value(self) -> u16 {
        self.0
    }

    /// Returns the column count as usize, for chunking.
    #[must_use]
    pub fn as_usize(self) -> usize {
        usize::from(self.0)
    }
}

impl Default for GalleryColumns {
    fn default() -> Self {
        Self(column_bounds::DEFAULT_NARROW)
    }
}
