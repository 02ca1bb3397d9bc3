// SPDX-License-Identifier: MPL-2.0
//! Carousel engine: scroll-snapping between a fixed set of equally wide slides.
//!
//! The lightbox treats the engine as the single owner of scroll position.
//! It only reads [`CarouselEngine::selected_index`],
//! [`CarouselEngine::can_scroll_prev`] and [`CarouselEngine::can_scroll_next`]
//! after the engine reports a change through a [`Listener`].
//!
//! # Events
//!
//! - [`EngineEvent::Select`]: the selected slide changed (programmatic scroll,
//!   drag release, or a re-measurement that clamped the selection)
//! - [`EngineEvent::ReInit`]: slide count or slide width changed
//! - [`EngineEvent::Scroll`]: the scroll offset moved
//! - [`EngineEvent::Settle`]: an animated scroll reached its snap point

mod emitter;
mod snap;

pub use emitter::{Emitter, Listener, ListenerId};
pub use snap::{CarouselOptions, SnapCarousel};

use std::time::Instant;

/// Notifications emitted by a carousel engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineEvent {
    Select,
    ReInit,
    Scroll,
    Settle,
}

/// Contract of a carousel engine as seen by the lightbox.
///
/// Implementations own scroll physics. Bounds are enforced here: scrolling
/// past the first or last slide is a no-op, there is no wraparound.
pub trait CarouselEngine {
    /// Scrolls to `index` (clamped). `jump` skips the animation.
    fn scroll_to(&mut self, index: usize, jump: bool);

    /// Scrolls one slide forward. No-op on the last slide.
    fn scroll_next(&mut self);

    /// Scrolls one slide back. No-op on the first slide.
    fn scroll_prev(&mut self);

    /// Index of the slide the engine is settled on or heading to.
    fn selected_index(&self) -> usize;

    /// Whether a slide exists after the selected one.
    fn can_scroll_next(&self) -> bool;

    /// Whether a slide exists before the selected one.
    fn can_scroll_prev(&self) -> bool;

    /// Number of slides.
    fn slide_count(&self) -> usize;

    /// Registers a listener for the given event kinds.
    fn on(&mut self, events: &[EngineEvent]) -> Listener;

    /// Removes a listener. Returns false if it was not registered.
    fn off(&mut self, id: ListenerId) -> bool;

    /// Re-measures slides after a count or layout change.
    fn reinit(&mut self, slide_count: usize, slide_width: f32);

    /// Current horizontal scroll offset in pixels.
    fn scroll_offset(&self) -> f32;

    /// Whether an animated scroll is in flight.
    fn is_animating(&self) -> bool;

    /// Advances the animation to `now`.
    fn tick(&mut self, now: Instant);

    /// Starts a pointer drag at horizontal position `x`.
    fn drag_start(&mut self, x: f32);

    /// Moves an active drag to horizontal position `x`.
    fn drag_move(&mut self, x: f32);

    /// Releases an active drag and snaps to a slide.
    fn drag_end(&mut self);

    /// Whether a pointer drag is active.
    fn is_dragging(&self) -> bool;
}
