// SPDX-License-Identifier: MPL-2.0
//! Default carousel engine with eased snap scrolling and pointer drag.
//!
//! Slides sit side by side, each `slide_width` pixels wide, so the snap
//! point of slide `i` is `i * slide_width`. Selection follows the scroll
//! target: it changes when a scroll starts, not when it settles.

use super::{CarouselEngine, EngineEvent, Emitter, Listener, ListenerId};
use crate::domain::lightbox::{DragThreshold, ScrollDuration};
use std::time::{Duration, Instant};

/// Default release speed, in pixels per second, that moves to the
/// neighbouring slide regardless of drag distance.
pub const DEFAULT_FLING_VELOCITY: f32 = 600.0;

/// A pointer held still for longer than this before release has no
/// velocity left.
pub const FLING_WINDOW: Duration = Duration::from_millis(80);

/// Construction options for [`SnapCarousel`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselOptions {
    /// Slide selected on construction (clamped to the slide count).
    pub start_index: usize,
    /// Duration of animated scrolls.
    pub duration: ScrollDuration,
    /// Distance a drag must cover to commit to a neighbouring slide.
    pub drag_threshold: DragThreshold,
    /// Release speed that commits to a neighbouring slide.
    pub fling_velocity: f32,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            start_index: 0,
            duration: ScrollDuration::default(),
            drag_threshold: DragThreshold::default(),
            fling_velocity: DEFAULT_FLING_VELOCITY,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Animation {
    from: f32,
    to: f32,
    started_at: Instant,
    duration: Duration,
}

impl Animation {
    /// Offset at `now` and whether the animation is finished.
    fn sample(&self, now: Instant) -> (f32, bool) {
        let elapsed = now.saturating_duration_since(self.started_at);
        if elapsed >= self.duration || self.duration.is_zero() {
            return (self.to, true);
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        (self.from + (self.to - self.from) * ease_out_cubic(t), false)
    }
}

#[derive(Debug, Clone, Copy)]
struct Drag {
    pointer_origin: f32,
    offset_origin: f32,
    last_pointer: f32,
    last_moved_at: Instant,
    velocity: f32,
}

impl Drag {
    /// Pointer speed at `now`; zero once the pointer has rested past
    /// [`FLING_WINDOW`].
    fn velocity_at(&self, now: Instant) -> f32 {
        if now.saturating_duration_since(self.last_moved_at) > FLING_WINDOW {
            0.0
        } else {
            self.velocity
        }
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    let inverse = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inverse * inverse * inverse
}

/// Scroll-snapping carousel over equally wide slides.
#[derive(Debug)]
pub struct SnapCarousel {
    options: CarouselOptions,
    slide_count: usize,
    slide_width: f32,
    selected: usize,
    offset: f32,
    animation: Option<Animation>,
    drag: Option<Drag>,
    emitter: Emitter,
}

impl SnapCarousel {
    /// Creates an engine settled on `options.start_index`.
    #[must_use]
    pub fn new(slide_count: usize, slide_width: f32, options: CarouselOptions) -> Self {
        let selected = options.start_index.min(slide_count.saturating_sub(1));
        let slide_width = sanitize_width(slide_width);
        Self {
            options,
            slide_count,
            slide_width,
            selected,
            offset: selected as f32 * slide_width,
            animation: None,
            drag: None,
            emitter: Emitter::new(),
        }
    }

    /// Width of one slide in pixels.
    #[must_use]
    pub fn slide_width(&self) -> f32 {
        self.slide_width
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.emitter.listener_count()
    }

    fn last_index(&self) -> usize {
        self.slide_count.saturating_sub(1)
    }

    fn snap_offset(&self, index: usize) -> f32 {
        index as f32 * self.slide_width
    }

    fn max_offset(&self) -> f32 {
        self.snap_offset(self.last_index())
    }

    fn set_offset(&mut self, offset: f32) {
        if (offset - self.offset).abs() > f32::EPSILON {
            self.offset = offset;
            self.emitter.emit(EngineEvent::Scroll);
        }
    }

    fn select(&mut self, index: usize, jump: bool) {
        if self.slide_count == 0 {
            return;
        }
        let index = index.min(self.last_index());
        let changed = index != self.selected;
        self.selected = index;
        self.drag = None;

        if changed {
            self.emitter.emit(EngineEvent::Select);
        }

        let destination = self.snap_offset(index);
        if jump || self.options.duration.is_instant() {
            self.animation = None;
            self.set_offset(destination);
        } else if (destination - self.offset).abs() > f32::EPSILON {
            self.animation = Some(Animation {
                from: self.offset,
                to: destination,
                started_at: Instant::now(),
                duration: self.options.duration.as_duration(),
            });
        } else {
            self.animation = None;
        }
    }

    /// Slide a released drag should settle on.
    fn release_target(&self, velocity: f32) -> usize {
        if self.slide_width <= 0.0 {
            return self.selected;
        }
        let nearest = (self.offset / self.slide_width).round().max(0.0) as usize;
        let nearest = nearest.min(self.last_index());
        if nearest != self.selected {
            return nearest;
        }

        let displacement = self.offset - self.snap_offset(self.selected);
        let threshold = self.options.drag_threshold.pixels(self.slide_width);
        let fling = self.options.fling_velocity;

        if displacement >= threshold || velocity >= fling {
            (self.selected + 1).min(self.last_index())
        } else if displacement <= -threshold || velocity <= -fling {
            self.selected.saturating_sub(1)
        } else {
            self.selected
        }
    }
}

fn sanitize_width(width: f32) -> f32 {
    if width.is_finite() {
        width.max(0.0)
    } else {
        0.0
    }
}

impl CarouselEngine for SnapCarousel {
    fn scroll_to(&mut self, index: usize, jump: bool) {
        self.select(index, jump);
    }

    fn scroll_next(&mut self) {
        if self.can_scroll_next() {
            self.select(self.selected + 1, false);
        }
    }

    fn scroll_prev(&mut self) {
        if self.can_scroll_prev() {
            self.select(self.selected - 1, false);
        }
    }

    fn selected_index(&self) -> usize {
        self.selected
    }

    fn can_scroll_next(&self) -> bool {
        self.slide_count > 0 && self.selected < self.last_index()
    }

    fn can_scroll_prev(&self) -> bool {
        self.slide_count > 0 && self.selected > 0
    }

    fn slide_count(&self) -> usize {
        self.slide_count
    }

    fn on(&mut self, events: &[EngineEvent]) -> Listener {
        self.emitter.subscribe(events)
    }

    fn off(&mut self, id: ListenerId) -> bool {
        self.emitter.unsubscribe(id)
    }

    fn reinit(&mut self, slide_count: usize, slide_width: f32) {
        let previous = self.selected;
        self.slide_count = slide_count;
        self.slide_width = sanitize_width(slide_width);
        self.animation = None;
        self.drag = None;
        self.selected = self.selected.min(self.last_index());
        self.offset = self.snap_offset(self.selected);

        self.emitter.emit(EngineEvent::ReInit);
        if self.selected != previous {
            self.emitter.emit(EngineEvent::Select);
        }
    }

    fn scroll_offset(&self) -> f32 {
        self.offset
    }

    fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    fn tick(&mut self, now: Instant) {
        let Some(animation) = self.animation else {
            return;
        };
        let (offset, finished) = animation.sample(now);
        self.set_offset(offset);
        if finished {
            self.animation = None;
            self.emitter.emit(EngineEvent::Settle);
        }
    }

    fn drag_start(&mut self, x: f32) {
        if self.slide_count == 0 {
            return;
        }
        self.animation = None;
        self.drag = Some(Drag {
            pointer_origin: x,
            offset_origin: self.offset,
            last_pointer: x,
            last_moved_at: Instant::now(),
            velocity: 0.0,
        });
    }

    fn drag_move(&mut self, x: f32) {
        let Some(mut drag) = self.drag else {
            return;
        };

        let now = Instant::now();
        let elapsed = now.saturating_duration_since(drag.last_moved_at).as_secs_f32();
        if elapsed > 0.0 {
            // Pointer moving left scrolls forward, so velocity is positive.
            drag.velocity = (drag.last_pointer - x) / elapsed;
        }
        drag.last_pointer = x;
        drag.last_moved_at = now;
        self.drag = Some(drag);

        let offset = (drag.offset_origin + drag.pointer_origin - x).clamp(0.0, self.max_offset());
        self.set_offset(offset);
    }

    fn drag_end(&mut self) {
        let Some(drag) = self.drag.take() else {
            return;
        };
        let target = self.release_target(drag.velocity_at(Instant::now()));
        self.select(target, false);
    }

    fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTH: f32 = 800.0;

    fn engine(count: usize, start: usize) -> SnapCarousel {
        SnapCarousel::new(
            count,
            WIDTH,
            CarouselOptions {
                start_index: start,
                ..CarouselOptions::default()
            },
        )
    }

    fn instant_engine(count: usize, start: usize) -> SnapCarousel {
        SnapCarousel::new(
            count,
            WIDTH,
            CarouselOptions {
                start_index: start,
                duration: ScrollDuration::new(0),
                ..CarouselOptions::default()
            },
        )
    }

    fn finish(engine: &mut SnapCarousel) {
        engine.tick(Instant::now() + Duration::from_secs(5));
    }

    #[test]
    fn start_index_is_clamped() {
        let carousel = engine(3, 10);
        assert_eq!(carousel.selected_index(), 2);
        assert_eq!(carousel.scroll_offset(), 2.0 * WIDTH);
    }

    #[test]
    fn bounds_report_neighbours() {
        let first = engine(3, 0);
        assert!(!first.can_scroll_prev());
        assert!(first.can_scroll_next());

        let last = engine(3, 2);
        assert!(last.can_scroll_prev());
        assert!(!last.can_scroll_next());

        let single = engine(1, 0);
        assert!(!single.can_scroll_prev());
        assert!(!single.can_scroll_next());
    }

    #[test]
    fn scroll_next_at_end_is_noop() {
        let mut carousel = engine(3, 2);
        let mut listener = carousel.on(&[EngineEvent::Select, EngineEvent::Scroll]);
        carousel.scroll_next();
        assert_eq!(carousel.selected_index(), 2);
        assert!(!carousel.is_animating());
        assert!(listener.drain().is_empty());
    }

    #[test]
    fn scroll_prev_at_start_is_noop() {
        let mut carousel = engine(3, 0);
        carousel.scroll_prev();
        assert_eq!(carousel.selected_index(), 0);
        assert!(!carousel.is_animating());
    }

    #[test]
    fn animated_scroll_selects_immediately_and_settles_on_tick() {
        let mut carousel = engine(4, 0);
        let mut listener = carousel.on(&[EngineEvent::Select, EngineEvent::Settle]);

        carousel.scroll_next();
        assert_eq!(carousel.selected_index(), 1);
        assert!(carousel.is_animating());
        assert_eq!(carousel.scroll_offset(), 0.0);
        assert_eq!(listener.drain(), vec![EngineEvent::Select]);

        finish(&mut carousel);
        assert!(!carousel.is_animating());
        assert_eq!(carousel.scroll_offset(), WIDTH);
        assert_eq!(listener.drain(), vec![EngineEvent::Settle]);
    }

    #[test]
    fn animation_eases_towards_target() {
        let mut carousel = engine(4, 0);
        carousel.scroll_to(2, false);
        carousel.tick(Instant::now() + Duration::from_millis(125));
        let midway = carousel.scroll_offset();
        assert!(midway > 0.0 && midway < 2.0 * WIDTH);
        assert!(carousel.is_animating());
    }

    #[test]
    fn jump_skips_animation() {
        let mut carousel = engine(5, 0);
        let mut listener = carousel.on(&[EngineEvent::Select, EngineEvent::Scroll]);
        carousel.scroll_to(3, true);
        assert!(!carousel.is_animating());
        assert_eq!(carousel.scroll_offset(), 3.0 * WIDTH);
        assert_eq!(
            listener.drain(),
            vec![EngineEvent::Select, EngineEvent::Scroll]
        );
    }

    #[test]
    fn scroll_to_same_index_emits_nothing() {
        let mut carousel = engine(5, 2);
        let mut listener = carousel.on(&[EngineEvent::Select]);
        carousel.scroll_to(2, false);
        assert!(listener.drain().is_empty());
    }

    #[test]
    fn scroll_to_clamps_index() {
        let mut carousel = instant_engine(3, 0);
        carousel.scroll_to(99, false);
        assert_eq!(carousel.selected_index(), 2);
    }

    #[test]
    fn zero_duration_scrolls_instantly() {
        let mut carousel = instant_engine(3, 0);
        carousel.scroll_next();
        assert!(!carousel.is_animating());
        assert_eq!(carousel.scroll_offset(), WIDTH);
    }

    #[test]
    fn reinit_clamps_selection_and_notifies() {
        let mut carousel = engine(5, 4);
        let mut listener = carousel.on(&[EngineEvent::Select, EngineEvent::ReInit]);

        carousel.reinit(3, 400.0);
        assert_eq!(carousel.selected_index(), 2);
        assert_eq!(carousel.scroll_offset(), 800.0);
        assert_eq!(
            listener.drain(),
            vec![EngineEvent::ReInit, EngineEvent::Select]
        );
    }

    #[test]
    fn reinit_with_new_width_keeps_selection() {
        let mut carousel = engine(5, 2);
        let mut listener = carousel.on(&[EngineEvent::Select, EngineEvent::ReInit]);
        carousel.reinit(5, 500.0);
        assert_eq!(carousel.selected_index(), 2);
        assert_eq!(carousel.scroll_offset(), 1000.0);
        assert_eq!(listener.drain(), vec![EngineEvent::ReInit]);
    }

    #[test]
    fn short_drag_snaps_back() {
        let mut carousel = instant_engine(3, 1);
        carousel.drag_start(400.0);
        carousel.drag_move(390.0);
        assert!(carousel.is_dragging());
        // Make sure a tiny movement is not read as a fling.
        carousel.drag = carousel.drag.map(|d| Drag { velocity: 0.0, ..d });
        carousel.drag_end();
        assert!(!carousel.is_dragging());
        assert_eq!(carousel.selected_index(), 1);
        assert_eq!(carousel.scroll_offset(), WIDTH);
    }

    #[test]
    fn drag_past_threshold_moves_forward() {
        let mut carousel = instant_engine(3, 0);
        carousel.drag_start(600.0);
        carousel.drag_move(400.0);
        carousel.drag = carousel.drag.map(|d| Drag { velocity: 0.0, ..d });
        carousel.drag_end();
        assert_eq!(carousel.selected_index(), 1);
    }

    #[test]
    fn drag_past_threshold_moves_back() {
        let mut carousel = instant_engine(3, 2);
        carousel.drag_start(100.0);
        carousel.drag_move(300.0);
        carousel.drag = carousel.drag.map(|d| Drag { velocity: 0.0, ..d });
        carousel.drag_end();
        assert_eq!(carousel.selected_index(), 1);
    }

    #[test]
    fn fast_release_flings_to_neighbour() {
        let mut carousel = instant_engine(3, 0);
        carousel.drag_start(500.0);
        carousel.drag_move(490.0);
        carousel.drag = carousel.drag.map(|d| Drag {
            velocity: 2.0 * DEFAULT_FLING_VELOCITY,
            ..d
        });
        carousel.drag_end();
        assert_eq!(carousel.selected_index(), 1);
    }

    #[test]
    fn resting_pointer_before_release_does_not_fling() {
        let mut carousel = instant_engine(3, 0);
        carousel.drag_start(500.0);
        std::thread::sleep(Duration::from_millis(10));
        carousel.drag_move(480.0);
        std::thread::sleep(FLING_WINDOW + Duration::from_millis(120));
        carousel.drag_end();
        assert_eq!(carousel.selected_index(), 0);
        assert_eq!(carousel.scroll_offset(), 0.0);
    }

    #[test]
    fn quick_flick_released_while_moving_flings() {
        let mut carousel = instant_engine(3, 0);
        carousel.drag_start(500.0);
        std::thread::sleep(Duration::from_millis(10));
        // 80px is below the drag threshold, so only velocity can advance.
        carousel.drag_move(420.0);
        carousel.drag_end();
        assert_eq!(carousel.selected_index(), 1);
    }

    #[test]
    fn velocity_expires_after_fling_window() {
        let moved = Instant::now();
        let drag = Drag {
            pointer_origin: 0.0,
            offset_origin: 0.0,
            last_pointer: 0.0,
            last_moved_at: moved,
            velocity: 1200.0,
        };
        assert_eq!(drag.velocity_at(moved + Duration::from_millis(20)), 1200.0);
        assert_eq!(drag.velocity_at(moved + FLING_WINDOW * 2), 0.0);
    }

    #[test]
    fn drag_is_clamped_to_edges() {
        let mut carousel = instant_engine(2, 0);
        carousel.drag_start(100.0);
        carousel.drag_move(900.0);
        assert_eq!(carousel.scroll_offset(), 0.0);

        carousel.drag_move(-5000.0);
        assert_eq!(carousel.scroll_offset(), WIDTH);
    }

    #[test]
    fn drag_cancels_running_animation() {
        let mut carousel = engine(3, 0);
        carousel.scroll_next();
        assert!(carousel.is_animating());
        carousel.drag_start(10.0);
        assert!(!carousel.is_animating());
    }

    #[test]
    fn empty_carousel_is_inert() {
        let mut carousel = engine(0, 3);
        assert_eq!(carousel.selected_index(), 0);
        assert!(!carousel.can_scroll_next());
        assert!(!carousel.can_scroll_prev());
        carousel.scroll_to(2, true);
        carousel.drag_start(0.0);
        assert!(!carousel.is_dragging());
    }

    #[test]
    fn off_detaches_listener() {
        let mut carousel = instant_engine(3, 0);
        let mut listener = carousel.on(&[EngineEvent::Select]);
        assert!(carousel.off(listener.id()));
        assert_eq!(carousel.listener_count(), 0);
        carousel.scroll_next();
        assert!(listener.drain().is_empty());
    }
}
