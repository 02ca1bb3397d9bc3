// SPDX-License-Identifier: MPL-2.0
//! Open lightbox session: one engine, one listener, one slide snapshot.
//!
//! A session exists only while the lightbox shows at least one image. It is
//! created at the requested index and detaches from its engine when dropped.

use crate::carousel::{CarouselEngine, EngineEvent, Listener};
use crate::domain::gallery::ImageDescriptor;
use std::sync::Arc;
use tracing::debug;

/// Events that invalidate the slide snapshot.
const SYNC_EVENTS: [EngineEvent; 2] = [EngineEvent::Select, EngineEvent::ReInit];

/// Snapshot of the engine's position, replaced as a whole on every sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideState {
    pub current_index: usize,
    pub can_scroll_prev: bool,
    pub can_scroll_next: bool,
    pub total: usize,
}

impl SlideState {
    /// Reads all fields from the engine in one query round.
    #[must_use]
    pub fn read<E: CarouselEngine>(engine: &E) -> Self {
        Self {
            current_index: engine.selected_index(),
            can_scroll_prev: engine.can_scroll_prev(),
            can_scroll_next: engine.can_scroll_next(),
            total: engine.slide_count(),
        }
    }

    /// One-based position label, e.g. `3 / 8`.
    #[must_use]
    pub fn counter_label(&self) -> String {
        format!("{} / {}", self.current_index + 1, self.total)
    }
}

/// A lightbox opened on a non-empty image list.
#[derive(Debug)]
pub struct Session<E: CarouselEngine> {
    images: Arc<[ImageDescriptor]>,
    engine: E,
    listener: Listener,
    slides: SlideState,
    requested_index: usize,
    dismissed: bool,
}

impl<E: CarouselEngine> Session<E> {
    /// Subscribes to `engine`, jumps to `index` and takes the first snapshot.
    ///
    /// `index` must already be clamped to the image list.
    pub(super) fn open(images: Arc<[ImageDescriptor]>, index: usize, mut engine: E) -> Self {
        let listener = engine.on(&SYNC_EVENTS);
        engine.scroll_to(index, true);

        let mut session = Self {
            slides: SlideState::read(&engine),
            images,
            engine,
            listener,
            requested_index: index,
            dismissed: false,
        };
        // The jump above is already reflected in the first snapshot.
        session.listener.drain();

        debug!(
            index,
            total = session.images.len(),
            "lightbox session opened"
        );
        session
    }

    /// Current slide snapshot.
    #[must_use]
    pub fn slides(&self) -> SlideState {
        self.slides
    }

    /// Images shown by this session, in display order.
    #[must_use]
    pub fn images(&self) -> &[ImageDescriptor] {
        &self.images
    }

    /// Shared handle to the image list this session was opened with.
    #[must_use]
    pub fn shared_images(&self) -> &Arc<[ImageDescriptor]> {
        &self.images
    }

    /// Image at the current index.
    #[must_use]
    pub fn current_image(&self) -> Option<&ImageDescriptor> {
        self.images.get(self.slides.current_index)
    }

    /// Read access to the engine.
    #[must_use]
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Index the host last asked for, after clamping.
    #[must_use]
    pub fn requested_index(&self) -> usize {
        self.requested_index
    }

    /// Whether a close has been requested from inside this session.
    #[must_use]
    pub fn is_dismissed(&self) -> bool {
        self.dismissed
    }

    /// Marks the session dismissed. Returns false if it already was.
    pub(super) fn dismiss(&mut self) -> bool {
        !std::mem::replace(&mut self.dismissed, true)
    }

    /// Re-targets the session after the host changed its request.
    pub(super) fn jump_to(&mut self, index: usize) {
        self.requested_index = index;
        self.dismissed = false;
        self.drive(|engine| engine.scroll_to(index, true));
        debug!(index, "lightbox jumped to requested slide");
    }

    /// Runs one engine interaction, then syncs the snapshot from its events.
    pub(super) fn drive(&mut self, action: impl FnOnce(&mut E)) {
        action(&mut self.engine);
        self.sync();
    }

    /// Replaces the snapshot if the engine reported a selection or re-init.
    fn sync(&mut self) {
        let events = self.listener.drain();
        if events.iter().any(|event| SYNC_EVENTS.contains(event)) {
            self.slides = SlideState::read(&self.engine);
        }
    }
}

impl<E: CarouselEngine> Drop for Session<E> {
    fn drop(&mut self) {
        let id = self.listener.id();
        self.engine.off(id);
        self.listener.close();
        debug!(
            index = self.slides.current_index,
            "lightbox session closed"
        );
    }
}
