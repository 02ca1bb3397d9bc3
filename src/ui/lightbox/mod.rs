// SPDX-License-Identifier: MPL-2.0
//! Gallery lightbox: a modal carousel over the host's image list.
//!
//! The host owns the open request (`Some(index)` or `None`) and hands it to
//! [`State::sync_request`] together with the image list. The lightbox never
//! writes the request back; dismissals surface as
//! [`Effect::CloseRequested`], once per dismissal, and the host is expected
//! to clear its request and sync again.
//!
//! ```text
//!  Closed ──Some(i), images≠∅──▶ Open(session)
//!  Closed ──Some(_), images=∅──▶ Empty
//!  Open/Empty ──None──▶ Closed   (session dropped, listener detached)
//! ```
//!
//! Slide position comes from the engine only. The lightbox keeps a
//! [`SlideState`] snapshot that is replaced after every engine call that
//! reported a selection or re-initialisation.

pub mod keyboard;
mod session;
mod view;

pub use session::{Session, SlideState};
pub use view::ViewEnv;

use crate::carousel::{CarouselEngine, CarouselOptions, SnapCarousel};
use crate::domain::gallery::{clamp_index, ImageDescriptor};
use crate::domain::lightbox::{DragThreshold, ScrollDuration};
use iced::widget::scrollable::AbsoluteOffset;
use iced::widget::{operation, Id};
use iced::{time, Point, Size, Subscription, Task};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Identifier of the horizontal slide strip.
pub const STRIP_ID: &str = "lightbox-slide-strip";

/// Share of the window width taken by one slide.
pub const SLIDE_WIDTH_RATIO: f32 = 0.9;

/// Animation frame interval while the engine is scrolling.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Window size assumed until the first resize event arrives.
pub const DEFAULT_VIEWPORT: Size = Size::new(1200.0, 800.0);

/// Why the lightbox asked to be closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    Backdrop,
    CloseButton,
    Escape,
    Host,
}

/// Messages handled by the lightbox.
#[derive(Debug, Clone)]
pub enum Message {
    Next,
    Previous,
    /// Jumps straight to a slide without animating. The host request is
    /// left alone, so syncing the same request again keeps this slide.
    JumpTo(usize),
    Close(CloseReason),
    Tick(Instant),
    PointerPressed,
    PointerMoved(Point),
    PointerReleased,
    PointerLeft,
    ViewportResized(Size),
}

/// Side effects the host must act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The user dismissed the lightbox; the host should clear its request.
    CloseRequested(CloseReason),
}

/// Lightbox behaviour settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub scroll_duration: ScrollDuration,
    pub drag_threshold: DragThreshold,
    /// Whether a press on the backdrop dismisses the lightbox.
    pub backdrop_closes: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scroll_duration: ScrollDuration::default(),
            drag_threshold: DragThreshold::default(),
            backdrop_closes: true,
        }
    }
}

/// Everything needed to build an engine for a new session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineParams {
    pub slide_count: usize,
    pub slide_width: f32,
    pub start_index: usize,
    pub settings: Settings,
}

/// Builds the engine for each new session.
pub type EngineFactory<E> = fn(EngineParams) -> E;

fn snap_carousel(params: EngineParams) -> SnapCarousel {
    SnapCarousel::new(
        params.slide_count,
        params.slide_width,
        CarouselOptions {
            start_index: params.start_index,
            duration: params.settings.scroll_duration,
            drag_threshold: params.settings.drag_threshold,
            ..CarouselOptions::default()
        },
    )
}

#[derive(Debug)]
enum Phase<E: CarouselEngine> {
    Closed,
    /// Opened on an empty list: inert, dismissable.
    Empty { dismissed: bool },
    Open(Session<E>),
}

/// Lightbox state machine.
#[derive(Debug)]
pub struct State<E: CarouselEngine = SnapCarousel> {
    phase: Phase<E>,
    settings: Settings,
    viewport: Size,
    pointer: Option<Point>,
    build: EngineFactory<E>,
}

impl State<SnapCarousel> {
    /// Creates a closed lightbox backed by [`SnapCarousel`].
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self::with_engine(settings, snap_carousel)
    }
}

impl Default for State<SnapCarousel> {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl<E: CarouselEngine> State<E> {
    /// Creates a closed lightbox that builds sessions with `build`.
    #[must_use]
    pub fn with_engine(settings: Settings, build: EngineFactory<E>) -> Self {
        Self {
            phase: Phase::Closed,
            settings,
            viewport: DEFAULT_VIEWPORT,
            pointer: None,
            build,
        }
    }

    /// True while the overlay is showing, with or without images.
    #[must_use]
    pub fn is_open(&self) -> bool {
        !matches!(self.phase, Phase::Closed)
    }

    /// True when opened on an empty image list.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self.phase, Phase::Empty { .. })
    }

    /// The running session, if any images are shown.
    #[must_use]
    pub fn session(&self) -> Option<&Session<E>> {
        match &self.phase {
            Phase::Open(session) => Some(session),
            _ => None,
        }
    }

    /// Current slide snapshot, if a session is running.
    #[must_use]
    pub fn slides(&self) -> Option<SlideState> {
        self.session().map(Session::slides)
    }

    #[must_use]
    pub fn settings(&self) -> Settings {
        self.settings
    }

    /// Width of one slide for the current viewport.
    #[must_use]
    pub fn slide_width(&self) -> f32 {
        (self.viewport.width * SLIDE_WIDTH_RATIO).max(0.0)
    }

    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Applies the host's open request.
    ///
    /// - `None` closes and drops any session.
    /// - `Some(i)` on an empty list shows the inert empty overlay.
    /// - `Some(i)` opens a session at `i` clamped to the list, or jumps the
    ///   running session there if the list is unchanged and `i` differs.
    pub fn sync_request(
        &mut self,
        images: &Arc<[ImageDescriptor]>,
        request: Option<usize>,
    ) -> Task<Message> {
        let Some(requested) = request else {
            if self.is_open() {
                self.phase = Phase::Closed;
                self.pointer = None;
                info!("lightbox closed");
            }
            return Task::none();
        };

        let requested = i64::try_from(requested).unwrap_or(i64::MAX);
        let Some(index) = clamp_index(requested, images.len()) else {
            if !self.is_empty() {
                self.phase = Phase::Empty { dismissed: false };
                info!("lightbox opened without images");
            }
            return Task::none();
        };

        if let Phase::Open(session) = &mut self.phase {
            if Arc::ptr_eq(session.shared_images(), images) {
                if session.requested_index() == index {
                    return Task::none();
                }
                session.jump_to(index);
                return strip_offset(session.engine().scroll_offset());
            }
        }

        let engine = (self.build)(EngineParams {
            slide_count: images.len(),
            slide_width: self.slide_width(),
            start_index: index,
            settings: self.settings,
        });
        // Assigning drops any previous session before the new one is used.
        self.phase = Phase::Open(Session::open(Arc::clone(images), index, engine));
        self.pointer = None;
        info!(index, total = images.len(), "lightbox opened");

        match &self.phase {
            Phase::Open(session) => strip_offset(session.engine().scroll_offset()),
            _ => Task::none(),
        }
    }

    /// Requests a close from code, e.g. a host "back" action.
    ///
    /// Returns [`Effect::CloseRequested`] unless a close is already pending.
    pub fn request_close(&mut self) -> Effect {
        self.dismiss(CloseReason::Host)
    }

    fn dismiss(&mut self, reason: CloseReason) -> Effect {
        let first = match &mut self.phase {
            Phase::Closed => false,
            Phase::Empty { dismissed } => !std::mem::replace(dismissed, true),
            Phase::Open(session) => session.dismiss(),
        };
        if first {
            info!(?reason, "lightbox dismissed");
            Effect::CloseRequested(reason)
        } else {
            Effect::None
        }
    }

    /// Updates the lightbox with a message.
    pub fn handle_message(&mut self, message: Message) -> (Effect, Task<Message>) {
        match message {
            Message::Close(CloseReason::Backdrop) if !self.settings.backdrop_closes => {
                (Effect::None, Task::none())
            }
            Message::Close(reason) => (self.dismiss(reason), Task::none()),
            Message::ViewportResized(size) => {
                self.viewport = size;
                let slide_width = self.slide_width();
                let task = self.drive(|engine| {
                    let count = engine.slide_count();
                    engine.reinit(count, slide_width);
                });
                (Effect::None, task)
            }
            Message::PointerMoved(position) => {
                self.pointer = Some(position);
                let task = self.drive(|engine| {
                    if engine.is_dragging() {
                        engine.drag_move(position.x);
                    }
                });
                (Effect::None, task)
            }
            Message::PointerPressed => {
                let Some(position) = self.pointer else {
                    return (Effect::None, Task::none());
                };
                let task = self.drive(|engine| engine.drag_start(position.x));
                (Effect::None, task)
            }
            Message::PointerReleased => {
                let task = self.drive(|engine| engine.drag_end());
                (Effect::None, task)
            }
            Message::PointerLeft => {
                self.pointer = None;
                let task = self.drive(|engine| engine.drag_end());
                (Effect::None, task)
            }
            Message::Next => (Effect::None, self.drive(|engine| engine.scroll_next())),
            Message::Previous => (Effect::None, self.drive(|engine| engine.scroll_prev())),
            Message::JumpTo(index) => {
                debug!(index, "lightbox jump");
                (Effect::None, self.drive(|engine| engine.scroll_to(index, true)))
            }
            Message::Tick(now) => (Effect::None, self.drive(|engine| engine.tick(now))),
        }
    }

    /// Runs an engine interaction on the open session, then scrolls the
    /// strip if the engine moved.
    fn drive(&mut self, action: impl FnOnce(&mut E)) -> Task<Message> {
        let Phase::Open(session) = &mut self.phase else {
            return Task::none();
        };
        let before = session.engine().scroll_offset();
        session.drive(action);
        let after = session.engine().scroll_offset();
        if (after - before).abs() > f32::EPSILON {
            strip_offset(after)
        } else {
            Task::none()
        }
    }

    /// Keyboard routing while showing, frame ticks while animating.
    pub fn subscription(&self) -> Subscription<Message> {
        if !self.is_open() {
            return Subscription::none();
        }
        let animating = self
            .session()
            .is_some_and(|session| session.engine().is_animating());
        if animating {
            Subscription::batch([
                keyboard::subscription(),
                time::every(FRAME_INTERVAL).map(Message::Tick),
            ])
        } else {
            keyboard::subscription()
        }
    }
}

fn strip_offset(x: f32) -> Task<Message> {
    operation::scroll_to(Id::new(STRIP_ID), AbsoluteOffset { x, y: 0.0 })
}
