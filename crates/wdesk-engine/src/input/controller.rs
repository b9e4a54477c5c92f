//! Gesture controller
//!
//! Turns raw pointer and touch events for one window into visual previews
//! and store commits. Ordinary windows are only painted during a gesture
//! and committed once at the end; position-aware kinds commit every frame.
//!
//! ```text
//!   pointer_down ──► Started ──► pointer_move* ──► pointer_up ──► Click | Committed
//!        │                          │                  ▲
//!        │                       Preview        pointer_cancel / lost_capture
//!        └─ Rejected (maximized tap is remembered and may still yield Click)
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::indicator::DragIndicator;
use super::session::{GestureKind, GestureSession};
use super::target::TargetClass;
use super::touch::{TouchPoint, TwoFingerSwipe};
use crate::config::GestureConfig;
use crate::error::DeskResult;
use crate::math::{Rect, Vec2};
use crate::store::WidgetStore;
use crate::types::PointerId;
use crate::window::{CapabilityTable, WindowPatch, WindowRecord};

/// One pointer event as the controller sees it
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointerInput {
    pub pointer_id: PointerId,
    pub position: Vec2,
}

impl PointerInput {
    pub fn new(pointer_id: PointerId, x: f32, y: f32) -> Self {
        Self {
            pointer_id,
            position: Vec2::new(x, y),
        }
    }
}

/// Why a gesture did not start
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RejectReason {
    Maximized,
    Minimized,
    /// The annotation overlay owns the pointer
    Annotating,
    InteractiveTarget,
    ScrollableTarget,
}

/// What the host should do after an event
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum GestureOutcome {
    /// Not for this controller, or nothing to do
    Ignored,
    Rejected(RejectReason),
    Started(GestureKind),
    /// Paint this geometry; for live-commit kinds it is already in the store
    Preview(Rect),
    /// Gesture ended and this geometry was committed
    Committed(Rect),
    /// Gesture ended without a further commit
    Ended(Rect),
    /// Pointer never left click distance; toggle the toolbar
    Click,
    /// Two-finger swipe minimized the window
    Minimized,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EndReason {
    Released,
    Cancelled,
}

#[derive(Clone, Copy, Debug)]
struct PendingTap {
    pointer_id: PointerId,
    origin: Vec2,
    distance: f32,
}

/// Gesture state machine for one window
#[derive(Debug)]
pub struct GestureController {
    config: GestureConfig,
    capabilities: CapabilityTable,
    indicator: DragIndicator,
    session: Option<GestureSession>,
    pending_tap: Option<PendingTap>,
    swipe: TwoFingerSwipe,
    annotating: bool,
}

impl GestureController {
    pub fn new(config: GestureConfig, capabilities: CapabilityTable, indicator: DragIndicator) -> Self {
        Self {
            config,
            capabilities,
            indicator,
            session: None,
            pending_tap: None,
            swipe: TwoFingerSwipe::new(),
            annotating: false,
        }
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    pub fn capabilities(&self) -> &CapabilityTable {
        &self.capabilities
    }

    /// A drag or resize is in progress
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    pub fn active_kind(&self) -> Option<GestureKind> {
        self.session.as_ref().map(|s| s.kind)
    }

    /// Visual geometry of the in-flight gesture
    pub fn preview(&self) -> Option<Rect> {
        self.session.as_ref().map(|s| s.current)
    }

    pub fn set_annotating(&mut self, annotating: bool) {
        self.annotating = annotating;
    }

    pub fn is_annotating(&self) -> bool {
        self.annotating
    }

    pub fn swipe_armed(&self) -> bool {
        self.swipe.is_armed()
    }

    /// Pointer down on the window body
    pub fn pointer_down(
        &mut self,
        window: &WindowRecord,
        input: PointerInput,
        target: TargetClass,
        store: &mut dyn WidgetStore,
    ) -> DeskResult<GestureOutcome> {
        if self.end_stale_session(window, input.pointer_id, store)? {
            return Ok(GestureOutcome::Ignored);
        }
        if let Some(reason) = self.blocked(window) {
            if reason == RejectReason::Maximized {
                self.pending_tap = Some(PendingTap {
                    pointer_id: input.pointer_id,
                    origin: input.position,
                    distance: 0.0,
                });
            }
            return Ok(GestureOutcome::Rejected(reason));
        }
        match target {
            TargetClass::Plain => {}
            TargetClass::Interactive => {
                return Ok(GestureOutcome::Rejected(RejectReason::InteractiveTarget))
            }
            TargetClass::Scrollable => {
                return Ok(GestureOutcome::Rejected(RejectReason::ScrollableTarget))
            }
        }
        self.start(GestureKind::Drag, window, input, store)
    }

    /// Pointer down on the bottom-right resize handle
    pub fn resize_down(
        &mut self,
        window: &WindowRecord,
        input: PointerInput,
        store: &mut dyn WidgetStore,
    ) -> DeskResult<GestureOutcome> {
        if self.end_stale_session(window, input.pointer_id, store)? {
            return Ok(GestureOutcome::Ignored);
        }
        if let Some(reason) = self.blocked(window) {
            return Ok(GestureOutcome::Rejected(reason));
        }
        self.start(GestureKind::Resize, window, input, store)
    }

    /// A press from the pointer that already owns the session means its
    /// pointer-up was lost; end that session as a cancel first. Returns
    /// `true` while another pointer still owns a live session.
    fn end_stale_session(
        &mut self,
        window: &WindowRecord,
        pointer_id: PointerId,
        store: &mut dyn WidgetStore,
    ) -> DeskResult<bool> {
        let Some(owner) = self.session.as_ref().map(|s| s.pointer_id) else {
            return Ok(false);
        };
        if owner != pointer_id {
            return Ok(true);
        }
        debug!(id = %window.id, pointer = pointer_id, "press while session open; ending stale gesture");
        self.finish_session(window, pointer_id, EndReason::Cancelled, store)?;
        Ok(false)
    }

    fn blocked(&self, window: &WindowRecord) -> Option<RejectReason> {
        if window.minimized {
            Some(RejectReason::Minimized)
        } else if window.maximized {
            Some(RejectReason::Maximized)
        } else if self.annotating {
            Some(RejectReason::Annotating)
        } else {
            None
        }
    }

    fn start(
        &mut self,
        kind: GestureKind,
        window: &WindowRecord,
        input: PointerInput,
        store: &mut dyn WidgetStore,
    ) -> DeskResult<GestureOutcome> {
        store.bring_to_front(&window.id)?;

        let live_commit = self.capabilities.is_position_aware(window.kind);
        let mut session = GestureSession::new(
            kind,
            input.pointer_id,
            input.position,
            window.rect(),
            live_commit,
        );
        if !live_commit {
            session = session.with_indicator(self.indicator.acquire());
        }

        debug!(id = %window.id, ?kind, pointer = input.pointer_id, live_commit, "gesture start");
        self.pending_tap = None;
        self.session = Some(session);
        Ok(GestureOutcome::Started(kind))
    }

    pub fn pointer_move(
        &mut self,
        window: &WindowRecord,
        input: PointerInput,
        store: &mut dyn WidgetStore,
    ) -> DeskResult<GestureOutcome> {
        if let Some(tap) = self.pending_tap.as_mut() {
            if tap.pointer_id == input.pointer_id {
                tap.distance = tap.distance.max(input.position.distance(tap.origin));
            }
        }

        let min_size = self.config.min_size;
        let Some(session) = self.session.as_mut() else {
            return Ok(GestureOutcome::Ignored);
        };
        if !session.accepts(input.pointer_id) {
            return Ok(GestureOutcome::Ignored);
        }

        let rect = session.track(input.position, min_size);
        trace!(id = %window.id, x = rect.x, y = rect.y, w = rect.width, h = rect.height, "gesture move");

        if session.live_commit {
            let patch = commit_patch(session.kind, rect);
            store.update_widget(&window.id, &patch)?;
        }
        Ok(GestureOutcome::Preview(rect))
    }

    pub fn pointer_up(
        &mut self,
        window: &WindowRecord,
        input: PointerInput,
        store: &mut dyn WidgetStore,
    ) -> DeskResult<GestureOutcome> {
        if let Some(tap) = self.pending_tap {
            if tap.pointer_id == input.pointer_id {
                self.pending_tap = None;
                let distance = tap.distance.max(input.position.distance(tap.origin));
                if distance < self.config.click_threshold {
                    debug!(id = %window.id, "tap on maximized window");
                    return Ok(GestureOutcome::Click);
                }
                return Ok(GestureOutcome::Ignored);
            }
        }
        self.finish_session(window, input.pointer_id, EndReason::Released, store)
    }

    pub fn pointer_cancel(
        &mut self,
        window: &WindowRecord,
        pointer_id: PointerId,
        store: &mut dyn WidgetStore,
    ) -> DeskResult<GestureOutcome> {
        if self.pending_tap.is_some_and(|tap| tap.pointer_id == pointer_id) {
            self.pending_tap = None;
        }
        self.finish_session(window, pointer_id, EndReason::Cancelled, store)
    }

    /// The element lost pointer capture without a matching pointer-up
    pub fn lost_capture(
        &mut self,
        window: &WindowRecord,
        pointer_id: PointerId,
        store: &mut dyn WidgetStore,
    ) -> DeskResult<GestureOutcome> {
        self.pointer_cancel(window, pointer_id, store)
    }

    /// Single exit for every drag/resize; the session (and its indicator
    /// hold) is gone before any store call
    fn finish_session(
        &mut self,
        window: &WindowRecord,
        pointer_id: PointerId,
        reason: EndReason,
        store: &mut dyn WidgetStore,
    ) -> DeskResult<GestureOutcome> {
        if !self.session.as_ref().is_some_and(|s| s.accepts(pointer_id)) {
            return Ok(GestureOutcome::Ignored);
        }
        let Some(session) = self.session.take() else {
            return Ok(GestureOutcome::Ignored);
        };

        let kind = session.kind;
        let rect = session.current;
        let live_commit = session.live_commit;
        let within_click = session.is_click(self.config.click_threshold);
        let moves = session.moves;
        drop(session);

        debug!(id = %window.id, ?kind, ?reason, moves, within_click, "gesture end");

        if within_click {
            return Ok(match reason {
                EndReason::Released => GestureOutcome::Click,
                EndReason::Cancelled => GestureOutcome::Ended(rect),
            });
        }
        if live_commit {
            return Ok(GestureOutcome::Ended(rect));
        }

        let patch = commit_patch(kind, rect);
        debug!(id = %window.id, ?patch, "gesture commit");
        store.update_widget(&window.id, &patch)?;
        Ok(GestureOutcome::Committed(rect))
    }

    pub fn touch_start(&mut self, window: &WindowRecord, touches: &[TouchPoint]) -> GestureOutcome {
        if window.minimized {
            self.swipe.cancel();
            return GestureOutcome::Ignored;
        }
        self.swipe.touch_start(touches, self.config.swipe_origin);
        if self.swipe.is_armed() {
            trace!(id = %window.id, origin_y = ?self.swipe.origin_y(), "swipe armed");
        }
        GestureOutcome::Ignored
    }

    /// `remaining` is the number of touches still down after this event
    pub fn touch_end(
        &mut self,
        window: &WindowRecord,
        remaining: usize,
        changed: &[TouchPoint],
        store: &mut dyn WidgetStore,
    ) -> DeskResult<GestureOutcome> {
        if !self
            .swipe
            .touch_end(remaining, changed, self.config.swipe_threshold)
        {
            return Ok(GestureOutcome::Ignored);
        }
        debug!(id = %window.id, "swipe minimize");
        store.update_widget(&window.id, &WindowPatch::swipe_minimize())?;
        Ok(GestureOutcome::Minimized)
    }

    pub fn touch_cancel(&mut self) {
        self.swipe.cancel();
    }
}

fn commit_patch(kind: GestureKind, rect: Rect) -> WindowPatch {
    match kind {
        GestureKind::Drag => WindowPatch::position(rect.position()),
        GestureKind::Resize => WindowPatch::size(rect.size()),
    }
}
