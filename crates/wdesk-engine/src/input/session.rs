//! Per-gesture state for one drag or resize

use serde::{Deserialize, Serialize};

use super::indicator::DragIndicatorGuard;
use crate::math::{Rect, Size, Vec2};
use crate::types::PointerId;

/// What a gesture changes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GestureKind {
    /// Moves the window; commits `{x, y}`
    Drag,
    /// Bottom-right handle; commits `{w, h}`
    Resize,
}

/// An in-flight drag or resize bound to one pointer
///
/// `current` is the visual-only geometry the host paints during the gesture;
/// for ordinary windows it reaches the store once, when the gesture ends.
#[derive(Debug)]
pub struct GestureSession {
    pub kind: GestureKind,
    pub pointer_id: PointerId,
    pub origin_pointer: Vec2,
    pub origin_geometry: Rect,
    /// Commit on every move instead of at the end
    pub live_commit: bool,
    /// Largest distance the pointer has been from `origin_pointer`
    pub drag_distance: f32,
    pub current: Rect,
    /// Accepted move events
    pub moves: u32,
    indicator: Option<DragIndicatorGuard>,
}

impl GestureSession {
    pub fn new(
        kind: GestureKind,
        pointer_id: PointerId,
        origin_pointer: Vec2,
        origin_geometry: Rect,
        live_commit: bool,
    ) -> Self {
        Self {
            kind,
            pointer_id,
            origin_pointer,
            origin_geometry,
            live_commit,
            drag_distance: 0.0,
            current: origin_geometry,
            moves: 0,
            indicator: None,
        }
    }

    /// Attach the dragging-indicator hold; it is released with the session
    pub fn with_indicator(mut self, guard: DragIndicatorGuard) -> Self {
        self.indicator = Some(guard);
        self
    }

    pub fn holds_indicator(&self) -> bool {
        self.indicator.is_some()
    }

    pub fn accepts(&self, pointer_id: PointerId) -> bool {
        self.pointer_id == pointer_id
    }

    /// Feed a pointer position and return the new visual geometry
    pub fn track(&mut self, pointer: Vec2, min_size: Size) -> Rect {
        let delta = pointer - self.origin_pointer;
        self.drag_distance = self.drag_distance.max(delta.length());
        self.moves += 1;

        let origin = self.origin_geometry;
        self.current = match self.kind {
            GestureKind::Drag => origin.with_position(origin.position() + delta),
            GestureKind::Resize => origin.with_size(
                Size::new(origin.width + delta.x, origin.height + delta.y).max(min_size),
            ),
        };
        self.current
    }

    /// Still within click distance of where it started
    pub fn is_click(&self, threshold: f32) -> bool {
        self.drag_distance < threshold
    }

    /// Geometry actually changed from the origin
    pub fn has_changed(&self) -> bool {
        self.current != self.origin_geometry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIN: Size = Size::new(150.0, 100.0);

    fn session(kind: GestureKind) -> GestureSession {
        GestureSession::new(
            kind,
            1,
            Vec2::new(10.0, 10.0),
            Rect::new(100.0, 100.0, 200.0, 200.0),
            false,
        )
    }

    #[test]
    fn test_drag_offsets_origin_geometry() {
        let mut s = session(GestureKind::Drag);
        let rect = s.track(Vec2::new(60.0, 60.0), MIN);
        assert_eq!(rect, Rect::new(150.0, 150.0, 200.0, 200.0));
        assert_eq!(s.moves, 1);
        assert!(s.has_changed());
    }

    #[test]
    fn test_resize_clamps_each_axis() {
        let mut s = session(GestureKind::Resize);
        let rect = s.track(Vec2::new(-200.0, 30.0), MIN);
        assert_eq!(rect, Rect::new(100.0, 100.0, 150.0, 220.0));
        let rect = s.track(Vec2::new(50.0, -500.0), MIN);
        assert_eq!(rect, Rect::new(100.0, 100.0, 240.0, 100.0));
    }

    #[test]
    fn test_drag_distance_is_maximum_displacement() {
        let mut s = session(GestureKind::Drag);
        s.track(Vec2::new(40.0, 50.0), MIN);
        s.track(Vec2::new(11.0, 10.0), MIN);
        assert_eq!(s.drag_distance, 50.0);
        assert!(!s.is_click(5.0));
    }

    #[test]
    fn test_small_jitter_is_click() {
        let mut s = session(GestureKind::Drag);
        s.track(Vec2::new(12.0, 11.0), MIN);
        s.track(Vec2::new(13.0, 13.0), MIN);
        assert!(s.is_click(5.0));
    }

    #[test]
    fn test_pointer_binding() {
        let s = session(GestureKind::Drag);
        assert!(s.accepts(1));
        assert!(!s.accepts(2));
        assert!(!s.holds_indicator());
    }
}
