//! Two-finger swipe-down to minimize

use serde::{Deserialize, Serialize};

use crate::config::SwipeOrigin;

/// One touch point in canvas coordinates
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TouchPoint {
    pub x: f32,
    pub y: f32,
}

impl TouchPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Tracks one armed two-finger swipe
///
/// Independent of drag/resize sessions. Arming requires exactly two touches
/// at start; the decision is made when the first finger lifts, which also
/// disarms.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TwoFingerSwipe {
    origin_y: Option<f32>,
}

impl TwoFingerSwipe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_armed(&self) -> bool {
        self.origin_y.is_some()
    }

    pub fn origin_y(&self) -> Option<f32> {
        self.origin_y
    }

    /// `touches` is the full list of active touches after the start
    pub fn touch_start(&mut self, touches: &[TouchPoint], origin: SwipeOrigin) {
        self.origin_y = match (touches, origin) {
            ([first, _], SwipeOrigin::FirstTouch) => Some(first.y),
            ([first, second], SwipeOrigin::Average) => Some((first.y + second.y) / 2.0),
            _ => None,
        };
    }

    /// Returns `true` when the swipe should minimize the window
    ///
    /// `remaining` is the number of touches still down; `changed` are the
    /// touches that just lifted. A lift that leaves a finger down only
    /// minimizes if the lifted finger already crossed the threshold.
    pub fn touch_end(&mut self, remaining: usize, changed: &[TouchPoint], threshold: f32) -> bool {
        let Some(origin) = self.origin_y.take() else {
            return false;
        };
        if remaining > 1 {
            return false;
        }
        changed
            .first()
            .is_some_and(|touch| touch.y - origin > threshold)
    }

    pub fn cancel(&mut self) {
        self.origin_y = None;
    }
}
