//! Input handling for widget windows
//!
//! Pointer drag/resize sessions, target classification, the two-finger
//! swipe and the shared dragging indicator.

mod controller;
pub mod indicator;
mod session;
pub mod target;
mod touch;

pub use controller::{GestureController, GestureOutcome, PointerInput, RejectReason};
pub use indicator::{DragIndicator, DragIndicatorGuard, IndicatorSink, NullSink};
pub use session::{GestureKind, GestureSession};
pub use target::{classify, ElementInfo, Overflow, TargetClass};
pub use touch::{TouchPoint, TwoFingerSwipe};
