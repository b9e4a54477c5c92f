//! Global "a widget is being dragged" indicator
//!
//! Any number of gestures may hold the indicator at once. The sink only
//! hears about the first acquisition and the last release, and releasing
//! happens in `Drop`, so an early return or a lost pointer capture can
//! never leave the page stuck in dragging mode.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

/// Receives indicator transitions (e.g. toggles a class on `<body>`)
pub trait IndicatorSink {
    fn set_dragging(&mut self, dragging: bool);
}

/// Sink that ignores every transition
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl IndicatorSink for NullSink {
    fn set_dragging(&mut self, _dragging: bool) {}
}

struct IndicatorInner {
    holders: Cell<usize>,
    sink: RefCell<Box<dyn IndicatorSink>>,
}

impl IndicatorInner {
    fn release(&self) {
        let holders = self.holders.get().saturating_sub(1);
        self.holders.set(holders);
        if holders == 0 {
            self.sink.borrow_mut().set_dragging(false);
        }
    }
}

/// Reference-counted dragging flag shared by every window on the page
#[derive(Clone)]
pub struct DragIndicator {
    inner: Rc<IndicatorInner>,
}

impl DragIndicator {
    pub fn new(sink: impl IndicatorSink + 'static) -> Self {
        Self {
            inner: Rc::new(IndicatorInner {
                holders: Cell::new(0),
                sink: RefCell::new(Box::new(sink)),
            }),
        }
    }

    /// Mark a gesture as in progress until the returned guard is dropped
    pub fn acquire(&self) -> DragIndicatorGuard {
        let holders = self.inner.holders.get() + 1;
        self.inner.holders.set(holders);
        if holders == 1 {
            self.inner.sink.borrow_mut().set_dragging(true);
        }
        DragIndicatorGuard {
            inner: Rc::clone(&self.inner),
        }
    }

    pub fn is_active(&self) -> bool {
        self.inner.holders.get() > 0
    }

    /// Number of live guards
    pub fn holders(&self) -> usize {
        self.inner.holders.get()
    }
}

impl Default for DragIndicator {
    fn default() -> Self {
        Self::new(NullSink)
    }
}

impl fmt::Debug for DragIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragIndicator")
            .field("holders", &self.inner.holders.get())
            .finish()
    }
}

/// Scoped hold on a [`DragIndicator`]
#[must_use = "the indicator is released as soon as the guard is dropped"]
pub struct DragIndicatorGuard {
    inner: Rc<IndicatorInner>,
}

impl Drop for DragIndicatorGuard {
    fn drop(&mut self) {
        self.inner.release();
    }
}

impl fmt::Debug for DragIndicatorGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DragIndicatorGuard")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<bool>>>);

    impl IndicatorSink for Recorder {
        fn set_dragging(&mut self, dragging: bool) {
            self.0.borrow_mut().push(dragging);
        }
    }

    #[test]
    fn test_guard_toggles_sink() {
        let recorder = Recorder::default();
        let indicator = DragIndicator::new(recorder.clone());

        let guard = indicator.acquire();
        assert!(indicator.is_active());
        drop(guard);
        assert!(!indicator.is_active());

        assert_eq!(*recorder.0.borrow(), vec![true, false]);
    }

    #[test]
    fn test_nested_guards_only_fire_edges() {
        let recorder = Recorder::default();
        let indicator = DragIndicator::new(recorder.clone());

        let a = indicator.acquire();
        let b = indicator.clone().acquire();
        assert_eq!(indicator.holders(), 2);
        drop(a);
        assert!(indicator.is_active());
        drop(b);

        assert_eq!(*recorder.0.borrow(), vec![true, false]);
    }

    #[test]
    fn test_reacquire_after_release() {
        let recorder = Recorder::default();
        let indicator = DragIndicator::new(recorder.clone());
        drop(indicator.acquire());
        drop(indicator.acquire());
        assert_eq!(*recorder.0.borrow(), vec![true, false, true, false]);
    }
}
