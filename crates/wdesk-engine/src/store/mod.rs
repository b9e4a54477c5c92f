//! Shared widget store interface
//!
//! The engine never owns widget state. Every mutation goes out through a
//! [`WidgetStore`] borrowed for the duration of one event handler, and the
//! next render reads the result back from the store.

mod memory;

pub use memory::MemoryStore;

use crate::error::DeskResult;
use crate::types::WidgetId;
use crate::window::WindowPatch;

/// Mutation surface of the dashboard's shared widget list
pub trait WidgetStore {
    /// Merge a partial update into one window
    fn update_widget(&mut self, id: &WidgetId, patch: &WindowPatch) -> DeskResult<()>;

    /// Delete a window
    fn remove_widget(&mut self, id: &WidgetId) -> DeskResult<()>;

    /// Insert a copy of a window with a fresh identity
    fn duplicate_widget(&mut self, id: &WidgetId) -> DeskResult<()>;

    /// Raise a window above every other window
    fn bring_to_front(&mut self, id: &WidgetId) -> DeskResult<()>;

    /// Restore a window's per-kind default size
    fn reset_size(&mut self, id: &WidgetId) -> DeskResult<()>;
}
