//! In-memory widget store

use tracing::debug;

use super::WidgetStore;
use crate::error::{DeskError, DeskResult};
use crate::math::Vec2;
use crate::types::WidgetId;
use crate::window::{CapabilityTable, WindowPatch, WindowRecord};

/// Offset applied to a duplicate so it does not cover its source
const DUPLICATE_OFFSET: Vec2 = Vec2::new(20.0, 20.0);

/// Versioned in-memory implementation of [`WidgetStore`]
///
/// Windows are kept in insertion order. `revision` increases by one on
/// every successful mutation, which lets hosts skip re-rendering when
/// nothing changed.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    windows: Vec<WindowRecord>,
    capabilities: CapabilityTable,
    revision: u64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store whose reset-size action reads the given table
    pub fn with_capabilities(capabilities: CapabilityTable) -> Self {
        Self {
            capabilities,
            ..Self::default()
        }
    }

    /// Add a window, replacing any existing window with the same id
    pub fn insert(&mut self, window: WindowRecord) {
        match self.index_of(&window.id) {
            Some(i) => self.windows[i] = window,
            None => self.windows.push(window),
        }
        self.revision += 1;
    }

    pub fn get(&self, id: &WidgetId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| &w.id == id)
    }

    /// Windows in insertion order
    pub fn windows(&self) -> &[WindowRecord] {
        &self.windows
    }

    /// Windows sorted bottom to top
    pub fn windows_by_z(&self) -> Vec<&WindowRecord> {
        let mut sorted: Vec<&WindowRecord> = self.windows.iter().collect();
        sorted.sort_by_key(|w| w.z);
        sorted
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn index_of(&self, id: &WidgetId) -> Option<usize> {
        self.windows.iter().position(|w| &w.id == id)
    }

    fn find_mut(&mut self, id: &WidgetId) -> DeskResult<&mut WindowRecord> {
        self.windows
            .iter_mut()
            .find(|w| &w.id == id)
            .ok_or_else(|| DeskError::WidgetNotFound(id.clone()))
    }

    fn max_z(&self) -> i32 {
        self.windows.iter().map(|w| w.z).max().unwrap_or(0)
    }
}

impl WidgetStore for MemoryStore {
    fn update_widget(&mut self, id: &WidgetId, patch: &WindowPatch) -> DeskResult<()> {
        self.find_mut(id)?.apply(patch);
        self.revision += 1;
        debug!(id = %id, ?patch, "update_widget");
        Ok(())
    }

    fn remove_widget(&mut self, id: &WidgetId) -> DeskResult<()> {
        let index = self
            .index_of(id)
            .ok_or_else(|| DeskError::WidgetNotFound(id.clone()))?;
        self.windows.remove(index);
        self.revision += 1;
        debug!(id = %id, "remove_widget");
        Ok(())
    }

    fn duplicate_widget(&mut self, id: &WidgetId) -> DeskResult<()> {
        let source = self
            .get(id)
            .ok_or_else(|| DeskError::WidgetNotFound(id.clone()))?;

        let mut copy = source.clone();
        copy.id = WidgetId::generate();
        copy.x += DUPLICATE_OFFSET.x;
        copy.y += DUPLICATE_OFFSET.y;
        copy.z = self.max_z() + 1;
        copy.flipped = false;
        copy.minimized = false;
        copy.maximized = false;

        debug!(source = %id, copy = %copy.id, "duplicate_widget");
        self.windows.push(copy);
        self.revision += 1;
        Ok(())
    }

    fn bring_to_front(&mut self, id: &WidgetId) -> DeskResult<()> {
        let max_z = self.max_z();
        let current = self.find_mut(id)?.z;
        // Already on top and not tied with another window
        if current == max_z && self.windows.iter().filter(|w| w.z == max_z).count() == 1 {
            return Ok(());
        }
        self.find_mut(id)?.z = max_z + 1;
        self.revision += 1;
        debug!(id = %id, z = max_z + 1, "bring_to_front");
        Ok(())
    }

    fn reset_size(&mut self, id: &WidgetId) -> DeskResult<()> {
        let kind = self.find_mut(id)?.kind;
        let size = self.capabilities.get(kind).default_size;
        self.update_widget(id, &WindowPatch::size(size))
    }
}
