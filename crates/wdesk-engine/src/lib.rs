//! Window engine for the WidgetDesk canvas
//!
//! This crate provides the interaction core behind the dashboard's floating
//! widget windows:
//! - Window records and sparse patches (the store's data model)
//! - Drag and resize with deferred or live commit, click detection and
//!   two-finger swipe-to-minimize
//! - Viewport-aware placement of the contextual toolbar
//! - Content scaling for fixed-aspect and spreadable widgets
//! - A per-window shell deriving render frames and toolbar actions
//!
//! ## Architecture
//!
//! - [`math`]: Geometry types (`Vec2`, `Size`, `Rect`) and layer constants
//! - [`window`]: `WindowRecord`, `WindowPatch` and the kind capability table
//! - [`store`]: The `WidgetStore` trait and an in-memory implementation
//! - [`input`]: Gesture controller, sessions, target classification
//! - [`toolbar`]: Menu placement and open-menu state
//! - [`scale`]: Content scale computation
//! - [`shell`]: Per-window composition and render frames
//!
//! ## Example
//!
//! ```rust
//! use wdesk_engine::{
//!     DragIndicator, EngineConfig, GestureOutcome, MemoryStore, PointerInput, Rect,
//!     ShellOptions, TargetClass, Vec2, WidgetKind, WindowRecord, WindowShell,
//! };
//!
//! let mut store = MemoryStore::new();
//! let window = WindowRecord::new("clock-1", WidgetKind::Clock, Vec2::new(40.0, 40.0));
//! store.insert(window.clone());
//!
//! let mut shell = WindowShell::new(
//!     &EngineConfig::default(),
//!     DragIndicator::default(),
//!     ShellOptions::default(),
//! );
//! shell
//!     .pointer_down(&window, PointerInput::new(1, 50.0, 50.0), TargetClass::Plain, &mut store)
//!     .unwrap();
//! shell
//!     .pointer_move(&window, PointerInput::new(1, 90.0, 50.0), &mut store)
//!     .unwrap();
//!
//! // Nothing reaches the store until the pointer is released
//! assert_eq!(store.get(&window.id).unwrap().x, 40.0);
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: All state logic is testable without a browser
//! 2. **Borrowed Store**: The engine never owns widget state
//! 3. **Table-driven Kinds**: Per-kind behaviour is data, not branches
//! 4. **Minimal Dependencies**: Browser bindings live behind the `wasm` feature

pub mod config;
pub mod input;
pub mod math;
pub mod scale;
pub mod shell;
pub mod store;
pub mod toolbar;
pub mod window;

mod error;
mod types;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use config::{ChromeConfig, EngineConfig, GestureConfig, SwipeOrigin, Theme, ToolbarConfig};
pub use error::{DeskError, DeskResult};
pub use input::{
    classify, DragIndicator, DragIndicatorGuard, ElementInfo, GestureController, GestureKind,
    GestureOutcome, IndicatorSink, PointerInput, RejectReason, TargetClass, TouchPoint,
};
pub use math::{Rect, Size, Vec2, WINDOW_CHROME, Z_LAYERS};
pub use scale::{ScaleRequest, ScaleResult};
pub use shell::{
    CloseOutcome, Face, ScreenshotService, ShellOptions, ShellState, StyleOverrides,
    ToolbarAction, ToolbarItems, WindowFrame, WindowShell,
};
pub use store::{MemoryStore, WidgetStore};
pub use toolbar::{MenuPlacement, ToolbarMenuState, VerticalAnchor};
pub use types::{PointerId, WidgetId};
pub use window::{
    CapabilityOverride, CapabilityTable, KindCapabilities, WidgetKind, WindowPatch, WindowRecord,
};
