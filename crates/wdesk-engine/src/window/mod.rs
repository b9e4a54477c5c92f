//! Window model
//!
//! The authoritative per-window record lives in the external store. This
//! module defines its shape, the sparse patch used to mutate it, and the
//! capability table keyed by widget kind.

pub mod kind;
mod patch;
mod record;

pub use kind::{CapabilityOverride, CapabilityTable, KindCapabilities, WidgetKind};
pub use patch::WindowPatch;
pub use record::WindowRecord;
