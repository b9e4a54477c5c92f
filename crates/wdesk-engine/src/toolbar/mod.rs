//! Contextual toolbar: placement and open-menu state

mod menu;
pub mod positioner;

pub use menu::ToolbarMenuState;
pub use positioner::{place, MenuPlacement, VerticalAnchor};
