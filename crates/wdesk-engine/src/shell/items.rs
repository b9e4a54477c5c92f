//! Toolbar action model

use serde::{Deserialize, Serialize};

/// A button in the contextual toolbar
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "id", rename_all = "camelCase")]
pub enum ToolbarAction {
    /// Flip to the settings face
    Settings,
    Close,
    /// Show or hide the secondary row
    Expand,
    /// Caller-supplied control, identified by an opaque id
    Header(String),
    Screenshot,
    Duplicate,
    Minimize,
    Maximize,
    Restore,
    ResetSize,
}

impl ToolbarAction {
    /// Tooltip text
    pub fn label(&self) -> &str {
        match self {
            Self::Settings => "Settings",
            Self::Close => "Close",
            Self::Expand => "More",
            Self::Header(id) => id,
            Self::Screenshot => "Screenshot",
            Self::Duplicate => "Duplicate",
            Self::Minimize => "Minimize",
            Self::Maximize => "Maximize",
            Self::Restore => "Restore",
            Self::ResetSize => "Reset Size",
        }
    }
}

/// Toolbar rows in display order
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolbarItems {
    pub primary: Vec<ToolbarAction>,
    /// Empty while the menu is collapsed
    pub secondary: Vec<ToolbarAction>,
}

impl ToolbarItems {
    pub fn contains(&self, action: &ToolbarAction) -> bool {
        self.primary.contains(action) || self.secondary.contains(action)
    }
}
