//! Render-facing view of a window

use serde::{Deserialize, Serialize};

use crate::math::Rect;
use crate::scale::ScaleResult;

/// Which face of the window receives input
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Face {
    Front,
    Settings,
}

/// Lazy mount latch for the settings face
///
/// The settings face is expensive for some kinds, so it is only mounted the
/// first time the window is flipped, and then kept mounted for the lifetime
/// of the shell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FaceMount {
    settings_mounted: bool,
}

impl FaceMount {
    pub fn observe(&mut self, flipped: bool) {
        self.settings_mounted |= flipped;
    }

    pub fn settings_mounted(&self) -> bool {
        self.settings_mounted
    }

    pub fn face(flipped: bool) -> Face {
        if flipped {
            Face::Settings
        } else {
            Face::Front
        }
    }
}

/// Derived shell state, highest precedence first
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShellState {
    Dragging,
    Resizing,
    ConfirmingClose,
    Minimized,
    Maximized,
    Flipped,
    Normal,
}

/// Everything the host needs to paint one window
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowFrame {
    pub rect: Rect,
    pub z: i32,
    pub opacity: f32,
    /// Accepts pointer input
    pub interactive: bool,
    pub face: Face,
    pub settings_mounted: bool,
    pub background_alpha: f32,
    pub border_radius: String,
    pub font_family: String,
    pub title: String,
    pub state: ShellState,
    /// Layer of the close confirmation overlay while it is showing
    pub confirm_overlay_z: Option<i32>,
    pub content: ScaleResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_mount_latches() {
        let mut mount = FaceMount::default();
        mount.observe(false);
        assert!(!mount.settings_mounted());
        mount.observe(true);
        mount.observe(false);
        assert!(mount.settings_mounted());
    }

    #[test]
    fn test_face_selection() {
        assert_eq!(FaceMount::face(true), Face::Settings);
        assert_eq!(FaceMount::face(false), Face::Front);
    }
}
