use serde::{Deserialize, Serialize};

use super::{WidgetKind, WindowPatch};
use crate::math::{Rect, Size, Vec2};
use crate::types::WidgetId;

/// Authoritative geometry and flag record for one widget window
///
/// Owned by the external store. The engine only reads it and writes back
/// through [`WindowPatch`]es.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowRecord {
    pub id: WidgetId,
    #[serde(rename = "type")]
    pub kind: WidgetKind,
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub z: i32,
    #[serde(default)]
    pub flipped: bool,
    #[serde(default)]
    pub minimized: bool,
    #[serde(default)]
    pub maximized: bool,
    /// Background opacity 0..1; `None` uses the theme default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transparency: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_title: Option<String>,
}

impl WindowRecord {
    /// Create a record at the kind's default size
    pub fn new(id: impl Into<WidgetId>, kind: WidgetKind, position: Vec2) -> Self {
        let size = kind.default_size();
        Self {
            id: id.into(),
            kind,
            x: position.x,
            y: position.y,
            w: size.width,
            h: size.height,
            z: 0,
            flipped: false,
            minimized: false,
            maximized: false,
            transparency: None,
            custom_title: None,
        }
    }

    /// Builder-style geometry override
    pub fn with_rect(mut self, rect: Rect) -> Self {
        self.x = rect.x;
        self.y = rect.y;
        self.w = rect.width;
        self.h = rect.height;
        self
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.w, self.h)
    }

    /// Committed geometry (ignores maximize, which overrides at render time)
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h)
    }

    /// Toolbar title: custom title if set, otherwise the kind's default
    pub fn title(&self) -> String {
        match &self.custom_title {
            Some(title) => title.clone(),
            None => self.kind.default_title(),
        }
    }

    /// Merge a patch into this record
    pub fn apply(&mut self, patch: &WindowPatch) {
        if let Some(x) = patch.x {
            self.x = x;
        }
        if let Some(y) = patch.y {
            self.y = y;
        }
        if let Some(w) = patch.w {
            self.w = w;
        }
        if let Some(h) = patch.h {
            self.h = h;
        }
        if let Some(z) = patch.z {
            self.z = z;
        }
        if let Some(flipped) = patch.flipped {
            self.flipped = flipped;
        }
        if let Some(minimized) = patch.minimized {
            self.minimized = minimized;
        }
        if let Some(maximized) = patch.maximized {
            self.maximized = maximized;
        }
        if let Some(transparency) = patch.transparency {
            self.transparency = Some(transparency);
        }
        if let Some(title) = &patch.custom_title {
            self.custom_title = title.clone();
        }
    }
}
