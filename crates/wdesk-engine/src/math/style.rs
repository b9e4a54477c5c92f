//! Window chrome and stacking constants

/// Minimum window dimensions enforced by resize
pub struct WindowChrome {
    pub min_width: f32,
    pub min_height: f32,
}

/// Default window chrome
pub const WINDOW_CHROME: WindowChrome = WindowChrome {
    min_width: 150.0,
    min_height: 100.0,
};

/// Stacking layers shared with the page's stylesheet
///
/// A normal window renders at `widget + window.z`; while a gesture is
/// active it is lifted to `widget_drag + window.z`. Both stay below
/// `confirm_overlay` however large `window.z` grows.
pub struct ZLayers {
    pub widget: i32,
    pub widget_drag: i32,
    pub confirm_overlay: i32,
    pub maximized: i32,
    pub tool_menu: i32,
}

/// Default stacking layers
pub const Z_LAYERS: ZLayers = ZLayers {
    widget: 100,
    widget_drag: 500,
    confirm_overlay: 9950,
    maximized: 10500,
    tool_menu: 12000,
};

impl ZLayers {
    /// Stacking value for an ordinary (not maximized) window
    pub fn window(&self, z: i32, dragging: bool) -> i32 {
        let base = if dragging {
            self.widget_drag
        } else {
            self.widget
        };
        base.saturating_add(z).min(self.confirm_overlay - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_layers_offset_by_z() {
        assert_eq!(Z_LAYERS.window(3, false), 103);
        assert_eq!(Z_LAYERS.window(3, true), 503);
    }

    #[test]
    fn test_window_layer_stays_below_overlays() {
        for z in [9849, 9850, 10_401, i32::MAX] {
            assert!(Z_LAYERS.window(z, false) < Z_LAYERS.confirm_overlay);
            assert!(Z_LAYERS.window(z, true) < Z_LAYERS.confirm_overlay);
            assert!(Z_LAYERS.window(z, true) < Z_LAYERS.maximized);
        }
        assert_eq!(Z_LAYERS.window(20_000, false), 9949);
    }
}
