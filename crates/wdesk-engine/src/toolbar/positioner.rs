//! Viewport-aware placement of the floating toolbar
//!
//! The menu lives in the overlay layer and is positioned in viewport
//! coordinates, so it is never clipped by the window it belongs to.

use serde::{Deserialize, Serialize};

use crate::config::ToolbarConfig;
use crate::math::{Rect, Size, Z_LAYERS};

/// Transform for a menu horizontally centred on `left`
pub const CENTERED: &str = "translateX(-50%)";

/// Transform for a menu whose right edge sits on `left`
pub const RIGHT_ALIGNED: &str = "translateX(-100%)";

/// Which viewport edge the menu's vertical offset is measured from
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "edge", content = "offset", rename_all = "camelCase")]
pub enum VerticalAnchor {
    /// CSS `top`; the menu sits below its anchor
    Top(f32),
    /// CSS `bottom`; the menu sits above its anchor
    Bottom(f32),
}

/// Computed menu position
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuPlacement {
    pub vertical: VerticalAnchor,
    pub left: f32,
    pub transform: String,
    /// Stacking layer of the overlay the menu renders in
    pub z: i32,
}

impl MenuPlacement {
    /// Inline style declarations for the menu element
    pub fn css(&self) -> Vec<(&'static str, String)> {
        let vertical = match self.vertical {
            VerticalAnchor::Top(top) => ("top", format!("{}px", top)),
            VerticalAnchor::Bottom(bottom) => ("bottom", format!("{}px", bottom)),
        };
        vec![
            vertical,
            ("left", format!("{}px", self.left)),
            ("transform", self.transform.clone()),
            ("z-index", self.z.to_string()),
        ]
    }

    pub fn is_below_anchor(&self) -> bool {
        matches!(self.vertical, VerticalAnchor::Top(_))
    }
}

/// Position the toolbar for a window occupying `anchor` on screen
pub fn place(
    anchor: Rect,
    viewport: Size,
    maximized: bool,
    menu_width: f32,
    config: &ToolbarConfig,
) -> MenuPlacement {
    if maximized {
        return MenuPlacement {
            vertical: VerticalAnchor::Top(config.pinned_offset.y),
            left: viewport.width - config.pinned_offset.x,
            transform: RIGHT_ALIGNED.to_string(),
            z: Z_LAYERS.tool_menu,
        };
    }

    let vertical = if anchor.y < config.menu_height + config.menu_margin {
        VerticalAnchor::Top(anchor.bottom() + config.gap)
    } else {
        VerticalAnchor::Bottom(viewport.height - anchor.y + config.gap)
    };

    let half = menu_width / 2.0;
    let min_left = half + config.edge_margin;
    let max_left = viewport.width - half - config.edge_margin;
    let left = if max_left < min_left {
        viewport.width / 2.0
    } else {
        anchor.center().x.clamp(min_left, max_left)
    };

    MenuPlacement {
        vertical,
        left,
        transform: CENTERED.to_string(),
        z: Z_LAYERS.tool_menu,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Size = Size::new(1000.0, 800.0);

    fn place_default(anchor: Rect) -> MenuPlacement {
        place(anchor, VIEWPORT, false, 260.0, &ToolbarConfig::default())
    }

    #[test]
    fn test_below_when_near_top() {
        let p = place_default(Rect::new(100.0, 10.0, 200.0, 200.0));
        assert_eq!(p.vertical, VerticalAnchor::Top(222.0));
        assert_eq!(p.transform, CENTERED);
        assert!(p.is_below_anchor());
    }

    #[test]
    fn test_above_otherwise() {
        let p = place_default(Rect::new(300.0, 76.0, 200.0, 200.0));
        assert_eq!(p.vertical, VerticalAnchor::Bottom(800.0 - 76.0 + 12.0));
        assert_eq!(p.left, 400.0);
    }

    #[test]
    fn test_clamped_to_left_edge() {
        let p = place_default(Rect::new(0.0, 300.0, 40.0, 40.0));
        assert_eq!(p.left, 138.0);
    }

    #[test]
    fn test_clamped_to_right_edge() {
        let p = place_default(Rect::new(950.0, 300.0, 100.0, 40.0));
        assert_eq!(p.left, 1000.0 - 138.0);
    }

    #[test]
    fn test_narrow_viewport_centres() {
        let p = place(
            Rect::new(10.0, 300.0, 50.0, 50.0),
            Size::new(200.0, 600.0),
            false,
            260.0,
            &ToolbarConfig::default(),
        );
        assert_eq!(p.left, 100.0);
    }

    #[test]
    fn test_maximized_pins_top_right() {
        let p = place(
            Rect::new(0.0, 0.0, 1000.0, 800.0),
            VIEWPORT,
            true,
            420.0,
            &ToolbarConfig::default(),
        );
        assert_eq!(p.vertical, VerticalAnchor::Top(16.0));
        assert_eq!(p.left, 984.0);
        assert_eq!(p.transform, RIGHT_ALIGNED);
    }

    #[test]
    fn test_css_declarations() {
        let p = place_default(Rect::new(300.0, 400.0, 200.0, 100.0));
        let css = p.css();
        assert_eq!(css[0], ("bottom", "412px".to_string()));
        assert_eq!(css[1], ("left", "400px".to_string()));
        assert_eq!(css[2], ("transform", CENTERED.to_string()));
        assert_eq!(css[3], ("z-index", "12000".to_string()));
    }
}
