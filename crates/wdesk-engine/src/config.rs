//! Engine configuration
//!
//! Every knob has a default matching the dashboard's shipped behaviour, so
//! an empty JSON object is a valid configuration.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{DeskError, DeskResult};
use crate::math::{Size, Vec2, WINDOW_CHROME};
use crate::window::{CapabilityOverride, CapabilityTable, WidgetKind};

/// Which touch supplies the origin Y of a two-finger swipe
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SwipeOrigin {
    /// Y of the first touch in the list
    #[default]
    FirstTouch,
    /// Mean Y of both touches
    Average,
}

/// Pointer and touch gesture thresholds
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GestureConfig {
    /// Maximum pointer travel (px) for a gesture to count as a click
    pub click_threshold: f32,
    /// Minimum downward travel (px) for a two-finger swipe to minimize
    pub swipe_threshold: f32,
    pub swipe_origin: SwipeOrigin,
    /// Resize floor per axis
    pub min_size: Size,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            click_threshold: 5.0,
            swipe_threshold: 60.0,
            swipe_origin: SwipeOrigin::FirstTouch,
            min_size: Size::new(WINDOW_CHROME.min_width, WINDOW_CHROME.min_height),
        }
    }
}

/// Floating toolbar geometry
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ToolbarConfig {
    pub menu_height: f32,
    /// Extra clearance above the window before the menu flips below it
    pub menu_margin: f32,
    /// Distance between the window edge and the menu
    pub gap: f32,
    /// Minimum distance between the menu and the viewport's side edges
    pub edge_margin: f32,
    pub collapsed_width: f32,
    pub expanded_width: f32,
    /// Offset from the viewport's top-right corner when the window is maximized
    pub pinned_offset: Vec2,
}

impl Default for ToolbarConfig {
    fn default() -> Self {
        Self {
            menu_height: 56.0,
            menu_margin: 20.0,
            gap: 12.0,
            edge_margin: 8.0,
            collapsed_width: 260.0,
            expanded_width: 420.0,
            pinned_offset: Vec2::new(16.0, 16.0),
        }
    }
}

impl ToolbarConfig {
    /// Width of the menu in the given expansion state
    pub fn menu_width(&self, expanded: bool) -> f32 {
        if expanded {
            self.expanded_width
        } else {
            self.collapsed_width
        }
    }
}

/// Window chrome subtracted from the content area before scaling
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChromeConfig {
    pub header_height: f32,
    pub padding: f32,
}

/// Dashboard-wide appearance tokens
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Theme {
    /// Background alpha used when a window has no transparency of its own
    pub window_transparency: f32,
    pub border_radius: String,
    pub font_family: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            window_transparency: 0.8,
            border_radius: "2xl".to_string(),
            font_family: "sans".to_string(),
        }
    }
}

/// Top-level engine configuration
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    pub gesture: GestureConfig,
    pub toolbar: ToolbarConfig,
    pub chrome: ChromeConfig,
    pub theme: Theme,
    /// Per-kind adjustments merged over the built-in capability table
    pub capabilities: HashMap<WidgetKind, CapabilityOverride>,
}

impl EngineConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> DeskResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values no gesture or layout path can work with
    pub fn validate(&self) -> DeskResult<()> {
        let g = &self.gesture;
        if !(g.click_threshold >= 0.0) {
            return Err(DeskError::ConfigError(
                "gesture.clickThreshold must be non-negative".to_string(),
            ));
        }
        if !(g.swipe_threshold > 0.0) {
            return Err(DeskError::ConfigError(
                "gesture.swipeThreshold must be positive".to_string(),
            ));
        }
        if !g.min_size.is_positive() {
            return Err(DeskError::ConfigError(
                "gesture.minSize must be positive on both axes".to_string(),
            ));
        }

        let t = &self.toolbar;
        let lengths = [
            ("toolbar.menuHeight", t.menu_height),
            ("toolbar.menuMargin", t.menu_margin),
            ("toolbar.gap", t.gap),
            ("toolbar.edgeMargin", t.edge_margin),
            ("toolbar.collapsedWidth", t.collapsed_width),
            ("toolbar.expandedWidth", t.expanded_width),
            ("chrome.headerHeight", self.chrome.header_height),
            ("chrome.padding", self.chrome.padding),
        ];
        if let Some((name, _)) = lengths.iter().find(|(_, v)| !(*v >= 0.0)) {
            return Err(DeskError::ConfigError(format!("{} must be non-negative", name)));
        }

        if !(0.0..=1.0).contains(&self.theme.window_transparency) {
            return Err(DeskError::ConfigError(
                "theme.windowTransparency must be within 0..1".to_string(),
            ));
        }

        for (kind, caps) in &self.capabilities {
            let bad_size = [caps.base_size, caps.default_size]
                .iter()
                .flatten()
                .any(|s| !s.is_positive());
            if bad_size {
                return Err(DeskError::ConfigError(format!(
                    "capabilities.{}: sizes must be positive",
                    kind.id()
                )));
            }
        }

        Ok(())
    }

    /// Built-in capability table with this configuration's overrides applied
    pub fn capability_table(&self) -> CapabilityTable {
        let mut table = CapabilityTable::new();
        table.merge(&self.capabilities);
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.gesture.click_threshold, 5.0);
        assert_eq!(config.gesture.swipe_threshold, 60.0);
        assert_eq!(config.gesture.swipe_origin, SwipeOrigin::FirstTouch);
        assert_eq!(config.gesture.min_size, Size::new(150.0, 100.0));
        assert_eq!(config.toolbar.menu_height + config.toolbar.menu_margin, 76.0);
        assert_eq!(config.theme.window_transparency, 0.8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_json_is_default() {
        let config = EngineConfig::from_json("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_partial_json_keeps_other_defaults() {
        let config = EngineConfig::from_json(
            r#"{"gesture":{"swipeOrigin":"average","clickThreshold":8},"theme":{"fontFamily":"mono"}}"#,
        )
        .unwrap();
        assert_eq!(config.gesture.swipe_origin, SwipeOrigin::Average);
        assert_eq!(config.gesture.click_threshold, 8.0);
        assert_eq!(config.gesture.swipe_threshold, 60.0);
        assert_eq!(config.theme.font_family, "mono");
        assert_eq!(config.theme.border_radius, "2xl");
    }

    #[test]
    fn test_rejects_out_of_range_transparency() {
        let err = EngineConfig::from_json(r#"{"theme":{"windowTransparency":1.5}}"#).unwrap_err();
        assert!(matches!(err, DeskError::ConfigError(_)));
    }

    #[test]
    fn test_rejects_non_positive_min_size() {
        let err = EngineConfig::from_json(r#"{"gesture":{"minSize":{"width":0,"height":100}}}"#)
            .unwrap_err();
        assert!(matches!(err, DeskError::ConfigError(_)));
    }

    #[test]
    fn test_rejects_negative_gap() {
        let err = EngineConfig::from_json(r#"{"toolbar":{"gap":-1}}"#).unwrap_err();
        assert_eq!(
            err,
            DeskError::ConfigError("toolbar.gap must be non-negative".to_string())
        );
    }

    #[test]
    fn test_malformed_json_is_serialization_error() {
        let err = EngineConfig::from_json("{").unwrap_err();
        assert!(matches!(err, DeskError::SerializationError(_)));
    }

    #[test]
    fn test_capability_overrides_from_json() {
        let config = EngineConfig::from_json(
            r#"{"capabilities":{"text":{"positionAware":true},"webcam":{"screenshot":true}}}"#,
        )
        .unwrap();
        let table = config.capability_table();
        assert!(table.is_position_aware(WidgetKind::Text));
        assert!(table.can_screenshot(WidgetKind::Webcam));
        assert!(!table.can_screenshot(WidgetKind::Embed));
    }

    #[test]
    fn test_unknown_kind_in_capabilities_is_rejected() {
        assert!(EngineConfig::from_json(r#"{"capabilities":{"spaceship":{}}}"#).is_err());
    }
}
