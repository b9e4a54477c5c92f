//! Widget kinds and their capability table
//!
//! Per-kind behaviour (live-commit classification, screenshot eligibility,
//! content scaling policy, default geometry) is looked up in a
//! [`CapabilityTable`] rather than branched on inside the gesture engine, so
//! a new kind only needs a table entry.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::math::Size;

/// Every widget kind the dashboard can instantiate
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum WidgetKind {
    Clock,
    TimeTool,
    Traffic,
    Text,
    Checklist,
    Random,
    Dice,
    Sound,
    Drawing,
    Qr,
    Embed,
    Poll,
    Webcam,
    Scoreboard,
    Expectations,
    WorkSymbols,
    Weather,
    Schedule,
    Calendar,
    LunchCount,
    Classes,
    InstructionalRoutines,
    MiniApp,
    Materials,
    Stickers,
    Sticker,
    SeatingChart,
    Catalyst,
    CatalystInstruction,
    CatalystVisual,
    SmartNotebook,
    RecessGear,
}

impl WidgetKind {
    /// Get all widget kinds
    pub fn all() -> &'static [WidgetKind] {
        use WidgetKind::*;
        &[
            Clock,
            TimeTool,
            Traffic,
            Text,
            Checklist,
            Random,
            Dice,
            Sound,
            Drawing,
            Qr,
            Embed,
            Poll,
            Webcam,
            Scoreboard,
            Expectations,
            WorkSymbols,
            Weather,
            Schedule,
            Calendar,
            LunchCount,
            Classes,
            InstructionalRoutines,
            MiniApp,
            Materials,
            Stickers,
            Sticker,
            SeatingChart,
            Catalyst,
            CatalystInstruction,
            CatalystVisual,
            SmartNotebook,
            RecessGear,
        ]
    }

    /// Get the string ID used by the dashboard store
    pub fn id(&self) -> &'static str {
        use WidgetKind::*;
        match self {
            Clock => "clock",
            TimeTool => "time-tool",
            Traffic => "traffic",
            Text => "text",
            Checklist => "checklist",
            Random => "random",
            Dice => "dice",
            Sound => "sound",
            Drawing => "drawing",
            Qr => "qr",
            Embed => "embed",
            Poll => "poll",
            Webcam => "webcam",
            Scoreboard => "scoreboard",
            Expectations => "expectations",
            WorkSymbols => "workSymbols",
            Weather => "weather",
            Schedule => "schedule",
            Calendar => "calendar",
            LunchCount => "lunchCount",
            Classes => "classes",
            InstructionalRoutines => "instructionalRoutines",
            MiniApp => "miniApp",
            Materials => "materials",
            Stickers => "stickers",
            Sticker => "sticker",
            SeatingChart => "seating-chart",
            Catalyst => "catalyst",
            CatalystInstruction => "catalyst-instruction",
            CatalystVisual => "catalyst-visual",
            SmartNotebook => "smartNotebook",
            RecessGear => "recessGear",
        }
    }

    /// Parse from string ID (e.g., "clock", "time-tool")
    pub fn from_id(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|kind| kind.id() == id)
    }

    /// Title shown in the toolbar when the window has no custom title
    pub fn default_title(&self) -> String {
        use WidgetKind::*;
        let fixed = match self {
            Sound => "Noise Meter",
            Checklist => "Task List",
            Random => "Selector",
            Expectations => "Expectations",
            Calendar => "Class Events",
            LunchCount => "Lunch Orders",
            Classes => "Class Roster",
            TimeTool => "Timer",
            MiniApp => "App Manager",
            Sticker => "Sticker",
            SeatingChart => "Seating Chart",
            SmartNotebook => "Notebook Viewer",
            CatalystInstruction => "Guide: Instruction Guide",
            CatalystVisual => "Visual Anchor",
            _ => return capitalize(self.id()),
        };
        fixed.to_string()
    }

    /// Size a freshly created (or reset) window of this kind gets
    pub fn default_size(&self) -> Size {
        use WidgetKind::*;
        let (w, h) = match self {
            Clock => (280.0, 140.0),
            TimeTool => (420.0, 400.0),
            Traffic => (120.0, 320.0),
            Text => (300.0, 250.0),
            Checklist => (280.0, 300.0),
            Random => (300.0, 320.0),
            Dice => (240.0, 240.0),
            Sound => (300.0, 300.0),
            Drawing => (400.0, 350.0),
            Qr => (200.0, 250.0),
            Embed => (480.0, 350.0),
            Poll => (300.0, 250.0),
            Webcam => (400.0, 300.0),
            Scoreboard => (320.0, 200.0),
            Expectations | WorkSymbols => (320.0, 350.0),
            Weather => (250.0, 280.0),
            Schedule | Calendar => (300.0, 350.0),
            LunchCount => (500.0, 400.0),
            Classes => (600.0, 500.0),
            InstructionalRoutines => (400.0, 480.0),
            MiniApp => (500.0, 600.0),
            Materials => (340.0, 340.0),
            Stickers | SeatingChart | SmartNotebook => (600.0, 500.0),
            Sticker => (200.0, 200.0),
            Catalyst => (320.0, 400.0),
            CatalystInstruction => (280.0, 350.0),
            CatalystVisual => (600.0, 400.0),
            RecessGear => (250.0, 280.0),
        };
        Size::new(w, h)
    }
}

fn capitalize(id: &str) -> String {
    let mut chars = id.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl From<WidgetKind> for String {
    fn from(kind: WidgetKind) -> Self {
        kind.id().to_string()
    }
}

impl TryFrom<String> for WidgetKind {
    type Error = String;

    fn try_from(id: String) -> Result<Self, Self::Error> {
        WidgetKind::from_id(&id).ok_or_else(|| format!("unknown widget kind: {}", id))
    }
}

/// Capability flags for one widget kind
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct KindCapabilities {
    /// Every gesture frame is committed because sibling renders read this
    /// window's live geometry
    pub position_aware: bool,
    /// The screenshot action is offered
    pub screenshot: bool,
    /// Content may grow into extra space instead of transform-upscaling
    pub can_spread: bool,
    /// Virtual content size handed to the scale engine
    pub base_size: Size,
    /// Geometry restored by the reset-size action
    pub default_size: Size,
    /// Close removes the window without the inline confirmation
    pub skip_close_confirmation: bool,
}

impl KindCapabilities {
    /// Built-in capabilities for a kind
    pub fn defaults_for(kind: WidgetKind) -> Self {
        use WidgetKind::*;
        let size = kind.default_size();
        Self {
            position_aware: matches!(kind, Drawing),
            // Camera streams taint the canvas and iframes are cross-origin.
            screenshot: !matches!(kind, Webcam | Embed | MiniApp),
            can_spread: !matches!(kind, Traffic | Dice | Qr | Sticker),
            base_size: size,
            default_size: size,
            skip_close_confirmation: matches!(kind, Sticker),
        }
    }
}

/// Partial capability entry, used by configuration to adjust defaults
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CapabilityOverride {
    pub position_aware: Option<bool>,
    pub screenshot: Option<bool>,
    pub can_spread: Option<bool>,
    pub base_size: Option<Size>,
    pub default_size: Option<Size>,
    pub skip_close_confirmation: Option<bool>,
}

impl CapabilityOverride {
    fn apply_to(&self, caps: &mut KindCapabilities) {
        if let Some(v) = self.position_aware {
            caps.position_aware = v;
        }
        if let Some(v) = self.screenshot {
            caps.screenshot = v;
        }
        if let Some(v) = self.can_spread {
            caps.can_spread = v;
        }
        if let Some(v) = self.base_size {
            caps.base_size = v;
        }
        if let Some(v) = self.default_size {
            caps.default_size = v;
        }
        if let Some(v) = self.skip_close_confirmation {
            caps.skip_close_confirmation = v;
        }
    }
}

/// Static lookup from widget kind to capability flags
#[derive(Clone, Debug)]
pub struct CapabilityTable {
    entries: HashMap<WidgetKind, KindCapabilities>,
}

impl Default for CapabilityTable {
    fn default() -> Self {
        let entries = WidgetKind::all()
            .iter()
            .map(|&kind| (kind, KindCapabilities::defaults_for(kind)))
            .collect();
        Self { entries }
    }
}

impl CapabilityTable {
    /// Table with built-in capabilities for every kind
    pub fn new() -> Self {
        Self::default()
    }

    /// Capabilities for a kind
    pub fn get(&self, kind: WidgetKind) -> KindCapabilities {
        self.entries
            .get(&kind)
            .copied()
            .unwrap_or_else(|| KindCapabilities::defaults_for(kind))
    }

    /// Replace a kind's capabilities
    pub fn set(&mut self, kind: WidgetKind, caps: KindCapabilities) {
        self.entries.insert(kind, caps);
    }

    /// Builder-style variant of [`set`](Self::set)
    pub fn with(mut self, kind: WidgetKind, caps: KindCapabilities) -> Self {
        self.set(kind, caps);
        self
    }

    /// Apply partial overrides on top of the current entries
    pub fn merge(&mut self, overrides: &HashMap<WidgetKind, CapabilityOverride>) {
        for (kind, patch) in overrides {
            let mut caps = self.get(*kind);
            patch.apply_to(&mut caps);
            self.entries.insert(*kind, caps);
        }
    }

    /// Whether gestures on this kind commit every frame
    pub fn is_position_aware(&self, kind: WidgetKind) -> bool {
        self.get(kind).position_aware
    }

    /// Whether the screenshot action may be offered for this kind
    pub fn can_screenshot(&self, kind: WidgetKind) -> bool {
        self.get(kind).screenshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_id_round_trip() {
        for kind in WidgetKind::all() {
            assert_eq!(WidgetKind::from_id(kind.id()), Some(*kind));
        }
        assert_eq!(WidgetKind::from_id("nope"), None);
    }

    #[test]
    fn test_kind_serde_uses_store_ids() {
        let json = serde_json::to_string(&WidgetKind::TimeTool).unwrap();
        assert_eq!(json, "\"time-tool\"");
        let kind: WidgetKind = serde_json::from_str("\"seating-chart\"").unwrap();
        assert_eq!(kind, WidgetKind::SeatingChart);
        assert!(serde_json::from_str::<WidgetKind>("\"unknown\"").is_err());
    }

    #[test]
    fn test_default_titles() {
        assert_eq!(WidgetKind::Sound.default_title(), "Noise Meter");
        assert_eq!(WidgetKind::TimeTool.default_title(), "Timer");
        assert_eq!(WidgetKind::Clock.default_title(), "Clock");
        assert_eq!(WidgetKind::WorkSymbols.default_title(), "WorkSymbols");
    }

    #[test]
    fn test_screenshot_exclusions() {
        let table = CapabilityTable::new();
        assert!(!table.can_screenshot(WidgetKind::Webcam));
        assert!(!table.can_screenshot(WidgetKind::Embed));
        assert!(table.can_screenshot(WidgetKind::Clock));
    }

    #[test]
    fn test_table_override_does_not_touch_other_kinds() {
        let mut table = CapabilityTable::new();
        let mut overrides = HashMap::new();
        overrides.insert(
            WidgetKind::Text,
            CapabilityOverride {
                position_aware: Some(true),
                ..Default::default()
            },
        );
        table.merge(&overrides);

        assert!(table.is_position_aware(WidgetKind::Text));
        assert!(!table.is_position_aware(WidgetKind::Clock));
        // Untouched fields keep their defaults
        assert_eq!(
            table.get(WidgetKind::Text).default_size,
            WidgetKind::Text.default_size()
        );
    }

    #[test]
    fn test_with_replaces_entry() {
        let caps = KindCapabilities {
            position_aware: true,
            screenshot: false,
            can_spread: false,
            base_size: Size::new(100.0, 100.0),
            default_size: Size::new(200.0, 200.0),
            skip_close_confirmation: true,
        };
        let table = CapabilityTable::new().with(WidgetKind::Clock, caps);
        assert_eq!(table.get(WidgetKind::Clock), caps);
    }
}
