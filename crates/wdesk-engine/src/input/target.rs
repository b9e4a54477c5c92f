//! Pointer target classification
//!
//! Decides whether a pointer-down inside a window may start a drag, from the
//! chain of elements between the event target and the window root. The
//! browser adapter builds the chain; everything here is pure.

use serde::{Deserialize, Serialize};

use crate::math::Size;

/// Class that marks a subtree as never starting a drag
pub const NO_DRAG_CLASS: &str = "no-drag";

/// Class carried by the resize handle
pub const RESIZE_HANDLE_CLASS: &str = "resize-handle";

/// Tags that consume pointer input themselves
const INTERACTIVE_TAGS: &[&str] = &["button", "input", "select", "textarea", "canvas"];

/// Computed `overflow-x` / `overflow-y` value
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Overflow {
    #[default]
    Visible,
    Hidden,
    Clip,
    Scroll,
    Auto,
}

impl Overflow {
    /// Parse a computed style value; unknown values read as `visible`
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "hidden" => Self::Hidden,
            "clip" => Self::Clip,
            "scroll" => Self::Scroll,
            "auto" | "overlay" => Self::Auto,
            _ => Self::Visible,
        }
    }

    pub fn allows_scroll(self) -> bool {
        matches!(self, Self::Scroll | Self::Auto)
    }
}

/// The facts about one DOM element that classification needs
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ElementInfo {
    /// Lowercase tag name
    pub tag: String,
    pub classes: Vec<String>,
    /// `data-no-drag` attribute present
    pub no_drag_attr: bool,
    pub overflow_x: Overflow,
    pub overflow_y: Overflow,
    pub scroll_size: Size,
    pub client_size: Size,
}

impl ElementInfo {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            ..Self::default()
        }
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    /// Builder for a scroll container
    pub fn with_overflow(
        mut self,
        overflow_x: Overflow,
        overflow_y: Overflow,
        scroll_size: Size,
        client_size: Size,
    ) -> Self {
        self.overflow_x = overflow_x;
        self.overflow_y = overflow_y;
        self.scroll_size = scroll_size;
        self.client_size = client_size;
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn is_interactive(&self) -> bool {
        INTERACTIVE_TAGS.contains(&self.tag.as_str())
            || self.no_drag_attr
            || self.has_class(NO_DRAG_CLASS)
            || self.has_class(RESIZE_HANDLE_CLASS)
    }

    /// Scrolling is allowed on an axis and there is content to scroll to
    pub fn is_scrollable(&self) -> bool {
        let x = self.overflow_x.allows_scroll() && self.scroll_size.width > self.client_size.width;
        let y =
            self.overflow_y.allows_scroll() && self.scroll_size.height > self.client_size.height;
        x || y
    }
}

/// Outcome of [`classify`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TargetClass {
    /// Starts a drag
    Plain,
    /// Control or opted-out element; the pointer belongs to it
    Interactive,
    /// Inside a scroll container; the pointer scrolls
    Scrollable,
}

impl TargetClass {
    pub fn allows_drag(self) -> bool {
        self == Self::Plain
    }
}

/// Classify an ancestor chain, target first, window root excluded
///
/// Any interactive element wins over any scrollable one.
pub fn classify(chain: &[ElementInfo]) -> TargetClass {
    if chain.iter().any(ElementInfo::is_interactive) {
        TargetClass::Interactive
    } else if chain.iter().any(ElementInfo::is_scrollable) {
        TargetClass::Scrollable
    } else {
        TargetClass::Plain
    }
}
