//! Open-toolbar state

use super::positioner::MenuPlacement;

/// State of an open toolbar menu
///
/// Exists only while the menu is open; closing the menu drops it along with
/// any unsaved title edit.
#[derive(Clone, Debug, PartialEq)]
pub struct ToolbarMenuState {
    pub placement: MenuPlacement,
    pub is_expanded: bool,
    pub is_editing_title: bool,
    pub temp_title: String,
}

impl ToolbarMenuState {
    pub fn new(placement: MenuPlacement) -> Self {
        Self {
            placement,
            is_expanded: false,
            is_editing_title: false,
            temp_title: String::new(),
        }
    }

    pub fn toggle_expanded(&mut self) {
        self.is_expanded = !self.is_expanded;
    }

    /// Enter title editing, seeded with the current title
    pub fn begin_title_edit(&mut self, current: &str) {
        self.is_editing_title = true;
        self.temp_title = current.to_string();
    }

    /// Leave title editing and hand back the edited text
    pub fn end_title_edit(&mut self) -> String {
        self.is_editing_title = false;
        std::mem::take(&mut self.temp_title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toolbar::positioner::{VerticalAnchor, CENTERED};

    fn state() -> ToolbarMenuState {
        ToolbarMenuState::new(MenuPlacement {
            vertical: VerticalAnchor::Top(0.0),
            left: 0.0,
            transform: CENTERED.to_string(),
            z: 12000,
        })
    }

    #[test]
    fn test_title_edit_cycle() {
        let mut menu = state();
        menu.begin_title_edit("Clock");
        assert!(menu.is_editing_title);
        menu.temp_title.push_str(" 2");
        assert_eq!(menu.end_title_edit(), "Clock 2");
        assert!(!menu.is_editing_title);
        assert!(menu.temp_title.is_empty());
    }

    #[test]
    fn test_toggle_expanded() {
        let mut menu = state();
        assert!(!menu.is_expanded);
        menu.toggle_expanded();
        assert!(menu.is_expanded);
    }
}
