//! Window shell
//!
//! Composes the gesture controller, toolbar state, close confirmation and
//! settings-face latch for one widget window, and derives the frame the host
//! renders. The shell holds no geometry of its own: every read comes from
//! the [`WindowRecord`] passed in, and every write goes through the store.
//!
//! Restoring a minimized window is done by whoever owns the dock, with
//! `WindowPatch::minimized(false)`.

mod frame;
mod items;

pub use frame::{Face, FaceMount, ShellState, WindowFrame};
pub use items::{ToolbarAction, ToolbarItems};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::{ChromeConfig, EngineConfig, Theme, ToolbarConfig};
use crate::error::{DeskError, DeskResult};
use crate::input::{
    DragIndicator, GestureController, GestureKind, GestureOutcome, PointerInput, TargetClass,
    TouchPoint,
};
use crate::math::{Rect, Size, Z_LAYERS};
use crate::scale::{self, ScaleRequest};
use crate::store::WidgetStore;
use crate::toolbar::{self, ToolbarMenuState};
use crate::types::{PointerId, WidgetId};
use crate::window::{WindowPatch, WindowRecord};

/// Text of the inline close confirmation
pub const CLOSE_CONFIRMATION: &str = "Close widget? Data will be lost.";

/// Screenshot utility provided by the host
pub trait ScreenshotService {
    fn take_screenshot(&mut self, id: &WidgetId, title: &str) -> DeskResult<()>;

    /// A capture is in progress
    fn is_capturing(&self) -> bool;

    /// The post-capture flash is showing
    fn is_flashing(&self) -> bool;
}

/// Per-window style overrides; `None` falls back to the theme
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StyleOverrides {
    pub border_radius: Option<String>,
    pub font_family: Option<String>,
}

/// Options the host passes when mounting a window
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShellOptions {
    /// Close without confirmation regardless of kind
    pub skip_close_confirmation: bool,
    /// Extra controls rendered at the start of the expanded toolbar row
    pub header_actions: Vec<String>,
    pub style: StyleOverrides,
}

/// Result of [`WindowShell::request_close`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CloseOutcome {
    Removed,
    /// Inline confirmation is showing
    Confirming,
}

/// Interaction shell for one widget window
#[derive(Debug)]
pub struct WindowShell {
    controller: GestureController,
    menu: Option<ToolbarMenuState>,
    face: FaceMount,
    confirming_close: bool,
    options: ShellOptions,
    toolbar: ToolbarConfig,
    chrome: ChromeConfig,
}

impl WindowShell {
    pub fn new(config: &EngineConfig, indicator: DragIndicator, options: ShellOptions) -> Self {
        Self {
            controller: GestureController::new(
                config.gesture.clone(),
                config.capability_table(),
                indicator,
            ),
            menu: None,
            face: FaceMount::default(),
            confirming_close: false,
            options,
            toolbar: config.toolbar.clone(),
            chrome: config.chrome.clone(),
        }
    }

    pub fn controller(&self) -> &GestureController {
        &self.controller
    }

    pub fn options(&self) -> &ShellOptions {
        &self.options
    }

    pub fn menu(&self) -> Option<&ToolbarMenuState> {
        self.menu.as_ref()
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu.is_some()
    }

    pub fn is_confirming_close(&self) -> bool {
        self.confirming_close
    }

    /// Message to show while the close confirmation is up
    pub fn close_confirmation(&self) -> Option<&'static str> {
        self.confirming_close.then_some(CLOSE_CONFIRMATION)
    }

    pub fn set_annotating(&mut self, annotating: bool) {
        self.controller.set_annotating(annotating);
    }

    pub fn state(&self, window: &WindowRecord) -> ShellState {
        match self.controller.active_kind() {
            Some(GestureKind::Drag) => ShellState::Dragging,
            Some(GestureKind::Resize) => ShellState::Resizing,
            None if self.confirming_close => ShellState::ConfirmingClose,
            None if window.minimized => ShellState::Minimized,
            None if window.maximized => ShellState::Maximized,
            None if window.flipped => ShellState::Flipped,
            None => ShellState::Normal,
        }
    }

    // =========================================================================
    // Pointer and touch input
    // =========================================================================

    pub fn pointer_down(
        &mut self,
        window: &WindowRecord,
        input: PointerInput,
        target: TargetClass,
        store: &mut dyn WidgetStore,
    ) -> DeskResult<GestureOutcome> {
        self.controller.pointer_down(window, input, target, store)
    }

    pub fn resize_down(
        &mut self,
        window: &WindowRecord,
        input: PointerInput,
        store: &mut dyn WidgetStore,
    ) -> DeskResult<GestureOutcome> {
        self.controller.resize_down(window, input, store)
    }

    pub fn pointer_move(
        &mut self,
        window: &WindowRecord,
        input: PointerInput,
        store: &mut dyn WidgetStore,
    ) -> DeskResult<GestureOutcome> {
        self.controller.pointer_move(window, input, store)
    }

    /// Ends the gesture; a click toggles the toolbar
    pub fn pointer_up(
        &mut self,
        window: &WindowRecord,
        input: PointerInput,
        viewport: Size,
        store: &mut dyn WidgetStore,
    ) -> DeskResult<GestureOutcome> {
        let outcome = self.controller.pointer_up(window, input, store)?;
        self.after_gesture(window, outcome, viewport);
        Ok(outcome)
    }

    pub fn pointer_cancel(
        &mut self,
        window: &WindowRecord,
        pointer_id: PointerId,
        viewport: Size,
        store: &mut dyn WidgetStore,
    ) -> DeskResult<GestureOutcome> {
        let outcome = self.controller.pointer_cancel(window, pointer_id, store)?;
        self.after_gesture(window, outcome, viewport);
        Ok(outcome)
    }

    pub fn lost_capture(
        &mut self,
        window: &WindowRecord,
        pointer_id: PointerId,
        viewport: Size,
        store: &mut dyn WidgetStore,
    ) -> DeskResult<GestureOutcome> {
        let outcome = self.controller.lost_capture(window, pointer_id, store)?;
        self.after_gesture(window, outcome, viewport);
        Ok(outcome)
    }

    fn after_gesture(&mut self, window: &WindowRecord, outcome: GestureOutcome, viewport: Size) {
        match outcome {
            GestureOutcome::Click => self.toggle_toolbar(window, viewport),
            GestureOutcome::Committed(rect) | GestureOutcome::Ended(rect) => {
                self.place_menu(rect, window.maximized, viewport)
            }
            _ => {}
        }
    }

    pub fn touch_start(&mut self, window: &WindowRecord, touches: &[TouchPoint]) {
        self.controller.touch_start(window, touches);
    }

    pub fn touch_end(
        &mut self,
        window: &WindowRecord,
        remaining: usize,
        changed: &[TouchPoint],
        store: &mut dyn WidgetStore,
    ) -> DeskResult<GestureOutcome> {
        let outcome = self.controller.touch_end(window, remaining, changed, store)?;
        if outcome == GestureOutcome::Minimized {
            self.menu = None;
        }
        Ok(outcome)
    }

    pub fn touch_cancel(&mut self) {
        self.controller.touch_cancel();
    }

    // =========================================================================
    // Toolbar
    // =========================================================================

    pub fn toggle_toolbar(&mut self, window: &WindowRecord, viewport: Size) {
        if self.menu.take().is_some() {
            return;
        }
        let placement = toolbar::place(
            window.rect(),
            viewport,
            window.maximized,
            self.toolbar.menu_width(false),
            &self.toolbar,
        );
        debug!(id = %window.id, ?placement, "toolbar open");
        self.menu = Some(ToolbarMenuState::new(placement));
    }

    pub fn toggle_menu_expanded(&mut self, window: &WindowRecord, viewport: Size) {
        if let Some(menu) = self.menu.as_mut() {
            menu.toggle_expanded();
        }
        self.place_menu(window.rect(), window.maximized, viewport);
    }

    /// Pointer down anywhere outside the window and its menu
    pub fn outside_interaction(&mut self) {
        self.menu = None;
    }

    pub fn close_menu(&mut self) {
        self.menu = None;
    }

    pub fn viewport_resized(&mut self, window: &WindowRecord, viewport: Size) {
        self.place_menu(window.rect(), window.maximized, viewport);
    }

    fn place_menu(&mut self, anchor: Rect, maximized: bool, viewport: Size) {
        let toolbar = &self.toolbar;
        if let Some(menu) = self.menu.as_mut() {
            menu.placement = toolbar::place(
                anchor,
                viewport,
                maximized,
                toolbar.menu_width(menu.is_expanded),
                toolbar,
            );
        }
    }

    pub fn toolbar_items(
        &self,
        window: &WindowRecord,
        screenshots: &dyn ScreenshotService,
    ) -> ToolbarItems {
        let mut items = ToolbarItems {
            primary: vec![
                ToolbarAction::Settings,
                ToolbarAction::Close,
                ToolbarAction::Expand,
            ],
            secondary: Vec::new(),
        };
        if !self.menu.as_ref().is_some_and(|m| m.is_expanded) {
            return items;
        }

        items.secondary.extend(
            self.options
                .header_actions
                .iter()
                .cloned()
                .map(ToolbarAction::Header),
        );
        if self.controller.capabilities().can_screenshot(window.kind) && !screenshots.is_capturing()
        {
            items.secondary.push(ToolbarAction::Screenshot);
        }
        items.secondary.push(ToolbarAction::Duplicate);
        items.secondary.push(ToolbarAction::Minimize);
        items.secondary.push(if window.maximized {
            ToolbarAction::Restore
        } else {
            ToolbarAction::Maximize
        });
        items.secondary.push(ToolbarAction::ResetSize);
        items
    }

    // =========================================================================
    // Window actions
    // =========================================================================

    pub fn bring_to_front(
        &mut self,
        window: &WindowRecord,
        store: &mut dyn WidgetStore,
    ) -> DeskResult<()> {
        store.bring_to_front(&window.id)
    }

    pub fn toggle_flip(&mut self, window: &WindowRecord, store: &mut dyn WidgetStore) -> DeskResult<()> {
        self.menu = None;
        store.update_widget(&window.id, &WindowPatch::flipped(!window.flipped))
    }

    pub fn minimize(&mut self, window: &WindowRecord, store: &mut dyn WidgetStore) -> DeskResult<()> {
        self.menu = None;
        debug!(id = %window.id, "minimize");
        store.update_widget(&window.id, &WindowPatch::minimized(true))
    }

    pub fn toggle_maximize(
        &mut self,
        window: &WindowRecord,
        store: &mut dyn WidgetStore,
    ) -> DeskResult<()> {
        self.menu = None;
        let maximize = !window.maximized;
        debug!(id = %window.id, maximize, "toggle maximize");
        store.update_widget(&window.id, &WindowPatch::maximized(maximize))?;
        if maximize {
            store.bring_to_front(&window.id)?;
        }
        Ok(())
    }

    pub fn duplicate(&mut self, window: &WindowRecord, store: &mut dyn WidgetStore) -> DeskResult<()> {
        self.menu = None;
        store.duplicate_widget(&window.id)
    }

    pub fn reset_size(&mut self, window: &WindowRecord, store: &mut dyn WidgetStore) -> DeskResult<()> {
        self.menu = None;
        store.reset_size(&window.id)
    }

    pub fn request_close(
        &mut self,
        window: &WindowRecord,
        store: &mut dyn WidgetStore,
    ) -> DeskResult<CloseOutcome> {
        self.menu = None;
        let skip = self.options.skip_close_confirmation
            || self
                .controller
                .capabilities()
                .get(window.kind)
                .skip_close_confirmation;
        if skip {
            debug!(id = %window.id, "close without confirmation");
            store.remove_widget(&window.id)?;
            return Ok(CloseOutcome::Removed);
        }
        debug!(id = %window.id, "close confirmation shown");
        self.confirming_close = true;
        Ok(CloseOutcome::Confirming)
    }

    pub fn confirm_close(&mut self, window: &WindowRecord, store: &mut dyn WidgetStore) -> DeskResult<()> {
        if !self.confirming_close {
            return Err(DeskError::InvalidOperation {
                op: "confirm_close",
                reason: "no close confirmation is pending",
            });
        }
        self.confirming_close = false;
        debug!(id = %window.id, "close confirmed");
        store.remove_widget(&window.id)
    }

    pub fn cancel_close(&mut self) {
        self.confirming_close = false;
    }

    pub fn take_screenshot(
        &mut self,
        window: &WindowRecord,
        screenshots: &mut dyn ScreenshotService,
    ) -> DeskResult<()> {
        self.menu = None;
        if !self.controller.capabilities().can_screenshot(window.kind) {
            warn!(id = %window.id, kind = window.kind.id(), "screenshot not supported");
            return Err(DeskError::InvalidOperation {
                op: "take_screenshot",
                reason: "widget kind cannot be captured",
            });
        }
        if screenshots.is_capturing() {
            warn!(id = %window.id, "screenshot already in progress");
            return Err(DeskError::InvalidOperation {
                op: "take_screenshot",
                reason: "a capture is already in progress",
            });
        }
        screenshots.take_screenshot(&window.id, &window.title())
    }

    // =========================================================================
    // Title editing
    // =========================================================================

    pub fn begin_title_edit(&mut self, window: &WindowRecord) -> DeskResult<()> {
        let menu = self.menu.as_mut().ok_or(DeskError::InvalidOperation {
            op: "begin_title_edit",
            reason: "toolbar is not open",
        })?;
        menu.begin_title_edit(&window.title());
        Ok(())
    }

    pub fn set_temp_title(&mut self, title: &str) {
        if let Some(menu) = self.menu.as_mut().filter(|m| m.is_editing_title) {
            menu.temp_title = title.to_string();
        }
    }

    /// Commit the edited title; returns whether anything was written
    ///
    /// A blank title clears the custom title back to the kind's default.
    pub fn commit_title(&mut self, window: &WindowRecord, store: &mut dyn WidgetStore) -> DeskResult<bool> {
        let Some(menu) = self.menu.as_mut().filter(|m| m.is_editing_title) else {
            return Ok(false);
        };
        let edited = menu.end_title_edit();
        let trimmed = edited.trim();
        let custom = (!trimmed.is_empty()).then(|| trimmed.to_string());
        if custom == window.custom_title {
            return Ok(false);
        }
        debug!(id = %window.id, title = ?custom, "title commit");
        store.update_widget(&window.id, &WindowPatch::custom_title(custom))?;
        Ok(true)
    }

    pub fn cancel_title_edit(&mut self) {
        if let Some(menu) = self.menu.as_mut() {
            menu.end_title_edit();
        }
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Derive the render frame for the current window state
    pub fn frame(&mut self, window: &WindowRecord, viewport: Size, theme: &Theme) -> WindowFrame {
        self.face.observe(window.flipped);

        let preview = self.controller.preview();
        let rect = if window.maximized {
            Rect::new(0.0, 0.0, viewport.width, viewport.height)
        } else {
            preview.unwrap_or_else(|| window.rect())
        };
        let z = if window.maximized {
            Z_LAYERS.maximized
        } else {
            Z_LAYERS.window(window.z, preview.is_some())
        };

        let caps = self.controller.capabilities().get(window.kind);
        let content = scale::compute(
            &ScaleRequest::new(rect.size(), caps.base_size, caps.can_spread)
                .with_chrome(self.chrome.header_height, self.chrome.padding),
        );

        let style = &self.options.style;
        WindowFrame {
            rect,
            z,
            opacity: if window.minimized { 0.0 } else { 1.0 },
            interactive: !window.minimized,
            face: FaceMount::face(window.flipped),
            settings_mounted: self.face.settings_mounted(),
            background_alpha: window.transparency.unwrap_or(theme.window_transparency),
            border_radius: style
                .border_radius
                .clone()
                .unwrap_or_else(|| theme.border_radius.clone()),
            font_family: style
                .font_family
                .clone()
                .unwrap_or_else(|| theme.font_family.clone()),
            title: window.title(),
            state: self.state(window),
            confirm_overlay_z: self.confirming_close.then_some(Z_LAYERS.confirm_overlay),
            content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec2;
    use crate::store::MemoryStore;
    use crate::toolbar::VerticalAnchor;
    use crate::window::WidgetKind;

    const VIEWPORT: Size = Size::new(1280.0, 800.0);

    #[derive(Default)]
    struct FakeScreenshots {
        capturing: bool,
        taken: Vec<String>,
    }

    impl ScreenshotService for FakeScreenshots {
        fn take_screenshot(&mut self, _id: &WidgetId, title: &str) -> DeskResult<()> {
            self.taken.push(title.to_string());
            Ok(())
        }

        fn is_capturing(&self) -> bool {
            self.capturing
        }

        fn is_flashing(&self) -> bool {
            false
        }
    }

    fn setup(kind: WidgetKind) -> (WindowShell, MemoryStore, WindowRecord) {
        let window = WindowRecord::new("w1", kind, Vec2::ZERO)
            .with_rect(Rect::new(200.0, 200.0, 300.0, 200.0));
        let mut store = MemoryStore::new();
        store.insert(window.clone());
        let shell = WindowShell::new(
            &EngineConfig::default(),
            DragIndicator::default(),
            ShellOptions::default(),
        );
        (shell, store, window)
    }

    fn reload(store: &MemoryStore) -> WindowRecord {
        store.get(&WidgetId::new("w1")).cloned().unwrap()
    }

    #[test]
    fn test_click_opens_and_closes_toolbar() {
        let (mut shell, mut store, w) = setup(WidgetKind::Clock);
        let down = PointerInput::new(1, 250.0, 250.0);
        shell.pointer_down(&w, down, TargetClass::Plain, &mut store).unwrap();
        let out = shell.pointer_up(&w, down, VIEWPORT, &mut store).unwrap();
        assert_eq!(out, GestureOutcome::Click);
        assert!(shell.is_menu_open());

        shell.pointer_down(&w, down, TargetClass::Plain, &mut store).unwrap();
        shell.pointer_up(&w, down, VIEWPORT, &mut store).unwrap();
        assert!(!shell.is_menu_open());
    }

    #[test]
    fn test_state_precedence() {
        let (mut shell, mut store, mut w) = setup(WidgetKind::Clock);
        assert_eq!(shell.state(&w), ShellState::Normal);
        w.flipped = true;
        assert_eq!(shell.state(&w), ShellState::Flipped);
        w.maximized = true;
        assert_eq!(shell.state(&w), ShellState::Maximized);
        w.minimized = true;
        assert_eq!(shell.state(&w), ShellState::Minimized);
        shell.request_close(&w, &mut store).unwrap();
        assert_eq!(shell.state(&w), ShellState::ConfirmingClose);
    }

    #[test]
    fn test_close_confirmation_flow() {
        let (mut shell, mut store, w) = setup(WidgetKind::Clock);
        assert_eq!(shell.request_close(&w, &mut store).unwrap(), CloseOutcome::Confirming);
        assert_eq!(shell.close_confirmation(), Some("Close widget? Data will be lost."));
        let frame = shell.frame(&w, VIEWPORT, &Theme::default());
        assert_eq!(frame.confirm_overlay_z, Some(9950));
        shell.cancel_close();
        assert!(store.get(&w.id).is_some());

        shell.request_close(&w, &mut store).unwrap();
        shell.confirm_close(&w, &mut store).unwrap();
        assert!(store.get(&w.id).is_none());
        assert!(shell.confirm_close(&w, &mut store).is_err());
    }

    #[test]
    fn test_sticker_closes_immediately() {
        let (mut shell, mut store, w) = setup(WidgetKind::Sticker);
        assert_eq!(shell.request_close(&w, &mut store).unwrap(), CloseOutcome::Removed);
        assert!(store.is_empty());
    }

    #[test]
    fn test_maximize_brings_to_front() {
        let (mut shell, mut store, w) = setup(WidgetKind::Clock);
        let mut other = WindowRecord::new("w2", WidgetKind::Text, Vec2::ZERO);
        other.z = 9;
        store.insert(other);

        shell.toggle_maximize(&w, &mut store).unwrap();
        let after = reload(&store);
        assert!(after.maximized);
        assert_eq!(after.z, 10);
        assert_eq!(after.rect(), w.rect());

        shell.toggle_maximize(&after, &mut store).unwrap();
        assert!(!reload(&store).maximized);
    }

    #[test]
    fn test_flip_and_minimize_commit_single_fields() {
        let (mut shell, mut store, w) = setup(WidgetKind::Clock);
        shell.toggle_flip(&w, &mut store).unwrap();
        assert!(reload(&store).flipped);
        shell.minimize(&w, &mut store).unwrap();
        let after = reload(&store);
        assert!(after.minimized);
        assert!(after.flipped);
    }

    #[test]
    fn test_screenshot_capability_gate() {
        let (mut shell, _store, w) = setup(WidgetKind::Webcam);
        let mut shots = FakeScreenshots::default();
        let err = shell.take_screenshot(&w, &mut shots).unwrap_err();
        assert!(matches!(err, DeskError::InvalidOperation { op: "take_screenshot", .. }));
        assert!(shots.taken.is_empty());

        let (mut shell, _store, w) = setup(WidgetKind::Clock);
        shell.take_screenshot(&w, &mut shots).unwrap();
        assert_eq!(shots.taken, vec!["Clock".to_string()]);
    }

    #[test]
    fn test_toolbar_items_order() {
        let (mut shell, _store, w) = setup(WidgetKind::Clock);
        let mut shell_options = ShellOptions::default();
        shell_options.header_actions = vec!["timer-reset".to_string()];
        shell.options = shell_options;
        let shots = FakeScreenshots::default();

        let collapsed = shell.toolbar_items(&w, &shots);
        assert_eq!(
            collapsed.primary,
            vec![ToolbarAction::Settings, ToolbarAction::Close, ToolbarAction::Expand]
        );
        assert!(collapsed.secondary.is_empty());

        shell.toggle_toolbar(&w, VIEWPORT);
        shell.toggle_menu_expanded(&w, VIEWPORT);
        let expanded = shell.toolbar_items(&w, &shots);
        assert_eq!(
            expanded.secondary,
            vec![
                ToolbarAction::Header("timer-reset".to_string()),
                ToolbarAction::Screenshot,
                ToolbarAction::Duplicate,
                ToolbarAction::Minimize,
                ToolbarAction::Maximize,
                ToolbarAction::ResetSize,
            ]
        );

        let busy = FakeScreenshots {
            capturing: true,
            ..Default::default()
        };
        assert!(!shell.toolbar_items(&w, &busy).contains(&ToolbarAction::Screenshot));
    }

    #[test]
    fn test_expanding_recomputes_width() {
        let (mut shell, _store, _) = setup(WidgetKind::Clock);
        let edge = WindowRecord::new("w1", WidgetKind::Clock, Vec2::ZERO)
            .with_rect(Rect::new(0.0, 300.0, 40.0, 40.0));
        shell.toggle_toolbar(&edge, VIEWPORT);
        assert_eq!(shell.menu().unwrap().placement.left, 138.0);
        shell.toggle_menu_expanded(&edge, VIEWPORT);
        assert_eq!(shell.menu().unwrap().placement.left, 218.0);
        shell.outside_interaction();
        assert!(!shell.is_menu_open());
    }

    #[test]
    fn test_viewport_resize_replaces_open_menu() {
        let (mut shell, _store, w) = setup(WidgetKind::Clock);
        shell.viewport_resized(&w, Size::new(400.0, 500.0));
        assert!(!shell.is_menu_open());

        shell.toggle_toolbar(&w, VIEWPORT);
        let placement = &shell.menu().unwrap().placement;
        assert_eq!(placement.left, 350.0);
        assert_eq!(placement.vertical, VerticalAnchor::Bottom(612.0));

        shell.viewport_resized(&w, Size::new(400.0, 500.0));
        let placement = &shell.menu().unwrap().placement;
        assert_eq!(placement.left, 262.0);
        assert_eq!(placement.vertical, VerticalAnchor::Bottom(312.0));

        shell.viewport_resized(&w, Size::new(250.0, 500.0));
        assert_eq!(shell.menu().unwrap().placement.left, 125.0);
    }

    #[test]
    fn test_frame_z_stays_below_overlays() {
        let (mut shell, _store, mut w) = setup(WidgetKind::Clock);
        w.z = 12_000;
        let frame = shell.frame(&w, VIEWPORT, &Theme::default());
        assert!(frame.z < Z_LAYERS.confirm_overlay);
        w.maximized = true;
        let frame = shell.frame(&w, VIEWPORT, &Theme::default());
        assert_eq!(frame.z, Z_LAYERS.maximized);
    }

    #[test]
    fn test_title_edit() {
        let (mut shell, mut store, w) = setup(WidgetKind::Clock);
        assert!(shell.begin_title_edit(&w).is_err());

        shell.toggle_toolbar(&w, VIEWPORT);
        shell.begin_title_edit(&w).unwrap();
        assert_eq!(shell.menu().unwrap().temp_title, "Clock");
        shell.set_temp_title("  Morning  ");
        assert!(shell.commit_title(&w, &mut store).unwrap());
        let after = reload(&store);
        assert_eq!(after.title(), "Morning");

        shell.begin_title_edit(&after).unwrap();
        assert!(!shell.commit_title(&after, &mut store).unwrap());

        shell.begin_title_edit(&after).unwrap();
        shell.set_temp_title("   ");
        assert!(shell.commit_title(&after, &mut store).unwrap());
        assert_eq!(reload(&store).custom_title, None);
    }

    #[test]
    fn test_frame_layers_and_theme() {
        let (mut shell, mut store, mut w) = setup(WidgetKind::Clock);
        w.z = 3;
        let theme = Theme::default();

        let frame = shell.frame(&w, VIEWPORT, &theme);
        assert_eq!(frame.z, 103);
        assert_eq!(frame.background_alpha, 0.8);
        assert_eq!(frame.border_radius, "2xl");
        assert!(frame.interactive);
        assert!(!frame.settings_mounted);

        shell
            .pointer_down(&w, PointerInput::new(1, 0.0, 0.0), TargetClass::Plain, &mut store)
            .unwrap();
        shell
            .pointer_move(&w, PointerInput::new(1, 30.0, 0.0), &mut store)
            .unwrap();
        let frame = shell.frame(&w, VIEWPORT, &theme);
        assert_eq!(frame.z, 503);
        assert_eq!(frame.rect.x, 230.0);
        assert_eq!(frame.state, ShellState::Dragging);

        w.maximized = true;
        shell.pointer_cancel(&w, 1, VIEWPORT, &mut store).unwrap();
        let frame = shell.frame(&w, VIEWPORT, &theme);
        assert_eq!(frame.z, 10500);
        assert_eq!(frame.rect, Rect::new(0.0, 0.0, 1280.0, 800.0));
    }

    #[test]
    fn test_frame_minimized_and_flipped() {
        let (mut shell, _store, mut w) = setup(WidgetKind::Clock);
        let theme = Theme::default();
        w.flipped = true;
        w.transparency = Some(0.3);
        let frame = shell.frame(&w, VIEWPORT, &theme);
        assert_eq!(frame.face, Face::Settings);
        assert!(frame.settings_mounted);
        assert_eq!(frame.background_alpha, 0.3);

        w.flipped = false;
        w.minimized = true;
        let frame = shell.frame(&w, VIEWPORT, &theme);
        assert_eq!(frame.face, Face::Front);
        assert!(frame.settings_mounted);
        assert_eq!(frame.opacity, 0.0);
        assert!(!frame.interactive);
    }
}
