//! Browser bindings
//!
//! Binds the pure engine to the DOM: the body-class dragging indicator,
//! target chains read from real elements, a store backed by JS callbacks and
//! a `#[wasm_bindgen]` facade that exchanges JSON with the host page.

use js_sys::{Function, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::config::{EngineConfig, Theme};
use crate::error::{DeskError, DeskResult};
use crate::input::{
    classify, DragIndicator, ElementInfo, GestureOutcome, IndicatorSink, Overflow, PointerInput,
    TouchPoint,
};
use crate::math::Size;
use crate::shell::{ScreenshotService, ShellOptions, WindowShell};
use crate::store::WidgetStore;
use crate::types::WidgetId;
use crate::window::{WindowPatch, WindowRecord};

/// Class set on `<body>` while any widget gesture is in progress
pub const DRAGGING_BODY_CLASS: &str = "is-dragging-widget";

thread_local! {
    static INDICATOR: DragIndicator = DragIndicator::new(DocumentIndicatorSink);
}

fn log_error(context: &str, message: &str) {
    web_sys::console::error_1(&format!("[wdesk] {}: {}", context, message).into());
}

fn to_js(context: &str, err: DeskError) -> JsValue {
    log_error(context, &err.to_string());
    JsValue::from_str(&err.to_string())
}

fn js_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{:?}", value))
}

/// Toggles [`DRAGGING_BODY_CLASS`] on the document body
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentIndicatorSink;

impl IndicatorSink for DocumentIndicatorSink {
    fn set_dragging(&mut self, dragging: bool) {
        let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        else {
            return;
        };
        let classes = body.class_list();
        let result = if dragging {
            classes.add_1(DRAGGING_BODY_CLASS)
        } else {
            classes.remove_1(DRAGGING_BODY_CLASS)
        };
        if let Err(err) = result {
            log_error("indicator", &js_message(&err));
        }
    }
}

/// Ancestor chain from `target` up to, but excluding, `root`
pub fn element_chain(target: &Element, root: &Element) -> Vec<ElementInfo> {
    let window = web_sys::window();
    let mut chain = Vec::new();
    let mut current = Some(target.clone());
    while let Some(element) = current {
        if &element == root {
            break;
        }
        chain.push(element_info(&element, window.as_ref()));
        current = element.parent_element();
    }
    chain
}

fn element_info(element: &Element, window: Option<&web_sys::Window>) -> ElementInfo {
    let mut info = ElementInfo::new(&element.tag_name());

    let class_list = element.class_list();
    info.classes = (0..class_list.length())
        .filter_map(|i| class_list.item(i))
        .collect();
    info.no_drag_attr = element.has_attribute("data-no-drag");

    if let Some(style) = window.and_then(|w| w.get_computed_style(element).ok().flatten()) {
        let read = |name: &str| Overflow::parse(&style.get_property_value(name).unwrap_or_default());
        info.overflow_x = read("overflow-x");
        info.overflow_y = read("overflow-y");
    }
    info.scroll_size = Size::new(element.scroll_width() as f32, element.scroll_height() as f32);
    info.client_size = Size::new(element.client_width() as f32, element.client_height() as f32);
    info
}

fn method(object: &JsValue, name: &str) -> DeskResult<Function> {
    Reflect::get(object, &JsValue::from_str(name))
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok())
        .ok_or_else(|| DeskError::ConfigError(format!("host object is missing {}()", name)))
}

/// [`WidgetStore`] forwarding to the dashboard's JS store
///
/// The host object must expose `updateWidget(id, patch)`, `removeWidget(id)`,
/// `duplicateWidget(id)`, `bringToFront(id)` and `resetSize(id)`.
pub struct JsStore {
    update: Function,
    remove: Function,
    duplicate: Function,
    bring_to_front: Function,
    reset_size: Function,
}

impl JsStore {
    pub fn from_object(object: &JsValue) -> DeskResult<Self> {
        Ok(Self {
            update: method(object, "updateWidget")?,
            remove: method(object, "removeWidget")?,
            duplicate: method(object, "duplicateWidget")?,
            bring_to_front: method(object, "bringToFront")?,
            reset_size: method(object, "resetSize")?,
        })
    }

    fn call(function: &Function, id: &WidgetId) -> DeskResult<()> {
        function
            .call1(&JsValue::NULL, &JsValue::from_str(id.as_str()))
            .map(|_| ())
            .map_err(|err| DeskError::StoreError(js_message(&err)))
    }
}

impl WidgetStore for JsStore {
    fn update_widget(&mut self, id: &WidgetId, patch: &WindowPatch) -> DeskResult<()> {
        let patch = js_sys::JSON::parse(&patch.to_json()?)
            .map_err(|err| DeskError::SerializationError(js_message(&err)))?;
        self.update
            .call2(&JsValue::NULL, &JsValue::from_str(id.as_str()), &patch)
            .map(|_| ())
            .map_err(|err| DeskError::StoreError(js_message(&err)))
    }

    fn remove_widget(&mut self, id: &WidgetId) -> DeskResult<()> {
        Self::call(&self.remove, id)
    }

    fn duplicate_widget(&mut self, id: &WidgetId) -> DeskResult<()> {
        Self::call(&self.duplicate, id)
    }

    fn bring_to_front(&mut self, id: &WidgetId) -> DeskResult<()> {
        Self::call(&self.bring_to_front, id)
    }

    fn reset_size(&mut self, id: &WidgetId) -> DeskResult<()> {
        Self::call(&self.reset_size, id)
    }
}

/// [`ScreenshotService`] over a JS object exposing `takeScreenshot(id, title)`,
/// `isCapturing()` and `isFlashing()`
pub struct JsScreenshots {
    object: JsValue,
}

impl JsScreenshots {
    pub fn new(object: JsValue) -> Self {
        Self { object }
    }

    fn flag(&self, name: &str) -> bool {
        method(&self.object, name)
            .ok()
            .and_then(|f| f.call0(&self.object).ok())
            .and_then(|v| v.as_bool())
            .unwrap_or(false)
    }
}

impl ScreenshotService for JsScreenshots {
    fn take_screenshot(&mut self, id: &WidgetId, title: &str) -> DeskResult<()> {
        method(&self.object, "takeScreenshot")?
            .call2(
                &self.object,
                &JsValue::from_str(id.as_str()),
                &JsValue::from_str(title),
            )
            .map(|_| ())
            .map_err(|err| DeskError::StoreError(js_message(&err)))
    }

    fn is_capturing(&self) -> bool {
        self.flag("isCapturing")
    }

    fn is_flashing(&self) -> bool {
        self.flag("isFlashing")
    }
}

fn parse_window(json: &str) -> Result<WindowRecord, JsValue> {
    serde_json::from_str(json).map_err(|err| to_js("window", err.into()))
}

fn touches(coords: &[f32]) -> Vec<TouchPoint> {
    coords
        .chunks_exact(2)
        .map(|pair| TouchPoint::new(pair[0], pair[1]))
        .collect()
}

fn outcome_json(outcome: GestureOutcome) -> Result<String, JsValue> {
    serde_json::to_string(&outcome).map_err(|err| to_js("outcome", err.into()))
}

/// Window shell exported to JavaScript
///
/// Every window method takes the current record as JSON (the store's view)
/// and returns JSON; geometry never lives on this side.
#[wasm_bindgen]
pub struct WasmWindowShell {
    shell: WindowShell,
    store: JsStore,
    theme: Theme,
}

#[wasm_bindgen]
impl WasmWindowShell {
    /// `config_json` and `options_json` may be `"{}"`
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str, options_json: &str, store: &JsValue) -> Result<WasmWindowShell, JsValue> {
        console_error_panic_hook::set_once();

        let config = EngineConfig::from_json(config_json).map_err(|e| to_js("config", e))?;
        let options: ShellOptions = serde_json::from_str(options_json)
            .map_err(|e| to_js("options", e.into()))?;
        let store = JsStore::from_object(store).map_err(|e| to_js("store", e))?;
        let indicator = INDICATOR.with(DragIndicator::clone);

        Ok(Self {
            shell: WindowShell::new(&config, indicator, options),
            store,
            theme: config.theme,
        })
    }

    /// Listeners for move/up/cancel are only needed while this is true
    #[wasm_bindgen(js_name = isActive)]
    pub fn is_active(&self) -> bool {
        self.shell.controller().is_active()
    }

    #[wasm_bindgen(js_name = setAnnotating)]
    pub fn set_annotating(&mut self, annotating: bool) {
        self.shell.set_annotating(annotating);
    }

    #[wasm_bindgen(js_name = pointerDown)]
    pub fn pointer_down(
        &mut self,
        window_json: &str,
        pointer_id: i32,
        x: f32,
        y: f32,
        target: &Element,
        root: &Element,
    ) -> Result<String, JsValue> {
        let window = parse_window(window_json)?;
        let class = classify(&element_chain(target, root));
        let outcome = self
            .shell
            .pointer_down(&window, PointerInput::new(pointer_id, x, y), class, &mut self.store)
            .map_err(|e| to_js("pointerDown", e))?;
        outcome_json(outcome)
    }

    #[wasm_bindgen(js_name = resizeDown)]
    pub fn resize_down(
        &mut self,
        window_json: &str,
        pointer_id: i32,
        x: f32,
        y: f32,
    ) -> Result<String, JsValue> {
        let window = parse_window(window_json)?;
        let outcome = self
            .shell
            .resize_down(&window, PointerInput::new(pointer_id, x, y), &mut self.store)
            .map_err(|e| to_js("resizeDown", e))?;
        outcome_json(outcome)
    }

    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(
        &mut self,
        window_json: &str,
        pointer_id: i32,
        x: f32,
        y: f32,
    ) -> Result<String, JsValue> {
        let window = parse_window(window_json)?;
        let outcome = self
            .shell
            .pointer_move(&window, PointerInput::new(pointer_id, x, y), &mut self.store)
            .map_err(|e| to_js("pointerMove", e))?;
        outcome_json(outcome)
    }

    #[wasm_bindgen(js_name = pointerUp)]
    pub fn pointer_up(
        &mut self,
        window_json: &str,
        pointer_id: i32,
        x: f32,
        y: f32,
        viewport_width: f32,
        viewport_height: f32,
    ) -> Result<String, JsValue> {
        let window = parse_window(window_json)?;
        let outcome = self
            .shell
            .pointer_up(
                &window,
                PointerInput::new(pointer_id, x, y),
                Size::new(viewport_width, viewport_height),
                &mut self.store,
            )
            .map_err(|e| to_js("pointerUp", e))?;
        outcome_json(outcome)
    }

    #[wasm_bindgen(js_name = pointerCancel)]
    pub fn pointer_cancel(
        &mut self,
        window_json: &str,
        pointer_id: i32,
        viewport_width: f32,
        viewport_height: f32,
    ) -> Result<String, JsValue> {
        let window = parse_window(window_json)?;
        let outcome = self
            .shell
            .pointer_cancel(
                &window,
                pointer_id,
                Size::new(viewport_width, viewport_height),
                &mut self.store,
            )
            .map_err(|e| to_js("pointerCancel", e))?;
        outcome_json(outcome)
    }

    #[wasm_bindgen(js_name = lostCapture)]
    pub fn lost_capture(
        &mut self,
        window_json: &str,
        pointer_id: i32,
        viewport_width: f32,
        viewport_height: f32,
    ) -> Result<String, JsValue> {
        let window = parse_window(window_json)?;
        let outcome = self
            .shell
            .lost_capture(
                &window,
                pointer_id,
                Size::new(viewport_width, viewport_height),
                &mut self.store,
            )
            .map_err(|e| to_js("lostCapture", e))?;
        outcome_json(outcome)
    }

    /// `coords` holds `x, y` pairs for every active touch
    #[wasm_bindgen(js_name = touchStart)]
    pub fn touch_start(&mut self, window_json: &str, coords: &[f32]) -> Result<(), JsValue> {
        let window = parse_window(window_json)?;
        self.shell.touch_start(&window, &touches(coords));
        Ok(())
    }

    /// `changed` holds `x, y` pairs for the touches that lifted
    #[wasm_bindgen(js_name = touchEnd)]
    pub fn touch_end(
        &mut self,
        window_json: &str,
        remaining: usize,
        changed: &[f32],
    ) -> Result<String, JsValue> {
        let window = parse_window(window_json)?;
        let outcome = self
            .shell
            .touch_end(&window, remaining, &touches(changed), &mut self.store)
            .map_err(|e| to_js("touchEnd", e))?;
        outcome_json(outcome)
    }

    #[wasm_bindgen(js_name = touchCancel)]
    pub fn touch_cancel(&mut self) {
        self.shell.touch_cancel();
    }

    #[wasm_bindgen(js_name = bringToFront)]
    pub fn bring_to_front(&mut self, window_json: &str) -> Result<(), JsValue> {
        let window = parse_window(window_json)?;
        self.shell
            .bring_to_front(&window, &mut self.store)
            .map_err(|e| to_js("bringToFront", e))
    }

    #[wasm_bindgen(js_name = toggleFlip)]
    pub fn toggle_flip(&mut self, window_json: &str) -> Result<(), JsValue> {
        let window = parse_window(window_json)?;
        self.shell
            .toggle_flip(&window, &mut self.store)
            .map_err(|e| to_js("toggleFlip", e))
    }

    pub fn minimize(&mut self, window_json: &str) -> Result<(), JsValue> {
        let window = parse_window(window_json)?;
        self.shell
            .minimize(&window, &mut self.store)
            .map_err(|e| to_js("minimize", e))
    }

    #[wasm_bindgen(js_name = toggleMaximize)]
    pub fn toggle_maximize(&mut self, window_json: &str) -> Result<(), JsValue> {
        let window = parse_window(window_json)?;
        self.shell
            .toggle_maximize(&window, &mut self.store)
            .map_err(|e| to_js("toggleMaximize", e))
    }

    pub fn duplicate(&mut self, window_json: &str) -> Result<(), JsValue> {
        let window = parse_window(window_json)?;
        self.shell
            .duplicate(&window, &mut self.store)
            .map_err(|e| to_js("duplicate", e))
    }

    #[wasm_bindgen(js_name = resetSize)]
    pub fn reset_size(&mut self, window_json: &str) -> Result<(), JsValue> {
        let window = parse_window(window_json)?;
        self.shell
            .reset_size(&window, &mut self.store)
            .map_err(|e| to_js("resetSize", e))
    }

    /// Returns `"removed"` or `"confirming"`
    #[wasm_bindgen(js_name = requestClose)]
    pub fn request_close(&mut self, window_json: &str) -> Result<String, JsValue> {
        let window = parse_window(window_json)?;
        let outcome = self
            .shell
            .request_close(&window, &mut self.store)
            .map_err(|e| to_js("requestClose", e))?;
        serde_json::to_string(&outcome).map_err(|e| to_js("requestClose", e.into()))
    }

    #[wasm_bindgen(js_name = confirmClose)]
    pub fn confirm_close(&mut self, window_json: &str) -> Result<(), JsValue> {
        let window = parse_window(window_json)?;
        self.shell
            .confirm_close(&window, &mut self.store)
            .map_err(|e| to_js("confirmClose", e))
    }

    #[wasm_bindgen(js_name = cancelClose)]
    pub fn cancel_close(&mut self) {
        self.shell.cancel_close();
    }

    #[wasm_bindgen(js_name = closeConfirmation)]
    pub fn close_confirmation(&self) -> Option<String> {
        self.shell.close_confirmation().map(str::to_string)
    }

    #[wasm_bindgen(js_name = takeScreenshot)]
    pub fn take_screenshot(
        &mut self,
        window_json: &str,
        screenshots: JsValue,
    ) -> Result<(), JsValue> {
        let window = parse_window(window_json)?;
        let mut service = JsScreenshots::new(screenshots);
        self.shell
            .take_screenshot(&window, &mut service)
            .map_err(|e| to_js("takeScreenshot", e))
    }

    #[wasm_bindgen(js_name = toggleToolbar)]
    pub fn toggle_toolbar(
        &mut self,
        window_json: &str,
        viewport_width: f32,
        viewport_height: f32,
    ) -> Result<(), JsValue> {
        let window = parse_window(window_json)?;
        self.shell
            .toggle_toolbar(&window, Size::new(viewport_width, viewport_height));
        Ok(())
    }

    #[wasm_bindgen(js_name = toggleMenuExpanded)]
    pub fn toggle_menu_expanded(
        &mut self,
        window_json: &str,
        viewport_width: f32,
        viewport_height: f32,
    ) -> Result<(), JsValue> {
        let window = parse_window(window_json)?;
        self.shell
            .toggle_menu_expanded(&window, Size::new(viewport_width, viewport_height));
        Ok(())
    }

    #[wasm_bindgen(js_name = viewportResized)]
    pub fn viewport_resized(
        &mut self,
        window_json: &str,
        viewport_width: f32,
        viewport_height: f32,
    ) -> Result<(), JsValue> {
        let window = parse_window(window_json)?;
        self.shell
            .viewport_resized(&window, Size::new(viewport_width, viewport_height));
        Ok(())
    }

    #[wasm_bindgen(js_name = outsideInteraction)]
    pub fn outside_interaction(&mut self) {
        self.shell.outside_interaction();
    }

    /// Open menu placement and edit state as JSON, or `null` when closed
    #[wasm_bindgen(js_name = menuJson)]
    pub fn menu_json(&self) -> Result<String, JsValue> {
        let menu = self.shell.menu().map(|menu| {
            serde_json::json!({
                "placement": menu.placement,
                "isExpanded": menu.is_expanded,
                "isEditingTitle": menu.is_editing_title,
                "tempTitle": menu.temp_title,
            })
        });
        serde_json::to_string(&menu).map_err(|e| to_js("menuJson", e.into()))
    }

    #[wasm_bindgen(js_name = toolbarItemsJson)]
    pub fn toolbar_items_json(&self, window_json: &str, screenshots: JsValue) -> Result<String, JsValue> {
        let window = parse_window(window_json)?;
        let service = JsScreenshots::new(screenshots);
        let items = self.shell.toolbar_items(&window, &service);
        serde_json::to_string(&items).map_err(|e| to_js("toolbarItemsJson", e.into()))
    }

    #[wasm_bindgen(js_name = beginTitleEdit)]
    pub fn begin_title_edit(&mut self, window_json: &str) -> Result<(), JsValue> {
        let window = parse_window(window_json)?;
        self.shell
            .begin_title_edit(&window)
            .map_err(|e| to_js("beginTitleEdit", e))
    }

    #[wasm_bindgen(js_name = setTempTitle)]
    pub fn set_temp_title(&mut self, title: &str) {
        self.shell.set_temp_title(title);
    }

    #[wasm_bindgen(js_name = commitTitle)]
    pub fn commit_title(&mut self, window_json: &str) -> Result<bool, JsValue> {
        let window = parse_window(window_json)?;
        self.shell
            .commit_title(&window, &mut self.store)
            .map_err(|e| to_js("commitTitle", e))
    }

    #[wasm_bindgen(js_name = cancelTitleEdit)]
    pub fn cancel_title_edit(&mut self) {
        self.shell.cancel_title_edit();
    }

    /// Render frame for the window as JSON
    #[wasm_bindgen(js_name = frameJson)]
    pub fn frame_json(
        &mut self,
        window_json: &str,
        viewport_width: f32,
        viewport_height: f32,
    ) -> Result<String, JsValue> {
        let window = parse_window(window_json)?;
        let frame = self
            .shell
            .frame(&window, Size::new(viewport_width, viewport_height), &self.theme);
        serde_json::to_string(&frame).map_err(|e| to_js("frameJson", e.into()))
    }
}
