//! Browser glue: everything that touches `window` or `document`.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{MessageEvent, WheelEvent};

use crate::config::CONFIG_ELEMENT_ID;
use crate::error::HudError;
use crate::message::HostMessage;
use crate::theme::PageStyle;

/// `performance.now()`, or 0 outside a browser.
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

/// Text of the inline `<script id="hud-config">` block, if the page has one.
pub fn read_config_block() -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(CONFIG_ELEMENT_ID)?
        .text_content()
}

/// Resource name the NUI host injects via `GetParentResourceName()`.
pub fn page_resource_name() -> Option<String> {
    let window = web_sys::window()?;
    let getter = js_sys::Reflect::get(&window, &JsValue::from_str("GetParentResourceName")).ok()?;
    let getter: js_sys::Function = getter.dyn_into().ok()?;
    getter.call0(&window).ok()?.as_string()
}

/// Pushes [`PageStyle`] onto `<body>`, skipping frames where nothing changed.
#[derive(Default)]
pub struct PageSync {
    applied: Option<PageStyle>,
}

impl PageSync {
    pub fn apply(&mut self, style: &PageStyle) {
        if self.applied.as_ref() == Some(style) {
            return;
        }
        match write_body_style(style) {
            Ok(()) => self.applied = Some(style.clone()),
            Err(err) => tracing::debug!(?err, "body style not applied"),
        }
    }
}

fn write_body_style(style: &PageStyle) -> Result<(), JsValue> {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
        .ok_or_else(|| JsValue::from_str("no body"))?;
    let css = body.style();
    css.set_property("visibility", style.visibility())?;
    css.set_property("opacity", &style.opacity_css())?;
    css.set_property("--theme-color", &style.theme_color)?;
    Ok(())
}

/// Decode a `message` event payload.
pub fn decode_message(data: &JsValue) -> Result<HostMessage, HudError> {
    let raw = js_sys::JSON::stringify(data)
        .ok()
        .and_then(|s| s.as_string())
        .ok_or(HudError::NotJson)?;
    HostMessage::decode(&raw)
}

/// Forward every decodable host message to `on_message`.
pub fn listen_messages(mut on_message: impl FnMut(HostMessage) + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::<dyn FnMut(MessageEvent)>::new(move |event: MessageEvent| {
        match decode_message(&event.data()) {
            Ok(message) => on_message(message),
            Err(HudError::UnknownAction(action)) => {
                tracing::debug!(%action, "ignoring unknown action");
            }
            Err(err) => tracing::warn!(%err, "dropping host message"),
        }
    });
    if let Err(err) =
        window.add_event_listener_with_callback("message", closure.as_ref().unchecked_ref())
    {
        tracing::warn!(?err, "message listener not installed");
    }
    closure.forget();
}

/// Forward wheel `deltaY` values to `on_wheel`.
pub fn listen_wheel(mut on_wheel: impl FnMut(f64) + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::<dyn FnMut(WheelEvent)>::new(move |event: WheelEvent| {
        on_wheel(event.delta_y());
    });
    if let Err(err) =
        window.add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref())
    {
        tracing::warn!(?err, "wheel listener not installed");
    }
    closure.forget();
}

/// Shared handle used by every listener.
pub type Shared<T> = Rc<RefCell<T>>;
