//! Host bridge: typed requests from the HUD to the game host.
//!
//! Every request is fire-and-forget. The NUI host answers each `POST` with a
//! JSON reply; it is awaited so the request completes, then dropped.

use serde_json::json;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use crate::catalog::Target;
use crate::error::HudError;

#[derive(Debug, Clone, PartialEq)]
pub enum HostRequest {
    /// UI finished loading.
    Load,
    Select(Target),
    /// World menu cursor moved (1-based).
    CurrentOption(usize),
    /// Text picker cursor settled (1-based).
    SetCurrentTextOption(usize),
}

impl HostRequest {
    pub fn event(&self) -> &'static str {
        match self {
            HostRequest::Load => "load",
            HostRequest::Select(_) => "select",
            HostRequest::CurrentOption(_) => "currentOption",
            HostRequest::SetCurrentTextOption(_) => "setCurrentTextOption",
        }
    }

    pub fn body(&self) -> Result<String, HudError> {
        let body = match self {
            HostRequest::Load => json!({}),
            HostRequest::Select(target) => json!([target.kind, target.id]),
            HostRequest::CurrentOption(index) => json!([index]),
            HostRequest::SetCurrentTextOption(index) => json!({ "index": index }),
        };
        Ok(serde_json::to_string(&body)?)
    }
}

pub trait HostBridge {
    fn send(&self, request: HostRequest);
}

/// Bridge to a NUI host: `POST https://<resource>/<event>`.
pub struct NuiBridge {
    base_url: String,
}

impl NuiBridge {
    pub fn new(resource: &str) -> Self {
        Self {
            base_url: format!("https://{resource}"),
        }
    }

    pub fn url(&self, event: &str) -> String {
        format!("{}/{}", self.base_url, event)
    }
}

impl HostBridge for NuiBridge {
    fn send(&self, request: HostRequest) {
        let event = request.event();
        let body = match request.body() {
            Ok(body) => body,
            Err(err) => {
                tracing::warn!(%err, "dropping host request");
                return;
            }
        };
        let url = self.url(event);
        tracing::debug!(event, %body, "host request");

        wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) = post(event, &url, &body).await {
                tracing::debug!(%err, "host request failed");
            }
        });
    }
}

async fn post(event: &'static str, url: &str, body: &str) -> Result<JsValue, HudError> {
    let js_err = |e: JsValue| HudError::bridge(event, format!("{e:?}"));

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(&JsValue::from_str(body));
    let headers = Headers::new().map_err(js_err)?;
    headers
        .set("Content-Type", "application/json; charset=UTF-8")
        .map_err(js_err)?;
    init.set_headers(&headers);

    let request = Request::new_with_str_and_init(url, &init).map_err(js_err)?;
    let window = web_sys::window().ok_or_else(|| HudError::bridge(event, "no window"))?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?;
    let response: Response = response.dyn_into().map_err(js_err)?;
    let reply = JsFuture::from(response.json().map_err(js_err)?)
        .await
        .map_err(js_err)?;
    Ok(reply)
}

/// Records requests instead of sending them.
#[cfg(test)]
#[derive(Clone, Default)]
pub struct RecordingBridge {
    sent: std::rc::Rc<std::cell::RefCell<Vec<HostRequest>>>,
}

#[cfg(test)]
impl RecordingBridge {
    pub fn take(&self) -> Vec<HostRequest> {
        std::mem::take(&mut *self.sent.borrow_mut())
    }
}

#[cfg(test)]
impl HostBridge for RecordingBridge {
    fn send(&self, request: HostRequest) {
        self.sent.borrow_mut().push(request);
    }
}
