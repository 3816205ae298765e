//! Embedding host integration (Telegram Mini App).

use crate::error::ExportError;

/// One-way channel to the application shell embedding the page.
pub trait HostBridge {
    /// Hand `payload` to the host. Nothing is read back.
    fn send_data(&self, payload: &str) -> Result<(), ExportError>;
}

/// `window.Telegram.WebApp`, resolved once at startup.
#[cfg(target_arch = "wasm32")]
pub struct TelegramWebApp {
    web_app: web_sys::wasm_bindgen::JsValue,
    send_data: js_sys::Function,
}

#[cfg(target_arch = "wasm32")]
impl TelegramWebApp {
    /// Returns `None` when the page is not running inside a Telegram client.
    pub fn detect() -> Option<Self> {
        use web_sys::wasm_bindgen::{JsCast, JsValue};

        let window = web_sys::window()?;
        let telegram = js_sys::Reflect::get(window.as_ref(), &JsValue::from_str("Telegram")).ok()?;
        if telegram.is_undefined() || telegram.is_null() {
            return None;
        }
        let web_app = js_sys::Reflect::get(&telegram, &JsValue::from_str("WebApp")).ok()?;
        if web_app.is_undefined() || web_app.is_null() {
            return None;
        }
        let send_data = js_sys::Reflect::get(&web_app, &JsValue::from_str("sendData"))
            .ok()?
            .dyn_into::<js_sys::Function>()
            .ok()?;
        Some(Self { web_app, send_data })
    }
}

#[cfg(target_arch = "wasm32")]
impl HostBridge for TelegramWebApp {
    fn send_data(&self, payload: &str) -> Result<(), ExportError> {
        let arg = web_sys::wasm_bindgen::JsValue::from_str(payload);
        self.send_data
            .call1(&self.web_app, &arg)
            .map(|_| ())
            .map_err(|e| ExportError::Host(format!("{e:?}")))
    }
}
