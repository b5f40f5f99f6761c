//! doomweb browser shell: boots the precompiled game runtime and turns touch
//! and gamepad input into the key events it already understands.
//!
//! The page loads the runtime's factory script (which defines `window.Module`)
//! and this module, then calls `boot()` from its load handler.

mod dispatch;
mod gamepad;
mod host;
mod lifecycle;
mod session;
mod touch;

use doomweb_common::bootstrap;
use doomweb_common::launch::LaunchConfig;
use host::WebHost;
use log::{Level, error};
use session::Session;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

/// Called automatically when the wasm module loads.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(Level::Info);

    let config = LaunchConfig::default();
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            touch::reveal_controls(&window, &document, &config.controls_id);
        }
    }
}

/// Boot with the default asset and canvas. Resolves to a `ShellHandle`, or
/// `null` if loading failed (the reason is logged to the console).
#[wasm_bindgen]
pub async fn boot() -> JsValue {
    boot_with_config(LaunchConfig::default()).await
}

/// Boot with a custom asset URL and canvas element id.
#[wasm_bindgen(js_name = bootWith)]
pub async fn boot_with(asset_url: String, canvas_id: String) -> JsValue {
    let config = LaunchConfig::default()
        .with_asset_url(asset_url)
        .with_canvas_id(canvas_id);
    boot_with_config(config).await
}

async fn boot_with_config(config: LaunchConfig) -> JsValue {
    let Some(host) = WebHost::from_window(config.clone()) else {
        error!("failed to load runtime: no browser window or document");
        return JsValue::NULL;
    };

    match bootstrap::initialize(&host, &config).await {
        Some(session) => ShellHandle { session }.into(),
        None => JsValue::NULL,
    }
}

/// Handle to a running shell.
#[wasm_bindgen]
pub struct ShellHandle {
    session: Rc<Session>,
}

#[wasm_bindgen]
impl ShellHandle {
    /// Stop gamepad polling at the next frame, releasing any held keys.
    pub fn stop(&self) {
        self.session.stop();
    }

    /// Index of the tracked gamepad, if any.
    #[wasm_bindgen(getter, js_name = activeGamepad)]
    pub fn active_gamepad(&self) -> Option<u32> {
        self.session.gamepad.active()
    }
}

/// Best-effort message for a thrown JS value.
pub(crate) fn describe(err: &JsValue) -> String {
    if let Some(e) = err.dyn_ref::<js_sys::Error>() {
        return String::from(e.message());
    }
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
