use crate::session::Session;
use crate::{describe, gamepad, lifecycle, touch};
use doomweb_common::bootstrap::Host;
use doomweb_common::error::ShellError;
use doomweb_common::launch::{LaunchConfig, RuntimePlan, VfsContents};
use js_sys::{Array, Function, Object, Promise, Reflect, Uint8Array};
use log::{debug, info};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AudioContext, Document, HtmlCanvasElement, Response, Window};

/// The browser side of the boot sequence.
pub struct WebHost {
    window: Window,
    document: Document,
    config: LaunchConfig,
}

impl WebHost {
    pub fn from_window(config: LaunchConfig) -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self {
            window,
            document,
            config,
        })
    }
}

fn instantiate_error(message: impl Into<String>) -> ShellError {
    ShellError::RuntimeInstantiate {
        message: message.into(),
    }
}

fn set(target: &Object, key: &str, value: &JsValue) -> Result<(), ShellError> {
    Reflect::set(target, &JsValue::from_str(key), value)
        .map(|_| ())
        .map_err(|err| instantiate_error(describe(&err)))
}

/// The factory's `preRun` hook: write every planned file into the runtime's
/// virtual filesystem before `main` runs. A failed write rejects the factory.
fn pre_run_hook(plan: &RuntimePlan, asset: Uint8Array) -> JsValue {
    let files: Vec<(String, JsValue)> = plan
        .files
        .iter()
        .map(|file| {
            let data: JsValue = match &file.contents {
                VfsContents::Text(text) => Uint8Array::from(text.as_bytes()).into(),
                VfsContents::Asset => asset.clone().into(),
            };
            (file.path.clone(), data)
        })
        .collect();

    Closure::once_into_js(move |module: JsValue| -> Result<(), JsValue> {
        let fs = Reflect::get(&module, &JsValue::from_str("FS"))?;
        let write_file: Function = Reflect::get(&fs, &JsValue::from_str("writeFile"))?.dyn_into()?;
        for (path, data) in &files {
            write_file.call2(&fs, &JsValue::from_str(path), data)?;
            debug!("wrote {path} into the runtime filesystem");
        }
        Ok(())
    })
}

impl Host for WebHost {
    type Asset = Uint8Array;
    type Audio = AudioContext;
    type Runtime = HtmlCanvasElement;
    type Session = Rc<Session>;

    async fn fetch_asset(&self, url: &str) -> Result<Uint8Array, ShellError> {
        let fetch_error = |err: JsValue| ShellError::AssetFetch {
            url: url.to_string(),
            message: describe(&err),
        };

        let response: Response = JsFuture::from(self.window.fetch_with_str(url))
            .await
            .map_err(fetch_error)?
            .dyn_into()
            .map_err(fetch_error)?;
        if !response.ok() {
            return Err(ShellError::AssetFetch {
                url: url.to_string(),
                message: format!("HTTP {} {}", response.status(), response.status_text()),
            });
        }

        let buffer = JsFuture::from(response.array_buffer().map_err(fetch_error)?)
            .await
            .map_err(fetch_error)?;
        let bytes = Uint8Array::new(&buffer);
        info!("fetched {url} ({} bytes)", bytes.length());
        Ok(bytes)
    }

    fn create_audio(&self) -> Result<AudioContext, ShellError> {
        let audio_error = |err: JsValue| ShellError::AudioBackend {
            message: describe(&err),
        };

        let audio = AudioContext::new().map_err(audio_error)?;
        // The runtime's SDL2 audio backend adopts `window.SDL2.audioContext`.
        let sdl = Object::new();
        Reflect::set(&sdl, &JsValue::from_str("audioContext"), &audio).map_err(audio_error)?;
        Reflect::set(&self.window, &JsValue::from_str("SDL2"), &sdl).map_err(audio_error)?;
        Ok(audio)
    }

    async fn instantiate(
        &self,
        plan: &RuntimePlan,
        asset: Uint8Array,
    ) -> Result<HtmlCanvasElement, ShellError> {
        let canvas_id = &self.config.canvas_id;
        let canvas = self
            .document
            .get_element_by_id(canvas_id)
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
            .ok_or_else(|| instantiate_error(format!("no canvas element with id '{canvas_id}'")))?;
        let factory = Reflect::get(&self.window, &JsValue::from_str("Module"))
            .ok()
            .and_then(|f| f.dyn_into::<Function>().ok())
            .ok_or_else(|| instantiate_error("runtime factory `Module` is not loaded"))?;

        let arguments: Array = plan.arguments.iter().map(|a| JsValue::from_str(a)).collect();
        let module_config = Object::new();
        set(&module_config, "canvas", &canvas)?;
        set(&module_config, "preRun", &Array::of1(&pre_run_hook(plan, asset)))?;
        set(&module_config, "arguments", &arguments)?;

        let pending = factory
            .call1(&JsValue::NULL, &module_config)
            .map_err(|err| instantiate_error(describe(&err)))?;
        JsFuture::from(Promise::resolve(&pending))
            .await
            .map_err(|err| instantiate_error(describe(&err)))?;
        Ok(canvas)
    }

    fn activate(&self, audio: AudioContext, canvas: HtmlCanvasElement) -> Rc<Session> {
        let session = Session::new(self.window.clone(), canvas, audio);
        touch::install(&session, &self.document);
        gamepad::install(&session);
        lifecycle::install(&session, &self.document);
        session
    }
}
