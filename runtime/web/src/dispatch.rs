use crate::describe;
use doomweb_common::event::{KeySink, KeyTransition};
use js_sys::Reflect;
use log::warn;
use wasm_bindgen::JsValue;
use web_sys::{EventTarget, KeyboardEvent, KeyboardEventInit};

/// Delivers transitions as synthetic keyboard events on one DOM target.
pub struct EventDispatcher {
    target: EventTarget,
}

impl EventDispatcher {
    pub fn new(target: EventTarget) -> Self {
        Self { target }
    }
}

impl KeySink for EventDispatcher {
    fn emit(&mut self, transition: KeyTransition) {
        emit(&self.target, transition);
    }
}

/// Build and dispatch a bubbling, cancelable `keydown`/`keyup`.
pub fn emit(target: &EventTarget, transition: KeyTransition) {
    let key = transition.key;
    let init = KeyboardEventInit::new();
    init.set_key(key.key_name());
    init.set_code(key.code());
    init.set_bubbles(true);
    init.set_cancelable(true);
    // The runtime's decoder reads the legacy numeric fields.
    for field in ["keyCode", "which"] {
        let _ = Reflect::set(
            &init,
            &JsValue::from_str(field),
            &JsValue::from(key.legacy_code()),
        );
    }

    match KeyboardEvent::new_with_keyboard_event_init_dict(transition.kind.event_type(), &init) {
        Ok(event) => {
            let _ = target.dispatch_event(&event);
        }
        Err(err) => warn!("cannot build {transition}: {}", describe(&err)),
    }
}
