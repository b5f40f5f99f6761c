use crate::describe;
use crate::session::Session;
use doomweb_common::event::KeySink;
use doomweb_common::touch::{TOUCH_CONTROLS, TouchControl, TouchPhase};
use js_sys::Reflect;
use log::{debug, info, warn};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Document, Element, Event, Window};

/// Show the on-screen controls on touch-capable devices.
pub(crate) fn reveal_controls(window: &Window, document: &Document, controls_id: &str) {
    let has_touch = Reflect::has(window, &JsValue::from_str("ontouchstart")).unwrap_or(false)
        || window.navigator().max_touch_points() > 0;
    if !has_touch {
        return;
    }
    if let Some(controls) = document.get_element_by_id(controls_id) {
        let _ = controls.class_list().add_1("visible");
    }
}

/// Bind every control present in the page. Missing elements are skipped.
pub(crate) fn install(session: &Rc<Session>, document: &Document) {
    let mut bound = 0;
    for control in TOUCH_CONTROLS {
        let Some(element) = document.get_element_by_id(control.element_id) else {
            debug!("touch control #{} not present", control.element_id);
            continue;
        };
        for phase in TouchPhase::ALL {
            bind(session, &element, control, phase);
        }
        bound += 1;
    }
    info!("bound {bound} of {} touch controls", TOUCH_CONTROLS.len());
}

fn bind(session: &Rc<Session>, element: &Element, control: &'static TouchControl, phase: TouchPhase) {
    let session = Rc::clone(session);
    let closure = Closure::<dyn FnMut(_)>::new(move |event: Event| {
        if phase.prevents_default() {
            event.prevent_default();
        }
        session.canvas_sink().emit(control.transition(phase));
        if phase.resumes_audio() {
            session.resume_audio();
        }
    });

    let options = AddEventListenerOptions::new();
    options.set_passive(!phase.prevents_default());
    if let Err(err) = element.add_event_listener_with_callback_and_add_event_listener_options(
        phase.event_name(),
        closure.as_ref().unchecked_ref(),
        &options,
    ) {
        warn!("cannot bind {} on #{}: {}", phase.event_name(), control.element_id, describe(&err));
    }
    closure.forget();
}
