//! Canvas focus and audio suspend/resume hooks.

use crate::describe;
use crate::session::Session;
use log::warn;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event};

pub(crate) fn install(session: &Rc<Session>, document: &Document) {
    let _ = session.canvas.focus();

    // A click is a user gesture: refocus and unlock audio.
    let on_click = {
        let session = Rc::clone(session);
        Closure::<dyn FnMut(_)>::new(move |_event: Event| {
            let _ = session.canvas.focus();
            session.resume_audio();
        })
    };
    if let Err(err) = session
        .canvas
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
    {
        warn!("cannot listen for click: {}", describe(&err));
    }
    on_click.forget();

    let on_visibility = {
        let session = Rc::clone(session);
        let document = document.clone();
        Closure::<dyn FnMut(_)>::new(move |_event: Event| {
            if document.hidden() {
                session.suspend_audio();
            } else {
                session.resume_audio();
            }
        })
    };
    if let Err(err) = document
        .add_event_listener_with_callback("visibilitychange", on_visibility.as_ref().unchecked_ref())
    {
        warn!("cannot listen for visibilitychange: {}", describe(&err));
    }
    on_visibility.forget();
}
