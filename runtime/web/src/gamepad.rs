//! Connection listeners and the once-per-frame poll loop.

use crate::describe;
use crate::session::Session;
use doomweb_gamepad::{InputSnapshot, PollOutcome};
use log::{debug, error, info, warn};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{Gamepad, GamepadButton, GamepadEvent, Window};

pub(crate) fn install(session: &Rc<Session>) {
    let on_connect = {
        let session = Rc::clone(session);
        Closure::<dyn FnMut(_)>::new(move |event: GamepadEvent| {
            let Some(pad) = event.gamepad() else {
                return;
            };
            let index = pad.index();
            info!("gamepad {index} connected: {}", pad.id());
            session.gamepad.connect(index, &mut session.gamepad_sink());
            start(&session);
        })
    };

    let on_disconnect = {
        let session = Rc::clone(session);
        Closure::<dyn FnMut(_)>::new(move |event: GamepadEvent| {
            let Some(pad) = event.gamepad() else {
                return;
            };
            let index = pad.index();
            let cleared = session
                .gamepad
                .disconnect(index, &mut session.gamepad_sink());
            if cleared {
                info!("gamepad {index} disconnected");
            }
        })
    };

    for (name, closure) in [
        ("gamepadconnected", on_connect),
        ("gamepaddisconnected", on_disconnect),
    ] {
        if let Err(err) = session
            .window
            .add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())
        {
            warn!("cannot listen for {name}: {}", describe(&err));
        }
        closure.forget();
    }
}

/// Start the loop unless a frame is already scheduled.
fn start(session: &Rc<Session>) {
    if session.polling.replace(true) {
        return;
    }
    schedule(Rc::clone(session));
}

fn schedule(session: Rc<Session>) {
    let next = Rc::clone(&session);
    let callback = Closure::once_into_js(move |_timestamp: f64| cycle(next));
    if let Err(err) = session
        .window
        .request_animation_frame(callback.unchecked_ref())
    {
        error!("cannot schedule gamepad polling: {}", describe(&err));
        session.polling.set(false);
    }
}

fn cycle(session: Rc<Session>) {
    if session.is_stopped() {
        session.gamepad.release_all(&mut session.gamepad_sink());
        session.polling.set(false);
        debug!("gamepad polling stopped");
        return;
    }

    let outcome = session.gamepad.poll_with(
        |index| read_snapshot(&session.window, index),
        &mut session.gamepad_sink(),
    );
    if let PollOutcome::Polled(report) = outcome {
        if report.downs > 0 {
            session.resume_audio();
        }
    }

    schedule(session);
}

/// Sample the pad at `index`, or `None` if the slot is empty this frame.
fn read_snapshot(window: &Window, index: u32) -> Option<InputSnapshot> {
    let pads = window.navigator().get_gamepads().ok()?;
    let pad = pads.get(index).dyn_into::<Gamepad>().ok()?;
    if !pad.connected() {
        return None;
    }

    let buttons = pad
        .buttons()
        .iter()
        .map(|b| b.dyn_into::<GamepadButton>().is_ok_and(|b| b.pressed()))
        .collect();
    let axes = pad
        .axes()
        .iter()
        .map(|v| v.as_f64().unwrap_or(0.0))
        .collect();
    Some(InputSnapshot::new(buttons, axes))
}
