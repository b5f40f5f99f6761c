use crate::describe;
use crate::dispatch::EventDispatcher;
use doomweb_gamepad::SharedTranslator;
use log::warn;
use std::cell::Cell;
use std::rc::Rc;
use web_sys::{AudioContext, AudioContextState, HtmlCanvasElement, Window};

/// State shared by every callback once the runtime is up. Only touched from
/// the page's event loop.
pub struct Session {
    pub(crate) window: Window,
    pub(crate) canvas: HtmlCanvasElement,
    audio: AudioContext,
    pub(crate) gamepad: SharedTranslator,
    /// A frame callback is scheduled
    pub(crate) polling: Cell<bool>,
    stopped: Cell<bool>,
}

impl Session {
    pub fn new(window: Window, canvas: HtmlCanvasElement, audio: AudioContext) -> Rc<Self> {
        Rc::new(Self {
            window,
            canvas,
            audio,
            gamepad: SharedTranslator::new(),
            polling: Cell::new(false),
            stopped: Cell::new(false),
        })
    }

    /// Resume audio if the autoplay policy left it suspended.
    pub fn resume_audio(&self) {
        if self.audio.state() != AudioContextState::Suspended {
            return;
        }
        if let Err(err) = self.audio.resume() {
            warn!("cannot resume audio: {}", describe(&err));
        }
    }

    pub fn suspend_audio(&self) {
        if let Err(err) = self.audio.suspend() {
            warn!("cannot suspend audio: {}", describe(&err));
        }
    }

    /// Gamepad transitions go to the window, where the runtime listens globally.
    pub fn gamepad_sink(&self) -> EventDispatcher {
        EventDispatcher::new(self.window.clone().into())
    }

    /// Touch transitions go to the focused canvas.
    pub fn canvas_sink(&self) -> EventDispatcher {
        EventDispatcher::new(self.canvas.clone().into())
    }

    pub fn stop(&self) {
        self.stopped.set(true);
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.get()
    }
}
