//! On-screen touch controls.
//!
//! Touch lifecycle events are already discrete, so each phase maps straight to
//! a transition with no edge tracking.

use crate::event::{KeyTransition, TransitionKind};
use crate::keys::LogicalKey;

/// An on-screen button bound to one logical key.
pub struct TouchControl {
    /// DOM id of the button element
    pub element_id: &'static str,
    pub key: LogicalKey,
}

pub static TOUCH_CONTROLS: &[TouchControl] = &[
    TouchControl {
        element_id: "btnUp",
        key: LogicalKey::Forward,
    },
    TouchControl {
        element_id: "btnDown",
        key: LogicalKey::Backward,
    },
    TouchControl {
        element_id: "btnLeft",
        key: LogicalKey::TurnLeft,
    },
    TouchControl {
        element_id: "btnRight",
        key: LogicalKey::TurnRight,
    },
    TouchControl {
        element_id: "btnFire",
        key: LogicalKey::Fire,
    },
    TouchControl {
        element_id: "btnUse",
        key: LogicalKey::Use,
    },
    TouchControl {
        element_id: "btnStrafe",
        key: LogicalKey::Strafe,
    },
    TouchControl {
        element_id: "btnEnter",
        key: LogicalKey::Confirm,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    Start,
    End,
    Cancel,
}

impl TouchPhase {
    pub const ALL: [TouchPhase; 3] = [TouchPhase::Start, TouchPhase::End, TouchPhase::Cancel];

    pub fn event_name(self) -> &'static str {
        match self {
            TouchPhase::Start => "touchstart",
            TouchPhase::End => "touchend",
            TouchPhase::Cancel => "touchcancel",
        }
    }

    pub fn transition_kind(self) -> TransitionKind {
        match self {
            TouchPhase::Start => TransitionKind::Down,
            TouchPhase::End | TouchPhase::Cancel => TransitionKind::Up,
        }
    }

    /// Start and end suppress the browser's synthetic mouse events and
    /// scrolling, which requires a non-passive listener.
    pub fn prevents_default(self) -> bool {
        matches!(self, TouchPhase::Start | TouchPhase::End)
    }

    /// A press is a user gesture, so it may unlock suspended audio.
    pub fn resumes_audio(self) -> bool {
        matches!(self, TouchPhase::Start)
    }
}

impl TouchControl {
    pub fn transition(&self, phase: TouchPhase) -> KeyTransition {
        KeyTransition {
            kind: phase.transition_kind(),
            key: self.key,
        }
    }
}
