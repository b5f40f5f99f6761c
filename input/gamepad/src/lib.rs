//! Gamepad-to-keyboard translation.
//!
//! A connected pad is sampled once per display frame into an
//! [`InputSnapshot`]; a fixed table of [`LogicalAction`]s turns each sample into
//! key transitions, emitted only on edges.

pub mod action;
pub mod edge;
pub mod layout;
pub mod shared;
pub mod snapshot;
pub mod translator;

pub use action::{ACTIONS, LogicalAction};
pub use shared::SharedTranslator;
pub use snapshot::InputSnapshot;
pub use translator::{CycleReport, GamepadTranslator, PollOutcome};
