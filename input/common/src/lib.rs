//! Shared vocabulary for the doomweb shell: keys, transitions, static control
//! tables and the host-independent bootstrap sequence.

pub mod bootstrap;
pub mod error;
pub mod event;
pub mod keys;
pub mod launch;
pub mod music;
pub mod span;
pub mod touch;
