//! Gamepad trace scripts: a line-per-event description of what a pad did,
//! replayed through the translator without a browser.
//!
//! ```text
//! # push forward, then press use
//! connect 0
//! frame ly=-0.5
//! frame south
//! lost
//! disconnect 0
//! ```

pub mod parser;
pub mod replay;
pub mod token;

pub use parser::{Command, Step, Trace, parse};
pub use replay::{ReplayEntry, ReplayEvent, render, replay};
pub use token::{SpannedToken, Token, tokenize};
