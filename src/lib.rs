//! TUI word search (workspace facade crate).
//!
//! The puzzle rules live in dedicated crates under `crates/`; this package re-exports them
//! as `tui_wordsearch::{core,input,term,types}` and adds the runner-side pieces:
//! configuration loading and the round countdown.

pub use tui_wordsearch_core as core;
pub use tui_wordsearch_input as input;
pub use tui_wordsearch_term as term;
pub use tui_wordsearch_types as types;

pub mod countdown;
pub mod settings;

pub use countdown::Countdown;
pub use settings::{load_settings, Settings};
