//! Terminal input module.
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key and mouse events into [`crate::types::PlayerAction`]s and keeps
//! the keyboard cursor used to press cells without a mouse.

pub mod cursor;
pub mod map;

pub use tui_wordsearch_types as types;

pub use cursor::GridCursor;
pub use map::{handle_key_event, mouse_press, should_quit};
