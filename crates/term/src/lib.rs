//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal play.
//! It avoids widget/layout libraries and instead renders into a simple
//! framebuffer that is diffed and flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Map mouse clicks back to grid cells with the same layout used for drawing
//! - Allow precise control over aspect ratio (3 chars wide per letter cell)

pub mod fb;
pub mod game_view;
pub mod render_throttle;
pub mod renderer;

pub use tui_wordsearch_core as core;
pub use tui_wordsearch_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Hud, Viewport};
pub use render_throttle::{frame_fingerprint, RenderThrottle};
pub use renderer::TerminalRenderer;
