//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the puzzle rules: board generation, the selection state
//! machine, answer matching and per-round bookkeeping. It has no dependencies on
//! terminal I/O, which makes it:
//!
//! - **Deterministic**: Same seed produces the identical board
//! - **Testable**: Presses and timer ticks are plain method calls
//! - **Portable**: Can run behind any front end (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: R x C letter grid with per-cell selection flags
//! - [`generator`]: randomized word placement with bounded retries and noise fill
//! - [`selection`]: press handling, direction lock, highlight and idle commit
//! - [`matcher`]: exact-match evaluation of committed paths
//! - [`word_bank`]: target words and found status
//! - [`round`]: the round aggregate driving all of the above
//! - [`snapshot`]: render-facing copy of a round
//!
//! # Example
//!
//! ```
//! use tui_wordsearch_core::{RoundConfig, RoundState};
//! use tui_wordsearch_types::RoundEvent;
//!
//! let config = RoundConfig {
//!     words: vec!["FUEL".into(), "OIL".into()],
//!     seed: Some(12345),
//!     ..RoundConfig::default()
//! };
//! let mut round = RoundState::new(&config).unwrap();
//! round.start();
//!
//! // Spell the planted FUEL, then let the idle timer commit it
//! let cells = round.placements()[0].cells();
//! for pos in cells {
//!     round.press(pos);
//! }
//! let events = round.tick(config.idle_commit_ms);
//! assert_eq!(events[0], RoundEvent::WordFound { word: "FUEL".into() });
//! ```
//!
//! # Timing
//!
//! The idle commit uses the same fixed timestep as the render loop: call
//! [`RoundState::tick`](round::RoundState::tick) every frame with elapsed time.

pub mod board;
pub mod error;
pub mod generator;
pub mod matcher;
pub mod round;
pub mod selection;
pub mod snapshot;
pub mod word_bank;

pub use tui_wordsearch_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use error::GenerateError;
pub use generator::{prepare_words, BoardGenerator, GeneratedBoard, GeneratorConfig, Placement};
pub use matcher::{AnswerMatcher, MatchResult};
pub use round::{RoundConfig, RoundEvents, RoundState};
pub use selection::{PressOutcome, SelectionController};
pub use snapshot::RoundSnapshot;
pub use word_bank::WordBank;
