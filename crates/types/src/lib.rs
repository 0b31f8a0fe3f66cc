//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no behavior beyond small helpers, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Grid Dimensions
//!
//! The default puzzle grid is square:
//!
//! - **Rows**: 10 (indexed 0-9, top to bottom)
//! - **Columns**: 10 (indexed 0-9, left to right)
//!
//! Other dimensions may be configured per round, up to [`MAX_GRID_DIM`] on each axis.
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `IDLE_COMMIT_MS` | 1000 | Inactivity window before a selection auto-commits |
//! | `DEFAULT_ROUND_SECS` | 30 | Round countdown when none is configured |
//!
//! # Examples
//!
//! ```
//! use tui_wordsearch_types::{DirectionLock, PlayerAction, Position, GRID_COLS, GRID_ROWS};
//!
//! let a = Position::new(2, 3);
//! let b = Position::new(2, 6);
//! assert_eq!(DirectionLock::from_pair(a, b), Some(DirectionLock::RowLocked));
//!
//! assert_eq!(PlayerAction::Select.as_str(), "select");
//!
//! assert_eq!(GRID_ROWS, 10);
//! assert_eq!(GRID_COLS, 10);
//! ```

use serde::{Deserialize, Serialize};

/// Default grid height in cells (10 rows)
pub const GRID_ROWS: u8 = 10;

/// Default grid width in cells (10 columns)
pub const GRID_COLS: u8 = 10;

/// Largest accepted grid dimension on either axis
pub const MAX_GRID_DIM: u8 = 32;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Inactivity window after the last press before the selection commits (1s)
pub const IDLE_COMMIT_MS: u32 = 1000;

/// Round duration when none is configured (30s)
pub const DEFAULT_ROUND_SECS: u32 = 30;

/// Placement attempts per word before generation gives up
pub const DEFAULT_MAX_PLACEMENT_ATTEMPTS: u32 = 10_000;

/// Noise letters drawn for cells no word occupies
pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Target words used when no word list is configured.
pub const DEFAULT_WORDS: [&str; 10] = [
    "DEO", "CARIENT", "BIKE", "CAR", "TYRE", "BLAZE", "MILEAGE", "FUEL", "JOURNEY", "OIL",
];

/// A grid coordinate, 0-indexed from the top-left corner
///
/// Validity depends on the board it is used with; see `Board::contains`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

/// Axis a word runs along when planted in the grid
///
/// Words always read forwards: left to right, or top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Position of the `i`-th letter of a word starting at `origin`.
    ///
    /// Callers are expected to have bounds-checked the run already.
    pub fn offset(&self, origin: Position, i: u8) -> Position {
        match self {
            Orientation::Horizontal => Position::new(origin.row, origin.col + i),
            Orientation::Vertical => Position::new(origin.row + i, origin.col),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }
}

/// Constraint on which cells may extend the current selection
///
/// - **Unset**: zero or one cell selected, any cell may follow
/// - **RowLocked**: further cells must stay on the established row
/// - **ColLocked**: further cells must stay on the established column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectionLock {
    #[default]
    Unset,
    RowLocked,
    ColLocked,
}

impl DirectionLock {
    /// Lock established by a second pick, or `None` when the pick is off-axis.
    ///
    /// Sharing the row wins over sharing the column; the two cannot both hold
    /// for distinct positions.
    pub fn from_pair(first: Position, second: Position) -> Option<Self> {
        if second.row == first.row {
            Some(DirectionLock::RowLocked)
        } else if second.col == first.col {
            Some(DirectionLock::ColLocked)
        } else {
            None
        }
    }

    /// Whether `next` may follow `last` under this lock.
    pub fn allows(&self, last: Position, next: Position) -> bool {
        match self {
            DirectionLock::Unset => true,
            DirectionLock::RowLocked => next.row == last.row,
            DirectionLock::ColLocked => next.col == last.col,
        }
    }

    /// Whether a cell is implicated by the highlight rule anchored on `anchor`.
    ///
    /// Unset highlights the cross through the anchor, a lock highlights its line.
    pub fn highlights(&self, anchor: Position, pos: Position) -> bool {
        match self {
            DirectionLock::Unset => pos.row == anchor.row || pos.col == anchor.col,
            DirectionLock::RowLocked => pos.row == anchor.row,
            DirectionLock::ColLocked => pos.col == anchor.col,
        }
    }
}

/// A single grid cell
///
/// `pressed` and `highlighted` are transient selection state; `correct` is sticky
/// for the rest of the round once the cell was part of a found word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub letter: char,
    pub pressed: bool,
    pub highlighted: bool,
    pub correct: bool,
}

impl Cell {
    pub fn new(letter: char) -> Self {
        Self {
            letter,
            pressed: false,
            highlighted: false,
            correct: false,
        }
    }
}

/// One target word and whether it has been found this round
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordEntry {
    pub word: String,
    pub found: bool,
}

impl WordEntry {
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            found: false,
        }
    }
}

/// Lifecycle of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundPhase {
    /// Board generated, waiting for the player to start
    #[default]
    Ready,
    /// Accepting presses
    Playing,
    /// Every word found
    Won,
    /// Torn down from outside (countdown expiry, navigation away)
    Ended,
}

impl RoundPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoundPhase::Ready => "ready",
            RoundPhase::Playing => "playing",
            RoundPhase::Won => "won",
            RoundPhase::Ended => "ended",
        }
    }

    pub fn is_over(&self) -> bool {
        matches!(self, RoundPhase::Won | RoundPhase::Ended)
    }
}

/// Observable events emitted by a round for external collaborators
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RoundEvent {
    /// First-time exact match of a target word
    WordFound { word: String },
    /// Every target word found; emitted once per round
    RoundWon,
}

/// Player actions produced by the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    /// Move the grid cursor one row up
    CursorUp,
    /// Move the grid cursor one row down
    CursorDown,
    /// Move the grid cursor one column left
    CursorLeft,
    /// Move the grid cursor one column right
    CursorRight,
    /// Press the cell under the cursor
    Select,
    /// Start a round that is waiting to begin
    Start,
    /// Discard the round and generate a fresh board
    Restart,
}

impl PlayerAction {
    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerAction::CursorUp => "cursorUp",
            PlayerAction::CursorDown => "cursorDown",
            PlayerAction::CursorLeft => "cursorLeft",
            PlayerAction::CursorRight => "cursorRight",
            PlayerAction::Select => "select",
            PlayerAction::Start => "start",
            PlayerAction::Restart => "restart",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_words_fit_default_grid() {
        let max = GRID_ROWS.max(GRID_COLS) as usize;
        for word in DEFAULT_WORDS {
            assert!(!word.is_empty());
            assert!(word.len() <= max, "{} does not fit", word);
            assert!(word.bytes().all(|b| ALPHABET.contains(&b)));
        }
    }

    #[test]
    fn direction_lock_from_pair() {
        let origin = Position::new(4, 4);
        assert_eq!(
            DirectionLock::from_pair(origin, Position::new(4, 9)),
            Some(DirectionLock::RowLocked)
        );
        assert_eq!(
            DirectionLock::from_pair(origin, Position::new(0, 4)),
            Some(DirectionLock::ColLocked)
        );
        assert_eq!(DirectionLock::from_pair(origin, Position::new(5, 5)), None);
    }

    #[test]
    fn direction_lock_allows() {
        let last = Position::new(2, 6);
        assert!(DirectionLock::RowLocked.allows(last, Position::new(2, 0)));
        assert!(!DirectionLock::RowLocked.allows(last, Position::new(5, 6)));
        assert!(DirectionLock::ColLocked.allows(last, Position::new(5, 6)));
        assert!(!DirectionLock::ColLocked.allows(last, Position::new(2, 7)));
        assert!(DirectionLock::Unset.allows(last, Position::new(9, 9)));
    }

    #[test]
    fn orientation_offsets() {
        let origin = Position::new(1, 2);
        assert_eq!(
            Orientation::Horizontal.offset(origin, 3),
            Position::new(1, 5)
        );
        assert_eq!(Orientation::Vertical.offset(origin, 3), Position::new(4, 2));
    }

    #[test]
    fn log_names_are_stable() {
        assert_eq!(PlayerAction::CursorLeft.as_str(), "cursorLeft");
        assert_eq!(PlayerAction::Restart.as_str(), "restart");
        assert_eq!(RoundPhase::Playing.as_str(), "playing");
        assert_eq!(RoundPhase::Ended.as_str(), "ended");
    }
}
