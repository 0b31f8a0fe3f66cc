//! Round snapshot - a plain, serializable copy of a round for front ends
//!
//! Filled by `RoundState::snapshot_into`, which reuses the buffer between frames.

use serde::Serialize;

use crate::types::{Cell, DirectionLock, Position, RoundPhase, WordEntry};

/// Render-facing copy of a round: the full grid, the word list and selection state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RoundSnapshot {
    pub rows: u8,
    pub cols: u8,
    /// Row-major cells
    pub cells: Vec<Cell>,
    pub words: Vec<WordEntry>,
    pub found: usize,
    pub phase: RoundPhase,
    pub selection: Vec<Position>,
    pub lock: DirectionLock,
    pub idle_ms: Option<u32>,
    pub revision: u64,
    pub seed: u64,
}

impl RoundSnapshot {
    pub fn clear(&mut self) {
        self.rows = 0;
        self.cols = 0;
        self.cells.clear();
        self.words.clear();
        self.found = 0;
        self.phase = RoundPhase::Ready;
        self.selection.clear();
        self.lock = DirectionLock::Unset;
        self.idle_ms = None;
        self.revision = 0;
        self.seed = 0;
    }

    pub fn playable(&self) -> bool {
        self.phase == RoundPhase::Playing
    }

    /// Grid letters as one string per row
    pub fn letter_rows(&self) -> Vec<String> {
        if self.cols == 0 {
            return Vec::new();
        }
        self.cells
            .chunks(self.cols as usize)
            .map(|row| row.iter().map(|cell| cell.letter).collect())
            .collect()
    }
}
