//! Keyboard cursor over the letter grid.

use crate::types::{PlayerAction, Position};

/// Cursor position clamped to an R x C grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCursor {
    pos: Position,
    rows: u8,
    cols: u8,
}

impl GridCursor {
    /// Cursor starting at the top-left cell. Zero dimensions are treated as 1.
    pub fn new(rows: u8, cols: u8) -> Self {
        Self {
            pos: Position::new(0, 0),
            rows: rows.max(1),
            cols: cols.max(1),
        }
    }

    pub fn position(&self) -> Position {
        self.pos
    }

    /// Jump to `pos` (e.g. after a mouse press); ignored when out of bounds
    pub fn set(&mut self, pos: Position) {
        if pos.row < self.rows && pos.col < self.cols {
            self.pos = pos;
        }
    }

    /// Apply a cursor action; returns true if the action was a cursor move.
    ///
    /// Movement stops at the grid edges.
    pub fn apply(&mut self, action: PlayerAction) -> bool {
        let Position { row, col } = self.pos;
        self.pos = match action {
            PlayerAction::CursorUp => Position::new(row.saturating_sub(1), col),
            PlayerAction::CursorDown => Position::new((row + 1).min(self.rows - 1), col),
            PlayerAction::CursorLeft => Position::new(row, col.saturating_sub(1)),
            PlayerAction::CursorRight => Position::new(row, (col + 1).min(self.cols - 1)),
            _ => return false,
        };
        true
    }
}
