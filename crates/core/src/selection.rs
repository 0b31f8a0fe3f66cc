//! Selection controller - the press-by-press input state machine
//!
//! Tracks the in-progress path of pressed cells, locks its direction on the second
//! pick, recomputes highlight state after every press, and commits the path when the
//! player breaks the direction lock or stops pressing for the idle window.
//!
//! The idle timer is a debounce driven by the fixed-timestep [`tick`](SelectionController::tick):
//! every accepted press rearms it, and at most one deadline is ever pending.

use tracing::trace;

use crate::board::Board;
use crate::types::{DirectionLock, Position, IDLE_COMMIT_MS};

/// Result of a single press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PressOutcome {
    /// Repeat of the last pressed cell (or out of bounds); nothing changed
    Ignored,
    /// The press extended (or started) the current path
    Extended,
    /// The press broke the direction lock; the path including this press was committed
    Committed(Vec<Position>),
}

/// Current selection path, direction lock and pending idle-commit deadline
#[derive(Debug, Clone)]
pub struct SelectionController {
    path: Vec<Position>,
    lock: DirectionLock,
    /// Remaining time before the idle commit fires, if one is pending
    idle_timer_ms: Option<u32>,
    idle_window_ms: u32,
}

impl SelectionController {
    pub fn new(idle_window_ms: u32) -> Self {
        Self {
            path: Vec::new(),
            lock: DirectionLock::Unset,
            idle_timer_ms: None,
            idle_window_ms,
        }
    }

    pub fn path(&self) -> &[Position] {
        &self.path
    }

    pub fn lock(&self) -> DirectionLock {
        self.lock
    }

    /// Time left before the pending idle commit, if any
    pub fn idle_timer_ms(&self) -> Option<u32> {
        self.idle_timer_ms
    }

    /// Handle a press on `pos`.
    ///
    /// A press that breaks the lock is committed together with the path so far,
    /// then starts the next path on its own: the lock is unset and the cell shows
    /// the cross highlight of a fresh selection.
    pub fn press(&mut self, board: &mut Board, pos: Position) -> PressOutcome {
        if !board.contains(pos) || self.path.last() == Some(&pos) {
            return PressOutcome::Ignored;
        }

        let mut committed = None;
        match self.path.as_slice() {
            &[] => self.path.push(pos),
            &[first] => match DirectionLock::from_pair(first, pos) {
                Some(lock) => {
                    self.lock = lock;
                    self.path.push(pos);
                }
                None => {
                    self.path.push(pos);
                    committed = Some(self.commit(board));
                    self.path.push(pos);
                }
            },
            &[.., last] => {
                self.path.push(pos);
                if !self.lock.allows(last, pos) {
                    committed = Some(self.commit(board));
                    self.path.push(pos);
                }
            }
        }

        board.set_pressed(pos);
        board.apply_highlight(self.lock, pos);
        self.idle_timer_ms = Some(self.idle_window_ms);

        trace!(
            row = pos.row,
            col = pos.col,
            len = self.path.len(),
            lock = ?self.lock,
            "press"
        );

        match committed {
            Some(path) => PressOutcome::Committed(path),
            None => PressOutcome::Extended,
        }
    }

    /// Advance the idle timer; returns the committed path when it expires.
    pub fn tick(&mut self, board: &mut Board, elapsed_ms: u32) -> Option<Vec<Position>> {
        let remaining = self.idle_timer_ms?;
        let remaining = remaining.saturating_sub(elapsed_ms);
        if remaining > 0 {
            self.idle_timer_ms = Some(remaining);
            return None;
        }
        self.idle_timer_ms = None;
        Some(self.commit(board))
    }

    /// Drop any pending idle commit and clear the selection without evaluating it.
    pub fn cancel(&mut self, board: &mut Board) {
        self.idle_timer_ms = None;
        self.path.clear();
        self.lock = DirectionLock::Unset;
        board.clear_selection();
    }

    /// Clear transient board flags, reset the lock and hand back the path.
    fn commit(&mut self, board: &mut Board) -> Vec<Position> {
        board.clear_selection();
        self.lock = DirectionLock::Unset;
        std::mem::take(&mut self.path)
    }
}

impl Default for SelectionController {
    fn default() -> Self {
        Self::new(IDLE_COMMIT_MS)
    }
}
