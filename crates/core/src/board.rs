//! Board module - manages the letter grid
//!
//! The board is an R x C grid of letter cells, fixed for the lifetime of a round.
//! Uses a flat vector in row-major order for cache locality.
//! Coordinates: (row, col) where row ranges 0..R (top to bottom), col ranges 0..C (left to right)

use crate::types::{Cell, DirectionLock, Position};

/// The puzzle grid - flat storage of cells, row-major order (row * cols + col)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: u8,
    cols: u8,
    cells: Vec<Cell>,
}

impl Board {
    /// Build a board from row-major letters.
    ///
    /// Returns `None` when `letters.len()` does not match `rows * cols`.
    pub fn from_letters(rows: u8, cols: u8, letters: &[char]) -> Option<Self> {
        if letters.len() != rows as usize * cols as usize {
            return None;
        }
        Some(Self {
            rows,
            cols,
            cells: letters.iter().map(|&letter| Cell::new(letter)).collect(),
        })
    }

    /// Build a board from one string per row (for tests and fixtures).
    ///
    /// Returns `None` for ragged rows or an empty grid.
    pub fn from_rows(rows: &[&str]) -> Option<Self> {
        let cols = rows.first()?.chars().count();
        if cols == 0 || rows.iter().any(|r| r.chars().count() != cols) {
            return None;
        }
        let letters: Vec<char> = rows.iter().flat_map(|r| r.chars()).collect();
        Self::from_letters(
            u8::try_from(rows.len()).ok()?,
            u8::try_from(cols).ok()?,
            &letters,
        )
    }

    /// Calculate flat index from a position
    #[inline(always)]
    fn index(&self, pos: Position) -> Option<usize> {
        if pos.row >= self.rows || pos.col >= self.cols {
            return None;
        }
        Some(pos.row as usize * self.cols as usize + pos.col as usize)
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Check if position lies within the grid
    pub fn contains(&self, pos: Position) -> bool {
        self.index(pos).is_some()
    }

    /// Get cell at position, `None` if out of bounds
    pub fn get(&self, pos: Position) -> Option<&Cell> {
        self.index(pos).map(|idx| &self.cells[idx])
    }

    pub fn get_mut(&mut self, pos: Position) -> Option<&mut Cell> {
        let idx = self.index(pos)?;
        Some(&mut self.cells[idx])
    }

    pub fn letter(&self, pos: Position) -> Option<char> {
        self.get(pos).map(|cell| cell.letter)
    }

    /// Concatenate the letters along `path`, in path order.
    ///
    /// Out-of-bounds positions contribute nothing.
    pub fn spell(&self, path: &[Position]) -> String {
        path.iter().filter_map(|&pos| self.letter(pos)).collect()
    }

    /// Letters of one row, left to right
    pub fn row_letters(&self, row: u8) -> String {
        if row >= self.rows {
            return String::new();
        }
        let start = row as usize * self.cols as usize;
        self.cells[start..start + self.cols as usize]
            .iter()
            .map(|cell| cell.letter)
            .collect()
    }

    /// Letters of one column, top to bottom
    pub fn col_letters(&self, col: u8) -> String {
        (0..self.rows)
            .filter_map(|row| self.letter(Position::new(row, col)))
            .collect()
    }

    /// Mark a cell as part of the active selection
    pub fn set_pressed(&mut self, pos: Position) -> bool {
        match self.get_mut(pos) {
            Some(cell) => {
                cell.pressed = true;
                true
            }
            None => false,
        }
    }

    /// Recompute `highlighted` for every cell from the latest press.
    pub fn apply_highlight(&mut self, lock: DirectionLock, anchor: Position) {
        let cols = self.cols as usize;
        for (idx, cell) in self.cells.iter_mut().enumerate() {
            let pos = Position::new((idx / cols) as u8, (idx % cols) as u8);
            cell.highlighted = lock.highlights(anchor, pos);
        }
    }

    /// Clear every transient selection flag; `correct` is left untouched
    pub fn clear_selection(&mut self) {
        for cell in &mut self.cells {
            cell.pressed = false;
            cell.highlighted = false;
        }
    }

    /// Mark every cell on `path` as part of a found word
    pub fn mark_correct(&mut self, path: &[Position]) {
        for &pos in path {
            if let Some(cell) = self.get_mut(pos) {
                cell.correct = true;
            }
        }
    }

    /// Iterate over all positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Position::new(row, col)))
    }

    /// Get a reference to the internal cells, row-major
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn correct_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.correct).count()
    }
}
