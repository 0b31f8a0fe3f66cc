//! Board generator - plants target words into a fresh grid
//!
//! Greedy randomized placement: for each word (longest first by default) pick a random
//! orientation and origin, accept it if every cell the word would cover is empty or
//! already holds the same letter, otherwise retry. There is no backtracking across
//! words; instead retries are capped per word so generation always terminates.
//! Cells left empty afterwards are filled with uniformly random letters.

use rand::Rng;
use tracing::{debug, warn};

use crate::board::Board;
use crate::error::GenerateError;
use crate::types::{
    Orientation, Position, ALPHABET, DEFAULT_MAX_PLACEMENT_ATTEMPTS, GRID_COLS, GRID_ROWS,
    MAX_GRID_DIM,
};

/// Grid shape and retry policy for one generation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub rows: u8,
    pub cols: u8,
    /// Placement attempts allowed per word before giving up
    pub max_attempts: u32,
    /// Place longer words first (ordering hint only, never affects matching)
    pub longest_first: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            rows: GRID_ROWS,
            cols: GRID_COLS,
            max_attempts: DEFAULT_MAX_PLACEMENT_ATTEMPTS,
            longest_first: true,
        }
    }
}

/// Where a word was planted
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Placement {
    pub word: String,
    pub origin: Position,
    pub orientation: Orientation,
}

impl Placement {
    /// Cells the word occupies, first letter first
    pub fn cells(&self) -> Vec<Position> {
        (0..self.word.len() as u8)
            .map(|i| self.orientation.offset(self.origin, i))
            .collect()
    }
}

/// Output of a successful generation
#[derive(Debug, Clone)]
pub struct GeneratedBoard {
    pub board: Board,
    /// Words in the order they were placed
    pub words: Vec<String>,
    pub placements: Vec<Placement>,
}

/// Scratch grid used while planting; `None` marks a cell no word has claimed
struct LetterGrid {
    rows: u8,
    cols: u8,
    letters: Vec<Option<u8>>,
}

impl LetterGrid {
    fn new(rows: u8, cols: u8) -> Self {
        Self {
            rows,
            cols,
            letters: vec![None; rows as usize * cols as usize],
        }
    }

    #[inline(always)]
    fn index(&self, pos: Position) -> usize {
        pos.row as usize * self.cols as usize + pos.col as usize
    }

    /// A word fits when it stays in bounds and agrees with every letter already there
    fn can_place(&self, word: &[u8], origin: Position, orientation: Orientation) -> bool {
        let len = word.len();
        let fits = match orientation {
            Orientation::Horizontal => origin.col as usize + len <= self.cols as usize,
            Orientation::Vertical => origin.row as usize + len <= self.rows as usize,
        };
        if !fits || origin.row >= self.rows || origin.col >= self.cols {
            return false;
        }

        word.iter().enumerate().all(|(i, &letter)| {
            let pos = orientation.offset(origin, i as u8);
            match self.letters[self.index(pos)] {
                None => true,
                Some(existing) => existing == letter,
            }
        })
    }

    fn place(&mut self, word: &[u8], origin: Position, orientation: Orientation) {
        for (i, &letter) in word.iter().enumerate() {
            let idx = self.index(orientation.offset(origin, i as u8));
            self.letters[idx] = Some(letter);
        }
    }

    fn fill<R: Rng + ?Sized>(self, rng: &mut R) -> Vec<char> {
        self.letters
            .into_iter()
            .map(|slot| {
                let b = slot.unwrap_or_else(|| ALPHABET[rng.gen_range(0..ALPHABET.len())]);
                b as char
            })
            .collect()
    }
}

/// Validate and normalize a word list into placement order.
///
/// Words are upper-cased; the result is sorted longest-first (stable) when
/// `longest_first` is set, otherwise the given order is kept.
pub fn prepare_words(
    words: &[String],
    config: &GeneratorConfig,
) -> Result<Vec<String>, GenerateError> {
    let GeneratorConfig { rows, cols, .. } = *config;
    if rows == 0 || cols == 0 || rows > MAX_GRID_DIM || cols > MAX_GRID_DIM {
        return Err(GenerateError::InvalidDimensions {
            rows,
            cols,
            max: MAX_GRID_DIM,
        });
    }
    if words.is_empty() {
        return Err(GenerateError::NoWords);
    }

    let longest_side = rows.max(cols) as usize;
    let mut prepared: Vec<String> = Vec::with_capacity(words.len());
    for raw in words {
        let word = raw.to_ascii_uppercase();
        if word.is_empty() || !word.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(GenerateError::InvalidWord { word: raw.clone() });
        }
        if word.len() > longest_side {
            return Err(GenerateError::WordTooLong {
                len: word.len(),
                word,
                rows,
                cols,
            });
        }
        if prepared.contains(&word) {
            return Err(GenerateError::DuplicateWord { word });
        }
        prepared.push(word);
    }

    if config.longest_first {
        prepared.sort_by(|a, b| b.len().cmp(&a.len()));
    }
    Ok(prepared)
}

/// Plants a word list into a new board
#[derive(Debug, Clone, Default)]
pub struct BoardGenerator {
    config: GeneratorConfig,
}

impl BoardGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate a fully lettered board containing every word.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        words: &[String],
        rng: &mut R,
    ) -> Result<GeneratedBoard, GenerateError> {
        let ordered = prepare_words(words, &self.config)?;
        let GeneratorConfig { rows, cols, .. } = self.config;

        let mut grid = LetterGrid::new(rows, cols);
        let mut placements = Vec::with_capacity(ordered.len());

        for word in &ordered {
            let placement = self.place_word(&mut grid, word, rng)?;
            placements.push(placement);
        }

        let letters = grid.fill(rng);
        // Dimensions were validated above, so the letter count always matches.
        let board = Board::from_letters(rows, cols, &letters).ok_or(
            GenerateError::InvalidDimensions {
                rows,
                cols,
                max: MAX_GRID_DIM,
            },
        )?;

        debug!(rows, cols, words = ordered.len(), "board generated");
        Ok(GeneratedBoard {
            board,
            words: ordered,
            placements,
        })
    }

    fn place_word<R: Rng + ?Sized>(
        &self,
        grid: &mut LetterGrid,
        word: &str,
        rng: &mut R,
    ) -> Result<Placement, GenerateError> {
        let bytes = word.as_bytes();
        for attempt in 1..=self.config.max_attempts {
            let orientation = if rng.gen_bool(0.5) {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let origin = Position::new(
                rng.gen_range(0..self.config.rows),
                rng.gen_range(0..self.config.cols),
            );

            if grid.can_place(bytes, origin, orientation) {
                grid.place(bytes, origin, orientation);
                debug!(
                    word,
                    attempt,
                    row = origin.row,
                    col = origin.col,
                    orientation = orientation.as_str(),
                    "placed word"
                );
                return Ok(Placement {
                    word: word.to_string(),
                    origin,
                    orientation,
                });
            }
        }

        warn!(word, attempts = self.config.max_attempts, "word placement exhausted");
        Err(GenerateError::PlacementExhausted {
            word: word.to_string(),
            attempts: self.config.max_attempts,
        })
    }
}
