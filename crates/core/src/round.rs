//! Round state module - owns everything mutable about one round
//!
//! This module ties together the core components: board generation, the selection
//! controller, the answer matcher and the word bank. Presses and timer ticks are
//! applied synchronously; each returns the events it caused, and every mutation
//! bumps [`RoundState::revision`] so a renderer knows when to redraw.

use arrayvec::ArrayVec;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::board::Board;
use crate::error::GenerateError;
use crate::generator::{BoardGenerator, GeneratorConfig, Placement};
use crate::matcher::{AnswerMatcher, MatchResult};
use crate::selection::{PressOutcome, SelectionController};
use crate::snapshot::RoundSnapshot;
use crate::types::*;
use crate::word_bank::WordBank;

/// Events emitted by a single operation (at most a found word plus the win)
pub type RoundEvents = ArrayVec<RoundEvent, 4>;

/// Everything needed to set up a round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundConfig {
    pub rows: u8,
    pub cols: u8,
    pub words: Vec<String>,
    pub idle_commit_ms: u32,
    pub max_placement_attempts: u32,
    pub longest_first: bool,
    /// Fixed RNG seed; a fresh one is drawn when unset
    pub seed: Option<u64>,
}

impl RoundConfig {
    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            rows: self.rows,
            cols: self.cols,
            max_attempts: self.max_placement_attempts,
            longest_first: self.longest_first,
        }
    }
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            rows: GRID_ROWS,
            cols: GRID_COLS,
            words: DEFAULT_WORDS.iter().map(|w| w.to_string()).collect(),
            idle_commit_ms: IDLE_COMMIT_MS,
            max_placement_attempts: DEFAULT_MAX_PLACEMENT_ATTEMPTS,
            longest_first: true,
            seed: None,
        }
    }
}

/// Complete state of one round
#[derive(Debug, Clone)]
pub struct RoundState {
    board: Board,
    selection: SelectionController,
    bank: WordBank,
    matcher: AnswerMatcher,
    placements: Vec<Placement>,
    phase: RoundPhase,
    seed: u64,
    /// Monotonic mutation counter (the "notify render" signal).
    revision: u64,
}

impl RoundState {
    /// Generate a fresh board for `config`.
    pub fn new(config: &RoundConfig) -> Result<Self, GenerateError> {
        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);
        let generated =
            BoardGenerator::new(config.generator_config()).generate(&config.words, &mut rng)?;

        info!(
            seed,
            rows = config.rows,
            cols = config.cols,
            words = generated.words.len(),
            "round created"
        );

        Ok(Self {
            board: generated.board,
            selection: SelectionController::new(config.idle_commit_ms),
            bank: WordBank::new(generated.words),
            matcher: AnswerMatcher,
            placements: generated.placements,
            phase: RoundPhase::Ready,
            seed,
            revision: 0,
        })
    }

    /// Play on a prepared board (fixtures, hand-built puzzles).
    ///
    /// Words are upper-cased and kept in the given order; no placements are recorded.
    pub fn with_board<I, S>(board: Board, words: I, idle_commit_ms: u32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            board,
            selection: SelectionController::new(idle_commit_ms),
            bank: WordBank::new(words.into_iter().map(|w| w.as_ref().to_ascii_uppercase())),
            matcher: AnswerMatcher,
            placements: Vec::new(),
            phase: RoundPhase::Ready,
            seed: 0,
            revision: 0,
        }
    }

    /// Begin accepting presses
    pub fn start(&mut self) {
        if self.phase != RoundPhase::Ready {
            return;
        }
        self.phase = RoundPhase::Playing;
        self.bump();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn bank(&self) -> &WordBank {
        &self.bank
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn selection(&self) -> &[Position] {
        self.selection.path()
    }

    pub fn lock(&self) -> DirectionLock {
        self.selection.lock()
    }

    pub fn idle_timer_ms(&self) -> Option<u32> {
        self.selection.idle_timer_ms()
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase.is_over()
    }

    pub fn found_count(&self) -> usize {
        self.bank.found_count()
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Apply a player press on `pos`
    pub fn press(&mut self, pos: Position) -> RoundEvents {
        let mut events = RoundEvents::new();
        if self.phase != RoundPhase::Playing {
            return events;
        }

        match self.selection.press(&mut self.board, pos) {
            PressOutcome::Ignored => return events,
            PressOutcome::Extended => {}
            PressOutcome::Committed(path) => self.evaluate(&path, &mut events),
        }

        self.bump();
        events
    }

    /// Advance the idle-commit timer by `elapsed_ms`
    pub fn tick(&mut self, elapsed_ms: u32) -> RoundEvents {
        let mut events = RoundEvents::new();
        if self.phase != RoundPhase::Playing {
            return events;
        }

        if let Some(path) = self.selection.tick(&mut self.board, elapsed_ms) {
            self.evaluate(&path, &mut events);
            self.bump();
        }
        events
    }

    /// Tear the round down: drop any pending commit without evaluating it and stop
    /// accepting input. Used when the countdown expires or the player leaves.
    pub fn end(&mut self) {
        if self.phase.is_over() {
            return;
        }
        self.selection.cancel(&mut self.board);
        self.phase = RoundPhase::Ended;
        debug!(found = self.bank.found_count(), "round ended");
        self.bump();
    }

    fn evaluate(&mut self, path: &[Position], events: &mut RoundEvents) {
        match self.matcher.check(path, &mut self.board, &mut self.bank) {
            MatchResult::Found { word, solved } => {
                info!(
                    word = word.as_str(),
                    found = self.bank.found_count(),
                    total = self.bank.len(),
                    "word found"
                );
                events.push(RoundEvent::WordFound { word });
                if solved {
                    self.selection.cancel(&mut self.board);
                    self.phase = RoundPhase::Won;
                    info!("round won");
                    events.push(RoundEvent::RoundWon);
                }
            }
            MatchResult::AlreadyFound { word } => {
                debug!(word = word.as_str(), "word already found");
            }
            MatchResult::NoMatch => {
                debug!(len = path.len(), "selection did not match");
            }
        }
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    pub fn snapshot_into(&self, out: &mut RoundSnapshot) {
        out.rows = self.board.rows();
        out.cols = self.board.cols();
        out.cells.clear();
        out.cells.extend_from_slice(self.board.cells());
        out.words.clear();
        out.words.extend_from_slice(self.bank.entries());
        out.found = self.bank.found_count();
        out.phase = self.phase;
        out.selection.clear();
        out.selection.extend_from_slice(self.selection.path());
        out.lock = self.selection.lock();
        out.idle_ms = self.selection.idle_timer_ms();
        out.revision = self.revision;
        out.seed = self.seed;
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        let mut s = RoundSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
