//! Answer matcher - evaluates a committed selection path against the word bank
//!
//! Only an exact, full-path, forward reading counts. Success is idempotent per
//! word: re-selecting a word that was already found changes nothing.

use crate::board::Board;
use crate::types::Position;
use crate::word_bank::WordBank;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult {
    /// The letters along the path spell no target word
    NoMatch,
    /// The path spells a word that was found earlier this round
    AlreadyFound { word: String },
    /// First discovery of `word`; `solved` is true when it was the last one
    Found { word: String, solved: bool },
}

impl MatchResult {
    pub fn is_found(&self) -> bool {
        matches!(self, MatchResult::Found { .. })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AnswerMatcher;

impl AnswerMatcher {
    pub fn check(&self, path: &[Position], board: &mut Board, bank: &mut WordBank) -> MatchResult {
        if path.is_empty() {
            return MatchResult::NoMatch;
        }
        let candidate = board.spell(path);
        let Some(idx) = bank.position(&candidate) else {
            return MatchResult::NoMatch;
        };

        let word = bank.entries()[idx].word.clone();
        if !bank.mark_found(idx) {
            return MatchResult::AlreadyFound { word };
        }

        board.mark_correct(path);
        MatchResult::Found {
            word,
            solved: bank.all_found(),
        }
    }
}
