//! Word bank - the round's target words and their found status

use crate::types::WordEntry;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordBank {
    entries: Vec<WordEntry>,
    found: usize,
}

impl WordBank {
    /// Build from words already in display order (placement order)
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: words.into_iter().map(WordEntry::new).collect(),
            found: 0,
        }
    }

    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn found_count(&self) -> usize {
        self.found
    }

    pub fn all_found(&self) -> bool {
        !self.entries.is_empty() && self.found == self.entries.len()
    }

    /// Index of the entry spelling `candidate` (ASCII case-insensitive)
    pub fn position(&self, candidate: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| entry.word.eq_ignore_ascii_case(candidate))
    }

    pub fn is_found(&self, idx: usize) -> bool {
        self.entries.get(idx).is_some_and(|entry| entry.found)
    }

    /// Mark an entry found; returns false if it already was (or idx is out of range)
    pub(crate) fn mark_found(&mut self, idx: usize) -> bool {
        match self.entries.get_mut(idx) {
            Some(entry) if !entry.found => {
                entry.found = true;
                self.found += 1;
                true
            }
            _ => false,
        }
    }
}
