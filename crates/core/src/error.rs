use thiserror::Error;

/// Reasons a round's board could not be generated.
///
/// All of these except `PlacementExhausted` are detected before any placement is attempted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("invalid grid dimensions {rows}x{cols} (each side must be 1..={max})")]
    InvalidDimensions { rows: u8, cols: u8, max: u8 },

    #[error("word list is empty")]
    NoWords,

    #[error("invalid word {word:?}: words must be non-empty and use only A-Z")]
    InvalidWord { word: String },

    #[error("word {word:?} is listed more than once")]
    DuplicateWord { word: String },

    #[error("word {word:?} ({len} letters) does not fit a {rows}x{cols} grid")]
    WordTooLong {
        word: String,
        len: usize,
        rows: u8,
        cols: u8,
    },

    #[error("could not place {word:?} after {attempts} attempts")]
    PlacementExhausted { word: String, attempts: u32 },
}
