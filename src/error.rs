// File: src/error.rs
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LexiconError>;

#[derive(Error, Debug)]
pub enum LexiconError {
    #[error("Invalid word format '{word}': {reason}")]
    InvalidFormat { word: String, reason: &'static str },

    #[error("Word already exists: {0}")]
    DuplicateWord(String),

    #[error("Word not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl LexiconError {
    pub(crate) fn invalid(word: &str, reason: &'static str) -> Self {
        Self::InvalidFormat {
            word: word.to_string(),
            reason,
        }
    }
}
