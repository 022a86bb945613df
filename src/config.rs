// File: src/config.rs
use std::path::PathBuf;

pub const DEFAULT_WORD_FILE: &str = "words.txt";
pub const DEFAULT_MAX_WORD_LENGTH: usize = 50;
pub const DEFAULT_MAX_CHAIN_LENGTH: usize = 100;

/// Runtime limits and the backing word file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconConfig {
    pub word_file: PathBuf,
    /// Words must be strictly shorter than this (counted in chars, separators included).
    pub max_word_length: usize,
    /// Upper bound on rendered chain length.
    pub max_chain_length: usize,
}

impl LexiconConfig {
    pub fn with_word_file(path: impl Into<PathBuf>) -> Self {
        Self {
            word_file: path.into(),
            ..Self::default()
        }
    }
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            word_file: PathBuf::from(DEFAULT_WORD_FILE),
            max_word_length: DEFAULT_MAX_WORD_LENGTH,
            max_chain_length: DEFAULT_MAX_CHAIN_LENGTH,
        }
    }
}
