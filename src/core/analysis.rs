// File: src/core/analysis.rs
use crate::core::chars::{is_consonant, is_vowel};
use crate::error::{LexiconError, Result};

/// Marks a syllable boundary inside an original word.
pub const SEPARATOR: char = '/';

pub fn normalize(word: &str) -> String {
    word.chars().filter(|&c| c != SEPARATOR).collect()
}

/// Checks the raw word: letters plus single interior separators, fewer than `max_len` chars.
pub fn validate(word: &str, max_len: usize) -> Result<()> {
    if word.is_empty() {
        return Err(LexiconError::invalid(word, "empty word"));
    }
    if word.chars().count() >= max_len {
        return Err(LexiconError::invalid(word, "word too long"));
    }
    if word.chars().any(|c| !c.is_alphabetic() && c != SEPARATOR) {
        return Err(LexiconError::invalid(
            word,
            "only letters and '/' separators are allowed",
        ));
    }
    if word.starts_with(SEPARATOR) || word.ends_with(SEPARATOR) {
        return Err(LexiconError::invalid(word, "leading or trailing separator"));
    }
    if word.contains("//") {
        return Err(LexiconError::invalid(word, "doubled separator"));
    }
    Ok(())
}

pub fn count_vowels(word: &str) -> usize {
    word.chars().filter(|&c| is_vowel(c)).count()
}

pub fn count_consonants(word: &str) -> usize {
    word.chars().filter(|&c| is_consonant(c)).count()
}

pub fn count_syllables(word: &str) -> usize {
    word.chars().filter(|&c| c == SEPARATOR).count() + 1
}

pub fn split_syllables(word: &str) -> Vec<String> {
    word.split(SEPARATOR)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// True when the letters never decrease, ignoring case.
pub fn is_alphabetical(word: &str) -> bool {
    let lowered: Vec<char> = word.chars().map(|c| c.to_ascii_lowercase()).collect();
    lowered.windows(2).all(|w| w[0] <= w[1])
}

/// Case-insensitive stable sort of the characters; the original case is kept.
pub fn sorted_key(word: &str) -> String {
    let mut chars: Vec<char> = word.chars().collect();
    chars.sort_by_key(|c| c.to_ascii_lowercase());
    chars.into_iter().collect()
}
