// File: src/core/chars.rs
use crate::core::types::Bucket;

/// `y` is treated as a vowel everywhere, including the CVC doubling rule.
pub fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

pub fn is_consonant(c: char) -> bool {
    c.is_alphabetic() && !is_vowel(c)
}

/// 0-25 for ASCII letters, case-insensitive.
pub fn letter_index(c: char) -> Option<usize> {
    if c.is_ascii_alphabetic() {
        Some((c.to_ascii_uppercase() as u8 - b'A') as usize)
    } else {
        None
    }
}

/// Picks the bucket from the first character of a normalized word.
pub fn bucket_for(word: &str) -> Bucket {
    word.chars()
        .next()
        .and_then(letter_index)
        .and_then(Bucket::letter)
        .unwrap_or(Bucket::OVERFLOW)
}
