// src/core/types.rs
use crate::core::analysis;
use serde::Serialize;
use std::fmt;

/// A stable handle to a record in the word store arena.
/// Slots are never reused, so a stale handle resolves to nothing rather than to another word.
pub type WordId = usize;

/// A-Z plus one overflow bucket.
pub const BUCKET_COUNT: usize = 27;

/// Partition of the store keyed by the first letter of the normalized form.
///
/// Indices 0-25 are 'A'-'Z' and 26 is the overflow bucket. The index is only
/// reachable through the checked constructors, so it is always in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Bucket(u8);

impl Bucket {
    /// Words whose first character is alphabetic but not an ASCII letter.
    pub const OVERFLOW: Bucket = Bucket((BUCKET_COUNT - 1) as u8);

    /// The bucket for letter `index` (0 = 'A'), if it is one of the 26.
    pub fn letter(index: usize) -> Option<Self> {
        (index < BUCKET_COUNT - 1).then(|| Bucket(index as u8))
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        (index < BUCKET_COUNT).then(|| Bucket(index as u8))
    }

    pub fn is_overflow(self) -> bool {
        self == Self::OVERFLOW
    }

    pub fn label(self) -> char {
        if self.is_overflow() {
            '?'
        } else {
            (b'A' + self.0) as char
        }
    }

    pub fn all() -> impl Iterator<Item = Bucket> {
        (0..BUCKET_COUNT).filter_map(Bucket::from_index)
    }
}

/// The relationship kinds a record can point along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    SubwordOf,
    IngForm,
    EdForm,
    AddOneChar,
    LexicallyClose,
    Anagram,
}

impl Relation {
    pub const ALL: [Relation; 6] = [
        Relation::SubwordOf,
        Relation::IngForm,
        Relation::EdForm,
        Relation::AddOneChar,
        Relation::LexicallyClose,
        Relation::Anagram,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Relation::SubwordOf => "Subword of",
            Relation::IngForm => "Gerund form (-ing)",
            Relation::EdForm => "Past participle (-ed)",
            Relation::AddOneChar => "Add one character",
            Relation::LexicallyClose => "Lexically close to",
            Relation::Anagram => "Anagram",
        }
    }
}

/// Non-owning references to other records. Recomputed in bulk by the linker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Links {
    pub subword_of: Option<WordId>,
    pub ing_form: Option<WordId>,
    pub ed_form: Option<WordId>,
    pub add_one_char: Option<WordId>,
    pub lexically_close: Option<WordId>,
    pub anagram: Option<WordId>,
}

impl Links {
    pub fn get(&self, relation: Relation) -> Option<WordId> {
        match relation {
            Relation::SubwordOf => self.subword_of,
            Relation::IngForm => self.ing_form,
            Relation::EdForm => self.ed_form,
            Relation::AddOneChar => self.add_one_char,
            Relation::LexicallyClose => self.lexically_close,
            Relation::Anagram => self.anagram,
        }
    }

    pub fn set(&mut self, relation: Relation, target: Option<WordId>) {
        let slot = match relation {
            Relation::SubwordOf => &mut self.subword_of,
            Relation::IngForm => &mut self.ing_form,
            Relation::EdForm => &mut self.ed_form,
            Relation::AddOneChar => &mut self.add_one_char,
            Relation::LexicallyClose => &mut self.lexically_close,
            Relation::Anagram => &mut self.anagram,
        };
        *slot = target;
    }

    /// Drops every reference to `target`.
    pub fn forget(&mut self, target: WordId) {
        for relation in Relation::ALL {
            if self.get(relation) == Some(target) {
                self.set(relation, None);
            }
        }
    }
}

/// One distinct word and everything derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordRecord {
    /// As supplied, syllable separators included.
    pub original: String,
    /// Separators stripped. Used for search, equality and every comparison.
    pub normalized: String,
    pub char_count: usize,
    pub vowel_count: usize,
    pub consonant_count: usize,
    pub syllable_count: usize,
    pub syllables: Vec<String>,
    pub is_alphabetical: bool,
    /// Characters sorted case-insensitively; equal keys mean anagrams.
    pub sorted_key: String,
    pub links: Links,
}

impl WordRecord {
    /// Builds a record from an already validated word.
    pub fn new(original: &str) -> Self {
        let normalized = analysis::normalize(original);
        Self {
            original: original.to_string(),
            char_count: normalized.chars().count(),
            vowel_count: analysis::count_vowels(&normalized),
            consonant_count: analysis::count_consonants(&normalized),
            syllable_count: analysis::count_syllables(original),
            syllables: analysis::split_syllables(original),
            is_alphabetical: analysis::is_alphabetical(&normalized),
            sorted_key: analysis::sorted_key(&normalized),
            normalized,
            links: Links::default(),
        }
    }

    /// Length used for the per-bucket ordering.
    pub fn original_len(&self) -> usize {
        self.original.chars().count()
    }
}

impl fmt::Display for WordRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalized)
    }
}

/// Summary of the last relink. Derived, never authoritative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Statistics {
    pub word_count: usize,
    pub subword_links: usize,
    pub verb_form_links: usize,
    pub add_one_char_links: usize,
    pub lexically_close_links: usize,
    pub anagram_links: usize,
}

impl Statistics {
    pub fn total_links(&self) -> usize {
        self.subword_links
            + self.verb_form_links
            + self.add_one_char_links
            + self.lexically_close_links
            + self.anagram_links
    }
}
