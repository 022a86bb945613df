// --- File: src/core/store.rs
use crate::config::DEFAULT_MAX_WORD_LENGTH;
use crate::core::analysis::{normalize, validate};
use crate::core::chars::bucket_for;
use crate::core::types::{Bucket, WordId, WordRecord, BUCKET_COUNT};
use crate::error::{LexiconError, Result};
use std::collections::HashSet;

/// Owns every word record.
///
/// Records live in an append-only arena addressed by `WordId`; each bucket keeps
/// an ordered list of ids, ascending by original length with equal lengths in
/// arrival order. Deleted slots stay empty so stale ids never alias a new word.
#[derive(Debug, Clone)]
pub struct WordStore {
    slots: Vec<Option<WordRecord>>,
    buckets: Vec<Vec<WordId>>,
    max_word_length: usize,
}

impl WordStore {
    pub fn new() -> Self {
        Self::with_max_word_length(DEFAULT_MAX_WORD_LENGTH)
    }

    pub fn with_max_word_length(max_word_length: usize) -> Self {
        Self {
            slots: Vec::new(),
            buckets: vec![Vec::new(); BUCKET_COUNT],
            max_word_length,
        }
    }

    /// Number of live records.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }

    pub fn get(&self, id: WordId) -> Option<&WordRecord> {
        self.slots.get(id).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, id: WordId) -> Option<&mut WordRecord> {
        self.slots.get_mut(id).and_then(Option::as_mut)
    }

    /// Ids of one bucket in list order.
    pub fn bucket(&self, bucket: Bucket) -> &[WordId] {
        self.buckets.get(bucket.index()).map_or(&[], Vec::as_slice)
    }

    /// Validates and inserts, rejecting a normalized form already in its bucket.
    pub fn insert(&mut self, word: &str) -> Result<WordId> {
        validate(word, self.max_word_length)?;
        let normalized = normalize(word);
        if self.search(&normalized).is_some() {
            return Err(LexiconError::DuplicateWord(normalized));
        }
        Ok(self.place(WordRecord::new(word)))
    }

    /// Validates and inserts without the duplicate check. Bulk loads follow up with `dedup`.
    pub fn push(&mut self, word: &str) -> Result<WordId> {
        validate(word, self.max_word_length)?;
        Ok(self.place(WordRecord::new(word)))
    }

    fn place(&mut self, record: WordRecord) -> WordId {
        let bucket = bucket_for(&record.normalized).index();
        let new_len = record.original_len();
        let id = self.slots.len();

        // Insert before the first strictly longer record.
        let position = self.buckets[bucket]
            .iter()
            .position(|&other| self.slots[other].as_ref().map_or(0, WordRecord::original_len) > new_len)
            .unwrap_or(self.buckets[bucket].len());

        self.slots.push(Some(record));
        self.buckets[bucket].insert(position, id);
        id
    }

    /// Looks a normalized form up in the bucket its first letter selects.
    pub fn search(&self, normalized: &str) -> Option<WordId> {
        self.search_in(bucket_for(normalized), normalized)
    }

    /// Linear scan of one bucket.
    pub fn search_in(&self, bucket: Bucket, normalized: &str) -> Option<WordId> {
        self.bucket(bucket)
            .iter()
            .copied()
            .find(|&id| self.get(id).is_some_and(|rec| rec.normalized == normalized))
    }

    /// Removes the record with this normalized form. Links pointing at it are cleared;
    /// the caller still has to relink to reassign them.
    pub fn delete(&mut self, normalized: &str) -> bool {
        let bucket = bucket_for(normalized).index();
        let Some(position) = self.buckets[bucket]
            .iter()
            .position(|&id| self.get(id).is_some_and(|rec| rec.normalized == normalized))
        else {
            return false;
        };

        let id = self.buckets[bucket].remove(position);
        self.release(id);
        true
    }

    /// Removes later duplicates within every bucket, keeping the first occurrence in place.
    /// Returns how many records were dropped.
    pub fn dedup(&mut self) -> usize {
        let mut removed = Vec::new();
        for bucket in 0..BUCKET_COUNT {
            let mut seen = HashSet::new();
            let slots = &self.slots;
            self.buckets[bucket].retain(|&id| {
                let Some(rec) = slots[id].as_ref() else {
                    return false;
                };
                if seen.insert(rec.normalized.clone()) {
                    true
                } else {
                    removed.push(id);
                    false
                }
            });
        }
        for &id in &removed {
            self.release(id);
        }
        removed.len()
    }

    fn release(&mut self, id: WordId) {
        self.slots[id] = None;
        for rec in self.slots.iter_mut().flatten() {
            rec.links.forget(id);
        }
    }

    /// Records in total order.
    pub fn iter(&self) -> impl Iterator<Item = (WordId, &WordRecord)> + '_ {
        self.buckets
            .iter()
            .flatten()
            .filter_map(move |&id| self.get(id).map(|rec| (id, rec)))
    }
}

impl Default for WordStore {
    fn default() -> Self {
        Self::new()
    }
}
