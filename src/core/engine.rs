use crate::chain;
use crate::config::LexiconConfig;
use crate::core::analysis::normalize;
use crate::core::store::WordStore;
use crate::core::types::{Statistics, WordId, WordRecord};
use crate::error::{LexiconError, Result};
use crate::linking;
use crate::persistence::{self, LoadReport};

// The engine owns the store and keeps the statistics of the last relink.
// Every mutation relinks before returning, so links are never observed stale.
pub struct LexiconEngine {
    store: WordStore,
    stats: Statistics,
    config: LexiconConfig,
}

impl LexiconEngine {
    pub fn new(config: LexiconConfig) -> Self {
        Self {
            store: WordStore::with_max_word_length(config.max_word_length),
            stats: Statistics::default(),
            config,
        }
    }

    /// Loads the configured word file and builds every relationship.
    pub fn from_file(config: LexiconConfig) -> Result<(Self, LoadReport)> {
        let mut engine = Self::new(config);
        let report = persistence::load_words(&mut engine.store, &engine.config.word_file)?;
        engine.relink_all();
        Ok((engine, report))
    }

    pub fn config(&self) -> &LexiconConfig {
        &self.config
    }

    pub fn store(&self) -> &WordStore {
        &self.store
    }

    pub fn statistics(&self) -> Statistics {
        self.stats
    }

    pub fn relink_all(&mut self) -> Statistics {
        self.stats = linking::relink_all(&mut self.store);
        self.stats
    }

    /// Inserts a raw word (separators allowed) and relinks.
    pub fn insert(&mut self, word: &str) -> Result<WordId> {
        let id = self.store.insert(word)?;
        self.relink_all();
        Ok(id)
    }

    /// Deletes by word (separators ignored) and relinks.
    pub fn delete(&mut self, word: &str) -> Result<()> {
        let normalized = normalize(word);
        if !self.store.delete(&normalized) {
            return Err(LexiconError::NotFound(normalized));
        }
        self.relink_all();
        Ok(())
    }

    pub fn search(&self, word: &str) -> Option<&WordRecord> {
        self.store
            .search(&normalize(word))
            .and_then(|id| self.store.get(id))
    }

    pub fn word_details(&self, word: &str) -> Result<String> {
        self.search(word)
            .map(|rec| chain::word_details(&self.store, rec))
            .ok_or_else(|| LexiconError::NotFound(normalize(word)))
    }

    pub fn word_lists(&self) -> Vec<String> {
        chain::word_lists(&self.store)
    }

    pub fn subword_chains(&self) -> Vec<String> {
        chain::subword_chains(&self.store, self.config.max_chain_length)
    }

    pub fn verb_forms(&self) -> Vec<String> {
        chain::verb_forms(&self.store)
    }

    pub fn add_one_char_chains(&self) -> Vec<String> {
        chain::add_one_char_chains(&self.store, self.config.max_chain_length)
    }

    pub fn lexically_close_chains(&self) -> Vec<String> {
        chain::lexically_close_chains(&self.store, self.config.max_chain_length)
    }

    pub fn anagram_chains(&self) -> Vec<String> {
        chain::anagram_chains(&self.store, self.config.max_chain_length)
    }

    /// Appends one raw word to the configured file.
    pub fn append_to_file(&self, word: &str) -> Result<()> {
        persistence::append_word(&self.config.word_file, word)
    }

    /// Rewrites the configured file from the store.
    pub fn save_all(&self) -> Result<()> {
        persistence::save_all(&self.store, &self.config.word_file)
    }
}

impl Default for LexiconEngine {
    fn default() -> Self {
        Self::new(LexiconConfig::default())
    }
}
