// File: src/chain.rs
//! Text rendering of relationship chains and word listings.

use crate::core::store::WordStore;
use crate::core::types::{Bucket, Relation, WordId, WordRecord};
use std::collections::HashSet;
use std::fmt;

const ARROW: &str = " --> ";

/// Why a chain stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainEnd {
    /// The last word has no link of this kind.
    Absent,
    /// The next link points back into the chain.
    Cycle,
    /// The length bound was reached first.
    Truncated,
}

/// Words visited by following one relation from a starting record, start included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    pub words: Vec<String>,
    pub end: ChainEnd,
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for word in &self.words {
            write!(f, "{word}{ARROW}")?;
        }
        match self.end {
            ChainEnd::Absent => f.write_str("(end)"),
            ChainEnd::Cycle => f.write_str("(loop detected)"),
            ChainEnd::Truncated => f.write_str("(truncated)"),
        }
    }
}

/// Follows `relation` from `start` until the link is absent, a record repeats,
/// or `max_len` words have been collected.
pub fn follow(store: &WordStore, start: WordId, relation: Relation, max_len: usize) -> Chain {
    let mut words = Vec::new();
    let mut visited = HashSet::new();
    let mut current = Some(start);

    while let Some(id) = current {
        let Some(rec) = store.get(id) else {
            break;
        };
        if !visited.insert(id) {
            return Chain {
                words,
                end: ChainEnd::Cycle,
            };
        }
        if words.len() == max_len {
            return Chain {
                words,
                end: ChainEnd::Truncated,
            };
        }
        words.push(rec.normalized.clone());
        current = rec.links.get(relation);
    }

    Chain {
        words,
        end: ChainEnd::Absent,
    }
}

/// One chain for every record that has a link of this kind, in store order.
pub fn chains(store: &WordStore, relation: Relation, max_len: usize) -> Vec<Chain> {
    store
        .iter()
        .filter(|(_, rec)| rec.links.get(relation).is_some())
        .map(|(id, _)| follow(store, id, relation, max_len))
        .collect()
}

fn render(store: &WordStore, relation: Relation, max_len: usize) -> Vec<String> {
    chains(store, relation, max_len)
        .iter()
        .map(Chain::to_string)
        .collect()
}

pub fn subword_chains(store: &WordStore, max_len: usize) -> Vec<String> {
    render(store, Relation::SubwordOf, max_len)
}

pub fn add_one_char_chains(store: &WordStore, max_len: usize) -> Vec<String> {
    render(store, Relation::AddOneChar, max_len)
}

pub fn lexically_close_chains(store: &WordStore, max_len: usize) -> Vec<String> {
    render(store, Relation::LexicallyClose, max_len)
}

pub fn anagram_chains(store: &WordStore, max_len: usize) -> Vec<String> {
    render(store, Relation::Anagram, max_len)
}

fn target_name(store: &WordStore, target: Option<WordId>) -> Option<&str> {
    target
        .and_then(|id| store.get(id))
        .map(|rec| rec.normalized.as_str())
}

/// `word --> ed --> ing` for every word with at least one verb form.
pub fn verb_forms(store: &WordStore) -> Vec<String> {
    store
        .iter()
        .filter_map(|(_, rec)| {
            let ed = target_name(store, rec.links.ed_form);
            let ing = target_name(store, rec.links.ing_form);
            if ed.is_none() && ing.is_none() {
                return None;
            }
            Some(format!(
                "{}{ARROW}{}{ARROW}{}",
                rec.normalized,
                ed.unwrap_or("(no -ed form)"),
                ing.unwrap_or("(no -ing form)")
            ))
        })
        .collect()
}

/// Multi-line description of one record and its current links.
pub fn word_details(store: &WordStore, rec: &WordRecord) -> String {
    let yes_no = |b: bool| if b { "yes" } else { "no" };
    let mut out = String::from("=== Word Details ===\n");
    out.push_str(&format!("{:<27}{}\n", "Word:", rec.normalized));
    out.push_str(&format!("{:<27}{}\n", "Character count:", rec.char_count));
    out.push_str(&format!("{:<27}{}\n", "Consonant count:", rec.consonant_count));
    out.push_str(&format!("{:<27}{}\n", "Vowel count:", rec.vowel_count));
    out.push_str(&format!("{:<27}{}\n", "Syllable count:", rec.syllable_count));
    out.push_str(&format!("{:<27}{}\n", "Syllables:", rec.syllables.join(" / ")));
    out.push_str(&format!(
        "{:<27}{}\n",
        "Alphabetically ordered:",
        yes_no(rec.is_alphabetical)
    ));
    out.push_str(&format!("{:<27}{}\n", "Alphabetically sorted:", rec.sorted_key));
    out.push_str("\nRelationships:\n");
    for relation in Relation::ALL {
        let name = target_name(store, rec.links.get(relation)).unwrap_or("none");
        out.push_str(&format!("  {:<25}{}\n", format!("{}:", relation.label()), name));
    }
    out
}

/// `[A]: ant - apple` for each non-empty bucket.
pub fn word_lists(store: &WordStore) -> Vec<String> {
    Bucket::all()
        .filter(|&b| !store.bucket(b).is_empty())
        .map(|b| {
            let words: Vec<&str> = store
                .bucket(b)
                .iter()
                .filter_map(|&id| store.get(id))
                .map(|rec| rec.normalized.as_str())
                .collect();
            format!("[{}]: {}", b.label(), words.join(" - "))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linking::relink_all;

    fn two_cycle() -> (WordStore, WordId, WordId) {
        let mut store = WordStore::new();
        let a = store.insert("bat").unwrap();
        let b = store.insert("cat").unwrap();
        store.get_mut(a).unwrap().links.lexically_close = Some(b);
        store.get_mut(b).unwrap().links.lexically_close = Some(a);
        (store, a, b)
    }

    #[test]
    fn test_follow_detects_two_cycle() {
        let (store, a, _) = two_cycle();
        let chain = follow(&store, a, Relation::LexicallyClose, 100);
        assert_eq!(chain.words, vec!["bat", "cat"]);
        assert_eq!(chain.end, ChainEnd::Cycle);
        assert_eq!(chain.to_string(), "bat --> cat --> (loop detected)");
    }

    #[test]
    fn test_follow_self_loop() {
        let mut store = WordStore::new();
        let a = store.insert("echo").unwrap();
        store.get_mut(a).unwrap().links.anagram = Some(a);
        let chain = follow(&store, a, Relation::Anagram, 100);
        assert_eq!(chain.words, vec!["echo"]);
        assert_eq!(chain.end, ChainEnd::Cycle);
    }

    #[test]
    fn test_follow_respects_bound() {
        let (store, a, _) = two_cycle();
        let chain = follow(&store, a, Relation::LexicallyClose, 1);
        assert_eq!(chain.words, vec!["bat"]);
        assert_eq!(chain.end, ChainEnd::Truncated);
    }

    #[test]
    fn test_follow_to_absent_link() {
        let mut store = WordStore::new();
        for w in ["at", "cat", "cats"] {
            store.insert(w).unwrap();
        }
        relink_all(&mut store);
        let lines = subword_chains(&store, 100);
        assert_eq!(
            lines,
            vec!["at --> cat --> cats --> (end)", "cat --> cats --> (end)"]
        );
    }

    #[test]
    fn test_verb_forms_rendering() {
        let mut store = WordStore::new();
        for w in ["walk", "walked", "jump", "jumping"] {
            store.insert(w).unwrap();
        }
        relink_all(&mut store);
        assert_eq!(
            verb_forms(&store),
            vec![
                "jump --> (no -ed form) --> jumping",
                "walk --> walked --> (no -ing form)"
            ]
        );
    }

    #[test]
    fn test_word_details_lists_relationships() {
        let mut store = WordStore::new();
        store.insert("cat").unwrap();
        store.insert("cats").unwrap();
        relink_all(&mut store);
        let id = store.search("cat").unwrap();
        let text = word_details(&store, store.get(id).unwrap());
        assert!(text.contains("Word:                      cat"));
        assert!(text.contains("Subword of:              cats"));
        assert!(text.contains("Anagram:                 none"));
    }

    #[test]
    fn test_word_lists() {
        let mut store = WordStore::new();
        for w in ["apple", "ant", "bee"] {
            store.insert(w).unwrap();
        }
        assert_eq!(word_lists(&store), vec!["[A]: ant - apple", "[B]: bee"]);
    }
}
