// File: src/linking.rs
//! Whole-store relationship passes.
//!
//! Each pass clears its own field(s) on every record and recomputes them from
//! scratch, so running a pass twice gives the same result. Links go stale after
//! any insert or delete; call [`relink_all`] again.

use crate::core::morphology::{generate_ed_form, generate_ing_form};
use crate::core::store::WordStore;
use crate::core::types::{Relation, Statistics, WordId};
use crate::fuzzy::similarity::{are_lexically_close_chars, is_one_char_added_chars, is_subword_chars};

/// Read-only copy of the fields the passes compare, in total store order.
/// `chars` is split once here so the pairwise passes compare slices.
struct Entry {
    id: WordId,
    word: String,
    chars: Vec<char>,
    sorted_key: String,
}

fn snapshot(store: &WordStore) -> Vec<Entry> {
    store
        .iter()
        .map(|(id, rec)| Entry {
            id,
            word: rec.normalized.clone(),
            chars: rec.normalized.chars().collect(),
            sorted_key: rec.sorted_key.clone(),
        })
        .collect()
}

/// Writes one relation for every record and returns how many got a target.
fn apply(store: &mut WordStore, relation: Relation, assignments: Vec<(WordId, Option<WordId>)>) -> usize {
    let mut linked = 0;
    for (id, target) in assignments {
        if let Some(rec) = store.get_mut(id) {
            rec.links.set(relation, target);
            if target.is_some() {
                linked += 1;
            }
        }
    }
    linked
}

/// Points each word at the shortest other word containing it.
/// Equal lengths resolve to whichever comes first in store order.
pub fn link_subwords(store: &mut WordStore) -> usize {
    let entries = snapshot(store);
    let assignments = entries
        .iter()
        .map(|current| {
            let mut best: Option<&Entry> = None;
            for candidate in &entries {
                if candidate.id == current.id || !is_subword_chars(&current.chars, &candidate.chars) {
                    continue;
                }
                if best.map_or(true, |b| candidate.chars.len() < b.chars.len()) {
                    best = Some(candidate);
                }
            }
            (current.id, best.map(|b| b.id))
        })
        .collect();

    let linked = apply(store, Relation::SubwordOf, assignments);
    log::debug!("Subword pass linked {linked} words");
    linked
}

fn find_other<'a>(entries: &'a [Entry], form: &str, exclude: WordId) -> Option<&'a Entry> {
    entries.iter().find(|e| e.id != exclude && e.word == form)
}

/// Links each word to stored "-ing" and "-ed" forms. Both count separately.
pub fn link_verb_forms(store: &mut WordStore) -> usize {
    let entries = snapshot(store);
    let mut ing = Vec::with_capacity(entries.len());
    let mut ed = Vec::with_capacity(entries.len());

    for current in &entries {
        let ing_target = generate_ing_form(&current.word)
            .and_then(|form| find_other(&entries, &form, current.id))
            .map(|e| e.id);
        let ed_target = generate_ed_form(&current.word)
            .and_then(|form| find_other(&entries, &form, current.id))
            .map(|e| e.id);
        ing.push((current.id, ing_target));
        ed.push((current.id, ed_target));
    }

    let linked = apply(store, Relation::IngForm, ing) + apply(store, Relation::EdForm, ed);
    log::debug!("Verb form pass created {linked} links");
    linked
}

/// Links each word to the first word in store order that is it plus one character.
pub fn link_add_one_char(store: &mut WordStore) -> usize {
    let entries = snapshot(store);
    let assignments = entries
        .iter()
        .map(|current| {
            let target = entries
                .iter()
                .find(|c| c.id != current.id && is_one_char_added_chars(&current.chars, &c.chars))
                .map(|c| c.id);
            (current.id, target)
        })
        .collect();

    let linked = apply(store, Relation::AddOneChar, assignments);
    log::debug!("Add-one-char pass linked {linked} words");
    linked
}

/// For each word, the first later word in store order accepted by `matches`.
fn forward_links(entries: &[Entry], matches: impl Fn(&Entry, &Entry) -> bool) -> Vec<(WordId, Option<WordId>)> {
    entries
        .iter()
        .enumerate()
        .map(|(i, current)| {
            let target = entries[i + 1..]
                .iter()
                .find(|c| matches(current, *c))
                .map(|c| c.id);
            (current.id, target)
        })
        .collect()
}

/// Forward-only: a word never links to anything before it in store order.
pub fn link_lexically_close(store: &mut WordStore) -> usize {
    let entries = snapshot(store);
    let assignments = forward_links(&entries, |a, b| are_lexically_close_chars(&a.chars, &b.chars));
    let linked = apply(store, Relation::LexicallyClose, assignments);
    log::debug!("Lexically close pass linked {linked} words");
    linked
}

/// Forward-only, same as lexical closeness; matches share a sorted key but differ in spelling.
pub fn link_anagrams(store: &mut WordStore) -> usize {
    let entries = snapshot(store);
    let assignments = forward_links(&entries, |a, b| a.word != b.word && a.sorted_key == b.sorted_key);
    let linked = apply(store, Relation::Anagram, assignments);
    log::debug!("Anagram pass linked {linked} words");
    linked
}

/// Runs every pass and returns fresh statistics.
pub fn relink_all(store: &mut WordStore) -> Statistics {
    let stats = Statistics {
        word_count: store.len(),
        subword_links: link_subwords(store),
        verb_form_links: link_verb_forms(store),
        add_one_char_links: link_add_one_char(store),
        lexically_close_links: link_lexically_close(store),
        anagram_links: link_anagrams(store),
    };
    log::info!(
        "Relinked {} words: {} links in total",
        stats.word_count,
        stats.total_links()
    );
    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_of(words: &[&str]) -> WordStore {
        let mut store = WordStore::new();
        for w in words {
            store.insert(w).unwrap();
        }
        store
    }

    fn target(store: &WordStore, word: &str, relation: Relation) -> Option<String> {
        let id = store.search(word)?;
        let to = store.get(id)?.links.get(relation)?;
        store.get(to).map(|r| r.normalized.clone())
    }

    #[test]
    fn test_subword_picks_shortest_container() {
        let mut store = store_of(&["cat", "catalog", "cats", "scatter"]);
        assert_eq!(link_subwords(&mut store), 1);
        assert_eq!(target(&store, "cat", Relation::SubwordOf).as_deref(), Some("cats"));
        assert_eq!(target(&store, "cats", Relation::SubwordOf), None);
    }

    #[test]
    fn test_subword_tie_goes_to_first_in_order() {
        let mut store = store_of(&["at", "bat", "cat"]);
        link_subwords(&mut store);
        assert_eq!(target(&store, "at", Relation::SubwordOf).as_deref(), Some("bat"));
    }

    #[test]
    fn test_verb_forms_cross_buckets() {
        let mut store = store_of(&["go", "gone", "going", "be", "been"]);
        assert_eq!(link_verb_forms(&mut store), 3);
        assert_eq!(target(&store, "go", Relation::EdForm).as_deref(), Some("gone"));
        assert_eq!(target(&store, "go", Relation::IngForm).as_deref(), Some("going"));
        assert_eq!(target(&store, "be", Relation::EdForm).as_deref(), Some("been"));
    }

    #[test]
    fn test_unchanged_past_does_not_self_link() {
        let mut store = store_of(&["cut"]);
        assert_eq!(link_verb_forms(&mut store), 0);
        assert_eq!(target(&store, "cut", Relation::EdForm), None);
    }

    #[test]
    fn test_add_one_char() {
        let mut store = store_of(&["cat", "cast", "cats"]);
        assert_eq!(link_add_one_char(&mut store), 1);
        assert_eq!(target(&store, "cat", Relation::AddOneChar).as_deref(), Some("cats"));
    }

    #[test]
    fn test_lexically_close_links_forward_only() {
        let mut store = store_of(&["bat", "cat", "cot"]);
        assert_eq!(link_lexically_close(&mut store), 2);
        assert_eq!(target(&store, "bat", Relation::LexicallyClose).as_deref(), Some("cat"));
        assert_eq!(target(&store, "cat", Relation::LexicallyClose).as_deref(), Some("cot"));
        assert_eq!(target(&store, "cot", Relation::LexicallyClose), None);
    }

    #[test]
    fn test_anagrams() {
        let mut store = store_of(&["listen", "silent", "enlist"]);
        assert_eq!(link_anagrams(&mut store), 2);
        assert_eq!(target(&store, "enlist", Relation::Anagram).as_deref(), Some("listen"));
        assert_eq!(target(&store, "listen", Relation::Anagram).as_deref(), Some("silent"));
        assert_eq!(target(&store, "silent", Relation::Anagram), None);
    }

    #[test]
    fn test_pass_clears_previous_values() {
        let mut store = store_of(&["bat", "cat"]);
        link_lexically_close(&mut store);
        store.delete("cat");
        store.insert("dog").unwrap();
        assert_eq!(link_lexically_close(&mut store), 0);
        assert_eq!(target(&store, "bat", Relation::LexicallyClose), None);
    }

    #[test]
    fn test_relink_all_counts() {
        let mut store = store_of(&["run", "running", "runs"]);
        let stats = relink_all(&mut store);
        assert_eq!(stats.word_count, 3);
        assert_eq!(stats.verb_form_links, 1);
        assert_eq!(stats.add_one_char_links, 1);
        assert_eq!(stats.subword_links, 1);
    }

    #[test]
    fn test_passes_compare_by_char_not_byte() {
        let mut store = store_of(&["été", "étés", "éte"]);
        assert_eq!(link_add_one_char(&mut store), 1);
        assert_eq!(target(&store, "été", Relation::AddOneChar).as_deref(), Some("étés"));
        assert_eq!(link_subwords(&mut store), 1);
        assert_eq!(target(&store, "été", Relation::SubwordOf).as_deref(), Some("étés"));
        assert_eq!(link_lexically_close(&mut store), 1);
    }
}
