// Loading, mutating and saving through the engine facade.

use lexigraph_core::{LexiconConfig, LexiconEngine, LexiconError};
use std::fs;
use tempfile::tempdir;

fn engine_with(contents: &str) -> (tempfile::TempDir, LexiconEngine) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("words.txt");
    fs::write(&path, contents).unwrap();
    let (engine, _) = LexiconEngine::from_file(LexiconConfig::with_word_file(&path)).unwrap();
    (dir, engine)
}

#[test]
fn load_builds_statistics() {
    let (_dir, engine) = engine_with("run running runs\nlisten silent\nrun\n");
    let stats = engine.statistics();
    assert_eq!(stats.word_count, 5);
    assert_eq!(stats.verb_form_links, 1);
    assert_eq!(stats.anagram_links, 1);
}

#[test]
fn missing_file_fails_load() {
    let dir = tempdir().unwrap();
    let config = LexiconConfig::with_word_file(dir.path().join("absent.txt"));
    assert!(matches!(LexiconEngine::from_file(config), Err(LexiconError::Io(_))));
}

#[test]
fn insert_appends_and_delete_rewrites() {
    let (dir, mut engine) = engine_with("cat\nbat");
    let path = dir.path().join("words.txt");

    engine.insert("hat").unwrap();
    engine.append_to_file("hat").unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "cat\nbat\nhat\n");
    assert_eq!(engine.statistics().lexically_close_links, 2);

    engine.delete("cat").unwrap();
    engine.save_all().unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "bat\nhat\n");
    assert_eq!(engine.statistics().word_count, 2);
    assert_eq!(engine.statistics().lexically_close_links, 1);
}

#[test]
fn duplicate_insert_leaves_store_unchanged() {
    let (_dir, mut engine) = engine_with("wa/ter\n");
    let before = engine.statistics();
    assert!(matches!(engine.insert("water"), Err(LexiconError::DuplicateWord(_))));
    assert_eq!(engine.statistics(), before);
    assert_eq!(engine.store().len(), 1);
}

#[test]
fn chain_renderers_cover_every_relation() {
    let (_dir, engine) = engine_with("at cat cats walk walked bat listen silent");
    assert!(!engine.subword_chains().is_empty());
    assert_eq!(engine.verb_forms(), vec!["walk --> walked --> (no -ing form)"]);
    assert_eq!(
        engine.add_one_char_chains(),
        vec!["at --> bat --> (end)", "cat --> cats --> (end)"]
    );
    assert_eq!(engine.lexically_close_chains(), vec!["bat --> cat --> (end)"]);
    assert_eq!(engine.anagram_chains(), vec!["listen --> silent --> (end)"]);
}
