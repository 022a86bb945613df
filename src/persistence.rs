// File: src/persistence.rs
use crate::core::store::WordStore;
use crate::error::Result;
use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Read, Seek, SeekFrom, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Outcome of reading a word list into a store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Tokens that passed validation, duplicates included.
    pub accepted: usize,
    pub skipped: usize,
    pub duplicates_removed: usize,
}

/// Reads whitespace-delimited tokens into `store`, skipping malformed ones,
/// then drops later duplicates. A missing file is an error.
pub fn load_words(store: &mut WordStore, path: &Path) -> Result<LoadReport> {
    let text = fs::read_to_string(path)?;
    let mut report = LoadReport::default();

    for token in text.split_whitespace() {
        match store.push(token) {
            Ok(_) => report.accepted += 1,
            Err(e) => {
                log::warn!("Skipping token: {e}");
                report.skipped += 1;
            }
        }
    }

    report.duplicates_removed = store.dedup();
    if report.accepted == 0 {
        log::warn!("No words loaded from {}", path.display());
    } else {
        log::info!(
            "Loaded {} words from {} ({} skipped, {} duplicates removed)",
            report.accepted,
            path.display(),
            report.skipped,
            report.duplicates_removed
        );
    }
    Ok(report)
}

/// Appends one raw word as its own line, adding a newline first if the file lacks a trailing one.
pub fn append_word(path: &Path, word: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .read(true)
        .append(true)
        .create(true)
        .open(path)?;

    if file.metadata()?.len() > 0 {
        let mut last = [0u8; 1];
        file.seek(SeekFrom::End(-1))?;
        file.read_exact(&mut last)?;
        if last[0] != b'\n' {
            file.write_all(b"\n")?;
        }
    }
    writeln!(file, "{word}")?;
    Ok(())
}

/// Rewrites the whole file with every stored original form, one per line, in store order.
/// The new contents land atomically through a temporary file in the same directory.
pub fn save_all(store: &WordStore, path: &Path) -> Result<()> {
    let parent_dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        for (_, rec) in store.iter() {
            writeln!(writer, "{}", rec.original)?;
        }
        writer.flush()?;
    }

    temp_file.persist(path).map_err(std::io::Error::from)?;
    log::debug!("Saved {} words to {}", store.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LexiconError;
    use tempfile::tempdir;

    #[test]
    fn test_load_skips_bad_tokens_and_dedups() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("words.txt");
        fs::write(&path, "cat dog\n c4t ca//t\ncat\twa/ter\n").unwrap();

        let mut store = WordStore::new();
        let report = load_words(&mut store, &path).unwrap();
        assert_eq!(report.accepted, 4);
        assert_eq!(report.skipped, 2);
        assert_eq!(report.duplicates_removed, 1);
        assert_eq!(store.len(), 3);
        assert!(store.search("water").is_some());
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let dir = tempdir().unwrap();
        let mut store = WordStore::new();
        let err = load_words(&mut store, &dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, LexiconError::Io(_)));
    }

    #[test]
    fn test_append_adds_missing_newline() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("words.txt");
        fs::write(&path, "cat").unwrap();
        append_word(&path, "do/g").unwrap();
        append_word(&path, "bird").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "cat\ndo/g\nbird\n");
    }

    #[test]
    fn test_append_creates_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("fresh.txt");
        append_word(&path, "cat").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "cat\n");
    }

    #[test]
    fn test_save_all_writes_store_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("words.txt");
        let mut store = WordStore::new();
        for w in ["zoo", "ap/ple", "ant"] {
            store.insert(w).unwrap();
        }
        save_all(&store, &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "ant\nap/ple\nzoo\n");
    }
}
