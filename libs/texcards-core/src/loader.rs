//! Loading lecture files from a directory.
//!
//! Lecture files are named `lecture_<n>.tex` and are read in file-name order.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::deck::Deck;
use crate::error::{LoadError, Result};
use crate::segmenter::segment_bytes;
use crate::types::{Flashcard, RawCard};

static RE_LECTURE_FILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^lecture_\d+\.tex$").expect("valid lecture file regex"));

/// Whether a file name follows the `lecture_<n>.tex` convention.
pub fn is_lecture_file(name: &str) -> bool {
    RE_LECTURE_FILE.is_match(name)
}

/// Lecture files in `dir`, sorted by file name.
///
/// A missing directory yields an empty list.
pub fn list_lecture_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::warn!(dir = %dir.display(), "lectures directory not found");
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(LoadError::FileAccess {
                path: dir.to_path_buf(),
                source,
            })
        }
    };

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| LoadError::FileAccess {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        let matches = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(is_lecture_file);

        if matches && path.is_file() {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Read and segment one lecture file.
pub fn load_file(path: &Path) -> Result<Vec<RawCard>> {
    let bytes = fs::read(path).map_err(|source| LoadError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    segment_bytes(&bytes).map_err(|source| LoadError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Load raw flashcards from every lecture file in `dir`, in file-name order.
pub fn load_all(dir: &Path) -> Result<Vec<Flashcard>> {
    let mut cards = Vec::new();

    for path in list_lecture_files(dir)? {
        let source = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let raw_cards = load_file(&path)?;
        tracing::debug!(file = %source, cards = raw_cards.len(), "segmented lecture file");

        cards.extend(raw_cards.into_iter().map(|card| Flashcard::new(card, source.as_str())));
    }

    Ok(cards)
}

/// Load, transcode and snapshot every lecture in `dir`.
///
/// Fails with [`LoadError::NothingToServe`] when no cards were found.
pub fn load_deck(dir: &Path) -> Result<Deck> {
    let cards = load_all(dir)?;
    let deck = Deck::new(cards.iter().map(Flashcard::transcoded).collect()).ok_or_else(|| {
        LoadError::NothingToServe {
            dir: dir.to_path_buf(),
        }
    })?;

    tracing::info!(
        cards = deck.len(),
        lectures = deck.lectures().len(),
        "loaded flashcards"
    );
    Ok(deck)
}
