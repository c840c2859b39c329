//! Boundary to the word-frequency store.
//!
//! Storage and ranking live elsewhere. This module only defines what the
//! store must accept and how bulk learning feeds it: each candidate line is
//! trimmed, validated with [`is_valid_devanagari_word`], and added. A bulk
//! learn is one transaction; any failure rolls it back.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::{debug, debug_span, warn};

use crate::validate::is_valid_devanagari_word;

/// A word-frequency store.
pub trait WordStore {
    type Error: std::error::Error + 'static;

    /// Insert at frequency 1, or bump the frequency of an existing word.
    fn add_word(&mut self, word: &str) -> Result<(), Self::Error>;

    fn begin(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn commit(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn rollback(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LearnError<E: std::error::Error + 'static> {
    #[error("failed to read word list: {0}")]
    Io(#[from] io::Error),
    #[error("word store error: {0}")]
    Store(#[source] E),
}

const LINE_TRIM: &[char] = &[' ', '\t', '\r', '\n'];

/// Learn every valid word of `reader`, one candidate per line. Returns the
/// number of words added.
pub fn learn_from_reader<S: WordStore, R: BufRead>(
    store: &mut S,
    reader: R,
) -> Result<usize, LearnError<S::Error>> {
    let _span = debug_span!("learn").entered();
    store.begin().map_err(LearnError::Store)?;

    match learn_lines(store, reader) {
        Ok(count) => {
            store.commit().map_err(LearnError::Store)?;
            debug!(count, "learned words");
            Ok(count)
        }
        Err(e) => {
            if let Err(rb) = store.rollback() {
                warn!(error = %rb, "rollback failed");
            }
            Err(e)
        }
    }
}

fn learn_lines<S: WordStore, R: BufRead>(
    store: &mut S,
    reader: R,
) -> Result<usize, LearnError<S::Error>> {
    let mut count = 0;
    let mut rejected = 0usize;
    for line in reader.lines() {
        let line = line?;
        let word = line.trim_matches(LINE_TRIM);
        if word.is_empty() {
            continue;
        }
        if !is_valid_devanagari_word(word) {
            rejected += 1;
            continue;
        }
        store.add_word(word).map_err(LearnError::Store)?;
        count += 1;
    }
    debug!(rejected, "skipped invalid lines");
    Ok(count)
}

/// [`learn_from_reader`] over a file.
pub fn learn_from_file<S: WordStore>(
    store: &mut S,
    path: &Path,
) -> Result<usize, LearnError<S::Error>> {
    let file = File::open(path)?;
    learn_from_reader(store, BufReader::new(file))
}
