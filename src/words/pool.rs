//! The word pool: every candidate word plus the ones already served.
//!
//! ## Loading
//!
//! A word source is plain UTF-8 text, one word per line. Lines are trimmed
//! and upper-cased; blank lines are dropped. Duplicates are kept, so the
//! pool always has one entry per non-blank line.
//!
//! ## Drawing
//!
//! `draw` picks among `words - used` by membership and never mutates the
//! pool; the caller records the result with `mark_used`. All copies of a
//! duplicated word retire together once it has been served.

use im::Vector;
use rustc_hash::FxHashSet;
use std::path::Path;
use tracing::{debug, instrument, warn};

use super::picker::WordPicker;
use crate::error::EngineError;

/// Normalize one raw line into a word, or `None` for a blank line.
///
/// ```
/// use alias_engine::words::normalize_word;
///
/// assert_eq!(normalize_word("  кот \n"), Some("КОТ".to_string()));
/// assert_eq!(normalize_word("   "), None);
/// ```
#[must_use]
pub fn normalize_word(line: &str) -> Option<String> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_uppercase())
    }
}

/// Candidate words for one game and the set already drawn.
///
/// Invariant: `used` only ever holds words from `words`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordPool {
    /// Normalized words in source order. Immutable after load.
    words: Vector<String>,
    /// Words served during the current game.
    used: FxHashSet<String>,
}

impl WordPool {
    /// Load a pool from raw source bytes.
    ///
    /// Fails with `InvalidEncoding` if the bytes are not UTF-8 and with
    /// `EmptySource` if no non-blank line remains.
    #[instrument(skip(source), fields(bytes = source.len()))]
    pub fn load(source: &[u8]) -> Result<Self, EngineError> {
        let text = std::str::from_utf8(source).map_err(|e| {
            warn!(valid_up_to = e.valid_up_to(), "Word source is not UTF-8");
            EngineError::InvalidEncoding {
                valid_up_to: e.valid_up_to(),
            }
        })?;
        Self::from_lines(text.lines())
    }

    /// Build a pool from already-decoded lines.
    pub fn from_lines<I, S>(lines: I) -> Result<Self, EngineError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vector<String> = lines
            .into_iter()
            .filter_map(|line| normalize_word(line.as_ref()))
            .collect();

        if words.is_empty() {
            return Err(EngineError::EmptySource);
        }

        debug!(count = words.len(), "Word pool loaded");
        Ok(Self {
            words,
            used: FxHashSet::default(),
        })
    }

    /// Read and load a word file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| {
            warn!(error = %e, "Word file unavailable");
            EngineError::SourceUnavailable {
                path: path.display().to_string(),
                reason: e.to_string(),
            }
        })?;
        Self::load(&bytes)
    }

    /// All words, in source order.
    #[must_use]
    pub fn words(&self) -> &Vector<String> {
        &self.words
    }

    /// Words served so far.
    #[must_use]
    pub fn used(&self) -> &FxHashSet<String> {
        &self.used
    }

    /// Number of words, counting duplicates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True only for a pool with no words, which `load` never produces.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of entries that can still be drawn.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.available().count()
    }

    /// True once every word has been used.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.available().next().is_none()
    }

    fn available(&self) -> impl Iterator<Item = &String> {
        self.words.iter().filter(move |w| !self.used.contains(*w))
    }

    /// Choose an unused word.
    ///
    /// Does not record the draw; call [`WordPool::mark_used`] with the result.
    pub fn draw(&self, picker: &mut impl WordPicker) -> Result<String, EngineError> {
        let available: Vec<&String> = self.available().collect();
        if available.is_empty() {
            return Err(EngineError::PoolExhausted);
        }

        let index = picker.pick(available.len());
        let word = available.get(index).ok_or_else(|| {
            EngineError::internal(format!(
                "picker returned index {} for {} available words",
                index,
                available.len()
            ))
        })?;

        debug!(word = %word, remaining = available.len() - 1, "Drew word");
        Ok((*word).clone())
    }

    /// Record a served word.
    ///
    /// Returns false if the word is not in the pool or was already used.
    pub fn mark_used(&mut self, word: &str) -> bool {
        if !self.words.iter().any(|w| w == word) {
            return false;
        }
        self.used.insert(word.to_string())
    }
}
