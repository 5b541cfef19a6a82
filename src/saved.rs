//! Saved-word list with optional JSON persistence.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::WordGroupsError;
use crate::types::Word;

/// Insertion-ordered saved-word list; adding a word twice is a no-op.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedWords {
    words: Vec<Word>,
}

impl SavedWords {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a word; returns whether it was newly inserted.
    pub fn add(&mut self, word: impl Into<Word>) -> bool {
        let word = word.into();
        if self.words.contains(&word) {
            return false;
        }
        self.words.push(word);
        true
    }

    /// Whether `word` has been saved.
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|saved| saved == word)
    }

    /// Saved words in insertion order.
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of saved words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Comma-separated rendering used by the saved-word display.
    pub fn joined(&self) -> String {
        self.words.join(", ")
    }

    /// Persist the list as JSON at `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), WordGroupsError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let body = serde_json::to_string_pretty(self).map_err(|err| {
            WordGroupsError::SavedWordStore(format!("failed encoding saved words: {err}"))
        })?;
        fs::write(path, body)?;
        Ok(())
    }

    /// Load a previously persisted list; an absent file loads as empty.
    pub fn load_from(path: &Path) -> Result<Self, WordGroupsError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let body = fs::read_to_string(path)?;
        serde_json::from_str(&body).map_err(|err| {
            WordGroupsError::SavedWordStore(format!("failed decoding saved words: {err}"))
        })
    }
}
