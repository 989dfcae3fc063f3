//! Editable, file-backed content bank.
//!
//! The store starts from the built-in catalogue or from a JSON bank file and
//! writes itself back after every mutation when it has a path.

use super::{defaults, BankError, ContentBank};
use crate::types::{ContentEntry, GameMode, QuestionPair, WordEntry};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Schema version for bank files
/// Version 1: words and questions in one document, word entries as objects
pub const BANK_SCHEMA_VERSION: u32 = 1;

fn default_schema_version() -> u32 {
    BANK_SCHEMA_VERSION
}

/// A word entry as found on disk. Older banks stored bare words.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum StoredWordEntry {
    Legacy(String),
    Entry(WordEntry),
}

impl StoredWordEntry {
    /// Upgrade to a full entry, deriving the hint for legacy words
    pub fn upgrade(self) -> WordEntry {
        match self {
            StoredWordEntry::Legacy(word) => WordEntry {
                hint: WordEntry::default_hint(&word),
                word,
            },
            StoredWordEntry::Entry(entry) => entry,
        }
    }
}

/// Serialized form of a bank
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankFile {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    /// Save timestamp (ISO8601)
    #[serde(default)]
    pub saved_at: Option<String>,
    #[serde(default)]
    pub words: BTreeMap<String, Vec<StoredWordEntry>>,
    #[serde(default)]
    pub questions: BTreeMap<String, Vec<QuestionPair>>,
}

impl BankFile {
    pub fn validate(&self) -> Result<(), BankError> {
        if self.schema_version > BANK_SCHEMA_VERSION {
            return Err(BankError::UnsupportedSchema {
                found: self.schema_version,
                supported: BANK_SCHEMA_VERSION,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct BankStore {
    words: BTreeMap<String, Vec<WordEntry>>,
    questions: BTreeMap<String, Vec<QuestionPair>>,
    path: Option<PathBuf>,
}

impl BankStore {
    /// In-memory store seeded with the built-in catalogue
    pub fn with_defaults() -> Self {
        Self {
            words: defaults::word_bank(),
            questions: defaults::question_bank(),
            path: None,
        }
    }

    /// In-memory store with no entries at all
    pub fn empty() -> Self {
        Self {
            words: BTreeMap::new(),
            questions: BTreeMap::new(),
            path: None,
        }
    }

    /// Open the bank at `path`, creating it from the defaults when missing
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, BankError> {
        let path = path.into();
        if path.exists() {
            let mut store = Self::load(&path)?;
            store.path = Some(path);
            tracing::info!(
                "Loaded bank with {} word and {} question categories",
                store.words.len(),
                store.questions.len()
            );
            Ok(store)
        } else {
            let store = Self {
                path: Some(path),
                ..Self::with_defaults()
            };
            store.save()?;
            tracing::info!("Created default bank file");
            Ok(store)
        }
    }

    /// Read a bank file without attaching it as the save target
    pub fn load(path: &Path) -> Result<Self, BankError> {
        let raw = std::fs::read_to_string(path).map_err(|source| BankError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, BankError> {
        let file: BankFile = serde_json::from_str(raw)?;
        file.validate()?;

        let words = file
            .words
            .into_iter()
            .map(|(category, entries)| {
                let entries = entries.into_iter().map(StoredWordEntry::upgrade).collect();
                (category, entries)
            })
            .collect();

        Ok(Self {
            words,
            questions: file.questions,
            path: None,
        })
    }

    pub fn to_file(&self) -> BankFile {
        BankFile {
            schema_version: BANK_SCHEMA_VERSION,
            saved_at: Some(chrono::Utc::now().to_rfc3339()),
            words: self
                .words
                .iter()
                .map(|(category, entries)| {
                    let entries = entries.iter().cloned().map(StoredWordEntry::Entry).collect();
                    (category.clone(), entries)
                })
                .collect(),
            questions: self.questions.clone(),
        }
    }

    pub fn to_json(&self) -> Result<String, BankError> {
        Ok(serde_json::to_string_pretty(&self.to_file())?)
    }

    /// Write the bank to its file; a no-op for in-memory stores
    pub fn save(&self) -> Result<(), BankError> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let json = self.to_json()?;
        std::fs::write(path, json).map_err(|source| BankError::Io {
            path: path.clone(),
            source,
        })?;
        tracing::debug!("Saved bank to {}", path.display());
        Ok(())
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn words(&self, category_id: &str) -> &[WordEntry] {
        self.words.get(category_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn questions(&self, category_id: &str) -> &[QuestionPair] {
        self.questions
            .get(category_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Append a word. Blank words are ignored; a blank hint becomes
    /// `Starts with "X"`. Returns whether an entry was added.
    pub fn add_word(&mut self, category_id: &str, word: &str, hint: &str) -> Result<bool, BankError> {
        let word = word.trim();
        if word.is_empty() {
            return Ok(false);
        }

        let hint = match hint.trim() {
            "" => WordEntry::default_hint(word),
            given => given.to_string(),
        };
        self.words
            .entry(category_id.to_string())
            .or_default()
            .push(WordEntry {
                word: word.to_string(),
                hint,
            });
        self.save()?;
        Ok(true)
    }

    /// Append a question pair; both questions are required
    pub fn add_question(&mut self, category_id: &str, a: &str, b: &str) -> Result<bool, BankError> {
        if a.trim().is_empty() || b.trim().is_empty() {
            return Ok(false);
        }

        self.questions
            .entry(category_id.to_string())
            .or_default()
            .push(QuestionPair::new(a, b));
        self.save()?;
        Ok(true)
    }

    /// Remove the entry at `index`. Out-of-range indices are ignored.
    pub fn remove_entry(
        &mut self,
        mode: GameMode,
        category_id: &str,
        index: usize,
    ) -> Result<bool, BankError> {
        let removed = match mode {
            GameMode::Word => remove_at(self.words.get_mut(category_id), index),
            GameMode::Question => remove_at(self.questions.get_mut(category_id), index),
        };
        if removed {
            self.save()?;
        }
        Ok(removed)
    }

    pub fn update_hint(
        &mut self,
        category_id: &str,
        index: usize,
        hint: &str,
    ) -> Result<bool, BankError> {
        let Some(entry) = self
            .words
            .get_mut(category_id)
            .and_then(|entries| entries.get_mut(index))
        else {
            return Ok(false);
        };

        entry.hint = hint.to_string();
        self.save()?;
        Ok(true)
    }
}

fn remove_at<T>(entries: Option<&mut Vec<T>>, index: usize) -> bool {
    match entries {
        Some(entries) if index < entries.len() => {
            entries.remove(index);
            true
        }
        _ => false,
    }
}

impl Default for BankStore {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl ContentBank for BankStore {
    fn resolve(&self, mode: GameMode, category_id: &str) -> Vec<ContentEntry> {
        match mode {
            GameMode::Word => self
                .words(category_id)
                .iter()
                .cloned()
                .map(ContentEntry::Word)
                .collect(),
            GameMode::Question => self
                .questions(category_id)
                .iter()
                .cloned()
                .map(ContentEntry::Question)
                .collect(),
        }
    }
}
