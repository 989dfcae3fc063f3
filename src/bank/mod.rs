//! Content banks: the category -> entries collaborator the round engine draws from.

pub mod defaults;
mod store;

pub use store::{BankFile, BankStore, StoredWordEntry, BANK_SCHEMA_VERSION};

use crate::types::{ContentEntry, GameMode};
use std::path::PathBuf;

/// Errors from loading or saving a persisted bank
#[derive(Debug, thiserror::Error)]
pub enum BankError {
    #[error("Failed to access bank file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Bank file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Bank schema version {found} is newer than supported version {supported}")]
    UnsupportedSchema { found: u32, supported: u32 },
}

/// Source of candidate entries for a round
pub trait ContentBank {
    /// Ordered entries for a category in the given mode. May be empty; callers
    /// substitute the fallback entry.
    fn resolve(&self, mode: GameMode, category_id: &str) -> Vec<ContentEntry>;
}

/// Resolve a category, substituting the single fallback entry when it is
/// unknown or empty. Never returns an empty list.
pub fn resolve_or_fallback(
    bank: &dyn ContentBank,
    mode: GameMode,
    category_id: &str,
) -> Vec<ContentEntry> {
    let entries = bank.resolve(mode, category_id);
    if !entries.is_empty() {
        return entries;
    }

    tracing::debug!(
        "Category {} has no {:?} entries, using fallback",
        category_id,
        mode
    );
    match mode {
        GameMode::Word => vec![ContentEntry::Word(defaults::fallback_word())],
        GameMode::Question => vec![ContentEntry::Question(defaults::fallback_question())],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{QuestionPair, WordEntry};

    struct EmptyBank;

    impl ContentBank for EmptyBank {
        fn resolve(&self, _mode: GameMode, _category_id: &str) -> Vec<ContentEntry> {
            Vec::new()
        }
    }

    #[test]
    fn test_fallback_word_for_empty_category() {
        let entries = resolve_or_fallback(&EmptyBank, GameMode::Word, "animals");
        assert_eq!(
            entries,
            vec![ContentEntry::Word(WordEntry::new("Apple", "A red fruit"))]
        );
    }

    #[test]
    fn test_fallback_pair_for_empty_category() {
        let entries = resolve_or_fallback(&EmptyBank, GameMode::Question, "daily_life");
        assert_eq!(
            entries,
            vec![ContentEntry::Question(QuestionPair::new("Fruit?", "Food?"))]
        );
    }

    #[test]
    fn test_known_category_passes_through() {
        let bank = BankStore::with_defaults();
        let entries = resolve_or_fallback(&bank, GameMode::Word, "food");
        assert_eq!(entries.len(), 5);
        assert_eq!(
            entries[0],
            ContentEntry::Word(WordEntry::new("Sushi", "Raw fish and rice"))
        );
    }
}
