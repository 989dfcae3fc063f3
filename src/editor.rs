//! Lobby bank editor
//!
//! Lists and edits the content bank for the category selected in the lobby.
//! Indices are 1-based, as shown by `bank list`.

use crate::bank::{BankError, BankStore};
use crate::llm::ContentGenerator;
use crate::types::{GameMode, RoundConfig};

/// A bank edit typed in the lobby
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BankCommand {
    List,
    /// WORD mode: word and optional hint. QUESTION mode: question A and B.
    Add {
        first: String,
        second: Option<String>,
    },
    Remove {
        index: usize,
    },
    Hint {
        index: usize,
        hint: String,
    },
}

/// Entries of the selected category, numbered from 1
pub fn list_entries(bank: &BankStore, config: &RoundConfig) -> String {
    let id = &config.category.id;
    let lines: Vec<String> = match config.mode {
        GameMode::Word => bank
            .words(id)
            .iter()
            .enumerate()
            .map(|(i, e)| format!("  {}. {} ({})", i + 1, e.word, e.hint))
            .collect(),
        GameMode::Question => bank
            .questions(id)
            .iter()
            .enumerate()
            .map(|(i, q)| format!("  {}. A: {} | B: {}", i + 1, q.a, q.b))
            .collect(),
    };

    if lines.is_empty() {
        format!("{} has no entries yet.", config.category.name)
    } else {
        format!("{}:\n{}", config.category.name, lines.join("\n"))
    }
}

/// Apply an edit to the selected category and describe the outcome
pub fn apply_bank_command(
    bank: &mut BankStore,
    config: &RoundConfig,
    command: &BankCommand,
) -> Result<String, BankError> {
    let id = &config.category.id;
    let name = &config.category.name;

    match command {
        BankCommand::List => Ok(list_entries(bank, config)),
        BankCommand::Add { first, second } => {
            let added = match config.mode {
                GameMode::Word => bank.add_word(id, first, second.as_deref().unwrap_or(""))?,
                GameMode::Question => match second {
                    Some(b) => bank.add_question(id, first, b)?,
                    None => return Ok("Usage: bank add <question A> | <question B>".to_string()),
                },
            };
            if added {
                tracing::info!("Added {:?} entry to bank category {}", config.mode, id);
                Ok(format!("Added to {}.", name))
            } else {
                Ok("Nothing added: entries cannot be blank.".to_string())
            }
        }
        BankCommand::Remove { index } => {
            let removed = match index.checked_sub(1) {
                Some(idx) => bank.remove_entry(config.mode, id, idx)?,
                None => false,
            };
            if removed {
                tracing::info!("Removed entry {} from bank category {}", index, id);
                Ok(format!("Removed entry {} from {}.", index, name))
            } else {
                Ok(format!("{} has no entry {}.", name, index))
            }
        }
        BankCommand::Hint { index, hint } => {
            if config.mode == GameMode::Question {
                return Ok("Question pairs have no hints.".to_string());
            }
            let updated = match index.checked_sub(1) {
                Some(idx) => bank.update_hint(id, idx, hint.trim())?,
                None => false,
            };
            if updated {
                Ok(format!("Updated the hint of entry {}.", index))
            } else {
                Ok(format!("{} has no entry {}.", name, index))
            }
        }
    }
}

/// Ask the generator for a new entry in the selected category.
///
/// Only real generations are saved; when generation fails the bank is left
/// untouched.
pub async fn generate_entry(
    bank: &mut BankStore,
    config: &RoundConfig,
    generator: &ContentGenerator,
) -> Result<String, BankError> {
    let id = &config.category.id;
    let name = &config.category.name;

    let added = match config.mode {
        GameMode::Word => match generator.try_generate_word(name).await {
            Ok(generated) => bank.add_word(id, &generated.word, "")?,
            Err(e) => {
                tracing::warn!("Word generation failed: {}, nothing saved", e);
                return Ok("Generation failed, the bank was not changed.".to_string());
            }
        },
        GameMode::Question => match generator.try_generate_question_pair(name).await {
            Ok(generated) => {
                bank.add_question(id, &generated.question_a, &generated.question_b)?
            }
            Err(e) => {
                tracing::warn!("Question generation failed: {}, nothing saved", e);
                return Ok("Generation failed, the bank was not changed.".to_string());
            }
        },
    };

    if added {
        Ok(format!("Added a generated entry to {}.", name))
    } else {
        Ok("Generation returned nothing usable, the bank was not changed.".to_string())
    }
}
