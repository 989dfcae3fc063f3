//! AI content generation with literal fallbacks.
//!
//! The `generate_*` methods and `clue_commentary` always return usable
//! content: provider failures, timeouts and unparseable responses are logged
//! and replaced by fixed values. The `try_*` variants surface the error for
//! callers that must not persist a fallback.

use super::*;
use serde::{Deserialize, Serialize};

/// Commentary used when generation fails outright
pub const COMMENTARY_FALLBACK: &str = "Who is blending in too well?";
/// Commentary used when a provider answers with empty text
pub const COMMENTARY_EMPTY_FALLBACK: &str = "Suspicion is in the air!";

const WORD_SYSTEM_PROMPT: &str = "You pick secret words for a social deduction party game. \
    Reply with a JSON object with the string fields \"word\" and \"category\" and nothing else.";

const QUESTION_SYSTEM_PROMPT: &str = "You write question pairs for a social deduction party game. \
    Question A is for the innocents. Question B is for the imposter: similar to A but slightly \
    broader or different, so the imposter's answer sounds almost right but slightly suspicious. \
    Example: A: \"What is your favorite planet?\" B: \"What is your favorite celestial body?\" \
    Reply with a JSON object with the string fields \"questionA\", \"questionB\" and \"category\" \
    and nothing else.";

const COMMENTARY_SYSTEM_PROMPT: &str = "You are the Game Master of a social deduction party game. \
    Give witty commentary of at most 15 words. Never reveal who the imposter is.";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeneratedWord {
    pub word: String,
    pub category: String,
}

impl GeneratedWord {
    pub fn fallback() -> Self {
        Self {
            word: "Elephant".to_string(),
            category: "Animals".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedQuestionPair {
    pub question_a: String,
    pub question_b: String,
    pub category: String,
}

impl GeneratedQuestionPair {
    pub fn fallback() -> Self {
        Self {
            question_a: "Favorite movie?".to_string(),
            question_b: "Favorite story?".to_string(),
            category: "Entertainment".to_string(),
        }
    }
}

/// Optional AI collaborator. Without a manager every call returns its fallback.
pub struct ContentGenerator {
    manager: Option<LlmManager>,
    timeout: Duration,
    max_tokens: u32,
}

impl ContentGenerator {
    pub fn new(manager: Option<LlmManager>, config: &LlmConfig) -> Self {
        Self {
            manager,
            timeout: config.default_timeout,
            max_tokens: config.default_max_tokens,
        }
    }

    /// Generator that always answers with fallbacks
    pub fn disabled() -> Self {
        Self::new(None, &LlmConfig::default())
    }

    pub fn is_enabled(&self) -> bool {
        self.manager.is_some()
    }

    async fn generate(&self, system: &str, prompt: String, json: bool) -> LlmResult<String> {
        let manager = self
            .manager
            .as_ref()
            .ok_or_else(|| LlmError::ConfigError("AI generation is disabled".to_string()))?;

        let request = GenerateRequest {
            system: system.to_string(),
            prompt,
            json,
            max_tokens: Some(self.max_tokens),
            timeout: self.timeout,
        };
        Ok(manager.generate_first(request).await?.text)
    }

    /// Generate a secret word, surfacing failures instead of falling back
    pub async fn try_generate_word(&self, category: &str) -> LlmResult<GeneratedWord> {
        let prompt = format!(
            "Generate a secret word for a social deduction game. The category is: {}. Return only JSON.",
            category
        );

        let text = self.generate(WORD_SYSTEM_PROMPT, prompt, true).await?;
        let word = parse_json::<GeneratedWord>(&text)?;
        if word.word.trim().is_empty() {
            return Err(LlmError::ParseError("empty word".to_string()));
        }
        Ok(GeneratedWord {
            word: word.word.trim().to_string(),
            category: word.category.trim().to_string(),
        })
    }

    /// Generate a secret word for a category
    pub async fn generate_word(&self, category: &str) -> GeneratedWord {
        self.try_generate_word(category).await.unwrap_or_else(|e| {
            tracing::warn!("Word generation failed: {}, using fallback", e);
            GeneratedWord::fallback()
        })
    }

    /// Generate a question pair, surfacing failures instead of falling back
    pub async fn try_generate_question_pair(
        &self,
        category: &str,
    ) -> LlmResult<GeneratedQuestionPair> {
        let prompt = format!(
            "Generate a question pair for a social deduction game. Category: {}. Return only JSON.",
            category
        );

        let text = self.generate(QUESTION_SYSTEM_PROMPT, prompt, true).await?;
        let pair = parse_json::<GeneratedQuestionPair>(&text)?;
        if pair.question_a.trim().is_empty() || pair.question_b.trim().is_empty() {
            return Err(LlmError::ParseError("blank question".to_string()));
        }
        Ok(pair)
    }

    /// Generate an innocent/imposter question pair for a category
    pub async fn generate_question_pair(&self, category: &str) -> GeneratedQuestionPair {
        self.try_generate_question_pair(category)
            .await
            .unwrap_or_else(|e| {
                tracing::warn!("Question generation failed: {}, using fallback", e);
                GeneratedQuestionPair::fallback()
            })
    }

    /// Short game-master commentary on the players' clues
    pub async fn clue_commentary(&self, clues: &[(String, String)], secret_word: &str) -> String {
        let clue_list = clues
            .iter()
            .map(|(name, clue)| format!("{}: {}", name, clue))
            .collect::<Vec<_>>()
            .join(", ");
        let prompt = format!(
            "Word: \"{}\". Clues: {}. Witty 15-word commentary without revealing the imposter.",
            secret_word, clue_list
        );

        match self.generate(COMMENTARY_SYSTEM_PROMPT, prompt, false).await {
            Ok(text) if text.trim().is_empty() => COMMENTARY_EMPTY_FALLBACK.to_string(),
            Ok(text) => text.trim().to_string(),
            Err(e) => {
                tracing::warn!("Commentary generation failed: {}, using fallback", e);
                COMMENTARY_FALLBACK.to_string()
            }
        }
    }
}

/// Parse a JSON object out of model output, tolerating Markdown code fences
fn parse_json<T: serde::de::DeserializeOwned>(text: &str) -> LlmResult<T> {
    let trimmed = text.trim();
    let body = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.trim_end().strip_suffix("```"))
        .unwrap_or(trimmed)
        .trim();

    serde_json::from_str(body).map_err(|e| LlmError::ParseError(e.to_string()))
}
