//! What the current revealer is allowed to see.

use super::RoundEngine;
use crate::bank::ContentBank;
use crate::types::{GamePhase, GameSettings, PlayerRole, RoundContent};
use serde::{Deserialize, Serialize};

/// Private content for one player during REVEAL
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Disclosure {
    SecretWord {
        word: String,
    },
    /// Role notice in place of the word, with optional extras
    Imposter {
        category: Option<String>,
        hint: Option<String>,
    },
    Question {
        question: String,
    },
}

/// Disclosure policy: a pure function of content, role and settings
pub fn disclose(
    content: &RoundContent,
    category: &str,
    role: PlayerRole,
    settings: GameSettings,
) -> Disclosure {
    match (content, role) {
        (RoundContent::Word { secret_word, .. }, PlayerRole::Innocent) => Disclosure::SecretWord {
            word: secret_word.clone(),
        },
        (RoundContent::Word { hint, .. }, PlayerRole::Imposter) => Disclosure::Imposter {
            category: settings
                .show_category_to_imposter
                .then(|| category.to_string()),
            hint: settings.show_hint_to_imposter.then(|| hint.clone()),
        },
        (RoundContent::Question { question_a, .. }, PlayerRole::Innocent) => Disclosure::Question {
            question: question_a.clone(),
        },
        (RoundContent::Question { question_b, .. }, PlayerRole::Imposter) => Disclosure::Question {
            question: question_b.clone(),
        },
    }
}

impl<B: ContentBank> RoundEngine<B> {
    /// Content for the current revealer, only while REVEAL is un-concealed
    pub fn current_disclosure(&self) -> Option<Disclosure> {
        let state = self.state();
        if state.phase != GamePhase::Reveal || !state.content_revealed {
            return None;
        }

        let round = state.round.as_ref()?;
        let player = state.revealing_player()?;
        Some(disclose(
            &round.content,
            &round.category,
            player.role,
            round.settings,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word() -> RoundContent {
        RoundContent::Word {
            secret_word: "Penguin".to_string(),
            hint: "Flightless bird in tuxedos".to_string(),
        }
    }

    fn question() -> RoundContent {
        RoundContent::Question {
            question_a: "Favorite planet?".to_string(),
            question_b: "Favorite celestial body?".to_string(),
            hint: "Relates to Future & Tech".to_string(),
        }
    }

    fn settings(show_category: bool, show_hint: bool) -> GameSettings {
        GameSettings {
            show_category_to_imposter: show_category,
            show_hint_to_imposter: show_hint,
        }
    }

    #[test]
    fn test_innocent_sees_secret_word() {
        let shown = disclose(&word(), "Animals", PlayerRole::Innocent, settings(true, true));
        assert_eq!(
            shown,
            Disclosure::SecretWord {
                word: "Penguin".to_string()
            }
        );
    }

    #[test]
    fn test_imposter_never_sees_word() {
        let shown = disclose(&word(), "Animals", PlayerRole::Imposter, settings(false, false));
        assert_eq!(
            shown,
            Disclosure::Imposter {
                category: None,
                hint: None
            }
        );
    }

    #[test]
    fn test_imposter_extras_follow_each_toggle() {
        let category_only = disclose(&word(), "Animals", PlayerRole::Imposter, settings(true, false));
        assert_eq!(
            category_only,
            Disclosure::Imposter {
                category: Some("Animals".to_string()),
                hint: None
            }
        );

        let hint_only = disclose(&word(), "Animals", PlayerRole::Imposter, settings(false, true));
        assert_eq!(
            hint_only,
            Disclosure::Imposter {
                category: None,
                hint: Some("Flightless bird in tuxedos".to_string())
            }
        );
    }

    #[test]
    fn test_question_mode_shows_role_question_only() {
        let innocent = disclose(&question(), "Future & Tech", PlayerRole::Innocent, settings(true, true));
        let imposter = disclose(&question(), "Future & Tech", PlayerRole::Imposter, settings(true, true));

        assert_eq!(
            innocent,
            Disclosure::Question {
                question: "Favorite planet?".to_string()
            }
        );
        assert_eq!(
            imposter,
            Disclosure::Question {
                question: "Favorite celestial body?".to_string()
            }
        );
    }
}
