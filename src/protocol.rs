use crate::bank::defaults;
use crate::state::Disclosure;
use crate::types::*;
use serde::{Deserialize, Serialize};

/// User intents forwarded by the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "t", rename_all = "snake_case")]
pub enum Intent {
    // Lobby
    AddPlayer,
    RemovePlayer {
        player_id: PlayerId,
    },
    RenamePlayer {
        player_id: PlayerId,
        name: String,
    },
    SetMode {
        mode: GameMode,
    },
    SelectCategory {
        category_id: CategoryId,
    },
    UpdateSettings {
        settings: GameSettings,
    },
    StartGame,
    // Reveal
    Reveal,
    RevealDone,
    // Answering
    SubmitAnswer {
        text: String,
    },
    // Word mode landing
    RevealResults,
    // Question mode: real question shown, move to the answers
    StartRound,
    Reset,
}

/// Render model for the current phase, built from a snapshot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "t", rename_all = "snake_case")]
pub enum View {
    Lobby {
        players: Vec<PlayerInfo>,
        mode: GameMode,
        category: Category,
        categories: Vec<Category>,
        settings: GameSettings,
        can_add: bool,
        can_remove: bool,
    },
    Reveal {
        player: PlayerInfo,
        /// 0-based position of the revealer
        index: usize,
        total: usize,
        mode: GameMode,
        /// `None` until the holder explicitly reveals
        disclosure: Option<Disclosure>,
    },
    Answering {
        player: PlayerInfo,
        index: usize,
        total: usize,
    },
    VotingLanding {
        starting_player: PlayerInfo,
    },
    QuestionRevealActual {
        question: String,
    },
    AnswersSummary {
        question: String,
        answers: Vec<AnswerInfo>,
    },
    Result {
        imposter: Option<PlayerInfo>,
        secret_word: String,
        category: String,
    },
}

/// Public player info: never carries a role
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerInfo {
    pub id: PlayerId,
    pub name: String,
}

impl From<&Player> for PlayerInfo {
    fn from(p: &Player) -> Self {
        Self {
            id: p.id,
            name: p.name.clone(),
        }
    }
}

/// One row of the answers summary. The imposter flag is for the final
/// "show imposter" toggle, after everyone has answered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnswerInfo {
    pub player: PlayerInfo,
    pub answer: Option<String>,
    pub is_imposter: bool,
}

impl View {
    /// Build the view for a snapshot. `disclosure` is the engine's gated
    /// disclosure for the current revealer.
    pub fn from_state(state: &GameState, disclosure: Option<Disclosure>) -> Self {
        let player_at = |index: usize| {
            state
                .players
                .get(index)
                .map(PlayerInfo::from)
                .unwrap_or_else(|| PlayerInfo {
                    id: 0,
                    name: String::new(),
                })
        };
        let total = state.players.len();

        match state.phase {
            GamePhase::Lobby | GamePhase::Voting => View::Lobby {
                players: state.players.iter().map(PlayerInfo::from).collect(),
                mode: state.config.mode,
                category: state.config.category.clone(),
                categories: defaults::categories(state.config.mode),
                settings: state.config.settings,
                can_add: total < MAX_PLAYERS,
                can_remove: total > MIN_PLAYERS,
            },
            GamePhase::Reveal => View::Reveal {
                player: player_at(state.revealing_player_index),
                index: state.revealing_player_index,
                total,
                mode: state.mode(),
                disclosure,
            },
            GamePhase::Answering => View::Answering {
                player: player_at(state.current_player_index),
                index: state.current_player_index,
                total,
            },
            GamePhase::VotingLanding => View::VotingLanding {
                starting_player: player_at(state.starting_player_index),
            },
            GamePhase::QuestionRevealActual => View::QuestionRevealActual {
                question: innocent_text(state),
            },
            GamePhase::AnswersSummary => View::AnswersSummary {
                question: innocent_text(state),
                answers: state
                    .players
                    .iter()
                    .map(|p| AnswerInfo {
                        player: PlayerInfo::from(p),
                        answer: p.answer.clone(),
                        is_imposter: p.is_imposter(),
                    })
                    .collect(),
            },
            GamePhase::Result => View::Result {
                imposter: state.imposter().map(PlayerInfo::from),
                secret_word: innocent_text(state),
                category: state
                    .round
                    .as_ref()
                    .map(|r| r.category.clone())
                    .unwrap_or_default(),
            },
        }
    }

    pub fn phase(&self) -> GamePhase {
        match self {
            View::Lobby { .. } => GamePhase::Lobby,
            View::Reveal { .. } => GamePhase::Reveal,
            View::Answering { .. } => GamePhase::Answering,
            View::VotingLanding { .. } => GamePhase::VotingLanding,
            View::QuestionRevealActual { .. } => GamePhase::QuestionRevealActual,
            View::AnswersSummary { .. } => GamePhase::AnswersSummary,
            View::Result { .. } => GamePhase::Result,
        }
    }
}

/// The word (WORD mode) or the innocents' question (QUESTION mode)
fn innocent_text(state: &GameState) -> String {
    match state.round.as_ref().map(|r| &r.content) {
        Some(RoundContent::Word { secret_word, .. }) => secret_word.clone(),
        Some(RoundContent::Question { question_a, .. }) => question_a.clone(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_wire_format() {
        let intent: Intent =
            serde_json::from_str(r#"{"t":"submit_answer","text":"pancakes"}"#).unwrap();
        assert_eq!(
            intent,
            Intent::SubmitAnswer {
                text: "pancakes".to_string()
            }
        );

        let json = serde_json::to_string(&Intent::SetMode {
            mode: GameMode::Question,
        })
        .unwrap();
        assert_eq!(json, r#"{"t":"set_mode","mode":"QUESTION"}"#);
    }

    #[test]
    fn test_lobby_view_bounds_flags() {
        let state = GameState::new(defaults::default_category(GameMode::Word));
        match View::from_state(&state, None) {
            View::Lobby {
                can_add,
                can_remove,
                categories,
                ..
            } => {
                assert!(can_add);
                assert!(!can_remove);
                assert_eq!(categories.len(), 14);
            }
            other => panic!("Expected lobby view, got {:?}", other),
        }
    }

    #[test]
    fn test_reveal_view_never_serializes_roles() {
        let mut state = GameState::new(defaults::default_category(GameMode::Word));
        state.phase = GamePhase::Reveal;
        state.players[0].role = PlayerRole::Imposter;

        let json = serde_json::to_string(&View::from_state(&state, None)).unwrap();
        assert!(!json.contains("IMPOSTER"));
        assert!(json.contains(r#""disclosure":null"#));
    }
}
