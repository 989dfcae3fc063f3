use serde::{Deserialize, Serialize};

/// Stable per-roster player identifier
pub type PlayerId = u32;
pub type CategoryId = String;
pub type RoundId = String;

/// Roster bounds, inclusive
pub const MIN_PLAYERS: usize = 3;
pub const MAX_PLAYERS: usize = 10;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GamePhase {
    Lobby,
    Reveal,
    Answering,
    VotingLanding,
    QuestionRevealActual,
    AnswersSummary,
    /// Declared for a voting subsystem; no transition leads here.
    Voting,
    Result,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameMode {
    #[default]
    Word,
    Question,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayerRole {
    #[default]
    Innocent,
    Imposter,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub role: PlayerRole,
    /// Set once during ANSWERING, cleared at round start
    pub answer: Option<String>,
    pub has_seen_word: bool,
    // Inert: carried for a voting/elimination flow that is not implemented
    pub clue: Option<String>,
    pub votes: u32,
    pub is_eliminated: bool,
}

impl Player {
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            name: format!("Player {}", id),
            role: PlayerRole::Innocent,
            answer: None,
            has_seen_word: false,
            clue: None,
            votes: 0,
            is_eliminated: false,
        }
    }

    pub fn is_imposter(&self) -> bool {
        self.role == PlayerRole::Imposter
    }

    /// Copy of this player with every per-round field back at its default
    pub fn cleared(&self) -> Self {
        Self {
            id: self.id,
            name: self.name.clone(),
            ..Self::new(self.id)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub icon: String,
}

impl Category {
    pub fn new(id: &str, name: &str, icon: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            icon: icon.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct GameSettings {
    pub show_category_to_imposter: bool,
    pub show_hint_to_imposter: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WordEntry {
    pub word: String,
    pub hint: String,
}

impl WordEntry {
    pub fn new(word: &str, hint: &str) -> Self {
        Self {
            word: word.to_string(),
            hint: hint.to_string(),
        }
    }

    /// Hint used when none was given: `Starts with "X"`
    pub fn default_hint(word: &str) -> String {
        let first: String = word
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default();
        format!("Starts with \"{}\"", first)
    }
}

/// `a` is the innocents' question, `b` the imposter's variant
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuestionPair {
    pub a: String,
    pub b: String,
}

impl QuestionPair {
    pub fn new(a: &str, b: &str) -> Self {
        Self {
            a: a.to_string(),
            b: b.to_string(),
        }
    }
}

/// A candidate entry resolved from a content bank
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ContentEntry {
    Word(WordEntry),
    Question(QuestionPair),
}

/// Lobby selection, copied into the round at start
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoundConfig {
    pub mode: GameMode,
    pub category: Category,
    pub settings: GameSettings,
}

/// Secret content, frozen for the lifetime of a round
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "mode", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoundContent {
    Word {
        secret_word: String,
        hint: String,
    },
    Question {
        question_a: String,
        question_b: String,
        hint: String,
    },
}

impl RoundContent {
    pub fn mode(&self) -> GameMode {
        match self {
            RoundContent::Word { .. } => GameMode::Word,
            RoundContent::Question { .. } => GameMode::Question,
        }
    }

    pub fn hint(&self) -> &str {
        match self {
            RoundContent::Word { hint, .. } | RoundContent::Question { hint, .. } => hint,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Round {
    pub id: RoundId,
    /// Category display name at selection time
    pub category: String,
    pub settings: GameSettings,
    pub content: RoundContent,
}

impl Round {
    pub fn mode(&self) -> GameMode {
        self.content.mode()
    }
}

/// Immutable game snapshot; the engine replaces it wholesale on each transition
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameState {
    pub version: u64,
    pub phase: GamePhase,
    pub config: RoundConfig,
    pub players: Vec<Player>,
    pub round: Option<Round>,
    pub revealing_player_index: usize,
    pub current_player_index: usize,
    pub starting_player_index: usize,
    /// Whether the current revealer's content is on screen
    pub content_revealed: bool,
    pub next_player_id: PlayerId,
    /// Inert: no implemented flow decides a winner
    pub winner: Option<PlayerRole>,
}

impl GameState {
    /// Fresh LOBBY snapshot with the minimum roster
    pub fn new(category: Category) -> Self {
        let players: Vec<Player> = (1..=MIN_PLAYERS as PlayerId).map(Player::new).collect();
        Self {
            version: 1,
            phase: GamePhase::Lobby,
            config: RoundConfig {
                mode: GameMode::Word,
                category,
                settings: GameSettings::default(),
            },
            next_player_id: players.len() as PlayerId + 1,
            players,
            round: None,
            revealing_player_index: 0,
            current_player_index: 0,
            starting_player_index: 0,
            content_revealed: false,
            winner: None,
        }
    }

    pub fn mode(&self) -> GameMode {
        self.round
            .as_ref()
            .map(Round::mode)
            .unwrap_or(self.config.mode)
    }

    pub fn imposter(&self) -> Option<&Player> {
        self.players.iter().find(|p| p.is_imposter())
    }

    pub fn revealing_player(&self) -> Option<&Player> {
        self.players.get(self.revealing_player_index)
    }

    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current_player_index)
    }

    pub fn starting_player(&self) -> Option<&Player> {
        self.players.get(self.starting_player_index)
    }
}
