use super::{EngineError, RoundEngine};
use crate::bank::{defaults, ContentBank};
use crate::types::*;

/// Check if a phase transition is valid for the round's mode
pub fn is_valid_phase_transition(from: GamePhase, to: GamePhase, mode: GameMode) -> bool {
    use GamePhase::*;

    match (from, to) {
        (Lobby, Reveal) => true,

        // Word mode: everyone reveals, then the table plays it out
        (Reveal, VotingLanding) => mode == GameMode::Word,
        (VotingLanding, Result) => mode == GameMode::Word,

        // Question mode: reveal and answer alternate per player
        (Reveal, Answering) => mode == GameMode::Question,
        (Answering, Reveal) => mode == GameMode::Question,
        (Answering, QuestionRevealActual) => mode == GameMode::Question,
        (QuestionRevealActual, AnswersSummary) => mode == GameMode::Question,

        (Result, Lobby) | (AnswersSummary, Lobby) => true,

        _ => false,
    }
}

/// Phases reachable from `from` in one transition
pub fn valid_transitions(from: GamePhase, mode: GameMode) -> Vec<GamePhase> {
    use GamePhase::*;

    [
        Lobby,
        Reveal,
        Answering,
        VotingLanding,
        QuestionRevealActual,
        AnswersSummary,
        Voting,
        Result,
    ]
    .into_iter()
    .filter(|to| is_valid_phase_transition(from, *to, mode))
    .collect()
}

impl<B: ContentBank> RoundEngine<B> {
    /// Switch mode; the category selection resets to the mode's first category
    pub fn set_mode(&mut self, mode: GameMode) -> Result<(), EngineError> {
        self.expect_phase("set_mode", &[GamePhase::Lobby])?;
        if self.state.config.mode == mode {
            return Ok(());
        }

        let mut next = self.draft();
        next.config.mode = mode;
        next.config.category = defaults::default_category(mode);
        tracing::info!("Mode set to {:?}", mode);
        self.commit(next);
        Ok(())
    }

    /// Select a category of the current mode. Unknown ids are ignored.
    pub fn select_category(&mut self, category_id: &str) -> Result<(), EngineError> {
        self.expect_phase("select_category", &[GamePhase::Lobby])?;
        let Some(category) = defaults::find_category(self.state.config.mode, category_id) else {
            tracing::debug!("Unknown category {}", category_id);
            return Ok(());
        };

        let mut next = self.draft();
        next.config.category = category;
        self.commit(next);
        Ok(())
    }

    pub fn update_settings(&mut self, settings: GameSettings) -> Result<(), EngineError> {
        self.expect_phase("update_settings", &[GamePhase::Lobby])?;
        let mut next = self.draft();
        next.config.settings = settings;
        self.commit(next);
        Ok(())
    }

    /// WORD mode: leave the discussion landing for the result screen
    pub fn reveal_results(&mut self) -> Result<(), EngineError> {
        self.expect_phase("reveal_results", &[GamePhase::VotingLanding])?;
        self.commit(GameState {
            phase: GamePhase::Result,
            ..self.draft()
        });
        Ok(())
    }

    /// QUESTION mode: the real question has been read out, show all answers
    pub fn start_round(&mut self) -> Result<(), EngineError> {
        self.expect_phase("start_round", &[GamePhase::QuestionRevealActual])?;
        self.commit(GameState {
            phase: GamePhase::AnswersSummary,
            ..self.draft()
        });
        Ok(())
    }

    /// Drop the round and return to LOBBY, keeping the roster
    pub fn reset(&mut self) -> Result<(), EngineError> {
        self.expect_phase("reset", &[GamePhase::Result, GamePhase::AnswersSummary])?;

        let current = self.snapshot();
        self.commit(GameState {
            phase: GamePhase::Lobby,
            players: current.players.iter().map(Player::cleared).collect(),
            round: None,
            revealing_player_index: 0,
            current_player_index: 0,
            starting_player_index: 0,
            content_revealed: false,
            winner: None,
            ..self.draft()
        });
        Ok(())
    }
}
