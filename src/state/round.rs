use super::{replace_player, EngineError, RoundEngine};
use crate::bank::{resolve_or_fallback, ContentBank};
use crate::types::*;

impl<B: ContentBank> RoundEngine<B> {
    /// Assign roles, freeze the round content and enter REVEAL
    pub fn start_game(&mut self) -> Result<(), EngineError> {
        self.expect_phase("start_game", &[GamePhase::Lobby])?;

        let current = self.snapshot();
        let size = current.players.len();
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&size) {
            tracing::debug!("Roster size {} out of bounds, not starting", size);
            return Ok(());
        }

        let imposter_index = self.rng.pick(size);
        let starting_player_index = self.rng.pick(size);

        let config = &current.config;
        let entries = resolve_or_fallback(&self.bank, config.mode, &config.category.id);
        let pick = self.rng.pick(entries.len());
        let content = match &entries[pick] {
            ContentEntry::Word(entry) => RoundContent::Word {
                secret_word: entry.word.clone(),
                hint: entry.hint.clone(),
            },
            ContentEntry::Question(pair) => RoundContent::Question {
                question_a: pair.a.clone(),
                question_b: pair.b.clone(),
                hint: format!("Relates to {}", config.category.name),
            },
        };

        let players = current
            .players
            .iter()
            .enumerate()
            .map(|(idx, p)| Player {
                role: if idx == imposter_index {
                    PlayerRole::Imposter
                } else {
                    PlayerRole::Innocent
                },
                ..p.cleared()
            })
            .collect();

        let round = Round {
            id: ulid::Ulid::new().to_string(),
            category: config.category.name.clone(),
            settings: config.settings,
            content,
        };
        tracing::info!(
            "Starting round {}: {} players, {:?} mode, category {}",
            round.id,
            size,
            round.mode(),
            config.category.id
        );

        self.commit(GameState {
            phase: GamePhase::Reveal,
            players,
            round: Some(round),
            revealing_player_index: 0,
            current_player_index: 0,
            starting_player_index,
            content_revealed: false,
            winner: None,
            ..self.draft()
        });
        Ok(())
    }

    /// Explicit reveal action by the player holding the device
    pub fn reveal(&mut self) -> Result<(), EngineError> {
        self.expect_phase("reveal", &[GamePhase::Reveal])?;
        if self.state.content_revealed {
            return Ok(());
        }

        let current = self.snapshot();
        let players = replace_player(&current.players, current.revealing_player_index, |p| {
            Player {
                has_seen_word: true,
                ..p.clone()
            }
        });
        self.commit(GameState {
            players,
            content_revealed: true,
            ..self.draft()
        });
        Ok(())
    }

    /// The current revealer is done; hand the device on
    pub fn reveal_done(&mut self) -> Result<(), EngineError> {
        self.expect_phase("reveal_done", &[GamePhase::Reveal])?;
        if !self.state.content_revealed {
            tracing::debug!("Ignoring reveal_done while content is concealed");
            return Ok(());
        }

        let mut next = self.draft();
        next.content_revealed = false;
        match next.mode() {
            GameMode::Word => {
                if next.revealing_player_index + 1 >= next.players.len() {
                    next.phase = GamePhase::VotingLanding;
                } else {
                    next.revealing_player_index += 1;
                }
            }
            GameMode::Question => {
                next.phase = GamePhase::Answering;
                next.current_player_index = next.revealing_player_index;
            }
        }

        tracing::debug!(
            "Reveal {} of {} done",
            self.state.revealing_player_index + 1,
            self.state.players.len()
        );
        self.commit(next);
        Ok(())
    }

    /// Record the current player's answer. Blank input is ignored.
    pub fn submit_answer(&mut self, text: &str) -> Result<(), EngineError> {
        self.expect_phase("submit_answer", &[GamePhase::Answering])?;

        let answer = text.trim();
        if answer.is_empty() {
            tracing::debug!("Ignoring blank answer");
            return Ok(());
        }

        let current = self.snapshot();
        let index = current.current_player_index;
        let players = replace_player(&current.players, index, |p| Player {
            answer: Some(answer.to_string()),
            ..p.clone()
        });

        let next = if index + 1 >= current.players.len() {
            GameState {
                phase: GamePhase::QuestionRevealActual,
                players,
                ..self.draft()
            }
        } else {
            GameState {
                phase: GamePhase::Reveal,
                players,
                revealing_player_index: index + 1,
                current_player_index: index + 1,
                content_revealed: false,
                ..self.draft()
            }
        };
        self.commit(next);
        Ok(())
    }
}
