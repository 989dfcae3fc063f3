mod game;
mod player;
mod reveal;
mod round;

pub use game::{is_valid_phase_transition, valid_transitions};
pub use reveal::{disclose, Disclosure};

use crate::bank::ContentBank;
use crate::types::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

/// Uniform random index source used for imposter, start and content picks.
///
/// Any `rand::Rng` qualifies; tests can script exact picks.
pub trait IndexSource: Send {
    /// Index in `0..len`. Never called with `len == 0`.
    fn pick(&mut self, len: usize) -> usize;
}

impl<R: rand::Rng + Send> IndexSource for R {
    fn pick(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

/// Errors from dispatching an intent the current phase does not accept
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    #[error("{intent} is not accepted in phase {phase:?}")]
    InvalidIntent {
        intent: &'static str,
        phase: GamePhase,
    },
}

/// Owns the game snapshot and advances it in response to user intents.
///
/// Every applied transition builds a complete new [`GameState`] and swaps it
/// in, so a snapshot handed out by [`RoundEngine::snapshot`] never changes.
pub struct RoundEngine<B: ContentBank> {
    state: Arc<GameState>,
    bank: B,
    rng: Box<dyn IndexSource>,
}

impl<B: ContentBank> RoundEngine<B> {
    /// Engine drawing from OS entropy
    pub fn new(bank: B) -> Self {
        Self::with_source(bank, Box::new(StdRng::from_os_rng()))
    }

    /// Engine with reproducible draws
    pub fn with_seed(bank: B, seed: u64) -> Self {
        Self::with_source(bank, Box::new(StdRng::seed_from_u64(seed)))
    }

    pub fn with_source(bank: B, rng: Box<dyn IndexSource>) -> Self {
        Self {
            state: Arc::new(GameState::new(crate::bank::defaults::default_category(
                GameMode::Word,
            ))),
            bank,
            rng,
        }
    }

    /// Current snapshot; unaffected by later transitions
    pub fn snapshot(&self) -> Arc<GameState> {
        Arc::clone(&self.state)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn bank(&self) -> &B {
        &self.bank
    }

    /// Bank edits never reach a round already in progress
    pub fn bank_mut(&mut self) -> &mut B {
        &mut self.bank
    }

    fn expect_phase(&self, intent: &'static str, allowed: &[GamePhase]) -> Result<(), EngineError> {
        if allowed.contains(&self.state.phase) {
            Ok(())
        } else {
            tracing::warn!(
                "Rejected {} in phase {:?}",
                intent,
                self.state.phase
            );
            Err(EngineError::InvalidIntent {
                intent,
                phase: self.state.phase,
            })
        }
    }

    /// Mutable copy of the current snapshot to build the next one from
    fn draft(&self) -> GameState {
        (*self.state).clone()
    }

    fn commit(&mut self, mut next: GameState) {
        let from = self.state.phase;
        debug_assert!(
            from == next.phase || is_valid_phase_transition(from, next.phase, next.mode()),
            "invalid transition {:?} -> {:?}",
            from,
            next.phase
        );

        next.version = self.state.version + 1;
        if from != next.phase {
            tracing::info!(
                "Phase {:?} -> {:?} (round {}, version {})",
                from,
                next.phase,
                next.round.as_ref().map(|r| r.id.as_str()).unwrap_or("-"),
                next.version
            );
        }
        self.state = Arc::new(next);
    }
}

/// Copy `players` with only the player at `index` replaced by `update`
fn replace_player(
    players: &[Player],
    index: usize,
    update: impl FnOnce(&Player) -> Player,
) -> Vec<Player> {
    let mut next = players.to_vec();
    if let Some(player) = players.get(index) {
        next[index] = update(player);
    }
    next
}
