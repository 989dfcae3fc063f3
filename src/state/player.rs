use super::{replace_player, EngineError, RoundEngine};
use crate::bank::ContentBank;
use crate::types::*;

impl<B: ContentBank> RoundEngine<B> {
    /// Append a player with the next unused id. No-op at MAX_PLAYERS.
    pub fn add_player(&mut self) -> Result<(), EngineError> {
        self.expect_phase("add_player", &[GamePhase::Lobby])?;
        if self.state.players.len() >= MAX_PLAYERS {
            tracing::debug!("Roster full, not adding a player");
            return Ok(());
        }

        let mut next = self.draft();
        let id = next.next_player_id;
        next.players.push(Player::new(id));
        next.next_player_id += 1;
        tracing::info!("Added player {}", id);
        self.commit(next);
        Ok(())
    }

    /// Remove a player by id. No-op at MIN_PLAYERS or for unknown ids.
    pub fn remove_player(&mut self, id: PlayerId) -> Result<(), EngineError> {
        self.expect_phase("remove_player", &[GamePhase::Lobby])?;
        if self.state.players.len() <= MIN_PLAYERS {
            tracing::debug!("Roster at minimum, not removing player {}", id);
            return Ok(());
        }
        if !self.state.players.iter().any(|p| p.id == id) {
            tracing::debug!("No player {} to remove", id);
            return Ok(());
        }

        let mut next = self.draft();
        next.players.retain(|p| p.id != id);
        tracing::info!("Removed player {}", id);
        self.commit(next);
        Ok(())
    }

    pub fn rename_player(&mut self, id: PlayerId, name: String) -> Result<(), EngineError> {
        self.expect_phase("rename_player", &[GamePhase::Lobby])?;
        let Some(index) = self.state.players.iter().position(|p| p.id == id) else {
            tracing::debug!("No player {} to rename", id);
            return Ok(());
        };

        let players = replace_player(&self.state.players, index, |p| Player {
            name,
            ..p.clone()
        });
        self.commit(GameState {
            players,
            ..self.draft()
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::bank::BankStore;
    use crate::state::RoundEngine;
    use crate::types::*;

    fn engine() -> RoundEngine<BankStore> {
        RoundEngine::with_seed(BankStore::with_defaults(), 7)
    }

    #[test]
    fn test_add_player_stops_at_max() {
        let mut engine = engine();
        for _ in 0..20 {
            engine.add_player().unwrap();
        }
        assert_eq!(engine.state().players.len(), MAX_PLAYERS);

        let version = engine.state().version;
        engine.add_player().unwrap();
        assert_eq!(engine.state().players.len(), MAX_PLAYERS);
        assert_eq!(engine.state().version, version);
    }

    #[test]
    fn test_remove_player_stops_at_min() {
        let mut engine = engine();
        engine.remove_player(1).unwrap();
        assert_eq!(engine.state().players.len(), MIN_PLAYERS);
        assert!(engine.state().players.iter().any(|p| p.id == 1));
    }

    #[test]
    fn test_ids_are_not_reused_after_removal() {
        let mut engine = engine();
        engine.add_player().unwrap();
        engine.remove_player(4).unwrap();
        engine.add_player().unwrap();

        let ids: Vec<_> = engine.state().players.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 5]);
        assert_eq!(engine.state().players[3].name, "Player 5");
    }

    #[test]
    fn test_remove_unknown_player_is_ignored() {
        let mut engine = engine();
        engine.add_player().unwrap();
        engine.remove_player(42).unwrap();
        assert_eq!(engine.state().players.len(), 4);
    }

    #[test]
    fn test_rename_player_keeps_order() {
        let mut engine = engine();
        engine.rename_player(2, "Bob".to_string()).unwrap();
        engine.rename_player(99, "Nobody".to_string()).unwrap();

        let names: Vec<_> = engine
            .state()
            .players
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["Player 1", "Bob", "Player 3"]);
    }
}
