//! Intent dispatch
//!
//! Single entry point the presentation layer calls: apply one intent to the
//! engine and return the view for the resulting snapshot.

use crate::bank::ContentBank;
use crate::protocol::{Intent, View};
use crate::state::{EngineError, RoundEngine};

/// Apply an intent and render the next view
pub fn handle_intent<B: ContentBank>(
    engine: &mut RoundEngine<B>,
    intent: Intent,
) -> Result<View, EngineError> {
    match intent {
        Intent::AddPlayer => engine.add_player()?,
        Intent::RemovePlayer { player_id } => engine.remove_player(player_id)?,
        Intent::RenamePlayer { player_id, name } => engine.rename_player(player_id, name)?,
        Intent::SetMode { mode } => engine.set_mode(mode)?,
        Intent::SelectCategory { category_id } => engine.select_category(&category_id)?,
        Intent::UpdateSettings { settings } => engine.update_settings(settings)?,
        Intent::StartGame => engine.start_game()?,
        Intent::Reveal => engine.reveal()?,
        Intent::RevealDone => engine.reveal_done()?,
        Intent::SubmitAnswer { text } => engine.submit_answer(&text)?,
        Intent::RevealResults => engine.reveal_results()?,
        Intent::StartRound => engine.start_round()?,
        Intent::Reset => engine.reset()?,
    }

    Ok(current_view(engine))
}

/// View for the engine's current snapshot
pub fn current_view<B: ContentBank>(engine: &RoundEngine<B>) -> View {
    View::from_state(&engine.snapshot(), engine.current_disclosure())
}
