//! Discarding a card to regain a hint token.

use super::{ActionHandler, Resolution, GAME_ALREADY_OVER};
use crate::core::{GameState, PlayerId};
use crate::error::Result;
use crate::rules::ActionResult;

pub const DISCARDED: &str = "Card discarded.";

/// Discard the card in slot `card_index`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiscardCardAction {
    pub card_index: usize,
}

impl ActionHandler for DiscardCardAction {
    fn execute(&self, state: &mut GameState, player: PlayerId) -> Result<Resolution> {
        if state.is_game_over() {
            return Ok(Resolution::stay(ActionResult::failure(GAME_ALREADY_OVER)));
        }

        let card = state.take_card(player, self.card_index)?;
        state.discard(card);
        state.gain_hint();
        state.draw_replacement(player)?;

        tracing::info!(player = %player, card = %card, hints = state.hints(), "card discarded");
        let line = format!(
            "{} discarded {card}. Hints: {}.",
            state.display_name(player),
            state.hints()
        );
        state.log(line);

        Ok(Resolution::advance(ActionResult::success(DISCARDED)))
    }
}
