//! Playing a card onto its color's stack.

use super::{ActionHandler, Resolution, GAME_ALREADY_OVER};
use crate::core::{GameOverReason, GameState, PlayerId};
use crate::error::Result;
use crate::rules::policy::{MAX_CARD_VALUE, MAX_STRIKES};
use crate::rules::ActionResult;

pub const PLAYED: &str = "Card played successfully!";
pub const PERFECT_GAME: &str = "Perfect! You completed the game.";
pub const NO_CARDS_LEFT: &str = "No cards left in the deck.";
pub const WRONG_CARD: &str = "Wrong card!";

/// Play the card in slot `card_index`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayCardAction {
    pub card_index: usize,
}

impl ActionHandler for PlayCardAction {
    fn execute(&self, state: &mut GameState, player: PlayerId) -> Result<Resolution> {
        if state.is_game_over() {
            return Ok(Resolution::stay(ActionResult::failure(GAME_ALREADY_OVER)));
        }

        let card = state.take_card(player, self.card_index)?;
        let name = state.display_name(player);

        if !state.try_play(card) {
            state.discard(card);
            state.add_strike();
            tracing::info!(player = %player, card = %card, strikes = state.strikes(), "misplay");
            let line = format!(
                "{name} misplayed {card}. Strikes: {}/{MAX_STRIKES}.",
                state.strikes()
            );
            state.log(line);

            state.draw_replacement(player)?;
            return Ok(Resolution::advance(ActionResult::failure(WRONG_CARD)));
        }

        tracing::info!(player = %player, card = %card, "card played");
        state.log(format!("{name} played {card}."));

        if card.value() == MAX_CARD_VALUE && state.gain_hint() {
            let line = format!(
                "{name} completed the {} stack and regained a hint. Hints: {}.",
                card.color(),
                state.hints()
            );
            state.log(line);
        }

        if state.all_stacks_complete() {
            state.end_game(GameOverReason::PerfectScore);
            return Ok(Resolution::stay(ActionResult::success(PERFECT_GAME)));
        }

        // A correct play with nothing left to draw still scores, but reports
        // the missing replacement as a failure.
        match state.draw_replacement(player)? {
            Some(_) => Ok(Resolution::advance(ActionResult::success(PLAYED))),
            None => Ok(Resolution::advance(ActionResult::failure(NO_CARDS_LEFT))),
        }
    }
}
