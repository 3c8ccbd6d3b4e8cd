//! Telling another player about their cards.

use smallvec::SmallVec;

use super::{ActionHandler, Resolution, GAME_ALREADY_OVER};
use crate::core::{Card, GameState, Hint, PlayerId};
use crate::error::{EngineError, Result};
use crate::rules::ActionResult;

pub const HINT_GIVEN: &str = "Hint given.";
pub const NO_MATCHING_CARDS: &str = "No matching cards found";

/// Point out every card in `target`'s hand that matches `hint`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HintAction {
    pub target: PlayerId,
    pub hint: Hint,
}

impl ActionHandler for HintAction {
    fn execute(&self, state: &mut GameState, player: PlayerId) -> Result<Resolution> {
        if state.is_game_over() {
            return Ok(Resolution::stay(ActionResult::failure(GAME_ALREADY_OVER)));
        }

        let hand = state
            .hand(self.target)
            .ok_or(EngineError::PlayerNotFound(self.target))?;
        let matches: SmallVec<[(usize, Card); 5]> = hand
            .iter()
            .copied()
            .enumerate()
            .filter(|(_, card)| self.hint.matches(card))
            .collect();

        // A hint has to reveal something to cost a token.
        if matches.is_empty() {
            tracing::debug!(
                player = %player,
                target = %self.target,
                hint = %self.hint,
                "hint matched nothing"
            );
            return Ok(Resolution::stay(ActionResult::failure(NO_MATCHING_CARDS)));
        }

        let detail = matches
            .iter()
            .map(|(slot, card)| format!("slot {slot} ({card})"))
            .collect::<Vec<_>>()
            .join(", ");
        let line = format!(
            "{} told {} about {}: {detail}.",
            state.display_name(player),
            state.display_name(self.target),
            self.hint
        );
        state.log(line);

        for (_, card) in &matches {
            state.reveal(card, self.hint);
        }
        state.spend_hint();

        tracing::info!(
            player = %player,
            target = %self.target,
            hint = %self.hint,
            matched = matches.len(),
            hints = state.hints(),
            "hint given"
        );
        Ok(Resolution::advance(ActionResult::success(HINT_GIVEN)))
    }
}
