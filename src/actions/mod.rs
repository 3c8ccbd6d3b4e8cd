//! Action handlers: one state transition each.
//!
//! A handler assumes `GameValidator` already passed. It still re-checks
//! that the game is running, mutates the state, and tells the manager
//! whether the turn should pass. Turn advancement itself stays in
//! `GameManager` so every action ends with the same recheck.

pub mod discard;
pub mod hint;
pub mod play;

pub use discard::DiscardCardAction;
pub use hint::HintAction;
pub use play::PlayCardAction;

use crate::core::{GameState, PlayerId};
use crate::error::Result;
use crate::rules::ActionResult;

pub const GAME_ALREADY_OVER: &str = "Game is already over.";

/// What a handler did and whether the turn passes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub result: ActionResult,
    pub advance_turn: bool,
}

impl Resolution {
    /// The turn passes to the next player.
    pub fn advance(result: ActionResult) -> Self {
        Self {
            result,
            advance_turn: true,
        }
    }

    /// The acting player keeps the turn, or the game has ended.
    pub fn stay(result: ActionResult) -> Self {
        Self {
            result,
            advance_turn: false,
        }
    }
}

/// A single state transition performed on behalf of `player`.
///
/// `Err` means an internal invariant broke (for example a player the
/// validator admitted has no hand), never a game outcome.
pub trait ActionHandler {
    fn execute(&self, state: &mut GameState, player: PlayerId) -> Result<Resolution>;
}
