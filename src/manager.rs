//! The engine's entry point.
//!
//! `GameManager` owns one `GameState` and runs every command the same way:
//!
//! 1. `GameValidator` checks preconditions in a fixed order. The first
//!    failure returns `Outcome::Invalid` and nothing changes.
//! 2. The matching `ActionHandler` mutates the state.
//! 3. If the handler passed the turn, `advance_turn` rotates the current
//!    player and re-checks the end conditions.
//!
//! All of this happens inside one `&mut self` call. Callers that share a game
//! between connections must serialize access themselves (a mutex or a
//! per-game task); the engine has no internal locking.
//!
//! ```
//! use hanabi_engine::{Color, GameManager, Hint, Outcome, PlayerId};
//!
//! let mut game = GameManager::create_new_game(&[1, 2, 3]).unwrap();
//!
//! let result = game.play_card(PlayerId::new(2), 0).unwrap();
//! assert_eq!(result.outcome, Outcome::Invalid);
//! assert_eq!(result.message, "Not your turn or game is over.");
//!
//! let result = game
//!     .give_hint(PlayerId::new(1), PlayerId::new(1), Hint::Color(Color::Red))
//!     .unwrap();
//! assert_eq!(result.message, "Cannot give hint to yourself.");
//! ```

use crate::actions::{ActionHandler, DiscardCardAction, HintAction, PlayCardAction, Resolution};
use crate::core::{
    Action, Card, Color, GameConfig, GameOverReason, GamePhase, GameState, Hint, Player, PlayerId,
};
use crate::error::Result;
use crate::rules::{ActionResult, GameValidator};
use crate::setup::GameSetup;
use crate::view::StatusView;

/// Façade over one game.
///
/// Hands are only reachable through `status_for`, which hides the viewer's
/// own cards:
///
/// ```compile_fail
/// let game = hanabi_engine::GameManager::create_new_game(&[1, 2]).unwrap();
/// let _every_hand = game.state();
/// ```
#[derive(Clone, Debug)]
pub struct GameManager {
    state: GameState,
}

impl GameManager {
    /// Start a game with a random shuffle.
    ///
    /// Fails with `InvalidPlayerCount` for an empty list or a count outside
    /// 2..=5, and with `DuplicatePlayer` if an id repeats.
    pub fn create_new_game(player_ids: &[u32]) -> Result<Self> {
        Self::create_new_game_with_config(player_ids, GameConfig::default())
    }

    /// Start a game with an explicit seed and player names.
    pub fn create_new_game_with_config(player_ids: &[u32], config: GameConfig) -> Result<Self> {
        GameSetup::new(player_ids).config(config).build()
    }

    pub(crate) fn from_state(state: GameState) -> Self {
        Self { state }
    }

    // === Commands ===

    /// Play the card in slot `card_index` of `player`'s hand.
    pub fn play_card(&mut self, player: PlayerId, card_index: usize) -> Result<ActionResult> {
        if let Some(reason) = GameValidator::new(&self.state).check_play(player, card_index) {
            return Ok(self.reject(player, "play", reason));
        }
        self.run(player, &PlayCardAction { card_index })
    }

    /// Discard the card in slot `card_index` of `player`'s hand.
    pub fn discard_card(&mut self, player: PlayerId, card_index: usize) -> Result<ActionResult> {
        if let Some(reason) = GameValidator::new(&self.state).check_discard(player, card_index) {
            return Ok(self.reject(player, "discard", reason));
        }
        self.run(player, &DiscardCardAction { card_index })
    }

    /// Give `to` a hint about their hand.
    pub fn give_hint(&mut self, from: PlayerId, to: PlayerId, hint: Hint) -> Result<ActionResult> {
        if let Some(reason) = GameValidator::new(&self.state).check_hint(from, to, hint) {
            return Ok(self.reject(from, "hint", reason));
        }
        self.run(from, &HintAction { target: to, hint })
    }

    /// Dispatch any `Action`.
    pub fn apply(&mut self, player: PlayerId, action: Action) -> Result<ActionResult> {
        match action {
            Action::Play { card_index } => self.play_card(player, card_index),
            Action::Discard { card_index } => self.discard_card(player, card_index),
            Action::Hint { target, hint } => self.give_hint(player, target, hint),
        }
    }

    /// Pass the turn and re-check end conditions. Does nothing once the game
    /// is over.
    pub fn advance_turn(&mut self) {
        self.state.advance_turn();
    }

    /// Change a player's display name.
    pub fn rename_player(&mut self, player: PlayerId, name: impl Into<String>) -> Result<()> {
        self.state.rename_player(player, name)
    }

    fn run(&mut self, player: PlayerId, handler: &dyn ActionHandler) -> Result<ActionResult> {
        let Resolution {
            result,
            advance_turn,
        } = handler.execute(&mut self.state, player)?;

        if advance_turn {
            self.advance_turn();
        }
        Ok(result)
    }

    fn reject(&self, player: PlayerId, command: &str, reason: &'static str) -> ActionResult {
        tracing::debug!(player = %player, command, reason, "action rejected");
        ActionResult::invalid(reason)
    }

    // === Queries ===

    /// The whole state, every hand included. Callers outside the crate go
    /// through `status_for`.
    #[cfg(test)]
    pub(crate) fn state(&self) -> &GameState {
        &self.state
    }

    /// Status as seen by `player`: every hand except their own.
    pub fn status_for(&self, player: PlayerId) -> Result<StatusView> {
        StatusView::for_player(&self.state, player)
    }

    /// Every history line so far, oldest first.
    #[must_use]
    pub fn game_history(&self) -> Vec<String> {
        self.state.history().iter().cloned().collect()
    }

    /// Players in seating order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        self.state.players()
    }

    /// Player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.state.current_player()
    }

    /// Highest rank played in `color`, 0 if none.
    #[must_use]
    pub fn played_rank(&self, color: Color) -> u8 {
        self.state.played_rank(color)
    }

    /// Every stack in `Color::ALL` order.
    #[must_use]
    pub fn played_cards(&self) -> Vec<(Color, u8)> {
        self.state.played_cards()
    }

    /// Discarded and misplayed cards, oldest first.
    #[must_use]
    pub fn discard_pile(&self) -> &[Card] {
        self.state.discard_pile()
    }

    /// Hint tokens available.
    #[must_use]
    pub fn hints(&self) -> u8 {
        self.state.hints()
    }

    /// Strikes taken so far.
    #[must_use]
    pub fn strikes(&self) -> u8 {
        self.state.strikes()
    }

    /// Cards left to draw.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.state.deck_size()
    }

    /// Sum of all stacks.
    #[must_use]
    pub fn current_score(&self) -> u32 {
        self.state.score()
    }

    /// Check if the game has ended.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    /// Why the game ended, if it has.
    #[must_use]
    pub fn game_over_reason(&self) -> Option<GameOverReason> {
        self.state.game_over_reason()
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.state.phase()
    }
}
