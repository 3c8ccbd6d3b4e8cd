//! Precondition checks run before any mutation.
//!
//! Every check is a pure predicate over `&GameState`. `GameValidator`
//! combines them per command in a fixed order so the first failing check
//! always produces the same message.

use crate::core::{GameState, Hint, PlayerId};
use crate::rules::policy::{self, MAX_HINTS};

pub const NOT_YOUR_TURN: &str = "Not your turn or game is over.";
pub const INVALID_CARD_INDEX: &str = "Invalid card index.";
pub const HINTS_FULL: &str = "Cannot discard when hint tokens are full.";
pub const TARGET_NOT_FOUND: &str = "Target player not found.";
pub const SELF_HINT: &str = "Cannot give hint to yourself.";
pub const NO_HINTS_LEFT: &str = "No hint tokens left.";
pub const INVALID_HINT: &str = "Invalid hint value.";

/// Stateless validator over a read-only state.
#[derive(Clone, Copy)]
pub struct GameValidator<'a> {
    state: &'a GameState,
}

impl<'a> GameValidator<'a> {
    #[must_use]
    pub fn new(state: &'a GameState) -> Self {
        Self { state }
    }

    /// False once the game is over or when it is someone else's turn.
    #[must_use]
    pub fn is_player_turn(&self, player: PlayerId) -> bool {
        !self.state.is_game_over() && self.state.current_player() == player
    }

    /// Check if `index` is a slot in `player`'s hand.
    #[must_use]
    pub fn is_valid_card_index(&self, player: PlayerId, index: usize) -> bool {
        self.state.hand(player).is_some_and(|hand| index < hand.len())
    }

    /// Discarding at a full bank would waste the token it earns.
    #[must_use]
    pub fn can_discard(&self) -> bool {
        self.state.hints() < MAX_HINTS
    }

    /// Check if at least one hint token is left.
    #[must_use]
    pub fn has_enough_hints(&self) -> bool {
        self.state.hints() > 0
    }

    /// Check if `player` is seated.
    #[must_use]
    pub fn player_exists(&self, player: PlayerId) -> bool {
        self.state.has_player(player)
    }

    /// Color hints are valid by construction; values must be a card rank.
    #[must_use]
    pub fn is_valid_hint(&self, hint: Hint) -> bool {
        match hint {
            Hint::Color(_) => true,
            Hint::Value(value) => policy::is_valid_card_value(value),
        }
    }

    #[must_use]
    pub fn is_not_self_hint(&self, from: PlayerId, to: PlayerId) -> bool {
        from != to
    }

    /// First failing check for a play, if any.
    pub fn check_play(&self, player: PlayerId, index: usize) -> Option<&'static str> {
        if !self.is_player_turn(player) {
            return Some(NOT_YOUR_TURN);
        }
        if !self.is_valid_card_index(player, index) {
            return Some(INVALID_CARD_INDEX);
        }
        None
    }

    /// First failing check for a discard, if any.
    pub fn check_discard(&self, player: PlayerId, index: usize) -> Option<&'static str> {
        self.check_play(player, index).or_else(|| {
            if self.can_discard() {
                None
            } else {
                Some(HINTS_FULL)
            }
        })
    }

    /// First failing check for a hint, if any.
    pub fn check_hint(&self, from: PlayerId, to: PlayerId, hint: Hint) -> Option<&'static str> {
        if !self.is_player_turn(from) {
            return Some(NOT_YOUR_TURN);
        }
        if !self.player_exists(to) {
            return Some(TARGET_NOT_FOUND);
        }
        if !self.is_not_self_hint(from, to) {
            return Some(SELF_HINT);
        }
        if !self.has_enough_hints() {
            return Some(NO_HINTS_LEFT);
        }
        if !self.is_valid_hint(hint) {
            return Some(INVALID_HINT);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Color, Deck, Player};

    fn dealt_state(ids: &[u32]) -> GameState {
        let players = ids.iter().map(|&id| Player::new(PlayerId::new(id))).collect();
        let mut state = GameState::new(players, Deck::from_draw_order(&[(Color::Red, 1); 20]));
        state.deal(5);
        state
    }

    #[test]
    fn test_turn_check() {
        let state = dealt_state(&[1, 2, 3]);
        let validator = GameValidator::new(&state);

        assert!(validator.is_player_turn(PlayerId::new(1)));
        assert!(!validator.is_player_turn(PlayerId::new(2)));
        assert!(!validator.is_player_turn(PlayerId::new(42)));
    }

    #[test]
    fn test_card_index_bounds() {
        let state = dealt_state(&[1, 2]);
        let validator = GameValidator::new(&state);

        assert!(validator.is_valid_card_index(PlayerId::new(1), 0));
        assert!(validator.is_valid_card_index(PlayerId::new(1), 4));
        assert!(!validator.is_valid_card_index(PlayerId::new(1), 5));
        assert!(!validator.is_valid_card_index(PlayerId::new(7), 0));
    }

    #[test]
    fn test_token_checks() {
        let mut state = dealt_state(&[1, 2]);
        assert!(!GameValidator::new(&state).can_discard());
        assert!(GameValidator::new(&state).has_enough_hints());

        state.set_hints(0);
        assert!(GameValidator::new(&state).can_discard());
        assert!(!GameValidator::new(&state).has_enough_hints());
    }

    #[test]
    fn test_hint_value_range() {
        let state = dealt_state(&[1, 2]);
        let validator = GameValidator::new(&state);

        assert!(validator.is_valid_hint(Hint::Color(Color::White)));
        assert!(validator.is_valid_hint(Hint::Value(1)));
        assert!(validator.is_valid_hint(Hint::Value(5)));
        assert!(!validator.is_valid_hint(Hint::Value(0)));
        assert!(!validator.is_valid_hint(Hint::Value(6)));
    }

    #[test]
    fn test_play_check_order() {
        let state = dealt_state(&[1, 2]);
        let validator = GameValidator::new(&state);

        // Turn is checked before the index.
        assert_eq!(validator.check_play(PlayerId::new(2), 99), Some(NOT_YOUR_TURN));
        assert_eq!(validator.check_play(PlayerId::new(1), 99), Some(INVALID_CARD_INDEX));
        assert_eq!(validator.check_play(PlayerId::new(1), 0), None);
    }

    #[test]
    fn test_discard_check_order() {
        let mut state = dealt_state(&[1, 2]);
        assert_eq!(
            GameValidator::new(&state).check_discard(PlayerId::new(1), 99),
            Some(INVALID_CARD_INDEX)
        );
        assert_eq!(
            GameValidator::new(&state).check_discard(PlayerId::new(1), 0),
            Some(HINTS_FULL)
        );

        state.set_hints(7);
        assert_eq!(GameValidator::new(&state).check_discard(PlayerId::new(1), 0), None);
    }

    #[test]
    fn test_hint_check_order() {
        let mut state = dealt_state(&[1, 2]);
        let p1 = PlayerId::new(1);
        let p2 = PlayerId::new(2);

        let v = GameValidator::new(&state);
        assert_eq!(v.check_hint(p2, p1, Hint::Value(9)), Some(NOT_YOUR_TURN));
        assert_eq!(v.check_hint(p1, PlayerId::new(5), Hint::Value(9)), Some(TARGET_NOT_FOUND));
        assert_eq!(v.check_hint(p1, p1, Hint::Value(9)), Some(SELF_HINT));
        assert_eq!(v.check_hint(p1, p2, Hint::Value(9)), Some(INVALID_HINT));
        assert_eq!(v.check_hint(p1, p2, Hint::Color(Color::Red)), None);

        state.set_hints(0);
        let v = GameValidator::new(&state);
        assert_eq!(v.check_hint(p1, p2, Hint::Value(9)), Some(NO_HINTS_LEFT));
    }
}
