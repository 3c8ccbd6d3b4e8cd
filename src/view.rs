//! What one player is allowed to see.
//!
//! Players see every hand except their own. For their own hand they only get
//! what hints have revealed, slot by slot.

use serde::{Deserialize, Serialize};

use crate::core::{Card, CardKnowledge, Color, GamePhase, GameState, Player, PlayerId};
use crate::error::{EngineError, Result};

/// Another player's hand, fully visible.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibleHand {
    pub player: PlayerId,
    pub cards: Vec<Card>,
}

/// Game status as seen by `viewer`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusView {
    pub viewer: PlayerId,
    pub players: Vec<Player>,
    pub visible_hands: Vec<VisibleHand>,
    pub own_hand: Vec<CardKnowledge>,
    pub played_cards: Vec<(Color, u8)>,
    pub discard_pile: Vec<Card>,
    pub hints: u8,
    pub strikes: u8,
    pub game_over: bool,
    pub current_player: PlayerId,
    pub score: u32,
    pub deck_size: usize,
    pub phase: GamePhase,
}

impl StatusView {
    /// Build the view for `viewer`. Fails if they are not seated.
    pub fn for_player(state: &GameState, viewer: PlayerId) -> Result<Self> {
        let own_hand = state
            .hand_knowledge(viewer)
            .ok_or(EngineError::PlayerNotFound(viewer))?;

        let visible_hands = state
            .players()
            .iter()
            .map(Player::id)
            .filter(|&id| id != viewer)
            .map(|id| VisibleHand {
                player: id,
                cards: state.hand(id).map(<[Card]>::to_vec).unwrap_or_default(),
            })
            .collect();

        Ok(Self {
            viewer,
            players: state.players().to_vec(),
            visible_hands,
            own_hand,
            played_cards: state.played_cards(),
            discard_pile: state.discard_pile().to_vec(),
            hints: state.hints(),
            strikes: state.strikes(),
            game_over: state.is_game_over(),
            current_player: state.current_player(),
            score: state.score(),
            deck_size: state.deck_size(),
            phase: state.phase(),
        })
    }
}
