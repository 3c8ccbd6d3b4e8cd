//! Building a game, shuffled or from a fixed scenario.
//!
//! `GameManager::create_new_game` goes through `GameSetup` with a shuffled
//! deck. Tests and replays can stack the deck and start from given stacks,
//! hints and strikes instead.
//!
//! ```
//! use hanabi_engine::{Color, GameSetup};
//!
//! let game = GameSetup::new(&[1, 2])
//!     .stacked_deck(vec![(Color::Red, 1); 12])
//!     .played(Color::Blue, 3)
//!     .hints(2)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(game.current_score(), 3);
//! assert_eq!(game.hints(), 2);
//! assert_eq!(game.deck_size(), 2);
//! ```

use rustc_hash::FxHashSet;

use crate::core::{Color, Deck, GameConfig, GameRng, GameState, Player, PlayerId};
use crate::error::{EngineError, Result};
use crate::manager::GameManager;
use crate::rules::policy::{self, MAX_HINTS, MAX_STRIKES};

/// Builder for a `GameManager`.
#[derive(Clone, Debug)]
pub struct GameSetup {
    player_ids: Vec<PlayerId>,
    config: GameConfig,
    stacked_deck: Option<Vec<(Color, u8)>>,
    played: Vec<(Color, u8)>,
    hints: Option<u8>,
    strikes: Option<u8>,
}

impl GameSetup {
    /// Seat players in the given order.
    pub fn new(player_ids: &[u32]) -> Self {
        Self {
            player_ids: player_ids.iter().copied().map(PlayerId::new).collect(),
            config: GameConfig::default(),
            stacked_deck: None,
            played: Vec::new(),
            hints: None,
            strikes: None,
        }
    }

    /// Use `config` for the seed and player names.
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the shuffle seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Replace the shuffled deck with faces drawn in this order, first element
    /// first. The deal draws from it too.
    pub fn stacked_deck(mut self, faces: Vec<(Color, u8)>) -> Self {
        self.stacked_deck = Some(faces);
        self
    }

    /// Start `color`'s stack at `rank`.
    pub fn played(mut self, color: Color, rank: u8) -> Self {
        self.played.push((color, rank));
        self
    }

    /// Start with `hints` tokens instead of the full bank.
    pub fn hints(mut self, hints: u8) -> Self {
        self.hints = Some(hints);
        self
    }

    /// Start with `strikes` already taken.
    pub fn strikes(mut self, strikes: u8) -> Self {
        self.strikes = Some(strikes);
        self
    }

    /// Validate, seat, deal.
    pub fn build(self) -> Result<GameManager> {
        let count = self.player_ids.len();
        if !policy::is_player_count_valid(count) {
            return Err(EngineError::InvalidPlayerCount(count));
        }

        let mut seen = FxHashSet::default();
        if let Some(&dup) = self.player_ids.iter().find(|&&id| !seen.insert(id)) {
            return Err(EngineError::DuplicatePlayer(dup));
        }

        self.validate_scenario()?;

        let players: Vec<Player> = self
            .player_ids
            .iter()
            .map(|&id| match self.config.name_for(id) {
                Some(name) => Player::with_name(id, name),
                None => Player::new(id),
            })
            .collect();

        let deck = match &self.stacked_deck {
            Some(faces) => Deck::from_draw_order(faces),
            None => Deck::shuffled(&mut GameRng::new(self.config.seed).for_context("deck")),
        };

        let mut state = GameState::new(players, deck);
        for &(color, rank) in &self.played {
            state.set_played_rank(color, rank);
        }
        if let Some(hints) = self.hints {
            state.set_hints(hints);
        }
        if let Some(strikes) = self.strikes {
            state.set_strikes(strikes);
        }

        state.deal(policy::initial_hand_size(count));
        tracing::info!(
            players = count,
            seed = self.config.seed,
            stacked = self.stacked_deck.is_some(),
            "game created"
        );

        Ok(GameManager::from_state(state))
    }

    fn validate_scenario(&self) -> Result<()> {
        if let Some(faces) = &self.stacked_deck {
            let bad_face = faces
                .iter()
                .find(|(_, value)| !policy::is_valid_card_value(*value));
            if let Some((color, value)) = bad_face {
                return Err(EngineError::InvalidSetup(format!(
                    "card value {value} for {color} is out of range"
                )));
            }
        }

        let mut ranks = [0u8; policy::COLOR_COUNT];
        for &(color, rank) in &self.played {
            if rank > policy::MAX_CARD_VALUE {
                return Err(EngineError::InvalidSetup(format!(
                    "{color} stack cannot start at {rank}"
                )));
            }
            let slot = &mut ranks[color.index()];
            *slot = (*slot).max(rank);
        }
        // A game with every stack at 5 would already be won.
        if ranks.iter().all(|&rank| rank == policy::MAX_CARD_VALUE) {
            return Err(EngineError::InvalidSetup("every stack is already complete".to_string()));
        }

        if self.hints.is_some_and(|h| h > MAX_HINTS) {
            return Err(EngineError::InvalidSetup(format!("hints above {MAX_HINTS}")));
        }
        if self.strikes.is_some_and(|s| s >= MAX_STRIKES) {
            return Err(EngineError::InvalidSetup(format!(
                "a game cannot start with {MAX_STRIKES} or more strikes"
            )));
        }
        Ok(())
    }
}
