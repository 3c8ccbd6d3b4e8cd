//! Core engine types: cards, deck, players, actions, RNG, configuration, state.
//!
//! These are the building blocks the rules and action handlers operate on.

pub mod action;
pub mod card;
pub mod config;
pub mod deck;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Action, Hint, HintKind};
pub use card::{Card, CardId, Color};
pub use config::GameConfig;
pub use deck::Deck;
pub use player::{Player, PlayerId};
pub use rng::GameRng;
pub use state::{CardKnowledge, GameOverReason, GamePhase, GameState};
