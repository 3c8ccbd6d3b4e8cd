//! # hanabi-engine
//!
//! Rule engine for a cooperative card game for 2-5 players. Players build
//! five color stacks from 1 to 5 while seeing everyone's cards but their own,
//! spending hint tokens to tell each other what they hold.
//!
//! ## Design Principles
//!
//! 1. **Validate, then mutate**: every command runs side-effect-free checks
//!    first. A rejected command leaves the game exactly as it was.
//!
//! 2. **Three outcomes, not exceptions**: commands return an `ActionResult`
//!    that is `Success`, `Failure` (legal but unfavourable, state changed) or
//!    `Invalid` (rejected, state unchanged). `EngineError` is reserved for bad
//!    construction input and broken invariants.
//!
//! 3. **Encapsulated aggregate**: `GameState` exposes accessors only. The
//!    transport layer cannot change hands or counters behind the validator.
//!
//! 4. **Reproducible**: a seed fully determines the shuffle, and card ids
//!    are assigned per deck, not from a global counter.
//!
//! ## Modules
//!
//! - `core`: cards, deck, players, actions, RNG, configuration, state
//! - `rules`: fixed policy, precondition checks, action results
//! - `actions`: play, discard and hint handlers
//! - `manager`: `GameManager`, the only entry point callers need
//! - `setup`: `GameSetup` for shuffled or scripted games
//! - `view`: per-player `StatusView`
//! - `error`: `EngineError`

pub mod actions;
pub mod core;
pub mod error;
pub mod manager;
pub mod rules;
pub mod setup;
pub mod view;

// Re-export commonly used types
pub use crate::core::{
    Action, Card, CardId, CardKnowledge, Color, GameConfig, GameOverReason, GamePhase, GameState,
    Hint, HintKind, Player, PlayerId,
};

pub use crate::error::{EngineError, Result};

pub use crate::manager::GameManager;

pub use crate::rules::{ActionResult, GameValidator, Outcome};

pub use crate::setup::GameSetup;

pub use crate::view::{StatusView, VisibleHand};
