//! Per-game configuration.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Game configuration.
///
/// The rules themselves are fixed (see `rules::policy`); this only carries
/// what varies between otherwise identical games.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Shuffle seed. Same seed and players produce the same deal.
    pub seed: u64,

    /// Display names by player id. Players not listed get `"Player {id}"`.
    #[serde(default)]
    pub player_names: Vec<(PlayerId, String)>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: rand::random(),
            player_names: Vec::new(),
        }
    }
}

impl GameConfig {
    /// Set the shuffle seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Give a player a display name.
    pub fn with_player_name(mut self, player: PlayerId, name: impl Into<String>) -> Self {
        self.player_names.push((player, name.into()));
        self
    }

    /// Configured name for `player`, last entry wins.
    #[must_use]
    pub fn name_for(&self, player: PlayerId) -> Option<&str> {
        self.player_names
            .iter()
            .rev()
            .find(|(id, _)| *id == player)
            .map(|(_, name)| name.as_str())
    }
}
