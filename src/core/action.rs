//! Player actions and hint payloads.
//!
//! A hint is either a color or a value, each carrying its own typed payload:
//!
//! ```
//! use hanabi_engine::core::{Color, Hint, HintKind};
//!
//! let hint = Hint::parse(HintKind::Color, "red").unwrap();
//! assert_eq!(hint, Hint::Color(Color::Red));
//!
//! let hint = Hint::parse(HintKind::Value, "3").unwrap();
//! assert_eq!(hint, Hint::Value(3));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use super::card::{Card, Color};
use super::player::PlayerId;
use crate::error::{EngineError, Result};

/// Discriminant of a `Hint`, as received from the transport layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HintKind {
    Color,
    Value,
}

/// Information given to another player about their hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hint {
    Color(Color),
    /// Range-checked by the validator, not by construction.
    Value(u8),
}

impl Hint {
    /// Build a hint from its boundary encoding (`"RED"`, `"3"`).
    pub fn parse(kind: HintKind, raw: &str) -> Result<Self> {
        match kind {
            HintKind::Color => raw.parse().map(Hint::Color),
            HintKind::Value => raw
                .trim()
                .parse()
                .map(Hint::Value)
                .map_err(|_| EngineError::InvalidHintValue(raw.to_string())),
        }
    }

    /// Get the hint discriminant.
    #[must_use]
    pub fn kind(&self) -> HintKind {
        match self {
            Hint::Color(_) => HintKind::Color,
            Hint::Value(_) => HintKind::Value,
        }
    }

    /// Does this hint point at `card`?
    #[must_use]
    pub fn matches(&self, card: &Card) -> bool {
        match *self {
            Hint::Color(color) => card.color() == color,
            Hint::Value(value) => card.value() == value,
        }
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hint::Color(color) => write!(f, "{color}"),
            Hint::Value(value) => write!(f, "{value}"),
        }
    }
}

/// A complete player action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Play { card_index: usize },
    Discard { card_index: usize },
    Hint { target: PlayerId, hint: Hint },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CardId;

    #[test]
    fn test_parse_color() {
        assert_eq!(Hint::parse(HintKind::Color, "BLUE").unwrap(), Hint::Color(Color::Blue));
        assert!(matches!(
            Hint::parse(HintKind::Color, "3"),
            Err(EngineError::UnknownColor(_))
        ));
    }

    #[test]
    fn test_parse_value() {
        assert_eq!(Hint::parse(HintKind::Value, " 5 ").unwrap(), Hint::Value(5));
        // Out-of-range values parse; the validator rejects them later.
        assert_eq!(Hint::parse(HintKind::Value, "9").unwrap(), Hint::Value(9));
        assert!(matches!(
            Hint::parse(HintKind::Value, "RED"),
            Err(EngineError::InvalidHintValue(s)) if s == "RED"
        ));
    }

    #[test]
    fn test_matches() {
        let card = Card::new(CardId::new(0), Color::Yellow, 2);

        assert!(Hint::Color(Color::Yellow).matches(&card));
        assert!(!Hint::Color(Color::Red).matches(&card));
        assert!(Hint::Value(2).matches(&card));
        assert!(!Hint::Value(3).matches(&card));
    }

    #[test]
    fn test_kind_and_display() {
        assert_eq!(Hint::Color(Color::White).kind(), HintKind::Color);
        assert_eq!(Hint::Value(1).kind(), HintKind::Value);
        assert_eq!(Hint::Color(Color::White).to_string(), "WHITE");
        assert_eq!(Hint::Value(1).to_string(), "1");
    }

    #[test]
    fn test_action_serialization() {
        let action = Action::Hint {
            target: PlayerId::new(2),
            hint: Hint::Color(Color::Green),
        };
        let json = serde_json::to_string(&action).unwrap();
        let deserialized: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(action, deserialized);
    }
}
