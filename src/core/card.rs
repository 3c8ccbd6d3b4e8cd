//! Cards and colors.
//!
//! A `Card` is an immutable value with an identity. Two cards with the same
//! color and value are still different cards: `CardId` tells them apart as
//! they move between hands, the deck and the discard pile.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::EngineError;

/// Unique card identifier, assigned by the deck that created the card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// The five card colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
    White,
}

impl Color {
    /// All colors in stack display order.
    pub const ALL: [Color; 5] = [
        Color::Red,
        Color::Blue,
        Color::Green,
        Color::Yellow,
        Color::White,
    ];

    /// Position in `Color::ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Upper-case name used in messages and history lines.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::Red => "RED",
            Color::Blue => "BLUE",
            Color::Green => "GREEN",
            Color::Yellow => "YELLOW",
            Color::White => "WHITE",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| EngineError::UnknownColor(s.to_string()))
    }
}

/// A single card. Immutable once created.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    color: Color,
    value: u8,
}

impl Card {
    /// Create a card. Only decks mint cards, so ids stay unique per game.
    pub(crate) const fn new(id: CardId, color: Color, value: u8) -> Self {
        Self { id, color, value }
    }

    /// Get the card ID.
    #[must_use]
    pub const fn id(&self) -> CardId {
        self.id
    }

    /// Get the card color.
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Get the card rank.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.value
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_parse() {
        assert_eq!("RED".parse::<Color>().unwrap(), Color::Red);
        assert_eq!("yellow".parse::<Color>().unwrap(), Color::Yellow);
        assert_eq!(" White ".parse::<Color>().unwrap(), Color::White);
        assert!(matches!(
            "PURPLE".parse::<Color>(),
            Err(EngineError::UnknownColor(s)) if s == "PURPLE"
        ));
    }

    #[test]
    fn test_card_display() {
        let card = Card::new(CardId::new(3), Color::Green, 4);
        assert_eq!(card.to_string(), "GREEN 4");
        assert_eq!(CardId::new(3).to_string(), "Card(3)");
    }

    #[test]
    fn test_identity_distinguishes_equal_faces() {
        let a = Card::new(CardId::new(1), Color::Red, 1);
        let b = Card::new(CardId::new(2), Color::Red, 1);

        assert_eq!((a.color(), a.value()), (b.color(), b.value()));
        assert_ne!(a, b);
    }

    #[test]
    fn test_color_serialization() {
        let json = serde_json::to_string(&Color::Blue).unwrap();
        assert_eq!(json, "\"BLUE\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Color::Blue);
    }
}
