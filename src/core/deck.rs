//! The shared draw deck.
//!
//! The deck owns the card id counter: every card it mints gets the next id,
//! starting at 0, before the shuffle. Ids are therefore reproducible per game
//! and never shared between games.
//!
//! Internally the top of the deck is the end of the vec.

use serde::{Deserialize, Serialize};

use super::card::{Card, CardId, Color};
use super::rng::GameRng;
use crate::rules::policy;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build the standard 50-card deck and shuffle it once.
    ///
    /// ```
    /// use hanabi_engine::core::{Deck, GameRng};
    ///
    /// let deck = Deck::shuffled(&mut GameRng::new(1));
    /// assert_eq!(deck.len(), 50);
    /// ```
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut next_id = 0u32;
        let mut cards = Vec::with_capacity(policy::DECK_SIZE);

        for color in Color::ALL {
            for value in policy::card_values() {
                for _ in 0..policy::copies_of_value(value) {
                    cards.push(Card::new(CardId::new(next_id), color, value));
                    next_id += 1;
                }
            }
        }

        rng.shuffle(&mut cards);
        Self { cards }
    }

    /// Build a deck that draws the given faces in order, first element first.
    ///
    /// Ids are assigned in the same order. Values are not range-checked here;
    /// `GameSetup` validates them before a game is built.
    #[must_use]
    pub fn from_draw_order(faces: &[(Color, u8)]) -> Self {
        let mut cards: Vec<Card> = faces
            .iter()
            .zip(0u32..)
            .map(|(&(color, value), id)| Card::new(CardId::new(id), color, value))
            .collect();
        cards.reverse();
        Self { cards }
    }

    /// Draw the top card. `None` once the deck is exhausted.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Check if no cards are left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Remaining cards, top of the deck last.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
