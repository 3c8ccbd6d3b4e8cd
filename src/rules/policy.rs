//! Fixed game rules: player bounds, token limits, card ranges.

use std::ops::RangeInclusive;

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 5;
pub const MAX_HINTS: u8 = 8;
pub const MAX_STRIKES: u8 = 3;
pub const MIN_CARD_VALUE: u8 = 1;
pub const MAX_CARD_VALUE: u8 = 5;

pub const COLOR_COUNT: usize = 5;

/// Copies of each value per color, indexed by `value - 1`.
pub const COPIES_PER_VALUE: [usize; 5] = [3, 2, 2, 2, 1];

pub const DECK_SIZE: usize = 50;

/// Every stack complete.
pub const MAX_SCORE: u32 = (COLOR_COUNT as u32) * (MAX_CARD_VALUE as u32);

/// Cards dealt to each player at the start of a game.
#[must_use]
pub const fn initial_hand_size(player_count: usize) -> usize {
    if player_count <= 3 {
        5
    } else {
        4
    }
}

/// Check if a table of `player_count` can be seated.
#[must_use]
pub const fn is_player_count_valid(player_count: usize) -> bool {
    player_count >= MIN_PLAYERS && player_count <= MAX_PLAYERS
}

/// Check if `value` is a card rank.
#[must_use]
pub const fn is_valid_card_value(value: u8) -> bool {
    value >= MIN_CARD_VALUE && value <= MAX_CARD_VALUE
}

/// Every card rank, lowest first.
#[must_use]
pub const fn card_values() -> RangeInclusive<u8> {
    MIN_CARD_VALUE..=MAX_CARD_VALUE
}

/// Copies of `value` in one color, 0 for values outside the card range.
#[must_use]
pub const fn copies_of_value(value: u8) -> usize {
    if is_valid_card_value(value) {
        COPIES_PER_VALUE[(value - MIN_CARD_VALUE) as usize]
    } else {
        0
    }
}
