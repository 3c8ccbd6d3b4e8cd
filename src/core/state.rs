//! Game state: the aggregate every action mutates.
//!
//! ## GameState
//!
//! - Players in seating order and their hands (slot order)
//! - Draw deck, played stacks, discard pile
//! - Hint and strike counters
//! - Turn pointer, final-round countdown, game-over reason
//! - Per-card hint knowledge and the game history
//!
//! All fields are private. Reads go through accessors; writes are crate-only
//! and keep the invariants: hints stay in `0..=MAX_HINTS`, a stack only ever
//! grows by one, reaching `MAX_STRIKES` ends the game, and a card lives in at
//! most one of hand, deck or discard pile.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::action::Hint;
use super::card::{Card, CardId, Color};
use super::deck::Deck;
use super::player::{Player, PlayerId};
use crate::error::{EngineError, Result};
use crate::rules::policy::{COLOR_COUNT, MAX_CARD_VALUE, MAX_HINTS, MAX_STRIKES};

/// Why a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOverReason {
    MaxStrikes,
    PerfectScore,
    DeckExhausted,
}

impl fmt::Display for GameOverReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOverReason::MaxStrikes => f.write_str("too many strikes"),
            GameOverReason::PerfectScore => f.write_str("perfect score"),
            GameOverReason::DeckExhausted => f.write_str("final round complete"),
        }
    }
}

/// Lifecycle of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Players seated, hands not dealt.
    Setup,
    InProgress,
    /// Deck exhausted; turns left before the game ends.
    FinalRound(usize),
    GameOver(GameOverReason),
}

/// What hints have revealed about one card in a hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardKnowledge {
    pub card: CardId,
    pub color: Option<Color>,
    pub value: Option<u8>,
}

impl CardKnowledge {
    fn unknown(card: CardId) -> Self {
        Self {
            card,
            color: None,
            value: None,
        }
    }
}

/// Full game state.
#[derive(Clone, Debug)]
pub struct GameState {
    players: Vec<Player>,
    hands: FxHashMap<PlayerId, Vec<Card>>,
    deck: Deck,

    /// Highest rank played per color, indexed by `Color::index`.
    played: [u8; COLOR_COUNT],
    discard_pile: Vec<Card>,

    hints: u8,
    strikes: u8,

    current_player_index: usize,
    started: bool,
    game_over: Option<GameOverReason>,
    final_turns_remaining: Option<usize>,

    knowledge: FxHashMap<CardId, CardKnowledge>,
    history: Vector<String>,
}

impl GameState {
    /// Seat `players` with empty hands. Callers validate the roster.
    pub(crate) fn new(players: Vec<Player>, deck: Deck) -> Self {
        let hands = players.iter().map(|p| (p.id(), Vec::new())).collect();

        Self {
            players,
            hands,
            deck,
            played: [0; COLOR_COUNT],
            discard_pile: Vec::new(),
            hints: MAX_HINTS,
            strikes: 0,
            current_player_index: 0,
            started: false,
            game_over: None,
            final_turns_remaining: None,
            knowledge: FxHashMap::default(),
            history: Vector::new(),
        }
    }

    // === Players ===

    /// Players in seating order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Number of seated players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Look up a player by id.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == id)
    }

    /// Check if `id` is seated at this table.
    #[must_use]
    pub fn has_player(&self, id: PlayerId) -> bool {
        self.hands.contains_key(&id)
    }

    pub(crate) fn rename_player(&mut self, id: PlayerId, name: impl Into<String>) -> Result<()> {
        let player = self
            .players
            .iter_mut()
            .find(|p| p.id() == id)
            .ok_or(EngineError::PlayerNotFound(id))?;
        player.set_name(name);
        Ok(())
    }

    pub(crate) fn display_name(&self, id: PlayerId) -> String {
        self.player(id)
            .map_or_else(|| id.to_string(), |p| p.name().to_string())
    }

    // === Turn ===

    /// Seat index of the current player.
    #[must_use]
    pub fn current_player_index(&self) -> usize {
        self.current_player_index
    }

    /// Player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.players[self.current_player_index].id()
    }

    /// Check if the game has ended.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over.is_some()
    }

    /// Why the game ended, if it has.
    #[must_use]
    pub fn game_over_reason(&self) -> Option<GameOverReason> {
        self.game_over
    }

    /// `None` until the deck runs out, then counts down to 0.
    #[must_use]
    pub fn final_turns_remaining(&self) -> Option<usize> {
        self.final_turns_remaining
    }

    /// Current lifecycle phase, derived from the counters.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        match (self.game_over, self.started, self.final_turns_remaining) {
            (Some(reason), _, _) => GamePhase::GameOver(reason),
            (None, false, _) => GamePhase::Setup,
            (None, true, Some(turns)) => GamePhase::FinalRound(turns),
            (None, true, None) => GamePhase::InProgress,
        }
    }

    // === Cards ===

    /// A player's hand in slot order.
    #[must_use]
    pub fn hand(&self, player: PlayerId) -> Option<&[Card]> {
        self.hands.get(&player).map(Vec::as_slice)
    }

    /// Hint knowledge for each card in a player's hand, in slot order.
    #[must_use]
    pub fn hand_knowledge(&self, player: PlayerId) -> Option<Vec<CardKnowledge>> {
        let hand = self.hands.get(&player)?;
        Some(
            hand.iter()
                .map(|card| {
                    self.knowledge
                        .get(&card.id())
                        .copied()
                        .unwrap_or_else(|| CardKnowledge::unknown(card.id()))
                })
                .collect(),
        )
    }

    /// Cards left to draw.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.deck.len()
    }

    /// Check if the draw deck is exhausted.
    #[must_use]
    pub fn is_deck_empty(&self) -> bool {
        self.deck.is_empty()
    }

    /// Discarded and misplayed cards, oldest first.
    #[must_use]
    pub fn discard_pile(&self) -> &[Card] {
        &self.discard_pile
    }

    /// Highest rank played in `color`, 0 if none.
    #[must_use]
    pub fn played_rank(&self, color: Color) -> u8 {
        self.played[color.index()]
    }

    /// All stacks in `Color::ALL` order.
    #[must_use]
    pub fn played_cards(&self) -> Vec<(Color, u8)> {
        Color::ALL.iter().map(|&c| (c, self.played_rank(c))).collect()
    }

    /// Check if every stack has reached 5.
    #[must_use]
    pub fn all_stacks_complete(&self) -> bool {
        self.played.iter().all(|&rank| rank == MAX_CARD_VALUE)
    }

    /// Sum of all stacks.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.played.iter().map(|&rank| u32::from(rank)).sum()
    }

    // === Tokens ===

    /// Hint tokens available.
    #[must_use]
    pub fn hints(&self) -> u8 {
        self.hints
    }

    /// Strikes taken so far.
    #[must_use]
    pub fn strikes(&self) -> u8 {
        self.strikes
    }

    // === History ===

    /// Every history line so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<String> {
        &self.history
    }

    pub(crate) fn log(&mut self, line: impl Into<String>) {
        self.history.push_back(line.into());
    }

    // === Mutation ===

    /// Deal `hand_size` cards to every player in seating order.
    pub(crate) fn deal(&mut self, hand_size: usize) {
        self.log(format!("Game started with {} players.", self.players.len()));

        let order: Vec<PlayerId> = self.players.iter().map(Player::id).collect();
        for player in order {
            let mut dealt = 0;
            for _ in 0..hand_size {
                let Some(card) = self.deck.draw() else { break };
                self.give_card(player, card);
                dealt += 1;
            }
            tracing::info!(player = %player, cards = dealt, "dealt hand");
            let line = format!("Dealt {} cards to {}.", dealt, self.display_name(player));
            self.log(line);
        }

        self.started = true;
    }

    fn give_card(&mut self, player: PlayerId, card: Card) {
        if let Some(hand) = self.hands.get_mut(&player) {
            hand.push(card);
            self.knowledge.insert(card.id(), CardKnowledge::unknown(card.id()));
        }
    }

    /// Remove the card at `index` from a hand. Later slots shift down.
    pub(crate) fn take_card(&mut self, player: PlayerId, index: usize) -> Result<Card> {
        let hand = self
            .hands
            .get_mut(&player)
            .ok_or(EngineError::PlayerNotFound(player))?;
        if index >= hand.len() {
            return Err(EngineError::CardIndexOutOfRange { player, index });
        }

        let card = hand.remove(index);
        self.knowledge.remove(&card.id());
        Ok(card)
    }

    /// Draw one card into the last slot of a hand.
    ///
    /// `Ok(None)` when the deck is empty.
    pub(crate) fn draw_replacement(&mut self, player: PlayerId) -> Result<Option<Card>> {
        if !self.hands.contains_key(&player) {
            return Err(EngineError::PlayerNotFound(player));
        }

        let drawn = self.deck.draw();
        if let Some(card) = drawn {
            self.give_card(player, card);
        }
        Ok(drawn)
    }

    /// Put `card` on its stack if it is the next rank. Returns whether it was.
    pub(crate) fn try_play(&mut self, card: Card) -> bool {
        let rank = &mut self.played[card.color().index()];
        if card.value() == *rank + 1 {
            *rank = card.value();
            true
        } else {
            false
        }
    }

    pub(crate) fn discard(&mut self, card: Card) {
        self.discard_pile.push(card);
    }

    /// Gain one hint token. Returns false when already at `MAX_HINTS`.
    pub(crate) fn gain_hint(&mut self) -> bool {
        if self.hints < MAX_HINTS {
            self.hints += 1;
            true
        } else {
            false
        }
    }

    /// Spend one hint token. Returns false when none are left.
    pub(crate) fn spend_hint(&mut self) -> bool {
        if self.hints > 0 {
            self.hints -= 1;
            true
        } else {
            false
        }
    }

    /// Add a strike, ending the game at `MAX_STRIKES`.
    pub(crate) fn add_strike(&mut self) {
        self.strikes = (self.strikes + 1).min(MAX_STRIKES);
        if self.strikes >= MAX_STRIKES {
            self.end_game(GameOverReason::MaxStrikes);
        }
    }

    /// Record what `hint` reveals about `card`.
    pub(crate) fn reveal(&mut self, card: &Card, hint: Hint) {
        let entry = self
            .knowledge
            .entry(card.id())
            .or_insert_with(|| CardKnowledge::unknown(card.id()));
        match hint {
            Hint::Color(color) => entry.color = Some(color),
            Hint::Value(value) => entry.value = Some(value),
        }
    }

    /// End the game. Only the first reason is kept.
    pub(crate) fn end_game(&mut self, reason: GameOverReason) {
        if self.game_over.is_some() {
            return;
        }
        self.game_over = Some(reason);

        let score = self.score();
        tracing::info!(%reason, score, "game over");
        self.log(format!("Game over: {reason}. Final score: {score}."));
    }

    /// Pass the turn to the next player and re-check end conditions.
    pub(crate) fn advance_turn(&mut self) {
        if self.is_game_over() {
            return;
        }

        let player_count = self.players.len();
        self.current_player_index = (self.current_player_index + 1) % player_count;

        match self.final_turns_remaining {
            None if self.deck.is_empty() => {
                self.final_turns_remaining = Some(player_count);
                tracing::info!(turns = player_count, "final round started");
                self.log(format!(
                    "The deck is empty. Final round: {player_count} turns remaining."
                ));
            }
            Some(turns) if turns > 0 => self.final_turns_remaining = Some(turns - 1),
            _ => {}
        }

        if self.strikes >= MAX_STRIKES {
            self.end_game(GameOverReason::MaxStrikes);
        } else if self.all_stacks_complete() {
            self.end_game(GameOverReason::PerfectScore);
        } else if self.final_turns_remaining == Some(0) {
            self.end_game(GameOverReason::DeckExhausted);
        }
    }

    // === Scenario setup ===

    pub(crate) fn set_hints(&mut self, hints: u8) {
        self.hints = hints.min(MAX_HINTS);
    }

    pub(crate) fn set_strikes(&mut self, strikes: u8) {
        self.strikes = strikes.min(MAX_STRIKES);
        if self.strikes >= MAX_STRIKES {
            self.end_game(GameOverReason::MaxStrikes);
        }
    }

    /// Raise a stack to `rank`. Lower ranks are ignored so stacks never shrink.
    pub(crate) fn set_played_rank(&mut self, color: Color, rank: u8) {
        let slot = &mut self.played[color.index()];
        *slot = (*slot).max(rank.min(MAX_CARD_VALUE));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seat(ids: &[u32], deck: Deck) -> GameState {
        let players = ids.iter().map(|&id| Player::new(PlayerId::new(id))).collect();
        GameState::new(players, deck)
    }

    fn faces(n: usize) -> Vec<(Color, u8)> {
        (0..n).map(|i| (Color::ALL[i % 5], (i % 5) as u8 + 1)).collect()
    }

    #[test]
    fn test_new_state() {
        let state = seat(&[10, 20], Deck::from_draw_order(&faces(10)));

        assert_eq!(state.player_count(), 2);
        assert_eq!(state.current_player(), PlayerId::new(10));
        assert_eq!(state.hints(), MAX_HINTS);
        assert_eq!(state.strikes(), 0);
        assert_eq!(state.phase(), GamePhase::Setup);
        assert_eq!(state.score(), 0);
        assert!(state.hand(PlayerId::new(10)).unwrap().is_empty());
        assert!(state.hand(PlayerId::new(99)).is_none());
    }

    #[test]
    fn test_deal_in_seating_order() {
        let mut state = seat(&[1, 2], Deck::from_draw_order(&faces(12)));
        state.deal(5);

        let first: Vec<u32> = state
            .hand(PlayerId::new(1))
            .unwrap()
            .iter()
            .map(|c| c.id().raw())
            .collect();
        let second: Vec<u32> = state
            .hand(PlayerId::new(2))
            .unwrap()
            .iter()
            .map(|c| c.id().raw())
            .collect();

        assert_eq!(first, vec![0, 1, 2, 3, 4]);
        assert_eq!(second, vec![5, 6, 7, 8, 9]);
        assert_eq!(state.deck_size(), 2);
        assert_eq!(state.phase(), GamePhase::InProgress);
        assert_eq!(state.history().len(), 3);
    }

    #[test]
    fn test_take_card_shifts_slots() {
        let mut state = seat(&[1, 2], Deck::from_draw_order(&faces(10)));
        state.deal(5);

        let taken = state.take_card(PlayerId::new(1), 1).unwrap();
        assert_eq!(taken.id(), CardId::new(1));

        let ids: Vec<u32> = state
            .hand(PlayerId::new(1))
            .unwrap()
            .iter()
            .map(|c| c.id().raw())
            .collect();
        assert_eq!(ids, vec![0, 2, 3, 4]);

        assert_eq!(
            state.take_card(PlayerId::new(1), 4),
            Err(EngineError::CardIndexOutOfRange {
                player: PlayerId::new(1),
                index: 4,
            })
        );
        assert_eq!(
            state.take_card(PlayerId::new(9), 0),
            Err(EngineError::PlayerNotFound(PlayerId::new(9)))
        );
    }

    #[test]
    fn test_draw_replacement_on_empty_deck() {
        let mut state = seat(&[1, 2], Deck::from_draw_order(&faces(10)));
        state.deal(5);

        assert!(state.is_deck_empty());
        assert_eq!(state.draw_replacement(PlayerId::new(1)), Ok(None));
        assert_eq!(
            state.draw_replacement(PlayerId::new(3)),
            Err(EngineError::PlayerNotFound(PlayerId::new(3)))
        );
    }

    #[test]
    fn test_try_play_only_next_rank() {
        let mut state = seat(&[1, 2], Deck::from_draw_order(&[]));
        let red = |id, value| Card::new(CardId::new(id), Color::Red, value);

        assert!(!state.try_play(red(0, 2)));
        assert!(state.try_play(red(1, 1)));
        assert!(!state.try_play(red(2, 1)));
        assert!(state.try_play(red(3, 2)));
        assert_eq!(state.played_rank(Color::Red), 2);
        assert_eq!(state.played_rank(Color::Blue), 0);
    }

    #[test]
    fn test_hint_tokens_bounded() {
        let mut state = seat(&[1, 2], Deck::from_draw_order(&[]));

        assert!(!state.gain_hint());
        assert_eq!(state.hints(), MAX_HINTS);

        for _ in 0..MAX_HINTS {
            assert!(state.spend_hint());
        }
        assert!(!state.spend_hint());
        assert_eq!(state.hints(), 0);
    }

    #[test]
    fn test_strikes_end_game() {
        let mut state = seat(&[1, 2], Deck::from_draw_order(&faces(10)));
        state.deal(4);

        state.add_strike();
        state.add_strike();
        assert!(!state.is_game_over());

        state.add_strike();
        assert_eq!(state.phase(), GamePhase::GameOver(GameOverReason::MaxStrikes));
        assert_eq!(state.strikes(), MAX_STRIKES);
    }

    #[test]
    fn test_turn_rotation_wraps() {
        let mut state = seat(&[1, 2, 3], Deck::from_draw_order(&faces(30)));
        state.deal(5);

        let mut seen = vec![state.current_player_index()];
        for _ in 0..4 {
            state.advance_turn();
            seen.push(state.current_player_index());
        }
        assert_eq!(seen, vec![0, 1, 2, 0, 1]);
    }

    #[test]
    fn test_final_round_countdown() {
        let mut state = seat(&[1, 2], Deck::from_draw_order(&faces(10)));
        state.deal(5);
        assert!(state.is_deck_empty());

        state.advance_turn();
        assert_eq!(state.phase(), GamePhase::FinalRound(2));
        state.advance_turn();
        assert_eq!(state.phase(), GamePhase::FinalRound(1));
        state.advance_turn();
        assert_eq!(state.phase(), GamePhase::GameOver(GameOverReason::DeckExhausted));

        let index = state.current_player_index();
        state.advance_turn();
        assert_eq!(state.current_player_index(), index);
    }

    #[test]
    fn test_first_reason_wins() {
        let mut state = seat(&[1, 2], Deck::from_draw_order(&[]));
        state.end_game(GameOverReason::PerfectScore);
        state.end_game(GameOverReason::MaxStrikes);
        assert_eq!(state.game_over_reason(), Some(GameOverReason::PerfectScore));
    }

    #[test]
    fn test_reveal_and_forget() {
        let mut state = seat(&[1, 2], Deck::from_draw_order(&faces(10)));
        state.deal(5);

        let card = state.hand(PlayerId::new(2)).unwrap()[0];
        state.reveal(&card, Hint::Color(card.color()));
        state.reveal(&card, Hint::Value(card.value()));

        let known = state.hand_knowledge(PlayerId::new(2)).unwrap()[0];
        assert_eq!(known.card, card.id());
        assert_eq!(known.color, Some(card.color()));
        assert_eq!(known.value, Some(card.value()));

        state.take_card(PlayerId::new(2), 0).unwrap();
        assert!(!state.knowledge.contains_key(&card.id()));
    }

    #[test]
    fn test_set_played_rank_never_lowers() {
        let mut state = seat(&[1, 2], Deck::from_draw_order(&[]));
        state.set_played_rank(Color::Green, 4);
        state.set_played_rank(Color::Green, 2);
        state.set_played_rank(Color::White, 9);

        assert_eq!(state.played_rank(Color::Green), 4);
        assert_eq!(state.played_rank(Color::White), MAX_CARD_VALUE);
        assert_eq!(state.score(), 9);
    }

    #[test]
    fn test_rename_player() {
        let mut state = seat(&[1, 2], Deck::from_draw_order(&[]));
        state.rename_player(PlayerId::new(2), "Ada").unwrap();
        assert_eq!(state.player(PlayerId::new(2)).unwrap().name(), "Ada");
        assert!(state.rename_player(PlayerId::new(3), "Nobody").is_err());
    }
}
