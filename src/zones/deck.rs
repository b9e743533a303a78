//! Draw and discard piles.
//!
//! A `Deck` never creates or destroys cards: every card is either in the draw
//! pile, in the discard pile, or held by whoever drew it until it is
//! discarded back.

use serde::Serialize;
use tracing::debug;

use crate::core::{GameRng, InvariantViolation};

/// An ordered draw pile plus its discard pile.
///
/// ```
/// use ares_rules::core::GameRng;
/// use ares_rules::zones::Deck;
///
/// let mut deck = Deck::new(vec![1, 2, 3], GameRng::new(0));
/// let hand = deck.draw(2);
/// assert_eq!(hand, vec![1, 2]);
///
/// deck.discard(hand);
/// // One card left, then the discard pile is reshuffled in.
/// assert_eq!(deck.draw(3).len(), 3);
/// assert_eq!(deck.reshuffles(), 1);
/// ```
#[derive(Clone, Debug, Serialize)]
pub struct Deck<T> {
    /// Front of the vec is the top of the pile.
    draw_pile: Vec<T>,
    discard_pile: Vec<T>,
    #[serde(skip)]
    rng: GameRng,
    reshuffles: u32,
}

impl<T> Deck<T> {
    /// Create a deck with the given draw pile, top card first. Not shuffled.
    #[must_use]
    pub fn new(cards: Vec<T>, rng: GameRng) -> Self {
        Self {
            draw_pile: cards,
            discard_pile: Vec::new(),
            rng,
            reshuffles: 0,
        }
    }

    /// Randomly permute the draw pile. The discard pile is untouched.
    pub fn shuffle(&mut self) {
        self.rng.shuffle(&mut self.draw_pile);
    }

    /// Draw up to `amount` cards from the top.
    ///
    /// When the draw pile runs out, the discard pile is shuffled in and the
    /// shortfall drawn from it. With both piles empty the result is short;
    /// running out is not an error.
    pub fn draw(&mut self, amount: usize) -> Vec<T> {
        let mut drawn = self.take_from_top(amount);

        if drawn.len() < amount && !self.discard_pile.is_empty() {
            // Short draw: the draw pile is empty now.
            self.refill_from_discard();
            drawn.extend(self.take_from_top(amount - drawn.len()));
        }

        drawn
    }

    fn take_from_top(&mut self, amount: usize) -> Vec<T> {
        let available = amount.min(self.draw_pile.len());
        self.draw_pile.drain(..available).collect()
    }

    /// Append cards to the discard pile, in the given order.
    pub fn discard(&mut self, cards: impl IntoIterator<Item = T>) {
        self.discard_pile.extend(cards);
    }

    /// Move the whole discard pile into the (empty) draw pile and shuffle it.
    ///
    /// Returns the number of cards moved.
    pub fn reshuffle_discard_pile(&mut self) -> Result<usize, InvariantViolation> {
        if !self.draw_pile.is_empty() {
            return Err(InvariantViolation::ReshuffleWithCardsRemaining {
                remaining: self.draw_pile.len(),
            });
        }
        Ok(self.refill_from_discard())
    }

    /// Caller guarantees the draw pile is empty.
    fn refill_from_discard(&mut self) -> usize {
        debug_assert!(self.draw_pile.is_empty(), "refill with cards remaining");
        let moved = self.discard_pile.len();
        self.draw_pile.append(&mut self.discard_pile);
        self.shuffle();
        self.reshuffles += 1;
        debug!(moved, "discard pile reshuffled into deck");
        moved
    }

    /// Cards left in the draw pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.draw_pile.len()
    }

    /// True when the draw pile is empty (the discard pile may not be).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.draw_pile.is_empty()
    }

    #[must_use]
    pub fn discard_len(&self) -> usize {
        self.discard_pile.len()
    }

    /// The draw pile, top card first.
    #[must_use]
    pub fn draw_pile(&self) -> &[T] {
        &self.draw_pile
    }

    #[must_use]
    pub fn discard_pile(&self) -> &[T] {
        &self.discard_pile
    }

    /// How many times the discard pile has been shuffled back in.
    #[must_use]
    pub fn reshuffles(&self) -> u32 {
        self.reshuffles
    }
}
