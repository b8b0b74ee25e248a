//! The ordered standard 52-card collection.

use alloc::vec::Vec;
use core::ops::{Bound, Index, RangeBounds};

use rand::Rng;
use rand::SeedableRng;
use rand::seq::IndexedRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::{ChoiceError, IndexError};

/// An immutable, ordered standard deck of 52 cards.
///
/// The deck is built suit by suit in declaration order (spades, clubs,
/// diamonds, hearts), each suit ascending from two to ace: index 0 is the
/// two of spades and index 51 the ace of hearts. The sequence never
/// changes after construction; every operation either reads it or returns
/// a fresh collection.
///
/// # Example
///
/// ```
/// use deckplane::{Card, Deck, Rank, Suit};
///
/// let deck = Deck::new();
/// assert_eq!(deck.len(), 52);
/// assert_eq!(deck.at(0), Ok(Card::new(Rank::Two, Suit::Spades)));
/// assert_eq!(deck.at(-1), Ok(Card::new(Rank::Ace, Suit::Hearts)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Cards in storage order.
    cards: Vec<Card>,
}

impl Deck {
    /// Creates the standard deck in its fixed construction order.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Self { cards }
    }

    /// Returns the number of cards, always 52 for a standard deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the card at `position`.
    ///
    /// Negative positions count from the end, so -1 is the last card and
    /// -52 the first.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::OutOfRange`] when `position` falls outside
    /// `-len..len`.
    pub fn at(&self, position: isize) -> Result<Card, IndexError> {
        let index = if position < 0 {
            self.cards
                .len()
                .checked_sub(position.unsigned_abs())
                .ok_or(IndexError::OutOfRange)?
        } else {
            position.unsigned_abs()
        };
        self.cards.get(index).copied().ok_or(IndexError::OutOfRange)
    }

    /// Returns the cards in the half-open `range`.
    ///
    /// Out-of-range bounds are clamped to the collection rather than
    /// failing, and open bounds mean "from the start" / "to the end".
    ///
    /// # Example
    ///
    /// ```
    /// use deckplane::Deck;
    ///
    /// let deck = Deck::new();
    /// assert_eq!(deck.slice(..4), &deck.cards()[..4]);
    /// assert_eq!(deck.slice(48..100).len(), 4);
    /// ```
    pub fn slice<R: RangeBounds<usize>>(&self, range: R) -> &[Card] {
        let start = match range.start_bound() {
            Bound::Included(&start) => start,
            Bound::Excluded(&start) => start.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let stop = match range.end_bound() {
            Bound::Included(&stop) => stop.saturating_add(1),
            Bound::Excluded(&stop) => stop,
            Bound::Unbounded => self.cards.len(),
        };
        let stop = stop.min(self.cards.len());
        let start = start.min(stop);
        &self.cards[start..stop]
    }

    /// Returns a fresh iterator over the cards in storage order.
    pub fn iter(&self) -> core::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Returns a fresh iterator over the cards in reverse storage order.
    pub fn iter_rev(&self) -> core::iter::Rev<core::slice::Iter<'_, Card>> {
        self.cards.iter().rev()
    }

    /// Chooses one uniformly random card using the given generator.
    ///
    /// # Errors
    ///
    /// Returns [`ChoiceError::Empty`] when the collection has no cards.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Card, ChoiceError> {
        self.cards.choose(rng).copied().ok_or(ChoiceError::Empty)
    }

    /// Chooses one uniformly random card with a deterministic generator
    /// seeded from `seed`.
    ///
    /// The same seed always yields the same card.
    ///
    /// # Errors
    ///
    /// Returns [`ChoiceError::Empty`] when the collection has no cards.
    pub fn choose_with_seed(&self, seed: u64) -> Result<Card, ChoiceError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.choose(&mut rng)
    }

    /// Returns all cards sorted ascending by `key`, leaving the deck
    /// itself in construction order.
    ///
    /// The sort is stable, so cards with equal keys keep their storage
    /// order.
    #[must_use]
    pub fn sorted_by_key<K, F>(&self, key: F) -> Vec<Card>
    where
        K: Ord,
        F: FnMut(&Card) -> K,
    {
        let mut cards = self.cards.clone();
        cards.sort_by_key(key);
        cards
    }

    /// Returns the cards as a slice in storage order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<usize> for Deck {
    type Output = Card;

    fn index(&self, index: usize) -> &Card {
        &self.cards[index]
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = core::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
