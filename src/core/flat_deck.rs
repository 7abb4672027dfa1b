use crate::core::card::Card;
use crate::core::deck::Deck;
use std::ops::{Index, Range, RangeFull};

use rand::Rng;
use rand::seq::SliceRandom;

/// `FlatDeck` is a deck of cards that allows easy
/// indexing into the cards. It does not provide
/// contains methods.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatDeck {
    /// Card storage.
    cards: Vec<Card>,
}

impl FlatDeck {
    /// How many cards are there in the deck ?
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Have all cards been dealt ?
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Randomly shuffle the flat deck.
    /// This will ensure the there's no order to the deck.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng)
    }

    /// Pick `amount` cards uniformly at random without replacement.
    ///
    /// Only `amount` swaps are done, so this is much cheaper than a full
    /// shuffle when few cards are needed. Each call is an independent draw:
    /// the result does not depend on what earlier calls left in the deck.
    /// Asking for more cards than the deck holds returns the whole deck.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R, amount: usize) -> &[Card] {
        let (drawn, _rest) = self.cards.partial_shuffle(rng, amount);
        drawn
    }

    /// Deal a card if there is one there to deal.
    /// None if the deck is empty
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }
}

impl Index<usize> for FlatDeck {
    type Output = Card;
    fn index(&self, index: usize) -> &Card {
        &self.cards[index]
    }
}
impl Index<Range<usize>> for FlatDeck {
    type Output = [Card];
    fn index(&self, index: Range<usize>) -> &[Card] {
        &self.cards[index]
    }
}
impl Index<RangeFull> for FlatDeck {
    type Output = [Card];
    fn index(&self, index: RangeFull) -> &[Card] {
        &self.cards[index]
    }
}

impl From<Vec<Card>> for FlatDeck {
    fn from(value: Vec<Card>) -> Self {
        Self { cards: value }
    }
}

/// Allow creating a flat deck from a Deck
impl From<Deck> for FlatDeck {
    /// Flatten this deck, consuming it to produce a `FlatDeck` that's
    /// easier to get random access to. The same deck always flattens to
    /// the same order.
    fn from(value: Deck) -> Self {
        Self {
            cards: value.into_iter().collect(),
        }
    }
}

impl Default for FlatDeck {
    /// All 52 cards in canonical order.
    fn default() -> Self {
        Deck::default().into()
    }
}
