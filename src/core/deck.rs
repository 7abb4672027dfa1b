use crate::core::card::Card;
use crate::core::card_bit_set::{CardBitSet, CardBitSetIter};

use super::EquityError;

/// The cards not yet accounted for.
///
/// Taking known cards out of the deck is a set difference, so the
/// remaining cards never depend on the order things were removed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck {
    cards: CardBitSet,
}

impl Deck {
    /// The full deck with every one of `known` taken out.
    ///
    /// ```
    /// use poker_equity::core::{Card, Deck};
    ///
    /// let known = ["Ah", "Kh", "2c", "7d", "Ts"].map(|s| Card::try_from(s).unwrap());
    /// let deck = Deck::without(&known).unwrap();
    ///
    /// assert_eq!(47, deck.len());
    /// assert!(!deck.contains(&known[0]));
    /// ```
    pub fn without(known: &[Card]) -> Result<Self, EquityError> {
        let known = CardBitSet::from_distinct(known)?;
        Ok(Self { cards: !known })
    }

    /// True if the card hasn't been taken out.
    pub fn contains(&self, c: &Card) -> bool {
        self.cards.contains(*c)
    }

    /// Take a card out. Returns false if it was already gone.
    pub fn remove(&mut self, c: &Card) -> bool {
        self.cards.remove(*c)
    }

    /// Cards left.
    pub fn len(&self) -> usize {
        self.cards.count()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Get an iterator from this deck, in canonical card order.
    pub fn iter(&self) -> CardBitSetIter {
        self.cards.iter()
    }
}

impl Default for Deck {
    /// A fresh deck with all 52 cards.
    ///
    /// ```
    /// use poker_equity::core::Deck;
    ///
    /// assert_eq!(52, Deck::default().len());
    /// ```
    fn default() -> Self {
        Self {
            cards: CardBitSet::default(),
        }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = CardBitSetIter;
    fn into_iter(self) -> CardBitSetIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::*;

    #[test]
    fn test_contains_in() {
        let d = Deck::default();
        assert!(d.contains(&Card::new(Value::Eight, Suit::Heart)));
    }

    #[test]
    fn test_remove() {
        let mut d = Deck::default();
        let c = Card::new(Value::Ace, Suit::Heart);
        assert!(d.contains(&c));
        assert!(d.remove(&c));
        assert!(!d.contains(&c));
        assert!(!d.remove(&c));
        assert_eq!(51, d.len());
    }

    #[test]
    fn test_without_hero_and_full_board() {
        let known: Vec<Card> = ["Ah", "Kh", "2c", "7d", "Ts", "Jc", "3s"]
            .iter()
            .map(|s| Card::try_from(*s).unwrap())
            .collect();
        let deck = Deck::without(&known).unwrap();

        assert_eq!(45, deck.len());
        for c in &known {
            assert!(!deck.contains(c));
        }
        let remaining: Vec<Card> = deck.iter().collect();
        let mut deduped = remaining.clone();
        deduped.dedup();
        assert_eq!(remaining, deduped);
    }

    #[test]
    fn test_without_rejects_duplicates() {
        let ace = Card::new(Value::Ace, Suit::Spade);
        assert_eq!(
            Err(EquityError::DuplicateCard(ace)),
            Deck::without(&[ace, ace])
        );
    }

    #[test]
    fn test_removal_order_does_not_matter() {
        let a = Card::new(Value::Two, Suit::Club);
        let b = Card::new(Value::Queen, Suit::Diamond);

        let mut one = Deck::default();
        one.remove(&a);
        one.remove(&b);

        let mut two = Deck::default();
        two.remove(&b);
        two.remove(&a);

        assert_eq!(one, two);
    }
}
