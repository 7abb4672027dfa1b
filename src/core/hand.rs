use std::fmt;

use super::{Card, CardBitSet, CardBitSetIter, EquityError, Suit, Value};

/// An unordered set of distinct cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hand(CardBitSet);

impl Hand {
    /// A hand holding no cards.
    ///
    /// # Examples
    ///
    /// ```
    /// use poker_equity::core::Hand;
    ///
    /// let hand = Hand::new();
    ///
    /// assert!(hand.is_empty());
    /// ```
    pub fn new() -> Self {
        Self(CardBitSet::new())
    }

    /// Create a hand from cards, rejecting any card given twice.
    pub fn new_with_cards(cards: &[Card]) -> Result<Self, EquityError> {
        CardBitSet::from_distinct(cards).map(Self)
    }

    /// True if the hand holds `c`.
    ///
    /// # Examples
    ///
    /// ```
    /// use poker_equity::core::{Card, Hand, Suit, Value};
    ///
    /// let mut hand = Hand::new();
    ///
    /// let card = Card::new(Value::Ace, Suit::Club);
    /// assert!(!hand.contains(&card));
    ///
    /// hand.insert(card);
    /// assert!(hand.contains(&card));
    /// ```
    pub fn contains(&self, c: &Card) -> bool {
        self.0.contains(*c)
    }

    /// Add a card to the hand. Returns false if it was already there.
    pub fn insert(&mut self, c: Card) -> bool {
        self.0.insert(c)
    }

    pub fn count(&self) -> usize {
        self.0.count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> CardBitSetIter {
        self.0.into_iter()
    }

    /// The cards of this hand in canonical order.
    pub fn cards(&self) -> Vec<Card> {
        self.iter().collect()
    }

    /// Parse concatenated two character cards, e.g. `"AdKh"`.
    ///
    /// ```
    /// use poker_equity::core::{EquityError, Hand};
    ///
    /// assert_eq!(2, Hand::new_from_str("AdKh").unwrap().count());
    /// assert!(matches!(
    ///     Hand::new_from_str("AdAd"),
    ///     Err(EquityError::DuplicateCard(_))
    /// ));
    /// ```
    pub fn new_from_str(hand_string: &str) -> Result<Self, EquityError> {
        let mut chars = hand_string.chars().filter(|c| !c.is_whitespace());
        let mut bitset = CardBitSet::new();

        while let Some(vc) = chars.next() {
            let sc = chars.next().ok_or(EquityError::TooFewChars)?;
            let v = Value::from_char(vc).ok_or(EquityError::UnexpectedValueChar(vc))?;
            let s = Suit::from_char(sc).ok_or(EquityError::UnexpectedSuitChar(sc))?;

            let c = Card::new(v, s);
            if !bitset.insert(c) {
                return Err(EquityError::DuplicateCard(c));
            }
        }

        Ok(Self(bitset))
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.iter() {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}
