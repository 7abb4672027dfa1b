use std::fmt::Debug;
use std::ops::{BitAnd, BitOr, BitOrAssign, Not};

use super::{Card, EquityError};

/// A set of cards packed into one `u64`.
///
/// Bit `value * 4 + suit` is on when that card is in the set. Only the
/// low 52 bits are ever used. Hero, board and deck bookkeeping all go
/// through this type, so membership and overlap checks are single mask
/// operations.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardBitSet {
    cards: u64,
}

const FIFTY_TWO_ONES: u64 = (1 << 52) - 1;

impl CardBitSet {
    /// An empty set.
    ///
    /// ```
    /// use poker_equity::core::CardBitSet;
    /// assert_eq!(0, CardBitSet::new().count());
    /// ```
    pub fn new() -> Self {
        Self { cards: 0 }
    }

    /// Build a set from distinct cards.
    ///
    /// ```
    /// use poker_equity::core::{Card, CardBitSet, EquityError};
    ///
    /// let ace = Card::try_from("As").unwrap();
    /// let king = Card::try_from("Ks").unwrap();
    ///
    /// assert_eq!(2, CardBitSet::from_distinct(&[ace, king]).unwrap().count());
    /// assert_eq!(
    ///     Err(EquityError::DuplicateCard(ace)),
    ///     CardBitSet::from_distinct(&[ace, king, ace])
    /// );
    /// ```
    pub fn from_distinct(cards: &[Card]) -> Result<Self, EquityError> {
        let mut set = Self::new();
        for card in cards {
            if !set.insert(*card) {
                return Err(EquityError::DuplicateCard(*card));
            }
        }
        Ok(set)
    }

    /// Insert a card. Returns true if the card was not already present.
    pub fn insert(&mut self, card: Card) -> bool {
        let bit = 1 << u8::from(card);
        let added = self.cards & bit == 0;
        self.cards |= bit;
        added
    }

    /// Remove a card. Returns true if the card was present.
    pub fn remove(&mut self, card: Card) -> bool {
        let bit = 1 << u8::from(card);
        let present = self.cards & bit != 0;
        self.cards &= !bit;
        present
    }

    /// True when `card` is a member.
    pub fn contains(&self, card: Card) -> bool {
        (self.cards & (1 << u8::from(card))) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.cards == 0
    }

    /// Number of member cards.
    pub fn count(&self) -> usize {
        self.cards.count_ones() as usize
    }

    /// Do the two sets share any card?
    pub fn intersects(&self, other: &CardBitSet) -> bool {
        self.cards & other.cards != 0
    }

    pub fn iter(&self) -> CardBitSetIter {
        CardBitSetIter(self.cards)
    }
}

impl Default for CardBitSet {
    /// The full 52 card set.
    ///
    /// ```
    /// use poker_equity::core::CardBitSet;
    /// assert_eq!(52, CardBitSet::default().count());
    /// ```
    fn default() -> Self {
        Self {
            cards: FIFTY_TWO_ONES,
        }
    }
}

impl Debug for CardBitSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(*self).finish()
    }
}

impl BitOr for CardBitSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self {
            cards: self.cards | rhs.cards,
        }
    }
}

impl BitOrAssign<Card> for CardBitSet {
    fn bitor_assign(&mut self, rhs: Card) {
        self.insert(rhs);
    }
}

impl BitAnd for CardBitSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self {
            cards: self.cards & rhs.cards,
        }
    }
}

impl Not for CardBitSet {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self {
            // Only the first 52 bits are cards.
            cards: !self.cards & FIFTY_TWO_ONES,
        }
    }
}

impl FromIterator<Card> for CardBitSet {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        let mut set = Self::new();
        for card in iter {
            set.insert(card);
        }
        set
    }
}

/// Walks a `CardBitSet` from the lowest bit up, so cards come out in
/// canonical order.
pub struct CardBitSetIter(u64);

impl IntoIterator for CardBitSet {
    type Item = Card;
    type IntoIter = CardBitSetIter;

    fn into_iter(self) -> Self::IntoIter {
        CardBitSetIter(self.cards)
    }
}

impl Iterator for CardBitSetIter {
    type Item = Card;

    fn next(&mut self) -> Option<Self::Item> {
        let remaining = self.0;
        if remaining == 0 {
            return None;
        }
        // Clear the lowest set bit.
        self.0 = remaining & (remaining - 1);
        Some(Card::from(remaining.trailing_zeros() as u8))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Suit, Value};

    #[test]
    fn test_new_has_nothing() {
        let none = CardBitSet::new();
        assert!(none.is_empty());
        assert_eq!(None, none.iter().next());
    }

    #[test]
    fn test_insert_reports_new_members() {
        let mut built = CardBitSet::new();
        for card in Card::all() {
            assert!(built.insert(card));
            assert!(!built.insert(card));
        }

        assert_eq!(CardBitSet::default(), built);
    }

    #[test]
    fn test_remove_everything_from_full() {
        let mut full = CardBitSet::default();

        for (i, card) in Card::all().into_iter().enumerate() {
            assert!(full.contains(card));
            assert!(full.remove(card));
            assert!(!full.remove(card));
            assert_eq!(51 - i, full.count());
        }

        assert!(full.is_empty());
    }

    #[test]
    fn test_iter_is_canonical_order() {
        let collected: Vec<Card> = CardBitSet::default().into_iter().collect();
        assert_eq!(Card::all().to_vec(), collected);
    }

    #[test]
    fn test_not_is_complement() {
        let mut cards = CardBitSet::new();
        cards |= Card::new(Value::Ace, Suit::Club);
        cards |= Card::new(Value::Two, Suit::Heart);

        let rest = !cards;
        assert_eq!(50, rest.count());
        assert!(!rest.intersects(&cards));
        assert_eq!(CardBitSet::default(), rest | cards);
    }

    #[test]
    fn test_intersection() {
        let a: CardBitSet = ["Ac", "Kd"]
            .iter()
            .map(|s| Card::try_from(*s).unwrap())
            .collect();
        let b: CardBitSet = ["3h", "Kd"]
            .iter()
            .map(|s| Card::try_from(*s).unwrap())
            .collect();

        let and = a & b;
        assert_eq!(1, and.count());
        assert!(and.contains(Card::new(Value::King, Suit::Diamond)));
        assert!(a.intersects(&b));
    }

    #[test]
    fn test_debug_lists_members() {
        let cards: CardBitSet = ["Ac", "Kd", "3h"]
            .iter()
            .map(|s| Card::try_from(*s).unwrap())
            .collect();

        assert_eq!(format!("{:?}", cards), "{Card(3h), Card(Kd), Card(Ac)}");
    }
}
