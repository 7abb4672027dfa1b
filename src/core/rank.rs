use std::fmt;

use crate::core::card::{Card, Value};
use crate::core::card_bit_set::CardBitSet;
use crate::core::card_iter::CardIter;
use crate::core::error::EquityError;
use crate::core::hand::Hand;
use crate::core::lookup::tables;

/// All the different possible hand categories, weakest first.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HandCategory {
    /// The lowest rank.
    /// No matches
    HighCard,
    /// One Card matches another.
    OnePair,
    /// Two diffent pair of matching cards.
    TwoPair,
    /// Three of the same value.
    ThreeOfAKind,
    /// Five cards in a sequence
    Straight,
    /// Five cards of the same suit
    Flush,
    /// Three of one value and two of another value
    FullHouse,
    /// Four of the same value.
    FourOfAKind,
    /// Five cards in a sequence all fo the same suit.
    StraightFlush,
}

const CATEGORIES: [HandCategory; 9] = [
    HandCategory::HighCard,
    HandCategory::OnePair,
    HandCategory::TwoPair,
    HandCategory::ThreeOfAKind,
    HandCategory::Straight,
    HandCategory::Flush,
    HandCategory::FullHouse,
    HandCategory::FourOfAKind,
    HandCategory::StraightFlush,
];

impl HandCategory {
    /// Every category, weakest first.
    pub fn categories() -> [HandCategory; 9] {
        CATEGORIES
    }

    /// Name used when showing a hand to a person.
    pub fn name(&self) -> &'static str {
        match self {
            HandCategory::HighCard => "High Card",
            HandCategory::OnePair => "Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
        }
    }

    /// How many distinct strengths a hand of this category can have.
    pub fn class_count(&self) -> usize {
        match self {
            HandCategory::HighCard => 1_277,
            HandCategory::OnePair => 2_860,
            HandCategory::TwoPair => 858,
            HandCategory::ThreeOfAKind => 858,
            HandCategory::Straight => 10,
            HandCategory::Flush => 1_277,
            HandCategory::FullHouse => 156,
            HandCategory::FourOfAKind => 156,
            HandCategory::StraightFlush => 10,
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The strength of a five card hand.
///
/// `strength` is the hand's position among all 7,462 classes of five card
/// hands: 1 is 7-5-4-3-2 offsuit and 7,462 is a royal flush. A greater
/// `HandRank` is a stronger hand, and two hands tie exactly when their
/// ranks are equal.
///
/// ```
/// use poker_equity::core::{Hand, HandCategory, Rankable};
///
/// let quads = Hand::new_from_str("AsAhAdAcKs").unwrap().rank().unwrap();
/// let full = Hand::new_from_str("KsKhKdAcAs").unwrap().rank().unwrap();
///
/// assert_eq!(HandCategory::FourOfAKind, quads.category());
/// assert!(quads > full);
/// ```
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HandRank {
    category: HandCategory,
    strength: u16,
}

impl HandRank {
    pub(crate) fn new(category: HandCategory, strength: u16) -> Self {
        Self { category, strength }
    }

    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// Position among all hand classes, higher is stronger.
    pub fn strength(&self) -> u16 {
        self.strength
    }

    /// The conventional class number where 1 is a royal flush and lower
    /// is stronger.
    pub fn class(&self) -> u16 {
        (crate::core::lookup::NUM_CLASSES as u16 + 1) - self.strength
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.category, self.class())
    }
}

/// Big ugly constant for all the straghts.
pub const STRAIGHTS: [u16; 10] = [
    // Wheel.
    1 << (Value::Ace as u16)
        | 1 << (Value::Two as u16)
        | 1 << (Value::Three as u16)
        | 1 << (Value::Four as u16)
        | 1 << (Value::Five as u16),
    // "Normal" straights starting at two to six.
    0b11111 << (Value::Two as u16),
    // Three to Seven
    0b11111 << (Value::Three as u16),
    // Four to Eight
    0b11111 << (Value::Four as u16),
    // Five to Nine
    0b11111 << (Value::Five as u16),
    // Six to Ten
    0b11111 << (Value::Six as u16),
    // Seven to Jack.
    0b11111 << (Value::Seven as u16),
    // Eight to Queen
    0b11111 << (Value::Eight as u16),
    // Nine to king
    0b11111 << (Value::Nine as u16),
    // Royal straight
    0b11111 << (Value::Ten as u16),
];

/// Rank five cards that are already known to be distinct.
pub(crate) fn rank_five(cards: &[Card; 5]) -> HandRank {
    let product: u32 = cards.iter().map(Card::prime).product();
    let flush = cards.iter().fold(0xF, |suits, c| suits & c.suit_bit()) != 0;
    tables()
        .lookup(product, flush)
        .unwrap_or_else(|| unreachable!("no hand class for {:?}", cards))
}

/// Best five card rank out of 5, 6 or 7 distinct cards.
pub(crate) fn rank_best(cards: &[Card]) -> HandRank {
    if let Ok(five) = <&[Card; 5]>::try_from(cards) {
        return rank_five(five);
    }
    CardIter::<5>::new(cards)
        .map(|five| rank_five(&five))
        .max()
        .unwrap_or_else(|| unreachable!("fewer than five cards: {:?}", cards))
}

/// Rank exactly five distinct cards.
///
/// ```
/// use poker_equity::core::{Card, HandCategory, evaluate5};
///
/// let wheel = ["Ad", "2c", "3s", "4h", "5s"].map(|s| Card::try_from(s).unwrap());
/// assert_eq!(HandCategory::Straight, evaluate5(&wheel).unwrap().category());
/// ```
pub fn evaluate5(cards: &[Card; 5]) -> Result<HandRank, EquityError> {
    CardBitSet::from_distinct(cards)?;
    Ok(rank_five(cards))
}

/// Rank the best five card hand that can be made from 5, 6 or 7 distinct
/// cards. Every five card subset is tried.
///
/// ```
/// use poker_equity::core::{Card, EquityError, HandCategory, evaluate};
///
/// let cards: Vec<Card> = ["Ah", "Kh", "Qh", "Jh", "Th", "2c", "2d"]
///     .iter()
///     .map(|s| Card::try_from(*s).unwrap())
///     .collect();
/// assert_eq!(HandCategory::StraightFlush, evaluate(&cards).unwrap().category());
///
/// assert_eq!(Err(EquityError::InvalidHandSize(4)), evaluate(&cards[..4]));
/// ```
pub fn evaluate(cards: &[Card]) -> Result<HandRank, EquityError> {
    if !(5..=7).contains(&cards.len()) {
        return Err(EquityError::InvalidHandSize(cards.len()));
    }
    CardBitSet::from_distinct(cards)?;
    Ok(rank_best(cards))
}

/// Can this turn into a hand rank?
pub trait Rankable {
    /// Rank the best five card hand in this set of cards.
    fn rank(&self) -> Result<HandRank, EquityError>;
}

impl Rankable for [Card] {
    fn rank(&self) -> Result<HandRank, EquityError> {
        evaluate(self)
    }
}

/// Implementation for `Hand`
impl Rankable for Hand {
    /// Rank this hand. It doesn't do any caching so it's left up to the user
    /// to understand that duplicate work will be done if this is called more than once.
    fn rank(&self) -> Result<HandRank, EquityError> {
        let cards = self.cards();
        if !(5..=7).contains(&cards.len()) {
            return Err(EquityError::InvalidHandSize(cards.len()));
        }
        Ok(rank_best(&cards))
    }
}
