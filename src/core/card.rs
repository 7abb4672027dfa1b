use std::fmt;

use super::EquityError;

/// Rank of a card, `Two` through `Ace`. The discriminant is the rank
/// index used in the packed card layout.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// 2
    Two = 0,
    /// 3
    Three = 1,
    /// 4
    Four = 2,
    /// 5
    Five = 3,
    /// 6
    Six = 4,
    /// 7
    Seven = 5,
    /// 8
    Eight = 6,
    /// 9
    Nine = 7,
    /// T
    Ten = 8,
    /// J
    Jack = 9,
    /// Q
    Queen = 10,
    /// K
    King = 11,
    /// A
    Ace = 12,
}

/// Every value, lowest first.
const VALUES: [Value; 13] = [
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::Ace,
];

/// The prime assigned to each value. The product of the primes of five
/// cards identifies the multiset of values regardless of order.
pub(crate) const PRIMES: [u32; 13] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41];

impl Value {
    /// Take a u8 and convert it to a value. Anything above 12 wraps.
    pub fn from_u8(v: u8) -> Value {
        VALUES[usize::from(v % 13)]
    }

    /// All thirteen values in ascending order.
    pub fn values() -> [Value; 13] {
        VALUES
    }

    /// The prime number used when building the order independent product
    /// of a hand.
    pub fn prime(self) -> u32 {
        PRIMES[self as usize]
    }

    pub fn from_char(c: char) -> Option<Value> {
        match c {
            'A' | 'a' => Some(Value::Ace),
            'K' | 'k' => Some(Value::King),
            'Q' | 'q' => Some(Value::Queen),
            'J' | 'j' => Some(Value::Jack),
            'T' | 't' => Some(Value::Ten),
            '9' => Some(Value::Nine),
            '8' => Some(Value::Eight),
            '7' => Some(Value::Seven),
            '6' => Some(Value::Six),
            '5' => Some(Value::Five),
            '4' => Some(Value::Four),
            '3' => Some(Value::Three),
            '2' => Some(Value::Two),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Value::Ace => 'A',
            Value::King => 'K',
            Value::Queen => 'Q',
            Value::Jack => 'J',
            Value::Ten => 'T',
            Value::Nine => '9',
            Value::Eight => '8',
            Value::Seven => '7',
            Value::Six => '6',
            Value::Five => '5',
            Value::Four => '4',
            Value::Three => '3',
            Value::Two => '2',
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// The four suits. Suits carry no strength in hold'em; the derived order
/// only exists so cards sort deterministically.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    /// Spades
    Spade = 0,
    /// Clubs
    Club = 1,
    /// Hearts
    Heart = 2,
    /// Diamonds
    Diamond = 3,
}

/// Every suit in discriminant order.
const SUITS: [Suit; 4] = [Suit::Spade, Suit::Club, Suit::Heart, Suit::Diamond];

impl Suit {
    /// All four suits.
    pub fn suits() -> [Suit; 4] {
        SUITS
    }

    /// Take a u8 and convert it to a suit. Anything above 3 wraps.
    pub fn from_u8(s: u8) -> Suit {
        SUITS[usize::from(s % 4)]
    }

    pub fn from_char(s: char) -> Option<Suit> {
        match s {
            'd' | 'D' => Some(Suit::Diamond),
            's' | 'S' => Some(Suit::Spade),
            'h' | 'H' => Some(Suit::Heart),
            'c' | 'C' => Some(Suit::Club),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Suit::Diamond => 'd',
            Suit::Spade => 's',
            Suit::Heart => 'h',
            Suit::Club => 'c',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

const PRIME_MASK: u32 = 0x3F;
const VALUE_SHIFT: u32 = 8;
const SUIT_SHIFT: u32 = 12;
const RANK_BIT_SHIFT: u32 = 16;

/// A single playing card.
///
/// A card is a packed `u32` holding everything the hand evaluator needs,
/// all derived once from the value and suit:
///
/// ```text
/// xxxbbbbb bbbbbbbb cdhsrrrr xxpppppp
/// ```
///
/// - `b` one bit per value (two is the lowest bit)
/// - `cdhs` one bit per suit
/// - `r` the value as 0..=12
/// - `p` the prime of the value
///
/// Cards order by value first and suit second.
///
/// ```
/// use poker_equity::core::{Card, Suit, Value};
///
/// let card = Card::new(Value::Queen, Suit::Heart);
/// assert_eq!(Value::Queen, card.value());
/// assert_eq!(Suit::Heart, card.suit());
/// assert_eq!("Qh", card.to_string());
/// ```
#[derive(PartialEq, PartialOrd, Eq, Ord, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "String", try_from = "String"))]
pub struct Card(u32);

impl Card {
    /// Encode a value and suit into a card.
    pub const fn new(value: Value, suit: Suit) -> Self {
        let v = value as u32;
        let s = suit as u32;
        Self(
            (1 << (RANK_BIT_SHIFT + v))
                | (1 << (SUIT_SHIFT + s))
                | (v << VALUE_SHIFT)
                | PRIMES[v as usize],
        )
    }

    /// Rank of the card.
    pub fn value(&self) -> Value {
        Value::from_u8(((self.0 >> VALUE_SHIFT) & 0xF) as u8)
    }

    /// Suit of the card.
    pub fn suit(&self) -> Suit {
        Suit::from_u8(((self.0 >> SUIT_SHIFT) & 0xF).trailing_zeros() as u8)
    }

    /// Prime number of this card's value.
    pub fn prime(&self) -> u32 {
        self.0 & PRIME_MASK
    }

    /// A 13 bit mask with only this card's value set.
    pub fn rank_bit(&self) -> u16 {
        (self.0 >> RANK_BIT_SHIFT) as u16
    }

    /// A 4 bit mask with only this card's suit set.
    pub fn suit_bit(&self) -> u32 {
        (self.0 >> SUIT_SHIFT) & 0xF
    }

    /// The raw packed encoding.
    pub fn encoding(&self) -> u32 {
        self.0
    }

    /// Every card in canonical order: twos first, aces last, and
    /// spades, clubs, hearts, diamonds within a value.
    pub fn all() -> [Card; 52] {
        std::array::from_fn(|idx| Card::from(idx as u8))
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.value(), self.suit())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value(), self.suit())
    }
}

/// The dense index of a card, `value * 4 + suit`. Used by bit sets.
impl From<Card> for u8 {
    fn from(card: Card) -> Self {
        card.value() as u8 * 4 + card.suit() as u8
    }
}

/// Create a card from a dense index. Anything above 51 wraps.
impl From<u8> for Card {
    fn from(idx: u8) -> Self {
        let idx = idx % 52;
        Card::new(Value::from_u8(idx / 4), Suit::from_u8(idx % 4))
    }
}

impl TryFrom<&str> for Card {
    type Error = EquityError;

    /// Parse the canonical two character form, value then suit.
    ///
    /// ```
    /// use poker_equity::core::{Card, Suit, Value};
    ///
    /// let card = Card::try_from("Td").unwrap();
    /// assert_eq!(Card::new(Value::Ten, Suit::Diamond), card);
    /// assert!(Card::try_from("1d").is_err());
    /// ```
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let mut chars = value.trim().chars();
        let v = chars.next().ok_or(EquityError::TooFewChars)?;
        let s = chars.next().ok_or(EquityError::TooFewChars)?;
        if chars.next().is_some() {
            return Err(EquityError::UnparsedCharsRemaining);
        }
        let v = Value::from_char(v).ok_or(EquityError::UnexpectedValueChar(v))?;
        let s = Suit::from_char(s).ok_or(EquityError::UnexpectedSuitChar(s))?;
        Ok(Card::new(v, s))
    }
}

impl TryFrom<String> for Card {
    type Error = EquityError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Card::try_from(value.as_str())
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}
