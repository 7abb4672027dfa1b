//! This is the core module. It exports the non-holdem
//! related code.

/// card.rs has value and suit.
mod card;
/// Re-export Card, Value, and Suit
pub use self::card::{Card, Suit, Value};

/// Error type shared by the whole crate.
mod error;
pub use self::error::EquityError;

/// Bitset of cards, used for set difference when building decks.
mod card_bit_set;
pub use self::card_bit_set::{CardBitSet, CardBitSetIter};

/// Code related to cards in hands.
mod hand;
/// Everything in there should be public.
pub use self::hand::*;

/// We want to be able to iterate over five card hands.
mod card_iter;
/// Make that functionality public.
pub use self::card_iter::*;

/// Deck is the normal 52 card deck.
mod deck;
/// Export `Deck`
pub use self::deck::Deck;

/// Flattened deck
mod flat_deck;
/// Export the flat deck.
pub use self::flat_deck::FlatDeck;

/// Generated lookup tables for ranking.
mod lookup;
pub use self::lookup::NUM_CLASSES;

/// 5 Card hand ranking code.
mod rank;
/// Export the trait and the results.
pub use self::rank::{HandCategory, HandRank, Rankable, STRAIGHTS, evaluate, evaluate5};
pub(crate) use self::rank::rank_best;
