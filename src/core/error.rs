use thiserror::Error;

use super::Card;

/// This is the core error type for the poker equity library.
/// It uses `thiserror` to provide readable error messages.
///
/// The variants fall into two groups. Invalid input is a single bad value
/// (a malformed or duplicated card, a count or amount out of range).
/// Exhausted resource means the inputs are each fine but together ask for
/// more cards than the deck has left. Nothing here is worth retrying with
/// the same inputs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EquityError {
    #[error("Unable to parse value '{0}'")]
    UnexpectedValueChar(char),
    #[error("Unable to parse suit '{0}'")]
    UnexpectedSuitChar(char),
    #[error("Error reading characters while parsing")]
    TooFewChars,
    #[error("Extra un-used characters found after parsing")]
    UnparsedCharsRemaining,
    #[error("Card {0} appears more than once")]
    DuplicateCard(Card),
    #[error("Hands must have 5, 6 or 7 cards to be ranked, got {0}")]
    InvalidHandSize(usize),
    #[error("The hero must hold exactly 2 cards, got {0}")]
    InvalidHeroSize(usize),
    #[error("The board can hold at most 5 cards, got {0}")]
    InvalidBoardSize(usize),
    #[error("At least one opponent is required")]
    NoOpponents,
    #[error("At least one trial is required")]
    NoTrials,
    #[error("At least one worker is required")]
    NoWorkers,
    #[error("Equity must be a percentage between 0 and 100, got {0}")]
    EquityOutOfRange(f64),
    #[error("Pot size must be positive, got {0}")]
    InvalidPotSize(f64),
    #[error("Amount to call must be zero or positive, got {0}")]
    InvalidCallAmount(f64),
    #[error("Not enough cards left in the deck: need {needed}, have {remaining}")]
    DeckExhausted { needed: usize, remaining: usize },
}

impl EquityError {
    /// Is this error caused by a single malformed or out of range input?
    pub fn is_invalid_input(&self) -> bool {
        !(self.is_exhausted() || self.is_precondition())
    }

    /// Was the evaluator handed a card count it cannot rank? This is a bug
    /// in the caller rather than bad user input.
    pub fn is_precondition(&self) -> bool {
        matches!(self, EquityError::InvalidHandSize(_))
    }

    /// Is this error caused by asking for more cards than remain?
    pub fn is_exhausted(&self) -> bool {
        matches!(self, EquityError::DeckExhausted { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Suit, Value};

    #[test]
    fn test_classification() {
        let exhausted = EquityError::DeckExhausted {
            needed: 60,
            remaining: 45,
        };
        assert!(exhausted.is_exhausted());
        assert!(!exhausted.is_invalid_input());

        let dup = EquityError::DuplicateCard(Card::new(Value::Ace, Suit::Spade));
        assert!(dup.is_invalid_input());
        assert!(!dup.is_exhausted());
        assert!(!dup.is_precondition());

        let size = EquityError::InvalidHandSize(4);
        assert!(size.is_precondition());
        assert!(!size.is_invalid_input());
        assert!(!size.is_exhausted());
        assert!(!exhausted.is_precondition());
    }

    #[test]
    fn test_messages_name_the_value() {
        let dup = EquityError::DuplicateCard(Card::new(Value::Ace, Suit::Spade));
        assert_eq!("Card As appears more than once", dup.to_string());
        assert_eq!(
            "Pot size must be positive, got -3",
            EquityError::InvalidPotSize(-3.0).to_string()
        );
    }
}
