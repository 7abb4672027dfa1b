//! Turning equity and pot size into a betting recommendation.
//!
//! With no bet to face the choice is how much to bet, driven only by
//! equity. Facing a bet, equity is compared to the pot odds: the share of
//! the final pot the call would make up.

use std::fmt;

use crate::core::EquityError;

/// What to do with the hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Recommendation {
    /// No bet to call and a very strong hand.
    BetBig,
    /// No bet to call and a hand that is likely ahead.
    BetMedium,
    /// No bet to call and no clear edge.
    Check,
    /// Facing a bet with a very strong hand.
    Raise,
    /// Facing a bet with equity at least the pot odds.
    Call,
    /// Facing a bet with equity below the pot odds.
    Fold,
}

impl Recommendation {
    /// Short lower case label, e.g. `"bet big"`.
    pub fn label(&self) -> &'static str {
        match self {
            Recommendation::BetBig => "bet big",
            Recommendation::BetMedium => "bet medium",
            Recommendation::Check => "check",
            Recommendation::Raise => "raise",
            Recommendation::Call => "call",
            Recommendation::Fold => "fold",
        }
    }

    /// One line explanation to show next to the label.
    pub fn explanation(&self) -> &'static str {
        match self {
            Recommendation::BetBig => "Very strong hand, bet for value.",
            Recommendation::BetMedium => "Likely the best hand, make a medium sized bet.",
            Recommendation::Check => "No clear edge, check rather than bet.",
            Recommendation::Raise => "Very strong hand, raise to build the pot.",
            Recommendation::Call => "Equity covers the pot odds, calling wins in the long run.",
            Recommendation::Fold => "Equity is below the pot odds, calling loses in the long run.",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The recommendation with the numbers behind it, rounded for display.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Advice {
    pub recommendation: Recommendation,
    /// Equity in percent, two decimals.
    pub equity_percent: f64,
    /// Pot odds in percent, two decimals. `None` when there is nothing to
    /// call.
    pub pot_odds_percent: Option<f64>,
}

/// Equity cut offs, all in percent.
///
/// ```
/// use poker_equity::holdem::{AdviceThresholds, Recommendation};
///
/// let loose = AdviceThresholds {
///     raise: 50.0,
///     ..AdviceThresholds::default()
/// };
/// let advice = loose.advise(52.0, 100.0, 10.0).unwrap();
/// assert_eq!(Recommendation::Raise, advice.recommendation);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdviceThresholds {
    /// Bet big when equity is strictly above this and nothing is owed.
    pub bet_big: f64,
    /// Bet medium when equity is strictly above this and nothing is owed.
    pub bet_medium: f64,
    /// Raise when equity is at least this and there is a bet to call.
    pub raise: f64,
}

impl Default for AdviceThresholds {
    fn default() -> Self {
        Self {
            bet_big: 75.0,
            bet_medium: 55.0,
            raise: 60.0,
        }
    }
}

impl AdviceThresholds {
    /// Recommend an action. Comparisons use the exact inputs; only the
    /// returned numbers are rounded.
    pub fn advise(
        &self,
        equity_percent: f64,
        pot_size: f64,
        amount_to_call: f64,
    ) -> Result<Advice, EquityError> {
        if !(0.0..=100.0).contains(&equity_percent) {
            return Err(EquityError::EquityOutOfRange(equity_percent));
        }
        let pot_odds = pot_odds_percent(pot_size, amount_to_call)?;

        let recommendation = match pot_odds {
            None if equity_percent > self.bet_big => Recommendation::BetBig,
            None if equity_percent > self.bet_medium => Recommendation::BetMedium,
            None => Recommendation::Check,
            Some(_) if equity_percent >= self.raise => Recommendation::Raise,
            Some(odds) if equity_percent >= odds => Recommendation::Call,
            Some(_) => Recommendation::Fold,
        };

        Ok(Advice {
            recommendation,
            equity_percent: round_percent(equity_percent),
            pot_odds_percent: pot_odds.map(round_percent),
        })
    }
}

/// Recommend an action with the default thresholds.
///
/// ```
/// use poker_equity::holdem::{Recommendation, advise};
///
/// let advice = advise(50.0, 100.0, 25.0).unwrap();
/// assert_eq!(Recommendation::Call, advice.recommendation);
/// assert_eq!(Some(20.0), advice.pot_odds_percent);
/// ```
pub fn advise(
    equity_percent: f64,
    pot_size: f64,
    amount_to_call: f64,
) -> Result<Advice, EquityError> {
    AdviceThresholds::default().advise(equity_percent, pot_size, amount_to_call)
}

/// The share of the final pot that calling would put in, in percent.
/// `None` when there is nothing to call. Not rounded.
pub fn pot_odds_percent(pot_size: f64, amount_to_call: f64) -> Result<Option<f64>, EquityError> {
    if !(pot_size.is_finite() && pot_size > 0.0) {
        return Err(EquityError::InvalidPotSize(pot_size));
    }
    if !(amount_to_call.is_finite() && amount_to_call >= 0.0) {
        return Err(EquityError::InvalidCallAmount(amount_to_call));
    }
    if amount_to_call == 0.0 {
        return Ok(None);
    }
    Ok(Some(amount_to_call / (pot_size + amount_to_call) * 100.0))
}

/// Round a percentage to two decimals for display.
pub fn round_percent(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
