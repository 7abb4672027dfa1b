use std::fmt;

use rand::Rng;

use crate::core::{Card, EquityError, HandRank};

use super::{Advice, AdviceThresholds, SimulationConfig, SimulationResult, current_hand};

/// Everything worth showing about a spot: the made hand, the simulated
/// equity and what to do about it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Analysis {
    /// `None` before the flop.
    pub current_hand: Option<HandRank>,
    pub result: SimulationResult,
    pub advice: Advice,
}

impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(rank) = self.current_hand {
            writeln!(f, "Current hand: {}", rank.category())?;
        }
        writeln!(
            f,
            "Equity: {:.2}% ({} wins, {} ties, {} losses in {} trials)",
            self.advice.equity_percent,
            self.result.wins(),
            self.result.ties(),
            self.result.losses(),
            self.result.trials()
        )?;
        if let Some(odds) = self.advice.pot_odds_percent {
            writeln!(f, "Pot odds: {odds:.2}%")?;
        }
        write!(
            f,
            "Advice: {}. {}",
            self.advice.recommendation,
            self.advice.recommendation.explanation()
        )
    }
}

/// Simulate the spot and turn the equity into advice.
///
/// Pot and call amounts are checked before the simulation runs.
pub fn analyze<R: Rng + ?Sized>(
    config: &SimulationConfig,
    thresholds: &AdviceThresholds,
    hero: [Card; 2],
    board: &[Card],
    pot_size: f64,
    amount_to_call: f64,
    rng: &mut R,
) -> Result<Analysis, EquityError> {
    super::pot_odds_percent(pot_size, amount_to_call)?;

    let result = config.run_with_rng(hero, board, rng)?;
    let advice = thresholds.advise(result.equity_percent(), pot_size, amount_to_call)?;
    let current_hand = if board.len() >= 3 {
        Some(current_hand(hero, board)?)
    } else {
        None
    };

    Ok(Analysis {
        current_hand,
        result,
        advice,
    })
}
