//! Texas hold'em specific code: equity simulation and betting advice.

/// Monte Carlo equity estimation.
mod equity_simulator;
/// Export the simulator and its results.
pub use self::equity_simulator::{
    BOARD_SIZE, EquitySimulator, Outcome, SimulationResult, current_hand, simulate,
};

/// Builder for simulation settings.
mod config;
pub use self::config::{DEFAULT_OPPONENTS, DEFAULT_TRIALS, SimulationConfig};

/// Memoized simulation results.
mod equity_cache;
pub use self::equity_cache::EquityCache;

/// Pot odds based decisions.
mod advice;
pub use self::advice::{
    Advice, AdviceThresholds, Recommendation, advise, pot_odds_percent, round_percent,
};

mod analysis;
pub use self::analysis::{Analysis, analyze};
