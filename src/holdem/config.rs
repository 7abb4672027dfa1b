use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::core::{Card, EquityError};

use super::{EquitySimulator, SimulationResult};

/// Trials used when the caller doesn't pick a number.
pub const DEFAULT_TRIALS: usize = 10_000;
/// Opponents used when the caller doesn't pick a number.
pub const DEFAULT_OPPONENTS: usize = 1;

/// # SimulationConfig
///
/// Everything about an equity simulation other than the cards. The
/// defaults are 10,000 trials against a single opponent, on one worker,
/// with a fresh thread local random source.
///
/// ## Setters
///
/// Each setter sets the value and returns the builder.
///
/// ## Examples
///
/// ```
/// use poker_equity::core::Card;
/// use poker_equity::holdem::SimulationConfig;
///
/// let hero = [Card::try_from("Qs").unwrap(), Card::try_from("Qd").unwrap()];
/// let board = ["2c", "7d", "Ts"].map(|s| Card::try_from(s).unwrap());
///
/// let config = SimulationConfig::default().trials(500).opponents(2).seed(42);
/// let one = config.run(hero, &board).unwrap();
/// let two = config.run(hero, &board).unwrap();
///
/// // A fixed seed gives the exact same tally.
/// assert_eq!(one, two);
/// assert_eq!(500, one.trials());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationConfig {
    trials: usize,
    opponents: usize,
    seed: Option<u64>,
    workers: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            opponents: DEFAULT_OPPONENTS,
            seed: None,
            workers: 1,
        }
    }
}

impl SimulationConfig {
    /// Number of hands to play out. More trials means less variance and
    /// more time.
    pub fn trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    /// Number of random opponents the hero plays against.
    pub fn opponents(mut self, opponents: usize) -> Self {
        self.opponents = opponents;
        self
    }

    /// Seed the random source so results are exactly reproducible.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Split the trials across this many independently seeded batches.
    /// They run in parallel with the `parallel` feature.
    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn get_trials(&self) -> usize {
        self.trials
    }

    pub fn get_opponents(&self) -> usize {
        self.opponents
    }

    pub fn get_seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn get_workers(&self) -> usize {
        self.workers
    }

    /// Check the settings that don't depend on the cards.
    pub fn validate(&self) -> Result<(), EquityError> {
        if self.trials == 0 {
            return Err(EquityError::NoTrials);
        }
        if self.opponents == 0 {
            return Err(EquityError::NoOpponents);
        }
        if self.workers == 0 {
            return Err(EquityError::NoWorkers);
        }
        Ok(())
    }

    /// Run the simulation. Uses the seed if one was set, otherwise the
    /// thread local random source.
    pub fn run(&self, hero: [Card; 2], board: &[Card]) -> Result<SimulationResult, EquityError> {
        match self.seed {
            Some(seed) => self.run_with_rng(hero, board, &mut StdRng::seed_from_u64(seed)),
            None => self.run_with_rng(hero, board, &mut rand::rng()),
        }
    }

    /// Run the simulation with a caller supplied random source. The seed
    /// setting is ignored.
    pub fn run_with_rng<R: Rng + ?Sized>(
        &self,
        hero: [Card; 2],
        board: &[Card],
        rng: &mut R,
    ) -> Result<SimulationResult, EquityError> {
        self.validate()?;
        let mut simulator = EquitySimulator::new(hero, board, self.opponents)?;
        if self.workers == 1 {
            simulator.run(self.trials, rng)
        } else {
            simulator.run_workers(self.trials, self.workers, rng)
        }
    }
}
