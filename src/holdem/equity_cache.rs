use std::collections::HashMap;

use rand::Rng;
use tracing::{Level, event};

use crate::core::{Card, CardBitSet, EquityError};

use super::{SimulationConfig, SimulationResult};

/// Identifies a simulation independent of the order the cards were given
/// in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct CacheKey {
    hero: CardBitSet,
    board: CardBitSet,
    opponents: usize,
    trials: usize,
}

impl CacheKey {
    fn new(config: &SimulationConfig, hero: [Card; 2], board: &[Card]) -> Self {
        Self {
            hero: hero.into_iter().collect(),
            board: board.iter().copied().collect(),
            opponents: config.get_opponents(),
            trials: config.get_trials(),
        }
    }
}

/// Remembers finished simulations so the same spot isn't simulated twice.
///
/// Useful when a front end recomputes on every input change but the cards
/// did not move. Only successful results are stored.
///
/// A cache from `new` grows until `clear` is called. One from `with_limit`
/// drops everything it holds once it is full and a new spot comes in.
///
/// ```
/// use poker_equity::core::Card;
/// use poker_equity::holdem::{EquityCache, SimulationConfig};
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let mut cache = EquityCache::new();
/// let mut rng = StdRng::seed_from_u64(1);
/// let config = SimulationConfig::default().trials(100);
/// let hero = [Card::try_from("9h").unwrap(), Card::try_from("9c").unwrap()];
///
/// let first = cache.get_or_simulate(&config, hero, &[], &mut rng).unwrap();
/// let again = cache
///     .get_or_simulate(&config, [hero[1], hero[0]], &[], &mut rng)
///     .unwrap();
/// assert_eq!(first, again);
/// assert_eq!(1, cache.hits());
/// ```
#[derive(Debug, Clone, Default)]
pub struct EquityCache {
    results: HashMap<CacheKey, SimulationResult>,
    limit: Option<usize>,
    hits: u64,
    misses: u64,
}

impl EquityCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// A cache that never holds more than `limit` results.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: Some(limit.max(1)),
            ..Self::default()
        }
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Return the stored result for this spot, or run the simulation with
    /// `rng` and store it.
    pub fn get_or_simulate<R: Rng + ?Sized>(
        &mut self,
        config: &SimulationConfig,
        hero: [Card; 2],
        board: &[Card],
        rng: &mut R,
    ) -> Result<SimulationResult, EquityError> {
        let key = CacheKey::new(config, hero, board);
        if let Some(result) = self.results.get(&key) {
            self.hits += 1;
            event!(Level::DEBUG, ?hero, ?board, "equity cache hit");
            return Ok(*result);
        }

        let result = config.run_with_rng(hero, board, rng)?;
        self.misses += 1;
        if self.limit.is_some_and(|limit| self.results.len() >= limit) {
            event!(
                Level::DEBUG,
                dropped = self.results.len(),
                "equity cache full, clearing"
            );
            self.results.clear();
        }
        self.results.insert(key, result);
        Ok(result)
    }

    /// Look up a stored result without simulating.
    pub fn get(
        &self,
        config: &SimulationConfig,
        hero: [Card; 2],
        board: &[Card],
    ) -> Option<SimulationResult> {
        self.results
            .get(&CacheKey::new(config, hero, board))
            .copied()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Drop every stored result. The hit and miss counters are kept.
    pub fn clear(&mut self) {
        self.results.clear();
    }
}
