use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::{Level, event, trace_span};

use crate::core::{Card, Deck, EquityError, FlatDeck, HandRank, evaluate, rank_best};

/// Number of community cards on a complete board.
pub const BOARD_SIZE: usize = 5;

/// How one simulated hand ended for the hero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Strictly better than every opponent.
    Win,
    /// Equal to the best opponent.
    Tie,
    /// At least one opponent is strictly better.
    Loss,
}

/// Tally of simulated outcomes.
///
/// Results from separate batches of trials can be added together; the sum
/// is the same as if all the trials had been run in one batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationResult {
    wins: u64,
    ties: u64,
    losses: u64,
    trials: u64,
}

impl SimulationResult {
    pub fn wins(&self) -> u64 {
        self.wins
    }

    pub fn ties(&self) -> u64 {
        self.ties
    }

    pub fn losses(&self) -> u64 {
        self.losses
    }

    pub fn trials(&self) -> u64 {
        self.trials
    }

    /// Share of the pot the hero expects to win, in `0.0..=1.0`.
    /// Ties count as half a win.
    pub fn equity(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        (self.wins as f64 + self.ties as f64 / 2.0) / self.trials as f64
    }

    /// `equity` as a percentage. Not rounded.
    pub fn equity_percent(&self) -> f64 {
        self.equity() * 100.0
    }

    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Tie => self.ties += 1,
            Outcome::Loss => self.losses += 1,
        }
        self.trials += 1;
    }
}

impl Add for SimulationResult {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            wins: self.wins + rhs.wins,
            ties: self.ties + rhs.ties,
            losses: self.losses + rhs.losses,
            trials: self.trials + rhs.trials,
        }
    }
}

impl AddAssign for SimulationResult {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for SimulationResult {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, r| acc + r)
    }
}

impl fmt::Display for SimulationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.2}% equity ({} wins, {} ties, {} losses in {} trials)",
            self.equity_percent(),
            self.wins,
            self.ties,
            self.losses,
            self.trials
        )
    }
}

/// Monte carlo estimate of how often a hero's two cards win against
/// random opponents.
///
/// Each trial completes the board and deals every opponent two cards,
/// drawing uniformly from the cards that are not the hero's or already on
/// the board. Every trial draws afresh, so trials are independent.
///
/// # Examples
///
/// ```
/// use poker_equity::core::Card;
/// use poker_equity::holdem::EquitySimulator;
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let hero = [Card::try_from("Ks").unwrap(), Card::try_from("Kd").unwrap()];
/// let board = ["Kh", "7c", "2d"].map(|s| Card::try_from(s).unwrap());
///
/// let mut sim = EquitySimulator::new(hero, &board, 1).unwrap();
/// let mut rng = StdRng::seed_from_u64(42);
/// let result = sim.run(1_000, &mut rng).unwrap();
///
/// assert_eq!(1_000, result.trials());
/// assert!(result.equity() > 0.8);
/// ```
#[derive(Debug, Clone)]
pub struct EquitySimulator {
    hero: [Card; 2],
    board: Vec<Card>,
    opponents: usize,
    /// Cards drawn per trial, checked against the deck in `new`.
    needed: usize,
    /// Everything not held by the hero or on the board.
    deck: FlatDeck,
}

impl EquitySimulator {
    /// Validate the inputs and set up the remaining deck.
    ///
    /// Duplicate hero cards, overlap between hero and board, more than five
    /// board cards and zero opponents are invalid input. Needing more cards
    /// than are left is `DeckExhausted`.
    pub fn new(hero: [Card; 2], board: &[Card], opponents: usize) -> Result<Self, EquityError> {
        if board.len() > BOARD_SIZE {
            return Err(EquityError::InvalidBoardSize(board.len()));
        }
        if opponents == 0 {
            return Err(EquityError::NoOpponents);
        }

        let known: Vec<Card> = hero.iter().chain(board.iter()).copied().collect();
        let deck = Deck::without(&known)?;

        let remaining = deck.len();
        let needed = opponents
            .checked_mul(2)
            .and_then(|n| n.checked_add(BOARD_SIZE - board.len()))
            .ok_or(EquityError::DeckExhausted {
                needed: usize::MAX,
                remaining,
            })?;
        if needed > remaining {
            return Err(EquityError::DeckExhausted { needed, remaining });
        }

        Ok(Self {
            hero,
            board: board.to_vec(),
            opponents,
            needed,
            deck: deck.into(),
        })
    }

    pub fn hero(&self) -> [Card; 2] {
        self.hero
    }

    pub fn board(&self) -> &[Card] {
        &self.board
    }

    pub fn opponents(&self) -> usize {
        self.opponents
    }

    /// Cards left to draw from.
    pub fn remaining(&self) -> usize {
        self.deck.len()
    }

    /// Cards drawn every trial: the rest of the board plus the opponents'
    /// hole cards.
    pub fn cards_needed(&self) -> usize {
        self.needed
    }

    /// Play out one random completion of the hand.
    pub fn simulate_trial<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Outcome {
        let missing = BOARD_SIZE - self.board.len();
        let drawn = self.deck.draw(rng, self.needed);

        // Board in the first five slots, hole cards in the last two.
        let mut seven = [self.hero[0]; 7];
        seven[..self.board.len()].copy_from_slice(&self.board);
        seven[self.board.len()..BOARD_SIZE].copy_from_slice(&drawn[..missing]);

        let best_opponent = drawn[missing..]
            .chunks_exact(2)
            .map(|hole| {
                seven[BOARD_SIZE..].copy_from_slice(hole);
                rank_best(&seven)
            })
            .max();

        seven[BOARD_SIZE..].copy_from_slice(&self.hero);
        let hero_rank = rank_best(&seven);

        compare(hero_rank, best_opponent)
    }

    /// Run `trials` independent trials with the given random source.
    pub fn run<R: Rng + ?Sized>(
        &mut self,
        trials: usize,
        rng: &mut R,
    ) -> Result<SimulationResult, EquityError> {
        if trials == 0 {
            return Err(EquityError::NoTrials);
        }

        event!(
            Level::DEBUG,
            hero = ?self.hero,
            board = ?self.board,
            opponents = self.opponents,
            trials,
            "Starting equity simulation"
        );

        let result = self.run_trials(trials, rng);

        event!(
            Level::DEBUG,
            wins = result.wins,
            ties = result.ties,
            losses = result.losses,
            equity = result.equity(),
            "Finished equity simulation"
        );
        Ok(result)
    }

    /// Split `trials` across `workers` batches, each with its own `StdRng`
    /// seeded from `rng`, and sum the results.
    ///
    /// With the `parallel` feature the batches run on the rayon thread
    /// pool. Either way the result for a given seed is the same.
    pub fn run_workers<R: Rng + ?Sized>(
        &self,
        trials: usize,
        workers: usize,
        rng: &mut R,
    ) -> Result<SimulationResult, EquityError> {
        if trials == 0 {
            return Err(EquityError::NoTrials);
        }
        if workers == 0 {
            return Err(EquityError::NoWorkers);
        }

        event!(
            Level::DEBUG,
            hero = ?self.hero,
            board = ?self.board,
            opponents = self.opponents,
            trials,
            workers,
            "Starting split equity simulation"
        );

        let seeds: Vec<u64> = (0..workers).map(|_| rng.random()).collect();
        let base = trials / workers;
        let extra = trials % workers;

        let batch = |(idx, seed): (usize, u64)| {
            let _span = trace_span!("equity_worker", idx).entered();
            let mut sim = self.clone();
            let mut worker_rng = StdRng::seed_from_u64(seed);
            let n = base + usize::from(idx < extra);
            sim.run_trials(n, &mut worker_rng)
        };

        #[cfg(feature = "parallel")]
        let result = {
            use rayon::prelude::*;
            seeds
                .into_par_iter()
                .enumerate()
                .map(batch)
                .reduce(SimulationResult::default, |a, b| a + b)
        };

        #[cfg(not(feature = "parallel"))]
        let result: SimulationResult = seeds.into_iter().enumerate().map(batch).sum();

        event!(
            Level::DEBUG,
            wins = result.wins,
            ties = result.ties,
            losses = result.losses,
            equity = result.equity(),
            "Finished split equity simulation"
        );
        Ok(result)
    }

    fn run_trials<R: Rng + ?Sized>(&mut self, trials: usize, rng: &mut R) -> SimulationResult {
        let mut result = SimulationResult::default();
        for _ in 0..trials {
            let outcome = self.simulate_trial(rng);
            result.record(outcome);
        }
        result
    }
}

fn compare(hero: HandRank, best_opponent: Option<HandRank>) -> Outcome {
    match best_opponent {
        Some(opponent) if hero < opponent => Outcome::Loss,
        Some(opponent) if hero == opponent => Outcome::Tie,
        _ => Outcome::Win,
    }
}

/// Estimate the hero's equity against `opponents` random hands.
///
/// All inputs are checked before any trial is run.
pub fn simulate<R: Rng + ?Sized>(
    hero: [Card; 2],
    board: &[Card],
    opponents: usize,
    trials: usize,
    rng: &mut R,
) -> Result<SimulationResult, EquityError> {
    if trials == 0 {
        return Err(EquityError::NoTrials);
    }
    EquitySimulator::new(hero, board, opponents)?.run(trials, rng)
}

/// The hero's best made hand right now, for display. Needs at least
/// three board cards.
///
/// ```
/// use poker_equity::core::{Card, HandCategory};
/// use poker_equity::holdem::current_hand;
///
/// let hero = [Card::try_from("As").unwrap(), Card::try_from("7d").unwrap()];
/// let board = ["Ah", "7c", "2d"].map(|s| Card::try_from(s).unwrap());
///
/// let rank = current_hand(hero, &board).unwrap();
/// assert_eq!(HandCategory::TwoPair, rank.category());
/// ```
pub fn current_hand(hero: [Card; 2], board: &[Card]) -> Result<HandRank, EquityError> {
    if board.len() > BOARD_SIZE {
        return Err(EquityError::InvalidBoardSize(board.len()));
    }
    let cards: Vec<Card> = hero.iter().chain(board.iter()).copied().collect();
    evaluate(&cards)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::HandCategory;
    use approx::assert_abs_diff_eq;

    fn card(s: &str) -> Card {
        Card::try_from(s).unwrap()
    }

    fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace().map(card).collect()
    }

    fn hero(a: &str, b: &str) -> [Card; 2] {
        [card(a), card(b)]
    }

    #[test]
    fn test_equity_math() {
        let mut r = SimulationResult::default();
        assert_eq!(0.0, r.equity());

        r.record(Outcome::Win);
        r.record(Outcome::Tie);
        r.record(Outcome::Loss);
        r.record(Outcome::Loss);
        assert_eq!(4, r.trials());
        assert_abs_diff_eq!(0.375, r.equity());
        assert_abs_diff_eq!(37.5, r.equity_percent());
    }

    #[test]
    fn test_results_add() {
        let mut a = SimulationResult::default();
        a.record(Outcome::Win);
        let mut b = SimulationResult::default();
        b.record(Outcome::Loss);
        b.record(Outcome::Tie);

        let sum = a + b;
        assert_eq!(1, sum.wins());
        assert_eq!(1, sum.ties());
        assert_eq!(1, sum.losses());
        assert_eq!(3, sum.trials());
        assert_eq!(sum, [a, b].into_iter().sum());
    }

    #[test]
    fn test_compare() {
        let low = crate::core::evaluate(&cards("7d 5c 4s 3h 2s")).unwrap();
        let high = crate::core::evaluate(&cards("Ah Kh Qh Jh Th")).unwrap();
        assert_eq!(Outcome::Win, compare(high, Some(low)));
        assert_eq!(Outcome::Tie, compare(high, Some(high)));
        assert_eq!(Outcome::Loss, compare(low, Some(high)));
    }

    #[test]
    fn test_remaining_deck() {
        let sim = EquitySimulator::new(hero("Ah", "Kh"), &cards("2c 7d Ts Jc 3s"), 1).unwrap();
        assert_eq!(45, sim.remaining());
        assert_eq!(2, sim.cards_needed());

        let sim = EquitySimulator::new(hero("Ah", "Kh"), &cards("2c 7d Ts"), 3).unwrap();
        assert_eq!(47, sim.remaining());
        assert_eq!(8, sim.cards_needed());
    }

    #[test]
    fn test_invalid_inputs() {
        assert_eq!(
            Err(EquityError::DuplicateCard(card("Ah"))),
            EquitySimulator::new(hero("Ah", "Ah"), &[], 1).map(|_| ())
        );
        assert_eq!(
            Err(EquityError::DuplicateCard(card("Kh"))),
            EquitySimulator::new(hero("Ah", "Kh"), &cards("2c Kh 3d"), 1).map(|_| ())
        );
        assert_eq!(
            Err(EquityError::InvalidBoardSize(6)),
            EquitySimulator::new(hero("Ah", "Kh"), &cards("2c 3c 4c 5c 6c 7c"), 1).map(|_| ())
        );
        assert_eq!(
            Err(EquityError::NoOpponents),
            EquitySimulator::new(hero("Ah", "Kh"), &[], 0).map(|_| ())
        );

        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            Err(EquityError::NoTrials),
            simulate(hero("Ah", "Kh"), &[], 1, 0, &mut rng)
        );
    }

    #[test]
    fn test_exhausted_deck() {
        // 47 cards left after a flop; 2 + 2 * 23 = 48 needed.
        let err = EquitySimulator::new(hero("Ah", "Kh"), &cards("2c 7d Ts"), 23).unwrap_err();
        assert_eq!(
            EquityError::DeckExhausted {
                needed: 48,
                remaining: 47
            },
            err
        );
        assert!(err.is_exhausted());

        // 2 + 2 * 22 = 46 fits.
        assert!(EquitySimulator::new(hero("Ah", "Kh"), &cards("2c 7d Ts"), 22).is_ok());
    }

    #[test]
    fn test_opponent_count_that_overflows() {
        let opponents = usize::MAX / 2 + 1;
        let err = EquitySimulator::new(hero("2c", "7d"), &cards("As Ks Qs"), opponents)
            .unwrap_err();
        assert_eq!(
            EquityError::DeckExhausted {
                needed: usize::MAX,
                remaining: 47
            },
            err
        );

        let mut rng = StdRng::seed_from_u64(1);
        let err = simulate(hero("2c", "7d"), &cards("As Ks Qs"), opponents, 100, &mut rng)
            .unwrap_err();
        assert!(err.is_exhausted());
    }

    #[test_log::test]
    fn test_single_trial_is_reproducible() {
        let board = cards("2c 7d Ts");
        let one = simulate(hero("Ah", "Kh"), &board, 1, 1, &mut StdRng::seed_from_u64(420)).unwrap();
        let two = simulate(hero("Ah", "Kh"), &board, 1, 1, &mut StdRng::seed_from_u64(420)).unwrap();
        assert_eq!(one, two);
        assert_eq!(1, one.trials());
    }

    #[test_log::test]
    fn test_seeded_runs_are_reproducible() {
        let board = cards("2c 7d Ts Jc");
        let one = simulate(hero("Qh", "9h"), &board, 2, 500, &mut StdRng::seed_from_u64(7)).unwrap();
        let two = simulate(hero("Qh", "9h"), &board, 2, 500, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(one, two);
    }

    #[test_log::test]
    fn test_river_nuts_always_win() {
        // Royal flush on board for the hero, nobody can beat or tie it.
        let board = cards("Qh Jh Th 2c 3d");
        let mut rng = StdRng::seed_from_u64(3);
        let result = simulate(hero("Ah", "Kh"), &board, 3, 200, &mut rng).unwrap();
        assert_eq!(200, result.wins());
        assert_abs_diff_eq!(100.0, result.equity_percent());
    }

    #[test_log::test]
    fn test_board_plays_is_a_tie() {
        // Royal flush on the board. Everyone splits.
        let board = cards("Ah Kh Qh Jh Th");
        let mut rng = StdRng::seed_from_u64(3);
        let result = simulate(hero("2c", "3d"), &board, 2, 200, &mut rng).unwrap();
        assert_eq!(200, result.ties());
        assert_abs_diff_eq!(0.5, result.equity());
    }

    #[test_log::test]
    fn test_aces_beat_deuces() {
        let board = cards("9c Jd 4s");
        let aces = simulate(hero("As", "Ah"), &board, 1, 3_000, &mut StdRng::seed_from_u64(11)).unwrap();
        let deuces = simulate(hero("2s", "2h"), &board, 1, 3_000, &mut StdRng::seed_from_u64(11)).unwrap();
        assert!(aces.equity() > deuces.equity());
        assert!(aces.equity() > 0.8);
    }

    #[test_log::test]
    fn test_more_opponents_less_equity() {
        let board = cards("9c Jd 4s");
        let h = hero("As", "Kh");
        let one = simulate(h, &board, 1, 3_000, &mut StdRng::seed_from_u64(5)).unwrap();
        let five = simulate(h, &board, 5, 3_000, &mut StdRng::seed_from_u64(5)).unwrap();
        assert!(one.equity() > five.equity());
    }

    #[test_log::test]
    fn test_preflop_simulation() {
        let mut rng = StdRng::seed_from_u64(21);
        let result = simulate(hero("As", "Ad"), &[], 1, 2_000, &mut rng).unwrap();
        // Aces are roughly 85% against a random hand.
        assert_abs_diff_eq!(0.85, result.equity(), epsilon = 0.04);
    }

    #[test_log::test]
    fn test_run_workers_matches_totals() {
        let sim = EquitySimulator::new(hero("Ts", "Td"), &cards("2c 7d Ks"), 1).unwrap();
        let result = sim
            .run_workers(1_001, 4, &mut StdRng::seed_from_u64(9))
            .unwrap();
        assert_eq!(1_001, result.trials());
        assert_eq!(result.trials(), result.wins() + result.ties() + result.losses());

        let again = sim
            .run_workers(1_001, 4, &mut StdRng::seed_from_u64(9))
            .unwrap();
        assert_eq!(result, again);

        assert_eq!(
            Err(EquityError::NoWorkers),
            sim.run_workers(10, 0, &mut StdRng::seed_from_u64(9))
        );
    }

    #[test]
    fn test_current_hand() {
        let rank = current_hand(hero("As", "Ks"), &cards("Qs Js Ts")).unwrap();
        assert_eq!(HandCategory::StraightFlush, rank.category());

        let rank = current_hand(hero("As", "Kd"), &cards("Qs Js 2h 4c")).unwrap();
        assert_eq!(HandCategory::HighCard, rank.category());

        assert_eq!(
            Err(EquityError::InvalidHandSize(4)),
            current_hand(hero("As", "Kd"), &cards("Qs Js"))
        );
    }
}
