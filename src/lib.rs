//! Poker Equity is a library for estimating how often a Texas hold'em hand
//! wins, and turning that number into a betting recommendation.
//!
//! It is split into two parts:
//!
//! - `core` holds everything that is agnostic to the game being played:
//!   cards, decks, and a lookup table based hand evaluator that ranks any
//!   5, 6 or 7 card hand.
//! - `holdem` holds the monte carlo equity simulator and the pot odds based
//!   decision policy.
//!
//! # Examples
//!
//! ```
//! use poker_equity::core::Card;
//! use poker_equity::holdem::{SimulationConfig, advise};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let hero = [Card::try_from("Ah").unwrap(), Card::try_from("Ad").unwrap()];
//! let board = ["2c", "7d", "Ts"].map(|s| Card::try_from(s).unwrap());
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let result = SimulationConfig::default()
//!     .trials(2_000)
//!     .run_with_rng(hero, &board, &mut rng)
//!     .unwrap();
//!
//! let advice = advise(result.equity_percent(), 100.0, 25.0).unwrap();
//! assert_eq!("raise", advice.recommendation.label());
//! ```

/// Allow all the core poker functionality to be used
/// externally. Everything in core should be agnostic
/// to poker style.
pub mod core;
/// Allow all the holdem specific code to be used externally.
pub mod holdem;
