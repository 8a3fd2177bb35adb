//! A Monte Carlo blackjack simulator with optional `no_std` support.
//!
//! The crate plays independent single-hand rounds on an infinite deck
//! against a dealer that stands on soft 17, under one of several player
//! [`Policy`] variants, and reduces the outcomes into a [`Summary`] of
//! outcome rates and average profit.
//!
//! # Example
//!
//! ```
//! use bjsim::{Policy, SimulationOptions, Simulator, summarize};
//!
//! let options = SimulationOptions::default().with_games(1_000).with_seed(7);
//! let simulator = Simulator::new(options).unwrap();
//! let result = simulator.run(Policy::BasicStrategy);
//! let summary = summarize(result.rounds()).unwrap();
//! assert_eq!(summary.games, 1_000);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod policy;
pub mod result;
pub mod simulation;
pub mod stats;

// Re-export main types
pub use card::{InfiniteShoe, RANKS, Rank, Shoe, StackedShoe};
pub use error::{ConfigError, SummaryError};
pub use game::Table;
pub use hand::{DealerHand, Hand};
pub use options::{Rules, SimulationOptions};
pub use policy::{Decision, Policy};
pub use result::{Outcome, RoundResult};
pub use simulation::{Comparison, PolicyReport, SimulationResult, Simulator, simulate};
pub use stats::{OutcomeCounts, Summary, summarize};
