//! Monte Carlo driver.
//!
//! Each round of a run gets its own ChaCha stream derived from the run seed
//! and the round index, so rounds share no random state and a run replays
//! identically whether rounds are played sequentially or in parallel.

use alloc::string::String;
use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::card::InfiniteShoe;
use crate::error::{ConfigError, SummaryError};
use crate::game::Table;
use crate::options::SimulationOptions;
use crate::policy::Policy;
use crate::result::{Outcome, RoundResult};
use crate::stats::{Summary, summarize};

/// Results of every round played by one policy in one run.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    /// Policy that made the player's decisions.
    policy: Policy,
    /// Seed of the run.
    seed: u64,
    /// Round results in round order.
    rounds: Vec<RoundResult>,
}

impl SimulationResult {
    /// Returns the policy that played the rounds.
    #[must_use]
    pub const fn policy(&self) -> Policy {
        self.policy
    }

    /// Returns the seed of the run.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the round results in round order.
    #[must_use]
    pub fn rounds(&self) -> &[RoundResult] {
        &self.rounds
    }

    /// Returns the outcome of each round.
    pub fn outcomes(&self) -> impl Iterator<Item = Outcome> + '_ {
        self.rounds.iter().map(|round| round.outcome)
    }

    /// Returns the number of rounds played.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    /// Returns whether no rounds were played.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    /// Reduces the rounds into summary statistics.
    ///
    /// # Errors
    ///
    /// Returns [`SummaryError::NoGames`] if no rounds were played.
    pub fn summary(&self) -> Result<Summary, SummaryError> {
        summarize(&self.rounds)
    }
}

/// Summary of one policy inside a [`Comparison`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PolicyReport {
    /// The simulated policy.
    pub policy: Policy,
    /// The policy's display name.
    pub name: String,
    /// Seed the policy was simulated with.
    pub seed: u64,
    /// Aggregated statistics.
    pub summary: Summary,
}

/// Per-policy summaries, keyed by policy name, in the order simulated.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Comparison {
    reports: Vec<PolicyReport>,
}

impl Comparison {
    /// Returns the reports in simulation order.
    #[must_use]
    pub fn reports(&self) -> &[PolicyReport] {
        &self.reports
    }

    /// Looks up a policy's summary by display name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Summary> {
        self.reports
            .iter()
            .find(|report| report.name == name)
            .map(|report| &report.summary)
    }

    /// Returns the report with the highest mean profit.
    #[must_use]
    pub fn best(&self) -> Option<&PolicyReport> {
        self.reports
            .iter()
            .max_by(|a, b| a.summary.mean_profit.total_cmp(&b.summary.mean_profit))
    }

    /// Returns the number of policies compared.
    #[must_use]
    pub fn len(&self) -> usize {
        self.reports.len()
    }

    /// Returns whether no policies were compared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}

/// Runs independent rounds under validated [`SimulationOptions`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Simulator {
    options: SimulationOptions,
    table: Table,
}

impl Simulator {
    /// Creates a simulator after validating the options.
    ///
    /// # Errors
    ///
    /// Returns an error if the number of games is zero, the bet is not a
    /// positive finite number, or the payout ratio is invalid.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::{ConfigError, SimulationOptions, Simulator};
    ///
    /// let options = SimulationOptions::default().with_games(0);
    /// assert_eq!(Simulator::new(options).unwrap_err(), ConfigError::ZeroGames);
    /// ```
    pub fn new(options: SimulationOptions) -> Result<Self, ConfigError> {
        options.validate()?;
        Ok(Self {
            options,
            table: Table::new(options.rules),
        })
    }

    /// Returns the simulation options.
    #[must_use]
    pub const fn options(&self) -> &SimulationOptions {
        &self.options
    }

    /// Plays round `index` of a run seeded with `seed`.
    fn play(&self, policy: Policy, seed: u64, index: usize) -> RoundResult {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        rng.set_stream(index as u64);
        self.table
            .play_round(&policy, self.options.bet, &mut InfiniteShoe, &mut rng)
    }

    /// Runs the configured number of rounds with the configured seed.
    #[must_use]
    pub fn run(&self, policy: Policy) -> SimulationResult {
        self.run_seeded(policy, self.options.seed)
    }

    /// Runs the configured number of rounds with an explicit seed.
    ///
    /// Identical `(policy, seed)` pairs always produce identical results.
    #[must_use]
    pub fn run_seeded(&self, policy: Policy, seed: u64) -> SimulationResult {
        log::debug!(
            "simulating {} games of {policy} (bet {}, seed {seed})",
            self.options.games,
            self.options.bet,
        );

        #[cfg(feature = "parallel")]
        let rounds = (0..self.options.games)
            .into_par_iter()
            .map(|index| self.play(policy, seed, index))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let rounds = (0..self.options.games)
            .map(|index| self.play(policy, seed, index))
            .collect();

        SimulationResult {
            policy,
            seed,
            rounds,
        }
    }

    /// Simulates each policy and collects their summaries.
    ///
    /// Policy `i` is simulated with seed `seed + i`.
    ///
    /// # Errors
    ///
    /// Returns [`SummaryError::NoGames`] if a run produced no rounds.
    pub fn compare(&self, policies: &[Policy]) -> Result<Comparison, SummaryError> {
        let mut reports = Vec::with_capacity(policies.len());

        for (offset, &policy) in (0u64..).zip(policies) {
            let seed = self.options.seed.wrapping_add(offset);
            let summary = self.run_seeded(policy, seed).summary()?;
            log::info!(
                "{policy}: mean profit {:.5} over {} games (win {:.3}, loss {:.3}, push {:.3})",
                summary.mean_profit,
                summary.games,
                summary.win_rate(),
                summary.loss_rate(),
                summary.push_rate(),
            );
            reports.push(PolicyReport {
                policy,
                name: policy.name(),
                seed,
                summary,
            });
        }

        Ok(Comparison { reports })
    }
}

/// Simulates `games` rounds of `policy` with a fixed `bet` under default rules.
///
/// # Errors
///
/// Returns an error before any round is played if `games` is zero or `bet`
/// is not a positive finite number.
///
/// # Example
///
/// ```
/// use bjsim::{Policy, simulate};
///
/// let first = simulate(Policy::Threshold(17), 500, 1.0, 9).unwrap();
/// let replay = simulate(Policy::Threshold(17), 500, 1.0, 9).unwrap();
/// assert_eq!(first, replay);
/// ```
pub fn simulate(
    policy: Policy,
    games: usize,
    bet: f64,
    seed: u64,
) -> Result<SimulationResult, ConfigError> {
    let options = SimulationOptions::default()
        .with_games(games)
        .with_bet(bet)
        .with_seed(seed);
    Ok(Simulator::new(options)?.run(policy))
}
