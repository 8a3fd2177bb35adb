//! Reduction of round results into summary statistics.

use crate::error::SummaryError;
use crate::result::{Outcome, RoundResult};

#[cfg(feature = "std")]
fn sqrt(value: f64) -> f64 {
    value.sqrt()
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn sqrt(value: f64) -> f64 {
    libm::sqrt(value)
}

#[expect(
    clippy::cast_precision_loss,
    reason = "f64 has sufficient precision for game counts"
)]
const fn as_f64(count: usize) -> f64 {
    count as f64
}

/// Number of rounds that ended in each outcome kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OutcomeCounts {
    /// Rounds won with a natural.
    pub player_blackjack: usize,
    /// Rounds lost to a player bust.
    pub player_bust: usize,
    /// Rounds won because the dealer busted.
    pub dealer_bust: usize,
    /// Rounds won on a higher total.
    pub player_win: usize,
    /// Rounds lost to a higher dealer total or a dealer natural.
    pub dealer_win: usize,
    /// Tied rounds.
    pub push: usize,
}

impl OutcomeCounts {
    /// Counts one more round with the given outcome.
    pub const fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::PlayerBlackjack => self.player_blackjack += 1,
            Outcome::PlayerBust => self.player_bust += 1,
            Outcome::DealerBust => self.dealer_bust += 1,
            Outcome::PlayerWin => self.player_win += 1,
            Outcome::DealerWin => self.dealer_win += 1,
            Outcome::Push => self.push += 1,
        }
    }

    /// Returns the count for one outcome kind.
    #[must_use]
    pub const fn get(&self, outcome: Outcome) -> usize {
        match outcome {
            Outcome::PlayerBlackjack => self.player_blackjack,
            Outcome::PlayerBust => self.player_bust,
            Outcome::DealerBust => self.dealer_bust,
            Outcome::PlayerWin => self.player_win,
            Outcome::DealerWin => self.dealer_win,
            Outcome::Push => self.push,
        }
    }

    /// Returns the number of rounds counted.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.wins() + self.losses() + self.pushes()
    }

    /// Rounds won by any means.
    #[must_use]
    pub const fn wins(&self) -> usize {
        self.player_blackjack + self.dealer_bust + self.player_win
    }

    /// Rounds lost by any means.
    #[must_use]
    pub const fn losses(&self) -> usize {
        self.player_bust + self.dealer_win
    }

    /// Rounds pushed.
    #[must_use]
    pub const fn pushes(&self) -> usize {
        self.push
    }
}

/// Aggregated statistics for one simulated policy.
///
/// Rates are probabilities in `[0, 1]`; the six outcome rates sum to 1.
/// Profits are in the same currency units as the configured bet.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Summary {
    /// Number of rounds summarized.
    pub games: usize,
    /// Rounds per outcome kind.
    pub counts: OutcomeCounts,
    /// Sum of per-round profit.
    pub total_profit: f64,
    /// Mean profit per round.
    pub mean_profit: f64,
    /// Sample standard deviation of per-round profit. `None` for one round.
    pub std_dev: Option<f64>,
}

impl Summary {
    /// Returns the fraction of rounds that ended in `outcome`.
    #[must_use]
    pub const fn rate(&self, outcome: Outcome) -> f64 {
        as_f64(self.counts.get(outcome)) / as_f64(self.games)
    }

    /// Fraction of rounds won, naturals and dealer busts included.
    #[must_use]
    pub const fn win_rate(&self) -> f64 {
        as_f64(self.counts.wins()) / as_f64(self.games)
    }

    /// Fraction of rounds lost, player busts included.
    #[must_use]
    pub const fn loss_rate(&self) -> f64 {
        as_f64(self.counts.losses()) / as_f64(self.games)
    }

    /// Fraction of rounds pushed.
    #[must_use]
    pub const fn push_rate(&self) -> f64 {
        as_f64(self.counts.pushes()) / as_f64(self.games)
    }

    /// Fraction of rounds won with a natural.
    #[must_use]
    pub const fn blackjack_rate(&self) -> f64 {
        self.rate(Outcome::PlayerBlackjack)
    }

    /// Fraction of rounds in which the player busted.
    #[must_use]
    pub const fn bust_rate(&self) -> f64 {
        self.rate(Outcome::PlayerBust)
    }

    /// Standard error of the mean profit.
    #[must_use]
    pub fn standard_error(&self) -> Option<f64> {
        self.std_dev.map(|sd| sd / sqrt(as_f64(self.games)))
    }

    /// Normal-approximation confidence interval for the mean profit.
    ///
    /// `z` is the standard score of the desired level, 1.96 for 95%.
    #[must_use]
    pub fn confidence_interval(&self, z: f64) -> Option<(f64, f64)> {
        self.standard_error()
            .map(|se| (self.mean_profit - z * se, self.mean_profit + z * se))
    }
}

/// Summarizes a sequence of round results.
///
/// # Errors
///
/// Returns [`SummaryError::NoGames`] if `rounds` is empty, since rates and
/// mean profit are undefined.
///
/// # Example
///
/// ```
/// use bjsim::{SummaryError, summarize};
///
/// assert_eq!(summarize(&[]).unwrap_err(), SummaryError::NoGames);
/// ```
pub fn summarize(rounds: &[RoundResult]) -> Result<Summary, SummaryError> {
    if rounds.is_empty() {
        return Err(SummaryError::NoGames);
    }

    let games = rounds.len();
    let mut counts = OutcomeCounts::default();
    let mut total_profit = 0.0;
    for round in rounds {
        counts.record(round.outcome);
        total_profit += round.profit;
    }
    let mean_profit = total_profit / as_f64(games);

    let std_dev = (games > 1).then(|| {
        let squares: f64 = rounds
            .iter()
            .map(|round| {
                let diff = round.profit - mean_profit;
                diff * diff
            })
            .sum();
        sqrt(squares / as_f64(games - 1))
    });

    Ok(Summary {
        games,
        counts,
        total_profit,
        mean_profit,
        std_dev,
    })
}
