//! Error types for configuration and aggregation.

use alloc::string::String;
use thiserror::Error;

/// Errors that can occur while configuring a simulation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Number of games is zero.
    #[error("number of games must be positive")]
    ZeroGames,
    /// Bet amount is zero, negative, or not finite.
    #[error("bet amount must be a positive finite number")]
    InvalidBet,
    /// Blackjack payout ratio is negative or not finite.
    #[error("blackjack payout must be a non-negative finite ratio")]
    InvalidPayout,
    /// Policy identifier does not name any known policy.
    #[error("unknown policy: {0}")]
    UnknownPolicy(String),
}

/// Errors that can occur when summarizing round results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SummaryError {
    /// No rounds were played, so rates and mean profit are undefined.
    #[error("no games to summarize")]
    NoGames,
}
