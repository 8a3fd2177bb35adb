//! Table rules and simulation configuration.

use crate::error::ConfigError;

/// Table rules for a round.
///
/// Use the builder pattern to customize rules:
///
/// ```
/// use bjsim::Rules;
///
/// let rules = Rules::default()
///     .with_blackjack_pays(1.2)
///     .with_stand_on_soft_17(false);
/// assert_eq!(rules.blackjack_pays, 1.2);
/// assert!(!rules.stand_on_soft_17);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Rules {
    /// Blackjack payout ratio (typically 1.5).
    pub blackjack_pays: f64,
    /// Whether dealer stands on soft 17.
    pub stand_on_soft_17: bool,
    /// Whether a dealer natural ends the round right after the deal.
    pub dealer_peek: bool,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            blackjack_pays: 1.5,
            stand_on_soft_17: true,
            dealer_peek: false,
        }
    }
}

impl Rules {
    /// Sets the blackjack payout ratio.
    #[must_use]
    pub const fn with_blackjack_pays(mut self, ratio: f64) -> Self {
        self.blackjack_pays = ratio;
        self
    }

    /// Sets whether dealer stands on soft 17.
    #[must_use]
    pub const fn with_stand_on_soft_17(mut self, stand: bool) -> Self {
        self.stand_on_soft_17 = stand;
        self
    }

    /// Sets whether the dealer checks for a natural before the player acts.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::Rules;
    ///
    /// let rules = Rules::default().with_dealer_peek(true);
    /// assert!(rules.dealer_peek);
    /// ```
    #[must_use]
    pub const fn with_dealer_peek(mut self, peek: bool) -> Self {
        self.dealer_peek = peek;
        self
    }

    /// Checks that the rules describe a playable table.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPayout`] if the blackjack payout ratio is
    /// negative or not finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.blackjack_pays.is_finite() || self.blackjack_pays < 0.0 {
            return Err(ConfigError::InvalidPayout);
        }
        Ok(())
    }
}

/// Configuration for a Monte Carlo run.
///
/// ```
/// use bjsim::{Rules, SimulationOptions};
///
/// let options = SimulationOptions::default()
///     .with_games(10_000)
///     .with_bet(5.0)
///     .with_seed(100)
///     .with_rules(Rules::default().with_dealer_peek(true));
/// assert_eq!(options.games, 10_000);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationOptions {
    /// Number of rounds to play per policy.
    pub games: usize,
    /// Fixed bet placed on every round.
    pub bet: f64,
    /// Seed of the random number generator.
    pub seed: u64,
    /// Table rules.
    pub rules: Rules,
}

impl Default for SimulationOptions {
    fn default() -> Self {
        Self {
            games: 50_000,
            bet: 1.0,
            seed: 42,
            rules: Rules::default(),
        }
    }
}

impl SimulationOptions {
    /// Sets the number of games.
    #[must_use]
    pub const fn with_games(mut self, games: usize) -> Self {
        self.games = games;
        self
    }

    /// Sets the bet amount.
    #[must_use]
    pub const fn with_bet(mut self, bet: f64) -> Self {
        self.bet = bet;
        self
    }

    /// Sets the seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the table rules.
    #[must_use]
    pub const fn with_rules(mut self, rules: Rules) -> Self {
        self.rules = rules;
        self
    }

    /// Checks the configuration before any round is played.
    ///
    /// # Errors
    ///
    /// Returns an error if the number of games is zero, the bet is not a
    /// positive finite number, or the rules are invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.games == 0 {
            return Err(ConfigError::ZeroGames);
        }
        if !self.bet.is_finite() || self.bet <= 0.0 {
            return Err(ConfigError::InvalidBet);
        }
        self.rules.validate()
    }
}
