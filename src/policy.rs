//! Player decision policies.

use core::fmt;
use core::str::FromStr;

use alloc::string::{String, ToString};
use rand::Rng;

use crate::card::Rank;
use crate::error::ConfigError;
use crate::hand::Hand;

/// A player action. Only hitting and standing are available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Decision {
    /// Draw another card.
    Hit,
    /// Keep the current hand.
    Stand,
}

const H: Decision = Decision::Hit;
const S: Decision = Decision::Stand;

// Columns are dealer upcards 2 through 10, then ace.
const HARD_CHART: [[Decision; 10]; 5] = [
    [H, H, S, S, S, H, H, H, H, H], // 12
    [S, S, S, S, S, H, H, H, H, H], // 13
    [S, S, S, S, S, H, H, H, H, H], // 14
    [S, S, S, S, S, H, H, H, H, H], // 15
    [S, S, S, S, S, H, H, H, H, H], // 16
];

const SOFT_CHART: [[Decision; 10]; 8] = [
    [H, H, H, H, H, H, H, H, H, H], // soft 13
    [H, H, H, H, H, H, H, H, H, H],
    [H, H, H, H, H, H, H, H, H, H],
    [H, H, H, H, H, H, H, H, H, H],
    [H, H, H, H, H, H, H, H, H, H], // soft 17
    [S, S, S, S, S, S, S, H, H, H], // soft 18
    [S, S, S, S, S, S, S, S, S, S],
    [S, S, S, S, S, S, S, S, S, S], // soft 20
];

/// Hit/stand subset of the standard stand-on-soft-17 basic strategy chart.
fn basic_strategy(hand: &Hand, dealer_up_card: Rank) -> Decision {
    let total = hand.value();
    let col = usize::from(dealer_up_card.value() - 2);

    if hand.is_soft() {
        return match total {
            ..=12 => Decision::Hit,
            13..=20 => SOFT_CHART[usize::from(total - 13)][col],
            _ => Decision::Stand,
        };
    }

    match total {
        ..=11 => Decision::Hit,
        12..=16 => HARD_CHART[usize::from(total - 12)][col],
        _ => Decision::Stand,
    }
}

/// A player decision policy.
///
/// Every variant is a pure function of the player's hand and the dealer's up
/// card; [`Policy::Random`] additionally consumes the supplied generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Policy {
    /// Hits or stands with equal probability.
    Random,
    /// Hits while the hand value is below the threshold.
    Threshold(u8),
    /// Table-driven basic strategy without splits or doubles.
    BasicStrategy,
}

impl Policy {
    /// The four policies compared by default.
    pub const STANDARD: [Self; 4] = [
        Self::Random,
        Self::Threshold(17),
        Self::Threshold(16),
        Self::BasicStrategy,
    ];

    /// Decides whether to hit or stand.
    ///
    /// ```
    /// use bjsim::{Decision, Hand, Policy, Rank};
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let mut rng = ChaCha8Rng::seed_from_u64(0);
    /// let hand = Hand::from_cards([Rank::Ten, Rank::Six]);
    /// let policy = Policy::Threshold(17);
    /// assert_eq!(policy.decide(&hand, Rank::Seven, &mut rng), Decision::Hit);
    /// ```
    pub fn decide<R: Rng>(&self, hand: &Hand, dealer_up_card: Rank, rng: &mut R) -> Decision {
        match *self {
            Self::Random => {
                if rng.random_bool(0.5) {
                    Decision::Hit
                } else {
                    Decision::Stand
                }
            }
            Self::Threshold(threshold) => {
                if hand.value() < threshold {
                    Decision::Hit
                } else {
                    Decision::Stand
                }
            }
            Self::BasicStrategy => basic_strategy(hand, dealer_up_card),
        }
    }

    /// Returns the display name used in reports.
    #[must_use]
    pub fn name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Random => f.write_str("RandomPolicy"),
            Self::Threshold(threshold) => write!(f, "ThresholdPolicy(threshold={threshold})"),
            Self::BasicStrategy => f.write_str("BasicStrategyPolicy(no-split-no-double)"),
        }
    }
}

fn parse_threshold(key: &str) -> Option<u8> {
    let rest = key
        .strip_prefix("thresholdpolicy")
        .or_else(|| key.strip_prefix("threshold"))?;
    rest.trim_start_matches(['-', '_', '(', ':'])
        .trim_start_matches("threshold=")
        .trim_end_matches(')')
        .parse()
        .ok()
}

impl FromStr for Policy {
    type Err = ConfigError;

    /// Parses a policy identifier.
    ///
    /// Accepted forms are `random`, `basic` / `basic-strategy`, and
    /// `threshold-<k>` / `threshold(<k>)`, plus the exact display names.
    /// Matching ignores ASCII case.
    ///
    /// ```
    /// use bjsim::Policy;
    ///
    /// assert_eq!("threshold-16".parse::<Policy>(), Ok(Policy::Threshold(16)));
    /// assert!("martingale".parse::<Policy>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        let policy = match key.as_str() {
            "random" | "randompolicy" => Some(Self::Random),
            "basic" | "basic-strategy" | "basic_strategy" | "basicstrategy"
            | "basicstrategypolicy(no-split-no-double)" => Some(Self::BasicStrategy),
            other => parse_threshold(other).map(Self::Threshold),
        };
        policy.ok_or_else(|| ConfigError::UnknownPolicy(s.to_string()))
    }
}
