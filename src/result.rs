//! Round result types for settlement.

use crate::options::Rules;

/// Terminal result of a round, from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Outcome {
    /// Player has a natural and the dealer does not.
    PlayerBlackjack,
    /// Player went over 21.
    PlayerBust,
    /// Dealer went over 21 while the player stood.
    DealerBust,
    /// Player has the higher total.
    PlayerWin,
    /// Dealer has the higher total or a natural.
    DealerWin,
    /// Tie.
    Push,
}

impl Outcome {
    /// Every outcome kind.
    pub const ALL: [Self; 6] = [
        Self::PlayerBlackjack,
        Self::PlayerBust,
        Self::DealerBust,
        Self::PlayerWin,
        Self::DealerWin,
        Self::Push,
    ];

    /// Returns the profit of this outcome in multiples of the bet.
    #[must_use]
    pub const fn profit_multiple(self, rules: &Rules) -> f64 {
        match self {
            Self::PlayerBlackjack => rules.blackjack_pays,
            Self::DealerBust | Self::PlayerWin => 1.0,
            Self::PlayerBust | Self::DealerWin => -1.0,
            Self::Push => 0.0,
        }
    }

    /// Returns whether the player won the bet.
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(
            self,
            Self::PlayerBlackjack | Self::DealerBust | Self::PlayerWin
        )
    }

    /// Returns whether the player lost the bet.
    #[must_use]
    pub const fn is_loss(self) -> bool {
        matches!(self, Self::PlayerBust | Self::DealerWin)
    }

    /// Returns whether the bet was returned.
    #[must_use]
    pub const fn is_push(self) -> bool {
        matches!(self, Self::Push)
    }
}

/// Result of a single round.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RoundResult {
    /// The outcome of the round.
    pub outcome: Outcome,
    /// Signed profit relative to the bet.
    pub profit: f64,
    /// The bet amount for this round.
    pub bet: f64,
    /// The player's final hand value.
    pub player_value: u8,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether the player was dealt a natural.
    pub player_blackjack: bool,
    /// Whether the dealer was dealt a natural.
    pub dealer_blackjack: bool,
    /// Whether the player busted.
    pub player_bust: bool,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
}
