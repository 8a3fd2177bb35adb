use core::cmp::Ordering;

use crate::hand::{DealerHand, Hand};
use crate::result::{Outcome, RoundResult};

use super::Table;

impl Table {
    /// Compares the final hands and calculates the profit.
    ///
    /// Precedence, first match wins:
    /// 1. player bust loses the bet;
    /// 2. two naturals push;
    /// 3. a player natural pays the blackjack ratio;
    /// 4. a dealer natural wins against any other hand;
    /// 5. a dealer bust pays even money;
    /// 6. otherwise the higher total wins and equal totals push.
    #[must_use]
    pub fn settle(&self, player: &Hand, dealer: &DealerHand, bet: f64) -> RoundResult {
        let player_value = player.value();
        let dealer_value = dealer.value();
        let player_blackjack = player.is_blackjack();
        let dealer_blackjack = dealer.is_blackjack();
        let player_bust = player.is_bust();
        let dealer_bust = dealer.is_bust();

        let outcome = if player_bust {
            Outcome::PlayerBust
        } else if player_blackjack && dealer_blackjack {
            Outcome::Push
        } else if player_blackjack {
            Outcome::PlayerBlackjack
        } else if dealer_blackjack {
            Outcome::DealerWin
        } else if dealer_bust {
            Outcome::DealerBust
        } else {
            match player_value.cmp(&dealer_value) {
                Ordering::Greater => Outcome::PlayerWin,
                Ordering::Less => Outcome::DealerWin,
                Ordering::Equal => Outcome::Push,
            }
        };

        RoundResult {
            outcome,
            profit: bet * outcome.profit_multiple(&self.rules),
            bet,
            player_value,
            dealer_value,
            player_blackjack,
            dealer_blackjack,
            player_bust,
            dealer_bust,
        }
    }
}
