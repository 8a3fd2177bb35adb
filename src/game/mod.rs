//! Round engine.

use rand::Rng;

use crate::card::Shoe;
use crate::hand::{DealerHand, Hand};
use crate::options::Rules;
use crate::policy::Policy;
use crate::result::RoundResult;

mod dealer;
mod player;
mod showdown;

/// A blackjack table that plays single-hand rounds under fixed [`Rules`].
///
/// The table holds no per-round state: every call to [`Table::play_round`]
/// starts from empty hands, so rounds never influence each other.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Table {
    /// Table rules.
    rules: Rules,
}

impl Table {
    /// Creates a table with the given rules.
    #[must_use]
    pub const fn new(rules: Rules) -> Self {
        Self { rules }
    }

    /// Returns the table rules.
    #[must_use]
    pub const fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Plays one complete round and returns its settled result.
    ///
    /// The player and dealer each receive two cards, the dealer's first card
    /// being the up card shown to the policy. A player natural skips both
    /// turns. Otherwise the policy acts until it stands or the hand reaches
    /// 21, and the dealer plays only if the player did not bust.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::{Outcome, Policy, Rank, Rules, StackedShoe, Table};
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let table = Table::new(Rules::default());
    /// let mut rng = ChaCha8Rng::seed_from_u64(1);
    /// let mut shoe = StackedShoe::new([Rank::Ace, Rank::King, Rank::Nine, Rank::Eight]);
    /// let result = table.play_round(&Policy::BasicStrategy, 10.0, &mut shoe, &mut rng);
    /// assert_eq!(result.outcome, Outcome::PlayerBlackjack);
    /// assert_eq!(result.profit, 15.0);
    /// ```
    pub fn play_round<S: Shoe, R: Rng>(
        &self,
        policy: &Policy,
        bet: f64,
        shoe: &mut S,
        rng: &mut R,
    ) -> RoundResult {
        let mut player = Hand::new();
        let mut dealer = DealerHand::new();

        player.add_card(shoe.draw(rng));
        player.add_card(shoe.draw(rng));
        let up_card = shoe.draw(rng);
        dealer.add_card(up_card);
        dealer.add_card(shoe.draw(rng));

        let peeked = self.rules.dealer_peek && dealer.is_blackjack();

        if !peeked && !player.is_blackjack() {
            self.player_turn(policy, &mut player, up_card, shoe, rng);
        }

        if peeked || player.is_bust() || player.is_blackjack() {
            dealer.reveal_hole();
        } else {
            self.dealer_play(&mut dealer, shoe, rng);
        }

        let result = self.settle(&player, &dealer, bet);
        log::trace!(
            "round {:?}: player {:?} ({}) vs dealer {:?} ({})",
            result.outcome,
            player.cards(),
            result.player_value,
            dealer.cards(),
            result.dealer_value,
        );
        result
    }
}
