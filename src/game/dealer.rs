use alloc::vec::Vec;
use rand::Rng;

use crate::card::{Rank, Shoe};
use crate::hand::DealerHand;

use super::Table;

impl Table {
    /// Returns whether the dealer must draw another card.
    ///
    /// The dealer draws below 17 and stands on 18 or more. A hard 17 always
    /// stands; a soft 17 stands unless the table hits soft 17.
    #[must_use]
    pub fn dealer_should_hit(&self, dealer: &DealerHand) -> bool {
        let value = dealer.value();
        if value > 17 {
            return false;
        }
        if value == 17 {
            return dealer.is_soft() && !self.rules.stand_on_soft_17;
        }
        true
    }

    /// Dealer plays their hand according to the rules.
    ///
    /// The dealer reveals their hole card and draws until reaching 17 or
    /// higher. The dealer's cards alone determine play; the player's hand is
    /// never consulted.
    ///
    /// Returns the cards drawn by the dealer.
    pub fn dealer_play<S: Shoe, R: Rng>(
        &self,
        dealer: &mut DealerHand,
        shoe: &mut S,
        rng: &mut R,
    ) -> Vec<Rank> {
        dealer.reveal_hole();

        let mut drawn_cards = Vec::new();
        while self.dealer_should_hit(dealer) {
            let card = shoe.draw(rng);
            dealer.add_card(card);
            drawn_cards.push(card);
        }

        drawn_cards
    }
}
