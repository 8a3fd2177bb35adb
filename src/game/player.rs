use rand::Rng;

use crate::card::{Rank, Shoe};
use crate::hand::Hand;
use crate::policy::{Decision, Policy};

use super::Table;

impl Table {
    /// Lets the policy act on the player's hand until it stands, reaches 21,
    /// or busts.
    ///
    /// The policy is never consulted once the hand value is 21 or more.
    /// Returns the number of cards drawn.
    pub fn player_turn<S: Shoe, R: Rng>(
        &self,
        policy: &Policy,
        hand: &mut Hand,
        dealer_up_card: Rank,
        shoe: &mut S,
        rng: &mut R,
    ) -> usize {
        let mut hits = 0;

        while hand.value() < 21 {
            match policy.decide(hand, dealer_up_card, rng) {
                Decision::Stand => break,
                Decision::Hit => {
                    hand.add_card(shoe.draw(rng));
                    hits += 1;
                }
            }
        }

        hits
    }
}
