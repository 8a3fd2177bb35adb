//! Card ranks and the infinite-deck sampler.

use core::fmt;

use alloc::vec::Vec;
use rand::Rng;

/// Card rank. Suits never affect blackjack values, so only ranks are modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Rank {
    /// Ace, counted as 1 or 11.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack, counted as 10.
    Jack,
    /// Queen, counted as 10.
    Queen,
    /// King, counted as 10.
    King,
}

/// All thirteen ranks in deck order.
pub const RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

impl Rank {
    /// Returns the blackjack value of the rank, with an ace counted as 11.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::Ace => 11,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
            Self::Ten | Self::Jack | Self::Queen | Self::King => 10,
        }
    }

    /// Returns whether the rank is an ace.
    #[must_use]
    pub const fn is_ace(self) -> bool {
        matches!(self, Self::Ace)
    }

    /// Returns whether the rank is worth ten (ten or a face card).
    #[must_use]
    pub const fn is_ten_valued(self) -> bool {
        matches!(self, Self::Ten | Self::Jack | Self::Queen | Self::King)
    }

    /// Draws a rank uniformly from the thirteen ranks.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        RANKS[rng.random_range(0..RANKS.len())]
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Ace => "A",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
        };
        f.write_str(symbol)
    }
}

/// A source of cards for a round.
///
/// Randomness is passed in by the caller so a round can share one generator
/// between card draws and a randomized player policy.
pub trait Shoe {
    /// Draws the next card.
    fn draw<R: Rng>(&mut self, rng: &mut R) -> Rank;
}

/// Infinite deck: every draw is independent and uniform over [`RANKS`].
///
/// Sampling the thirteen ranks uniformly gives ten-valued cards a combined
/// weight of 4/13, the same as a shuffled 52-card deck.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InfiniteShoe;

impl Shoe for InfiniteShoe {
    fn draw<R: Rng>(&mut self, rng: &mut R) -> Rank {
        Rank::random(rng)
    }
}

/// A shoe that deals a fixed sequence of cards first and then falls back to
/// infinite-deck sampling.
///
/// ```
/// use bjsim::{Rank, Shoe, StackedShoe};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(0);
/// let mut shoe = StackedShoe::new([Rank::Ace, Rank::King]);
/// assert_eq!(shoe.draw(&mut rng), Rank::Ace);
/// assert_eq!(shoe.draw(&mut rng), Rank::King);
/// assert_eq!(shoe.remaining(), 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StackedShoe {
    /// Remaining stacked cards, stored in reverse draw order.
    cards: Vec<Rank>,
}

impl StackedShoe {
    /// Creates a shoe that deals `draws` in the given order.
    #[must_use]
    pub fn new<I: IntoIterator<Item = Rank>>(draws: I) -> Self {
        let mut cards: Vec<Rank> = draws.into_iter().collect();
        cards.reverse();
        Self { cards }
    }

    /// Returns the number of stacked cards not yet dealt.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }
}

impl Shoe for StackedShoe {
    fn draw<R: Rng>(&mut self, rng: &mut R) -> Rank {
        self.cards.pop().unwrap_or_else(|| Rank::random(rng))
    }
}
