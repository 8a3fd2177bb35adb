//! Card, hand, policy, and round integration tests.

#![allow(clippy::float_cmp)]

use bjsim::{
    ConfigError, Decision, DealerHand, Hand, InfiniteShoe, Outcome, Policy, RANKS, Rank, Rules,
    Shoe, StackedShoe, Table,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const TENS: [Rank; 4] = [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King];

fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

fn hand(cards: &[Rank]) -> Hand {
    Hand::from_cards(cards.iter().copied())
}

fn dealer(cards: &[Rank]) -> DealerHand {
    let mut dealer = DealerHand::new();
    for &card in cards {
        dealer.add_card(card);
    }
    dealer
}

#[test]
fn infinite_shoe_draws_every_rank_evenly() {
    let mut rng = rng(3);
    let mut shoe = InfiniteShoe;
    let mut counts = [0usize; 13];

    for _ in 0..130_000 {
        let card = shoe.draw(&mut rng);
        let index = RANKS.iter().position(|&rank| rank == card).unwrap();
        counts[index] += 1;
    }

    for count in counts {
        assert!((9_400..=10_600).contains(&count), "count {count}");
    }
}

#[test]
fn stacked_shoe_falls_back_to_sampling() {
    let mut rng = rng(0);
    let mut shoe = StackedShoe::new([Rank::Two]);
    assert_eq!(shoe.draw(&mut rng), Rank::Two);
    assert_eq!(shoe.remaining(), 0);

    let card = shoe.draw(&mut rng);
    assert!(RANKS.contains(&card));
}

#[test]
fn rank_values() {
    assert_eq!(Rank::Ace.value(), 11);
    assert_eq!(Rank::Seven.value(), 7);
    for rank in TENS {
        assert_eq!(rank.value(), 10);
        assert!(rank.is_ten_valued());
    }
    assert_eq!(Rank::Queen.to_string(), "Q");
    assert_eq!(Rank::Ten.to_string(), "10");
}

#[test]
fn aces_are_reevaluated_as_cards_are_added() {
    let mut soft = hand(&[Rank::Ace, Rank::Six]);
    assert_eq!(soft.value(), 17);
    assert!(soft.is_soft());

    soft.add_card(Rank::Ten);
    assert_eq!(soft.value(), 17);
    assert!(!soft.is_soft());
    assert_eq!(soft.hard_total(), 17);

    let mut aces = hand(&[Rank::Ace, Rank::Ace]);
    assert_eq!(aces.value(), 12);
    assert!(aces.is_soft());
    aces.add_card(Rank::Nine);
    assert_eq!(aces.value(), 21);
    assert!(aces.is_soft());
    aces.add_card(Rank::King);
    assert_eq!(aces.value(), 21);
    assert!(!aces.is_soft());
    assert!(!aces.is_bust());
    aces.add_card(Rank::Two);
    assert_eq!(aces.value(), 23);
    assert!(aces.is_bust());
}

#[test]
fn every_two_card_hand_is_in_range_and_naturals_are_flagged() {
    for first in RANKS {
        for second in RANKS {
            let hand = hand(&[first, second]);
            assert!((4..=21).contains(&hand.value()), "{first} {second}");
            assert!(!hand.is_bust());

            let natural = (first.is_ace() && second.is_ten_valued())
                || (first.is_ten_valued() && second.is_ace());
            assert_eq!(hand.is_blackjack(), natural, "{first} {second}");
        }
    }
}

#[test]
fn three_card_hands_follow_best_total_rule() {
    for a in RANKS {
        for b in RANKS {
            for c in RANKS {
                let hand = hand(&[a, b, c]);
                let hard = hand.hard_total();
                let value = hand.value();

                assert!(!hand.is_blackjack());
                if hand.is_soft() {
                    assert_eq!(value, hard + 10);
                    assert!(value <= 21);
                } else {
                    assert_eq!(value, hard);
                }
                assert_eq!(hand.is_bust(), value > 21);
            }
        }
    }
}

#[test]
fn three_card_twenty_one_is_not_a_natural() {
    let hand = hand(&[Rank::Seven, Rank::Seven, Rank::Seven]);
    assert_eq!(hand.value(), 21);
    assert!(!hand.is_blackjack());
}

#[test]
fn dealer_hand_visibility_and_values() {
    let mut dealer = dealer(&[Rank::Ace, Rank::Six]);

    assert!(!dealer.is_hole_revealed());
    assert_eq!(dealer.up_card(), Some(Rank::Ace));
    assert_eq!(dealer.visible_value(), 11);

    dealer.reveal_hole();
    assert!(dealer.is_hole_revealed());
    assert_eq!(dealer.visible_value(), 17);
    assert!(dealer.is_soft());
}

#[test]
fn dealer_draws_to_seventeen() {
    let table = Table::default();
    let mut rng = rng(0);
    let mut dealer = dealer(&[Rank::Six, Rank::Five]);
    let mut shoe = StackedShoe::new([Rank::Four, Rank::Two, Rank::Nine]);

    let drawn = table.dealer_play(&mut dealer, &mut shoe, &mut rng);

    assert_eq!(drawn, vec![Rank::Four, Rank::Two]);
    assert_eq!(dealer.value(), 17);
    assert!(dealer.is_hole_revealed());
    assert_eq!(shoe.remaining(), 1);
}

#[test]
fn dealer_stands_on_soft_seventeen() {
    let table = Table::default();
    let mut rng = rng(0);
    let mut dealer = dealer(&[Rank::Ace, Rank::Six]);
    let mut shoe = StackedShoe::new([Rank::Five]);

    assert!(table.dealer_play(&mut dealer, &mut shoe, &mut rng).is_empty());
    assert_eq!(dealer.value(), 17);
}

#[test]
fn dealer_hits_soft_seventeen_when_configured() {
    let table = Table::new(Rules::default().with_stand_on_soft_17(false));
    let mut rng = rng(0);
    let mut dealer = dealer(&[Rank::Ace, Rank::Six]);
    let mut shoe = StackedShoe::new([Rank::Five, Rank::Five]);

    let drawn = table.dealer_play(&mut dealer, &mut shoe, &mut rng);

    assert_eq!(drawn, vec![Rank::Five, Rank::Five]);
    assert_eq!(dealer.value(), 17);
    assert!(!dealer.is_soft());
}

#[test]
fn dealer_never_stops_below_seventeen() {
    let table = Table::default();
    let mut shoe = InfiniteShoe;

    for seed in 0..2_000 {
        let mut rng = rng(seed);
        let mut dealer = DealerHand::new();
        dealer.add_card(shoe.draw(&mut rng));
        dealer.add_card(shoe.draw(&mut rng));

        table.dealer_play(&mut dealer, &mut shoe, &mut rng);

        assert!(dealer.value() >= 17, "seed {seed}: {:?}", dealer.cards());
        assert!(!table.dealer_should_hit(&dealer));
    }
}

#[test]
fn threshold_policy_boundary() {
    let mut rng = rng(0);
    for threshold in [16, 17] {
        let policy = Policy::Threshold(threshold);
        for a in RANKS {
            for b in RANKS {
                for c in RANKS {
                    let hand = hand(&[a, b, c]);
                    if hand.is_bust() {
                        continue;
                    }
                    let expected = if hand.value() < threshold {
                        Decision::Hit
                    } else {
                        Decision::Stand
                    };
                    assert_eq!(policy.decide(&hand, Rank::Ten, &mut rng), expected);
                }
            }
        }
    }
}

#[test]
fn basic_strategy_hard_totals() {
    let mut rng = rng(0);
    let policy = Policy::BasicStrategy;
    let sixteen = hand(&[Rank::Ten, Rank::Six]);
    let twelve = hand(&[Rank::Ten, Rank::Two]);

    assert_eq!(policy.decide(&sixteen, Rank::Five, &mut rng), Decision::Stand);
    assert_eq!(policy.decide(&sixteen, Rank::Two, &mut rng), Decision::Stand);
    assert_eq!(policy.decide(&sixteen, Rank::Seven, &mut rng), Decision::Hit);
    assert_eq!(policy.decide(&sixteen, Rank::King, &mut rng), Decision::Hit);
    assert_eq!(policy.decide(&sixteen, Rank::Ace, &mut rng), Decision::Hit);

    assert_eq!(policy.decide(&twelve, Rank::Two, &mut rng), Decision::Hit);
    assert_eq!(policy.decide(&twelve, Rank::Three, &mut rng), Decision::Hit);
    assert_eq!(policy.decide(&twelve, Rank::Four, &mut rng), Decision::Stand);
    assert_eq!(policy.decide(&twelve, Rank::Six, &mut rng), Decision::Stand);

    for up_card in RANKS {
        let eleven = hand(&[Rank::Five, Rank::Six]);
        let seventeen = hand(&[Rank::Ten, Rank::Seven]);
        assert_eq!(policy.decide(&eleven, up_card, &mut rng), Decision::Hit);
        assert_eq!(policy.decide(&seventeen, up_card, &mut rng), Decision::Stand);
    }
}

#[test]
fn basic_strategy_soft_totals() {
    let mut rng = rng(0);
    let policy = Policy::BasicStrategy;
    let soft_17 = hand(&[Rank::Ace, Rank::Six]);
    let soft_18 = hand(&[Rank::Ace, Rank::Seven]);
    let soft_19 = hand(&[Rank::Ace, Rank::Eight]);

    assert_eq!(policy.decide(&soft_17, Rank::Six, &mut rng), Decision::Hit);
    assert_eq!(policy.decide(&soft_18, Rank::Eight, &mut rng), Decision::Stand);
    assert_eq!(policy.decide(&soft_18, Rank::Two, &mut rng), Decision::Stand);
    assert_eq!(policy.decide(&soft_18, Rank::Nine, &mut rng), Decision::Hit);
    assert_eq!(policy.decide(&soft_18, Rank::Queen, &mut rng), Decision::Hit);
    assert_eq!(policy.decide(&soft_18, Rank::Ace, &mut rng), Decision::Hit);
    for up_card in RANKS {
        assert_eq!(policy.decide(&soft_19, up_card, &mut rng), Decision::Stand);
    }
}

#[test]
fn random_policy_ignores_the_hand() {
    let mut rng = rng(11);
    let hand = hand(&[Rank::Ten, Rank::Ten]);
    let hits = (0..1_000)
        .filter(|_| Policy::Random.decide(&hand, Rank::Six, &mut rng) == Decision::Hit)
        .count();
    assert!((400..=600).contains(&hits), "hits {hits}");
}

#[test]
fn policy_names_and_parsing() {
    assert_eq!(Policy::Random.name(), "RandomPolicy");
    assert_eq!(
        Policy::Threshold(17).name(),
        "ThresholdPolicy(threshold=17)"
    );
    assert_eq!(
        Policy::BasicStrategy.name(),
        "BasicStrategyPolicy(no-split-no-double)"
    );

    for policy in Policy::STANDARD {
        assert_eq!(policy.name().parse::<Policy>(), Ok(policy));
    }
    assert_eq!("random".parse::<Policy>(), Ok(Policy::Random));
    assert_eq!(" Basic ".parse::<Policy>(), Ok(Policy::BasicStrategy));
    assert_eq!("threshold(16)".parse::<Policy>(), Ok(Policy::Threshold(16)));
    assert_eq!("threshold-17".parse::<Policy>(), Ok(Policy::Threshold(17)));
    assert_eq!(
        "martingale".parse::<Policy>(),
        Err(ConfigError::UnknownPolicy("martingale".to_string()))
    );
    assert!("threshold".parse::<Policy>().is_err());
    assert!("threshold-999".parse::<Policy>().is_err());
}

#[test]
fn player_stands_on_nineteen_and_dealer_draws_out() {
    let table = Table::default();
    let mut rng = rng(0);
    let mut shoe = StackedShoe::new([
        Rank::Ten,
        Rank::Nine,
        Rank::Six,
        Rank::Five,
        Rank::Four,
        Rank::Three,
    ]);

    let result = table.play_round(&Policy::Threshold(17), 1.0, &mut shoe, &mut rng);

    assert_eq!(result.player_value, 19);
    assert_eq!(result.dealer_value, 18);
    assert_eq!(result.outcome, Outcome::PlayerWin);
    assert_eq!(result.profit, 1.0);
    assert_eq!(shoe.remaining(), 0);
}

#[test]
fn two_naturals_push_for_every_policy() {
    let table = Table::default();
    for policy in Policy::STANDARD {
        let mut rng = rng(0);
        let mut shoe = StackedShoe::new([Rank::Ace, Rank::King, Rank::Ace, Rank::Queen]);

        let result = table.play_round(&policy, 2.0, &mut shoe, &mut rng);

        assert_eq!(result.outcome, Outcome::Push);
        assert_eq!(result.profit, 0.0);
        assert!(result.player_blackjack);
        assert!(result.dealer_blackjack);
    }
}

#[test]
fn player_natural_pays_three_to_two_without_dealer_play() {
    let table = Table::default();
    let mut rng = rng(0);
    let mut shoe = StackedShoe::new([Rank::Ace, Rank::Jack, Rank::Ten, Rank::Six, Rank::Five]);

    let result = table.play_round(&Policy::Random, 4.0, &mut shoe, &mut rng);

    assert_eq!(result.outcome, Outcome::PlayerBlackjack);
    assert_eq!(result.profit, 6.0);
    assert_eq!(result.dealer_value, 16);
    assert_eq!(shoe.remaining(), 1);
}

#[test]
fn blackjack_payout_ratio_is_configurable() {
    let table = Table::new(Rules::default().with_blackjack_pays(1.2));
    let mut rng = rng(0);
    let mut shoe = StackedShoe::new([Rank::Ace, Rank::Jack, Rank::Ten, Rank::Six]);

    let result = table.play_round(&Policy::BasicStrategy, 10.0, &mut shoe, &mut rng);

    assert_eq!(result.outcome, Outcome::PlayerBlackjack);
    assert_eq!(result.profit, 12.0);
}

#[test]
fn dealer_natural_beats_a_standing_hand() {
    let table = Table::default();
    let mut rng = rng(0);
    let mut shoe = StackedShoe::new([Rank::Ten, Rank::Queen, Rank::Ace, Rank::King]);

    let result = table.play_round(&Policy::BasicStrategy, 1.0, &mut shoe, &mut rng);

    assert_eq!(result.outcome, Outcome::DealerWin);
    assert_eq!(result.profit, -1.0);
    assert!(result.dealer_blackjack);
}

#[test]
fn player_bust_is_settled_before_dealer_natural() {
    let table = Table::default();
    let mut rng = rng(0);
    let mut shoe = StackedShoe::new([Rank::Ten, Rank::Six, Rank::Ace, Rank::King, Rank::Nine]);

    let result = table.play_round(&Policy::Threshold(17), 1.0, &mut shoe, &mut rng);

    assert_eq!(result.outcome, Outcome::PlayerBust);
    assert_eq!(result.profit, -1.0);
    assert_eq!(result.player_value, 25);
}

#[test]
fn dealer_peek_ends_the_round_before_the_player_acts() {
    let table = Table::new(Rules::default().with_dealer_peek(true));
    let mut rng = rng(0);
    let mut shoe = StackedShoe::new([Rank::Ten, Rank::Six, Rank::Ace, Rank::King, Rank::Nine]);

    let result = table.play_round(&Policy::Threshold(17), 1.0, &mut shoe, &mut rng);

    assert_eq!(result.outcome, Outcome::DealerWin);
    assert_eq!(result.player_value, 16);
    assert_eq!(shoe.remaining(), 1);
}

#[test]
fn player_bust_skips_dealer_play() {
    let table = Table::default();
    let mut rng = rng(0);
    let mut shoe = StackedShoe::new([
        Rank::Ten,
        Rank::Two,
        Rank::Two,
        Rank::Three,
        Rank::King,
        Rank::Four,
    ]);

    let result = table.play_round(&Policy::Threshold(21), 1.0, &mut shoe, &mut rng);

    assert_eq!(result.outcome, Outcome::PlayerBust);
    assert!(result.player_bust);
    assert!(!result.dealer_bust);
    assert_eq!(result.dealer_value, 5);
    assert_eq!(shoe.remaining(), 1);
}

#[test]
fn dealer_bust_pays_even_money() {
    let table = Table::default();
    let mut rng = rng(0);
    let mut shoe = StackedShoe::new([Rank::Ten, Rank::Eight, Rank::Ten, Rank::Six, Rank::Eight]);

    let result = table.play_round(&Policy::BasicStrategy, 3.0, &mut shoe, &mut rng);

    assert_eq!(result.outcome, Outcome::DealerBust);
    assert_eq!(result.profit, 3.0);
    assert!(result.dealer_bust);
    assert_eq!(result.dealer_value, 24);
}

#[test]
fn equal_totals_push_and_lower_total_loses() {
    let table = Table::default();

    let mut rng = rng(0);
    let mut shoe = StackedShoe::new([Rank::Ten, Rank::Eight, Rank::Jack, Rank::Eight]);
    let push = table.play_round(&Policy::BasicStrategy, 1.0, &mut shoe, &mut rng);
    assert_eq!(push.outcome, Outcome::Push);
    assert_eq!(push.profit, 0.0);

    let mut shoe = StackedShoe::new([Rank::Ten, Rank::Seven, Rank::Ten, Rank::Nine]);
    let loss = table.play_round(&Policy::BasicStrategy, 1.0, &mut shoe, &mut rng);
    assert_eq!(loss.outcome, Outcome::DealerWin);
    assert_eq!(loss.profit, -1.0);
}

#[test]
fn policy_is_not_consulted_at_twenty_one() {
    let table = Table::default();
    let mut rng = rng(0);
    // Threshold 22 would hit a 21 if it were asked.
    let mut shoe = StackedShoe::new([
        Rank::Five,
        Rank::Six,
        Rank::Ten,
        Rank::Seven,
        Rank::Ten,
        Rank::Two,
    ]);

    let result = table.play_round(&Policy::Threshold(22), 1.0, &mut shoe, &mut rng);

    assert_eq!(result.player_value, 21);
    assert!(!result.player_blackjack);
    assert_eq!(result.outcome, Outcome::PlayerWin);
    assert_eq!(result.profit, 1.0);
    assert_eq!(shoe.remaining(), 1);
}

#[test]
fn settle_precedence() {
    let table = Table::default();
    let natural = hand(&[Rank::Ace, Rank::King]);
    let three_card_21 = hand(&[Rank::Seven, Rank::Seven, Rank::Seven]);
    let dealer_natural = dealer(&[Rank::Queen, Rank::Ace]);
    let dealer_twenty = dealer(&[Rank::Queen, Rank::King]);

    assert_eq!(
        table.settle(&natural, &dealer_natural, 1.0).outcome,
        Outcome::Push
    );
    assert_eq!(
        table.settle(&natural, &dealer_twenty, 1.0).profit,
        1.5
    );
    assert_eq!(
        table.settle(&three_card_21, &dealer_natural, 1.0).outcome,
        Outcome::DealerWin
    );
    let win = table.settle(&three_card_21, &dealer_twenty, 1.0);
    assert_eq!(win.outcome, Outcome::PlayerWin);
    assert_eq!(win.profit, 1.0);
}
