use croupier_engine::baccarat::{
    banker_draws, calculate_result, calculate_result_with, evaluate_banker_action, evaluate_hands,
    evaluate_player_action, hand_value, BacAction, BacHand, BacState, BaccaratRules, BetHand,
    HandType, Side, TieTable,
};
use croupier_engine::cards::parse_cards;
use croupier_engine::engine::BaccaratTable;
use croupier_engine::logger::RoundLogger;

fn hand(side: Side, cards: &str) -> BacHand {
    let mut h = BacHand::new(side);
    for c in parse_cards(cards).unwrap() {
        h.deal_card(c);
    }
    h
}

#[test]
fn values_wrap_mod_ten() {
    assert_eq!(hand_value(&parse_cards("9s 8d").unwrap()), 7);
    assert_eq!(hand_value(&parse_cards("Ks Qd Jh").unwrap()), 0);
    assert_eq!(hand_value(&parse_cards("As Td").unwrap()), 1);
}

#[test]
fn banker_table_edges() {
    assert!(banker_draws(3, 7));
    assert!(!banker_draws(3, 8));
    assert!(!banker_draws(4, 1));
    assert!(banker_draws(5, 4));
    assert!(!banker_draws(6, 5));
    assert!(!banker_draws(7, 6));
}

#[test]
fn natural_freezes_both_hands() {
    let banker = hand(Side::Banker, "4s 4d");
    let mut player = hand(Side::Player, "2c 3d");
    evaluate_player_action(&banker, &mut player);
    assert_eq!(player.action(), BacAction::Stand);
    assert!(banker.is_natural());
}

#[test]
fn banker_stands_when_player_stood() {
    let mut banker = hand(Side::Banker, "2s 2d");
    let player = hand(Side::Player, "3c 4d");
    evaluate_banker_action(&mut banker, &player);
    assert_eq!(banker.action(), BacAction::Stand);
}

#[test]
fn tie_repays_every_wager_with_its_own_multiplier() {
    let mut banker = hand(Side::Banker, "4s 3d");
    let mut player = hand(Side::Player, "5c 2d");
    evaluate_hands(&mut banker, &mut player);
    assert_eq!(player.state(), BacState::Tie);

    let mut on_tie = BetHand::new(HandType::Tie, 10);
    calculate_result(&banker, &player, &mut on_tie);
    assert_eq!(on_tie.bet(), 100);
    assert_eq!(on_tie.state(), BacState::Won);

    let eight = BaccaratRules {
        tie_table: TieTable::EightToOne,
    };
    let mut on_tie = BetHand::new(HandType::Tie, 10);
    calculate_result_with(&eight, &banker, &player, &mut on_tie);
    assert_eq!(on_tie.bet(), 90);
}

#[test]
fn table_rounds_return_only_winning_amounts() {
    let mut table = BaccaratTable::seeded(8, 11, RoundLogger::default());
    for _ in 0..60 {
        let round = table.play_round(HandType::Banker, 100).unwrap();
        // a tie repays a banker bet at its own 19/20
        let expected = match round.banker.state() {
            BacState::Won | BacState::Tie => 195,
            _ => 0,
        };
        assert_eq!(round.record.returned, expected);
        assert!(round.player.cards().len() <= 3 && round.banker.cards().len() <= 3);
    }
}
