use croupier_engine::cards::{parse_cards, Card};
use croupier_engine::engine::UthTable;
use croupier_engine::logger::RoundLogger;
use croupier_engine::poker::HandCategory;
use croupier_engine::shoe::Shoe;
use croupier_engine::strategy::{UthBasicStrategy, UthStrategy};
use croupier_engine::uth::{
    apply_action, determine_game_result, evaluate_hand, evaluate_trips, process_results, Stage,
    TripsState, UthAction, UthHand, UthPlayerHand, UthState,
};

fn settle(hole: &str, dealer_hole: &str, board: &str, action: (Stage, UthAction)) -> UthPlayerHand {
    let mut player = UthPlayerHand::new(10, 10);
    for c in parse_cards(hole).unwrap() {
        player.deal_card(c);
    }
    let mut dealer = UthHand::new();
    for c in parse_cards(dealer_hole).unwrap() {
        dealer.deal_card(c);
    }
    apply_action(action.0, action.1, &mut player);
    let board = parse_cards(board).unwrap();
    evaluate_hand(&board, player.hand_mut());
    evaluate_hand(&board, &mut dealer);
    evaluate_trips(&mut player);
    determine_game_result(&mut player, &mut dealer);
    process_results(&mut player, &dealer);
    player
}

#[test]
fn qualified_dealer_straight_win() {
    let p = settle("Qc Kd", "3h 7c", "9c Td Jh 2s 2d", (Stage::Start, UthAction::X4));
    assert_eq!(p.state(), UthState::Won);
    assert_eq!(p.ante(), 20);
    assert_eq!(p.blind(), 20);
    assert_eq!(p.play(), 80);
    assert_eq!(p.trips_state(), TripsState::Straight);
    assert_eq!(p.trips(), 50);
}

#[test]
fn unqualified_dealer_loss_keeps_ante() {
    let p = settle("3s 4h", "Ah 7d", "2c 5d 9h Jc Ks", (Stage::River, UthAction::X1));
    assert_eq!(p.state(), UthState::Lost);
    assert_eq!((p.ante(), p.blind(), p.play()), (10, 0, 0));
    assert_eq!(p.trips_state(), TripsState::Lost);
    assert_eq!(p.trips(), 0);
}

#[test]
fn flush_win_pays_blind_three_to_two() {
    let p = settle("Ah 3h", "Kc Kd", "9h 6h 2h Jc 4s", (Stage::Flop, UthAction::X2));
    assert_eq!(p.hand().category(), Some(HandCategory::Flush));
    assert_eq!(p.blind(), 25);
    assert_eq!(p.play(), 40);
    assert_eq!(p.trips(), 80);
}

#[test]
fn royal_flush_hits_both_bonus_tables() {
    let p = settle("As Ks", "2c 2d", "Qs Js Ts 3h 4d", (Stage::Start, UthAction::X4));
    assert_eq!(p.hand().category(), Some(HandCategory::RoyalFlush));
    assert_eq!(p.blind(), 10 + 5_000);
    assert_eq!(p.trips(), 10 + 500);
}

struct Folder;
impl UthStrategy for Folder {
    fn action(&self, stage: Stage, _: &[Card], _: &[Card]) -> UthAction {
        match stage {
            Stage::River => UthAction::Fold,
            _ => UthAction::Check,
        }
    }
    fn name(&self) -> &str {
        "folder"
    }
}

#[test]
fn folding_on_the_river_forfeits_everything() {
    let shoe = Shoe::new_with_seed(1, 8);
    let mut table = UthTable::new(shoe, RoundLogger::default());
    let round = table.play_round(10, 5, &Folder).unwrap();
    assert_eq!(round.player.state(), UthState::Fold);
    assert_eq!(round.record.wagered, 25);
    assert_eq!(round.record.returned, 0);
    assert_eq!(round.community.len(), 5);
    assert!(round.player.hand().evaluated().is_none());
}

#[test]
fn seeded_rounds_never_pay_more_than_the_tables_allow() {
    let mut table = UthTable::seeded(5, RoundLogger::default());
    for _ in 0..5 {
        let round = table.play_round(10, 5, &UthBasicStrategy::new()).unwrap();
        let p = &round.player;
        assert!(p.ante() <= 20);
        assert!(p.play() <= 80);
        assert!(p.blind() <= 10 + 500 * 10);
        if p.state() == UthState::Lost {
            assert_eq!((p.blind(), p.play()), (0, 0));
        }
    }
}

#[test]
fn seeded_rounds_deal_nine_distinct_cards() {
    for seed in 0..200u64 {
        let mut table = UthTable::seeded(seed, RoundLogger::default());
        let round = table.play_round(10, 0, &UthBasicStrategy::new()).unwrap();
        let mut seen: Vec<Card> = round
            .record
            .hands
            .iter()
            .flat_map(|h| h.cards.iter().copied())
            .collect();
        assert_eq!(seen.len(), 9, "seed {}", seed);
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 9, "seed {} dealt a card twice", seed);
    }
}
