//! Baccarat drawing rules, winner determination and bet settlement.
//!
//! A round calls, in order: [`evaluate_player_action`],
//! [`evaluate_banker_action`], [`evaluate_hands`], then
//! [`calculate_result`] once per bet.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};
use crate::payout::Payout;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Side {
    Player,
    Banker,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum BacState {
    Undefined,
    Won,
    Lost,
    Tie,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum BacAction {
    Undefined,
    Draw,
    Stand,
}

/// What a bet is placed on. Carries the settlement table, Tie paying 9.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum HandType {
    Player,
    Banker,
    Tie,
}

impl HandType {
    pub fn payout(self) -> Payout {
        match self {
            HandType::Player => Payout::EVEN,
            HandType::Banker => Payout::ratio(19, 20),
            HandType::Tie => Payout::times(9),
        }
    }
}

/// Hand-side table, Tie paying 8. Differs from [`HandType`] on Tie only.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum BacHandType {
    Player,
    Banker,
    Tie,
}

impl BacHandType {
    pub fn payout(self) -> Payout {
        match self {
            BacHandType::Player => Payout::EVEN,
            BacHandType::Banker => Payout::ratio(19, 20),
            BacHandType::Tie => Payout::times(8),
        }
    }
}

impl From<HandType> for BacHandType {
    fn from(t: HandType) -> Self {
        match t {
            HandType::Player => BacHandType::Player,
            HandType::Banker => BacHandType::Banker,
            HandType::Tie => BacHandType::Tie,
        }
    }
}

/// Which of the two tables settles bets. The tables disagree on the tie
/// multiplier and the house has not said which one is right.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieTable {
    /// [`HandType`], Tie 9.
    #[default]
    NineToOne,
    /// [`BacHandType`], Tie 8.
    EightToOne,
}

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct BaccaratRules {
    pub tie_table: TieTable,
}

impl BaccaratRules {
    pub fn multiplier(&self, wager: HandType) -> Payout {
        match self.tie_table {
            TieTable::NineToOne => wager.payout(),
            TieTable::EightToOne => BacHandType::from(wager).payout(),
        }
    }
}

/// Baccarat value of a single rank.
pub fn card_value(rank: Rank) -> u8 {
    match rank {
        Rank::Ace => 1,
        Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 0,
        r => r as u8,
    }
}

/// Sum of card values mod 10, always in `0..=9`.
pub fn hand_value(cards: &[Card]) -> u8 {
    (cards.iter().map(|c| card_value(c.rank) as u32).sum::<u32>() % 10) as u8
}

/// Third-card rule for the banker, keyed by the banker's two-card total and
/// the value of the player's third card.
pub fn banker_draws(banker_value: u8, player_third: u8) -> bool {
    match banker_value {
        0..=2 => true,
        3 => player_third != 8,
        4 => (2..=7).contains(&player_third),
        5 => (4..=7).contains(&player_third),
        6 => (6..=7).contains(&player_third),
        _ => false,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BacHand {
    side: Side,
    cards: Vec<Card>,
    state: BacState,
    action: BacAction,
}

impl BacHand {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            cards: Vec::with_capacity(3),
            state: BacState::Undefined,
            action: BacAction::Undefined,
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
    pub fn state(&self) -> BacState {
        self.state
    }
    pub fn action(&self) -> BacAction {
        self.action
    }

    pub fn value(&self) -> u8 {
        hand_value(&self.cards)
    }

    /// Two-card 8 or 9.
    pub fn is_natural(&self) -> bool {
        self.cards.len() == 2 && self.value() >= 8
    }

    pub fn is_pair(&self) -> bool {
        self.cards.len() >= 2 && self.cards[0].rank == self.cards[1].rank
    }

    pub fn third_card(&self) -> Option<Card> {
        self.cards.get(2).copied()
    }

    /// Hands hold at most three cards.
    pub fn deal_card(&mut self, card: Card) -> bool {
        if self.cards.len() >= 3 {
            return false;
        }
        self.cards.push(card);
        true
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BetHand {
    bet: u64,
    wager: HandType,
    state: BacState,
}

impl BetHand {
    pub fn new(wager: HandType, bet: u64) -> Self {
        Self {
            bet,
            wager,
            state: BacState::Undefined,
        }
    }

    pub fn bet(&self) -> u64 {
        self.bet
    }
    pub fn wager(&self) -> HandType {
        self.wager
    }
    pub fn state(&self) -> BacState {
        self.state
    }
}

fn has_natural_value(hand: &BacHand) -> bool {
    matches!(hand.value(), 8 | 9)
}

/// Player draws on 0-5 unless the banker holds 8 or 9.
pub fn evaluate_player_action(banker: &BacHand, player: &mut BacHand) {
    player.action = if !has_natural_value(banker) && player.value() <= 5 {
        BacAction::Draw
    } else {
        BacAction::Stand
    };
}

/// Banker's third-card decision. Only a player who drew a third card opens
/// the table; otherwise the banker stands.
pub fn evaluate_banker_action(banker: &mut BacHand, player: &BacHand) {
    banker.action = match player.third_card() {
        Some(third) if !has_natural_value(banker) => {
            if banker_draws(banker.value(), card_value(third.rank)) {
                BacAction::Draw
            } else {
                BacAction::Stand
            }
        }
        _ => BacAction::Stand,
    };
}

/// Higher total wins; equal totals tie both sides.
pub fn evaluate_hands(banker: &mut BacHand, player: &mut BacHand) {
    let (b, p) = (banker.value(), player.value());
    let (bs, ps) = match b.cmp(&p) {
        std::cmp::Ordering::Greater => (BacState::Won, BacState::Lost),
        std::cmp::Ordering::Less => (BacState::Lost, BacState::Won),
        std::cmp::Ordering::Equal => (BacState::Tie, BacState::Tie),
    };
    banker.state = bs;
    player.state = ps;
}

/// Settles `bet` with the default [`BaccaratRules`].
pub fn calculate_result(banker: &BacHand, player: &BacHand, bet: &mut BetHand) {
    calculate_result_with(&BaccaratRules::default(), banker, player, bet);
}

/// Rewrites `bet` to the amount returned. A tie repays every bet with its
/// own wager type's multiplier added.
pub fn calculate_result_with(
    rules: &BaccaratRules,
    banker: &BacHand,
    player: &BacHand,
    bet: &mut BetHand,
) {
    if bet.state != BacState::Undefined {
        return;
    }
    let winner = match (player.state, banker.state) {
        (BacState::Won, _) => HandType::Player,
        (_, BacState::Won) => HandType::Banker,
        (BacState::Tie, _) => HandType::Tie,
        _ => return,
    };
    let stake = bet.bet;
    let (state, returned) = match winner {
        HandType::Tie => {
            let state = if bet.wager == HandType::Tie {
                BacState::Won
            } else {
                BacState::Tie
            };
            (state, rules.multiplier(bet.wager).with_stake(stake))
        }
        w if w == bet.wager => (BacState::Won, rules.multiplier(w).with_stake(stake)),
        _ => (BacState::Lost, 0),
    };
    bet.state = state;
    bet.bet = returned;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{all_ranks, parse_cards, Suit};

    fn hand(side: Side, cards: &str) -> BacHand {
        let mut h = BacHand::new(side);
        for c in parse_cards(cards).unwrap() {
            h.deal_card(c);
        }
        h
    }

    fn settled(banker: &str, player: &str) -> (BacHand, BacHand) {
        let mut b = hand(Side::Banker, banker);
        let mut p = hand(Side::Player, player);
        evaluate_hands(&mut b, &mut p);
        (b, p)
    }

    #[test]
    fn value_is_always_a_single_digit() {
        for &a in &all_ranks() {
            for &b in &all_ranks() {
                for &c in &all_ranks() {
                    let cards = [
                        Card::new(a, Suit::Spades),
                        Card::new(b, Suit::Hearts),
                        Card::new(c, Suit::Clubs),
                    ];
                    assert!(hand_value(&cards) <= 9);
                    assert!(hand_value(&cards[..2]) <= 9);
                }
            }
        }
        assert_eq!(hand_value(&parse_cards("9s 8d").unwrap()), 7);
        assert_eq!(hand_value(&parse_cards("Ks Ad").unwrap()), 1);
    }

    #[test]
    fn banker_draw_table_bands() {
        for third in 0..=9u8 {
            for banker in 0..=9u8 {
                let expected = match banker {
                    0..=2 => true,
                    3 => third != 8,
                    4 => (2..=7).contains(&third),
                    5 => (4..=7).contains(&third),
                    6 => third == 6 || third == 7,
                    _ => false,
                };
                assert_eq!(banker_draws(banker, third), expected, "b={banker} t={third}");
            }
        }
    }

    #[test]
    fn player_draws_on_five_or_less_unless_banker_natural() {
        let mut p = hand(Side::Player, "2s 3d");
        evaluate_player_action(&hand(Side::Banker, "Ks 4d"), &mut p);
        assert_eq!(p.action(), BacAction::Draw);
        evaluate_player_action(&hand(Side::Banker, "Ks 9d"), &mut p);
        assert_eq!(p.action(), BacAction::Stand);

        let mut six = hand(Side::Player, "2s 4d");
        evaluate_player_action(&hand(Side::Banker, "Ks 4d"), &mut six);
        assert_eq!(six.action(), BacAction::Stand);
    }

    #[test]
    fn banker_stands_when_player_stood() {
        let mut b = hand(Side::Banker, "2s Kd");
        evaluate_banker_action(&mut b, &hand(Side::Player, "3s 4d"));
        assert_eq!(b.action(), BacAction::Stand);
    }

    #[test]
    fn banker_uses_player_third_card() {
        let mut b = hand(Side::Banker, "2s 2d");
        evaluate_banker_action(&mut b, &hand(Side::Player, "As 2d 7c"));
        assert_eq!(b.action(), BacAction::Draw);
        evaluate_banker_action(&mut b, &hand(Side::Player, "As 2d Ac"));
        assert_eq!(b.action(), BacAction::Stand);
    }

    #[test]
    fn player_win_pays_player_bets_only() {
        let (b, p) = settled("2s 3d", "4s 4d");
        let mut on_player = BetHand::new(HandType::Player, 100);
        let mut on_banker = BetHand::new(HandType::Banker, 100);
        let mut on_tie = BetHand::new(HandType::Tie, 100);
        calculate_result(&b, &p, &mut on_player);
        calculate_result(&b, &p, &mut on_banker);
        calculate_result(&b, &p, &mut on_tie);
        assert_eq!((on_player.bet(), on_player.state()), (200, BacState::Won));
        assert_eq!((on_banker.bet(), on_banker.state()), (0, BacState::Lost));
        assert_eq!((on_tie.bet(), on_tie.state()), (0, BacState::Lost));
    }

    #[test]
    fn banker_win_pays_commission() {
        let (b, p) = settled("4s 4d", "2s 3d");
        let mut on_banker = BetHand::new(HandType::Banker, 100);
        calculate_result(&b, &p, &mut on_banker);
        assert_eq!(on_banker.bet(), 195);
    }

    #[test]
    fn tie_adds_each_wagers_own_multiplier() {
        let (b, p) = settled("4s 3d", "5s 2d");
        assert_eq!((b.state(), p.state()), (BacState::Tie, BacState::Tie));
        let mut on_player = BetHand::new(HandType::Player, 100);
        let mut on_banker = BetHand::new(HandType::Banker, 100);
        let mut on_tie = BetHand::new(HandType::Tie, 100);
        calculate_result(&b, &p, &mut on_player);
        calculate_result(&b, &p, &mut on_banker);
        calculate_result(&b, &p, &mut on_tie);
        assert_eq!(on_player.bet(), 200);
        assert_eq!(on_banker.bet(), 195);
        assert_eq!((on_tie.bet(), on_tie.state()), (1000, BacState::Won));
    }

    #[test]
    fn eight_to_one_table_changes_only_the_tie() {
        let rules = BaccaratRules {
            tie_table: TieTable::EightToOne,
        };
        let (b, p) = settled("4s 3d", "5s 2d");
        let mut on_tie = BetHand::new(HandType::Tie, 100);
        calculate_result_with(&rules, &b, &p, &mut on_tie);
        assert_eq!(on_tie.bet(), 900);
        assert_eq!(rules.multiplier(HandType::Banker), HandType::Banker.payout());
    }

    #[test]
    fn unevaluated_hands_leave_bet_untouched() {
        let b = hand(Side::Banker, "4s 3d");
        let p = hand(Side::Player, "5s 2d");
        let mut bet = BetHand::new(HandType::Player, 100);
        calculate_result(&b, &p, &mut bet);
        assert_eq!((bet.bet(), bet.state()), (100, BacState::Undefined));
    }
}
