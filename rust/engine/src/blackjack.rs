//! Blackjack hand arithmetic, legal actions and settlement.
//!
//! Player and dealer share one [`BjHand`] type; the [`Role`] decides which
//! drawing rule and value rule apply. Rule methods never fail: a call that
//! makes no sense in the current state does nothing and reports `false` or
//! an empty action list.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};
use crate::payout::Payout;

pub const BLACKJACK: u32 = 21;
/// Dealer stands on this total or more.
pub const DEALER_STANDS_ON: u32 = 17;

pub const BLACKJACK_PAYOUT: Payout = Payout::ratio(3, 2);
pub const INSURANCE_PAYOUT: Payout = Payout::times(2);

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Role {
    Player,
    Dealer,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum BjState {
    Undefined,
    Won,
    Lost,
    Push,
    /// Lost to a dealer blackjack while holding an insurance bet.
    Insured,
    /// Natural 21 on the deal, not yet settled.
    Blackjack,
}

impl BjState {
    pub fn is_settled(self) -> bool {
        matches!(
            self,
            BjState::Won | BjState::Lost | BjState::Push | BjState::Insured
        )
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum BjAction {
    Hit,
    Stand,
    Double,
    Split,
}

/// Blackjack value of a single rank: aces count 11 here, the hand total
/// demotes them to 1 as needed.
pub fn card_value(rank: Rank) -> u32 {
    match rank {
        Rank::Ace => 11,
        Rank::King | Rank::Queen | Rank::Jack | Rank::Ten => 10,
        r => r as u32,
    }
}

/// Hand total with ace resolution. A dealer soft 17 is reported as 7 so the
/// dealer keeps drawing.
pub fn hand_value(cards: &[Card], role: Role) -> u32 {
    let mut total = 0u32;
    let mut soft_aces = 0u32;
    for c in cards {
        let v = card_value(c.rank);
        if v == 11 {
            soft_aces += 1;
        }
        total += v;
    }
    while total > BLACKJACK && soft_aces > 0 {
        total -= 10;
        soft_aces -= 1;
    }
    if role == Role::Dealer && total == DEALER_STANDS_ON && soft_aces > 0 {
        total -= 10;
    }
    total
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BjHand {
    role: Role,
    cards: Vec<Card>,
    state: BjState,
    bet: u64,
    insurance_bet: u64,
    is_split: bool,
    is_split_aces: bool,
    is_doubled: bool,
}

impl BjHand {
    pub fn player(bet: u64) -> Self {
        Self {
            role: Role::Player,
            cards: Vec::with_capacity(4),
            state: BjState::Undefined,
            bet,
            insurance_bet: 0,
            is_split: false,
            is_split_aces: false,
            is_doubled: false,
        }
    }

    pub fn dealer() -> Self {
        Self {
            role: Role::Dealer,
            ..Self::player(0)
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
    pub fn state(&self) -> BjState {
        self.state
    }
    pub fn bet(&self) -> u64 {
        self.bet
    }
    pub fn insurance_bet(&self) -> u64 {
        self.insurance_bet
    }
    pub fn is_split(&self) -> bool {
        self.is_split
    }
    pub fn is_split_aces(&self) -> bool {
        self.is_split_aces
    }
    pub fn is_doubled(&self) -> bool {
        self.is_doubled
    }

    pub fn value(&self) -> u32 {
        hand_value(&self.cards, self.role)
    }

    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Two-card 21 that did not come from a split.
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.value() == BLACKJACK && !self.is_split
    }

    pub fn can_deal_card(&self) -> bool {
        match self.role {
            Role::Dealer => self.value() < DEALER_STANDS_ON,
            Role::Player => {
                // split aces and doubled hands get exactly one more card
                let capped = (self.is_split_aces && self.cards.len() >= 2)
                    || (self.is_doubled && self.cards.len() >= 3);
                self.value() < BLACKJACK && !capped
            }
        }
    }

    /// Adds `card` when the drawing rule allows it and reports whether it
    /// was taken.
    pub fn deal_card(&mut self, card: Card) -> bool {
        if !self.can_deal_card() {
            return false;
        }
        self.cards.push(card);
        if self.role == Role::Player && self.is_blackjack() {
            self.state = BjState::Blackjack;
        }
        true
    }

    pub fn available_actions(&self) -> Vec<BjAction> {
        if self.role == Role::Dealer || self.state.is_settled() || !self.can_deal_card() {
            return Vec::new();
        }
        let mut actions = vec![BjAction::Hit, BjAction::Stand];
        if self.cards.len() == 2 && !self.is_doubled {
            actions.push(BjAction::Double);
            if card_value(self.cards[0].rank) == card_value(self.cards[1].rank) {
                actions.push(BjAction::Split);
            }
        }
        actions
    }

    pub fn can(&self, action: BjAction) -> bool {
        self.available_actions().contains(&action)
    }

    /// Insurance is offered when the dealer's face-up card is an ace.
    pub fn is_insurance_offered(&self) -> bool {
        self.role == Role::Dealer
            && self
                .cards
                .first()
                .is_some_and(|c| card_value(c.rank) == 11)
    }

    /// Doubles the bet; the hand then accepts one more card.
    pub fn double_down(&mut self) -> bool {
        if !self.can(BjAction::Double) {
            return false;
        }
        self.bet = self.bet.saturating_mul(2);
        self.is_doubled = true;
        true
    }

    /// Moves the second card into a new hand carrying an equal bet.
    pub fn split(&mut self) -> Option<BjHand> {
        if !self.can(BjAction::Split) {
            return None;
        }
        let second = self.cards.pop()?;
        let aces = second.rank == Rank::Ace;
        self.is_split = true;
        self.is_split_aces = aces;
        let mut other = BjHand::player(self.bet);
        other.cards.push(second);
        other.is_split = true;
        other.is_split_aces = aces;
        Some(other)
    }

    /// Places an insurance bet of half the main bet.
    pub fn take_insurance(&mut self, dealer: &BjHand) -> bool {
        if self.role != Role::Player
            || !dealer.is_insurance_offered()
            || self.insurance_bet > 0
            || self.cards.len() != 2
        {
            return false;
        }
        self.insurance_bet = self.bet / 2;
        self.insurance_bet > 0
    }
}

/// Settles a player hand against the finished dealer hand, rewriting the
/// bet fields to the amounts returned to the player.
pub fn settle(player: &mut BjHand, dealer: &BjHand) {
    if player.role != Role::Player || dealer.role != Role::Dealer || player.state.is_settled() {
        return;
    }
    let dealer_bj = dealer.is_blackjack();
    let insured = player.insurance_bet > 0;
    player.insurance_bet = if dealer_bj {
        INSURANCE_PAYOUT.with_stake(player.insurance_bet)
    } else {
        0
    };

    let bet = player.bet;
    let (state, returned) = if player.is_bust() {
        (BjState::Lost, 0)
    } else if player.is_blackjack() && dealer_bj {
        (BjState::Push, bet)
    } else if player.is_blackjack() {
        (BjState::Won, BLACKJACK_PAYOUT.with_stake(bet))
    } else if dealer_bj {
        let state = if insured { BjState::Insured } else { BjState::Lost };
        (state, 0)
    } else if dealer.is_bust() || player.value() > dealer.value() {
        (BjState::Won, Payout::EVEN.with_stake(bet))
    } else if player.value() == dealer.value() {
        (BjState::Push, bet)
    } else {
        (BjState::Lost, 0)
    };
    player.state = state;
    player.bet = returned;
}
