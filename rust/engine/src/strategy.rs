//! Decision makers used by the table drivers to play a hand unattended.
//!
//! Strategies only choose; the engines decide whether a choice is legal.
//! A choice the hand does not allow is treated by the drivers as the
//! cheapest legal alternative (stand in Blackjack, check or fold in UTH).

use crate::blackjack::{card_value, BjAction, BjHand};
use crate::cards::{Card, Rank};
use crate::poker::{evaluate, HandCategory};
use crate::uth::{Stage, UthAction};

pub trait BlackjackStrategy {
    fn action(&self, hand: &BjHand, dealer_up: Card) -> BjAction;

    fn take_insurance(&self, _hand: &BjHand) -> bool {
        false
    }

    fn name(&self) -> &str;
}

pub trait UthStrategy {
    /// `community` holds only the cards visible at `stage`.
    fn action(&self, stage: Stage, hole: &[Card], community: &[Card]) -> UthAction;

    fn name(&self) -> &str;
}

/// Simplified multi-deck basic strategy. Never takes insurance.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicStrategy;

impl BasicStrategy {
    pub fn new() -> Self {
        Self
    }

    fn preferred(hand: &BjHand, up: u32) -> BjAction {
        let cards = hand.cards();
        if cards.len() == 2 && card_value(cards[0].rank) == card_value(cards[1].rank) {
            match cards[0].rank {
                Rank::Ace | Rank::Eight => return BjAction::Split,
                Rank::Nine if !matches!(up, 7 | 10 | 11) => return BjAction::Split,
                Rank::Two | Rank::Three | Rank::Seven if up <= 7 => return BjAction::Split,
                Rank::Six if up <= 6 => return BjAction::Split,
                _ => {}
            }
        }

        let hard: u32 = cards
            .iter()
            .map(|c| if c.rank == Rank::Ace { 1 } else { card_value(c.rank) })
            .sum();
        let soft = cards.iter().any(|c| c.rank == Rank::Ace) && hard + 10 <= 21;

        if soft {
            let total = hard + 10;
            return match total {
                19.. => BjAction::Stand,
                17 | 18 if (3..=6).contains(&up) => BjAction::Double,
                18 if up <= 8 => BjAction::Stand,
                _ => BjAction::Hit,
            };
        }
        match hard {
            17.. => BjAction::Stand,
            13..=16 if up <= 6 => BjAction::Stand,
            12 if (4..=6).contains(&up) => BjAction::Stand,
            11 => BjAction::Double,
            10 if up <= 9 => BjAction::Double,
            9 if (3..=6).contains(&up) => BjAction::Double,
            _ => BjAction::Hit,
        }
    }
}

impl BlackjackStrategy for BasicStrategy {
    fn action(&self, hand: &BjHand, dealer_up: Card) -> BjAction {
        let choice = Self::preferred(hand, card_value(dealer_up.rank));
        if hand.can(choice) {
            choice
        } else if choice == BjAction::Double || choice == BjAction::Split {
            // fall back to the total-based play
            if hand.value() >= 17 {
                BjAction::Stand
            } else {
                BjAction::Hit
            }
        } else {
            BjAction::Stand
        }
    }

    fn name(&self) -> &str {
        "basic"
    }
}

/// Mirrors the usual UTH advice: raise big preflop with strong starts,
/// 2x on the flop with a made hand using a hole card, 1x on the river only
/// when the hole cards improve on the board.
#[derive(Debug, Clone, Copy, Default)]
pub struct UthBasicStrategy;

impl UthBasicStrategy {
    pub fn new() -> Self {
        Self
    }

    fn strong_start(hole: &[Card]) -> bool {
        let [a, b] = hole else {
            return false;
        };
        let (hi, lo) = if a.rank >= b.rank { (a, b) } else { (b, a) };
        let suited = hi.suit == lo.suit;
        if hi.rank == lo.rank {
            return hi.rank >= Rank::Three;
        }
        match hi.rank {
            Rank::Ace => true,
            Rank::King => suited || lo.rank >= Rank::Five,
            Rank::Queen => lo.rank >= Rank::Eight || (suited && lo.rank >= Rank::Six),
            Rank::Jack => lo.rank >= Rank::Ten || (suited && lo.rank >= Rank::Eight),
            _ => false,
        }
    }

    fn hole_card_plays(hole: &[Card], board: &[Card]) -> bool {
        if let [a, b] = hole {
            if a.rank == b.rank {
                return true;
            }
        }
        hole.iter().any(|h| board.iter().any(|c| c.rank == h.rank))
    }
}

impl UthStrategy for UthBasicStrategy {
    fn action(&self, stage: Stage, hole: &[Card], community: &[Card]) -> UthAction {
        match stage {
            Stage::Start if Self::strong_start(hole) => UthAction::X4,
            Stage::Start => UthAction::Check,
            Stage::Flop => {
                let mut all = hole.to_vec();
                all.extend_from_slice(community);
                let category = evaluate(&all).map(|e| e.category);
                if category.is_some_and(|c| c >= HandCategory::TwoPair)
                    || Self::hole_card_plays(hole, community)
                {
                    UthAction::X2
                } else {
                    UthAction::Check
                }
            }
            Stage::River => {
                let mut all = hole.to_vec();
                all.extend_from_slice(community);
                let mine = evaluate(&all).map(|e| e.category);
                let board = evaluate(community).map(|e| e.category);
                if mine > board {
                    UthAction::X1
                } else {
                    UthAction::Fold
                }
            }
            Stage::Turn | Stage::Final => UthAction::Check,
        }
    }

    fn name(&self) -> &str {
        "basic"
    }
}
