//! Best-five poker evaluation and head-to-head comparison.
//!
//! Evaluation looks at every 5-card subset of the 5-7 cards given, so the
//! chosen five are always a real hand that could be shown down. Aces play
//! high, and also low in the wheel (A-2-3-4-5, a five-high straight).

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};

/// Hand categories in ascending strength.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum HandCategory {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    Trips = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    Quads = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl HandCategory {
    pub fn name(self) -> &'static str {
        match self {
            HandCategory::HighCard => "High Card",
            HandCategory::Pair => "Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::Trips => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::Quads => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Comparison {
    Win,
    Lose,
    Tie,
}

impl From<Ordering> for Comparison {
    fn from(ord: Ordering) -> Self {
        match ord {
            Ordering::Greater => Comparison::Win,
            Ordering::Less => Comparison::Lose,
            Ordering::Equal => Comparison::Tie,
        }
    }
}

/// The best five cards of a hand together with its category and kicker.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct EvaluatedHand {
    /// Ordered for comparison: grouped cards first (bigger groups, then
    /// higher rank), loose cards after in descending rank. A wheel is
    /// ordered 5-4-3-2-A.
    pub best_five: [Card; 5],
    /// Highest card outside the category-defining group; the lead card for
    /// straights, flushes and full houses.
    pub kicker: Card,
    pub category: HandCategory,
}

impl EvaluatedHand {
    /// Comparison ranks of `best_five`, with the ace counted as 1 in a wheel.
    pub fn ranks(&self) -> [u8; 5] {
        let wheel = is_wheel(&self.best_five);
        let mut out = [0u8; 5];
        for (slot, card) in out.iter_mut().zip(self.best_five.iter()) {
            *slot = if wheel && card.rank == Rank::Ace {
                1
            } else {
                card.rank as u8
            };
        }
        out
    }
}

/// Evaluates 5 to 7 cards. Returns `None` for any other card count.
///
/// ```
/// use croupier_engine::cards::parse_cards;
/// use croupier_engine::poker::{evaluate, HandCategory};
///
/// let cards = parse_cards("As Ks Qs Js Ts 2c 3d").unwrap();
/// let hand = evaluate(&cards).unwrap();
/// assert_eq!(hand.category, HandCategory::RoyalFlush);
/// ```
pub fn evaluate(cards: &[Card]) -> Option<EvaluatedHand> {
    let n = cards.len();
    if !(5..=7).contains(&n) {
        return None;
    }
    let mut best: Option<EvaluatedHand> = None;
    for mask in 0u32..(1 << n) {
        if mask.count_ones() != 5 {
            continue;
        }
        let mut five = [cards[0]; 5];
        let mut k = 0;
        for (i, &c) in cards.iter().enumerate() {
            if mask & (1 << i) != 0 {
                five[k] = c;
                k += 1;
            }
        }
        let candidate = evaluate_five(five);
        best = match best {
            Some(b) if compare_hands(&candidate, &b) != Comparison::Win => Some(b),
            _ => Some(candidate),
        };
    }
    best
}

/// Category first, then the five cards position by position, then the kicker.
pub fn compare_hands(a: &EvaluatedHand, b: &EvaluatedHand) -> Comparison {
    let ord = a
        .category
        .cmp(&b.category)
        .then_with(|| a.ranks().cmp(&b.ranks()))
        .then_with(|| kicker_value(a).cmp(&kicker_value(b)));
    Comparison::from(ord)
}

fn kicker_value(hand: &EvaluatedHand) -> u8 {
    if hand.kicker.rank == Rank::Ace && is_wheel(&hand.best_five) {
        1
    } else {
        hand.kicker.rank as u8
    }
}

fn evaluate_five(mut cards: [Card; 5]) -> EvaluatedHand {
    cards.sort_unstable_by(|a, b| b.rank.cmp(&a.rank).then(b.suit.cmp(&a.suit)));

    let mut counts = [0u8; 15];
    for c in &cards {
        counts[c.rank as usize] += 1;
    }
    // group order: larger groups first, ties broken by rank
    cards.sort_by(|a, b| {
        counts[b.rank as usize]
            .cmp(&counts[a.rank as usize])
            .then(b.rank.cmp(&a.rank))
    });

    let flush = cards.iter().all(|c| c.suit == cards[0].suit);
    let distinct = counts.iter().filter(|&&n| n > 0).count() == 5;
    let wheel = distinct && is_wheel_ranks(&cards);
    let straight = distinct && (wheel || cards[0].rank as u8 - cards[4].rank as u8 == 4);
    if wheel {
        cards.rotate_left(1);
    }

    let mut shape: Vec<u8> = counts.iter().copied().filter(|&n| n > 0).collect();
    shape.sort_unstable_by(|a, b| b.cmp(a));

    let category = match (straight, flush, shape.as_slice()) {
        (true, true, _) if cards[0].rank == Rank::Ace => HandCategory::RoyalFlush,
        (true, true, _) => HandCategory::StraightFlush,
        (_, _, [4, ..]) => HandCategory::Quads,
        (_, _, [3, 2]) => HandCategory::FullHouse,
        (_, true, _) => HandCategory::Flush,
        (true, _, _) => HandCategory::Straight,
        (_, _, [3, ..]) => HandCategory::Trips,
        (_, _, [2, 2, ..]) => HandCategory::TwoPair,
        (_, _, [2, ..]) => HandCategory::Pair,
        _ => HandCategory::HighCard,
    };

    let kicker = match category {
        HandCategory::HighCard
        | HandCategory::Pair
        | HandCategory::TwoPair
        | HandCategory::Trips
        | HandCategory::Quads => cards
            .iter()
            .copied()
            .find(|c| counts[c.rank as usize] == 1)
            .unwrap_or(cards[0]),
        _ => cards[0],
    };

    EvaluatedHand {
        best_five: cards,
        kicker,
        category,
    }
}

const WHEEL_DESC: [Rank; 5] = [Rank::Ace, Rank::Five, Rank::Four, Rank::Three, Rank::Two];
const WHEEL_ORDERED: [Rank; 5] = [Rank::Five, Rank::Four, Rank::Three, Rank::Two, Rank::Ace];

// expects cards sorted by descending rank
fn is_wheel_ranks(cards: &[Card; 5]) -> bool {
    cards.iter().map(|c| c.rank).eq(WHEEL_DESC)
}

fn is_wheel(best_five: &[Card; 5]) -> bool {
    best_five.iter().map(|c| c.rank).eq(WHEEL_ORDERED)
}
