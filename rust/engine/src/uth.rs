//! Ultimate Texas Hold'em: betting stages, hand evaluation and settlement.
//!
//! The player posts equal Ante and Blind bets plus an optional Trips side
//! bet, then makes a single Play bet (4x/3x preflop, 2x on the flop, 1x on
//! the river) or folds.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::payout::Payout;
use crate::poker::{compare_hands, evaluate, Comparison, EvaluatedHand, HandCategory};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Stage {
    Start,
    Flop,
    Turn,
    River,
    Final,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum UthAction {
    X4,
    X3,
    X2,
    X1,
    Check,
    Fold,
}

impl UthAction {
    /// Play bet as a multiple of the ante, for the betting actions.
    pub fn play_multiple(self) -> Option<u64> {
        match self {
            UthAction::X4 => Some(4),
            UthAction::X3 => Some(3),
            UthAction::X2 => Some(2),
            UthAction::X1 => Some(1),
            UthAction::Check | UthAction::Fold => None,
        }
    }
}

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum UthState {
    #[default]
    Undefined,
    Lost,
    Fold,
    Tie,
    Won,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum TripsState {
    Undefined,
    Lost,
    Trips,
    Straight,
    Flush,
    FullHouse,
    Quads,
    StraightFlush,
    RoyalFlush,
}

/// Blind bet bonus, paid on a win with a straight or better.
pub fn blind_multiplier(category: HandCategory) -> Payout {
    match category {
        HandCategory::RoyalFlush => Payout::times(500),
        HandCategory::StraightFlush => Payout::times(50),
        HandCategory::Quads => Payout::times(10),
        HandCategory::FullHouse => Payout::times(3),
        HandCategory::Flush => Payout::ratio(3, 2),
        HandCategory::Straight => Payout::EVEN,
        HandCategory::Trips
        | HandCategory::TwoPair
        | HandCategory::Pair
        | HandCategory::HighCard => Payout::ZERO,
    }
}

/// Trips side bet table. Pays regardless of the dealer's hand.
pub fn trips_multiplier(category: HandCategory) -> Payout {
    match category {
        HandCategory::RoyalFlush => Payout::times(50),
        HandCategory::StraightFlush => Payout::times(40),
        HandCategory::Quads => Payout::times(30),
        HandCategory::FullHouse => Payout::times(8),
        HandCategory::Flush => Payout::times(7),
        HandCategory::Straight => Payout::times(4),
        HandCategory::Trips => Payout::times(3),
        HandCategory::TwoPair | HandCategory::Pair | HandCategory::HighCard => Payout::ZERO,
    }
}

fn trips_state(category: HandCategory) -> TripsState {
    match category {
        HandCategory::RoyalFlush => TripsState::RoyalFlush,
        HandCategory::StraightFlush => TripsState::StraightFlush,
        HandCategory::Quads => TripsState::Quads,
        HandCategory::FullHouse => TripsState::FullHouse,
        HandCategory::Flush => TripsState::Flush,
        HandCategory::Straight => TripsState::Straight,
        HandCategory::Trips => TripsState::Trips,
        HandCategory::TwoPair | HandCategory::Pair | HandCategory::HighCard => TripsState::Lost,
    }
}

/// Community or hole cards plus the evaluation once all cards are out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UthHand {
    cards: Vec<Card>,
    state: UthState,
    evaluated: Option<EvaluatedHand>,
}

impl UthHand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
    pub fn state(&self) -> UthState {
        self.state
    }
    pub fn evaluated(&self) -> Option<&EvaluatedHand> {
        self.evaluated.as_ref()
    }
    pub fn category(&self) -> Option<HandCategory> {
        self.evaluated.map(|e| e.category)
    }
    pub fn is_folded(&self) -> bool {
        self.state == UthState::Fold
    }

    pub fn deal_card(&mut self, card: Card) {
        self.cards.push(card);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UthPlayerHand {
    hand: UthHand,
    ante: u64,
    blind: u64,
    play: u64,
    trips: u64,
    trips_state: TripsState,
    settled: bool,
}

impl UthPlayerHand {
    /// Ante and Blind are always equal.
    pub fn new(ante: u64, trips: u64) -> Self {
        Self {
            hand: UthHand::new(),
            ante,
            blind: ante,
            play: 0,
            trips,
            trips_state: TripsState::Undefined,
            settled: false,
        }
    }

    pub fn hand(&self) -> &UthHand {
        &self.hand
    }
    pub fn hand_mut(&mut self) -> &mut UthHand {
        &mut self.hand
    }
    pub fn ante(&self) -> u64 {
        self.ante
    }
    pub fn blind(&self) -> u64 {
        self.blind
    }
    pub fn play(&self) -> u64 {
        self.play
    }
    pub fn trips(&self) -> u64 {
        self.trips
    }
    pub fn trips_state(&self) -> TripsState {
        self.trips_state
    }
    pub fn state(&self) -> UthState {
        self.hand.state
    }

    pub fn deal_card(&mut self, card: Card) {
        self.hand.deal_card(card);
    }

    /// Sum of every bet currently on the layout.
    pub fn total_bets(&self) -> u64 {
        self.ante
            .saturating_add(self.blind)
            .saturating_add(self.play)
            .saturating_add(self.trips)
    }

    /// A folded hand gives up every bet, Trips included.
    pub fn forfeit(&mut self) {
        if self.hand.is_folded() {
            self.ante = 0;
            self.blind = 0;
            self.play = 0;
            self.trips = 0;
            if self.trips_state == TripsState::Undefined {
                self.trips_state = TripsState::Lost;
            }
        }
    }
}

pub fn legal_actions(stage: Stage) -> &'static [UthAction] {
    match stage {
        Stage::Start => &[UthAction::X4, UthAction::X3, UthAction::Check, UthAction::Fold],
        Stage::Flop => &[UthAction::X2, UthAction::Check, UthAction::Fold],
        Stage::River => &[UthAction::X1, UthAction::Fold],
        Stage::Turn | Stage::Final => &[],
    }
}

/// Applies a betting decision and returns the next stage. Anything not in
/// [`legal_actions`] leaves both the hand and the stage as they were.
pub fn apply_action(stage: Stage, action: UthAction, player: &mut UthPlayerHand) -> Stage {
    if player.hand.is_folded() || !legal_actions(stage).contains(&action) {
        return stage;
    }
    if let Some(n) = action.play_multiple() {
        player.play = player.ante.saturating_mul(n);
        return Stage::Final;
    }
    match action {
        UthAction::Fold => {
            player.hand.state = UthState::Fold;
            Stage::Final
        }
        _ => match stage {
            Stage::Start => Stage::Flop,
            Stage::Flop => Stage::River,
            s => s,
        },
    }
}

/// Evaluates the hand's own cards together with the board.
pub fn evaluate_hand(community: &[Card], hand: &mut UthHand) {
    if hand.is_folded() {
        return;
    }
    let mut all = Vec::with_capacity(hand.cards.len() + community.len());
    all.extend_from_slice(&hand.cards);
    all.extend_from_slice(community);
    if let Some(e) = evaluate(&all) {
        hand.evaluated = Some(e);
    }
}

pub fn evaluate_trips(player: &mut UthPlayerHand) {
    if player.hand.is_folded()
        || player.trips == 0
        || player.trips_state != TripsState::Undefined
    {
        return;
    }
    let Some(category) = player.hand.category() else {
        return;
    };
    let mult = trips_multiplier(category);
    player.trips_state = trips_state(category);
    player.trips = if mult.is_zero() {
        0
    } else {
        mult.with_stake(player.trips)
    };
}

/// The dealer opens Ante action with anything better than high card.
pub fn dealer_qualifies(dealer: &UthHand) -> bool {
    dealer
        .category()
        .is_some_and(|c| c > HandCategory::HighCard)
}

pub fn determine_game_result(player: &mut UthPlayerHand, dealer: &mut UthHand) {
    if player.hand.is_folded() {
        return;
    }
    let (Some(p), Some(d)) = (player.hand.evaluated, dealer.evaluated) else {
        return;
    };
    let (ps, ds) = match compare_hands(&p, &d) {
        Comparison::Win => (UthState::Won, UthState::Lost),
        Comparison::Lose => (UthState::Lost, UthState::Won),
        Comparison::Tie => (UthState::Tie, UthState::Tie),
    };
    player.hand.state = ps;
    dealer.state = ds;
}

/// Rewrites Ante, Blind and Play to the amounts returned to the player.
pub fn process_results(player: &mut UthPlayerHand, dealer: &UthHand) {
    if player.hand.is_folded() || player.settled {
        return;
    }
    let qualifies = dealer_qualifies(dealer);
    match player.hand.state {
        UthState::Won => {
            if qualifies {
                player.ante = Payout::EVEN.with_stake(player.ante);
            }
            if let Some(category) = player.hand.category() {
                let bonus = blind_multiplier(category);
                if !bonus.is_zero() {
                    player.blind = bonus.with_stake(player.blind);
                }
            }
            player.play = Payout::EVEN.with_stake(player.play);
        }
        UthState::Lost => {
            if qualifies {
                player.ante = 0;
            }
            player.blind = 0;
            player.play = 0;
        }
        UthState::Tie => {}
        UthState::Undefined | UthState::Fold => return,
    }
    player.settled = true;
}
