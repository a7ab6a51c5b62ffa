//! Table drivers: each owns a shoe and a round logger and runs the fixed
//! call order of one round, from the first card to the settled bets.

use serde_json::json;

use crate::baccarat::{
    calculate_result_with, evaluate_banker_action, evaluate_hands, evaluate_player_action,
    BacAction, BacHand, BaccaratRules, BetHand, HandType, Side,
};
use crate::blackjack::{settle, BjAction, BjHand};
use crate::cards::Card;
use crate::errors::GameError;
use crate::logger::{Game, HandCards, RoundLogger, RoundRecord};
use crate::rules::{validate_wager, TableLimits};
use crate::shoe::Shoe;
use crate::strategy::{BlackjackStrategy, UthStrategy};
use crate::uth::{
    apply_action, determine_game_result, evaluate_hand, evaluate_trips, legal_actions,
    process_results, Stage, UthAction, UthHand, UthPlayerHand,
};

/// Most hands a single blackjack seat may be split into.
pub const MAX_SPLIT_HANDS: usize = 4;

#[derive(Debug)]
struct TableCore {
    shoe: Shoe,
    seed: Option<u64>,
    limits: TableLimits,
    logger: RoundLogger,
}

impl TableCore {
    fn new(shoe: Shoe, logger: RoundLogger) -> Self {
        Self {
            shoe,
            seed: None,
            limits: TableLimits::default(),
            logger,
        }
    }

    fn draw(&mut self, hand: &str) -> Result<Card, GameError> {
        let card = self.shoe.next_card().ok_or(GameError::ShoeExhausted)?;
        self.logger.card(hand, card);
        Ok(card)
    }

    fn require(&self, cards: usize) -> Result<(), GameError> {
        if self.shoe.remaining() < cards {
            return Err(GameError::ShoeExhausted);
        }
        Ok(())
    }

    fn finish(
        &mut self,
        game: Game,
        hands: Vec<HandCards>,
        outcome: String,
        wagered: u64,
        returned: u64,
        meta: serde_json::Value,
    ) -> RoundRecord {
        let record = RoundRecord {
            round_id: self.logger.next_id(),
            game,
            seed: self.seed,
            hands,
            outcome,
            wagered,
            returned,
            ts: None,
            meta: Some(meta),
        };
        if let Err(e) = self.logger.round(&record) {
            tracing::warn!(round_id = %record.round_id, error = %e, "failed to write round record");
        }
        record
    }
}

macro_rules! table_common {
    ($table:ident $(, $field:ident)*) => {
        impl $table {
            pub fn new(shoe: Shoe, logger: RoundLogger) -> Self {
                Self {
                    core: TableCore::new(shoe, logger),
                    $($field: Default::default(),)*
                }
            }

            /// Seed stamped on round records.
            pub fn with_seed(mut self, seed: u64) -> Self {
                self.core.seed = Some(seed);
                self
            }

            pub fn with_limits(mut self, limits: TableLimits) -> Self {
                self.core.limits = limits;
                self
            }

            pub fn limits(&self) -> TableLimits {
                self.core.limits
            }

            pub fn cards_remaining(&self) -> usize {
                self.core.shoe.remaining()
            }

            /// Swaps in a new shoe, e.g. after [`GameError::ShoeExhausted`].
            pub fn replace_shoe(&mut self, shoe: Shoe, seed: Option<u64>) {
                self.core.shoe = shoe;
                self.core.seed = seed;
            }

            pub fn logger_mut(&mut self) -> &mut RoundLogger {
                &mut self.core.logger
            }
        }
    };
}

#[derive(Debug)]
pub struct BlackjackRound {
    /// Player hands after settlement; more than one after a split.
    pub hands: Vec<BjHand>,
    pub dealer: BjHand,
    pub record: RoundRecord,
}

#[derive(Debug)]
pub struct BlackjackTable {
    core: TableCore,
}

table_common!(BlackjackTable);

impl BlackjackTable {
    /// Cards needed in the shoe before a round is started.
    pub const MIN_CARDS: usize = 12;

    /// A fresh shoe of `decks` decks shuffled with `seed`.
    pub fn seeded(decks: u8, seed: u64, logger: RoundLogger) -> Self {
        Self::new(Shoe::new_with_seed(decks, seed), logger).with_seed(seed)
    }

    pub fn play_round(
        &mut self,
        bet: u64,
        strategy: &dyn BlackjackStrategy,
    ) -> Result<BlackjackRound, GameError> {
        let bet = validate_wager(bet, &self.core.limits)?;
        self.core.require(Self::MIN_CARDS)?;

        // a round that runs the shoe dry leaves the shoe as it found it
        let shoe = self.core.shoe.clone();
        let round = self.deal_round(bet, strategy);
        if matches!(round, Err(GameError::ShoeExhausted)) {
            self.core.shoe = shoe;
        }
        round
    }

    fn deal_round(
        &mut self,
        bet: u64,
        strategy: &dyn BlackjackStrategy,
    ) -> Result<BlackjackRound, GameError> {
        let mut first = BjHand::player(bet);
        let mut dealer = BjHand::dealer();
        for _ in 0..2 {
            first.deal_card(self.core.draw("player")?);
            dealer.deal_card(self.core.draw("dealer")?);
        }
        let up = dealer.cards()[0];

        if dealer.is_insurance_offered() && strategy.take_insurance(&first) {
            first.take_insurance(&dealer);
            self.core.logger.decision("player", &"insurance");
        }

        let mut hands = vec![first];
        if !dealer.is_blackjack() {
            let mut i = 0;
            while i < hands.len() {
                self.play_hand(&mut hands, i, up, strategy)?;
                i += 1;
            }
            let live = hands.iter().any(|h| !h.is_bust() && !h.is_blackjack());
            while live && dealer.can_deal_card() {
                let card = self.core.draw("dealer")?;
                dealer.deal_card(card);
            }
        }

        let wagered: u64 = hands
            .iter()
            .map(|h| h.bet().saturating_add(h.insurance_bet()))
            .sum();
        for hand in &mut hands {
            settle(hand, &dealer);
        }
        let returned: u64 = hands
            .iter()
            .map(|h| h.bet().saturating_add(h.insurance_bet()))
            .sum();

        let mut cards = Vec::with_capacity(hands.len() + 1);
        for (n, h) in hands.iter().enumerate() {
            let label = if n == 0 {
                "player".to_string()
            } else {
                format!("player#{}", n + 1)
            };
            cards.push(HandCards::new(label, h.cards()));
        }
        cards.push(HandCards::new("dealer", dealer.cards()));
        let outcome = hands
            .iter()
            .map(|h| format!("{:?}", h.state()))
            .collect::<Vec<_>>()
            .join(",");
        let meta = json!({
            "dealer_value": dealer.value(),
            "player_values": hands.iter().map(|h| h.value()).collect::<Vec<_>>(),
        });
        let record = self
            .core
            .finish(Game::Blackjack, cards, outcome, wagered, returned, meta);
        Ok(BlackjackRound {
            hands,
            dealer,
            record,
        })
    }

    fn play_hand(
        &mut self,
        hands: &mut Vec<BjHand>,
        i: usize,
        up: Card,
        strategy: &dyn BlackjackStrategy,
    ) -> Result<(), GameError> {
        let label = format!("player#{}", i + 1);
        // split hands start with one card
        while hands[i].cards().len() < 2 {
            let card = self.core.draw(&label)?;
            hands[i].deal_card(card);
        }
        loop {
            if hands[i].available_actions().is_empty() {
                return Ok(());
            }
            let action = strategy.action(&hands[i], up);
            self.core.logger.decision(&label, &action);
            match action {
                BjAction::Hit => {
                    let card = self.core.draw(&label)?;
                    hands[i].deal_card(card);
                }
                BjAction::Double if hands[i].double_down() => {
                    let card = self.core.draw(&label)?;
                    hands[i].deal_card(card);
                    return Ok(());
                }
                BjAction::Split if hands.len() < MAX_SPLIT_HANDS => {
                    let Some(other) = hands[i].split() else {
                        return Ok(());
                    };
                    hands.insert(i + 1, other);
                    let card = self.core.draw(&label)?;
                    hands[i].deal_card(card);
                }
                _ => return Ok(()),
            }
        }
    }
}

#[derive(Debug)]
pub struct BaccaratRound {
    pub player: BacHand,
    pub banker: BacHand,
    pub bet: BetHand,
    pub record: RoundRecord,
}

#[derive(Debug)]
pub struct BaccaratTable {
    core: TableCore,
    rules: BaccaratRules,
}

table_common!(BaccaratTable, rules);

impl BaccaratTable {
    pub const MIN_CARDS: usize = 6;

    /// A fresh shoe of `decks` decks shuffled with `seed`.
    pub fn seeded(decks: u8, seed: u64, logger: RoundLogger) -> Self {
        Self::new(Shoe::new_with_seed(decks, seed), logger).with_seed(seed)
    }

    pub fn with_rules(mut self, rules: BaccaratRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn rules(&self) -> BaccaratRules {
        self.rules
    }

    pub fn play_round(&mut self, wager: HandType, bet: u64) -> Result<BaccaratRound, GameError> {
        let bet = validate_wager(bet, &self.core.limits)?;
        self.core.require(Self::MIN_CARDS)?;

        let mut player = BacHand::new(Side::Player);
        let mut banker = BacHand::new(Side::Banker);
        let mut bet_hand = BetHand::new(wager, bet);
        for _ in 0..2 {
            player.deal_card(self.core.draw("player")?);
            banker.deal_card(self.core.draw("banker")?);
        }

        evaluate_player_action(&banker, &mut player);
        self.core.logger.decision("player", &player.action());
        if player.action() == BacAction::Draw {
            player.deal_card(self.core.draw("player")?);
        }
        evaluate_banker_action(&mut banker, &player);
        self.core.logger.decision("banker", &banker.action());
        if banker.action() == BacAction::Draw {
            banker.deal_card(self.core.draw("banker")?);
        }

        evaluate_hands(&mut banker, &mut player);
        calculate_result_with(&self.rules, &banker, &player, &mut bet_hand);

        let outcome = format!(
            "player {:?} {} / banker {:?} {}",
            player.state(),
            player.value(),
            banker.state(),
            banker.value()
        );
        let meta = json!({
            "wager": bet_hand.wager(),
            "bet_state": bet_hand.state(),
            "tie_table": self.rules.tie_table,
            "player_natural": player.is_natural(),
            "banker_natural": banker.is_natural(),
            "player_pair": player.is_pair(),
            "banker_pair": banker.is_pair(),
        });
        let hands = vec![
            HandCards::new("player", player.cards()),
            HandCards::new("banker", banker.cards()),
        ];
        let record = self
            .core
            .finish(Game::Baccarat, hands, outcome, bet, bet_hand.bet(), meta);
        Ok(BaccaratRound {
            player,
            banker,
            bet: bet_hand,
            record,
        })
    }
}

#[derive(Debug)]
pub struct UthRound {
    pub player: UthPlayerHand,
    pub dealer: UthHand,
    pub community: Vec<Card>,
    pub record: RoundRecord,
}

#[derive(Debug)]
pub struct UthTable {
    core: TableCore,
}

table_common!(UthTable);

impl UthTable {
    pub const MIN_CARDS: usize = 9;

    /// UTH is dealt from a single deck so no card can appear twice in a hand.
    pub const DECKS: u8 = 1;

    /// A fresh single deck shuffled with `seed`.
    pub fn seeded(seed: u64, logger: RoundLogger) -> Self {
        Self::new(Shoe::new_with_seed(Self::DECKS, seed), logger).with_seed(seed)
    }

    /// Plays one round with `ante` (the Blind matches it) and an optional
    /// Trips bet of `trips` (0 for none).
    pub fn play_round(
        &mut self,
        ante: u64,
        trips: u64,
        strategy: &dyn UthStrategy,
    ) -> Result<UthRound, GameError> {
        let ante = validate_wager(ante, &self.core.limits)?;
        if trips > 0 {
            validate_wager(trips, &self.core.limits)?;
        }
        self.core.require(Self::MIN_CARDS)?;

        let mut player = UthPlayerHand::new(ante, trips);
        let mut dealer = UthHand::new();
        for _ in 0..2 {
            player.deal_card(self.core.draw("player")?);
            dealer.deal_card(self.core.draw("dealer")?);
        }

        let mut community = Vec::with_capacity(5);
        let mut stage = Stage::Start;
        while stage != Stage::Final {
            let wanted = strategy.action(stage, player.hand().cards(), &community);
            let mut next = apply_action(stage, wanted, &mut player);
            if next == stage {
                // illegal choice: take the cheapest legal option
                let fallback = if legal_actions(stage).contains(&UthAction::Check) {
                    UthAction::Check
                } else {
                    UthAction::Fold
                };
                next = apply_action(stage, fallback, &mut player);
                self.core.logger.decision("player", &fallback);
            } else {
                self.core.logger.decision("player", &wanted);
            }
            let visible = match next {
                Stage::Flop => 3,
                Stage::River => 5,
                _ => community.len(),
            };
            while community.len() < visible {
                community.push(self.core.draw("board")?);
            }
            stage = next;
        }
        while community.len() < 5 {
            community.push(self.core.draw("board")?);
        }

        let wagered = player.total_bets();
        if player.hand().is_folded() {
            player.forfeit();
        } else {
            evaluate_hand(&community, player.hand_mut());
            evaluate_hand(&community, &mut dealer);
            evaluate_trips(&mut player);
            determine_game_result(&mut player, &mut dealer);
            process_results(&mut player, &dealer);
        }
        let returned = player.total_bets();

        let outcome = format!("{:?}", player.state());
        let meta = json!({
            "player_category": player.hand().category(),
            "dealer_category": dealer.category(),
            "trips_state": player.trips_state(),
            "ante": ante,
            "play": player.play(),
        });
        let hands = vec![
            HandCards::new("player", player.hand().cards()),
            HandCards::new("dealer", dealer.cards()),
            HandCards::new("board", &community),
        ];
        let record = self
            .core
            .finish(Game::Uth, hands, outcome, wagered, returned, meta);
        Ok(UthRound {
            player,
            dealer,
            community,
            record,
        })
    }
}
