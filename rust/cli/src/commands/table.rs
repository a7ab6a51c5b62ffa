//! One table of any game behind a single type, shared by `deal` and `sim`.

use croupier_engine::baccarat::{BaccaratRules, HandType};
use croupier_engine::engine::{
    BaccaratRound, BaccaratTable, BlackjackRound, BlackjackTable, MAX_SPLIT_HANDS, UthRound,
    UthTable,
};
use croupier_engine::errors::GameError;
use croupier_engine::logger::{Game, RoundLogger, RoundRecord};
use croupier_engine::shoe::Shoe;
use croupier_engine::strategy::{BasicStrategy, UthBasicStrategy};

#[derive(Debug, Clone, Copy)]
pub(crate) struct RoundSettings {
    pub bet: u64,
    pub wager: HandType,
    pub trips: u64,
}

impl RoundSettings {
    /// Most chips a single round can put on the layout.
    pub fn max_exposure(&self, game: Game) -> u64 {
        match game {
            // every split hand doubled, plus insurance
            Game::Blackjack => self
                .bet
                .saturating_mul(2 * MAX_SPLIT_HANDS as u64)
                .saturating_add(self.bet / 2),
            Game::Baccarat => self.bet,
            // ante + blind + 4x play + trips
            Game::Uth => self.bet.saturating_mul(6).saturating_add(self.trips),
        }
    }
}

#[derive(Debug)]
pub(crate) enum Played {
    Blackjack(BlackjackRound),
    Baccarat(BaccaratRound),
    Uth(UthRound),
}

impl Played {
    pub fn record(&self) -> &RoundRecord {
        match self {
            Played::Blackjack(r) => &r.record,
            Played::Baccarat(r) => &r.record,
            Played::Uth(r) => &r.record,
        }
    }
}

/// Decks per shoe for `game`. UTH ignores the configured count and always
/// deals from one deck.
pub fn shoe_decks(game: Game, configured: u8) -> u8 {
    match game {
        Game::Uth => UthTable::DECKS,
        Game::Blackjack | Game::Baccarat => configured,
    }
}

#[derive(Debug)]
pub(crate) enum AnyTable {
    Blackjack(BlackjackTable),
    Baccarat(BaccaratTable),
    Uth(UthTable),
}

impl AnyTable {
    pub fn seeded(
        game: Game,
        decks: u8,
        seed: u64,
        rules: BaccaratRules,
        logger: RoundLogger,
    ) -> Self {
        match game {
            Game::Blackjack => AnyTable::Blackjack(BlackjackTable::seeded(decks, seed, logger)),
            Game::Baccarat => {
                AnyTable::Baccarat(BaccaratTable::seeded(decks, seed, logger).with_rules(rules))
            }
            Game::Uth => AnyTable::Uth(UthTable::seeded(seed, logger)),
        }
    }

    pub fn play(&mut self, settings: &RoundSettings) -> Result<Played, GameError> {
        Ok(match self {
            AnyTable::Blackjack(t) => Played::Blackjack(t.play_round(settings.bet, &BasicStrategy)?),
            AnyTable::Baccarat(t) => {
                Played::Baccarat(t.play_round(settings.wager, settings.bet)?)
            }
            AnyTable::Uth(t) => {
                Played::Uth(t.play_round(settings.bet, settings.trips, &UthBasicStrategy)?)
            }
        })
    }

    pub fn cards_remaining(&self) -> usize {
        match self {
            AnyTable::Blackjack(t) => t.cards_remaining(),
            AnyTable::Baccarat(t) => t.cards_remaining(),
            AnyTable::Uth(t) => t.cards_remaining(),
        }
    }

    pub fn replace_shoe(&mut self, shoe: Shoe, seed: Option<u64>) {
        match self {
            AnyTable::Blackjack(t) => t.replace_shoe(shoe, seed),
            AnyTable::Baccarat(t) => t.replace_shoe(shoe, seed),
            AnyTable::Uth(t) => t.replace_shoe(shoe, seed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exposure_covers_the_worst_round() {
        let s = RoundSettings {
            bet: 10,
            wager: HandType::Banker,
            trips: 5,
        };
        assert_eq!(s.max_exposure(Game::Baccarat), 10);
        assert_eq!(s.max_exposure(Game::Uth), 65);
        assert_eq!(s.max_exposure(Game::Blackjack), 85);
    }

    #[test]
    fn uth_always_deals_one_deck() {
        assert_eq!(shoe_decks(Game::Uth, 6), 1);
        assert_eq!(shoe_decks(Game::Blackjack, 6), 6);
        let table = AnyTable::seeded(
            Game::Uth,
            6,
            1,
            BaccaratRules::default(),
            RoundLogger::default(),
        );
        assert_eq!(table.cards_remaining(), 52);
    }
}
