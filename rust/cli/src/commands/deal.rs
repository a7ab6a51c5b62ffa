//! `deal`: one round of any game, played by the built-in strategy.

use crate::commands::table::{AnyTable, Played, RoundSettings};
use crate::config;
use crate::error::CliError;
use crate::formatters::{format_cards, format_evaluated};
use crate::ui;
use croupier_engine::baccarat::{BaccaratRules, HandType};
use croupier_engine::bankroll::Bankroll;
use croupier_engine::logger::{Game, RoundLogger, Verbosity};
use croupier_engine::uth::dealer_qualifies;
use std::io::Write;

#[allow(clippy::too_many_arguments)]
pub fn handle_deal_command(
    game: Game,
    seed: Option<u64>,
    bet: Option<u64>,
    wager: HandType,
    trips: u64,
    verbosity: Verbosity,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = config::load()?;
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let settings = RoundSettings {
        bet: bet.unwrap_or(cfg.bet),
        wager,
        trips,
    };
    let mut bankroll = Bankroll::new(cfg.starting_stack);
    let exposure = settings.max_exposure(game);
    if !bankroll.can_cover(exposure) {
        return Err(CliError::InvalidInput(format!(
            "a round at this bet can cost up to {} chips, stack is {}",
            exposure,
            bankroll.stack()
        )));
    }

    let rules = BaccaratRules {
        tie_table: cfg.tie_table,
    };
    let mut table = AnyTable::seeded(game, cfg.decks, seed, rules, RoundLogger::new(verbosity));
    let played = table.play(&settings)?;

    writeln!(out, "Game: {}", game)?;
    writeln!(out, "Seed: {}", seed)?;
    write_hands(&played, out)?;

    let rec = played.record();
    let before = bankroll.stack();
    bankroll.settle(rec.wagered, rec.returned)?;
    writeln!(out, "Wagered: {}", rec.wagered)?;
    writeln!(out, "Returned: {}", rec.returned)?;
    writeln!(out, "Net: {}", ui::format_net(rec.net()))?;
    writeln!(out, "Stack: {} -> {}", before, bankroll.stack())?;
    Ok(())
}

fn write_hands(played: &Played, out: &mut dyn Write) -> Result<(), CliError> {
    match played {
        Played::Blackjack(r) => {
            writeln!(
                out,
                "Dealer: {} {}",
                format_cards(r.dealer.cards()),
                r.dealer.value()
            )?;
            for (n, h) in r.hands.iter().enumerate() {
                let label = if r.hands.len() == 1 {
                    "Player".to_string()
                } else {
                    format!("Player {}", n + 1)
                };
                writeln!(
                    out,
                    "{}: {} {} {:?} returns {}",
                    label,
                    format_cards(h.cards()),
                    h.value(),
                    h.state(),
                    h.bet()
                )?;
                if h.insurance_bet() > 0 {
                    writeln!(out, "Insurance returns {}", h.insurance_bet())?;
                }
            }
        }
        Played::Baccarat(r) => {
            for h in [&r.player, &r.banker] {
                writeln!(
                    out,
                    "{:?}: {} {} {:?}{}",
                    h.side(),
                    format_cards(h.cards()),
                    h.value(),
                    h.state(),
                    if h.is_natural() { " natural" } else { "" }
                )?;
            }
            writeln!(out, "Bet: {:?} {:?}", r.bet.wager(), r.bet.state())?;
        }
        Played::Uth(r) => {
            writeln!(out, "Board: {}", format_cards(&r.community))?;
            let player = match r.player.hand().evaluated() {
                Some(e) => format_evaluated(e),
                None => "-".to_string(),
            };
            writeln!(
                out,
                "Player: {} {} {:?}",
                format_cards(r.player.hand().cards()),
                player,
                r.player.state()
            )?;
            let dealer = match r.dealer.evaluated() {
                Some(e) => format_evaluated(e),
                None => "-".to_string(),
            };
            writeln!(
                out,
                "Dealer: {} {}{}",
                format_cards(r.dealer.cards()),
                dealer,
                if dealer_qualifies(&r.dealer) {
                    " qualifies"
                } else {
                    ""
                }
            )?;
            writeln!(
                out,
                "Ante: {}  Blind: {}  Play: {}  Trips: {} ({:?})",
                r.player.ante(),
                r.player.blind(),
                r.player.play(),
                r.player.trips(),
                r.player.trips_state()
            )?;
        }
    }
    Ok(())
}
