//! `sim`: many rounds in a row with a running bankroll.
//!
//! A shoe that runs dry is replaced by a fresh one whose seed is drawn from
//! a ChaCha20 stream seeded with the run's seed, so a whole run replays from
//! one number. The shoe is replaced at the cut card, once three quarters of
//! it is dealt, so rounds are not cut short by an empty shoe.

use crate::commands::table::{shoe_decks, AnyTable, RoundSettings};
use crate::config;
use crate::error::CliError;
use crate::ui;
use croupier_engine::baccarat::{BaccaratRules, HandType};
use croupier_engine::bankroll::Bankroll;
use croupier_engine::errors::GameError;
use croupier_engine::logger::{Game, RoundLogger, Verbosity};
use croupier_engine::shoe::Shoe;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SimTotals {
    pub rounds: u64,
    pub shoes: u64,
    pub wagered: u64,
    pub returned: u64,
}

impl SimTotals {
    pub fn net(&self) -> i128 {
        self.returned as i128 - self.wagered as i128
    }

    /// Returned per chip wagered, as a percentage.
    pub fn return_pct(&self) -> f64 {
        if self.wagered == 0 {
            0.0
        } else {
            self.returned as f64 * 100.0 / self.wagered as f64
        }
    }
}

/// Cards left in a shoe of `decks` decks when it is replaced.
pub(crate) fn cut_card(decks: u8) -> usize {
    usize::from(decks) * 52 / 4
}

fn reshoe(table: &mut AnyTable, shoe_seeds: &mut ChaCha20Rng, decks: u8) {
    let next: u64 = shoe_seeds.random();
    table.replace_shoe(Shoe::new_with_seed(decks, next), Some(next));
}

#[allow(clippy::too_many_arguments)]
pub fn handle_sim_command(
    game: Game,
    rounds: u64,
    seed: Option<u64>,
    bet: Option<u64>,
    wager: HandType,
    trips: u64,
    output: Option<PathBuf>,
    verbosity: Verbosity,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if rounds == 0 {
        return Err(CliError::InvalidInput("rounds must be >0".into()));
    }
    let cfg = config::load()?;
    let base_seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let settings = RoundSettings {
        bet: bet.unwrap_or(cfg.bet),
        wager,
        trips,
    };
    let logger = match &output {
        Some(path) => RoundLogger::create(path, verbosity)?,
        None => RoundLogger::new(verbosity),
    };
    let rules = BaccaratRules {
        tie_table: cfg.tie_table,
    };
    let decks = shoe_decks(game, cfg.decks);
    let mut table = AnyTable::seeded(game, decks, base_seed, rules, logger);
    let mut shoe_seeds = ChaCha20Rng::seed_from_u64(base_seed);
    let mut bankroll = Bankroll::new(cfg.starting_stack);
    let exposure = settings.max_exposure(game);
    let mut totals = SimTotals {
        shoes: 1,
        ..SimTotals::default()
    };

    tracing::debug!(game = %game, rounds, seed = base_seed, "simulation start");
    while totals.rounds < rounds {
        if !bankroll.can_cover(exposure) {
            ui::display_warning(
                err,
                &format!("Bankroll exhausted after {} rounds", totals.rounds),
            )?;
            break;
        }
        if table.cards_remaining() < cut_card(decks) {
            reshoe(&mut table, &mut shoe_seeds, decks);
            totals.shoes += 1;
        }
        match table.play(&settings) {
            Ok(played) => {
                let rec = played.record();
                bankroll.settle(rec.wagered, rec.returned)?;
                totals.rounds += 1;
                totals.wagered = totals.wagered.saturating_add(rec.wagered);
                totals.returned = totals.returned.saturating_add(rec.returned);
            }
            Err(GameError::ShoeExhausted) => {
                reshoe(&mut table, &mut shoe_seeds, decks);
                totals.shoes += 1;
            }
            Err(e) => return Err(e.into()),
        }
    }

    writeln!(out, "Game: {}", game)?;
    writeln!(out, "Seed: {}", base_seed)?;
    writeln!(out, "Rounds: {}", totals.rounds)?;
    writeln!(out, "Shoes: {}", totals.shoes)?;
    writeln!(out, "Wagered: {}", totals.wagered)?;
    writeln!(out, "Returned: {}", totals.returned)?;
    writeln!(out, "Net: {}", ui::format_net(totals.net()))?;
    writeln!(out, "Return: {:.2}%", totals.return_pct())?;
    writeln!(out, "Final stack: {}", bankroll.stack())?;
    if let Some(path) = output {
        writeln!(out, "Records: {}", path.display())?;
    }
    Ok(())
}
