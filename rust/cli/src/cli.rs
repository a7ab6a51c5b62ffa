//! Command-line argument definitions.

use clap::{Parser, Subcommand, ValueEnum};
use croupier_engine::baccarat::HandType;
use croupier_engine::logger::{Game, Verbosity};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "croupier",
    author,
    version,
    about = "Blackjack, Baccarat and Ultimate Texas Hold'em rule engines"
)]
pub struct CroupierCli {
    /// Log every dealt card and rule decision
    #[arg(long, short, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress round events
    #[arg(long, short, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub cmd: Commands,
}

impl CroupierCli {
    pub fn verbosity(&self) -> Verbosity {
        if self.verbose {
            Verbosity::Debug
        } else if self.quiet {
            Verbosity::Quiet
        } else {
            Verbosity::Normal
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play one round with the built-in strategy
    Deal {
        #[arg(long, value_enum)]
        game: GameArg,
        #[arg(long)]
        seed: Option<u64>,
        /// Main bet (ante in UTH); defaults to the configured bet
        #[arg(long)]
        bet: Option<u64>,
        /// Baccarat: what the bet is placed on
        #[arg(long, value_enum, default_value_t = WagerArg::Banker)]
        wager: WagerArg,
        /// UTH: Trips side bet, 0 for none
        #[arg(long, default_value_t = 0)]
        trips: u64,
    },
    /// Evaluate 5 to 7 cards as a poker hand
    Eval {
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
    },
    /// Run many rounds and report the return
    Sim {
        #[arg(long, value_enum)]
        game: GameArg,
        #[arg(long)]
        rounds: u64,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        bet: Option<u64>,
        #[arg(long, value_enum, default_value_t = WagerArg::Banker)]
        wager: WagerArg,
        #[arg(long, default_value_t = 0)]
        trips: u64,
        /// Write one JSON round record per line
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum GameArg {
    Blackjack,
    Baccarat,
    Uth,
}

impl From<GameArg> for Game {
    fn from(g: GameArg) -> Self {
        match g {
            GameArg::Blackjack => Game::Blackjack,
            GameArg::Baccarat => Game::Baccarat,
            GameArg::Uth => Game::Uth,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum WagerArg {
    Player,
    Banker,
    Tie,
}

impl From<WagerArg> for HandType {
    fn from(w: WagerArg) -> Self {
        match w {
            WagerArg::Player => HandType::Player,
            WagerArg::Banker => HandType::Banker,
            WagerArg::Tie => HandType::Tie,
        }
    }
}
