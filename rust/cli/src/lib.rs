//! # Croupier CLI Library
//!
//! Command-line surface for the croupier table-game engines: deal a round,
//! evaluate a poker hand, simulate many rounds, or inspect configuration.
//!
//! ## Example Usage
//!
//! ```
//! use std::io;
//! let args = vec!["croupier", "eval", "As", "Ks", "Qs", "Js", "Ts"];
//! let code = croupier_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `deal`: Play one Blackjack, Baccarat or UTH round with the built-in strategy
//! - `eval`: Evaluate 5 to 7 cards as a poker hand
//! - `sim`: Run many rounds and report wagered, returned and net chips
//! - `cfg`: Display current configuration settings and their sources

use clap::Parser;
use std::io::Write;
pub mod cli;
mod commands;
mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod logging;
pub mod ui;

use cli::{Commands, CroupierCli};
use commands::{handle_cfg_command, handle_deal_command, handle_eval_command, handle_sim_command};

pub use error::CliError;

/// Parses `args`, runs the subcommand and returns the process exit code:
/// `0` on success, `2` on any error (argument errors included).
///
/// Help and version go to `out`; everything else that is not a result goes
/// to `err` as `Error: ...`.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["deal", "eval", "sim", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match CroupierCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    if writeln!(err, "{}", e).is_err()
                        || writeln!(err, "Usage: croupier <command> [options]\n").is_err()
                        || writeln!(err, "Commands:").is_err()
                    {
                        return exit_code::ERROR;
                    }
                    for c in COMMANDS {
                        if writeln!(err, "  {}", c).is_err() {
                            return exit_code::ERROR;
                        }
                    }
                    let _ = writeln!(err, "\nFor full help, run: croupier --help");
                    exit_code::ERROR
                }
            };
        }
    };

    let verbosity = cli.verbosity();
    logging::init_logging(verbosity);
    let is_cfg = matches!(cli.cmd, Commands::Cfg);

    let result = match cli.cmd {
        Commands::Cfg => handle_cfg_command(out, err),
        Commands::Deal {
            game,
            seed,
            bet,
            wager,
            trips,
        } => handle_deal_command(
            game.into(),
            seed,
            bet,
            wager.into(),
            trips,
            verbosity,
            out,
        ),
        Commands::Eval { cards } => handle_eval_command(&cards, out),
        Commands::Sim {
            game,
            rounds,
            seed,
            bet,
            wager,
            trips,
            output,
        } => handle_sim_command(
            game.into(),
            rounds,
            seed,
            bet,
            wager.into(),
            trips,
            output,
            verbosity,
            out,
            err,
        ),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        // cfg reports its own configuration errors
        Err(CliError::Config(_)) if is_cfg => exit_code::ERROR,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}
