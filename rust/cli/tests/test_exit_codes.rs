//! Exit codes and stream separation for every subcommand.

use croupier_cli::run;

fn run_args(args: &[&str]) -> (i32, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(args.iter().copied(), &mut out, &mut err);
    (
        code,
        String::from_utf8_lossy(&out).into_owned(),
        String::from_utf8_lossy(&err).into_owned(),
    )
}

#[test]
fn help_goes_to_stdout_with_zero() {
    let (code, out, err) = run_args(&["croupier", "--help"]);
    assert_eq!(code, 0);
    for cmd in ["deal", "eval", "sim", "cfg"] {
        assert!(out.contains(cmd), "help should list {}", cmd);
    }
    assert!(err.is_empty());
}

#[test]
fn version_exits_zero() {
    let (code, out, _) = run_args(&["croupier", "--version"]);
    assert_eq!(code, 0);
    assert!(out.contains("croupier"));
}

#[test]
fn missing_subcommand_is_an_error() {
    let (code, out, err) = run_args(&["croupier"]);
    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert!(err.contains("Commands:"));
}

#[test]
fn unknown_subcommand_is_an_error() {
    let (code, _, err) = run_args(&["croupier", "roulette"]);
    assert_eq!(code, 2);
    assert!(err.contains("For full help"));
}

#[test]
fn zero_bet_is_rejected_by_the_table() {
    let (code, out, err) = run_args(&[
        "croupier", "deal", "--game", "baccarat", "--seed", "3", "--bet", "0",
    ]);
    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert!(err.starts_with("Error: Invalid input:"), "{}", err);
}

#[test]
fn bet_larger_than_the_stack_can_cover_is_rejected() {
    let (code, _, err) = run_args(&[
        "croupier", "deal", "--game", "blackjack", "--seed", "3", "--bet", "500",
    ]);
    assert_eq!(code, 2);
    assert!(err.contains("stack is"), "{}", err);
}

#[test]
fn zero_rounds_is_rejected() {
    let (code, _, err) = run_args(&["croupier", "sim", "--game", "uth", "--rounds", "0"]);
    assert_eq!(code, 2);
    assert!(err.contains("rounds must be >0"));
}

#[test]
fn eval_errors_exit_two() {
    let (code, _, err) = run_args(&["croupier", "eval", "As", "Ks", "Qs"]);
    assert_eq!(code, 2);
    assert!(err.contains("expected 5 to 7 cards"));

    let (code, _, err) = run_args(&["croupier", "eval", "As", "Ks", "Qs", "Js", "1x"]);
    assert_eq!(code, 2);
    assert!(err.starts_with("Error:"));
}
