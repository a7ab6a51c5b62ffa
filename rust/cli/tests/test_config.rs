//! Configuration precedence: defaults < file < environment.

use croupier_cli::run;
use serial_test::serial;
use std::io::Write;

const VARS: &[&str] = &[
    "CROUPIER_CONFIG",
    "CROUPIER_SEED",
    "CROUPIER_DECKS",
    "CROUPIER_BET",
    "CROUPIER_STARTING_STACK",
    "CROUPIER_TIE_TABLE",
];

fn clear_env() {
    for v in VARS {
        unsafe { std::env::remove_var(v) };
    }
}

fn cfg() -> (i32, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(["croupier", "cfg"], &mut out, &mut err);
    (
        code,
        String::from_utf8_lossy(&out).into_owned(),
        String::from_utf8_lossy(&err).into_owned(),
    )
}

#[test]
#[serial]
fn defaults_without_file_or_env() {
    clear_env();
    let (code, out, _) = cfg();
    assert_eq!(code, 0);
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["decks"]["value"], 6);
    assert_eq!(v["decks"]["source"], "default");
    assert_eq!(v["bet"]["value"], 10);
    assert_eq!(v["tie_table"]["value"], "nine_to_one");
    assert!(v["seed"]["value"].is_null());
}

#[test]
#[serial]
fn env_overrides_file() {
    clear_env();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "decks = 2\nbet = 5\ntie_table = \"eight_to_one\"").unwrap();
    unsafe {
        std::env::set_var("CROUPIER_CONFIG", file.path());
        std::env::set_var("CROUPIER_BET", "7");
    }

    let (code, out, _) = cfg();
    clear_env();
    assert_eq!(code, 0);
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["decks"]["value"], 2);
    assert_eq!(v["decks"]["source"], "file");
    assert_eq!(v["bet"]["value"], 7);
    assert_eq!(v["bet"]["source"], "env");
    assert_eq!(v["tie_table"]["value"], "eight_to_one");
    assert_eq!(v["starting_stack"]["source"], "default");
}

#[test]
#[serial]
fn invalid_deck_count_exits_two() {
    clear_env();
    unsafe { std::env::set_var("CROUPIER_DECKS", "12") };
    let (code, out, err) = cfg();
    clear_env();
    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert!(err.contains("decks must be between 1 and 8"), "{}", err);
    assert_eq!(err.matches("Error:").count(), 1);
}

#[test]
#[serial]
fn configured_seed_drives_deal() {
    clear_env();
    unsafe { std::env::set_var("CROUPIER_SEED", "31") };
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(["croupier", "deal", "--game", "baccarat", "-q"], &mut out, &mut err);
    clear_env();
    assert_eq!(code, 0);
    assert!(String::from_utf8_lossy(&out).contains("Seed: 31"));
}
