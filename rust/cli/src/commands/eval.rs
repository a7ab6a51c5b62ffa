//! `eval`: best five of 5-7 cards.

use crate::error::CliError;
use crate::formatters::{format_card, format_cards};
use croupier_engine::cards::parse_cards;
use croupier_engine::poker::evaluate;
use std::collections::HashSet;
use std::io::Write;

/// Cards may be given as separate arguments or in one quoted, space or
/// comma separated argument.
pub fn handle_eval_command(cards: &[String], out: &mut dyn Write) -> Result<(), CliError> {
    let parsed = parse_cards(&cards.join(" "))?;
    let mut seen = HashSet::new();
    if let Some(dup) = parsed.iter().find(|c| !seen.insert(**c)) {
        return Err(CliError::InvalidInput(format!("duplicate card {}", dup)));
    }
    let Some(hand) = evaluate(&parsed) else {
        return Err(CliError::InvalidInput(format!(
            "expected 5 to 7 cards, got {}",
            parsed.len()
        )));
    };

    writeln!(out, "Category: {}", hand.category.name())?;
    writeln!(out, "Best five: {}", format_cards(&hand.best_five))?;
    writeln!(out, "Kicker: {}", format_card(&hand.kicker))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(args: &[&str]) -> Result<String, CliError> {
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        let mut out = Vec::new();
        handle_eval_command(&args, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn reports_category_first() {
        let text = eval(&["As", "Ks", "Qs", "Js", "Ts", "2c", "3d"]).unwrap();
        assert_eq!(text.lines().next(), Some("Category: Royal Flush"));
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn accepts_one_quoted_argument() {
        let text = eval(&["Ad,2c,3h,4s,5d"]).unwrap();
        assert!(text.starts_with("Category: Straight"));
    }

    #[test]
    fn rejects_short_hands_and_duplicates() {
        assert!(matches!(
            eval(&["As", "Ks", "Qs", "Js"]),
            Err(CliError::InvalidInput(_))
        ));
        assert!(matches!(
            eval(&["As", "As", "Qs", "Js", "Ts"]),
            Err(CliError::InvalidInput(msg)) if msg.contains("duplicate")
        ));
        assert!(matches!(eval(&["Zz"]), Err(CliError::InvalidInput(_))));
    }
}
