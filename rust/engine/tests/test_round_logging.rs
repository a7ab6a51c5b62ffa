use std::fs;
use std::sync::{Arc, Mutex};

use croupier_engine::baccarat::HandType;
use croupier_engine::cards::parse_cards;
use croupier_engine::engine::BaccaratTable;
use croupier_engine::logger::{Game, HandCards, RoundLogger, RoundRecord, Verbosity};
use croupier_engine::shoe::Shoe;
use tracing::Level;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::{Layer, Registry};

#[derive(Clone, Default)]
struct Captured {
    events: Arc<Mutex<Vec<(Level, String)>>>,
}

impl<S: tracing::Subscriber> Layer<S> for Captured {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        self.events
            .lock()
            .unwrap()
            .push((*event.metadata().level(), visitor.message));
    }
}

#[derive(Default)]
struct MessageVisitor {
    message: String,
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        }
    }
}

fn play_rounds(verbosity: Verbosity, rounds: usize) -> Vec<(Level, String)> {
    let captured = Captured::default();
    let subscriber = Registry::default().with(captured.clone());
    tracing::subscriber::with_default(subscriber, || {
        let mut table = BaccaratTable::seeded(8, 7, RoundLogger::new(verbosity));
        for _ in 0..rounds {
            table.play_round(HandType::Player, 10).expect("round");
        }
    });
    let events = captured.events.lock().unwrap().clone();
    events
}

#[test]
fn quiet_logger_emits_nothing() {
    assert!(play_rounds(Verbosity::Quiet, 3).is_empty());
}

#[test]
fn normal_logger_emits_one_info_per_round() {
    let events = play_rounds(Verbosity::Normal, 3);
    assert_eq!(events.len(), 3);
    assert!(events
        .iter()
        .all(|(level, msg)| *level == Level::INFO && msg.contains("round settled")));
}

#[test]
fn debug_logger_reports_cards_and_decisions() {
    let events = play_rounds(Verbosity::Debug, 1);
    let dealt = events.iter().filter(|(_, m)| m.contains("dealt")).count();
    let decisions = events
        .iter()
        .filter(|(_, m)| m.contains("rule decision"))
        .count();
    assert!((4..=6).contains(&dealt), "dealt {} cards", dealt);
    assert_eq!(decisions, 2);
    assert!(events.iter().any(|(l, _)| *l == Level::INFO));
}

#[test]
fn writes_jsonl_with_lf_only_and_timestamps() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("rounds").join("bac.jsonl");
    let logger = RoundLogger::create(&path, Verbosity::Quiet).expect("create logger");
    let mut table = BaccaratTable::seeded(1, 99, logger);
    for _ in 0..4 {
        table.play_round(HandType::Banker, 20).expect("round");
    }
    drop(table);

    let bytes = fs::read(&path).expect("read file");
    assert!(bytes.ends_with(b"\n"));
    assert!(!bytes.contains(&b'\r'));
    let text = String::from_utf8(bytes).unwrap();
    let records: Vec<RoundRecord> = text
        .lines()
        .map(|l| serde_json::from_str(l).expect("valid record"))
        .collect();
    assert_eq!(records.len(), 4);
    for (i, rec) in records.iter().enumerate() {
        assert!(rec.round_id.ends_with(&format!("-{:06}", i + 1)));
        assert_eq!(rec.game, Game::Baccarat);
        assert_eq!(rec.seed, Some(99));
        assert_eq!(rec.wagered, 20);
        assert!(rec.ts.as_deref().is_some_and(|ts| ts.ends_with('Z')));
    }
}

#[test]
fn ts_is_preserved_when_present() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("one.jsonl");
    let mut logger = RoundLogger::create(&path, Verbosity::Quiet).expect("create logger");
    let rec = RoundRecord {
        round_id: "20250102-000001".to_string(),
        game: Game::Blackjack,
        seed: None,
        hands: vec![HandCards::new("player", &parse_cards("As Kh").unwrap())],
        outcome: "Won".to_string(),
        wagered: 10,
        returned: 25,
        ts: Some("2025-01-02T03:04:05Z".to_string()),
        meta: None,
    };
    logger.round(&rec).expect("write");
    drop(logger);
    let line = fs::read_to_string(&path).unwrap();
    let back: RoundRecord = serde_json::from_str(line.trim_end()).unwrap();
    assert_eq!(back, rec);
}

#[test]
fn logger_without_sink_still_numbers_rounds() {
    let shoe = Shoe::from_cards(parse_cards("9s 2c Ts 3c 2d 2h 4d 4h").unwrap());
    let mut table = BaccaratTable::new(shoe, RoundLogger::with_seq_for_test("20240229"));
    let round = table.play_round(HandType::Player, 10).unwrap();
    assert_eq!(round.record.round_id, "20240229-000001");
}
