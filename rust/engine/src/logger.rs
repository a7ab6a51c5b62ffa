use std::fmt;
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::cards::Card;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Game {
    Blackjack,
    Baccarat,
    Uth,
}

impl Game {
    pub fn as_str(self) -> &'static str {
        match self {
            Game::Blackjack => "blackjack",
            Game::Baccarat => "baccarat",
            Game::Uth => "uth",
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Game {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "blackjack" | "bj" => Ok(Game::Blackjack),
            "baccarat" | "bac" => Ok(Game::Baccarat),
            "uth" | "ultimate" => Ok(Game::Uth),
            other => Err(format!("unknown game: {}", other)),
        }
    }
}

/// Cards held by one hand at the end of a round.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandCards {
    pub label: String,
    pub cards: Vec<Card>,
}

impl HandCards {
    pub fn new(label: impl Into<String>, cards: &[Card]) -> Self {
        Self {
            label: label.into(),
            cards: cards.to_vec(),
        }
    }
}

/// One settled round, written as a single JSON line.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// `YYYYMMDD-NNNNNN`
    pub round_id: String,
    pub game: Game,
    /// Seed of the shoe the round was dealt from, when it was seeded.
    pub seed: Option<u64>,
    pub hands: Vec<HandCards>,
    pub outcome: String,
    pub wagered: u64,
    pub returned: u64,
    #[serde(default)]
    pub ts: Option<String>,
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
}

impl RoundRecord {
    pub fn net(&self) -> i128 {
        self.returned as i128 - self.wagered as i128
    }
}

pub fn format_round_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Debug,
}

/// Round-level event sink handed to each table.
///
/// Events go to `tracing`; settled rounds are optionally appended to a JSONL
/// writer as well.
pub struct RoundLogger {
    verbosity: Verbosity,
    writer: Option<Box<dyn Write + Send>>,
    date: String,
    seq: u32,
}

impl fmt::Debug for RoundLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoundLogger")
            .field("verbosity", &self.verbosity)
            .field("has_writer", &self.writer.is_some())
            .field("date", &self.date)
            .field("seq", &self.seq)
            .finish()
    }
}

impl Default for RoundLogger {
    fn default() -> Self {
        Self::new(Verbosity::default())
    }
}

fn today() -> String {
    Utc::now().format("%Y%m%d").to_string()
}

impl RoundLogger {
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            writer: None,
            date: today(),
            seq: 0,
        }
    }

    pub fn create<P: AsRef<Path>>(path: P, verbosity: Verbosity) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                let _ = create_dir_all(parent);
            }
        }
        let f = File::create(path)?;
        Ok(Self::with_writer(BufWriter::new(f), verbosity))
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W, verbosity: Verbosity) -> Self {
        Self {
            writer: Some(Box::new(writer)),
            ..Self::new(verbosity)
        }
    }

    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            verbosity: Verbosity::Quiet,
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    pub fn set_verbosity(&mut self, verbosity: Verbosity) {
        self.verbosity = verbosity;
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_round_id(&self.date, self.seq)
    }

    pub fn card(&self, hand: &str, card: Card) {
        if self.verbosity == Verbosity::Debug {
            tracing::debug!(hand, card = %card, "dealt");
        }
    }

    pub fn decision(&self, hand: &str, decision: &dyn fmt::Debug) {
        if self.verbosity == Verbosity::Debug {
            tracing::debug!(hand, decision = ?decision, "rule decision");
        }
    }

    /// Reports a settled round and appends it to the JSONL sink.
    pub fn round(&mut self, record: &RoundRecord) -> std::io::Result<()> {
        if self.verbosity != Verbosity::Quiet {
            tracing::info!(
                round_id = %record.round_id,
                game = %record.game,
                outcome = %record.outcome,
                wagered = record.wagered,
                returned = record.returned,
                "round settled"
            );
        }
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
