//! Layered configuration: defaults, then the TOML file named by
//! `CROUPIER_CONFIG`, then `CROUPIER_*` environment variables. Command-line
//! flags override the result in the command handlers.

use croupier_engine::baccarat::TieTable;
use croupier_engine::bankroll::STARTING_STACK;
use serde::{Deserialize, Serialize};
use std::fs;

pub const MAX_DECKS: u8 = 8;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub decks: u8,
    pub bet: u64,
    pub starting_stack: u64,
    pub tie_table: TieTable,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub seed: ValueSource,
    pub decks: ValueSource,
    pub bet: ValueSource,
    pub starting_stack: ValueSource,
    pub tie_table: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            decks: ValueSource::Default,
            bet: ValueSource::Default,
            starting_stack: ValueSource::Default,
            tie_table: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            decks: 6,
            bet: 10,
            starting_stack: STARTING_STACK,
            tie_table: TieTable::default(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("CROUPIER_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.decks {
            cfg.decks = v;
            sources.decks = ValueSource::File;
        }
        if let Some(v) = f.bet {
            cfg.bet = v;
            sources.bet = ValueSource::File;
        }
        if let Some(v) = f.starting_stack {
            cfg.starting_stack = v;
            sources.starting_stack = ValueSource::File;
        }
        if let Some(v) = f.tie_table {
            cfg.tie_table = v;
            sources.tie_table = ValueSource::File;
        }
    }

    if let Some(seed) = env_value("CROUPIER_SEED") {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Some(decks) = env_value("CROUPIER_DECKS") {
        cfg.decks = decks
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid decks".into()))?;
        sources.decks = ValueSource::Env;
    }
    if let Some(bet) = env_value("CROUPIER_BET") {
        cfg.bet = bet
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid bet".into()))?;
        sources.bet = ValueSource::Env;
    }
    if let Some(stack) = env_value("CROUPIER_STARTING_STACK") {
        cfg.starting_stack = stack
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid starting_stack".into()))?;
        sources.starting_stack = ValueSource::Env;
    }
    if let Some(table) = env_value("CROUPIER_TIE_TABLE") {
        cfg.tie_table = parse_tie_table(&table)
            .ok_or_else(|| ConfigError::Invalid("Invalid tie_table".into()))?;
        sources.tie_table = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    decks: Option<u8>,
    #[serde(default)]
    bet: Option<u64>,
    #[serde(default)]
    starting_stack: Option<u64>,
    #[serde(default)]
    tie_table: Option<TieTable>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.decks == 0 || cfg.decks > MAX_DECKS {
        return Err(ConfigError::Invalid(format!(
            "decks must be between 1 and {}",
            MAX_DECKS
        )));
    }
    if cfg.bet == 0 {
        return Err(ConfigError::Invalid(
            "bet must be >0".into(),
        ));
    }
    if cfg.starting_stack == 0 {
        return Err(ConfigError::Invalid(
            "starting_stack must be >0".into(),
        ));
    }
    Ok(())
}

fn parse_tie_table(s: &str) -> Option<TieTable> {
    match s.to_ascii_lowercase().as_str() {
        "9" | "nine_to_one" | "9:1" => Some(TieTable::NineToOne),
        "8" | "eight_to_one" | "8:1" => Some(TieTable::EightToOne),
        _ => None,
    }
}
