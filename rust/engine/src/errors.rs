use thiserror::Error;

/// Card text that does not name a real card. Cards come from trusted
/// internal sources, so callers propagate this rather than recover.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CardError {
    #[error("Invalid card rank: {0:?}")]
    InvalidRank(String),
    #[error("Invalid card suit: {0:?}")]
    InvalidSuit(String),
    #[error("Malformed card: {0:?}")]
    Malformed(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid wager: {amount}, minimum: {minimum}, maximum: {maximum}")]
    InvalidWager {
        amount: u64,
        minimum: u64,
        maximum: u64,
    },
    #[error("Insufficient chips for wager")]
    InsufficientChips,
    #[error("Shoe exhausted")]
    ShoeExhausted,
}
