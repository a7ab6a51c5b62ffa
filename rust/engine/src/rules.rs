use serde::{Deserialize, Serialize};

use crate::errors::GameError;

/// Table minimum and maximum for a single main bet.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct TableLimits {
    pub min_bet: u64,
    pub max_bet: u64,
}

impl Default for TableLimits {
    fn default() -> Self {
        Self {
            min_bet: 1,
            max_bet: 100_000,
        }
    }
}

/// Validates a wager against the table limits.
///
/// Returns the accepted amount unchanged. Rule functions downstream assume
/// the wager already passed this check.
///
/// # Errors
///
/// Returns [`GameError::InvalidWager`] when the amount is below
/// `min_bet` or above `max_bet`.
///
/// # Examples
///
/// ```
/// use croupier_engine::rules::{validate_wager, TableLimits};
///
/// let limits = TableLimits { min_bet: 5, max_bet: 500 };
/// assert_eq!(validate_wager(25, &limits), Ok(25));
/// ```
///
/// ```
/// use croupier_engine::errors::GameError;
/// use croupier_engine::rules::{validate_wager, TableLimits};
///
/// let limits = TableLimits { min_bet: 5, max_bet: 500 };
/// assert!(matches!(
///     validate_wager(1, &limits),
///     Err(GameError::InvalidWager { minimum: 5, .. })
/// ));
/// assert!(validate_wager(501, &limits).is_err());
/// ```
pub fn validate_wager(amount: u64, limits: &TableLimits) -> Result<u64, GameError> {
    let minimum = limits.min_bet.max(1);
    if amount < minimum || amount > limits.max_bet {
        return Err(GameError::InvalidWager {
            amount,
            minimum,
            maximum: limits.max_bet,
        });
    }
    Ok(amount)
}
