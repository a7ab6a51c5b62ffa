use serde::{Deserialize, Serialize};

/// An exact payout multiplier, `numerator / denominator` of the stake.
///
/// Chips are integers; when a multiplier produces a fraction of a chip the
/// fraction is dropped.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Payout {
    pub numerator: u64,
    pub denominator: u64,
}

impl Payout {
    pub const ZERO: Payout = Payout::ratio(0, 1);
    pub const EVEN: Payout = Payout::ratio(1, 1);

    pub const fn ratio(numerator: u64, denominator: u64) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    pub const fn times(n: u64) -> Self {
        Self::ratio(n, 1)
    }

    pub fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    /// Profit on `stake`, floored.
    pub fn profit(&self, stake: u64) -> u64 {
        if self.denominator == 0 {
            return 0;
        }
        let wide = stake as u128 * self.numerator as u128 / self.denominator as u128;
        u64::try_from(wide).unwrap_or(u64::MAX)
    }

    /// Stake plus profit.
    pub fn with_stake(&self, stake: u64) -> u64 {
        stake.saturating_add(self.profit(stake))
    }

    pub fn as_f64(&self) -> f64 {
        if self.denominator == 0 {
            0.0
        } else {
            self.numerator as f64 / self.denominator as f64
        }
    }
}
