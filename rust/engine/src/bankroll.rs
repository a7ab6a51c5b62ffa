use serde::{Deserialize, Serialize};

use crate::errors::GameError;

/// Default starting stack in chips.
pub const STARTING_STACK: u64 = 1_000;

/// In-memory chip stack. Engines only rewrite bet fields; whoever runs the
/// table moves chips in and out of here.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct Bankroll {
    stack: u64,
}

impl Default for Bankroll {
    fn default() -> Self {
        Self::new(STARTING_STACK)
    }
}

impl Bankroll {
    pub fn new(stack: u64) -> Self {
        Self { stack }
    }

    pub fn stack(&self) -> u64 {
        self.stack
    }

    pub fn can_cover(&self, amount: u64) -> bool {
        amount <= self.stack
    }

    pub fn debit(&mut self, amount: u64) -> Result<(), GameError> {
        if amount > self.stack {
            return Err(GameError::InsufficientChips);
        }
        self.stack -= amount;
        Ok(())
    }

    pub fn credit(&mut self, amount: u64) {
        self.stack = self.stack.saturating_add(amount);
    }

    /// Applies a settled round: takes the total wagered, pays back the total
    /// returned.
    pub fn settle(&mut self, wagered: u64, returned: u64) -> Result<(), GameError> {
        self.debit(wagered)?;
        self.credit(returned);
        Ok(())
    }
}
