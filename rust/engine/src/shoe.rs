use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};

/// An ordered, consumable sequence of cards from one or more decks.
///
/// Engines only ever call [`Shoe::next_card`]; the shoe is built and shuffled
/// once by whoever owns the table.
#[derive(Debug, Clone)]
pub struct Shoe {
    cards: Vec<Card>,
    position: usize,
}

impl Shoe {
    /// Builds `decks` standard decks and shuffles them with a seeded ChaCha20.
    /// The same seed always yields the same order.
    pub fn new_with_seed(decks: u8, seed: u64) -> Self {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let mut cards = Vec::with_capacity(52 * decks as usize);
        for _ in 0..decks.max(1) {
            cards.extend(full_deck());
        }
        cards.shuffle(&mut rng);
        Self { cards, position: 0 }
    }

    /// A stacked shoe dealt in exactly the given order.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards, position: 0 }
    }

    pub fn next_card(&mut self) -> Option<Card> {
        let c = self.cards.get(self.position).copied()?;
        self.position += 1;
        Some(c)
    }

    pub fn burn_card(&mut self) {
        let _ = self.next_card();
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
