//! # croupier-engine: Table Game Rule Engines
//!
//! Rule engines for Blackjack, Baccarat and Ultimate Texas Hold'em. The
//! engines decide hand values, legal actions, outcomes and payouts; callers
//! deal the cards and read the settled bet fields back.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and text parsing
//! - [`shoe`] - Multi-deck shoe with a seeded ChaCha20 shuffle
//! - [`blackjack`] - Ace resolution, dealer soft 17, actions, insurance, settlement
//! - [`baccarat`] - Third-card rules, winner determination, bet settlement
//! - [`uth`] - Ultimate Texas Hold'em stages, trips and ante/blind/play settlement
//! - [`poker`] - Best five of five to seven cards and head-to-head comparison
//! - [`payout`] - Exact rational multipliers over integer chips
//! - [`engine`] - Table drivers that run whole rounds from a shoe
//! - [`strategy`] - Unattended decision makers for the drivers
//! - [`rules`] - Table limits and wager validation
//! - [`bankroll`] - In-memory chip stack
//! - [`logger`] - Round events and JSONL round records
//! - [`errors`] - Error types for card parsing and table operations
//!
//! ## Quick Start
//!
//! ```rust
//! use croupier_engine::blackjack::{settle, BjHand, BjState};
//! use croupier_engine::cards::parse_cards;
//!
//! let mut player = BjHand::player(10);
//! let mut dealer = BjHand::dealer();
//! for c in parse_cards("As Kh").unwrap() {
//!     player.deal_card(c);
//! }
//! for c in parse_cards("9d 8c").unwrap() {
//!     dealer.deal_card(c);
//! }
//!
//! settle(&mut player, &dealer);
//! assert_eq!(player.state(), BjState::Won);
//! assert_eq!(player.bet(), 25);
//! ```
//!
//! ## Deterministic Rounds
//!
//! A seeded shoe always deals the same cards, so whole rounds replay:
//!
//! ```rust
//! use croupier_engine::engine::UthTable;
//! use croupier_engine::logger::RoundLogger;
//! use croupier_engine::strategy::UthBasicStrategy;
//!
//! let mut a = UthTable::seeded(42, RoundLogger::default());
//! let mut b = UthTable::seeded(42, RoundLogger::default());
//! let ra = a.play_round(10, 5, &UthBasicStrategy::new()).unwrap();
//! let rb = b.play_round(10, 5, &UthBasicStrategy::new()).unwrap();
//! assert_eq!(ra.record.hands, rb.record.hands);
//! assert_eq!(ra.record.returned, rb.record.returned);
//! ```

pub mod baccarat;
pub mod bankroll;
pub mod blackjack;
pub mod cards;
pub mod engine;
pub mod errors;
pub mod logger;
pub mod payout;
pub mod poker;
pub mod rules;
pub mod shoe;
pub mod strategy;
pub mod uth;
