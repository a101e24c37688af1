//! poker-eval: five-card poker hand evaluation
//!
//! Goals:
//! - Classify any five cards into one of ten categories, high card through royal flush
//! - A complete, deterministic order between hands of the same category
//! - Best-of-N search over larger card pools (e.g. 5 of 7)
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: compare two hands
//! ```
//! use poker_eval::cards::{Card, Rank, Suit};
//! use poker_eval::evaluator::{compare, HandRanking};
//! use poker_eval::hand::Hand;
//! use std::cmp::Ordering;
//!
//! let aces_full = Hand::new([
//!     Card::new(Rank::Ace, Suit::Spades),
//!     Card::new(Rank::Ace, Suit::Diamonds),
//!     Card::new(Rank::Ace, Suit::Clubs),
//!     Card::new(Rank::King, Suit::Spades),
//!     Card::new(Rank::King, Suit::Diamonds),
//! ]);
//! let kings_full = Hand::new([
//!     Card::new(Rank::King, Suit::Clubs),
//!     Card::new(Rank::King, Suit::Hearts),
//!     Card::new(Rank::King, Suit::Diamonds),
//!     Card::new(Rank::Queen, Suit::Spades),
//!     Card::new(Rank::Queen, Suit::Hearts),
//! ]);
//!
//! assert_eq!(aces_full.ranking(), HandRanking::FullHouse);
//! assert_eq!(compare(&aces_full, &kings_full), Ordering::Greater);
//! ```
//!
//! ## Simulation
//! Deal random heads-up trials with:
//! ```sh
//! cargo run --bin poker-sim -- --trials 1000 --seed 42
//! ```

pub mod cards;
pub mod deck;
pub mod evaluator;
pub mod hand;
pub mod simulation;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
