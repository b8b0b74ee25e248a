//! Playing-card deck and planar vector primitives with optional `no_std` support.
//!
//! The crate provides an immutable, ordered standard 52-card [`Deck`] with
//! random access, slicing, iteration, and uniform random choice, a
//! [`strength()`] ranking over cards, and a small planar [`Vector`] value
//! type with componentwise arithmetic.
//!
//! # Example
//!
//! ```
//! use deckplane::{Deck, strength};
//!
//! let deck = Deck::new();
//! assert_eq!(deck.len(), 52);
//!
//! let ascending = deck.sorted_by_key(|card| strength(*card));
//! assert_eq!(strength(ascending[51]), 51);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod strength;
pub mod vector;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{ChoiceError, IndexError};
pub use strength::{strength, suit_value};
pub use vector::Vector;
