// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cardtable cards types.
//!
//! This crate defines cards whose ordering depends on the game being played,
//! decks for the War, Sixty-Six and Belote games, and the hands they deal:
//!
//! ```
//! # use cardtable_cards::*;
//! let mut deck = BeloteDeck::new();
//! deck.shuffle();
//!
//! let hand = deck.deal().unwrap();
//! assert_eq!(hand.size(), 8);
//! assert_eq!(deck.size(), 24);
//! ```
//!
//! Cards compare by suit first and then by rank, with ranks ordered by the
//! game priority, so in Sixty-Six and Belote the ten beats the king:
//!
//! ```
//! # use cardtable_cards::*;
//! let ten = Belote::card(Rank::Ten, Suit::Hearts).unwrap();
//! let king = Belote::card(Rank::King, Suit::Hearts).unwrap();
//! assert!(ten > king);
//!
//! // Not a Sixty-Six card.
//! assert!(SixtySix::card(Rank::Seven, Suit::Hearts).is_err());
//! ```
//!
//! Decks and hands share the [CardCollection] operations, and render as one
//! card per line:
//!
//! ```
//! # use cardtable_cards::*;
//! let mut hand = SixtySixHand::new(vec![
//!     Card::new(Rank::Queen, Suit::Hearts),
//!     Card::new(Rank::King, Suit::Hearts),
//! ]);
//! assert!(hand.forty(Suit::Hearts));
//! assert_eq!(hand.sort().render(), "King of Hearts\nQueen of Hearts");
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod card;
pub mod collection;
pub mod deck;
pub mod error;
pub mod hand;
pub mod variant;

pub use card::{Card, OrderingContext, Rank, Suit};
pub use collection::{CardCollection, Listing};
pub use deck::{BeloteDeck, Deck, SixtySixDeck, StandardDeck, WarDeck};
pub use error::{Error, Result};
pub use hand::{BeloteHand, Hand, Run, SixtySixHand, WarHand};
pub use variant::{Belote, Dealt, SixtySix, Standard, Variant, War};
