// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards errors.
use crate::card::{Rank, Suit};

/// Errors reported by cards, decks and hands operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The rank or suit is not part of the card ordering.
    #[error("invalid card {rank} of {suit} for this ordering")]
    InvalidCard {
        /// The requested rank.
        rank: Rank,
        /// The requested suit.
        suit: Suit,
    },
    /// Peek or draw on a collection with no cards.
    #[error("the collection has no cards")]
    EmptyCollection,
    /// Not enough cards left in the deck to deal a hand.
    #[error("cannot deal {needed} cards, only {available} left")]
    InsufficientCards {
        /// The hand size.
        needed: usize,
        /// The cards left in the deck.
        available: usize,
    },
    /// Text that is not a rank or suit name.
    #[error("unknown rank or suit '{0}'")]
    UnknownSymbol(String),
}

/// Cards result type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        let e = Error::InvalidCard {
            rank: Rank::Two,
            suit: Suit::Hearts,
        };
        assert_eq!(e.to_string(), "invalid card 2 of Hearts for this ordering");

        let e = Error::InsufficientCards {
            needed: 8,
            available: 3,
        };
        assert_eq!(e.to_string(), "cannot deal 8 cards, only 3 left");
    }
}
