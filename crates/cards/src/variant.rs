// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Game variants.
//!
//! A variant is the configuration that tells decks and hands apart: the
//! legal ranks in game priority order and, for games that deal hands, the
//! hand size. Adding a game means adding a marker type with these values.
use std::sync::Arc;

use crate::{
    card::{Card, OrderingContext, Rank, Suit},
    error::Result,
};

/// A cards game rank universe.
pub trait Variant {
    /// The game name.
    const NAME: &'static str;

    /// The legal ranks from lowest to highest priority.
    const RANKS: &'static [Rank];

    /// The ordering for this game cards.
    fn ordering() -> OrderingContext {
        OrderingContext::with_ranks(Self::RANKS)
    }

    /// Creates a card that compares with this game ranks priority.
    fn card(rank: Rank, suit: Suit) -> Result<Card> {
        Card::with_ordering(rank, suit, Arc::new(Self::ordering()))
    }
}

/// A variant whose decks deal fixed size hands.
pub trait Dealt: Variant {
    /// Number of cards in a dealt hand.
    const HAND_SIZE: usize;
}

/// The standard 52 cards deck.
#[derive(Debug, Clone, Copy, Default)]
pub struct Standard;

impl Variant for Standard {
    const NAME: &'static str = "Standard";
    const RANKS: &'static [Rank] = &Rank::STANDARD;
}

/// The War game, the deck is split in two halves.
#[derive(Debug, Clone, Copy, Default)]
pub struct War;

impl Variant for War {
    const NAME: &'static str = "War";
    const RANKS: &'static [Rank] = &Rank::STANDARD;
}

impl Dealt for War {
    const HAND_SIZE: usize = 26;
}

/// The Sixty-Six game.
#[derive(Debug, Clone, Copy, Default)]
pub struct SixtySix;

impl Variant for SixtySix {
    const NAME: &'static str = "Sixty-Six";
    const RANKS: &'static [Rank] = &[
        Rank::Nine,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ten,
        Rank::Ace,
    ];
}

impl Dealt for SixtySix {
    const HAND_SIZE: usize = 6;
}

/// The Belote game.
#[derive(Debug, Clone, Copy, Default)]
pub struct Belote;

impl Variant for Belote {
    const NAME: &'static str = "Belote";
    const RANKS: &'static [Rank] = &[
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ten,
        Rank::Ace,
    ];
}

impl Dealt for Belote {
    const HAND_SIZE: usize = 8;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn variant_cards() {
        let ten = SixtySix::card(Rank::Ten, Suit::Hearts).unwrap();
        let king = SixtySix::card(Rank::King, Suit::Hearts).unwrap();
        assert!(ten > king);
        assert!(ten.shares_ordering(&king));

        assert_eq!(
            SixtySix::card(Rank::Eight, Suit::Hearts).unwrap_err(),
            Error::InvalidCard {
                rank: Rank::Eight,
                suit: Suit::Hearts
            }
        );
        assert!(Belote::card(Rank::Eight, Suit::Hearts).is_ok());
        assert!(War::card(Rank::Two, Suit::Clubs).is_ok());
        assert_eq!(Standard::ordering(), OrderingContext::standard());
    }
}
