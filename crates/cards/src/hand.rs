// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hands dealt from a deck.
//!
//! A [Hand] is generic over the game variant, each game adds its own
//! queries in the `war`, `sixty_six` and `belote` modules.
use std::{fmt, marker::PhantomData};

use crate::{
    card::Card,
    collection::{CardCollection, Listing},
    variant::{Belote, SixtySix, Variant, War},
};

mod belote;
mod sixty_six;
mod war;

pub use belote::Run;

/// A hand of cards for the variant `V`.
pub struct Hand<V: Variant> {
    cards: Vec<Card>,
    _variant: PhantomData<V>,
}

/// A War hand.
pub type WarHand = Hand<War>;
/// A Sixty-Six hand.
pub type SixtySixHand = Hand<SixtySix>;
/// A Belote hand.
pub type BeloteHand = Hand<Belote>;

impl<V: Variant> Hand<V> {
    /// Creates a hand with the given cards, the first card is the top one.
    pub fn new(cards: Vec<Card>) -> Self {
        Self {
            cards,
            _variant: PhantomData,
        }
    }
}

impl<V: Variant> CardCollection for Hand<V> {
    fn cards(&self) -> &[Card] {
        &self.cards
    }

    fn cards_mut(&mut self) -> &mut Vec<Card> {
        &mut self.cards
    }
}

impl<V: Variant> Clone for Hand<V> {
    fn clone(&self) -> Self {
        Self::new(self.cards.clone())
    }
}

impl<V: Variant> From<Vec<Card>> for Hand<V> {
    fn from(cards: Vec<Card>) -> Self {
        Self::new(cards)
    }
}

impl<V: Variant> fmt::Debug for Hand<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hand")
            .field("variant", &V::NAME)
            .field("cards", &self.cards)
            .finish()
    }
}

impl<V: Variant> fmt::Display for Hand<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Listing(&self.cards))
    }
}

impl<V: Variant> IntoIterator for Hand<V> {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl<'a, V: Variant> IntoIterator for &'a Hand<V> {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
