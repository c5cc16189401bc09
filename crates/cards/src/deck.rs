// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Decks for each game variant.
use log::debug;
use std::{fmt, marker::PhantomData, sync::Arc};

use crate::{
    card::{Card, Suit},
    collection::{CardCollection, Listing},
    error::{Error, Result},
    hand::Hand,
    variant::{Belote, Dealt, SixtySix, Standard, Variant, War},
};

/// A cards deck for the variant `V`.
pub struct Deck<V: Variant = Standard> {
    cards: Vec<Card>,
    _variant: PhantomData<V>,
}

/// The standard 52 cards deck.
pub type StandardDeck = Deck<Standard>;
/// A War deck.
pub type WarDeck = Deck<War>;
/// A Sixty-Six deck.
pub type SixtySixDeck = Deck<SixtySix>;
/// A Belote deck.
pub type BeloteDeck = Deck<Belote>;

impl<V: Variant> Deck<V> {
    /// Number of cards in a full deck.
    pub const SIZE: usize = V::RANKS.len() * Suit::STANDARD.len();

    /// Creates a full unshuffled deck.
    pub fn new() -> Self {
        Self::from_cards(Self::generate())
    }

    /// Creates a deck with the given cards, the first card is the top one.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards,
            _variant: PhantomData,
        }
    }

    /// Creates a full shuffled deck.
    pub fn new_and_shuffled<R: rand::Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::new();
        deck.shuffle_with(rng);
        debug!("Shuffled {} deck with {} cards", V::NAME, deck.size());
        deck
    }

    /// Generates all the variant cards, for each rank in order all the suits
    /// of the variant ordering.
    pub fn generate() -> Vec<Card> {
        let ordering = Arc::new(V::ordering());
        let mut cards = Vec::with_capacity(Self::SIZE);

        for rank_index in 0..ordering.ranks().len() {
            for suit_index in 0..ordering.suits().len() {
                cards.push(Card::at(&ordering, rank_index, suit_index));
            }
        }

        cards
    }
}

impl<V: Dealt> Deck<V> {
    /// Deals a hand taking cards from the top of the deck.
    ///
    /// Fails with [Error::InsufficientCards] leaving the deck untouched if
    /// there are not enough cards for a hand.
    pub fn deal(&mut self) -> Result<Hand<V>> {
        if self.cards.len() < V::HAND_SIZE {
            return Err(Error::InsufficientCards {
                needed: V::HAND_SIZE,
                available: self.cards.len(),
            });
        }

        let hand = self.cards.drain(..V::HAND_SIZE).collect::<Vec<_>>();
        debug!(
            "Dealt {} hand of {} cards, {} cards left",
            V::NAME,
            hand.len(),
            self.cards.len()
        );

        Ok(Hand::new(hand))
    }

    /// Deals hands until there are not enough cards left.
    pub fn deal_all(&mut self) -> Vec<Hand<V>> {
        let mut hands = Vec::with_capacity(self.cards.len() / V::HAND_SIZE);
        while let Ok(hand) = self.deal() {
            hands.push(hand);
        }
        hands
    }
}

impl<V: Variant> CardCollection for Deck<V> {
    fn cards(&self) -> &[Card] {
        &self.cards
    }

    fn cards_mut(&mut self) -> &mut Vec<Card> {
        &mut self.cards
    }
}

impl<V: Variant> Default for Deck<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Variant> Clone for Deck<V> {
    fn clone(&self) -> Self {
        Self::from_cards(self.cards.clone())
    }
}

impl<V: Variant> fmt::Debug for Deck<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deck")
            .field("variant", &V::NAME)
            .field("cards", &self.cards)
            .finish()
    }
}

impl<V: Variant> fmt::Display for Deck<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Listing(&self.cards))
    }
}

impl<V: Variant> IntoIterator for Deck<V> {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl<'a, V: Variant> IntoIterator for &'a Deck<V> {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
