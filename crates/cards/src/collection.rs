// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Operations shared by decks and hands.
//!
//! A collection is an ordered sequence of cards where the first card is the
//! top of the pile and the last card is the bottom.
use rand::prelude::*;
use std::fmt;

use crate::{
    card::{Card, Rank, Suit},
    error::{Error, Result},
};

/// A pile of cards owned by a deck or a hand.
///
/// Implementors only provide access to their cards storage, all the other
/// operations are provided.
pub trait CardCollection {
    /// The cards from top to bottom.
    fn cards(&self) -> &[Card];

    /// Mutable access to the cards storage.
    fn cards_mut(&mut self) -> &mut Vec<Card>;

    /// Number of cards left.
    fn size(&self) -> usize {
        self.cards().len()
    }

    /// Checks if there are no cards left.
    fn is_empty(&self) -> bool {
        self.cards().is_empty()
    }

    /// Peeks at the top card.
    fn top_card(&self) -> Result<&Card> {
        self.cards().first().ok_or(Error::EmptyCollection)
    }

    /// Peeks at the bottom card.
    fn bottom_card(&self) -> Result<&Card> {
        self.cards().last().ok_or(Error::EmptyCollection)
    }

    /// Removes and returns the top card.
    fn draw_top(&mut self) -> Result<Card> {
        let cards = self.cards_mut();
        if cards.is_empty() {
            Err(Error::EmptyCollection)
        } else {
            Ok(cards.remove(0))
        }
    }

    /// Removes and returns the bottom card.
    fn draw_bottom(&mut self) -> Result<Card> {
        self.cards_mut().pop().ok_or(Error::EmptyCollection)
    }

    /// Shuffles the cards using the thread random generator.
    fn shuffle(&mut self) {
        self.cards_mut().shuffle(&mut rand::rng());
    }

    /// Shuffles the cards using the given random generator.
    fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R)
    where
        Self: Sized,
    {
        self.cards_mut().shuffle(rng);
    }

    /// Sorts the cards so that the highest card is on top.
    fn sort(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self.cards_mut().sort_by(|a, b| b.cmp(a));
        self
    }

    /// Iterates the cards from top to bottom.
    fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards().iter()
    }

    /// Checks if the collection holds a card with the given rank and suit.
    fn contains(&self, rank: Rank, suit: Suit) -> bool {
        self.cards()
            .iter()
            .any(|c| c.rank() == rank && c.suit() == suit)
    }

    /// Number of cards with the given rank.
    fn count_rank(&self, rank: Rank) -> usize {
        self.cards().iter().filter(|c| c.rank() == rank).count()
    }

    /// The cards one per line, from top to bottom.
    fn render(&self) -> String {
        Listing(self.cards()).to_string()
    }
}

/// Formats cards one per line.
#[derive(Debug, Clone, Copy)]
pub struct Listing<'a>(pub &'a [Card]);

impl fmt::Display for Listing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, card) in self.0.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            write!(f, "{card}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;

    struct Pile(Vec<Card>);

    impl CardCollection for Pile {
        fn cards(&self) -> &[Card] {
            &self.0
        }

        fn cards_mut(&mut self) -> &mut Vec<Card> {
            &mut self.0
        }
    }

    fn pile() -> Pile {
        Pile(vec![
            Card::new(Rank::Queen, Suit::Hearts),
            Card::new(Rank::Two, Suit::Spades),
            Card::new(Rank::Ace, Suit::Clubs),
        ])
    }

    #[test]
    fn peek_and_draw() {
        let mut p = pile();
        assert_eq!(p.size(), 3);
        assert_eq!(p.top_card().unwrap(), &Card::new(Rank::Queen, Suit::Hearts));
        assert_eq!(p.bottom_card().unwrap(), &Card::new(Rank::Ace, Suit::Clubs));

        let top = p.draw_top().unwrap();
        assert_eq!(top, Card::new(Rank::Queen, Suit::Hearts));
        assert_eq!(p.size(), 2);
        assert!(!p.contains(Rank::Queen, Suit::Hearts));

        let bottom = p.draw_bottom().unwrap();
        assert_eq!(bottom, Card::new(Rank::Ace, Suit::Clubs));
        assert_eq!(p.size(), 1);
        assert_eq!(p.top_card().unwrap(), p.bottom_card().unwrap());
    }

    #[test]
    fn empty_collection() {
        let mut p = Pile(Vec::new());
        assert!(p.is_empty());
        assert_eq!(p.top_card().unwrap_err(), Error::EmptyCollection);
        assert_eq!(p.bottom_card().unwrap_err(), Error::EmptyCollection);
        assert_eq!(p.draw_top().unwrap_err(), Error::EmptyCollection);
        assert_eq!(p.draw_bottom().unwrap_err(), Error::EmptyCollection);
        assert_eq!(p.render(), "");
    }

    #[test]
    fn sort_descending() {
        let mut p = pile();
        let sorted = p.sort().iter().cloned().collect::<Vec<_>>();
        assert_eq!(
            sorted,
            vec![
                Card::new(Rank::Two, Suit::Spades),
                Card::new(Rank::Queen, Suit::Hearts),
                Card::new(Rank::Ace, Suit::Clubs),
            ]
        );
        assert!(sorted.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn shuffle_keeps_cards() {
        let mut p = Pile(
            Suit::suits()
                .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
                .collect(),
        );
        let mut before = p.cards().to_vec();

        p.shuffle_with(&mut StdRng::seed_from_u64(101));
        assert_eq!(p.size(), before.len());

        let mut after = p.cards().to_vec();
        before.sort();
        after.sort();
        assert_eq!(before, after);

        p.shuffle();
        assert_eq!(p.size(), 52);
    }

    #[test]
    fn render_lines() {
        let p = pile();
        assert_eq!(p.render(), "Queen of Hearts\n2 of Spades\nAce of Clubs");
        assert_eq!(p.count_rank(Rank::Two), 1);
        assert_eq!(p.count_rank(Rank::King), 0);
    }
}
