// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Belote hand queries.
use std::fmt;

use super::BeloteHand;
use crate::{
    card::{Card, Rank, Suit},
    collection::CardCollection,
    error::Result,
};

/// A run of consecutive cards of the same suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Run {
    /// Three cards.
    Tierce,
    /// Four cards.
    Quarte,
    /// Five cards.
    Quint,
}

impl Run {
    /// Returns all runs from shortest to longest.
    pub fn runs() -> impl DoubleEndedIterator<Item = Run> {
        [Run::Tierce, Run::Quarte, Run::Quint].into_iter()
    }

    /// Number of cards in this run.
    pub fn count(&self) -> usize {
        match self {
            Run::Tierce => 3,
            Run::Quarte => 4,
            Run::Quint => 5,
        }
    }
}

impl fmt::Display for Run {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let run = match self {
            Run::Tierce => "Tierce",
            Run::Quarte => "Quarte",
            Run::Quint => "Quint",
        };

        write!(f, "{run}")
    }
}

impl BeloteHand {
    /// Returns the highest card of a suit.
    ///
    /// Fails with [Error::EmptyCollection](crate::Error::EmptyCollection)
    /// if the hand has no cards of this suit.
    pub fn highest_of_suit(&self, suit: Suit) -> Result<Card> {
        let cards = self.iter().filter(|c| c.suit() == suit).cloned().collect();
        BeloteHand::new(cards).sort().draw_top()
    }

    /// Checks for a queen and a king of the same suit.
    pub fn belote(&self) -> bool {
        Suit::suits().any(|s| self.contains(Rank::Queen, s) && self.contains(Rank::King, s))
    }

    /// Checks for four jacks.
    pub fn carre_of_jacks(&self) -> bool {
        self.carre_of(Rank::Jack)
    }

    /// Checks for four nines.
    pub fn carre_of_nines(&self) -> bool {
        self.carre_of(Rank::Nine)
    }

    /// Checks for four aces.
    pub fn carre_of_aces(&self) -> bool {
        self.carre_of(Rank::Ace)
    }

    /// Checks for three consecutive cards of the same suit.
    pub fn tierce(&self) -> bool {
        self.has_run(Run::Tierce)
    }

    /// Checks for four consecutive cards of the same suit.
    pub fn quarte(&self) -> bool {
        self.has_run(Run::Quarte)
    }

    /// Checks for five consecutive cards of the same suit.
    pub fn quint(&self) -> bool {
        self.has_run(Run::Quint)
    }

    /// All the runs found in this hand.
    pub fn runs(&self) -> Vec<Run> {
        Run::runs().filter(|r| self.has_run(*r)).collect()
    }

    fn carre_of(&self, rank: Rank) -> bool {
        self.count_rank(rank) == 4
    }

    /// Scans windows of the hand sorted from highest to lowest, a window is
    /// a run if it has a single suit and each rank is one step below the
    /// previous one in the game ordering.
    fn has_run(&self, run: Run) -> bool {
        let mut sorted = self.clone();
        sorted.sort();

        sorted.cards().windows(run.count()).any(|window| {
            let suit = window[0].suit();
            window.iter().all(|c| c.suit() == suit)
                && window
                    .windows(2)
                    .all(|pair| pair[0].rank_index() == pair[1].rank_index() + 1)
        })
    }
}
