// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Sixty-Six hand queries.
use super::SixtySixHand;
use crate::{
    card::{Rank, Suit},
    collection::CardCollection,
};

impl SixtySixHand {
    /// Checks for a marriage in a suit other than the trump, worth 20.
    pub fn twenty(&self, trump: Suit) -> bool {
        Suit::suits()
            .filter(|s| *s != trump)
            .any(|s| self.has_marriage(s))
    }

    /// Checks for the trump marriage, worth 40.
    pub fn forty(&self, trump: Suit) -> bool {
        self.has_marriage(trump)
    }

    fn has_marriage(&self, suit: Suit) -> bool {
        self.contains(Rank::Queen, suit) && self.contains(Rank::King, suit)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        card::{Card, Rank, Suit},
        collection::CardCollection,
        hand::SixtySixHand,
    };

    fn hand(cards: &[(Rank, Suit)]) -> SixtySixHand {
        SixtySixHand::new(cards.iter().map(|&(r, s)| Card::new(r, s)).collect())
    }

    #[test]
    fn trump_marriage() {
        let h = hand(&[
            (Rank::Nine, Suit::Clubs),
            (Rank::Queen, Suit::Hearts),
            (Rank::Ten, Suit::Spades),
            (Rank::King, Suit::Hearts),
            (Rank::Ace, Suit::Diamonds),
            (Rank::Jack, Suit::Clubs),
        ]);

        assert!(h.forty(Suit::Hearts));
        assert!(!h.twenty(Suit::Hearts));

        assert!(!h.forty(Suit::Spades));
        assert!(h.twenty(Suit::Spades));
        assert_eq!(h.size(), 6);
    }

    #[test]
    fn split_marriage() {
        let h = hand(&[
            (Rank::Queen, Suit::Hearts),
            (Rank::King, Suit::Spades),
            (Rank::Queen, Suit::Spades),
            (Rank::King, Suit::Clubs),
            (Rank::Ace, Suit::Clubs),
            (Rank::Nine, Suit::Hearts),
        ]);

        assert!(!h.forty(Suit::Hearts));
        assert!(h.twenty(Suit::Hearts));
        assert!(h.forty(Suit::Spades));
        assert!(!h.twenty(Suit::Spades));
        assert!(!h.forty(Suit::Clubs));
    }

    #[test]
    fn no_marriage() {
        let h = hand(&[
            (Rank::Queen, Suit::Hearts),
            (Rank::King, Suit::Diamonds),
            (Rank::Queen, Suit::Clubs),
            (Rank::King, Suit::Spades),
        ]);

        for trump in Suit::suits() {
            assert!(!h.forty(trump));
            assert!(!h.twenty(trump));
        }

        let empty = SixtySixHand::new(Vec::new());
        assert!(!empty.forty(Suit::Hearts));
        assert!(!empty.twenty(Suit::Hearts));
    }
}
