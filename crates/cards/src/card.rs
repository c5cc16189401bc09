// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards, ranks, suits and the orderings used to compare them.
use serde::{Deserialize, Serialize};
use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
    sync::{Arc, LazyLock},
};

use crate::error::{Error, Result};

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Two
    Two,
    /// Three
    Three,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// The standard ranks from lowest to highest.
    pub const STANDARD: [Rank; 13] = {
        use Rank::*;
        [
            Two, Three, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
    };

    /// Returns all ranks in standard order.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        Self::STANDARD.into_iter()
    }

    /// Short symbol for this rank.
    pub fn symbol(&self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
            Rank::Ace => "Ace",
        };

        write!(f, "{rank}")
    }
}

impl FromStr for Rank {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let text = s.trim().to_ascii_lowercase();
        let rank = match text.as_str() {
            "2" => Rank::Two,
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" | "t" => Rank::Ten,
            "jack" | "j" => Rank::Jack,
            "queen" | "q" => Rank::Queen,
            "king" | "k" => Rank::King,
            "ace" | "a" => Rank::Ace,
            _ => return Err(Error::UnknownSymbol(s.to_string())),
        };

        Ok(rank)
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit.
    Clubs,
    /// Diamonds suit.
    Diamonds,
    /// Hearts suit.
    Hearts,
    /// Spades suit.
    Spades,
}

impl Suit {
    /// The standard suits from lowest to highest.
    pub const STANDARD: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Returns all suits in standard order.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        Self::STANDARD.into_iter()
    }

    /// Short symbol for this suit.
    pub fn symbol(&self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => "Clubs",
            Suit::Diamonds => "Diamonds",
            Suit::Hearts => "Hearts",
            Suit::Spades => "Spades",
        };

        write!(f, "{suit}")
    }
}

impl FromStr for Suit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let text = s.trim().to_ascii_lowercase();
        let suit = match text.as_str() {
            "clubs" | "c" => Suit::Clubs,
            "diamonds" | "d" => Suit::Diamonds,
            "hearts" | "h" => Suit::Hearts,
            "spades" | "s" => Suit::Spades,
            _ => return Err(Error::UnknownSymbol(s.to_string())),
        };

        Ok(suit)
    }
}

/// The ranks and suits sequences that define how cards compare.
///
/// Positions are priorities: a rank or suit later in its sequence is higher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderingContext {
    ranks: Vec<Rank>,
    suits: Vec<Suit>,
}

static STANDARD_ORDERING: LazyLock<Arc<OrderingContext>> =
    LazyLock::new(|| Arc::new(OrderingContext::standard()));

impl OrderingContext {
    /// Creates an ordering from ranks and suits sequences.
    pub fn new(ranks: Vec<Rank>, suits: Vec<Suit>) -> Self {
        Self { ranks, suits }
    }

    /// The 13 standard ranks and 4 standard suits ordering.
    pub fn standard() -> Self {
        Self::new(Rank::STANDARD.to_vec(), Suit::STANDARD.to_vec())
    }

    /// An ordering with the given ranks and the standard suits.
    pub fn with_ranks(ranks: &[Rank]) -> Self {
        Self::new(ranks.to_vec(), Suit::STANDARD.to_vec())
    }

    /// The shared standard ordering used by cards built without one.
    pub fn shared_standard() -> Arc<OrderingContext> {
        STANDARD_ORDERING.clone()
    }

    /// The ranks from lowest to highest.
    pub fn ranks(&self) -> &[Rank] {
        &self.ranks
    }

    /// The suits from lowest to highest.
    pub fn suits(&self) -> &[Suit] {
        &self.suits
    }

    /// Position of a rank in this ordering.
    pub fn rank_index(&self, rank: Rank) -> Option<usize> {
        self.ranks.iter().position(|r| *r == rank)
    }

    /// Position of a suit in this ordering.
    pub fn suit_index(&self, suit: Suit) -> Option<usize> {
        self.suits.iter().position(|s| *s == suit)
    }

    /// Checks if both rank and suit belong to this ordering.
    pub fn contains(&self, rank: Rank, suit: Suit) -> bool {
        self.ranks.contains(&rank) && self.suits.contains(&suit)
    }
}

impl Default for OrderingContext {
    fn default() -> Self {
        Self::standard()
    }
}

/// A playing card.
///
/// A card remembers the [OrderingContext] it was built with and caches the
/// positions of its rank and suit in it. Cards are ordered by suit first and
/// by rank second.
///
/// Equality and hashing only look at rank and suit, while ordering uses the
/// cached positions: cards built with different orderings must not be
/// compared (see [Card::shares_ordering]), the result is not a total order
/// and debug builds panic.
#[derive(Clone)]
pub struct Card {
    rank: Rank,
    suit: Suit,
    rank_index: usize,
    suit_index: usize,
    ordering: Arc<OrderingContext>,
}

impl Card {
    /// Create a card with the standard ordering.
    pub fn new(rank: Rank, suit: Suit) -> Card {
        // Variants are declared in standard order.
        Self {
            rank,
            suit,
            rank_index: rank as usize,
            suit_index: suit as usize,
            ordering: OrderingContext::shared_standard(),
        }
    }

    /// Create a card with the given ordering.
    ///
    /// Fails with [Error::InvalidCard] if the rank or the suit are not part
    /// of the ordering.
    pub fn with_ordering(rank: Rank, suit: Suit, ordering: Arc<OrderingContext>) -> Result<Card> {
        match (ordering.rank_index(rank), ordering.suit_index(suit)) {
            (Some(rank_index), Some(suit_index)) => Ok(Self {
                rank,
                suit,
                rank_index,
                suit_index,
                ordering,
            }),
            _ => Err(Error::InvalidCard { rank, suit }),
        }
    }

    /// Creates the card at the given positions of an ordering.
    pub(crate) fn at(
        ordering: &Arc<OrderingContext>,
        rank_index: usize,
        suit_index: usize,
    ) -> Card {
        Self {
            rank: ordering.ranks()[rank_index],
            suit: ordering.suits()[suit_index],
            rank_index,
            suit_index,
            ordering: ordering.clone(),
        }
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// The ordering this card was built with.
    pub fn ordering(&self) -> &Arc<OrderingContext> {
        &self.ordering
    }

    /// The ranks order this card was built with.
    pub fn rank_order(&self) -> &[Rank] {
        self.ordering.ranks()
    }

    /// The suits order this card was built with.
    pub fn suit_order(&self) -> &[Suit] {
        self.ordering.suits()
    }

    /// Position of this card rank in its ordering.
    pub fn rank_index(&self) -> usize {
        self.rank_index
    }

    /// Position of this card suit in its ordering.
    pub fn suit_index(&self) -> usize {
        self.suit_index
    }

    /// Checks if this card and `other` were built with the same ordering.
    pub fn shares_ordering(&self, other: &Card) -> bool {
        Arc::ptr_eq(&self.ordering, &other.ordering) || self.ordering == other.ordering
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank && self.suit == other.suit
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank.hash(state);
        self.suit.hash(state);
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        if self == other {
            return Ordering::Equal;
        }

        debug_assert!(
            self.shares_ordering(other),
            "comparing {self:?} and {other:?} with different orderings"
        );

        self.suit_index
            .cmp(&other.suit_index)
            .then(self.rank_index.cmp(&other.rank_index))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank.symbol(), self.suit.symbol())
    }
}
