// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Deals hands for a game and reports what each hand holds.
use anyhow::Result;
use log::info;
use rand::{SeedableRng, rngs::StdRng};
use std::{fmt, io::Write};

use cardtable_cards::{
    BeloteHand, CardCollection, Dealt, Deck, Error, Hand, SixtySixHand, Suit, Variant, WarHand,
};

/// The games the dealer knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Game {
    /// War.
    War,
    /// Sixty-Six.
    SixtySix,
    /// Belote.
    Belote,
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Game::War => cardtable_cards::War::NAME,
            Game::SixtySix => cardtable_cards::SixtySix::NAME,
            Game::Belote => cardtable_cards::Belote::NAME,
        };

        write!(f, "{name}")
    }
}

/// Dealer configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// The game to deal.
    pub game: Game,
    /// Number of hands, all that the deck allows if not set.
    pub hands: Option<usize>,
    /// Seed for a repeatable shuffle.
    pub seed: Option<u64>,
    /// The trump suit.
    pub trump: Suit,
}

/// Shuffles a deck for the configured game, deals and writes the hands.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<()> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    info!("Dealing {} with {} trumps", config.game, config.trump);

    match config.game {
        Game::War => {
            for (idx, hand) in deal(config, &mut rng)?.iter().enumerate() {
                write_war(out, idx + 1, hand)?;
            }
        }
        Game::SixtySix => {
            for (idx, hand) in deal(config, &mut rng)?.iter().enumerate() {
                write_sixty_six(out, idx + 1, hand, config.trump)?;
            }
        }
        Game::Belote => {
            for (idx, hand) in deal(config, &mut rng)?.iter().enumerate() {
                write_belote(out, idx + 1, hand, config.trump)?;
            }
        }
    }

    Ok(())
}

/// Deals the configured number of hands from a shuffled deck.
fn deal<V: Dealt>(config: &Config, rng: &mut StdRng) -> Result<Vec<Hand<V>>> {
    let mut deck = Deck::<V>::new_and_shuffled(rng);

    let hands = match config.hands {
        Some(n) => (0..n).map(|_| deck.deal()).collect::<Result<Vec<_>, _>>()?,
        None => deck.deal_all(),
    };

    info!(
        "Dealt {} hands, {} cards left in the deck",
        hands.len(),
        deck.size()
    );

    Ok(hands)
}

fn write_hand<W: Write, V: Variant>(out: &mut W, idx: usize, hand: &Hand<V>) -> Result<()> {
    let mut sorted = hand.clone();
    writeln!(out, "Hand {idx} ({} cards)", sorted.size())?;
    writeln!(out, "{}", sorted.sort())?;
    Ok(())
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

fn write_war<W: Write>(out: &mut W, idx: usize, hand: &WarHand) -> Result<()> {
    write_hand(out, idx, hand)?;
    writeln!(out, "Face up: {}", yes_no(hand.allow_face_up()))?;
    writeln!(out)?;
    Ok(())
}

fn write_sixty_six<W: Write>(
    out: &mut W,
    idx: usize,
    hand: &SixtySixHand,
    trump: Suit,
) -> Result<()> {
    write_hand(out, idx, hand)?;
    writeln!(out, "Twenty: {}", yes_no(hand.twenty(trump)))?;
    writeln!(out, "Forty: {}", yes_no(hand.forty(trump)))?;
    writeln!(out)?;
    Ok(())
}

fn write_belote<W: Write>(out: &mut W, idx: usize, hand: &BeloteHand, trump: Suit) -> Result<()> {
    write_hand(out, idx, hand)?;
    writeln!(out, "Belote: {}", yes_no(hand.belote()))?;

    let carres = [
        ("jacks", hand.carre_of_jacks()),
        ("nines", hand.carre_of_nines()),
        ("aces", hand.carre_of_aces()),
    ]
    .into_iter()
    .filter_map(|(name, found)| found.then_some(name))
    .collect::<Vec<_>>();
    if !carres.is_empty() {
        writeln!(out, "Carre of {}", carres.join(", "))?;
    }

    // Only the longest run counts.
    if let Some(run) = hand.runs().last() {
        writeln!(out, "Run: {run}")?;
    }

    match hand.highest_of_suit(trump) {
        Ok(card) => writeln!(out, "Highest trump: {card}")?,
        Err(Error::EmptyCollection) => writeln!(out, "Highest trump: none")?,
        Err(e) => return Err(e.into()),
    }

    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardtable_cards::{Belote, Card, Rank};

    fn config(game: Game, hands: Option<usize>) -> Config {
        Config {
            game,
            hands,
            seed: Some(42),
            trump: Suit::Hearts,
        }
    }

    fn output(config: &Config) -> String {
        let mut out = Vec::new();
        run(config, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn seeded_deal_is_repeatable() {
        let cfg = config(Game::Belote, None);
        let first = output(&cfg);
        assert_eq!(first, output(&cfg));
        assert_eq!(first.matches("Hand ").count(), 4);
        assert_eq!(first.matches("(8 cards)").count(), 4);
    }

    #[test]
    fn war_halves() {
        let out = output(&config(Game::War, None));
        assert_eq!(out.matches("(26 cards)").count(), 2);
        assert_eq!(out.matches("Face up: no").count(), 2);
        assert_eq!(out.lines().filter(|l| l.contains(" of ")).count(), 52);
    }

    #[test]
    fn limited_hands() {
        let out = output(&config(Game::SixtySix, Some(2)));
        assert_eq!(out.matches("(6 cards)").count(), 2);
        assert!(out.contains("Forty: "));
    }

    #[test]
    fn too_many_hands() {
        let mut out = Vec::new();
        let err = run(&config(Game::SixtySix, Some(5)), &mut out).unwrap_err();
        assert_eq!(err.to_string(), "cannot deal 6 cards, only 0 left");
    }

    #[test]
    fn belote_report() {
        let hand = BeloteHand::new(
            [
                (Rank::Queen, Suit::Hearts),
                (Rank::King, Suit::Hearts),
                (Rank::Jack, Suit::Hearts),
                (Rank::Jack, Suit::Clubs),
                (Rank::Jack, Suit::Diamonds),
                (Rank::Jack, Suit::Spades),
            ]
            .into_iter()
            .map(|(r, s)| Belote::card(r, s).unwrap())
            .collect(),
        );

        let mut out = Vec::new();
        write_belote(&mut out, 1, &hand, Suit::Hearts).unwrap();
        let out = String::from_utf8(out).unwrap();

        let expected = "\
Hand 1 (6 cards)
Jack of Spades
King of Hearts
Queen of Hearts
Jack of Hearts
Jack of Diamonds
Jack of Clubs
Belote: yes
Carre of jacks
Run: Tierce
Highest trump: King of Hearts

";
        assert_eq!(out, expected);
        assert_eq!(hand.top_card().unwrap(), &Card::new(Rank::Queen, Suit::Hearts));
    }

    #[test]
    fn belote_report_without_trumps() {
        let hand = BeloteHand::new(
            [(Rank::Seven, Suit::Clubs), (Rank::Ace, Suit::Spades)]
                .into_iter()
                .map(|(r, s)| Belote::card(r, s).unwrap())
                .collect(),
        );

        let mut out = Vec::new();
        write_belote(&mut out, 2, &hand, Suit::Diamonds).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.starts_with("Hand 2 (2 cards)\nAce of Spades\n7 of Clubs\n"));
        assert!(out.contains("Belote: no\n"));
        assert!(out.ends_with("Highest trump: none\n\n"));
        assert!(!out.contains("Run: "));
    }
}
