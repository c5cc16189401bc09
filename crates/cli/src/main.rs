// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cardtable command line dealer.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use clap::Parser;
use log::error;

use cardtable_cards::Suit;

pub mod dealer;

use dealer::{Config, Game};

#[derive(Debug, Parser)]
struct Cli {
    /// The game to deal.
    #[clap(long, short, value_enum, default_value_t = Game::Belote)]
    game: Game,
    /// Number of hands to deal, all that the deck allows if not set.
    #[clap(long)]
    hands: Option<usize>,
    /// Seed for a repeatable shuffle.
    #[clap(long, short)]
    seed: Option<u64>,
    /// The trump suit.
    #[clap(long, short, default_value = "hearts")]
    trump: Suit,
    /// Enable debug logs.
    #[clap(long, short)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let config = Config {
        game: cli.game,
        hands: cli.hands,
        seed: cli.seed,
        trump: cli.trump,
    };

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = dealer::run(&config, &mut stdout) {
        error!("{e}");
        std::process::exit(1);
    }
}
