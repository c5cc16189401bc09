// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! War hand queries.
use super::WarHand;
use crate::{card::Card, collection::CardCollection, error::Result};

impl WarHand {
    /// Cards left at or below which they are played face up.
    pub const FACE_UP_LIMIT: usize = 3;

    /// Checks if the remaining cards must be played face up.
    pub fn allow_face_up(&self) -> bool {
        self.size() <= Self::FACE_UP_LIMIT
    }

    /// Plays the top card.
    pub fn play_card(&mut self) -> Result<Card> {
        self.draw_top()
    }
}
