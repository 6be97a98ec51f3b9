use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::catalog::{Charm, PowerPlay};

/// Active scoring modifiers owned by the caller.
///
/// The scorer only reads this; every update below returns a new state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifierState {
    #[serde(default)]
    pub active_charms: BTreeSet<Charm>,
    /// Remaining charges per active power-play
    #[serde(default)]
    pub active_power_plays: BTreeMap<PowerPlay, u32>,
    #[serde(default)]
    pub letter_multipliers: BTreeMap<char, u32>,
    #[serde(default)]
    pub word_multipliers_by_letter: BTreeMap<char, u32>,
}

impl ModifierState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_charm(mut self, charm: Charm) -> Self {
        self.active_charms.insert(charm);
        self
    }

    /// Activate a power-play with its catalog charges, replacing any leftover charges
    pub fn with_power_play(mut self, play: PowerPlay) -> Self {
        self.active_power_plays.insert(play, play.initial_charges());
        self
    }

    pub fn charges(&self, play: PowerPlay) -> Option<u32> {
        self.active_power_plays
            .get(&play)
            .copied()
            .filter(|charges| *charges > 0)
    }

    pub fn letter_multiplier(&self, letter: char) -> u32 {
        self.letter_multipliers
            .get(&letter.to_ascii_uppercase())
            .copied()
            .unwrap_or(1)
            .max(1)
    }

    /// Letter Upgrade: tiles of `letter` are worth twice as much as before
    pub fn with_letter_upgrade(mut self, letter: char) -> Self {
        let entry = self
            .letter_multipliers
            .entry(letter.to_ascii_uppercase())
            .or_insert(1);
        *entry = entry.saturating_mul(2);
        self
    }

    /// Polish: words containing `letter` score twice as much as before
    pub fn with_polish(mut self, letter: char) -> Self {
        let entry = self
            .word_multipliers_by_letter
            .entry(letter.to_ascii_uppercase())
            .or_insert(1);
        *entry = entry.saturating_mul(2);
        self
    }

    /// Spend one charge of each listed power-play, dropping exhausted ones
    pub fn consume(mut self, consumed: &[PowerPlay]) -> Self {
        for play in consumed {
            let exhausted = match self.active_power_plays.get_mut(play) {
                Some(charges) => {
                    *charges = charges.saturating_sub(1);
                    *charges == 0
                }
                None => false,
            };
            if exhausted {
                self.active_power_plays.remove(play);
            }
        }
        self
    }
}
