use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::utils::letters::{get_letter_value, is_vowel};

/// A single letter tile held in a hand or a submitted word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub id: Uuid,
    pub letter: char,
    pub base_points: u32,
    /// Tile-carried word multiplier (1 for plain tiles)
    #[serde(default = "default_multiplier")]
    pub multiplier: u32,
    /// Temporary value that replaces `base_points` while set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temp_points: Option<u32>,
    #[serde(default)]
    pub is_super: bool,
    #[serde(default)]
    pub is_duplicate: bool,
}

fn default_multiplier() -> u32 {
    1
}

/// A rack slot, empty once its tile has been played
pub type Slot = Option<Tile>;

impl Tile {
    pub fn new(id: Uuid, letter: char) -> Self {
        let letter = letter.to_ascii_uppercase();
        Self {
            id,
            letter,
            base_points: get_letter_value(letter),
            multiplier: 1,
            temp_points: None,
            is_super: false,
            is_duplicate: false,
        }
    }

    /// Create a tile whose id comes from the given random source
    pub fn with_random_id(letter: char, rng: &mut impl Rng) -> Self {
        Self::new(tile_id(rng), letter)
    }

    pub fn with_multiplier(mut self, multiplier: u32) -> Self {
        self.multiplier = multiplier.max(1);
        self
    }

    /// Point value before any modifier is applied
    pub fn points(&self) -> u32 {
        self.temp_points.unwrap_or(self.base_points)
    }

    pub fn is_vowel(&self) -> bool {
        is_vowel(self.letter)
    }
}

/// Build a v4-style id from the injected random source so seeded runs replay exactly
pub fn tile_id(rng: &mut impl Rng) -> Uuid {
    uuid::Builder::from_random_bytes(rng.random()).into_uuid()
}

/// Iterate the tiles in occupied slots
pub fn occupied(hand: &[Slot]) -> impl Iterator<Item = &Tile> + '_ {
    hand.iter().flatten()
}

/// Letters of the occupied slots, in slot order
pub fn hand_letters(hand: &[Slot]) -> String {
    occupied(hand).map(|tile| tile.letter).collect()
}
