use rand::{seq::SliceRandom, Rng};
use serde::{Deserialize, Serialize};

use crate::{
    models::Tile,
    utils::letters::{full_bag_size, TILE_DISTRIBUTION},
};

/// Chance that a freshly drawn tile carries a x2 word multiplier
pub const MULTIPLIER_TILE_CHANCE: f64 = 0.15;

/// Undrawn letters. Serialized as a plain array of letters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TileBag {
    letters: Vec<char>,
}

/// Tiles taken from a bag together with what is left of it
#[derive(Debug, Clone)]
pub struct Draw {
    pub tiles: Vec<Tile>,
    pub bag: TileBag,
    /// Number of complete distributions appended to satisfy the draw
    pub top_ups: usize,
}

impl TileBag {
    /// A complete distribution, shuffled
    pub fn full(rng: &mut impl Rng) -> Self {
        let mut letters = Vec::with_capacity(full_bag_size());
        for entry in TILE_DISTRIBUTION.iter() {
            letters.extend(std::iter::repeat(entry.letter).take(entry.count));
        }
        letters.shuffle(rng);

        Self { letters }
    }

    /// A bag holding exactly these letters, in this order
    pub fn from_letters(letters: impl IntoIterator<Item = char>) -> Self {
        Self {
            letters: letters
                .into_iter()
                .map(|c| c.to_ascii_uppercase())
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Append another complete shuffled distribution
    pub fn top_up(mut self, rng: &mut impl Rng) -> Self {
        let extra = Self::full(rng);
        self.letters.extend(extra.letters);
        tracing::debug!("Tile bag topped up to {} letters", self.letters.len());
        self
    }

    /// Draw `count` tiles from the front of the bag.
    /// A bag that is too small is topped up first, so draws never fail.
    pub fn draw(mut self, count: usize, rng: &mut impl Rng) -> Draw {
        let mut top_ups = 0;
        while self.letters.len() < count {
            self = self.top_up(rng);
            top_ups += 1;
        }

        let tiles = self
            .letters
            .drain(..count)
            .collect::<Vec<_>>()
            .into_iter()
            .map(|letter| draw_tile(letter, &mut *rng))
            .collect();

        Draw {
            tiles,
            bag: self,
            top_ups,
        }
    }

    /// Put letters back and reshuffle
    pub fn return_letters(mut self, letters: impl IntoIterator<Item = char>, rng: &mut impl Rng) -> Self {
        self.letters
            .extend(letters.into_iter().map(|c| c.to_ascii_uppercase()));
        self.letters.shuffle(rng);
        self
    }

    /// Remove the first letter accepted by `accept`.
    /// Tops the bag up once when nothing matches; `None` only if even a full
    /// distribution has no acceptable letter.
    pub fn take_matching(mut self, accept: impl Fn(char) -> bool, rng: &mut impl Rng) -> (Self, Option<char>) {
        if !self.letters.iter().any(|c| accept(*c)) {
            self = self.top_up(rng);
        }

        match self.letters.iter().position(|c| accept(*c)) {
            Some(index) => {
                let letter = self.letters.remove(index);
                (self, Some(letter))
            }
            None => (self, None),
        }
    }

    /// Return the given tiles' letters, then draw a fresh hand of `rack_size` tiles
    pub fn deal_hand(self, tiles_to_return: &[Tile], rack_size: usize, rng: &mut impl Rng) -> Draw {
        let bag = self.return_letters(tiles_to_return.iter().map(|tile| tile.letter), rng);
        bag.draw(rack_size, rng)
    }
}

/// Instantiate a drawn letter as a tile, rolling for a multiplier
pub fn draw_tile(letter: char, rng: &mut impl Rng) -> Tile {
    let tile = Tile::with_random_id(letter, rng);
    if rng.random_bool(MULTIPLIER_TILE_CHANCE) {
        tile.with_multiplier(2)
    } else {
        tile
    }
}
