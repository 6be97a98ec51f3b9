use std::collections::HashMap;
use once_cell::sync::Lazy;

/// One row of the tile distribution table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterEntry {
    pub letter: char,
    pub points: u32,
    pub count: usize,
}

const fn entry(letter: char, points: u32, count: usize) -> LetterEntry {
    LetterEntry {
        letter,
        points,
        count,
    }
}

/// Scrabble tile counts and points, in alphabetical order.
/// Bag construction walks this table in order so seeded bags are reproducible.
pub const TILE_DISTRIBUTION: [LetterEntry; 26] = [
    entry('A', 1, 9),
    entry('B', 3, 2),
    entry('C', 3, 2),
    entry('D', 2, 4),
    entry('E', 1, 12),
    entry('F', 4, 2),
    entry('G', 2, 3),
    entry('H', 4, 2),
    entry('I', 1, 9),
    entry('J', 8, 1),
    entry('K', 5, 1),
    entry('L', 1, 4),
    entry('M', 3, 2),
    entry('N', 1, 6),
    entry('O', 1, 8),
    entry('P', 3, 2),
    entry('Q', 10, 1),
    entry('R', 1, 6),
    entry('S', 1, 4),
    entry('T', 1, 6),
    entry('U', 1, 4),
    entry('V', 4, 2),
    entry('W', 4, 2),
    entry('X', 8, 1),
    entry('Y', 4, 2),
    entry('Z', 10, 1),
];

pub const VOWELS: [char; 5] = ['A', 'E', 'I', 'O', 'U'];

/// Weight used for letters missing from the rarity table
const DEFAULT_RARITY_WEIGHT: u32 = 2;

static DISTRIBUTION_INDEX: Lazy<HashMap<char, LetterEntry>> = Lazy::new(|| {
    TILE_DISTRIBUTION
        .iter()
        .map(|entry| (entry.letter, *entry))
        .collect()
});

/// How much a letter counts against the hand weight cap.
/// Rare letters weigh more than common ones.
pub static RARITY_WEIGHTS: Lazy<HashMap<char, u32>> = Lazy::new(|| {
    let mut map = HashMap::new();

    for (weight, letters) in [
        (9, "Q"),
        (8, "Z"),
        (7, "JX"),
        (6, "K"),
        (5, "VW"),
        (4, "FHY"),
        (3, "BCMP"),
        (2, "GDLSTRN"),
        (1, "AEIOU"),
    ] {
        for ch in letters.chars() {
            map.insert(ch, weight);
        }
    }

    map
});

/// Number of letters in one complete bag
pub fn full_bag_size() -> usize {
    TILE_DISTRIBUTION.iter().map(|entry| entry.count).sum()
}

pub fn distribution_entry(letter: char) -> Option<&'static LetterEntry> {
    DISTRIBUTION_INDEX.get(&letter.to_ascii_uppercase())
}

/// Get the point value for a letter.
/// Letters outside the table are worth 1 point.
pub fn get_letter_value(letter: char) -> u32 {
    distribution_entry(letter).map_or(1, |entry| entry.points)
}

pub fn rarity_weight(letter: char) -> u32 {
    *RARITY_WEIGHTS
        .get(&letter.to_ascii_uppercase())
        .unwrap_or(&DEFAULT_RARITY_WEIGHT)
}

pub fn is_vowel(letter: char) -> bool {
    VOWELS.contains(&letter.to_ascii_uppercase())
}
