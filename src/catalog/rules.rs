use crate::utils::letters::is_vowel;

/// A condition on the submitted word, evaluated on its uppercase letters
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WordPredicate {
    Always,
    MinLength(usize),
    ExactLength(usize),
    EvenLength,
    ContainsAny(&'static [char]),
    ContainsAll(&'static [char]),
    StartsOrEndsWithAny(&'static [char]),
    EndsWith(&'static str),
    EndsWithVowel,
    LetterAtLeast(char, usize),
    DistinctVowelsAtLeast(usize),
    ExactConsonants(usize),
    NoVowels,
    Palindrome,
    SameFirstAndLast,
    AnyOf(&'static [WordPredicate]),
}

impl WordPredicate {
    pub fn matches(&self, word: &str) -> bool {
        let letters: Vec<char> = word.chars().map(|c| c.to_ascii_uppercase()).collect();

        match self {
            Self::Always => true,
            Self::MinLength(min) => letters.len() >= *min,
            Self::ExactLength(len) => letters.len() == *len,
            Self::EvenLength => letters.len() % 2 == 0,
            Self::ContainsAny(set) => letters.iter().any(|c| set.contains(c)),
            Self::ContainsAll(set) => set.iter().all(|c| letters.contains(c)),
            Self::StartsOrEndsWithAny(set) => {
                letters.first().is_some_and(|c| set.contains(c))
                    || letters.last().is_some_and(|c| set.contains(c))
            }
            Self::EndsWith(suffix) => {
                let upper: String = letters.iter().collect();
                upper.ends_with(suffix)
            }
            Self::EndsWithVowel => letters.last().is_some_and(|c| is_vowel(*c)),
            Self::LetterAtLeast(letter, min) => {
                letters.iter().filter(|c| *c == letter).count() >= *min
            }
            Self::DistinctVowelsAtLeast(min) => {
                let mut seen: Vec<char> = letters.iter().copied().filter(|c| is_vowel(*c)).collect();
                seen.sort_unstable();
                seen.dedup();
                seen.len() >= *min
            }
            Self::ExactConsonants(count) => {
                letters.iter().filter(|c| !is_vowel(**c)).count() == *count
            }
            Self::NoVowels => !letters.iter().any(|c| is_vowel(*c)),
            Self::Palindrome => letters.len() > 1 && letters.iter().eq(letters.iter().rev()),
            Self::SameFirstAndLast => letters.len() > 1 && letters.first() == letters.last(),
            Self::AnyOf(predicates) => predicates.iter().any(|p| p.matches(word)),
        }
    }
}

/// Which tiles a per-tile rule counts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileFilter {
    Vowel,
    Letter(char),
}

impl TileFilter {
    pub fn accepts(&self, letter: char) -> bool {
        match self {
            Self::Vowel => is_vowel(letter),
            Self::Letter(wanted) => letter.eq_ignore_ascii_case(wanted),
        }
    }
}

/// Declarative scoring behaviour of a charm or power-play.
///
/// The scorer walks these variants in pipeline order; catalog entries
/// never run code of their own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScoringRule {
    /// Every tile of `letter` is worth exactly `points`
    LetterValue { letter: char, points: u32 },
    /// Tiles worth less than `points` are raised to it
    MinimumValue { points: u32 },
    /// Flat bonus for every tile passing the filter
    PerTile { filter: TileFilter, points: u32 },
    /// Adds `factor` times the resolved value of the last tile
    LastTileBonus { factor: u32 },
    /// Adds `factor` times the raw value of every vowel tile when the word matches
    VowelValueBonus { when: WordPredicate, factor: u32 },
    FlatBonus { when: WordPredicate, points: u32 },
    WordMultiplier { when: WordPredicate, factor: f64 },
    /// Multiplier that depends on how many charges are left
    ChargedMultiplier { full_charges: u32, first: f64, later: f64 },
    /// One roll per word: multiply by `factor` with probability `chance`
    ChanceMultiplier { chance: f64, factor: f64 },
    /// One roll per word: `bonus` with probability `bonus_chance`, `penalty`
    /// with the following `penalty_chance`, nothing otherwise
    ChanceAdjustment {
        bonus_chance: f64,
        bonus: i64,
        penalty_chance: f64,
        penalty: i64,
    },
    /// One roll per word: multiply by `factor` or drop to zero
    DoubleOrNothing { win_chance: f64, factor: f64 },
    FixedScore { points: u32 },
    Sacrifice,
}
