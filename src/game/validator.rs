use std::collections::HashMap;

use thiserror::Error;

use crate::models::Tile;

/// Why a submission was rejected before scoring
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("word must be at least {min} letters, got {actual}")]
    TooShort { min: usize, actual: usize },

    #[error("word contains a non-letter character: {0:?}")]
    InvalidCharacter(char),

    #[error("word {word} does not match the submitted tiles {tiles}")]
    NotFormable { word: String, tiles: String },
}

pub struct WordValidator {
    min_word_length: usize,
}

impl WordValidator {
    pub fn new(min_word_length: usize) -> Self {
        Self { min_word_length }
    }

    pub fn min_word_length(&self) -> usize {
        self.min_word_length
    }

    /// Check that `word` spells out exactly the submitted tiles, in order,
    /// and is long enough to be scored
    pub fn validate_submission(&self, word: &str, tiles: &[Tile]) -> Result<(), SubmissionError> {
        if let Some(bad) = word.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(SubmissionError::InvalidCharacter(bad));
        }

        let length = word.chars().count();
        if length < self.min_word_length {
            return Err(SubmissionError::TooShort {
                min: self.min_word_length,
                actual: length,
            });
        }

        let spelled = Self::extract_word(tiles);
        if spelled != word.to_ascii_uppercase() {
            return Err(SubmissionError::NotFormable {
                word: word.to_ascii_uppercase(),
                tiles: spelled,
            });
        }

        Ok(())
    }

    /// Extract word from tiles
    pub fn extract_word(tiles: &[Tile]) -> String {
        tiles.iter().map(|tile| tile.letter.to_ascii_uppercase()).collect()
    }
}

/// Letter multiset of an iterator of letters
fn letter_counts(letters: impl IntoIterator<Item = char>) -> HashMap<char, usize> {
    let mut counts = HashMap::new();
    for letter in letters {
        *counts.entry(letter.to_ascii_uppercase()).or_insert(0) += 1;
    }
    counts
}

/// Whether every letter of `word` can be taken from the given letters,
/// each letter used at most as often as it appears
pub fn can_form_from_letters(word: &str, letters: impl IntoIterator<Item = char>) -> bool {
    let mut available = letter_counts(letters);

    for ch in word.chars().map(|c| c.to_ascii_uppercase()) {
        match available.get_mut(&ch) {
            Some(count) if *count > 0 => *count -= 1,
            _ => return false,
        }
    }

    true
}

pub fn can_form_word(word: &str, tiles: &[Tile]) -> bool {
    can_form_from_letters(word, tiles.iter().map(|tile| tile.letter))
}
