use std::collections::HashMap;

use rand::{seq::IndexedRandom, Rng};
use serde::{Deserialize, Serialize};

use crate::{
    dictionary::Dictionary,
    game::{bag::draw_tile, validator::can_form_from_letters, TileBag},
    models::{hand_letters, occupied, Slot, Tile},
    utils::letters::{is_vowel, rarity_weight},
};

/// Limits the repair pass enforces on a dealt hand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FairnessRules {
    pub rack_size: usize,
    /// Most copies of one letter a hand may hold
    pub duplicate_cap: usize,
    /// Highest total rarity weight a hand may carry
    pub weight_cap: u32,
    pub playability_retries: usize,
    /// Length of the reference words used for the playability check
    pub short_word_len: usize,
}

impl Default for FairnessRules {
    fn default() -> Self {
        Self {
            rack_size: 10,
            duplicate_cap: 3,
            weight_cap: 30,
            playability_retries: 3,
            short_word_len: 3,
        }
    }
}

/// Repaired hand and bag
#[derive(Debug, Clone)]
pub struct Repair {
    pub hand: Vec<Slot>,
    pub bag: TileBag,
    /// Whether any tile was swapped; for player messaging only
    pub was_changed: bool,
}

pub struct FairnessEngine<'a> {
    rules: FairnessRules,
    dictionary: &'a Dictionary,
}

impl<'a> FairnessEngine<'a> {
    pub fn new(rules: FairnessRules, dictionary: &'a Dictionary) -> Self {
        Self { rules, dictionary }
    }

    pub fn rules(&self) -> &FairnessRules {
        &self.rules
    }

    /// Run the four repair stages in order: playability, weight,
    /// duplicates, then vowel/consonant balance.
    ///
    /// Repairs swap tiles through the bag, so the number of occupied slots
    /// never changes. Every stage is bounded; a hand that cannot be fixed
    /// within its budget is accepted as it stands.
    pub fn repair_hand(&self, hand: Vec<Slot>, bag: TileBag, rng: &mut impl Rng) -> Repair {
        let mut state = Repair {
            hand,
            bag,
            was_changed: false,
        };

        self.ensure_playable(&mut state, rng);
        self.limit_weight(&mut state, rng);
        self.clear_duplicates(&mut state, rng);
        self.balance_vowels(&mut state, rng);

        if state.was_changed {
            tracing::debug!("Rack balanced for playability: {}", hand_letters(&state.hand));
        }

        state
    }

    /// Budget for stages that fix one tile per iteration
    fn iteration_budget(&self, hand: &[Slot]) -> usize {
        self.rules.rack_size.max(hand.len())
    }

    fn is_playable(&self, hand: &[Slot]) -> bool {
        let letters: Vec<char> = occupied(hand).map(|tile| tile.letter).collect();
        self.dictionary
            .short_words(self.rules.short_word_len)
            .any(|word| can_form_from_letters(word, letters.iter().copied()))
    }

    /// Stage A: swap random tiles until some short reference word can be
    /// formed. Best effort; gives up after the retry budget.
    fn ensure_playable(&self, state: &mut Repair, rng: &mut impl Rng) {
        if self.dictionary.short_words(self.rules.short_word_len).next().is_none() {
            tracing::warn!("No {}-letter reference words; skipping playability check", self.rules.short_word_len);
            return;
        }

        for attempt in 0..self.rules.playability_retries {
            if self.is_playable(&state.hand) {
                return;
            }
            tracing::debug!("Hand {} has no short word, retry {}", hand_letters(&state.hand), attempt + 1);
            if !swap_one_at_random(state, |_, _| true, |_, _| true, rng) {
                return;
            }
        }
    }

    /// Stage B: while the hand is too heavy, trade one of its heaviest
    /// tiles for a lighter letter
    fn limit_weight(&self, state: &mut Repair, rng: &mut impl Rng) {
        for _ in 0..self.iteration_budget(&state.hand) {
            let weight: u32 = occupied(&state.hand).map(|tile| rarity_weight(tile.letter)).sum();
            if weight <= self.rules.weight_cap {
                return;
            }

            let heaviest = occupied(&state.hand)
                .map(|tile| rarity_weight(tile.letter))
                .max()
                .unwrap_or(0);

            tracing::debug!("Hand weight {} over cap {}", weight, self.rules.weight_cap);
            swap_one_at_random(
                state,
                |tile, _| rarity_weight(tile.letter) == heaviest,
                |letter, _| rarity_weight(letter) < heaviest,
                rng,
            );
        }
    }

    /// Stage C: replace copies of any letter held more than the cap allows
    fn clear_duplicates(&self, state: &mut Repair, rng: &mut impl Rng) {
        let cap = self.rules.duplicate_cap;

        for _ in 0..self.iteration_budget(&state.hand) {
            let counts = letter_counts(&state.hand);
            let mut over_cap: Vec<char> = counts
                .iter()
                .filter(|(_, count)| **count > cap)
                .map(|(letter, _)| *letter)
                .collect();
            // Sorted so a seeded rng picks the same letter every run
            over_cap.sort_unstable();
            let Some(&over) = over_cap.choose(rng) else {
                return;
            };

            tracing::debug!("Letter {} held {} times", over, counts[&over]);
            swap_one_at_random(
                state,
                |tile, _| tile.letter == over,
                |letter, hand| under_cap(letter, hand, cap),
                rng,
            );
        }
    }

    /// Stage D: make sure the hand has a vowel, and a consonant when it
    /// holds more than one tile
    fn balance_vowels(&self, state: &mut Repair, rng: &mut impl Rng) {
        let cap = self.rules.duplicate_cap;

        for _ in 0..self.iteration_budget(&state.hand) * 2 {
            let total = occupied(&state.hand).count();
            let vowels = occupied(&state.hand).filter(|tile| tile.is_vowel()).count();

            let need_vowel = if total > 0 && vowels == 0 {
                true
            } else if total > 1 && vowels == total {
                false
            } else {
                return;
            };

            tracing::debug!("Hand needs a {}", if need_vowel { "vowel" } else { "consonant" });
            let swapped = swap_one_at_random(
                state,
                |tile, _| tile.is_vowel() != need_vowel,
                |letter, hand| is_vowel(letter) == need_vowel && under_cap(letter, hand, cap),
                rng,
            );
            if !swapped {
                return;
            }

            self.clear_duplicates(state, rng);
        }
    }
}

fn letter_counts(hand: &[Slot]) -> HashMap<char, usize> {
    let mut counts = HashMap::new();
    for tile in occupied(hand) {
        *counts.entry(tile.letter).or_insert(0) += 1;
    }
    counts
}

fn under_cap(letter: char, hand: &[Slot], cap: usize) -> bool {
    occupied(hand).filter(|tile| tile.letter == letter).count() < cap
}

/// Swap one randomly chosen eligible tile for a letter from the bag.
///
/// `eligible` picks which occupied slots may be replaced. `accept` filters
/// replacement letters and sees the hand with the chosen slot already
/// emptied; when the bag holds no acceptable letter even after a top-up,
/// any letter is taken. The removed letter goes back into the bag.
///
/// Returns false when no slot was eligible.
fn swap_one_at_random(
    state: &mut Repair,
    eligible: impl Fn(&Tile, &[Slot]) -> bool,
    accept: impl Fn(char, &[Slot]) -> bool,
    rng: &mut impl Rng,
) -> bool {
    let candidates: Vec<usize> = state
        .hand
        .iter()
        .enumerate()
        .filter_map(|(index, slot)| match slot {
            Some(tile) if eligible(tile, &state.hand) => Some(index),
            _ => None,
        })
        .collect();

    let Some(&index) = candidates.choose(rng) else {
        return false;
    };
    let Some(removed) = state.hand[index].take() else {
        return false;
    };

    let bag = std::mem::take(&mut state.bag);
    let (bag, letter) = match bag.take_matching(|letter| accept(letter, &state.hand), rng) {
        (bag, Some(letter)) => (bag, Some(letter)),
        (bag, None) => bag.take_matching(|_| true, rng),
    };

    let Some(letter) = letter else {
        state.hand[index] = Some(removed);
        state.bag = bag;
        return false;
    };

    state.hand[index] = Some(draw_tile(letter, rng));
    state.bag = bag.return_letters([removed.letter], rng);
    state.was_changed = true;
    true
}
