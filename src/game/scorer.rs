use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{
    catalog::ScoringRule,
    models::{clamp_total, BonusEntry, LedgerEffect, ModifierState, ScoreResult, Tile},
    utils::letters::get_letter_value,
};

/// Word-length bonus settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringRules {
    pub long_word_threshold: usize,
    pub long_word_multiplier: f64,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            long_word_threshold: 5,
            long_word_multiplier: 2.0,
        }
    }
}

/// A catalog rule switched on by the current modifier state
#[derive(Debug, Clone, Copy)]
struct ActiveRule {
    name: &'static str,
    /// Charges left when the rule comes from a power-play
    charges: Option<u32>,
    rule: ScoringRule,
}

/// Ledger under construction
#[derive(Default)]
struct Ledger {
    bonuses: Vec<BonusEntry>,
}

impl Ledger {
    fn push(&mut self, name: impl Into<String>, description: impl Into<String>, effect: LedgerEffect) {
        self.bonuses.push(BonusEntry::new(name, description, effect));
    }

    /// Record a word multiplier and hand back its factor
    fn multiply(&mut self, name: impl Into<String>, factor: f64) -> f64 {
        self.push(name, format!("x{}", factor), LedgerEffect::Multiplier { factor });
        factor
    }
}

pub struct Scorer {
    rules: ScoringRules,
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new(ScoringRules::default())
    }
}

impl Scorer {
    pub fn new(rules: ScoringRules) -> Self {
        Self { rules }
    }

    /// Score `word` spelled by `tiles` under the given modifiers.
    ///
    /// Pipeline:
    /// - Resolve each tile's value: temp points, letter overrides, minimum
    ///   floor, letter upgrades, then x4 for super tiles
    /// - Add flat bonuses from charms
    /// - Multiply by word multipliers: long word, charms, power-plays,
    ///   polished letters, then tile-carried multipliers
    /// - Apply randomized adjustments (Golden Ticket, Phil's-osophy)
    /// - Apply the first matching override (Heisenberg, Schrute Bucks, Thanos)
    ///
    /// The modifier state is only read. Every charged next-word power-play is
    /// reported as consumed, fired or not, so the caller can spend its charge.
    pub fn calculate_score(
        &self,
        word: &str,
        tiles: &[Tile],
        modifiers: &ModifierState,
        rng: &mut impl Rng,
    ) -> ScoreResult {
        let word = word.to_ascii_uppercase();
        let active = Self::active_rules(modifiers);
        let mut ledger = Ledger::default();

        // 1. Tile values
        let values: Vec<u32> = tiles
            .iter()
            .map(|tile| Self::resolve_tile_value(tile, &active, modifiers, &mut ledger))
            .collect();
        let base_score = values.iter().fold(0_u32, |sum, value| sum.saturating_add(*value));

        // 2. Flat bonuses
        let flat = Self::flat_bonuses(&word, tiles, &values, &active, &mut ledger);

        // 3. Word multipliers
        let multiplier = self.word_multiplier(&word, tiles, &active, modifiers, &mut ledger);

        let mut running = (base_score as i64 + flat) as f64 * multiplier;

        // 4. Randomized adjustments
        running = Self::chance_adjustments(running, &active, &mut ledger, rng);

        // 5. Overrides
        let total_score = match Self::apply_override(running, &active, &mut ledger, rng) {
            Some(total) => clamp_total(total),
            None => running.round().max(0.0) as u32,
        };

        let consumed_power_plays = modifiers
            .active_power_plays
            .keys()
            .copied()
            .filter(|play| play.is_consumed_by_scoring() && modifiers.charges(*play).is_some())
            .collect();

        let result = ScoreResult {
            total_score,
            base_score,
            bonuses: ledger.bonuses,
            consumed_power_plays,
        };
        debug_assert_eq!(result.replay(), result.total_score);

        tracing::debug!(
            "Scored {} for {}: base {}, {} bonus entries",
            result.total_score,
            word,
            result.base_score,
            result.bonuses.len()
        );

        result
    }

    /// Scoring rules of every active charm, then every charged power-play,
    /// each group in catalog order
    fn active_rules(modifiers: &ModifierState) -> Vec<ActiveRule> {
        let charm_rules = modifiers.active_charms.iter().flat_map(|charm| {
            charm.scoring_rules().iter().map(move |rule| ActiveRule {
                name: charm.name(),
                charges: None,
                rule: *rule,
            })
        });

        let play_rules = modifiers
            .active_power_plays
            .keys()
            .filter_map(|play| modifiers.charges(*play).map(|charges| (*play, charges)))
            .flat_map(|(play, charges)| {
                play.scoring_rules().iter().map(move |rule| ActiveRule {
                    name: play.name(),
                    charges: Some(charges),
                    rule: *rule,
                })
            });

        charm_rules.chain(play_rules).collect()
    }

    fn resolve_tile_value(
        tile: &Tile,
        active: &[ActiveRule],
        modifiers: &ModifierState,
        ledger: &mut Ledger,
    ) -> u32 {
        let letter = tile.letter.to_ascii_uppercase();
        let mut value = match tile.temp_points {
            Some(points) => points,
            None if tile.base_points == 0 => get_letter_value(letter),
            None => tile.base_points,
        };

        for source in active {
            match source.rule {
                ScoringRule::LetterValue { letter: target, points } if target == letter && value != points => {
                    let delta = points as i64 - value as i64;
                    value = points;
                    ledger.push(
                        format!("{} ({})", source.name, letter),
                        format!("Set to {} pts", points),
                        LedgerEffect::TileValue { delta },
                    );
                }
                _ => {}
            }
        }

        for source in active {
            match source.rule {
                ScoringRule::MinimumValue { points } if value < points => {
                    let delta = (points - value) as i64;
                    value = points;
                    ledger.push(
                        format!("{} ({})", source.name, letter),
                        format!("Set to {} pts", points),
                        LedgerEffect::TileValue { delta },
                    );
                }
                _ => {}
            }
        }

        let letter_multiplier = modifiers.letter_multiplier(letter);
        if letter_multiplier > 1 {
            let upgraded = value.saturating_mul(letter_multiplier);
            let delta = upgraded - value;
            ledger.push(
                format!("Letter Upgrade ({})", letter),
                format!("+{} pts", delta),
                LedgerEffect::TileValue { delta: delta as i64 },
            );
            value = upgraded;
        }

        if tile.is_super {
            let upgraded = value.saturating_mul(4);
            let delta = upgraded - value;
            ledger.push(
                format!("Super Tile ({})", letter),
                format!("+{} pts", delta),
                LedgerEffect::TileValue { delta: delta as i64 },
            );
            value = upgraded;
        }

        value
    }

    fn flat_bonuses(
        word: &str,
        tiles: &[Tile],
        values: &[u32],
        active: &[ActiveRule],
        ledger: &mut Ledger,
    ) -> i64 {
        let mut flat = 0;

        for source in active {
            let points = match source.rule {
                ScoringRule::PerTile { filter, points } => {
                    let count = tiles.iter().filter(|tile| filter.accepts(tile.letter)).count();
                    u32::try_from(count).unwrap_or(u32::MAX).saturating_mul(points)
                }
                ScoringRule::LastTileBonus { factor } => values.last().copied().unwrap_or(0).saturating_mul(factor),
                ScoringRule::VowelValueBonus { when, factor } if when.matches(word) => tiles
                    .iter()
                    .filter(|tile| tile.is_vowel())
                    .map(|tile| tile.points().saturating_mul(factor))
                    .fold(0_u32, u32::saturating_add),
                ScoringRule::FlatBonus { when, points } if when.matches(word) => points,
                _ => continue,
            };

            if points > 0 {
                ledger.push(source.name, format!("+{} pts", points), LedgerEffect::Flat {
                    points: points as i64,
                });
                flat += points as i64;
            }
        }

        flat
    }

    fn word_multiplier(
        &self,
        word: &str,
        tiles: &[Tile],
        active: &[ActiveRule],
        modifiers: &ModifierState,
        ledger: &mut Ledger,
    ) -> f64 {
        let mut multiplier = 1.0;

        if word.chars().count() >= self.rules.long_word_threshold {
            multiplier *= ledger.multiply("Long Word Bonus", self.rules.long_word_multiplier);
        }

        for source in active {
            let factor = match source.rule {
                ScoringRule::WordMultiplier { when, factor } if when.matches(word) => factor,
                ScoringRule::ChargedMultiplier { full_charges, first, later } => {
                    let charges = source.charges.unwrap_or(0);
                    if charges >= full_charges {
                        first
                    } else {
                        later
                    }
                }
                _ => continue,
            };
            multiplier *= ledger.multiply(source.name, factor);
        }

        for (letter, factor) in &modifiers.word_multipliers_by_letter {
            if *factor > 1 && word.contains(*letter) {
                multiplier *= ledger.multiply(format!("Polish ({})", letter), *factor as f64);
            }
        }

        for tile in tiles.iter().filter(|tile| tile.multiplier > 1) {
            multiplier *= ledger.multiply(format!("x{} Tile", tile.multiplier), tile.multiplier as f64);
        }

        multiplier
    }

    /// Ticket-style effects; each active one draws exactly one sample and
    /// logs its outcome, misses included
    fn chance_adjustments(mut running: f64, active: &[ActiveRule], ledger: &mut Ledger, rng: &mut impl Rng) -> f64 {
        for source in active {
            match source.rule {
                ScoringRule::ChanceMultiplier { chance, factor } => {
                    let roll: f64 = rng.random();
                    if roll < chance {
                        ledger.push(source.name, format!("x{}", factor), LedgerEffect::PostMultiplier { factor });
                        running *= factor;
                    } else {
                        ledger.push(
                            format!("{} (Miss)", source.name),
                            "x1",
                            LedgerEffect::PostMultiplier { factor: 1.0 },
                        );
                    }
                }
                ScoringRule::ChanceAdjustment {
                    bonus_chance,
                    bonus,
                    penalty_chance,
                    penalty,
                } => {
                    let roll: f64 = rng.random();
                    let points = if roll < bonus_chance {
                        bonus
                    } else if roll < bonus_chance + penalty_chance {
                        penalty
                    } else {
                        ledger.push(
                            format!("{} (No Effect)", source.name),
                            "+0 pts",
                            LedgerEffect::PostFlat { points: 0 },
                        );
                        continue;
                    };
                    let description = if points >= 0 {
                        format!("+{} pts", points)
                    } else {
                        format!("{} pts", points)
                    };
                    ledger.push(source.name, description, LedgerEffect::PostFlat { points });
                    running += points as f64;
                }
                _ => {}
            }
        }
        running
    }

    /// Override priority; lower fires first
    fn override_rank(rule: &ScoringRule) -> Option<u8> {
        match rule {
            ScoringRule::DoubleOrNothing { .. } => Some(0),
            ScoringRule::FixedScore { .. } => Some(1),
            ScoringRule::Sacrifice => Some(2),
            _ => None,
        }
    }

    /// Apply the highest-priority override, replacing the whole ledger.
    /// Returns the overriding total if one fired.
    fn apply_override(running: f64, active: &[ActiveRule], ledger: &mut Ledger, rng: &mut impl Rng) -> Option<i64> {
        let source = active
            .iter()
            .filter_map(|source| Self::override_rank(&source.rule).map(|rank| (rank, source)))
            .min_by_key(|(rank, _)| *rank)
            .map(|(_, source)| source)?;

        let (name, description, total) = match source.rule {
            ScoringRule::DoubleOrNothing { win_chance, factor } => {
                let roll: f64 = rng.random();
                if roll < win_chance {
                    let total = (running * factor).round().clamp(0.0, u32::MAX as f64) as i64;
                    (format!("{} (Win)", source.name), format!("x{}", factor), total)
                } else {
                    (format!("{} (Loss)", source.name), "x0".to_string(), 0)
                }
            }
            ScoringRule::FixedScore { points } => (
                source.name.to_string(),
                format!("{} pt{}", points, if points == 1 { "" } else { "s" }),
                points as i64,
            ),
            _ => (source.name.to_string(), "Score sacrificed".to_string(), 0),
        };

        ledger.bonuses.clear();
        ledger.push(name, description, LedgerEffect::Override { total });

        Some(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Charm, PowerPlay};
    use rand::{rngs::StdRng, RngCore, SeedableRng};
    use uuid::Uuid;

    /// Yields the same word forever; `u64::MAX` rolls ~1.0, `0` rolls 0.0
    struct FixedRng(u64);

    impl RngCore for FixedRng {
        fn next_u32(&mut self) -> u32 {
            self.0 as u32
        }

        fn next_u64(&mut self) -> u64 {
            self.0
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            for byte in dst.iter_mut() {
                *byte = self.0 as u8;
            }
        }
    }

    fn tiles(letters: &str) -> Vec<Tile> {
        letters.chars().map(|c| Tile::new(Uuid::nil(), c)).collect()
    }

    fn score(word: &str, modifiers: &ModifierState) -> ScoreResult {
        Scorer::default().calculate_score(word, &tiles(word), modifiers, &mut StdRng::seed_from_u64(0))
    }

    fn names(result: &ScoreResult) -> Vec<String> {
        result.bonuses.iter().map(|entry| entry.to_string()).collect()
    }

    #[test]
    fn test_plain_word() {
        let result = score("CAT", &ModifierState::new());
        assert_eq!(result.base_score, 5, "C(3) + A(1) + T(1)");
        assert_eq!(result.total_score, 5);
        assert!(result.bonuses.is_empty());
        assert!(result.consumed_power_plays.is_empty());
    }

    #[test]
    fn test_letter_upgrade() {
        let modifiers = ModifierState::new()
            .with_charm(Charm::STierScorer)
            .with_letter_upgrade('C');
        let result = score("CAT", &modifiers);

        assert_eq!(result.base_score, 8, "C(3 x 2) + A(1) + T(1)");
        assert_eq!(result.total_score, 8);
        assert_eq!(names(&result), vec!["Letter Upgrade (C): +3 pts"]);
    }

    #[test]
    fn test_long_word_bonus() {
        let result = score("CHAIR", &ModifierState::new());
        assert_eq!(result.base_score, 10);
        assert_eq!(result.total_score, 20);
        assert_eq!(names(&result), vec!["Long Word Bonus: x2"]);
    }

    #[test]
    fn test_heisenberg_loss_clears_ledger() {
        let modifiers = ModifierState::new()
            .with_charm(Charm::TheValve)
            .with_power_play(PowerPlay::Heisenberg);
        let result = Scorer::default().calculate_score("CHAIR", &tiles("CHAIR"), &modifiers, &mut FixedRng(u64::MAX));

        assert_eq!(result.total_score, 0);
        assert_eq!(names(&result), vec!["Heisenberg (Loss): x0"]);
        assert_eq!(result.consumed_power_plays, vec![PowerPlay::Heisenberg]);
    }

    #[test]
    fn test_heisenberg_win_triples() {
        let modifiers = ModifierState::new().with_power_play(PowerPlay::Heisenberg);
        let result = Scorer::default().calculate_score("CHAIR", &tiles("CHAIR"), &modifiers, &mut FixedRng(0));

        assert_eq!(result.total_score, 60, "10 x 2 long word x 3");
        assert_eq!(names(&result), vec!["Heisenberg (Win): x3"]);
    }

    #[test]
    fn test_first_override_wins() {
        let modifiers = ModifierState::new()
            .with_power_play(PowerPlay::SchruteBucks)
            .with_power_play(PowerPlay::ThanosGift);
        let result = score("CAT", &modifiers);

        assert_eq!(result.total_score, 1);
        assert_eq!(names(&result), vec!["Schrute Bucks: 1 pt"]);
        assert_eq!(
            result.consumed_power_plays,
            vec![PowerPlay::SchruteBucks, PowerPlay::ThanosGift],
            "Overrides that did not fire are spent too"
        );

        let modifiers = modifiers.consume(&result.consumed_power_plays);
        assert!(modifiers.active_power_plays.is_empty());
        assert_eq!(score("DOG", &modifiers).total_score, score("DOG", &ModifierState::new()).total_score);

        let result = score("CAT", &ModifierState::new().with_power_play(PowerPlay::ThanosGift));
        assert_eq!(result.total_score, 0);
        assert_eq!(names(&result), vec!["Gift From Thanos: Score sacrificed"]);
    }

    #[test]
    fn test_flat_bonuses_before_multipliers() {
        let modifiers = ModifierState::new()
            .with_charm(Charm::TheValve)
            .with_charm(Charm::PowerPellet);
        let result = score("CHAIR", &modifiers);

        // (10 + 2 vowels x 10 + 25) x 2
        assert_eq!(result.base_score, 10);
        assert_eq!(result.total_score, 110);
        assert_eq!(
            names(&result),
            vec!["Vowel Lover: +20 pts", "Power Pellet: +25 pts", "Long Word Bonus: x2"]
        );
    }

    #[test]
    fn test_finisher_uses_resolved_value() {
        let modifiers = ModifierState::new()
            .with_charm(Charm::Finisher)
            .with_letter_upgrade('T');
        let result = score("CAT", &modifiers);

        // C3 + A1 + T2, plus 2 x 2 for the last tile
        assert_eq!(result.base_score, 6);
        assert_eq!(result.total_score, 10);
    }

    #[test]
    fn test_skywalker_and_wakanda() {
        let modifiers = ModifierState::new()
            .with_power_play(PowerPlay::SkywalkerBloodline)
            .with_power_play(PowerPlay::WakandaForever);
        let result = score("SAT", &modifiers);

        assert_eq!(result.base_score, 25, "S set to 15, A and T raised to 5");
        assert_eq!(
            names(&result),
            vec![
                "Skywalker Bloodline (S): Set to 15 pts",
                "Wakanda Forever (A): Set to 5 pts",
                "Wakanda Forever (T): Set to 5 pts",
            ]
        );
        assert_eq!(
            result.consumed_power_plays,
            vec![PowerPlay::WakandaForever, PowerPlay::SkywalkerBloodline]
        );
    }

    #[test]
    fn test_next_word_plays_spent_without_effect() {
        let modifiers = ModifierState::new().with_power_play(PowerPlay::SkywalkerBloodline);
        let result = score("CAT", &modifiers);

        assert_eq!(result.total_score, 5, "No S to set");
        assert!(result.bonuses.is_empty());
        assert_eq!(result.consumed_power_plays, vec![PowerPlay::SkywalkerBloodline]);
        assert!(modifiers.consume(&result.consumed_power_plays).active_power_plays.is_empty());

        let modifiers = ModifierState::new()
            .with_power_play(PowerPlay::WakandaForever)
            .with_power_play(PowerPlay::Philsosophy);
        let result = score("QUIZ", &modifiers);
        assert_eq!(
            result.consumed_power_plays,
            vec![PowerPlay::WakandaForever],
            "Phil's-osophy stays active"
        );
    }

    #[test]
    fn test_super_tile_quadruples() {
        let mut hand = tiles("CAT");
        hand[0].is_super = true;
        let result = Scorer::default().calculate_score("CAT", &hand, &ModifierState::new(), &mut StdRng::seed_from_u64(1));

        assert_eq!(result.base_score, 14, "C(3 x 4) + A(1) + T(1)");
        assert_eq!(names(&result), vec!["Super Tile (C): +9 pts"]);
    }

    #[test]
    fn test_temp_points_replace_base() {
        let mut hand = tiles("CAT");
        hand[1].temp_points = Some(25);
        let result = Scorer::default().calculate_score("CAT", &hand, &ModifierState::new(), &mut StdRng::seed_from_u64(1));
        assert_eq!(result.base_score, 29);
    }

    #[test]
    fn test_multiplier_order() {
        let mut hand = tiles("STARE");
        hand[4].multiplier = 2;
        let modifiers = ModifierState::new()
            .with_charm(Charm::StarPower)
            .with_power_play(PowerPlay::BiglyScore)
            .with_polish('E');
        let result = Scorer::default().calculate_score("STARE", &hand, &modifiers, &mut StdRng::seed_from_u64(1));

        assert_eq!(
            names(&result),
            vec![
                "Long Word Bonus: x2",
                "Star Power: x4",
                "Bigly Score: x4",
                "Polish (E): x2",
                "x2 Tile: x2",
            ]
        );
        assert_eq!(result.total_score, 5 * 2 * 4 * 4 * 2 * 2);
        assert_eq!(result.consumed_power_plays, vec![PowerPlay::BiglyScore]);
    }

    #[test]
    fn test_sonic_speed_ramps_up() {
        let modifiers = ModifierState::new().with_power_play(PowerPlay::SonicSpeed);
        let first = score("CAT", &modifiers);
        assert_eq!(first.total_score, 10);

        let modifiers = modifiers.consume(&first.consumed_power_plays);
        let second = score("CAT", &modifiers);
        assert_eq!(second.total_score, 20);

        let modifiers = modifiers.consume(&second.consumed_power_plays);
        assert_eq!(score("CAT", &modifiers).total_score, 5, "Sonic Speed is spent after two words");
    }

    #[test]
    fn test_fractional_multiplier_rounds() {
        let result = score("MAT", &ModifierState::new().with_charm(Charm::NicolesGrace));
        // 5 x 1.15 = 5.75
        assert_eq!(result.total_score, 6);
        assert_eq!(names(&result), vec!["Nicole's Grace: x1.15"]);
    }

    #[test]
    fn test_golden_ticket_forced_hit() {
        let modifiers = ModifierState::new().with_charm(Charm::GoldenTicket);
        let result = Scorer::default().calculate_score("CAT", &tiles("CAT"), &modifiers, &mut FixedRng(0));
        assert_eq!(result.total_score, 15);
        assert_eq!(names(&result), vec!["Golden Ticket: x3"]);

        let result = Scorer::default().calculate_score("CAT", &tiles("CAT"), &modifiers, &mut FixedRng(u64::MAX));
        assert_eq!(result.total_score, 5);
        assert_eq!(names(&result), vec!["Golden Ticket (Miss): x1"], "Misses are logged too");
    }

    #[test]
    fn test_philsosophy_no_effect_is_logged() {
        let modifiers = ModifierState::new().with_power_play(PowerPlay::Philsosophy);
        let result = Scorer::default().calculate_score("CAT", &tiles("CAT"), &modifiers, &mut FixedRng(u64::MAX));
        assert_eq!(result.total_score, 5);
        assert_eq!(names(&result), vec!["Phil's-osophy (No Effect): +0 pts"]);
    }

    #[test]
    fn test_philsosophy_penalty_never_negative() {
        let modifiers = ModifierState::new().with_power_play(PowerPlay::Philsosophy);
        let mut hand = tiles("CAT");
        for tile in hand.iter_mut() {
            tile.temp_points = Some(1);
        }

        // Rolls 0.25, inside the penalty band
        let mut rng = FixedRng(1 << 62);
        let result = Scorer::default().calculate_score("CAT", &hand, &modifiers, &mut rng);
        assert_eq!(names(&result), vec!["Phil's-osophy: -10 pts"]);
        assert_eq!(result.total_score, 0);
        assert!(
            result.consumed_power_plays.is_empty(),
            "Phil's-osophy stays active"
        );
    }

    #[test]
    fn test_scoring_is_deterministic_under_seed() {
        let modifiers = ModifierState::new()
            .with_charm(Charm::GoldenTicket)
            .with_power_play(PowerPlay::Philsosophy)
            .with_power_play(PowerPlay::Heisenberg);
        let scorer = Scorer::default();

        for seed in 0..20 {
            let first = scorer.calculate_score("QUARTZ", &tiles("QUARTZ"), &modifiers, &mut StdRng::seed_from_u64(seed));
            let second = scorer.calculate_score("QUARTZ", &tiles("QUARTZ"), &modifiers, &mut StdRng::seed_from_u64(seed));
            assert_eq!(first, second, "Seed {} gave different results", seed);
        }
    }

    #[test]
    fn test_ledger_replays_to_total() {
        let mut rng = StdRng::seed_from_u64(42);
        let scorer = Scorer::default();
        let words = ["CAT", "LEVEL", "RHYTHM", "STARS", "QUIZ", "BANANA", "JADED"];

        for round in 0..200 {
            let mut modifiers = ModifierState::new();
            for charm in Charm::ALL {
                if rng.random_bool(0.2) {
                    modifiers = modifiers.with_charm(charm);
                }
            }
            for play in PowerPlay::ALL {
                if rng.random_bool(0.1) {
                    modifiers = modifiers.with_power_play(play);
                }
            }
            if rng.random_bool(0.3) {
                modifiers = modifiers.with_letter_upgrade('A').with_polish('S');
            }

            let word = words[round % words.len()];
            let mut hand = tiles(word);
            if let Some(tile) = hand.first_mut() {
                tile.is_super = rng.random_bool(0.2);
                tile.multiplier = rng.random_range(1..=2);
            }

            let result = scorer.calculate_score(word, &hand, &modifiers, &mut rng);
            assert_eq!(
                result.replay(),
                result.total_score,
                "Ledger for {} does not reproduce its total: {:?}",
                word,
                result
            );
        }
    }

    #[test]
    fn test_oversized_values_saturate() {
        let scorer = Scorer::default();

        let mut hand = tiles("CAT");
        hand[0].is_super = true;
        hand[0].temp_points = Some(2_000_000_000);
        let result = scorer.calculate_score("CAT", &hand, &ModifierState::new(), &mut StdRng::seed_from_u64(1));
        assert_eq!(result.base_score, u32::MAX);
        assert_eq!(result.total_score, u32::MAX);
        assert_eq!(result.replay(), result.total_score);

        let mut modifiers = ModifierState::new();
        modifiers.letter_multipliers.insert('Q', u32::MAX);
        let result = scorer.calculate_score("QAT", &tiles("QAT"), &modifiers, &mut StdRng::seed_from_u64(1));
        assert_eq!(result.base_score, u32::MAX);
        assert_eq!(result.total_score, u32::MAX);
        assert_eq!(result.replay(), result.total_score);
    }

    #[test]
    fn test_override_total_saturates() {
        let scorer = Scorer::default();
        let mut hand = tiles("CAT");
        hand[0].multiplier = 1 << 30;

        let plain = scorer.calculate_score("CAT", &hand, &ModifierState::new(), &mut FixedRng(0));
        assert_eq!(plain.total_score, u32::MAX);

        let modifiers = ModifierState::new().with_power_play(PowerPlay::Heisenberg);
        let won = scorer.calculate_score("CAT", &hand, &modifiers, &mut FixedRng(0));
        assert_eq!(won.total_score, u32::MAX, "A win never scores below the plain word");
        assert_eq!(
            won.bonuses[0].effect,
            LedgerEffect::Override {
                total: u32::MAX as i64
            }
        );
        assert_eq!(won.replay(), won.total_score);
    }

    #[test]
    fn test_unknown_letter_defaults_to_one() {
        let tile = Tile {
            base_points: 0,
            ..Tile::new(Uuid::nil(), '?')
        };
        let result = Scorer::default().calculate_score("?", &[tile], &ModifierState::new(), &mut StdRng::seed_from_u64(1));
        assert_eq!(result.base_score, 1);
    }

    #[test]
    fn test_empty_word() {
        let result = score("", &ModifierState::new().with_charm(Charm::Finisher));
        assert_eq!(result.total_score, 0);
        assert!(result.bonuses.is_empty());
    }
}
