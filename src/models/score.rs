use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::PowerPlay;

/// Numeric effect of one ledger entry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LedgerEffect {
    /// Change to one tile's value; already counted in the base score
    TileValue { delta: i64 },
    Flat { points: i64 },
    Multiplier { factor: f64 },
    /// Applied to the multiplied score
    PostMultiplier { factor: f64 },
    PostFlat { points: i64 },
    /// Replaces the whole score
    Override { total: i64 },
}

/// One named adjustment in the bonus ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BonusEntry {
    pub name: String,
    pub description: String,
    pub effect: LedgerEffect,
}

impl BonusEntry {
    pub fn new(name: impl Into<String>, description: impl Into<String>, effect: LedgerEffect) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            effect,
        }
    }
}

impl fmt::Display for BonusEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.description)
    }
}

/// Fit a raw total into the score range, saturating at both ends
pub fn clamp_total(total: i64) -> u32 {
    u32::try_from(total.max(0)).unwrap_or(u32::MAX)
}

/// Outcome of scoring one submitted word
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub total_score: u32,
    /// Sum of the resolved tile values
    pub base_score: u32,
    /// Adjustments in the order they were applied
    pub bonuses: Vec<BonusEntry>,
    /// Power-plays that spent a charge on this word
    pub consumed_power_plays: Vec<PowerPlay>,
}

impl ScoreResult {
    /// Recompute the total from the base score and the ledger alone
    pub fn replay(&self) -> u32 {
        let overridden = self.bonuses.iter().rev().find_map(|entry| match entry.effect {
            LedgerEffect::Override { total } => Some(total),
            _ => None,
        });
        if let Some(total) = overridden {
            return clamp_total(total);
        }

        let mut flat = 0_i64;
        let mut multiplier = 1.0_f64;
        for entry in &self.bonuses {
            match entry.effect {
                LedgerEffect::Flat { points } => flat += points,
                LedgerEffect::Multiplier { factor } => multiplier *= factor,
                _ => {}
            }
        }

        let mut running = (self.base_score as i64 + flat) as f64 * multiplier;
        for entry in &self.bonuses {
            match entry.effect {
                LedgerEffect::PostMultiplier { factor } => running *= factor,
                LedgerEffect::PostFlat { points } => running += points as f64,
                _ => {}
            }
        }

        running.round().max(0.0) as u32
    }
}
