// Declarative registries of charms and power-plays

pub mod charms;
pub mod power_plays;
pub mod rules;

use serde::{Deserialize, Serialize};

pub use charms::Charm;
pub use power_plays::PowerPlay;
pub use rules::{ScoringRule, TileFilter, WordPredicate};

/// When a modifier takes effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectType {
    Passive,
    Triggered,
    Immediate,
    Selection,
    NextWord,
}

/// Catalog metadata sent to callers
#[derive(Debug, Clone, Serialize)]
pub struct CatalogEntry<T> {
    pub id: T,
    pub name: &'static str,
    pub description: &'static str,
    pub effect_type: EffectType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_uses: Option<u32>,
}

pub fn charm_entries() -> Vec<CatalogEntry<Charm>> {
    Charm::ALL
        .iter()
        .map(|charm| CatalogEntry {
            id: *charm,
            name: charm.name(),
            description: charm.description(),
            effect_type: charm.effect_type(),
            max_uses: charm.max_uses(),
        })
        .collect()
}

pub fn power_play_entries() -> Vec<CatalogEntry<PowerPlay>> {
    PowerPlay::ALL
        .iter()
        .map(|play| CatalogEntry {
            id: *play,
            name: play.name(),
            description: play.description(),
            effect_type: play.effect_type(),
            max_uses: None,
        })
        .collect()
}
