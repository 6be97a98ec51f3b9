pub mod modifiers;
pub mod score;
pub mod tile;

pub use modifiers::ModifierState;
pub use score::{clamp_total, BonusEntry, LedgerEffect, ScoreResult};
pub use tile::{hand_letters, occupied, tile_id, Slot, Tile};
