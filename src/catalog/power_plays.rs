use serde::{Deserialize, Serialize};

use super::{
    rules::{ScoringRule, WordPredicate},
    EffectType,
};

/// One-shot or time-boxed modifiers offered during a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PowerPlay {
    TimeBoost,
    LetterUpgrade,
    Polish,
    BiglyScore,
    StrikeShield,
    SwapOut,
    WordLock,
    Philsosophy,
    PlotArmor,
    MultiverseOfSadness,
    NuclearOption,
    SonicSpeed,
    EchoesOfThePast,
    Rewind,
    FluncleIsProud,
    FortunesFavor,
    TimeTurner,
    SchruteBucks,
    RedWedding,
    MutationProtocol,
    WakandaForever,
    NeosChoice,
    ThanosGift,
    Heisenberg,
    SkywalkerBloodline,
    Hookshot,
    LeafOnTheWind,
    YoshisWildRide,
    BobKelso,
    GumpLuck,
}

impl PowerPlay {
    pub const ALL: [PowerPlay; 30] = [
        PowerPlay::TimeBoost,
        PowerPlay::LetterUpgrade,
        PowerPlay::Polish,
        PowerPlay::BiglyScore,
        PowerPlay::StrikeShield,
        PowerPlay::SwapOut,
        PowerPlay::WordLock,
        PowerPlay::Philsosophy,
        PowerPlay::PlotArmor,
        PowerPlay::MultiverseOfSadness,
        PowerPlay::NuclearOption,
        PowerPlay::SonicSpeed,
        PowerPlay::EchoesOfThePast,
        PowerPlay::Rewind,
        PowerPlay::FluncleIsProud,
        PowerPlay::FortunesFavor,
        PowerPlay::TimeTurner,
        PowerPlay::SchruteBucks,
        PowerPlay::RedWedding,
        PowerPlay::MutationProtocol,
        PowerPlay::WakandaForever,
        PowerPlay::NeosChoice,
        PowerPlay::ThanosGift,
        PowerPlay::Heisenberg,
        PowerPlay::SkywalkerBloodline,
        PowerPlay::Hookshot,
        PowerPlay::LeafOnTheWind,
        PowerPlay::YoshisWildRide,
        PowerPlay::BobKelso,
        PowerPlay::GumpLuck,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::TimeBoost => "Time Boost",
            Self::LetterUpgrade => "Letter Upgrade",
            Self::Polish => "Polish",
            Self::BiglyScore => "Bigly Score",
            Self::StrikeShield => "Strike Shield",
            Self::SwapOut => "Swap Out",
            Self::WordLock => "Word Lock",
            Self::Philsosophy => "Phil's-osophy",
            Self::PlotArmor => "Plot Armor",
            Self::MultiverseOfSadness => "Multiverse of Sadness",
            Self::NuclearOption => "Nuclear Option",
            Self::SonicSpeed => "Sonic Speed",
            Self::EchoesOfThePast => "Echoes of the Past",
            Self::Rewind => "Rewind",
            Self::FluncleIsProud => "Fluncle is Proud",
            Self::FortunesFavor => "Fortune's Favor",
            Self::TimeTurner => "Time Turner",
            Self::SchruteBucks => "Schrute Bucks",
            Self::RedWedding => "Red Wedding",
            Self::MutationProtocol => "Mutation Protocol",
            Self::WakandaForever => "Wakanda Forever",
            Self::NeosChoice => "Neo's Choice",
            Self::ThanosGift => "Gift From Thanos",
            Self::Heisenberg => "Heisenberg",
            Self::SkywalkerBloodline => "Skywalker Bloodline",
            Self::Hookshot => "Hookshot",
            Self::LeafOnTheWind => "Leaf on the Wind",
            Self::YoshisWildRide => "Yoshi's Wild Ride",
            Self::BobKelso => "Bob Kelso",
            Self::GumpLuck => "Gump Luck",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::TimeBoost => "Add 15 seconds to your timer.",
            Self::LetterUpgrade => "Pick a letter - all tiles of that letter are now worth 2x for the rest of the run.",
            Self::Polish => "Pick a letter - words containing it now score 2x.",
            Self::BiglyScore => "Your next word scores 4x.",
            Self::StrikeShield => "Block the next strike.",
            Self::SwapOut => "Replace 2 tiles of your choice with new random ones.",
            Self::WordLock => "Submit any 5-letter-or-less word - real or not.",
            Self::Philsosophy => "Every word: 20% chance for +20, 10% chance for -10, 70% nothing.",
            Self::PlotArmor => "Instead of getting a strike, you lose 150 points. One time use.",
            Self::MultiverseOfSadness => "Next word: half points, half becomes bonus time.",
            Self::NuclearOption => "Replace your whole hand. Next word scores 4x.",
            Self::SonicSpeed => "First word: 8s timer, 2x score. Next: 7s, 4x score.",
            Self::EchoesOfThePast => "Instantly replay your highest-scoring word for its original value.",
            Self::Rewind => "Remove your last strike and gain 10 seconds.",
            Self::FluncleIsProud => "You gain 300 points. No explanation needed.",
            Self::FortunesFavor => "40% chance to lose 200 points, 50% chance to gain 250 points, or 10% chance to gain 500 points.",
            Self::TimeTurner => "Your next 2 rounds will have 30 seconds added to them.",
            Self::SchruteBucks => "Instant +250 points; your very next word is forced to score exactly 1 point.",
            Self::RedWedding => "With a full hand of 10 tiles, sacrifice 2 random tiles now; your very next word earns 5x its normal score.",
            Self::MutationProtocol => "For the next 5 rounds, each tile you receive has a 25% chance of becoming a Super Tile worth 4x its base value.",
            Self::WakandaForever => "For one word, every tile in your hand is worth at least 5 points.",
            Self::NeosChoice => "Pick one: Freeze time for 10s or erase a strike.",
            Self::ThanosGift => "Snap once: Sacrifice your next word's score for 100 points.",
            Self::Heisenberg => "Next word is triple score or zero - 50% chance.",
            Self::SkywalkerBloodline => "All S tiles in your current hand jump to 15 points this round.",
            Self::Hookshot => "Duplicate one chosen letter - pull a twin into your hand.",
            Self::LeafOnTheWind => "No timer for your next turn. Plan at your own pace.",
            Self::YoshisWildRide => "Replace up to 3 individual tiles of your choice, no shuffle penalty.",
            Self::BobKelso => "Instantly score 100 points and reshuffle your hand for free.",
            Self::GumpLuck => "25% chance 10s added to timer. 25% chance +20 to score. 25% chance +1 shuffle. 25% chance you earn a strike.",
        }
    }

    pub fn effect_type(&self) -> EffectType {
        match self {
            Self::TimeBoost
            | Self::EchoesOfThePast
            | Self::Rewind
            | Self::FluncleIsProud
            | Self::FortunesFavor
            | Self::SchruteBucks
            | Self::LeafOnTheWind
            | Self::BobKelso
            | Self::GumpLuck => EffectType::Immediate,
            Self::LetterUpgrade
            | Self::Polish
            | Self::SwapOut
            | Self::NuclearOption
            | Self::RedWedding
            | Self::NeosChoice
            | Self::Hookshot
            | Self::YoshisWildRide => EffectType::Selection,
            Self::BiglyScore
            | Self::WordLock
            | Self::MultiverseOfSadness
            | Self::WakandaForever
            | Self::ThanosGift
            | Self::Heisenberg
            | Self::SkywalkerBloodline => EffectType::NextWord,
            Self::StrikeShield
            | Self::Philsosophy
            | Self::PlotArmor
            | Self::SonicSpeed
            | Self::TimeTurner
            | Self::MutationProtocol => EffectType::Passive,
        }
    }

    /// Charges granted on activation; one is spent each time the effect is used
    pub fn initial_charges(&self) -> u32 {
        match self {
            Self::SonicSpeed | Self::TimeTurner => 2,
            Self::MutationProtocol => 5,
            _ => 1,
        }
    }

    /// Bounds on how many tiles a tile-swap selection may replace
    pub fn swap_limits(&self) -> Option<(usize, usize)> {
        match self {
            Self::SwapOut => Some((2, 2)),
            Self::YoshisWildRide => Some((1, 3)),
            _ => None,
        }
    }

    /// Whether every scored word spends a charge of this power-play,
    /// whether or not its effect changed the score
    pub fn is_consumed_by_scoring(&self) -> bool {
        self.effect_type() == EffectType::NextWord
            || matches!(
                self,
                Self::NuclearOption
                    | Self::SchruteBucks
                    | Self::RedWedding
                    | Self::LeafOnTheWind
                    | Self::SonicSpeed
            )
    }

    pub fn scoring_rules(&self) -> &'static [ScoringRule] {
        match self {
            Self::SkywalkerBloodline => &[ScoringRule::LetterValue {
                letter: 'S',
                points: 15,
            }],
            Self::WakandaForever => &[ScoringRule::MinimumValue { points: 5 }],
            Self::BiglyScore | Self::NuclearOption => &[ScoringRule::WordMultiplier {
                when: WordPredicate::Always,
                factor: 4.0,
            }],
            Self::RedWedding => &[ScoringRule::WordMultiplier {
                when: WordPredicate::Always,
                factor: 5.0,
            }],
            Self::SonicSpeed => &[ScoringRule::ChargedMultiplier {
                full_charges: 2,
                first: 2.0,
                later: 4.0,
            }],
            Self::Philsosophy => &[ScoringRule::ChanceAdjustment {
                bonus_chance: 0.20,
                bonus: 20,
                penalty_chance: 0.10,
                penalty: -10,
            }],
            Self::Heisenberg => &[ScoringRule::DoubleOrNothing {
                win_chance: 0.5,
                factor: 3.0,
            }],
            Self::SchruteBucks => &[ScoringRule::FixedScore { points: 1 }],
            Self::ThanosGift => &[ScoringRule::Sacrifice],
            _ => &[],
        }
    }
}
