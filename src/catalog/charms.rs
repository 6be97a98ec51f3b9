use serde::{Deserialize, Serialize};

use super::{
    rules::{ScoringRule, TileFilter, WordPredicate},
    EffectType,
};

/// Persistent modifiers picked by the player during a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Charm {
    STierScorer,
    Finisher,
    Recycler,
    TheValve,
    WildcardWake,
    SilentKiller,
    Momentum,
    StrikeBank,
    OneRing,
    FluxCapacitor,
    BulletTime,
    InfinityGauntlet,
    BatSignal,
    MillenniumFalcon,
    TriforceOfCourage,
    PowerPellet,
    GoldenTicket,
    ChaosTheory,
    StarPower,
    WeDidntStartTheFire,
    GoldenSnitch,
    PianoManEncore,
    ItalianRestaurantEnding,
    InigosRevenge,
    BattleOfWits,
    TrueLove,
    NicolesGrace,
    ChristiansHoodieMode,
    LenaOfTheLostLights,
    LTrainShuffle,
    DeepFreeze,
    BeanCounter,
    DiceRollProtocol,
    GlitchInTheCode,
    ShapeshiftersTongue,
    OneTileToRuleThemAll,
    GroundhogsDay,
    DoctorStrangesLoop,
    SherlocksSyntax,
    ExecuteOrder66,
    SacredHeart,
}

const BAT_SIGNAL_LETTERS: &[char] = &['B', 'A', 'T', 'M'];
const RARE_LETTERS: &[char] = &['Z', 'X', 'Q'];

impl Charm {
    pub const ALL: [Charm; 41] = [
        Charm::STierScorer,
        Charm::Finisher,
        Charm::Recycler,
        Charm::TheValve,
        Charm::WildcardWake,
        Charm::SilentKiller,
        Charm::Momentum,
        Charm::StrikeBank,
        Charm::OneRing,
        Charm::FluxCapacitor,
        Charm::BulletTime,
        Charm::InfinityGauntlet,
        Charm::BatSignal,
        Charm::MillenniumFalcon,
        Charm::TriforceOfCourage,
        Charm::PowerPellet,
        Charm::GoldenTicket,
        Charm::ChaosTheory,
        Charm::StarPower,
        Charm::WeDidntStartTheFire,
        Charm::GoldenSnitch,
        Charm::PianoManEncore,
        Charm::ItalianRestaurantEnding,
        Charm::InigosRevenge,
        Charm::BattleOfWits,
        Charm::TrueLove,
        Charm::NicolesGrace,
        Charm::ChristiansHoodieMode,
        Charm::LenaOfTheLostLights,
        Charm::LTrainShuffle,
        Charm::DeepFreeze,
        Charm::BeanCounter,
        Charm::DiceRollProtocol,
        Charm::GlitchInTheCode,
        Charm::ShapeshiftersTongue,
        Charm::OneTileToRuleThemAll,
        Charm::GroundhogsDay,
        Charm::DoctorStrangesLoop,
        Charm::SherlocksSyntax,
        Charm::ExecuteOrder66,
        Charm::SacredHeart,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::STierScorer => "S-Tier Scorer",
            Self::Finisher => "Finisher",
            Self::Recycler => "Recycler",
            Self::TheValve => "Vowel Lover",
            Self::WildcardWake => "Wildcard Wake",
            Self::SilentKiller => "Silent Killer",
            Self::Momentum => "Momentum",
            Self::StrikeBank => "Strike Bank",
            Self::OneRing => "The One Ring",
            Self::FluxCapacitor => "Flux Capacitor",
            Self::BulletTime => "Bullet Time",
            Self::InfinityGauntlet => "Infinity Gauntlet",
            Self::BatSignal => "Bat-Signal",
            Self::MillenniumFalcon => "Millennium Falcon",
            Self::TriforceOfCourage => "Triforce of Courage",
            Self::PowerPellet => "Power Pellet",
            Self::GoldenTicket => "Golden Ticket",
            Self::ChaosTheory => "Chaos Theory",
            Self::StarPower => "Star Power",
            Self::WeDidntStartTheFire => "We Didn't Start the Fire",
            Self::GoldenSnitch => "Golden Snitch",
            Self::PianoManEncore => "Piano Man Encore",
            Self::ItalianRestaurantEnding => "Italian Restaurant Ending",
            Self::InigosRevenge => "Inigo's Revenge",
            Self::BattleOfWits => "Battle of Wits",
            Self::TrueLove => "True Love",
            Self::NicolesGrace => "Nicole's Grace",
            Self::ChristiansHoodieMode => "Christian's Hoodie Mode",
            Self::LenaOfTheLostLights => "Lena of the Lost Lights",
            Self::LTrainShuffle => "L Train Shuffle",
            Self::DeepFreeze => "Deep Freeze",
            Self::BeanCounter => "Bean Counter",
            Self::DiceRollProtocol => "Dice Roll Protocol",
            Self::GlitchInTheCode => "Glitch in the Code",
            Self::ShapeshiftersTongue => "Shapeshifter's Tongue",
            Self::OneTileToRuleThemAll => "One Tile to Rule Them All",
            Self::GroundhogsDay => "Groundhog's Day",
            Self::DoctorStrangesLoop => "Dr. Strange's Loop",
            Self::SherlocksSyntax => "Sherlock's Syntax",
            Self::ExecuteOrder66 => "Execute Order 66",
            Self::SacredHeart => "Sacred Heart",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::STierScorer => "Every S tile is now worth 15 points and doubles your word score.",
            Self::Finisher => "The base point value of the last letter tile in any valid word is multiplied by 3.",
            Self::Recycler => "50% chance to get a new tile of the same letter back after using a tile that has a letter multiplier.",
            Self::TheValve => "All vowels now gain +10 points.",
            Self::WildcardWake => "When you equip this Charm, you gain an immediate extra shuffle.",
            Self::SilentKiller => "If a valid submitted word contains no vowel tiles, its total score is multiplied by 4.",
            Self::Momentum => "Make 2 valid words in a row under 10 seconds? +20 bonus points.",
            Self::StrikeBank => "Earn a 4th strike at 500 flawless points. Reach 1000 flawless points for a 5th. Strikes reset the counter.",
            Self::OneRing => "Each E in a word gives +15 points.",
            Self::FluxCapacitor => "Every 8th word played earns +55% bonus.",
            Self::BulletTime => "If a submitted word is 6 letters long or longer, a flat bonus of 20 points is added to its score.",
            Self::InfinityGauntlet => "Use every tile in your hand in a single valid word for a flat 75 points on top of the Super Hand Bonus.",
            Self::BatSignal => "Words starting or ending in B, A, T, or M earn +20 points.",
            Self::MillenniumFalcon => "Use exactly 3 consonants in a word to get +20 points.",
            Self::TriforceOfCourage => "If a submitted word contains a Z, X, or Q tile, a flat bonus of 15 points is added to its score.",
            Self::PowerPellet => "All 5-letter words earn +25 points.",
            Self::GoldenTicket => "For every valid word submitted, there is a 10% chance that its final score will be multiplied by 3.",
            Self::ChaosTheory => "Words with an even number of letters earn +20.",
            Self::StarPower => "Words with S, T, and A earn 4x score.",
            Self::WeDidntStartTheFire => "Words with 3+ unique vowels get +25 points.",
            Self::GoldenSnitch => "Get 5 valid words in a row to earn +500 points. Miss once, and it's gone.",
            Self::PianoManEncore => "Score 45+ on a word and your next word gains +15%.",
            Self::ItalianRestaurantEnding => "If your word ends in 'AN', each vowel in it earns 3x points.",
            Self::InigosRevenge => "Use the letter 'I' twice in a word to earn +50 points.",
            Self::BattleOfWits => "Words that start and end with the same letter score 4x.",
            Self::TrueLove => "Words that contain L, V, and E earn +100 points.",
            Self::NicolesGrace => "If the submitted word contains at least one 'M' or ends in a vowel, it earns a 15% bonus to its total score.",
            Self::ChristiansHoodieMode => "If your word contains the letters G, A, or M, and is submitted within 10 seconds, it earns a 15% bonus to its total score.",
            Self::LenaOfTheLostLights => "If the submitted word contains at least one of the letters D, R, K, or N, a 10% bonus is added to its total score.",
            Self::LTrainShuffle => "Submit a word with both 'L' and 'T' to gain a free shuffle (max twice per game).",
            Self::DeepFreeze => "When the timer hits 0, the game pauses for 2 extra seconds before ending. One-time use.",
            Self::BeanCounter => "Grants a flat bonus of 50 points when your total score hits a multiple of 500.",
            Self::DiceRollProtocol => "For the next 3 turns, one tile gets swapped and gains 2x points.",
            Self::GlitchInTheCode => "After every 6th consecutive valid word, a 5-second bonus is added to the timer for the next word submission only.",
            Self::ShapeshiftersTongue => "Once per game, change one letter in your hand to any other letter of your choice.",
            Self::OneTileToRuleThemAll => "One randomly assigned tile in your hand becomes worth 25 points for one use.",
            Self::GroundhogsDay => "If your timer ends without any word played, you restart the round with the same tiles and timer. One-time use.",
            Self::DoctorStrangesLoop => "If you submit the same valid word twice in a single game, the second submission automatically earns a 2x score multiplier.",
            Self::SherlocksSyntax => "Form a palindrome word to add +50 points to your word score.",
            Self::ExecuteOrder66 => "If your word includes a double letter (like 'LL'), add 6 seconds to your next round.",
            Self::SacredHeart => "If your word uses the letters J and D you instantly add 22 points to your score.",
        }
    }

    pub fn effect_type(&self) -> EffectType {
        match self {
            Self::WildcardWake | Self::OneTileToRuleThemAll => EffectType::Immediate,
            Self::ShapeshiftersTongue => EffectType::Selection,
            Self::Momentum
            | Self::FluxCapacitor
            | Self::InfinityGauntlet
            | Self::GoldenSnitch
            | Self::ChristiansHoodieMode
            | Self::LTrainShuffle
            | Self::DeepFreeze
            | Self::BeanCounter
            | Self::DiceRollProtocol
            | Self::GlitchInTheCode
            | Self::GroundhogsDay
            | Self::ExecuteOrder66 => EffectType::Triggered,
            _ => EffectType::Passive,
        }
    }

    /// Uses allowed per game, for charms that wear out
    pub fn max_uses(&self) -> Option<u32> {
        match self {
            Self::LTrainShuffle => Some(2),
            Self::DiceRollProtocol => Some(3),
            Self::DeepFreeze | Self::ShapeshiftersTongue | Self::GroundhogsDay => Some(1),
            _ => None,
        }
    }

    /// Rules the scorer applies while this charm is active.
    /// Charms whose effect lives in round orchestration have none.
    pub fn scoring_rules(&self) -> &'static [ScoringRule] {
        match self {
            Self::STierScorer => &[
                ScoringRule::LetterValue {
                    letter: 'S',
                    points: 15,
                },
                ScoringRule::WordMultiplier {
                    when: WordPredicate::ContainsAny(&['S']),
                    factor: 2.0,
                },
            ],
            Self::Finisher => &[ScoringRule::LastTileBonus { factor: 2 }],
            Self::TheValve => &[ScoringRule::PerTile {
                filter: TileFilter::Vowel,
                points: 10,
            }],
            Self::OneRing => &[ScoringRule::PerTile {
                filter: TileFilter::Letter('E'),
                points: 15,
            }],
            Self::ItalianRestaurantEnding => &[ScoringRule::VowelValueBonus {
                when: WordPredicate::EndsWith("AN"),
                factor: 2,
            }],
            Self::BulletTime => &[ScoringRule::FlatBonus {
                when: WordPredicate::MinLength(6),
                points: 20,
            }],
            Self::PowerPellet => &[ScoringRule::FlatBonus {
                when: WordPredicate::ExactLength(5),
                points: 25,
            }],
            Self::BatSignal => &[ScoringRule::FlatBonus {
                when: WordPredicate::StartsOrEndsWithAny(BAT_SIGNAL_LETTERS),
                points: 20,
            }],
            Self::TriforceOfCourage => &[ScoringRule::FlatBonus {
                when: WordPredicate::ContainsAny(RARE_LETTERS),
                points: 15,
            }],
            Self::WeDidntStartTheFire => &[ScoringRule::FlatBonus {
                when: WordPredicate::DistinctVowelsAtLeast(3),
                points: 25,
            }],
            Self::TrueLove => &[ScoringRule::FlatBonus {
                when: WordPredicate::ContainsAll(&['L', 'V', 'E']),
                points: 100,
            }],
            Self::InigosRevenge => &[ScoringRule::FlatBonus {
                when: WordPredicate::LetterAtLeast('I', 2),
                points: 50,
            }],
            Self::ChaosTheory => &[ScoringRule::FlatBonus {
                when: WordPredicate::EvenLength,
                points: 20,
            }],
            Self::SacredHeart => &[ScoringRule::FlatBonus {
                when: WordPredicate::ContainsAll(&['J', 'D']),
                points: 22,
            }],
            Self::MillenniumFalcon => &[ScoringRule::FlatBonus {
                when: WordPredicate::ExactConsonants(3),
                points: 20,
            }],
            Self::SherlocksSyntax => &[ScoringRule::FlatBonus {
                when: WordPredicate::Palindrome,
                points: 50,
            }],
            Self::SilentKiller => &[ScoringRule::WordMultiplier {
                when: WordPredicate::NoVowels,
                factor: 4.0,
            }],
            Self::BattleOfWits => &[ScoringRule::WordMultiplier {
                when: WordPredicate::SameFirstAndLast,
                factor: 4.0,
            }],
            Self::StarPower => &[ScoringRule::WordMultiplier {
                when: WordPredicate::ContainsAll(&['S', 'T', 'A']),
                factor: 4.0,
            }],
            Self::NicolesGrace => &[ScoringRule::WordMultiplier {
                when: WordPredicate::AnyOf(&[
                    WordPredicate::ContainsAny(&['M']),
                    WordPredicate::EndsWithVowel,
                ]),
                factor: 1.15,
            }],
            Self::LenaOfTheLostLights => &[ScoringRule::WordMultiplier {
                when: WordPredicate::ContainsAny(&['D', 'R', 'K', 'N']),
                factor: 1.10,
            }],
            Self::GoldenTicket => &[ScoringRule::ChanceMultiplier {
                chance: 0.10,
                factor: 3.0,
            }],
            _ => &[],
        }
    }
}
