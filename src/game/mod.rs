// Game engine: tile bag, hand repair, scoring and tile effects

pub mod bag;
pub mod effects;
pub mod fairness;
pub mod scorer;
pub mod validator;

pub use bag::{Draw, TileBag};
pub use fairness::{FairnessEngine, FairnessRules, Repair};
pub use scorer::{Scorer, ScoringRules};
pub use validator::{can_form_word, SubmissionError, WordValidator};
