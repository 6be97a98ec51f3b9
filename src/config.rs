use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;
use std::str::FromStr;

use crate::game::{FairnessRules, ScoringRules};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub game: GameConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GameConfig {
    /// Word list for the playability check; the bundled list is used when unset
    pub dictionary_path: Option<String>,
    pub rack_size: usize,
    pub min_word_length: usize,
    pub duplicate_cap: usize,
    pub weight_cap: u32,
    pub playability_retries: usize,
    pub long_word_threshold: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        let fairness = FairnessRules::default();
        Self {
            dictionary_path: None,
            rack_size: fairness.rack_size,
            min_word_length: 3,
            duplicate_cap: fairness.duplicate_cap,
            weight_cap: fairness.weight_cap,
            playability_retries: fairness.playability_retries,
            long_word_threshold: ScoringRules::default().long_word_threshold,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

/// Read a numeric variable, falling back to `default` when unset
fn parse_var<T: FromStr>(name: &str, default: T) -> Result<T> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .ok()
            .with_context(|| format!("{} must be a number", name)),
        Err(_) => Ok(default),
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let server_defaults = ServerConfig::default();
        let server = ServerConfig {
            host: env::var("HOST").unwrap_or(server_defaults.host),
            port: parse_var("PORT", server_defaults.port)?,
        };

        let defaults = GameConfig::default();
        let game = GameConfig {
            dictionary_path: env::var("DICTIONARY_PATH").ok().filter(|path| !path.is_empty()),
            rack_size: parse_var("RACK_SIZE", defaults.rack_size)?,
            min_word_length: parse_var("MIN_WORD_LENGTH", defaults.min_word_length)?,
            duplicate_cap: parse_var("DUPLICATE_CAP", defaults.duplicate_cap)?,
            weight_cap: parse_var("WEIGHT_CAP", defaults.weight_cap)?,
            playability_retries: parse_var("PLAYABILITY_RETRIES", defaults.playability_retries)?,
            long_word_threshold: parse_var("LONG_WORD_THRESHOLD", defaults.long_word_threshold)?,
        };

        Ok(Config { server, game })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl GameConfig {
    pub fn fairness_rules(&self) -> FairnessRules {
        FairnessRules {
            rack_size: self.rack_size,
            duplicate_cap: self.duplicate_cap,
            weight_cap: self.weight_cap,
            playability_retries: self.playability_retries,
            ..FairnessRules::default()
        }
    }

    pub fn scoring_rules(&self) -> ScoringRules {
        ScoringRules {
            long_word_threshold: self.long_word_threshold,
            ..ScoringRules::default()
        }
    }
}
