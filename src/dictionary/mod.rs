use std::collections::HashSet;
use std::path::Path;
use tokio::fs;
use anyhow::{Context, Result};

/// Reference word list bundled with the crate
const BUILTIN_WORDS: &str = include_str!("words.txt");

pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Load dictionary from a file
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read dictionary at {}", path.display()))?;
        let dictionary = Self::parse(&content);

        tracing::info!("Loaded {} words into dictionary", dictionary.len());

        Ok(dictionary)
    }

    /// The bundled reference list
    pub fn builtin() -> Self {
        Self::parse(BUILTIN_WORDS)
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|word| word.as_ref().trim().to_uppercase())
                .filter(|word| word.len() >= 2)
                .collect(),
        }
    }

    fn parse(content: &str) -> Self {
        Self::from_words(content.lines())
    }

    /// Create an empty dictionary (for testing)
    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    /// Check if a word exists in the dictionary
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_uppercase())
    }

    /// Words of exactly `len` letters, in no particular order
    pub fn short_words(&self, len: usize) -> impl Iterator<Item = &str> + '_ {
        self.words
            .iter()
            .filter(move |word| word.chars().count() == len)
            .map(String::as_str)
    }

    /// Get the number of words in the dictionary
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if dictionary is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
