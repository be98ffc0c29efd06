use crate::config::ConfigError;
use rand::Rng;

pub const DEFAULT_WORDS: &[&str] = &[
    "Katze", "Hund", "Apfel", "Haus", "Baum", "Auto", "Sonne", "Mond", "Blume", "Pferd",
];

/// Fixed vocabulary the secret words are drawn from
#[derive(Debug, Clone)]
pub struct WordSource {
    words: Vec<String>,
}

impl WordSource {
    /// An empty vocabulary is a configuration error, never a runtime one
    pub fn new(words: Vec<String>) -> Result<Self, ConfigError> {
        if words.is_empty() {
            return Err(ConfigError::EmptyVocabulary);
        }
        Ok(Self { words })
    }

    /// Pick a word uniformly at random
    pub fn next_word<R: Rng>(&self, rng: &mut R) -> &str {
        &self.words[rng.random_range(0..self.words.len())]
    }
}

impl Default for WordSource {
    fn default() -> Self {
        Self {
            words: DEFAULT_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_empty_vocabulary_rejected() {
        assert!(matches!(
            WordSource::new(vec![]),
            Err(ConfigError::EmptyVocabulary)
        ));
    }

    #[test]
    fn test_single_word() {
        let words = WordSource::new(vec!["Katze".to_string()]).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..10 {
            assert_eq!(words.next_word(&mut rng), "Katze");
        }
    }

    #[test]
    fn test_words_come_from_vocabulary() {
        let words = WordSource::default();
        let mut rng = StdRng::seed_from_u64(7);

        let seen: HashSet<String> = (0..500)
            .map(|_| words.next_word(&mut rng).to_string())
            .collect();

        assert!(seen.iter().all(|w| DEFAULT_WORDS.contains(&w.as_str())));
        // 500 draws over 10 words should hit every one of them
        assert_eq!(seen.len(), DEFAULT_WORDS.len());
    }
}
