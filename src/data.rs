use crate::model::{Language, WordEntry};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};

/// Static per-language, per-level word tables. Levels are keyed by their
/// human number (1, 2, 3, ...).
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct WordBank {
    lists: HashMap<Language, BTreeMap<u32, Vec<WordEntry>>>,
}

/// Loads the word bank from the embedded YAML.
pub fn read_word_bank_embedded() -> WordBank {
    let file_content = include_str!("data/word_lists.yaml");
    serde_yaml::from_str(file_content).expect("embedded word lists are malformed")
}

impl WordBank {
    /// Level numbers available for a language, in ascending order.
    pub fn level_numbers(&self, language: Language) -> Vec<u32> {
        self.lists
            .get(&language)
            .map(|levels| levels.keys().copied().collect())
            .unwrap_or_default()
    }

    pub fn level_count(&self, language: Language) -> usize {
        self.lists.get(&language).map(|levels| levels.len()).unwrap_or(0)
    }

    pub fn words(&self, language: Language, level: u32) -> Option<&[WordEntry]> {
        self.lists
            .get(&language)
            .and_then(|levels| levels.get(&level))
            .map(|words| words.as_slice())
    }

    pub fn has_level(&self, language: Language, level: u32) -> bool {
        self.words(language, level).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_bank_parses() {
        let bank = read_word_bank_embedded();
        assert_eq!(bank.level_count(Language::English), 5);
        assert_eq!(bank.level_count(Language::Irish), 5);
    }

    #[test]
    fn every_level_has_nonempty_words_and_hints() {
        let bank = read_word_bank_embedded();
        for language in Language::ALL {
            let levels = bank.level_numbers(language);
            assert!(!levels.is_empty());
            for level in levels {
                let words = bank.words(language, level).unwrap();
                assert!(!words.is_empty(), "{language:?} level {level} is empty");
                for entry in words {
                    assert!(!entry.word.trim().is_empty());
                    assert!(!entry.hint.trim().is_empty());
                }
            }
        }
    }

    #[test]
    fn levels_are_consecutive_from_one() {
        let bank = read_word_bank_embedded();
        for language in Language::ALL {
            let levels = bank.level_numbers(language);
            let expected: Vec<u32> = (1..=levels.len() as u32).collect();
            assert_eq!(levels, expected);
        }
    }

    #[test]
    fn missing_level_is_none() {
        let bank = read_word_bank_embedded();
        assert!(bank.words(Language::English, 6).is_none());
        assert!(bank.words(Language::English, 0).is_none());
    }
}
