//! Dictionary-based detection of misspelled words inside identifiers.

use crate::config::SpellingConfig;
use crate::dictionary::Dictionary;
use crate::distance::edit_distance_within;
use crate::tokenizer::tokenize;
use crate::types::{Location, SpellingMistake};

/// Closest dictionary word for a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Correction<'a> {
    /// Dictionary word.
    pub word: &'a str,
    /// Edit distance from the token to the word.
    pub distance: usize,
}

/// Flags sub-tokens of a name that are close to, but not exactly, a
/// dictionary word.
#[derive(Debug, Clone)]
pub struct SpellChecker {
    dictionary: Dictionary,
    min_token_length: usize,
    min_name_length: usize,
    max_distance: usize,
}

impl SpellChecker {
    /// Creates a checker with default thresholds: names and tokens of at
    /// least 4 characters, distances below 4.
    #[must_use]
    pub fn new(dictionary: Dictionary) -> Self {
        Self::from_config(dictionary, &SpellingConfig::default())
    }

    /// Creates a checker with thresholds from configuration.
    #[must_use]
    pub fn from_config(dictionary: Dictionary, config: &SpellingConfig) -> Self {
        Self {
            dictionary,
            min_token_length: config.min_token_length,
            min_name_length: config.min_name_length,
            max_distance: config.max_distance,
        }
    }

    /// Sets the minimum token length.
    #[must_use]
    pub fn min_token_length(mut self, len: usize) -> Self {
        self.min_token_length = len;
        self
    }

    /// Sets the minimum name length.
    #[must_use]
    pub fn min_name_length(mut self, len: usize) -> Self {
        self.min_name_length = len;
        self
    }

    /// Sets the exclusive upper bound on reported distances.
    #[must_use]
    pub fn max_distance(mut self, distance: usize) -> Self {
        self.max_distance = distance;
        self
    }

    /// Returns the dictionary.
    #[must_use]
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Whether a name is long enough to be spell-checked.
    #[must_use]
    pub fn should_check(&self, name: &str) -> bool {
        name.chars().count() >= self.min_name_length
    }

    /// Finds the first dictionary word at minimal distance from `token`,
    /// provided that distance is below the limit.
    #[must_use]
    pub fn closest(&self, token: &str) -> Option<Correction<'_>> {
        let mut best: Option<Correction<'_>> = None;
        for word in self.dictionary.iter() {
            let limit = best.map_or(self.max_distance, |c| c.distance);
            if let Some(distance) = edit_distance_within(token, word, limit) {
                best = Some(Correction { word, distance });
                if distance == 0 {
                    break;
                }
            }
        }
        best
    }

    /// Reports every sub-token of `name` that is a near miss of a
    /// dictionary word. Exact matches and distant tokens are not reported;
    /// tokens shorter than the minimum length are skipped.
    #[must_use]
    pub fn find_mistakes(&self, name: &str, location: &Location) -> Vec<SpellingMistake> {
        tokenize(name)
            .into_iter()
            .filter(|token| token.chars().count() >= self.min_token_length)
            .filter_map(|token| {
                let correction = self.closest(&token)?;
                (correction.distance > 0).then(|| SpellingMistake {
                    entity_name: name.to_string(),
                    suggested_word: correction.word.to_string(),
                    distance: correction.distance,
                    wrong_token: token,
                    location: location.clone(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker(words: &[&str]) -> SpellChecker {
        SpellChecker::new(Dictionary::from_words(words.iter().copied()))
    }

    fn here() -> Location {
        Location::new("src/a.cpp", 12)
    }

    #[test]
    fn flags_near_miss_and_skips_exact_match() {
        let mistakes = checker(&["receive", "count"]).find_mistakes("recieve_count", &here());
        assert_eq!(mistakes.len(), 1);
        assert_eq!(mistakes[0].wrong_token, "recieve");
        assert_eq!(mistakes[0].suggested_word, "receive");
        assert_eq!(mistakes[0].entity_name, "recieve_count");
        assert_eq!(mistakes[0].distance, 2);
        assert_eq!(mistakes[0].location, here());
    }

    #[test]
    fn three_letter_tokens_are_never_checked() {
        let spell = checker(&["the", "count"]);
        assert!(spell.find_mistakes("teh_count", &here()).is_empty());
        assert!(spell.find_mistakes("a_b_c", &here()).is_empty());
        assert!(checker(&["a", "b", "bb"])
            .find_mistakes("a_b_c", &here())
            .is_empty());
    }

    #[test]
    fn distant_tokens_are_not_reported() {
        let spell = checker(&["zzzzzzzz"]);
        assert!(spell.find_mistakes("counter", &here()).is_empty());
    }

    #[test]
    fn first_word_at_minimal_distance_wins() {
        let spell = checker(&["cart", "core", "care"]);
        let correction = spell.closest("cure").unwrap();
        assert_eq!(correction.word, "core");
        assert_eq!(correction.distance, 1);
    }

    #[test]
    fn exact_match_anywhere_suppresses_report() {
        let spell = checker(&["counts", "count"]);
        assert_eq!(spell.closest("count").unwrap().distance, 0);
        assert!(spell.find_mistakes("count", &here()).is_empty());
    }

    #[test]
    fn token_is_case_folded_before_lookup() {
        let spell = checker(&["retry", "maximum"]);
        assert!(spell.find_mistakes("MaximumRetry", &here()).is_empty());
        let mistakes = spell.find_mistakes("MaxumumRetry", &here());
        assert_eq!(mistakes.len(), 1);
        assert_eq!(mistakes[0].wrong_token, "Maxumum");
        assert_eq!(mistakes[0].suggested_word, "maximum");
    }

    #[test]
    fn empty_dictionary_reports_nothing() {
        let spell = checker(&[]);
        assert!(spell.find_mistakes("recieve_count", &here()).is_empty());
    }

    #[test]
    fn name_length_threshold() {
        let spell = checker(&[]);
        assert!(!spell.should_check("abc"));
        assert!(spell.should_check("abcd"));
    }

    #[test]
    fn thresholds_are_configurable() {
        let spell = checker(&["the"]).min_token_length(3).max_distance(3);
        let mistakes = spell.find_mistakes("teh_value", &here());
        assert_eq!(mistakes.len(), 1);
        assert_eq!(mistakes[0].suggested_word, "the");
    }
}
