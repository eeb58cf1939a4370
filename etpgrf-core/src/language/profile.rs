//! Per-language character classification

use super::codes::Language;
use super::config::ProfileConfig;
use crate::error::{ConfigError, Result};
use std::collections::HashSet;

/// Phonetic class of a letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// Vowel letter
    Vowel,
    /// Consonant letter
    Consonant,
    /// Semivowel, e.g. Russian "й"
    Semivowel,
    /// Orthographic sign that carries no sound, e.g. "ь", "ъ"
    Sign,
    /// Anything outside the language alphabet
    Other,
}

/// Immutable letter classes of one language
///
/// All sets hold upper-case letters; lookups fold case first.
#[derive(Debug, Clone)]
pub struct LanguageProfile {
    language: Language,
    name: String,
    vowels: HashSet<char>,
    consonants: HashSet<char>,
    semivowels: HashSet<char>,
    signs: HashSet<char>,
}

/// Fold a character to upper case when the mapping is a single character
#[inline]
pub(crate) fn fold_case(ch: char) -> char {
    let mut upper = ch.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(folded), None) => folded,
        _ => ch,
    }
}

fn letter_set(letters: &str) -> HashSet<char> {
    letters
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(fold_case)
        .collect()
}

impl LanguageProfile {
    /// Parse and validate a profile from TOML source
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: ProfileConfig = toml::from_str(source).map_err(|e| ConfigError::Profile {
            code: "<unknown>".to_string(),
            reason: e.to_string(),
        })?;
        Self::from_config(&config)
    }

    /// Build a profile from an already parsed configuration
    pub fn from_config(config: &ProfileConfig) -> Result<Self> {
        let profile_error = |reason: String| ConfigError::Profile {
            code: config.metadata.code.clone(),
            reason,
        };

        config.validate().map_err(profile_error)?;
        let language = config.metadata.code.parse::<Language>().map_err(|e| {
            profile_error(format!("metadata.code is not a supported language: {e}"))
        })?;

        Ok(Self {
            language,
            name: config.metadata.name.clone(),
            vowels: letter_set(&config.letters.vowels),
            consonants: letter_set(&config.letters.consonants),
            semivowels: letter_set(&config.letters.semivowels),
            signs: letter_set(&config.letters.signs),
        })
    }

    /// Language this profile describes
    pub fn language(&self) -> Language {
        self.language
    }

    /// Profile display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Classify a character, ignoring case
    pub fn classify(&self, ch: char) -> CharClass {
        let ch = fold_case(ch);
        if self.vowels.contains(&ch) {
            CharClass::Vowel
        } else if self.consonants.contains(&ch) {
            CharClass::Consonant
        } else if self.semivowels.contains(&ch) {
            CharClass::Semivowel
        } else if self.signs.contains(&ch) {
            CharClass::Sign
        } else {
            CharClass::Other
        }
    }

    #[inline]
    pub fn is_vowel(&self, ch: char) -> bool {
        self.vowels.contains(&fold_case(ch))
    }

    #[inline]
    pub fn is_consonant(&self, ch: char) -> bool {
        self.consonants.contains(&fold_case(ch))
    }

    #[inline]
    pub fn is_semivowel(&self, ch: char) -> bool {
        self.semivowels.contains(&fold_case(ch))
    }

    #[inline]
    pub fn is_sign(&self, ch: char) -> bool {
        self.signs.contains(&fold_case(ch))
    }

    /// Whether the character belongs to the alphabet (any category)
    pub fn contains(&self, ch: char) -> bool {
        self.classify(ch) != CharClass::Other
    }

    /// Whether every character of `word` belongs to the alphabet
    pub fn covers(&self, word: &[char]) -> bool {
        word.iter().all(|&ch| self.contains(ch))
    }

    /// Every letter of the alphabet in both cases, sorted
    pub fn letters(&self) -> Vec<char> {
        let mut letters: Vec<char> = self
            .vowels
            .iter()
            .chain(&self.consonants)
            .chain(&self.semivowels)
            .chain(&self.signs)
            .flat_map(|&upper| std::iter::once(upper).chain(upper.to_lowercase()))
            .collect();
        letters.sort_unstable();
        letters.dedup();
        letters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[metadata]
code = "ru"
name = "Sample"

[letters]
vowels = "АО"
consonants = "БВ"
semivowels = "Й"
signs = "Ь"
"#;

    #[test]
    fn test_classify_folds_case() {
        let profile = LanguageProfile::from_toml_str(SAMPLE).unwrap();
        assert_eq!(profile.classify('а'), CharClass::Vowel);
        assert_eq!(profile.classify('А'), CharClass::Vowel);
        assert_eq!(profile.classify('б'), CharClass::Consonant);
        assert_eq!(profile.classify('й'), CharClass::Semivowel);
        assert_eq!(profile.classify('Ь'), CharClass::Sign);
        assert_eq!(profile.classify('z'), CharClass::Other);
        assert_eq!(profile.classify('1'), CharClass::Other);
    }

    #[test]
    fn test_letters_include_both_cases() {
        let profile = LanguageProfile::from_toml_str(SAMPLE).unwrap();
        let letters = profile.letters();
        assert_eq!(letters.len(), 12);
        assert!(letters.contains(&'й'));
        assert!(letters.contains(&'Й'));
    }

    #[test]
    fn test_overlapping_categories_are_rejected() {
        let source = SAMPLE.replace("consonants = \"БВ\"", "consonants = \"БА\"");
        let err = LanguageProfile::from_toml_str(&source).unwrap_err();
        assert!(err.to_string().contains("appears in both"));
    }

    #[test]
    fn test_unknown_code_is_rejected() {
        let source = SAMPLE.replace("code = \"ru\"", "code = \"xx\"");
        assert!(matches!(
            LanguageProfile::from_toml_str(&source),
            Err(ConfigError::Profile { .. })
        ));
    }
}
