//! Language codes and language selection parsing

use crate::error::{ConfigError, Result};
use std::fmt;
use std::str::FromStr;

/// A language supported by the typographer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Language {
    /// Russian, modern orthography
    Russian,
    /// Russian, pre-reform orthography
    RussianOld,
    /// English
    English,
}

impl Language {
    /// Every supported language
    pub const ALL: [Language; 3] = [Language::Russian, Language::RussianOld, Language::English];

    /// Short code used in configuration ("ru", "ruold", "en")
    pub fn code(&self) -> &'static str {
        match self {
            Language::Russian => "ru",
            Language::RussianOld => "ruold",
            Language::English => "en",
        }
    }

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Language::Russian => "Russian",
            Language::RussianOld => "Russian (pre-reform)",
            Language::English => "English",
        }
    }

    /// Look up a language by its code, ignoring case
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(code.trim()))
    }

    /// Comma-separated list of supported codes, for error messages
    pub fn supported_codes() -> String {
        Self::ALL
            .iter()
            .map(Language::code)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Whether the language belongs to the Russian family
    pub fn is_russian(&self) -> bool {
        matches!(self, Language::Russian | Language::RussianOld)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_code(s).ok_or_else(|| ConfigError::UnsupportedLanguage {
            code: s.trim().to_lowercase(),
            supported: Self::supported_codes(),
        })
    }
}

/// A non-empty, ordered, duplicate-free selection of languages
///
/// Order is the order in which the languages were given. The first one is
/// the primary language for rules that can only follow one convention
/// (dash spacing, quote style), and hyphenation tries the languages in
/// this order when picking classification rules for a word.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LanguageSet {
    languages: Vec<Language>,
}

impl LanguageSet {
    /// Parse a delimited selection such as `"ru+en"` or `"ru, en"`
    ///
    /// Any run of characters that are not ASCII letters separates codes.
    pub fn parse(input: &str) -> Result<Self> {
        Self::from_codes(
            input
                .split(|c: char| !c.is_ascii_alphabetic())
                .filter(|code| !code.is_empty()),
        )
    }

    /// Build a selection from individual codes
    pub fn from_codes<I, S>(codes: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut languages = Vec::new();
        for code in codes {
            let code = code.as_ref().trim();
            if code.is_empty() {
                continue;
            }
            let language = code.parse::<Language>()?;
            if !languages.contains(&language) {
                languages.push(language);
            }
        }
        Self::from_languages(languages)
    }

    /// Build a selection from already-typed languages
    pub fn from_languages<I>(languages: I) -> Result<Self>
    where
        I: IntoIterator<Item = Language>,
    {
        let mut unique = Vec::new();
        for language in languages {
            if !unique.contains(&language) {
                unique.push(language);
            }
        }
        if unique.is_empty() {
            return Err(ConfigError::EmptyLanguages {
                supported: Language::supported_codes(),
            });
        }
        Ok(Self { languages: unique })
    }

    /// A selection holding a single language
    pub fn single(language: Language) -> Self {
        Self {
            languages: vec![language],
        }
    }

    /// The first language of the selection
    pub fn primary(&self) -> Language {
        self.languages[0]
    }

    /// Whether the selection contains `language`
    pub fn contains(&self, language: Language) -> bool {
        self.languages.contains(&language)
    }

    /// Languages in selection order
    pub fn iter(&self) -> impl Iterator<Item = Language> + '_ {
        self.languages.iter().copied()
    }

    /// Number of selected languages
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    /// Always false; kept for API symmetry with collections
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

impl fmt::Display for LanguageSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let codes: Vec<&str> = self.languages.iter().map(Language::code).collect();
        f.write_str(&codes.join("+"))
    }
}

impl FromStr for LanguageSet {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<Language> for LanguageSet {
    fn from(language: Language) -> Self {
        Self::single(language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_delimited_string() {
        let set = LanguageSet::parse("ru+en").unwrap();
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![Language::Russian, Language::English]);
        assert_eq!(set.primary(), Language::Russian);

        let set = LanguageSet::parse(" EN ; ru ").unwrap();
        assert_eq!(set.primary(), Language::English);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_parse_deduplicates_preserving_order() {
        let set = LanguageSet::parse("en-ru-en-RU").unwrap();
        assert_eq!(set.to_string(), "en+ru");
    }

    #[test]
    fn test_from_codes_sequence() {
        let set = LanguageSet::from_codes(["ruold", "ru"]).unwrap();
        assert_eq!(set.primary(), Language::RussianOld);
        assert!(set.contains(Language::Russian));
        assert!(!set.contains(Language::English));
    }

    #[test]
    fn test_empty_selection_is_rejected() {
        assert!(matches!(
            LanguageSet::parse(" + , "),
            Err(ConfigError::EmptyLanguages { .. })
        ));
        assert!(matches!(
            LanguageSet::from_codes(Vec::<String>::new()),
            Err(ConfigError::EmptyLanguages { .. })
        ));
    }

    #[test]
    fn test_unsupported_code_names_value_and_supported_set() {
        let err = LanguageSet::parse("ru+de").unwrap_err();
        match err {
            ConfigError::UnsupportedLanguage { code, supported } => {
                assert_eq!(code, "de");
                assert_eq!(supported, "ru, ruold, en");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_language_from_str_is_case_insensitive() {
        assert_eq!("RuOld".parse::<Language>().unwrap(), Language::RussianOld);
        assert!("russian".parse::<Language>().is_err());
    }
}
