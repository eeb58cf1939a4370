//! Soft-hyphen insertion
//!
//! Long words are split recursively near their midpoint. A break follows a
//! vowel, absorbs a trailing consonant or semivowel when the next letter is
//! not a vowel, keeps at least `min_tail_len` letters on both sides and is
//! never placed next to a sign letter (ь, ъ). Combining marks, such as a
//! stress accent, stay with the letter they follow and are not counted.
//!
//! # Example
//!
//! ```rust
//! use etpgrf_core::hyphenation::{HyphenationConfig, Hyphenator};
//! use etpgrf_core::language::{Language, LanguageSet};
//!
//! let config = HyphenationConfig::new(LanguageSet::single(Language::Russian))
//!     .with_max_unhyphenated_len(5)
//!     .with_min_tail_len(3);
//! let hyphenator = Hyphenator::new(config).unwrap();
//! assert_eq!(hyphenator.split_word("проверка"), "про\u{AD}верка");
//! ```

mod split;

use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::error::{ConfigError, Result};
use crate::language::{self, CharClass, Language, LanguageProfile, LanguageSet};
use crate::rules::TextProcessor;

pub(crate) use split::find_break_point;

/// Soft hyphen, the default split marker
pub const SOFT_HYPHEN: &str = "\u{00AD}";

/// Hyphenation parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HyphenationConfig {
    /// Languages whose words are hyphenated, in priority order
    pub languages: LanguageSet,
    /// Words of this many characters or fewer are never split
    pub max_unhyphenated_len: usize,
    /// Minimum number of characters on each side of a break
    pub min_tail_len: usize,
    /// Inserted at every break
    pub split_marker: String,
}

impl Default for HyphenationConfig {
    fn default() -> Self {
        Self::new(LanguageSet::single(Language::Russian))
    }
}

impl HyphenationConfig {
    /// Default parameters for the given languages
    pub fn new(languages: LanguageSet) -> Self {
        Self {
            languages,
            max_unhyphenated_len: 14,
            min_tail_len: 3,
            split_marker: SOFT_HYPHEN.to_string(),
        }
    }

    /// Set the length at or under which words are left alone
    pub fn with_max_unhyphenated_len(mut self, len: usize) -> Self {
        self.max_unhyphenated_len = len;
        self
    }

    /// Set the minimum tail length
    pub fn with_min_tail_len(mut self, len: usize) -> Self {
        self.min_tail_len = len;
        self
    }

    /// Set the break marker
    pub fn with_split_marker(mut self, marker: impl Into<String>) -> Self {
        self.split_marker = marker.into();
        self
    }

    /// Check parameter ranges
    ///
    /// `min_tail_len >= max_unhyphenated_len` is accepted; such a
    /// configuration simply never splits anything.
    pub fn validate(&self) -> Result<()> {
        if self.max_unhyphenated_len < 1 {
            return Err(ConfigError::InvalidParameter {
                name: "max_unhyphenated_len",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.min_tail_len < 1 {
            return Err(ConfigError::InvalidParameter {
                name: "min_tail_len",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.split_marker.is_empty() {
            return Err(ConfigError::InvalidParameter {
                name: "split_marker",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// Inserts break markers into long words
#[derive(Debug, Clone)]
pub struct Hyphenator {
    config: HyphenationConfig,
    profiles: Vec<&'static LanguageProfile>,
}

fn word_pattern() -> &'static Regex {
    static WORD: OnceLock<Regex> = OnceLock::new();
    WORD.get_or_init(|| Regex::new(r"[\p{L}\p{M}]+").expect("word pattern is valid"))
}

fn is_mark(ch: char) -> bool {
    static MARK: OnceLock<Regex> = OnceLock::new();
    let mut buf = [0u8; 4];
    MARK.get_or_init(|| Regex::new(r"^\p{M}$").expect("mark pattern is valid"))
        .is_match(ch.encode_utf8(&mut buf))
}

impl Hyphenator {
    /// Create a hyphenator, validating the configuration
    pub fn new(config: HyphenationConfig) -> Result<Self> {
        config.validate()?;
        let profiles = config
            .languages
            .iter()
            .map(language::profile)
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(
            languages = %config.languages,
            max_unhyphenated_len = config.max_unhyphenated_len,
            min_tail_len = config.min_tail_len,
            "hyphenator created"
        );

        Ok(Self { config, profiles })
    }

    /// Create a hyphenator with default parameters for `languages`
    pub fn with_languages(languages: LanguageSet) -> Result<Self> {
        Self::new(HyphenationConfig::new(languages))
    }

    /// Active configuration
    pub fn config(&self) -> &HyphenationConfig {
        &self.config
    }

    /// Classify a character against the active languages, in priority order
    pub fn classify(&self, ch: char) -> CharClass {
        self.profiles
            .iter()
            .map(|profile| profile.classify(ch))
            .find(|class| *class != CharClass::Other)
            .unwrap_or(CharClass::Other)
    }

    /// First active language whose alphabet covers every character of `word`
    fn profile_for(&self, word: &[char]) -> Option<&'static LanguageProfile> {
        self.profiles
            .iter()
            .copied()
            .find(|profile| profile.covers(word))
    }

    /// Insert break markers into a single word
    ///
    /// Short words, words without vowels and words outside every active
    /// alphabet come back unchanged.
    pub fn split_word(&self, word: &str) -> String {
        // Letters and the byte offset each one starts at; marks ride along
        let (letters, starts): (Vec<char>, Vec<usize>) = word
            .char_indices()
            .filter(|&(_, ch)| !is_mark(ch))
            .map(|(i, ch)| (ch, i))
            .unzip();
        if letters.len() <= self.config.max_unhyphenated_len {
            return word.to_string();
        }
        let Some(profile) = self.profile_for(&letters) else {
            tracing::trace!(word, "no active alphabet covers word");
            return word.to_string();
        };

        let mut breaks = Vec::new();
        self.collect_breaks(&letters, 0, profile, &mut breaks);
        if breaks.is_empty() {
            return word.to_string();
        }

        let marker = &self.config.split_marker;
        let mut out = String::with_capacity(word.len() + breaks.len() * marker.len());
        let mut last = 0;
        for point in breaks {
            let at = starts[point];
            out.push_str(&word[last..at]);
            out.push_str(marker);
            last = at;
        }
        out.push_str(&word[last..]);
        tracing::trace!(word, result = %out, "hyphenated");
        out
    }

    /// Record break indices of `segment` (starting at `offset` in the word)
    /// in increasing order
    fn collect_breaks(
        &self,
        segment: &[char],
        offset: usize,
        profile: &LanguageProfile,
        breaks: &mut Vec<usize>,
    ) {
        if segment.len() <= self.config.max_unhyphenated_len
            || !segment.iter().any(|&ch| profile.is_vowel(ch))
        {
            return;
        }

        if let Some(point) = find_break_point(segment, profile, self.config.min_tail_len) {
            let (left, right) = segment.split_at(point);
            self.collect_breaks(left, offset, profile, breaks);
            breaks.push(offset + point);
            self.collect_breaks(right, offset + point, profile, breaks);
        }
    }

    /// Hyphenate every word of `text`
    ///
    /// A word is a maximal run of Unicode letters and combining marks;
    /// everything between words is copied through untouched.
    pub fn process_text(&self, text: &str) -> String {
        word_pattern()
            .replace_all(text, |caps: &Captures<'_>| self.split_word(&caps[0]))
            .into_owned()
    }
}

impl TextProcessor for Hyphenator {
    fn name(&self) -> &'static str {
        "hyphenation"
    }

    fn process(&self, text: &str) -> String {
        self.process_text(text)
    }
}
