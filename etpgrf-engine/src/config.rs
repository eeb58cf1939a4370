//! Typographer configuration
//!
//! Each pipeline stage is a [`Rule`] slot that is either switched off,
//! built from the typographer languages, or supplied ready-made.

use etpgrf_core::hyphenation::Hyphenator;
use etpgrf_core::rules::{
    LayoutProcessor, QuotesProcessor, SymbolsProcessor, UnbreakablesProcessor,
};
use etpgrf_core::{EncodeMode, LanguageSet};

use crate::error::Result;

/// Environment variable holding the default language list, e.g. `ru+en`
pub const DEFAULT_LANGS_ENV: &str = "ETPGRF_DEFAULT_LANGS";

/// Languages used when neither the caller nor the environment names any
pub const FALLBACK_LANGS: &str = "ru";

/// How a pipeline stage is provided
#[derive(Debug, Clone)]
pub enum Rule<T> {
    /// Stage is skipped
    Disabled,
    /// Stage is built with default settings for the typographer languages
    Default,
    /// Stage uses the given processor as is
    Custom(T),
}

impl<T> Default for Rule<T> {
    fn default() -> Self {
        Rule::Default
    }
}

impl<T> Rule<T> {
    /// Whether the stage runs at all
    pub fn is_enabled(&self) -> bool {
        !matches!(self, Rule::Disabled)
    }

    /// Turn the slot into a processor, building the default one on demand
    pub fn resolve<F>(self, default: F) -> Result<Option<T>>
    where
        F: FnOnce() -> Result<T>,
    {
        match self {
            Rule::Disabled => Ok(None),
            Rule::Default => default().map(Some),
            Rule::Custom(processor) => Ok(Some(processor)),
        }
    }
}

impl<T> From<bool> for Rule<T> {
    fn from(enabled: bool) -> Self {
        if enabled {
            Rule::Default
        } else {
            Rule::Disabled
        }
    }
}

/// Full typographer configuration
#[derive(Debug, Clone, Default)]
pub struct TypographerConfig {
    /// Active languages; `None` falls back to [`default_languages`]
    pub languages: Option<LanguageSet>,
    /// Output form of characters that have a reference
    pub mode: EncodeMode,
    /// Treat input as HTML and process text nodes only
    pub process_html: bool,
    /// Ellipsis, dashes, (c) and friends
    pub symbols: Rule<SymbolsProcessor>,
    /// Typographic quotes
    pub quotes: Rule<QuotesProcessor>,
    /// Dash spacing, initials and units
    pub layout: Rule<LayoutProcessor>,
    /// Prepositions and particles glued with non-breaking spaces
    pub unbreakables: Rule<UnbreakablesProcessor>,
    /// Soft hyphens in long words
    pub hyphenation: Rule<Hyphenator>,
}

impl TypographerConfig {
    /// Configuration for explicit languages with every rule at its default
    pub fn new(languages: LanguageSet) -> Self {
        Self {
            languages: Some(languages),
            ..Default::default()
        }
    }

    /// Configured languages, or the default ones
    pub fn resolved_languages(&self) -> Result<LanguageSet> {
        match &self.languages {
            Some(languages) => Ok(languages.clone()),
            None => default_languages(),
        }
    }
}

/// Languages from [`DEFAULT_LANGS_ENV`], or [`FALLBACK_LANGS`] when unset
pub fn default_languages() -> Result<LanguageSet> {
    languages_from(std::env::var(DEFAULT_LANGS_ENV).ok().as_deref())
}

fn languages_from(value: Option<&str>) -> Result<LanguageSet> {
    let codes = match value {
        Some(value) if !value.trim().is_empty() => value,
        _ => FALLBACK_LANGS,
    };
    Ok(LanguageSet::parse(codes)?)
}
