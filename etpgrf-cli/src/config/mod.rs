//! Configuration file support
//!
//! Every key is optional; anything left out keeps the typographer default.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use etpgrf_engine::{
    default_languages, EncodeMode, EngineError, HyphenationConfig, Hyphenator, LayoutConfig,
    LayoutProcessor, LanguageSet, Rule, TypographerConfig,
};
use serde::{Deserialize, Serialize};

use crate::error::CliError;

/// CLI configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Languages, output mode, HTML handling
    pub typographer: TypographerSection,
    /// Soft hyphens
    pub hyphenation: HyphenationSection,
    /// Dashes, initials and units
    pub layout: LayoutSection,
    /// Typographic quotes
    pub quotes: ToggleSection,
    /// Prepositions and particles
    pub unbreakables: ToggleSection,
    /// Pseudographic symbols
    pub symbols: ToggleSection,
}

/// `[typographer]`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct TypographerSection {
    /// Language list such as `ru+en`
    pub langs: Option<String>,
    /// `unicode`, `mnemonic` or `mixed`
    pub mode: Option<String>,
    /// Treat input as HTML
    pub html: Option<bool>,
}

/// `[hyphenation]`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct HyphenationSection {
    /// Stage switch
    pub enabled: Option<bool>,
    /// Words up to this length stay whole
    pub max_unhyphenated_len: Option<usize>,
    /// Minimum characters on each side of a break
    pub min_tail_len: Option<usize>,
}

/// `[layout]`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutSection {
    /// Stage switch
    pub enabled: Option<bool>,
    /// Glue initials
    pub initials: Option<bool>,
    /// Glue units
    pub units: Option<bool>,
    /// Additional units
    pub custom_units: Option<Vec<String>>,
}

/// Sections that only switch a stage on or off
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToggleSection {
    /// Stage switch
    pub enabled: Option<bool>,
}

impl FileConfig {
    /// Load and parse a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    /// Languages named by the file, or the environment default
    pub fn languages(&self) -> Result<LanguageSet, EngineError> {
        match &self.typographer.langs {
            Some(langs) => Ok(LanguageSet::parse(langs)?),
            None => default_languages(),
        }
    }

    /// Resolve into an engine configuration, validating every value
    pub fn typographer_config(&self) -> Result<TypographerConfig, EngineError> {
        let languages = self.languages()?;
        let mode = match &self.typographer.mode {
            Some(mode) => mode.parse::<EncodeMode>()?,
            None => EncodeMode::default(),
        };

        let hyphenation = self.hyphenation_rule(&languages)?;
        let layout = self.layout_rule(&languages)?;

        Ok(TypographerConfig {
            languages: Some(languages),
            mode,
            process_html: self.typographer.html.unwrap_or(false),
            symbols: Rule::from(self.symbols.enabled.unwrap_or(true)),
            quotes: Rule::from(self.quotes.enabled.unwrap_or(true)),
            layout,
            unbreakables: Rule::from(self.unbreakables.enabled.unwrap_or(true)),
            hyphenation,
        })
    }

    fn hyphenation_rule(&self, languages: &LanguageSet) -> Result<Rule<Hyphenator>, EngineError> {
        let section = &self.hyphenation;
        if !section.enabled.unwrap_or(true) {
            return Ok(Rule::Disabled);
        }
        if section.max_unhyphenated_len.is_none() && section.min_tail_len.is_none() {
            return Ok(Rule::Default);
        }

        let mut config = HyphenationConfig::new(languages.clone());
        if let Some(len) = section.max_unhyphenated_len {
            config = config.with_max_unhyphenated_len(len);
        }
        if let Some(len) = section.min_tail_len {
            config = config.with_min_tail_len(len);
        }
        Ok(Rule::Custom(Hyphenator::new(config)?))
    }

    fn layout_rule(&self, languages: &LanguageSet) -> Result<Rule<LayoutProcessor>, EngineError> {
        let section = &self.layout;
        if !section.enabled.unwrap_or(true) {
            return Ok(Rule::Disabled);
        }

        let defaults = LayoutConfig::default();
        let config = LayoutConfig {
            initials: section.initials.unwrap_or(defaults.initials),
            units: section.units.unwrap_or(defaults.units),
            custom_units: section.custom_units.clone().unwrap_or_default(),
            ..defaults.clone()
        };
        if config == defaults {
            return Ok(Rule::Default);
        }
        Ok(Rule::Custom(LayoutProcessor::new(languages, config)?))
    }

    /// Commented template listing every key with its default
    pub fn template() -> String {
        format!(
            r#"# etpgrf configuration
#
# Every key is optional. Command-line flags override values from this file.

[typographer]
# Languages joined with '+': {languages}
langs = "ru"
# Output mode: {modes}
mode = "mixed"
# Process text nodes of HTML input only
html = false

[hyphenation]
enabled = true
# Words up to this many letters are never split
max_unhyphenated_len = 14
# Letters required on each side of a soft hyphen
min_tail_len = 3

[layout]
enabled = true
initials = true
units = true
# Extra units glued to preceding numbers; entries with spaces are multi-word units
custom_units = []

[quotes]
enabled = true

[unbreakables]
enabled = true

[symbols]
enabled = true
"#,
            languages = etpgrf_engine::Language::supported_codes(),
            modes = EncodeMode::supported_names(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use etpgrf_engine::{ConfigError, Language, Typographer};

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = FileConfig::from_toml_str("").unwrap();
        assert_eq!(config, FileConfig::default());

        let resolved = FileConfig {
            typographer: TypographerSection {
                langs: Some("ru".to_string()),
                ..Default::default()
            },
            ..Default::default()
        }
        .typographer_config()
        .unwrap();
        assert_eq!(resolved.mode, EncodeMode::Mixed);
        assert!(!resolved.process_html);
        assert!(matches!(resolved.hyphenation, Rule::Default));
        assert!(matches!(resolved.layout, Rule::Default));
    }

    #[test]
    fn test_template_round_trips() {
        let config = FileConfig::from_toml_str(&FileConfig::template()).unwrap();
        assert_eq!(config.typographer.langs.as_deref(), Some("ru"));
        assert_eq!(config.hyphenation.max_unhyphenated_len, Some(14));
        assert_eq!(config.layout.custom_units, Some(Vec::new()));

        let resolved = config.typographer_config().unwrap();
        assert_eq!(
            resolved.languages,
            Some(LanguageSet::single(Language::Russian))
        );
        assert!(Typographer::with_config(resolved).is_ok());
    }

    #[test]
    fn test_sections() {
        let config = FileConfig::from_toml_str(
            r#"
[typographer]
langs = "en+ru"
mode = "Mnemonic"
html = true

[hyphenation]
max_unhyphenated_len = 8

[layout]
units = false

[quotes]
enabled = false
"#,
        )
        .unwrap();
        let resolved = config.typographer_config().unwrap();
        assert_eq!(resolved.mode, EncodeMode::Mnemonic);
        assert!(resolved.process_html);
        assert!(!resolved.quotes.is_enabled());
        assert!(resolved.symbols.is_enabled());
        match &resolved.hyphenation {
            Rule::Custom(hyphenator) => {
                assert_eq!(hyphenator.config().max_unhyphenated_len, 8);
                assert_eq!(hyphenator.config().min_tail_len, 3);
            }
            other => panic!("expected custom hyphenation, got {other:?}"),
        }
        match &resolved.layout {
            Rule::Custom(layout) => assert!(!layout.config().units),
            other => panic!("expected custom layout, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let err = FileConfig::from_toml_str("[typographer]\nlanguage = \"ru\"\n").unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
        assert!(err.to_string().contains("unknown field"));
    }

    #[test]
    fn test_invalid_values() {
        let config = FileConfig::from_toml_str("[typographer]\nmode = \"html\"\n").unwrap();
        assert!(matches!(
            config.typographer_config(),
            Err(EngineError::Config(ConfigError::UnsupportedMode { .. }))
        ));

        let config = FileConfig::from_toml_str("[typographer]\nlangs = \"fr\"\n").unwrap();
        assert!(matches!(
            config.typographer_config(),
            Err(EngineError::Config(ConfigError::UnsupportedLanguage { .. }))
        ));

        let config =
            FileConfig::from_toml_str("[typographer]\nlangs = \"ru\"\n[hyphenation]\nmin_tail_len = 0\n")
                .unwrap();
        assert!(matches!(
            config.typographer_config(),
            Err(EngineError::Config(ConfigError::InvalidParameter { .. }))
        ));
    }
}
