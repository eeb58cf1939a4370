//! The typographer: fixed processor pipeline plus entity codec

use std::fmt;

use etpgrf_core::entities::{decode, encode};
use etpgrf_core::hyphenation::Hyphenator;
use etpgrf_core::rules::{
    LayoutProcessor, QuotesProcessor, SymbolsProcessor, UnbreakablesProcessor,
};
use etpgrf_core::{EncodeMode, LanguageSet, TextContext, TextProcessor};

use crate::config::{Rule, TypographerConfig};
use crate::error::{EngineError, Result};

/// Applies symbols, quotes, layout, unbreakables and hyphenation in that
/// order, then encodes the result
///
/// Construction resolves every rule slot once; [`Typographer::process`]
/// never fails and the instance can be shared between threads.
pub struct Typographer {
    languages: LanguageSet,
    mode: EncodeMode,
    process_html: bool,
    processors: Vec<Box<dyn TextProcessor>>,
}

impl fmt::Debug for Typographer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Typographer")
            .field("languages", &self.languages)
            .field("mode", &self.mode)
            .field("process_html", &self.process_html)
            .field("processors", &self.processor_names())
            .finish()
    }
}

impl Typographer {
    /// Typographer with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(TypographerConfig::default())
    }

    /// Start a builder
    pub fn builder() -> TypographerBuilder {
        TypographerBuilder::new()
    }

    /// Typographer from an explicit configuration
    pub fn with_config(config: TypographerConfig) -> Result<Self> {
        let languages = config.resolved_languages()?;

        if let Rule::Custom(hyphenator) = &config.hyphenation {
            let hyphenation_languages = &hyphenator.config().languages;
            if !hyphenation_languages.iter().any(|l| languages.contains(l)) {
                return Err(EngineError::InvalidConfig(format!(
                    "hyphenation languages '{hyphenation_languages}' share nothing with \
                     typographer languages '{languages}'"
                )));
            }
        }

        let process_html = config.process_html && cfg!(feature = "html");
        if config.process_html && !process_html {
            tracing::warn!("HTML support is not compiled in; input is processed as plain text");
        }

        let mut processors: Vec<Box<dyn TextProcessor>> = Vec::new();
        push_stage(
            &mut processors,
            config.symbols.resolve(|| Ok(SymbolsProcessor::new()))?,
        );
        push_stage(
            &mut processors,
            config
                .quotes
                .resolve(|| Ok(QuotesProcessor::new(&languages)))?,
        );
        push_stage(
            &mut processors,
            config
                .layout
                .resolve(|| Ok(LayoutProcessor::with_languages(&languages)?))?,
        );
        push_stage(
            &mut processors,
            config
                .unbreakables
                .resolve(|| Ok(UnbreakablesProcessor::new(&languages)?))?,
        );
        push_stage(
            &mut processors,
            config
                .hyphenation
                .resolve(|| Ok(Hyphenator::with_languages(languages.clone())?))?,
        );

        let typographer = Self {
            languages,
            mode: config.mode,
            process_html,
            processors,
        };
        tracing::debug!(
            languages = %typographer.languages,
            mode = %typographer.mode,
            html = typographer.process_html,
            stages = ?typographer.processor_names(),
            "typographer created"
        );
        Ok(typographer)
    }

    /// Active languages
    pub fn languages(&self) -> &LanguageSet {
        &self.languages
    }

    /// Output encoding mode
    pub fn mode(&self) -> EncodeMode {
        self.mode
    }

    /// Whether input is treated as HTML
    pub fn process_html(&self) -> bool {
        self.process_html
    }

    /// Names of the active stages in execution order
    pub fn processor_names(&self) -> Vec<&'static str> {
        self.processors.iter().map(|p| p.name()).collect()
    }

    /// Typeset `text`
    pub fn process(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        if self.process_html {
            self.process_document(text)
        } else {
            self.process_fragment(text, &mut TextContext::new())
        }
    }

    /// Text nodes of one document share a [`TextContext`]
    #[cfg(feature = "html")]
    fn process_document(&self, html: &str) -> String {
        let mut context = TextContext::new();
        crate::html::process_document(html, |node| self.process_text_node(node, &mut context))
    }

    #[cfg(not(feature = "html"))]
    fn process_document(&self, html: &str) -> String {
        self.process_fragment(html, &mut TextContext::new())
    }

    /// Decode, run every stage, encode
    fn process_fragment(&self, text: &str, context: &mut TextContext) -> String {
        let decoded = decode(text);
        let typeset = self
            .processors
            .iter()
            .fold(decoded.into_owned(), |text, processor| {
                processor.process_in_context(&text, context)
            });
        encode(&typeset, self.mode).into_owned()
    }

    /// Text nodes stay well-formed even when nothing else is encoded
    #[cfg(feature = "html")]
    fn process_text_node(&self, text: &str, context: &mut TextContext) -> String {
        if text.trim().is_empty() {
            context.skip(text);
            return text.to_string();
        }
        let processed = self.process_fragment(text, context);
        match self.mode {
            EncodeMode::Unicode => html_escape::encode_text(&processed).into_owned(),
            EncodeMode::Mnemonic | EncodeMode::Mixed => processed,
        }
    }
}

fn push_stage<T>(processors: &mut Vec<Box<dyn TextProcessor>>, stage: Option<T>)
where
    T: TextProcessor + 'static,
{
    if let Some(stage) = stage {
        processors.push(Box::new(stage));
    }
}

/// Builder for [`Typographer`]
#[derive(Debug, Default)]
pub struct TypographerBuilder {
    config: TypographerConfig,
    langs: Option<String>,
}

impl TypographerBuilder {
    /// Builder with every setting at its default
    pub fn new() -> Self {
        Self::default()
    }

    /// Languages as a delimited list such as `ru+en`, validated on build
    pub fn langs(mut self, langs: impl Into<String>) -> Self {
        self.langs = Some(langs.into());
        self
    }

    /// Languages as an already validated set
    pub fn languages(mut self, languages: LanguageSet) -> Self {
        self.langs = None;
        self.config.languages = Some(languages);
        self
    }

    /// Output encoding mode
    pub fn mode(mut self, mode: EncodeMode) -> Self {
        self.config.mode = mode;
        self
    }

    /// Treat input as HTML
    pub fn process_html(mut self, enabled: bool) -> Self {
        self.config.process_html = enabled;
        self
    }

    /// Symbols stage
    pub fn symbols(mut self, rule: impl Into<Rule<SymbolsProcessor>>) -> Self {
        self.config.symbols = rule.into();
        self
    }

    /// Quotes stage
    pub fn quotes(mut self, rule: impl Into<Rule<QuotesProcessor>>) -> Self {
        self.config.quotes = rule.into();
        self
    }

    /// Layout stage
    pub fn layout(mut self, rule: impl Into<Rule<LayoutProcessor>>) -> Self {
        self.config.layout = rule.into();
        self
    }

    /// Unbreakables stage
    pub fn unbreakables(mut self, rule: impl Into<Rule<UnbreakablesProcessor>>) -> Self {
        self.config.unbreakables = rule.into();
        self
    }

    /// Hyphenation stage
    pub fn hyphenation(mut self, rule: impl Into<Rule<Hyphenator>>) -> Self {
        self.config.hyphenation = rule.into();
        self
    }

    /// Validate and build
    pub fn build(mut self) -> Result<Typographer> {
        if let Some(langs) = self.langs.take() {
            self.config.languages = Some(LanguageSet::parse(&langs)?);
        }
        Typographer::with_config(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use etpgrf_core::hyphenation::HyphenationConfig;
    use etpgrf_core::{ConfigError, Language};

    fn russian(mode: EncodeMode) -> Typographer {
        Typographer::builder().langs("ru").mode(mode).build().unwrap()
    }

    #[test]
    fn test_stage_order() {
        assert_eq!(
            russian(EncodeMode::Mixed).processor_names(),
            vec!["symbols", "quotes", "layout", "unbreakables", "hyphenation"]
        );
        let typographer = Typographer::builder()
            .langs("ru")
            .quotes(false)
            .symbols(false)
            .build()
            .unwrap();
        assert_eq!(
            typographer.processor_names(),
            vec!["layout", "unbreakables", "hyphenation"]
        );
    }

    #[test]
    fn test_modes() {
        let text = "Простой текст с \"кавычками\".";
        assert_eq!(
            russian(EncodeMode::Mnemonic).process(text),
            "Простой текст с&nbsp;&laquo;кавычками&raquo;."
        );
        assert_eq!(
            russian(EncodeMode::Mixed).process(text),
            "Простой текст с&nbsp;«кавычками»."
        );
        assert_eq!(
            russian(EncodeMode::Unicode).process(text),
            "Простой текст с\u{A0}«кавычками»."
        );
    }

    #[test]
    fn test_input_references_are_decoded_first() {
        assert_eq!(
            russian(EncodeMode::Unicode).process("&laquo;Да&raquo; &mdash; сказал он"),
            "«Да»\u{A0}— сказал он"
        );
        assert_eq!(russian(EncodeMode::Mixed).process("a &amp; b"), "a &amp; b");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(russian(EncodeMode::Mixed).process(""), "");
    }

    #[test]
    fn test_invalid_languages() {
        let err = Typographer::builder().langs("ru+xx").build().unwrap_err();
        assert!(matches!(
            err,
            EngineError::Config(ConfigError::UnsupportedLanguage { .. })
        ));
        let err = Typographer::builder().langs("").build().unwrap_err();
        assert!(matches!(err, EngineError::Config(ConfigError::EmptyLanguages { .. })));
    }

    #[test]
    fn test_custom_hyphenator() {
        let hyphenator = Hyphenator::new(
            HyphenationConfig::new(LanguageSet::single(Language::Russian))
                .with_max_unhyphenated_len(8),
        )
        .unwrap();
        let typographer = Typographer::builder()
            .langs("ru")
            .mode(EncodeMode::Unicode)
            .hyphenation(Rule::Custom(hyphenator))
            .build()
            .unwrap();
        assert_eq!(
            typographer.process("программирование"),
            "програм\u{AD}миро\u{AD}вание"
        );
    }

    #[test]
    fn test_custom_hyphenator_for_other_languages_is_rejected() {
        let hyphenator = Hyphenator::with_languages(LanguageSet::single(Language::English)).unwrap();
        let err = Typographer::builder()
            .langs("ru")
            .hyphenation(Rule::Custom(hyphenator))
            .build()
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig(_)));
        assert!(err.to_string().contains("share nothing"));
    }

    #[test]
    fn test_typographer_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Typographer>();
    }
}
