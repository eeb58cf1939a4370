//! Straight quotes to typographic quotes

use super::{TextContext, TextProcessor};
use crate::language::{Language, LanguageSet};

/// Opening and closing quote characters for two nesting levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteStyle {
    /// Outer pair
    pub outer: (char, char),
    /// Pair used inside an outer quotation
    pub inner: (char, char),
}

impl QuoteStyle {
    /// «ёлочки» outside, „лапки“ inside
    pub const RUSSIAN: QuoteStyle = QuoteStyle {
        outer: ('\u{00AB}', '\u{00BB}'),
        inner: ('\u{201E}', '\u{201C}'),
    };

    /// “double” outside, ‘single’ inside
    pub const ENGLISH: QuoteStyle = QuoteStyle {
        outer: ('\u{201C}', '\u{201D}'),
        inner: ('\u{2018}', '\u{2019}'),
    };

    /// Conventional style of a language
    pub fn for_language(language: Language) -> Self {
        match language {
            Language::Russian | Language::RussianOld => Self::RUSSIAN,
            Language::English => Self::ENGLISH,
        }
    }

    fn is_opening(&self, ch: char) -> bool {
        ch == self.outer.0 || ch == self.inner.0
    }
}

const APOSTROPHE: char = '\u{2019}';

/// Replaces `"` with paired typographic quotes and `'` inside words with
/// an apostrophe
#[derive(Debug, Clone)]
pub struct QuotesProcessor {
    style: QuoteStyle,
}

impl QuotesProcessor {
    /// Quotes in the style of the main language of `languages`
    pub fn new(languages: &LanguageSet) -> Self {
        Self::with_style(QuoteStyle::for_language(languages.primary()))
    }

    /// Quotes in an explicit style
    pub fn with_style(style: QuoteStyle) -> Self {
        tracing::debug!(?style, "quotes processor created");
        Self { style }
    }

    /// Active style
    pub fn style(&self) -> QuoteStyle {
        self.style
    }

    fn opens_after(&self, prev: Option<char>) -> bool {
        match prev {
            None => true,
            Some(ch) => {
                ch.is_whitespace()
                    || matches!(ch, '(' | '[' | '{' | '\u{2014}' | '\u{2013}' | '-')
                    || self.style.is_opening(ch)
            }
        }
    }
}

impl TextProcessor for QuotesProcessor {
    fn name(&self) -> &'static str {
        "quotes"
    }

    fn process(&self, text: &str) -> String {
        self.process_in_context(text, &mut TextContext::new())
    }

    /// An open quotation from earlier nodes is closed by a `"` that
    /// directly follows them; with nothing open, a node starts afresh
    fn process_in_context(&self, text: &str, context: &mut TextContext) -> String {
        if !text.contains(['"', '\'']) {
            context.skip(text);
            return text.to_string();
        }

        let mut out = String::with_capacity(text.len() + 8);
        let mut depth = context.quote_depth;
        let mut prev = if depth > 0 { context.last_char } else { None };
        let mut chars = text.chars().peekable();

        while let Some(ch) = chars.next() {
            let replaced = match ch {
                '"' if self.opens_after(prev) => {
                    depth += 1;
                    if depth == 1 {
                        self.style.outer.0
                    } else {
                        self.style.inner.0
                    }
                }
                '"' => {
                    let close = if depth > 1 {
                        self.style.inner.1
                    } else {
                        self.style.outer.1
                    };
                    depth = depth.saturating_sub(1);
                    close
                }
                '\'' if prev.is_some_and(char::is_alphabetic)
                    && chars.peek().is_some_and(|c| c.is_alphabetic()) =>
                {
                    APOSTROPHE
                }
                other => other,
            };
            out.push(replaced);
            prev = Some(replaced);
        }

        context.quote_depth = depth;
        context.skip(&out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn russian() -> QuotesProcessor {
        QuotesProcessor::new(&LanguageSet::single(Language::Russian))
    }

    fn english() -> QuotesProcessor {
        QuotesProcessor::new(&LanguageSet::single(Language::English))
    }

    #[test]
    fn test_russian_quotes() {
        assert_eq!(
            russian().process("Простой текст с \"кавычками\"."),
            "Простой текст с «кавычками»."
        );
        assert_eq!(russian().process("\"Начало\" фразы"), "«Начало» фразы");
    }

    #[test]
    fn test_nested_quotes() {
        assert_eq!(
            russian().process("Он сказал: \"Читай \"Онегина\" вслух\"."),
            "Он сказал: «Читай „Онегина“ вслух»."
        );
        assert_eq!(
            english().process("\"Read \"Hamlet\" aloud\""),
            "\u{201C}Read \u{2018}Hamlet\u{2019} aloud\u{201D}"
        );
    }

    #[test]
    fn test_quote_after_bracket_or_dash_opens() {
        assert_eq!(russian().process("(\"да\")"), "(«да»)");
        assert_eq!(russian().process("—\"нет\""), "—«нет»");
    }

    #[test]
    fn test_apostrophe() {
        assert_eq!(english().process("don't"), "don\u{2019}t");
        assert_eq!(english().process("'quoted'"), "'quoted'");
    }

    #[test]
    fn test_main_language_selects_style() {
        let processor = QuotesProcessor::new(&LanguageSet::parse("en+ru").unwrap());
        assert_eq!(processor.style(), QuoteStyle::ENGLISH);
        assert_eq!(processor.process("plain"), "plain");
    }

    #[test]
    fn test_quotation_spans_nodes() {
        let processor = russian();
        let mut context = TextContext::new();
        let nodes: Vec<String> = ["Он сказал \"", "да", "\" и ушёл"]
            .iter()
            .map(|node| processor.process_in_context(node, &mut context))
            .collect();
        assert_eq!(nodes, ["Он сказал «", "да", "» и ушёл"]);
        assert_eq!(context.quote_depth(), 0);
    }

    #[test]
    fn test_closed_quotation_does_not_leak_into_next_node() {
        let processor = russian();
        let mut context = TextContext::new();
        assert_eq!(processor.process_in_context("\"раз\"", &mut context), "«раз»");
        assert_eq!(processor.process_in_context("\"два\"", &mut context), "«два»");
    }
}
