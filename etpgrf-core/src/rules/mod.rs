//! Typographic rule processors
//!
//! Every pipeline stage implements [`TextProcessor`]: a pure transformation
//! of already decoded Unicode text. Stages are independent of each other;
//! the order they run in is decided by the caller.

mod layout;
mod pattern;
mod quotes;
mod symbols;
mod unbreakables;

pub use layout::{LayoutConfig, LayoutProcessor};
pub use quotes::{QuoteStyle, QuotesProcessor};
pub use symbols::SymbolsProcessor;
pub use unbreakables::UnbreakablesProcessor;

/// Non-breaking space
pub const NBSP: char = '\u{00A0}';
/// Thin space
pub const THIN_SPACE: char = '\u{2009}';
/// Em dash
pub const EM_DASH: char = '\u{2014}';
/// En dash
pub const EN_DASH: char = '\u{2013}';

/// State carried from one text node of a document to the next
///
/// A document split by markup is processed node by node; stages that need
/// to know what came before (an open quotation, the last character) read
/// and update it. A fresh context means the start of a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextContext {
    pub(crate) quote_depth: usize,
    pub(crate) last_char: Option<char>,
}

impl TextContext {
    /// Context at the start of a document
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a node that is passed through without processing
    pub fn skip(&mut self, text: &str) {
        if let Some(ch) = text.chars().next_back() {
            self.last_char = Some(ch);
        }
    }

    /// Number of quotations still open
    pub fn quote_depth(&self) -> usize {
        self.quote_depth
    }
}

/// A single text-to-text stage of the typographic pipeline
pub trait TextProcessor: Send + Sync {
    /// Short stage name used in logs
    fn name(&self) -> &'static str;

    /// Transform `text`; text that cannot be transformed is returned as is
    fn process(&self, text: &str) -> String;

    /// Transform one node of a larger document
    ///
    /// Stages without cross-node state ignore `context`.
    fn process_in_context(&self, text: &str, _context: &mut TextContext) -> String {
        self.process(text)
    }
}

impl<T: TextProcessor + ?Sized> TextProcessor for Box<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn process(&self, text: &str) -> String {
        (**self).process(text)
    }

    fn process_in_context(&self, text: &str, context: &mut TextContext) -> String {
        (**self).process_in_context(text, context)
    }
}
