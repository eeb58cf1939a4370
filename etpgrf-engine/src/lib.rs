//! Typographer pipeline for screen typography
//!
//! This crate assembles the processors of `etpgrf-core` into a fixed
//! pipeline and applies it to plain text or to the text nodes of an HTML
//! document.
//!
//! ```rust
//! use etpgrf_engine::{EncodeMode, Typographer};
//!
//! let typographer = Typographer::builder()
//!     .langs("ru")
//!     .mode(EncodeMode::Unicode)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(
//!     typographer.process("Простой текст с \"кавычками\"."),
//!     "Простой текст с\u{A0}«кавычками»."
//! );
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
#[cfg(feature = "html")]
mod html;
pub mod typographer;

pub use config::{default_languages, Rule, TypographerConfig, DEFAULT_LANGS_ENV, FALLBACK_LANGS};
pub use error::{EngineError, Result};
pub use typographer::{Typographer, TypographerBuilder};

// Re-export from core for convenience
pub use etpgrf_core::hyphenation::{HyphenationConfig, Hyphenator};
pub use etpgrf_core::rules::{
    LayoutConfig, LayoutProcessor, QuoteStyle, QuotesProcessor, SymbolsProcessor,
    UnbreakablesProcessor,
};
pub use etpgrf_core::{ConfigError, EncodeMode, Language, LanguageSet, TextContext, TextProcessor};
