//! Screen typography building blocks
//!
//! This crate holds the pieces the typographer pipeline is assembled from:
//!
//! - [`language`]: supported languages and their letter profiles
//! - [`hyphenation`]: soft-hyphen insertion into long words
//! - [`entities`]: HTML character reference decoding and encoding
//! - [`rules`]: quotes, dashes, non-breaking spaces and symbol rules
//!
//! Every text operation is total: text that cannot be transformed is
//! returned unchanged. Only configuration can fail, with [`ConfigError`].
//!
//! # Example
//!
//! ```rust
//! use etpgrf_core::entities::{encode, EncodeMode};
//! use etpgrf_core::hyphenation::{HyphenationConfig, Hyphenator};
//! use etpgrf_core::language::LanguageSet;
//!
//! let languages = LanguageSet::parse("ru+en").unwrap();
//! let hyphenator = Hyphenator::new(
//!     HyphenationConfig::new(languages).with_max_unhyphenated_len(5),
//! )
//! .unwrap();
//!
//! let text = hyphenator.process_text("проверка");
//! assert_eq!(encode(&text, EncodeMode::Mixed), "про&shy;верка");
//! ```

pub mod entities;
pub mod error;
pub mod hyphenation;
pub mod language;
pub mod rules;

pub use entities::{decode, encode, EncodeMap, EncodeMode};
pub use error::{ConfigError, Result};
pub use hyphenation::{HyphenationConfig, Hyphenator};
pub use language::{Language, LanguageSet};
pub use rules::{TextContext, TextProcessor};
