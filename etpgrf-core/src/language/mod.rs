//! Languages and their letter profiles
//!
//! Each supported language ships an embedded TOML profile describing which
//! letters are vowels, consonants, semivowels and signs. Hyphenation uses
//! the profiles for syllable analysis; the entity codec uses them to keep
//! alphabet letters out of the named-entity map.

mod codes;
pub mod config;
mod loader;
mod profile;

pub use codes::{Language, LanguageSet};
pub use loader::profile;
pub use profile::{CharClass, LanguageProfile};

pub(crate) use profile::fold_case;
