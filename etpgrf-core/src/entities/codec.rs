//! Unicode to character reference conversion and back

use std::borrow::Cow;
use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use super::policy::{is_mixed_safe, EncodePolicy};
use super::tables::{LEGACY, MODERN};
use crate::error::{ConfigError, Result};

/// Output form for characters that have a reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EncodeMode {
    /// Leave every character literal
    Unicode,
    /// Replace every character the encode map knows
    Mnemonic,
    /// Replace only invisible, ambiguous and markup-significant characters
    #[default]
    Mixed,
}

impl EncodeMode {
    /// Every mode
    pub const ALL: [EncodeMode; 3] = [EncodeMode::Unicode, EncodeMode::Mnemonic, EncodeMode::Mixed];

    /// Lowercase mode name
    pub fn as_str(&self) -> &'static str {
        match self {
            EncodeMode::Unicode => "unicode",
            EncodeMode::Mnemonic => "mnemonic",
            EncodeMode::Mixed => "mixed",
        }
    }

    /// Comma-separated list of mode names, for error messages
    pub fn supported_names() -> String {
        Self::ALL
            .iter()
            .map(EncodeMode::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for EncodeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EncodeMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| ConfigError::UnsupportedMode {
                mode: name.to_lowercase(),
                supported: Self::supported_names(),
            })
    }
}

/// Merged name table entry
struct NameEntry {
    value: String,
    /// Number of consecutive sources agreeing on `value`
    support: usize,
}

/// Canonical reference for each encodable character
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeMap {
    references: BTreeMap<char, String>,
}

impl EncodeMap {
    /// Build a map from name sources listed oldest first
    ///
    /// Names are compared without their trailing `;`. When a later source
    /// gives a name a different value, the later value replaces it. A
    /// character with several names gets the one most sources agree on,
    /// then the shortest, then an all-lowercase one, then the
    /// lexicographically smallest. Forced numeric references replace
    /// derived names and overrides replace both.
    pub fn build(sources: &[&[(&str, &str)]], policy: &EncodePolicy) -> Self {
        let mut names: BTreeMap<&str, NameEntry> = BTreeMap::new();
        for source in sources {
            for &(name, value) in source.iter() {
                let name = name.trim_end_matches(';');
                if name.is_empty() {
                    continue;
                }
                match names.get_mut(name) {
                    Some(entry) if entry.value == value => entry.support += 1,
                    Some(entry) => {
                        entry.value = value.to_string();
                        entry.support = 1;
                    }
                    None => {
                        names.insert(
                            name,
                            NameEntry {
                                value: value.to_string(),
                                support: 1,
                            },
                        );
                    }
                }
            }
        }

        let mut candidates: BTreeMap<char, Vec<(&str, usize)>> = BTreeMap::new();
        for (&name, entry) in &names {
            let mut chars = entry.value.chars();
            let (Some(ch), None) = (chars.next(), chars.next()) else {
                continue;
            };
            if policy.blacklist.contains(&ch) {
                continue;
            }
            candidates.entry(ch).or_default().push((name, entry.support));
        }

        let mut references: BTreeMap<char, String> = candidates
            .into_iter()
            .filter_map(|(ch, options)| {
                options
                    .into_iter()
                    .min_by_key(|&(name, support)| {
                        let lowercase = name.chars().all(|c| !c.is_ascii_uppercase());
                        (Reverse(support), name.len(), !lowercase, name)
                    })
                    .map(|(name, _)| (ch, format!("&{name};")))
            })
            .collect();

        for &ch in &policy.forced_numeric {
            references.insert(ch, format!("&#{};", u32::from(ch)));
        }
        for (ch, reference) in &policy.overrides {
            references.insert(*ch, reference.clone());
        }

        Self { references }
    }

    /// The process-wide map built from the bundled tables and policy
    pub fn global() -> &'static EncodeMap {
        static GLOBAL: OnceLock<EncodeMap> = OnceLock::new();
        GLOBAL.get_or_init(|| {
            let map = Self::build(&[LEGACY, MODERN], &EncodePolicy::standard());
            tracing::debug!(entries = map.len(), "encode map built");
            map
        })
    }

    /// Reference for `ch`, if it has one
    pub fn get(&self, ch: char) -> Option<&str> {
        self.references.get(&ch).map(String::as_str)
    }

    /// Number of encodable characters
    pub fn len(&self) -> usize {
        self.references.len()
    }

    /// Whether the map is empty
    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }

    /// Entries in code point order
    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> + '_ {
        self.references.iter().map(|(ch, r)| (*ch, r.as_str()))
    }

    fn reference_for(&self, ch: char, mode: EncodeMode) -> Option<&str> {
        match mode {
            EncodeMode::Unicode => None,
            EncodeMode::Mnemonic => self.get(ch),
            EncodeMode::Mixed if is_mixed_safe(ch) => self.get(ch),
            EncodeMode::Mixed => None,
        }
    }

    /// Replace characters with references according to `mode`
    pub fn encode<'a>(&self, text: &'a str, mode: EncodeMode) -> Cow<'a, str> {
        let Some(first) = text
            .char_indices()
            .find(|&(_, ch)| self.reference_for(ch, mode).is_some())
            .map(|(i, _)| i)
        else {
            return Cow::Borrowed(text);
        };

        let mut out = String::with_capacity(text.len() + 16);
        out.push_str(&text[..first]);
        for ch in text[first..].chars() {
            match self.reference_for(ch, mode) {
                Some(reference) => out.push_str(reference),
                None => out.push(ch),
            }
        }
        Cow::Owned(out)
    }
}

/// Replace character references with the characters they denote
///
/// Named (with or without `;` where the standard allows it), decimal and
/// hexadecimal references are recognised. Anything that is not a valid
/// reference is left as is.
pub fn decode(text: &str) -> Cow<'_, str> {
    if !text.contains('&') {
        return Cow::Borrowed(text);
    }
    html_escape::decode_html_entities(text)
}

/// Encode with the process-wide map
pub fn encode(text: &str, mode: EncodeMode) -> Cow<'_, str> {
    EncodeMap::global().encode(text, mode)
}

/// Encode with a mode given by name; unknown names leave the text unchanged
pub fn encode_with_mode_name<'a>(text: &'a str, mode: &str) -> Cow<'a, str> {
    match mode.parse::<EncodeMode>() {
        Ok(mode) => encode(text, mode),
        Err(_) => Cow::Borrowed(text),
    }
}
