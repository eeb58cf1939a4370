//! Encoding policy: what gets a reference, and which one

use std::collections::BTreeSet;

use crate::language::{self, Language};

/// Pinned references for the typographic characters the rule processors emit
///
/// Applied last, so these win over everything else and may name
/// characters that are otherwise blacklisted.
pub(crate) const OVERRIDES: &[(char, &str)] = &[
    ('\u{00AD}', "&shy;"),
    // Spaces and joiners
    ('\u{00A0}', "&nbsp;"),
    ('\u{2009}', "&thinsp;"),
    ('\u{2002}', "&ensp;"),
    ('\u{2003}', "&emsp;"),
    ('\u{200C}', "&zwnj;"),
    ('\u{200D}', "&zwj;"),
    // Dashes
    ('\u{2013}', "&ndash;"),
    ('\u{2014}', "&mdash;"),
    ('\u{2015}', "&horbar;"),
    ('\u{2010}', "&hyphen;"),
    // Quotes
    ('"', "&quot;"),
    ('\'', "&apos;"),
    ('\u{00AB}', "&laquo;"),
    ('\u{00BB}', "&raquo;"),
    ('\u{201C}', "&ldquo;"),
    ('\u{201D}', "&rdquo;"),
    ('\u{201E}', "&bdquo;"),
    ('\u{2018}', "&lsquo;"),
    ('\u{2019}', "&rsquo;"),
    ('\u{201A}', "&sbquo;"),
    ('\u{2039}', "&lsaquo;"),
    ('\u{203A}', "&rsaquo;"),
    // Markup-significant
    ('&', "&amp;"),
    ('<', "&lt;"),
    ('>', "&gt;"),
    // Symbols
    ('\u{2026}', "&hellip;"),
    ('\u{00A9}', "&copy;"),
];

/// Characters without a name that is portable across standards
pub(crate) const FORCED_NUMERIC: &[char] = &[
    '\u{20BD}', // ruble
    '\u{20B4}', // hryvnia
    '\u{20B8}', // tenge
    '\u{20B9}', // rupee
    '\u{20BA}', // lira
    '\u{20BF}', // bitcoin
    '\u{2011}', // non-breaking hyphen
    '\u{202F}', // narrow no-break space
];

/// Characters encoded in mixed mode: invisible, ambiguous or markup-significant
pub const MIXED_SAFE: &[char] = &[
    '&', '<', '>', '"', '\'', '\u{00AD}', '\u{00A0}', '\u{2009}', '\u{202F}', '\u{200B}',
    '\u{200C}', '\u{200D}', '\u{2060}',
];

/// Whether mixed mode encodes `ch`
#[inline]
pub fn is_mixed_safe(ch: char) -> bool {
    MIXED_SAFE.contains(&ch)
}

/// Inputs to encode map construction besides the name tables
#[derive(Debug, Clone, Default)]
pub struct EncodePolicy {
    /// Highest priority, full reference strings
    pub overrides: Vec<(char, String)>,
    /// Rendered as `&#NNNN;`
    pub forced_numeric: Vec<char>,
    /// Never given a derived name
    pub blacklist: BTreeSet<char>,
}

impl EncodePolicy {
    /// The built-in policy
    ///
    /// The blacklist holds printable ASCII other than `& < > " '`, ASCII
    /// control characters and every letter of every supported language.
    pub fn standard() -> Self {
        let mut blacklist: BTreeSet<char> = (0u8..=0x7F)
            .map(char::from)
            .filter(|ch| !matches!(ch, '&' | '<' | '>' | '"' | '\''))
            .collect();

        for language in Language::ALL {
            match language::profile(language) {
                Ok(profile) => blacklist.extend(profile.letters()),
                Err(e) => {
                    tracing::warn!("Letters of {language} not blacklisted from encoding: {e}")
                }
            }
        }

        Self {
            overrides: OVERRIDES
                .iter()
                .map(|&(ch, reference)| (ch, reference.to_string()))
                .collect(),
            forced_numeric: FORCED_NUMERIC.to_vec(),
            blacklist,
        }
    }
}
