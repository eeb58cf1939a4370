//! Regex helpers shared by the rule processors
//!
//! The `regex` crate has no lookaround. Rules that depend on the character
//! just before or after a match inspect it explicitly through
//! [`replace_with_neighbours`].

use regex::{Captures, Regex};

use crate::error::{ConfigError, Result};

/// Characters immediately around a match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Neighbours {
    pub before: Option<char>,
    pub after: Option<char>,
}

impl Neighbours {
    pub fn before_is(&self, predicate: impl Fn(char) -> bool) -> bool {
        self.before.is_some_and(predicate)
    }

    pub fn after_is(&self, predicate: impl Fn(char) -> bool) -> bool {
        self.after.is_some_and(predicate)
    }
}

/// Replace every match for which `replacer` returns a value
///
/// A match rejected by `replacer` is copied through unchanged and scanning
/// resumes after it.
pub(crate) fn replace_with_neighbours<F>(regex: &Regex, text: &str, mut replacer: F) -> String
where
    F: FnMut(&Captures<'_>, Neighbours) -> Option<String>,
{
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for caps in regex.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        let neighbours = Neighbours {
            before: text[..whole.start()].chars().next_back(),
            after: text[whole.end()..].chars().next(),
        };
        if let Some(replacement) = replacer(&caps, neighbours) {
            out.push_str(&text[last..whole.start()]);
            out.push_str(&replacement);
            last = whole.end();
        }
    }
    out.push_str(&text[last..]);
    out
}

/// Test a single character against a character-class pattern such as
/// `^[\p{L}\p{Po}]$`
pub(crate) fn char_matches(class: &Regex, ch: char) -> bool {
    let mut buf = [0u8; 4];
    class.is_match(ch.encode_utf8(&mut buf))
}

/// Compile a pattern built from configurable parts
pub(crate) fn compile(pattern: &str, name: &'static str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| ConfigError::InvalidParameter {
        name,
        reason: e.to_string(),
    })
}

/// Escaped alternation of `words`, longest first so prefixes never shadow
pub(crate) fn alternation<I, S>(words: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut words: Vec<String> = words
        .into_iter()
        .map(|w| w.as_ref().trim().to_string())
        .filter(|w| !w.is_empty())
        .collect();
    words.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then(a.cmp(b)));
    words.dedup();
    words
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbours_decide_replacement() {
        let regex = Regex::new(r"-").unwrap();
        let out = replace_with_neighbours(&regex, "a-b 1-2 -c", |_, n| {
            (!n.before_is(|c| c.is_ascii_digit())).then(|| "+".to_string())
        });
        assert_eq!(out, "a+b 1-2 +c");
    }

    #[test]
    fn test_neighbours_at_text_edges() {
        let regex = Regex::new(r"x").unwrap();
        let mut seen = Vec::new();
        replace_with_neighbours(&regex, "xяx", |_, n| {
            seen.push(n);
            None
        });
        assert_eq!(
            seen,
            vec![
                Neighbours { before: None, after: Some('я') },
                Neighbours { before: Some('я'), after: None },
            ]
        );
    }

    #[test]
    fn test_char_class_check() {
        let class = Regex::new(r"^[\p{L}\p{Pf}]$").unwrap();
        assert!(char_matches(&class, 'ж'));
        assert!(char_matches(&class, '\u{00BB}'));
        assert!(!char_matches(&class, '1'));
        assert!(!char_matches(&class, '\u{00AB}'));
    }

    #[test]
    fn test_alternation_orders_longest_first() {
        assert_eq!(alternation(["м", "мм", "кв. м", "м"]), r"кв\. м|мм|м");
        assert_eq!(alternation(Vec::<&str>::new()), "");
    }

    #[test]
    fn test_compile_reports_parameter() {
        let err = compile("(", "units").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidParameter { name: "units", .. }));
    }
}
