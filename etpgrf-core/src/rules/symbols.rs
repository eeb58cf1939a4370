//! Pseudographics to typographic symbols

use std::sync::OnceLock;

use regex::{Captures, Regex};

use super::pattern::replace_with_neighbours;
use super::{TextProcessor, EM_DASH, EN_DASH};

struct Patterns {
    ellipsis: Regex,
    plus_minus: Regex,
    double_hyphen: Regex,
    spaced_hyphen: Regex,
    digit_range: Regex,
    marks: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        ellipsis: Regex::new(r"\.{3}").expect("ellipsis pattern is valid"),
        plus_minus: Regex::new(r"\+-").expect("plus-minus pattern is valid"),
        double_hyphen: Regex::new(r"(?m)(^|\s)-{2,3}(\s|$)").expect("dash pattern is valid"),
        spaced_hyphen: Regex::new(r"(\s)-(\s)").expect("hyphen pattern is valid"),
        digit_range: Regex::new(r"(\d+)-(\d+)").expect("range pattern is valid"),
        marks: Regex::new(r"(?i)\((c|r|tm)\)").expect("marks pattern is valid"),
    })
}

/// Replaces ASCII stand-ins with real symbols
///
/// `...` becomes an ellipsis, `--`/`---` between spaces an em dash, as does
/// a lone spaced hyphen after a non-digit, a hyphen in a number range an en
/// dash, `(c)`, `(r)`, `(tm)` become ©, ®, ™ and `+-` becomes ±.
#[derive(Debug, Clone, Default)]
pub struct SymbolsProcessor;

impl SymbolsProcessor {
    /// Create the processor
    pub fn new() -> Self {
        Self
    }
}

impl TextProcessor for SymbolsProcessor {
    fn name(&self) -> &'static str {
        "symbols"
    }

    fn process(&self, text: &str) -> String {
        let p = patterns();

        let text = p.ellipsis.replace_all(text, "\u{2026}");
        let text = p.plus_minus.replace_all(&text, "\u{00B1}");
        let text = p
            .double_hyphen
            .replace_all(&text, format!("${{1}}{EM_DASH}${{2}}").as_str());

        let text = replace_with_neighbours(&p.spaced_hyphen, &text, |caps, n| {
            (!n.before_is(|c| c.is_ascii_digit())).then(|| format!("{}{EM_DASH}{}", &caps[1], &caps[2]))
        });

        // A hyphen chained to another hyphen is a phone number or a code, not a range
        let text = replace_with_neighbours(&p.digit_range, &text, |caps, n| {
            let chained = n.before == Some('-') || n.after == Some('-');
            (!chained).then(|| format!("{}{EN_DASH}{}", &caps[1], &caps[2]))
        });

        p.marks
            .replace_all(&text, |caps: &Captures<'_>| {
                match caps[1].to_ascii_lowercase().as_str() {
                    "c" => "\u{00A9}",
                    "r" => "\u{00AE}",
                    _ => "\u{2122}",
                }
            })
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn process(text: &str) -> String {
        SymbolsProcessor::new().process(text)
    }

    #[test]
    fn test_ellipsis() {
        assert_eq!(process("Итак... начнём"), "Итак\u{2026} начнём");
        assert_eq!(process("a.b"), "a.b");
    }

    #[test]
    fn test_em_dash_from_hyphens() {
        assert_eq!(process("Он -- тут"), "Он — тут");
        assert_eq!(process("Он --- тут"), "Он — тут");
        assert_eq!(process("Слово - слово"), "Слово — слово");
        assert_eq!(process("-- Привет"), "— Привет");
    }

    #[test]
    fn test_arithmetic_minus_is_kept() {
        assert_eq!(process("10 - 5 = 5"), "10 - 5 = 5");
        assert_eq!(process("что-нибудь"), "что-нибудь");
        assert_eq!(process("от -5 до 5"), "от -5 до 5");
    }

    #[test]
    fn test_en_dash_in_ranges() {
        assert_eq!(process("1941-1945"), "1941–1945");
        assert_eq!(process("стр. 10-20, 30-40"), "стр. 10–20, 30–40");
        assert_eq!(process("1-2-3-4-5"), "1-2-3-4-5");
        assert_eq!(process("слово-10"), "слово-10");
    }

    #[test]
    fn test_marks_and_plus_minus() {
        assert_eq!(process("(c) 2024 (R) (TM)"), "© 2024 ® ™");
        assert_eq!(process("5 +- 0.1"), "5 ± 0.1");
    }
}
