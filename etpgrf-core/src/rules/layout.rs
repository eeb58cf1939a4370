//! Spacing around dashes, ellipses, numbers, initials and units

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

use super::pattern::{alternation, char_matches, compile, replace_with_neighbours};
use super::{TextProcessor, NBSP, THIN_SPACE};
use crate::error::Result;
use crate::language::{Language, LanguageSet};

/// Units written after a number
const POST_UNITS: &[&str] = &[
    // Length, area, volume, mass
    "мм", "см", "дм", "м", "км", "мг", "г", "кг", "т", "ц", "мл", "л",
    "mm", "cm", "m", "km", "mg", "g", "kg", "ml", "l",
    // Time and speed
    "сек", "мин", "ч", "км/ч", "м/с", "s", "min", "h", "km/h",
    // Data
    "бит", "байт", "Кб", "Мб", "Гб", "Тб", "КБ", "МБ", "ГБ", "ТБ", "KB", "MB", "GB", "TB",
    // Money and multipliers
    "руб.", "коп.", "тыс.", "тыс", "млн", "млрд", "\u{20BD}", "\u{20AC}", "$",
    // Dates
    "г.", "гг.", "в.", "вв.",
    // Other
    "%", "\u{2030}", "\u{00B0}", "\u{00B0}C", "\u{00B0}F", "шт.",
];

/// Units written before a number
const PRE_UNITS: &[&str] = &["\u{2116}", "\u{00A7}", "\u{00B6}"];

/// Multi-word units; their parts are joined by a thin space
const COMPLEX_UNITS: &[&str] = &[
    "кв. м", "кв. км", "кв. см", "кв. мм", "куб. м", "куб. см", "куб. дм", "до н. э.", "н. э.",
];

/// Optional parts of the layout rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Glue initials to each other and to surnames
    pub initials: bool,
    /// Glue numbers to units and multipliers
    pub units: bool,
    /// Recognise multi-word units such as "кв. м"
    pub complex_units: bool,
    /// Extra post-units; entries containing spaces become complex units
    pub custom_units: Vec<String>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            initials: true,
            units: true,
            complex_units: true,
            custom_units: Vec::new(),
        }
    }
}

struct StaticPatterns {
    dash: Regex,
    dash_left: Regex,
    ellipsis: Regex,
    negative_number: Regex,
    initial_space: Regex,
    surname_space: Regex,
    starts_with_initial: Regex,
    starts_with_surname: Regex,
    multiplier: Regex,
    letter_or_digit: Regex,
}

fn static_patterns() -> &'static StaticPatterns {
    static PATTERNS: OnceLock<StaticPatterns> = OnceLock::new();
    PATTERNS.get_or_init(|| StaticPatterns {
        dash: Regex::new(r"\s+([\x{2014}\x{2013}])\s+").expect("dash pattern is valid"),
        dash_left: Regex::new(r#"^[\p{L}\p{Po}\p{Pf}"']$"#).expect("dash class is valid"),
        ellipsis: Regex::new(r"\x{2026}\s+").expect("ellipsis pattern is valid"),
        negative_number: Regex::new(r"\s+-(\d+)").expect("negative number pattern is valid"),
        initial_space: Regex::new(r"(\p{Lu}\.) +").expect("initial pattern is valid"),
        surname_space: Regex::new(r"(\p{Lu}\p{L}{2,}) +").expect("surname pattern is valid"),
        starts_with_initial: Regex::new(r"^\p{Lu}\.").expect("initial pattern is valid"),
        starts_with_surname: Regex::new(r"^\p{Lu}\p{L}+").expect("surname pattern is valid"),
        multiplier: Regex::new(r"\b((?:тыс|млн|млрд)\.?)\s+").expect("multiplier pattern is valid"),
        letter_or_digit: Regex::new(r"^[\p{L}\p{N}]$").expect("letter class is valid"),
    })
}

/// Unit patterns compiled from the configured unit lists
#[derive(Debug, Clone)]
struct UnitPatterns {
    post: Regex,
    pre: Regex,
    complex: Option<Regex>,
    /// Complex unit with whitespace removed to its thin-spaced form
    complex_forms: HashMap<String, String>,
}

impl UnitPatterns {
    fn new(config: &LayoutConfig) -> Result<Self> {
        let (custom_complex, custom_simple): (Vec<&String>, Vec<&String>) = config
            .custom_units
            .iter()
            .partition(|unit| unit.trim().contains(char::is_whitespace));

        let post_units = alternation(
            POST_UNITS
                .iter()
                .copied()
                .chain(custom_simple.iter().map(|unit| unit.as_str())),
        );
        let post = compile(&format!(r"(\d[\d.,]*)\s+({post_units})"), "units")?;
        let pre = compile(
            &format!(r"({})\s+(\d[\d.,]*)", alternation(PRE_UNITS)),
            "units",
        )?;

        let mut complex_forms = HashMap::new();
        let mut complex_alternatives = Vec::new();
        if config.complex_units {
            let thin_space = THIN_SPACE.to_string();
            let mut units: Vec<&str> = COMPLEX_UNITS.to_vec();
            units.extend(custom_complex.iter().map(|unit| unit.as_str()));
            units.sort_by_key(|unit| std::cmp::Reverse(unit.chars().count()));
            for unit in units {
                let parts: Vec<&str> = unit.split_whitespace().collect();
                complex_forms.insert(parts.concat(), parts.join(thin_space.as_str()));
                complex_alternatives.push(
                    parts
                        .iter()
                        .map(|part| regex::escape(part))
                        .collect::<Vec<_>>()
                        .join(r"\s*"),
                );
            }
        }
        let complex = if complex_alternatives.is_empty() {
            None
        } else {
            Some(compile(
                &format!(r"(\d[\d.,]*)\s+({})", complex_alternatives.join("|")),
                "units",
            )?)
        };

        Ok(Self {
            post,
            pre,
            complex,
            complex_forms,
        })
    }
}

/// Non-breaking layout rules
///
/// Replaces spaces that must not break a line with NBSP: around dashes
/// (convention of the main language), after an ellipsis, before a negative
/// number, between initials and surnames, and between numbers and their
/// units.
#[derive(Debug, Clone)]
pub struct LayoutProcessor {
    main_language: Language,
    config: LayoutConfig,
    units: Option<UnitPatterns>,
}

impl LayoutProcessor {
    /// Create a processor for `languages`
    pub fn new(languages: &LanguageSet, config: LayoutConfig) -> Result<Self> {
        let units = if config.units {
            Some(UnitPatterns::new(&config)?)
        } else {
            None
        };
        tracing::debug!(
            main_language = %languages.primary(),
            initials = config.initials,
            units = config.units,
            complex_units = config.complex_units,
            custom_units = config.custom_units.len(),
            "layout processor created"
        );
        Ok(Self {
            main_language: languages.primary(),
            config,
            units,
        })
    }

    /// Create a processor with every rule enabled
    pub fn with_languages(languages: &LanguageSet) -> Result<Self> {
        Self::new(languages, LayoutConfig::default())
    }

    /// Active configuration
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    fn dash_spacing(&self, dash: &str) -> String {
        match self.main_language {
            Language::English => dash.to_string(),
            Language::Russian | Language::RussianOld => format!("{NBSP}{dash} "),
        }
    }

    fn glue_initials(&self, text: String) -> String {
        let p = static_patterns();

        let pass = |text: &str, regex: &Regex, lookahead: &Regex| {
            replace_with_neighbours(regex, text, |caps, _| {
                let end = caps.get(0)?.end();
                lookahead
                    .is_match(&text[end..])
                    .then(|| format!("{}{NBSP}", &caps[1]))
            })
        };

        let text = pass(text.as_str(), &p.initial_space, &p.starts_with_initial);
        let text = pass(text.as_str(), &p.initial_space, &p.starts_with_surname);
        pass(text.as_str(), &p.surname_space, &p.starts_with_initial)
    }

    fn glue_units(&self, text: String, units: &UnitPatterns) -> String {
        let p = static_patterns();
        let not_word_char = |ch: Option<char>| !ch.is_some_and(|c| char_matches(&p.letter_or_digit, c));

        let text = p
            .multiplier
            .replace_all(&text, format!("${{1}}{NBSP}").as_str())
            .into_owned();

        let text = match &units.complex {
            Some(complex) => replace_with_neighbours(complex, &text, |caps, n| {
                if !not_word_char(n.after) {
                    return None;
                }
                let key: String = caps[2].split_whitespace().collect();
                let unit = units.complex_forms.get(&key)?;
                Some(format!("{}{NBSP}{unit}", &caps[1]))
            }),
            None => text,
        };

        let text = replace_with_neighbours(&units.post, &text, |caps, n| {
            not_word_char(n.after).then(|| format!("{}{NBSP}{}", &caps[1], &caps[2]))
        });

        replace_with_neighbours(&units.pre, &text, |caps, n| {
            not_word_char(n.before).then(|| format!("{}{NBSP}{}", &caps[1], &caps[2]))
        })
    }
}

impl TextProcessor for LayoutProcessor {
    fn name(&self) -> &'static str {
        "layout"
    }

    fn process(&self, text: &str) -> String {
        let p = static_patterns();

        let text = replace_with_neighbours(&p.dash, text, |caps, n| {
            let after_word = n.before_is(|c| char_matches(&p.dash_left, c));
            let before_word = n.after_is(|c| !c.is_whitespace());
            (after_word && before_word).then(|| self.dash_spacing(&caps[1]))
        });

        let text = replace_with_neighbours(&p.ellipsis, &text, |_, n| {
            n.after_is(|c| char_matches(&p.letter_or_digit, c))
                .then(|| format!("\u{2026}{NBSP}"))
        });

        let text = replace_with_neighbours(&p.negative_number, &text, |caps, n| {
            (!n.before_is(|c| c.is_ascii_digit())).then(|| format!("{NBSP}-{}", &caps[1]))
        });

        let text = if self.config.initials {
            self.glue_initials(text)
        } else {
            text
        };

        match &self.units {
            Some(units) => self.glue_units(text, units),
            None => text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn process(langs: &str, text: &str) -> String {
        LayoutProcessor::with_languages(&LanguageSet::parse(langs).unwrap())
            .unwrap()
            .process(text)
    }

    #[test]
    fn test_dash_spacing_follows_main_language() {
        assert_eq!(process("ru", "Слово — слово"), "Слово\u{A0}— слово");
        assert_eq!(process("ru-en", "Слово — слово"), "Слово\u{A0}— слово");
        assert_eq!(process("en", "Word — word"), "Word—word");
        assert_eq!(process("en-ru", "Word — word"), "Word—word");
        assert_eq!(process("ru", "Слово – слово"), "Слово\u{A0}– слово");
        assert_eq!(process("en", "Word – word"), "Word–word");
    }

    #[test]
    fn test_dash_after_punctuation_and_quotes() {
        assert_eq!(process("ru", "Да, — сказал он"), "Да,\u{A0}— сказал он");
        assert_eq!(process("ru", "«Слово» — это важно."), "«Слово»\u{A0}— это важно.");
        assert_eq!(process("en", "“Word,” — he said"), "“Word,”—he said");
        assert_eq!(process("en", "Word! — he exclaimed."), "Word!—he exclaimed.");
    }

    #[test]
    fn test_dash_left_alone() {
        for text in [
            "слово—слово",
            "что-нибудь такое",
            " — слово",
            "слово — ",
            "1941–1945",
            "1 — 2",
            "1 - 2",
        ] {
            assert_eq!(process("ru", text), text);
        }
    }

    #[test]
    fn test_ellipsis() {
        assert_eq!(
            process("ru", "Что это\u{2026} \n \t не знаю."),
            "Что это\u{2026}\u{A0}не знаю."
        );
        assert_eq!(process("ru", "Что это\u{2026} 123."), "Что это\u{2026}\u{A0}123.");
        assert_eq!(process("ru", "Что это\u{2026}   "), "Что это\u{2026}   ");
        assert_eq!(
            process("ru", "1\u{2026}2\u{2026}3, я иду"),
            "1\u{2026}2\u{2026}3, я иду"
        );
    }

    #[test]
    fn test_negative_numbers() {
        assert_eq!(
            process("ru", "температура -10 градусов"),
            "температура\u{A0}-10 градусов"
        );
        assert_eq!(process("ru", "от -5 до +5"), "от\u{A0}-5 до +5");
        assert_eq!(process("ru", "в диапазоне ( -10, 10)"), "в диапазоне (\u{A0}-10, 10)");
        assert_eq!(process("ru", "10 - 5 = 5"), "10 - 5 = 5");
        assert_eq!(process("ru", "слово-10"), "слово-10");
        assert_eq!(process("ru", "1-2-3-4-5, я иду"), "1-2-3-4-5, я иду");
    }

    #[test]
    fn test_initials() {
        assert_eq!(process("ru", "А. С. Пушкин"), "А.\u{A0}С.\u{A0}Пушкин");
        assert_eq!(process("ru", "А.С. Пушкин"), "А.С.\u{A0}Пушкин");
        assert_eq!(process("ru", "Пушкин А. С."), "Пушкин\u{A0}А.\u{A0}С.");
        assert_eq!(process("ru", "Пушкин А.С."), "Пушкин\u{A0}А.С.");
        assert_eq!(
            process("en", "J. R. R. Tolkien"),
            "J.\u{A0}R.\u{A0}R.\u{A0}Tolkien"
        );
        assert_eq!(process("en", "Tolkien J.R.R."), "Tolkien\u{A0}J.R.R.");
        assert_eq!(process("ru", "Это был В. Высоцкий."), "Это был В.\u{A0}Высоцкий.");
        assert_eq!(
            process("ru", "Высоцкий В. С. был гением."),
            "Высоцкий\u{A0}В.\u{A0}С. был гением."
        );
    }

    #[test]
    fn test_combined() {
        assert_eq!(
            process("ru", "Да — это так\u{2026} а может и нет. Счёт -10."),
            "Да\u{A0}— это так\u{2026}\u{A0}а может и нет. Счёт\u{A0}-10."
        );
        assert_eq!(
            process("ru", "По мнению А. С. Пушкина — это..."),
            "По мнению А.\u{A0}С.\u{A0}Пушкина\u{A0}— это..."
        );
    }

    #[test]
    fn test_units() {
        assert_eq!(process("ru", "до 10 км пути"), "до 10\u{A0}км пути");
        assert_eq!(process("ru", "скидка 5 %"), "скидка 5\u{A0}%");
        assert_eq!(process("ru", "в 2024 г. было"), "в 2024\u{A0}г. было");
        assert_eq!(process("ru", "10 минут"), "10 минут");
        assert_eq!(process("ru", "\u{2116} 5 и \u{00A7} 3"), "\u{2116}\u{A0}5 и \u{00A7}\u{A0}3");
        assert_eq!(process("ru", "100 тыс. руб."), "100\u{A0}тыс.\u{A0}руб.");
    }

    #[test]
    fn test_complex_units() {
        assert_eq!(
            process("ru", "площадь 50 кв. м и 2 кв.км"),
            "площадь 50\u{A0}кв.\u{2009}м и 2\u{A0}кв.\u{2009}км"
        );
    }

    #[test]
    fn test_switches_and_custom_units() {
        let languages = LanguageSet::single(Language::Russian);
        let config = LayoutConfig {
            initials: false,
            units: true,
            complex_units: false,
            custom_units: vec!["попугаев".to_string(), "у. е.".to_string()],
        };
        let processor = LayoutProcessor::new(&languages, config).unwrap();
        assert_eq!(processor.process("А. С. Пушкин"), "А. С. Пушкин");
        assert_eq!(processor.process("38 попугаев"), "38\u{A0}попугаев");
        // Complex units are off, so the spaced custom unit is ignored too
        assert_eq!(processor.process("50 кв. м"), "50 кв. м");
        assert_eq!(processor.process("7 у. е."), "7 у. е.");

        let no_units = LayoutConfig {
            units: false,
            ..LayoutConfig::default()
        };
        let processor = LayoutProcessor::new(&languages, no_units).unwrap();
        assert_eq!(processor.process("10 км"), "10 км");
    }
}
