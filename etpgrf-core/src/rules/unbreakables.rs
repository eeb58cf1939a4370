//! Gluing short function words to their neighbours

use regex::Regex;

use super::pattern::{alternation, compile, replace_with_neighbours};
use super::{TextProcessor, NBSP};
use crate::error::Result;
use crate::language::{Language, LanguageSet};

const RUSSIAN_PREPOSITIONS: &[&str] = &[
    "а", "без", "в", "во", "да", "для", "до", "за", "и", "из", "изо", "или", "к", "ко", "меж",
    "на", "над", "не", "ни", "но", "о", "об", "обо", "от", "ото", "по", "под", "при", "про",
    "с", "со", "у",
];

const ENGLISH_PREPOSITIONS: &[&str] = &[
    "a", "an", "and", "as", "at", "but", "by", "for", "from", "if", "in", "into", "nor", "of",
    "on", "or", "the", "to", "via", "with",
];

/// Particles that belong to the word before them
const RUSSIAN_PARTICLES: &[&str] = &["ли", "ль", "же", "ж", "бы", "б"];

fn prepositions(language: Language) -> &'static [&'static str] {
    match language {
        Language::Russian | Language::RussianOld => RUSSIAN_PREPOSITIONS,
        Language::English => ENGLISH_PREPOSITIONS,
    }
}

/// Keeps prepositions, conjunctions and articles on the same line as the
/// next word and Russian particles on the same line as the previous one
#[derive(Debug, Clone)]
pub struct UnbreakablesProcessor {
    leading: Regex,
    trailing: Option<Regex>,
}

impl UnbreakablesProcessor {
    /// Create a processor for the words of `languages`
    pub fn new(languages: &LanguageSet) -> Result<Self> {
        let words = alternation(languages.iter().flat_map(prepositions));
        let leading = compile(&format!(r"(?i)\b({words})\s+"), "unbreakables")?;

        let trailing = if languages.iter().any(|language| language.is_russian()) {
            let particles = alternation(RUSSIAN_PARTICLES);
            Some(compile(&format!(r"(?i)\s+({particles})\b"), "unbreakables")?)
        } else {
            None
        };

        tracing::debug!(languages = %languages, "unbreakables processor created");
        Ok(Self { leading, trailing })
    }
}

impl TextProcessor for UnbreakablesProcessor {
    fn name(&self) -> &'static str {
        "unbreakables"
    }

    fn process(&self, text: &str) -> String {
        // Parts of hyphenated words such as "из-за" are not words of their own
        let glued = replace_with_neighbours(&self.leading, text, |caps, around| {
            (!around.before_is(|ch| ch == '-' || ch.is_alphanumeric()))
                .then(|| format!("{}{NBSP}", &caps[1]))
        });
        match &self.trailing {
            Some(trailing) => replace_with_neighbours(trailing, &glued, |caps, around| {
                (!around.after_is(|ch| ch == '-' || ch.is_alphanumeric()))
                    .then(|| format!("{NBSP}{}", &caps[1]))
            }),
            None => glued,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn russian() -> UnbreakablesProcessor {
        UnbreakablesProcessor::new(&LanguageSet::single(Language::Russian)).unwrap()
    }

    #[test]
    fn test_prepositions_and_conjunctions() {
        assert_eq!(
            russian().process("Текст, а внутри для проверки"),
            "Текст, а\u{A0}внутри для\u{A0}проверки"
        );
        assert_eq!(
            russian().process("но с предлогом в доме"),
            "но\u{A0}с\u{A0}предлогом в\u{A0}доме"
        );
        assert_eq!(russian().process("В доме"), "В\u{A0}доме");
    }

    #[test]
    fn test_whole_words_only() {
        assert_eq!(russian().process("Союз еще один"), "Союз еще один");
        assert_eq!(russian().process("из-за угла"), "из-за угла");
        assert_eq!(russian().process("по-за домом"), "по-за домом");
        assert_eq!(russian().process("из-за в доме"), "из-за в\u{A0}доме");
        assert_eq!(russian().process("Кто же-то"), "Кто же-то");
        assert_eq!(russian().process("«без» слов"), "«без» слов");
    }

    #[test]
    fn test_trailing_space_is_glued() {
        assert_eq!(russian().process("Текст с "), "Текст с\u{A0}");
    }

    #[test]
    fn test_particles() {
        assert_eq!(russian().process("Он же сказал"), "Он\u{A0}же сказал");
        assert_eq!(russian().process("Знаешь ли ты"), "Знаешь\u{A0}ли ты");
        assert_eq!(russian().process("Вот лишь бы"), "Вот лишь\u{A0}бы");
    }

    #[test]
    fn test_english() {
        let processor =
            UnbreakablesProcessor::new(&LanguageSet::single(Language::English)).unwrap();
        assert_eq!(
            processor.process("The cat and the dog"),
            "The\u{A0}cat and\u{A0}the\u{A0}dog"
        );
        assert_eq!(processor.process("Он же"), "Он же");
    }
}
