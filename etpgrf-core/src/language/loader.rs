//! Language profile loader
//!
//! Profiles are embedded TOML files, parsed once on first access and
//! shared for the lifetime of the process.

use std::collections::HashMap;
use std::sync::OnceLock;

use super::codes::Language;
use super::profile::LanguageProfile;
use crate::error::{ConfigError, Result};

/// Embedded profiles keyed by language; a failed parse is kept as its error
static EMBEDDED: OnceLock<HashMap<Language, std::result::Result<LanguageProfile, ConfigError>>> =
    OnceLock::new();

fn embedded_source(language: Language) -> &'static str {
    match language {
        Language::Russian => include_str!("../../configs/languages/russian.toml"),
        Language::RussianOld => include_str!("../../configs/languages/russian_old.toml"),
        Language::English => include_str!("../../configs/languages/english.toml"),
    }
}

fn load_embedded_profile(language: Language) -> Result<LanguageProfile> {
    let profile = LanguageProfile::from_toml_str(embedded_source(language)).map_err(|e| match e {
        ConfigError::Profile { reason, .. } => ConfigError::Profile {
            code: language.code().to_string(),
            reason,
        },
        other => other,
    })?;

    if profile.language() != language {
        return Err(ConfigError::Profile {
            code: language.code().to_string(),
            reason: format!("embedded profile declares code '{}'", profile.language()),
        });
    }
    Ok(profile)
}

/// Get the letter profile of a language
pub fn profile(language: Language) -> Result<&'static LanguageProfile> {
    let embedded = EMBEDDED.get_or_init(|| {
        Language::ALL
            .into_iter()
            .map(|language| {
                let loaded = load_embedded_profile(language);
                if let Err(e) = &loaded {
                    tracing::error!("Failed to load {} profile: {e}", language.code());
                }
                (language, loaded)
            })
            .collect()
    });

    match embedded.get(&language) {
        Some(Ok(profile)) => Ok(profile),
        Some(Err(e)) => Err(e.clone()),
        None => Err(ConfigError::UnsupportedLanguage {
            code: language.code().to_string(),
            supported: Language::supported_codes(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::CharClass;

    #[test]
    fn test_all_embedded_profiles_load() {
        for language in Language::ALL {
            let profile = profile(language).unwrap();
            assert_eq!(profile.language(), language);
        }
    }

    #[test]
    fn test_russian_profile() {
        let ru = profile(Language::Russian).unwrap();
        assert_eq!(ru.classify('ё'), CharClass::Vowel);
        assert_eq!(ru.classify('щ'), CharClass::Consonant);
        assert_eq!(ru.classify('Й'), CharClass::Semivowel);
        assert_eq!(ru.classify('ъ'), CharClass::Sign);
        assert_eq!(ru.classify('ѣ'), CharClass::Other);
        assert_eq!(ru.letters().len(), 66);
    }

    #[test]
    fn test_pre_reform_profile_extends_russian() {
        let ruold = profile(Language::RussianOld).unwrap();
        assert!(ruold.is_vowel('ѣ'));
        assert!(ruold.is_vowel('І'));
        assert!(ruold.is_consonant('ѳ'));
        assert!(ruold.is_vowel('а'));
    }

    #[test]
    fn test_english_profile() {
        let en = profile(Language::English).unwrap();
        assert!(en.is_vowel('e'));
        assert!(en.is_consonant('Y'));
        assert!(!en.contains('ж'));
        assert_eq!(en.letters().len(), 52);
    }
}
