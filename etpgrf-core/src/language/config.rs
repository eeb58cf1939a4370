//! TOML schema for language profiles

use serde::{Deserialize, Serialize};

/// Root of a language profile file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    pub metadata: Metadata,
    pub letters: Letters,
}

/// Profile metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// Letter categories, each given as a string of upper-case letters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Letters {
    pub vowels: String,
    pub consonants: String,
    #[serde(default)]
    pub semivowels: String,
    #[serde(default)]
    pub signs: String,
}

impl ProfileConfig {
    /// Validate the letter categories
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.metadata.code.trim().is_empty() {
            return Err("metadata.code must not be empty".to_string());
        }
        if self.letters.vowels.trim().is_empty() {
            return Err("letters.vowels must not be empty".to_string());
        }

        let categories = [
            ("vowels", &self.letters.vowels),
            ("consonants", &self.letters.consonants),
            ("semivowels", &self.letters.semivowels),
            ("signs", &self.letters.signs),
        ];
        for (i, (name, letters)) in categories.iter().enumerate() {
            if let Some(ch) = letters.chars().find(|c| !c.is_alphabetic()) {
                return Err(format!("letters.{name} contains non-letter {ch:?}"));
            }
            for (other_name, other) in &categories[i + 1..] {
                if let Some(ch) = letters.chars().find(|c| other.contains(*c)) {
                    return Err(format!(
                        "letter {ch:?} appears in both letters.{name} and letters.{other_name}"
                    ));
                }
            }
        }

        Ok(())
    }
}
