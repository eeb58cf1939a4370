//! List command implementation

use anyhow::Result;
use clap::Subcommand;
use etpgrf_engine::{EncodeMode, Language};

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List supported languages
    Languages,

    /// List output encoding modes
    Modes,
}

impl ListCommands {
    /// Print the requested list to stdout
    pub fn execute(&self) -> Result<()> {
        for line in self.lines() {
            println!("{line}");
        }
        Ok(())
    }

    fn lines(&self) -> Vec<String> {
        match self {
            ListCommands::Languages => Language::ALL
                .iter()
                .map(|language| format!("{:<6} {}", language.code(), language.name()))
                .collect(),
            ListCommands::Modes => EncodeMode::ALL
                .iter()
                .map(|mode| {
                    let description = match mode {
                        EncodeMode::Unicode => "literal characters only",
                        EncodeMode::Mnemonic => "named references wherever one exists",
                        EncodeMode::Mixed => "references for invisible and markup characters",
                    };
                    let marker = if *mode == EncodeMode::default() {
                        " (default)"
                    } else {
                        ""
                    };
                    format!("{:<9} {description}{marker}", mode.as_str())
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_languages() {
        let lines = ListCommands::Languages.lines();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("ru "));
        assert!(lines.iter().any(|l| l.starts_with("ruold") && l.contains("pre-reform")));
    }

    #[test]
    fn test_modes_mark_default() {
        let lines = ListCommands::Modes.lines();
        assert_eq!(lines.len(), 3);
        let defaults: Vec<_> = lines.iter().filter(|l| l.ends_with("(default)")).collect();
        assert_eq!(defaults.len(), 1);
        assert!(defaults[0].starts_with("mixed"));
    }
}
