//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod generate_config;
pub mod list;
pub mod process;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Typeset text or HTML files
    Process(process::ProcessArgs),

    /// Check a configuration file
    Validate(validate::ValidateArgs),

    /// Write a configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: list::ListCommands,
    },
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Process(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(subcommand)]
        command: Commands,
    }

    #[test]
    fn test_process_arguments() {
        let cli = TestCli::try_parse_from([
            "etpgrf", "process", "-i", "a.txt", "-i", "b/*.html", "-l", "ru+en", "-m", "unicode",
            "--html", "--no-quotes", "--max-len", "10", "-vv",
        ])
        .unwrap();

        let Commands::Process(args) = cli.command else {
            panic!("expected process command");
        };
        assert_eq!(args.input, vec!["a.txt", "b/*.html"]);
        assert_eq!(args.langs.as_deref(), Some("ru+en"));
        assert_eq!(args.mode.as_deref(), Some("unicode"));
        assert!(args.html);
        assert!(args.no_quotes);
        assert!(!args.no_hyphenation);
        assert_eq!(args.max_len, Some(10));
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_process_requires_input() {
        assert!(TestCli::try_parse_from(["etpgrf", "process"]).is_err());
    }

    #[test]
    fn test_list_subcommands() {
        let cli = TestCli::try_parse_from(["etpgrf", "list", "modes"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::List {
                subcommand: list::ListCommands::Modes
            }
        ));
        assert!(TestCli::try_parse_from(["etpgrf", "list", "formats"]).is_err());
    }

    #[test]
    fn test_generate_config_name() {
        let cli = TestCli::try_parse_from(["etpgrf", "generate-config", "-o", "etpgrf.toml"]).unwrap();
        assert!(matches!(cli.command, Commands::GenerateConfig(_)));
    }
}
