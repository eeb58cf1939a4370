//! etpgrf command-line entry point

use clap::Parser;
use etpgrf_cli::commands::Commands;
use etpgrf_cli::CliResult;

/// Screen typographer: quotes, non-breaking spaces, soft hyphens and HTML entities
#[derive(Debug, Parser)]
#[command(name = "etpgrf", author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    cli.command.execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }
}
