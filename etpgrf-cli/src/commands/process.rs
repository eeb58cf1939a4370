//! Process command implementation

use anyhow::{Context, Result};
use clap::Args;
use etpgrf_engine::Typographer;
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::config::FileConfig;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{JsonFormatter, OutputFormatter, ProcessedDocument, TextFormatter};
use crate::progress::ProgressReporter;

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input files or patterns (supports glob); `-` reads standard input
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Languages joined with '+', e.g. ru+en
    #[arg(short, long, value_name = "LANGS")]
    pub langs: Option<String>,

    /// Output mode: unicode, mnemonic or mixed
    #[arg(short, long, value_name = "MODE")]
    pub mode: Option<String>,

    /// Treat input as HTML and typeset text nodes only
    #[arg(long)]
    pub html: bool,

    /// Do not insert soft hyphens
    #[arg(long)]
    pub no_hyphenation: bool,

    /// Keep straight quotes
    #[arg(long)]
    pub no_quotes: bool,

    /// Skip dash, initials and unit spacing
    #[arg(long)]
    pub no_layout: bool,

    /// Do not glue prepositions and particles
    #[arg(long)]
    pub no_unbreakables: bool,

    /// Keep ASCII stand-ins such as "--" and "(c)"
    #[arg(long)]
    pub no_symbols: bool,

    /// Longest word left without soft hyphens
    #[arg(long, value_name = "N")]
    pub max_len: Option<usize>,

    /// Minimum letters on each side of a soft hyphen
    #[arg(long, value_name = "N")]
    pub min_tail: Option<usize>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Typeset text as is
    Text,
    /// JSON array with one object per input
    Json,
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        // Initialize logging based on verbosity
        self.init_logging()?;

        log::info!("Starting text processing");
        log::debug!("Arguments: {:?}", self);

        let typographer = self.build_typographer()?;
        let sources = resolve_patterns(&self.input)?;

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(sources.len() as u64);

        // Collecting from an indexed parallel iterator keeps input order
        let documents: Vec<Result<ProcessedDocument>> = sources
            .par_iter()
            .map(|source| {
                let input = FileReader::read_source(source)?;
                let text = typographer.process(&input);
                let name = source.to_string();
                log::debug!("{name}: {} -> {} bytes", input.len(), text.len());
                progress.file_completed(&name);
                Ok(ProcessedDocument::new(name, &input, text))
            })
            .collect();
        progress.finish();

        let documents = documents.into_iter().collect::<Result<Vec<_>>>()?;
        self.write_output(&documents)?;

        log::info!("Processed {} input(s)", documents.len());
        Ok(())
    }

    /// File configuration with command-line overrides applied
    pub fn file_config(&self) -> Result<FileConfig> {
        let mut config = match &self.config {
            Some(path) => FileConfig::from_file(path)?,
            None => FileConfig::default(),
        };
        self.apply_overrides(&mut config);
        Ok(config)
    }

    fn apply_overrides(&self, config: &mut FileConfig) {
        if let Some(langs) = &self.langs {
            config.typographer.langs = Some(langs.clone());
        }
        if let Some(mode) = &self.mode {
            config.typographer.mode = Some(mode.clone());
        }
        if self.html {
            config.typographer.html = Some(true);
        }
        if let Some(len) = self.max_len {
            config.hyphenation.max_unhyphenated_len = Some(len);
        }
        if let Some(len) = self.min_tail {
            config.hyphenation.min_tail_len = Some(len);
        }

        let switches = [
            (self.no_hyphenation, &mut config.hyphenation.enabled),
            (self.no_layout, &mut config.layout.enabled),
            (self.no_quotes, &mut config.quotes.enabled),
            (self.no_unbreakables, &mut config.unbreakables.enabled),
            (self.no_symbols, &mut config.symbols.enabled),
        ];
        for (disabled, enabled) in switches {
            if disabled {
                *enabled = Some(false);
            }
        }
    }

    fn build_typographer(&self) -> Result<Typographer> {
        let config = self
            .file_config()?
            .typographer_config()
            .context("Invalid typographer configuration")?;
        Typographer::with_config(config).context("Failed to create typographer")
    }

    fn write_output(&self, documents: &[ProcessedDocument]) -> Result<()> {
        let writer: Box<dyn Write + Send> = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout()),
        };

        let mut formatter: Box<dyn OutputFormatter> = match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        };
        for document in documents {
            formatter.write_document(document)?;
        }
        formatter.finish()
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A second initialisation in the same process is harmless
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use etpgrf_engine::{EncodeMode, Rule};
    use std::fs;
    use tempfile::TempDir;

    fn args(input: &str) -> ProcessArgs {
        ProcessArgs {
            input: vec![input.to_string()],
            output: None,
            format: OutputFormat::Text,
            langs: Some("ru".to_string()),
            mode: None,
            html: false,
            no_hyphenation: false,
            no_quotes: false,
            no_layout: false,
            no_unbreakables: false,
            no_symbols: false,
            max_len: None,
            min_tail: None,
            config: None,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_flags_override_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("etpgrf.toml");
        fs::write(
            &config_path,
            "[typographer]\nlangs = \"en\"\nmode = \"mnemonic\"\n[quotes]\nenabled = true\n",
        )
        .unwrap();

        let mut args = args("a.txt");
        args.config = Some(config_path);
        args.mode = Some("unicode".to_string());
        args.no_quotes = true;
        args.max_len = Some(6);

        let config = args.file_config().unwrap();
        assert_eq!(config.typographer.langs.as_deref(), Some("ru"));
        assert_eq!(config.typographer.mode.as_deref(), Some("unicode"));
        assert_eq!(config.quotes.enabled, Some(false));
        assert_eq!(config.hyphenation.max_unhyphenated_len, Some(6));

        let resolved = config.typographer_config().unwrap();
        assert_eq!(resolved.mode, EncodeMode::Unicode);
        assert!(matches!(resolved.quotes, Rule::Disabled));
    }

    #[test]
    fn test_process_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("input.txt");
        let output = temp_dir.path().join("output.txt");
        fs::write(&input, "Простой текст с \"кавычками\".").unwrap();

        let mut args = args(&input.to_string_lossy());
        args.output = Some(output.clone());
        args.execute().unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "Простой текст с&nbsp;«кавычками»."
        );
    }

    #[test]
    fn test_invalid_mode_is_reported() {
        let mut args = args("a.txt");
        args.mode = Some("html".to_string());
        let err = args.execute().unwrap_err();
        assert!(format!("{err:#}").contains("mode 'html' is not supported"));
    }
}
