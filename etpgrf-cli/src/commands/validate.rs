//! Validate command implementation

use anyhow::Result;
use clap::Args;
use etpgrf_engine::Typographer;
use std::path::{Path, PathBuf};

use crate::config::FileConfig;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        match Self::check(&self.config) {
            Ok(typographer) => {
                println!("✓ Configuration is valid!");
                println!("  Languages: {}", typographer.languages());
                println!("  Mode: {}", typographer.mode());
                println!("  HTML: {}", typographer.process_html());
                println!("  Stages: {}", typographer.processor_names().join(", "));
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e:#}");
                Err(anyhow::anyhow!("Validation failed: {e:#}"))
            }
        }
    }

    fn check(path: &Path) -> Result<Typographer> {
        let config = FileConfig::from_file(path)?;
        Ok(Typographer::with_config(config.typographer_config()?)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", content).unwrap();
        temp_file
    }

    #[test]
    fn test_validate_valid_config() {
        let temp_file = write_config(
            r#"
[typographer]
langs = "ru+en"
mode = "mixed"

[hyphenation]
max_unhyphenated_len = 10
"#,
        );
        let args = ValidateArgs {
            config: temp_file.path().to_path_buf(),
        };
        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_validate_invalid_language() {
        let temp_file = write_config("[typographer]\nlangs = \"ru+de\"\n");
        let args = ValidateArgs {
            config: temp_file.path().to_path_buf(),
        };
        let err = args.execute().unwrap_err();
        assert!(err.to_string().contains("language 'de' is not supported"));
    }

    #[test]
    fn test_validate_malformed_toml() {
        let temp_file = write_config("[typographer\nlangs = ");
        let args = ValidateArgs {
            config: temp_file.path().to_path_buf(),
        };
        assert!(args.execute().is_err());
    }

    #[test]
    fn test_validate_missing_file() {
        let args = ValidateArgs {
            config: PathBuf::from("/nonexistent/etpgrf.toml"),
        };
        let err = args.execute().unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
