//! File pattern resolution using glob

use anyhow::Result;
use glob::glob;

use super::InputSource;
use crate::error::CliError;

/// Resolve file patterns to input sources
///
/// `-` stands for standard input. Files matched by several patterns are
/// read once; the result keeps the order of the patterns, and files matched
/// by one pattern are sorted.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<InputSource>> {
    let mut sources = Vec::new();

    for pattern in patterns {
        if pattern == "-" {
            if !sources.contains(&InputSource::Stdin) {
                sources.push(InputSource::Stdin);
            }
            continue;
        }

        let paths = glob(pattern).map_err(|e| CliError::InvalidPattern(format!("{pattern}: {e}")))?;

        let mut matched = Vec::new();
        for path_result in paths {
            let path = path_result.map_err(|e| CliError::FileNotFound(e.to_string()))?;
            if path.is_file() {
                matched.push(path);
            }
        }
        if matched.is_empty() {
            return Err(CliError::FileNotFound(pattern.clone()).into());
        }

        matched.sort();
        for path in matched {
            let source = InputSource::File(path);
            if !sources.contains(&source) {
                sources.push(source);
            }
        }
    }

    log::debug!("resolved {} input(s)", sources.len());
    Ok(sources)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn pattern(dir: &TempDir, name: &str) -> String {
        dir.path().join(name).to_string_lossy().into_owned()
    }

    #[test]
    fn test_glob_is_sorted_and_deduplicated() {
        let temp_dir = TempDir::new().unwrap();
        for name in ["b.txt", "a.txt", "c.html"] {
            fs::write(temp_dir.path().join(name), "текст").unwrap();
        }

        let sources = resolve_patterns(&[
            pattern(&temp_dir, "*.txt"),
            pattern(&temp_dir, "a.txt"),
            pattern(&temp_dir, "c.html"),
        ])
        .unwrap();

        let names: Vec<String> = sources
            .iter()
            .map(|s| match s {
                InputSource::File(path) => path.file_name().unwrap().to_string_lossy().into_owned(),
                InputSource::Stdin => "-".to_string(),
            })
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt", "c.html"]);
    }

    #[test]
    fn test_stdin_marker() {
        let sources = resolve_patterns(&["-".to_string(), "-".to_string()]).unwrap();
        assert_eq!(sources, vec![InputSource::Stdin]);
    }

    #[test]
    fn test_missing_file() {
        let err = resolve_patterns(&["/nonexistent/*.txt".to_string()]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = resolve_patterns(&["[invalid".to_string()]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::InvalidPattern(_))
        ));
    }
}
