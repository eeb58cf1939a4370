//! Output formatting module

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// One typeset input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedDocument {
    /// File path, or `<stdin>`
    pub source: String,
    /// Typeset text
    pub text: String,
    /// Size of the input in bytes
    pub input_bytes: usize,
    /// Size of the output in bytes
    pub output_bytes: usize,
}

impl ProcessedDocument {
    /// Record the result of processing `input` from `source`
    pub fn new(source: impl Into<String>, input: &str, text: String) -> Self {
        Self {
            source: source.into(),
            input_bytes: input.len(),
            output_bytes: text.len(),
            text,
        }
    }
}

/// Trait for output formatters
pub trait OutputFormatter: Send {
    /// Format and output a single document
    fn write_document(&mut self, document: &ProcessedDocument) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
