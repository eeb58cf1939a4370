//! JSON output formatter

use super::{OutputFormatter, ProcessedDocument};
use anyhow::Result;
use std::io::Write;

/// Collects documents and writes them as one JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    documents: Vec<ProcessedDocument>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            documents: Vec::new(),
        }
    }
}

impl<W: Write + Send> OutputFormatter for JsonFormatter<W> {
    fn write_document(&mut self, document: &ProcessedDocument) -> Result<()> {
        self.documents.push(document.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.documents)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
