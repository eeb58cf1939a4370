//! Plain text output formatter

use super::{OutputFormatter, ProcessedDocument};
use anyhow::Result;
use std::io::{self, Write};

/// Writes typeset text as is, documents one after another
pub struct TextFormatter<W: Write> {
    writer: W,
    needs_separator: bool,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            needs_separator: false,
        }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> OutputFormatter for TextFormatter<W> {
    fn write_document(&mut self, document: &ProcessedDocument) -> Result<()> {
        // Keep consecutive documents on separate lines
        if self.needs_separator {
            writeln!(self.writer)?;
        }
        self.writer.write_all(document.text.as_bytes())?;
        self.needs_separator = !document.text.is_empty() && !document.text.ends_with('\n');
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documents_are_written_verbatim() {
        let mut buffer = Vec::new();
        {
            let mut formatter = TextFormatter::new(&mut buffer);
            formatter
                .write_document(&ProcessedDocument::new("a", "", "первый\n".to_string()))
                .unwrap();
            formatter
                .write_document(&ProcessedDocument::new("b", "", "второй".to_string()))
                .unwrap();
            formatter
                .write_document(&ProcessedDocument::new("c", "", "третий".to_string()))
                .unwrap();
            formatter.finish().unwrap();
        }
        assert_eq!(String::from_utf8(buffer).unwrap(), "первый\nвторой\nтретий");
    }
}
