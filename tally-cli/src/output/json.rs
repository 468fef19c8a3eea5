//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;
use tally_core::{Sentence, TextStats};

/// JSON formatter - outputs one report per input as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    show_sentences: bool,
    reports: Vec<DocumentReport>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct DocumentReport {
    /// Where the text came from
    pub source: String,
    /// Number of sentences
    pub sentence_count: usize,
    /// Number of words
    pub word_count: usize,
    /// Number of paragraphs
    pub paragraph_count: usize,
    /// Estimated reading time in minutes
    pub reading_minutes: u64,
    /// Sentences with offsets, when requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentences: Option<Vec<Sentence>>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool, show_sentences: bool) -> Self {
        Self {
            writer,
            pretty,
            show_sentences,
            reports: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_document(&mut self, source: &str, stats: &TextStats) -> Result<()> {
        self.reports.push(DocumentReport {
            source: source.to_string(),
            sentence_count: stats.sentence_count,
            word_count: stats.word_count,
            paragraph_count: stats.paragraph_count,
            reading_minutes: stats.reading_minutes,
            sentences: self.show_sentences.then(|| stats.sentences.clone()),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.reports)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.reports)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_core::TextAnalyzer;

    fn render(pretty: bool, show_sentences: bool) -> String {
        let mut buffer = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buffer, pretty, show_sentences);
            let stats = TextAnalyzer::new().analyze("Dr. Who? Yes. Fine");
            formatter.format_document("doc.txt", &stats).unwrap();
            formatter.finish().unwrap();
        }
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_report_fields() {
        let reports: Vec<DocumentReport> = serde_json::from_str(&render(true, false)).unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].source, "doc.txt");
        assert_eq!(reports[0].sentence_count, 3);
        assert_eq!(reports[0].word_count, 4);
        assert!(reports[0].sentences.is_none());
    }

    #[test]
    fn test_sentences_included_on_request() {
        let output = render(false, true);
        assert_eq!(output.lines().count(), 1);

        let reports: Vec<DocumentReport> = serde_json::from_str(&output).unwrap();
        let sentences = reports[0].sentences.as_ref().unwrap();
        assert_eq!(sentences[0].text, "Dr. Who?");
        assert_eq!(sentences[2].text, "Fine");
        assert_eq!(sentences[2].offset, 14);
    }
}
