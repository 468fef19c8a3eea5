//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;
use tally_core::TextStats;

/// Plain text formatter - outputs one labelled count per line
pub struct TextFormatter<W: Write> {
    writer: W,
    show_sentences: bool,
    show_headers: bool,
    documents: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, show_sentences: bool) -> Self {
        Self {
            writer,
            show_sentences,
            show_headers: false,
            documents: 0,
        }
    }

    /// Print a `== source ==` header before each input
    pub fn with_headers(mut self, show_headers: bool) -> Self {
        self.show_headers = show_headers;
        self
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_document(&mut self, source: &str, stats: &TextStats) -> Result<()> {
        if self.show_headers {
            if self.documents > 0 {
                writeln!(self.writer)?;
            }
            writeln!(self.writer, "== {source} ==")?;
        }
        self.documents += 1;

        writeln!(self.writer, "Sentences:    {}", stats.sentence_count)?;
        writeln!(self.writer, "Words:        {}", stats.word_count)?;
        writeln!(self.writer, "Paragraphs:   {}", stats.paragraph_count)?;
        writeln!(self.writer, "Reading time: {} min", stats.reading_minutes)?;

        if self.show_sentences {
            for (index, sentence) in stats.sentences.iter().enumerate() {
                writeln!(self.writer, "{:>4}. {}", index + 1, sentence.text)?;
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
