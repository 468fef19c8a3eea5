//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;
use tally_core::TextStats;

/// Markdown formatter - outputs a table per input
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    show_sentences: bool,
    sentence_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W, show_sentences: bool) -> Self {
        Self {
            writer,
            show_sentences,
            sentence_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_document(&mut self, source: &str, stats: &TextStats) -> Result<()> {
        self.sentence_count += stats.sentence_count;

        writeln!(self.writer, "## {source}")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|---|---|")?;
        writeln!(self.writer, "| Sentences | {} |", stats.sentence_count)?;
        writeln!(self.writer, "| Words | {} |", stats.word_count)?;
        writeln!(self.writer, "| Paragraphs | {} |", stats.paragraph_count)?;
        writeln!(self.writer, "| Reading time | {} min |", stats.reading_minutes)?;
        writeln!(self.writer)?;

        if self.show_sentences && !stats.sentences.is_empty() {
            for (index, sentence) in stats.sentences.iter().enumerate() {
                let flattened = sentence.text.split_whitespace().collect::<Vec<_>>().join(" ");
                writeln!(self.writer, "{}. {}", index + 1, flattened)?;
            }
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total sentences: {}*", self.sentence_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
