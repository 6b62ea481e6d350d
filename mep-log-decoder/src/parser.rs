//! Sectioned log file parser
//!
//! MEP log files are line-oriented text split into bracketed sections. The
//! two recognized sections are `[LapsSignalData]` (two whitespace-separated
//! integer samples per line, one line per sample) and `[StimIndex]` (one
//! integer per line, grouped into fixed-size stimulation records). Lines in
//! unrecognized sections are ignored.
//!
//! The parser consumes lines until its source is exhausted; a blank line
//! inside the stream is a no-op, not a terminator.

use crate::record::StimRecordBuilder;
use crate::types::{DecoderError, LapsData, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Header line of the signal data section
pub const SIGNAL_DATA_HEADER: &str = "[LapsSignalData]";
/// Header line of the stimulation index section
pub const STIM_INDEX_HEADER: &str = "[StimIndex]";

/// Section of the log file the parser is currently in
///
/// Set by header lines (first byte `[`) and persists until the next header.
/// Dispatch on the current section decides how body lines are interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section {
    /// Before the first header line
    None,
    /// `[LapsSignalData]` - two-channel sample lines
    SignalData,
    /// `[StimIndex]` - stimulation record values
    StimIndex,
    /// Any other bracketed label; body lines are skipped
    Other(String),
}

impl Section {
    /// Classify a header line by its trimmed content
    fn from_header(line: &str) -> Self {
        match line.trim() {
            SIGNAL_DATA_HEADER => Section::SignalData,
            STIM_INDEX_HEADER => Section::StimIndex,
            other => Section::Other(other.to_string()),
        }
    }

    /// Label used in diagnostics
    fn label(&self) -> &str {
        match self {
            Section::None => "(none)",
            Section::SignalData => SIGNAL_DATA_HEADER,
            Section::StimIndex => STIM_INDEX_HEADER,
            Section::Other(label) => label,
        }
    }
}

/// MEP log file parser
///
/// Produces a [`LapsData`] from any source of text lines. File and reader
/// entry points own the I/O; `parse_lines` is the pure core.
pub struct LapsParser;

impl LapsParser {
    /// Parse a log file from disk
    pub fn parse_file(path: &Path) -> Result<LapsData> {
        log::info!("Parsing MEP log file: {:?}", path);
        let file = File::open(path)?;
        Self::parse_reader(BufReader::new(file))
    }

    /// Parse from any buffered reader
    pub fn parse_reader<R: BufRead>(reader: R) -> Result<LapsData> {
        let mut state = ParserState::new();
        for line in reader.lines() {
            state.feed(&line?)?;
        }
        Ok(state.finish())
    }

    /// Parse from an in-memory sequence of lines (already newline-free)
    pub fn parse_lines<I, S>(lines: I) -> Result<LapsData>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut state = ParserState::new();
        for line in lines {
            state.feed(line.as_ref())?;
        }
        Ok(state.finish())
    }
}

/// Line-by-line parse state: the current section plus the accumulators
struct ParserState {
    section: Section,
    line_no: usize,
    data_ch0: Vec<i64>,
    data_ch1: Vec<i64>,
    builder: StimRecordBuilder,
}

impl ParserState {
    fn new() -> Self {
        Self {
            section: Section::None,
            line_no: 0,
            data_ch0: Vec::new(),
            data_ch1: Vec::new(),
            builder: StimRecordBuilder::new(),
        }
    }

    /// Consume one line, routing it by the current section
    fn feed(&mut self, line: &str) -> Result<()> {
        self.line_no += 1;

        let trimmed = line.trim();
        if trimmed.is_empty() {
            // Blank separator inside the stream; end-of-input is signalled
            // by the line source running out, never by line length.
            return Ok(());
        }

        if line.starts_with('[') {
            self.section = Section::from_header(line);
            log::debug!("line {}: entering section {}", self.line_no, self.section.label());
            return Ok(());
        }

        match &self.section {
            Section::StimIndex => {
                let value = trimmed
                    .parse::<i64>()
                    .map_err(|_| self.parse_error(line))?;
                self.builder.append(value);
            }
            Section::SignalData => {
                let mut tokens = trimmed.split_whitespace();
                let ch0 = self.parse_token(tokens.next(), line)?;
                let ch1 = self.parse_token(tokens.next(), line)?;
                // Extra tokens on the line are ignored; the next synthetic
                // sample index is assigned implicitly by the push order.
                self.data_ch0.push(ch0);
                self.data_ch1.push(ch1);
            }
            Section::None | Section::Other(_) => {
                // Permissive: unrecognized sections are skipped silently
            }
        }
        Ok(())
    }

    fn parse_token(&self, token: Option<&str>, line: &str) -> Result<i64> {
        token
            .and_then(|t| t.parse::<i64>().ok())
            .ok_or_else(|| self.parse_error(line))
    }

    fn parse_error(&self, line: &str) -> DecoderError {
        DecoderError::ParseError {
            line: self.line_no,
            section: self.section.label().to_string(),
            content: line.to_string(),
        }
    }

    fn finish(self) -> LapsData {
        let stim_records = self.builder.finish();
        log::info!(
            "Parsed {} samples and {} stim records",
            self.data_ch0.len(),
            stim_records.len()
        );
        LapsData {
            data_ch0: self.data_ch0,
            data_ch1: self.data_ch1,
            stim_records,
        }
    }
}
