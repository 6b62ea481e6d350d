//! Core types for the MEP log decoder library
//!
//! This module defines the fundamental types the decoder produces when parsing
//! log files. The decoder is stateless and only outputs parsed data - it does not
//! render anything or interpret device semantics.

use serde::Serialize;
use std::fmt;

/// Result type for decoder operations
pub type Result<T> = std::result::Result<T, DecoderError>;

/// Number of consecutive integers that make up one stimulation record
pub const STIM_RECORD_LEN: usize = 10;

/// Errors that can occur during parsing and timeline assembly
#[derive(Debug, thiserror::Error)]
pub enum DecoderError {
    #[error("line {line} in section {section}: cannot parse {content:?}")]
    ParseError {
        /// 1-based line number in the input
        line: usize,
        /// Label of the section the line was read in
        section: String,
        /// Raw content of the offending line
        content: String,
    },

    #[error("stim record {record} targets sample index {index}, but only {samples} samples were read")]
    StimIndexOutOfRange {
        /// 1-based position of the record in file order
        record: usize,
        /// The out-of-range sample index carried by the record
        index: i64,
        /// Number of samples in the signal channels
        samples: usize,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// One stimulation event, sealed after exactly [`STIM_RECORD_LEN`] values
///
/// The first three slots are the sample index the event applies to, the
/// stimulation intensity, and the duration in milliseconds. The remaining
/// slots are an opaque payload preserved in read order.
///
/// A record can only be produced by the record builder, which seals it the
/// moment its last value arrives. Sealed records are immutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StimRecord {
    raw: Vec<i64>,
}

impl StimRecord {
    /// Seal a full run of values into an immutable record.
    ///
    /// Callers must pass exactly [`STIM_RECORD_LEN`] values; the record
    /// builder is the only production path and guarantees this.
    pub(crate) fn sealed(raw: Vec<i64>) -> Self {
        debug_assert_eq!(raw.len(), STIM_RECORD_LEN);
        Self { raw }
    }

    /// Sample index this stimulation applies to (slot 0, unvalidated)
    pub fn sample_index(&self) -> i64 {
        self.raw[0]
    }

    /// Stimulation intensity (slot 1)
    pub fn intensity(&self) -> i64 {
        self.raw[1]
    }

    /// Stimulation duration in milliseconds (slot 2)
    pub fn duration_ms(&self) -> i64 {
        self.raw[2]
    }

    /// All values in read order, including the opaque payload slots
    pub fn raw(&self) -> &[i64] {
        &self.raw
    }
}

impl fmt::Display for StimRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "stim @{} intensity={} duration={}ms",
            self.sample_index(),
            self.intensity(),
            self.duration_ms()
        )
    }
}

/// Parse result for one log file - the primary output of the decoder
///
/// Holds the two continuous signal channels (equal length, one entry per
/// `[LapsSignalData]` body line) and the stimulation records in file order.
/// The synthetic sample index 0..N-1, assigned in read order, is the time
/// axis; the format carries no real timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LapsData {
    /// Channel 0 samples
    pub data_ch0: Vec<i64>,
    /// Channel 1 samples
    pub data_ch1: Vec<i64>,
    /// Sealed stimulation records in file order
    pub stim_records: Vec<StimRecord>,
}

impl LapsData {
    /// Number of samples per channel
    pub fn num_samples(&self) -> usize {
        self.data_ch0.len()
    }

    /// Materialized synthetic time axis 0..N-1
    pub fn sample_index(&self) -> Vec<i64> {
        (0..self.data_ch0.len() as i64).collect()
    }
}
