//! Stimulation record accumulation
//!
//! The `[StimIndex]` section encodes each stimulation as a run of exactly
//! [`STIM_RECORD_LEN`] consecutive integers, one per line. The builder in this
//! module groups that flat value stream back into records.

use crate::types::{StimRecord, STIM_RECORD_LEN};

/// Accumulates a flat stream of integers into sealed stimulation records
///
/// The builder is a two-state machine: either a partial record is open, or
/// none is. `append` checks the open record *before* accepting a value - a
/// full record is sealed and a fresh one opened, so the first value of the
/// next record can never land in the previous one.
#[derive(Debug, Default)]
pub struct StimRecordBuilder {
    current: Option<Vec<i64>>,
    sealed: Vec<StimRecord>,
}

impl StimRecordBuilder {
    /// Create a builder with no open record
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one value to the currently-open record
    ///
    /// Opens a new record first if none is open or the open record is
    /// already full.
    pub fn append(&mut self, value: i64) {
        let mut open = match self.current.take() {
            Some(open) if open.len() < STIM_RECORD_LEN => open,
            Some(full) => {
                self.sealed.push(StimRecord::sealed(full));
                Vec::with_capacity(STIM_RECORD_LEN)
            }
            None => Vec::with_capacity(STIM_RECORD_LEN),
        };
        open.push(value);
        self.current = Some(open);
    }

    /// Whether the open record holds its full quota of values
    pub fn is_full(&self) -> bool {
        self.current
            .as_ref()
            .map_or(false, |open| open.len() == STIM_RECORD_LEN)
    }

    /// Number of records sealed so far
    pub fn sealed_count(&self) -> usize {
        self.sealed.len()
    }

    /// Finish accumulation and return all sealed records in input order
    ///
    /// A full open record is sealed here (sealing is otherwise detected at
    /// the next `append`). A trailing partial record - the file was
    /// truncated mid-record - is discarded with a warning, since its fields
    /// are not fully defined.
    pub fn finish(mut self) -> Vec<StimRecord> {
        match self.current.take() {
            Some(open) if open.len() == STIM_RECORD_LEN => {
                self.sealed.push(StimRecord::sealed(open));
            }
            Some(partial) => {
                log::warn!(
                    "discarding incomplete trailing stim record ({} of {} values)",
                    partial.len(),
                    STIM_RECORD_LEN
                );
            }
            None => {}
        }
        self.sealed
    }
}
