//! MEP Log Decoder Library
//!
//! A stateless, reusable library for parsing MEP measurement log files and
//! reconstructing their contents as plottable data.
//!
//! # Architecture
//!
//! This library is intentionally minimal and focused on parsing:
//! - Reads section-delimited, line-oriented log files
//! - Reconstructs two continuous signal channels on a synthetic time axis
//! - Groups the `[StimIndex]` value stream into fixed-size stimulation records
//! - Assembles a dense per-sample stimulation intensity series for plotting
//!
//! The library does NOT:
//! - Render or plot anything
//! - Interpret device-specific semantics beyond the syntax
//! - Resample, filter, or otherwise analyze the signals
//!
//! All presentation is in the application layer (mep-log-cli).
//!
//! # Example Usage
//!
//! ```no_run
//! use mep_log_decoder::{DecoderConfig, LapsParser, Timeline};
//! use std::path::Path;
//!
//! // Parse a log file into channels and stimulation records
//! let data = LapsParser::parse_file(Path::new("session.txt")).unwrap();
//! println!("{} samples, {} stimulations", data.num_samples(), data.stim_records.len());
//!
//! // Assemble the dense timeline for plotting
//! let timeline = Timeline::assemble(data, &DecoderConfig::new()).unwrap();
//! assert_eq!(timeline.data_ch0.len(), timeline.stim_intensity.len());
//! ```

// Public modules
pub mod config;
pub mod parser;
pub mod record;
pub mod timeline;
pub mod types;

// Re-export main types for convenience
pub use config::{DecoderConfig, OutOfRangePolicy};
pub use parser::{LapsParser, Section, SIGNAL_DATA_HEADER, STIM_INDEX_HEADER};
pub use record::StimRecordBuilder;
pub use timeline::Timeline;
pub use types::{DecoderError, LapsData, Result, StimRecord, STIM_RECORD_LEN};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_basics() {
        // Smoke test: an empty input parses to an empty result
        let data = LapsParser::parse_lines(Vec::<&str>::new()).unwrap();
        assert_eq!(data.num_samples(), 0);
        assert!(data.stim_records.is_empty());
    }
}
