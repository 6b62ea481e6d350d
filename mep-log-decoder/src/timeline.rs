//! Timeline assembly
//!
//! Converts a parse result into the dense, index-aligned form the
//! presentation layer consumes: the two signal channels plus a per-sample
//! stimulation intensity array, zero where no event occurred. Sparse events
//! become plottable on the same time axis as the continuous channels.

use crate::config::{DecoderConfig, OutOfRangePolicy};
use crate::types::{DecoderError, LapsData, Result};
use serde::Serialize;

/// Dense, index-aligned view of one parsed log file
///
/// All three sequences have the same length N; the implicit time axis is
/// the synthetic sample index 0..N-1. This is the complete data contract
/// handed to any presentation backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Timeline {
    /// Channel 0 samples
    pub data_ch0: Vec<i64>,
    /// Channel 1 samples
    pub data_ch1: Vec<i64>,
    /// Stimulation intensity per sample, zero where no event occurred
    pub stim_intensity: Vec<i64>,
}

impl Timeline {
    /// Assemble the dense timeline from a parse result
    ///
    /// Each sealed record writes its intensity at its sample index, in file
    /// order; two records targeting the same index leave the later one
    /// standing (direct indexed assignment). An index outside `[0, N)` is
    /// handled per [`OutOfRangePolicy`] - with no samples at all, even
    /// clamping has nowhere to write and fails.
    pub fn assemble(data: LapsData, config: &DecoderConfig) -> Result<Timeline> {
        let samples = data.data_ch0.len();
        let mut stim_intensity = vec![0i64; samples];

        for (position, record) in data.stim_records.iter().enumerate() {
            let index = record.sample_index();
            let slot = if index >= 0 && (index as usize) < samples {
                index as usize
            } else {
                let out_of_range = DecoderError::StimIndexOutOfRange {
                    record: position + 1,
                    index,
                    samples,
                };
                match config.out_of_range {
                    OutOfRangePolicy::Fail => return Err(out_of_range),
                    OutOfRangePolicy::Clamp if samples == 0 => return Err(out_of_range),
                    OutOfRangePolicy::Clamp => {
                        let clamped = index.clamp(0, samples as i64 - 1) as usize;
                        log::warn!(
                            "stim record {} targets sample {}, clamping to {}",
                            position + 1,
                            index,
                            clamped
                        );
                        clamped
                    }
                }
            };
            stim_intensity[slot] = record.intensity();
        }

        log::debug!(
            "Assembled timeline: {} samples, {} stim events",
            samples,
            data.stim_records.len()
        );

        Ok(Timeline {
            data_ch0: data.data_ch0,
            data_ch1: data.data_ch1,
            stim_intensity,
        })
    }

    /// Number of samples per sequence
    pub fn num_samples(&self) -> usize {
        self.data_ch0.len()
    }

    /// Materialized synthetic time axis 0..N-1
    pub fn sample_index(&self) -> Vec<i64> {
        (0..self.data_ch0.len() as i64).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::LapsParser;

    fn stim_lines(values: &[i64]) -> Vec<String> {
        std::iter::once("[StimIndex]".to_string())
            .chain(values.iter().map(|v| v.to_string()))
            .collect()
    }

    fn parse(lines: &[String]) -> LapsData {
        LapsParser::parse_lines(lines).unwrap()
    }

    #[test]
    fn test_assembled_lengths_match() {
        let mut lines = vec![
            "[LapsSignalData]".to_string(),
            "10 0".to_string(),
            "12 0".to_string(),
        ];
        lines.extend(stim_lines(&[1, 5, 100, 0, 0, 0, 0, 0, 0, 0]));

        let timeline = Timeline::assemble(parse(&lines), &DecoderConfig::new()).unwrap();
        assert_eq!(timeline.data_ch0.len(), timeline.data_ch1.len());
        assert_eq!(timeline.data_ch0.len(), timeline.stim_intensity.len());
        assert_eq!(timeline.stim_intensity, vec![0, 5]);
        assert_eq!(timeline.sample_index(), vec![0, 1]);
    }

    #[test]
    fn test_last_write_wins_on_shared_index() {
        let mut lines = vec!["[LapsSignalData]".to_string()];
        lines.extend((0..5).map(|i| format!("{} 0", i)));
        // Two records both target sample 3; the later one must stand.
        lines.extend(stim_lines(&[
            3, 5, 100, 0, 0, 0, 0, 0, 0, 0, //
            3, 9, 100, 0, 0, 0, 0, 0, 0, 0,
        ]));

        let timeline = Timeline::assemble(parse(&lines), &DecoderConfig::new()).unwrap();
        assert_eq!(timeline.stim_intensity[3], 9);
    }

    #[test]
    fn test_out_of_range_index_fails_by_default() {
        let mut lines = vec!["[LapsSignalData]".to_string(), "1 2".to_string()];
        lines.extend(stim_lines(&[7, 5, 100, 0, 0, 0, 0, 0, 0, 0]));

        let err = Timeline::assemble(parse(&lines), &DecoderConfig::new()).unwrap_err();
        match err {
            DecoderError::StimIndexOutOfRange { record, index, samples } => {
                assert_eq!(record, 1);
                assert_eq!(index, 7);
                assert_eq!(samples, 1);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_negative_index_fails_by_default() {
        let mut lines = vec!["[LapsSignalData]".to_string(), "1 2".to_string()];
        lines.extend(stim_lines(&[-1, 5, 100, 0, 0, 0, 0, 0, 0, 0]));

        let err = Timeline::assemble(parse(&lines), &DecoderConfig::new()).unwrap_err();
        assert!(matches!(err, DecoderError::StimIndexOutOfRange { index: -1, .. }));
    }

    #[test]
    fn test_clamp_policy_writes_at_boundary() {
        let mut lines = vec!["[LapsSignalData]".to_string()];
        lines.extend((0..4).map(|i| format!("{} 0", i)));
        lines.extend(stim_lines(&[
            100, 5, 100, 0, 0, 0, 0, 0, 0, 0, //
            -3, 8, 100, 0, 0, 0, 0, 0, 0, 0,
        ]));

        let config = DecoderConfig::new().with_clamped_indices(true);
        let timeline = Timeline::assemble(parse(&lines), &config).unwrap();
        assert_eq!(timeline.stim_intensity, vec![8, 0, 0, 5]);
    }

    #[test]
    fn test_clamp_with_no_samples_still_fails() {
        let lines = stim_lines(&[0, 5, 100, 0, 0, 0, 0, 0, 0, 0]);
        let config = DecoderConfig::new().with_clamped_indices(true);

        let err = Timeline::assemble(parse(&lines), &config).unwrap_err();
        assert!(matches!(err, DecoderError::StimIndexOutOfRange { samples: 0, .. }));
    }

    #[test]
    fn test_no_records_yields_all_zero_intensity() {
        let lines = vec![
            "[LapsSignalData]".to_string(),
            "1 2".to_string(),
            "3 4".to_string(),
        ];
        let timeline = Timeline::assemble(parse(&lines), &DecoderConfig::new()).unwrap();
        assert_eq!(timeline.stim_intensity, vec![0, 0]);
    }
}
