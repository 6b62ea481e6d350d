//! File-level tests for the parser and timeline assembly

use mep_log_decoder::{DecoderConfig, DecoderError, LapsParser, Timeline};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_temp_log(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(content.as_bytes()).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

#[test]
fn test_parse_file_end_to_end() {
    let log_content = "\
[LapsSignalData]
10 0
12 0
[StimIndex]
1
5
100
0
0
0
0
0
0
0
";
    let temp_file = write_temp_log(log_content);

    let data = LapsParser::parse_file(temp_file.path()).unwrap();
    assert_eq!(data.data_ch0, vec![10, 12]);
    assert_eq!(data.data_ch1, vec![0, 0]);
    assert_eq!(data.stim_records.len(), 1);

    let record = &data.stim_records[0];
    assert_eq!(record.sample_index(), 1);
    assert_eq!(record.intensity(), 5);
    assert_eq!(record.duration_ms(), 100);

    let timeline = Timeline::assemble(data, &DecoderConfig::new()).unwrap();
    assert_eq!(timeline.stim_intensity, vec![0, 5]);
}

#[test]
fn test_parse_file_with_interleaved_sections() {
    // Sections may repeat; the signal index keeps counting across them
    let log_content = "\
[Header]
device=MEP-3000
[LapsSignalData]
1 10
2 20
[StimIndex]
0
3
50
0
0
0
0
0
0
0
[LapsSignalData]
3 30
";
    let temp_file = write_temp_log(log_content);

    let data = LapsParser::parse_file(temp_file.path()).unwrap();
    assert_eq!(data.data_ch0, vec![1, 2, 3]);
    assert_eq!(data.data_ch1, vec![10, 20, 30]);
    assert_eq!(data.stim_records.len(), 1);
}

#[test]
fn test_parse_file_reports_line_position() {
    let log_content = "\
[LapsSignalData]
1 2
oops
";
    let temp_file = write_temp_log(log_content);

    let err = LapsParser::parse_file(temp_file.path()).unwrap_err();
    match err {
        DecoderError::ParseError { line, content, .. } => {
            assert_eq!(line, 3);
            assert_eq!(content, "oops");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_parse_missing_file_is_io_error() {
    let err = LapsParser::parse_file(std::path::Path::new("no/such/file.txt")).unwrap_err();
    assert!(matches!(err, DecoderError::IoError(_)));
}
