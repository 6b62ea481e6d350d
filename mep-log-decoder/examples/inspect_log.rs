//! Standalone MEP log inspection tool
//!
//! Parses a log file and prints a summary of its channels and stimulation
//! records without rendering anything.
//!
//! Usage:
//!   inspect_log <logfile.txt>

use mep_log_decoder::{DecoderConfig, LapsParser, Timeline};
use std::env;
use std::path::PathBuf;
use std::process;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: inspect_log <logfile.txt>");
        process::exit(1);
    }
    let path = PathBuf::from(&args[1]);

    let data = match LapsParser::parse_file(&path) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("Failed to parse {:?}: {}", path, e);
            process::exit(1);
        }
    };

    println!("=== PARSE SUMMARY ===");
    println!("Samples per channel: {}", data.num_samples());
    println!("Stim records: {}", data.stim_records.len());

    if let (Some(min), Some(max)) = (data.data_ch0.iter().min(), data.data_ch0.iter().max()) {
        println!("ch-0 range: {} .. {}", min, max);
    }
    if let (Some(min), Some(max)) = (data.data_ch1.iter().min(), data.data_ch1.iter().max()) {
        println!("ch-1 range: {} .. {}", min, max);
    }

    for (i, record) in data.stim_records.iter().enumerate() {
        println!("  {}: {}", i + 1, record);
    }

    match Timeline::assemble(data, &DecoderConfig::new()) {
        Ok(timeline) => {
            let active = timeline.stim_intensity.iter().filter(|&&v| v != 0).count();
            println!("Timeline assembled: {} samples, {} active", timeline.num_samples(), active);
        }
        Err(e) => {
            eprintln!("Timeline assembly failed: {}", e);
            process::exit(1);
        }
    }
}
