//! MEP Log Reader CLI Application
//!
//! This is the command-line interface for the MEP log reader. It uses the
//! mep-log-decoder library and adds:
//! - Argument handling and logging setup
//! - Optional TOML configuration (decoder policy + display options)
//! - Presentation backends (ASCII chart, CSV dump, JSON dump)

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::process;

use mep_log_decoder::{LapsParser, Timeline};

mod config;
mod render;

use config::AppConfig;
use render::{Backend, RenderOptions};

/// MEP Log Reader - Parse and visualize MEP stimulation log files
#[derive(Parser, Debug)]
#[command(name = "mep-log-cli")]
#[command(about = "Parse and visualize MEP stimulation log files", long_about = None)]
#[command(version)]
struct Args {
    /// Path to the log file to parse
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Presentation backend
    #[arg(short, long, value_enum)]
    backend: Option<Backend>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Path to configuration file (config.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    init_logging(args.verbose, args.quiet);

    log::info!("MEP Log Reader CLI v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Using decoder library v{}", mep_log_decoder::VERSION);

    let Some(file) = args.file.clone() else {
        show_usage();
        process::exit(1);
    };

    // Load configuration file if given; flags override its display options
    let app_config = match &args.config {
        Some(config_path) => {
            log::info!("Loading configuration from: {:?}", config_path);
            config::load_config(config_path)?
        }
        None => AppConfig::default(),
    };
    let backend = args.backend.unwrap_or(app_config.display.backend);

    // Parse and assemble
    let data = LapsParser::parse_file(&file)
        .with_context(|| format!("failed to parse log file {:?}", file))?;
    let timeline = Timeline::assemble(data, &app_config.decoder)
        .with_context(|| format!("failed to assemble timeline for {:?}", file))?;

    // Render through the selected backend
    let options = RenderOptions {
        smoothing_window: app_config.display.smoothing_window,
        chart_width: app_config.display.chart_width,
        source: file.display().to_string(),
    };
    match &args.output {
        Some(output_path) => {
            let mut writer = File::create(output_path)
                .with_context(|| format!("failed to create output file {:?}", output_path))?;
            render::render(&timeline, backend, &mut writer, &options)?;
            log::info!("Wrote {:?} output to {:?}", backend, output_path);
        }
        None => {
            let stdout = io::stdout();
            render::render(&timeline, backend, &mut stdout.lock(), &options)?;
        }
    }

    Ok(())
}

fn show_usage() {
    eprintln!("USAGE: mep-log-cli [--backend ascii|csv|json] <logfile.txt>");
    eprintln!("Use --help for all options");
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
