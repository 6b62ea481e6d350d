//! Presentation backends for the assembled timeline
//!
//! Thin adapters over the Timeline data contract: two channel sequences, the
//! dense stimulation intensity series, and the implicit sample index. Nothing
//! here feeds back into the decoder; the smoothing is cosmetic.

use anyhow::Result;
use chrono::Local;
use clap::ValueEnum;
use mep_log_decoder::Timeline;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Available presentation backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Terminal chart with per-channel strips
    Ascii,
    /// index,ch0,ch1,stim rows for external plotting tools
    Csv,
    /// The timeline contract as pretty-printed JSON
    Json,
}

/// Display options consumed by the ASCII backend
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Moving-average window for the smoothed channel curves
    pub smoothing_window: usize,
    /// Number of terminal columns per chart strip
    pub chart_width: usize,
    /// Source file name, shown in the chart caption
    pub source: String,
}

/// Render the timeline through the selected backend
pub fn render(
    timeline: &Timeline,
    backend: Backend,
    out: &mut dyn Write,
    options: &RenderOptions,
) -> Result<()> {
    match backend {
        Backend::Ascii => render_ascii(timeline, out, options),
        Backend::Csv => render_csv(timeline, out),
        Backend::Json => render_json(timeline, out),
    }
}

fn render_ascii(timeline: &Timeline, out: &mut dyn Write, options: &RenderOptions) -> Result<()> {
    let stimulations = timeline.stim_intensity.iter().filter(|&&v| v != 0).count();
    writeln!(out, "MEP {}", options.source)?;
    writeln!(
        out,
        "finished reading file: {} data points, {} stimulations",
        timeline.num_samples(),
        stimulations
    )?;
    if timeline.num_samples() == 0 {
        return Ok(());
    }

    let ch0: Vec<f64> = timeline.data_ch0.iter().map(|&v| v as f64).collect();
    let ch1: Vec<f64> = timeline.data_ch1.iter().map(|&v| v as f64).collect();
    let stim: Vec<f64> = timeline.stim_intensity.iter().map(|&v| v as f64).collect();

    writeln!(out, "ch-0     {}", sparkline(&ch0, options.chart_width))?;
    writeln!(
        out,
        "ch-0 avg {}",
        sparkline(
            &moving_average(&timeline.data_ch0, options.smoothing_window),
            options.chart_width
        )
    )?;
    writeln!(out, "ch-1     {}", sparkline(&ch1, options.chart_width))?;
    writeln!(
        out,
        "ch-1 avg {}",
        sparkline(
            &moving_average(&timeline.data_ch1, options.smoothing_window),
            options.chart_width
        )
    )?;
    writeln!(out, "stim     {}", sparkline(&stim, options.chart_width))?;
    Ok(())
}

fn render_csv(timeline: &Timeline, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "# generated {}", Local::now().format("%Y-%m-%d %H:%M:%S"))?;
    writeln!(out, "index,ch0,ch1,stim")?;
    for index in 0..timeline.num_samples() {
        writeln!(
            out,
            "{},{},{},{}",
            index,
            timeline.data_ch0[index],
            timeline.data_ch1[index],
            timeline.stim_intensity[index]
        )?;
    }
    Ok(())
}

fn render_json(timeline: &Timeline, out: &mut dyn Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, timeline)?;
    writeln!(out)?;
    Ok(())
}

const GLYPHS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Compress a series into one line of block glyphs, `width` columns at most
fn sparkline(values: &[f64], width: usize) -> String {
    if values.is_empty() || width == 0 {
        return String::new();
    }
    let buckets = bucket_means(values, width);
    let min = buckets.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = buckets.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;

    buckets
        .iter()
        .map(|&value| {
            let t = if span == 0.0 { 0.0 } else { (value - min) / span };
            let level = (t * (GLYPHS.len() - 1) as f64).round() as usize;
            GLYPHS[level.min(GLYPHS.len() - 1)]
        })
        .collect()
}

/// Reduce a series to at most `width` bucket means, preserving order
fn bucket_means(values: &[f64], width: usize) -> Vec<f64> {
    if values.len() <= width {
        return values.to_vec();
    }
    let bucket = values.len().div_ceil(width);
    values
        .chunks(bucket)
        .map(|chunk| chunk.iter().sum::<f64>() / chunk.len() as f64)
        .collect()
}

/// Centered moving average, same length as the input
///
/// Windows are shortened at the edges instead of zero-padded.
fn moving_average(values: &[i64], window: usize) -> Vec<f64> {
    if window <= 1 {
        return values.iter().map(|&v| v as f64).collect();
    }
    let half = window / 2;
    (0..values.len())
        .map(|i| {
            let start = i.saturating_sub(half);
            let end = (i + window - half).min(values.len());
            let slice = &values[start..end];
            slice.iter().sum::<i64>() as f64 / slice.len() as f64
        })
        .collect()
}
