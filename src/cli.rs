//! Command-line interface components.

use crate::chart::{ChartGeometry, ChartLayoutEngine};
use crate::config::AnalyserConfig;
use crate::constants::chart::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH};
use crate::processor::{LoadOutcome, StationLoader};
use crate::station::Station;

use anyhow::{Context, Result};
use chrono::Month;
use clap::Parser;
use colored::*;
use std::fmt::Write as _;

#[derive(Parser, Debug)]
#[command(name = "rainfall-analyser")]
#[command(about = "Summarise daily station rainfall into monthly statistics and a bar chart")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Directory holding `{station}.csv` and its analysed file
    #[arg(value_name = "DIRECTORY")]
    pub directory: String,

    /// Station name, i.e. the raw file name without `.csv`
    #[arg(value_name = "STATION")]
    pub station: String,

    /// Print the chart layout computed for the canvas size
    #[arg(long)]
    pub chart: bool,

    /// Canvas width in pixels
    #[arg(long, default_value_t = DEFAULT_CANVAS_WIDTH)]
    pub width: f64,

    /// Canvas height in pixels
    #[arg(long, default_value_t = DEFAULT_CANVAS_HEIGHT)]
    pub height: f64,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Load the requested station and print its listing (and chart layout)
pub fn run(args: &Args) -> Result<()> {
    let config = AnalyserConfig::default();
    let loader = StationLoader::new(config.clone());

    let outcome = loader.load(&args.directory, &args.station)?;
    let status = match &outcome {
        LoadOutcome::Cached(_) => "loaded analysed file".bright_cyan(),
        LoadOutcome::Computed(_) => "analysed raw data".bright_green(),
    };
    let station = outcome.into_station();

    println!(
        "{} {}: {} ({} monthly records)",
        "Status:".bold(),
        args.station.bright_white().bold(),
        status,
        station.record_count()
    );
    print!("{}", format_listing(&station)?);

    if args.chart {
        let geometry = ChartLayoutEngine::new(config.chart)
            .layout_station(&station, args.width, args.height)
            .context("Failed to lay out rainfall chart")?;
        print!("{}", format_chart_summary(&geometry)?);
    }

    Ok(())
}

/// Text listing of every monthly record, one per line
pub fn format_listing(station: &Station) -> Result<String> {
    let mut listing = String::new();
    writeln!(
        listing,
        "{:<6}{:<11}{:>10}{:>10}{:>10}",
        "Year", "Month", "Total", "Min", "Max"
    )?;

    for index in 0..station.record_count() {
        let record = station.record_at(index)?;
        writeln!(
            listing,
            "{:<6}{:<11}{:>10.2}{:>10.2}{:>10.2}",
            record.year(),
            month_name(record.month()),
            record.total(),
            record.min(),
            record.max()
        )?;
    }

    if !station.is_empty() {
        writeln!(listing, "Highest monthly total: {:.2}", station.max_total())?;
    }
    Ok(listing)
}

fn month_name(month: u32) -> String {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name().to_string())
        .unwrap_or_else(|| month.to_string())
}

/// Summary of the chart layout as a renderer would consume it
pub fn format_chart_summary(geometry: &ChartGeometry) -> Result<String> {
    let mut summary = String::new();
    writeln!(summary, "\n{}", "Chart layout".bright_yellow())?;
    writeln!(
        summary,
        "  scale {:.4} px/mm, x axis at y={:.1}, y axis height {:.1}",
        geometry.scale_factor, geometry.x_axis_y, geometry.y_axis_height
    )?;

    let ticks: Vec<String> = geometry
        .y_axis_ticks
        .iter()
        .map(|tick| format!("{}@{:.1}", tick.label, tick.pixel_y))
        .collect();
    writeln!(summary, "  y ticks: {}", ticks.join(" "))?;

    let labels: Vec<String> = geometry
        .x_axis_labels
        .iter()
        .map(|label| format!("{}@{:.1}", label.label, label.pixel_x))
        .collect();
    writeln!(summary, "  x labels: {}", labels.join(" "))?;

    let bar_width = geometry.bars.first().map(|bar| bar.width).unwrap_or(0.0);
    writeln!(
        summary,
        "  {} bars, {:.2} px wide",
        geometry.bars.len(),
        bar_width
    )?;
    Ok(summary)
}
