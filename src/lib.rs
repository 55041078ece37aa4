//! Rainfall Analyser Library
//!
//! Turns daily rainfall readings from a weather station export into monthly
//! statistics and bar chart geometry.
//!
//! This library provides tools for:
//! - Parsing and validating raw daily rainfall rows
//! - Aggregating readings into monthly total/min/max records in one pass
//! - Caching the aggregation as an analysed CSV beside the raw file
//! - Querying the loaded station records
//! - Laying out a bar chart without any rendering dependency
//!
//! ```no_run
//! use rainfall_analyser::{compute_chart_geometry, load};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let station = load("resources", "MountSheridanStationCNS")?;
//! let geometry = compute_chart_geometry(&station, 1000.0, 500.0)?;
//! println!("{} bars, scale {}", geometry.bars.len(), geometry.scale_factor);
//! # Ok(())
//! # }
//! ```

pub mod chart;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod processor;
pub mod station;

pub use chart::{ChartGeometry, ChartLayoutEngine, compute_chart_geometry};
pub use config::{AnalyserConfig, ChartConfig, RawColumnLayout};
pub use error::{AnalysisError, ChartError, CodecError, LoaderError, Result, StationError};
pub use models::{AggregateRecord, RawReading};
pub use processor::{LoadOutcome, StationLoader, load};
pub use station::Station;
