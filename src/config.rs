//! Configuration management.
//!
//! Provides the raw column layout, cache file naming and chart layout
//! settings. Defaults reproduce the standard station export format.

use crate::constants::{self, chart};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Positions of the consumed fields in a raw daily row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawColumnLayout {
    pub year: usize,
    pub month: usize,
    pub day: usize,
    pub measurement: usize,
}

impl RawColumnLayout {
    /// Minimum number of columns a row must have to be parseable
    pub fn required_columns(&self) -> usize {
        self.year
            .max(self.month)
            .max(self.day)
            .max(self.measurement)
            + 1
    }
}

impl Default for RawColumnLayout {
    fn default() -> Self {
        Self {
            year: constants::RAW_YEAR_COLUMN,
            month: constants::RAW_MONTH_COLUMN,
            day: constants::RAW_DAY_COLUMN,
            measurement: constants::RAW_MEASUREMENT_COLUMN,
        }
    }
}

/// Pixel offsets and decimation settings for chart layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Distance from the canvas bottom to the x axis
    pub x_axis_bottom_offset: f64,

    /// Space above the top y tick
    pub y_axis_top_offset: f64,

    pub left_margin: f64,
    pub right_margin: f64,

    /// Number of y axis intervals; one more tick than this is emitted
    pub y_tick_intervals: u32,

    /// Minimum years between consecutive January labels
    pub year_label_interval: i32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            x_axis_bottom_offset: chart::X_AXIS_BOTTOM_OFFSET,
            y_axis_top_offset: chart::Y_AXIS_TOP_OFFSET,
            left_margin: chart::LEFT_MARGIN,
            right_margin: chart::RIGHT_MARGIN,
            y_tick_intervals: chart::Y_TICK_INTERVALS,
            year_label_interval: chart::YEAR_LABEL_INTERVAL,
        }
    }
}

impl ChartConfig {
    pub fn with_margins(mut self, left: f64, right: f64) -> Self {
        self.left_margin = left;
        self.right_margin = right;
        self
    }

    pub fn with_year_label_interval(mut self, years: i32) -> Self {
        self.year_label_interval = years;
        self
    }
}

/// Global configuration for station loading and charting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyserConfig {
    /// Column positions in raw daily files
    pub raw_columns: RawColumnLayout,

    /// Suffix added to the station name for the analysed file
    pub analysed_suffix: String,

    /// Extension of both raw and analysed files (without the dot)
    pub file_extension: String,

    pub chart: ChartConfig,
}

impl Default for AnalyserConfig {
    fn default() -> Self {
        Self {
            raw_columns: RawColumnLayout::default(),
            analysed_suffix: constants::ANALYSED_FILE_SUFFIX.to_string(),
            file_extension: constants::DATA_FILE_EXTENSION.to_string(),
            chart: ChartConfig::default(),
        }
    }
}

impl AnalyserConfig {
    /// Use a custom raw column layout
    pub fn with_raw_columns(mut self, layout: RawColumnLayout) -> Self {
        self.raw_columns = layout;
        self
    }

    /// Use a custom analysed file suffix
    pub fn with_analysed_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.analysed_suffix = suffix.into();
        self
    }

    pub fn with_chart(mut self, chart: ChartConfig) -> Self {
        self.chart = chart;
        self
    }

    /// `{directory}/{station}.csv`
    pub fn raw_path(&self, directory: &Path, station: &str) -> PathBuf {
        directory.join(format!("{}.{}", station, self.file_extension))
    }

    /// `{directory}/{station}_analysed.csv`
    pub fn analysed_path(&self, directory: &Path, station: &str) -> PathBuf {
        directory.join(format!(
            "{}{}.{}",
            station, self.analysed_suffix, self.file_extension
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = AnalyserConfig::default();
        let dir = Path::new("resources");

        assert_eq!(
            config.raw_path(dir, "MountSheridanStationCNS"),
            PathBuf::from("resources/MountSheridanStationCNS.csv")
        );
        assert_eq!(
            config.analysed_path(dir, "MountSheridanStationCNS"),
            PathBuf::from("resources/MountSheridanStationCNS_analysed.csv")
        );
    }

    #[test]
    fn test_required_columns() {
        assert_eq!(RawColumnLayout::default().required_columns(), 6);

        let layout = RawColumnLayout {
            year: 0,
            month: 1,
            day: 2,
            measurement: 3,
        };
        assert_eq!(layout.required_columns(), 4);
    }

    #[test]
    fn test_builders() {
        let config = AnalyserConfig::default()
            .with_analysed_suffix("_monthly")
            .with_chart(ChartConfig::default().with_margins(10.0, 10.0));

        assert_eq!(
            config.analysed_path(Path::new("d"), "s"),
            PathBuf::from("d/s_monthly.csv")
        );
        assert_eq!(config.chart.left_margin, 10.0);
        assert_eq!(config.chart.y_tick_intervals, 10);
    }
}
