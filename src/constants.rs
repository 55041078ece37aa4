//! Application constants for the rainfall analyser
//!
//! File naming, raw column positions, the analysed file header and the
//! default chart layout measurements.

// =============================================================================
// File Naming
// =============================================================================

/// Suffix appended to the station name for the analysed (cache) file
pub const ANALYSED_FILE_SUFFIX: &str = "_analysed";

/// Extension shared by raw and analysed files
pub const DATA_FILE_EXTENSION: &str = "csv";

// =============================================================================
// Raw Daily Data Layout
// =============================================================================

/// Column holding the observation year
pub const RAW_YEAR_COLUMN: usize = 2;

/// Column holding the observation month
pub const RAW_MONTH_COLUMN: usize = 3;

/// Column holding the day of month
pub const RAW_DAY_COLUMN: usize = 4;

/// Column holding the rainfall amount; blank means no rain recorded
pub const RAW_MEASUREMENT_COLUMN: usize = 5;

/// Valid ranges for raw date fields
pub mod ranges {
    pub const DAY_MIN: i64 = 1;
    pub const DAY_MAX: i64 = 31;
    pub const MONTH_MIN: i64 = 1;
    pub const MONTH_MAX: i64 = 12;
    pub const YEAR_MIN: i64 = 1000;
    pub const YEAR_MAX: i64 = 9999;
}

// =============================================================================
// Analysed File Format
// =============================================================================

/// Header line of the analysed file
pub const ANALYSED_HEADER: &str = "year,month,total,min,max";

/// Number of fields on each analysed data line
pub const ANALYSED_FIELD_COUNT: usize = 5;

// =============================================================================
// Chart Layout
// =============================================================================

pub mod chart {
    /// Distance from the canvas bottom to the x axis
    pub const X_AXIS_BOTTOM_OFFSET: f64 = 40.0;

    /// Space left above the top of the y axis
    pub const Y_AXIS_TOP_OFFSET: f64 = 25.0;

    pub const LEFT_MARGIN: f64 = 50.0;
    pub const RIGHT_MARGIN: f64 = 20.0;

    /// Number of intervals on the y axis (ticks = intervals + 1)
    pub const Y_TICK_INTERVALS: u32 = 10;

    /// Minimum number of years between two x axis labels
    pub const YEAR_LABEL_INTERVAL: i32 = 5;

    /// Canvas size used by the original visualiser window
    pub const DEFAULT_CANVAS_WIDTH: f64 = 1000.0;
    pub const DEFAULT_CANVAS_HEIGHT: f64 = 500.0;
}
