//! Core data structures for rainfall analysis.
//!
//! Defines the transient daily reading produced by the raw parser and the
//! immutable monthly aggregate that is cached and charted.

use serde::{Deserialize, Serialize};

/// One validated daily rainfall measurement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawReading {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub measurement: f64,
}

impl RawReading {
    /// The (year, month) group this reading belongs to
    pub fn month_key(&self) -> MonthKey {
        MonthKey {
            year: self.year,
            month: self.month,
        }
    }
}

/// Grouping key for monthly aggregation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

/// Monthly rainfall summary: sum, minimum and maximum of the daily readings.
///
/// Fields are private so a record cannot change after construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AggregateRecord {
    year: i32,
    month: u32,
    total: f64,
    min: f64,
    max: f64,
}

impl AggregateRecord {
    pub fn new(year: i32, month: u32, total: f64, min: f64, max: f64) -> Self {
        Self {
            year,
            month,
            total,
            min,
            max,
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn month_key(&self) -> MonthKey {
        MonthKey {
            year: self.year,
            month: self.month,
        }
    }

    /// Copy of this record with total/min/max rounded to two decimals,
    /// i.e. what survives a trip through the analysed file.
    pub fn rounded(&self) -> Self {
        Self::new(
            self.year,
            self.month,
            round2(self.total),
            round2(self.min),
            round2(self.max),
        )
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
