//! Error handling for rainfall analysis operations.
//!
//! Each pipeline stage has its own error type. Validation and codec
//! failures are folded into [`LoaderError`] so a caller loading a station
//! only ever handles one error channel.

use std::path::PathBuf;
use thiserror::Error;

/// Raw data validation failures raised while parsing and aggregating.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("invalid day")]
    InvalidDay { day: i64 },

    #[error("invalid month")]
    InvalidMonth { month: i64 },

    #[error("invalid year")]
    InvalidYear { year: i64 },

    #[error("malformed row")]
    MalformedRow { reason: String },

    #[error("empty dataset")]
    EmptyDataset,
}

/// Failures decoding or encoding the analysed (cache) file format.
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("malformed analysed line {line_number}")]
    MalformedLine { line_number: usize, content: String },
}

/// Everything that can go wrong while loading a station.
#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("empty directory name")]
    EmptyDirectoryName,

    #[error("empty station name")]
    EmptyStationName,

    #[error("rainfall file not found")]
    RainfallFileNotFound { path: PathBuf },

    #[error("empty analysed file")]
    EmptyAnalysedFile { path: PathBuf },

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LoaderError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StationError {
    #[error("index {index} out of range for station with {count} records")]
    IndexOutOfRange { index: usize, count: usize },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error("cannot chart an empty station")]
    EmptyStation,

    #[error("canvas {width}x{height} is too small for the chart axes")]
    CanvasTooSmall { width: f64, height: f64 },
}

pub type Result<T> = std::result::Result<T, LoaderError>;
