//! Station loading with an analysed-file cache.
//!
//! Orchestrates the complete workflow for one station: reuse the analysed
//! file when present, otherwise aggregate the raw daily file, persist the
//! aggregates and read them back. The station returned is always built from
//! what is on disk.

pub mod aggregator;
pub mod codec;
pub mod parser;

#[cfg(test)]
pub mod tests;

use self::aggregator::collect_monthly;
use crate::config::AnalyserConfig;
use crate::error::{LoaderError, Result};
use crate::models::AggregateRecord;
use crate::station::Station;

use std::fs::File;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

/// How a station was obtained
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// Read straight from an existing analysed file
    Cached(Station),
    /// Raw data was aggregated and the analysed file written
    Computed(Station),
}

impl LoadOutcome {
    pub fn station(&self) -> &Station {
        match self {
            LoadOutcome::Cached(station) | LoadOutcome::Computed(station) => station,
        }
    }

    pub fn into_station(self) -> Station {
        match self {
            LoadOutcome::Cached(station) | LoadOutcome::Computed(station) => station,
        }
    }

    pub fn is_cached(&self) -> bool {
        matches!(self, LoadOutcome::Cached(_))
    }
}

/// Loader for station data in a directory of raw and analysed files
#[derive(Debug, Clone, Default)]
pub struct StationLoader {
    config: AnalyserConfig,
}

impl StationLoader {
    pub fn new(config: AnalyserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalyserConfig {
        &self.config
    }

    /// Load a station, aggregating the raw file if no analysed file exists
    pub fn load(&self, directory: &str, station_name: &str) -> Result<LoadOutcome> {
        if directory.trim().is_empty() {
            return Err(LoaderError::EmptyDirectoryName);
        }
        if station_name.trim().is_empty() {
            return Err(LoaderError::EmptyStationName);
        }

        let directory = Path::new(directory);
        let analysed_path = self.config.analysed_path(directory, station_name);

        if analysed_path.exists() {
            debug!("Using analysed file {}", analysed_path.display());
            return self.read_analysed(&analysed_path).map(LoadOutcome::Cached);
        }

        let raw_path = self.config.raw_path(directory, station_name);
        if !raw_path.exists() {
            return Err(LoaderError::RainfallFileNotFound { path: raw_path });
        }

        debug!(
            "No analysed file for {}, aggregating {}",
            station_name,
            raw_path.display()
        );
        self.analyse(&raw_path, &analysed_path)?;
        self.read_analysed(&analysed_path).map(LoadOutcome::Computed)
    }

    /// Aggregate `raw_path` and write the analysed file.
    ///
    /// Output goes to a temporary file beside the target and is only renamed
    /// into place once aggregation has succeeded.
    fn analyse(&self, raw_path: &Path, analysed_path: &Path) -> Result<usize> {
        let records = self.aggregate_raw(raw_path)?;

        let directory = analysed_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        let mut temp_file =
            NamedTempFile::new_in(&directory).map_err(|e| LoaderError::io(&directory, e))?;

        codec::encode_records(temp_file.as_file_mut(), &records)?;

        temp_file
            .persist(analysed_path)
            .map_err(|e| LoaderError::io(analysed_path, e.error))?;

        debug!(
            "Wrote {} monthly records to {}",
            records.len(),
            analysed_path.display()
        );
        Ok(records.len())
    }

    fn aggregate_raw(&self, raw_path: &Path) -> Result<Vec<AggregateRecord>> {
        let file = File::open(raw_path).map_err(|e| LoaderError::io(raw_path, e))?;

        collect_monthly(file, self.config.raw_columns).inspect_err(|e| {
            warn!("Aggregation of {} failed: {}", raw_path.display(), e);
        })
    }

    fn read_analysed(&self, analysed_path: &Path) -> Result<Station> {
        let file = File::open(analysed_path).map_err(|e| LoaderError::io(analysed_path, e))?;
        let records = codec::decode_records(file)?;

        if records.is_empty() {
            return Err(LoaderError::EmptyAnalysedFile {
                path: analysed_path.to_path_buf(),
            });
        }

        Ok(records.into_iter().collect())
    }
}

/// Load a station with the default configuration
pub fn load(directory: &str, station_name: &str) -> Result<Station> {
    StationLoader::default()
        .load(directory, station_name)
        .map(LoadOutcome::into_station)
}
