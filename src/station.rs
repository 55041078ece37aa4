//! In-memory station model.
//!
//! A [`Station`] holds the monthly aggregates of one rainfall station in the
//! order they were read. It is filled once by the loader and read-only
//! afterwards.

use crate::error::StationError;
use crate::models::AggregateRecord;

/// Ordered monthly rainfall records for one station
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Station {
    records: Vec<AggregateRecord>,
}

impl Station {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record. Only used while a station is being built.
    pub(crate) fn add_record(&mut self, record: AggregateRecord) {
        self.records.push(record);
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at position `index` in source order
    pub fn record_at(&self, index: usize) -> Result<&AggregateRecord, StationError> {
        self.records
            .get(index)
            .ok_or(StationError::IndexOutOfRange {
                index,
                count: self.records.len(),
            })
    }

    /// First record for the given year and month, if any
    pub fn record_for(&self, year: i32, month: u32) -> Option<&AggregateRecord> {
        self.records
            .iter()
            .find(|record| record.year() == year && record.month() == month)
    }

    /// Highest monthly total, or negative infinity for an empty station
    pub fn max_total(&self) -> f64 {
        max_total(&self.records)
    }

    pub fn records(&self) -> &[AggregateRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AggregateRecord> {
        self.records.iter()
    }
}

impl FromIterator<AggregateRecord> for Station {
    fn from_iter<T: IntoIterator<Item = AggregateRecord>>(iter: T) -> Self {
        let mut station = Station::new();
        for record in iter {
            station.add_record(record);
        }
        station
    }
}

impl<'a> IntoIterator for &'a Station {
    type Item = &'a AggregateRecord;
    type IntoIter = std::slice::Iter<'a, AggregateRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Highest monthly total in `records`, negative infinity when empty
pub(crate) fn max_total(records: &[AggregateRecord]) -> f64 {
    records
        .iter()
        .map(AggregateRecord::total)
        .fold(f64::NEG_INFINITY, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_station() -> Station {
        vec![
            AggregateRecord::new(2020, 1, 8.0, 3.0, 5.0),
            AggregateRecord::new(2020, 2, 4.0, 4.0, 4.0),
            AggregateRecord::new(2020, 3, 12.5, 0.0, 9.5),
            // Fragmented month from out-of-order raw rows
            AggregateRecord::new(2020, 1, 1.0, 1.0, 1.0),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_record_count_and_order() {
        let station = sample_station();
        assert_eq!(station.record_count(), 4);
        assert!(!station.is_empty());

        let months: Vec<u32> = station.iter().map(|r| r.month()).collect();
        assert_eq!(months, vec![1, 2, 3, 1]);
    }

    #[test]
    fn test_record_at() {
        let station = sample_station();
        assert_eq!(station.record_at(1).unwrap().total(), 4.0);
        assert_eq!(
            station.record_at(4),
            Err(StationError::IndexOutOfRange { index: 4, count: 4 })
        );
    }

    #[test]
    fn test_record_for_returns_first_match() {
        let station = sample_station();
        assert_eq!(station.record_for(2020, 1).unwrap().total(), 8.0);
        assert!(station.record_for(2021, 1).is_none());
    }

    #[test]
    fn test_max_total() {
        assert_eq!(sample_station().max_total(), 12.5);
        assert_eq!(Station::new().max_total(), f64::NEG_INFINITY);
    }
}
