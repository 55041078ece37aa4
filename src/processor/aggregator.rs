//! Monthly aggregation of daily readings
//!
//! A single streaming pass: readings are folded into an open month group
//! until the (year, month) key changes, at which point the group is emitted.
//! Rows are never sorted, so a month split by another month in the raw file
//! comes out as two records.

use super::parser::{RawReadings, raw_readings};
use crate::config::RawColumnLayout;
use crate::error::{AnalysisError, LoaderError};
use crate::models::{AggregateRecord, MonthKey, RawReading};
use std::io::Read;

/// Running totals for the month currently being read
#[derive(Debug, Clone, Copy)]
struct MonthAccumulator {
    key: MonthKey,
    total: f64,
    min: f64,
    max: f64,
}

impl MonthAccumulator {
    fn open(key: MonthKey) -> Self {
        Self {
            key,
            total: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    fn fold(&mut self, measurement: f64) {
        self.total += measurement;
        self.min = self.min.min(measurement);
        self.max = self.max.max(measurement);
    }

    fn finish(self) -> AggregateRecord {
        AggregateRecord::new(self.key.year, self.key.month, self.total, self.min, self.max)
    }
}

/// Iterator adapter turning daily readings into monthly records.
///
/// Yields [`AnalysisError::EmptyDataset`] (converted into the reading error
/// type) if the input holds no readings. After the first error the iterator
/// is exhausted.
#[derive(Debug)]
pub struct MonthlyAggregator<I> {
    readings: I,
    open: Option<MonthAccumulator>,
    finished: bool,
}

impl<I> MonthlyAggregator<I> {
    pub fn new(readings: I) -> Self {
        Self {
            readings,
            open: None,
            finished: false,
        }
    }
}

impl<I, E> Iterator for MonthlyAggregator<I>
where
    I: Iterator<Item = Result<RawReading, E>>,
    E: From<AnalysisError>,
{
    type Item = Result<AggregateRecord, E>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            match self.readings.next() {
                Some(Ok(reading)) => {
                    let key = reading.month_key();
                    match self.open.as_mut() {
                        Some(group) if group.key == key => group.fold(reading.measurement),
                        _ => {
                            let mut group = MonthAccumulator::open(key);
                            group.fold(reading.measurement);
                            // Flush under the previous key, not the new reading's
                            if let Some(previous) = self.open.replace(group) {
                                return Some(Ok(previous.finish()));
                            }
                        }
                    }
                }
                Some(Err(e)) => {
                    self.finished = true;
                    self.open = None;
                    return Some(Err(e));
                }
                None => {
                    self.finished = true;
                    return Some(match self.open.take() {
                        Some(group) => Ok(group.finish()),
                        None => Err(AnalysisError::EmptyDataset.into()),
                    });
                }
            }
        }
    }
}

/// Aggregate a raw export read from `source`, header row included
pub fn aggregate_csv<R: Read>(
    source: R,
    layout: RawColumnLayout,
) -> MonthlyAggregator<RawReadings<csv::ByteRecordsIntoIter<R>>> {
    MonthlyAggregator::new(raw_readings(source, layout))
}

/// Aggregate a raw export into a vector, stopping at the first error
pub fn collect_monthly<R: Read>(
    source: R,
    layout: RawColumnLayout,
) -> Result<Vec<AggregateRecord>, LoaderError> {
    aggregate_csv(source, layout).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(year: i32, month: u32, day: u32, measurement: f64) -> RawReading {
        RawReading {
            year,
            month,
            day,
            measurement,
        }
    }

    fn aggregate(readings: Vec<RawReading>) -> Result<Vec<AggregateRecord>, AnalysisError> {
        MonthlyAggregator::new(readings.into_iter().map(Ok)).collect()
    }

    fn aggregate_text(rows: &[&str]) -> Result<Vec<AggregateRecord>, LoaderError> {
        let mut text = String::from("Product code,Station,Year,Month,Day,Rainfall\n");
        for row in rows {
            text.push_str(row);
            text.push('\n');
        }
        collect_monthly(text.as_bytes(), RawColumnLayout::default())
    }

    #[test]
    fn test_two_months() {
        let records = aggregate(vec![
            reading(2020, 1, 1, 5.0),
            reading(2020, 1, 2, 3.0),
            reading(2020, 2, 1, 4.0),
        ])
        .unwrap();

        assert_eq!(
            records,
            vec![
                AggregateRecord::new(2020, 1, 8.0, 3.0, 5.0),
                AggregateRecord::new(2020, 2, 4.0, 4.0, 4.0),
            ]
        );
    }

    #[test]
    fn test_single_month_flushed_at_end_of_input() {
        let records = aggregate(vec![reading(2019, 6, 1, 1.5), reading(2019, 6, 2, 2.5)]).unwrap();
        assert_eq!(records, vec![AggregateRecord::new(2019, 6, 4.0, 1.5, 2.5)]);
    }

    #[test]
    fn test_blank_measurement_becomes_minimum() {
        let records = aggregate_text(&[
            "IDCJAC0009,031205,2021,3,1,",
            "IDCJAC0009,031205,2021,3,2,7.2",
        ])
        .unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].min(), 0.0);
        assert_eq!(records[0].max(), 7.2);
    }

    #[test]
    fn test_same_month_in_different_years_is_split() {
        let records = aggregate(vec![reading(2020, 1, 31, 1.0), reading(2021, 1, 1, 2.0)]).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].year(), 2020);
        assert_eq!(records[1].year(), 2021);
    }

    #[test]
    fn test_out_of_order_rows_fragment_month() {
        let records = aggregate(vec![
            reading(2020, 1, 1, 1.0),
            reading(2020, 2, 1, 2.0),
            reading(2020, 1, 2, 3.0),
        ])
        .unwrap();

        let keys: Vec<(i32, u32)> = records.iter().map(|r| (r.year(), r.month())).collect();
        assert_eq!(keys, vec![(2020, 1), (2020, 2), (2020, 1)]);
        assert_eq!(records[2].total(), 3.0);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(aggregate(Vec::new()), Err(AnalysisError::EmptyDataset));

        let err = aggregate_text(&["", "  "]).unwrap_err();
        assert!(matches!(
            err,
            LoaderError::Analysis(AnalysisError::EmptyDataset)
        ));

        let err = collect_monthly(&b""[..], RawColumnLayout::default()).unwrap_err();
        assert_eq!(err.to_string(), "empty dataset");
    }

    #[test]
    fn test_trailing_blank_line_ignored() {
        let records = aggregate_text(&["IDCJAC0009,031205,2020,1,1,5.0", ""]).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_error_stops_iteration() {
        let mut aggregator = MonthlyAggregator::new(
            vec![
                Ok(reading(2020, 1, 1, 5.0)),
                Ok(reading(2020, 2, 1, 4.0)),
                Err(AnalysisError::InvalidMonth { month: 13 }),
                Ok(reading(2020, 4, 1, 4.0)),
            ]
            .into_iter(),
        );

        assert_eq!(
            aggregator.next(),
            Some(Ok(AggregateRecord::new(2020, 1, 5.0, 5.0, 5.0)))
        );
        assert_eq!(
            aggregator.next(),
            Some(Err(AnalysisError::InvalidMonth { month: 13 }))
        );
        assert_eq!(aggregator.next(), None);
    }

    #[test]
    fn test_invalid_row_surfaces_through_csv_source() {
        let err = aggregate_text(&[
            "IDCJAC0009,031205,2020,1,1,5.0",
            "IDCJAC0009,031205,2020,13,1,4.0",
        ])
        .unwrap_err();

        assert!(matches!(
            err,
            LoaderError::Analysis(AnalysisError::InvalidMonth { month: 13 })
        ));
    }
}
