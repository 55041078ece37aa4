//! Raw daily row parsing
//!
//! Reads a raw station export with the `csv` crate and turns each data row
//! into a validated [`RawReading`]. Rows are read as byte records so the
//! metadata columns the layout does not name are never decoded.

use crate::config::RawColumnLayout;
use crate::constants::ranges;
use crate::error::{AnalysisError, LoaderError};
use crate::models::RawReading;
use csv::ByteRecord;
use std::io::Read;

/// CSV reader for a raw export: header row, variable column counts, no quoting
pub fn raw_csv_reader<R: Read>(source: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .from_reader(source)
}

/// Parse and validate one raw data record
pub fn parse_raw_record(
    record: &ByteRecord,
    layout: &RawColumnLayout,
) -> Result<RawReading, AnalysisError> {
    if record.len() < layout.required_columns() {
        return Err(AnalysisError::MalformedRow {
            reason: format!(
                "expected at least {} columns, found {}",
                layout.required_columns(),
                record.len()
            ),
        });
    }

    let day = parse_required_integer(record, layout.day, "day")?;
    let month = parse_required_integer(record, layout.month, "month")?;
    let year = parse_required_integer(record, layout.year, "year")?;
    let measurement = parse_measurement(record, layout.measurement)?;

    if !(ranges::DAY_MIN..=ranges::DAY_MAX).contains(&day) {
        return Err(AnalysisError::InvalidDay { day });
    }
    if !(ranges::MONTH_MIN..=ranges::MONTH_MAX).contains(&month) {
        return Err(AnalysisError::InvalidMonth { month });
    }
    if !(ranges::YEAR_MIN..=ranges::YEAR_MAX).contains(&year) {
        return Err(AnalysisError::InvalidYear { year });
    }

    // Range checks above make these conversions lossless
    Ok(RawReading {
        year: year as i32,
        month: month as u32,
        day: day as u32,
        measurement,
    })
}

/// Get a consumed field as trimmed UTF-8
fn get_field<'a>(
    record: &'a ByteRecord,
    index: usize,
    field_name: &str,
) -> Result<&'a str, AnalysisError> {
    let bytes = record.get(index).ok_or_else(|| AnalysisError::MalformedRow {
        reason: format!("no value for {} column {}", field_name, index),
    })?;

    std::str::from_utf8(bytes)
        .map(str::trim)
        .map_err(|e| AnalysisError::MalformedRow {
            reason: format!("{} is not valid UTF-8: {}", field_name, e),
        })
}

fn parse_required_integer(
    record: &ByteRecord,
    index: usize,
    field_name: &str,
) -> Result<i64, AnalysisError> {
    let value = get_field(record, index, field_name)?;
    value
        .parse::<i64>()
        .map_err(|e| AnalysisError::MalformedRow {
            reason: format!("invalid {} '{}': {}", field_name, value, e),
        })
}

/// Blank measurements count as no rain
fn parse_measurement(record: &ByteRecord, index: usize) -> Result<f64, AnalysisError> {
    let value = get_field(record, index, "measurement")?;
    if value.is_empty() {
        return Ok(0.0);
    }

    match value.parse::<f64>() {
        Ok(measurement) if measurement.is_finite() => Ok(measurement),
        Ok(_) => Err(AnalysisError::MalformedRow {
            reason: format!("non-finite measurement '{}'", value),
        }),
        Err(e) => Err(AnalysisError::MalformedRow {
            reason: format!("invalid measurement '{}': {}", value, e),
        }),
    }
}

fn is_blank(record: &ByteRecord) -> bool {
    record.iter().all(|field| field.iter().all(u8::is_ascii_whitespace))
}

/// Lazily parses raw records into readings, skipping blank rows
#[derive(Debug)]
pub struct RawReadings<I> {
    records: I,
    layout: RawColumnLayout,
}

impl<I> RawReadings<I> {
    pub fn new(records: I, layout: RawColumnLayout) -> Self {
        Self { records, layout }
    }
}

impl<I> Iterator for RawReadings<I>
where
    I: Iterator<Item = csv::Result<ByteRecord>>,
{
    type Item = Result<RawReading, LoaderError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let record = match self.records.next()? {
                Ok(record) => record,
                Err(e) => return Some(Err(e.into())),
            };
            if is_blank(&record) {
                continue;
            }
            return Some(parse_raw_record(&record, &self.layout).map_err(LoaderError::from));
        }
    }
}

/// Readings from a raw export, header included
pub fn raw_readings<R: Read>(
    source: R,
    layout: RawColumnLayout,
) -> RawReadings<csv::ByteRecordsIntoIter<R>> {
    RawReadings::new(raw_csv_reader(source).into_byte_records(), layout)
}
