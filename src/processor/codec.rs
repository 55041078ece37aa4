//! Analysed file codec
//!
//! The analysed file is the cache of monthly aggregates: a fixed header
//! followed by one `year,month,total,min,max` line per record, with the
//! three measurements printed to two decimal places. No quoting is
//! supported.

use crate::constants::{ANALYSED_FIELD_COUNT, ANALYSED_HEADER};
use crate::error::CodecError;
use crate::models::AggregateRecord;
use csv::{QuoteStyle, ReaderBuilder, StringRecord, Trim, WriterBuilder};
use std::io::{Read, Write};
use tracing::debug;

/// Fields of one analysed data line, measurements already rounded for output
pub fn record_fields(record: &AggregateRecord) -> [String; ANALYSED_FIELD_COUNT] {
    [
        record.year().to_string(),
        record.month().to_string(),
        format!("{:.2}", record.total()),
        format!("{:.2}", record.min()),
        format!("{:.2}", record.max()),
    ]
}

/// Format one record as an analysed data line (without newline)
pub fn encode_record(record: &AggregateRecord) -> String {
    record_fields(record).join(",")
}

/// Write the header and every record to `writer`
pub fn encode_records<'a, W, I>(writer: W, records: I) -> Result<usize, CodecError>
where
    W: Write,
    I: IntoIterator<Item = &'a AggregateRecord>,
{
    let mut csv_writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .from_writer(writer);

    csv_writer.write_record(ANALYSED_HEADER.split(','))?;

    let mut written = 0;
    for record in records {
        csv_writer.write_record(&record_fields(record))?;
        written += 1;
    }
    csv_writer.flush()?;

    debug!("Encoded {} analysed records", written);
    Ok(written)
}

pub fn encode_to_string<'a, I>(records: I) -> Result<String, CodecError>
where
    I: IntoIterator<Item = &'a AggregateRecord>,
{
    let mut buffer = Vec::new();
    encode_records(&mut buffer, records)?;
    // Every field is ASCII digits, signs and points
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Parse one analysed data record. `line_number` is 1-based and counts the header.
pub fn decode_record(
    record: &StringRecord,
    line_number: usize,
) -> Result<AggregateRecord, CodecError> {
    let malformed = || CodecError::MalformedLine {
        line_number,
        content: record.iter().collect::<Vec<_>>().join(","),
    };

    if record.len() != ANALYSED_FIELD_COUNT {
        return Err(malformed());
    }

    let year = record[0].parse::<i32>().map_err(|_| malformed())?;
    let month = record[1].parse::<u32>().map_err(|_| malformed())?;
    let total = record[2].parse::<f64>().map_err(|_| malformed())?;
    let min = record[3].parse::<f64>().map_err(|_| malformed())?;
    let max = record[4].parse::<f64>().map_err(|_| malformed())?;

    Ok(AggregateRecord::new(year, month, total, min, max))
}

/// Read every record after the header. An empty or header-only input
/// yields an empty vector.
pub fn decode_records<R: Read>(source: R) -> Result<Vec<AggregateRecord>, CodecError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(source);

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        let line_number = record
            .position()
            .map_or(records.len() + 2, |position| position.line() as usize);
        records.push(decode_record(&record, line_number)?);
    }

    debug!("Decoded {} analysed records", records.len());
    Ok(records)
}

pub fn decode_str(text: &str) -> Result<Vec<AggregateRecord>, CodecError> {
    decode_records(text.as_bytes())
}
