//! Integration tests for the processor module
//!
//! Exercises station loading against temporary directories holding raw
//! and analysed files.


use std::fs;
use std::path::Path;

pub(crate) const RAW_HEADER: &str =
    "Product code,Bureau of Meteorology station number,Year,Month,Day,Rainfall amount (millimetres),Period over which rainfall was measured (days),Quality";

/// Write `{station}.csv` with the standard header and the given data rows
pub(crate) fn write_raw_file<S: AsRef<str>>(dir: &Path, station: &str, rows: &[S]) {
    let mut content = String::from(RAW_HEADER);
    content.push('\n');
    for row in rows {
        content.push_str(row.as_ref());
        content.push('\n');
    }
    fs::write(dir.join(format!("{}.csv", station)), content).unwrap();
}

/// Build a raw data row for the given date and measurement text
pub(crate) fn raw_row(year: i32, month: u32, day: u32, measurement: &str) -> String {
    format!(
        "IDCJAC0009,031205,{},{},{},{},1,N",
        year, month, day, measurement
    )
}
