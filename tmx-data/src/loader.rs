//! CSV loading for the daily temperature table.
//!
//! # CSV Format
//!
//! Headers are required; columns are looked up by name, in any order, and
//! extra columns are ignored.
//!
//! ```text
//! date,max_temperature,min_temperature
//! 2023-01-01,10,2
//! 2023-01-02,14,4
//! ```
//!
//! Rows with an unparseable date or a non-numeric (or non-finite) temperature
//! are skipped and counted. When a date appears more than once, the last row
//! wins. Gzip-compressed input is detected by its magic bytes and inflated.

use crate::daily_record::DailyRecord;
use crate::dataset::Dataset;
use crate::error::LoadError;
use crate::DATE_FORMAT;
use chrono::NaiveDate;
use flate2::read::GzDecoder;
use log::{info, warn};
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

pub const DATE_COLUMN: &str = "date";
pub const MAX_COLUMN: &str = "max_temperature";
pub const MIN_COLUMN: &str = "min_temperature";

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// The loaded dataset together with row accounting.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadReport {
    pub dataset: Dataset,
    /// Data rows in the source, excluding the header.
    pub rows_read: usize,
    pub skipped_dates: usize,
    pub skipped_values: usize,
    /// Rows replaced by a later row with the same date.
    pub duplicates: usize,
}

impl LoadReport {
    pub fn skipped(&self) -> usize {
        self.skipped_dates + self.skipped_values
    }
}

/// Records parsed from one source, deduplicated by date and sorted ascending.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedRecords {
    pub records: Vec<DailyRecord>,
    pub rows_read: usize,
    pub skipped_dates: usize,
    pub skipped_values: usize,
    pub duplicates: usize,
}

/// Parse CSV text into deduplicated daily records.
pub fn parse_records(csv_data: &[u8]) -> Result<ParsedRecords, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_data);

    let headers = rdr.headers()?.clone();
    let column = |name: &'static str| -> Result<usize, LoadError> {
        headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(name))
            .ok_or(LoadError::MissingColumn(name))
    };
    let date_idx = column(DATE_COLUMN)?;
    let max_idx = column(MAX_COLUMN)?;
    let min_idx = column(MIN_COLUMN)?;

    let mut by_date: BTreeMap<NaiveDate, DailyRecord> = BTreeMap::new();
    let mut parsed = ParsedRecords::default();
    for result in rdr.byte_records() {
        let r = result?;
        parsed.rows_read += 1;
        // only the three used fields have to be UTF-8
        let field = |idx: usize| r.get(idx).and_then(|b| std::str::from_utf8(b).ok());

        let date = match field(date_idx)
            .and_then(|s| NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok())
        {
            Some(d) => d,
            None => {
                parsed.skipped_dates += 1;
                continue;
            }
        };
        let temps = (
            parse_temperature(field(max_idx)),
            parse_temperature(field(min_idx)),
        );
        let (max_temp, min_temp) = match temps {
            (Some(max), Some(min)) => (max, min),
            _ => {
                parsed.skipped_values += 1;
                continue;
            }
        };

        if by_date
            .insert(date, DailyRecord::new(date, max_temp, min_temp))
            .is_some()
        {
            log::debug!("loader: duplicate row for {}, keeping the later one", date);
            parsed.duplicates += 1;
        }
    }

    parsed.records = by_date.into_values().collect();
    if parsed.skipped_dates + parsed.skipped_values > 0 {
        warn!(
            "loader: skipped {} rows with bad dates and {} rows with bad temperatures",
            parsed.skipped_dates, parsed.skipped_values
        );
    }
    if parsed.duplicates > 0 {
        warn!("loader: {} duplicate dates, last row kept", parsed.duplicates);
    }
    Ok(parsed)
}

fn parse_temperature(field: Option<&str>) -> Option<f64> {
    field
        .and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// Load a dataset from raw bytes, inflating gzip input first.
pub fn load_bytes(data: &[u8], years_count: usize) -> Result<LoadReport, LoadError> {
    let parsed = if data.starts_with(&GZIP_MAGIC) {
        let mut inflated = Vec::new();
        GzDecoder::new(data)
            .read_to_end(&mut inflated)
            .map_err(LoadError::Decompress)?;
        parse_records(&inflated)?
    } else {
        parse_records(data)?
    };

    info!(
        "loader: {} rows read, {} valid days",
        parsed.rows_read,
        parsed.records.len()
    );
    let dataset = Dataset::from_records(&parsed.records, years_count);
    Ok(LoadReport {
        dataset,
        rows_read: parsed.rows_read,
        skipped_dates: parsed.skipped_dates,
        skipped_values: parsed.skipped_values,
        duplicates: parsed.duplicates,
    })
}

/// Load a dataset from CSV text.
pub fn load_str(csv_data: &str, years_count: usize) -> Result<LoadReport, LoadError> {
    load_bytes(csv_data.as_bytes(), years_count)
}

/// Load a dataset from a CSV (or gzip-compressed CSV) file.
pub fn load_path<P: AsRef<Path>>(path: P, years_count: usize) -> Result<LoadReport, LoadError> {
    let data = std::fs::read(path.as_ref())?;
    info!("loader: read {} bytes from {}", data.len(), path.as_ref().display());
    load_bytes(&data, years_count)
}

/// Fetch a dataset over HTTP(S).
#[cfg(feature = "api")]
pub async fn fetch_url(url: &str, years_count: usize) -> Result<LoadReport, LoadError> {
    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(60))
        .build()
        .map_err(|e| LoadError::Http(e.to_string()))?;
    info!("loader: fetching {}", url);
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| LoadError::Http(e.to_string()))?;
    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Http(format!("{} returned {}", url, status)));
    }
    let body = response
        .bytes()
        .await
        .map_err(|e| LoadError::Http(e.to_string()))?;
    load_bytes(&body, years_count)
}
