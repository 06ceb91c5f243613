//! Parser for the city trip CSV files.
//!
//! Every city file has a header row with at least:
//! `Start Time, End Time, Trip Duration, Start Station, End Station, User Type`
//!
//! Chicago and New York City also carry `Gender` and `Birth Year`. Any
//! other column (the files start with an unnamed index column) is ignored.
//!
//! Timestamps are parsed permissively: a start time that doesn't parse
//! leaves the derived month/day/hour fields empty but keeps the row.

use crate::error::{DataLoadError, Result};
use crate::types::{ColumnSet, TripRecord};
use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::Deserialize;
use std::io::Read;

/// Header names every trip file must contain
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "Start Time",
    "End Time",
    "Trip Duration",
    "Start Station",
    "End Station",
    "User Type",
];

const GENDER_COLUMN: &str = "Gender";
const BIRTH_YEAR_COLUMN: &str = "Birth Year";

/// Accepted start time layouts, tried in order
const TIMESTAMP_FORMATS: [&str; 5] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// One CSV row as it appears on disk, before derivation
#[derive(Debug, Deserialize)]
struct RawTripRow {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "End Time")]
    end_time: String,
    #[serde(rename = "Trip Duration", deserialize_with = "csv::invalid_option")]
    trip_duration: Option<f64>,
    #[serde(rename = "Start Station")]
    start_station: String,
    #[serde(rename = "End Station")]
    end_station: String,
    #[serde(rename = "User Type", default)]
    user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    #[serde(rename = "Birth Year", default, deserialize_with = "csv::invalid_option")]
    birth_year: Option<f64>,
}

/// Parse a start time string, returning `None` for anything unrecognised
pub fn parse_start_time(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

impl From<RawTripRow> for TripRecord {
    fn from(row: RawTripRow) -> Self {
        let start_time = parse_start_time(&row.start_time);

        TripRecord {
            month: start_time.map(|t| t.month()),
            day_of_week: start_time.map(|t| t.weekday().num_days_from_monday()),
            hour: start_time.map(|t| t.hour()),
            start_time,
            start_time_raw: row.start_time,
            end_time: row.end_time,
            trip_duration: row.trip_duration.filter(|d| d.is_finite()),
            start_station: row.start_station,
            end_station: row.end_station,
            user_type: row.user_type,
            gender: row.gender,
            birth_year: row.birth_year.filter(|y| y.is_finite()).map(|y| y as i32),
        }
    }
}

/// Parse trip rows from any reader.
///
/// `source` names the input in error messages (usually the file name).
/// Returns the records in file order together with the optional columns
/// the header declared.
pub fn parse_trips<R: Read>(reader: R, source: &str) -> Result<(Vec<TripRecord>, ColumnSet)> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| DataLoadError::ParseError {
            file: source.to_string(),
            line: 1,
            reason: format!("Invalid header row: {}", e),
        })?
        .clone();

    if let Some(missing) = REQUIRED_COLUMNS
        .iter()
        .find(|col| !headers.iter().any(|h| h == **col))
    {
        return Err(DataLoadError::MissingColumn {
            file: source.to_string(),
            column: missing.to_string(),
        });
    }

    let columns = ColumnSet {
        gender: headers.iter().any(|h| h == GENDER_COLUMN),
        birth_year: headers.iter().any(|h| h == BIRTH_YEAR_COLUMN),
    };

    let mut records = Vec::new();
    let mut unparsed_times = 0usize;

    for (idx, result) in reader.deserialize::<RawTripRow>().enumerate() {
        let row = result.map_err(|e| DataLoadError::ParseError {
            file: source.to_string(),
            // +2: 1-indexed plus the header row
            line: e
                .position()
                .map(|p| p.line() as usize)
                .unwrap_or(idx + 2),
            reason: e.to_string(),
        })?;

        let record = TripRecord::from(row);
        if record.start_time.is_none() {
            unparsed_times += 1;
        }
        records.push(record);
    }

    if unparsed_times > 0 {
        tracing::warn!(
            "{}: {} rows have an unparseable Start Time; their month/day/hour are empty",
            source,
            unparsed_times
        );
    }

    Ok((records, columns))
}
