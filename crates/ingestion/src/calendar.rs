//! Macro-economic calendar loading.
//!
//! Reads the calendar CSV (`Date, Category, Report, Actual, Forecast`) into
//! [`CalendarEvent`]s, newest first. Rows whose date cannot be parsed are
//! dropped and counted; `Actual` and `Forecast` are kept as raw text.

use crate::reader::{cell, csv_reader, HeaderMap};
use chrono::{NaiveDate, NaiveDateTime};
use fundamenticks_core::{CalendarEvent, Result};
use serde::Serialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Date-only formats accepted in the `Date` column.
const DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d.%m.%Y", "%b %d, %Y"];

/// Date-time formats accepted in the `Date` column (time is discarded).
const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S"];

/// Statistics about a calendar load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadStats {
    /// Data rows read (excluding header).
    pub rows_read: usize,
    /// Rows kept as events.
    pub rows_kept: usize,
    /// Rows dropped for an unparseable date.
    pub bad_dates: usize,
    /// Records the CSV reader could not decode.
    pub malformed_rows: usize,
}

/// Loaded calendar with load statistics.
#[derive(Debug, Clone, Default)]
pub struct CalendarData {
    /// Events sorted by date, newest first.
    pub events: Vec<CalendarEvent>,
    pub stats: LoadStats,
}

impl CalendarData {
    /// True when no event was loaded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Calendar CSV loader.
pub struct CalendarLoader;

impl CalendarLoader {
    /// Load the calendar from a file.
    pub fn load_file(path: impl AsRef<Path>) -> Result<CalendarData> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let data = Self::load(file)?;
        info!(
            path = %path.display(),
            events = data.stats.rows_kept,
            dropped = data.stats.bad_dates + data.stats.malformed_rows,
            "loaded calendar"
        );
        Ok(data)
    }

    /// Load the calendar from any reader.
    pub fn load<R: Read>(input: R) -> Result<CalendarData> {
        let mut reader = csv_reader(input);
        let headers = HeaderMap::read(&mut reader)?;

        let date_col = headers.require("Date")?;
        let actual_col = headers.require("Actual")?;
        let forecast_col = headers.require("Forecast")?;
        let category_col = headers.get("Category");
        let report_col = headers.get("Report");

        let mut stats = LoadStats::default();
        let mut events = Vec::new();

        for (idx, result) in reader.records().enumerate() {
            // Header is line 1.
            let line = idx + 2;
            stats.rows_read += 1;

            let record = match result {
                Ok(r) => r,
                Err(e) => {
                    debug!(line, error = %e, "skipping malformed calendar row");
                    stats.malformed_rows += 1;
                    continue;
                }
            };

            let raw_date = cell(&record, Some(date_col));
            let date = match parse_date(raw_date) {
                Some(d) => d,
                None => {
                    debug!(line, date = raw_date, "skipping calendar row with bad date");
                    stats.bad_dates += 1;
                    continue;
                }
            };

            events.push(CalendarEvent {
                date,
                category: cell(&record, category_col).to_string(),
                report: cell(&record, report_col).to_string(),
                actual: cell(&record, Some(actual_col)).to_string(),
                forecast: cell(&record, Some(forecast_col)).to_string(),
            });
        }

        // Stable: same-day releases keep file order.
        events.sort_by(|a, b| b.date.cmp(&a.date));
        stats.rows_kept = events.len();

        Ok(CalendarData { events, stats })
    }
}

/// Parse a calendar date in any of the accepted formats.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|f| NaiveDate::parse_from_str(s, f).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|f| NaiveDateTime::parse_from_str(s, f).ok())
                .map(|dt| dt.date())
        })
}
