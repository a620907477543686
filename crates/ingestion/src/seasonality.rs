//! Seasonality dataset loading.
//!
//! Two datasets describe USD index seasonality:
//! - trend lines: `Month, Return_15Y, Return_10Y, Return_5Y`
//! - heatmap: `Year, Month, Return`
//!
//! Both use `.` as the decimal separator.

use crate::reader::{cell, csv_reader, HeaderMap};
use fundamenticks_core::{Month, MonthlyReturn, Result, SeasonalityPoint};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Parse a plain decimal cell.
fn parse_value(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Load seasonality trend lines, sorted by month.
///
/// Rows with an unknown month are dropped; unparseable returns become `None`.
pub fn load_trend_lines<R: Read>(input: R) -> Result<Vec<SeasonalityPoint>> {
    let mut reader = csv_reader(input);
    let headers = HeaderMap::read(&mut reader)?;

    let month_col = headers.require("Month")?;
    let r15 = headers.get("Return_15Y");
    let r10 = headers.get("Return_10Y");
    let r5 = headers.get("Return_5Y");

    let mut points = Vec::with_capacity(12);
    for result in reader.records() {
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                debug!(error = %e, "skipping malformed trend-line row");
                continue;
            }
        };

        let raw_month = cell(&record, Some(month_col));
        let Some(month) = Month::from_abbrev(raw_month) else {
            debug!(month = raw_month, "skipping trend-line row with unknown month");
            continue;
        };

        points.push(SeasonalityPoint {
            month,
            return_15y: parse_value(cell(&record, r15)),
            return_10y: parse_value(cell(&record, r10)),
            return_5y: parse_value(cell(&record, r5)),
        });
    }

    points.sort_by_key(|p| p.month);
    Ok(points)
}

/// Load the monthly-return heatmap, sorted by year (newest first) then month.
///
/// Rows with a non-numeric return, unknown month or non-integer year are
/// dropped.
pub fn load_heatmap<R: Read>(input: R) -> Result<Vec<MonthlyReturn>> {
    let mut reader = csv_reader(input);
    let headers = HeaderMap::read(&mut reader)?;

    let year_col = headers.require("Year")?;
    let month_col = headers.require("Month")?;
    let return_col = headers.require("Return")?;

    let mut cells = Vec::new();
    let mut dropped = 0usize;
    for result in reader.records() {
        let Ok(record) = result else {
            dropped += 1;
            continue;
        };

        let year = cell(&record, Some(year_col)).parse::<i32>().ok();
        let month = Month::from_abbrev(cell(&record, Some(month_col)));
        let value = parse_value(cell(&record, Some(return_col)));

        match (year, month, value) {
            (Some(year), Some(month), Some(value)) => {
                cells.push(MonthlyReturn { year, month, value })
            }
            _ => dropped += 1,
        }
    }

    if dropped > 0 {
        debug!(dropped, "dropped heatmap rows");
    }

    cells.sort_by(|a, b| b.year.cmp(&a.year).then(a.month.cmp(&b.month)));
    Ok(cells)
}

/// Load trend lines from a file.
pub fn load_trend_lines_file(path: impl AsRef<Path>) -> Result<Vec<SeasonalityPoint>> {
    let path = path.as_ref();
    let points = load_trend_lines(File::open(path)?)?;
    info!(path = %path.display(), months = points.len(), "loaded seasonality trend lines");
    Ok(points)
}

/// Load the heatmap from a file.
pub fn load_heatmap_file(path: impl AsRef<Path>) -> Result<Vec<MonthlyReturn>> {
    let path = path.as_ref();
    let cells = load_heatmap(File::open(path)?)?;
    info!(path = %path.display(), cells = cells.len(), "loaded seasonality heatmap");
    Ok(cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_trend_lines_sorted_by_month() {
        let csv = "\
Month,Return_15Y,Return_10Y,Return_5Y
Mar,0.10,0.20,0.30
Jan,-0.50,-0.40,x
Foo,1,1,1
Feb,0.05,,0.15
";
        let points = load_trend_lines(csv.as_bytes()).unwrap();

        assert_eq!(points.len(), 3);
        assert_eq!(points[0].month, Month::Jan);
        assert_eq!(points[1].month, Month::Feb);
        assert_eq!(points[2].month, Month::Mar);
        assert_relative_eq!(points[0].return_15y.unwrap(), -0.5);
        assert_eq!(points[0].return_5y, None);
        assert_eq!(points[1].return_10y, None);
    }

    #[test]
    fn test_trend_lines_require_month() {
        let csv = "Return_15Y\n0.1\n";
        assert!(load_trend_lines(csv.as_bytes()).is_err());
    }

    #[test]
    fn test_heatmap_filters_and_sorts() {
        let csv = "\
Year,Month,Return
2022,Feb,1.25
2023,Jan,-0.75
2022,Jan,0.50
2023,Mar,n/a
20x3,Apr,1.0
2023,Feb,2.00
";
        let cells = load_heatmap(csv.as_bytes()).unwrap();

        let keys: Vec<(i32, Month)> = cells.iter().map(|c| (c.year, c.month)).collect();
        assert_eq!(
            keys,
            vec![
                (2023, Month::Jan),
                (2023, Month::Feb),
                (2022, Month::Jan),
                (2022, Month::Feb),
            ]
        );
        assert_relative_eq!(cells[0].value, -0.75);
    }

    #[test]
    fn test_heatmap_missing_file() {
        let err = load_heatmap_file("/nonexistent/heatmap.csv").unwrap_err();
        assert!(err.is_not_found());
    }
}
