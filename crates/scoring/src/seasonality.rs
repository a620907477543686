//! Seasonality analytics over monthly USD index returns.
//!
//! - [`HeatmapGrid`]: year-by-month pivot of the heatmap dataset
//! - [`SeasonalityProfile`]: average return per calendar month over trailing
//!   horizons (e.g., 15/10/5 years), derived from the same dataset

use fundamenticks_core::{Month, MonthlyReturn, SeasonalityPoint};
use serde::Serialize;
use statrs::statistics::Statistics;

/// One year of the heatmap.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapRow {
    pub year: i32,
    /// Returns for Jan..Dec; `None` where no value was published.
    pub cells: [Option<f64>; 12],
}

/// Year-by-month pivot of monthly returns, newest year first.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HeatmapGrid {
    pub rows: Vec<HeatmapRow>,
}

impl HeatmapGrid {
    /// Pivot monthly returns into a grid.
    ///
    /// When a (year, month) pair appears more than once, the last value wins.
    pub fn from_returns(returns: &[MonthlyReturn]) -> Self {
        let mut rows: Vec<HeatmapRow> = Vec::new();

        for r in returns {
            let slot = (r.month.index() - 1) as usize;
            match rows.iter_mut().find(|row| row.year == r.year) {
                Some(row) => row.cells[slot] = Some(r.value),
                None => {
                    let mut cells = [None; 12];
                    cells[slot] = Some(r.value);
                    rows.push(HeatmapRow { year: r.year, cells });
                }
            }
        }

        rows.sort_by(|a, b| b.year.cmp(&a.year));
        Self { rows }
    }

    /// Value at (year, month), if present.
    pub fn get(&self, year: i32, month: Month) -> Option<f64> {
        self.rows
            .iter()
            .find(|row| row.year == year)
            .and_then(|row| row.cells[(month.index() - 1) as usize])
    }

    /// True when the grid has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Trailing monthly averages for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthProfile {
    pub month: Month,
    /// One average per configured horizon, in horizon order.
    pub averages: Vec<Option<f64>>,
}

/// Average return per calendar month over trailing horizons.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonalityProfile {
    /// Horizons in years, as configured.
    pub horizons: Vec<u32>,
    /// Jan..Dec.
    pub months: Vec<MonthProfile>,
}

impl SeasonalityProfile {
    /// Compute the profile from monthly returns.
    ///
    /// A horizon of `h` years covers the `h` most recent years, counted back
    /// from the latest year present in `returns`.
    pub fn from_returns(returns: &[MonthlyReturn], horizons: &[u32]) -> Self {
        let latest = returns.iter().map(|r| r.year).max();

        let months = Month::ALL
            .iter()
            .map(|&month| {
                let averages = horizons
                    .iter()
                    .map(|&h| {
                        let latest = i64::from(latest?);
                        let first = latest - i64::from(h) + 1;
                        let values: Vec<f64> = returns
                            .iter()
                            .filter(|r| {
                                let year = i64::from(r.year);
                                r.month == month && year >= first && year <= latest
                            })
                            .map(|r| r.value)
                            .collect();
                        if values.is_empty() {
                            None
                        } else {
                            Some(values.iter().mean())
                        }
                    })
                    .collect();
                MonthProfile { month, averages }
            })
            .collect();

        Self {
            horizons: horizons.to_vec(),
            months,
        }
    }

    /// Average for a month over a configured horizon.
    pub fn average(&self, month: Month, horizon: u32) -> Option<f64> {
        let h = self.horizons.iter().position(|&x| x == horizon)?;
        self.months
            .iter()
            .find(|m| m.month == month)
            .and_then(|m| m.averages.get(h).copied().flatten())
    }

    /// Convert to trend-line rows (15/10/5-year columns).
    pub fn to_points(&self) -> Vec<SeasonalityPoint> {
        self.months
            .iter()
            .map(|m| SeasonalityPoint {
                month: m.month,
                return_15y: self.average(m.month, 15),
                return_10y: self.average(m.month, 10),
                return_5y: self.average(m.month, 5),
            })
            .collect()
    }
}
