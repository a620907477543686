//! Dataset loading.
//!
//! All three datasets are read once into an immutable [`Datasets`] value.
//! A missing or unreadable file yields an empty dataset and a warning; the
//! dashboard shows "no data" for it instead of failing.

use fundamenticks_core::config::DataConfig;
use fundamenticks_core::{MonthlyReturn, Result, SeasonalityPoint};
use fundamenticks_ingestion::{load_heatmap_file, load_trend_lines_file, CalendarData, CalendarLoader};
use std::path::Path;
use tracing::warn;

/// Loaded dashboard datasets.
#[derive(Debug, Clone, Default)]
pub struct Datasets {
    /// Macro-economic calendar, newest first.
    pub calendar: CalendarData,
    /// Precomputed seasonality trend lines, Jan..Dec.
    pub trend_lines: Vec<SeasonalityPoint>,
    /// Monthly returns, newest year first.
    pub heatmap: Vec<MonthlyReturn>,
}

impl Datasets {
    /// Load every dataset named in the configuration.
    pub fn load(config: &DataConfig) -> Self {
        Self {
            calendar: load_or_empty("calendar", &config.calendar_path, |p| {
                CalendarLoader::load_file(p)
            }),
            trend_lines: load_or_empty(
                "seasonality trend lines",
                &config.seasonality_lines_path,
                |p| load_trend_lines_file(p),
            ),
            heatmap: load_or_empty(
                "seasonality heatmap",
                &config.seasonality_heatmap_path,
                |p| load_heatmap_file(p),
            ),
        }
    }
}

fn load_or_empty<T, F>(what: &str, path: &Path, load: F) -> T
where
    T: Default,
    F: FnOnce(&Path) -> Result<T>,
{
    match load(path) {
        Ok(data) => data,
        Err(e) if e.is_not_found() => {
            warn!(dataset = what, path = %path.display(), "data file not found");
            T::default()
        }
        Err(e) => {
            warn!(dataset = what, path = %path.display(), error = %e, "failed to load data file");
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fundamenticks_core::{Config, Month};
    use std::fs;

    #[test]
    fn test_missing_files_yield_empty_datasets() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default().with_data_dir(dir.path());

        let data = Datasets::load(&config.data);
        assert!(data.calendar.is_empty());
        assert!(data.trend_lines.is_empty());
        assert!(data.heatmap.is_empty());
    }

    #[test]
    fn test_loads_all_datasets() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default().with_data_dir(dir.path());

        fs::write(
            &config.data.calendar_path,
            "Date,Category,Report,Actual,Forecast\n2024-01-11,Inflation,CPI,0.3%,0.2%\n",
        )
        .unwrap();
        fs::write(
            &config.data.seasonality_lines_path,
            "Month,Return_15Y,Return_10Y,Return_5Y\nJan,0.1,0.2,0.3\n",
        )
        .unwrap();
        fs::write(
            &config.data.seasonality_heatmap_path,
            "Year,Month,Return\n2023,Feb,1.5\n",
        )
        .unwrap();

        let data = Datasets::load(&config.data);
        assert_eq!(data.calendar.events.len(), 1);
        assert_eq!(data.trend_lines[0].month, Month::Jan);
        assert_eq!(data.heatmap[0].year, 2023);
    }

    #[test]
    fn test_bad_schema_yields_empty_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default().with_data_dir(dir.path());
        fs::write(&config.data.calendar_path, "Foo,Bar\n1,2\n").unwrap();

        let data = Datasets::load(&config.data);
        assert!(data.calendar.is_empty());
    }
}
