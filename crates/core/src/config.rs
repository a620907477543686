//! Configuration structures for the Fundamenticks dashboard.

use crate::error::{Error, Result};
use crate::types::Tier;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration.
///
/// Every section has a default, so a JSON file only needs the fields it
/// wants to override.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Data file locations.
    pub data: DataConfig,
    /// Seasonality analytics configuration.
    pub seasonality: SeasonalityConfig,
    /// Dashboard presentation and tier configuration.
    pub dashboard: DashboardConfig,
}

impl Config {
    /// Parse a configuration from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints.
    pub fn validate(&self) -> Result<()> {
        let horizons = &self.seasonality.horizons_years;
        if horizons.is_empty() {
            return Err(Error::config("horizons_years must not be empty"));
        }
        if let Some(h) = horizons.iter().find(|&&h| !SUPPORTED_HORIZONS.contains(&h)) {
            return Err(Error::config(format!(
                "unsupported horizon {h}; expected one of {SUPPORTED_HORIZONS:?}"
            )));
        }
        if !horizons.contains(&self.seasonality.preview_horizon_years) {
            return Err(Error::config(format!(
                "preview_horizon_years {} is not one of horizons_years",
                self.seasonality.preview_horizon_years
            )));
        }
        Ok(())
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Rebase all data file names onto `dir`.
    ///
    /// Only the file name of each configured path is kept.
    pub fn with_data_dir(mut self, dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        let rebase = |p: &PathBuf| match p.file_name() {
            Some(name) => dir.join(name),
            None => dir.join(p),
        };
        self.data.calendar_path = rebase(&self.data.calendar_path);
        self.data.seasonality_lines_path = rebase(&self.data.seasonality_lines_path);
        self.data.seasonality_heatmap_path = rebase(&self.data.seasonality_heatmap_path);
        self
    }
}

/// Data file configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Macro-economic calendar (Date, Category, Report, Actual, Forecast).
    pub calendar_path: PathBuf,
    /// Seasonality trend lines (Month, Return_15Y, Return_10Y, Return_5Y).
    pub seasonality_lines_path: PathBuf,
    /// Seasonality heatmap (Year, Month, Return).
    pub seasonality_heatmap_path: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            calendar_path: PathBuf::from("usd_macro_history.csv.txt"),
            seasonality_lines_path: PathBuf::from("dxy_linechart_history.csv.txt"),
            seasonality_heatmap_path: PathBuf::from("dxy_seasonality_heatmap_history.csv.txt"),
        }
    }
}

/// Trailing horizons (years) that trend lines carry a column for.
pub const SUPPORTED_HORIZONS: [u32; 3] = [15, 10, 5];

/// Seasonality configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SeasonalityConfig {
    /// Trailing horizons (years) for computed trend lines, longest first.
    pub horizons_years: Vec<u32>,
    /// Horizon shown in the home page preview.
    pub preview_horizon_years: u32,
}

impl Default for SeasonalityConfig {
    fn default() -> Self {
        Self {
            horizons_years: vec![15, 10, 5],
            preview_horizon_years: 15,
        }
    }
}

/// One line of the weekly brief on the home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BriefItem {
    /// Day label (e.g., "MON").
    pub day: String,
    /// Scheduled release.
    pub event: String,
    /// Impact note (e.g., "High Impact").
    pub impact: String,
}

impl BriefItem {
    fn new(day: &str, event: &str, impact: &str) -> Self {
        Self {
            day: day.to_string(),
            event: event.to_string(),
            impact: impact.to_string(),
        }
    }
}

/// Dashboard configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Usernames with the paid tier.
    pub paid_usernames: Vec<String>,
    /// Watchlist assets, in display order.
    pub watchlist_assets: Vec<String>,
    /// Number of leading watchlist assets available on the free tier.
    pub free_asset_limit: usize,
    /// Weekly brief shown on the home page.
    pub weekly_brief: Vec<BriefItem>,
}

impl DashboardConfig {
    /// Resolve the tier of a username.
    pub fn tier_for(&self, username: &str) -> Tier {
        if self.paid_usernames.iter().any(|u| u == username) {
            Tier::Paid
        } else {
            Tier::Free
        }
    }

    /// Watchlist assets available to a tier.
    pub fn assets_for(&self, tier: Tier) -> &[String] {
        match tier {
            Tier::Paid => &self.watchlist_assets,
            Tier::Free => {
                let n = self.free_asset_limit.min(self.watchlist_assets.len());
                &self.watchlist_assets[..n]
            }
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            paid_usernames: vec!["admin".to_string()],
            watchlist_assets: ["SPX500", "EURUSD", "GBPUSD", "XAUUSD", "BTCUSD"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            free_asset_limit: 1,
            weekly_brief: vec![
                BriefItem::new("MON", "Manufacturing Index", "Low Impact"),
                BriefItem::new("TUE", "Retail Sales", "High Impact"),
                BriefItem::new("WED", "FOMC Meeting", "Critical"),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.seasonality.horizons_years, vec![15, 10, 5]);
        assert_eq!(
            config.data.calendar_path,
            PathBuf::from("usd_macro_history.csv.txt")
        );
        assert_eq!(config.dashboard.weekly_brief.len(), 3);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config =
            Config::from_json_str(r#"{"seasonality": {"horizons_years": [15, 5]}}"#).unwrap();
        assert_eq!(config.seasonality.horizons_years, vec![15, 5]);
        assert_eq!(config.seasonality.preview_horizon_years, 15);
        assert_eq!(config.dashboard.free_asset_limit, 1);
    }

    #[test]
    fn test_json_file_roundtrip() {
        let mut config = Config::default();
        config.dashboard.paid_usernames.push("ops".to_string());

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", serde_json::to_string(&config).unwrap()).unwrap();

        let loaded = Config::from_json_file(file.path()).unwrap();
        assert_eq!(loaded.dashboard.paid_usernames, vec!["admin", "ops"]);
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(matches!(
            Config::from_json_str("{not json"),
            Err(crate::Error::Json(_))
        ));
    }

    #[test]
    fn test_preview_horizon_must_be_configured() {
        let err = Config::from_json_str(r#"{"seasonality": {"horizons_years": [10, 5]}}"#);
        assert!(matches!(err, Err(crate::Error::Config(_))));

        let err = Config::from_json_str(r#"{"seasonality": {"horizons_years": []}}"#);
        assert!(matches!(err, Err(crate::Error::Config(_))));
    }

    #[test]
    fn test_unsupported_horizons_rejected() {
        for json in [
            r#"{"seasonality": {"horizons_years": [15, 3], "preview_horizon_years": 3}}"#,
            r#"{"seasonality": {"horizons_years": [15, 2147483648]}}"#,
            r#"{"seasonality": {"horizons_years": [15, 0]}}"#,
        ] {
            assert!(matches!(
                Config::from_json_str(json),
                Err(crate::Error::Config(_))
            ));
        }
    }

    #[test]
    fn test_with_data_dir() {
        let config = Config::default().with_data_dir("/srv/data");
        assert_eq!(
            config.data.seasonality_heatmap_path,
            PathBuf::from("/srv/data/dxy_seasonality_heatmap_history.csv.txt")
        );
    }

    #[test]
    fn test_tiers_and_assets() {
        let dash = DashboardConfig::default();
        assert_eq!(dash.tier_for("admin"), Tier::Paid);
        assert_eq!(dash.tier_for("guest"), Tier::Free);
        assert_eq!(dash.assets_for(Tier::Free), ["SPX500".to_string()]);
        assert_eq!(dash.assets_for(Tier::Paid).len(), 5);
    }
}
