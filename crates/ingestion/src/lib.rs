//! Data ingestion and normalization for the Fundamenticks dashboard.
//!
//! This crate handles:
//! - Numeric normalization of published calendar values
//! - Macro-economic calendar loading
//! - Seasonality dataset loading (trend lines, monthly heatmap)

pub mod normalizer;
pub mod calendar;
pub mod seasonality;
mod reader;

pub use normalizer::{normalize, normalize_opt};
pub use calendar::{CalendarData, CalendarLoader, LoadStats};
pub use seasonality::{load_heatmap, load_heatmap_file, load_trend_lines, load_trend_lines_file};
