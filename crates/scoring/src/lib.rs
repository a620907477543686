//! Event scoring and derived analytics for the Fundamenticks dashboard.
//!
//! This crate handles:
//! - Actual-versus-forecast scoring of calendar events
//! - Aggregate sentiment (BULLISH / BEARISH / NEUTRAL)
//! - Per-category breakdown of scored events
//! - Seasonality analytics (heatmap grid, trailing monthly averages)

pub mod scorer;
pub mod sentiment;
pub mod breakdown;
pub mod seasonality;

pub use scorer::{compare, score, EventScorer, ScoringStats};
pub use sentiment::{total_score, SentimentSummary};
pub use breakdown::{breakdown_by_category, CategoryBreakdown};
pub use seasonality::{HeatmapGrid, HeatmapRow, SeasonalityProfile};
