//! Core data types for the Fundamenticks dashboard.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Aggregate score at or above which the outlook is bullish.
pub const BULLISH_THRESHOLD: i64 = 2;

/// Aggregate score at or below which the outlook is bearish.
pub const BEARISH_THRESHOLD: i64 = -2;

/// One row of the macro-economic calendar.
///
/// `actual` and `forecast` are kept exactly as published; numeric
/// interpretation happens at scoring time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// Release date.
    pub date: NaiveDate,
    /// Category label (e.g., "Inflation").
    pub category: String,
    /// Report description.
    pub report: String,
    /// Published actual value (raw text).
    pub actual: String,
    /// Consensus forecast (raw text).
    pub forecast: String,
}

/// Direction of an actual-versus-forecast surprise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i8)]
pub enum EventImpact {
    /// Actual above forecast.
    Beat = 1,
    /// Equal, or either side unavailable.
    Neutral = 0,
    /// Actual below forecast.
    Miss = -1,
}

impl EventImpact {
    /// Score points: +1, 0 or -1.
    #[inline]
    pub fn points(self) -> i8 {
        self as i8
    }

    /// Inverse of [`points`](Self::points); `None` outside {-1, 0, 1}.
    pub fn from_points(points: i8) -> Option<Self> {
        match points {
            1 => Some(EventImpact::Beat),
            0 => Some(EventImpact::Neutral),
            -1 => Some(EventImpact::Miss),
            _ => None,
        }
    }
}

/// A calendar event with its derived score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredEvent {
    /// Source event.
    pub event: CalendarEvent,
    /// Score direction.
    pub impact: EventImpact,
}

impl ScoredEvent {
    /// Score points: +1, 0 or -1.
    #[inline]
    pub fn points(&self) -> i8 {
        self.impact.points()
    }
}

/// Coarse outlook derived from the aggregate score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Sentiment {
    Bullish,
    Bearish,
    Neutral,
}

impl Sentiment {
    /// Classify an aggregate score against the fixed thresholds.
    pub fn from_total(total: i64) -> Self {
        if total >= BULLISH_THRESHOLD {
            Sentiment::Bullish
        } else if total <= BEARISH_THRESHOLD {
            Sentiment::Bearish
        } else {
            Sentiment::Neutral
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Sentiment::Bullish => "BULLISH",
            Sentiment::Bearish => "BEARISH",
            Sentiment::Neutral => "NEUTRAL",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Month {
    Jan = 1,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    /// All months in calendar order.
    pub const ALL: [Month; 12] = [
        Month::Jan,
        Month::Feb,
        Month::Mar,
        Month::Apr,
        Month::May,
        Month::Jun,
        Month::Jul,
        Month::Aug,
        Month::Sep,
        Month::Oct,
        Month::Nov,
        Month::Dec,
    ];

    /// 1-based month number.
    #[inline]
    pub fn index(self) -> u32 {
        self as u32
    }

    /// Parse a three-letter English abbreviation, case-insensitive.
    pub fn from_abbrev(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|m| m.abbrev().eq_ignore_ascii_case(s))
    }

    /// Three-letter abbreviation ("Jan").
    pub fn abbrev(self) -> &'static str {
        match self {
            Month::Jan => "Jan",
            Month::Feb => "Feb",
            Month::Mar => "Mar",
            Month::Apr => "Apr",
            Month::May => "May",
            Month::Jun => "Jun",
            Month::Jul => "Jul",
            Month::Aug => "Aug",
            Month::Sep => "Sep",
            Month::Oct => "Oct",
            Month::Nov => "Nov",
            Month::Dec => "Dec",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbrev())
    }
}

/// One row of the seasonality trend-line dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalityPoint {
    pub month: Month,
    /// Average return over the last 15 years (%).
    pub return_15y: Option<f64>,
    /// Average return over the last 10 years (%).
    pub return_10y: Option<f64>,
    /// Average return over the last 5 years (%).
    pub return_5y: Option<f64>,
}

/// One cell of the monthly-return heatmap dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyReturn {
    pub year: i32,
    pub month: Month,
    /// Return for the month (%).
    pub value: f64,
}

/// Access tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Tier {
    Free,
    Paid,
}

impl Tier {
    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Tier::Free => "FREE",
            Tier::Paid => "PAID",
        }
    }
}
