//! Actual-versus-forecast event scoring.
//!
//! Each calendar event scores +1 when the actual beats the forecast, -1 when
//! it misses, and 0 when they match or either side is unavailable.

use fundamenticks_core::{CalendarEvent, EventImpact, ScoredEvent};
use fundamenticks_ingestion::normalize;
use std::cmp::Ordering;
use tracing::debug;

/// Score one pair of raw values.
///
/// Total over all inputs: unparseable or placeholder values score neutral.
pub fn score(actual: &str, forecast: &str) -> EventImpact {
    compare(normalize(actual), normalize(forecast))
}

/// Score already-normalized values; `None` is unavailable.
pub fn compare(actual: Option<f64>, forecast: Option<f64>) -> EventImpact {
    let (Some(a), Some(f)) = (actual, forecast) else {
        return EventImpact::Neutral;
    };

    match a.partial_cmp(&f) {
        Some(Ordering::Greater) => EventImpact::Beat,
        Some(Ordering::Less) => EventImpact::Miss,
        _ => EventImpact::Neutral,
    }
}

/// Statistics about scoring coverage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoringStats {
    /// Total events scored.
    pub total_events: u64,
    /// Events where actual beat forecast.
    pub beats: u64,
    /// Events where actual missed forecast.
    pub misses: u64,
    /// Events scored neutral (including unavailable inputs).
    pub neutral: u64,
    /// Events whose actual was unavailable.
    pub missing_actual: u64,
    /// Events whose forecast was unavailable.
    pub missing_forecast: u64,
    /// Events with at least one side unavailable.
    pub incomplete_events: u64,
}

impl ScoringStats {
    /// Fraction of events where both values were available.
    pub fn coverage(&self) -> f64 {
        if self.total_events == 0 {
            return 0.0;
        }
        (self.total_events - self.incomplete_events) as f64 / self.total_events as f64
    }

    /// Reset statistics.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Event scorer that keeps coverage statistics.
#[derive(Debug, Default)]
pub struct EventScorer {
    stats: ScoringStats,
}

impl EventScorer {
    /// Create a new event scorer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Score a single event.
    pub fn score_event(&mut self, event: CalendarEvent) -> ScoredEvent {
        let actual = normalize(&event.actual);
        let forecast = normalize(&event.forecast);
        let impact = compare(actual, forecast);

        let actual_missing = actual.is_none();
        let forecast_missing = forecast.is_none();

        self.stats.total_events += 1;
        if actual_missing {
            self.stats.missing_actual += 1;
        }
        if forecast_missing {
            self.stats.missing_forecast += 1;
        }
        if actual_missing || forecast_missing {
            self.stats.incomplete_events += 1;
        }
        match impact {
            EventImpact::Beat => self.stats.beats += 1,
            EventImpact::Miss => self.stats.misses += 1,
            EventImpact::Neutral => self.stats.neutral += 1,
        }

        ScoredEvent { event, impact }
    }

    /// Score a batch of events, preserving order.
    pub fn score_batch(&mut self, events: Vec<CalendarEvent>) -> Vec<ScoredEvent> {
        let scored: Vec<ScoredEvent> = events.into_iter().map(|e| self.score_event(e)).collect();
        debug!(
            events = scored.len(),
            beats = self.stats.beats,
            misses = self.stats.misses,
            "scored calendar batch"
        );
        scored
    }

    /// Get scoring statistics.
    pub fn stats(&self) -> &ScoringStats {
        &self.stats
    }

    /// Reset statistics.
    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }
}
