//! Aggregate sentiment over scored events.

use fundamenticks_core::{EventImpact, ScoredEvent, Sentiment};
use fundamenticks_ingestion::normalize;
use serde::Serialize;

/// True when the event's actual value is available.
fn has_actual(event: &ScoredEvent) -> bool {
    normalize(&event.event.actual).is_some()
}

/// Sum of points over events with an available actual value.
pub fn total_score(events: &[ScoredEvent]) -> i64 {
    events
        .iter()
        .filter(|e| has_actual(e))
        .map(|e| i64::from(e.points()))
        .sum()
}

/// Aggregate evaluation of a set of scored events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentimentSummary {
    /// Sum of points over contributing events.
    pub total_score: i64,
    /// Outlook derived from `total_score`.
    pub sentiment: Sentiment,
    /// Events with an available actual value.
    pub contributing_events: usize,
    /// Contributing events that beat the forecast.
    pub beats: usize,
    /// Contributing events that missed the forecast.
    pub misses: usize,
    /// Contributing events scored neutral.
    pub neutral: usize,
}

impl SentimentSummary {
    /// Summarize a set of scored events.
    pub fn from_events(events: &[ScoredEvent]) -> Self {
        let mut summary = Self {
            total_score: 0,
            sentiment: Sentiment::Neutral,
            contributing_events: 0,
            beats: 0,
            misses: 0,
            neutral: 0,
        };

        for event in events.iter().filter(|e| has_actual(e)) {
            summary.contributing_events += 1;
            summary.total_score += i64::from(event.points());
            match event.impact {
                EventImpact::Beat => summary.beats += 1,
                EventImpact::Miss => summary.misses += 1,
                EventImpact::Neutral => summary.neutral += 1,
            }
        }

        summary.sentiment = Sentiment::from_total(summary.total_score);
        summary
    }

    /// Display label of the outlook.
    pub fn label(&self) -> &'static str {
        self.sentiment.label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scorer::EventScorer;
    use chrono::NaiveDate;
    use fundamenticks_core::CalendarEvent;

    fn make_scored(pairs: &[(&str, &str)]) -> Vec<ScoredEvent> {
        let events = pairs
            .iter()
            .map(|(actual, forecast)| CalendarEvent {
                date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
                category: "Labor".to_string(),
                report: "NFP".to_string(),
                actual: actual.to_string(),
                forecast: forecast.to_string(),
            })
            .collect();
        EventScorer::new().score_batch(events)
    }

    #[test]
    fn test_bullish() {
        // 1 + 1 + 1 - 1 = 2
        let events = make_scored(&[("2", "1"), ("3", "1"), ("4", "1"), ("0", "1")]);
        let summary = SentimentSummary::from_events(&events);
        assert_eq!(summary.total_score, 2);
        assert_eq!(summary.label(), "BULLISH");
        assert_eq!(summary.beats, 3);
        assert_eq!(summary.misses, 1);
    }

    #[test]
    fn test_bearish() {
        // -1 - 1 + 0 = -2
        let events = make_scored(&[("0", "1"), ("0", "1"), ("1", "1")]);
        let summary = SentimentSummary::from_events(&events);
        assert_eq!(summary.total_score, -2);
        assert_eq!(summary.sentiment, Sentiment::Bearish);
        assert_eq!(summary.neutral, 1);
    }

    #[test]
    fn test_neutral() {
        let events = make_scored(&[("2", "1"), ("0", "1"), ("1", "1")]);
        let summary = SentimentSummary::from_events(&events);
        assert_eq!(summary.total_score, 0);
        assert_eq!(summary.label(), "NEUTRAL");
    }

    #[test]
    fn test_unavailable_actuals_do_not_contribute() {
        let events = make_scored(&[("2", "1"), ("n/a", "1"), ("", "1"), ("3", "n/a")]);
        let summary = SentimentSummary::from_events(&events);
        assert_eq!(summary.contributing_events, 2);
        assert_eq!(summary.total_score, 1);
        assert_eq!(total_score(&events), 1);
    }

    #[test]
    fn test_empty() {
        let summary = SentimentSummary::from_events(&[]);
        assert_eq!(summary.total_score, 0);
        assert_eq!(summary.contributing_events, 0);
        assert_eq!(summary.sentiment, Sentiment::Neutral);
    }
}
