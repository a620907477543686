//! Per-category breakdown of scored events.

use crate::sentiment::SentimentSummary;
use fundamenticks_core::ScoredEvent;
use serde::Serialize;

/// Scored events of one category with their own evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryBreakdown {
    /// Category label.
    pub category: String,
    /// Events in input order.
    pub events: Vec<ScoredEvent>,
    /// Evaluation of this category alone.
    pub summary: SentimentSummary,
}

/// Group scored events by category.
///
/// Categories appear in order of first occurrence; events keep input order.
pub fn breakdown_by_category(events: &[ScoredEvent]) -> Vec<CategoryBreakdown> {
    let mut groups: Vec<(String, Vec<ScoredEvent>)> = Vec::new();

    for event in events {
        match groups.iter_mut().find(|(c, _)| *c == event.event.category) {
            Some((_, members)) => members.push(event.clone()),
            None => groups.push((event.event.category.clone(), vec![event.clone()])),
        }
    }

    groups
        .into_iter()
        .map(|(category, events)| {
            let summary = SentimentSummary::from_events(&events);
            CategoryBreakdown {
                category,
                events,
                summary,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDate};
    use fundamenticks_core::{CalendarEvent, EventImpact, Sentiment};

    fn make_scored(category: &str, day: u32, impact: EventImpact) -> ScoredEvent {
        ScoredEvent {
            event: CalendarEvent {
                date: NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
                category: category.to_string(),
                report: format!("{category} report"),
                actual: "1".to_string(),
                forecast: "1".to_string(),
            },
            impact,
        }
    }

    #[test]
    fn test_first_appearance_order() {
        let events = vec![
            make_scored("Labor", 20, EventImpact::Beat),
            make_scored("Inflation", 19, EventImpact::Miss),
            make_scored("Labor", 18, EventImpact::Beat),
            make_scored("Growth", 17, EventImpact::Neutral),
        ];

        let groups = breakdown_by_category(&events);
        let names: Vec<&str> = groups.iter().map(|g| g.category.as_str()).collect();
        assert_eq!(names, vec!["Labor", "Inflation", "Growth"]);

        assert_eq!(groups[0].events.len(), 2);
        assert_eq!(groups[0].events[1].event.date.day0(), 17);
    }

    #[test]
    fn test_category_totals() {
        let events = vec![
            make_scored("Labor", 20, EventImpact::Beat),
            make_scored("Labor", 19, EventImpact::Beat),
            make_scored("Inflation", 18, EventImpact::Miss),
        ];

        let groups = breakdown_by_category(&events);
        assert_eq!(groups[0].summary.total_score, 2);
        assert_eq!(groups[0].summary.sentiment, Sentiment::Bullish);
        assert_eq!(groups[1].summary.total_score, -1);
        assert_eq!(groups[1].summary.sentiment, Sentiment::Neutral);
    }

    #[test]
    fn test_empty_input() {
        assert!(breakdown_by_category(&[]).is_empty());
    }
}
