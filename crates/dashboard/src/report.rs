//! Plain-text rendering of dashboard views for the command line.

use crate::view::{TrendSource, UsdOverviewView};
use fundamenticks_core::ScoredEvent;
use std::fmt;

/// Fixed-width table of scored events.
pub struct EventTable<'a>(pub &'a [ScoredEvent]);

impl fmt::Display for EventTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<10}  {:<14}  {:<32}  {:>10}  {:>10}  {:>6}",
            "DATE", "CATEGORY", "REPORT", "ACTUAL", "FORECAST", "POINTS"
        )?;
        for e in self.0 {
            writeln!(
                f,
                "{:<10}  {:<14}  {:<32}  {:>10}  {:>10}  {:>+6}",
                e.event.date.format("%Y-%m-%d"),
                truncate(&e.event.category, 14),
                truncate(&e.event.report, 32),
                truncate(&e.event.actual, 10),
                truncate(&e.event.forecast, 10),
                e.points(),
            )?;
        }
        Ok(())
    }
}

/// Text report of the USD overview.
pub struct OverviewReport<'a>(pub &'a UsdOverviewView);

impl fmt::Display for OverviewReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;

        writeln!(f, "USD OVERVIEW")?;
        writeln!(f, "============")?;

        let Some(summary) = &view.summary else {
            writeln!(f, "No macro-economic data available.")?;
            return Ok(());
        };

        for group in &view.categories {
            writeln!(f)?;
            writeln!(
                f,
                "[{}] score {:+} ({})",
                group.category,
                group.summary.total_score,
                group.summary.label()
            )?;
            write!(f, "{}", EventTable(&group.events))?;
        }

        writeln!(f)?;
        writeln!(
            f,
            "Events: {} contributing (beat {}, miss {}, neutral {})",
            summary.contributing_events, summary.beats, summary.misses, summary.neutral
        )?;
        writeln!(f, "TOTAL SCORE: {} ({})", summary.total_score, summary.label())?;

        match view.trend_source {
            TrendSource::File => writeln!(f, "Seasonality: trend lines loaded")?,
            TrendSource::Computed => writeln!(f, "Seasonality: trend lines computed from heatmap")?,
            TrendSource::Unavailable => writeln!(f, "Seasonality: no data")?,
        }
        Ok(())
    }
}

fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(width.saturating_sub(1)).collect();
        out.push('~');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Datasets;
    use crate::view::Dashboard;
    use chrono::NaiveDate;
    use fundamenticks_core::{CalendarEvent, Config};
    use fundamenticks_ingestion::CalendarData;

    fn datasets(pairs: &[(&str, &str, &str)]) -> Datasets {
        let events = pairs
            .iter()
            .enumerate()
            .map(|(i, (category, actual, forecast))| CalendarEvent {
                date: NaiveDate::from_ymd_opt(2024, 6, 20 - i as u32).unwrap(),
                category: category.to_string(),
                report: "Release".to_string(),
                actual: actual.to_string(),
                forecast: forecast.to_string(),
            })
            .collect();
        Datasets {
            calendar: CalendarData {
                events,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_overview_report_total_line() {
        let config = Config::default();
        let data = datasets(&[
            ("Labor", "250K", "180K"),
            ("Labor", "4.1%", "3.9%"),
            ("Inflation", "3.5", "3.2"),
        ]);
        let view = Dashboard::new(&data, &config).usd_overview();
        let text = OverviewReport(&view).to_string();

        assert!(text.contains("TOTAL SCORE: 3 (BULLISH)"));
        assert!(text.contains("[Labor] score +2 (BULLISH)"));
        assert!(text.contains("[Inflation] score +1 (NEUTRAL)"));
        assert!(text.contains("Seasonality: no data"));
    }

    #[test]
    fn test_overview_report_without_data() {
        let config = Config::default();
        let data = Datasets::default();
        let view = Dashboard::new(&data, &config).usd_overview();
        let text = OverviewReport(&view).to_string();

        assert!(text.contains("No macro-economic data available."));
        assert!(!text.contains("TOTAL SCORE"));
    }

    #[test]
    fn test_event_table_rows() {
        let config = Config::default();
        let data = datasets(&[("Growth", "1.0", "1.4"), ("Growth", "-", "1.4")]);
        let events = Dashboard::new(&data, &config).scored_events();
        let text = EventTable(&events).to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("DATE"));
        assert!(lines[1].starts_with("2024-06-20"));
        assert!(lines[1].ends_with("-1"));
        assert!(lines[2].ends_with("+0"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("CPI", 10), "CPI");
        assert_eq!(truncate("Nonfarm Payrolls", 8), "Nonfarm~");
    }
}
