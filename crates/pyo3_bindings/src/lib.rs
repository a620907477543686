//! PyO3 bindings for Fundamenticks.
//!
//! Exposes the Rust scoring pipeline to Python:
//! - Value normalization and actual-versus-forecast scoring
//! - Calendar loading
//! - Aggregate sentiment

use pyo3::exceptions::{PyFileNotFoundError, PyIOError, PyValueError};
use pyo3::prelude::*;

use fundamenticks_core::{
    CalendarEvent as RustCalendarEvent, EventImpact, Error as RustError,
    ScoredEvent as RustScoredEvent, Sentiment,
};
use fundamenticks_ingestion::calendar::parse_date;
use fundamenticks_ingestion::CalendarLoader;
use fundamenticks_scoring::{EventScorer, SentimentSummary as RustSentimentSummary};

fn to_py_err(e: RustError) -> PyErr {
    match e {
        RustError::Io(io) if io.kind() == std::io::ErrorKind::NotFound => {
            PyFileNotFoundError::new_err(io.to_string())
        }
        RustError::Io(io) => PyIOError::new_err(io.to_string()),
        other => PyValueError::new_err(other.to_string()),
    }
}

// ============================================================================
// Functions
// ============================================================================

/// Convert a published value ("1,5%", "250K", "n/a") to a float, or None.
#[pyfunction]
fn normalize(value: &str) -> Option<f64> {
    fundamenticks_ingestion::normalize(value)
}

/// Score an actual value against its forecast: +1, 0 or -1.
#[pyfunction]
fn score(actual: &str, forecast: &str) -> i8 {
    fundamenticks_scoring::score(actual, forecast).points()
}

/// Outlook label for an aggregate score.
#[pyfunction]
fn sentiment_label(total: i64) -> &'static str {
    Sentiment::from_total(total).label()
}

/// Load a calendar CSV, newest event first.
#[pyfunction]
fn load_calendar(path: &str) -> PyResult<Vec<CalendarEvent>> {
    let data = CalendarLoader::load_file(path).map_err(to_py_err)?;
    Ok(data.events.into_iter().map(CalendarEvent::from).collect())
}

/// Aggregate a list of scored events.
#[pyfunction]
fn summarize(events: Vec<ScoredEvent>) -> PyResult<SentimentSummary> {
    let rust_events = events
        .into_iter()
        .map(RustScoredEvent::try_from)
        .collect::<PyResult<Vec<_>>>()?;
    Ok(RustSentimentSummary::from_events(&rust_events).into())
}

// ============================================================================
// Python-exposed Types
// ============================================================================

/// One macro-economic release.
#[pyclass]
#[derive(Clone)]
pub struct CalendarEvent {
    /// ISO date (YYYY-MM-DD).
    #[pyo3(get, set)]
    pub date: String,
    #[pyo3(get, set)]
    pub category: String,
    #[pyo3(get, set)]
    pub report: String,
    #[pyo3(get, set)]
    pub actual: String,
    #[pyo3(get, set)]
    pub forecast: String,
}

#[pymethods]
impl CalendarEvent {
    #[new]
    fn new(date: String, category: String, report: String, actual: String, forecast: String) -> Self {
        CalendarEvent { date, category, report, actual, forecast }
    }

    /// Points this event would score on its own.
    #[getter]
    fn points(&self) -> i8 {
        fundamenticks_scoring::score(&self.actual, &self.forecast).points()
    }

    fn __repr__(&self) -> String {
        format!(
            "CalendarEvent(date={}, report={:?}, actual={:?}, forecast={:?})",
            self.date, self.report, self.actual, self.forecast
        )
    }
}

impl TryFrom<CalendarEvent> for RustCalendarEvent {
    type Error = PyErr;

    fn try_from(e: CalendarEvent) -> PyResult<Self> {
        let date = parse_date(&e.date)
            .ok_or_else(|| PyValueError::new_err(format!("invalid date: {:?}", e.date)))?;
        Ok(RustCalendarEvent {
            date,
            category: e.category,
            report: e.report,
            actual: e.actual,
            forecast: e.forecast,
        })
    }
}

impl From<RustCalendarEvent> for CalendarEvent {
    fn from(e: RustCalendarEvent) -> Self {
        CalendarEvent {
            date: e.date.format("%Y-%m-%d").to_string(),
            category: e.category,
            report: e.report,
            actual: e.actual,
            forecast: e.forecast,
        }
    }
}

/// A calendar event with its score.
#[pyclass]
#[derive(Clone)]
pub struct ScoredEvent {
    #[pyo3(get)]
    pub event: CalendarEvent,
    /// +1 beat, 0 neutral, -1 miss.
    #[pyo3(get)]
    pub points: i8,
}

#[pymethods]
impl ScoredEvent {
    /// "beat", "neutral" or "miss".
    #[getter]
    fn impact(&self) -> &'static str {
        match self.points {
            1 => "beat",
            -1 => "miss",
            _ => "neutral",
        }
    }

    fn __repr__(&self) -> String {
        format!("ScoredEvent(report={:?}, points={})", self.event.report, self.points)
    }
}

impl From<RustScoredEvent> for ScoredEvent {
    fn from(s: RustScoredEvent) -> Self {
        ScoredEvent {
            points: s.points(),
            event: s.event.into(),
        }
    }
}

impl TryFrom<ScoredEvent> for RustScoredEvent {
    type Error = PyErr;

    fn try_from(s: ScoredEvent) -> PyResult<Self> {
        let impact = EventImpact::from_points(s.points).ok_or_else(|| {
            PyValueError::new_err(format!("points must be -1, 0 or 1, got {}", s.points))
        })?;
        Ok(RustScoredEvent {
            event: s.event.try_into()?,
            impact,
        })
    }
}

/// Aggregate evaluation of scored events.
#[pyclass]
#[derive(Clone)]
pub struct SentimentSummary {
    #[pyo3(get)]
    pub total_score: i64,
    /// "BULLISH", "BEARISH" or "NEUTRAL".
    #[pyo3(get)]
    pub sentiment: String,
    #[pyo3(get)]
    pub contributing_events: usize,
    #[pyo3(get)]
    pub beats: usize,
    #[pyo3(get)]
    pub misses: usize,
    #[pyo3(get)]
    pub neutral: usize,
}

#[pymethods]
impl SentimentSummary {
    fn __repr__(&self) -> String {
        format!(
            "SentimentSummary(total_score={}, sentiment={}, contributing_events={})",
            self.total_score, self.sentiment, self.contributing_events
        )
    }
}

impl From<RustSentimentSummary> for SentimentSummary {
    fn from(s: RustSentimentSummary) -> Self {
        SentimentSummary {
            total_score: s.total_score,
            sentiment: s.label().to_string(),
            contributing_events: s.contributing_events,
            beats: s.beats,
            misses: s.misses,
            neutral: s.neutral,
        }
    }
}

// ============================================================================
// Python-exposed Engine Classes
// ============================================================================

/// Event scorer with coverage statistics.
#[pyclass]
pub struct PyEventScorer {
    inner: EventScorer,
}

#[pymethods]
impl PyEventScorer {
    #[new]
    fn new() -> Self {
        PyEventScorer {
            inner: EventScorer::new(),
        }
    }

    /// Score a single event.
    fn score_event(&mut self, event: CalendarEvent) -> PyResult<ScoredEvent> {
        Ok(self.inner.score_event(event.try_into()?).into())
    }

    /// Score a batch of events.
    fn score_batch(&mut self, events: Vec<CalendarEvent>) -> PyResult<Vec<ScoredEvent>> {
        let rust_events = events
            .into_iter()
            .map(RustCalendarEvent::try_from)
            .collect::<PyResult<Vec<_>>>()?;
        Ok(self
            .inner
            .score_batch(rust_events)
            .into_iter()
            .map(|s| s.into())
            .collect())
    }

    /// Get scoring statistics: (total, beats, misses, neutral, incomplete).
    fn stats(&self) -> (u64, u64, u64, u64, u64) {
        let s = self.inner.stats();
        (s.total_events, s.beats, s.misses, s.neutral, s.incomplete_events)
    }

    /// Fraction of events with both values available.
    fn coverage(&self) -> f64 {
        self.inner.stats().coverage()
    }

    /// Reset statistics.
    fn reset_stats(&mut self) {
        self.inner.reset_stats();
    }
}

// ============================================================================
// Module Definition
// ============================================================================

/// Fundamenticks - USD macro-economic scoring in Rust.
#[pymodule]
fn fundamenticks(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Functions
    m.add_function(wrap_pyfunction!(normalize, m)?)?;
    m.add_function(wrap_pyfunction!(score, m)?)?;
    m.add_function(wrap_pyfunction!(sentiment_label, m)?)?;
    m.add_function(wrap_pyfunction!(load_calendar, m)?)?;
    m.add_function(wrap_pyfunction!(summarize, m)?)?;

    // Types
    m.add_class::<CalendarEvent>()?;
    m.add_class::<ScoredEvent>()?;
    m.add_class::<SentimentSummary>()?;

    // Engine classes
    m.add_class::<PyEventScorer>()?;

    Ok(())
}
