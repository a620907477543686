//! Page view models.
//!
//! [`Dashboard::render`] turns a [`Session`] into a [`Screen`]: the sidebar
//! (when signed in) plus the content of the routed page. Views are plain
//! serializable data; scoring happens here, on read.

use crate::navigation::{Route, Session, Tab};
use crate::store::Datasets;
use fundamenticks_core::config::BriefItem;
use fundamenticks_core::{Config, Month, ScoredEvent, SeasonalityPoint, Tier};
use fundamenticks_scoring::{
    breakdown_by_category, CategoryBreakdown, EventScorer, HeatmapGrid, SeasonalityProfile,
    SentimentSummary,
};
use serde::Serialize;

/// What a tier offers, for the landing page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierOffer {
    pub tier: Tier,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LandingView {
    pub offers: Vec<TierOffer>,
}

/// One month of the home page seasonality preview.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewPoint {
    pub month: Month,
    pub value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomeView {
    pub weekly_brief: Vec<BriefItem>,
    pub preview_horizon_years: u32,
    pub seasonality_preview: Vec<PreviewPoint>,
}

/// Where the seasonality trend lines came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendSource {
    /// The precomputed trend-line file.
    File,
    /// Averaged from the heatmap dataset.
    Computed,
    /// No seasonality data available.
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UsdOverviewView {
    /// News breakdown, one table per category.
    pub categories: Vec<CategoryBreakdown>,
    /// Overall evaluation; `None` without calendar data.
    pub summary: Option<SentimentSummary>,
    pub heatmap: HeatmapGrid,
    pub trend_lines: Vec<SeasonalityPoint>,
    pub trend_source: TrendSource,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarView {
    pub events: Vec<ScoredEvent>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WatchlistView {
    pub assets: Vec<String>,
    pub selected: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileView {
    pub username: String,
    pub display_name: String,
    pub tier: Tier,
}

/// Content of the routed page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum View {
    Landing(LandingView),
    Login,
    Home(HomeView),
    UsdOverview(UsdOverviewView),
    EconomicCalendar(CalendarView),
    Watchlist(WatchlistView),
    Profile(ProfileView),
}

/// Sidebar state for signed-in sessions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sidebar {
    pub open: bool,
    pub tabs: Vec<Tab>,
    pub active: Tab,
}

/// Everything needed to draw one page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Screen {
    pub sidebar: Option<Sidebar>,
    pub view: View,
}

/// View builder over loaded datasets.
pub struct Dashboard<'a> {
    datasets: &'a Datasets,
    config: &'a Config,
}

impl<'a> Dashboard<'a> {
    pub fn new(datasets: &'a Datasets, config: &'a Config) -> Self {
        Self { datasets, config }
    }

    /// Render the screen for a session.
    pub fn render(&self, session: &Session) -> Screen {
        match (session.route(), session.user.as_ref()) {
            (Route::Dashboard(tab), Some(user)) => Screen {
                sidebar: Some(Sidebar {
                    open: session.sidebar_open,
                    tabs: Tab::available_to(user.tier),
                    active: tab,
                }),
                view: match tab {
                    Tab::Home => View::Home(self.home()),
                    Tab::UsdOverview => View::UsdOverview(self.usd_overview()),
                    Tab::EconomicCalendar => View::EconomicCalendar(self.calendar()),
                    Tab::Watchlist => {
                        View::Watchlist(self.watchlist(user.tier, session.selected_asset.as_deref()))
                    }
                    Tab::Profile => View::Profile(ProfileView {
                        username: user.username.clone(),
                        display_name: user.display_name.clone(),
                        tier: user.tier,
                    }),
                },
            },
            (Route::Login, _) => Screen {
                sidebar: None,
                view: View::Login,
            },
            _ => Screen {
                sidebar: None,
                view: View::Landing(self.landing()),
            },
        }
    }

    /// Landing page tier offers.
    pub fn landing(&self) -> LandingView {
        let dash = &self.config.dashboard;
        let free_assets = dash.assets_for(Tier::Free).join(", ");
        LandingView {
            offers: vec![
                TierOffer {
                    tier: Tier::Free,
                    features: vec![
                        format!("[x] Limited assets ({free_assets})"),
                        "[ ] No USD Overview".to_string(),
                    ],
                },
                TierOffer {
                    tier: Tier::Paid,
                    features: vec![
                        "[x] Unlimited assets".to_string(),
                        "[x] Full USD Overview".to_string(),
                    ],
                },
            ],
        }
    }

    /// Home page: weekly brief and seasonality preview.
    pub fn home(&self) -> HomeView {
        let horizon = self.config.seasonality.preview_horizon_years;
        let (lines, _) = self.trend_lines();
        let seasonality_preview = lines
            .iter()
            .map(|p| PreviewPoint {
                month: p.month,
                value: match horizon {
                    15 => p.return_15y,
                    10 => p.return_10y,
                    5 => p.return_5y,
                    _ => None,
                },
            })
            .collect();

        HomeView {
            weekly_brief: self.config.dashboard.weekly_brief.clone(),
            preview_horizon_years: horizon,
            seasonality_preview,
        }
    }

    /// Scored calendar, newest first.
    pub fn scored_events(&self) -> Vec<ScoredEvent> {
        EventScorer::new().score_batch(self.datasets.calendar.events.clone())
    }

    /// USD overview: news breakdown, evaluation, heatmap, trend lines.
    pub fn usd_overview(&self) -> UsdOverviewView {
        let scored = self.scored_events();
        let summary = if scored.is_empty() {
            None
        } else {
            Some(SentimentSummary::from_events(&scored))
        };
        let (trend_lines, trend_source) = self.trend_lines();

        UsdOverviewView {
            categories: breakdown_by_category(&scored),
            summary,
            heatmap: HeatmapGrid::from_returns(&self.datasets.heatmap),
            trend_lines,
            trend_source,
        }
    }

    /// Economic calendar listing.
    pub fn calendar(&self) -> CalendarView {
        CalendarView {
            events: self.scored_events(),
        }
    }

    /// Watchlist for a tier; an unavailable selection falls back to the
    /// first asset.
    pub fn watchlist(&self, tier: Tier, selected: Option<&str>) -> WatchlistView {
        let assets = self.config.dashboard.assets_for(tier).to_vec();
        let selected = selected
            .filter(|s| assets.iter().any(|a| a.as_str() == *s))
            .map(str::to_string)
            .or_else(|| assets.first().cloned());
        WatchlistView { assets, selected }
    }

    /// Trend lines from file, else computed from the heatmap.
    fn trend_lines(&self) -> (Vec<SeasonalityPoint>, TrendSource) {
        if !self.datasets.trend_lines.is_empty() {
            return (self.datasets.trend_lines.clone(), TrendSource::File);
        }
        if self.datasets.heatmap.is_empty() {
            return (Vec::new(), TrendSource::Unavailable);
        }
        let profile = SeasonalityProfile::from_returns(
            &self.datasets.heatmap,
            &self.config.seasonality.horizons_years,
        );
        (profile.to_points(), TrendSource::Computed)
    }
}
