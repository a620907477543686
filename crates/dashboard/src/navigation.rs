//! Session and navigation state.
//!
//! A [`Session`] is an immutable value. Every UI event is a [`NavAction`],
//! and [`Session::apply`] returns the next session. [`Session::route`]
//! decides which page to render.

use fundamenticks_core::config::DashboardConfig;
use fundamenticks_core::Tier;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// An authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub display_name: String,
    pub tier: Tier,
}

impl User {
    /// Build a user, resolving the tier from the dashboard configuration.
    pub fn resolve(
        username: impl Into<String>,
        display_name: impl Into<String>,
        config: &DashboardConfig,
    ) -> Self {
        let username = username.into();
        let tier = config.tier_for(&username);
        Self {
            username,
            display_name: display_name.into(),
            tier,
        }
    }
}

/// Top-level page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    #[default]
    Landing,
    Login,
    Dashboard,
}

/// Dashboard tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    #[default]
    Home,
    UsdOverview,
    EconomicCalendar,
    Watchlist,
    Profile,
}

impl Tab {
    /// All tabs in sidebar order.
    pub const ALL: [Tab; 5] = [
        Tab::Home,
        Tab::UsdOverview,
        Tab::EconomicCalendar,
        Tab::Watchlist,
        Tab::Profile,
    ];

    /// Sidebar label.
    pub fn label(self) -> &'static str {
        match self {
            Tab::Home => "DASHBOARD HOME",
            Tab::UsdOverview => "USD OVERVIEW",
            Tab::EconomicCalendar => "ECONOMIC CALENDAR",
            Tab::Watchlist => "WATCHLIST",
            Tab::Profile => "USER PROFILE",
        }
    }

    /// Whether a tier may open this tab.
    pub fn is_available_to(self, tier: Tier) -> bool {
        match self {
            Tab::UsdOverview => tier == Tier::Paid,
            _ => true,
        }
    }

    /// Tabs a tier may open, in sidebar order.
    pub fn available_to(tier: Tier) -> Vec<Tab> {
        Self::ALL
            .into_iter()
            .filter(|t| t.is_available_to(tier))
            .collect()
    }
}

/// What to render for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Landing,
    Login,
    Dashboard(Tab),
}

/// A UI event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavAction {
    /// Landing page "get started" buttons.
    ShowLogin,
    /// "Back to home" from the login page.
    BackToLanding,
    /// Authentication succeeded.
    SignedIn(User),
    /// Sidebar navigation.
    OpenTab(Tab),
    /// Menu button.
    ToggleSidebar,
    /// Watchlist asset selector.
    SelectAsset(String),
    SignOut,
}

/// Navigation state of one browser session.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Session {
    pub page: Page,
    pub tab: Tab,
    pub sidebar_open: bool,
    pub user: Option<User>,
    pub selected_asset: Option<String>,
}

impl Session {
    /// A fresh, unauthenticated session on the landing page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a user is signed in.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Tier of the signed-in user.
    pub fn tier(&self) -> Option<Tier> {
        self.user.as_ref().map(|u| u.tier)
    }

    /// Resolve the page to render.
    ///
    /// Signed-in sessions always render the dashboard; a tab the user's tier
    /// cannot open renders as [`Tab::Home`]. An unauthenticated session that
    /// points at the dashboard falls back to the landing page.
    pub fn route(&self) -> Route {
        if let Some(tier) = self.tier() {
            if self.tab.is_available_to(tier) {
                return Route::Dashboard(self.tab);
            }
            debug!(tab = self.tab.label(), "session tab not available to tier");
            return Route::Dashboard(Tab::Home);
        }
        match self.page {
            Page::Login => Route::Login,
            Page::Landing | Page::Dashboard => Route::Landing,
        }
    }

    /// Apply a UI event and return the next session.
    pub fn apply(self, action: NavAction) -> Session {
        match action {
            NavAction::ShowLogin if !self.is_authenticated() => Session {
                page: Page::Login,
                ..self
            },
            NavAction::BackToLanding if !self.is_authenticated() => Session {
                page: Page::Landing,
                ..self
            },
            NavAction::SignedIn(user) => Session {
                page: Page::Dashboard,
                tab: Tab::Home,
                user: Some(user),
                selected_asset: None,
                ..self
            },
            NavAction::OpenTab(tab) => match self.tier() {
                Some(tier) if tab.is_available_to(tier) => Session { tab, ..self },
                _ => {
                    debug!(tab = tab.label(), "tab not available to session");
                    self
                }
            },
            NavAction::ToggleSidebar => Session {
                sidebar_open: !self.sidebar_open,
                ..self
            },
            NavAction::SelectAsset(asset) => Session {
                selected_asset: Some(asset),
                ..self
            },
            NavAction::SignOut => Session::new(),
            NavAction::ShowLogin | NavAction::BackToLanding => self,
        }
    }

    /// Apply a sequence of UI events.
    pub fn apply_all(self, actions: impl IntoIterator<Item = NavAction>) -> Session {
        actions.into_iter().fold(self, Session::apply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> User {
        User::resolve("admin", "SYSTEM ADMIN", &DashboardConfig::default())
    }

    fn guest() -> User {
        User::resolve("guest", "GUEST USER", &DashboardConfig::default())
    }

    #[test]
    fn test_fresh_session() {
        let session = Session::new();
        assert_eq!(session.route(), Route::Landing);
        assert!(!session.sidebar_open);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_login_flow() {
        let session = Session::new().apply(NavAction::ShowLogin);
        assert_eq!(session.route(), Route::Login);

        let session = session.apply(NavAction::BackToLanding);
        assert_eq!(session.route(), Route::Landing);

        let session = session.apply_all([NavAction::ShowLogin, NavAction::SignedIn(admin())]);
        assert_eq!(session.route(), Route::Dashboard(Tab::Home));
        assert_eq!(session.tier(), Some(Tier::Paid));
    }

    #[test]
    fn test_unauthenticated_dashboard_falls_back() {
        let session = Session {
            page: Page::Dashboard,
            tab: Tab::UsdOverview,
            ..Session::default()
        };
        assert_eq!(session.route(), Route::Landing);
    }

    #[test]
    fn test_tier_gating() {
        let paid = Session::new()
            .apply(NavAction::SignedIn(admin()))
            .apply(NavAction::OpenTab(Tab::UsdOverview));
        assert_eq!(paid.route(), Route::Dashboard(Tab::UsdOverview));

        let free = Session::new()
            .apply(NavAction::SignedIn(guest()))
            .apply(NavAction::OpenTab(Tab::Watchlist))
            .apply(NavAction::OpenTab(Tab::UsdOverview));
        assert_eq!(free.route(), Route::Dashboard(Tab::Watchlist));
    }

    #[test]
    fn test_restored_session_cannot_bypass_tier() {
        let session = Session::new().apply(NavAction::SignedIn(guest()));
        let mut json = serde_json::to_value(&session).unwrap();
        json["tab"] = serde_json::json!("usd_overview");
        let restored: Session = serde_json::from_value(json).unwrap();

        assert_eq!(restored.tab, Tab::UsdOverview);
        assert_eq!(restored.route(), Route::Dashboard(Tab::Home));
    }

    #[test]
    fn test_open_tab_requires_sign_in() {
        let session = Session::new().apply(NavAction::OpenTab(Tab::Profile));
        assert_eq!(session, Session::new());
    }

    #[test]
    fn test_sidebar_and_sign_out() {
        let session = Session::new()
            .apply(NavAction::SignedIn(admin()))
            .apply(NavAction::ToggleSidebar);
        assert!(session.sidebar_open);

        let session = session.apply(NavAction::SignOut);
        assert_eq!(session, Session::new());
    }

    #[test]
    fn test_login_ignored_when_signed_in() {
        let session = Session::new()
            .apply(NavAction::SignedIn(admin()))
            .apply(NavAction::OpenTab(Tab::Profile))
            .apply(NavAction::ShowLogin);
        assert_eq!(session.route(), Route::Dashboard(Tab::Profile));
    }

    #[test]
    fn test_available_tabs() {
        assert_eq!(Tab::available_to(Tier::Paid).len(), 5);
        assert!(!Tab::available_to(Tier::Free).contains(&Tab::UsdOverview));
    }
}
