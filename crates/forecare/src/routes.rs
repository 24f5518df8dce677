//! Route tree and path resolution.
//!
//! The dashboard's externally observable surface is its route tree. This
//! module resolves a path string (with an optional query string) into a
//! typed route, applying the access gate: dashboard routes resolve to a
//! redirect for unauthenticated visitors. Resolution itself never fails:
//! unknown paths land on the catch-all not-found route, and an unknown
//! resident id still resolves (the fallback policy is applied by the view,
//! not the router).

use crate::model::ResidentId;

/// A dashboard child view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardView {
    /// Facility overview.
    Overview,
    /// Resident list.
    Residents,
    /// Single resident profile.
    ResidentProfile(ResidentId),
    /// Alert feed.
    Alerts,
    /// Trend charts, optionally scoped to a resident.
    Trends {
        /// Resident context carried via `?resident=<id>`.
        resident: Option<ResidentId>,
    },
    /// Intervention timeline, optionally scoped to a resident.
    Interventions {
        /// Resident context carried via `?resident=<id>`.
        resident: Option<ResidentId>,
    },
    /// Report list.
    Reports,
    /// Device fleet.
    Devices,
    /// Account and notification settings.
    Settings,
}

/// A resolved route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Marketing landing page.
    Landing,
    /// Login form.
    Login,
    /// Registration form.
    Register,
    /// Security & compliance page.
    Security,
    /// Demo request form.
    RequestDemo,
    /// An access-gated dashboard view.
    Dashboard(DashboardView),
    /// Catch-all for unknown paths.
    NotFound,
}

/// Outcome of resolving a path for a visitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The visitor may see this route.
    Allowed(Route),
    /// A dashboard route was requested without a session; the visitor is
    /// sent to the login page instead.
    RedirectToLogin {
        /// The originally requested path.
        requested: String,
    },
}

/// Resolve a path for a visitor, applying the dashboard access gate.
#[must_use]
pub fn resolve(path: &str, authenticated: bool) -> Resolution {
    let route = parse(path);
    if matches!(route, Route::Dashboard(_)) && !authenticated {
        tracing::debug!(path, "unauthenticated dashboard access, redirecting to login");
        return Resolution::RedirectToLogin {
            requested: path.to_string(),
        };
    }
    Resolution::Allowed(route)
}

/// Parse a path into a route without applying the access gate.
#[must_use]
pub fn parse(path: &str) -> Route {
    let (path, query) = match path.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (path, None),
    };
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match segments.as_slice() {
        [] => Route::Landing,
        ["login"] => Route::Login,
        ["register"] => Route::Register,
        ["security"] => Route::Security,
        ["request-demo"] => Route::RequestDemo,
        ["dashboard", rest @ ..] => match parse_dashboard(rest, query) {
            Some(view) => Route::Dashboard(view),
            None => Route::NotFound,
        },
        _ => Route::NotFound,
    }
}

fn parse_dashboard(segments: &[&str], query: Option<&str>) -> Option<DashboardView> {
    let resident = query.and_then(resident_param);
    match segments {
        [] => Some(DashboardView::Overview),
        ["residents"] => Some(DashboardView::Residents),
        ["residents", id] => Some(DashboardView::ResidentProfile(ResidentId::new(*id))),
        ["alerts"] => Some(DashboardView::Alerts),
        ["trends"] => Some(DashboardView::Trends { resident }),
        ["interventions"] => Some(DashboardView::Interventions { resident }),
        ["reports"] => Some(DashboardView::Reports),
        ["devices"] => Some(DashboardView::Devices),
        ["settings"] => Some(DashboardView::Settings),
        _ => None,
    }
}

/// Extract the `resident` parameter from a query string. Ids are plain
/// tokens, so no percent-decoding is attempted; an empty value reads as
/// absent.
fn resident_param(query: &str) -> Option<ResidentId> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "resident")
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
        .map(ResidentId::new)
}

impl Route {
    /// The canonical path of this route, without query parameters.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Landing => "/".to_string(),
            Self::Login => "/login".to_string(),
            Self::Register => "/register".to_string(),
            Self::Security => "/security".to_string(),
            Self::RequestDemo => "/request-demo".to_string(),
            Self::NotFound => "/404".to_string(),
            Self::Dashboard(view) => match view {
                DashboardView::Overview => "/dashboard".to_string(),
                DashboardView::Residents => "/dashboard/residents".to_string(),
                DashboardView::ResidentProfile(id) => format!("/dashboard/residents/{id}"),
                DashboardView::Alerts => "/dashboard/alerts".to_string(),
                DashboardView::Trends { .. } => "/dashboard/trends".to_string(),
                DashboardView::Interventions { .. } => "/dashboard/interventions".to_string(),
                DashboardView::Reports => "/dashboard/reports".to_string(),
                DashboardView::Devices => "/dashboard/devices".to_string(),
                DashboardView::Settings => "/dashboard/settings".to_string(),
            },
        }
    }
}
