//! Navigable view routes.
//!
//! Each route maps 1:1 to a top-level page. Unknown paths land on the
//! not-found view. The root path shows environmental monitoring.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    EnvironmentalMonitoring,
    WorkerManagement,
    Login,
    SafetyAlertsIncidents,
    RealTimeDashboard,
    ReportsAnalytics,
    NotFound,
}

impl Route {
    /// Resolve a path to a route. Anything unrecognized is `NotFound`.
    pub fn from_path(path: &str) -> Route {
        match path {
            "/" | "/environmental-monitoring" => Route::EnvironmentalMonitoring,
            "/worker-management" => Route::WorkerManagement,
            "/login" => Route::Login,
            "/safety-alerts-incidents" => Route::SafetyAlertsIncidents,
            "/real-time-safety-dashboard" => Route::RealTimeDashboard,
            "/safety-reports-analytics" => Route::ReportsAnalytics,
            _ => Route::NotFound,
        }
    }

    /// Canonical path for the route. `NotFound` has no page of its
    /// own and returns the catch-all pattern.
    pub fn path(&self) -> &'static str {
        match self {
            Route::EnvironmentalMonitoring => "/environmental-monitoring",
            Route::WorkerManagement => "/worker-management",
            Route::Login => "/login",
            Route::SafetyAlertsIncidents => "/safety-alerts-incidents",
            Route::RealTimeDashboard => "/real-time-safety-dashboard",
            Route::ReportsAnalytics => "/safety-reports-analytics",
            Route::NotFound => "*",
        }
    }
}
