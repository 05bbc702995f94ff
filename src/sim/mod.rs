//! Simulated real-time effects.
//!
//! The product has no live backend; the dashboard's "real-time" data
//! is a periodic random walk plus periodic synthetic alert injection.
//! Both run on `Ticker` handles owned by the view that started them,
//! so tearing the view down stops the updates.

pub mod dashboard;
pub mod ticker;

pub use dashboard::{DashboardMetrics, DashboardState, LiveDashboard};
pub use ticker::Ticker;
