//! helmetmon-core - Domain core for the SafetyHelmet Monitor dashboard
//!
//! This crate provides the data model and view logic shared by the
//! SafetyHelmet Monitor pages. The host environment (routing framework,
//! rendering, persistent key-value storage) is assumed as a given; this
//! crate owns everything the views compute:
//!
//! 1. **Records** - Typed incident, alert, worker and report records
//! 2. **Queries** - Filtering, sorting and selection over record stores
//! 3. **Lifecycle** - Status transitions with systematic timeline logging
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//! - `model` - Domain records and rank-ordered classification enums
//! - `query` - Filter predicate builder, comparator builder, selection set
//! - `lifecycle` - Status state machines and timeline/note appending
//! - `store` - View-owned in-memory record stores
//! - `session` - Login validation and the persisted session flag
//! - `routing` - Navigable view routes with a catch-all
//! - `stats` - KPI bucketing, summaries, environmental thresholds
//! - `sim` - Owned cancelable tickers driving simulated live updates
//! - `logging` - Structured logging with view context

pub mod lifecycle;
pub mod logging;
pub mod model;
pub mod query;
pub mod routing;
pub mod session;
pub mod sim;
pub mod stats;
pub mod store;

pub use model::alert::{AlertKind, AlertStatus, FeedAlert};
pub use model::incident::{Incident, IncidentKind, IncidentStatus, Severity};
pub use model::worker::{HelmetStatus, HelmetTelemetry, Shift, Worker};
pub use query::filter::{Facet, IncidentFilter, WorkerFilter};
pub use query::selection::SelectionSet;
pub use query::sort::{SortConfig, SortDirection};
pub use routing::Route;

/// Initialize the module-level logger.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_logger() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp_millis()
        .try_init();
}
