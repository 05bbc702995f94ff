//! Live dashboard state and its two timer-driven effects.
//!
//! Every 30 seconds the headline metrics take a small random walk, and
//! a synthetic alert lands at the head of the feed. Both effects
//! replace/append in-memory state only; there is no I/O to fail.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

use crate::logging::ViewContext;
use crate::model::alert::{AlertKind, AlertStatus, FeedAlert};
use crate::sim::ticker::Ticker;
use crate::stats::KpiStatus;
use crate::store::RecordStore;

/// Interval of both simulated effects.
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(30);

/// The feed keeps only the newest alerts.
pub const FEED_CAPACITY: usize = 10;

const ZONES: [&str; 5] = [
    "Assembly Area",
    "Welding Station",
    "Quality Control",
    "Packaging",
    "Storage",
];

/// Headline metrics shown on the KPI cards.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardMetrics {
    pub total_workers: u32,
    pub compliance_rate: f64,
    pub active_alerts: u32,
    pub environmental: KpiStatus,
}

impl Default for DashboardMetrics {
    fn default() -> Self {
        Self {
            total_workers: 24,
            compliance_rate: 87.5,
            active_alerts: 3,
            environmental: KpiStatus::Normal,
        }
    }
}

impl DashboardMetrics {
    /// One step of the simulated walk: compliance drifts within
    /// [75, 100], active alerts within [0, 10].
    pub fn refresh<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.compliance_rate =
            (self.compliance_rate + (rng.gen::<f64>() - 0.5) * 2.0).clamp(75.0, 100.0);

        let delta = ((rng.gen::<f64>() - 0.5) * 3.0).floor() as i64;
        self.active_alerts = (self.active_alerts as i64 + delta).clamp(0, 10) as u32;
    }
}

/// Prepend one synthetic alert and trim the feed to capacity.
///
/// Returns the new alert's id.
pub fn inject_alert<R: Rng + ?Sized>(
    feed: &mut RecordStore<FeedAlert>,
    rng: &mut R,
    now: DateTime<Utc>,
    ctx: &ViewContext,
) -> String {
    let kind = if rng.gen::<f64>() > 0.7 {
        AlertKind::Critical
    } else if rng.gen::<f64>() > 0.5 {
        AlertKind::Warning
    } else {
        AlertKind::Info
    };

    let id = format!("alert-{}", &Uuid::new_v4().to_string()[..8]);
    let zone = ZONES[rng.gen_range(0..ZONES.len())];

    let alert = FeedAlert {
        id: id.clone(),
        kind,
        title: "New Safety Alert".to_string(),
        message: "Real-time safety monitoring detected an event".to_string(),
        timestamp: now,
        worker: Some(format!("Worker #{}", rng.gen_range(0..999))),
        zone: zone.to_string(),
        status: AlertStatus::Active,
    };

    feed.push_front(alert);
    feed.truncate(FEED_CAPACITY);

    log::info!(
        "{} ALERT_INJECTED id={} kind={} zone={}",
        ctx,
        id,
        kind.as_str(),
        zone
    );
    id
}

/// Everything the live dashboard renders from.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub metrics: DashboardMetrics,
    pub feed: RecordStore<FeedAlert>,
}

/// The live dashboard view's simulated data source.
///
/// Owns the shared state and the two tickers driving it. Dropping the
/// value tears both tickers down, so nothing updates the state after
/// the view is gone.
pub struct LiveDashboard {
    state: Arc<Mutex<DashboardState>>,
    metrics_ticker: Ticker,
    alerts_ticker: Ticker,
}

impl LiveDashboard {
    /// Start with the production intervals.
    pub fn start(initial: DashboardState) -> Self {
        Self::with_intervals(initial, REFRESH_INTERVAL, REFRESH_INTERVAL)
    }

    /// Start with explicit intervals (tests use short ones).
    pub fn with_intervals(
        initial: DashboardState,
        metrics_interval: Duration,
        alerts_interval: Duration,
    ) -> Self {
        let state = Arc::new(Mutex::new(initial));
        let ctx = ViewContext::new("real-time-safety-dashboard");

        let metrics_state = Arc::clone(&state);
        let metrics_ctx = ctx.clone();
        let mut metrics_rng = StdRng::from_entropy();
        let metrics_ticker = Ticker::spawn(metrics_interval, move || {
            let mut state = metrics_state.lock();
            state.metrics.refresh(&mut metrics_rng);
            log::debug!(
                "{} METRICS_REFRESHED compliance={:.1} alerts={}",
                metrics_ctx,
                state.metrics.compliance_rate,
                state.metrics.active_alerts
            );
        });

        let alerts_state = Arc::clone(&state);
        let mut alerts_rng = StdRng::from_entropy();
        let alerts_ticker = Ticker::spawn(alerts_interval, move || {
            let mut state = alerts_state.lock();
            inject_alert(&mut state.feed, &mut alerts_rng, Utc::now(), &ctx);
        });

        Self {
            state,
            metrics_ticker,
            alerts_ticker,
        }
    }

    /// Copy of the current state for rendering.
    pub fn snapshot(&self) -> DashboardState {
        self.state.lock().clone()
    }

    /// Mutate the state from a UI event handler (e.g. acknowledging a
    /// feed alert).
    pub fn with_state<T>(&self, f: impl FnOnce(&mut DashboardState) -> T) -> T {
        f(&mut self.state.lock())
    }

    /// Stop both tickers. Also happens on drop.
    pub fn stop(&mut self) {
        self.metrics_ticker.stop();
        self.alerts_ticker.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_refresh_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut metrics = DashboardMetrics::default();

        for _ in 0..500 {
            metrics.refresh(&mut rng);
            assert!((75.0..=100.0).contains(&metrics.compliance_rate));
            assert!(metrics.active_alerts <= 10);
        }
    }

    #[test]
    fn test_injection_caps_feed_and_prepends() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut feed = RecordStore::new();
        let ctx = ViewContext::new("real-time-safety-dashboard");

        let mut last_id = String::new();
        for _ in 0..15 {
            last_id = inject_alert(&mut feed, &mut rng, Utc::now(), &ctx);
        }

        assert_eq!(feed.len(), FEED_CAPACITY);
        // Newest alert sits at the head of the feed.
        assert_eq!(feed.records()[0].id, last_id);
        assert_eq!(feed.records()[0].status, AlertStatus::Active);
    }

    #[test]
    fn test_live_dashboard_updates_then_stops() {
        let mut dashboard = LiveDashboard::with_intervals(
            DashboardState::default(),
            Duration::from_millis(10),
            Duration::from_millis(10),
        );

        thread::sleep(Duration::from_millis(120));
        let running = dashboard.snapshot();
        assert!(!running.feed.is_empty());

        dashboard.stop();
        let stopped = dashboard.snapshot();
        thread::sleep(Duration::from_millis(60));
        let later = dashboard.snapshot();
        assert_eq!(stopped.feed.len(), later.feed.len());
        assert_eq!(stopped.metrics, later.metrics);
    }

    #[test]
    fn test_event_handler_mutation() {
        let dashboard = LiveDashboard::with_intervals(
            DashboardState::default(),
            Duration::from_secs(3600),
            Duration::from_secs(3600),
        );

        let ctx = ViewContext::new("real-time-safety-dashboard");
        let id = dashboard.with_state(|state| {
            let mut rng = StdRng::seed_from_u64(1);
            inject_alert(&mut state.feed, &mut rng, Utc::now(), &ctx)
        });

        dashboard.with_state(|state| {
            let alert = state.feed.get_mut(&id).unwrap();
            crate::lifecycle::acknowledge(alert, &ctx).unwrap();
        });

        assert_eq!(
            dashboard.snapshot().feed.get(&id).unwrap().status,
            AlertStatus::Acknowledged
        );
    }
}
