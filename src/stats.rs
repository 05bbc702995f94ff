//! KPI bucketing, roster summaries and environmental thresholds.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::incident::{Incident, IncidentStatus, Severity, TimelineKind};
use crate::model::worker::{HelmetStatus, Worker};

/// Battery level at or below which a helmet needs attention.
pub const LOW_BATTERY_PERCENT: u8 = 20;

/// Traffic-light status shown on a KPI card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KpiStatus {
    Success,
    Warning,
    Critical,
    Normal,
}

/// Bucket a site-wide compliance rate.
pub fn compliance_status(rate: f64) -> KpiStatus {
    if rate >= 95.0 {
        KpiStatus::Success
    } else if rate >= 85.0 {
        KpiStatus::Warning
    } else {
        KpiStatus::Critical
    }
}

/// Bucket the active alert count.
pub fn alerts_status(active_alerts: u32) -> KpiStatus {
    match active_alerts {
        0 => KpiStatus::Success,
        1..=2 => KpiStatus::Warning,
        _ => KpiStatus::Critical,
    }
}

/// Battery display band: >50 good, >20 warning, else critical.
pub fn battery_status(battery: u8) -> KpiStatus {
    if battery > 50 {
        KpiStatus::Success
    } else if battery > LOW_BATTERY_PERCENT {
        KpiStatus::Warning
    } else {
        KpiStatus::Critical
    }
}

/// Whether a worker's helmet needs attention: disconnected, or battery
/// at or below the low-battery threshold.
pub fn needs_attention(worker: &Worker) -> bool {
    !worker.helmet.connected || worker.helmet.battery() <= LOW_BATTERY_PERCENT
}

/// Roster summary for the worker management page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerSummary {
    pub total: usize,
    pub active: usize,
    /// Rounded mean compliance score; 0 for an empty roster.
    pub compliance_rate: u8,
    pub violations: usize,
}

impl WorkerSummary {
    pub fn compute(workers: &[Worker]) -> Self {
        let total = workers.len();
        let active = workers
            .iter()
            .filter(|w| w.helmet_status == HelmetStatus::Active)
            .count();
        let violations = workers
            .iter()
            .filter(|w| w.helmet_status == HelmetStatus::Violation)
            .count();
        let compliance_rate = if total == 0 {
            0
        } else {
            let sum: u32 = workers.iter().map(|w| w.compliance_score() as u32).sum();
            ((sum as f64 / total as f64).round()) as u8
        };

        Self {
            total,
            active,
            compliance_rate,
            violations,
        }
    }
}

/// Quick-stats strip above the incidents list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncidentStats {
    pub total: usize,
    pub open: usize,
    pub critical: usize,
    pub resolved_today: usize,
}

impl IncidentStats {
    pub fn compute(incidents: &[Incident], today: NaiveDate) -> Self {
        let total = incidents.len();
        let open = incidents
            .iter()
            .filter(|i| i.status == IncidentStatus::Open)
            .count();
        let critical = incidents
            .iter()
            .filter(|i| i.severity == Severity::Critical)
            .count();
        let resolved_today = incidents
            .iter()
            .filter(|i| i.status == IncidentStatus::Resolved)
            .filter(|i| {
                i.timeline
                    .iter()
                    .rev()
                    .find(|e| e.kind == TimelineKind::Resolved)
                    .map(|e| e.timestamp.date_naive() == today)
                    .unwrap_or(false)
            })
            .count();

        Self {
            total,
            open,
            critical,
            resolved_today,
        }
    }
}

/// Environmental sensor channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensorKind {
    Temperature,
    Humidity,
    Co2,
    Noise,
}

impl SensorKind {
    pub fn unit(&self) -> &'static str {
        match self {
            SensorKind::Temperature => "°C",
            SensorKind::Humidity => "%",
            SensorKind::Co2 => "ppm",
            SensorKind::Noise => "dB",
        }
    }

    /// Hard limits a configured band must stay within.
    pub fn hard_range(&self) -> (f64, f64) {
        match self {
            SensorKind::Temperature => (-20.0, 60.0),
            SensorKind::Humidity => (0.0, 100.0),
            SensorKind::Co2 => (0.0, 5000.0),
            SensorKind::Noise => (0.0, 120.0),
        }
    }

    /// Default configured band for the sensor.
    pub fn default_band(&self) -> ThresholdBand {
        match self {
            SensorKind::Temperature => ThresholdBand::new(18.0, 35.0),
            SensorKind::Humidity => ThresholdBand::new(30.0, 70.0),
            SensorKind::Co2 => ThresholdBand::new(0.0, 1000.0),
            SensorKind::Noise => ThresholdBand::new(0.0, 85.0),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ThresholdError {
    #[error("Minimum must not exceed maximum ({min} > {max})")]
    InvertedBand { min: f64, max: f64 },
    #[error("Value {value} is outside the allowed range {lo}..{hi} {unit}")]
    OutOfRange {
        value: f64,
        lo: f64,
        hi: f64,
        unit: &'static str,
    },
}

/// Where a reading sits relative to a configured band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadingStatus {
    Safe,
    Caution,
    Violation,
}

/// Configured min/max alert band for one sensor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdBand {
    pub min: f64,
    pub max: f64,
}

impl ThresholdBand {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Validate an edited band before applying it.
    pub fn validate(&self, sensor: SensorKind) -> Result<(), ThresholdError> {
        if self.min > self.max {
            return Err(ThresholdError::InvertedBand {
                min: self.min,
                max: self.max,
            });
        }
        let (lo, hi) = sensor.hard_range();
        for value in [self.min, self.max] {
            if value < lo || value > hi {
                return Err(ThresholdError::OutOfRange {
                    value,
                    lo,
                    hi,
                    unit: sensor.unit(),
                });
            }
        }
        Ok(())
    }

    /// Classify a reading: outside the band is a violation, within 10%
    /// of either edge is caution, anything else is safe.
    pub fn reading_status(&self, value: f64) -> ReadingStatus {
        if value < self.min || value > self.max {
            return ReadingStatus::Violation;
        }
        let margin = (self.max - self.min) * 0.1;
        if value <= self.min + margin || value >= self.max - margin {
            return ReadingStatus::Caution;
        }
        ReadingStatus::Safe
    }
}
