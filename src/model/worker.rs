//! Worker records and helmet telemetry.
//!
//! Compliance scores and battery levels are clamped to [0, 100] at
//! construction and on every mutation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::HasId;

fn clamp_percent(value: i32) -> u8 {
    value.clamp(0, 100) as u8
}

/// Helmet device status as reported by the monitoring system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HelmetStatus {
    Active,
    Offline,
    Violation,
}

impl HelmetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HelmetStatus::Active => "active",
            HelmetStatus::Offline => "offline",
            HelmetStatus::Violation => "violation",
        }
    }
}

/// Work shift assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shift {
    Morning,
    Afternoon,
    Night,
}

impl Shift {
    pub fn as_str(&self) -> &'static str {
        match self {
            Shift::Morning => "morning",
            Shift::Afternoon => "afternoon",
            Shift::Night => "night",
        }
    }

    /// Display label with shift hours, as shown in the roster.
    pub fn label(&self) -> &'static str {
        match self {
            Shift::Morning => "Morning (6AM - 2PM)",
            Shift::Afternoon => "Afternoon (2PM - 10PM)",
            Shift::Night => "Night (10PM - 6AM)",
        }
    }
}

/// Device telemetry reported by a worker's helmet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HelmetTelemetry {
    pub connected: bool,
    battery: u8,
    pub last_sync: DateTime<Utc>,
}

impl HelmetTelemetry {
    pub fn new(connected: bool, battery: i32, last_sync: DateTime<Utc>) -> Self {
        Self {
            connected,
            battery: clamp_percent(battery),
            last_sync,
        }
    }

    pub fn battery(&self) -> u8 {
        self.battery
    }

    pub fn set_battery(&mut self, battery: i32) {
        self.battery = clamp_percent(battery);
    }
}

/// A worker on the site roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Worker {
    pub id: String,
    pub name: String,
    pub employee_id: String,
    pub department: String,
    pub shift: Shift,
    pub zone: String,
    pub location: String,
    pub helmet_status: HelmetStatus,
    compliance_score: u8,
    pub helmet: HelmetTelemetry,
    pub last_activity: DateTime<Utc>,
}

impl Worker {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: &str,
        name: &str,
        employee_id: &str,
        department: &str,
        shift: Shift,
        zone: &str,
        location: &str,
        helmet_status: HelmetStatus,
        compliance_score: i32,
        helmet: HelmetTelemetry,
        last_activity: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            employee_id: employee_id.to_string(),
            department: department.to_string(),
            shift,
            zone: zone.to_string(),
            location: location.to_string(),
            helmet_status,
            compliance_score: clamp_percent(compliance_score),
            helmet,
            last_activity,
        }
    }

    pub fn compliance_score(&self) -> u8 {
        self.compliance_score
    }

    pub fn set_compliance_score(&mut self, score: i32) {
        self.compliance_score = clamp_percent(score);
    }
}

impl HasId for Worker {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_worker(battery: i32, compliance: i32) -> Worker {
        let now = Utc::now();
        Worker::new(
            "W001",
            "John Martinez",
            "EMP-2024-001",
            "Manufacturing",
            Shift::Morning,
            "zone-a",
            "Zone A - Manufacturing",
            HelmetStatus::Active,
            compliance,
            HelmetTelemetry::new(true, battery, now),
            now,
        )
    }

    #[test]
    fn test_battery_clamped() {
        let worker = sample_worker(140, 95);
        assert_eq!(worker.helmet.battery(), 100);

        let worker = sample_worker(-5, 95);
        assert_eq!(worker.helmet.battery(), 0);
    }

    #[test]
    fn test_compliance_clamped_on_mutation() {
        let mut worker = sample_worker(85, 95);
        worker.set_compliance_score(250);
        assert_eq!(worker.compliance_score(), 100);
        worker.set_compliance_score(-10);
        assert_eq!(worker.compliance_score(), 0);
    }

    #[test]
    fn test_shift_labels() {
        assert_eq!(Shift::Morning.as_str(), "morning");
        assert_eq!(Shift::Night.label(), "Night (10PM - 6AM)");
    }
}
