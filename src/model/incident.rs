//! Safety incident records.
//!
//! An incident is created once (reported by a monitoring system or a
//! person) and then mutated in place: status updates append timeline
//! entries, investigators add notes. Incidents are never deleted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::HasId;

/// Incident severity, ranked for sorting: critical > high > medium > low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    /// Numeric rank used by the severity comparator.
    pub fn rank(&self) -> u8 {
        match self {
            Severity::Critical => 4,
            Severity::High => 3,
            Severity::Medium => 2,
            Severity::Low => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }

    /// Case-insensitive label parsing. Unknown labels yield `None` and
    /// rank as 0 (lowest) wherever a rank is needed.
    pub fn from_label(label: &str) -> Option<Severity> {
        match label.to_ascii_lowercase().as_str() {
            "critical" => Some(Severity::Critical),
            "high" => Some(Severity::High),
            "medium" => Some(Severity::Medium),
            "low" => Some(Severity::Low),
            _ => None,
        }
    }
}

/// Rank of a raw severity label; unknown labels rank lowest.
pub fn severity_rank_of_label(label: &str) -> u8 {
    Severity::from_label(label).map(|s| s.rank()).unwrap_or(0)
}

/// Incident status, ranked for sorting: open > investigating > resolved.
///
/// `Open` is the initial state, `Resolved` the terminal one. Transitions
/// are applied by `lifecycle::update_status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncidentStatus {
    Open,
    Investigating,
    Resolved,
}

impl IncidentStatus {
    pub fn rank(&self) -> u8 {
        match self {
            IncidentStatus::Open => 3,
            IncidentStatus::Investigating => 2,
            IncidentStatus::Resolved => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IncidentStatus::Open => "open",
            IncidentStatus::Investigating => "investigating",
            IncidentStatus::Resolved => "resolved",
        }
    }

    pub fn from_label(label: &str) -> Option<IncidentStatus> {
        match label.to_ascii_lowercase().as_str() {
            "open" => Some(IncidentStatus::Open),
            "investigating" => Some(IncidentStatus::Investigating),
            "resolved" => Some(IncidentStatus::Resolved),
            _ => None,
        }
    }
}

/// Classification of what kind of violation or event the incident is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncidentKind {
    HelmetViolation,
    Environmental,
    Equipment,
    Behavioral,
}

impl IncidentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IncidentKind::HelmetViolation => "helmet_violation",
            IncidentKind::Environmental => "environmental",
            IncidentKind::Equipment => "equipment",
            IncidentKind::Behavioral => "behavioral",
        }
    }
}

/// What a timeline entry records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimelineKind {
    Created,
    Investigating,
    Resolved,
    Reopened,
}

/// One entry in an incident's lifecycle log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub kind: TimelineKind,
    pub action: String,
    pub timestamp: DateTime<Utc>,
    pub actor: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// A free-text investigation note.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub content: String,
    pub author: String,
    pub timestamp: DateTime<Utc>,
}

/// Photo evidence attached to an incident.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Photo {
    pub url: String,
    pub caption: String,
}

/// A safety incident record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Incident {
    pub id: String,
    pub title: String,
    pub description: String,
    pub kind: IncidentKind,
    pub severity: Severity,
    pub status: IncidentStatus,
    pub worker_id: Option<String>,
    pub worker_name: Option<String>,
    pub worker_role: Option<String>,
    pub location: String,
    pub zone: String,
    pub shift: String,
    pub conditions: String,
    pub timestamp: DateTime<Utc>,
    pub has_witnesses: bool,
    #[serde(default)]
    pub photos: Vec<Photo>,
    #[serde(default)]
    pub timeline: Vec<TimelineEntry>,
    #[serde(default)]
    pub notes: Vec<Note>,
}

impl Incident {
    /// Report a new incident. Status starts at `Open` and the timeline
    /// is seeded with a creation entry attributed to the reporter.
    pub fn report(
        id: &str,
        title: &str,
        kind: IncidentKind,
        severity: Severity,
        reporter: &str,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            kind,
            severity,
            status: IncidentStatus::Open,
            worker_id: None,
            worker_name: None,
            worker_role: None,
            location: String::new(),
            zone: String::new(),
            shift: String::new(),
            conditions: String::new(),
            timestamp,
            has_witnesses: false,
            photos: Vec::new(),
            timeline: vec![TimelineEntry {
                kind: TimelineKind::Created,
                action: format!("Incident reported by {}", reporter),
                timestamp,
                actor: reporter.to_string(),
                note: None,
            }],
            notes: Vec::new(),
        }
    }

    pub fn has_photos(&self) -> bool {
        !self.photos.is_empty()
    }
}

impl HasId for Incident {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_rank_order() {
        assert!(Severity::Critical.rank() > Severity::High.rank());
        assert!(Severity::High.rank() > Severity::Medium.rank());
        assert!(Severity::Medium.rank() > Severity::Low.rank());
    }

    #[test]
    fn test_severity_label_parsing() {
        assert_eq!(Severity::from_label("CRITICAL"), Some(Severity::Critical));
        assert_eq!(Severity::from_label("Medium"), Some(Severity::Medium));
        assert_eq!(Severity::from_label("warning"), None);
        assert_eq!(severity_rank_of_label("warning"), 0);
        assert_eq!(severity_rank_of_label("critical"), 4);
    }

    #[test]
    fn test_status_rank_order() {
        assert!(IncidentStatus::Open.rank() > IncidentStatus::Investigating.rank());
        assert!(IncidentStatus::Investigating.rank() > IncidentStatus::Resolved.rank());
    }

    #[test]
    fn test_report_seeds_timeline() {
        let now = Utc::now();
        let incident = Incident::report(
            "INC-2025-010",
            "Helmet removed in Zone C",
            IncidentKind::HelmetViolation,
            Severity::Critical,
            "System",
            now,
        );

        assert_eq!(incident.status, IncidentStatus::Open);
        assert_eq!(incident.timeline.len(), 1);
        assert_eq!(incident.timeline[0].kind, TimelineKind::Created);
        assert_eq!(incident.timeline[0].actor, "System");
        assert!(!incident.has_photos());
    }

    #[test]
    fn test_wire_labels() {
        let json = serde_json::to_string(&Severity::Critical).unwrap();
        assert_eq!(json, r#""critical""#);

        let json = serde_json::to_string(&IncidentKind::HelmetViolation).unwrap();
        assert_eq!(json, r#""helmet_violation""#);
    }
}
