//! Real-time feed alerts.
//!
//! Feed alerts are lighter-weight than incidents: they carry no
//! timeline or notes, just a classification, a status and an optional
//! worker association. New alerts arrive at the head of the feed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::HasId;

/// Feed alert classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Critical,
    Warning,
    Info,
}

impl AlertKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertKind::Critical => "critical",
            AlertKind::Warning => "warning",
            AlertKind::Info => "info",
        }
    }
}

/// Feed alert status: active > acknowledged > resolved.
///
/// `Active` is the initial state, `Resolved` the terminal one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertStatus {
    Active,
    Acknowledged,
    Resolved,
}

impl AlertStatus {
    pub fn rank(&self) -> u8 {
        match self {
            AlertStatus::Active => 3,
            AlertStatus::Acknowledged => 2,
            AlertStatus::Resolved => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AlertStatus::Active => "active",
            AlertStatus::Acknowledged => "acknowledged",
            AlertStatus::Resolved => "resolved",
        }
    }
}

/// One alert in the real-time feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedAlert {
    pub id: String,
    pub kind: AlertKind,
    pub title: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub worker: Option<String>,
    pub zone: String,
    pub status: AlertStatus,
}

impl FeedAlert {
    pub fn new(
        id: &str,
        kind: AlertKind,
        title: &str,
        message: &str,
        zone: &str,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.to_string(),
            kind,
            title: title.to_string(),
            message: message.to_string(),
            timestamp,
            worker: None,
            zone: zone.to_string(),
            status: AlertStatus::Active,
        }
    }
}

impl HasId for FeedAlert {
    fn id(&self) -> &str {
        &self.id
    }
}
