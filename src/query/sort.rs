//! Comparator builder.
//!
//! Converts a sort key + direction into an ordering over records.
//! String keys compare case-insensitively, ranked enums compare by
//! their rank table, timestamps numerically. Ties are left to the
//! stable sort, so collection order is preserved among equals.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::model::incident::Incident;
use crate::model::worker::Worker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flip(&self) -> SortDirection {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// A sortable column with a per-key default direction.
pub trait SortKey: Copy + PartialEq {
    type Record;

    /// Ascending comparison between two records under this key.
    fn compare(&self, a: &Self::Record, b: &Self::Record) -> Ordering;

    /// Direction used when this key is first selected.
    fn default_direction(&self) -> SortDirection;
}

/// Active sort key + direction. Only one key is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SortConfig<K> {
    pub key: K,
    pub direction: SortDirection,
}

impl<K: SortKey> SortConfig<K> {
    pub fn new(key: K) -> Self {
        Self {
            key,
            direction: key.default_direction(),
        }
    }

    /// Column-header click behavior: re-selecting the active key flips
    /// the direction, selecting a new key resets to its default.
    pub fn toggle(&mut self, key: K) {
        if self.key == key {
            self.direction = self.direction.flip();
        } else {
            self.key = key;
            self.direction = key.default_direction();
        }
    }

    /// Stable sort under the active configuration.
    pub fn sort(&self, records: &mut [K::Record]) {
        let key = self.key;
        let direction = self.direction;
        records.sort_by(|a, b| direction.apply(key.compare(a, b)));
    }
}

fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Sortable columns of the incidents list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncidentSortKey {
    Timestamp,
    Severity,
    Status,
    Worker,
    Location,
}

impl SortKey for IncidentSortKey {
    type Record = Incident;

    fn compare(&self, a: &Incident, b: &Incident) -> Ordering {
        match self {
            IncidentSortKey::Timestamp => a.timestamp.cmp(&b.timestamp),
            IncidentSortKey::Severity => a.severity.rank().cmp(&b.severity.rank()),
            IncidentSortKey::Status => a.status.rank().cmp(&b.status.rank()),
            IncidentSortKey::Worker => cmp_ignore_case(
                a.worker_name.as_deref().unwrap_or(""),
                b.worker_name.as_deref().unwrap_or(""),
            ),
            IncidentSortKey::Location => cmp_ignore_case(&a.location, &b.location),
        }
    }

    fn default_direction(&self) -> SortDirection {
        SortDirection::Desc
    }
}

/// Sortable columns of the worker roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkerSortKey {
    Name,
    Shift,
    HelmetStatus,
    Compliance,
    Location,
    Battery,
    LastActivity,
}

impl SortKey for WorkerSortKey {
    type Record = Worker;

    fn compare(&self, a: &Worker, b: &Worker) -> Ordering {
        match self {
            WorkerSortKey::Name => cmp_ignore_case(&a.name, &b.name),
            WorkerSortKey::Shift => a.shift.as_str().cmp(b.shift.as_str()),
            WorkerSortKey::HelmetStatus => a.helmet_status.as_str().cmp(b.helmet_status.as_str()),
            WorkerSortKey::Compliance => a.compliance_score().cmp(&b.compliance_score()),
            WorkerSortKey::Location => cmp_ignore_case(&a.location, &b.location),
            WorkerSortKey::Battery => a.helmet.battery().cmp(&b.helmet.battery()),
            WorkerSortKey::LastActivity => a.last_activity.cmp(&b.last_activity),
        }
    }

    fn default_direction(&self) -> SortDirection {
        SortDirection::Asc
    }
}
