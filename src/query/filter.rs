//! Filter predicate builder.
//!
//! A filter configuration is a set of independent facets combined with
//! logical AND. A facet that is `All` (or an absent optional field)
//! places no constraint on the record.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::incident::{Incident, IncidentKind, IncidentStatus, Severity};
use crate::model::worker::{HelmetStatus, Shift, Worker};

/// One enumerated facet: either unconstrained or pinned to a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facet<T> {
    All,
    Only(T),
}

impl<T> Default for Facet<T> {
    fn default() -> Self {
        Facet::All
    }
}

impl<T: PartialEq> Facet<T> {
    pub fn is_all(&self) -> bool {
        matches!(self, Facet::All)
    }

    /// Whether a record field passes this facet.
    pub fn allows(&self, value: &T) -> bool {
        match self {
            Facet::All => true,
            Facet::Only(only) => only == value,
        }
    }
}

fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

fn end_of_day(date: NaiveDate) -> DateTime<Utc> {
    let last_ms = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap();
    date.and_time(last_ms).and_utc()
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Filter configuration for the incidents list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IncidentFilter {
    pub search: String,
    pub severity: Facet<Severity>,
    pub status: Facet<IncidentStatus>,
    pub kind: Facet<IncidentKind>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

impl IncidentFilter {
    /// True when no facet constrains the result.
    pub fn is_empty(&self) -> bool {
        self.search.is_empty()
            && self.severity.is_all()
            && self.status.is_all()
            && self.kind.is_all()
            && self.date_from.is_none()
            && self.date_to.is_none()
    }

    /// Whether a record passes ALL active facets.
    pub fn matches(&self, incident: &Incident) -> bool {
        if !self.search.is_empty() {
            let haystack = format!(
                "{} {} {} {}",
                incident.title,
                incident.description,
                incident.worker_name.as_deref().unwrap_or(""),
                incident.location
            );
            if !contains_ignore_case(&haystack, &self.search) {
                return false;
            }
        }

        if !self.severity.allows(&incident.severity) {
            return false;
        }
        if !self.status.allows(&incident.status) {
            return false;
        }
        if !self.kind.allows(&incident.kind) {
            return false;
        }

        // Date range: `from` at start-of-day, `to` at end-of-day, so a
        // single-day range covers the whole day. An inverted range
        // matches nothing.
        if let Some(from) = self.date_from {
            if incident.timestamp < start_of_day(from) {
                return false;
            }
        }
        if let Some(to) = self.date_to {
            if incident.timestamp > end_of_day(to) {
                return false;
            }
        }

        true
    }

    /// Apply the filter, preserving store order.
    pub fn apply(&self, incidents: &[Incident]) -> Vec<Incident> {
        incidents
            .iter()
            .filter(|i| self.matches(i))
            .cloned()
            .collect()
    }
}

/// Filter configuration for the worker roster.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkerFilter {
    pub search: String,
    pub shift: Facet<Shift>,
    pub department: Facet<String>,
    pub zone: Facet<String>,
    pub helmet_status: Facet<HelmetStatus>,
}

impl WorkerFilter {
    pub fn is_empty(&self) -> bool {
        self.search.is_empty()
            && self.shift.is_all()
            && self.department.is_all()
            && self.zone.is_all()
            && self.helmet_status.is_all()
    }

    pub fn matches(&self, worker: &Worker) -> bool {
        if !self.search.is_empty() {
            let hit = contains_ignore_case(&worker.name, &self.search)
                || contains_ignore_case(&worker.employee_id, &self.search)
                || contains_ignore_case(&worker.department, &self.search);
            if !hit {
                return false;
            }
        }

        if !self.shift.allows(&worker.shift) {
            return false;
        }
        if let Facet::Only(department) = &self.department {
            if !worker.department.eq_ignore_ascii_case(department) {
                return false;
            }
        }
        if let Facet::Only(zone) = &self.zone {
            if !worker.zone.eq_ignore_ascii_case(zone) {
                return false;
            }
        }
        if !self.helmet_status.allows(&worker.helmet_status) {
            return false;
        }

        true
    }

    pub fn apply(&self, workers: &[Worker]) -> Vec<Worker> {
        workers.iter().filter(|w| self.matches(w)).cloned().collect()
    }
}
