//! Status lifecycle for incidents and feed alerts.
//!
//! Transitions are permitted between any two distinct statuses -
//! including moves back out of `resolved` - matching the product's
//! behavior, where only the button for the current status is disabled.
//! What is NOT optional is the audit trail: every applied incident
//! transition appends a timeline entry.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::logging::ViewContext;
use crate::model::alert::{AlertStatus, FeedAlert};
use crate::model::incident::{Incident, IncidentStatus, Note, TimelineEntry, TimelineKind};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("record is already {0}")]
    NoChange(&'static str),
}

/// Whether a transition moves forward in the lifecycle order
/// (open -> investigating -> resolved). Callers can use this to flag
/// regressions; it is informational, not a guard.
pub fn is_forward(from: IncidentStatus, to: IncidentStatus) -> bool {
    to.rank() < from.rank()
}

fn transition_entry(to: IncidentStatus, actor: &str, timestamp: DateTime<Utc>) -> TimelineEntry {
    let (kind, action) = match to {
        IncidentStatus::Open => (TimelineKind::Reopened, "Incident reopened"),
        IncidentStatus::Investigating => (TimelineKind::Investigating, "Investigation started"),
        IncidentStatus::Resolved => (TimelineKind::Resolved, "Incident resolved"),
    };
    TimelineEntry {
        kind,
        action: action.to_string(),
        timestamp,
        actor: actor.to_string(),
        note: None,
    }
}

/// Apply a status update to an incident.
///
/// Rejects only the no-op (the record is already in the target
/// status). Every applied transition appends a timeline entry.
pub fn update_status(
    incident: &mut Incident,
    new_status: IncidentStatus,
    actor: &str,
    timestamp: DateTime<Utc>,
    ctx: &ViewContext,
) -> Result<(), TransitionError> {
    if incident.status == new_status {
        return Err(TransitionError::NoChange(new_status.as_str()));
    }

    let old_status = incident.status;
    incident.status = new_status;
    incident
        .timeline
        .push(transition_entry(new_status, actor, timestamp));

    log::info!(
        "{} STATUS_UPDATED from={} to={} actor={} forward={}",
        ctx.with_record(&incident.id),
        old_status.as_str(),
        new_status.as_str(),
        actor,
        is_forward(old_status, new_status)
    );

    Ok(())
}

/// Append an investigation note. Whitespace-only content is ignored.
///
/// Returns true when a note was appended.
pub fn add_note(
    incident: &mut Incident,
    content: &str,
    author: &str,
    timestamp: DateTime<Utc>,
    ctx: &ViewContext,
) -> bool {
    let content = content.trim();
    if content.is_empty() {
        return false;
    }

    incident.notes.push(Note {
        content: content.to_string(),
        author: author.to_string(),
        timestamp,
    });

    log::info!(
        "{} NOTE_ADDED author={} chars={}",
        ctx.with_record(&incident.id),
        author,
        content.len()
    );
    true
}

/// Apply a status update to a feed alert. Same no-op contract as
/// incidents; feed alerts carry no timeline.
pub fn set_alert_status(
    alert: &mut FeedAlert,
    new_status: AlertStatus,
    ctx: &ViewContext,
) -> Result<(), TransitionError> {
    if alert.status == new_status {
        return Err(TransitionError::NoChange(new_status.as_str()));
    }

    let old_status = alert.status;
    alert.status = new_status;

    log::info!(
        "{} ALERT_STATUS_UPDATED from={} to={}",
        ctx.with_record(&alert.id),
        old_status.as_str(),
        new_status.as_str()
    );

    Ok(())
}

pub fn acknowledge(alert: &mut FeedAlert, ctx: &ViewContext) -> Result<(), TransitionError> {
    set_alert_status(alert, AlertStatus::Acknowledged, ctx)
}

pub fn resolve(alert: &mut FeedAlert, ctx: &ViewContext) -> Result<(), TransitionError> {
    set_alert_status(alert, AlertStatus::Resolved, ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::alert::AlertKind;
    use crate::model::incident::{IncidentKind, Severity};

    fn open_incident() -> Incident {
        Incident::report(
            "INC-2025-003",
            "Equipment Safety Sensor Malfunction",
            IncidentKind::Equipment,
            Severity::Medium,
            "Equipment Monitor",
            Utc::now(),
        )
    }

    fn ctx() -> ViewContext {
        ViewContext::new("safety-alerts-incidents")
    }

    #[test]
    fn test_transition_appends_timeline_entry() {
        let mut incident = open_incident();
        let now = Utc::now();

        update_status(&mut incident, IncidentStatus::Investigating, "Safety Officer Johnson", now, &ctx())
            .unwrap();

        assert_eq!(incident.status, IncidentStatus::Investigating);
        assert_eq!(incident.timeline.len(), 2);
        let entry = incident.timeline.last().unwrap();
        assert_eq!(entry.kind, TimelineKind::Investigating);
        assert_eq!(entry.actor, "Safety Officer Johnson");
    }

    #[test]
    fn test_same_status_is_rejected() {
        let mut incident = open_incident();
        let err = update_status(&mut incident, IncidentStatus::Open, "System", Utc::now(), &ctx());
        assert_eq!(err, Err(TransitionError::NoChange("open")));
        assert_eq!(incident.timeline.len(), 1);
    }

    #[test]
    fn test_resolved_can_be_reopened_and_is_logged() {
        let mut incident = open_incident();
        let now = Utc::now();
        update_status(&mut incident, IncidentStatus::Resolved, "System", now, &ctx()).unwrap();

        // The lifecycle does not guard regressions; it records them.
        update_status(&mut incident, IncidentStatus::Open, "Safety Manager", now, &ctx()).unwrap();
        assert_eq!(incident.status, IncidentStatus::Open);
        assert_eq!(incident.timeline.last().unwrap().kind, TimelineKind::Reopened);
        assert!(!is_forward(IncidentStatus::Resolved, IncidentStatus::Open));
    }

    #[test]
    fn test_forward_detection() {
        assert!(is_forward(IncidentStatus::Open, IncidentStatus::Investigating));
        assert!(is_forward(IncidentStatus::Investigating, IncidentStatus::Resolved));
        assert!(!is_forward(IncidentStatus::Resolved, IncidentStatus::Investigating));
    }

    #[test]
    fn test_blank_note_is_ignored() {
        let mut incident = open_incident();
        assert!(!add_note(&mut incident, "   ", "Supervisor Williams", Utc::now(), &ctx()));
        assert!(incident.notes.is_empty());

        assert!(add_note(&mut incident, "  Sensor replaced. ", "Supervisor Williams", Utc::now(), &ctx()));
        assert_eq!(incident.notes[0].content, "Sensor replaced.");
    }

    #[test]
    fn test_alert_acknowledge_then_resolve() {
        let ctx = ViewContext::new("real-time-safety-dashboard");
        let mut alert = FeedAlert::new(
            "a-1",
            AlertKind::Critical,
            "Helmet Removed - Worker #247",
            "Safety helmet disconnected in high-risk welding zone",
            "Welding Station",
            Utc::now(),
        );

        acknowledge(&mut alert, &ctx).unwrap();
        assert_eq!(alert.status, AlertStatus::Acknowledged);

        resolve(&mut alert, &ctx).unwrap();
        assert_eq!(alert.status, AlertStatus::Resolved);

        // Acknowledging a resolved alert is permitted (no guard), but
        // re-resolving it is a no-op.
        assert!(acknowledge(&mut alert, &ctx).is_ok());
        assert!(resolve(&mut alert, &ctx).is_ok());
        assert_eq!(
            resolve(&mut alert, &ctx),
            Err(TransitionError::NoChange("resolved"))
        );
    }
}
