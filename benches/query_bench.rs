//! Filter + sort throughput over a synthetic incident list.

use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use helmetmon_core::model::incident::{Incident, IncidentKind, IncidentStatus, Severity};
use helmetmon_core::query::filter::{Facet, IncidentFilter};
use helmetmon_core::query::sort::{IncidentSortKey, SortConfig, SortDirection};

fn sample_incidents(count: usize) -> Vec<Incident> {
    let base = Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap();
    (0..count)
        .map(|i| {
            let severity = match i % 4 {
                0 => Severity::Critical,
                1 => Severity::High,
                2 => Severity::Medium,
                _ => Severity::Low,
            };
            let status = match i % 3 {
                0 => IncidentStatus::Open,
                1 => IncidentStatus::Investigating,
                _ => IncidentStatus::Resolved,
            };
            let mut inc = Incident::report(
                &format!("INC-2025-{:05}", i),
                "Worker Not Wearing Safety Helmet",
                IncidentKind::HelmetViolation,
                severity,
                "System",
                base + Duration::minutes(i as i64),
            );
            inc.status = status;
            inc.description = "Automated monitoring detected a helmet violation".to_string();
            inc.worker_name = Some(format!("Worker #{}", i % 250));
            inc.location = format!("Zone {} - Assembly Area", (b'A' + (i % 5) as u8) as char);
            inc
        })
        .collect()
}

fn bench_filter(c: &mut Criterion) {
    let incidents = sample_incidents(1_000);
    let filter = IncidentFilter {
        search: "helmet".to_string(),
        severity: Facet::Only(Severity::Critical),
        ..Default::default()
    };

    c.bench_function("filter_1k_incidents", |b| {
        b.iter(|| black_box(filter.apply(black_box(&incidents))))
    });
}

fn bench_sort(c: &mut Criterion) {
    let incidents = sample_incidents(1_000);
    let config = SortConfig {
        key: IncidentSortKey::Severity,
        direction: SortDirection::Desc,
    };

    c.bench_function("sort_1k_incidents_by_severity", |b| {
        b.iter(|| {
            let mut records = incidents.clone();
            config.sort(&mut records);
            black_box(records)
        })
    });
}

criterion_group!(benches, bench_filter, bench_sort);
criterion_main!(benches);
