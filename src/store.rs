//! View-owned in-memory record stores.
//!
//! Each view populates its store once at mount and mutates records in
//! place afterwards. Insertion order is preserved; it is the tie-break
//! order the stable sort falls back to. Incidents, alerts and workers
//! are never deleted; report templates are (via `ReportStore`).

use crate::model::report::ReportTemplate;
use crate::model::HasId;

/// Ordered, id-addressable collection of records.
#[derive(Debug, Clone)]
pub struct RecordStore<T> {
    records: Vec<T>,
}

impl<T> Default for RecordStore<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<T: HasId> RecordStore<T> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Populate the store. Records with an id already present are
    /// dropped so ids stay unique.
    pub fn from_records(records: Vec<T>) -> Self {
        let mut store = Self::new();
        for record in records {
            store.push(record);
        }
        log::debug!("STORE_POPULATED count={}", store.len());
        store
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut T> {
        self.records.iter_mut().find(|r| r.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.records.iter()
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    /// Append a record, keeping ids unique. Returns false (and drops
    /// the record) when the id is already present.
    pub fn push(&mut self, record: T) -> bool {
        if self.get(record.id()).is_some() {
            log::warn!("STORE_DUPLICATE_ID id={}", record.id());
            return false;
        }
        self.records.push(record);
        true
    }

    /// Insert at the head of the collection (newest-first feeds),
    /// keeping ids unique.
    pub fn push_front(&mut self, record: T) -> bool {
        if self.get(record.id()).is_some() {
            log::warn!("STORE_DUPLICATE_ID id={}", record.id());
            return false;
        }
        self.records.insert(0, record);
        true
    }

    /// Drop all but the first `keep` records.
    pub fn truncate(&mut self, keep: usize) {
        self.records.truncate(keep);
    }
}

/// Saved report templates; the one store supporting deletion.
#[derive(Debug, Clone, Default)]
pub struct ReportStore {
    templates: RecordStore<ReportTemplate>,
}

impl ReportStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn save(&mut self, template: ReportTemplate) -> bool {
        self.templates.push(template)
    }

    pub fn list(&self) -> &[ReportTemplate] {
        self.templates.records()
    }

    /// Delete a template by id. Returns true when something was
    /// removed.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.templates.records.len();
        self.templates.records.retain(|t| t.id != id);
        let removed = self.templates.records.len() < before;
        if removed {
            log::info!("REPORT_TEMPLATE_DELETED id={}", id);
        }
        removed
    }
}
