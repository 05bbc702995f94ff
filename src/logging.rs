//! Structured logging utilities.
//!
//! Provides context-aware logging with the owning view (and the record
//! being acted on, when there is one) included in every log message.

use std::fmt;

/// Logging context for operations performed by a view.
#[derive(Debug, Clone)]
pub struct ViewContext {
    pub view: String,
    pub record_id: Option<String>,
}

impl ViewContext {
    pub fn new(view: &str) -> Self {
        Self {
            view: view.to_string(),
            record_id: None,
        }
    }

    pub fn with_record(&self, record_id: &str) -> Self {
        Self {
            view: self.view.clone(),
            record_id: Some(record_id.to_string()),
        }
    }
}

impl fmt::Display for ViewContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.record_id {
            Some(rid) => write!(f, "[view={}] [record={}]", self.view, rid),
            None => write!(f, "[view={}]", self.view),
        }
    }
}
