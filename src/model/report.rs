//! Saved report templates.
//!
//! Templates are the one record class users can delete.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::HasId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportTemplate {
    pub id: String,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl ReportTemplate {
    pub fn new(id: &str, name: &str, description: &str, created_at: DateTime<Utc>) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            created_at,
        }
    }
}

impl HasId for ReportTemplate {
    fn id(&self) -> &str {
        &self.id
    }
}
