use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Top-level work container. Owns phases by reference (`Phase::project_id`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub emoji: String,
    #[serde(default)]
    pub color: String,
    pub created_at: DateTime<Utc>,
    /// Refreshed on every field-level mutation
    pub updated_at: DateTime<Utc>,
}
