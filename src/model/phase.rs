use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Ordered subdivision of a project's work. Belongs to exactly one project.
///
/// `order` defines display and iteration sequence within the project. It is
/// unique in intent; gaps are tolerated and duplicates are not actively
/// repaired. Phases carry no `updated_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phase {
    pub id: String,
    /// Owning project
    pub project_id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub order: u32,
    pub created_at: DateTime<Utc>,
}
