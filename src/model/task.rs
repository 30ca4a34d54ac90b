use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Workflow status of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Review,
    Done,
    Blocked,
}

impl TaskStatus {
    /// Human-readable label for display surfaces
    pub fn label(self) -> &'static str {
        match self {
            TaskStatus::Todo => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Review => "Review",
            TaskStatus::Done => "Done",
            TaskStatus::Blocked => "Blocked",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Task priority. Variants are declared ascending so the derived `Ord`
/// gives the total order critical > high > medium > low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
    Critical,
}

impl TaskPriority {
    pub fn label(self) -> &'static str {
        match self {
            TaskPriority::Low => "Low",
            TaskPriority::Medium => "Medium",
            TaskPriority::High => "High",
            TaskPriority::Critical => "Critical",
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A labeled link attached to a task. Order is preserved for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    pub label: String,
    pub url: String,
}

/// A unit of work belonging to exactly one phase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    /// Owning phase
    pub phase_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    #[serde(default)]
    pub assignee: String,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    /// Tag order carries no meaning but is preserved for display
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub references: Vec<Reference>,
    pub created_at: DateTime<Utc>,
    /// Refreshed on every field-level mutation
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn status_serializes_to_kebab_case() {
        assert_eq!(
            serde_json::to_string(&TaskStatus::InProgress).unwrap(),
            r#""in-progress""#
        );
        assert_eq!(serde_json::to_string(&TaskStatus::Todo).unwrap(), r#""todo""#);
        let status: TaskStatus = serde_json::from_str(r#""blocked""#).unwrap();
        assert_eq!(status, TaskStatus::Blocked);
    }

    #[test]
    fn priority_total_order() {
        assert!(TaskPriority::Critical > TaskPriority::High);
        assert!(TaskPriority::High > TaskPriority::Medium);
        assert!(TaskPriority::Medium > TaskPriority::Low);
    }

    #[test]
    fn task_json_uses_camel_case_keys() {
        let task = Task {
            id: "task_1".into(),
            phase_id: "phase_1".into(),
            title: "Wire up login".into(),
            description: String::new(),
            status: TaskStatus::Todo,
            priority: TaskPriority::Medium,
            assignee: String::new(),
            due_date: None,
            tags: vec!["auth".into()],
            references: Vec::new(),
            created_at: "2025-06-01T12:00:00Z".parse().unwrap(),
            updated_at: "2025-06-01T12:00:00Z".parse().unwrap(),
        };
        let json = serde_json::to_string(&task).unwrap();
        assert!(json.contains(r#""phaseId":"phase_1""#));
        assert!(json.contains(r#""dueDate":null"#));
        assert!(json.contains(r#""createdAt":"2025-06-01T12:00:00Z""#));
    }

    #[test]
    fn task_deserializes_with_missing_optional_fields() {
        let json = r#"{
            "id": "task_1",
            "phaseId": "phase_1",
            "title": "Old snapshot task",
            "status": "done",
            "priority": "high",
            "createdAt": "2025-06-01T12:00:00Z",
            "updatedAt": "2025-06-02T08:30:00Z"
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.description, "");
        assert_eq!(task.assignee, "");
        assert_eq!(task.due_date, None);
        assert!(task.tags.is_empty());
        assert!(task.references.is_empty());
    }
}
