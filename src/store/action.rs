use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::{AppState, Reference, TaskPriority, TaskStatus};

/// Creation payload for a project. Ids and timestamps are always assigned
/// by the reducer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewProject {
    pub name: String,
    pub description: String,
    pub emoji: String,
    pub color: String,
}

/// A phase synthesized alongside a new project; `order` follows the
/// template sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseTemplate {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Creation payload for a phase. `order` defaults to one past the highest
/// existing order within the project; an explicit value overrides that.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewPhase {
    pub project_id: String,
    pub name: String,
    pub description: String,
    pub order: Option<u32>,
}

/// Creation payload for a task. There is deliberately no id field: the
/// reducer always assigns a fresh one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewTask {
    pub phase_id: String,
    pub title: String,
    pub description: String,
    /// Defaults to `Todo`
    pub status: Option<TaskStatus>,
    /// Defaults to `Medium`
    pub priority: Option<TaskPriority>,
    pub assignee: String,
    pub due_date: Option<NaiveDate>,
    pub tags: Vec<String>,
    pub references: Vec<Reference>,
}

/// Partial update for a project; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub emoji: Option<String>,
    pub color: Option<String>,
}

/// Partial update for a phase
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhasePatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub order: Option<u32>,
}

/// Partial update for a task. `due_date` is doubly optional so a patch can
/// distinguish "leave as is" (`None`) from "clear" (`Some(None)`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub assignee: Option<String>,
    pub due_date: Option<Option<NaiveDate>>,
    pub tags: Option<Vec<String>>,
    pub references: Option<Vec<Reference>>,
    /// Moves the task to another phase
    pub phase_id: Option<String>,
}

/// Every way the application state can change. Actions referencing a
/// missing id reduce to a no-op; referential validity of payloads (e.g. a
/// task's `phase_id` naming a real phase) is the caller's responsibility.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Wholesale state replacement, used during hydration
    LoadState(AppState),
    /// No existence check is performed
    SetActiveProject(Option<String>),

    CreateProject {
        project: NewProject,
        template_phases: Vec<PhaseTemplate>,
    },
    UpdateProject {
        id: String,
        patch: ProjectPatch,
    },
    DeleteProject(String),

    CreatePhase(NewPhase),
    UpdatePhase {
        id: String,
        patch: PhasePatch,
    },
    DeletePhase(String),
    /// Listed phases get `order` = index in the list; unlisted phases keep
    /// their order values, so stale gaps can appear (accepted behavior).
    ReorderPhases {
        project_id: String,
        ordered_ids: Vec<String>,
    },

    CreateTask(NewTask),
    UpdateTask {
        id: String,
        patch: TaskPatch,
    },
    DeleteTask(String),
    UpdateTaskStatus {
        id: String,
        status: TaskStatus,
    },
    /// One transition with one shared timestamp across every listed task
    BulkUpdateStatus {
        ids: Vec<String>,
        status: TaskStatus,
    },
}
