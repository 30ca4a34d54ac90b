use serde::{Deserialize, Serialize};

use super::phase::Phase;
use super::project::Project;
use super::task::Task;

/// The root, serializable application state: flat collections of projects,
/// phases, and tasks plus the active-project selection.
///
/// This is also the persisted snapshot shape (local blob and remote row).
/// Every field defaults, so partial snapshots with missing top-level keys
/// load as empty collections rather than failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub phases: Vec<Phase>,
    #[serde(default)]
    pub tasks: Vec<Task>,
    /// Either `None` or the id of a project present in `projects`
    #[serde(default)]
    pub active_project_id: Option<String>,
}

impl AppState {
    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn phase(&self, id: &str) -> Option<&Phase> {
        self.phases.iter().find(|p| p.id == id)
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Phases of one project, ascending by `order`
    pub fn project_phases(&self, project_id: &str) -> Vec<&Phase> {
        let mut phases: Vec<&Phase> = self
            .phases
            .iter()
            .filter(|p| p.project_id == project_id)
            .collect();
        phases.sort_by_key(|p| p.order);
        phases
    }

    /// Tasks of one phase, in insertion order
    pub fn phase_tasks(&self, phase_id: &str) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.phase_id == phase_id).collect()
    }
}
