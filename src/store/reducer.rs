use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::model::{AppState, Phase, Project, Task, TaskPriority, TaskStatus};
use crate::store::action::{Action, NewPhase, NewTask, PhasePatch, ProjectPatch, TaskPatch};
use crate::util::id::IdGen;

/// Side inputs the reducer needs: the current instant for timestamps and
/// the id generator for new entities. Injected so `reduce` stays a pure
/// function of its arguments.
pub struct ReduceCx<'a> {
    pub now: DateTime<Utc>,
    pub ids: &'a mut IdGen,
}

/// The authoritative state-transition function. Total and synchronous:
/// every action yields a valid successor state, actions naming a missing id
/// are no-ops, and cascading deletes happen within a single transition.
pub fn reduce(mut state: AppState, action: Action, cx: &mut ReduceCx<'_>) -> AppState {
    match action {
        Action::LoadState(snapshot) => snapshot,

        Action::SetActiveProject(id) => {
            state.active_project_id = id;
            state
        }

        Action::CreateProject {
            project,
            template_phases,
        } => {
            let project_id = cx.ids.generate("proj", cx.now);
            for (i, template) in template_phases.into_iter().enumerate() {
                state.phases.push(Phase {
                    id: cx.ids.generate("phase", cx.now),
                    project_id: project_id.clone(),
                    name: template.name,
                    description: template.description,
                    order: i as u32,
                    created_at: cx.now,
                });
            }
            state.projects.push(Project {
                id: project_id.clone(),
                name: project.name,
                description: project.description,
                emoji: project.emoji,
                color: project.color,
                created_at: cx.now,
                updated_at: cx.now,
            });
            state.active_project_id = Some(project_id);
            state
        }

        Action::UpdateProject { id, patch } => {
            if let Some(project) = state.projects.iter_mut().find(|p| p.id == id) {
                apply_project_patch(project, patch);
                project.updated_at = cx.now;
            }
            state
        }

        Action::DeleteProject(id) => {
            let doomed_phases: HashSet<String> = state
                .phases
                .iter()
                .filter(|p| p.project_id == id)
                .map(|p| p.id.clone())
                .collect();
            state.projects.retain(|p| p.id != id);
            state.phases.retain(|p| p.project_id != id);
            state.tasks.retain(|t| !doomed_phases.contains(&t.phase_id));
            if state.active_project_id.as_deref() == Some(id.as_str()) {
                state.active_project_id = None;
            }
            state
        }

        Action::CreatePhase(new) => {
            let NewPhase {
                project_id,
                name,
                description,
                order,
            } = new;
            let order = order.unwrap_or_else(|| next_phase_order(&state, &project_id));
            state.phases.push(Phase {
                id: cx.ids.generate("phase", cx.now),
                project_id,
                name,
                description,
                order,
                created_at: cx.now,
            });
            state
        }

        Action::UpdatePhase { id, patch } => {
            if let Some(phase) = state.phases.iter_mut().find(|p| p.id == id) {
                apply_phase_patch(phase, patch);
            }
            state
        }

        Action::DeletePhase(id) => {
            state.phases.retain(|p| p.id != id);
            state.tasks.retain(|t| t.phase_id != id);
            state
        }

        Action::ReorderPhases { ordered_ids, .. } => {
            for phase in &mut state.phases {
                if let Some(idx) = ordered_ids.iter().position(|id| *id == phase.id) {
                    phase.order = idx as u32;
                }
            }
            state
        }

        Action::CreateTask(new) => {
            let NewTask {
                phase_id,
                title,
                description,
                status,
                priority,
                assignee,
                due_date,
                tags,
                references,
            } = new;
            state.tasks.push(Task {
                id: cx.ids.generate("task", cx.now),
                phase_id,
                title,
                description,
                status: status.unwrap_or(TaskStatus::Todo),
                priority: priority.unwrap_or(TaskPriority::Medium),
                assignee,
                due_date,
                tags,
                references,
                created_at: cx.now,
                updated_at: cx.now,
            });
            state
        }

        Action::UpdateTask { id, patch } => {
            if let Some(task) = state.tasks.iter_mut().find(|t| t.id == id) {
                apply_task_patch(task, patch);
                task.updated_at = cx.now;
            }
            state
        }

        Action::DeleteTask(id) => {
            state.tasks.retain(|t| t.id != id);
            state
        }

        Action::UpdateTaskStatus { id, status } => {
            if let Some(task) = state.tasks.iter_mut().find(|t| t.id == id) {
                task.status = status;
                task.updated_at = cx.now;
            }
            state
        }

        Action::BulkUpdateStatus { ids, status } => {
            let ids: HashSet<&str> = ids.iter().map(String::as_str).collect();
            for task in &mut state.tasks {
                if ids.contains(task.id.as_str()) {
                    task.status = status;
                    task.updated_at = cx.now;
                }
            }
            state
        }
    }
}

/// One past the highest existing order in the project, or 0 for the first
/// phase. Saturates so a caller-supplied `u32::MAX` order cannot panic the
/// reducer.
fn next_phase_order(state: &AppState, project_id: &str) -> u32 {
    state
        .phases
        .iter()
        .filter(|p| p.project_id == project_id)
        .map(|p| p.order)
        .max()
        .map_or(0, |max| max.saturating_add(1))
}

fn apply_project_patch(project: &mut Project, patch: ProjectPatch) {
    if let Some(name) = patch.name {
        project.name = name;
    }
    if let Some(description) = patch.description {
        project.description = description;
    }
    if let Some(emoji) = patch.emoji {
        project.emoji = emoji;
    }
    if let Some(color) = patch.color {
        project.color = color;
    }
}

fn apply_phase_patch(phase: &mut Phase, patch: PhasePatch) {
    if let Some(name) = patch.name {
        phase.name = name;
    }
    if let Some(description) = patch.description {
        phase.description = description;
    }
    if let Some(order) = patch.order {
        phase.order = order;
    }
}

fn apply_task_patch(task: &mut Task, patch: TaskPatch) {
    if let Some(title) = patch.title {
        task.title = title;
    }
    if let Some(description) = patch.description {
        task.description = description;
    }
    if let Some(status) = patch.status {
        task.status = status;
    }
    if let Some(priority) = patch.priority {
        task.priority = priority;
    }
    if let Some(assignee) = patch.assignee {
        task.assignee = assignee;
    }
    if let Some(due_date) = patch.due_date {
        task.due_date = due_date;
    }
    if let Some(tags) = patch.tags {
        task.tags = tags;
    }
    if let Some(references) = patch.references {
        task.references = references;
    }
    if let Some(phase_id) = patch.phase_id {
        task.phase_id = phase_id;
    }
}
