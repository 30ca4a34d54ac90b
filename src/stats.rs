//! Derived completion statistics and priority-ordered views over a task
//! collection. Pure functions; consumed by display surfaces.

use crate::model::{Task, TaskStatus};

/// Per-status counts and completion percentage for a set of tasks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub todo: usize,
    pub in_progress: usize,
    pub review: usize,
    pub done: usize,
    pub blocked: usize,
    /// `round(done / total * 100)`, 0 when there are no tasks
    pub pct: u32,
}

pub fn calc_stats(tasks: &[Task]) -> TaskStats {
    let mut stats = TaskStats {
        total: tasks.len(),
        ..TaskStats::default()
    };
    for task in tasks {
        match task.status {
            TaskStatus::Todo => stats.todo += 1,
            TaskStatus::InProgress => stats.in_progress += 1,
            TaskStatus::Review => stats.review += 1,
            TaskStatus::Done => stats.done += 1,
            TaskStatus::Blocked => stats.blocked += 1,
        }
    }
    if stats.total > 0 {
        stats.pct = ((stats.done as f64 / stats.total as f64) * 100.0).round() as u32;
    }
    stats
}

/// Tasks of one phase, highest priority first. The sort is stable, so tasks
/// of equal priority keep their insertion order.
pub fn phase_tasks_sorted<'a>(tasks: &'a [Task], phase_id: &str) -> Vec<&'a Task> {
    let mut out: Vec<&Task> = tasks.iter().filter(|t| t.phase_id == phase_id).collect();
    out.sort_by(|a, b| b.priority.cmp(&a.priority));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TaskPriority;
    use pretty_assertions::assert_eq;

    fn task(id: &str, phase_id: &str, status: TaskStatus, priority: TaskPriority) -> Task {
        Task {
            id: id.into(),
            phase_id: phase_id.into(),
            title: id.into(),
            description: String::new(),
            status,
            priority,
            assignee: String::new(),
            due_date: None,
            tags: Vec::new(),
            references: Vec::new(),
            created_at: "2025-06-01T12:00:00Z".parse().unwrap(),
            updated_at: "2025-06-01T12:00:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn empty_collection_is_all_zero() {
        assert_eq!(calc_stats(&[]), TaskStats::default());
    }

    #[test]
    fn one_done_of_four_is_25_pct() {
        let tasks = vec![
            task("a", "ph", TaskStatus::Done, TaskPriority::Medium),
            task("b", "ph", TaskStatus::Todo, TaskPriority::Medium),
            task("c", "ph", TaskStatus::InProgress, TaskPriority::Medium),
            task("d", "ph", TaskStatus::Blocked, TaskPriority::Medium),
        ];
        let stats = calc_stats(&tasks);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.done, 1);
        assert_eq!(stats.todo, 1);
        assert_eq!(stats.in_progress, 1);
        assert_eq!(stats.blocked, 1);
        assert_eq!(stats.review, 0);
        assert_eq!(stats.pct, 25);
    }

    #[test]
    fn pct_rounds_to_nearest() {
        let tasks = vec![
            task("a", "ph", TaskStatus::Done, TaskPriority::Medium),
            task("b", "ph", TaskStatus::Todo, TaskPriority::Medium),
            task("c", "ph", TaskStatus::Todo, TaskPriority::Medium),
        ];
        // 1/3 -> 33.33 -> 33
        assert_eq!(calc_stats(&tasks).pct, 33);
    }

    #[test]
    fn sorted_view_is_priority_desc_and_stable() {
        let tasks = vec![
            task("low", "ph", TaskStatus::Todo, TaskPriority::Low),
            task("crit-1", "ph", TaskStatus::Todo, TaskPriority::Critical),
            task("other-phase", "elsewhere", TaskStatus::Todo, TaskPriority::Critical),
            task("med-1", "ph", TaskStatus::Todo, TaskPriority::Medium),
            task("crit-2", "ph", TaskStatus::Todo, TaskPriority::Critical),
            task("med-2", "ph", TaskStatus::Todo, TaskPriority::Medium),
        ];
        let sorted: Vec<&str> = phase_tasks_sorted(&tasks, "ph")
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(sorted, vec!["crit-1", "crit-2", "med-1", "med-2", "low"]);
    }
}
