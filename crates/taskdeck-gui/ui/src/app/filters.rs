use gloo::console::log;
use taskdeck_gui_shared::{PriorityFilter, StatusFilter, TaskDto};

/// The visible subset of the task collection: both filters must accept a
/// task for it to show.
pub fn visible_tasks(
    tasks: &[TaskDto],
    status: StatusFilter,
    priority: PriorityFilter,
) -> Vec<TaskDto> {
    tasks
        .iter()
        .filter(|task| status.accepts(task.completed) && priority.accepts(task.priority))
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

/// Counts over the unfiltered collection, recomputed on every render.
pub fn task_stats(tasks: &[TaskDto]) -> TaskStats {
    let total = tasks.len();
    let completed = tasks.iter().filter(|task| task.completed).count();
    TaskStats {
        total,
        completed,
        pending: total - completed,
    }
}

pub fn ui_debug(event: &str, detail: &str) {
    tracing::debug!(event, detail, "ui-debug");
    log!(format!("[ui-debug] {event}: {detail}"));
}

#[cfg(test)]
mod tests {
    use taskdeck_gui_shared::TaskPriority;
    use uuid::Uuid;

    use super::*;

    fn task(completed: bool, priority: TaskPriority) -> TaskDto {
        TaskDto {
            id: Uuid::new_v4(),
            title: "sample".to_string(),
            description: None,
            completed,
            priority,
            due_date: None,
            created_at: 1,
            updated_at: 1,
            owner_id: "user-1".to_string(),
        }
    }

    #[test]
    fn pending_high_selects_exactly_the_open_high_tasks() {
        let tasks = vec![
            task(false, TaskPriority::High),
            task(false, TaskPriority::Low),
            task(true, TaskPriority::High),
            task(false, TaskPriority::High),
            task(true, TaskPriority::Medium),
        ];

        let visible = visible_tasks(&tasks, StatusFilter::Pending, PriorityFilter::High);
        assert_eq!(visible.len(), 2);
        assert!(
            visible
                .iter()
                .all(|task| !task.completed && task.priority == TaskPriority::High)
        );
    }

    #[test]
    fn all_filters_pass_everything_through() {
        let tasks = vec![
            task(false, TaskPriority::Low),
            task(true, TaskPriority::High),
        ];
        let visible = visible_tasks(&tasks, StatusFilter::All, PriorityFilter::All);
        assert_eq!(visible, tasks);
    }

    #[test]
    fn stats_always_balance() {
        let tasks = vec![
            task(false, TaskPriority::Low),
            task(true, TaskPriority::High),
            task(true, TaskPriority::Medium),
        ];
        let stats = task_stats(&tasks);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.completed, 2);
        assert_eq!(stats.completed + stats.pending, stats.total);

        let empty = task_stats(&[]);
        assert_eq!(empty.total, 0);
        assert_eq!(empty.completed + empty.pending, empty.total);
    }
}
