//! Types crossing the webview boundary between the Tauri backend and the
//! Yew frontend.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl TaskPriority {
    pub fn label(self) -> &'static str {
        match self {
            TaskPriority::Low => "Low",
            TaskPriority::Medium => "Medium",
            TaskPriority::High => "High",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TaskPriority::Low => "low",
            TaskPriority::Medium => "medium",
            TaskPriority::High => "high",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "low" => Some(TaskPriority::Low),
            "medium" => Some(TaskPriority::Medium),
            "high" => Some(TaskPriority::High),
            _ => None,
        }
    }
}

/// Completion filter of the task list view. Both filters apply
/// conjunctively and are independent of each other.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    All,
    Completed,
    Pending,
}

impl StatusFilter {
    pub fn accepts(self, completed: bool) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Completed => completed,
            StatusFilter::Pending => !completed,
        }
    }
}

/// Priority filter of the task list view.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PriorityFilter {
    All,
    Low,
    Medium,
    High,
}

impl PriorityFilter {
    pub fn accepts(self, priority: TaskPriority) -> bool {
        match self {
            PriorityFilter::All => true,
            PriorityFilter::Low => priority == TaskPriority::Low,
            PriorityFilter::Medium => priority == TaskPriority::Medium,
            PriorityFilter::High => priority == TaskPriority::High,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskDto {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub completed: bool,
    pub priority: TaskPriority,
    #[serde(default)]
    pub due_date: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
    pub owner_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskCreate {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub priority: TaskPriority,
    #[serde(default)]
    pub due_date: Option<String>,
}

/// Partial update; absent fields are left untouched. Clearable string
/// fields are cleared by sending an empty string, which the backend
/// normalizes to absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
    pub priority: Option<TaskPriority>,
    pub due_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskUpdateArgs {
    pub id: Uuid,
    pub patch: TaskPatch,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskIdArg {
    pub id: Uuid,
}

/// Frontend interaction events forwarded to the backend log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiLogArgs {
    pub event: String,
    pub detail: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TasksByStatusArgs {
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TasksByPriorityArgs {
    pub priority: TaskPriority,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_round_trips_through_lowercase_json() {
        let encoded = serde_json::to_string(&TaskPriority::High).expect("encode");
        assert_eq!(encoded, "\"high\"");
        let decoded: TaskPriority = serde_json::from_str("\"medium\"").expect("decode");
        assert_eq!(decoded, TaskPriority::Medium);
    }

    #[test]
    fn filters_accept_conjunctively_independent_dimensions() {
        assert!(StatusFilter::Pending.accepts(false));
        assert!(!StatusFilter::Pending.accepts(true));
        assert!(StatusFilter::All.accepts(true));
        assert!(PriorityFilter::High.accepts(TaskPriority::High));
        assert!(!PriorityFilter::High.accepts(TaskPriority::Low));
        assert!(PriorityFilter::All.accepts(TaskPriority::Low));
    }

    #[test]
    fn patch_with_absent_fields_decodes_to_defaults() {
        let patch: TaskPatch = serde_json::from_str("{\"priority\":\"high\"}").expect("decode");
        assert!(patch.title.is_none());
        assert!(patch.description.is_none());
        assert!(patch.completed.is_none());
        assert_eq!(patch.priority, Some(TaskPriority::High));
        assert!(patch.due_date.is_none());
    }
}
