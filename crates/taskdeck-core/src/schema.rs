//! Persisted table layout and the lookup paths the query layer goes
//! through. The store keeps one JSON-lines file per table inside the data
//! directory.

use crate::task::{Priority, Task, User};

pub const TASKS_TABLE: &str = "tasks.data";
pub const USERS_TABLE: &str = "users.data";

/// Lookup paths over the tasks table. Every query handler narrows the
/// table through exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskIndex<'a> {
    ByOwner {
        owner_id: &'a str,
    },
    ByOwnerCompleted {
        owner_id: &'a str,
        completed: bool,
    },
    ByOwnerPriority {
        owner_id: &'a str,
        priority: Priority,
    },
}

impl TaskIndex<'_> {
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            TaskIndex::ByOwner { owner_id } => task.owner_id == *owner_id,
            TaskIndex::ByOwnerCompleted {
                owner_id,
                completed,
            } => task.owner_id == *owner_id && task.completed == *completed,
            TaskIndex::ByOwnerPriority { owner_id, priority } => {
                task.owner_id == *owner_id && task.priority == *priority
            }
        }
    }
}

/// The by-email lookup over the users table. Uniqueness is maintained by
/// `ops::upsert_user`, not enforced here.
pub fn user_by_email<'a>(users: &'a [User], email: &str) -> Option<&'a User> {
    users.iter().find(|user| user.email == email)
}
