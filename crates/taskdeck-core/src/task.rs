use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Error;

pub const TITLE_MAX_CHARS: usize = 200;
pub const DESCRIPTION_MAX_CHARS: usize = 1000;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

/// A single tracked task. Timestamps serialize as epoch milliseconds and
/// due dates as `YYYY-MM-DD`, matching the persisted record layout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: Uuid,

    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    pub completed: bool,

    pub priority: Priority,

    #[serde(default)]
    pub due_date: Option<NaiveDate>,

    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,

    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub updated_at: DateTime<Utc>,

    pub owner_id: String,
}

impl Task {
    /// Builds a fresh, not-yet-completed task. `created_at` and
    /// `updated_at` start out equal.
    pub fn new(
        title: String,
        description: Option<String>,
        priority: Priority,
        due_date: Option<NaiveDate>,
        owner_id: String,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            description,
            completed: false,
            priority,
            due_date,
            created_at: now,
            updated_at: now,
            owner_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// Checks the raw title against the length cap, then trims it. The cap
/// applies to the untrimmed input, so padding a maximal title with
/// whitespace still fails.
pub fn normalize_title(raw: &str) -> Result<String, Error> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Error::validation("Task title cannot be empty"));
    }
    if raw.chars().count() > TITLE_MAX_CHARS {
        return Err(Error::validation("Task title cannot exceed 200 characters"));
    }
    Ok(trimmed.to_string())
}

/// Trims an optional description; whitespace-only input normalizes to
/// `None`. The length cap applies before trimming.
pub fn normalize_description(raw: Option<&str>) -> Result<Option<String>, Error> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    if raw.chars().count() > DESCRIPTION_MAX_CHARS {
        return Err(Error::validation(
            "Task description cannot exceed 1000 characters",
        ));
    }
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Ok(None)
    } else {
        Ok(Some(trimmed.to_string()))
    }
}
