//! Query and mutation handlers over the store. Queries are read-only and
//! side-effect free; mutations run load-validate-mutate-save and fail
//! without touching the table when validation or lookup fails.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::schema::{self, TaskIndex};
use crate::store::Store;
use crate::task::{self, Priority, Task, User};

/// Input for [`create_task`].
#[derive(Debug, Clone)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
    pub owner_id: String,
}

/// Partial update for [`update_task`]. `None` leaves a field alone; for
/// the clearable fields the inner `Option` distinguishes clearing from
/// keeping.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub completed: Option<bool>,
    pub priority: Option<Priority>,
    pub due_date: Option<Option<NaiveDate>>,
}

/// All tasks owned by `owner_id`, newest first.
#[instrument(skip(store))]
pub fn list_tasks(store: &Store, owner_id: &str) -> Result<Vec<Task>> {
    query_tasks(store, TaskIndex::ByOwner { owner_id })
}

/// The owner's tasks matching the completion flag, newest first.
#[instrument(skip(store))]
pub fn list_tasks_by_status(store: &Store, owner_id: &str, completed: bool) -> Result<Vec<Task>> {
    query_tasks(
        store,
        TaskIndex::ByOwnerCompleted {
            owner_id,
            completed,
        },
    )
}

/// The owner's tasks matching the priority, newest first.
#[instrument(skip(store))]
pub fn list_tasks_by_priority(
    store: &Store,
    owner_id: &str,
    priority: Priority,
) -> Result<Vec<Task>> {
    query_tasks(store, TaskIndex::ByOwnerPriority { owner_id, priority })
}

fn query_tasks(store: &Store, index: TaskIndex<'_>) -> Result<Vec<Task>> {
    let mut rows: Vec<Task> = store
        .load_tasks()?
        .into_iter()
        .filter(|task| index.matches(task))
        .collect();
    sort_newest_first(&mut rows);
    Ok(rows)
}

fn sort_newest_first(rows: &mut [Task]) {
    rows.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    });
}

/// Validates and inserts a new task, returning its identifier. The record
/// starts out not completed with `created_at == updated_at`.
#[instrument(skip(store, new_task), fields(owner_id = %new_task.owner_id))]
pub fn create_task(store: &Store, new_task: NewTask) -> Result<Uuid> {
    let now = Utc::now();
    let title = task::normalize_title(&new_task.title)?;
    let description = task::normalize_description(new_task.description.as_deref())?;

    let mut tasks = store.load_tasks()?;
    let record = Task::new(
        title,
        description,
        new_task.priority,
        new_task.due_date,
        new_task.owner_id,
        now,
    );
    let id = record.id;
    tasks.push(record);
    store.save_tasks(&tasks)?;

    info!(%id, "task created");
    Ok(id)
}

/// Applies a partial update. Supplied title/description go through the
/// same validation as on create, before the record is looked up, so an
/// invalid patch never reports NotFound. `updated_at` always advances.
#[instrument(skip(store, patch), fields(id = %id))]
pub fn update_task(store: &Store, id: Uuid, patch: TaskPatch) -> Result<()> {
    let now = Utc::now();

    let title = patch
        .title
        .as_deref()
        .map(task::normalize_title)
        .transpose()?;
    let description = match patch.description {
        Some(Some(raw)) => Some(task::normalize_description(Some(&raw))?),
        Some(None) => Some(None),
        None => None,
    };

    let mut tasks = store.load_tasks()?;
    let record = tasks
        .iter_mut()
        .find(|task| task.id == id)
        .ok_or(Error::NotFound(id))?;

    if let Some(title) = title {
        record.title = title;
    }
    if let Some(description) = description {
        record.description = description;
    }
    if let Some(completed) = patch.completed {
        record.completed = completed;
    }
    if let Some(priority) = patch.priority {
        record.priority = priority;
    }
    if let Some(due_date) = patch.due_date {
        record.due_date = due_date;
    }
    record.updated_at = mutation_timestamp(record.updated_at, now);

    store.save_tasks(&tasks)?;
    Ok(())
}

/// Removes the record. Deleting an id that does not resolve fails with
/// NotFound; see DESIGN.md for the rationale.
#[instrument(skip(store), fields(id = %id))]
pub fn delete_task(store: &Store, id: Uuid) -> Result<()> {
    let mut tasks = store.load_tasks()?;
    let before = tasks.len();
    tasks.retain(|task| task.id != id);
    if tasks.len() == before {
        return Err(Error::NotFound(id));
    }
    store.save_tasks(&tasks)?;

    info!(%id, "task deleted");
    Ok(())
}

/// Flips the completion flag and refreshes `updated_at`.
#[instrument(skip(store), fields(id = %id))]
pub fn toggle_task(store: &Store, id: Uuid) -> Result<()> {
    let now = Utc::now();
    let mut tasks = store.load_tasks()?;
    let record = tasks
        .iter_mut()
        .find(|task| task.id == id)
        .ok_or(Error::NotFound(id))?;

    record.completed = !record.completed;
    record.updated_at = mutation_timestamp(record.updated_at, now);

    store.save_tasks(&tasks)?;
    Ok(())
}

/// Finds a user through the by-email index.
#[instrument(skip(store))]
pub fn find_user_by_email(store: &Store, email: &str) -> Result<Option<User>> {
    let users = store.load_users()?;
    Ok(schema::user_by_email(&users, email).cloned())
}

/// Inserts a user, or refreshes name and image when the email already
/// exists. This is what keeps emails unique within the table.
#[instrument(skip(store, image))]
pub fn upsert_user(store: &Store, name: &str, email: &str, image: Option<&str>) -> Result<User> {
    let mut users = store.load_users()?;

    if let Some(user) = users.iter_mut().find(|user| user.email == email) {
        user.name = name.to_string();
        user.image = image.map(str::to_string);
        let updated = user.clone();
        store.save_users(&users)?;
        return Ok(updated);
    }

    let user = User {
        id: Uuid::new_v4(),
        name: name.to_string(),
        email: email.to_string(),
        image: image.map(str::to_string),
    };
    users.push(user.clone());
    store.save_users(&users)?;

    info!(id = %user.id, "user created");
    Ok(user)
}

// Timestamps persist at millisecond resolution, so two mutations landing
// in the same millisecond would otherwise leave the persisted updated_at
// unchanged.
fn mutation_timestamp(previous: DateTime<Utc>, now: DateTime<Utc>) -> DateTime<Utc> {
    if now.timestamp_millis() > previous.timestamp_millis() {
        now
    } else {
        previous + Duration::milliseconds(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mutation_timestamp_always_advances() {
        let base = Utc::now();
        let same_millis = mutation_timestamp(base, base);
        assert!(same_millis.timestamp_millis() > base.timestamp_millis());
        assert_eq!(
            mutation_timestamp(base, base + Duration::seconds(1)),
            base + Duration::seconds(1)
        );
    }
}
