use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveDate;
use parking_lot::Mutex;
use taskdeck_core::config::{self, Config};
use taskdeck_core::error::Error;
use taskdeck_core::ops::{self, NewTask};
use taskdeck_core::store::Store;
use taskdeck_core::task::{Priority, Task, User};
use taskdeck_gui_shared::{
    TaskCreate, TaskDto, TaskPatch, TaskPriority, TaskUpdateArgs,
};
use tracing::{debug, info, instrument};
use uuid::Uuid;

/// Backend state: the datastore behind a mutex plus the owner every
/// command is scoped to. The owner is resolved once at startup from the
/// configured name/email.
pub struct AppState {
    store: Mutex<Store>,
    owner_id: String,
}

impl AppState {
    pub fn new() -> anyhow::Result<Self> {
        let cfg = Config::load(None).context("failed to load configuration")?;
        let data_dir = resolve_gui_data_dir(&cfg)?;
        let store = Store::open(&data_dir)
            .with_context(|| format!("failed to open datastore at {}", data_dir.display()))?;

        let owner = resolve_owner(&store, &cfg)?;
        info!(owner_id = %owner.id, email = %owner.email, "resolved local owner");

        Ok(Self {
            store: Mutex::new(store),
            owner_id: owner.id.to_string(),
        })
    }

    #[instrument(skip(self))]
    pub fn list(&self) -> Result<Vec<TaskDto>, Error> {
        let store = self.store.lock();
        let tasks = ops::list_tasks(&store, &self.owner_id)?;
        Ok(tasks.into_iter().map(task_to_dto).collect())
    }

    #[instrument(skip(self))]
    pub fn list_by_status(&self, completed: bool) -> Result<Vec<TaskDto>, Error> {
        let store = self.store.lock();
        let tasks = ops::list_tasks_by_status(&store, &self.owner_id, completed)?;
        Ok(tasks.into_iter().map(task_to_dto).collect())
    }

    #[instrument(skip(self))]
    pub fn list_by_priority(&self, priority: TaskPriority) -> Result<Vec<TaskDto>, Error> {
        let store = self.store.lock();
        let tasks =
            ops::list_tasks_by_priority(&store, &self.owner_id, priority_to_core(priority))?;
        Ok(tasks.into_iter().map(task_to_dto).collect())
    }

    #[instrument(skip(self, create))]
    pub fn create(&self, create: TaskCreate) -> Result<Uuid, Error> {
        let store = self.store.lock();
        let due_date = parse_due_date(create.due_date.as_deref())?;
        let id = ops::create_task(
            &store,
            NewTask {
                title: create.title,
                description: create.description,
                priority: priority_to_core(create.priority),
                due_date,
                owner_id: self.owner_id.clone(),
            },
        )?;
        debug!(%id, "task created via command");
        Ok(id)
    }

    #[instrument(skip(self, update), fields(id = %update.id))]
    pub fn update(&self, update: TaskUpdateArgs) -> Result<(), Error> {
        let store = self.store.lock();
        let patch = patch_to_core(update.patch)?;
        ops::update_task(&store, update.id, patch)
    }

    #[instrument(skip(self), fields(id = %id))]
    pub fn delete(&self, id: Uuid) -> Result<(), Error> {
        let store = self.store.lock();
        ops::delete_task(&store, id)
    }

    #[instrument(skip(self), fields(id = %id))]
    pub fn toggle(&self, id: Uuid) -> Result<(), Error> {
        let store = self.store.lock();
        ops::toggle_task(&store, id)
    }
}

fn resolve_gui_data_dir(cfg: &Config) -> anyhow::Result<PathBuf> {
    if let Ok(path) = std::env::var("TASKDECK_GUI_DATA") {
        return Ok(PathBuf::from(path));
    }
    config::resolve_data_dir(cfg, None)
}

fn resolve_owner(store: &Store, cfg: &Config) -> anyhow::Result<User> {
    let name = cfg
        .get("owner.name")
        .unwrap_or_else(|| "Local User".to_string());
    let email = cfg
        .get("owner.email")
        .unwrap_or_else(|| "local@taskdeck".to_string());
    let image = cfg.get("owner.image");

    ops::upsert_user(store, &name, &email, image.as_deref())
        .map_err(anyhow::Error::new)
        .context("failed to resolve owner user")
}

fn priority_to_core(priority: TaskPriority) -> Priority {
    match priority {
        TaskPriority::Low => Priority::Low,
        TaskPriority::Medium => Priority::Medium,
        TaskPriority::High => Priority::High,
    }
}

fn priority_from_core(priority: Priority) -> TaskPriority {
    match priority {
        Priority::Low => TaskPriority::Low,
        Priority::Medium => TaskPriority::Medium,
        Priority::High => TaskPriority::High,
    }
}

fn task_to_dto(task: Task) -> TaskDto {
    TaskDto {
        id: task.id,
        title: task.title,
        description: task.description,
        completed: task.completed,
        priority: priority_from_core(task.priority),
        due_date: task.due_date.map(|date| date.format("%Y-%m-%d").to_string()),
        created_at: task.created_at.timestamp_millis(),
        updated_at: task.updated_at.timestamp_millis(),
        owner_id: task.owner_id,
    }
}

/// An absent or empty due date means "no due date"; anything else must be
/// a `YYYY-MM-DD` calendar date.
fn parse_due_date(raw: Option<&str>) -> Result<Option<NaiveDate>, Error> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| Error::validation("Due date must be in YYYY-MM-DD format"))
}

fn patch_to_core(patch: TaskPatch) -> Result<ops::TaskPatch, Error> {
    let due_date = match patch.due_date.as_deref() {
        None => None,
        Some(raw) if raw.trim().is_empty() => Some(None),
        Some(raw) => Some(parse_due_date(Some(raw))?),
    };

    Ok(ops::TaskPatch {
        title: patch.title,
        // Core normalization turns a whitespace-only description into an
        // absent one, so an empty string clears the field.
        description: patch.description.map(Some),
        completed: patch.completed,
        priority: patch.priority.map(priority_to_core),
        due_date,
    })
}
