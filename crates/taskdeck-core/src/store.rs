use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, anyhow};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tempfile::NamedTempFile;
use tracing::{debug, info};
use uuid::Uuid;

use crate::schema;
use crate::task::{Task, User};

/// Document store over a data directory: one JSON-lines file per table,
/// rewritten atomically on every save. Mutation handlers run
/// load-mutate-save, so a single process sees each mutation as one atomic
/// replacement of the table file.
#[derive(Debug)]
pub struct Store {
    pub data_dir: PathBuf,
    pub tasks_path: PathBuf,
    pub users_path: PathBuf,
}

impl Store {
    #[tracing::instrument(skip(data_dir))]
    pub fn open(data_dir: &Path) -> anyhow::Result<Self> {
        let data_dir = data_dir.to_path_buf();
        fs::create_dir_all(&data_dir)
            .with_context(|| format!("failed to create {}", data_dir.display()))?;

        let tasks_path = data_dir.join(schema::TASKS_TABLE);
        let users_path = data_dir.join(schema::USERS_TABLE);

        if !tasks_path.exists() {
            fs::write(&tasks_path, "")?;
        }
        if !users_path.exists() {
            fs::write(&users_path, "")?;
        }

        info!(
            data_dir = %data_dir.display(),
            tasks = %tasks_path.display(),
            users = %users_path.display(),
            "opened datastore"
        );

        Ok(Self {
            data_dir,
            tasks_path,
            users_path,
        })
    }

    #[tracing::instrument(skip(self))]
    pub fn load_tasks(&self) -> anyhow::Result<Vec<Task>> {
        load_jsonl(&self.tasks_path).context("failed to load tasks.data")
    }

    #[tracing::instrument(skip(self, tasks))]
    pub fn save_tasks(&self, tasks: &[Task]) -> anyhow::Result<()> {
        save_jsonl_atomic(&self.tasks_path, tasks).context("failed to save tasks.data")
    }

    #[tracing::instrument(skip(self))]
    pub fn load_users(&self) -> anyhow::Result<Vec<User>> {
        load_jsonl(&self.users_path).context("failed to load users.data")
    }

    #[tracing::instrument(skip(self, users))]
    pub fn save_users(&self, users: &[User]) -> anyhow::Result<()> {
        save_jsonl_atomic(&self.users_path, users).context("failed to save users.data")
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    pub fn get_task(&self, id: Uuid) -> anyhow::Result<Option<Task>> {
        Ok(self.load_tasks()?.into_iter().find(|task| task.id == id))
    }
}

#[tracing::instrument(skip(path))]
fn load_jsonl<T: DeserializeOwned>(path: &Path) -> anyhow::Result<Vec<T>> {
    debug!(file = %path.display(), "loading jsonl");
    let file = fs::File::open(path)?;
    let reader = BufReader::new(file);

    let mut out = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let record: T = serde_json::from_str(trimmed)
            .with_context(|| format!("failed parsing {} line {}", path.display(), idx + 1))?;
        out.push(record);
    }

    debug!(count = out.len(), "loaded records from jsonl");
    Ok(out)
}

#[tracing::instrument(skip(path, records))]
fn save_jsonl_atomic<T: Serialize>(path: &Path, records: &[T]) -> anyhow::Result<()> {
    debug!(file = %path.display(), count = records.len(), "saving jsonl atomically");

    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut temp = NamedTempFile::new_in(dir)?;
    for record in records {
        let serialized = serde_json::to_string(record)?;
        writeln!(temp, "{serialized}")?;
    }
    temp.flush()?;

    temp.persist(path)
        .map_err(|err| anyhow!("failed to persist {}: {}", path.display(), err))?;

    Ok(())
}
