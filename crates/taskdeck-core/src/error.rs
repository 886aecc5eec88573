use thiserror::Error as ThisError;
use uuid::Uuid;

/// Failure modes of the query and mutation handlers.
///
/// `Validation` and `NotFound` are terminal for the triggering action and
/// are surfaced to the user verbatim; `Store` wraps IO and serialization
/// failures bubbling up from the datastore layer.
#[derive(Debug, ThisError)]
pub enum Error {
    #[error("{0}")]
    Validation(String),

    #[error("task not found: {0}")]
    NotFound(Uuid),

    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

impl Error {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
