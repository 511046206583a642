use crate::modules::projects::adapters::outbound::project_store::StoreError;
use crate::modules::projects::core::status::StatusError;
use crate::shared::infrastructure::cache_store::CacheError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: String },

    #[error("user {user_id} does not own project {project_id}")]
    OwnershipViolation { user_id: String, project_id: String },

    #[error("store unavailable: {0}")]
    StoreUnavailable(String),

    #[error(transparent)]
    InvariantViolation(#[from] StatusError),
}

impl From<StoreError> for ApplicationError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound { entity, id } => ApplicationError::NotFound { entity, id },
            StoreError::Unavailable(reason) => ApplicationError::StoreUnavailable(reason),
        }
    }
}

impl From<CacheError> for ApplicationError {
    fn from(error: CacheError) -> Self {
        ApplicationError::StoreUnavailable(error.to_string())
    }
}

/// Whether the owner's read model generation was advanced after a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Invalidation {
    Done,
    NotNeeded,
    /// The write is kept; cached summaries may lag until their TTL lapses.
    Failed,
}

/// Result of a write that reached the entity store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Committed<T> {
    pub value: T,
    pub invalidation: Invalidation,
}
