//! Kanban Errors

use thiserror::Error;

use crate::model::{ItemId, TaskListId};

/// Errors crossing the remote boundary.
///
/// None of these are fatal to the board: fetch errors are shown by the
/// render layer, mutation errors are swallowed by the executor.
#[derive(Debug, Clone, Error)]
pub enum KanbanError {
    #[error("Failed to fetch {what}: {message}")]
    Fetch { what: String, message: String },

    #[error("Failed to update item {item}: {message}")]
    Mutation { item: ItemId, message: String },

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Unknown task list: {0}")]
    UnknownList(TaskListId),
}

impl KanbanError {
    pub fn fetch(what: impl Into<String>, message: impl ToString) -> Self {
        KanbanError::Fetch {
            what: what.into(),
            message: message.to_string(),
        }
    }

    pub fn mutation(item: &ItemId, message: impl ToString) -> Self {
        KanbanError::Mutation {
            item: item.clone(),
            message: message.to_string(),
        }
    }
}

/// Common result type for kanban operations
pub type KanbanResult<T> = Result<T, KanbanError>;
