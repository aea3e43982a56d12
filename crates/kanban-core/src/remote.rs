//! Remote Interfaces
//!
//! Data source and mutation surface consumed by the board. Futures are not
//! `Send`: the board runs on a single-threaded event loop.

use async_trait::async_trait;

use crate::error::KanbanResult;
use crate::model::{FetchedTaskList, ItemId, TaskListId, TeamId};

/// Read side
#[async_trait(?Send)]
pub trait TaskListSource {
    /// All task lists of a team, with their checklist items
    async fn fetch_board(&self, team: &TeamId) -> KanbanResult<Vec<FetchedTaskList>>;

    /// One task list with its checklist items
    async fn fetch_items(&self, team: &TeamId, list: &TaskListId) -> KanbanResult<FetchedTaskList>;
}

/// Write side
#[async_trait(?Send)]
pub trait ItemMutations {
    /// Set a single item's completion flag
    async fn set_item_completion(
        &self,
        team: &TeamId,
        list: &TaskListId,
        item: &ItemId,
        completed: bool,
    ) -> KanbanResult<()>;
}
