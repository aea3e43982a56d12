//! Transition Executor
//!
//! Applies transitions to the board. The synchronous half (`stage`) edits the
//! working copy and writes the placement override; the async half (`settle`)
//! issues item updates and the mandatory refetch.

use futures::future::join_all;
use log::{debug, info, warn};

use crate::error::KanbanResult;
use crate::model::{FetchedTaskList, ItemId, TaskListId, TeamId};
use crate::placement::PlacementStore;
use crate::reconcile::Board;
use crate::remote::{ItemMutations, TaskListSource};
use crate::transition::{side_effect, ItemUpdate, Transition};

/// Remote work left over after a column crossing was staged
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settlement {
    list: TaskListId,
    updates: Vec<ItemUpdate>,
}

impl Settlement {
    pub fn list(&self) -> &TaskListId {
        &self.list
    }

    pub fn updates(&self) -> &[ItemUpdate] {
        &self.updates
    }
}

pub struct TransitionExecutor<'a, S: ?Sized, M: ?Sized, D: ?Sized> {
    team: &'a TeamId,
    store: &'a S,
    mutations: &'a M,
    source: &'a D,
}

impl<'a, S, M, D> TransitionExecutor<'a, S, M, D>
where
    S: PlacementStore + ?Sized,
    M: ItemMutations + ?Sized,
    D: TaskListSource + ?Sized,
{
    pub fn new(team: &'a TeamId, store: &'a S, mutations: &'a M, source: &'a D) -> Self {
        Self { team, store, mutations, source }
    }

    /// Apply the in-memory part of a transition.
    ///
    /// Reorders return `None`: nothing is persisted for them. Moves write the
    /// override before returning, so it lands ahead of any remote call.
    pub fn stage(&self, board: &mut Board, transition: &Transition) -> Option<Settlement> {
        match transition {
            Transition::Reorder { list, column, from, to } => {
                debug!("reorder {} in {}: {} -> {}", list, column, from, to);
                board.reorder_within_column(*column, *from, *to);
                None
            }
            Transition::Move { list, from, to, position } => {
                self.store.set(self.team, list, *to);

                let items = board.find(list).map(|l| l.items.clone()).unwrap_or_default();
                board.move_to_column(list, *to, *position);

                let updates = side_effect(*from, *to).plan(&items);
                info!("move {}: {} -> {} ({} item updates)", list, from, to, updates.len());
                Some(Settlement { list: list.clone(), updates })
            }
        }
    }

    /// Issue every item update concurrently, then refetch the list.
    ///
    /// Individual update failures are logged and dropped; the refetch runs
    /// once all of them have settled, whatever their outcome.
    pub async fn settle(&self, settlement: Settlement) -> KanbanResult<FetchedTaskList> {
        let Settlement { list, updates } = settlement;
        let list_ref = &list;

        let calls = updates.iter().map(|update| async move {
            let result = self
                .mutations
                .set_item_completion(self.team, list_ref, &update.item, update.completed)
                .await;
            (update, result)
        });
        for (update, result) in join_all(calls).await {
            if let Err(e) = result {
                warn!("item {} in {} not updated: {}", update.item, list_ref, e);
            }
        }

        self.source.fetch_items(self.team, &list).await
    }

    /// Stage, settle and fold the refetched list back into the board.
    pub async fn apply(&self, board: &mut Board, transition: &Transition) -> KanbanResult<()> {
        let Some(settlement) = self.stage(board, transition) else {
            return Ok(());
        };
        let refreshed = self.settle(settlement).await?;
        board.accept_list(refreshed, self.store);
        Ok(())
    }

    /// A single checkbox change from the card, followed by a refetch.
    pub async fn toggle_item(&self, list: &TaskListId, item: &ItemId, checked: bool) -> KanbanResult<FetchedTaskList> {
        if let Err(e) = self.mutations.set_item_completion(self.team, list, item, checked).await {
            warn!("item {} in {} not updated: {}", item, list, e);
        }
        self.source.fetch_items(self.team, list).await
    }
}
