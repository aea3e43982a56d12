//! Board Context
//!
//! Shared state and render-adapter callbacks provided via Leptos Context API.

use kanban_core::{Board, Column, DragCoordinator, DropTarget, ItemId, TaskListId, TeamId, Transition, TransitionExecutor};
use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{debug, info, warn};

use crate::api::HttpApi;
use crate::config::BoardConfig;
use crate::storage::LocalStoragePlacementStore;

/// Board-wide signals provided via context
#[derive(Clone, Copy)]
pub struct BoardContext {
    /// Reconciled board (confirmed + pending)
    pub board: RwSignal<Board>,
    /// Trigger to reload the board from the data source - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload the board from the data source - write
    set_reload_trigger: WriteSignal<u32>,
    config: StoredValue<BoardConfig>,
    drag: StoredValue<DragCoordinator>,
}

impl BoardContext {
    pub fn new(config: BoardConfig) -> Self {
        let (reload_trigger, set_reload_trigger) = signal(0u32);
        Self {
            board: RwSignal::new(Board::new(config.team())),
            reload_trigger,
            set_reload_trigger,
            config: StoredValue::new(config),
            drag: StoredValue::new(DragCoordinator::new()),
        }
    }

    /// Trigger a full reload of the board
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn config(&self) -> BoardConfig {
        self.config.get_value()
    }

    pub fn team(&self) -> TeamId {
        self.config.with_value(BoardConfig::team)
    }

    pub fn api(&self) -> HttpApi {
        self.config.with_value(|config| HttpApi::new(config.api_base_url.clone()))
    }

    pub fn placement_store(&self) -> LocalStoragePlacementStore {
        self.config.with_value(|config| LocalStoragePlacementStore::new(config.storage_prefix.clone()))
    }

    // ========================
    // Render adapter callbacks
    // ========================

    /// onDragStart
    pub fn drag_started(&self, list: TaskListId) {
        self.drag.update_value(|drag| drag.start(list));
    }

    /// onDragEnd
    pub fn drag_ended(&self, list: TaskListId, target: Option<DropTarget>) {
        let drag = self.drag;
        let transition = self
            .board
            .with_untracked(|board| drag.try_update_value(|drag| drag.end(&list, target.as_ref(), board)))
            .flatten();
        match transition {
            Some(transition) => self.apply_transition(transition),
            None => debug!("drag of {} ended without a transition", list),
        }
    }

    /// onColumnChange
    pub fn column_changed(&self, list: &TaskListId, from: Column, to: Column) {
        info!("task list {} moved {} -> {}", list, from, to);
    }

    /// onItemCheckedChange
    ///
    /// `on_settled` receives the item's completion as the server reports it
    /// after the refetch, or `None` when the refetch failed.
    pub fn item_checked_changed<F>(&self, list: TaskListId, item: ItemId, checked: bool, on_settled: F)
    where
        F: FnOnce(Option<bool>) + 'static,
    {
        let ctx = *self;
        let (team, store, api) = (self.team(), self.placement_store(), self.api());
        spawn_local(async move {
            let executor = TransitionExecutor::new(&team, &store, &api, &api);
            match executor.toggle_item(&list, &item, checked).await {
                Ok(refreshed) => {
                    on_settled(refreshed.item_completed(&item));
                    ctx.board.maybe_update(|board| board.accept_list(refreshed, &store));
                }
                Err(e) => {
                    warn!("refetch of {} failed: {}", list, e);
                    on_settled(None);
                    ctx.reload();
                }
            }
        });
    }

    fn apply_transition(&self, transition: Transition) {
        if let Transition::Move { list, from, to, .. } = &transition {
            self.column_changed(list, *from, *to);
        }

        let (team, store, api) = (self.team(), self.placement_store(), self.api());
        let settlement = self
            .board
            .try_update(|board| TransitionExecutor::new(&team, &store, &api, &api).stage(board, &transition))
            .flatten();
        let Some(settlement) = settlement else {
            return;
        };

        let ctx = *self;
        spawn_local(async move {
            let executor = TransitionExecutor::new(&team, &store, &api, &api);
            match executor.settle(settlement).await {
                Ok(refreshed) => ctx.board.maybe_update(|board| board.accept_list(refreshed, &store)),
                Err(e) => {
                    warn!("refetch after move failed: {}", e);
                    ctx.reload();
                }
            }
        });
    }
}
