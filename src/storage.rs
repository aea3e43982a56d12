//! Placement Overrides in localStorage

use kanban_core::{parse_placement, placement_key, Column, PlacementStore, TaskListId, TeamId};
use log::warn;

/// Device-local placement store.
///
/// Disabled storage, quota errors and corrupt values all read as "no
/// override"; failed writes are logged and dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalStoragePlacementStore {
    prefix: String,
}

impl LocalStoragePlacementStore {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self { prefix: prefix.into() }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl PlacementStore for LocalStoragePlacementStore {
    fn get(&self, team: &TeamId, list: &TaskListId) -> Option<Column> {
        let key = placement_key(&self.prefix, team, list);
        let raw = Self::storage()?.get_item(&key).ok().flatten();
        parse_placement(raw.as_deref())
    }

    fn set(&self, team: &TeamId, list: &TaskListId, column: Column) {
        let key = placement_key(&self.prefix, team, list);
        let Some(storage) = Self::storage() else {
            warn!("localStorage unavailable, override for {} not saved", list);
            return;
        };
        if let Err(e) = storage.set_item(&key, column.as_str()) {
            warn!("failed to save override {}: {:?}", key, e);
        }
    }
}
