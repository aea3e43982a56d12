//! Placement Store
//!
//! Device-local column overrides keyed by (team, task list).

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::column::Column;
use crate::model::{TaskListId, TeamId};

/// Default key prefix for stored overrides
pub const PLACEMENT_KEY_PREFIX: &str = "taskListColumn";

/// Synchronous override store.
///
/// Implementations never surface errors: unavailable storage, corrupt
/// values and unknown tags all read as `None`. Writes are immediate and
/// last-write-wins.
pub trait PlacementStore {
    fn get(&self, team: &TeamId, list: &TaskListId) -> Option<Column>;

    fn set(&self, team: &TeamId, list: &TaskListId, column: Column);
}

impl<T: PlacementStore + ?Sized> PlacementStore for &T {
    fn get(&self, team: &TeamId, list: &TaskListId) -> Option<Column> {
        (**self).get(team, list)
    }

    fn set(&self, team: &TeamId, list: &TaskListId, column: Column) {
        (**self).set(team, list, column)
    }
}

impl<T: PlacementStore + ?Sized> PlacementStore for Rc<T> {
    fn get(&self, team: &TeamId, list: &TaskListId) -> Option<Column> {
        (**self).get(team, list)
    }

    fn set(&self, team: &TeamId, list: &TaskListId, column: Column) {
        (**self).set(team, list, column)
    }
}

/// Compose the storage key for a (team, list) pair
pub fn placement_key(prefix: &str, team: &TeamId, list: &TaskListId) -> String {
    format!("{}:{}:{}", prefix, team, list)
}

/// Interpret a raw stored value
pub fn parse_placement(raw: Option<&str>) -> Option<Column> {
    raw.and_then(|value| Column::parse(value.trim()))
}

/// String-valued in-memory store with the same semantics as browser storage.
#[derive(Debug, Default)]
pub struct MemoryPlacementStore {
    entries: RefCell<HashMap<String, String>>,
    writes: Cell<usize>,
}

impl MemoryPlacementStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a raw value under a (team, list) key, bypassing tag validation
    pub fn insert_raw(&self, team: &TeamId, list: &TaskListId, raw: &str) {
        self.entries
            .borrow_mut()
            .insert(placement_key(PLACEMENT_KEY_PREFIX, team, list), raw.to_string());
    }

    /// Number of `set` calls so far
    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl PlacementStore for MemoryPlacementStore {
    fn get(&self, team: &TeamId, list: &TaskListId) -> Option<Column> {
        let key = placement_key(PLACEMENT_KEY_PREFIX, team, list);
        parse_placement(self.entries.borrow().get(&key).map(String::as_str))
    }

    fn set(&self, team: &TeamId, list: &TaskListId, column: Column) {
        let key = placement_key(PLACEMENT_KEY_PREFIX, team, list);
        self.entries.borrow_mut().insert(key, column.as_str().to_string());
        self.writes.set(self.writes.get() + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_composes_team_and_list() {
        let key = placement_key(PLACEMENT_KEY_PREFIX, &"team-1".into(), &"list-9".into());
        assert_eq!(key, "taskListColumn:team-1:list-9");
    }

    #[test]
    fn test_get_missing_is_none() {
        let store = MemoryPlacementStore::new();
        assert_eq!(store.get(&"t".into(), &"l".into()), None);
    }

    #[test]
    fn test_set_then_get_last_write_wins() {
        let store = MemoryPlacementStore::new();
        let (team, list) = (TeamId::from("t"), TaskListId::from("l"));
        store.set(&team, &list, Column::Done);
        store.set(&team, &list, Column::InProgress);
        assert_eq!(store.get(&team, &list), Some(Column::InProgress));
        assert_eq!(store.writes(), 2);
    }

    #[test]
    fn test_overrides_are_scoped_per_team() {
        let store = MemoryPlacementStore::new();
        let list = TaskListId::from("l");
        store.set(&"a".into(), &list, Column::Done);
        assert_eq!(store.get(&"b".into(), &list), None);
    }

    #[test]
    fn test_corrupt_value_reads_as_absent() {
        let store = MemoryPlacementStore::new();
        let (team, list) = (TeamId::from("t"), TaskListId::from("l"));
        store.insert_raw(&team, &list, "{\"column\":\"done\"}");
        assert_eq!(store.get(&team, &list), None);
        store.insert_raw(&team, &list, "archived");
        assert_eq!(store.get(&team, &list), None);
    }

    #[test]
    fn test_parse_placement_trims_whitespace() {
        assert_eq!(parse_placement(Some(" done\n")), Some(Column::Done));
        assert_eq!(parse_placement(None), None);
    }
}
