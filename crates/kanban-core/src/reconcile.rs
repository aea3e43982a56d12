//! Reconciler
//!
//! Combines fetched checklist state with placement overrides, and keeps the
//! optimistic working copy that drag transitions edit in place.

use log::debug;

use crate::column::Column;
use crate::model::{FetchedTaskList, TaskList, TaskListId, TeamId};
use crate::placement::PlacementStore;
use crate::status::derive_column;
use crate::transition::Position;

/// Resolve every fetched list to its rendered column.
///
/// Pure: the same lists and overrides always give an equal result.
pub fn reconcile<S>(team: &TeamId, fetched: &[FetchedTaskList], store: &S) -> Vec<TaskList>
where
    S: PlacementStore + ?Sized,
{
    fetched.iter().map(|list| resolve(team, list, store)).collect()
}

fn resolve<S>(team: &TeamId, list: &FetchedTaskList, store: &S) -> TaskList
where
    S: PlacementStore + ?Sized,
{
    let items = list.checklist();
    let column = store
        .get(team, &list.id)
        .unwrap_or_else(|| derive_column(&items));
    TaskList {
        id: list.id.clone(),
        title: list.name.clone(),
        items,
        column,
    }
}

/// Last accepted server state
#[derive(Debug, Clone, PartialEq, Default)]
struct Confirmed {
    generation: u64,
    fetched: Vec<FetchedTaskList>,
    lists: Vec<TaskList>,
}

/// Local edits made on top of a confirmed generation
#[derive(Debug, Clone, PartialEq)]
struct Pending {
    base_generation: u64,
    lists: Vec<TaskList>,
}

/// Board state for one team.
///
/// Confirmed state advances its generation only when the fetched payload
/// actually changes; advancing always discards the pending working copy.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    team: TeamId,
    confirmed: Confirmed,
    pending: Option<Pending>,
}

impl Board {
    pub fn new(team: TeamId) -> Self {
        Self {
            team,
            confirmed: Confirmed::default(),
            pending: None,
        }
    }

    pub fn team(&self) -> &TeamId {
        &self.team
    }

    /// Generation of the confirmed state (0 = nothing fetched yet)
    pub fn generation(&self) -> u64 {
        self.confirmed.generation
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Accept a full-board fetch. Returns true if the generation advanced.
    pub fn accept_fetch<S>(&mut self, fetched: Vec<FetchedTaskList>, store: &S) -> bool
    where
        S: PlacementStore + ?Sized,
    {
        if self.confirmed.generation > 0 && self.confirmed.fetched == fetched {
            return false;
        }
        self.confirm(fetched, store);
        true
    }

    /// Accept a refetch of a single list. Unknown lists are appended.
    pub fn accept_list<S>(&mut self, list: FetchedTaskList, store: &S) -> bool
    where
        S: PlacementStore + ?Sized,
    {
        let mut fetched = self.confirmed.fetched.clone();
        match fetched.iter_mut().find(|existing| existing.id == list.id) {
            Some(existing) if *existing == list => return false,
            Some(existing) => *existing = list,
            None => fetched.push(list),
        }
        self.confirm(fetched, store);
        true
    }

    fn confirm<S>(&mut self, fetched: Vec<FetchedTaskList>, store: &S)
    where
        S: PlacementStore + ?Sized,
    {
        let lists = reconcile(&self.team, &fetched, store);
        self.confirmed = Confirmed {
            generation: self.confirmed.generation + 1,
            fetched,
            lists,
        };
        if self.pending.take().is_some() {
            debug!(
                "board {}: generation {} replaced pending edits",
                self.team, self.confirmed.generation
            );
        }
    }

    /// Lists as they should be rendered right now
    pub fn lists(&self) -> &[TaskList] {
        match &self.pending {
            Some(pending) if pending.base_generation == self.confirmed.generation => &pending.lists,
            _ => &self.confirmed.lists,
        }
    }

    pub fn find(&self, id: &TaskListId) -> Option<&TaskList> {
        self.lists().iter().find(|list| &list.id == id)
    }

    pub fn column_of(&self, id: &TaskListId) -> Option<Column> {
        self.find(id).map(|list| list.column)
    }

    /// Lists in one column, in display order
    pub fn lists_in(&self, column: Column) -> Vec<&TaskList> {
        self.lists().iter().filter(|list| list.column == column).collect()
    }

    /// (column, index within that column)
    pub fn index_in_column(&self, id: &TaskListId) -> Option<(Column, usize)> {
        let column = self.column_of(id)?;
        let index = self
            .lists()
            .iter()
            .filter(|list| list.column == column)
            .position(|list| &list.id == id)?;
        Some((column, index))
    }

    fn working_copy(&mut self) -> &mut Vec<TaskList> {
        let generation = self.confirmed.generation;
        let confirmed = &self.confirmed.lists;
        let pending = self
            .pending
            .get_or_insert_with(|| Pending {
                base_generation: generation,
                lists: confirmed.clone(),
            });
        &mut pending.lists
    }

    /// Move the list at `from` to `to` within one column; the others shift by one.
    pub fn reorder_within_column(&mut self, column: Column, from: usize, to: usize) -> bool {
        let len = self.lists_in(column).len();
        if from == to || from >= len || to >= len {
            return false;
        }

        let lists = self.working_copy();
        let slots: Vec<usize> = lists
            .iter()
            .enumerate()
            .filter(|(_, list)| list.column == column)
            .map(|(i, _)| i)
            .collect();
        let mut ordered: Vec<TaskList> = slots.iter().map(|&i| lists[i].clone()).collect();
        let moved = ordered.remove(from);
        ordered.insert(to, moved);
        for (slot, list) in slots.into_iter().zip(ordered) {
            lists[slot] = list;
        }
        true
    }

    /// Re-tag a list with `to` and place it at `position` in that column.
    pub fn move_to_column(&mut self, id: &TaskListId, to: Column, position: Position) -> bool {
        if self.find(id).is_none() {
            return false;
        }

        let lists = self.working_copy();
        let Some(at) = lists.iter().position(|list| &list.id == id) else {
            return false;
        };
        let mut list = lists.remove(at);
        list.column = to;

        let insert_at = match position {
            Position::Index(n) => lists
                .iter()
                .enumerate()
                .filter(|(_, other)| other.column == to)
                .nth(n)
                .map(|(i, _)| i),
            Position::Append => None,
        };
        match insert_at {
            Some(i) => lists.insert(i, list),
            None => lists.push(list),
        }
        true
    }
}
