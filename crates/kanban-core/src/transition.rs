//! Column Transitions
//!
//! Transition values emitted by the drag coordinator, and the (from, to)
//! table that decides which checklist items a column change touches.

use crate::column::Column;
use crate::model::{ChecklistItem, ItemId, TaskListId};

/// Where a moved list lands in its new column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// Take this index; lists at and after it shift down
    Index(usize),
    /// After the last list in the column
    Append,
}

/// One completed drag gesture
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Same column; in-memory only
    Reorder {
        list: TaskListId,
        column: Column,
        from: usize,
        to: usize,
    },
    /// Column crossing; writes the override and updates checklist items
    Move {
        list: TaskListId,
        from: Column,
        to: Column,
        position: Position,
    },
}

impl Transition {
    pub fn list(&self) -> &TaskListId {
        match self {
            Transition::Reorder { list, .. } | Transition::Move { list, .. } => list,
        }
    }
}

/// Checklist side effect of a column change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideEffect {
    None,
    /// Mark every incomplete item completed
    CompleteAllIncomplete,
    /// Mark every completed item incomplete
    ReopenAllCompleted,
    /// Mark the first item completed
    CompleteFirst,
    /// Mark the last completed item (by checklist order) incomplete
    ReopenLastCompleted,
}

/// The full 3x3 matrix. Every cell is spelled out.
pub fn side_effect(from: Column, to: Column) -> SideEffect {
    use Column::*;

    match (from, to) {
        (Todo, Todo) => SideEffect::ReopenAllCompleted,
        (Todo, InProgress) => SideEffect::CompleteFirst,
        (Todo, Done) => SideEffect::CompleteAllIncomplete,

        (InProgress, Todo) => SideEffect::ReopenAllCompleted,
        (InProgress, InProgress) => SideEffect::None,
        (InProgress, Done) => SideEffect::CompleteAllIncomplete,

        (Done, Todo) => SideEffect::ReopenAllCompleted,
        (Done, InProgress) => SideEffect::ReopenLastCompleted,
        (Done, Done) => SideEffect::CompleteAllIncomplete,
    }
}

/// A single remote completion update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemUpdate {
    pub item: ItemId,
    pub completed: bool,
}

impl ItemUpdate {
    fn complete(item: &ChecklistItem) -> Self {
        Self { item: item.id.clone(), completed: true }
    }

    fn reopen(item: &ChecklistItem) -> Self {
        Self { item: item.id.clone(), completed: false }
    }
}

impl SideEffect {
    /// Item updates this effect needs for the given checklist
    pub fn plan(self, items: &[ChecklistItem]) -> Vec<ItemUpdate> {
        match self {
            SideEffect::None => Vec::new(),
            SideEffect::CompleteAllIncomplete => items
                .iter()
                .filter(|item| !item.completed)
                .map(ItemUpdate::complete)
                .collect(),
            SideEffect::ReopenAllCompleted => items
                .iter()
                .filter(|item| item.completed)
                .map(ItemUpdate::reopen)
                .collect(),
            // an already-completed first item needs no call
            SideEffect::CompleteFirst => items
                .first()
                .filter(|item| !item.completed)
                .map(ItemUpdate::complete)
                .into_iter()
                .collect(),
            SideEffect::ReopenLastCompleted => items
                .iter()
                .rev()
                .find(|item| item.completed)
                .map(ItemUpdate::reopen)
                .into_iter()
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checklist(flags: &[bool]) -> Vec<ChecklistItem> {
        flags
            .iter()
            .enumerate()
            .map(|(i, &completed)| ChecklistItem::new(format!("i{}", i), format!("Item {}", i), completed))
            .collect()
    }

    fn update(id: &str, completed: bool) -> ItemUpdate {
        ItemUpdate { item: id.into(), completed }
    }

    #[test]
    fn test_table_targets() {
        for from in Column::ALL {
            assert_eq!(side_effect(from, Column::Done), SideEffect::CompleteAllIncomplete);
            assert_eq!(side_effect(from, Column::Todo), SideEffect::ReopenAllCompleted);
        }
        assert_eq!(side_effect(Column::Todo, Column::InProgress), SideEffect::CompleteFirst);
        assert_eq!(side_effect(Column::Done, Column::InProgress), SideEffect::ReopenLastCompleted);
        assert_eq!(side_effect(Column::InProgress, Column::InProgress), SideEffect::None);
    }

    #[test]
    fn test_complete_all_skips_completed() {
        let plan = SideEffect::CompleteAllIncomplete.plan(&checklist(&[true, false, false]));
        assert_eq!(plan, vec![update("i1", true), update("i2", true)]);
    }

    #[test]
    fn test_reopen_all_skips_incomplete() {
        let plan = SideEffect::ReopenAllCompleted.plan(&checklist(&[true, false, true]));
        assert_eq!(plan, vec![update("i0", false), update("i2", false)]);
    }

    #[test]
    fn test_complete_first_only_touches_index_zero() {
        let plan = SideEffect::CompleteFirst.plan(&checklist(&[false, false, false]));
        assert_eq!(plan, vec![update("i0", true)]);
        assert!(SideEffect::CompleteFirst.plan(&checklist(&[true, false])).is_empty());
    }

    #[test]
    fn test_reopen_last_completed_scans_from_end() {
        let plan = SideEffect::ReopenLastCompleted.plan(&checklist(&[true, true, false]));
        assert_eq!(plan, vec![update("i1", false)]);
    }

    #[test]
    fn test_empty_checklist_plans_nothing() {
        for effect in [
            SideEffect::None,
            SideEffect::CompleteAllIncomplete,
            SideEffect::ReopenAllCompleted,
            SideEffect::CompleteFirst,
            SideEffect::ReopenLastCompleted,
        ] {
            assert!(effect.plan(&[]).is_empty());
        }
    }
}
