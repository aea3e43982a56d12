//! Drag Coordinator
//!
//! Turns a completed drag gesture into at most one transition. Activation
//! (movement threshold, interactive-control filter) happens in the DOM layer
//! before `start` is ever called.

use log::debug;

use crate::column::Column;
use crate::model::TaskListId;
use crate::reconcile::Board;
use crate::transition::{Position, Transition};

/// What the pointer was over when the drag ended
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DropTarget {
    /// Another task list card
    List(TaskListId),
    /// Empty area of a column
    Column(Column),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragCoordinator {
    active: Option<TaskListId>,
}

impl DragCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, list: TaskListId) {
        debug!("drag start {}", list);
        self.active = Some(list);
    }

    pub fn active(&self) -> Option<&TaskListId> {
        self.active.as_ref()
    }

    /// Resolve the gesture against the board as currently rendered.
    ///
    /// Never touches the board, the store or the network.
    pub fn end(&mut self, list: &TaskListId, target: Option<&DropTarget>, board: &Board) -> Option<Transition> {
        if self.active.take().as_ref() != Some(list) {
            debug!("drag end for {} without matching start", list);
        }
        let target = target?;
        let (source_column, source_index) = board.index_in_column(list)?;

        let transition = match target {
            DropTarget::List(target_id) if target_id == list => return None,
            DropTarget::List(target_id) => {
                let (target_column, target_index) = board.index_in_column(target_id)?;
                if target_column == source_column {
                    Transition::Reorder {
                        list: list.clone(),
                        column: source_column,
                        from: source_index,
                        to: target_index,
                    }
                } else {
                    Transition::Move {
                        list: list.clone(),
                        from: source_column,
                        to: target_column,
                        position: Position::Index(target_index),
                    }
                }
            }
            // empty column area, including the list's own column
            DropTarget::Column(column) => Transition::Move {
                list: list.clone(),
                from: source_column,
                to: *column,
                position: Position::Append,
            },
        };
        debug!("drag end {} -> {:?}", list, transition);
        Some(transition)
    }
}
