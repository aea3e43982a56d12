//! Kanban Core
//!
//! Reconciliation engine behind the team board.
//!
//! Layered, leaf-first:
//! - status: checklist progress -> default column
//! - placement: device-local column overrides
//! - reconcile: fetched lists + overrides -> rendered board (confirmed/pending)
//! - drag: gesture start/end -> proposed transition
//! - transition: (from, to) side-effect table
//! - executor: applies transitions, issues item updates, refetches

mod column;
mod error;
mod model;
mod status;
mod placement;
mod reconcile;
mod drag;
mod transition;
mod executor;
mod remote;


pub use column::Column;
pub use error::{KanbanError, KanbanResult};
pub use model::{ChecklistItem, FetchedItem, FetchedTaskList, ItemId, TaskList, TaskListId, TeamId};
pub use status::derive_column;
pub use placement::{parse_placement, placement_key, MemoryPlacementStore, PlacementStore, PLACEMENT_KEY_PREFIX};
pub use reconcile::{reconcile, Board};
pub use drag::{DragCoordinator, DropTarget};
pub use transition::{side_effect, ItemUpdate, Position, SideEffect, Transition};
pub use executor::{Settlement, TransitionExecutor};
pub use remote::{ItemMutations, TaskListSource};
