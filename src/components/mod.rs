//! UI Components
//!
//! Board, columns and task list cards.

mod kanban_board;
mod board_column;
mod task_list_card;
mod checklist_row;

pub use kanban_board::{BoardDnd, KanbanBoard};
pub use board_column::BoardColumn;
pub use task_list_card::TaskListCard;
pub use checklist_row::ChecklistRow;
