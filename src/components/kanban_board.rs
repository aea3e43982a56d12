//! Kanban Board Component
//!
//! Three columns plus the global drag-and-drop wiring.

use kanban_core::{Column, DropTarget, TaskListId};
use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::components::BoardColumn;
use crate::context::BoardContext;

/// Drag state keyed by task list, dropped on lists or columns
pub type BoardDnd = DndSignals<TaskListId, DropTarget>;

#[component]
pub fn KanbanBoard() -> impl IntoView {
    let ctx = use_context::<BoardContext>().expect("BoardContext should be provided");

    // Create DnD signals
    let dnd: BoardDnd = create_dnd_signals(ctx.config().drag_threshold_px);

    // Gesture start/end are forwarded to the drag coordinator
    bind_global_mouseup(
        dnd,
        move |list| ctx.drag_started(list),
        move |list, target| ctx.drag_ended(list, target),
    );

    let board_class = move || {
        if dnd.dragging_id.with(Option::is_some) {
            "kanban-board dragging"
        } else {
            "kanban-board"
        }
    };

    view! {
        <div class=board_class>
            {Column::ALL
                .into_iter()
                .map(|column| view! { <BoardColumn column=column dnd=dnd /> })
                .collect_view()}
        </div>
    }
}
