//! Board Column Component

use kanban_core::{Column, DropTarget};
use leptos::prelude::*;
use leptos_dragdrop::{make_on_mouseleave, make_on_target_mouseover};

use crate::components::{BoardDnd, TaskListCard};
use crate::context::BoardContext;

/// One lane; its empty area is a drop target for the whole column
#[component]
pub fn BoardColumn(column: Column, dnd: BoardDnd) -> impl IntoView {
    let ctx = use_context::<BoardContext>().expect("BoardContext should be provided");

    let lists = move || {
        ctx.board
            .with(|board| board.lists_in(column).into_iter().cloned().collect::<Vec<_>>())
    };
    let count = move || ctx.board.with(|board| board.lists_in(column).len());

    let is_drop_target = move || {
        dnd.drop_target
            .with(|target| matches!(target, Some(DropTarget::Column(c)) if *c == column))
    };
    let column_class = move || {
        let mut c = format!("board-column column-{}", column.as_str());
        if is_drop_target() { c.push_str(" drop-target"); }
        c
    };

    view! {
        <section
            class=column_class
            on:mouseover=make_on_target_mouseover(dnd, DropTarget::Column(column))
            on:mouseleave=make_on_mouseleave(dnd)
        >
            <header class="board-column-header">
                <span class="board-column-title">{column.title()}</span>
                <span class="board-column-count">{count}</span>
            </header>

            <div class="board-column-body">
                <For
                    each=lists
                    // Whole list as key so checklist changes re-render the card
                    key=|list| list.clone()
                    children=move |list| view! { <TaskListCard list=list dnd=dnd /> }
                />
            </div>
        </section>
    }
}
