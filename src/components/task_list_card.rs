//! Task List Card Component
//!
//! Draggable card: title, progress badge, checklist.

use kanban_core::{DropTarget, TaskList};
use leptos::prelude::*;
use leptos_dragdrop::{make_on_mousedown, make_on_target_mouseover};

use crate::components::{BoardDnd, ChecklistRow};

#[component]
pub fn TaskListCard(list: TaskList, dnd: BoardDnd) -> impl IntoView {
    let id = list.id.clone();
    let (completed, total) = list.progress();

    // DnD handlers
    let on_mousedown = make_on_mousedown(dnd, id.clone());
    let on_mouseover = make_on_target_mouseover(dnd, DropTarget::List(id.clone()));

    // Visual state
    let is_dragging = {
        let id = id.clone();
        move || dnd.dragging_id.with(|dragging| dragging.as_ref() == Some(&id))
    };
    let is_drop_target = {
        let id = id.clone();
        move || dnd.drop_target.with(|target| matches!(target, Some(DropTarget::List(tid)) if *tid == id))
    };
    let card_class = move || {
        let mut c = String::from("task-list-card");
        if is_dragging() { c.push_str(" dragging"); }
        if is_drop_target() { c.push_str(" drop-target"); }
        c
    };

    let body = if list.items.is_empty() {
        view! { <p class="task-list-empty">"No items"</p> }.into_any()
    } else {
        let rows = list
            .items
            .into_iter()
            .map(|item| view! { <ChecklistRow list_id=id.clone() item=item /> })
            .collect_view();
        view! { <ul class="checklist">{rows}</ul> }.into_any()
    };

    view! {
        <article class=card_class on:mousedown=on_mousedown on:mouseover=on_mouseover>
            <header class="task-list-card-header">
                <h3 class="task-list-title">{list.title}</h3>
                <span class="task-list-progress">{format!("{}/{}", completed, total)}</span>
            </header>
            {body}
        </article>
    }
}
