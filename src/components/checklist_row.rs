//! Checklist Row Component

use kanban_core::{ChecklistItem, TaskListId};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::BoardContext;

/// A checklist item with its checkbox. Mousedown on the checkbox or label
/// never starts a drag.
#[component]
pub fn ChecklistRow(list_id: TaskListId, item: ChecklistItem) -> impl IntoView {
    let ctx = use_context::<BoardContext>().expect("BoardContext should be provided");

    let ChecklistItem { id, text, completed } = item;
    let on_change = move |ev: web_sys::Event| {
        let checked = event_target_checked(&ev);
        let input = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());
        // An unchanged refetch does not re-render the row, so put the
        // checkbox back to whatever the server kept.
        ctx.item_checked_changed(list_id.clone(), id.clone(), checked, move |confirmed| {
            if let Some(input) = input {
                input.set_checked(confirmed.unwrap_or(completed));
            }
        });
    };

    view! {
        <li class=if completed { "checklist-row completed" } else { "checklist-row" }>
            <label class="checklist-label">
                <input type="checkbox" prop:checked=completed on:change=on_change />
                <span class="checklist-text">{text}</span>
            </label>
        </li>
    }
}
