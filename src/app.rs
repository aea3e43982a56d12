//! Team Board App
//!
//! Loads the board and renders the three-column layout.

use kanban_core::TaskListSource;
use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{debug, error, info};

use crate::components::KanbanBoard;
use crate::config::BoardConfig;
use crate::context::BoardContext;

#[component]
pub fn App(config: BoardConfig) -> impl IntoView {
    let ctx = BoardContext::new(config);
    let (load_error, set_load_error) = signal(None::<String>);

    // Provide context to all children
    provide_context(ctx);

    // Load board on mount and whenever a reload is triggered
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        spawn_local(async move {
            let (team, api, store) = (ctx.team(), ctx.api(), ctx.placement_store());
            debug!("loading board for team {}, trigger={}", team, trigger);
            match api.fetch_board(&team).await {
                Ok(lists) => {
                    info!("loaded {} task lists", lists.len());
                    ctx.board.maybe_update(|board| board.accept_fetch(lists, &store));
                    set_load_error.set(None);
                }
                Err(e) => {
                    error!("board load failed: {}", e);
                    set_load_error.set(Some(e.to_string()));
                }
            }
        });
    });

    let list_count = move || ctx.board.with(|board| board.lists().len());

    view! {
        <div class="app-layout">
            <main class="main-content">
                <h1>"Team Board"</h1>

                {move || load_error.get().map(|message| view! {
                    <div class="load-error">
                        <span>{message}</span>
                        <button on:click=move |_| ctx.reload()>"Retry"</button>
                    </div>
                })}

                <KanbanBoard />

                <p class="item-count">{move || format!("{} task lists", list_count())}</p>
            </main>
        </div>
    }
}
