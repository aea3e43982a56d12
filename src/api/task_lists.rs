//! Task List Endpoints

use async_trait::async_trait;
use kanban_core::{
    FetchedTaskList, ItemId, ItemMutations, KanbanError, KanbanResult, TaskListId, TaskListSource, TeamId,
};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::HttpApi;

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct CompletionArgs {
    completed: bool,
}

// ========================
// Requests
// ========================

async fn get_json<T: DeserializeOwned>(url: &str, what: &str) -> KanbanResult<T> {
    let response = reqwest::get(url)
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|e| KanbanError::fetch(what, e))?;
    response.json::<T>().await.map_err(|e| KanbanError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl TaskListSource for HttpApi {
    async fn fetch_board(&self, team: &TeamId) -> KanbanResult<Vec<FetchedTaskList>> {
        let url = self.url(&["teams", team.as_str(), "task-lists"]);
        get_json(&url, "task lists").await
    }

    async fn fetch_items(&self, team: &TeamId, list: &TaskListId) -> KanbanResult<FetchedTaskList> {
        let url = self.url(&["teams", team.as_str(), "task-lists", list.as_str()]);
        get_json(&url, &format!("task list {}", list)).await
    }
}

#[async_trait(?Send)]
impl ItemMutations for HttpApi {
    async fn set_item_completion(
        &self,
        team: &TeamId,
        list: &TaskListId,
        item: &ItemId,
        completed: bool,
    ) -> KanbanResult<()> {
        let url = self.url(&["teams", team.as_str(), "task-lists", list.as_str(), "items", item.as_str()]);
        reqwest::Client::new()
            .patch(&url)
            .json(&CompletionArgs { completed })
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| KanbanError::mutation(item, e))?;
        Ok(())
    }
}
