//! Board Models
//!
//! Rendered task lists plus the wire shape returned by the data source.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::column::Column;

/// Server ids arrive as either JSON strings or numbers
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(serde_json::Number),
}

impl RawId {
    fn into_string(self) -> String {
        match self {
            RawId::Text(s) => s,
            RawId::Number(n) => n.to_string(),
        }
    }
}

macro_rules! opaque_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                RawId::deserialize(deserializer).map(|raw| Self(raw.into_string()))
            }
        }
    };
}

opaque_id!(
    /// Team that owns a board
    TeamId
);
opaque_id!(
    /// Server-assigned task list id
    TaskListId
);
opaque_id!(
    /// Checklist item id, stable across refetches
    ItemId
);

/// A checklist row as rendered
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: ItemId,
    pub text: String,
    pub completed: bool,
}

impl ChecklistItem {
    pub fn new(id: impl Into<ItemId>, text: impl Into<String>, completed: bool) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            completed,
        }
    }
}

/// A task list with its reconciled column.
///
/// `column` is recomputed on every reconciliation and never sent back to
/// the server.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskList {
    pub id: TaskListId,
    pub title: String,
    pub items: Vec<ChecklistItem>,
    pub column: Column,
}

impl TaskList {
    /// (completed, total)
    pub fn progress(&self) -> (usize, usize) {
        let completed = self.items.iter().filter(|item| item.completed).count();
        (completed, self.items.len())
    }
}

/// Checklist item as returned by the data source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchedItem {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub completed_at: Option<Value>,
}

impl FetchedItem {
    /// Any non-null completion timestamp counts as completed
    pub fn is_completed(&self) -> bool {
        matches!(&self.completed_at, Some(v) if !v.is_null())
    }
}

/// Task list as returned by the data source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchedTaskList {
    pub id: TaskListId,
    pub name: String,
    #[serde(default)]
    pub items: Vec<FetchedItem>,
}

impl FetchedTaskList {
    pub fn checklist(&self) -> Vec<ChecklistItem> {
        self.items
            .iter()
            .map(|item| ChecklistItem {
                id: item.id.clone(),
                text: item.name.clone(),
                completed: item.is_completed(),
            })
            .collect()
    }

    /// Server-side completion of one item, if the list still has it
    pub fn item_completed(&self, item: &ItemId) -> Option<bool> {
        self.items.iter().find(|i| &i.id == item).map(FetchedItem::is_completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_data_source_payload() {
        let json = r#"{
            "id": 42,
            "name": "Release",
            "items": [
                {"id": "a", "name": "Tag build", "completedAt": "2026-10-01T09:00:00Z"},
                {"id": 7, "name": "Publish notes", "completedAt": null},
                {"id": "c", "name": "Announce"}
            ]
        }"#;
        let list: FetchedTaskList = serde_json::from_str(json).unwrap();
        assert_eq!(list.id.as_str(), "42");

        let checklist = list.checklist();
        assert_eq!(checklist.len(), 3);
        assert!(checklist[0].completed);
        assert_eq!(checklist[1].id, ItemId::from("7"));
        assert!(!checklist[1].completed);
        assert!(!checklist[2].completed);
    }

    #[test]
    fn test_item_completed_lookup() {
        let json = r#"{"id":"l1","name":"L","items":[{"id":"a","name":"A","completedAt":"2026-10-01"},{"id":"b","name":"B"}]}"#;
        let list: FetchedTaskList = serde_json::from_str(json).unwrap();
        assert_eq!(list.item_completed(&"a".into()), Some(true));
        assert_eq!(list.item_completed(&"b".into()), Some(false));
        assert_eq!(list.item_completed(&"gone".into()), None);
    }

    #[test]
    fn test_missing_items_decode_as_empty() {
        let list: FetchedTaskList = serde_json::from_str(r#"{"id":"l1","name":"Empty"}"#).unwrap();
        assert!(list.items.is_empty());
    }

    #[test]
    fn test_progress_counts_completed() {
        let list = TaskList {
            id: "l1".into(),
            title: "List".to_string(),
            items: vec![
                ChecklistItem::new("a", "A", true),
                ChecklistItem::new("b", "B", false),
            ],
            column: Column::InProgress,
        };
        assert_eq!(list.progress(), (1, 2));
    }
}
