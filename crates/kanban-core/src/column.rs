//! Board Columns

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kanban lane a task list occupies.
///
/// Serialized tags are the ones written to the placement store, so they must
/// stay stable across releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Column {
    #[default]
    Todo,
    InProgress,
    Done,
}

impl Column {
    /// Board order, left to right
    pub const ALL: [Column; 3] = [Column::Todo, Column::InProgress, Column::Done];

    pub fn as_str(&self) -> &'static str {
        match self {
            Column::Todo => "todo",
            Column::InProgress => "inProgress",
            Column::Done => "done",
        }
    }

    /// Parse a stored tag. Anything outside the three tags is rejected.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "todo" => Some(Column::Todo),
            "inProgress" => Some(Column::InProgress),
            "done" => Some(Column::Done),
            _ => None,
        }
    }

    /// Column header text
    pub fn title(&self) -> &'static str {
        match self {
            Column::Todo => "To Do",
            Column::InProgress => "In Progress",
            Column::Done => "Done",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
