//! Status Deriver
//!
//! Default column from checklist completion.

use crate::column::Column;
use crate::model::ChecklistItem;

/// None done (or no items) -> todo, all done -> done, otherwise in progress.
pub fn derive_column(items: &[ChecklistItem]) -> Column {
    let completed = items.iter().filter(|item| item.completed).count();
    match completed {
        0 => Column::Todo,
        n if n == items.len() => Column::Done,
        _ => Column::InProgress,
    }
}
