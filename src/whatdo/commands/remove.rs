use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{Bucket, TodoStore};
use crate::tree::{count_items, remove_by_id};
use tracing::info;

/// Removes the item and its sub-items. Unknown ids are not an error.
pub fn run<S: TodoStore>(store: &mut S, item_id: &str) -> Result<CmdResult> {
    let forest = store.load(Bucket::Active)?;
    let before = count_items(&forest);
    let forest = remove_by_id(forest, item_id);
    let removed = before - count_items(&forest);

    let mut result = CmdResult::default();
    if removed == 0 {
        result.add_message(CmdMessage::info(format!(
            "No todo item with ID: {}",
            item_id
        )));
        return Ok(result);
    }

    store.save(Bucket::Active, &forest)?;
    info!(id = item_id, removed, "removed todo item");
    result.add_message(CmdMessage::success(format!(
        "Removed todo item with ID: {} ({} item(s) total)",
        item_id, removed
    )));
    Ok(result)
}
