use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, WhatdoError};
use crate::store::{Bucket, TodoStore};
use crate::tree::{find_by_id, mark_complete};
use chrono::Utc;
use tracing::info;

pub fn run<S: TodoStore>(store: &mut S, item_id: &str) -> Result<CmdResult> {
    let mut forest = store.load(Bucket::Active)?;
    if !mark_complete(&mut forest, item_id, Utc::now()) {
        return Err(WhatdoError::ItemNotFound(item_id.to_string()));
    }
    store.save(Bucket::Active, &forest)?;
    info!(id = item_id, "completed todo item");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Marked todo item with ID: {} as complete",
        item_id
    )));
    let affected = find_by_id(&forest, item_id).cloned().into_iter().collect();
    Ok(result.with_affected_items(affected))
}
