use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{Bucket, TodoStore};
use crate::sweep::sweep_completed;
use tracing::info;

/// Moves fully completed top-level items into the archive.
///
/// Archived items are appended after whatever the archive already holds.
pub fn run<S: TodoStore>(store: &mut S) -> Result<CmdResult> {
    let forest = store.load(Bucket::Active)?;
    let sweep = sweep_completed(forest);

    let mut result = CmdResult::default();
    if sweep.completed.is_empty() {
        result.add_message(CmdMessage::info("Nothing to archive"));
        return Ok(result);
    }

    // Archive first: a failure between the two writes leaves items duplicated
    // in both files rather than lost.
    let mut archive = store.load(Bucket::Archived)?;
    archive.extend(sweep.completed.iter().cloned());
    store.save(Bucket::Archived, &archive)?;
    store.save(Bucket::Active, &sweep.remaining)?;

    info!(
        archived = sweep.completed.len(),
        remaining = sweep.remaining.len(),
        "swept completed items"
    );
    result.add_message(CmdMessage::success(format!(
        "Updated todo list: archived {} item(s)",
        sweep.completed.len()
    )));
    Ok(result.with_affected_items(sweep.completed))
}
