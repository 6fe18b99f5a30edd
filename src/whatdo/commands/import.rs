use crate::commands::{CmdMessage, CmdResult};
use crate::config::WhatdoConfig;
use crate::error::{Result, WhatdoError};
use crate::markdown::{daily_note_path, parse_checklist};
use crate::store::{Bucket, TodoStore};
use crate::tree::count_items;
use chrono::NaiveDate;
use std::fs;
use std::path::Path;
use tracing::info;

/// Imports the checklist in a markdown file, appending it to the active list.
pub fn run<S: TodoStore>(store: &mut S, path: &Path) -> Result<CmdResult> {
    let markdown = fs::read_to_string(path).map_err(WhatdoError::Io)?;
    let imported = parse_checklist(&markdown);

    let mut result = CmdResult::default();
    if imported.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "No checklist items found in: {}",
            path.display()
        )));
        return Ok(result);
    }

    let mut forest = store.load(Bucket::Active)?;
    forest.extend(imported.iter().cloned());
    store.save(Bucket::Active, &forest)?;

    let count = count_items(&imported);
    info!(path = %path.display(), count, "imported checklist");
    result.add_message(CmdMessage::success(format!(
        "Imported {} item(s) from: {}",
        count,
        path.display()
    )));
    Ok(result.with_affected_items(imported))
}

/// Imports the daily note for `date` from the configured vault.
pub fn run_daily<S: TodoStore>(
    store: &mut S,
    config: &WhatdoConfig,
    date: NaiveDate,
) -> Result<CmdResult> {
    let vault = config.vault_path()?;
    let path = daily_note_path(vault, config.daily_notes_path.as_deref(), date);
    if !path.exists() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::warning(format!(
            "No daily note at: {}",
            path.display()
        )));
        return Ok(result);
    }
    run(store, &path)
}
