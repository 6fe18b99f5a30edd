//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for every whatdo operation, whatever the UI.
//!
//! `WhatdoApi<S: TodoStore>` is generic over the storage backend:
//! - Production: `WhatdoApi<FileStore>`
//! - Testing: `WhatdoApi<InMemoryStore>`
//!
//! It holds the configuration explicitly so nothing depends on process-wide state.

use crate::commands;
use crate::config::WhatdoConfig;
use crate::error::Result;
use crate::store::{Bucket, TodoStore};
use chrono::NaiveDate;
use std::path::Path;

pub struct WhatdoApi<S: TodoStore> {
    store: S,
    config: WhatdoConfig,
}

impl<S: TodoStore> WhatdoApi<S> {
    pub fn new(store: S, config: WhatdoConfig) -> Self {
        Self { store, config }
    }

    pub fn add_item(&mut self, new_item: NewItem) -> Result<CmdResult> {
        commands::add::run(&mut self.store, new_item)
    }

    pub fn remove_item(&mut self, item_id: &str) -> Result<CmdResult> {
        commands::remove::run(&mut self.store, item_id)
    }

    pub fn complete_item(&mut self, item_id: &str) -> Result<CmdResult> {
        commands::complete::run(&mut self.store, item_id)
    }

    /// Archives fully completed items.
    pub fn update(&mut self) -> Result<CmdResult> {
        commands::update::run(&mut self.store)
    }

    pub fn list_items(&self, archived: bool) -> Result<CmdResult> {
        let bucket = if archived {
            Bucket::Archived
        } else {
            Bucket::Active
        };
        commands::list::run(&self.store, bucket)
    }

    pub fn next_item(&self) -> Result<CmdResult> {
        commands::next::run(&self.store, &mut rand::thread_rng())
    }

    pub fn import_file(&mut self, path: &Path) -> Result<CmdResult> {
        commands::import::run(&mut self.store, path)
    }

    pub fn import_daily_note(&mut self, date: NaiveDate) -> Result<CmdResult> {
        commands::import::run_daily(&mut self.store, &self.config, date)
    }

    pub fn config(&self) -> &WhatdoConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel, NewItem};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn api() -> WhatdoApi<InMemoryStore> {
        WhatdoApi::new(InMemoryStore::new(), WhatdoConfig::default())
    }

    #[test]
    fn add_complete_update_flow() {
        let mut api = api();
        let id = api.add_item(NewItem::new("Task")).unwrap().affected_items[0]
            .item_id
            .clone();
        api.complete_item(&id).unwrap();
        api.update().unwrap();

        assert!(api.list_items(false).unwrap().listed_items.is_empty());
        assert_eq!(api.list_items(true).unwrap().listed_items[0].item_id, id);
    }

    #[test]
    fn remove_dispatches_to_store() {
        let mut api = api();
        let id = api.add_item(NewItem::new("Task")).unwrap().affected_items[0]
            .item_id
            .clone();
        api.remove_item(&id).unwrap();
        assert!(api.store().load(Bucket::Active).unwrap().is_empty());
    }

    #[test]
    fn next_item_returns_open_item() {
        let mut api = api();
        api.add_item(NewItem::new("Only")).unwrap();
        assert_eq!(api.next_item().unwrap().selected.unwrap().item, "Only");
    }

    #[test]
    fn daily_import_uses_held_config() {
        let mut api = api();
        let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        assert!(api.import_daily_note(date).is_err());
        assert!(api.config().obsidian_vault_path.is_none());
    }
}
