use super::{Bucket, TodoStore};
use crate::config::WhatdoConfig;
use crate::error::{Result, WhatdoError};
use crate::model::TodoItem;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct FileStore {
    active_path: PathBuf,
    archive_path: PathBuf,
}

impl FileStore {
    pub fn new(active_path: PathBuf, archive_path: PathBuf) -> Self {
        Self {
            active_path,
            archive_path,
        }
    }

    /// Builds a store from the configured paths, resolving relative ones against `data_dir`.
    pub fn from_config(config: &WhatdoConfig, data_dir: &Path) -> Self {
        Self::new(
            config.todo_file(data_dir),
            config.completed_file(data_dir),
        )
    }

    fn file_for(&self, bucket: Bucket) -> &Path {
        match bucket {
            Bucket::Active => &self.active_path,
            Bucket::Archived => &self.archive_path,
        }
    }

    fn ensure_parent(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(WhatdoError::Io)?;
            }
        }
        Ok(())
    }
}

impl TodoStore for FileStore {
    fn load(&self, bucket: Bucket) -> Result<Vec<TodoItem>> {
        let path = self.file_for(bucket);
        if !path.exists() {
            debug!(%bucket, path = %path.display(), "store file missing, starting empty");
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(path).map_err(WhatdoError::Io)?;
        let items: Vec<TodoItem> =
            serde_json::from_str(&content).map_err(WhatdoError::Serialization)?;
        items.iter().try_for_each(TodoItem::validate)?;

        debug!(%bucket, count = items.len(), "loaded forest");
        Ok(items)
    }

    fn save(&mut self, bucket: Bucket, items: &[TodoItem]) -> Result<()> {
        let path = self.file_for(bucket);
        self.ensure_parent(path)?;

        let content = serde_json::to_string_pretty(items).map_err(WhatdoError::Serialization)?;
        fs::write(path, content).map_err(WhatdoError::Io)?;

        debug!(%bucket, count = items.len(), path = %path.display(), "saved forest");
        Ok(())
    }
}
