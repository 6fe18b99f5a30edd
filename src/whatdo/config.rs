use crate::error::{Result, WhatdoError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_TODO_FILE: &str = "todos.json";
const DEFAULT_COMPLETED_FILE: &str = "completed.json";

/// Configuration for whatdo, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WhatdoConfig {
    /// Active todo list; relative paths resolve against the data directory
    #[serde(default = "default_todo_file")]
    pub todo_file_path: PathBuf,

    /// Archive of completed items; relative paths resolve against the data directory
    #[serde(default = "default_completed_file")]
    pub completed_file_path: PathBuf,

    #[serde(default)]
    pub obsidian_vault_path: Option<PathBuf>,

    #[serde(default)]
    pub obsidian_vault_name: Option<String>,

    /// Daily notes folder, relative to the vault
    #[serde(default)]
    pub daily_notes_path: Option<PathBuf>,

    #[serde(default = "default_hours_per_day")]
    pub hours_per_day: f32,

    #[serde(default)]
    pub work_weekends: bool,
}

fn default_todo_file() -> PathBuf {
    PathBuf::from(DEFAULT_TODO_FILE)
}

fn default_completed_file() -> PathBuf {
    PathBuf::from(DEFAULT_COMPLETED_FILE)
}

fn default_hours_per_day() -> f32 {
    8.0
}

impl Default for WhatdoConfig {
    fn default() -> Self {
        Self {
            todo_file_path: default_todo_file(),
            completed_file_path: default_completed_file(),
            obsidian_vault_path: None,
            obsidian_vault_name: None,
            daily_notes_path: None,
            hours_per_day: default_hours_per_day(),
            work_weekends: false,
        }
    }
}

impl WhatdoConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(WhatdoError::Io)?;
        let config: WhatdoConfig =
            serde_json::from_str(&content).map_err(WhatdoError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(WhatdoError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(WhatdoError::Serialization)?;
        fs::write(config_path, content).map_err(WhatdoError::Io)?;
        Ok(())
    }

    pub fn todo_file(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.todo_file_path)
    }

    pub fn completed_file(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.completed_file_path)
    }

    /// The vault root, or a config error naming the missing key.
    pub fn vault_path(&self) -> Result<&Path> {
        self.obsidian_vault_path
            .as_deref()
            .ok_or_else(|| WhatdoError::Config("obsidian_vault_path is not set".to_string()))
    }
}
