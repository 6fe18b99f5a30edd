//! # Storage Layer
//!
//! This module defines the storage abstraction for whatdo. The [`TodoStore`] trait
//! lets commands load and save whole forests without knowing where they live.
//!
//! ## Buckets
//!
//! Two independent forests are kept:
//! - [`Bucket::Active`]: the working todo list
//! - [`Bucket::Archived`]: fully completed items moved out by `update`
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, one pretty-printed JSON file per bucket
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── config.json       # Paths and settings (optional)
//! ├── todos.json        # Active forest (JSON array of items)
//! └── completed.json    # Archived forest
//! ```
//!
//! Each file is read whole and written whole. A missing file reads as an empty
//! forest; everything else (permissions, malformed JSON, records missing `item`
//! or `item_id`) is an error.

use crate::error::Result;
use crate::model::TodoItem;
use std::fmt;

pub mod fs;
pub mod memory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    Active,
    Archived,
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bucket::Active => write!(f, "active"),
            Bucket::Archived => write!(f, "archived"),
        }
    }
}

/// Abstract interface for todo storage.
pub trait TodoStore {
    /// Load the whole forest of a bucket. Nothing stored yet means an empty forest.
    fn load(&self, bucket: Bucket) -> Result<Vec<TodoItem>>;

    /// Replace the whole forest of a bucket
    fn save(&mut self, bucket: Bucket, items: &[TodoItem]) -> Result<()>;
}
