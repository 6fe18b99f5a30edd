//! # Whatdo Architecture
//!
//! Whatdo is a **small todo-list library** with a command-line client on top. The
//! tree logic knows nothing about terminals or argument parsing; the binary is one
//! consumer of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints trees and messages              │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Load the forest, mutate it, save it back                 │
//! │  - Returns `CmdResult`, never prints                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (model, tree, sweep, select, markdown)                │
//! │  - Pure functions over an owned `TodoItem` forest           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - `TodoStore` trait                                        │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Forest
//!
//! Todos form a forest: an ordered list of top-level [`model::TodoItem`]s, each owning
//! its `sub_items`. Ownership is the tree itself. `parent_id` is kept on every child as
//! a lookup aid only, so there are no back pointers and no cycles.
//!
//! Two forests are persisted: the active list and the archive of completed items.
//! Every command reads the whole active forest, works on it in memory, and writes it
//! back in one go. There is no locking; the last writer wins.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per user-facing operation
//! - [`model`]: `TodoItem` and input normalization
//! - [`tree`]: Recursive add/remove/complete/find
//! - [`sweep`]: Splitting fully completed items from the active forest
//! - [`select`]: Picking the most urgent open item
//! - [`markdown`]: Checklist import
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Configuration file
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod markdown;
pub mod model;
pub mod select;
pub mod store;
pub mod sweep;
pub mod tree;
