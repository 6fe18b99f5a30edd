use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "whatdo")]
#[command(version, about = "A simple CLI for managing your daily todos", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new todo item
    #[command(alias = "a")]
    Add {
        /// Text of the todo item
        item: String,

        /// Due date (YYYY-MM-DD or YYYY-MM-DDTHH:MM)
        #[arg(long)]
        due_date: Option<String>,

        /// Priority, lower is more urgent
        #[arg(long)]
        priority: Option<u32>,

        /// Estimated time, free form (e.g. 30m, 2h)
        #[arg(long)]
        estimated_time: Option<String>,

        /// Comma separated tags
        #[arg(long)]
        tags: Option<String>,

        /// ID of the parent todo item
        #[arg(long)]
        parent_id: Option<String>,
    },

    /// Remove a todo item by its ID, including sub-items
    #[command(alias = "rm")]
    Remove { item_id: String },

    /// Mark a todo item as complete by ID
    #[command(alias = "done")]
    Complete { item_id: String },

    /// Move fully completed items to the archive
    Update,

    /// List todo items
    #[command(alias = "ls")]
    List {
        /// Show the archive instead of the active list
        #[arg(long)]
        archived: bool,

        /// One line per item, without nesting
        #[arg(long)]
        flat: bool,
    },

    /// Show the single most urgent open item
    Next,

    /// Import a markdown checklist
    Import {
        /// Markdown file to import
        #[arg(required_unless_present = "daily", conflicts_with = "daily")]
        file: Option<PathBuf>,

        /// Import the daily note from the configured vault
        #[arg(long)]
        daily: bool,

        /// Date of the daily note (defaults to today)
        #[arg(long, requires = "daily")]
        date: Option<String>,
    },

    /// Show the effective configuration and store paths
    Config,
}
