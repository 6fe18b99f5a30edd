use crate::model::TodoItem;
use chrono::NaiveDateTime;

pub mod add;
pub mod complete;
pub mod import;
pub mod list;
pub mod next;
pub mod remove;
pub mod update;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_items: Vec<TodoItem>,
    pub listed_items: Vec<TodoItem>,
    pub selected: Option<TodoItem>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_items(mut self, items: Vec<TodoItem>) -> Self {
        self.affected_items = items;
        self
    }

    pub fn with_listed_items(mut self, items: Vec<TodoItem>) -> Self {
        self.listed_items = items;
        self
    }

    pub fn with_selected(mut self, item: Option<TodoItem>) -> Self {
        self.selected = item;
        self
    }
}

/// Everything needed to create a todo item. Only `item` is required.
#[derive(Debug, Clone, Default)]
pub struct NewItem {
    pub item: String,
    pub due_date: Option<NaiveDateTime>,
    pub priority: Option<u32>,
    pub estimated_time: Option<String>,
    pub tags: Option<Vec<String>>,
    /// Attach under this item (at any depth) instead of the top level
    pub parent_id: Option<String>,
}

impl NewItem {
    pub fn new(item: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            ..Self::default()
        }
    }

    pub fn under(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }
}
