use crate::error::{Result, WhatdoError};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A single task, owning its sub-items.
///
/// The tree is held by value: each item owns its `sub_items` exclusively.
/// `parent_id` mirrors the owning item's id once attached and is never used to
/// walk the tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoItem {
    pub item: String,
    pub item_id: String,
    pub due_date: Option<NaiveDateTime>,
    /// Lower is more urgent.
    pub priority: Option<u32>,
    pub estimated_time: Option<String>,
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub completed: bool,
    pub date_completed: Option<DateTime<Utc>>,
    pub parent_id: Option<String>,
    #[serde(default)]
    pub sub_items: Vec<TodoItem>,
}

impl TodoItem {
    pub fn new(item: impl Into<String>) -> Self {
        Self::with_id(item, generate_id())
    }

    pub fn with_id(item: impl Into<String>, item_id: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            item_id: item_id.into(),
            due_date: None,
            priority: None,
            estimated_time: None,
            tags: None,
            completed: false,
            date_completed: None,
            parent_id: None,
            sub_items: Vec::new(),
        }
    }

    pub fn with_due_date(mut self, due_date: Option<NaiveDateTime>) -> Self {
        self.due_date = due_date;
        self
    }

    pub fn with_priority(mut self, priority: Option<u32>) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_estimated_time(mut self, estimated_time: Option<String>) -> Self {
        self.estimated_time = estimated_time;
        self
    }

    pub fn with_tags(mut self, tags: Option<Vec<String>>) -> Self {
        self.tags = tags;
        self
    }

    /// Attaches `sub_item` as the last child of this item.
    ///
    /// Ids are not checked for duplicates; callers generating fresh ids get
    /// uniqueness for free.
    pub fn add_sub_item(&mut self, mut sub_item: TodoItem) {
        sub_item.parent_id = Some(self.item_id.clone());
        self.sub_items.push(sub_item);
    }

    /// Marks the item completed. The first completion time sticks.
    pub fn complete(&mut self, now: DateTime<Utc>) {
        self.completed = true;
        if self.date_completed.is_none() {
            self.date_completed = Some(now);
        }
    }

    /// Checks the mandatory fields of this item and all its descendants.
    pub fn validate(&self) -> Result<()> {
        if self.item.trim().is_empty() {
            return Err(WhatdoError::MissingField("item"));
        }
        if self.item_id.trim().is_empty() {
            return Err(WhatdoError::MissingField("item_id"));
        }
        self.sub_items.iter().try_for_each(TodoItem::validate)
    }
}

impl fmt::Display for TodoItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Completed: {})", self.item, self.completed)
    }
}

pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

/// Parses a due date given as `YYYY-MM-DD` (midnight) or `YYYY-MM-DDTHH:MM[:SS]`.
pub fn parse_due_date(input: &str) -> Result<NaiveDateTime> {
    let input = input.trim();
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN));
    }
    for format in [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, format) {
            return Ok(dt);
        }
    }
    Err(WhatdoError::Api(format!("Invalid due date: {}", input)))
}

/// Splits a comma separated tag list. Returns `None` when nothing is left.
pub fn parse_tags(input: &str) -> Option<Vec<String>> {
    let tags: Vec<String> = input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect();
    if tags.is_empty() {
        None
    } else {
        Some(tags)
    }
}
