use super::{Bucket, TodoStore};
use crate::error::Result;
use crate::model::TodoItem;
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    forests: HashMap<Bucket, Vec<TodoItem>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(mut self, bucket: Bucket, items: Vec<TodoItem>) -> Self {
        self.forests.insert(bucket, items);
        self
    }
}

impl TodoStore for InMemoryStore {
    fn load(&self, bucket: Bucket) -> Result<Vec<TodoItem>> {
        Ok(self.forests.get(&bucket).cloned().unwrap_or_default())
    }

    fn save(&mut self, bucket: Bucket, items: &[TodoItem]) -> Result<()> {
        self.forests.insert(bucket, items.to_vec());
        Ok(())
    }
}
