use crate::commands::{CmdMessage, CmdResult, NewItem};
use crate::error::{Result, WhatdoError};
use crate::model::TodoItem;
use crate::store::{Bucket, TodoStore};
use crate::tree::find_by_id_mut;
use tracing::info;

pub fn run<S: TodoStore>(store: &mut S, new_item: NewItem) -> Result<CmdResult> {
    let text = new_item.item.trim();
    if text.is_empty() {
        return Err(WhatdoError::Api("Item text cannot be empty".into()));
    }

    let mut item = TodoItem::new(text)
        .with_due_date(new_item.due_date)
        .with_priority(new_item.priority)
        .with_estimated_time(new_item.estimated_time)
        .with_tags(new_item.tags);

    let mut forest = store.load(Bucket::Active)?;
    let mut result = CmdResult::default();

    match new_item.parent_id {
        Some(parent_id) => {
            let parent = find_by_id_mut(&mut forest, &parent_id)
                .ok_or_else(|| WhatdoError::ItemNotFound(parent_id.clone()))?;
            parent.add_sub_item(item.clone());
            item.parent_id = Some(parent_id.clone());
            result.add_message(CmdMessage::success(format!(
                "Added sub-item: {} to parent with ID: {}",
                item.item, parent_id
            )));
        }
        None => {
            forest.push(item.clone());
            result.add_message(CmdMessage::success(format!(
                "Added todo item: {}",
                item.item
            )));
        }
    }

    store.save(Bucket::Active, &forest)?;
    info!(id = %item.item_id, "added todo item");
    Ok(result.with_affected_items(vec![item]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::parse_due_date;
    use crate::store::memory::InMemoryStore;
    use crate::tree::{all_ids, find_by_id};

    #[test]
    fn adds_top_level_item_with_fields() {
        let mut store = InMemoryStore::new();
        let new_item = NewItem {
            item: "Write report".into(),
            due_date: Some(parse_due_date("2026-10-30").unwrap()),
            priority: Some(1),
            estimated_time: Some("2h".into()),
            tags: Some(vec!["work".into()]),
            parent_id: None,
        };

        let result = run(&mut store, new_item).unwrap();
        let forest = store.load(Bucket::Active).unwrap();

        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].item, "Write report");
        assert_eq!(forest[0].priority, Some(1));
        assert_eq!(forest[0].tags, Some(vec!["work".to_string()]));
        assert_eq!(result.affected_items[0].item_id, forest[0].item_id);
    }

    #[test]
    fn appends_in_order() {
        let mut store = InMemoryStore::new();
        run(&mut store, NewItem::new("First")).unwrap();
        run(&mut store, NewItem::new("Second")).unwrap();

        let forest = store.load(Bucket::Active).unwrap();
        let texts: Vec<_> = forest.iter().map(|i| i.item.as_str()).collect();
        assert_eq!(texts, vec!["First", "Second"]);
    }

    #[test]
    fn attaches_under_deep_parent() {
        let mut store = InMemoryStore::new();
        let root = run(&mut store, NewItem::new("Root")).unwrap().affected_items[0].clone();
        let child = run(&mut store, NewItem::new("Child").under(&root.item_id))
            .unwrap()
            .affected_items[0]
            .clone();
        let grandchild = run(&mut store, NewItem::new("Grandchild").under(&child.item_id))
            .unwrap()
            .affected_items[0]
            .clone();

        let forest = store.load(Bucket::Active).unwrap();
        assert_eq!(forest.len(), 1);
        assert_eq!(
            all_ids(&forest),
            vec![
                root.item_id.as_str(),
                child.item_id.as_str(),
                grandchild.item_id.as_str()
            ]
        );
        let stored = find_by_id(&forest, &grandchild.item_id).unwrap();
        assert_eq!(stored.parent_id.as_deref(), Some(child.item_id.as_str()));
        assert_eq!(grandchild.parent_id, stored.parent_id);
    }

    #[test]
    fn unknown_parent_is_not_found_and_saves_nothing() {
        let mut store = InMemoryStore::new();
        run(&mut store, NewItem::new("Existing")).unwrap();

        let err = run(&mut store, NewItem::new("Orphan").under("missing")).unwrap_err();
        assert!(matches!(err, WhatdoError::ItemNotFound(id) if id == "missing"));
        assert_eq!(store.load(Bucket::Active).unwrap().len(), 1);
    }

    #[test]
    fn rejects_blank_text() {
        let mut store = InMemoryStore::new();
        assert!(matches!(
            run(&mut store, NewItem::new("   ")),
            Err(WhatdoError::Api(_))
        ));
    }
}
