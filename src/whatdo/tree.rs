//! Recursive operations over a forest of [`TodoItem`]s.
//!
//! The functions here assume `item_id` is unique across the forest but do not
//! enforce it. When it is not, they disagree on purpose:
//! - [`remove_by_id`] removes *every* match, at any depth.
//! - [`mark_complete`] and the finders stop at the *first* match in depth-first order.

use crate::model::TodoItem;
use chrono::{DateTime, Utc};

/// Removes every item whose id is `id`, at the top level and below, together with
/// its descendants. An unknown id leaves the forest untouched.
pub fn remove_by_id(mut forest: Vec<TodoItem>, id: &str) -> Vec<TodoItem> {
    forest.retain(|item| item.item_id != id);
    for item in &mut forest {
        remove_sub_item(item, id);
    }
    forest
}

fn remove_sub_item(item: &mut TodoItem, id: &str) {
    item.sub_items.retain(|sub| sub.item_id != id);
    for sub in &mut item.sub_items {
        remove_sub_item(sub, id);
    }
}

/// Completes the first item (depth-first) whose id is `id`.
///
/// Returns `false` when no item matched. Ancestors on the path to the match
/// re-stamp their child's `parent_id`.
pub fn mark_complete(forest: &mut [TodoItem], id: &str, now: DateTime<Utc>) -> bool {
    forest.iter_mut().any(|item| mark_item_complete(item, id, now))
}

fn mark_item_complete(item: &mut TodoItem, id: &str, now: DateTime<Utc>) -> bool {
    if item.item_id == id {
        item.complete(now);
        return true;
    }
    for sub in item.sub_items.iter_mut() {
        if mark_item_complete(sub, id, now) {
            sub.parent_id = Some(item.item_id.clone());
            return true;
        }
    }
    false
}

pub fn find_by_id<'a>(forest: &'a [TodoItem], id: &str) -> Option<&'a TodoItem> {
    for item in forest {
        if item.item_id == id {
            return Some(item);
        }
        if let Some(found) = find_by_id(&item.sub_items, id) {
            return Some(found);
        }
    }
    None
}

pub fn find_by_id_mut<'a>(forest: &'a mut [TodoItem], id: &str) -> Option<&'a mut TodoItem> {
    for item in forest.iter_mut() {
        if item.item_id == id {
            return Some(item);
        }
        if let Some(found) = find_by_id_mut(&mut item.sub_items, id) {
            return Some(found);
        }
    }
    None
}

pub fn contains_id(forest: &[TodoItem], id: &str) -> bool {
    find_by_id(forest, id).is_some()
}

/// Every id in the forest, pre-order.
pub fn all_ids(forest: &[TodoItem]) -> Vec<&str> {
    fn collect<'a>(items: &'a [TodoItem], out: &mut Vec<&'a str>) {
        for item in items {
            out.push(&item.item_id);
            collect(&item.sub_items, out);
        }
    }

    let mut ids = Vec::new();
    collect(forest, &mut ids);
    ids
}

pub fn count_items(forest: &[TodoItem]) -> usize {
    forest
        .iter()
        .map(|item| 1 + count_items(&item.sub_items))
        .sum()
}
