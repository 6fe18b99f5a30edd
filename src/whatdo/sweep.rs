//! Splitting a forest into what stays active and what goes to the archive.
//!
//! Only top-level items are judged. A fully completed top-level item leaves with
//! its whole subtree; any other top-level item stays with its whole subtree, even
//! when some of its descendants are themselves fully completed. Sub-items are never
//! pruned on their own.

use crate::model::TodoItem;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Sweep {
    pub remaining: Vec<TodoItem>,
    pub completed: Vec<TodoItem>,
}

/// An item is fully completed when it and all of its descendants are completed.
pub fn is_fully_completed(item: &TodoItem) -> bool {
    item.completed && item.sub_items.iter().all(is_fully_completed)
}

/// Partitions `forest` by [`is_fully_completed`], keeping relative order on both sides.
pub fn sweep_completed(forest: Vec<TodoItem>) -> Sweep {
    let (completed, remaining): (Vec<_>, Vec<_>) =
        forest.into_iter().partition(is_fully_completed);
    Sweep {
        remaining,
        completed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::all_ids;
    use chrono::Utc;

    fn done(text: &str, id: &str) -> TodoItem {
        let mut item = TodoItem::with_id(text, id);
        item.complete(Utc::now());
        item
    }

    fn open(text: &str, id: &str) -> TodoItem {
        TodoItem::with_id(text, id)
    }

    #[test]
    fn completed_leaf_is_fully_completed() {
        assert!(is_fully_completed(&done("A", "a")));
        assert!(!is_fully_completed(&open("A", "a")));
    }

    #[test]
    fn open_descendant_blocks_ancestor() {
        let mut mid = done("Mid", "mid");
        mid.add_sub_item(open("Leaf", "leaf"));
        let mut root = done("Root", "root");
        root.add_sub_item(mid);

        assert!(!is_fully_completed(&root));
    }

    #[test]
    fn open_parent_with_done_children_is_not_fully_completed() {
        let mut root = open("Root", "root");
        root.add_sub_item(done("Child", "child"));
        assert!(!is_fully_completed(&root));
    }

    #[test]
    fn sweep_partitions_top_level_items() {
        let mut finished_tree = done("Finished", "f");
        finished_tree.add_sub_item(done("Finished child", "fc"));
        let forest = vec![
            open("Open", "o"),
            finished_tree,
            done("Done leaf", "d"),
            open("Also open", "o2"),
        ];

        let sweep = sweep_completed(forest);
        assert_eq!(all_ids(&sweep.remaining), vec!["o", "o2"]);
        assert_eq!(all_ids(&sweep.completed), vec!["f", "fc", "d"]);
    }

    #[test]
    fn completed_children_of_open_parent_stay_active() {
        let mut parent = open("Parent", "p");
        parent.add_sub_item(done("Done child", "dc"));
        parent.add_sub_item(open("Open child", "oc"));

        let sweep = sweep_completed(vec![parent.clone()]);
        assert!(sweep.completed.is_empty());
        assert_eq!(sweep.remaining, vec![parent]);
    }

    #[test]
    fn partially_done_completed_parent_stays_whole() {
        let mut parent = done("Parent", "p");
        parent.add_sub_item(done("Done child", "dc"));
        parent.add_sub_item(open("Open child", "oc"));

        let sweep = sweep_completed(vec![parent]);
        assert!(sweep.completed.is_empty());
        assert_eq!(all_ids(&sweep.remaining), vec!["p", "dc", "oc"]);
    }

    #[test]
    fn sweep_loses_and_duplicates_nothing() {
        let forest = vec![
            done("A", "a"),
            open("B", "b"),
            done("C", "c"),
            open("D", "d"),
            done("E", "e"),
        ];
        let sweep = sweep_completed(forest.clone());

        assert_eq!(
            sweep.remaining.len() + sweep.completed.len(),
            forest.len()
        );
        for item in &forest {
            let in_remaining = sweep.remaining.contains(item);
            let in_completed = sweep.completed.contains(item);
            assert!(in_remaining ^ in_completed);
            assert_eq!(in_completed, is_fully_completed(item));
        }
    }

    #[test]
    fn empty_forest_sweeps_to_nothing() {
        assert_eq!(sweep_completed(Vec::new()), Sweep::default());
    }
}
