//! Picks the one thing to do next.
//!
//! Candidates are the open top-level items; sub-items never compete on their own.
//! They are ordered by `(priority, due_date)` ascending, with a missing priority
//! or due date sorting after any present one. Ties on the smallest key are broken
//! uniformly at random.

use crate::model::TodoItem;
use chrono::NaiveDateTime;
use rand::seq::SliceRandom;
use rand::Rng;

type UrgencyKey = (bool, Option<u32>, bool, Option<NaiveDateTime>);

fn urgency_key(item: &TodoItem) -> UrgencyKey {
    (
        item.priority.is_none(),
        item.priority,
        item.due_date.is_none(),
        item.due_date,
    )
}

/// Returns the most urgent open top-level item, or `None` when everything is done.
pub fn select_next<'a, R: Rng + ?Sized>(
    forest: &'a [TodoItem],
    rng: &mut R,
) -> Option<&'a TodoItem> {
    let open: Vec<&TodoItem> = forest.iter().filter(|item| !item.completed).collect();
    let best = open.iter().map(|item| urgency_key(item)).min()?;
    let tied: Vec<&TodoItem> = open
        .into_iter()
        .filter(|item| urgency_key(item) == best)
        .collect();
    tied.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::parse_due_date;
    use chrono::Utc;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    fn item(id: &str, priority: Option<u32>, due: Option<&str>) -> TodoItem {
        TodoItem::with_id(id, id)
            .with_priority(priority)
            .with_due_date(due.map(|d| parse_due_date(d).unwrap()))
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn empty_forest_selects_nothing() {
        assert!(select_next(&[], &mut rng()).is_none());
    }

    #[test]
    fn all_completed_selects_nothing() {
        let mut a = item("a", Some(1), None);
        let mut b = item("b", None, None);
        a.complete(Utc::now());
        b.complete(Utc::now());
        assert!(select_next(&[a, b], &mut rng()).is_none());
    }

    #[test]
    fn lowest_priority_then_earliest_due_wins() {
        let forest = vec![
            item("p2", Some(2), Some("2026-10-20")),
            item("p1-early", Some(1), Some("2026-10-20")),
            item("p1-late", Some(1), Some("2026-12-01")),
        ];
        let mut rng = rng();
        for _ in 0..50 {
            let picked = select_next(&forest, &mut rng).unwrap();
            assert_eq!(picked.item_id, "p1-early");
        }
    }

    #[test]
    fn missing_priority_sorts_last() {
        let forest = vec![item("none", None, Some("2020-01-01")), item("low", Some(9), None)];
        assert_eq!(select_next(&forest, &mut rng()).unwrap().item_id, "low");
    }

    #[test]
    fn missing_due_date_sorts_last() {
        let forest = vec![
            item("undated", Some(1), None),
            item("dated", Some(1), Some("2030-01-01")),
        ];
        assert_eq!(select_next(&forest, &mut rng()).unwrap().item_id, "dated");
    }

    #[test]
    fn completed_items_are_skipped() {
        let mut urgent = item("urgent", Some(1), Some("2026-10-18"));
        urgent.complete(Utc::now());
        let forest = vec![urgent, item("later", Some(5), None)];
        assert_eq!(select_next(&forest, &mut rng()).unwrap().item_id, "later");
    }

    #[test]
    fn sub_items_are_not_candidates() {
        let mut parent = item("parent", Some(5), None);
        parent.add_sub_item(item("child", Some(1), Some("2026-10-18")));
        let forest = vec![parent];
        assert_eq!(select_next(&forest, &mut rng()).unwrap().item_id, "parent");
    }

    #[test]
    fn ties_are_broken_uniformly() {
        let forest = vec![
            item("a", Some(1), Some("2026-10-20")),
            item("b", Some(1), Some("2026-10-20")),
            item("c", Some(1), Some("2026-10-20")),
            item("loser", Some(2), Some("2026-10-20")),
        ];
        let mut rng = rng();
        let trials = 3000;
        let mut counts: HashMap<String, usize> = HashMap::new();
        for _ in 0..trials {
            let picked = select_next(&forest, &mut rng).unwrap();
            *counts.entry(picked.item_id.clone()).or_default() += 1;
        }

        assert!(!counts.contains_key("loser"));
        for id in ["a", "b", "c"] {
            let n = counts.get(id).copied().unwrap_or(0);
            assert!((800..=1200).contains(&n), "{} picked {} times", id, n);
        }
    }
}
