use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::{Bucket, TodoStore};

pub fn run<S: TodoStore>(store: &S, bucket: Bucket) -> Result<CmdResult> {
    let items = store.load(bucket)?;
    Ok(CmdResult::default().with_listed_items(items))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, complete, update, NewItem};
    use crate::store::memory::InMemoryStore;

    #[test]
    fn lists_active_and_archived_separately() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, NewItem::new("Open")).unwrap();
        let done = add::run(&mut store, NewItem::new("Done")).unwrap().affected_items[0]
            .item_id
            .clone();
        complete::run(&mut store, &done).unwrap();
        update::run(&mut store).unwrap();

        let active = run(&store, Bucket::Active).unwrap();
        assert_eq!(active.listed_items.len(), 1);
        assert_eq!(active.listed_items[0].item, "Open");

        let archived = run(&store, Bucket::Archived).unwrap();
        assert_eq!(archived.listed_items.len(), 1);
        assert_eq!(archived.listed_items[0].item, "Done");
    }
}
