use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::select::select_next;
use crate::store::{Bucket, TodoStore};
use rand::Rng;

pub fn run<S: TodoStore, R: Rng + ?Sized>(store: &S, rng: &mut R) -> Result<CmdResult> {
    let forest = store.load(Bucket::Active)?;
    let selected = select_next(&forest, rng).cloned();

    let mut result = CmdResult::default();
    if selected.is_none() {
        result.add_message(CmdMessage::info("Nothing left to do"));
    }
    Ok(result.with_selected(selected))
}
