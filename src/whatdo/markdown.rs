//! Markdown checklist import.
//!
//! Recognized lines look like `<indent>- [ ] text` or `<indent>- [x] text`.
//! Anything else is skipped. Nesting follows indentation: an item becomes a child
//! of the nearest preceding item with strictly smaller indentation, and items with
//! equal indentation under the same parent are siblings.
//!
//! ```text
//! - [ ] A              A
//!   - [x] B      =>    └── B (done)
//! - [ ] C              C
//! ```

use crate::model::TodoItem;
use chrono::{DateTime, NaiveDate, Utc};
use std::path::{Path, PathBuf};

struct ChecklistLine<'a> {
    indent: usize,
    completed: bool,
    text: &'a str,
}

fn parse_line(line: &str) -> Option<ChecklistLine<'_>> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let body = line.trim_start();
    let indent = line[..line.len() - body.len()].chars().count();

    let rest = body.strip_prefix("- [")?;
    let (completed, text) = if let Some(text) = rest.strip_prefix(" ] ") {
        (false, text)
    } else if let Some(text) = rest.strip_prefix("x] ") {
        (true, text)
    } else {
        return None;
    };
    if text.trim().is_empty() {
        return None;
    }

    Some(ChecklistLine {
        indent,
        completed,
        text,
    })
}

/// Parses a checklist into a forest. Completed entries are stamped with the
/// current time.
pub fn parse_checklist(markdown: &str) -> Vec<TodoItem> {
    parse_checklist_at(markdown, Utc::now())
}

pub fn parse_checklist_at(markdown: &str, now: DateTime<Utc>) -> Vec<TodoItem> {
    let mut roots = Vec::new();
    // Open ancestor chain; an entry is attached to its parent when popped.
    let mut stack: Vec<(usize, TodoItem)> = Vec::new();

    for line in markdown.split('\n') {
        let Some(parsed) = parse_line(line) else {
            continue;
        };

        while stack
            .last()
            .is_some_and(|(indent, _)| *indent >= parsed.indent)
        {
            if let Some((_, finished)) = stack.pop() {
                attach(&mut stack, &mut roots, finished);
            }
        }

        let mut item = TodoItem::new(parsed.text);
        if parsed.completed {
            item.complete(now);
        }
        stack.push((parsed.indent, item));
    }

    while let Some((_, finished)) = stack.pop() {
        attach(&mut stack, &mut roots, finished);
    }

    roots
}

fn attach(stack: &mut [(usize, TodoItem)], roots: &mut Vec<TodoItem>, item: TodoItem) {
    match stack.last_mut() {
        Some((_, parent)) => parent.add_sub_item(item),
        None => roots.push(item),
    }
}

/// Location of the daily note for `date`: `<vault>/<daily_notes_dir>/<YYYY-MM-DD>.md`.
pub fn daily_note_path(vault: &Path, daily_notes_dir: Option<&Path>, date: NaiveDate) -> PathBuf {
    let dir = match daily_notes_dir {
        Some(dir) => vault.join(dir),
        None => vault.to_path_buf(),
    };
    dir.join(format!("{}.md", date.format("%Y-%m-%d")))
}
