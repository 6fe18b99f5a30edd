use chrono::{DateTime, Utc};
use colored::*;
use std::path::Path;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};
use whatdo::api::{CmdMessage, MessageLevel};
use whatdo::config::WhatdoConfig;
use whatdo::model::TodoItem;

const LINE_WIDTH: usize = 100;
const INDENT: &str = "  ";
const OPEN_MARKER: &str = "[ ]";
const DONE_MARKER: &str = "[x]";

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub fn print_tree(items: &[TodoItem]) {
    if items.is_empty() {
        println!("No todo items found.");
        return;
    }
    for item in items {
        print_item(item, 0);
    }
}

fn print_item(item: &TodoItem, level: usize) {
    let indent = INDENT.repeat(level);
    println!("{}{}", indent, item_line(item, LINE_WIDTH.saturating_sub(indent.width())));
    for sub_item in &item.sub_items {
        print_item(sub_item, level + 1);
    }
}

/// One line per item, depth shown as a dotted path (1, 1.1, 1.2, 2 ...).
pub fn print_flat(items: &[TodoItem]) {
    if items.is_empty() {
        println!("No todo items found.");
        return;
    }
    let mut rows = Vec::new();
    collect_flat(items, "", &mut rows);
    let label_width = rows.iter().map(|(label, _)| label.width()).max().unwrap_or(0);
    for (label, item) in rows {
        let pad = " ".repeat(label_width - label.width());
        let available = LINE_WIDTH.saturating_sub(label_width + 1);
        println!("{}{} {}", label.yellow(), pad, item_line(item, available));
    }
}

fn collect_flat<'a>(items: &'a [TodoItem], prefix: &str, rows: &mut Vec<(String, &'a TodoItem)>) {
    for (i, item) in items.iter().enumerate() {
        let label = if prefix.is_empty() {
            format!("{}", i + 1)
        } else {
            format!("{}.{}", prefix, i + 1)
        };
        rows.push((label.clone(), item));
        collect_flat(&item.sub_items, &label, rows);
    }
}

pub fn print_selected(item: &TodoItem) {
    println!("{} {}", "Next up:".bold(), item.item.bold());
    let details = item_details(item);
    if !details.is_empty() {
        println!("  {}", details.dimmed());
    }
    println!("  {}", item.item_id.dimmed());
    if !item.sub_items.is_empty() {
        let open = item.sub_items.iter().filter(|s| !s.completed).count();
        println!("  {} of {} sub-items open", open, item.sub_items.len());
    }
}

pub fn print_config(config: &WhatdoConfig, data_dir: &Path) {
    println!("data dir         = {}", data_dir.display());
    println!("todo file        = {}", config.todo_file(data_dir).display());
    println!("completed file   = {}", config.completed_file(data_dir).display());
    println!(
        "vault            = {}",
        display_opt_path(config.obsidian_vault_path.as_deref())
    );
    println!(
        "vault name       = {}",
        config.obsidian_vault_name.as_deref().unwrap_or("-")
    );
    println!(
        "daily notes      = {}",
        display_opt_path(config.daily_notes_path.as_deref())
    );
    println!("hours per day    = {}", config.hours_per_day);
    println!("work weekends    = {}", config.work_weekends);
}

fn display_opt_path(path: Option<&Path>) -> String {
    path.map(|p| p.display().to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn item_line(item: &TodoItem, available: usize) -> String {
    let marker = if item.completed {
        DONE_MARKER.green()
    } else {
        OPEN_MARKER.normal()
    };
    let id = short_id(&item.item_id);
    let details = item_details(item);

    let fixed = OPEN_MARKER.width() + 1 + id.width() + 2;
    let details_width = if details.is_empty() { 0 } else { details.width() + 2 };
    let text_room = available.saturating_sub(fixed + details_width).max(10);
    let text = truncate_to_width(&item.item, text_room);
    let text = if item.completed {
        text.dimmed()
    } else {
        text.normal()
    };

    if details.is_empty() {
        format!("{} {}  {}", marker, text, id.dimmed())
    } else {
        format!("{} {}  {}  {}", marker, text, details.cyan(), id.dimmed())
    }
}

fn short_id(id: &str) -> String {
    id.chars().take(8).collect()
}

/// Compact summary of the optional fields, e.g. `p1 · due 2026-10-20 · 2h · #work`.
fn item_details(item: &TodoItem) -> String {
    let mut parts = Vec::new();
    if let Some(priority) = item.priority {
        parts.push(format!("p{}", priority));
    }
    if let Some(due) = item.due_date {
        if due.time() == chrono::NaiveTime::MIN {
            parts.push(format!("due {}", due.format("%Y-%m-%d")));
        } else {
            parts.push(format!("due {}", due.format("%Y-%m-%d %H:%M")));
        }
    }
    if let Some(estimate) = &item.estimated_time {
        parts.push(estimate.clone());
    }
    if let Some(tags) = &item.tags {
        parts.extend(tags.iter().map(|t| format!("#{}", t)));
    }
    if let Some(done_at) = item.date_completed {
        parts.push(format!("done {}", format_time_ago(done_at)));
    }
    parts.join(" · ")
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    timeago::Formatter::new().convert(duration.to_std().unwrap_or_default())
}
