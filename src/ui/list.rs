use chrono::{DateTime, Local};
use std::fmt::Write as _;

use super::mood_emoji;
use crate::clients::EntryRecord;

/// Formats an epoch-milliseconds string in local time.
fn format_timestamp(millis: &str) -> String {
    millis
        .parse::<i64>()
        .ok()
        .and_then(DateTime::from_timestamp_millis)
        .map_or_else(
            || millis.to_string(),
            |utc| {
                utc.with_timezone(&Local)
                    .format("%Y-%m-%d %H:%M")
                    .to_string()
            },
        )
}

/// One entry as a block of text, with the commands that act on it.
#[must_use]
pub fn render_card(entry: &EntryRecord) -> String {
    let mood = mood_emoji(entry.stars).unwrap_or("?");
    let mut out = String::new();

    let _ = writeln!(out, "{mood}  {}", entry.title);
    let _ = writeln!(out, "   {}", format_timestamp(&entry.created_at));
    for line in entry.description.lines() {
        let _ = writeln!(out, "   {line}");
    }
    let _ = writeln!(
        out,
        "   [edit: cinelog entries edit {id}] [delete: cinelog entries delete {id}]",
        id = entry.id
    );

    out
}

#[must_use]
pub fn render_list(entries: &[EntryRecord]) -> String {
    if entries.is_empty() {
        return "No movie entries yet.\n".to_string();
    }

    entries
        .iter()
        .map(render_card)
        .collect::<Vec<_>>()
        .join("\n")
}
