//! Terminal views for the journal: entry form, mood emoji, entry cards.

pub mod form;
pub mod list;

pub use form::EntryForm;
pub use list::{render_card, render_list};

/// Moods indexed by star rating.
pub const MOOD_EMOJI: [&str; 5] = ["😀", "😐", "😭", "😠", "🤬"];

/// Shown in place of a view whose query failed.
pub const ERROR_PLACEHOLDER: &str = "Error";

/// Emoji for a star rating, `None` outside 0-4.
#[must_use]
pub fn mood_emoji(stars: i32) -> Option<&'static str> {
    usize::try_from(stars)
        .ok()
        .and_then(|index| MOOD_EMOJI.get(index).copied())
}
