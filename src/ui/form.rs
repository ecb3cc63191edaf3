use crate::clients::EntryRecord;
use crate::domain::movie_entry::{STARS_MAX, check_fields};
use crate::domain::{MovieEntryInput, ValidationError};

/// Values of the create/edit form.
///
/// Starts blank with a zero rating. Validation uses the same bounds the
/// server enforces, so a submitted form is never rejected for shape.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryForm {
    pub title: String,
    pub description: String,
    pub stars: i32,
}

impl EntryForm {
    /// Form pre-populated from an existing entry.
    #[must_use]
    pub fn from_entry(entry: &EntryRecord) -> Self {
        Self {
            title: entry.title.clone(),
            description: entry.description.clone(),
            stars: entry.stars,
        }
    }

    /// Applies the fields the user changed.
    #[must_use]
    pub fn with_overrides(
        mut self,
        title: Option<String>,
        description: Option<String>,
        stars: Option<i32>,
    ) -> Self {
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(stars) = stars {
            self.stars = stars;
        }
        self
    }

    /// Checks the form and builds the mutation input on success.
    ///
    /// `user` is sent along for schema compatibility; the server ignores it.
    pub fn submit(&self, user: &str) -> Result<MovieEntryInput, ValidationError> {
        check_fields(&self.title, &self.description, self.stars)?;
        Ok(MovieEntryInput {
            title: self.title.clone(),
            description: self.description.clone(),
            stars: self.stars,
            user: Some(user.to_string()),
        })
    }

    /// Rating choices offered by the form.
    pub fn rating_choices() -> impl Iterator<Item = (i32, &'static str)> {
        (0..=STARS_MAX).filter_map(|stars| super::mood_emoji(stars).map(|emoji| (stars, emoji)))
    }
}
