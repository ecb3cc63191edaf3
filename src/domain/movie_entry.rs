use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const TITLE_MIN_CHARS: usize = 3;
pub const TITLE_MAX_CHARS: usize = 256;
pub const DESCRIPTION_MIN_CHARS: usize = 3;
pub const DESCRIPTION_MAX_CHARS: usize = 5000;
pub const STARS_MIN: i32 = 0;
pub const STARS_MAX: i32 = 4;

/// Mood rating in `0..=4`. Despite the name this is not a quality score:
/// 0 is the happiest mood and 4 the angriest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Stars(u8);

impl Stars {
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<i32> for Stars {
    type Error = ValidationError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        if (STARS_MIN..=STARS_MAX).contains(&value)
            && let Ok(stars) = u8::try_from(value)
        {
            return Ok(Self(stars));
        }
        Err(ValidationError::new(
            "stars",
            format!("must be between {STARS_MIN} and {STARS_MAX}, got {value}"),
        ))
    }
}

impl From<Stars> for i32 {
    fn from(stars: Stars) -> Self {
        Self::from(stars.0)
    }
}

impl fmt::Display for Stars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single field constraint violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Stored movie entry as handed to resolvers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieEntry {
    pub id: String,
    pub title: String,
    pub description: String,
    pub stars: Stars,
    /// Id of the owning user.
    pub user: String,
    /// Epoch milliseconds.
    pub created_at: i64,
    /// Epoch milliseconds.
    pub updated_at: i64,
}

impl MovieEntry {
    #[must_use]
    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.user == user_id
    }

    #[must_use]
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.created_at)
    }
}

/// Untrusted fields as they arrive from a client.
///
/// `user` is accepted for wire compatibility only; ownership always comes
/// from the authenticated caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieEntryInput {
    pub title: String,
    pub description: String,
    pub stars: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

impl MovieEntryInput {
    pub fn validate(&self) -> Result<MovieEntryDraft, ValidationError> {
        check_fields(&self.title, &self.description, self.stars)?;
        Ok(MovieEntryDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            stars: Stars::try_from(self.stars)?,
        })
    }
}

/// Content fields that passed validation and may be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieEntryDraft {
    pub title: String,
    pub description: String,
    pub stars: Stars,
}

/// Checks every field constraint of a movie entry.
///
/// Shared by input validation, the storage hook, and the client form so the
/// three can never disagree on bounds.
pub fn check_fields(title: &str, description: &str, stars: i32) -> Result<(), ValidationError> {
    check_length("title", title, TITLE_MIN_CHARS, TITLE_MAX_CHARS)?;
    check_length(
        "description",
        description,
        DESCRIPTION_MIN_CHARS,
        DESCRIPTION_MAX_CHARS,
    )?;
    Stars::try_from(stars)?;
    Ok(())
}

fn check_length(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, "is required"));
    }

    let len = value.chars().count();
    if len < min {
        return Err(ValidationError::new(
            field,
            format!("must be at least {min} characters long"),
        ));
    }
    if len > max {
        return Err(ValidationError::new(
            field,
            format!("must be at most {max} characters long"),
        ));
    }
    Ok(())
}

/// Search key for case-insensitive exact title matching.
#[must_use]
pub fn title_key(title: &str) -> String {
    title.to_lowercase()
}
