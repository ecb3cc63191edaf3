use sea_orm::DbErr;
use thiserror::Error;

use super::movie_entry::ValidationError;
use crate::entities::movie_entries::rejection_reason;

/// Failure taxonomy for journal operations.
#[derive(Debug, Error)]
pub enum JournalError {
    #[error("User is not authenticated")]
    NotAuthenticated,

    #[error("User is not authorized to access this movie entry")]
    Forbidden,

    #[error("Movie entry not found")]
    NotFound,

    #[error("Invalid input data: {0}")]
    InvalidInput(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JournalErrorKind {
    NotAuthenticated,
    Forbidden,
    NotFound,
    InvalidInput,
    InternalStorage,
}

impl JournalErrorKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotAuthenticated => "NOT_AUTHENTICATED",
            Self::Forbidden => "FORBIDDEN",
            Self::NotFound => "NOT_FOUND",
            Self::InvalidInput => "INVALID_INPUT",
            Self::InternalStorage => "INTERNAL_STORAGE_ERROR",
        }
    }
}

impl JournalError {
    #[must_use]
    pub const fn kind(&self) -> JournalErrorKind {
        match self {
            Self::NotAuthenticated => JournalErrorKind::NotAuthenticated,
            Self::Forbidden => JournalErrorKind::Forbidden,
            Self::NotFound => JournalErrorKind::NotFound,
            Self::InvalidInput(_) => JournalErrorKind::InvalidInput,
            Self::Storage(_) => JournalErrorKind::InternalStorage,
        }
    }
}

impl From<ValidationError> for JournalError {
    fn from(err: ValidationError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}

impl From<DbErr> for JournalError {
    fn from(err: DbErr) -> Self {
        match rejection_reason(&err) {
            Some(reason) => Self::InvalidInput(reason.to_string()),
            None => Self::Storage(err.to_string()),
        }
    }
}

impl From<anyhow::Error> for JournalError {
    fn from(err: anyhow::Error) -> Self {
        if let Some(reason) = err.downcast_ref::<DbErr>().and_then(rejection_reason) {
            return Self::InvalidInput(reason.to_string());
        }
        Self::Storage(format!("{err:#}"))
    }
}
