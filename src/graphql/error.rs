//! Mapping of domain failures onto GraphQL errors.
//!
//! Every failure of an operation carries that operation's `code` extension.
//! The `reason` extension names the underlying failure kind.

use async_graphql::{Error, ErrorExtensions};

use crate::domain::{JournalError, JournalErrorKind};
use crate::services::AuthError;

const STORAGE_FAILURE_MESSAGE: &str = "Internal storage error";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    GetMovieEntry,
    GetMovieEntries,
    SearchMovieEntries,
    CreateMovieEntry,
    UpdateMovieEntry,
    DeleteMovieEntry,
    CreateUser,
    LoginUser,
}

impl Operation {
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::GetMovieEntry => "GET_MOVIE_ENTRY_ERROR",
            Self::GetMovieEntries => "GET_MOVIE_ENTRIES_ERROR",
            Self::SearchMovieEntries => "SEARCH_MOVIE_ENTRIES_ERROR",
            Self::CreateMovieEntry => "CREATE_MOVIE_ENTRY_ERROR",
            Self::UpdateMovieEntry => "UPDATE_MOVIE_ENTRY_ERROR",
            Self::DeleteMovieEntry => "DELETE_MOVIE_ENTRY_ERROR",
            Self::CreateUser => "CREATE_USER_ERROR",
            Self::LoginUser => "LOGIN_USER_ERROR",
        }
    }
}

/// Converts a service error into a GraphQL error tagged for `operation`.
pub trait IntoGraphqlError {
    fn into_graphql_error(self, operation: Operation) -> Error;
}

fn tagged(message: String, operation: Operation, reason: &'static str) -> Error {
    Error::new(message).extend_with(|_, ext| {
        ext.set("code", operation.code());
        ext.set("reason", reason);
    })
}

impl IntoGraphqlError for JournalError {
    fn into_graphql_error(self, operation: Operation) -> Error {
        let kind = self.kind();
        let message = if kind == JournalErrorKind::InternalStorage {
            tracing::error!(code = operation.code(), error = %self, "Storage failure");
            STORAGE_FAILURE_MESSAGE.to_string()
        } else {
            self.to_string()
        };

        tagged(message, operation, kind.as_str())
    }
}

impl IntoGraphqlError for AuthError {
    fn into_graphql_error(self, operation: Operation) -> Error {
        let message = match &self {
            Self::Database(_) | Self::Internal(_) => {
                tracing::error!(code = operation.code(), error = %self, "Account storage failure");
                STORAGE_FAILURE_MESSAGE.to_string()
            }
            // Unknown user and wrong password are indistinguishable on the wire.
            Self::UserNotFound => Self::InvalidCredentials.to_string(),
            _ => self.to_string(),
        };

        tagged(message, operation, self.reason())
    }
}
