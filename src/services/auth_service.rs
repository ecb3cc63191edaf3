//! Domain service for user accounts and token authentication.
//!
//! Handles registration, login, and resolving the `authorization` header
//! token into a caller identity.

use serde::Serialize;
use thiserror::Error;

use crate::domain::Caller;

/// Errors specific to authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("User not found")]
    UserNotFound,

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Taxonomy name surfaced as the GraphQL `reason` extension.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::InvalidCredentials | Self::UserNotFound => "INVALID_CREDENTIALS",
            Self::Validation(_) => "INVALID_INPUT",
            Self::Conflict(_) => "CONFLICT",
            Self::Database(_) | Self::Internal(_) => "INTERNAL_STORAGE_ERROR",
        }
    }
}

impl From<sea_orm::DbErr> for AuthError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for AuthError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(format!("{err:#}"))
    }
}

/// Account DTO returned by registration and login; includes the bearer token.
#[derive(Debug, Clone, Serialize)]
pub struct Account {
    pub id: String,
    pub username: String,
    pub email: String,
    pub created_at: i64,
    pub token: String,
}

impl From<crate::db::User> for Account {
    fn from(user: crate::db::User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            created_at: user.created_at,
            token: user.api_key,
        }
    }
}

/// Domain service trait for authentication.
#[async_trait::async_trait]
pub trait AuthService: Send + Sync {
    /// Creates a new account.
    ///
    /// # Errors
    ///
    /// - [`AuthError::Validation`] for a malformed username, email or password
    /// - [`AuthError::Conflict`] if the username or email is taken
    async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<Account, AuthError>;

    /// Verifies credentials and returns the account with its token.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] if login fails.
    async fn login(&self, username: &str, password: &str) -> Result<Account, AuthError>;

    /// Resolves a bearer token into a caller identity, `None` if unknown.
    async fn resolve_token(&self, token: &str) -> Result<Option<Caller>, AuthError>;

    /// Gets the current token of a user.
    async fn get_api_key(&self, username: &str) -> Result<String, AuthError>;

    /// Regenerates the token of a user and returns the new one.
    async fn regenerate_api_key(&self, username: &str) -> Result<String, AuthError>;
}
