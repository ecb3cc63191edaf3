//! `SeaORM` implementation of the `AuthService` trait.

use crate::config::SecurityConfig;
use crate::db::Store;
use crate::domain::Caller;
use crate::services::auth_service::{Account, AuthError, AuthService};
use async_trait::async_trait;
use sea_orm::{DbErr, SqlErr};

const USERNAME_MIN_CHARS: usize = 3;
const USERNAME_MAX_CHARS: usize = 32;

pub struct SeaOrmAuthService {
    store: Store,
    security: SecurityConfig,
}

impl SeaOrmAuthService {
    #[must_use]
    pub const fn new(store: Store, security: SecurityConfig) -> Self {
        Self { store, security }
    }

    fn validate_registration(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<(), AuthError> {
        let len = username.chars().count();
        if !(USERNAME_MIN_CHARS..=USERNAME_MAX_CHARS).contains(&len) {
            return Err(AuthError::Validation(format!(
                "Username must be between {USERNAME_MIN_CHARS} and {USERNAME_MAX_CHARS} characters"
            )));
        }

        if !username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
        {
            return Err(AuthError::Validation(
                "Username can only contain letters, numbers, dots, hyphens, and underscores"
                    .to_string(),
            ));
        }

        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {}
            _ => return Err(AuthError::Validation("Email address is invalid".to_string())),
        }

        if password.chars().count() < self.security.min_password_length {
            return Err(AuthError::Validation(format!(
                "Password must be at least {} characters",
                self.security.min_password_length
            )));
        }

        Ok(())
    }
}

fn is_unique_violation(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<DbErr>().and_then(DbErr::sql_err),
        Some(SqlErr::UniqueConstraintViolation(_))
    )
}

#[async_trait]
impl AuthService for SeaOrmAuthService {
    async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<Account, AuthError> {
        let username = username.trim();
        let email = email.trim().to_lowercase();

        self.validate_registration(username, &email, password)?;

        if self.store.user_exists(username, &email).await? {
            return Err(AuthError::Conflict(
                "Username or email is already registered".to_string(),
            ));
        }

        // A concurrent registration can still win the unique index.
        let user = match self
            .store
            .create_user(username, &email, password, &self.security)
            .await
        {
            Ok(user) => user,
            Err(e) if is_unique_violation(&e) => {
                return Err(AuthError::Conflict(
                    "Username or email is already registered".to_string(),
                ));
            }
            Err(e) => return Err(e.into()),
        };

        tracing::info!(user_id = %user.id, "User registered: {username}");

        Ok(Account::from(user))
    }

    async fn login(&self, username: &str, password: &str) -> Result<Account, AuthError> {
        let is_valid = self
            .store
            .verify_user_password(username, password)
            .await?;

        if !is_valid {
            return Err(AuthError::InvalidCredentials);
        }

        let user = self
            .store
            .get_user_by_username(username)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        Ok(Account::from(user))
    }

    async fn resolve_token(&self, token: &str) -> Result<Option<Caller>, AuthError> {
        let user = self.store.verify_api_key(token).await?;
        Ok(user.map(|u| Caller {
            id: u.id,
            username: u.username,
        }))
    }

    async fn get_api_key(&self, username: &str) -> Result<String, AuthError> {
        self.store
            .get_user_api_key(username)
            .await?
            .ok_or(AuthError::UserNotFound)
    }

    async fn regenerate_api_key(&self, username: &str) -> Result<String, AuthError> {
        if self.store.get_user_by_username(username).await?.is_none() {
            return Err(AuthError::UserNotFound);
        }

        let new_api_key = self.store.regenerate_user_api_key(username).await?;
        tracing::info!("API key regenerated for user: {username}");

        Ok(new_api_key)
    }
}
