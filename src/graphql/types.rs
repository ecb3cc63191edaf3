use async_graphql::{ID, InputObject, SimpleObject};

use crate::domain;
use crate::services::Account;

/// A journal record as returned by queries.
#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "MovieEntry")]
pub struct MovieEntryObject {
    pub id: ID,
    pub title: String,
    pub description: String,
    pub stars: i32,
    /// Epoch milliseconds.
    pub created_at: String,
    /// Epoch milliseconds.
    pub updated_at: String,
    pub user: ID,
}

impl From<domain::MovieEntry> for MovieEntryObject {
    fn from(entry: domain::MovieEntry) -> Self {
        Self {
            id: ID(entry.id),
            title: entry.title,
            description: entry.description,
            stars: i32::from(entry.stars),
            created_at: entry.created_at.to_string(),
            updated_at: entry.updated_at.to_string(),
            user: ID(entry.user),
        }
    }
}

/// Result of a journal mutation; same fields as `MovieEntry`.
#[derive(Debug, Clone, SimpleObject)]
pub struct MovieEntryMutationResponse {
    pub id: ID,
    pub title: String,
    pub description: String,
    pub stars: i32,
    pub created_at: String,
    pub updated_at: String,
    pub user: ID,
}

impl From<domain::MovieEntry> for MovieEntryMutationResponse {
    fn from(entry: domain::MovieEntry) -> Self {
        let MovieEntryObject {
            id,
            title,
            description,
            stars,
            created_at,
            updated_at,
            user,
        } = MovieEntryObject::from(entry);

        Self {
            id,
            title,
            description,
            stars,
            created_at,
            updated_at,
            user,
        }
    }
}

#[derive(Debug, Clone, InputObject)]
#[graphql(name = "MovieEntryInput")]
pub struct MovieEntryInputObject {
    pub title: String,
    pub description: String,
    pub stars: i32,
    /// Ignored by the server; the owner is always the caller.
    pub user: ID,
}

impl From<MovieEntryInputObject> for domain::MovieEntryInput {
    fn from(input: MovieEntryInputObject) -> Self {
        Self {
            title: input.title,
            description: input.description,
            stars: input.stars,
            user: Some(input.user.0),
        }
    }
}

#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "User")]
pub struct UserObject {
    pub id: ID,
    pub username: String,
    pub email: String,
    pub created_at: String,
    /// Value for the `authorization` header.
    pub token: String,
}

impl From<Account> for UserObject {
    fn from(account: Account) -> Self {
        Self {
            id: ID(account.id),
            username: account.username,
            email: account.email,
            created_at: account.created_at.to_string(),
            token: account.token,
        }
    }
}

#[derive(Debug, Clone, InputObject)]
pub struct CreateUserInput {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, InputObject)]
pub struct LoginInput {
    pub username: String,
    pub password: String,
}
