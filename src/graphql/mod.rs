//! GraphQL schema for the movie journal.

use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, Schema};

use crate::domain::Caller;
use crate::services::{AuthService, MovieEntryService};

pub mod error;
mod mutation;
mod query;
pub mod types;

pub use error::{IntoGraphqlError, Operation};
pub use mutation::MutationRoot;
pub use query::QueryRoot;

pub type CinelogSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Caller identity attached to each request before execution.
#[derive(Debug, Clone, Default)]
pub struct Identity(pub Option<Caller>);

#[must_use]
pub fn build_schema(
    movie_entries: Arc<dyn MovieEntryService>,
    accounts: Arc<dyn AuthService>,
) -> CinelogSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(movie_entries)
        .data(accounts)
        .finish()
}

fn caller<'a>(ctx: &'a Context<'_>) -> Option<&'a Caller> {
    ctx.data_opt::<Identity>().and_then(|identity| identity.0.as_ref())
}

fn movie_entries<'a>(ctx: &'a Context<'_>) -> async_graphql::Result<&'a Arc<dyn MovieEntryService>> {
    ctx.data::<Arc<dyn MovieEntryService>>()
}

fn accounts<'a>(ctx: &'a Context<'_>) -> async_graphql::Result<&'a Arc<dyn AuthService>> {
    ctx.data::<Arc<dyn AuthService>>()
}
