use async_graphql::{Context, ID, Object, Result};

use super::error::{IntoGraphqlError, Operation};
use super::types::MovieEntryObject;
use super::{caller, movie_entries};

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// One entry owned by the caller.
    async fn movie_entry(&self, ctx: &Context<'_>, id: ID) -> Result<Option<MovieEntryObject>> {
        let entry = movie_entries(ctx)?
            .get(caller(ctx), &id)
            .await
            .map_err(|e| e.into_graphql_error(Operation::GetMovieEntry))?;

        Ok(Some(entry.into()))
    }

    /// Every entry owned by the caller.
    async fn movie_entries(
        &self,
        ctx: &Context<'_>,
    ) -> Result<Option<Vec<Option<MovieEntryObject>>>> {
        let entries = movie_entries(ctx)?
            .list(caller(ctx))
            .await
            .map_err(|e| e.into_graphql_error(Operation::GetMovieEntries))?;

        Ok(Some(entries.into_iter().map(|e| Some(e.into())).collect()))
    }

    /// Entries of any user whose title equals `title`, ignoring case.
    /// Needs no authentication.
    async fn search_movie_entries(
        &self,
        ctx: &Context<'_>,
        title: String,
    ) -> Result<Option<Vec<Option<MovieEntryObject>>>> {
        let entries = movie_entries(ctx)?
            .search(&title)
            .await
            .map_err(|e| e.into_graphql_error(Operation::SearchMovieEntries))?;

        Ok(Some(entries.into_iter().map(|e| Some(e.into())).collect()))
    }
}
