use async_graphql::{Context, ID, Object, Result};

use super::error::{IntoGraphqlError, Operation};
use super::types::{
    CreateUserInput, LoginInput, MovieEntryInputObject, MovieEntryMutationResponse, UserObject,
};
use super::{accounts, caller, movie_entries};

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_movie_entry(
        &self,
        ctx: &Context<'_>,
        input: MovieEntryInputObject,
    ) -> Result<MovieEntryMutationResponse> {
        let entry = movie_entries(ctx)?
            .create(caller(ctx), input.into())
            .await
            .map_err(|e| e.into_graphql_error(Operation::CreateMovieEntry))?;

        Ok(entry.into())
    }

    async fn update_movie_entry(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: MovieEntryInputObject,
    ) -> Result<MovieEntryMutationResponse> {
        let entry = movie_entries(ctx)?
            .update(caller(ctx), &id, input.into())
            .await
            .map_err(|e| e.into_graphql_error(Operation::UpdateMovieEntry))?;

        Ok(entry.into())
    }

    /// Returns the entry as it was right before removal.
    async fn delete_movie_entry(
        &self,
        ctx: &Context<'_>,
        id: ID,
    ) -> Result<MovieEntryMutationResponse> {
        let entry = movie_entries(ctx)?
            .delete(caller(ctx), &id)
            .await
            .map_err(|e| e.into_graphql_error(Operation::DeleteMovieEntry))?;

        Ok(entry.into())
    }

    async fn create_user(&self, ctx: &Context<'_>, input: CreateUserInput) -> Result<UserObject> {
        let account = accounts(ctx)?
            .register(&input.username, &input.email, &input.password)
            .await
            .map_err(|e| e.into_graphql_error(Operation::CreateUser))?;

        Ok(account.into())
    }

    async fn login_user(&self, ctx: &Context<'_>, input: LoginInput) -> Result<UserObject> {
        let account = accounts(ctx)?
            .login(&input.username, &input.password)
            .await
            .map_err(|e| e.into_graphql_error(Operation::LoginUser))?;

        Ok(account.into())
    }
}
