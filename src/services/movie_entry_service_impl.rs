//! `SeaORM` implementation of the `MovieEntryService` trait.

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::db::Store;
use crate::domain::policy::{authorize, require_caller};
use crate::domain::{Caller, JournalError, MovieEntry, MovieEntryInput};
use crate::services::movie_entry_service::MovieEntryService;

pub struct SeaOrmMovieEntryService {
    store: Store,
}

impl SeaOrmMovieEntryService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }

    /// Loads `id` and checks that `caller` may act on it.
    async fn load_owned(
        &self,
        caller: Option<&Caller>,
        id: &str,
    ) -> Result<MovieEntry, JournalError> {
        let caller = require_caller(caller)?;

        let entry = self
            .store
            .get_movie_entry(id)
            .await?
            .ok_or(JournalError::NotFound)?;

        if let Err(e) = authorize(Some(caller), Some(entry.user.as_str())).into_result() {
            warn!(
                entry_id = %id,
                user_id = %caller.id,
                "Rejected access to another user's movie entry"
            );
            return Err(e);
        }

        Ok(entry)
    }
}

fn record<T>(operation: &'static str, result: &Result<T, JournalError>) {
    let outcome = match result {
        Ok(_) => "success",
        Err(e) => e.kind().as_str(),
    };
    metrics::counter!(
        "journal_operations_total",
        "operation" => operation,
        "outcome" => outcome
    )
    .increment(1);
}

#[async_trait]
impl MovieEntryService for SeaOrmMovieEntryService {
    async fn get(&self, caller: Option<&Caller>, id: &str) -> Result<MovieEntry, JournalError> {
        let result = self.load_owned(caller, id).await;
        record("movie_entry", &result);
        result
    }

    async fn list(&self, caller: Option<&Caller>) -> Result<Vec<MovieEntry>, JournalError> {
        let result: Result<_, JournalError> = async {
            let caller = require_caller(caller)?;
            let entries = self.store.list_movie_entries_for_user(&caller.id).await?;
            debug!(user_id = %caller.id, count = entries.len(), "Listed movie entries");
            Ok(entries)
        }
        .await;
        record("movie_entries", &result);
        result
    }

    async fn search(&self, title: &str) -> Result<Vec<MovieEntry>, JournalError> {
        let result = self
            .store
            .find_movie_entries_by_title(title)
            .await
            .map_err(JournalError::from);
        record("search_movie_entries", &result);
        result
    }

    async fn create(
        &self,
        caller: Option<&Caller>,
        input: MovieEntryInput,
    ) -> Result<MovieEntry, JournalError> {
        let result: Result<_, JournalError> = async {
            let caller = require_caller(caller)?;
            let draft = input.validate()?;

            if let Some(claimed) = input.user.as_deref()
                && claimed != caller.id
            {
                debug!(
                    claimed_user = %claimed,
                    user_id = %caller.id,
                    "Ignoring client-supplied owner on create"
                );
            }

            let entry = self.store.create_movie_entry(&caller.id, &draft).await?;
            info!(entry_id = %entry.id, user_id = %caller.id, "Movie entry created");
            Ok(entry)
        }
        .await;
        record("create_movie_entry", &result);
        result
    }

    async fn update(
        &self,
        caller: Option<&Caller>,
        id: &str,
        input: MovieEntryInput,
    ) -> Result<MovieEntry, JournalError> {
        let result: Result<_, JournalError> = async {
            let existing = self.load_owned(caller, id).await?;
            let draft = input.validate()?;

            // Last write wins: no version check against concurrent writers.
            let updated = self
                .store
                .update_movie_entry(&existing, &draft)
                .await?
                .ok_or(JournalError::NotFound)?;

            info!(entry_id = %id, user_id = %updated.user, "Movie entry updated");
            Ok(updated)
        }
        .await;
        record("update_movie_entry", &result);
        result
    }

    async fn delete(&self, caller: Option<&Caller>, id: &str) -> Result<MovieEntry, JournalError> {
        let result: Result<_, JournalError> = async {
            let snapshot = self.load_owned(caller, id).await?;

            if !self.store.delete_movie_entry(id).await? {
                return Err(JournalError::NotFound);
            }

            info!(entry_id = %id, user_id = %snapshot.user, "Movie entry deleted");
            Ok(snapshot)
        }
        .await;
        record("delete_movie_entry", &result);
        result
    }
}
