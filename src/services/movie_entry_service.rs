//! Domain service for the movie journal.
//!
//! Each method corresponds to one GraphQL operation. Callers pass the
//! identity resolved from the request (if any); access is decided by
//! [`crate::domain::policy::authorize`] before the operation body runs.

use crate::domain::{Caller, JournalError, MovieEntry, MovieEntryInput};

#[async_trait::async_trait]
pub trait MovieEntryService: Send + Sync {
    /// Loads one entry owned by the caller.
    ///
    /// # Errors
    ///
    /// - [`JournalError::NotAuthenticated`] without a caller
    /// - [`JournalError::NotFound`] if no entry has this id
    /// - [`JournalError::Forbidden`] if the entry belongs to someone else
    async fn get(&self, caller: Option<&Caller>, id: &str) -> Result<MovieEntry, JournalError>;

    /// Lists every entry owned by the caller, in storage order.
    async fn list(&self, caller: Option<&Caller>) -> Result<Vec<MovieEntry>, JournalError>;

    /// Entries of all users whose title equals `title`, ignoring case.
    ///
    /// Public: requires no identity and is not scoped to an owner.
    async fn search(&self, title: &str) -> Result<Vec<MovieEntry>, JournalError>;

    /// Validates `input` and stores it as a new entry owned by the caller.
    /// `input.user` is ignored.
    async fn create(
        &self,
        caller: Option<&Caller>,
        input: MovieEntryInput,
    ) -> Result<MovieEntry, JournalError>;

    /// Replaces title, description and stars of an entry owned by the caller.
    async fn update(
        &self,
        caller: Option<&Caller>,
        id: &str,
        input: MovieEntryInput,
    ) -> Result<MovieEntry, JournalError>;

    /// Removes an entry owned by the caller and returns it as it was
    /// immediately before removal.
    async fn delete(&self, caller: Option<&Caller>, id: &str) -> Result<MovieEntry, JournalError>;
}
