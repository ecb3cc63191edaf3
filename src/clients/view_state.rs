//! Client-side view state and how mutations change it.
//!
//! Holds what the views last rendered: the owner's list and any entries
//! opened by id. After a mutation resolves, [`ViewState::apply`] brings the
//! cached data in line without refetching.

use std::collections::HashMap;

use super::journal::EntryRecord;

/// Fields returned by an update; `None` leaves the cached value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryPatch {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub stars: Option<i32>,
    pub updated_at: Option<String>,
}

impl EntryPatch {
    fn merge_into(&self, entry: &mut EntryRecord) {
        if let Some(title) = &self.title {
            entry.title.clone_from(title);
        }
        if let Some(description) = &self.description {
            entry.description.clone_from(description);
        }
        if let Some(stars) = self.stars {
            entry.stars = stars;
        }
        if let Some(updated_at) = &self.updated_at {
            entry.updated_at.clone_from(updated_at);
        }
    }
}

impl From<EntryRecord> for EntryPatch {
    fn from(entry: EntryRecord) -> Self {
        Self {
            id: entry.id,
            title: Some(entry.title),
            description: Some(entry.description),
            stars: Some(entry.stars),
            updated_at: Some(entry.updated_at),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
    Created(EntryRecord),
    Updated(EntryPatch),
    Deleted { id: String },
}

#[derive(Debug, Clone, Default)]
pub struct ViewState {
    list: Option<Vec<EntryRecord>>,
    details: HashMap<String, EntryRecord>,
}

impl ViewState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_list(&mut self, entries: Vec<EntryRecord>) {
        self.list = Some(entries);
    }

    pub fn set_detail(&mut self, entry: EntryRecord) {
        self.details.insert(entry.id.clone(), entry);
    }

    /// The cached list, `None` if it was never fetched.
    #[must_use]
    pub fn list(&self) -> Option<&[EntryRecord]> {
        self.list.as_deref()
    }

    #[must_use]
    pub fn detail(&self, id: &str) -> Option<&EntryRecord> {
        self.details.get(id)
    }

    pub fn apply(&mut self, outcome: &MutationOutcome) {
        match outcome {
            MutationOutcome::Created(entry) => {
                if let Some(list) = &mut self.list {
                    list.push(entry.clone());
                }
            }
            MutationOutcome::Updated(patch) => {
                if let Some(detail) = self.details.get_mut(&patch.id) {
                    patch.merge_into(detail);
                }
                if let Some(item) = self
                    .list
                    .as_mut()
                    .and_then(|list| list.iter_mut().find(|e| e.id == patch.id))
                {
                    patch.merge_into(item);
                }
            }
            MutationOutcome::Deleted { id } => {
                if let Some(list) = &mut self.list {
                    list.retain(|e| &e.id != id);
                }
                self.details.remove(id);
            }
        }
    }
}
