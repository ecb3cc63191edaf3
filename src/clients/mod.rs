//! Client side of the journal: GraphQL documents, the HTTP client that sends
//! them, and the view-state rules applied after each mutation.

pub mod journal;
pub mod operations;
pub mod view_state;

pub use journal::{AccountRecord, ClientError, EntryRecord, JournalClient};
pub use view_state::{EntryPatch, MutationOutcome, ViewState};
