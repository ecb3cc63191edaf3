//! Journal domain: the movie entry record, its validation rules, the error
//! taxonomy shared by every operation, and the access policy.

pub mod error;
pub mod movie_entry;
pub mod policy;

pub use error::{JournalError, JournalErrorKind};
pub use movie_entry::{MovieEntry, MovieEntryDraft, MovieEntryInput, Stars, ValidationError};
pub use policy::{Access, Caller, DenyReason, authorize};
