//! Access policy for journal operations.
//!
//! Every resolver asks [`authorize`] before touching its target; none of
//! them re-implement the identity or ownership checks.

use super::error::JournalError;

/// Identity resolved from the request's `authorization` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    pub id: String,
    pub username: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    NotAuthenticated,
    NotOwner,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Allow,
    Deny(DenyReason),
}

impl Access {
    /// Converts a denial into the matching journal error.
    pub fn into_result(self) -> Result<(), JournalError> {
        match self {
            Self::Allow => Ok(()),
            Self::Deny(DenyReason::NotAuthenticated) => Err(JournalError::NotAuthenticated),
            Self::Deny(DenyReason::NotOwner) => Err(JournalError::Forbidden),
        }
    }
}

/// Decides whether `caller` may act on a record owned by `owner`.
///
/// `owner` is `None` for operations without a target record (listing the
/// caller's own entries, creating one), which only need an identity.
/// Owner ids are compared by their canonical string form.
#[must_use]
pub fn authorize(caller: Option<&Caller>, owner: Option<&str>) -> Access {
    let Some(caller) = caller else {
        return Access::Deny(DenyReason::NotAuthenticated);
    };

    match owner {
        Some(owner) if owner != caller.id => Access::Deny(DenyReason::NotOwner),
        _ => Access::Allow,
    }
}

/// Returns the caller or a `NotAuthenticated` error.
pub fn require_caller(caller: Option<&Caller>) -> Result<&Caller, JournalError> {
    authorize(caller, None).into_result()?;
    caller.ok_or(JournalError::NotAuthenticated)
}
