//! Domain error types

use thiserror::Error;

use crate::id::{RowId, TabId};

/// Domain-level errors raised when an operation's preconditions fail.
///
/// Every mutator returning one of these leaves its receiver untouched:
/// callers observe either the unchanged prior state or the fully-updated
/// new state, never a partial edit. Invariant repair (the empty-list and
/// tabless-session floors) is not an error and happens silently.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The referenced row does not exist in the list.
    #[error("unknown row: {0}")]
    UnknownRow(RowId),

    /// The operation is not permitted on a locked row.
    #[error("row is locked: {0}")]
    RowLocked(RowId),

    /// A reorder index fell outside the editable projection.
    #[error("row index {index} out of range for {len} editable rows")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of editable rows at the time of the request.
        len: usize,
    },

    /// The referenced tab does not exist in the session.
    #[error("unknown tab: {0}")]
    UnknownTab(TabId),

    /// The session must always retain at least one tab.
    #[error("cannot close the last remaining tab")]
    LastTab,

    /// A rename was committed or edited without being started.
    #[error("no rename in progress for tab {0}")]
    NoPendingRename(TabId),

    /// A name failed validation.
    #[error("invalid name: {0}")]
    InvalidName(String),

    /// The HTTP method string is not a valid verb.
    #[error("invalid HTTP method: {0:?}")]
    InvalidMethod(String),

    /// The request body is invalid for the requested operation.
    #[error("invalid body: {0}")]
    InvalidBody(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
