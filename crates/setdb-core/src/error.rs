use crate::{db::store::StoreError, serialize::SerializeError};
use std::fmt;
use thiserror::Error as ThisError;

///
/// Error
///
/// Every failure an `IndexedStore` operation can surface.
/// Collaborator failures are wrapped, never retried or swallowed.
///

#[derive(Debug, ThisError)]
pub enum Error {
    /// The primary key was absent. Expected and recoverable.
    #[error("record not found: {key}")]
    NotFound { key: String },

    /// The key was present but its payload could not be turned back into
    /// the requested record, or an index pointed at a missing record while
    /// reads are strict.
    #[error("corrupt record at '{key}': {reason}")]
    CorruptRecord { key: String, reason: String },

    #[error(transparent)]
    Serialization(#[from] SerializeError),

    #[error("record type '{record}' declares no relation '{attribute}'")]
    NoSuchRelation {
        record: &'static str,
        attribute: String,
    },

    #[error("record type '{record}' declares no index on '{field}'")]
    NoSuchIndex { record: &'static str, field: String },

    #[error(transparent)]
    StoreUnavailable(#[from] StoreError),
}

impl Error {
    pub(crate) fn not_found(key: impl Into<String>) -> Self {
        Self::NotFound { key: key.into() }
    }

    pub(crate) fn corrupt(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::CorruptRecord {
            key: key.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn no_such_relation(record: &'static str, attribute: impl Into<String>) -> Self {
        Self::NoSuchRelation {
            record,
            attribute: attribute.into(),
        }
    }

    pub(crate) fn no_such_index(record: &'static str, field: impl Into<String>) -> Self {
        Self::NoSuchIndex {
            record,
            field: field.into(),
        }
    }

    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::NotFound { .. } => ErrorClass::NotFound,
            Self::CorruptRecord { .. } => ErrorClass::Corruption,
            Self::Serialization(_) => ErrorClass::Serialization,
            Self::NoSuchRelation { .. } | Self::NoSuchIndex { .. } => ErrorClass::Unsupported,
            Self::StoreUnavailable(_) => ErrorClass::Unavailable,
        }
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    #[must_use]
    pub fn display_with_class(&self) -> String {
        format!("{}: {self}", self.class())
    }
}

///
/// ErrorClass
/// Coarse error taxonomy for callers that branch on the kind of failure
/// rather than its detail.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorClass {
    NotFound,
    Corruption,
    Serialization,
    Unsupported,
    Unavailable,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::NotFound => "not_found",
            Self::Corruption => "corruption",
            Self::Serialization => "serialization",
            Self::Unsupported => "unsupported",
            Self::Unavailable => "unavailable",
        };
        write!(f, "{label}")
    }
}
