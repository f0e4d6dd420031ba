mod cbor;

#[cfg(test)]
mod tests;

use crate::MAX_RECORD_BYTES;
use serde::{Serialize, de::DeserializeOwned};
use std::fmt;
use thiserror::Error as ThisError;

/// Record payload encoding.
///
/// This module is format-level only:
/// - Payloads are CBOR; the store sees opaque bytes.
/// - Size limits are enforced on both encode and decode so one oversized
///   record can never be written and then fail every later read.

///
/// SerializeError
///

#[derive(Debug, ThisError)]
pub enum SerializeError {
    #[error("serialize error: {0}")]
    Serialize(String),

    #[error("deserialize error: {0}")]
    Deserialize(String),

    #[error("payload size limit exceeded: {len} bytes (limit {max_bytes})")]
    SizeLimitExceeded { len: usize, max_bytes: usize },
}

///
/// SerializeErrorKind
///
/// Stable error-kind taxonomy for serializer failures.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SerializeErrorKind {
    Serialize,
    Deserialize,
    SizeLimitExceeded,
}

impl SerializeErrorKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Serialize => "serialize",
            Self::Deserialize => "deserialize",
            Self::SizeLimitExceeded => "size_limit_exceeded",
        }
    }
}

impl fmt::Display for SerializeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl SerializeError {
    /// Return a stable error kind independent of backend error-message text.
    #[must_use]
    pub const fn kind(&self) -> SerializeErrorKind {
        match self {
            Self::Serialize(_) => SerializeErrorKind::Serialize,
            Self::Deserialize(_) => SerializeErrorKind::Deserialize,
            Self::SizeLimitExceeded { .. } => SerializeErrorKind::SizeLimitExceeded,
        }
    }
}

/// Serialize a record payload, rejecting anything above [`MAX_RECORD_BYTES`].
pub fn serialize<T>(value: &T) -> Result<Vec<u8>, SerializeError>
where
    T: Serialize,
{
    let bytes = cbor::serialize(value)?;
    if bytes.len() > MAX_RECORD_BYTES {
        return Err(SerializeError::SizeLimitExceeded {
            len: bytes.len(),
            max_bytes: MAX_RECORD_BYTES,
        });
    }

    Ok(bytes)
}

/// Deserialize a payload produced by [`serialize`].
pub fn deserialize<T>(bytes: &[u8]) -> Result<T, SerializeError>
where
    T: DeserializeOwned,
{
    cbor::deserialize_bounded(bytes, MAX_RECORD_BYTES)
}

/// Deserialize a payload produced by [`serialize`], with an explicit size limit.
pub fn deserialize_bounded<T>(bytes: &[u8], max_bytes: usize) -> Result<T, SerializeError>
where
    T: DeserializeOwned,
{
    cbor::deserialize_bounded(bytes, max_bytes)
}
