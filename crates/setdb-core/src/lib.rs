//! Core runtime for SetDB: record traits, descriptors, key derivation, the
//! key-value store boundary, and the indexed write/read paths.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod db;
pub mod error;
pub mod model;
pub mod obs;
pub mod serialize;
pub mod traits;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;
#[cfg(test)]
pub(crate) mod test_support;

pub use error::Error;

///
/// CONSTANTS
///

/// Separator placed between the segments of every derived store key.
///
/// Record type names, relation attributes, and indexed field names must
/// never contain it; the derive macro rejects such names at compile time.
pub const KEY_SEPARATOR: char = ':';

/// Maximum serialized size of a single record payload.
pub const MAX_RECORD_BYTES: usize = 4 * 1024 * 1024;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, stores, serializers, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        model::{IndexModel, RecordModel, RelationModel},
        traits::{FieldValue, ForeignKey, Path, RecordKind, RecordValues},
        value::IndexValue,
    };
}
