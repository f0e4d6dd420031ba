#[cfg(test)]
mod tests;

pub use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::{model::RecordModel, value::IndexValue};

// ============================================================================
// FOUNDATIONAL KINDS
// ============================================================================

///
/// Path
/// Fully-qualified Rust path of a declared type.
///

pub trait Path {
    const PATH: &'static str;
}

// ============================================================================
// RECORD IDENTITY & SCHEMA
// ============================================================================

///
/// RecordKind
///
/// A storable record type.
///
/// ## Semantics
/// - `TYPE_NAME` is the key namespace; it must stay stable across renames
///   of the Rust type or stored keys stop resolving.
/// - `MODEL` is the static descriptor (relations and indexable fields).
/// - `id()` is caller-assigned and unique within the type; writing the same
///   id again overwrites.
///

pub trait RecordKind: Path + RecordValues + Clone + Serialize + DeserializeOwned {
    const TYPE_NAME: &'static str;
    const MODEL: &'static RecordModel;

    fn id(&self) -> u64;
}

///
/// RecordValues
///
/// Extractors for the values the write path indexes.
///
/// Only names declared in `RecordKind::MODEL` are ever asked for; any other
/// name answers `None`. A declared name may also answer `None` when the
/// record holds no value (an unset optional), in which case it is left out
/// of that index.
///

pub trait RecordValues {
    fn relation_id(&self, attribute: &str) -> Option<u64>;

    fn index_value(&self, field: &str) -> Option<IndexValue>;
}

// ============================================================================
// FIELD CONVERSIONS
// ============================================================================

///
/// ForeignKey
/// A field that can hold the id of another record.
///

pub trait ForeignKey {
    fn foreign_id(&self) -> Option<u64>;
}

macro_rules! impl_foreign_key {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ForeignKey for $ty {
                fn foreign_id(&self) -> Option<u64> {
                    Some(u64::from(*self))
                }
            }
        )*
    };
}

impl_foreign_key!(u8, u16, u32, u64);

impl<T: ForeignKey> ForeignKey for Option<T> {
    fn foreign_id(&self) -> Option<u64> {
        self.as_ref().and_then(ForeignKey::foreign_id)
    }
}

///
/// FieldValue
/// A field that can be rendered into an index key segment.
///

pub trait FieldValue {
    fn to_index_value(&self) -> Option<IndexValue>;
}

macro_rules! impl_field_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FieldValue for $ty {
                fn to_index_value(&self) -> Option<IndexValue> {
                    Some(IndexValue::from(*self))
                }
            }
        )*
    };
}

impl_field_value!(bool, i8, i16, i32, i64, u8, u16, u32, u64);

impl FieldValue for String {
    fn to_index_value(&self) -> Option<IndexValue> {
        Some(IndexValue::from(self))
    }
}

impl FieldValue for &str {
    fn to_index_value(&self) -> Option<IndexValue> {
        Some(IndexValue::from(*self))
    }
}

impl<T: FieldValue> FieldValue for Option<T> {
    fn to_index_value(&self) -> Option<IndexValue> {
        self.as_ref().and_then(FieldValue::to_index_value)
    }
}
