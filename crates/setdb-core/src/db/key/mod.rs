//! Module: key
//! Responsibility: derive store key strings from record identity.
//! Does not own: store I/O, name validation (done at declaration time).
//!
//! Invariants:
//! - Derivation is pure and infallible.
//! - Equal inputs always derive byte-identical keys.
//! - No normalisation beyond canonical value rendering is applied.
//!
//! Layout:
//! - primary key:    `{type}:{id}`             -> record bytes
//! - collection key: `{type}`                  -> set of primary keys
//! - index key:      `{type}:{field}:{value}`  -> set of primary keys


use crate::{KEY_SEPARATOR, value::IndexValue};
use derive_more::{Deref, Display};

///
/// PrimaryKey
///

#[derive(Clone, Debug, Deref, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct PrimaryKey(String);

impl PrimaryKey {
    #[must_use]
    pub fn new(type_name: &str, id: u64) -> Self {
        Self(format!("{type_name}{KEY_SEPARATOR}{id}"))
    }

    /// Wrap a raw set member read back from the store.
    pub(crate) const fn from_member(member: String) -> Self {
        Self(member)
    }

    /// Split into `(type_name, id)`.
    ///
    /// Returns `None` when the string was not produced by [`PrimaryKey::new`].
    #[must_use]
    pub fn parse(&self) -> Option<(&str, u64)> {
        let (type_name, raw_id) = self.0.rsplit_once(KEY_SEPARATOR)?;
        if type_name.is_empty() {
            return None;
        }
        let id = raw_id.parse::<u64>().ok()?;

        // reject non-canonical spellings such as "007" or "+7"
        (id.to_string() == raw_id).then_some((type_name, id))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

///
/// CollectionKey
///

#[derive(Clone, Debug, Deref, Display, Eq, Hash, PartialEq)]
pub struct CollectionKey(String);

impl CollectionKey {
    #[must_use]
    pub fn new(type_name: &str) -> Self {
        Self(type_name.to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

///
/// IndexKey
///
/// Shared by foreign-key indexes (value = foreign id) and field indexes
/// (value = canonical field value).
///

#[derive(Clone, Debug, Deref, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct IndexKey(String);

impl IndexKey {
    #[must_use]
    pub fn new(type_name: &str, field: &str, value: &IndexValue) -> Self {
        Self(format!(
            "{type_name}{KEY_SEPARATOR}{field}{KEY_SEPARATOR}{value}"
        ))
    }

    /// Foreign-key index set for `type_name.attribute == foreign_id`.
    #[must_use]
    pub fn relation(type_name: &str, attribute: &str, foreign_id: u64) -> Self {
        Self::new(type_name, attribute, &IndexValue::Uint(foreign_id))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Free-function surface, one per key family.

#[must_use]
pub fn primary_key(type_name: &str, id: u64) -> PrimaryKey {
    PrimaryKey::new(type_name, id)
}

#[must_use]
pub fn collection_key(type_name: &str) -> CollectionKey {
    CollectionKey::new(type_name)
}

#[must_use]
pub fn index_key(type_name: &str, field: &str, value: &IndexValue) -> IndexKey {
    IndexKey::new(type_name, field, value)
}
