use crate::{
    db::{
        IndexedStore, ReadConsistency,
        key::{CollectionKey, IndexKey, PrimaryKey},
        store::{KvStore, StoreError},
    },
    error::Error,
    obs::sink::{self, ExecKind, MetricsEvent, Span},
    serialize::deserialize,
    traits::RecordKind,
    value::IndexValue,
};
use tracing::{debug, error, warn};

impl<S: KvStore> IndexedStore<S> {
    // ======================================================================
    // Primary-key reads
    // ======================================================================

    /// Load one record by id.
    ///
    /// Absence is [`Error::NotFound`]; a payload that does not decode, or
    /// decodes to a different id, is [`Error::CorruptRecord`].
    pub fn get<E: RecordKind>(&self, id: u64) -> Result<E, Error> {
        let mut span = Span::new(self.sink(), ExecKind::Get, E::TYPE_NAME);
        let key = PrimaryKey::new(E::TYPE_NAME, id);

        let Some(bytes) = self.store.string_get(key.as_str())? else {
            debug!(key = key.as_str(), "record not found");
            return Err(Error::not_found(key.into_string()));
        };

        let record = decode_record::<E>(&key, &bytes)?;
        span.set_rows(1);

        Ok(record)
    }

    /// Like [`get`](Self::get), with absence as `None`. Every other failure
    /// still surfaces.
    pub fn try_get<E: RecordKind>(&self, id: u64) -> Result<Option<E>, Error> {
        match self.get(id) {
            Ok(record) => Ok(Some(record)),
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Whether a primary record exists for `id`. Does not decode it.
    pub fn exists<E: RecordKind>(&self, id: u64) -> Result<bool, Error> {
        let key = PrimaryKey::new(E::TYPE_NAME, id);

        Ok(self.store.string_get(key.as_str())?.is_some())
    }

    /// Number of members in the type's collection set. Reads no records.
    pub fn count<E: RecordKind>(&self) -> Result<usize, Error> {
        let key = CollectionKey::new(E::TYPE_NAME);

        Ok(self.store.set_members(key.as_str())?.len())
    }

    // ======================================================================
    // Set-resolved reads
    // ======================================================================

    /// Every record of the type, ascending by id.
    pub fn fetch_all<E: RecordKind>(&self) -> Result<Vec<E>, Error> {
        let mut span = Span::new(self.sink(), ExecKind::FetchAll, E::TYPE_NAME);
        let key = CollectionKey::new(E::TYPE_NAME);

        let records = self.resolve_set::<E>(key.as_str())?;
        span.set_rows(records.len() as u64);

        Ok(records)
    }

    /// Records whose `attribute` relation points at `foreign_id`, ascending
    /// by id.
    ///
    /// Rejects an attribute the type never declared with
    /// [`Error::NoSuchRelation`] instead of answering empty.
    pub fn fetch_related<E: RecordKind>(
        &self,
        attribute: &str,
        foreign_id: u64,
    ) -> Result<Vec<E>, Error> {
        let mut span = Span::new(self.sink(), ExecKind::FetchRelated, E::TYPE_NAME);
        let relation = E::MODEL
            .relation(attribute)
            .ok_or_else(|| Error::no_such_relation(E::TYPE_NAME, attribute))?;
        let key = IndexKey::relation(E::TYPE_NAME, relation.attribute, foreign_id);

        let records = self.resolve_set::<E>(key.as_str())?;
        span.set_rows(records.len() as u64);

        Ok(records)
    }

    /// Records of `E` related to `target` through the one relation `E`
    /// declares towards `T`.
    ///
    /// Zero or several relations towards `T` is [`Error::NoSuchRelation`];
    /// use [`fetch_related`](Self::fetch_related) to pick one by name.
    pub fn fetch_related_to<E, T>(&self, target: &T) -> Result<Vec<E>, Error>
    where
        E: RecordKind,
        T: RecordKind,
    {
        let candidates: Vec<_> = E::MODEL.relations_to(T::TYPE_NAME).collect();

        match candidates.as_slice() {
            [relation] => self.fetch_related::<E>(relation.attribute, target.id()),
            [] => Err(Error::no_such_relation(
                E::TYPE_NAME,
                format!("to {}", T::TYPE_NAME),
            )),
            several => {
                let names: Vec<_> = several.iter().map(|r| r.attribute).collect();

                Err(Error::no_such_relation(
                    E::TYPE_NAME,
                    format!("to {} (ambiguous: {})", T::TYPE_NAME, names.join(", ")),
                ))
            }
        }
    }

    /// Records whose indexed `field` equals `value` exactly, ascending by id.
    ///
    /// `value` is rendered the same way the write path rendered it, so a
    /// lookup must use the field's own type (`"1"` and `1u64` render alike,
    /// `"Test"` and `"test"` do not). Rejects an undeclared field with
    /// [`Error::NoSuchIndex`].
    pub fn fetch_by_field<E: RecordKind>(
        &self,
        field: &str,
        value: impl Into<IndexValue>,
    ) -> Result<Vec<E>, Error> {
        let mut span = Span::new(self.sink(), ExecKind::FetchByField, E::TYPE_NAME);
        let index = E::MODEL
            .index(field)
            .ok_or_else(|| Error::no_such_index(E::TYPE_NAME, field))?;
        let key = IndexKey::new(E::TYPE_NAME, index.field, &value.into());

        let records = self.resolve_set::<E>(key.as_str())?;
        span.set_rows(records.len() as u64);

        Ok(records)
    }

    // ======================================================================
    // Resolution
    // ======================================================================

    // Read a set of primary keys and resolve them with one batched read.
    fn resolve_set<E: RecordKind>(&self, set_key: &str) -> Result<Vec<E>, Error> {
        let members = self.store.set_members(set_key)?;
        if members.is_empty() {
            return Ok(Vec::new());
        }

        let keys: Vec<&str> = members.iter().map(String::as_str).collect();
        let slots = self.store.multi_get(&keys)?;
        if slots.len() != members.len() {
            return Err(StoreError::unavailable(format!(
                "multi_get returned {} slots for {} keys",
                slots.len(),
                members.len()
            ))
            .into());
        }

        let mut records = Vec::with_capacity(members.len());
        let mut dangling = Vec::new();

        for (member, slot) in members.into_iter().zip(slots) {
            let key = PrimaryKey::from_member(member);

            match (slot, self.consistency) {
                (Some(bytes), _) => records.push(decode_record::<E>(&key, &bytes)?),
                (None, ReadConsistency::Strict) => {
                    error!(set_key, key = key.as_str(), "set member has no primary record");
                    return Err(Error::corrupt(
                        key.into_string(),
                        format!("member of '{set_key}' has no primary record"),
                    ));
                }
                (None, ReadConsistency::MissingOk) => dangling.push(key),
            }
        }

        if !dangling.is_empty() {
            warn!(
                set_key,
                type_name = E::TYPE_NAME,
                skipped = dangling.len(),
                keys = ?dangling,
                "skipped set members with no primary record"
            );
            sink::record(
                self.sink(),
                MetricsEvent::DanglingMembers {
                    type_name: E::TYPE_NAME,
                    count: dangling.len() as u64,
                },
            );
        }

        // set storage has no order; id is the one sort key every type has
        records.sort_by_key(|record| record.id());

        debug!(
            set_key,
            type_name = E::TYPE_NAME,
            rows = records.len(),
            "set resolved"
        );

        Ok(records)
    }
}

// Decode one payload and check it belongs at `key`.
fn decode_record<E: RecordKind>(key: &PrimaryKey, bytes: &[u8]) -> Result<E, Error> {
    let record: E = deserialize(bytes).map_err(|err| {
        error!(key = key.as_str(), kind = %err.kind(), "record payload failed to decode");
        Error::corrupt(key.as_str(), err.to_string())
    })?;

    match key.parse() {
        Some((type_name, id)) if type_name == E::TYPE_NAME && id == record.id() => Ok(record),
        _ => {
            error!(
                key = key.as_str(),
                type_name = E::TYPE_NAME,
                id = record.id(),
                "record payload does not belong at its key"
            );
            Err(Error::corrupt(
                key.as_str(),
                format!("payload is {}:{}", E::TYPE_NAME, record.id()),
            ))
        }
    }
}
