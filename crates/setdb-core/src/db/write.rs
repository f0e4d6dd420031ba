use crate::{
    db::{
        IndexedStore,
        key::{CollectionKey, IndexKey, PrimaryKey},
        store::KvStore,
    },
    error::Error,
    obs::sink::{self, ExecKind, MetricsEvent, Span},
    serialize::serialize,
    traits::RecordKind,
};
use tracing::{debug, trace, warn};

///
/// WriteReport
/// Every key one `create` touched.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WriteReport {
    pub key: PrimaryKey,
    pub collection: CollectionKey,
    /// Foreign-key index sets first (declaration order), then field index sets.
    pub index_keys: Vec<IndexKey>,
}

impl WriteReport {
    // Derive every key for `record` without touching the store.
    fn plan<E: RecordKind>(record: &E) -> Self {
        let model = E::MODEL;
        let mut index_keys = Vec::with_capacity(model.relations.len() + model.indexes.len());

        for relation in model.relations {
            match record.relation_id(relation.attribute) {
                Some(foreign_id) => push_unique(
                    &mut index_keys,
                    IndexKey::relation(E::TYPE_NAME, relation.attribute, foreign_id),
                ),
                None => trace!(
                    type_name = E::TYPE_NAME,
                    attribute = relation.attribute,
                    "relation unset, not indexed"
                ),
            }
        }

        for index in model.indexes {
            match record.index_value(index.field) {
                Some(value) => push_unique(
                    &mut index_keys,
                    IndexKey::new(E::TYPE_NAME, index.field, &value),
                ),
                None => trace!(
                    type_name = E::TYPE_NAME,
                    field = index.field,
                    "field unset, not indexed"
                ),
            }
        }

        Self {
            key: PrimaryKey::new(E::TYPE_NAME, record.id()),
            collection: CollectionKey::new(E::TYPE_NAME),
            index_keys,
        }
    }
}

// A field declared both as a relation and as an index derives the same key.
fn push_unique(keys: &mut Vec<IndexKey>, key: IndexKey) {
    if !keys.contains(&key) {
        keys.push(key);
    }
}

impl<S: KvStore> IndexedStore<S> {
    // ======================================================================
    // Single-record writes
    // ======================================================================

    /// Store `record` and register it in its collection and every
    /// applicable index set.
    ///
    /// The payload is encoded before the first store call, so an encode
    /// failure leaves the store untouched. The primary record is written
    /// before any set add, so no set ever names a record that was never
    /// written. See the module docs for what concurrent readers may observe
    /// while this runs.
    pub fn create<E: RecordKind>(&self, record: &E) -> Result<WriteReport, Error> {
        let mut span = Span::new(self.sink(), ExecKind::Create, E::TYPE_NAME);

        let report = WriteReport::plan(record);
        let bytes = serialize(record)?;
        let member = report.key.as_str();

        trace!(key = member, bytes = bytes.len(), "string_set");
        self.store.string_set(member, bytes)?;

        trace!(key = report.collection.as_str(), member, "set_add");
        self.store.set_add(report.collection.as_str(), member)?;

        for index_key in &report.index_keys {
            trace!(key = index_key.as_str(), member, "set_add");
            self.store.set_add(index_key.as_str(), member)?;
        }

        sink::record(
            self.sink(),
            MetricsEvent::IndexAdds {
                type_name: E::TYPE_NAME,
                adds: report.index_keys.len() as u64,
            },
        );
        span.set_rows(1);

        debug!(
            type_name = E::TYPE_NAME,
            key = member,
            index_sets = report.index_keys.len(),
            "record created"
        );

        Ok(report)
    }

    // ======================================================================
    // Batch writes
    // ======================================================================

    /// Create several records, one `create` at a time.
    ///
    /// WARNING: fail-fast and non-atomic. If one record fails, the records
    /// before it stay written.
    pub fn create_many<'r, E, I>(&self, records: I) -> Result<Vec<WriteReport>, Error>
    where
        E: RecordKind + 'r,
        I: IntoIterator<Item = &'r E>,
    {
        let iter = records.into_iter();
        let mut out = Vec::with_capacity(iter.size_hint().0);

        for (position, record) in iter.enumerate() {
            match self.create(record) {
                Ok(report) => out.push(report),
                Err(err) => {
                    if !out.is_empty() {
                        warn!(
                            type_name = E::TYPE_NAME,
                            committed = out.len(),
                            failed_at = position,
                            error = %err,
                            "non-atomic batch partially committed"
                        );
                    }

                    return Err(err);
                }
            }
        }

        Ok(out)
    }
}
