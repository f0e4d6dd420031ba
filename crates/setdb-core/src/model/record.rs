use crate::model::{index::IndexModel, relation::RelationModel};

///
/// RecordModel
/// Static descriptor for one record type.
///

#[derive(Debug)]
pub struct RecordModel {
    /// Fully-qualified Rust type path (for diagnostics).
    pub path: &'static str,
    /// Stable external name used as the key namespace.
    pub type_name: &'static str,
    /// Name of the field holding the numeric id.
    pub id_field: &'static str,
    /// Declared foreign-key relations.
    pub relations: &'static [RelationModel],
    /// Declared indexable scalar fields.
    pub indexes: &'static [IndexModel],
}

impl RecordModel {
    /// Look up a declared relation by attribute name.
    #[must_use]
    pub fn relation(&self, attribute: &str) -> Option<&'static RelationModel> {
        self.relations
            .iter()
            .find(|relation| relation.attribute == attribute)
    }

    /// Look up a declared index by field name.
    #[must_use]
    pub fn index(&self, field: &str) -> Option<&'static IndexModel> {
        self.indexes.iter().find(|index| index.field == field)
    }

    /// All relations pointing at `target_type`.
    pub fn relations_to(&self, target_type: &str) -> impl Iterator<Item = &'static RelationModel> {
        let relations = self.relations;
        relations
            .iter()
            .filter(move |relation| relation.target_type == target_type)
    }
}
