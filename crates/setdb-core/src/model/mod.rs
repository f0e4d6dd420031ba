//! Runtime record descriptors.
//!
//! Types in `model` are the static, declaration-time facts about a record
//! type: its namespace, its foreign-key relations, and its indexable
//! fields. The derive macro emits them; the write and read paths consult
//! them and never probe a record for capabilities at runtime.
mod index;
mod record;
mod relation;

#[cfg(test)]
mod tests;

pub use index::IndexModel;
pub use record::RecordModel;
pub use relation::RelationModel;
