//! ## Crate layout
//! - `db`: `IndexedStore`, key derivation, and the `KvStore` boundary with
//!   the in-process `MemoryStore`.
//! - `model`: static record descriptors (relations and field indexes).
//! - `traits`: record, extractor, and foreign-key traits.
//! - `value`: canonical index values.
//! - `obs`: metrics events, sinks, and counters.
//! - `serialize`: the CBOR record codec.
//!
//! Records are plain structs deriving [`Record`] alongside serde:
//!
//! ```ignore
//! use setdb::prelude::*;
//!
//! #[derive(Clone, Debug, Deserialize, Record, Serialize)]
//! struct File {
//!     id: u64,
//!     #[record(index)]
//!     name: String,
//!     #[record(relation = "Project")]
//!     project_id: u64,
//! }
//!
//! let db = IndexedStore::new(MemoryStore::new());
//! db.create(&File { id: 3, name: "test".into(), project_id: 1 })?;
//! let files: Vec<File> = db.fetch_related("project_id", 1)?;
//! ```

pub use setdb_core::{db, error, model, obs, serialize, traits, value};
pub use setdb_core::{Error, KEY_SEPARATOR, MAX_RECORD_BYTES};
pub use setdb_derive::Record;

// export so derived impls resolve inside this crate too
extern crate self as setdb;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::{
        Record,
        db::{IndexedStore, KvStore as _, MemoryStore, ReadConsistency},
        error::{Error, ErrorClass},
        traits::{Path as _, RecordKind as _, RecordValues as _},
        value::IndexValue,
    };
    pub use serde::{Deserialize, Serialize};
}
