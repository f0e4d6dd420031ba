///
/// ReadConsistency
///
/// Handling of collection or index members whose primary record is
/// missing from the batched read. A present but undecodable record is
/// corruption under either policy.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ReadConsistency {
    /// Missing records are skipped; the skipped count is logged and
    /// reported to the metrics sink.
    #[default]
    MissingOk,

    /// The first missing record fails the read with `CorruptRecord`.
    Strict,
}
