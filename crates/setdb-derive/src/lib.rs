use proc_macro::TokenStream;

mod record;

/// Derive the record descriptor and value extractors for a struct.
///
/// ```ignore
/// #[derive(Clone, Serialize, Deserialize, Record)]
/// #[record(name = "File")]
/// struct File {
///     id: u64,
///     #[record(index)]
///     name: String,
///     #[record(relation = "Project")]
///     project_id: u64,
/// }
/// ```
#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive_record(input.into()).into()
}
