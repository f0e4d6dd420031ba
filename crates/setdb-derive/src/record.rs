use darling::{FromDeriveInput, FromField, ast::Data, util::Flag};
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{DeriveInput, Error, Ident, LitStr, ext::IdentExt};

const KEY_SEPARATOR: char = ':';

///
/// RecordInput
///

#[derive(FromDeriveInput)]
#[darling(attributes(record), supports(struct_named))]
struct RecordInput {
    ident: Ident,
    generics: syn::Generics,
    data: Data<(), RecordField>,

    #[darling(default)]
    name: Option<LitStr>,
}

///
/// RecordField
///

#[derive(FromField)]
#[darling(attributes(record))]
struct RecordField {
    ident: Option<Ident>,

    id: Flag,
    index: Flag,

    #[darling(default)]
    relation: Option<syn::Path>,
}

impl RecordField {
    // The name used in store keys; raw identifiers lose their `r#`.
    fn key_name(&self) -> Option<String> {
        self.ident.as_ref().map(|ident| ident.unraw().to_string())
    }
}

// derive_record
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    let record = match RecordInput::from_derive_input(&input) {
        Ok(record) => record,
        Err(err) => return err.write_errors(),
    };

    match expand(&record) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn expand(record: &RecordInput) -> Result<TokenStream, Error> {
    let ident = &record.ident;

    if !record.generics.params.is_empty() {
        return Err(Error::new_spanned(
            &record.generics,
            "Record cannot be derived for generic structs",
        ));
    }

    let fields = match &record.data {
        Data::Struct(fields) => &fields.fields,
        Data::Enum(_) => {
            return Err(Error::new_spanned(
                ident,
                "Record can only be derived for structs with named fields",
            ));
        }
    };

    let type_name = match &record.name {
        Some(lit) => {
            check_key_segment(&lit.value(), lit.span(), "record name")?;
            lit.value()
        }
        None => ident.unraw().to_string(),
    };

    let id_field = find_id_field(ident, fields)?;
    let id_ident = id_field.ident.as_ref();
    let id_name = id_field.key_name().unwrap_or_default();

    let mut relation_models = Vec::new();
    let mut relation_arms = Vec::new();
    let mut index_models = Vec::new();
    let mut index_arms = Vec::new();
    let mut errors: Option<Error> = None;

    for field in fields {
        let (Some(field_ident), Some(name)) = (field.ident.as_ref(), field.key_name()) else {
            continue;
        };

        if let Err(err) = check_key_segment(&name, field_ident.span(), "field name") {
            combine(&mut errors, err);
            continue;
        }

        if let Some(target) = &field.relation {
            relation_models.push(quote! {
                ::setdb::model::RelationModel::new(
                    #name,
                    <#target as ::setdb::traits::RecordKind>::TYPE_NAME,
                )
            });
            relation_arms.push(quote! {
                #name => ::setdb::traits::ForeignKey::foreign_id(&self.#field_ident),
            });
        }

        if field.index.is_present() {
            index_models.push(quote! {
                ::setdb::model::IndexModel::new(#name)
            });
            index_arms.push(quote! {
                #name => ::setdb::traits::FieldValue::to_index_value(&self.#field_ident),
            });
        }
    }

    if let Some(err) = errors {
        return Err(err);
    }

    Ok(quote! {
        impl ::setdb::traits::Path for #ident {
            const PATH: &'static str = concat!(module_path!(), "::", stringify!(#ident));
        }

        impl ::setdb::traits::RecordKind for #ident {
            const TYPE_NAME: &'static str = #type_name;
            const MODEL: &'static ::setdb::model::RecordModel = &::setdb::model::RecordModel {
                path: <Self as ::setdb::traits::Path>::PATH,
                type_name: #type_name,
                id_field: #id_name,
                relations: &[#(#relation_models),*],
                indexes: &[#(#index_models),*],
            };

            fn id(&self) -> u64 {
                ::core::convert::From::from(self.#id_ident)
            }
        }

        impl ::setdb::traits::RecordValues for #ident {
            fn relation_id(&self, attribute: &str) -> Option<u64> {
                match attribute {
                    #(#relation_arms)*
                    _ => None,
                }
            }

            fn index_value(&self, field: &str) -> Option<::setdb::value::IndexValue> {
                match field {
                    #(#index_arms)*
                    _ => None,
                }
            }
        }
    })
}

// An explicit #[record(id)] wins; otherwise the field called `id`.
fn find_id_field<'a>(ident: &Ident, fields: &'a [RecordField]) -> Result<&'a RecordField, Error> {
    let marked: Vec<_> = fields.iter().filter(|f| f.id.is_present()).collect();

    match marked.as_slice() {
        [field] => Ok(*field),
        [] => fields
            .iter()
            .find(|f| f.key_name().as_deref() == Some("id"))
            .ok_or_else(|| {
                Error::new_spanned(
                    ident,
                    "Record needs an `id` field or a field marked #[record(id)]",
                )
            }),
        [_, second, ..] => Err(Error::new(
            second.id.span(),
            "only one field can be marked #[record(id)]",
        )),
    }
}

fn check_key_segment(value: &str, span: Span, what: &str) -> Result<(), Error> {
    if value.is_empty() {
        return Err(Error::new(span, format!("{what} must not be empty")));
    }
    if value.contains(KEY_SEPARATOR) {
        return Err(Error::new(
            span,
            format!("{what} '{value}' must not contain '{KEY_SEPARATOR}'"),
        ));
    }

    Ok(())
}

fn combine(slot: &mut Option<Error>, err: Error) {
    match slot {
        Some(existing) => existing.combine(err),
        None => *slot = Some(err),
    }
}
