///
/// test_record
///
/// Test-only helper to declare a record struct together with its
/// descriptor and extractors, mirroring what `#[derive(Record)]` emits.
/// The id field is always `id: u64`.
///
#[macro_export]
macro_rules! test_record {
    (
        $name:ident {
            $( $field:ident : $ty:ty ),+ $(,)?
        },
        type_name = $type_name:expr,
        relations = [ $( $rel:ident -> $target:expr ),* $(,)? ],
        indexes = [ $( $idx:ident ),* $(,)? ] $(,)?
    ) => {
        #[derive(Clone, Debug, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        pub(crate) struct $name {
            $( pub(crate) $field: $ty, )+
        }

        impl $crate::traits::Path for $name {
            const PATH: &'static str = concat!(module_path!(), "::", stringify!($name));
        }

        impl $crate::traits::RecordKind for $name {
            const TYPE_NAME: &'static str = $type_name;
            const MODEL: &'static $crate::model::RecordModel = &$crate::model::RecordModel {
                path: <Self as $crate::traits::Path>::PATH,
                type_name: $type_name,
                id_field: "id",
                relations: &[
                    $( $crate::model::RelationModel::new(stringify!($rel), $target), )*
                ],
                indexes: &[
                    $( $crate::model::IndexModel::new(stringify!($idx)), )*
                ],
            };

            fn id(&self) -> u64 {
                self.id
            }
        }

        impl $crate::traits::RecordValues for $name {
            fn relation_id(&self, attribute: &str) -> Option<u64> {
                match attribute {
                    $( stringify!($rel) => $crate::traits::ForeignKey::foreign_id(&self.$rel), )*
                    _ => None,
                }
            }

            fn index_value(&self, field: &str) -> Option<$crate::value::IndexValue> {
                match field {
                    $( stringify!($idx) => $crate::traits::FieldValue::to_index_value(&self.$idx), )*
                    _ => None,
                }
            }
        }
    };
}

// Shared fixtures for db tests.

test_record!(
    Project { id: u64, name: String },
    type_name = "Project",
    relations = [],
    indexes = [],
);

test_record!(
    File { id: u64, name: String, project_id: u64 },
    type_name = "File",
    relations = [project_id -> "Project"],
    indexes = [name],
);

test_record!(
    Note {
        id: u64,
        author_id: Option<u64>,
        reviewer_id: Option<u64>,
        tag: Option<String>,
        pinned: bool,
    },
    type_name = "Note",
    relations = [author_id -> "User", reviewer_id -> "User"],
    indexes = [tag, pinned],
);

test_record!(
    User { id: u64, handle: String },
    type_name = "User",
    relations = [],
    indexes = [handle],
);

impl Project {
    pub(crate) fn new(id: u64, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
        }
    }
}

impl File {
    pub(crate) fn new(id: u64, name: &str, project_id: u64) -> Self {
        Self {
            id,
            name: name.to_string(),
            project_id,
        }
    }
}
