use super::*;

static FILE: RecordModel = RecordModel {
    path: "tests::File",
    type_name: "File",
    id_field: "id",
    relations: &[
        RelationModel::new("project_id", "Project"),
        RelationModel::new("owner_id", "User"),
        RelationModel::new("reviewer_id", "User"),
    ],
    indexes: &[IndexModel::new("name")],
};

#[test]
fn relation_lookup_is_by_attribute_name() {
    let relation = FILE.relation("project_id").expect("declared relation");

    assert_eq!(relation.target_type, "Project");
    assert!(FILE.relation("Project").is_none());
    assert!(FILE.relation("PROJECT_ID").is_none());
}

#[test]
fn index_lookup_is_exact() {
    assert_eq!(FILE.index("name"), Some(&IndexModel::new("name")));
    assert!(FILE.index("Name").is_none());
    assert!(FILE.index("project_id").is_none());
}

#[test]
fn relations_to_filters_by_target_type() {
    let to_user: Vec<_> = FILE.relations_to("User").map(|r| r.attribute).collect();

    assert_eq!(to_user, vec!["owner_id", "reviewer_id"]);
    assert_eq!(FILE.relations_to("Nothing").count(), 0);
}

#[test]
fn descriptors_display_compactly() {
    assert_eq!(FILE.relations[0].to_string(), "project_id -> Project");
    assert_eq!(FILE.indexes[0].to_string(), "INDEX(name)");
}
