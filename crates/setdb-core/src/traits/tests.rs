use super::*;

#[test]
fn foreign_key_widens_unsigned_ids() {
    assert_eq!(3u8.foreign_id(), Some(3));
    assert_eq!(70_000u32.foreign_id(), Some(70_000));
    assert_eq!(u64::MAX.foreign_id(), Some(u64::MAX));
}

#[test]
fn optional_foreign_key_without_value_has_no_id() {
    assert_eq!(Some(9u64).foreign_id(), Some(9));
    assert_eq!(None::<u64>.foreign_id(), None);
}

#[test]
fn field_value_covers_scalars_and_text() {
    assert_eq!(true.to_index_value(), Some(IndexValue::Bool(true)));
    assert_eq!((-5i16).to_index_value(), Some(IndexValue::Int(-5)));
    assert_eq!(5u16.to_index_value(), Some(IndexValue::Uint(5)));
    assert_eq!(
        "a b".to_string().to_index_value(),
        Some(IndexValue::Text("a b".to_string()))
    );
    assert_eq!(
        "x".to_index_value(),
        Some(IndexValue::Text("x".to_string()))
    );
}

#[test]
fn unset_optional_field_is_not_indexed() {
    assert_eq!(None::<String>.to_index_value(), None);
    assert_eq!(
        Some("v".to_string()).to_index_value(),
        Some(IndexValue::Text("v".to_string()))
    );
}
