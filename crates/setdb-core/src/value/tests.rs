use super::*;
use proptest::prelude::*;

#[test]
fn integers_render_without_padding_or_plus_sign() {
    assert_eq!(IndexValue::from(7u8).canonical(), "7");
    assert_eq!(IndexValue::from(0u64).canonical(), "0");
    assert_eq!(IndexValue::from(-42i32).canonical(), "-42");
    assert_eq!(IndexValue::from(i64::MIN).canonical(), "-9223372036854775808");
    assert_eq!(IndexValue::from(u64::MAX).canonical(), "18446744073709551615");
}

#[test]
fn text_is_verbatim() {
    assert_eq!(IndexValue::from("Test").canonical(), "Test");
    assert_eq!(IndexValue::from(" test ").canonical(), " test ");
    assert_ne!(
        IndexValue::from("test").canonical(),
        IndexValue::from("TEST").canonical()
    );
}

#[test]
fn booleans_render_as_words() {
    assert_eq!(IndexValue::from(true).canonical(), "true");
    assert_eq!(IndexValue::from(false).canonical(), "false");
}

#[test]
fn integer_width_does_not_change_rendering() {
    assert_eq!(
        IndexValue::from(12u8).canonical(),
        IndexValue::from(12u64).canonical()
    );
    assert_eq!(
        IndexValue::from(-3i8).canonical(),
        IndexValue::from(-3i64).canonical()
    );
}

proptest! {
    #[test]
    fn uint_rendering_parses_back(v in any::<u64>()) {
        let rendered = IndexValue::from(v).canonical();
        prop_assert_eq!(rendered.parse::<u64>().ok(), Some(v));
    }

    #[test]
    fn int_rendering_parses_back(v in any::<i64>()) {
        let rendered = IndexValue::from(v).canonical();
        prop_assert!(!rendered.starts_with('+'));
        prop_assert_eq!(rendered.parse::<i64>().ok(), Some(v));
    }
}
