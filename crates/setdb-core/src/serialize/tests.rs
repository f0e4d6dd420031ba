use super::*;
use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq, Serialize)]
struct Sample {
    id: u64,
    name: String,
}

#[test]
fn payload_decodes_back_to_the_same_value() {
    let sample = Sample {
        id: 7,
        name: "seven".to_string(),
    };

    let bytes = serialize(&sample).expect("serialize");
    let decoded: Sample = deserialize(&bytes).expect("deserialize");

    assert_eq!(decoded, sample);
}

#[test]
fn garbage_bytes_report_deserialize_kind() {
    let err = deserialize::<Sample>(&[0xff, 0x00, 0x13]).unwrap_err();

    assert_eq!(err.kind(), SerializeErrorKind::Deserialize);
}

#[test]
fn wrong_shape_reports_deserialize_kind() {
    let bytes = serialize(&("not", "a", "sample")).expect("serialize");
    let err = deserialize::<Sample>(&bytes).unwrap_err();

    assert_eq!(err.kind(), SerializeErrorKind::Deserialize);
}

#[test]
fn bounded_decode_rejects_before_parsing() {
    let bytes = serialize(&Sample {
        id: 1,
        name: "x".repeat(64),
    })
    .expect("serialize");

    let err = deserialize_bounded::<Sample>(&bytes, 8).unwrap_err();

    assert!(matches!(
        err,
        SerializeError::SizeLimitExceeded { max_bytes: 8, .. }
    ));
    assert_eq!(err.kind().to_string(), "size_limit_exceeded");
}

#[test]
fn oversized_payload_is_rejected_at_encode() {
    // Each zero byte encodes as one CBOR item, so the array header pushes
    // the payload past the limit.
    let huge = vec![0u8; MAX_RECORD_BYTES];
    let err = serialize(&huge).unwrap_err();

    assert_eq!(err.kind(), SerializeErrorKind::SizeLimitExceeded);
}
