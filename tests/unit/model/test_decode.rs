use chrono::{TimeZone, Utc};
use serde_json::json;
use wm_client::error::DecodeErrorKind;
use wm_client::model::decode::{
    Decode, FieldPath, FieldSpec, JsonKind, PathSegment, Record, Shape, decode, parse_timestamp,
};
use wm_client::presentation::common::Platform;
use wm_client::presentation::order::{OrderRow, UserStatus};

wm_client::record! {
    #[derive(Debug, Clone, PartialEq)]
    pub struct Sample {
        pub name: String,
        pub count: i64,
        pub flag: Option<bool>,
        pub tags: Vec<String>,
        pub platform: Option<Platform>,
    }
}

#[test]
fn test_decode_record_all_fields() {
    let value = json!({
        "name": "sample",
        "count": 3,
        "flag": true,
        "tags": ["a", "b"],
        "platform": "xbox"
    });
    let sample: Sample = decode(&value).unwrap();
    assert_eq!(
        sample,
        Sample {
            name: "sample".to_string(),
            count: 3,
            flag: Some(true),
            tags: vec!["a".to_string(), "b".to_string()],
            platform: Some(Platform::Xbox),
        }
    );
}

#[test]
fn test_absent_optional_differs_from_falsy() {
    let absent: Sample = decode(&json!({"name": "", "count": 0, "tags": []})).unwrap();
    let falsy: Sample =
        decode(&json!({"name": "", "count": 0, "flag": false, "tags": []})).unwrap();
    let null: Sample =
        decode(&json!({"name": "", "count": 0, "flag": null, "tags": []})).unwrap();

    assert_eq!(absent.flag, None);
    assert_eq!(null.flag, None);
    assert_eq!(falsy.flag, Some(false));
    assert_ne!(absent, falsy);
}

#[test]
fn test_empty_sequence_is_empty_vec() {
    let sample: Sample = decode(&json!({"name": "x", "count": 1, "tags": []})).unwrap();
    assert!(sample.tags.is_empty());
}

#[test]
fn test_missing_required_field() {
    let err = decode::<Sample>(&json!({"name": "x", "tags": []})).unwrap_err();
    assert_eq!(err.path, FieldPath::root().key("count"));
    assert_eq!(
        err.kind,
        DecodeErrorKind::MissingField {
            expected: Shape::Integer
        }
    );
    assert_eq!(err.to_string(), "missing field `count`, expected integer");
}

#[test]
fn test_missing_sequence_is_an_error() {
    let err = decode::<Sample>(&json!({"name": "x", "count": 1})).unwrap_err();
    assert_eq!(err.path.to_string(), "tags");
    assert!(matches!(err.kind, DecodeErrorKind::MissingField { .. }));
}

#[test]
fn test_type_mismatch_reports_found_kind() {
    let err = decode::<Sample>(&json!({"name": 5, "count": 1, "tags": []})).unwrap_err();
    assert_eq!(
        err.kind,
        DecodeErrorKind::TypeMismatch {
            expected: Shape::String,
            found: JsonKind::Number
        }
    );
    assert_eq!(err.to_string(), "at `name`: expected string, found number");
}

#[test]
fn test_record_against_non_object() {
    let err = decode::<Sample>(&json!([1, 2])).unwrap_err();
    assert!(err.path.is_root());
    assert_eq!(err.to_string(), "at `<root>`: expected record Sample, found array");
}

#[test]
fn test_sequence_element_path() {
    let err =
        decode::<Sample>(&json!({"name": "x", "count": 1, "tags": ["a", 2]})).unwrap_err();
    assert_eq!(
        err.path.segments(),
        &[PathSegment::Key("tags".to_string()), PathSegment::Index(1)]
    );
    assert_eq!(err.path.to_string(), "tags[1]");
}

#[test]
fn test_unknown_enum_value() {
    let err = decode::<Sample>(&json!({"name": "x", "count": 1, "tags": [], "platform": "amiga"}))
        .unwrap_err();
    assert_eq!(
        err.kind,
        DecodeErrorKind::UnknownVariant {
            enumeration: "Platform",
            value: "amiga".to_string()
        }
    );
    assert_eq!(err.to_string(), "at `platform`: unknown Platform value `amiga`");
}

#[test]
fn test_enum_from_non_string() {
    let err = UserStatus::decode(&json!(1), &FieldPath::root().key("status")).unwrap_err();
    assert_eq!(
        err.kind,
        DecodeErrorKind::TypeMismatch {
            expected: Shape::Enum("UserStatus"),
            found: JsonKind::Number
        }
    );
}

#[test]
fn test_integers_reject_fractions_and_overflow() {
    let path = FieldPath::root();
    assert_eq!(i64::decode(&json!(42), &path).unwrap(), 42);
    assert_eq!(i64::decode(&json!(-7), &path).unwrap(), -7);
    assert!(i64::decode(&json!(4.5), &path).is_err());
    assert!(u32::decode(&json!(-1), &path).is_err());
    assert!(i32::decode(&json!(i64::MAX), &path).is_err());
    assert_eq!(u64::decode(&json!(u64::MAX), &path).unwrap(), u64::MAX);
}

#[test]
fn test_floats_accept_integers() {
    let path = FieldPath::root();
    assert_eq!(f64::decode(&json!(80), &path).unwrap(), 80.0);
    assert_eq!(f64::decode(&json!(80.25), &path).unwrap(), 80.25);
    assert!(f64::decode(&json!("80"), &path).is_err());
}

#[test]
fn test_timestamp_formats() {
    let path = FieldPath::root();
    let expected = Utc.with_ymd_and_hms(2024, 3, 1, 10, 15, 30).unwrap();

    let with_offset =
        chrono::DateTime::<Utc>::decode(&json!("2024-03-01T12:15:30+02:00"), &path).unwrap();
    assert_eq!(with_offset, expected);

    let zulu = chrono::DateTime::<Utc>::decode(&json!("2024-03-01T10:15:30Z"), &path).unwrap();
    assert_eq!(zulu, expected);

    let naive = chrono::DateTime::<Utc>::decode(&json!("2024-03-01T10:15:30.000"), &path).unwrap();
    assert_eq!(naive, expected);

    let unix = chrono::DateTime::<Utc>::decode(&json!(expected.timestamp()), &path).unwrap();
    assert_eq!(unix, expected);

    let fractional = parse_timestamp("2024-03-01T10:15:30.123+00:00").unwrap();
    assert_eq!(fractional.timestamp_subsec_millis(), 123);
}

#[test]
fn test_fractional_unix_timestamps() {
    let path = FieldPath::root();

    let negative = chrono::DateTime::<Utc>::decode(&json!(-1.5), &path).unwrap();
    assert_eq!(negative.timestamp_millis(), -1500);

    let positive = chrono::DateTime::<Utc>::decode(&json!(1709288130.25), &path).unwrap();
    assert_eq!(positive.timestamp(), 1709288130);
    assert_eq!(positive.timestamp_subsec_millis(), 250);

    let carried = chrono::DateTime::<Utc>::decode(&json!(0.9999999999), &path).unwrap();
    assert_eq!(carried.timestamp(), 1);
    assert_eq!(carried.timestamp_subsec_nanos(), 0);

    let carried_negative = chrono::DateTime::<Utc>::decode(&json!(-0.00000000001), &path).unwrap();
    assert_eq!(carried_negative.timestamp(), 0);
    assert_eq!(carried_negative.timestamp_subsec_nanos(), 0);
}

#[test]
fn test_out_of_range_unix_timestamp() {
    let path = FieldPath::root();
    let err = chrono::DateTime::<Utc>::decode(&json!(1e30), &path).unwrap_err();
    assert!(matches!(err.kind, DecodeErrorKind::InvalidTimestamp { .. }));
}

#[test]
fn test_invalid_timestamp() {
    let path = FieldPath::root().key("last_seen");
    let err = chrono::DateTime::<Utc>::decode(&json!("yesterday"), &path).unwrap_err();
    assert_eq!(
        err.kind,
        DecodeErrorKind::InvalidTimestamp {
            value: "yesterday".to_string()
        }
    );
    assert_eq!(err.to_string(), "at `last_seen`: invalid timestamp `yesterday`");
}

#[test]
fn test_record_field_table() {
    assert_eq!(Sample::NAME, "Sample");
    assert_eq!(
        Sample::fields(),
        vec![
            FieldSpec {
                name: "name",
                shape: Shape::String
            },
            FieldSpec {
                name: "count",
                shape: Shape::Integer
            },
            FieldSpec {
                name: "flag",
                shape: Shape::Optional(Box::new(Shape::Boolean))
            },
            FieldSpec {
                name: "tags",
                shape: Shape::Sequence(Box::new(Shape::String))
            },
            FieldSpec {
                name: "platform",
                shape: Shape::Optional(Box::new(Shape::Enum("Platform")))
            },
        ]
    );
}

#[test]
fn test_order_row_field_table_mentions_nested_record() {
    let user = OrderRow::fields()
        .into_iter()
        .find(|field| field.name == "user")
        .unwrap();
    assert_eq!(user.shape, Shape::Record("UserShort"));
    assert_eq!(user.shape.to_string(), "record UserShort");
}

#[test]
fn test_shape_display() {
    assert_eq!(
        Shape::Sequence(Box::new(Shape::Record("OrderRow"))).to_string(),
        "sequence of record OrderRow"
    );
    assert_eq!(
        Shape::Optional(Box::new(Shape::Integer)).to_string(),
        "optional integer"
    );
    assert_eq!(Shape::Enum("Platform").to_string(), "enum Platform");
}

#[test]
fn test_field_path_display() {
    let path = FieldPath::root()
        .key("payload")
        .key("orders")
        .index(3)
        .key("user")
        .key("status");
    assert_eq!(path.to_string(), "payload.orders[3].user.status");
    assert_eq!(FieldPath::root().to_string(), "<root>");
}

#[test]
fn test_decode_does_not_mutate_input() {
    let value = json!({"name": "x", "count": 1, "tags": ["a"]});
    let before = value.clone();
    let _sample: Sample = decode(&value).unwrap();
    assert_eq!(value, before);
}
