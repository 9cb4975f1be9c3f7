use reqwest::StatusCode;
use std::error::Error;
use wm_client::error::{AppError, DecodeError, DecodeErrorKind};
use wm_client::model::decode::{FieldPath, JsonKind, Shape};

#[test]
fn test_app_error_display_rate_limit() {
    let error = AppError::RateLimitExceeded;
    assert_eq!(error.to_string(), "rate limit exceeded");
}

#[test]
fn test_app_error_display_unauthorized() {
    let error = AppError::Unauthorized;
    assert_eq!(error.to_string(), "unauthorized");
}

#[test]
fn test_app_error_display_not_found() {
    let error = AppError::NotFound("/items/x".to_string());
    assert_eq!(error.to_string(), "not found: /items/x");
}

#[test]
fn test_app_error_display_unexpected() {
    let error = AppError::Unexpected(StatusCode::BAD_REQUEST);
    assert!(error.to_string().contains("400"));
}

#[test]
fn test_app_error_display_item_not_in_set() {
    let error = AppError::ItemNotInSet {
        requested_id: "Z9".to_string(),
    };
    assert_eq!(
        error.to_string(),
        "consistency error: item `Z9` is not in its item set"
    );
    assert!(error.source().is_none());
}

#[test]
fn test_app_error_display_invalid_input() {
    let error = AppError::InvalidInput("blank name".to_string());
    assert_eq!(error.to_string(), "invalid input: blank name");
}

#[test]
fn test_app_error_from_decode_error() {
    let decode = DecodeError::mismatch(
        &FieldPath::root().key("payload").key("orders"),
        Shape::Sequence(Box::new(Shape::Record("OrderRow"))),
        JsonKind::Null,
    );
    let error: AppError = decode.clone().into();
    assert_eq!(
        error.to_string(),
        "decode error: at `payload.orders`: expected sequence of record OrderRow, found null"
    );
    assert!(error.source().is_some());
    match error {
        AppError::Decode(inner) => assert_eq!(inner, decode),
        other => panic!("expected a decode error, got {other:?}"),
    }
}

#[test]
fn test_app_error_source_only_for_wrapped_errors() {
    let plain = [
        AppError::Unauthorized,
        AppError::NotFound("/items/x".to_string()),
        AppError::RateLimitExceeded,
        AppError::Unexpected(StatusCode::BAD_GATEWAY),
        AppError::ItemNotInSet {
            requested_id: "Z9".to_string(),
        },
        AppError::InvalidInput("blank name".to_string()),
    ];
    for error in &plain {
        assert!(error.source().is_none(), "{error} has a source");
    }
}

#[test]
fn test_decode_error_missing() {
    let error = DecodeError::missing(&FieldPath::root().key("payload"), Shape::Object);
    assert_eq!(
        error.kind,
        DecodeErrorKind::MissingField {
            expected: Shape::Object
        }
    );
    assert_eq!(error.to_string(), "missing field `payload`, expected object");
}
