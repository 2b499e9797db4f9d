#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

#[test]
fn GenError___config___displays_field_and_message() {
    let err = GenError::config("java.version", "unsupported Java version: 9");

    let display = err.to_string();

    assert_eq!(
        display,
        "configuration error in 'java.version': unsupported Java version: 9"
    );
}

#[test]
fn GenError___in_type_with_field___attributes_type_and_field() {
    let err = GenError::type_mapping("", "type reference has neither a name nor an element")
        .in_type("User", Some("posts"));

    assert_eq!(err.type_name(), Some("User"));
    assert_eq!(err.field_name(), Some("posts"));
    assert!(err.to_string().starts_with("failed to generate User.posts: "));
}

#[test]
fn GenError___in_type_without_field___omits_field_suffix() {
    let err = GenError::Schema("bad".into()).in_type("Post", None);

    assert_eq!(err.field_name(), None);
    assert_eq!(err.to_string(), "failed to generate Post: schema error: bad");
}

#[test]
fn GenError___generation___exposes_cause_as_source() {
    use std::error::Error;

    let err = GenError::type_mapping("X", "broken").in_type("User", None);

    let source = err.source().map(|s| s.to_string());

    assert_eq!(
        source.as_deref(),
        Some("type mapping error for 'X': broken")
    );
}

#[test]
fn GenError___from_serde_error___converts_to_schema_error() {
    let json_err = serde_json::from_str::<String>("invalid").unwrap_err();

    let err: GenError = json_err.into();

    assert!(matches!(err, GenError::Schema(_)));
}

#[test_case(GenError::config("a", "b"), ErrorCode::Config, "CONFIG")]
#[test_case(GenError::Schema("s".into()), ErrorCode::Parse, "PARSE")]
#[test_case(GenError::type_mapping("T", "m"), ErrorCode::Typemap, "TYPEMAP")]
#[test_case(GenError::TypeNotFound("T".into()), ErrorCode::Generate, "GENERATE")]
#[test_case(
    GenError::Output {
        path: "out/User.java".into(),
        source: std::io::Error::other("disk full"),
    },
    ErrorCode::Output,
    "OUTPUT"
)]
fn GenError___variant___maps_to_code(error: GenError, expected: ErrorCode, text: &str) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().to_string(), text);
}

#[test]
fn TypeMappingWarning___display___names_the_type() {
    let warning = TypeMappingWarning::new("Money");

    assert_eq!(warning.to_string(), "unknown type 'Money', will use as-is");
}
