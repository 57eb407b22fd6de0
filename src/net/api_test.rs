use super::*;
use crate::net::error::ErrorKind;
use crate::net::types::RefreshData;

#[test]
fn endpoint_prefixes_base_path() {
    assert_eq!(endpoint("/auth/login"), "/api/v1/auth/login");
}

#[test]
fn bearer_value_formats_header() {
    assert_eq!(bearer_value("at-1"), "Bearer at-1");
}

#[test]
fn request_failed_message_formats_status() {
    assert_eq!(request_failed_message(503), "request failed: 503");
}

#[test]
fn request_timeout_message_names_budget() {
    assert_eq!(request_timeout_message(), "request timed out after 15000ms");
}

#[test]
fn with_query_skips_empty_params() {
    let url = with_query(
        "/teachers",
        &[
            ("page", "2".to_owned()),
            ("search", String::new()),
            ("status", "ACTIVE".to_owned()),
        ],
    );
    assert_eq!(url, "/teachers?page=2&status=ACTIVE");
}

#[test]
fn with_query_without_params_is_bare_path() {
    assert_eq!(with_query("/rooms", &[]), "/rooms");
}

#[test]
fn encode_component_escapes_reserved_characters() {
    assert_eq!(encode_component("a&b=c d"), "a%26b%3Dc%20d");
    assert_eq!(encode_component("100%"), "100%25");
}

#[test]
fn decode_envelope_unwraps_success_data() {
    let envelope = Envelope {
        success: true,
        data: Some(RefreshData { access_token: "at-2".to_owned() }),
        error: None,
        code: None,
        description: None,
    };
    let data = decode_envelope(200, envelope).unwrap();
    assert_eq!(data.access_token, "at-2");
}

#[test]
fn decode_envelope_classifies_error_code() {
    let envelope: Envelope<RefreshData> = serde_json::from_str(
        r#"{"success":false,"error":"Token expired","code":"token.expired"}"#,
    )
    .unwrap();
    let err = decode_envelope(401, envelope).unwrap_err();
    assert_eq!(err.kind, ErrorKind::CredentialInvalid);
    assert_eq!(err.message, "Token expired");
}

#[test]
fn decode_envelope_success_flag_false_is_an_error() {
    let envelope: Envelope<RefreshData> = serde_json::from_str(r#"{"success":false}"#).unwrap();
    let err = decode_envelope(200, envelope).unwrap_err();
    assert_eq!(err.message, "request failed: 200");
}

#[test]
fn decode_envelope_missing_data_on_success_is_an_error() {
    let envelope: Envelope<RefreshData> = serde_json::from_str(r#"{"success":true}"#).unwrap();
    assert!(decode_envelope(200, envelope).is_err());
}
