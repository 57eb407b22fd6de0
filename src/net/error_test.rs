use super::*;

#[test]
fn classify_401_as_credential_invalid() {
    assert_eq!(classify(401, None), ErrorKind::CredentialInvalid);
}

#[test]
fn classify_469_as_credential_invalid() {
    assert_eq!(classify(HTTP_STATUS_TOKEN_EXPIRED, None), ErrorKind::CredentialInvalid);
}

#[test]
fn classify_token_expired_code_over_status() {
    // The backend has been observed reporting expired tokens under a 400.
    assert_eq!(classify(400, Some("token.expired")), ErrorKind::CredentialInvalid);
}

#[test]
fn classify_403_as_forbidden() {
    assert_eq!(classify(403, None), ErrorKind::Forbidden);
}

#[test]
fn classify_404_as_not_found() {
    assert_eq!(classify(404, Some("data.not_found")), ErrorKind::NotFound);
}

#[test]
fn classify_422_as_validation() {
    assert_eq!(classify(422, None), ErrorKind::Validation);
}

#[test]
fn classify_5xx_as_server() {
    assert_eq!(classify(500, None), ErrorKind::Server);
    assert_eq!(classify(503, None), ErrorKind::Server);
}

#[test]
fn server_and_network_are_transient() {
    assert!(ErrorKind::Server.is_transient());
    assert!(ErrorKind::Network.is_transient());
    assert!(!ErrorKind::CredentialInvalid.is_transient());
    assert!(!ErrorKind::Forbidden.is_transient());
}

#[test]
fn credential_failure_covers_forbidden() {
    assert!(ErrorKind::CredentialInvalid.is_credential_failure());
    assert!(ErrorKind::Forbidden.is_credential_failure());
    assert!(!ErrorKind::Network.is_credential_failure());
}

#[test]
fn api_error_displays_message() {
    let err = ApiError::network("connection refused");
    assert_eq!(err.to_string(), "connection refused");
    assert_eq!(err.kind, ErrorKind::Network);
}
