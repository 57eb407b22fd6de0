//! API error type and response classification.
//!
//! ERROR HANDLING
//! ==============
//! Every wire failure is folded into an `ApiError` with a coarse `ErrorKind`.
//! The session layer's recovery policy hangs off the kind: credential failures
//! tear the session down, transient failures leave persisted credentials
//! alone. Classification must therefore never be skipped or guessed.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Nonstandard status the backend uses for an expired or revoked token.
pub const HTTP_STATUS_TOKEN_EXPIRED: u16 = 469;

/// Coarse classification of a failed API call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The presented token or credentials were rejected (401, 469, or an
    /// `unauthorized`/`token.expired` error code).
    CredentialInvalid,
    /// Authenticated but not allowed (403).
    Forbidden,
    /// Resource does not exist (404).
    NotFound,
    /// The request payload was rejected (400, 422).
    Validation,
    /// The backend failed (5xx).
    Server,
    /// The request never completed: connectivity failure or timeout.
    Network,
}

impl ErrorKind {
    /// True for failures that say nothing about credential validity.
    pub fn is_transient(self) -> bool {
        matches!(self, ErrorKind::Server | ErrorKind::Network)
    }

    /// True when the backend rejected the credential itself. 403 counts here
    /// for the bootstrap/refresh path, where any auth-class rejection means
    /// the persisted token is unusable.
    pub fn is_credential_failure(self) -> bool {
        matches!(self, ErrorKind::CredentialInvalid | ErrorKind::Forbidden)
    }
}

/// A failed API call, carrying a display-ready message.
#[derive(Clone, Debug, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub kind: ErrorKind,
    pub message: String,
}

impl ApiError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into() }
    }

    /// Transport-level failure (request never got a response).
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Network, message)
    }
}

/// Map an HTTP status plus the backend's optional machine error code to a
/// kind. The code wins over the status when both are present, since the
/// backend reports expired tokens under more than one status.
pub fn classify(status: u16, code: Option<&str>) -> ErrorKind {
    match code {
        Some("token.expired" | "unauthorized") => return ErrorKind::CredentialInvalid,
        Some("forbidden") => return ErrorKind::Forbidden,
        Some("data.not_found") => return ErrorKind::NotFound,
        Some("data.invalid" | "unprocessable_entity") => return ErrorKind::Validation,
        _ => {}
    }
    match status {
        401 | HTTP_STATUS_TOKEN_EXPIRED => ErrorKind::CredentialInvalid,
        403 => ErrorKind::Forbidden,
        404 => ErrorKind::NotFound,
        400 | 422 => ErrorKind::Validation,
        _ => ErrorKind::Server,
    }
}
