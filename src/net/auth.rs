//! Authentication endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `refresh` is the token refresher: one attempt, no internal retry; the
//! session layer decides recovery from the returned error kind. `logout` is
//! best-effort server-side invalidation; callers must reset local state
//! whether or not it succeeds.

use serde_json::json;

use super::api::{get_json, post_json};
use super::error::ApiError;
use super::types::{LoginData, MessageData, RefreshData, User};

/// Exchange credentials for a token pair and the account profile.
pub async fn login(username: &str, password: &str) -> Result<LoginData, ApiError> {
    post_json("/auth/login", None, &json!({ "username": username, "password": password })).await
}

/// Notify the backend that the session is over. Best-effort: the caller's
/// local teardown must not depend on this succeeding.
pub async fn logout(access_token: Option<&str>, refresh_token: Option<&str>) -> Result<MessageData, ApiError> {
    post_json(
        "/auth/logout",
        access_token,
        &json!({ "token": refresh_token.unwrap_or_default() }),
    )
    .await
}

/// Exchange a refresh token for a new access token. Single attempt.
pub async fn refresh(refresh_token: &str) -> Result<RefreshData, ApiError> {
    post_json("/auth/refresh", None, &json!({ "refresh_token": refresh_token })).await
}

/// Fetch the authenticated account for the given access token.
pub async fn me(access_token: &str) -> Result<User, ApiError> {
    get_json("/auth/me", Some(access_token)).await
}

/// Create an account. The flow may be disabled in a deployment; that surfaces
/// as a normal API error.
pub async fn register(full_name: &str, email: &str, password: &str) -> Result<User, ApiError> {
    post_json(
        "/auth/register",
        None,
        &json!({ "full_name": full_name, "email": email, "password": password }),
    )
    .await
}

/// Request a password-reset email. The backend answers success-shaped whether
/// or not the address exists, to prevent account enumeration.
pub async fn forgot_password(email: &str) -> Result<MessageData, ApiError> {
    post_json("/auth/forgot-password", None, &json!({ "email": email })).await
}

/// Redeem an emailed reset token for a new password.
pub async fn reset_password(token: &str, new_password: &str) -> Result<MessageData, ApiError> {
    post_json(
        "/auth/reset-password",
        None,
        &json!({ "token": token, "new_password": new_password }),
    )
    .await
}

/// Rotate the password of the authenticated account.
pub async fn change_password(
    access_token: &str,
    old_password: &str,
    new_password: &str,
) -> Result<MessageData, ApiError> {
    post_json(
        "/auth/change-password",
        Some(access_token),
        &json!({ "old_password": old_password, "new_password": new_password }),
    )
    .await
}
