//! REST transport for communicating with the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the current
//! access token attached as a bearer credential when one exists.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<T, ApiError>` with a classified kind so auth flows can
//! tell a rejected credential from a flaky network. Requests carry a bounded
//! timeout; a timeout classifies as a network failure.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::error::{classify, ApiError};

/// Versioned base path, matching the deployment's reverse proxy.
pub const API_BASE: &str = "/api/v1";

/// Upper bound on any single request.
pub const REQUEST_TIMEOUT_MS: u32 = 15_000;

#[cfg(not(feature = "hydrate"))]
const NOT_AVAILABLE: &str = "not available on server";

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn endpoint(path: &str) -> String {
    format!("{API_BASE}{path}")
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn bearer_value(token: &str) -> String {
    format!("Bearer {token}")
}

pub(crate) fn request_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_timeout_message() -> String {
    format!("request timed out after {REQUEST_TIMEOUT_MS}ms")
}

/// Minimal percent-encoding for query-string values.
pub(crate) fn encode_component(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '%' => out.push_str("%25"),
            '&' => out.push_str("%26"),
            '?' => out.push_str("%3F"),
            '#' => out.push_str("%23"),
            '=' => out.push_str("%3D"),
            '+' => out.push_str("%2B"),
            ' ' => out.push_str("%20"),
            _ => out.push(ch),
        }
    }
    out
}

/// Append non-empty query parameters to a path.
pub fn with_query(path: &str, params: &[(&str, String)]) -> String {
    let mut out = String::from(path);
    let mut sep = '?';
    for (key, value) in params {
        if value.is_empty() {
            continue;
        }
        out.push(sep);
        sep = '&';
        out.push_str(key);
        out.push('=');
        out.push_str(&encode_component(value));
    }
    out
}

/// The backend wraps every body: `{success, data}` or `{success, error, code}`.
#[derive(Debug, serde::Deserialize)]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Fold a status + decoded envelope into the caller's payload or a
/// classified error. Pure so the mapping is testable off-browser.
pub fn decode_envelope<T>(status: u16, envelope: Envelope<T>) -> Result<T, ApiError> {
    if (200..300).contains(&status) && envelope.success {
        if let Some(data) = envelope.data {
            return Ok(data);
        }
    }
    let kind = classify(status, envelope.code.as_deref());
    let message = envelope
        .error
        .or(envelope.description)
        .unwrap_or_else(|| request_failed_message(status));
    Err(ApiError::new(kind, message))
}

#[cfg(feature = "hydrate")]
async fn send_with_timeout(
    send: impl std::future::Future<Output = Result<gloo_net::http::Response, gloo_net::Error>>,
) -> Result<gloo_net::http::Response, ApiError> {
    use futures::FutureExt;

    let send = send.fuse();
    let timeout = gloo_timers::future::TimeoutFuture::new(REQUEST_TIMEOUT_MS).fuse();
    futures::pin_mut!(send, timeout);
    futures::select! {
        resp = send => resp.map_err(|e| ApiError::network(e.to_string())),
        () = timeout => Err(ApiError::network(request_timeout_message())),
    }
}

#[cfg(feature = "hydrate")]
async fn decode_response<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    let status = resp.status();
    match resp.json::<Envelope<T>>().await {
        Ok(envelope) => decode_envelope(status, envelope),
        Err(_) if status >= 400 => Err(ApiError::new(classify(status, None), request_failed_message(status))),
        Err(e) => Err(ApiError::network(e.to_string())),
    }
}

/// `GET` a JSON payload, attaching the bearer header when a token is present.
pub async fn get_json<T: DeserializeOwned>(path: &str, token: Option<&str>) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let mut req = gloo_net::http::Request::get(&endpoint(path));
        if let Some(token) = token {
            req = req.header("Authorization", &bearer_value(token));
        }
        let resp = send_with_timeout(req.send()).await?;
        decode_response(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, token);
        Err(ApiError::network(NOT_AVAILABLE))
    }
}

/// `POST` a JSON body.
pub async fn post_json<T, B>(path: &str, token: Option<&str>, body: &B) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    B: serde::Serialize,
{
    #[cfg(feature = "hydrate")]
    {
        let mut req = gloo_net::http::Request::post(&endpoint(path));
        if let Some(token) = token {
            req = req.header("Authorization", &bearer_value(token));
        }
        let req = req.json(body).map_err(|e| ApiError::network(e.to_string()))?;
        let resp = send_with_timeout(req.send()).await?;
        decode_response(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, token, body);
        Err(ApiError::network(NOT_AVAILABLE))
    }
}

/// `PUT` a JSON body.
pub async fn put_json<T, B>(path: &str, token: Option<&str>, body: &B) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    B: serde::Serialize,
{
    #[cfg(feature = "hydrate")]
    {
        let mut req = gloo_net::http::Request::put(&endpoint(path));
        if let Some(token) = token {
            req = req.header("Authorization", &bearer_value(token));
        }
        let req = req.json(body).map_err(|e| ApiError::network(e.to_string()))?;
        let resp = send_with_timeout(req.send()).await?;
        decode_response(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, token, body);
        Err(ApiError::network(NOT_AVAILABLE))
    }
}

/// `DELETE` a resource.
pub async fn delete_json<T: DeserializeOwned>(path: &str, token: Option<&str>) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let mut req = gloo_net::http::Request::delete(&endpoint(path));
        if let Some(token) = token {
            req = req.header("Authorization", &bearer_value(token));
        }
        let resp = send_with_timeout(req.send()).await?;
        decode_response(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, token);
        Err(ApiError::network(NOT_AVAILABLE))
    }
}
