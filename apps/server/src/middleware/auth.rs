//! Basic authentication middleware.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Request, State},
    http::{
        StatusCode,
        header::{AUTHORIZATION, HeaderValue, WWW_AUTHENTICATE},
    },
    middleware::Next,
    response::{IntoResponse, Response},
};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde_json::json;
use user_store::UserStore;

use crate::state::AppState;

/// Decodes a `Basic <base64(user:pass)>` authorization header value.
fn decode_basic(header: &str) -> Option<(String, String)> {
    let encoded = header.strip_prefix("Basic ")?;
    let decoded = STANDARD.decode(encoded).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (username, password) = decoded.split_once(':')?;
    Some((username.to_string(), password.to_string()))
}

/// Extracts basic auth credentials from the Authorization header.
fn extract_credentials(request: &Request) -> Option<(String, String)> {
    request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(decode_basic)
}

/// Builds the 401 response for missing or wrong credentials.
fn unauthorized() -> Response {
    let mut response = (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "error": "Unauthorized" })),
    )
        .into_response();
    response.headers_mut().insert(
        WWW_AUTHENTICATE,
        HeaderValue::from_static("Basic realm=\"Restricted\""),
    );
    response
}

/// Basic authentication middleware.
///
/// Compares the credentials in the Authorization header against the static
/// pair from the configuration. Handlers behind this layer never see an
/// unauthenticated request.
pub async fn basic_auth<S: UserStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    request: Request,
    next: Next,
) -> Response {
    let authorized = extract_credentials(&request).is_some_and(|(username, password)| {
        username == state.config.auth_username && password == state.config.auth_password
    });

    if !authorized {
        return unauthorized();
    }

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_basic_valid() {
        // "admin:password"
        let header = format!("Basic {}", STANDARD.encode("admin:password"));
        let (username, password) = decode_basic(&header).unwrap();
        assert_eq!(username, "admin");
        assert_eq!(password, "password");
    }

    #[test]
    fn test_decode_basic_password_with_colon() {
        let header = format!("Basic {}", STANDARD.encode("admin:pass:word"));
        let (username, password) = decode_basic(&header).unwrap();
        assert_eq!(username, "admin");
        assert_eq!(password, "pass:word");
    }

    #[test]
    fn test_decode_basic_missing_scheme() {
        assert_eq!(decode_basic("Bearer token"), None);
    }

    #[test]
    fn test_decode_basic_invalid_encoding() {
        assert_eq!(decode_basic("Basic not-base64!"), None);
    }

    #[test]
    fn test_decode_basic_no_separator() {
        let header = format!("Basic {}", STANDARD.encode("admin"));
        assert_eq!(decode_basic(&header), None);
    }
}
