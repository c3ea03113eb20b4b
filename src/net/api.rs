//! REST API adapter for the sweet shop backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the stored
//! bearer token attached to every request. Server-side (SSR): stubs returning
//! a network error since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every operation returns `Result<_, ApiError>`; no retries happen here.
//! Unauthorized responses are mapped to their own variant so callers can run
//! the clear-session-and-redirect path without string matching.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{NewSweet, Sweet, TokenResponse, User};

#[cfg(any(test, feature = "hydrate"))]
fn sweet_purchase_endpoint(id: i64) -> String {
    format!("/sweets/{id}/purchase")
}

#[cfg(any(test, feature = "hydrate"))]
fn sweet_endpoint(id: i64) -> String {
    format!("/sweets/{id}")
}

/// Build the `application/x-www-form-urlencoded` body for `/auth/login`.
#[cfg(any(test, feature = "hydrate"))]
fn login_form_body(username: &str, password: &str) -> String {
    format!(
        "username={}&password={}",
        urlencoding::encode(username),
        urlencoding::encode(password)
    )
}

#[cfg(feature = "hydrate")]
fn bearer_header() -> Option<String> {
    crate::util::storage::read_token().map(|token| format!("Bearer {token}"))
}

/// Send a request with the stored bearer token attached (when present) and
/// decode a JSON response, mapping failures onto `ApiError`.
#[cfg(feature = "hydrate")]
async fn send_json<T: serde::de::DeserializeOwned>(
    req: gloo_net::http::RequestBuilder,
    body: Option<String>,
) -> Result<T, ApiError> {
    let resp = send(req, body).await?;
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn send(
    req: gloo_net::http::RequestBuilder,
    body: Option<String>,
) -> Result<gloo_net::http::Response, ApiError> {
    let req = match bearer_header() {
        Some(value) => req.header("Authorization", &value),
        None => req,
    };
    let req = match body {
        Some(body) => req
            .body(body)
            .map_err(|e| ApiError::Network(e.to_string()))?,
        None => req
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?,
    };
    let resp = req
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        let body = resp.text().await.unwrap_or_default();
        return Err(ApiError::from_response(resp.status(), &body));
    }
    Ok(resp)
}

#[cfg(not(feature = "hydrate"))]
fn ssr_stub<T>() -> Result<T, ApiError> {
    Err(ApiError::Network("not available on the server".to_owned()))
}

/// Register a new account via `POST /auth/register`.
///
/// # Errors
///
/// `Rejected` when the username or email is already taken, `Network` on
/// transport failure.
pub async fn register(username: &str, email: &str, password: &str) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({
            "username": username,
            "email": email,
            "password": password,
        });
        send_json(
            gloo_net::http::Request::post("/auth/register")
                .header("Content-Type", "application/json"),
            Some(payload.to_string()),
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, email, password);
        ssr_stub()
    }
}

/// Exchange credentials for a bearer token via `POST /auth/login`.
///
/// The backend expects form-encoded credentials on this one endpoint.
///
/// # Errors
///
/// `Unauthorized` on bad credentials, `Network` on transport failure.
pub async fn login(username: &str, password: &str) -> Result<TokenResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send_json(
            gloo_net::http::Request::post("/auth/login")
                .header("Content-Type", "application/x-www-form-urlencoded"),
            Some(login_form_body(username, password)),
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        ssr_stub()
    }
}

/// Resolve the current identity via `GET /auth/me`.
///
/// # Errors
///
/// `Unauthorized` when the stored token is missing or stale; callers decide
/// whether that clears the session.
pub async fn fetch_current_user() -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send_json(gloo_net::http::Request::get("/auth/me"), None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        ssr_stub()
    }
}

/// Fetch the full product list via `GET /sweets`.
///
/// # Errors
///
/// `Network` on transport failure.
pub async fn list_sweets() -> Result<Vec<Sweet>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send_json(gloo_net::http::Request::get("/sweets"), None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        ssr_stub()
    }
}

/// Create a sweet via `POST /sweets`.
///
/// # Errors
///
/// `Rejected` with the backend's validation detail, `Unauthorized` without a
/// valid token.
pub async fn create_sweet(sweet: &NewSweet) -> Result<Sweet, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::to_string(sweet).map_err(|e| ApiError::Network(e.to_string()))?;
        send_json(
            gloo_net::http::Request::post("/sweets").header("Content-Type", "application/json"),
            Some(body),
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = sweet;
        ssr_stub()
    }
}

/// Purchase one unit via `POST /sweets/{id}/purchase`; quantity is
/// decremented server-side and the updated sweet comes back.
///
/// # Errors
///
/// `Rejected` when the sweet is missing or out of stock.
pub async fn purchase_sweet(id: i64) -> Result<Sweet, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send_json(
            gloo_net::http::Request::post(&sweet_purchase_endpoint(id)),
            None,
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        ssr_stub()
    }
}

/// Delete a sweet via `DELETE /sweets/{id}`. Admin only; responds 204.
///
/// # Errors
///
/// `Unauthorized` without an admin token, `Rejected` when the sweet is gone.
pub async fn delete_sweet(id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send(gloo_net::http::Request::delete(&sweet_endpoint(id)), None).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        ssr_stub()
    }
}
