//! REST API client for the `/api/v1` auth and account endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every operation is a single round trip with no automatic retry. Failures
//! come back as a structured [`ApiError`] carrying the HTTP status and the
//! server's message (with the storefront's fallback when the body has none);
//! nothing is swallowed. A 401 from any token-bearing operation erases the
//! stored token here, at the one place that attaches it; callers finish the
//! session clear via `state::session::note_auth_failure`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::fmt;

use super::types::{Dish, MessageResponse, SignInResponse, User};
#[cfg(feature = "hydrate")]
use crate::util::token;

/// Structured failure from a REST operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status, or 0 when the request never reached the server.
    pub status: u16,
    /// Human-readable message for notifications.
    pub message: String,
}

impl ApiError {
    /// Whether this failure means the credential is invalid or expired.
    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }

    /// A failure carrying only a status, with the generic message.
    pub fn status_only(status: u16) -> Self {
        Self {
            status,
            message: DEFAULT_FAILURE_MESSAGE.to_owned(),
        }
    }

    /// A transport-level failure that never produced a response.
    pub fn network(message: String) -> Self {
        Self { status: 0, message }
    }

    #[cfg(not(feature = "hydrate"))]
    fn offline() -> Self {
        Self::network("not available on server".to_owned())
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (status {})", self.message, self.status)
    }
}

const DEFAULT_FAILURE_MESSAGE: &str = "Something went wrong!";

const API_BASE: &str = "/api/v1";

/// Browser-navigation target for the Google OAuth flow (not an XHR call).
pub fn oauth_google_url() -> String {
    format!("{API_BASE}/auth/google")
}

#[cfg(any(test, feature = "hydrate"))]
fn forgot_password_endpoint(email: &str) -> String {
    format!("{API_BASE}/auth/forgot-password?email={email}")
}

#[cfg(any(test, feature = "hydrate"))]
fn resend_verification_endpoint(email: &str) -> String {
    format!("{API_BASE}/auth/resend-verification-email?email={email}")
}

#[cfg(any(test, feature = "hydrate"))]
fn verify_email_endpoint(token: &str) -> String {
    format!("{API_BASE}/auth/verify-email?token={token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn dish_detail_endpoint(dish_id: &str) -> String {
    format!("{API_BASE}/auth/guest/get-dish-by-id/{dish_id}")
}

/// Build an [`ApiError`] from a failure response body, preferring the
/// server's `errors.error` field, then `message`, then the generic fallback.
#[cfg(any(test, feature = "hydrate"))]
fn failure_from_body(status: u16, body: &str) -> ApiError {
    let parsed: serde_json::Value = serde_json::from_str(body).unwrap_or_default();
    let message = parsed
        .pointer("/errors/error")
        .and_then(serde_json::Value::as_str)
        .or_else(|| parsed.get("message").and_then(serde_json::Value::as_str))
        .unwrap_or(DEFAULT_FAILURE_MESSAGE)
        .to_owned();
    ApiError { status, message }
}

/// Attach the stored bearer credential, if any.
///
/// Every authenticated operation funnels through this one visible step rather
/// than hidden middleware, and each call re-reads storage so a token saved or
/// cleared mid-session takes effect on the next request.
#[cfg(feature = "hydrate")]
fn authorized(req: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match token::load() {
        Some(value) => req.header("Authorization", &format!("Bearer {value}")),
        None => req,
    }
}

/// Convert a non-OK response into an [`ApiError`]. When the failed request
/// carried the bearer token and the server says it is no longer valid, the
/// stored token is erased on the spot.
#[cfg(feature = "hydrate")]
async fn failure(resp: gloo_net::http::Response, token_bearing: bool) -> ApiError {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    let err = failure_from_body(status, &body);
    if token_bearing && err.is_unauthorized() {
        token::clear();
    }
    err
}

#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(
    resp: gloo_net::http::Response,
) -> Result<T, ApiError> {
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::network(e.to_string()))
}

/// Authenticate with email + password via `POST /api/v1/auth/sign-in`.
///
/// Yields the access token; the caller must still fetch the profile before
/// treating the session as authenticated.
///
/// # Errors
///
/// Returns the server's failure payload (wrong credentials included) or a
/// transport error.
pub async fn sign_in(email: &str, password: &str) -> Result<SignInResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post(&format!("{API_BASE}/auth/sign-in"))
            .json(&payload)
            .map_err(|e| ApiError::network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;
        if !resp.ok() {
            return Err(failure(resp, false).await);
        }
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::offline())
    }
}

/// Create an account via `POST /api/v1/auth/sign-up`.
///
/// # Errors
///
/// Returns the server's failure payload or a transport error.
pub async fn sign_up(
    email: &str,
    password: &str,
    full_name: &str,
) -> Result<MessageResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({
            "email": email,
            "password": password,
            "fullName": full_name,
        });
        let resp = gloo_net::http::Request::post(&format!("{API_BASE}/auth/sign-up"))
            .json(&payload)
            .map_err(|e| ApiError::network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;
        if !resp.ok() {
            return Err(failure(resp, false).await);
        }
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password, full_name);
        Err(ApiError::offline())
    }
}

/// Fetch the current user via `GET /api/v1/client/user/profile`.
///
/// Requires a stored token; the bearer header is attached implicitly.
///
/// # Errors
///
/// Returns a 401-class error (which also erases the stored token) when the
/// credential is invalid or expired.
pub async fn fetch_profile() -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorized(gloo_net::http::Request::get(&format!(
            "{API_BASE}/client/user/profile"
        )))
        .send()
        .await
        .map_err(|e| ApiError::network(e.to_string()))?;
        if !resp.ok() {
            return Err(failure(resp, true).await);
        }
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::offline())
    }
}

/// Invalidate the server-side session via `GET /api/v1/client/user/logout`.
///
/// # Errors
///
/// Failures are reported but callers treat this call as best-effort.
pub async fn logout() -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorized(gloo_net::http::Request::get(&format!(
            "{API_BASE}/client/user/logout"
        )))
        .send()
        .await
        .map_err(|e| ApiError::network(e.to_string()))?;
        if !resp.ok() {
            return Err(failure(resp, true).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::offline())
    }
}

/// Request a password-reset email via `GET /api/v1/auth/forgot-password`.
///
/// # Errors
///
/// Returns the server's failure payload or a transport error.
pub async fn forgot_password(email: &str) -> Result<MessageResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&forgot_password_endpoint(email))
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;
        if !resp.ok() {
            return Err(failure(resp, false).await);
        }
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        Err(ApiError::offline())
    }
}

/// Set a new password from a reset token via `POST /api/v1/auth/reset-password`.
///
/// # Errors
///
/// Returns the server's failure payload or a transport error.
pub async fn reset_password(
    reset_token: &str,
    password: &str,
) -> Result<MessageResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "token": reset_token, "password": password });
        let resp = gloo_net::http::Request::post(&format!("{API_BASE}/auth/reset-password"))
            .json(&payload)
            .map_err(|e| ApiError::network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;
        if !resp.ok() {
            return Err(failure(resp, false).await);
        }
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (reset_token, password);
        Err(ApiError::offline())
    }
}

/// Re-send the account verification email via
/// `GET /api/v1/auth/resend-verification-email`.
///
/// # Errors
///
/// Returns the server's failure payload or a transport error.
pub async fn resend_verification(email: &str) -> Result<MessageResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&resend_verification_endpoint(email))
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;
        if !resp.ok() {
            return Err(failure(resp, false).await);
        }
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        Err(ApiError::offline())
    }
}

/// Confirm an emailed verification token via `GET /api/v1/auth/verify-email`.
///
/// # Errors
///
/// Returns the server's failure payload or a transport error.
pub async fn verify_email(verify_token: &str) -> Result<MessageResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&verify_email_endpoint(verify_token))
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;
        if !resp.ok() {
            return Err(failure(resp, false).await);
        }
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = verify_token;
        Err(ApiError::offline())
    }
}

/// Exchange the refresh cookie for a new access token via
/// `GET /api/v1/auth/refresh-token`. The new token replaces the stored one.
///
/// # Errors
///
/// Returns a 401-class error when the refresh credential is gone, which also
/// erases the stored access token.
pub async fn refresh_token() -> Result<SignInResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorized(gloo_net::http::Request::get(&format!(
            "{API_BASE}/auth/refresh-token"
        )))
        .send()
        .await
        .map_err(|e| ApiError::network(e.to_string()))?;
        if !resp.ok() {
            return Err(failure(resp, true).await);
        }
        let refreshed: SignInResponse = read_json(resp).await?;
        token::save(&refreshed.access_token);
        Ok(refreshed)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::offline())
    }
}

/// Update name/email via `PUT /api/v1/client/user/update`.
///
/// # Errors
///
/// Returns the server's failure payload or a transport error.
pub async fn update_profile(full_name: &str, email: &str) -> Result<MessageResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "fullName": full_name, "email": email });
        let resp = authorized(gloo_net::http::Request::put(&format!(
            "{API_BASE}/client/user/update"
        )))
        .json(&payload)
        .map_err(|e| ApiError::network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::network(e.to_string()))?;
        if !resp.ok() {
            return Err(failure(resp, true).await);
        }
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (full_name, email);
        Err(ApiError::offline())
    }
}

/// Change the account password via `PUT /api/v1/client/user/change-password`.
///
/// # Errors
///
/// Returns the server's failure payload (wrong old password included) or a
/// transport error. Rejections do not touch the session.
pub async fn change_password(
    user_id: &str,
    old_password: &str,
    new_password: &str,
) -> Result<MessageResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({
            "userId": user_id,
            "oldPassword": old_password,
            "newPassword": new_password,
        });
        let resp = authorized(gloo_net::http::Request::put(&format!(
            "{API_BASE}/client/user/change-password"
        )))
        .json(&payload)
        .map_err(|e| ApiError::network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::network(e.to_string()))?;
        if !resp.ok() {
            return Err(failure(resp, true).await);
        }
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (user_id, old_password, new_password);
        Err(ApiError::offline())
    }
}

/// Fetch the public dish list via `GET /api/v1/auth/guest/get-all-dishes`.
///
/// # Errors
///
/// Returns the server's failure payload or a transport error.
pub async fn fetch_dishes() -> Result<Vec<Dish>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&format!("{API_BASE}/auth/guest/get-all-dishes"))
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;
        if !resp.ok() {
            return Err(failure(resp, false).await);
        }
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::offline())
    }
}

/// Fetch one dish via `GET /api/v1/auth/guest/get-dish-by-id/{id}`.
///
/// # Errors
///
/// Returns the server's failure payload or a transport error.
pub async fn fetch_dish_detail(dish_id: &str) -> Result<Dish, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&dish_detail_endpoint(dish_id))
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;
        if !resp.ok() {
            return Err(failure(resp, false).await);
        }
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = dish_id;
        Err(ApiError::offline())
    }
}
