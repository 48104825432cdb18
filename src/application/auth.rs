/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Token management for the Concur API
//!
//! This module owns the OAuth2 access token:
//! - Password-grant acquisition against the token endpoint
//! - Lazy renewal once the cached token has expired
//! - Single-flight refresh: the cache lock is held across the token request,
//!   so concurrent callers wait for one refresh and then share its result
//! - Decoding the user identifier embedded in the token's JWT payload

use crate::application::config::Config;
use crate::constants::{DEFAULT_TOKEN_TTL_SECS, MAX_TOKEN_TTL_SECS, PROFILE_CLAIM};
use crate::error::AppError;
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Duration, Utc};
use reqwest::Client;
use reqwest::header::ACCEPT;
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::Mutex;
use tracing::{debug, error, info};

/// Bearer token together with its absolute expiry
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken {
    /// Raw bearer token
    pub token: String,
    /// Instant after which the token must not be used
    pub expires_at: DateTime<Utc>,
}

impl AccessToken {
    /// Creates a token that expires `expires_in_secs` seconds from now
    ///
    /// The lifetime is clamped to `[0, MAX_TOKEN_TTL_SECS]`.
    pub fn new(token: impl Into<String>, expires_in_secs: i64) -> Self {
        let lifetime = expires_in_secs.clamp(0, MAX_TOKEN_TTL_SECS);
        Self {
            token: token.into(),
            expires_at: Utc::now() + Duration::seconds(lifetime),
        }
    }

    /// A token is valid only while `now < expires_at`
    #[must_use]
    pub fn is_valid(&self) -> bool {
        Utc::now() < self.expires_at
    }

    /// Inverse of [`AccessToken::is_valid`]
    #[must_use]
    pub fn is_expired(&self) -> bool {
        !self.is_valid()
    }

    /// Seconds left before expiry, zero once expired
    #[must_use]
    pub fn seconds_until_expiry(&self) -> i64 {
        (self.expires_at - Utc::now()).num_seconds().max(0)
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("token", &format_args!("<{} chars>", self.token.len()))
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Body returned by the OAuth2 token endpoint
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<Value>,
}

impl TokenResponse {
    /// Concur reports `expires_in` as a number, some gateways as a string
    fn expires_in_secs(&self) -> i64 {
        match &self.expires_in {
            Some(Value::Number(n)) => n.as_i64(),
            Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
            _ => None,
        }
        .unwrap_or(DEFAULT_TOKEN_TTL_SECS)
    }
}

/// Authentication manager for the Concur API
///
/// Holds the credentials and the only piece of cached state in the client:
/// the current [`AccessToken`].
pub struct Auth {
    config: Arc<Config>,
    client: Client,
    token: Mutex<Option<AccessToken>>,
    token_requests: AtomicU64,
}

impl Auth {
    /// Creates a new Auth instance
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and the token endpoint
    /// * `client` - HTTP client shared with the resource requests
    pub fn new(config: Arc<Config>, client: Client) -> Self {
        Self {
            config,
            client,
            token: Mutex::new(None),
            token_requests: AtomicU64::new(0),
        }
    }

    /// Returns a valid bearer token, requesting a new one only when needed
    ///
    /// A cached, unexpired token is returned without any network call.
    /// Otherwise one password-grant request is made while the cache lock is
    /// held, so concurrent callers never refresh redundantly.
    ///
    /// # Returns
    /// * `Ok(String)` - The bearer token
    /// * `Err(AppError::Authentication)` - If the token endpoint fails
    pub async fn ensure_token(&self) -> Result<String, AppError> {
        let mut cached = self.token.lock().await;

        if let Some(token) = cached.as_ref() {
            if token.is_valid() {
                return Ok(token.token.clone());
            }
            debug!("Cached access token expired at {}", token.expires_at);
        }

        let fresh = self.request_token().await?;
        let value = fresh.token.clone();
        *cached = Some(fresh);
        Ok(value)
    }

    /// Drops the cached token if it is still the one that was rejected
    ///
    /// Comparing against `rejected` keeps a concurrent caller from discarding
    /// a token that another caller has just refreshed.
    pub async fn invalidate(&self, rejected: &str) {
        let mut cached = self.token.lock().await;
        if cached.as_ref().is_some_and(|t| t.token == rejected) {
            debug!("Invalidating rejected access token");
            *cached = None;
        }
    }

    /// Replaces the cached token, e.g. with one obtained by an external login flow
    pub async fn store_token(&self, token: AccessToken) {
        *self.token.lock().await = Some(token);
    }

    /// Returns a copy of the cached token, valid or not
    pub async fn cached_token(&self) -> Option<AccessToken> {
        self.token.lock().await.clone()
    }

    /// Number of requests sent to the token endpoint so far
    #[must_use]
    pub fn token_request_count(&self) -> u64 {
        self.token_requests.load(Ordering::Relaxed)
    }

    /// Returns the user identifier embedded in the current access token
    ///
    /// # Returns
    /// * `Ok(String)` - The user id
    /// * `Err(AppError::Authentication)` - If no token can be obtained or it carries no user claim
    pub async fn current_user_id(&self) -> Result<String, AppError> {
        let token = self.ensure_token().await?;
        decode_user_id(&token)
    }

    async fn request_token(&self) -> Result<AccessToken, AppError> {
        let credentials = &self.config.credentials;
        let url = &self.config.rest_api.token_url;

        let form = [
            ("grant_type", "password"),
            ("client_id", credentials.client_id.as_str()),
            ("client_secret", credentials.client_secret.as_str()),
            ("username", credentials.username.as_str()),
            ("password", credentials.password.as_str()),
        ];

        debug!("Requesting access token from {}", url);
        self.token_requests.fetch_add(1, Ordering::Relaxed);

        let response = self
            .client
            .post(url)
            .header(ACCEPT, "application/json")
            .form(&form)
            .send()
            .await
            .map_err(|e| AppError::Authentication(format!("error requesting token: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Token request failed with status {}: {}", status, body);
            return Err(AppError::Authentication(format!(
                "token request failed with status {status}: {body}"
            )));
        }

        let payload: TokenResponse = response
            .json()
            .await
            .map_err(|e| AppError::Authentication(format!("invalid token response: {e}")))?;

        let token = AccessToken::new(payload.access_token.clone(), payload.expires_in_secs());
        info!(
            "Obtained access token, expires in {} seconds",
            payload.expires_in_secs()
        );
        Ok(token)
    }
}

/// Extracts the user identifier from an unverified JWT access token
///
/// The payload segment is base64url-decoded without checking the signature;
/// the token was issued to this client over TLS. The `concur.profile` claim
/// holds a profile URL whose last path segment is the user id. When it is
/// absent the `sub` claim is used.
///
/// # Returns
/// * `Ok(String)` - The user id
/// * `Err(AppError::Authentication)` - If the token is malformed or has no user claim
pub fn decode_user_id(token: &str) -> Result<String, AppError> {
    let segments: Vec<&str> = token.split('.').collect();
    let [_, payload, _] = segments.as_slice() else {
        return Err(AppError::Authentication(
            "access token is not a three-segment JWT".to_string(),
        ));
    };

    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| AppError::Authentication(format!("invalid token payload encoding: {e}")))?;
    let claims: Value = serde_json::from_slice(&bytes)
        .map_err(|e| AppError::Authentication(format!("invalid token payload: {e}")))?;

    let from_profile = claims
        .get(PROFILE_CLAIM)
        .and_then(Value::as_str)
        .and_then(|url| url.trim_end_matches('/').rsplit('/').next())
        .filter(|id| !id.is_empty());

    let from_subject = || {
        claims
            .get("sub")
            .and_then(Value::as_str)
            .filter(|id| !id.is_empty())
    };

    from_profile
        .or_else(from_subject)
        .map(str::to_string)
        .ok_or_else(|| AppError::Authentication("access token carries no user claim".to_string()))
}
