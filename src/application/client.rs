/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Authenticated client for the Concur API
//!
//! Every request carries `Authorization: Bearer <token>` and
//! `Accept: application/json`; requests with a body also carry
//! `Content-Type: application/json`. A `401 Unauthorized` answer invalidates
//! the cached token and the request is retried exactly once with a fresh one.
//!
//! # Example
//! ```ignore
//! use concur_client::prelude::*;
//!
//! let client = Client::new(Config::new())?;
//! let report: serde_json::Value = client.get("expense/reports/ABC123").await?;
//! ```

use crate::application::auth::{AccessToken, Auth};
use crate::application::config::Config;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client as HttpClient, Method, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, warn};

/// Outcome of a single HTTP attempt
enum Attempt {
    Success(Response),
    Unauthorized(String),
}

/// Client for the Concur API with automatic token management
pub struct Client {
    auth: Arc<Auth>,
    http_client: HttpClient,
    config: Arc<Config>,
}

impl Client {
    /// Creates a new client without contacting the API
    ///
    /// The first request acquires the access token.
    ///
    /// # Returns
    /// * `Ok(Client)` - Client ready to use
    /// * `Err(AppError::Authentication)` - If any credential is missing
    /// * `Err(AppError::Network)` - If the HTTP client cannot be built
    pub fn new(config: Config) -> Result<Self, AppError> {
        config.validate()?;
        let config = Arc::new(config);

        let http_client = HttpClient::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;

        let auth = Arc::new(Auth::new(config.clone(), http_client.clone()));

        Ok(Self {
            auth,
            http_client,
            config,
        })
    }

    /// Creates a new client and acquires the first access token
    pub async fn connect(config: Config) -> Result<Self, AppError> {
        let client = Self::new(config)?;
        client.auth.ensure_token().await?;
        Ok(client)
    }

    /// Makes a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.request(Method::GET, path, None::<&()>, &[]).await
    }

    /// Makes a GET request with query parameters
    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, AppError> {
        self.request(Method::GET, path, None::<&()>, params).await
    }

    /// Makes a POST request with a JSON body
    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        self.request(Method::POST, path, Some(body), &[]).await
    }

    /// Makes a PUT request with a JSON body
    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        self.request(Method::PUT, path, Some(body), &[]).await
    }

    /// Makes a DELETE request
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.request(Method::DELETE, path, None::<&()>, &[]).await
    }

    /// Makes an authenticated request and decodes the JSON response
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `path` - Path relative to `{base_url}/api/{api_version}/`, or an absolute URL
    /// * `body` - Optional JSON body
    /// * `params` - Query parameters
    ///
    /// # Returns
    /// * `Ok(T)` - Decoded body; an empty body decodes from JSON `null`
    /// * `Err(AppError)` - 404 as `NotFound`, 400 as `Validation`, a repeated
    ///   401 as `Authentication`, anything else as `Api` or `Network`
    pub async fn request<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        params: &[(&str, String)],
    ) -> Result<T, AppError> {
        let url = self.url_for(path);
        let token = self.auth.ensure_token().await?;

        let response = match self
            .request_internal(method.clone(), &url, body, params, &token)
            .await?
        {
            Attempt::Success(response) => response,
            Attempt::Unauthorized(_) => {
                warn!("Access token rejected, refreshing and retrying once");
                self.auth.invalidate(&token).await;
                let token = self.auth.ensure_token().await?;

                match self
                    .request_internal(method, &url, body, params, &token)
                    .await?
                {
                    Attempt::Success(response) => response,
                    Attempt::Unauthorized(body) => {
                        error!("Request to {} still unauthorized after token refresh", url);
                        return Err(AppError::from_status(StatusCode::UNAUTHORIZED, body));
                    }
                }
            }
        };

        self.parse_response(response).await
    }

    /// Sends one attempt; every non-2xx status except 401 becomes an error here
    async fn request_internal<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
        params: &[(&str, String)],
        token: &str,
    ) -> Result<Attempt, AppError> {
        debug!("{} {}", method, url);

        let mut request = self
            .http_client
            .request(method, url)
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .header(ACCEPT, "application/json");

        if !params.is_empty() {
            request = request.query(params);
        }

        if let Some(b) = body {
            request = request.header(CONTENT_TYPE, "application/json").json(b);
        }

        let response = request.send().await?;

        let status = response.status();
        debug!("Response status: {}", status);

        if status == StatusCode::UNAUTHORIZED {
            let body = response.text().await.unwrap_or_default();
            return Ok(Attempt::Unauthorized(body));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Request failed with status {}: {}", status, body);
            return Err(AppError::from_status(status, body));
        }

        Ok(Attempt::Success(response))
    }

    /// Parses a response into the desired type
    async fn parse_response<T: DeserializeOwned>(&self, response: Response) -> Result<T, AppError> {
        let text = response.text().await?;
        let value = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text)?
        };
        Ok(serde_json::from_value(value)?)
    }

    /// Resolves a resource path against the versioned API root
    fn url_for(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        let rest = &self.config.rest_api;
        format!(
            "{}/api/{}/{}",
            rest.base_url.trim_end_matches('/'),
            rest.api_version,
            path.trim_start_matches('/')
        )
    }

    /// Resolves a path against the API host, outside the versioned root
    ///
    /// Used for endpoint families that carry their own version, such as
    /// `expenseconfig/v4/...`.
    #[must_use]
    pub fn host_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.rest_api.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Returns a valid bearer token, acquiring one if needed
    pub async fn ensure_token(&self) -> Result<String, AppError> {
        self.auth.ensure_token().await
    }

    /// Seeds the token cache with a token obtained elsewhere
    pub async fn store_token(&self, token: AccessToken) {
        self.auth.store_token(token).await;
    }

    /// Returns the user id embedded in the current access token
    pub async fn current_user_id(&self) -> Result<String, AppError> {
        self.auth.current_user_id().await
    }

    /// Gets a reference to the underlying Auth instance
    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    /// Gets the configuration this client was built with
    pub fn config(&self) -> &Config {
        &self.config
    }
}
