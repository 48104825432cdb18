/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::{DEFAULT_API_VERSION, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, TOKEN_PATH};
use crate::error::AppError;
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize, Serializer};
use tracing::{debug, error};

const REDACTED: &str = "********";

fn redact<S: Serializer>(value: &str, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_empty() {
        serializer.serialize_str("")
    } else {
        serializer.serialize_str(REDACTED)
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
/// OAuth2 password-grant credentials for the Concur API
///
/// Secrets are redacted whenever the value is serialized, displayed or
/// debug-printed, so a `Credentials` can be logged safely.
pub struct Credentials {
    /// OAuth2 client (application) identifier
    pub client_id: String,
    /// OAuth2 client secret
    #[serde(serialize_with = "redact")]
    pub client_secret: String,
    /// Concur login name
    pub username: String,
    /// Concur password or company request token
    #[serde(serialize_with = "redact")]
    pub password: String,
}

impl Credentials {
    /// Creates a new set of credentials
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            username: username.into(),
            password: password.into(),
        }
    }

    /// Returns the environment variable names of every blank credential
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("CONCUR_CLIENT_ID", &self.client_id),
            ("CONCUR_CLIENT_SECRET", &self.client_secret),
            ("CONCUR_USERNAME", &self.username),
            ("CONCUR_PASSWORD", &self.password),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL of the Concur API host
    pub base_url: String,
    /// Full URL of the OAuth2 token endpoint
    pub token_url: String,
    /// API version segment, e.g. `v3.0`
    pub api_version: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

impl RestApiConfig {
    /// Creates a REST configuration rooted at `base_url`, deriving the token URL from it
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            token_url: format!("{base_url}{TOKEN_PATH}"),
            base_url,
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
/// Main configuration for the Concur client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Payment type ID used when a new expense does not name one
    ///
    /// Payment type IDs are tenant specific, so there is no built-in value.
    pub default_payment_type_id: Option<String>,
}

impl Config {
    /// Creates a new configuration from the environment
    ///
    /// Loads a `.env` file when present, then reads:
    /// `CONCUR_CLIENT_ID`, `CONCUR_CLIENT_SECRET`, `CONCUR_USERNAME`,
    /// `CONCUR_PASSWORD`, `CONCUR_BASE_URL`, `CONCUR_TOKEN_URL`,
    /// `CONCUR_API_VERSION`, `CONCUR_TIMEOUT` and `CONCUR_PAYMENT_TYPE_ID`.
    ///
    /// Missing credentials are logged here and rejected by [`Config::validate`].
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let credentials = Credentials {
            client_id: get_env_or_default("CONCUR_CLIENT_ID", String::new()),
            client_secret: get_env_or_default("CONCUR_CLIENT_SECRET", String::new()),
            username: get_env_or_default("CONCUR_USERNAME", String::new()),
            password: get_env_or_default("CONCUR_PASSWORD", String::new()),
        };

        for name in credentials.missing_fields() {
            error!("{} not found in environment variables or .env file", name);
        }

        let mut rest_api = RestApiConfig::new(get_env_or_default(
            "CONCUR_BASE_URL",
            String::from(DEFAULT_BASE_URL),
        ));
        if let Some(token_url) = get_env_or_none::<String>("CONCUR_TOKEN_URL") {
            rest_api.token_url = token_url;
        }
        rest_api.api_version = get_env_or_default("CONCUR_API_VERSION", rest_api.api_version);
        rest_api.timeout = get_env_or_default("CONCUR_TIMEOUT", rest_api.timeout);

        Config {
            credentials,
            rest_api,
            default_payment_type_id: get_env_or_none("CONCUR_PAYMENT_TYPE_ID"),
        }
    }

    /// Creates a configuration from explicit credentials and API host
    pub fn with_credentials(credentials: Credentials, base_url: impl Into<String>) -> Self {
        Self {
            credentials,
            rest_api: RestApiConfig::new(base_url),
            default_payment_type_id: None,
        }
    }

    /// Checks that every credential is present
    ///
    /// # Returns
    /// * `Ok(())` - All four credentials are non-blank
    /// * `Err(AppError::Authentication)` - Listing the missing variables
    pub fn validate(&self) -> Result<(), AppError> {
        let missing = self.credentials.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(AppError::Authentication(format!(
                "missing required configuration: {}",
                missing.join(", ")
            )))
        }
    }
}
