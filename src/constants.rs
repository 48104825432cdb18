/// User agent string sent with every request to the Concur API
pub const USER_AGENT: &str = concat!("concur-client/", env!("CARGO_PKG_VERSION"));
/// Default Concur API host (integration environment)
pub const DEFAULT_BASE_URL: &str = "https://integration.api.concursolutions.com";
/// Path of the OAuth2 token endpoint relative to the API host
pub const TOKEN_PATH: &str = "/oauth2/v0/token";
/// Default REST API version segment used to build resource URLs
pub const DEFAULT_API_VERSION: &str = "v3.0";
/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Token lifetime assumed when the token endpoint omits `expires_in`
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 3600;
/// Upper bound on a token lifetime accepted from the token endpoint
pub const MAX_TOKEN_TTL_SECS: i64 = i32::MAX as i64;
/// Default number of items requested by list operations
pub const DEFAULT_PAGE_LIMIT: u32 = 25;
/// Smallest page size accepted by the list endpoints
pub const MIN_PAGE_LIMIT: u32 = 1;
/// Largest page size accepted by the list endpoints
pub const MAX_PAGE_LIMIT: u32 = 100;
/// Default currency for new reports and expenses
pub const DEFAULT_CURRENCY_CODE: &str = "USD";
/// Default country for new reports and expenses
pub const DEFAULT_COUNTRY_CODE: &str = "US";
/// JWT claim holding the user's profile URL
pub const PROFILE_CLAIM: &str = "concur.profile";
/// Number of token characters shown by connection diagnostics
pub const TOKEN_PREFIX_LEN: usize = 20;
