/// Token acquisition, caching and decoding
pub mod auth;
/// Authenticated HTTP client
pub mod client;
/// Application configuration module
pub mod config;
/// Service interfaces
pub mod interfaces;
/// Service implementations on [`client::Client`]
pub mod services;
