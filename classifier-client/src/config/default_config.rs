//! Default client config loaded from environment variables.
//!
//! The classifier endpoint is the only externally supplied value. It is
//! resolved from `CLASSIFIER_API_ENDPOINT` with a hardcoded fallback, so the
//! demo runs without any configuration at all.
//!
//! # Environment variables
//!
//! - `CLASSIFIER_API_ENDPOINT` = classification endpoint URL (optional)

use crate::{
    config::classifier_config::ClassifierConfig,
    error_handler::{Result, validate_http_endpoint},
};

/// Deployed classification endpoint used when no override is configured.
pub const DEFAULT_ENDPOINT: &str =
    "https://b6svh4pxaw2nr5pr3ndcbnhche0pbtcl.lambda-url.us-east-1.on.aws/";

/// Client-side request ceiling in seconds. The remote service finishes
/// within 30 seconds or not at all; 35 leaves headroom for transfer.
pub const REQUEST_TIMEOUT_SECS: u64 = 35;

/// Resolves the client config from the environment.
///
/// Precedence for the endpoint:
/// 1. `CLASSIFIER_API_ENDPOINT` if present and non-empty
/// 2. [`DEFAULT_ENDPOINT`]
///
/// # Errors
///
/// - [`ConfigError::InvalidFormat`](crate::error_handler::ConfigError::InvalidFormat)
///   if the configured endpoint is not an http(s) URL
pub fn config_from_env() -> Result<ClassifierConfig> {
    let endpoint = std::env::var("CLASSIFIER_API_ENDPOINT")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    validate_http_endpoint("CLASSIFIER_API_ENDPOINT", &endpoint)?;

    Ok(ClassifierConfig::new(endpoint))
}

impl ClassifierConfig {
    /// Shorthand for [`config_from_env`].
    pub fn from_env() -> Result<Self> {
        config_from_env()
    }
}
