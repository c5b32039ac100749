//! Unified error handling for `classifier-client`.
//!
//! One top-level [`ClassifierError`] covers the whole crate, with config
//! problems grouped in [`ConfigError`]. Transport failures, timeouts, and
//! non-success upstream statuses are separate variants so callers can map
//! each to a distinct user-facing message. The full response body of a
//! failed request is carried in the error value; log lines use a short
//! snippet instead.

use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

/// Unified result alias for the entire crate.
pub type Result<T> = std::result::Result<T, ClassifierError>;

/// Top-level error for the `classifier-client` crate.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ClassifierError {
    /// Configuration/validation errors (startup-time).
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Underlying HTTP transport error other than a timeout.
    #[error("[Classifier] request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The request exceeded the configured ceiling without a response.
    #[error("[Classifier] request timed out after {0:?}")]
    Timeout(Duration),

    /// Non-successful HTTP status from the classification service.
    /// `body` is the raw response text, verbatim.
    #[error("[Classifier] HTTP {status} from {url}: {body}")]
    HttpStatus {
        status: StatusCode,
        url: String,
        body: String,
    },

    /// A 200 response whose body could not be decoded as a verdict.
    #[error("[Classifier] failed to decode response: {0}")]
    Decode(String),

    /// Reading the uploaded document failed before any request was issued.
    #[error("[Classifier] failed to read upload: {0}")]
    Io(#[from] std::io::Error),
}

/// Error enum for config resolution and validation.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Value had the wrong format (e.g. endpoint without an http scheme).
    #[error("[Classifier] invalid format in {var}: {reason}")]
    InvalidFormat {
        /// Variable name (e.g. `CLASSIFIER_API_ENDPOINT`).
        var: &'static str,
        /// Explanation (e.g. `must start with http:// or https://`).
        reason: &'static str,
    },
}

impl ClassifierError {
    /// Folds a `reqwest` send error into the taxonomy: timeouts get their
    /// own variant, everything else is generic transport failure.
    pub(crate) fn from_send_error(err: reqwest::Error, ceiling: Duration) -> Self {
        if err.is_timeout() {
            ClassifierError::Timeout(ceiling)
        } else {
            ClassifierError::Transport(err)
        }
    }
}

/// Validates that an HTTP endpoint starts with `http://` or `https://`.
///
/// # Errors
/// Returns [`ConfigError::InvalidFormat`] when the string does not start
/// with a valid HTTP scheme.
pub fn validate_http_endpoint(var: &'static str, value: &str) -> Result<()> {
    let value = value.trim();
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(())
    } else {
        Err(ConfigError::InvalidFormat {
            var,
            reason: "must start with http:// or https://",
        }
        .into())
    }
}

/// Trims a response body down to a log-friendly snippet.
pub(crate) fn make_snippet(text: &str) -> String {
    text.chars().take(240).collect()
}
