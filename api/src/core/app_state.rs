use classifier_client::{ClassifierConfig, ClassifierService};

use crate::error_handler::AppResult;

/// Shared state for all HTTP handlers.
///
/// Read-only after startup: each request is independent and carries no
/// memory of prior calls.
pub struct AppState {
    /// Client for the remote classification service.
    pub classifier: ClassifierService,
}

impl AppState {
    /// Load shared state from environment variables.
    ///
    /// The classifier endpoint is the only externally supplied value; it
    /// falls back to the deployed URL when unset.
    pub fn from_env() -> AppResult<Self> {
        let cfg = ClassifierConfig::from_env()?;
        Ok(Self {
            classifier: ClassifierService::new(cfg)?,
        })
    }

    /// State pointed at an explicit endpoint. Used by tests to substitute a
    /// mock service.
    pub fn with_endpoint(endpoint: &str) -> AppResult<Self> {
        Ok(Self {
            classifier: ClassifierService::new(ClassifierConfig::new(endpoint))?,
        })
    }
}
