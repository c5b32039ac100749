/// Configuration for the classification service client.
///
/// Resolved once at startup and injected into
/// [`ClassifierService::new`](crate::ClassifierService::new); nothing reads
/// the environment after construction, so tests can point the client at a
/// local mock endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifierConfig {
    /// Base URL of the classification endpoint (the whole API is one POST).
    pub endpoint: String,

    /// Request timeout in seconds. Sits above the remote's own processing
    /// ceiling so the client does not abort while the server is still
    /// within its deadline.
    pub timeout_secs: u64,
}

impl ClassifierConfig {
    /// Config with the default timeout for the given endpoint.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout_secs: super::default_config::REQUEST_TIMEOUT_SECS,
        }
    }
}
