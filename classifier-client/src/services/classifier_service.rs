//! Thin client for the announcement classification service.
//!
//! The whole API is a single endpoint: `POST {endpoint}` with a JSON body
//! carrying either announcement text or a base64-encoded PDF. This module
//! issues exactly one request per call, bounded by the configured timeout,
//! and decodes the response into [`ClassificationVerdict`].
//!
//! # Examples
//!
//! ```no_run
//! use classifier_client::{ClassifierConfig, ClassifierService};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let cfg = ClassifierConfig::from_env()?;
//! let svc = ClassifierService::new(cfg)?;
//!
//! let verdict = svc
//!     .classify_text(
//!         "ABC Corp - Proposed Acquisition of XYZ Ltd",
//!         "ABC Corp announces the acquisition of XYZ Ltd for USD 120 million...",
//!     )
//!     .await?;
//!
//! println!("qualified = {}", verdict.qualified);
//! # Ok(()) }
//! ```

use std::io::{Read, Seek};
use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::config::classifier_config::ClassifierConfig;
use crate::error_handler::{ClassifierError, Result, make_snippet, validate_http_endpoint};
use crate::verdict::ClassificationVerdict;

/// Client for the classification endpoint.
///
/// Holds one reusable HTTP client with the configured timeout. Stateless
/// across calls: no retry, no deduplication, no memory of prior requests.
/// Repeated submission of possibly large PDF payloads is costly, so retrying
/// is left to the user.
#[derive(Debug)]
pub struct ClassifierService {
    client: reqwest::Client,
    endpoint: String,
    timeout: Duration,
}

impl ClassifierService {
    /// Creates a new [`ClassifierService`] from the given config.
    ///
    /// # Errors
    /// - [`ConfigError::InvalidFormat`](crate::error_handler::ConfigError::InvalidFormat)
    ///   if `cfg.endpoint` is not an http(s) URL
    /// - [`ClassifierError::Transport`] if the HTTP client cannot be built
    pub fn new(cfg: ClassifierConfig) -> Result<Self> {
        validate_http_endpoint("endpoint", &cfg.endpoint)?;

        let timeout = Duration::from_secs(cfg.timeout_secs);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ClassifierError::Transport)?;

        Ok(Self {
            client,
            endpoint: cfg.endpoint.trim().to_string(),
            timeout,
        })
    }

    /// Endpoint this client posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Classifies free-form announcement text.
    ///
    /// Issues one `POST {endpoint}` with `{title, text}` and waits up to the
    /// configured ceiling.
    ///
    /// # Errors
    /// - [`ClassifierError::HttpStatus`] for non-2xx responses, carrying the
    ///   raw body verbatim
    /// - [`ClassifierError::Timeout`] when the ceiling elapses
    /// - [`ClassifierError::Transport`] for other client errors
    /// - [`ClassifierError::Decode`] if a 200 body is not a JSON object
    #[instrument(skip_all, fields(endpoint = %self.endpoint))]
    pub async fn classify_text(&self, title: &str, text: &str) -> Result<ClassificationVerdict> {
        let body = ClassifyRequest::text(title, text);
        self.post_classify(&body).await
    }

    /// Classifies an uploaded PDF document.
    ///
    /// Reads the full binary content, restores the read position to the
    /// start (the caller keeps the upload resident for re-submission, and a
    /// second call must produce a byte-identical payload), encodes it as
    /// base64, and follows the same request/timeout/error contract as
    /// [`classify_text`](Self::classify_text).
    ///
    /// # Errors
    /// - [`ClassifierError::Io`] if the upload cannot be read; plus all the
    ///   errors of [`classify_text`](Self::classify_text)
    #[instrument(skip_all, fields(endpoint = %self.endpoint))]
    pub async fn classify_pdf<R>(&self, title: &str, pdf: &mut R) -> Result<ClassificationVerdict>
    where
        R: Read + Seek,
    {
        let mut bytes = Vec::new();
        pdf.read_to_end(&mut bytes)?;
        pdf.rewind()?;

        debug!(pdf_bytes = bytes.len(), "encoding upload as base64");
        let body = ClassifyRequest::pdf(title, STANDARD.encode(&bytes));
        self.post_classify(&body).await
    }

    async fn post_classify(&self, body: &ClassifyRequest<'_>) -> Result<ClassificationVerdict> {
        debug!("POST {}", self.endpoint);
        let resp = self
            .client
            .post(&self.endpoint)
            .json(body)
            .send()
            .await
            .map_err(|e| ClassifierError::from_send_error(e, self.timeout))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let url = self.endpoint.clone();
            let text = resp.text().await.unwrap_or_default();
            debug!(%status, snippet = %make_snippet(&text), "classifier returned non-success status");
            return Err(ClassifierError::HttpStatus {
                status,
                url,
                body: text,
            });
        }

        let text = resp
            .text()
            .await
            .map_err(|e| ClassifierError::from_send_error(e, self.timeout))?;

        serde_json::from_str(&text).map_err(|e| {
            ClassifierError::Decode(format!("serde error: {e}; body: {}", make_snippet(&text)))
        })
    }
}

/* ==========================
HTTP payload
========================== */

/// Request body for the classification endpoint.
///
/// Exactly one of `text` / `pdf_base64` is serialized per request; the
/// absent one is skipped rather than sent as null.
#[derive(Debug, Serialize)]
struct ClassifyRequest<'a> {
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pdf_base64: Option<String>,
}

impl<'a> ClassifyRequest<'a> {
    fn text(title: &'a str, text: &'a str) -> Self {
        Self {
            title,
            text: Some(text),
            pdf_base64: None,
        }
    }

    fn pdf(title: &'a str, pdf_base64: String) -> Self {
        Self {
            title,
            text: None,
            pdf_base64: Some(pdf_base64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_mode_serializes_without_pdf_key() {
        let v = serde_json::to_value(ClassifyRequest::text("T", "body")).unwrap();
        assert_eq!(v["title"], "T");
        assert_eq!(v["text"], "body");
        assert!(v.get("pdf_base64").is_none());
    }

    #[test]
    fn pdf_mode_serializes_without_text_key() {
        let v = serde_json::to_value(ClassifyRequest::pdf("T", "aGk=".into())).unwrap();
        assert_eq!(v["title"], "T");
        assert_eq!(v["pdf_base64"], "aGk=");
        assert!(v.get("text").is_none());
    }
}
