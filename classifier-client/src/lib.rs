//! Client for the remote announcement classification service.
//!
//! The service is an opaque HTTP collaborator with a single endpoint: one
//! JSON POST per user action, carrying either announcement text or a
//! base64-encoded PDF, answered by a classification verdict. This crate owns
//! the wire contract, the bounded wait, and the error taxonomy; it contains
//! no classification logic and renders nothing.

pub mod config;
pub mod error_handler;
pub mod services;
pub mod telemetry;
pub mod verdict;

pub use config::classifier_config::ClassifierConfig;
pub use error_handler::{ClassifierError, ConfigError, Result};
pub use services::classifier_service::ClassifierService;
pub use verdict::ClassificationVerdict;
