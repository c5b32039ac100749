use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use classifier_client::ClassifierError;
use thiserror::Error;

use crate::core::http::response_envelope::{ApiErrorDetail, ApiResponse};

/// Public application error type.
#[derive(Debug, Error)]
pub enum AppError {
    // --- IO / network / server ---
    #[error("failed to bind listener")]
    Bind(#[source] std::io::Error),

    #[error("server error")]
    Server(#[source] std::io::Error),

    // --- Request validation, caught before any network call ---
    #[error("{message}")]
    Validation {
        field: &'static str,
        message: &'static str,
    },

    /// Rich HTTP error mapped from lower layers with specific status & code.
    #[error("{message}")]
    Http {
        status: StatusCode,
        code: &'static str,
        message: String,
    },
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,

            // custom mapped
            AppError::Http { status, .. } => *status,

            // 5xx
            AppError::Bind(_) | AppError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            AppError::Bind(_) => "BIND_ERROR",
            AppError::Server(_) => "SERVER_ERROR",
            AppError::Validation { .. } => "VALIDATION",
            AppError::Http { code, .. } => code,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let details = match &self {
            AppError::Validation { field, .. } => vec![ApiErrorDetail {
                path: Some((*field).to_string()),
                hint: None,
            }],
            _ => Vec::new(),
        };
        ApiResponse::<()>::error(self.error_code(), self.to_string(), details)
            .into_response_with_status(status)
    }
}

/// Handy result alias used across handlers.
pub type AppResult<T> = Result<T, AppError>;

/// Convert `ClassifierError` to `AppError::Http` with precise HTTP status,
/// code, and the user-facing copy for each failure class. Every variant is
/// terminal for the single user action; the next action starts fresh.
impl From<ClassifierError> for AppError {
    fn from(err: ClassifierError) -> Self {
        match err {
            ClassifierError::Timeout(_) => AppError::Http {
                status: StatusCode::GATEWAY_TIMEOUT,
                code: "CLASSIFIER_TIMEOUT",
                message: "Request timed out. The document may be too complex.".into(),
            },
            ClassifierError::HttpStatus { status, body, .. } => AppError::Http {
                status: StatusCode::BAD_GATEWAY,
                code: "CLASSIFIER_API_ERROR",
                message: format!("Classifier API error {}: {}", status.as_u16(), body),
            },
            ClassifierError::Transport(e) => AppError::Http {
                status: StatusCode::BAD_GATEWAY,
                code: "CLASSIFIER_UNREACHABLE",
                message: format!("Classification request failed: {e}"),
            },
            ClassifierError::Decode(detail) => AppError::Http {
                status: StatusCode::BAD_GATEWAY,
                code: "CLASSIFIER_BAD_RESPONSE",
                message: format!("Classifier returned an unexpected response: {detail}"),
            },
            ClassifierError::Io(e) => AppError::Http {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                code: "UPLOAD_READ_ERROR",
                message: format!("Could not read the uploaded file: {e}"),
            },
            ClassifierError::Config(e) => AppError::Http {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                code: "CONFIG_ERROR",
                message: e.to_string(),
            },
            other => AppError::Http {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                code: "CLASSIFIER_ERROR",
                message: other.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn timeout_maps_to_504_with_its_own_copy() {
        let err = AppError::from(ClassifierError::Timeout(Duration::from_secs(35)));
        match err {
            AppError::Http {
                status,
                code,
                message,
            } => {
                assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
                assert_eq!(code, "CLASSIFIER_TIMEOUT");
                assert_eq!(message, "Request timed out. The document may be too complex.");
            }
            other => panic!("expected Http, got {other:?}"),
        }
    }

    #[test]
    fn upstream_status_maps_to_502_with_code_and_body() {
        let err = AppError::from(ClassifierError::HttpStatus {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            url: "http://example.invalid/".into(),
            body: "internal error".into(),
        });
        match err {
            AppError::Http {
                status, message, ..
            } => {
                assert_eq!(status, StatusCode::BAD_GATEWAY);
                assert!(message.contains("500"));
                assert!(message.contains("internal error"));
            }
            other => panic!("expected Http, got {other:?}"),
        }
    }

    #[test]
    fn timeout_and_transport_copy_differ() {
        let timeout = AppError::from(ClassifierError::Timeout(Duration::from_secs(35)));
        let decode = AppError::from(ClassifierError::Decode("not json".into()));
        assert_ne!(timeout.to_string(), decode.to_string());
    }
}
