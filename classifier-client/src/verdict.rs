//! Typed verdict returned by the classification service.
//!
//! The service answers with a JSON envelope whose fields are all optional in
//! practice; decoding is deliberately soft. Absent fields fall back to
//! documented defaults through accessors instead of being probed field by
//! field at render time. Unknown fields are ignored. Only a non-object top
//! level fails decoding.

use serde::{Deserialize, Serialize};

/// Fallback shown when a rejection carries no reason.
pub const DEFAULT_REASON: &str = "Does not meet M&A criteria";

/// Sentinel for an absent transaction theme.
pub const THEME_NOT_APPLICABLE: &str = "N/A";

/// Sentinel for an unreported processing stage.
pub const STAGE_UNKNOWN: &str = "unknown";

/// Classification verdict for a single announcement.
///
/// Decoded once at the HTTP boundary; exists only for the duration of one
/// request and is never persisted.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ClassificationVerdict {
    /// Whether the announcement is judged a genuine M&A/corporate-finance
    /// transaction.
    #[serde(default)]
    pub qualified: bool,

    /// Confidence in `[0, 1]`.
    #[serde(default)]
    pub confidence: Option<f64>,

    /// Transaction theme label (e.g. "LBO", "Takeover").
    #[serde(default)]
    pub theme: Option<String>,

    /// Free-text explanation of the verdict.
    #[serde(default)]
    pub reasoning: Option<String>,

    /// Which processing stage produced the verdict (pre-filter, rule,
    /// model).
    #[serde(default)]
    pub stage: Option<String>,

    /// Whether the remote model was invoked for this verdict.
    #[serde(default)]
    pub bedrock_called: bool,

    /// Rejection explanation, present when `qualified` is false.
    #[serde(default)]
    pub reason: Option<String>,

    /// Name of the rejection filter that fired, if any.
    #[serde(default)]
    pub filter: Option<String>,
}

impl ClassificationVerdict {
    /// Confidence, defaulting to `0.0` when the service omitted it.
    pub fn confidence(&self) -> f64 {
        self.confidence.unwrap_or(0.0)
    }

    /// Theme label, defaulting to [`THEME_NOT_APPLICABLE`].
    pub fn theme(&self) -> &str {
        match self.theme.as_deref() {
            Some(t) if !t.trim().is_empty() => t,
            _ => THEME_NOT_APPLICABLE,
        }
    }

    /// Processing stage, defaulting to [`STAGE_UNKNOWN`].
    pub fn stage(&self) -> &str {
        match self.stage.as_deref() {
            Some(s) if !s.trim().is_empty() => s,
            _ => STAGE_UNKNOWN,
        }
    }

    /// Rejection reason, defaulting to [`DEFAULT_REASON`].
    pub fn reason(&self) -> &str {
        match self.reason.as_deref() {
            Some(r) if !r.trim().is_empty() => r,
            _ => DEFAULT_REASON,
        }
    }

    /// Reasoning text if present and non-empty after trimming.
    pub fn reasoning(&self) -> Option<&str> {
        self.reasoning
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
    }
}
