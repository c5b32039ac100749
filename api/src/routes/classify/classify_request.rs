use serde::Deserialize;

/// Request body for /api/classify/text.
#[derive(Debug, Deserialize)]
pub struct ClassifyTextRequest {
    /// Announcement headline.
    pub title: String,
    /// Full announcement text.
    pub text: String,
}

/// Query parameters for /api/classify/pdf; the request body carries the raw
/// document bytes.
#[derive(Debug, Deserialize)]
pub struct ClassifyPdfParams {
    /// Announcement headline. Defaulted so a missing parameter surfaces as
    /// a validation message rather than a query rejection.
    #[serde(default)]
    pub title: String,
}
