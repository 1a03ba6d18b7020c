use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Submission payload. At least one of `product` or `url` must be present;
/// a non-empty `url` wins over product text.
#[derive(Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub product: String,
    #[serde(default)]
    pub theme: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Serialize)]
pub struct GenerateResponse {
    pub lines: Vec<String>,
    pub source: String,
    pub model_id: String,
    pub generated_at: DateTime<Utc>,
}
