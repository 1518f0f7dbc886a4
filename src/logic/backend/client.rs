//! Backend API Client
//!
//! HTTP client for communicating with the Phishing Detector backend.

use std::time::Duration;

use super::models::{CheckRequest, CheckResult, ModelInfo};

/// Backend configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        use crate::constants;

        Self {
            base_url: constants::get_api_url(),
            timeout_seconds: constants::get_timeout_secs(),
        }
    }
}

/// Backend API client
pub struct ApiClient {
    config: ApiConfig,
    http_client: reqwest::Client,
}

impl ApiClient {
    /// Create new API client
    pub fn new(config: ApiConfig) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, http_client }
    }

    /// Ask the backend to classify a URL
    pub async fn predict(&self, url: &str) -> Result<CheckResult, BackendError> {
        let endpoint = format!("{}/predict", self.config.base_url);
        let request = CheckRequest { url: url.to_string() };

        log::info!("Sending predict request for URL: {}", url);

        let response = self
            .http_client
            .post(&endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = extract_error_detail(&body);
            log::warn!("Predict failed ({}): {}", status.as_u16(), detail);
            return Err(BackendError::Server { status: status.as_u16(), detail });
        }

        let result: CheckResult = response
            .json()
            .await
            .map_err(|e| BackendError::Malformed(e.to_string()))?;
        validate_check_result(&result)?;

        log::info!(
            "Predict OK: {} -> {} ({:.2})",
            result.url,
            result.result,
            result.probability
        );
        Ok(result)
    }

    /// Fetch model accuracy and feature-importance statistics
    pub async fn model_info(&self) -> Result<ModelInfo, BackendError> {
        let endpoint = format!("{}/model_info", self.config.base_url);

        let response = self
            .http_client
            .get(&endpoint)
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = extract_error_detail(&body);
            log::warn!("Model info failed ({}): {}", status.as_u16(), detail);
            return Err(BackendError::Server { status: status.as_u16(), detail });
        }

        response
            .json()
            .await
            .map_err(|e| BackendError::Malformed(e.to_string()))
    }
}

/// Shape validation at the trust boundary: a response that parses but
/// carries an impossible probability is malformed, not a verdict.
fn validate_check_result(result: &CheckResult) -> Result<(), BackendError> {
    if result.probability.is_nan() || !(0.0..=1.0).contains(&result.probability) {
        return Err(BackendError::Malformed(format!(
            "probability {} outside [0,1]",
            result.probability
        )));
    }
    Ok(())
}

/// Best-effort unwrapping of a FastAPI `{"detail": "..."}` error body.
/// Bodies that do not match that shape are surfaced unchanged.
fn extract_error_detail(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("detail").and_then(|d| d.as_str().map(String::from)))
        .unwrap_or_else(|| body.to_string())
}

/// Backend client errors
#[derive(Debug, Clone)]
pub enum BackendError {
    Network(String),
    Server { status: u16, detail: String },
    Malformed(String),
}

impl BackendError {
    /// Message shown to the user in the result region
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(e) => format!("Không thể kết nối máy chủ: {}", e),
            Self::Server { detail, .. } => detail.clone(),
            Self::Malformed(e) => format!("Phản hồi không hợp lệ: {}", e),
        }
    }
}

impl std::fmt::Display for BackendError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network(e) => write!(f, "Network error: {}", e),
            Self::Server { status, detail } => write!(f, "Server error {}: {}", status, detail),
            Self::Malformed(e) => write!(f, "Malformed response: {}", e),
        }
    }
}

impl std::error::Error for BackendError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_detail_from_fastapi_body() {
        assert_eq!(
            extract_error_detail(r#"{"detail": "URL không được để trống"}"#),
            "URL không được để trống"
        );
    }

    #[test]
    fn test_extract_detail_passes_plain_text_through() {
        assert_eq!(extract_error_detail("bad url"), "bad url");
    }

    #[test]
    fn test_extract_detail_non_string_detail_passes_through() {
        // detail may be a validation-error array; keep the raw body then
        let body = r#"{"detail": [{"loc": ["body", "url"]}]}"#;
        assert_eq!(extract_error_detail(body), body);
    }

    #[test]
    fn test_extract_detail_empty_body() {
        assert_eq!(extract_error_detail(""), "");
    }

    #[test]
    fn test_probability_out_of_range_is_malformed() {
        let json = r#"{"url": "x", "result": "Phishing ⚠️", "probability": 1.5, "features": {}}"#;
        let result: CheckResult = serde_json::from_str(json).unwrap();
        assert!(matches!(
            validate_check_result(&result),
            Err(BackendError::Malformed(_))
        ));
    }

    #[test]
    fn test_probability_bounds_are_valid() {
        for p in ["0.0", "1.0", "0.5"] {
            let json = format!(
                r#"{{"url": "x", "result": "Legitimate ✅", "probability": {}, "features": {{}}}}"#,
                p
            );
            let result: CheckResult = serde_json::from_str(&json).unwrap();
            assert!(validate_check_result(&result).is_ok());
        }
    }
}
