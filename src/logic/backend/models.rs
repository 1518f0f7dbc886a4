//! Wire Models for the Detector Backend
//!
//! KHÔNG chứa logic - chỉ data structures.
//! Shapes mirror the JSON the backend emits on /predict and /model_info.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of a prediction call
#[derive(Debug, Serialize)]
pub struct CheckRequest {
    pub url: String,
}

/// Result of a prediction call (backend-owned shape)
#[derive(Debug, Clone, Deserialize)]
pub struct CheckResult {
    pub url: String,
    /// Human-readable verdict string, e.g. "Phishing ⚠️" or "Legitimate ✅"
    pub result: String,
    /// Estimated likelihood the URL is phishing, in [0,1]
    pub probability: f64,
    /// Defaults to an empty analysis when the backend omits the field
    #[serde(default)]
    pub html_analysis: HtmlAnalysis,
    /// Feature name -> numeric value, in the backend's order
    pub features: Map<String, Value>,
}

/// Structural analysis of the checked page
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HtmlAnalysis {
    #[serde(default)]
    pub num_links: i64,
    #[serde(default)]
    pub num_forms: i64,
    #[serde(default)]
    pub num_iframes: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub external_links: Vec<String>,
}

/// Model statistics from /model_info
#[derive(Debug, Clone, Deserialize)]
pub struct ModelInfo {
    pub val_accuracy: f64,
    pub test_accuracy: f64,
    #[serde(default)]
    pub feature_importance: Vec<FeatureImportance>,
}

/// Weight of one feature in the trained model
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureImportance {
    pub feature: String,
    pub importance: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_result_deserializes_full_response() {
        let json = r#"{
            "url": "http://example.com",
            "result": "Legitimate ✅",
            "probability": 0.12,
            "html_analysis": {
                "num_links": 5,
                "num_forms": 1,
                "num_iframes": 0,
                "title": "Example",
                "external_links": ["http://a.com"]
            },
            "features": {"has_ip": 0, "url_length": 19}
        }"#;

        let result: CheckResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.url, "http://example.com");
        assert_eq!(result.probability, 0.12);
        assert_eq!(result.html_analysis.num_links, 5);
        assert_eq!(result.html_analysis.title.as_deref(), Some("Example"));
        assert_eq!(result.html_analysis.external_links.len(), 1);

        // Feature order must survive deserialization (header order of the CSV export)
        let keys: Vec<_> = result.features.keys().cloned().collect();
        assert_eq!(keys, vec!["has_ip", "url_length"]);
    }

    #[test]
    fn test_missing_html_analysis_defaults() {
        let json = r#"{
            "url": "http://example.com",
            "result": "Phishing ⚠️",
            "probability": 0.97,
            "features": {"length_url": 18}
        }"#;

        let result: CheckResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.html_analysis.num_links, 0);
        assert_eq!(result.html_analysis.num_forms, 0);
        assert_eq!(result.html_analysis.num_iframes, 0);
        assert!(result.html_analysis.title.is_none());
        assert!(result.html_analysis.external_links.is_empty());
    }

    #[test]
    fn test_missing_features_is_an_error() {
        let json = r#"{"url": "x", "result": "Legitimate ✅", "probability": 0.1}"#;
        assert!(serde_json::from_str::<CheckResult>(json).is_err());
    }

    #[test]
    fn test_model_info_deserializes() {
        let json = r#"{
            "val_accuracy": 0.9712,
            "test_accuracy": 0.9648,
            "feature_importance": [
                {"feature": "length_url", "importance": 0.1432},
                {"feature": "nb_dots", "importance": 0.0911}
            ]
        }"#;

        let info: ModelInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.feature_importance.len(), 2);
        assert_eq!(info.feature_importance[0].feature, "length_url");
    }

    #[test]
    fn test_model_info_without_importance_defaults_empty() {
        let json = r#"{"val_accuracy": 0.5, "test_accuracy": 0.5}"#;
        let info: ModelInfo = serde_json::from_str(json).unwrap();
        assert!(info.feature_importance.is_empty());
    }
}
