//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! To change the default backend server, only edit this file.

/// Default backend API URL
///
/// This is the fallback URL when no environment variable is set.
/// The backend is the FastAPI service exposing /predict and /model_info.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// Default request timeout (seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Output filename for the CSV export of the last check
pub const CSV_FILENAME: &str = "phishing_results.csv";

/// Marker substring the backend puts into phishing verdicts
pub const PHISHING_MARKER: &str = "Phishing";

/// Marker substring the backend puts into suspicious verdicts
pub const SUSPICIOUS_MARKER: &str = "Nghi ngờ";

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "Phishing Detector";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get backend API URL from environment or use default
pub fn get_api_url() -> String {
    std::env::var("PHISH_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

/// Get request timeout from environment or use default
pub fn get_timeout_secs() -> u64 {
    std::env::var("PHISH_API_TIMEOUT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_TIMEOUT_SECS)
}
