//! Verdict Classification
//!
//! Maps the backend's free-text verdict string onto the three display
//! states. The backend owns the wording; this side only looks for the
//! marker substrings.

use crate::constants::{PHISHING_MARKER, SUSPICIOUS_MARKER};

/// Verdict classification levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// URL an toàn
    Legitimate,
    /// Đáng ngờ, xác suất trung bình
    Suspicious,
    /// Giả mạo
    Phishing,
}

impl Verdict {
    /// Classify a backend verdict string by marker substring.
    /// The phishing marker wins over the suspicious one.
    pub fn classify(result: &str) -> Self {
        if result.contains(PHISHING_MARKER) {
            Verdict::Phishing
        } else if result.contains(SUSPICIOUS_MARKER) {
            Verdict::Suspicious
        } else {
            Verdict::Legitimate
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Legitimate => "legitimate",
            Verdict::Suspicious => "suspicious",
            Verdict::Phishing => "phishing",
        }
    }

}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phishing_marker() {
        assert_eq!(Verdict::classify("Phishing ⚠️"), Verdict::Phishing);
    }

    #[test]
    fn test_suspicious_marker() {
        assert_eq!(Verdict::classify("Nghi ngờ ⚠️"), Verdict::Suspicious);
    }

    #[test]
    fn test_legitimate_fallback() {
        assert_eq!(Verdict::classify("Legitimate ✅"), Verdict::Legitimate);
        assert_eq!(Verdict::classify(""), Verdict::Legitimate);
    }

    #[test]
    fn test_phishing_wins_over_suspicious() {
        // Both markers present: phishing takes precedence
        assert_eq!(Verdict::classify("Phishing (Nghi ngờ)"), Verdict::Phishing);
    }

    #[test]
    fn test_marker_is_case_sensitive() {
        // "phishing" lowercase is not the backend's marker
        assert_eq!(Verdict::classify("phishing"), Verdict::Legitimate);
    }
}
