//! Region View-Models
//!
//! Rendering is computed here as pure data, applied to the terminal in one
//! pass by `crate::ui`. Keeps every display decision testable without a
//! live terminal.

use serde_json::{Map, Value};

use super::backend::{CheckResult, HtmlAnalysis, ModelInfo};
use super::verdict::Verdict;

/// Placeholder for absent titles and empty link lists
pub const NONE_PLACEHOLDER: &str = "Không có";

/// Display state of a region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionState {
    Hidden,
    Checking,
    Legitimate,
    Suspicious,
    Phishing,
    Error,
    Info,
}

impl From<Verdict> for RegionState {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Legitimate => RegionState::Legitimate,
            Verdict::Suspicious => RegionState::Suspicious,
            Verdict::Phishing => RegionState::Phishing,
        }
    }
}

/// One display region: visibility, state, body lines, bulleted items
#[derive(Debug, Clone)]
pub struct RegionView {
    pub visible: bool,
    pub state: RegionState,
    pub heading: Option<String>,
    pub lines: Vec<String>,
    pub items: Vec<String>,
}

impl RegionView {
    pub fn hidden() -> Self {
        Self {
            visible: false,
            state: RegionState::Hidden,
            heading: None,
            lines: Vec::new(),
            items: Vec::new(),
        }
    }
}

/// The whole page: one view per region
#[derive(Debug, Clone)]
pub struct PageView {
    pub result: RegionView,
    pub html_analysis: RegionView,
    pub features: RegionView,
    pub chart: RegionView,
    pub model_info: RegionView,
}

impl PageView {
    /// Everything hidden (initial state, and the empty-input reset)
    pub fn empty() -> Self {
        Self {
            result: RegionView::hidden(),
            html_analysis: RegionView::hidden(),
            features: RegionView::hidden(),
            chart: RegionView::hidden(),
            model_info: RegionView::hidden(),
        }
    }
}

// ============================================================================
// BUILDERS
// ============================================================================

/// Verdict block: URL, verdict text, probability as a percentage
pub fn result_view(result: &CheckResult) -> RegionView {
    let verdict = Verdict::classify(&result.result);
    RegionView {
        visible: true,
        state: verdict.into(),
        heading: None,
        lines: vec![
            format!("🔍 URL: {}", result.url),
            format!("👉 Kết quả dự đoán: {}", result.result),
            format!("🔢 Xác suất phishing: {}", fmt_percent(result.probability)),
        ],
        items: Vec::new(),
    }
}

/// HTML-analysis block: structural counts plus the external-link list
pub fn html_view(analysis: &HtmlAnalysis) -> RegionView {
    let title = analysis
        .title
        .as_deref()
        .filter(|t| !t.trim().is_empty())
        .unwrap_or(NONE_PLACEHOLDER);

    let items = if analysis.external_links.is_empty() {
        vec![NONE_PLACEHOLDER.to_string()]
    } else {
        analysis.external_links.clone()
    };

    RegionView {
        visible: true,
        state: RegionState::Info,
        heading: Some("Phân Tích HTML".to_string()),
        lines: vec![
            format!("Số lượng liên kết (<a>): {}", analysis.num_links),
            format!("Số lượng biểu mẫu (<form>): {}", analysis.num_forms),
            format!("Số lượng iframe (<iframe>): {}", analysis.num_iframes),
            format!("Tiêu đề trang (<title>): {}", title),
            "Liên kết ngoài:".to_string(),
        ],
        items,
    }
}

/// Feature block: one "name: value" item per pair, in mapping order
pub fn features_view(features: &Map<String, Value>) -> RegionView {
    RegionView {
        visible: true,
        state: RegionState::Info,
        heading: Some("Phân Tích Đặc Trưng".to_string()),
        lines: Vec::new(),
        items: features
            .iter()
            .map(|(key, value)| format!("{}: {}", key, fmt_value(value)))
            .collect(),
    }
}

/// Model-info block: accuracies plus the ranked feature-importance list
pub fn model_info_view(info: &ModelInfo) -> RegionView {
    let mut ranked = info.feature_importance.clone();
    ranked.sort_by(|a, b| {
        b.importance
            .partial_cmp(&a.importance)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    RegionView {
        visible: true,
        state: RegionState::Info,
        heading: Some("Thông Tin Mô Hình".to_string()),
        lines: vec![
            format!("Độ chính xác validation: {}", fmt_percent(info.val_accuracy)),
            format!("Độ chính xác test: {}", fmt_percent(info.test_accuracy)),
            "Mức độ quan trọng của đặc trưng:".to_string(),
        ],
        items: ranked
            .iter()
            .enumerate()
            .map(|(rank, f)| format!("{}. {}: {}", rank + 1, f.feature, fmt_percent(f.importance)))
            .collect(),
    }
}

/// Loading indicator shown while a check is in flight
pub fn loading_view() -> RegionView {
    RegionView {
        visible: true,
        state: RegionState::Checking,
        heading: None,
        lines: vec!["Đang kiểm tra...".to_string()],
        items: Vec::new(),
    }
}

/// Error message for a failed operation
pub fn error_view(message: &str) -> RegionView {
    RegionView {
        visible: true,
        state: RegionState::Error,
        heading: None,
        lines: vec![format!("Lỗi: {}", message)],
        items: Vec::new(),
    }
}

// ============================================================================
// FORMATTING HELPERS
// ============================================================================

/// Fraction in [0,1] -> percentage with two decimals, e.g. "12.00%"
pub fn fmt_percent(fraction: f64) -> String {
    format!("{:.2}%", fraction * 100.0)
}

/// JSON feature value rendered the way the page did: numbers bare,
/// strings without quotes.
pub fn fmt_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// ============================================================================
// TESTS
// ============================================================================
