//! Page Controller
//!
//! Drives the two request/render flows and the local export flow. Holds
//! the single last-result slot as an explicit field; overlapping checks
//! are last-write-wins (the slot and every region always reflect the most
//! recently completed check, no cancellation of in-flight calls).

use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use super::backend::{ApiClient, CheckResult};
use super::chart::ChartSlot;
use super::export;
use super::verdict::Verdict;
use super::view::{self, PageView, RegionState, RegionView};
use crate::constants;
use crate::ui;

/// The last successful check, stamped when it completed
#[derive(Debug, Clone)]
pub struct StoredResult {
    pub result: CheckResult,
    pub checked_at: DateTime<Utc>,
}

pub struct PageController {
    client: ApiClient,
    last_result: Option<StoredResult>,
    chart: ChartSlot,
    page: PageView,
}

impl PageController {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            last_result: None,
            chart: ChartSlot::new(),
            page: PageView::empty(),
        }
    }

    pub fn last_result(&self) -> Option<&StoredResult> {
        self.last_result.as_ref()
    }

    /// Check one URL: validate, show the loading indicator, POST /predict,
    /// render. Every exit path leaves the page consistent.
    pub async fn check_url(&mut self, raw_input: &str) {
        let url = raw_input.trim();
        if url.is_empty() {
            self.reject_empty_input();
            ui::alert("Vui lòng nhập URL!");
            return;
        }

        self.enter_loading();
        ui::render_page(&self.page);

        match self.client.predict(url).await {
            Ok(result) => self.apply_check_success(result),
            Err(e) => self.apply_check_failure(&e.user_message()),
        }
        ui::render_page(&self.page);
    }

    /// Fetch and render model statistics. A failure here renders an inline
    /// error in the model-info region only; the other regions keep their
    /// state and future operations are unaffected.
    pub async fn show_model_info(&mut self) {
        self.page.model_info = view::loading_view();

        match self.client.model_info().await {
            Ok(info) => self.page.model_info = view::model_info_view(&info),
            Err(e) => {
                self.page.model_info = view::error_view(&e.user_message());
            }
        }
        ui::render_region(&self.page.model_info);
    }

    /// Export the last successful check to the default CSV file
    pub fn save_results(&self) -> Result<PathBuf, SaveError> {
        self.save_results_to(Path::new(constants::CSV_FILENAME))
    }

    pub fn save_results_to(&self, path: &Path) -> Result<PathBuf, SaveError> {
        let stored = self.last_result.as_ref().ok_or(SaveError::NoResult)?;
        export::save(&stored.result, path)?;
        Ok(path.to_path_buf())
    }

    // ------------------------------------------------------------------
    // State transitions
    // ------------------------------------------------------------------

    /// Empty input: no network call, all regions reset to hidden
    fn reject_empty_input(&mut self) {
        self.chart.clear();
        self.page = PageView::empty();
    }

    /// Clear every region before the call so no stale content flashes
    /// during the request, and show the loading indicator.
    fn enter_loading(&mut self) {
        self.chart.clear();
        self.page = PageView::empty();
        self.page.result = view::loading_view();
    }

    fn apply_check_success(&mut self, result: CheckResult) {
        log::info!(
            "Check completed: {} classified as {}",
            result.url,
            Verdict::classify(&result.result)
        );

        self.page.result = view::result_view(&result);
        self.page.html_analysis = view::html_view(&result.html_analysis);
        self.page.features = view::features_view(&result.features);

        let chart = self.chart.render(result.probability);
        self.page.chart = RegionView {
            visible: true,
            state: RegionState::Info,
            heading: Some("Biểu Đồ Xác Suất".to_string()),
            lines: chart.lines(),
            items: Vec::new(),
        };

        self.last_result = Some(StoredResult {
            result,
            checked_at: Utc::now(),
        });
    }

    /// Failure path: error in the result region, everything else cleared
    /// rather than left showing partial data.
    fn apply_check_failure(&mut self, message: &str) {
        self.chart.clear();
        self.page.result = view::error_view(message);
        self.page.html_analysis = RegionView::hidden();
        self.page.features = RegionView::hidden();
        self.page.chart = RegionView::hidden();
    }
}

/// Export errors
#[derive(Debug)]
pub enum SaveError {
    /// No successful check has completed yet
    NoResult,
    Io(io::Error),
}

impl From<io::Error> for SaveError {
    fn from(err: io::Error) -> Self {
        SaveError::Io(err)
    }
}

impl std::fmt::Display for SaveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoResult => write!(f, "Chưa có kết quả để lưu!"),
            Self::Io(e) => write!(f, "Lỗi khi lưu tệp: {}", e),
        }
    }
}

impl std::error::Error for SaveError {}

// ============================================================================
// TESTS
// ============================================================================
