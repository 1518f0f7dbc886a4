//! Probability Bar Chart
//!
//! Two text bars on a fixed [0,1] axis comparing the phishing probability
//! against its complement. The slot owns at most one chart instance;
//! rendering a new chart drops the previous one, so repeated checks never
//! stack renders.

use super::view::fmt_percent;

/// Bar width in cells for the fixed [0,1] axis
const AXIS_WIDTH: usize = 40;

/// One rendered two-bar comparison
#[derive(Debug, Clone)]
pub struct ProbabilityChart {
    probability: f64,
}

impl ProbabilityChart {
    pub fn new(probability: f64) -> Self {
        Self {
            probability: probability.clamp(0.0, 1.0),
        }
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// Chart as display lines
    pub fn lines(&self) -> Vec<String> {
        vec![
            bar_line("Phishing", self.probability),
            bar_line("An toàn", 1.0 - self.probability),
        ]
    }
}

fn bar_line(label: &str, value: f64) -> String {
    let filled = (value * AXIS_WIDTH as f64).round() as usize;
    let filled = filled.min(AXIS_WIDTH);
    format!(
        "{:<9} [{}{}] {}",
        label,
        "█".repeat(filled),
        "░".repeat(AXIS_WIDTH - filled),
        fmt_percent(value)
    )
}

/// The single canvas slot of the page
#[derive(Debug, Default)]
pub struct ChartSlot {
    current: Option<ProbabilityChart>,
}

impl ChartSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render a chart into the slot, replacing any prior instance
    pub fn render(&mut self, probability: f64) -> &ProbabilityChart {
        self.current.insert(ProbabilityChart::new(probability))
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&ProbabilityChart> {
        self.current.as_ref()
    }

    pub fn instance_count(&self) -> usize {
        usize::from(self.current.is_some())
    }
}

// ============================================================================
// TESTS
// ============================================================================
