//! Terminal Renderer
//!
//! Applies a computed `PageView` to stdout in one pass. Pure formatting;
//! every display decision is made in `logic::view`.

use crate::logic::view::{PageView, RegionState, RegionView};

const RESET: &str = "\x1b[0m";

fn state_color(state: RegionState) -> &'static str {
    match state {
        RegionState::Legitimate => "\x1b[32m", // Green
        RegionState::Suspicious => "\x1b[33m", // Yellow
        RegionState::Phishing => "\x1b[31m",   // Red
        RegionState::Error => "\x1b[31m",
        RegionState::Checking => "\x1b[36m",
        RegionState::Hidden | RegionState::Info => "",
    }
}

/// Render every visible region of the page
pub fn render_page(page: &PageView) {
    render_region(&page.result);
    render_region(&page.html_analysis);
    render_region(&page.features);
    render_region(&page.chart);
    render_region(&page.model_info);
}

/// Render one region: heading, body lines, bulleted items
pub fn render_region(region: &RegionView) {
    if !region.visible {
        return;
    }

    let color = state_color(region.state);
    let reset = if color.is_empty() { "" } else { RESET };

    println!();
    if let Some(heading) = &region.heading {
        println!("=== {} ===", heading);
    }
    for line in &region.lines {
        println!("{}{}{}", color, line, reset);
    }
    for item in &region.items {
        println!("  - {}", item);
    }
}

/// Blocking-alert stand-in for local validation messages
pub fn alert(message: &str) {
    println!("⚠️  {}", message);
}

/// Confirmation message after a successful local operation
pub fn notice(message: &str) {
    println!("{}", message);
}
