//! CSV Export of the Last Check
//!
//! Two lines: header (URL, Result, Probability, then the feature names in
//! stored order) and one data row. Comma-joined literal values, UTF-8, no
//! quoting - matches what the page's download produced.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use super::backend::CheckResult;
use super::view::fmt_value;

/// Serialize a check result into the two-line CSV document
pub fn to_csv(result: &CheckResult) -> String {
    let mut header: Vec<String> = vec![
        "URL".to_string(),
        "Result".to_string(),
        "Probability".to_string(),
    ];
    let mut row: Vec<String> = vec![
        result.url.clone(),
        result.result.clone(),
        result.probability.to_string(),
    ];

    for (name, value) in &result.features {
        header.push(name.clone());
        row.push(fmt_value(value));
    }

    format!("{}\n{}\n", header.join(","), row.join(","))
}

/// Write the CSV document to `path`, flushing before the handle is released
pub fn save(result: &CheckResult, path: &Path) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(to_csv(result).as_bytes())?;
    file.flush()?;
    log::info!("Exported check result for {} to {}", result.url, path.display());
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> CheckResult {
        serde_json::from_str(
            r#"{
                "url": "http://example.com",
                "result": "Legitimate",
                "probability": 0.12,
                "html_analysis": {"num_links": 5, "num_forms": 1, "num_iframes": 0,
                                  "title": "Example", "external_links": ["http://a.com"]},
                "features": {"has_ip": 0, "url_length": 19}
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_csv_header_and_row() {
        let csv = to_csv(&sample_result());
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "URL,Result,Probability,has_ip,url_length");
        assert_eq!(lines[1], "http://example.com,Legitimate,0.12,0,19");
    }

    #[test]
    fn test_csv_without_features() {
        let mut result = sample_result();
        result.features.clear();
        let csv = to_csv(&result);
        assert_eq!(csv, "URL,Result,Probability\nhttp://example.com,Legitimate,0.12\n");
    }

    #[test]
    fn test_save_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("phishing_results.csv");

        save(&sample_result(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("URL,Result,Probability"));
        assert!(content.ends_with("0,19\n"));
    }

    #[test]
    fn test_save_overwrites_previous_export() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("phishing_results.csv");

        let mut first = sample_result();
        first.url = "http://old.example.com".to_string();
        save(&first, &path).unwrap();
        save(&sample_result(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(!content.contains("old.example.com"));
        assert!(content.contains("http://example.com"));
    }
}
