//! Resolving the `--input` argument to a loaded dataset.

use anyhow::Context;
use log::{info, warn};
use tmx_data::loader::{fetch_url, load_path};
use tmx_data::LoadReport;

fn is_url(input: &str) -> bool {
    input.starts_with("http://") || input.starts_with("https://")
}

/// Load `input` as a URL or a file path and log what was dropped.
pub async fn load_source(input: &str, years_count: usize) -> anyhow::Result<LoadReport> {
    let report = if is_url(input) {
        fetch_url(input, years_count)
            .await
            .with_context(|| format!("failed to fetch {}", input))?
    } else {
        load_path(input, years_count).with_context(|| format!("failed to load {}", input))?
    };

    info!(
        "Loaded {} rows from {}: {} months over years {:?}",
        report.rows_read,
        input,
        report.dataset.len(),
        report.dataset.years
    );
    if report.skipped() > 0 || report.duplicates > 0 {
        warn!(
            "{} rows skipped ({} bad dates, {} bad values), {} duplicate dates replaced",
            report.skipped(),
            report.skipped_dates,
            report.skipped_values,
            report.duplicates
        );
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_url() {
        assert!(is_url("https://example.org/daily.csv"));
        assert!(is_url("http://localhost:8080/daily.csv"));
        assert!(!is_url("fixtures/daily.csv"));
        assert!(!is_url("/tmp/http.csv"));
    }

    #[tokio::test]
    async fn test_missing_file_has_context() {
        let err = load_source("does/not/exist.csv", 10).await.unwrap_err();
        assert_eq!(err.to_string(), "failed to load does/not/exist.csv");
        assert!(err.chain().count() >= 2);
    }
}
