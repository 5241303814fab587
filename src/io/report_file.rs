use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{Result, ScrapeError};
use crate::models::Posting;
use crate::views::report::render;

/// Renders the report and overwrites `path` with it.
pub fn write_report(postings: &[Posting], path: &Path) -> Result<()> {
    let html = render(postings);
    fs::write(path, html.as_bytes()).map_err(|source| ScrapeError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), rows = postings.len(), "Wrote report");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_report_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.html");
        fs::write(&path, "stale contents from a previous run").unwrap();

        let postings = vec![Posting::new(
            "भारतीय स्टेट बैंक SBI Clerk",
            "https://www.freejobalert.com/sbi-clerk",
            "10-Jan-2024",
        )];
        write_report(&postings, &path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(!written.contains("stale contents"));
        assert!(written.contains("भारतीय स्टेट बैंक SBI Clerk"));
        assert_eq!(written, render(&postings));
    }

    #[test]
    fn test_write_report_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("index.html");

        let err = write_report(&[Posting::sentinel("No bank jobs found")], &path).unwrap_err();
        assert!(matches!(err, ScrapeError::Write { .. }));
        assert!(err.to_string().contains("index.html"));
    }
}
