//! Error types for the bank jobs scraper.
//!
//! Only the fetch and the final file write can fail. Extraction never
//! fails; structural problems become sentinel postings instead.

use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced by the fetch and report-writing steps.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Transport failure or non-2xx status
    #[error("{0}")]
    Fetch(#[from] reqwest::Error),

    /// A configured CSS selector could not be parsed
    #[error("Invalid selector `{selector}`: {message}")]
    InvalidSelector { selector: String, message: String },

    /// The report could not be written
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias using ScrapeError.
pub type Result<T> = std::result::Result<T, ScrapeError>;

impl ScrapeError {
    pub fn invalid_selector(selector: &str, message: impl ToString) -> Self {
        Self::InvalidSelector {
            selector: selector.to_string(),
            message: message.to_string(),
        }
    }

    /// Human readable message including every underlying cause.
    pub fn describe(&self) -> String {
        let mut message = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            let cause_text = cause.to_string();
            if !message.contains(&cause_text) {
                message.push_str(": ");
                message.push_str(&cause_text);
            }
            source = cause.source();
        }
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_includes_io_cause() {
        let err = ScrapeError::Write {
            path: PathBuf::from("index.html"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only filesystem"),
        };
        let text = err.describe();
        assert!(text.starts_with("Failed to write index.html"));
        assert_eq!(text.matches("read-only filesystem").count(), 1);
    }

    #[test]
    fn test_invalid_selector_message() {
        let err = ScrapeError::invalid_selector("div[", "unexpected end of input");
        assert_eq!(err.to_string(), "Invalid selector `div[`: unexpected end of input");
    }
}
