/// Placeholder link carried by every sentinel posting.
pub const PLACEHOLDER_LINK: &str = "#";
/// Date shown when no date field was found.
pub const MISSING_DATE: &str = "N/A";

pub const FETCH_FAILED: &str = "Error fetching page";
pub const NO_CONTAINER: &str = "No job container found";
pub const NO_ITEMS: &str = "No job items found";
pub const NO_BANK_JOBS: &str = "No bank jobs found";

/// One row of the report: either a real job notification or a sentinel
/// explaining why none were found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Posting {
    pub title: String,
    pub link: String,
    pub date: String,
    /// Set only on the fetch-failure sentinel.
    pub error: Option<String>,
}

impl Posting {
    pub fn new(title: impl Into<String>, link: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            date: date.into(),
            error: None,
        }
    }

    /// Descriptive sentinel used when the page had no usable listings.
    pub fn sentinel(title: &str) -> Self {
        Self::new(title, PLACEHOLDER_LINK, MISSING_DATE)
    }

    pub fn fetch_failure(description: impl Into<String>) -> Self {
        Self {
            error: Some(description.into()),
            ..Self::sentinel(FETCH_FAILED)
        }
    }

    pub fn is_sentinel(&self) -> bool {
        self.link == PLACEHOLDER_LINK
    }
}
