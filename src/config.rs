//! Literal configuration for a scrape run.
//!
//! Every URL, selector and keyword the program uses lives here as a static
//! table. [`ScrapeConfig::default`] is what the binary runs with; the `with_*`
//! builders exist so tests can point the fetcher at a mock server.

use std::path::PathBuf;

pub const SOURCE_URL: &str = "https://www.freejobalert.com/latest-notifications/";
pub const BASE_ORIGIN: &str = "https://www.freejobalert.com";
pub const USER_AGENT: &str = "Mozilla/5.0";
pub const OUTPUT_PATH: &str = "index.html";

/// Candidate listing containers, most specific first.
pub const CONTAINER_SELECTORS: &[&str] = &[
    "div.latest-notifications",
    "div.entry-content",
    "div.job-list",
    "ul.notifications",
];

/// Candidate item selectors, tried inside the chosen container.
pub const ITEM_SELECTORS: &[&str] = &["li", "div.job-item", "tr"];

pub const LINK_SELECTOR: &str = "a";

/// Date lookups scoped to the item.
pub const DATE_SELECTORS: &[&str] = &["span.date", "td.date", "div.post-date"];

/// Date lookup applied to the element right after the item.
pub const SIBLING_DATE_SELECTOR: &str = "span.date";

pub const BANK_KEYWORDS: &[&str] = &[
    "sbi",
    "idbi",
    "indian overseas",
    "canara",
    "punjab national",
    "bank of",
    "ibps",
    "rbi",
    "nabard",
    "clerk",
    "po",
    "probationary officer",
    "specialist officer",
    "lbo",
    "jam",
    "hdfc",
    "icici",
    "bank",
];

/// Navigation and category labels that veto a keyword match.
pub const EXCLUSION_PHRASES: &[&str] = &["banks", "jammu and kashmir", "all india", "other"];

#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub source_url: String,
    pub base_origin: String,
    pub user_agent: String,
    pub output_path: PathBuf,
    pub container_selectors: Vec<String>,
    pub item_selectors: Vec<String>,
    pub link_selector: String,
    pub date_selectors: Vec<String>,
    pub sibling_date_selector: String,
    pub bank_keywords: Vec<String>,
    pub exclusion_phrases: Vec<String>,
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            source_url: SOURCE_URL.to_string(),
            base_origin: BASE_ORIGIN.to_string(),
            user_agent: USER_AGENT.to_string(),
            output_path: PathBuf::from(OUTPUT_PATH),
            container_selectors: owned(CONTAINER_SELECTORS),
            item_selectors: owned(ITEM_SELECTORS),
            link_selector: LINK_SELECTOR.to_string(),
            date_selectors: owned(DATE_SELECTORS),
            sibling_date_selector: SIBLING_DATE_SELECTOR.to_string(),
            bank_keywords: owned(BANK_KEYWORDS),
            exclusion_phrases: owned(EXCLUSION_PHRASES),
        }
    }
}

impl ScrapeConfig {
    pub fn with_source_url(mut self, url: impl Into<String>) -> Self {
        self.source_url = url.into();
        self
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    pub fn with_bank_keywords(mut self, keywords: &[&str]) -> Self {
        self.bank_keywords = owned(keywords);
        self
    }

    pub fn with_exclusion_phrases(mut self, phrases: &[&str]) -> Self {
        self.exclusion_phrases = owned(phrases);
        self
    }

    pub fn with_container_selectors(mut self, selectors: &[&str]) -> Self {
        self.container_selectors = owned(selectors);
        self
    }
}
