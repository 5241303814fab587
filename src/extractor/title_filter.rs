use crate::config::ScrapeConfig;
use crate::models::PLACEHOLDER_LINK;

/// Keyword classification of listing titles.
///
/// Matching is case-insensitive substring matching in both directions: a
/// title must contain a bank keyword and must not contain an exclusion
/// phrase.
#[derive(Debug, Clone)]
pub struct TitleFilter {
    keywords: Vec<String>,
    exclusions: Vec<String>,
}

impl TitleFilter {
    pub fn new<S: AsRef<str>>(keywords: &[S], exclusions: &[S]) -> Self {
        let lower = |items: &[S]| -> Vec<String> {
            items.iter().map(|s| s.as_ref().to_lowercase()).collect()
        };
        Self {
            keywords: lower(keywords),
            exclusions: lower(exclusions),
        }
    }

    pub fn from_config(config: &ScrapeConfig) -> Self {
        Self::new(&config.bank_keywords, &config.exclusion_phrases)
    }

    pub fn is_bank_related(&self, title: &str) -> bool {
        let title = title.to_lowercase();
        !title.is_empty() && self.keywords.iter().any(|k| title.contains(k.as_str()))
    }

    /// Category labels, regional qualifiers and anchor links.
    pub fn is_excluded(&self, title: &str, href: &str) -> bool {
        let title = title.to_lowercase();
        href.contains(PLACEHOLDER_LINK) || self.exclusions.iter().any(|x| title.contains(x.as_str()))
    }

    pub fn accepts(&self, title: &str, href: &str) -> bool {
        self.is_bank_related(title) && !self.is_excluded(title, href)
    }
}
