use scraper::{ElementRef, Selector};
use tracing::warn;

use crate::error::{Result, ScrapeError};

pub fn parse_selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ScrapeError::invalid_selector(css, e))
}

/// Visible text of an element with runs of whitespace collapsed.
pub fn element_text(element: ElementRef<'_>) -> String {
    let raw = element.text().collect::<String>();
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Ordered list of CSS selectors where the first one that matches wins.
pub struct SelectorChain {
    candidates: Vec<(String, Selector)>,
}

impl SelectorChain {
    /// Compiles every candidate. Invalid ones are logged and dropped, so
    /// they behave like a selector that never matches.
    pub fn compile<S: AsRef<str>>(candidates: &[S]) -> Self {
        let candidates = candidates
            .iter()
            .filter_map(|css| {
                let css = css.as_ref();
                match parse_selector(css) {
                    Ok(selector) => Some((css.to_string(), selector)),
                    Err(e) => {
                        warn!("{}", e);
                        None
                    }
                }
            })
            .collect();
        Self { candidates }
    }

    /// First descendant of `scope` matched by the earliest selector that
    /// matches anything.
    pub fn first_match<'a>(&self, scope: ElementRef<'a>) -> Option<(&str, ElementRef<'a>)> {
        self.candidates
            .iter()
            .find_map(|(css, selector)| scope.select(selector).next().map(|el| (css.as_str(), el)))
    }

    /// All descendants matched by the earliest selector with a non-empty
    /// result. A selector yielding nothing hands over to the next one.
    pub fn first_non_empty<'a>(&self, scope: ElementRef<'a>) -> Option<(&str, Vec<ElementRef<'a>>)> {
        self.candidates.iter().find_map(|(css, selector)| {
            let found: Vec<_> = scope.select(selector).collect();
            (!found.is_empty()).then(|| (css.as_str(), found))
        })
    }

    /// Whether `element` itself matches any candidate.
    pub fn matches(&self, element: ElementRef<'_>) -> bool {
        self.candidates.iter().any(|(_, selector)| selector.matches(&element))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn test_element_text_collapses_whitespace() {
        let html = Html::parse_fragment("<a>\n   IBPS <b>Clerk</b>\n  2024  </a>");
        let selector = parse_selector("a").unwrap();
        let link = html.select(&selector).next().unwrap();
        assert_eq!(element_text(link), "IBPS Clerk 2024");
    }

    #[test]
    fn test_invalid_selector_is_reported() {
        let err = parse_selector("div[").unwrap_err();
        assert!(matches!(err, ScrapeError::InvalidSelector { .. }));
        assert!(err.to_string().contains("div["));
    }

    #[test]
    fn test_first_match_prefers_earlier_selector() {
        let html = Html::parse_document(
            r#"<div class="b">second</div><div class="a">first</div>"#,
        );
        let chain = SelectorChain::compile(&["div.a", "div.b"]);
        let (css, el) = chain.first_match(html.root_element()).unwrap();
        assert_eq!(css, "div.a");
        assert_eq!(element_text(el), "first");
    }

    #[test]
    fn test_first_non_empty_falls_through_empty_candidates() {
        let html = Html::parse_document(r#"<div><p>one</p><p>two</p></div>"#);
        let chain = SelectorChain::compile(&["li", "p"]);
        let (css, found) = chain.first_non_empty(html.root_element()).unwrap();
        assert_eq!(css, "p");
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn test_invalid_candidates_are_skipped() {
        let html = Html::parse_document(r#"<span class="date">1 Mar</span>"#);
        let chain = SelectorChain::compile(&["span[", "span.date"]);
        assert!(chain.first_match(html.root_element()).is_some());
    }

    #[test]
    fn test_no_candidate_matches() {
        let html = Html::parse_document("<p>nothing here</p>");
        let chain = SelectorChain::compile(&["ul.notifications"]);
        assert!(chain.first_match(html.root_element()).is_none());
        assert!(chain.first_non_empty(html.root_element()).is_none());
    }
}
