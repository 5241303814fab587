//! Bank job extraction from the listings page.
//!
//! The page markup is not stable, so every lookup walks an ordered list of
//! candidate selectors: container, then items inside it, then a date field
//! per item. Extraction never fails. When nothing usable is found the result
//! is a single sentinel posting naming the stage that came up empty.

use scraper::{ElementRef, Html};
use tracing::{debug, info, trace, warn};

use crate::config::ScrapeConfig;
use crate::extractor::general_extractor::{element_text, SelectorChain};
use crate::extractor::title_filter::TitleFilter;
use crate::extractor::url_extractor::resolve_link;
use crate::models::{Posting, MISSING_DATE, NO_BANK_JOBS, NO_CONTAINER, NO_ITEMS, PLACEHOLDER_LINK};

pub struct JobExtractor {
    containers: SelectorChain,
    items: SelectorChain,
    link: SelectorChain,
    dates: SelectorChain,
    sibling_date: SelectorChain,
    filter: TitleFilter,
    base_origin: String,
}

impl JobExtractor {
    pub fn new(config: &ScrapeConfig) -> Self {
        Self {
            containers: SelectorChain::compile(&config.container_selectors),
            items: SelectorChain::compile(&config.item_selectors),
            link: SelectorChain::compile(std::slice::from_ref(&config.link_selector)),
            dates: SelectorChain::compile(&config.date_selectors),
            sibling_date: SelectorChain::compile(std::slice::from_ref(&config.sibling_date_selector)),
            filter: TitleFilter::from_config(config),
            base_origin: config.base_origin.clone(),
        }
    }

    pub fn extract(&self, page_source: &str) -> Vec<Posting> {
        let document = Html::parse_document(page_source);

        let Some((container_css, container)) = self.containers.first_match(document.root_element())
        else {
            warn!("No job container matched");
            return vec![Posting::sentinel(NO_CONTAINER)];
        };
        debug!(selector = container_css, "Located job container");

        let Some((item_css, items)) = self.items.first_non_empty(container) else {
            warn!("Job container has no recognizable items");
            return vec![Posting::sentinel(NO_ITEMS)];
        };
        debug!(selector = item_css, count = items.len(), "Enumerated job items");

        let postings: Vec<Posting> = items
            .into_iter()
            .filter_map(|item| self.posting_from_item(item))
            .collect();

        if postings.is_empty() {
            info!("No bank related postings on the page");
            return vec![Posting::sentinel(NO_BANK_JOBS)];
        }
        info!(count = postings.len(), "Extracted bank job postings");
        postings
    }

    fn posting_from_item(&self, item: ElementRef<'_>) -> Option<Posting> {
        let Some((_, anchor)) = self.link.first_match(item) else {
            trace!("Skipping item without a link");
            return None;
        };
        let title = element_text(anchor);
        let href = anchor.value().attr("href").unwrap_or(PLACEHOLDER_LINK);

        if !self.filter.accepts(&title, href) {
            trace!(%title, href, "Skipping non bank item");
            return None;
        }

        let date = self
            .date_element(item)
            .map(|el| el.text().collect::<String>().trim().to_string())
            .unwrap_or_else(|| MISSING_DATE.to_string());
        let link = resolve_link(href, &self.base_origin);

        Some(Posting::new(title, link, date))
    }

    /// Date field inside the item, else the element right after it.
    fn date_element<'a>(&self, item: ElementRef<'a>) -> Option<ElementRef<'a>> {
        if let Some((_, el)) = self.dates.first_match(item) {
            return Some(el);
        }
        let next = item.next_siblings().find_map(ElementRef::wrap)?;
        self.sibling_date.matches(next).then_some(next)
    }
}

/// Extracts bank job postings from raw page HTML.
pub fn extract(page_source: &str, config: &ScrapeConfig) -> Vec<Posting> {
    JobExtractor::new(config).extract(page_source)
}
