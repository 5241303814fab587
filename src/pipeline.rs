use tracing::warn;

use crate::config::ScrapeConfig;
use crate::extractor::extract;
use crate::io::http_client::fetch_page;
use crate::models::Posting;

/// Fetches the listings page and extracts bank postings from it.
///
/// A failed fetch becomes the single fetch-failure posting, so the caller
/// always has something to render.
pub fn scrape(config: &ScrapeConfig) -> Vec<Posting> {
    match fetch_page(config) {
        Ok(page_source) => extract(&page_source, config),
        Err(e) => {
            let description = e.describe();
            warn!("Failed to fetch listings: {}", description);
            vec![Posting::fetch_failure(description)]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PATH: &str = "/latest-notifications/";

    fn config_for(server: &mockito::Server) -> ScrapeConfig {
        ScrapeConfig::default().with_source_url(format!("{}{}", server.url(), PATH))
    }

    #[test]
    fn test_scrape_extracts_from_fetched_page() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", PATH)
            .with_status(200)
            .with_body(
                r#"<html><body><div class="latest-notifications"><ul>
                    <li><a href="/idbi-jam-2024">IDBI JAM Recruitment</a><span class="date">02-May-2024</span></li>
                </ul></div></body></html>"#,
            )
            .create();

        let postings = scrape(&config_for(&server));
        assert_eq!(
            postings,
            vec![Posting::new(
                "IDBI JAM Recruitment",
                "https://www.freejobalert.com/idbi-jam-2024",
                "02-May-2024"
            )]
        );
    }

    #[test]
    fn test_scrape_turns_error_status_into_sentinel() {
        let mut server = mockito::Server::new();
        let _mock = server.mock("GET", PATH).with_status(404).create();

        let postings = scrape(&config_for(&server));
        assert_eq!(postings.len(), 1);
        assert_eq!(postings[0].link, "#");
        assert_eq!(postings[0].title, "Error fetching page");
        let error = postings[0].error.as_deref().unwrap_or_default();
        assert!(error.contains("404"), "unexpected error: {}", error);
    }

    #[test]
    fn test_sentinel_error_matches_described_fetch_error() {
        let mut server = mockito::Server::new();
        let _mock = server.mock("GET", PATH).with_status(502).expect(2).create();

        let config = config_for(&server);
        let expected = fetch_page(&config).unwrap_err().describe();
        let postings = scrape(&config);
        assert_eq!(postings, vec![Posting::fetch_failure(expected)]);
    }

    #[test]
    fn test_scrape_turns_transport_failure_into_sentinel() {
        let config = ScrapeConfig::default().with_source_url("http://127.0.0.1:1/latest-notifications/");
        let postings = scrape(&config);
        assert_eq!(postings.len(), 1);
        assert_eq!(postings[0].link, "#");
        assert!(postings[0].error.as_deref().is_some_and(|e| !e.is_empty()));
    }
}
