use reqwest::blocking::Client;
use tracing::{debug, info};

use crate::config::ScrapeConfig;
use crate::error::Result;

/// Downloads the listings page.
///
/// Transport failures and non-2xx statuses both come back as
/// [`ScrapeError::Fetch`](crate::error::ScrapeError::Fetch).
pub fn fetch_page(config: &ScrapeConfig) -> Result<String> {
    info!(url = %config.source_url, "Fetching job listings");
    let client = Client::builder()
        .user_agent(config.user_agent.as_str())
        .build()?;

    let response = client.get(&config.source_url).send()?;
    debug!(status = %response.status(), "Received response");
    let body = response.error_for_status()?.text()?;

    debug!(bytes = body.len(), "Fetched listings page");
    Ok(body)
}
