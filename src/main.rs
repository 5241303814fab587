// src/main.rs
// Fetches the latest notifications page, keeps the bank recruitment entries
// and writes them to index.html in the working directory.

use anyhow::Context;
use tracing::info;

use bankjobs::io::report_file::write_report;
use bankjobs::{logging, scrape, ScrapeConfig};

fn main() -> anyhow::Result<()> {
    logging::init_logging();

    let config = ScrapeConfig::default();
    let postings = scrape(&config);
    let real = postings.iter().filter(|p| !p.is_sentinel()).count();
    info!(postings = real, rows = postings.len(), "Scrape finished");

    write_report(&postings, &config.output_path)
        .with_context(|| format!("could not save report to {}", config.output_path.display()))?;
    Ok(())
}
