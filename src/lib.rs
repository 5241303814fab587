// src/lib.rs

pub mod config;
pub mod error;
pub mod extractor;
pub mod io;
pub mod logging;
pub mod models;
pub mod pipeline;
pub mod views;

pub use config::ScrapeConfig;
pub use error::{Result, ScrapeError};
pub use models::Posting;
pub use pipeline::scrape;
