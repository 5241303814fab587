pub mod general_extractor;
pub mod job_extractor;
pub mod title_filter;
pub mod url_extractor;

pub use job_extractor::{extract, JobExtractor};
