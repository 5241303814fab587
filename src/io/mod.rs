pub mod http_client;
pub mod report_file;
