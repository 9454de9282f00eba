pub mod classifier_config;
pub mod config;
pub mod output_config;
pub mod report_config;
pub mod retry_config;
