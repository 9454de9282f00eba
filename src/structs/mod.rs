pub mod api;
pub mod category;
pub mod classified_line;
pub mod cli;
pub mod config;
pub mod dimension_sets;
pub mod partition;
pub mod prediction;
pub mod report_view;
pub mod upload;
pub mod yearly_report;
