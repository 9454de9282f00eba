pub mod dimension_intersection;
pub mod partitioner;
pub mod report_aggregator;
pub mod report_store;
pub mod retry;
pub mod sdg_client;
pub mod taxonomy;
