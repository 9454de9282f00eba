use serde::{Deserialize, Serialize};
use crate::structs::config::classifier_config::ClassifierConfig;
use crate::structs::config::output_config::OutputConfig;
use crate::structs::config::report_config::ReportConfig;
use crate::structs::config::retry_config::RetryConfig;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub classifier: ClassifierConfig,

    #[serde(default)]
    pub retry: RetryConfig,

    #[serde(default)]
    pub report: ReportConfig,

    #[serde(default)]
    pub output: OutputConfig,
}
