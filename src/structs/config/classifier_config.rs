use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ClassifierConfig {
    #[serde(default = "ConfigHelper::default_endpoint")]
    pub endpoint: String,

    #[serde(default = "ConfigHelper::default_timeout_secs")]
    pub timeout_secs: u64,

    /// Requests in flight at once; 1 keeps classification sequential.
    #[serde(default = "ConfigHelper::default_concurrency")]
    pub concurrency: usize,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            endpoint: ConfigHelper::default_endpoint(),
            timeout_secs: ConfigHelper::default_timeout_secs(),
            concurrency: ConfigHelper::default_concurrency(),
        }
    }
}
