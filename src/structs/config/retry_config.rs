use std::time::Duration;
use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

/// Per-line retry. When disabled, the first failed line aborts the report.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RetryConfig {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default = "ConfigHelper::default_max_attempts")]
    pub max_attempts: usize,

    #[serde(default = "ConfigHelper::default_base_delay_ms")]
    pub base_delay_ms: u64,

    #[serde(default = "ConfigHelper::default_max_delay_ms")]
    pub max_delay_ms: u64,
}

impl RetryConfig {
    pub const fn base_delay(&self) -> Duration {
        Duration::from_millis(self.base_delay_ms)
    }

    pub const fn max_delay(&self) -> Duration {
        Duration::from_millis(self.max_delay_ms)
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            max_attempts: ConfigHelper::default_max_attempts(),
            base_delay_ms: ConfigHelper::default_base_delay_ms(),
            max_delay_ms: ConfigHelper::default_max_delay_ms(),
        }
    }
}
