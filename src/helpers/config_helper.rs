use crate::config::constants::DEFAULT_CLASSIFIER_URL;

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_endpoint() -> String {
        DEFAULT_CLASSIFIER_URL.to_string()
    }

    pub const fn default_timeout_secs() -> u64 {
        30
    }

    pub const fn default_concurrency() -> usize {
        1
    }

    pub const fn default_max_attempts() -> usize {
        3
    }

    pub const fn default_base_delay_ms() -> u64 {
        500
    }

    pub const fn default_max_delay_ms() -> u64 {
        5_000
    }

    pub const fn default_first_year() -> i32 {
        2022
    }

    pub const fn default_window_years() -> u32 {
        4
    }

    pub const fn default_verbose() -> bool {
        false
    }
}
