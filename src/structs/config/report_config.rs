use std::ops::RangeInclusive;
use serde::{Deserialize, Serialize};
use crate::errors::{SdgError, SdgResult};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ReportConfig {
    #[serde(default = "ConfigHelper::default_first_year")]
    pub first_year: i32,

    #[serde(default = "ConfigHelper::default_window_years")]
    pub window_years: u32,
}

impl ReportConfig {
    pub fn years(&self) -> RangeInclusive<i32> {
        let span = i32::try_from(self.window_years).unwrap_or(i32::MAX).saturating_sub(1);
        self.first_year..=self.first_year.saturating_add(span)
    }

    pub fn check_year(&self, year: i32) -> SdgResult<i32> {
        let years = self.years();
        if self.window_years > 0 && years.contains(&year) {
            return Ok(year);
        }
        Err(SdgError::input_error(
            &year.to_string(),
            &format!("a report year between {} and {}", years.start(), years.end()),
            "Adjust [report] first_year / window_years in the configuration to select other years",
        ))
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            first_year: ConfigHelper::default_first_year(),
            window_years: ConfigHelper::default_window_years(),
        }
    }
}
