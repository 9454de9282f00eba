use std::collections::BTreeSet;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::structs::classified_line::ClassifiedLine;

/// Deduplicated category codes.
pub type AchievedSet = BTreeSet<String>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyReport {
    pub year: i32,
    pub lines: Vec<ClassifiedLine>,
    /// Lines that exhausted their retries; only filled when retry is enabled.
    #[serde(default)]
    pub unclassified: Vec<String>,
    pub uploaded_at: DateTime<Utc>,
}

impl YearlyReport {
    pub fn new(year: i32, lines: Vec<ClassifiedLine>, unclassified: Vec<String>) -> Self {
        Self {
            year,
            lines,
            unclassified,
            uploaded_at: Utc::now(),
        }
    }

    pub fn achieved_set(&self) -> AchievedSet {
        self.lines
            .iter()
            .map(|line| line.top_category_code.clone())
            .collect()
    }

    pub fn matched_names(&self) -> BTreeSet<&str> {
        self.lines
            .iter()
            .map(|line| line.top_category_name.as_str())
            .collect()
    }
}
