use std::collections::BTreeMap;
use crate::errors::{SdgError, SdgResult};
use crate::structs::yearly_report::YearlyReport;

/// Owns every report of the session, one slot per year.
#[derive(Debug, Default)]
pub struct ReportStore {
    reports: BTreeMap<i32, YearlyReport>,
}

impl ReportStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a report, replacing and returning any previous one for its year.
    pub fn insert(&mut self, report: YearlyReport) -> Option<YearlyReport> {
        self.reports.insert(report.year, report)
    }

    pub fn get(&self, year: i32) -> Option<&YearlyReport> {
        self.reports.get(&year)
    }

    pub fn require(&self, year: i32) -> SdgResult<&YearlyReport> {
        self.get(year).ok_or_else(|| SdgError::ReportNotFound {
            year,
            available: self.years(),
        })
    }

    /// Years with a stored report, ascending.
    pub fn years(&self) -> Vec<i32> {
        self.reports.keys().copied().collect()
    }

    pub fn earliest_year(&self) -> Option<i32> {
        self.reports.keys().next().copied()
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}
