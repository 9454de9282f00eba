use serde::Serialize;
use crate::config::constants::DIAGRAM_TITLE;
use crate::enums::dimension::Dimension;
use crate::services::dimension_intersection::DimensionIntersection;
use crate::services::partitioner::Partitioner;
use crate::services::taxonomy::Taxonomy;
use crate::structs::category::Category;
use crate::structs::classified_line::ClassifiedLine;
use crate::structs::dimension_sets::DimensionSets;
use crate::structs::yearly_report::YearlyReport;

/// Everything the presentation layer needs for one year.
#[derive(Debug, Clone, Serialize)]
pub struct ReportView {
    pub year: i32,
    pub lines: Vec<ClassifiedLine>,
    pub achieved: Vec<String>,
    pub accomplished: Vec<&'static Category>,
    pub outstanding: Vec<&'static Category>,
    pub dimensions: DimensionSets,
    pub diagram: DiagramSpec,
    pub unclassified: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DiagramSpec {
    pub title: &'static str,
    pub labels: [&'static str; 3],
}

impl ReportView {
    pub fn from_report(report: &YearlyReport) -> Self {
        let achieved = report.achieved_set();
        let partition = Partitioner::partition(report);

        Self {
            year: report.year,
            lines: report.lines.clone(),
            achieved: Taxonomy::ordered(&achieved),
            accomplished: partition.accomplished,
            outstanding: partition.outstanding,
            dimensions: DimensionIntersection::dimension_sets(&achieved),
            diagram: DiagramSpec {
                title: DIAGRAM_TITLE,
                labels: Dimension::ALL.map(Dimension::label),
            },
            unclassified: report.unclassified.clone(),
        }
    }
}
