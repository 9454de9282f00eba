use crate::services::taxonomy::Taxonomy;
use crate::structs::category::Category;
use crate::structs::partition::Partition;
use crate::structs::yearly_report::YearlyReport;

pub struct Partitioner;

impl Partitioner {
    /// Splits the taxonomy into accomplished and outstanding goals.
    ///
    /// Categories are matched by display name against the names the
    /// classifier returned, so a service-side name that differs from the
    /// taxonomy label leaves that goal outstanding.
    pub fn partition(report: &YearlyReport) -> Partition {
        let matched = report.matched_names();
        let (accomplished, outstanding): (Vec<&'static Category>, Vec<&'static Category>) = Taxonomy::categories()
            .iter()
            .partition(|category| matched.contains(category.name));

        Partition { accomplished, outstanding }
    }
}
