use serde::Serialize;
use crate::enums::dimension::Dimension;
use crate::structs::yearly_report::AchievedSet;

/// Achieved codes split by sustainability dimension, ready for a
/// three-set unweighted Venn diagram.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DimensionSets {
    pub economic: AchievedSet,
    pub environmental: AchievedSet,
    pub social: AchievedSet,
}

impl DimensionSets {
    pub const fn get(&self, dimension: Dimension) -> &AchievedSet {
        match dimension {
            Dimension::Economic => &self.economic,
            Dimension::Environmental => &self.environmental,
            Dimension::Social => &self.social,
        }
    }
}
