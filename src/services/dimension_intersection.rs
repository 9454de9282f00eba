use crate::enums::dimension::Dimension;
use crate::structs::dimension_sets::DimensionSets;
use crate::structs::yearly_report::AchievedSet;

pub struct DimensionIntersection;

impl DimensionIntersection {
    pub fn dimension_sets(achieved: &AchievedSet) -> DimensionSets {
        DimensionSets {
            economic: Self::intersect(achieved, Dimension::Economic),
            environmental: Self::intersect(achieved, Dimension::Environmental),
            social: Self::intersect(achieved, Dimension::Social),
        }
    }

    fn intersect(achieved: &AchievedSet, dimension: Dimension) -> AchievedSet {
        achieved
            .iter()
            .filter(|code| dimension.contains(code))
            .cloned()
            .collect()
    }
}
