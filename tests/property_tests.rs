use std::collections::BTreeSet;
use std::sync::Arc;
use proptest::prelude::*;
use sdg_classifier::enums::dimension::Dimension;
use sdg_classifier::services::dimension_intersection::DimensionIntersection;
use sdg_classifier::services::partitioner::Partitioner;
use sdg_classifier::services::report_aggregator::ReportAggregator;
use sdg_classifier::services::taxonomy::Taxonomy;
use sdg_classifier::structs::classified_line::ClassifiedLine;
use sdg_classifier::structs::prediction::Prediction;
use sdg_classifier::structs::yearly_report::YearlyReport;
use crate::common::{pred, ScriptedClassifier};

fn code_strategy() -> impl Strategy<Value = String> {
    (1u8..=17).prop_map(|code| code.to_string())
}

fn name_of(code: &str) -> &'static str {
    Taxonomy::find_by_code(code).unwrap().name
}

proptest! {
    #[test]
    fn top_prediction_is_max_and_first_on_ties(scores in prop::collection::vec(0u8..5, 1..12)) {
        let predictions: Vec<Prediction> = scores
            .iter()
            .enumerate()
            .map(|(i, score)| pred(&(i + 1).to_string(), "goal", f64::from(*score)))
            .collect();

        let top = Prediction::top(&predictions).unwrap();
        prop_assert!(predictions.iter().all(|p| top.score >= p.score));

        let first_max = predictions.iter().position(|p| p.score == top.score).unwrap();
        prop_assert_eq!(&top.category_code, &predictions[first_max].category_code);
    }

    #[test]
    fn partition_covers_taxonomy_exactly(codes in prop::collection::vec(code_strategy(), 0..20)) {
        let lines = codes
            .iter()
            .map(|code| ClassifiedLine {
                text: format!("line {code}"),
                top_category_code: code.clone(),
                top_category_name: name_of(code).to_string(),
            })
            .collect();
        let report = YearlyReport::new(2024, lines, Vec::new());

        let partition = Partitioner::partition(&report);
        prop_assert_eq!(partition.accomplished.len() + partition.outstanding.len(), 17);

        let accomplished: BTreeSet<&str> = partition.accomplished.iter().map(|c| c.code).collect();
        let outstanding: BTreeSet<&str> = partition.outstanding.iter().map(|c| c.code).collect();
        prop_assert!(accomplished.is_disjoint(&outstanding));

        let distinct: BTreeSet<&str> = codes.iter().map(String::as_str).collect();
        prop_assert_eq!(accomplished, distinct);
    }

    #[test]
    fn dimension_sets_are_achieved_within_group(codes in prop::collection::btree_set(code_strategy(), 0..12)) {
        let sets = DimensionIntersection::dimension_sets(&codes);
        for dimension in Dimension::ALL {
            let set = sets.get(dimension);
            prop_assert!(set.is_subset(&codes));

            let expected: BTreeSet<String> = codes.intersection(&Taxonomy::group(dimension)).cloned().collect();
            prop_assert_eq!(set, &expected);
        }
    }

    #[test]
    fn report_length_bounded_by_non_blank_lines(
        entries in prop::collection::vec((any::<bool>(), prop::option::of(code_strategy())), 0..15)
    ) {
        let mut classifier = ScriptedClassifier::new();
        let mut lines = Vec::new();
        let mut non_blank = 0usize;
        let mut all_predicted = true;

        for (index, (blank, code)) in entries.iter().enumerate() {
            if *blank {
                lines.push("   ".to_string());
                continue;
            }
            let text = format!("statement {index}");
            non_blank += 1;
            match code {
                Some(code) => classifier = classifier.top(&text, code, name_of(code)),
                None => all_predicted = false,
            }
            lines.push(text);
        }

        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut aggregator = ReportAggregator::new(Arc::new(classifier));
        let build = runtime.block_on(aggregator.build_report(2024, &lines)).unwrap();

        prop_assert!(build.report.lines.len() <= non_blank);
        prop_assert_eq!(build.report.lines.len() == non_blank, all_predicted);
        prop_assert_eq!(build.report.achieved_set(), build.achieved);
    }
}
