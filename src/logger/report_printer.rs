use crate::config::constants::GRID_COLUMNS;
use crate::enums::dimension::Dimension;
use crate::errors::SdgResult;
use crate::services::taxonomy::Taxonomy;
use crate::structs::category::Category;
use crate::structs::dimension_sets::DimensionSets;
use crate::structs::prediction::Prediction;
use crate::structs::report_view::ReportView;
use crate::structs::yearly_report::AchievedSet;

const TEXT_WIDTH: usize = 60;

pub struct ReportPrinter;

impl ReportPrinter {
    pub fn print_report(view: &ReportView) {
        println!("\n📊 Top SDG Match per Line — {}", view.year);
        println!("{}", "=".repeat(60));
        Self::print_line_table(view);

        Self::print_grid(&view.accomplished, "✅ Accomplished SDGs");
        Self::print_dimensions(&view.dimensions, view.diagram.title);
        Self::print_grid(&view.outstanding, "🚧 Outstanding SDGs");

        if !view.unclassified.is_empty() {
            println!("\n⚠️ Unclassified lines ({}):", view.unclassified.len());
            for text in &view.unclassified {
                println!("  - {}", Self::truncate(text, TEXT_WIDTH));
            }
        }
    }

    pub fn print_json(view: &ReportView) -> SdgResult<()> {
        println!("{}", serde_json::to_string_pretty(view)?);
        Ok(())
    }

    fn print_line_table(view: &ReportView) {
        if view.lines.is_empty() {
            println!("  (no lines were classified)");
            return;
        }

        println!("{:>4} | {:<8} | {:<40} | Text", "#", "SDG Code", "SDG Name");
        println!("{}", "-".repeat(120));
        for (index, line) in view.lines.iter().enumerate() {
            println!(
                "{:>4} | {:<8} | {:<40} | {}",
                index,
                line.top_category_code,
                Self::truncate(&line.top_category_name, 40),
                Self::truncate(&line.text, TEXT_WIDTH)
            );
        }
    }

    fn print_grid(categories: &[&Category], title: &str) {
        println!("\n{title}");
        println!("{}", "━".repeat(40));
        if categories.is_empty() {
            println!("  (none)");
            return;
        }
        for row in categories.chunks(GRID_COLUMNS) {
            let cells: Vec<String> = row
                .iter()
                .map(|category| format!("{:<30}", Self::truncate(&format!("{}: {}", category.code, category.name), 30)))
                .collect();
            println!("  {}", cells.join(" "));
            for category in row {
                log::debug!("icon {}: {}", category.code, category.icon_ref);
            }
        }
    }

    fn print_dimensions(sets: &DimensionSets, title: &str) {
        println!("\n🔵 {title}");
        println!("{}", "━".repeat(40));
        for dimension in Dimension::ALL {
            let codes = Taxonomy::ordered(sets.get(dimension));
            println!("  {:<14} {{{}}}", dimension.label(), codes.join(", "));
        }

        let regions = VennRegions::from_sets(sets);
        println!("  Regions: E only {} | Env only {} | S only {} | E∩Env {} | E∩S {} | Env∩S {} | all {}",
            regions.economic_only,
            regions.environmental_only,
            regions.social_only,
            regions.economic_environmental,
            regions.economic_social,
            regions.environmental_social,
            regions.all_three,
        );
    }

    pub fn print_predictions(text: &str, predictions: &[Prediction]) {
        println!("\n🔍 {}", Self::truncate(text, TEXT_WIDTH));
        let Some(top) = Prediction::top(predictions) else {
            println!("  (no predictions)");
            return;
        };

        let mut ranked: Vec<&Prediction> = predictions.iter().collect();
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        for prediction in ranked {
            let marker = if std::ptr::eq(prediction, top) { "⭐" } else { "  " };
            println!(
                "  {} {:>3} {:<45} {:.4}",
                marker, prediction.category_code, prediction.category_name, prediction.score
            );
        }
    }

    pub fn print_categories() {
        println!("\n📋 SDG taxonomy");
        println!("{}", "=".repeat(60));
        for category in Taxonomy::categories() {
            let dimensions: Vec<&str> = Taxonomy::dimensions_of(category.code)
                .into_iter()
                .map(Dimension::label)
                .collect();
            println!("{:>3}. {:<55} [{}]", category.code, category.name, dimensions.join(", "));
        }
    }

    fn truncate(text: &str, width: usize) -> String {
        if text.chars().count() <= width {
            return text.to_string();
        }
        let mut truncated: String = text.chars().take(width.saturating_sub(1)).collect();
        truncated.push('…');
        truncated
    }
}

/// Cardinalities of the seven regions of a three-set Venn diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VennRegions {
    pub economic_only: usize,
    pub environmental_only: usize,
    pub social_only: usize,
    pub economic_environmental: usize,
    pub economic_social: usize,
    pub environmental_social: usize,
    pub all_three: usize,
}

impl VennRegions {
    pub fn from_sets(sets: &DimensionSets) -> Self {
        let mut union: AchievedSet = sets.economic.clone();
        union.extend(sets.environmental.iter().cloned());
        union.extend(sets.social.iter().cloned());

        let mut regions = Self::default();
        for code in &union {
            let membership = (
                sets.economic.contains(code),
                sets.environmental.contains(code),
                sets.social.contains(code),
            );
            match membership {
                (true, false, false) => regions.economic_only += 1,
                (false, true, false) => regions.environmental_only += 1,
                (false, false, true) => regions.social_only += 1,
                (true, true, false) => regions.economic_environmental += 1,
                (true, false, true) => regions.economic_social += 1,
                (false, true, true) => regions.environmental_social += 1,
                (true, true, true) => regions.all_three += 1,
                (false, false, false) => {}
            }
        }
        regions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(codes: &[&str]) -> AchievedSet {
        codes.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn venn_regions_count_exclusive_membership() {
        let sets = DimensionSets {
            economic: set(&["5", "17", "9"]),
            environmental: set(&["13", "17"]),
            social: set(&["5", "17"]),
        };
        let regions = VennRegions::from_sets(&sets);
        assert_eq!(regions.economic_only, 1);
        assert_eq!(regions.environmental_only, 1);
        assert_eq!(regions.economic_social, 1);
        assert_eq!(regions.all_three, 1);
        assert_eq!(regions.social_only, 0);
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(ReportPrinter::truncate("émissions réduites", 5), "émis…");
        assert_eq!(ReportPrinter::truncate("short", 10), "short");
    }
}
