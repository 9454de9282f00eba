use std::collections::{BTreeSet, HashMap};
use once_cell::sync::Lazy;
use crate::enums::dimension::Dimension;
use crate::structs::category::Category;

macro_rules! sdg {
    ($code:literal, $padded:literal, $name:literal) => {
        Category {
            code: $code,
            name: $name,
            icon_ref: concat!(
                "https://www.un.org/sustainabledevelopment/wp-content/uploads/2019/08/E-Goal-",
                $padded,
                "-1024x1024.png"
            ),
        }
    };
}

/// The fixed SDG taxonomy, in display order.
pub static CATEGORIES: [Category; 17] = [
    sdg!("1", "01", "No poverty"),
    sdg!("2", "02", "Zero hunger"),
    sdg!("3", "03", "Good health and well-being"),
    sdg!("4", "04", "Quality education"),
    sdg!("5", "05", "Gender equality"),
    sdg!("6", "06", "Clean water and sanitation"),
    sdg!("7", "07", "Affordable and clean energy"),
    sdg!("8", "08", "Decent work and economic growth"),
    sdg!("9", "09", "Industry, innovation and infrastructure"),
    sdg!("10", "10", "Reduced inequalities"),
    sdg!("11", "11", "Sustainable cities and communities"),
    sdg!("12", "12", "Responsible consumption and production"),
    sdg!("13", "13", "Climate action"),
    sdg!("14", "14", "Life below water (Not Relevant)"),
    sdg!("15", "15", "Life on land"),
    sdg!("16", "16", "Peace, justice and strong institutions (Not Relevant)"),
    sdg!("17", "17", "Partnerships for the goals"),
];

static BY_CODE: Lazy<HashMap<&'static str, &'static Category>> =
    Lazy::new(|| CATEGORIES.iter().map(|category| (category.code, category)).collect());

pub struct Taxonomy;

impl Taxonomy {
    pub fn categories() -> &'static [Category] {
        &CATEGORIES
    }

    pub fn find_by_code(code: &str) -> Option<&'static Category> {
        BY_CODE.get(code).copied()
    }

    /// Position of a code in display order; unknown codes sort last.
    pub fn position(code: &str) -> usize {
        CATEGORIES
            .iter()
            .position(|category| category.code == code)
            .unwrap_or(CATEGORIES.len())
    }

    pub fn group(dimension: Dimension) -> BTreeSet<String> {
        dimension.codes().iter().map(ToString::to_string).collect()
    }

    pub fn dimensions_of(code: &str) -> Vec<Dimension> {
        Dimension::ALL
            .into_iter()
            .filter(|dimension| dimension.contains(code))
            .collect()
    }

    /// Codes sorted by display order rather than lexically.
    pub fn ordered<'a, I>(codes: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a String>,
    {
        let mut ordered: Vec<String> = codes.into_iter().cloned().collect();
        ordered.sort_by_key(|code| (Self::position(code), code.clone()));
        ordered
    }
}
