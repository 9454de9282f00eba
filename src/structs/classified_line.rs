use serde::{Deserialize, Serialize};
use crate::structs::prediction::Prediction;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedLine {
    pub text: String,
    pub top_category_code: String,
    pub top_category_name: String,
}

impl ClassifiedLine {
    pub fn from_top(text: &str, top: &Prediction) -> Self {
        Self {
            text: text.trim().to_string(),
            top_category_code: top.category_code.clone(),
            top_category_name: top.category_name.clone(),
        }
    }
}
