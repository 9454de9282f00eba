use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub category_code: String,
    pub category_name: String,
    pub score: f64,
}

impl Prediction {
    pub fn new(category_code: &str, category_name: &str, score: f64) -> Self {
        Self {
            category_code: category_code.to_string(),
            category_name: category_name.to_string(),
            score,
        }
    }

    /// Highest-scoring prediction; on equal scores the earliest one wins.
    pub fn top(predictions: &[Self]) -> Option<&Self> {
        predictions.iter().fold(None, |best: Option<&Self>, candidate| match best {
            Some(current) if candidate.score <= current.score => Some(current),
            Some(current) if candidate.score.is_nan() => Some(current),
            _ => Some(candidate),
        })
    }
}
