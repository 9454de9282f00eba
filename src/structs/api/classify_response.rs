use serde::Deserialize;
use crate::structs::prediction::Prediction;

#[derive(Debug, Deserialize)]
pub struct ClassifyResponse {
    #[serde(default)]
    pub predictions: Option<Vec<PredictionEntry>>,
}

#[derive(Debug, Deserialize)]
pub struct PredictionEntry {
    pub sdg: SdgRef,
    pub prediction: f64,
}

#[derive(Debug, Deserialize)]
pub struct SdgRef {
    pub code: String,
    pub name: String,
}

impl ClassifyResponse {
    pub fn into_predictions(self) -> Vec<Prediction> {
        self.predictions
            .unwrap_or_default()
            .into_iter()
            .map(|entry| Prediction {
                category_code: entry.sdg.code,
                category_name: entry.sdg.name,
                score: entry.prediction,
            })
            .collect()
    }
}
