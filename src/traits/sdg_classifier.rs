use async_trait::async_trait;
use crate::errors::SdgResult;
use crate::structs::prediction::Prediction;

/// Maps one line of text to ranked SDG predictions.
///
/// An empty vector is a valid answer meaning "no classification"; only a
/// failed call is an error.
#[async_trait]
pub trait SdgClassifier: Send + Sync {
    async fn classify(&self, text: &str) -> SdgResult<Vec<Prediction>>;
}
