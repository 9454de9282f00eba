use std::sync::Arc;
use futures::{stream, StreamExt, TryStreamExt};
use crate::errors::SdgResult;
use crate::services::report_store::ReportStore;
use crate::services::retry::retry_with_backoff;
use crate::structs::classified_line::ClassifiedLine;
use crate::structs::config::retry_config::RetryConfig;
use crate::structs::prediction::Prediction;
use crate::structs::yearly_report::{AchievedSet, YearlyReport};
use crate::traits::sdg_classifier::SdgClassifier;

/// Result of a successful upload.
#[derive(Debug, Clone)]
pub struct ReportBuild {
    pub report: YearlyReport,
    pub achieved: AchievedSet,
}

enum LineOutcome {
    Classified(ClassifiedLine),
    NoPrediction,
    Unclassified(String),
}

/// Classifies uploaded reports line by line and keeps one report per year.
pub struct ReportAggregator {
    classifier: Arc<dyn SdgClassifier>,
    store: ReportStore,
    concurrency: usize,
    retry: RetryConfig,
}

impl ReportAggregator {
    pub fn new(classifier: Arc<dyn SdgClassifier>) -> Self {
        Self {
            classifier,
            store: ReportStore::new(),
            concurrency: 1,
            retry: RetryConfig::default(),
        }
    }

    /// Allow up to `concurrency` classification requests in flight.
    /// Results are still assembled in input order.
    #[must_use]
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    #[must_use]
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    pub const fn store(&self) -> &ReportStore {
        &self.store
    }

    /// Classifies every non-blank line and stores the report under `year`.
    ///
    /// A failed classification call aborts the build and leaves the store
    /// untouched, unless retry is enabled, in which case the line is
    /// recorded as unclassified once its attempts are exhausted.
    pub async fn build_report<S: AsRef<str>>(&mut self, year: i32, lines: &[S]) -> SdgResult<ReportBuild> {
        let candidates: Vec<&str> = lines
            .iter()
            .map(AsRef::as_ref)
            .filter(|line| !line.trim().is_empty())
            .collect();

        log::info!("🔍 Classifying {} lines for {}...", candidates.len(), year);

        let classifier = self.classifier.as_ref();
        let retry = &self.retry;
        let outcomes: Vec<LineOutcome> = stream::iter(candidates.iter().copied())
            .map(|line| Self::classify_line(classifier, retry, line))
            .buffered(self.concurrency)
            .try_collect()
            .await?;

        let mut classified = Vec::with_capacity(outcomes.len());
        let mut unclassified = Vec::new();
        let mut achieved = AchievedSet::new();

        for outcome in outcomes {
            match outcome {
                LineOutcome::Classified(line) => {
                    achieved.insert(line.top_category_code.clone());
                    classified.push(line);
                }
                LineOutcome::NoPrediction => {}
                LineOutcome::Unclassified(text) => unclassified.push(text),
            }
        }

        let report = YearlyReport::new(year, classified, unclassified);
        if self.store.insert(report.clone()).is_some() {
            log::info!("♻️ Replaced the previous report for {}", year);
        }

        log::info!(
            "✅ Report for {}: {} classified lines, {} distinct SDGs",
            year,
            report.lines.len(),
            achieved.len()
        );

        Ok(ReportBuild { report, achieved })
    }

    async fn classify_line(classifier: &dyn SdgClassifier, retry: &RetryConfig, line: &str) -> SdgResult<LineOutcome> {
        log::debug!("Classifying: {}", line.trim());

        let predictions = if retry.enabled {
            match retry_with_backoff(retry, || classifier.classify(line), |e| e.is_network()).await {
                Ok(predictions) => predictions,
                Err(error) if error.is_network() => {
                    log::warn!("⚠️ Giving up on line after {} attempts: {}", retry.max_attempts, error);
                    return Ok(LineOutcome::Unclassified(line.trim().to_string()));
                }
                Err(error) => return Err(error),
            }
        } else {
            classifier.classify(line).await?
        };

        Ok(match Prediction::top(&predictions) {
            Some(top) => LineOutcome::Classified(ClassifiedLine::from_top(line, top)),
            None => {
                log::debug!("No predictions, dropping line: {}", line.trim());
                LineOutcome::NoPrediction
            }
        })
    }
}
