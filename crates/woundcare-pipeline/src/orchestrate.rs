use woundcare_core::config::WoundcareConfig;
use woundcare_core::history::HistoryAccessor;
use woundcare_core::keys;
use woundcare_core::models::metrics::MetricSet;
use woundcare_core::models::risk::RiskResult;
use woundcare_perception::WoundImage;

use crate::error::PipelineError;

/// Extract → history lookup → trend → classify.
///
/// Holds only validated, immutable config, so one instance can serve
/// concurrent assessments for different subjects.
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: WoundcareConfig,
}

impl Pipeline {
    pub fn new(config: WoundcareConfig) -> Result<Self, PipelineError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &WoundcareConfig {
        &self.config
    }

    /// Assess one photo for `subject_id`.
    ///
    /// The history read is the only await point and completes before
    /// classification starts. Persisting the result is left to the caller.
    pub async fn run<H: HistoryAccessor>(
        &self,
        image: &WoundImage,
        subject_id: &str,
        history: &H,
    ) -> Result<RiskResult, PipelineError> {
        keys::validate_subject_id(subject_id)?;

        let metrics = woundcare_perception::extract(image, &self.config.extractor)?;

        let previous = history.get_latest(subject_id).await?;
        match &previous {
            Some(entry) => tracing::debug!(
                subject_id,
                previous_id = %entry.id,
                previous_at = %entry.recorded_at,
                "loaded previous record"
            ),
            None => tracing::debug!(subject_id, "no previous record"),
        }

        let result = self.classify_metrics(&metrics, previous.as_ref().map(|e| &e.metrics));
        tracing::info!(
            subject_id,
            status = %result.status(),
            rules = result.triggered_rules().len(),
            "assessment complete"
        );
        Ok(result)
    }

    /// Assess one photo against metrics the caller already holds.
    pub fn run_with_previous(
        &self,
        image: &WoundImage,
        previous: Option<&MetricSet>,
    ) -> Result<RiskResult, PipelineError> {
        let metrics = woundcare_perception::extract(image, &self.config.extractor)?;
        Ok(self.classify_metrics(&metrics, previous))
    }

    /// Classify already-extracted metrics, e.g. to re-score a stored record
    /// under new thresholds.
    pub fn classify_metrics(&self, metrics: &MetricSet, previous: Option<&MetricSet>) -> RiskResult {
        let quality = woundcare_decision::derive_quality(metrics, &self.config.quality);
        if quality.is_unreliable() {
            tracing::warn!(issues = ?quality.issues(), "image quality below calibration floor");
        }
        let trend = woundcare_decision::analyze(metrics, previous, &self.config.trend);
        woundcare_decision::classify(metrics, trend.as_ref(), quality, &self.config.classifier)
    }
}
