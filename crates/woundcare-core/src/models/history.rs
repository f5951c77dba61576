use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

use super::context::PatientContext;
use super::metrics::MetricSet;
use super::risk::{RiskResult, RiskStatus, RuleId};

/// One recorded assessment for a subject. Owned by the history store; the
/// pipeline only reads the most recent one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub subject_id: String,
    pub recorded_at: jiff::Timestamp,
    pub metrics: MetricSet,
    pub status: RiskStatus,
    /// Rules behind `status`, parallel to `rationale`. Empty on lines written
    /// before these were recorded.
    #[serde(default)]
    pub triggered_rules: Vec<RuleId>,
    #[serde(default)]
    pub rationale: Vec<String>,
    /// Photo the metrics were extracted from, as given by the caller.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub image_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub context: Option<PatientContext>,
}

impl HistoryEntry {
    /// Build the entry a caller appends after receiving a classification.
    pub fn from_result(
        subject_id: &str,
        result: &RiskResult,
        context: Option<PatientContext>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            subject_id: subject_id.to_string(),
            recorded_at: jiff::Timestamp::now(),
            metrics: *result.metrics(),
            status: result.status(),
            triggered_rules: result.triggered_rules().to_vec(),
            rationale: result.rationale().to_vec(),
            image_path: None,
            context: context.filter(|c| !c.is_empty()),
        }
    }

    pub fn with_image_path(mut self, path: impl Into<String>) -> Self {
        self.image_path = Some(path.into());
        self
    }

    pub fn to_json_line(&self) -> Result<String, CoreError> {
        let mut line = serde_json::to_string(self)?;
        line.push('\n');
        Ok(line)
    }

    pub fn from_json_line(line: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(line.trim_end())?)
    }
}
