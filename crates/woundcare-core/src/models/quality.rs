use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Capture-quality indicators derived from brightness and blur.
///
/// These never block classification. They cap the outcome at Monitor or
/// worse and surface in the rationale as a retake recommendation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QualityFlags {
    pub is_blurry: bool,
    pub is_underexposed: bool,
    pub is_overexposed: bool,
}

impl QualityFlags {
    pub fn is_unreliable(&self) -> bool {
        self.is_blurry || self.is_underexposed || self.is_overexposed
    }

    /// Short labels for every raised flag, in a fixed order.
    pub fn issues(&self) -> Vec<&'static str> {
        let mut issues = Vec::new();
        if self.is_blurry {
            issues.push("blurry");
        }
        if self.is_underexposed {
            issues.push("underexposed");
        }
        if self.is_overexposed {
            issues.push("overexposed");
        }
        issues
    }
}
