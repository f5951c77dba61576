use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Scalar measurements extracted from a single wound photograph.
///
/// Every field is always populated. An image with no detected wound region
/// yields zeros for the region metrics rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MetricSet {
    /// Segmented wound pixels in the analysis frame.
    pub area_px: u64,
    /// Wound area as a percentage of the analysis frame (0–100).
    pub area_pct: f64,
    /// Red-channel dominance inside the wound region (0–1).
    pub redness_score: f64,
    /// Fraction of the wound region that looks like exudate or slough (0–1).
    pub exudate_ratio: f64,
    /// Mean luminance of the whole frame (0–1).
    pub brightness_score: f64,
    /// Laplacian variance of the luminance channel. Higher is sharper.
    pub blur_score: f64,
}

impl MetricSet {
    pub fn zeroed() -> Self {
        Self {
            area_px: 0,
            area_pct: 0.0,
            redness_score: 0.0,
            exudate_ratio: 0.0,
            brightness_score: 0.0,
            blur_score: 0.0,
        }
    }
}

/// The metrics that carry a health trend. Brightness and blur only affect
/// capture quality and are never tagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum HealthMetric {
    Area,
    Redness,
    Exudate,
}

impl HealthMetric {
    pub const ALL: [HealthMetric; 3] = [Self::Area, Self::Redness, Self::Exudate];

    pub fn label(self) -> &'static str {
        match self {
            Self::Area => "area",
            Self::Redness => "redness",
            Self::Exudate => "exudate",
        }
    }
}
