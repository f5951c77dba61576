//! Calibration config for extraction, quality, trend and classification.
//!
//! Every threshold the pipeline compares against lives here and is passed in
//! explicitly, so deployments and tests can recalibrate without code changes.
//! Each section is `#[serde(default)]`: a partial file only overrides the
//! values it names.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Current on-disk config version. Bump this when adding fields or changing
/// shape, together with a migration in the loader.
pub const CURRENT_CONFIG_VERSION: u32 = 1;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WoundcareConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    pub config_version: u32,
    pub extractor: ExtractorConfig,
    pub quality: QualityConfig,
    pub trend: TrendThresholds,
    pub classifier: ClassifierConfig,
}

impl Default for WoundcareConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_CONFIG_VERSION,
            extractor: ExtractorConfig::default(),
            quality: QualityConfig::default(),
            trend: TrendThresholds::default(),
            classifier: ClassifierConfig::default(),
        }
    }
}

impl WoundcareConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.extractor.validate()?;
        self.quality.validate()?;
        self.trend.validate()?;
        self.classifier.validate()
    }
}

/// Segmentation and normalization constants for metric extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Longer side of the analysis frame. Larger images are downscaled;
    /// 0 disables resampling.
    pub max_dimension: u32,
    /// A wound pixel's red channel must exceed both green and blue by this
    /// factor.
    pub red_dominance: f64,
    /// Minimum red channel value (0–255) for a wound pixel.
    pub min_red: f64,
    /// Minimum mean channel intensity (0–255); darker pixels are ignored.
    pub min_intensity: f64,
    /// Disc radius for mask opening and closing. 0 disables cleaning.
    pub morph_radius: u32,
    /// Minimum luminance (0–255) for an exudate pixel.
    pub exudate_min_luma: f64,
    /// Maximum HSV saturation (0–1) for an exudate pixel.
    pub exudate_max_saturation: f64,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            max_dimension: 512,
            red_dominance: 1.4,
            min_red: 70.0,
            min_intensity: 30.0,
            morph_radius: 3,
            exudate_min_luma: 200.0,
            exudate_max_saturation: 0.25,
        }
    }
}

impl ExtractorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.red_dominance >= 1.0) {
            return Err(invalid(
                "extractor.red_dominance",
                format!("must be at least 1.0, got {}", self.red_dominance),
            ));
        }
        for (field, value) in [
            ("extractor.min_red", self.min_red),
            ("extractor.min_intensity", self.min_intensity),
            ("extractor.exudate_min_luma", self.exudate_min_luma),
        ] {
            if !(0.0..=255.0).contains(&value) {
                return Err(invalid(field, format!("must be within 0–255, got {value}")));
            }
        }
        if !(0.0..=1.0).contains(&self.exudate_max_saturation) {
            return Err(invalid(
                "extractor.exudate_max_saturation",
                format!("must be within 0–1, got {}", self.exudate_max_saturation),
            ));
        }
        Ok(())
    }
}

/// Inclusive range of acceptable `brightness_score` values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrightnessBand {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityConfig {
    /// `blur_score` below this marks the image blurry.
    pub blur_floor: f64,
    pub brightness_band: BrightnessBand,
}

impl Default for QualityConfig {
    fn default() -> Self {
        Self {
            blur_floor: 60.0,
            brightness_band: BrightnessBand {
                min: 0.12,
                max: 0.92,
            },
        }
    }
}

impl QualityConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.blur_floor >= 0.0) {
            return Err(invalid(
                "quality.blur_floor",
                format!("must be non-negative, got {}", self.blur_floor),
            ));
        }
        let band = self.brightness_band;
        if !(0.0 <= band.min && band.min < band.max && band.max <= 1.0) {
            return Err(invalid(
                "quality.brightness_band",
                format!("expected 0 <= min < max <= 1, got [{}, {}]", band.min, band.max),
            ));
        }
        Ok(())
    }
}

/// Minimum change that counts as a meaningful trend, per health metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendThresholds {
    /// Absolute change in `area_pct`, in percentage points.
    pub area_pct: f64,
    /// Relative change in `area_pct`, in percent of the previous value.
    pub area_relative_pct: f64,
    /// Smallest absolute `area_pct` change the relative rule may act on. Also
    /// floors the previous area when computing the relative change.
    pub area_min_points: f64,
    pub redness_score: f64,
    pub exudate_ratio: f64,
}

impl Default for TrendThresholds {
    fn default() -> Self {
        Self {
            area_pct: 5.0,
            area_relative_pct: 50.0,
            area_min_points: 1.0,
            redness_score: 0.05,
            exudate_ratio: 0.05,
        }
    }
}

impl TrendThresholds {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("trend.area_pct", self.area_pct),
            ("trend.area_relative_pct", self.area_relative_pct),
            ("trend.area_min_points", self.area_min_points),
            ("trend.redness_score", self.redness_score),
            ("trend.exudate_ratio", self.exudate_ratio),
        ] {
            if !(value >= 0.0 && value.is_finite()) {
                return Err(invalid(field, format!("must be finite and non-negative, got {value}")));
            }
        }
        Ok(())
    }
}

/// Cutoffs for the rule cascade. Each metric must satisfy
/// `monitor < concerning < urgent` so raising a score can never lower the
/// resulting status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    pub urgent_redness_threshold: f64,
    pub urgent_exudate_threshold: f64,
    pub concerning_redness_threshold: f64,
    pub concerning_exudate_threshold: f64,
    pub monitor_redness_threshold: f64,
    pub monitor_exudate_threshold: f64,
    /// Visible wound area (percent of frame) that warrants monitoring.
    pub monitor_area_pct: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            urgent_redness_threshold: 0.55,
            urgent_exudate_threshold: 0.30,
            concerning_redness_threshold: 0.40,
            concerning_exudate_threshold: 0.15,
            monitor_redness_threshold: 0.30,
            monitor_exudate_threshold: 0.08,
            monitor_area_pct: 25.0,
        }
    }
}

impl ClassifierConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_ordered(
            "classifier.redness thresholds",
            self.monitor_redness_threshold,
            self.concerning_redness_threshold,
            self.urgent_redness_threshold,
        )?;
        check_ordered(
            "classifier.exudate thresholds",
            self.monitor_exudate_threshold,
            self.concerning_exudate_threshold,
            self.urgent_exudate_threshold,
        )?;
        if !(0.0..=100.0).contains(&self.monitor_area_pct) {
            return Err(invalid(
                "classifier.monitor_area_pct",
                format!("must be within 0–100, got {}", self.monitor_area_pct),
            ));
        }
        Ok(())
    }
}

fn check_ordered(
    field: &'static str,
    monitor: f64,
    concerning: f64,
    urgent: f64,
) -> Result<(), ConfigError> {
    if 0.0 <= monitor && monitor < concerning && concerning < urgent && urgent <= 1.0 {
        Ok(())
    } else {
        Err(invalid(
            field,
            format!(
                "expected 0 <= monitor < concerning < urgent <= 1, got {monitor} / {concerning} / {urgent}"
            ),
        ))
    }
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::Invalid { field, reason }
}
