use woundcare_core::config::QualityConfig;
use woundcare_core::models::metrics::MetricSet;
use woundcare_core::models::quality::QualityFlags;

/// Flag capture problems from the frame-level metrics.
pub fn derive_quality(metrics: &MetricSet, config: &QualityConfig) -> QualityFlags {
    QualityFlags {
        is_blurry: metrics.blur_score < config.blur_floor,
        is_underexposed: metrics.brightness_score < config.brightness_band.min,
        is_overexposed: metrics.brightness_score > config.brightness_band.max,
    }
}
