use woundcare_core::config::{BrightnessBand, ConfigError, WoundcareConfig};

#[test]
fn defaults_are_valid() {
    assert_eq!(WoundcareConfig::default().validate(), Ok(()));
}

#[test]
fn partial_json_overrides_only_named_values() {
    let json = r#"{
        "classifier": { "urgent_redness_threshold": 0.7 },
        "quality": { "blur_floor": 10.0 }
    }"#;
    let config: WoundcareConfig = serde_json::from_str(json).unwrap();
    let defaults = WoundcareConfig::default();

    assert_eq!(config.classifier.urgent_redness_threshold, 0.7);
    assert_eq!(
        config.classifier.concerning_redness_threshold,
        defaults.classifier.concerning_redness_threshold
    );
    assert_eq!(config.quality.blur_floor, 10.0);
    assert_eq!(config.quality.brightness_band, defaults.quality.brightness_band);
    assert_eq!(config.trend, defaults.trend);
    assert_eq!(config.extractor, defaults.extractor);
}

#[test]
fn inverted_redness_thresholds_rejected() {
    let mut config = WoundcareConfig::default();
    config.classifier.concerning_redness_threshold = 0.6;

    let err = config.validate().unwrap_err();
    let ConfigError::Invalid { field, .. } = err;
    assert_eq!(field, "classifier.redness thresholds");
}

#[test]
fn inverted_brightness_band_rejected() {
    let mut config = WoundcareConfig::default();
    config.quality.brightness_band = BrightnessBand { min: 0.8, max: 0.2 };
    assert!(config.validate().is_err());
}

#[test]
fn negative_trend_threshold_rejected() {
    let mut config = WoundcareConfig::default();
    config.trend.redness_score = -0.01;
    assert!(config.validate().is_err());
}

#[test]
fn weak_red_dominance_rejected() {
    let mut config = WoundcareConfig::default();
    config.extractor.red_dominance = 0.9;
    assert!(config.validate().is_err());
}

#[test]
fn nan_threshold_rejected() {
    let mut config = WoundcareConfig::default();
    config.quality.blur_floor = f64::NAN;
    assert!(config.validate().is_err());
}
