use woundcare_core::config::TrendThresholds;
use woundcare_core::models::metrics::MetricSet;
use woundcare_core::models::trend::{MetricTrend, TrendRecord, TrendTag};

/// Compare the current metrics with the previous record for the subject.
///
/// Returns `None` when there is no previous record. For every health metric
/// an increase is worsening and a decrease is improving; a change within the
/// threshold (including exactly at it) is stable.
pub fn analyze(
    current: &MetricSet,
    previous: Option<&MetricSet>,
    thresholds: &TrendThresholds,
) -> Option<TrendRecord> {
    let previous = previous?;

    let area_delta = current.area_pct - previous.area_pct;
    let area_change_pct = relative_change(area_delta, previous.area_pct, thresholds.area_min_points);
    let area_meaningful = area_delta.abs() > thresholds.area_pct
        || (area_change_pct.abs() > thresholds.area_relative_pct
            && area_delta.abs() > thresholds.area_min_points);

    Some(TrendRecord {
        area_pct: MetricTrend {
            delta: area_delta,
            tag: direction(area_delta, area_meaningful),
        },
        redness_score: score_trend(
            current.redness_score - previous.redness_score,
            thresholds.redness_score,
        ),
        exudate_ratio: score_trend(
            current.exudate_ratio - previous.exudate_ratio,
            thresholds.exudate_ratio,
        ),
        area_change_pct,
        brightness_delta: current.brightness_score - previous.brightness_score,
        blur_delta: current.blur_score - previous.blur_score,
    })
}

fn score_trend(delta: f64, threshold: f64) -> MetricTrend {
    MetricTrend {
        delta,
        tag: direction(delta, delta.abs() > threshold),
    }
}

fn direction(delta: f64, meaningful: bool) -> TrendTag {
    match (meaningful, delta > 0.0) {
        (false, _) => TrendTag::Stable,
        (true, true) => TrendTag::Worsening,
        (true, false) => TrendTag::Improving,
    }
}

/// Percent change against the previous value, floored so a near-zero
/// previous area cannot blow the ratio up.
fn relative_change(delta: f64, previous: f64, floor: f64) -> f64 {
    let base = previous.max(floor).max(f64::EPSILON);
    delta / base * 100.0
}
