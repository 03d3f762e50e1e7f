//! Illustrative forgetting curve for charting.
//!
//! Constants only; nothing here feeds back into plan construction.

use serde::Serialize;

pub const CURVE_DAYS: u32 = 30;

/// Memory strength (days) of the unreviewed decay `100 * e^(-t/S)`.
const DECAY_STRENGTH_DAYS: f64 = 7.0;
const RETENTION_FLOOR_WITHOUT_REVIEW: f64 = 5.0;

const RETENTION_WITH_REVIEW: f64 = 95.0;
const RETENTION_FLOOR_WITH_REVIEW: f64 = 60.0;

/// Days highlighted on the chart: the golden intervals plus the horizon.
pub const REVIEW_CHECKPOINT_DAYS: [u32; 6] = [1, 2, 4, 7, 15, 30];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurvePoint {
    pub day: u32,
    pub retention_without_review: f64,
    pub retention_with_review: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurveSeries {
    pub points: Vec<CurvePoint>,
    pub checkpoints: Vec<CurvePoint>,
}

impl CurveSeries {
    pub fn standard() -> Self {
        let points = forgetting_curve();
        let checkpoints = review_checkpoints(&points);
        Self { points, checkpoints }
    }
}

pub fn retention_without_review(day: u32) -> f64 {
    let raw = 100.0 * (-(f64::from(day)) / DECAY_STRENGTH_DAYS).exp();
    raw.max(RETENTION_FLOOR_WITHOUT_REVIEW)
}

/// Flat 95% after day 0; reviews are assumed to happen on schedule.
pub fn retention_with_review(day: u32) -> f64 {
    if day == 0 {
        return 100.0;
    }
    RETENTION_WITH_REVIEW.max(RETENTION_FLOOR_WITH_REVIEW)
}

/// Points for day 0 through [`CURVE_DAYS`] inclusive.
pub fn forgetting_curve() -> Vec<CurvePoint> {
    (0..=CURVE_DAYS)
        .map(|day| CurvePoint {
            day,
            retention_without_review: retention_without_review(day),
            retention_with_review: retention_with_review(day),
        })
        .collect()
}

pub fn review_checkpoints(points: &[CurvePoint]) -> Vec<CurvePoint> {
    REVIEW_CHECKPOINT_DAYS
        .iter()
        .filter_map(|&day| points.iter().find(|p| p.day == day).copied())
        .collect()
}
