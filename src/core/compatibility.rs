use crate::core::zodiac;
use crate::domain::model::CompatibilityResult;
use chrono::{DateTime, Datelike, Utc};

/// 100 年 (365.25 天制) 的毫秒數，差距達此值時相容度為 0
pub const MAX_DIFF_MILLIS: f64 = 100.0 * 365.25 * 24.0 * 60.0 * 60.0 * 1000.0;

/// Percentage in `[0, 100]` that falls linearly with the distance between two instants.
pub fn compatibility_percentage(one: DateTime<Utc>, two: DateTime<Utc>) -> f64 {
    let diff_ms = (one.timestamp_millis() - two.timestamp_millis()).abs() as f64;
    let percentage = (1.0 - diff_ms / MAX_DIFF_MILLIS) * 100.0;
    percentage.clamp(0.0, 100.0)
}

pub struct CompatibilityCalculator;

impl CompatibilityCalculator {
    pub fn calculate(one: DateTime<Utc>, two: DateTime<Utc>) -> CompatibilityResult {
        let compatibility = compatibility_percentage(one, two);
        tracing::debug!(%one, %two, compatibility, "calculated compatibility");

        CompatibilityResult {
            compatibility,
            sign_one: zodiac::sign_name(one.month(), one.day()).to_string(),
            sign_two: zodiac::sign_name(two.month(), two.day()).to_string(),
        }
    }
}
