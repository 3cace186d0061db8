//! Range-bucketed numeric masking (ages, salaries)

use serde::{Deserialize, Serialize};

/// Bucket width and the domain the emitted range is clamped to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketSpec {
    pub size: i64,
    pub min: i64,
    pub max: i64,
}

/// Decades, 18 to 100
pub const AGE_BUCKET: BucketSpec = BucketSpec {
    size: 10,
    min: 18,
    max: 100,
};

/// Thousands, 2000 to 15000
pub const SALARY_BUCKET: BucketSpec = BucketSpec {
    size: 1000,
    min: 2000,
    max: 15000,
};

/// Inclusive `(low, high)` bucket containing `value`
///
/// `low` is `value` rounded down to a multiple of the bucket size and
/// `high = low + size - 1`. A bucket that sticks out of the domain is slid
/// back inside it, so for values within `[min, max]` the width is always
/// `size - 1` and the value stays inside the range.
pub fn bucket_range(value: i64, spec: &BucketSpec) -> (i64, i64) {
    let span = spec.size - 1;

    let mut low = value - value.rem_euclid(spec.size);
    let mut high = low + span;

    if low < spec.min {
        low = spec.min;
        high = low + span;
    }
    if high > spec.max {
        high = spec.max;
        low = (high - span).max(spec.min);
    }

    (low, high)
}

/// Render a bucket as `"low-high"`
pub fn format_range((low, high): (i64, i64)) -> String {
    format!("{low}-{high}")
}
