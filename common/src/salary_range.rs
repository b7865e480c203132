//! Salary slider rules: per-handle clamping, display formatting and fill.

use crate::filter_dimension::RangeBounds;

pub const SALARY_BOUNDS_MIN: i64 = 0;
pub const SALARY_BOUNDS_MAX: i64 = 150_000;
pub const SALARY_STEP: i64 = 5_000;

pub const SALARY_BOUNDS: RangeBounds = RangeBounds::new(SALARY_BOUNDS_MIN, SALARY_BOUNDS_MAX, SALARY_STEP);

/// New min endpoint after the min handle moved to `raw`.
///
/// The incoming endpoint is clamped; the max endpoint is never pushed.
pub fn clamp_min_handle(raw: i64, current_max: i64, bounds: RangeBounds) -> i64 {
    raw.min(current_max.saturating_sub(bounds.step)).max(bounds.min)
}

/// New max endpoint after the max handle moved to `raw`.
pub fn clamp_max_handle(raw: i64, current_min: i64, bounds: RangeBounds) -> i64 {
    raw.max(current_min.saturating_add(bounds.step)).min(bounds.max)
}

/// Rupee label used next to the slider handles: `₹1.5L`, `₹50K`.
///
/// Lakh values round half up to one decimal, so `125000` reads `₹1.3L`.
pub fn format_salary(value: i64) -> String {
    if value >= 100_000 {
        let tenths = value.saturating_add(5_000) / 10_000;
        format!("₹{}.{}L", tenths / 10, tenths % 10)
    } else {
        format!("₹{}K", (value as f64 / 1_000.0).round() as i64)
    }
}

/// Position of `value` along the track, in percent.
pub fn fill_percent(value: i64, bounds: RangeBounds) -> f64 {
    let span = (bounds.max - bounds.min) as f64;
    if span <= 0.0 {
        return 0.0;
    }
    (value - bounds.min) as f64 / span * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_lakh_and_thousand() {
        assert_eq!(format_salary(150_000), "₹1.5L");
        assert_eq!(format_salary(100_000), "₹1.0L");
        assert_eq!(format_salary(50_000), "₹50K");
        assert_eq!(format_salary(0), "₹0K");
        assert_eq!(format_salary(95_000), "₹95K");
    }

    #[test]
    fn lakh_ties_round_up() {
        assert_eq!(format_salary(125_000), "₹1.3L");
        assert_eq!(format_salary(145_000), "₹1.5L");
        assert_eq!(format_salary(105_000), "₹1.1L");
        assert_eq!(format_salary(149_999), "₹1.5L");
    }

    #[test]
    fn clamps_do_not_overflow_on_extreme_endpoints() {
        assert_eq!(clamp_min_handle(80_000, i64::MIN, SALARY_BOUNDS), 0);
        assert_eq!(clamp_max_handle(20_000, i64::MAX, SALARY_BOUNDS), 150_000);
    }

    #[test]
    fn min_handle_stops_one_step_below_max() {
        assert_eq!(clamp_min_handle(80_000, 150_000, SALARY_BOUNDS), 80_000);
        assert_eq!(clamp_min_handle(150_000, 150_000, SALARY_BOUNDS), 145_000);
        assert_eq!(clamp_min_handle(-10_000, 150_000, SALARY_BOUNDS), 0);
    }

    #[test]
    fn max_handle_stops_one_step_above_min() {
        assert_eq!(clamp_max_handle(20_000, 40_000, SALARY_BOUNDS), 45_000);
        assert_eq!(clamp_max_handle(200_000, 0, SALARY_BOUNDS), 150_000);
    }

    #[test]
    fn invariant_holds_under_alternating_moves() {
        let (mut min, mut max) = (SALARY_BOUNDS_MIN, SALARY_BOUNDS_MAX);
        // deterministic pseudo-random walk over both handles
        let mut seed: u64 = 0x9E37_79B9_7F4A_7C15;
        for i in 0..5_000 {
            seed ^= seed << 13;
            seed ^= seed >> 7;
            seed ^= seed << 17;
            let raw = (seed % 200_001) as i64 - 25_000;
            if i % 2 == 0 {
                min = clamp_min_handle(raw, max, SALARY_BOUNDS);
            } else {
                max = clamp_max_handle(raw, min, SALARY_BOUNDS);
            }
            assert!(min <= max - SALARY_STEP, "min {min} max {max}");
            assert!(max >= min + SALARY_STEP, "min {min} max {max}");
            assert!(min >= SALARY_BOUNDS_MIN && max <= SALARY_BOUNDS_MAX);
        }
    }

    #[test]
    fn fill_is_linear_in_bounds() {
        assert_eq!(fill_percent(0, SALARY_BOUNDS), 0.0);
        assert_eq!(fill_percent(75_000, SALARY_BOUNDS), 50.0);
        assert_eq!(fill_percent(150_000, SALARY_BOUNDS), 100.0);
    }
}
