//! Reduction of raw totals into the canonical four-component decomposition
//!
//! Wrapping here is deliberate and never an error: a total of 25 hours yields
//! hour 1. Explicit component assignment does not pass through this module.

use crate::component::{TimeComponent, MAX_MILLISECOND_LIMIT, TIME_COMPONENTS};
use crate::error::TimeError;
use crate::record::TimeRecord;

/// Reduce a raw value modulo the component's period.
///
/// Negative values wrap backwards (`normalize(Hour, -1) == 23`).
pub fn normalize(component: TimeComponent, raw: i64) -> u32 {
    // rem_euclid with a period <= 1000 always fits in u32
    raw.rem_euclid(component.period()) as u32
}

/// Split an absolute millisecond count into hour, minute, second and millisecond.
///
/// # Examples
///
/// ```
/// use clockface::{decompose_total_milliseconds, TimeRecord};
///
/// assert_eq!(
///     decompose_total_milliseconds(48_252_024),
///     TimeRecord::new(13, 24, 12, 24)
/// );
/// // 25 hours wraps to 01:00
/// assert_eq!(decompose_total_milliseconds(25 * 3_600_000).hour, 1);
/// ```
pub fn decompose_total_milliseconds(total: i64) -> TimeRecord {
    decompose_from_unit(total, TimeComponent::Millisecond)
}

/// Decompose a millisecond count, filling only `unit` and the components above it.
///
/// Components below `unit` stay at zero; the input is still counted in
/// milliseconds. `decompose_from_unit(x, Second)` therefore drops the
/// millisecond part of `x`.
pub fn decompose_from_unit(total: i64, unit: TimeComponent) -> TimeRecord {
    let mut record = TimeRecord::default();
    for component in TIME_COMPONENTS {
        record.set(
            component,
            normalize(component, total.div_euclid(component.millis_per_unit())),
        );
        if component == unit {
            break;
        }
    }
    record
}

/// Truncate a numeric total toward zero and reduce it to within one day.
///
/// # Errors
///
/// Returns `TimeError::InvalidTime` for NaN or infinite input.
pub fn truncate_total(total: f64) -> Result<i64, TimeError> {
    if !total.is_finite() {
        return Err(TimeError::invalid_time("non-finite number"));
    }
    // fmod is exact, so the reduced value is representable as i64
    Ok((total.trunc() % MAX_MILLISECOND_LIMIT as f64) as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_wraps_each_component() {
        assert_eq!(normalize(TimeComponent::Hour, 24), 0);
        assert_eq!(normalize(TimeComponent::Hour, 25), 1);
        assert_eq!(normalize(TimeComponent::Minute, 61), 1);
        assert_eq!(normalize(TimeComponent::Second, 59), 59);
        assert_eq!(normalize(TimeComponent::Millisecond, 1500), 500);
    }

    #[test]
    fn test_normalize_negative_wraps_backwards() {
        assert_eq!(normalize(TimeComponent::Hour, -1), 23);
        assert_eq!(normalize(TimeComponent::Millisecond, -1), 999);
    }

    #[test]
    fn test_decompose_total_milliseconds() {
        let total = 10 * 3_600_000 + 20 * 60_000 + 30 * 1000 + 500;
        assert_eq!(
            decompose_total_milliseconds(total),
            TimeRecord::new(10, 20, 30, 500)
        );
    }

    #[test]
    fn test_decompose_wraps_past_one_day() {
        assert_eq!(
            decompose_total_milliseconds(MAX_MILLISECOND_LIMIT + 61_001),
            TimeRecord::new(0, 1, 1, 1)
        );
    }

    #[test]
    fn test_decompose_negative_total() {
        assert_eq!(
            decompose_total_milliseconds(-1),
            TimeRecord::new(23, 59, 59, 999)
        );
    }

    #[test]
    fn test_decompose_from_unit_leaves_lower_components_zero() {
        let total = 13 * 3_600_000 + 24 * 60_000 + 12 * 1000 + 24;
        assert_eq!(
            decompose_from_unit(total, TimeComponent::Second),
            TimeRecord::new(13, 24, 12, 0)
        );
        assert_eq!(
            decompose_from_unit(total, TimeComponent::Minute),
            TimeRecord::new(13, 24, 0, 0)
        );
        assert_eq!(
            decompose_from_unit(total, TimeComponent::Hour),
            TimeRecord::new(13, 0, 0, 0)
        );
    }

    #[test]
    fn test_truncate_total_toward_zero() {
        assert_eq!(truncate_total(1500.7).unwrap(), 1500);
        assert_eq!(truncate_total(-1500.7).unwrap(), -1500);
        assert_eq!(truncate_total(0.9).unwrap(), 0);
    }

    #[test]
    fn test_truncate_total_reduces_huge_values() {
        let reduced = truncate_total(1e20).unwrap();
        assert!(reduced.abs() < MAX_MILLISECOND_LIMIT);
    }

    #[test]
    fn test_truncate_total_rejects_non_finite() {
        assert!(matches!(
            truncate_total(f64::NAN),
            Err(TimeError::InvalidTime { .. })
        ));
        assert!(truncate_total(f64::INFINITY).is_err());
    }
}
