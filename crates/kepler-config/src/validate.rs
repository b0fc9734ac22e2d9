//! Input-boundary validation for the two user-adjustable parameters.

use std::ops::RangeInclusive;

use kepler_math::Eccentricity;

use crate::error::ConfigError;

/// Eccentricity input granularity.
pub const ECCENTRICITY_STEP: f64 = 0.05;

/// Allowed sector interval lengths, in days.
pub const INTERVAL_RANGE: RangeInclusive<u32> = 10..=60;

/// Snap `value` to the nearest multiple of [`ECCENTRICITY_STEP`] and validate it.
///
/// # Errors
///
/// Returns [`ConfigError::Orbit`] if the snapped value falls outside the
/// range the solver accepts.
pub fn snap_eccentricity(value: f64) -> Result<Eccentricity, ConfigError> {
    let steps = (1.0 / ECCENTRICITY_STEP).round();
    let snapped = (value * steps).round() / steps;
    Ok(Eccentricity::new(snapped)?)
}

/// Check that `days` lies in [`INTERVAL_RANGE`].
///
/// # Errors
///
/// Returns [`ConfigError::Invalid`] otherwise.
pub fn validate_interval(days: u32) -> Result<u32, ConfigError> {
    if INTERVAL_RANGE.contains(&days) {
        Ok(days)
    } else {
        Err(ConfigError::Invalid {
            field: "interval_days",
            reason: format!(
                "{days} outside [{}, {}]",
                INTERVAL_RANGE.start(),
                INTERVAL_RANGE.end()
            ),
        })
    }
}
