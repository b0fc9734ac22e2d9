//! Orbit parameter errors.

/// Errors raised when orbit inputs fall outside the range the solver handles.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OrbitError {
    /// Eccentricity outside `[0, MAX_ECCENTRICITY]`.
    #[error("eccentricity {value} outside [0, {max}]")]
    EccentricityOutOfRange { value: f64, max: f64 },

    /// A time or parameter value was NaN or infinite.
    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    /// Sector interval length must be strictly positive.
    #[error("sector interval must be positive, got {0}")]
    InvalidInterval(f64),
}
