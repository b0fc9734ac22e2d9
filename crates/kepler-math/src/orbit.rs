//! Orbital constants and the validated orbit description.

use glam::DVec2;

use crate::error::OrbitError;

/// Semi-major axis `a` of the demonstration orbit.
pub const SEMI_MAJOR_AXIS: f64 = 1.0;

/// Orbital period `T` in time units (days).
pub const ORBITAL_PERIOD: f64 = 365.25;

/// Largest eccentricity accepted. The fixed-iteration solver is not
/// guaranteed to converge as `e` approaches 1.
pub const MAX_ECCENTRICITY: f64 = 0.9;

/// Orbital eccentricity, validated to lie in `[0, MAX_ECCENTRICITY]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Eccentricity(f64);

impl Eccentricity {
    /// A circular orbit.
    pub const CIRCULAR: Self = Self(0.0);

    /// Validate and wrap a raw eccentricity.
    ///
    /// # Errors
    ///
    /// Returns [`OrbitError::NonFinite`] for NaN or infinite input and
    /// [`OrbitError::EccentricityOutOfRange`] outside `[0, MAX_ECCENTRICITY]`.
    pub fn new(value: f64) -> Result<Self, OrbitError> {
        if !value.is_finite() {
            return Err(OrbitError::NonFinite {
                name: "eccentricity",
                value,
            });
        }
        if !(0.0..=MAX_ECCENTRICITY).contains(&value) {
            return Err(OrbitError::EccentricityOutOfRange {
                value,
                max: MAX_ECCENTRICITY,
            });
        }
        Ok(Self(value))
    }

    /// The raw value.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Eccentricity {
    type Error = OrbitError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// A closed elliptical orbit with fixed semi-major axis and period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orbit {
    /// Semi-major axis `a`.
    pub semi_major_axis: f64,
    /// Eccentricity `e`.
    pub eccentricity: Eccentricity,
    /// Orbital period `T`.
    pub period: f64,
}

impl Orbit {
    /// Demonstration orbit with `a = 1` and `T = 365.25`.
    pub fn new(eccentricity: Eccentricity) -> Self {
        Self {
            semi_major_axis: SEMI_MAJOR_AXIS,
            eccentricity,
            period: ORBITAL_PERIOD,
        }
    }

    /// Semi-minor axis `b = a·√(1−e²)`.
    pub fn semi_minor_axis(&self) -> f64 {
        let e = self.eccentricity.value();
        self.semi_major_axis * (1.0 - e * e).sqrt()
    }

    /// Mean anomaly `M = 2π·t/T`.
    pub fn mean_anomaly(&self, t: f64) -> f64 {
        std::f64::consts::TAU * t / self.period
    }

    /// Sun marker at `(-a·e, 0)`. Sector polygons close against this point.
    ///
    /// In the frame used by [`Orbit::position_at`] this is the ellipse's
    /// geometric center; the attracting focus sits at the origin.
    pub fn focus(&self) -> DVec2 {
        DVec2::new(-self.semi_major_axis * self.eccentricity.value(), 0.0)
    }
}

impl Default for Orbit {
    fn default() -> Self {
        Self::new(Eccentricity::CIRCULAR)
    }
}
