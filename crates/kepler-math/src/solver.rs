//! Kepler's equation `E - e·sin(E) = M`, solved by Newton-Raphson.

use crate::orbit::Eccentricity;

/// Newton iterations per solve. Fixed; there is no convergence check.
pub const KEPLER_ITERATIONS: usize = 10;

/// Solve Kepler's equation for the eccentric anomaly `E`.
///
/// Seeds with `E = M` and runs exactly [`KEPLER_ITERATIONS`] Newton steps.
/// [`Eccentricity`] caps `e` at 0.9, where ten steps are well past
/// convergence for any mean anomaly.
pub fn solve_kepler(mean_anomaly: f64, eccentricity: Eccentricity) -> f64 {
    let e = eccentricity.value();
    let mut e_anom = mean_anomaly;
    for _ in 0..KEPLER_ITERATIONS {
        let delta = e_anom - e * e_anom.sin() - mean_anomaly;
        let derivative = 1.0 - e * e_anom.cos();
        e_anom -= delta / derivative;
    }
    e_anom
}
