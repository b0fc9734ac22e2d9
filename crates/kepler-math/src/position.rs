//! Planet position on the ellipse as a function of elapsed time.

use glam::DVec2;

use crate::orbit::Orbit;
use crate::solver::solve_kepler;

/// Planet position and the eccentric anomaly it was derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitPosition {
    /// Focus-centered Cartesian position.
    pub position: DVec2,
    /// Eccentric anomaly `E` in radians.
    pub eccentric_anomaly: f64,
}

impl Orbit {
    /// Position at elapsed time `t`.
    ///
    /// `x = a(cos E - e)`, `y = a·√(1-e²)·sin E`, with `E` from
    /// [`solve_kepler`]. Periapsis lies on the positive x axis at `t = 0`.
    pub fn position_at(&self, t: f64) -> OrbitPosition {
        let e = self.eccentricity.value();
        let e_anom = solve_kepler(self.mean_anomaly(t), self.eccentricity);
        let x = self.semi_major_axis * (e_anom.cos() - e);
        let y = self.semi_minor_axis() * e_anom.sin();
        OrbitPosition {
            position: DVec2::new(x, y),
            eccentric_anomaly: e_anom,
        }
    }

    /// `samples` positions evenly spaced in time over one full period,
    /// both ends included. Used to draw the orbit curve.
    pub fn trace(&self, samples: usize) -> Vec<DVec2> {
        linspace(0.0, self.period, samples)
            .map(|t| self.position_at(t).position)
            .collect()
    }
}

/// `n` evenly spaced values from `start` to `end` inclusive. The last value
/// is exactly `end`.
pub(crate) fn linspace(start: f64, end: f64, n: usize) -> impl Iterator<Item = f64> {
    let step = if n > 1 {
        (end - start) / (n - 1) as f64
    } else {
        0.0
    };
    (0..n).map(move |i| {
        if n > 1 && i == n - 1 {
            end
        } else {
            start + step * i as f64
        }
    })
}
