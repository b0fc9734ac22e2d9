//! Swept-area sectors: the regions traced between consecutive equal time
//! intervals, and their analytic areas.

use glam::DVec2;

use crate::error::OrbitError;
use crate::orbit::{Eccentricity, Orbit};
use crate::position::linspace;

/// Arc samples per sector, both interval endpoints included.
pub const ARC_SAMPLES: usize = 20;

/// Closed polygon swept between `t_start` and `t_end`.
#[derive(Debug, Clone, PartialEq)]
pub struct Sector {
    /// Zero-based position in the sweep sequence.
    pub index: usize,
    pub t_start: f64,
    pub t_end: f64,
    /// `points[0]` is [`Orbit::focus`], followed by [`ARC_SAMPLES`] arc points.
    pub points: Vec<DVec2>,
}

impl Sector {
    /// The sampled arc, without the focus point.
    pub fn arc(&self) -> &[DVec2] {
        self.points.get(1..).unwrap_or(&[])
    }

    /// Analytic swept area of this sector on `orbit`.
    pub fn area(&self, orbit: &Orbit) -> f64 {
        orbit.swept_area(self.t_start, self.t_end)
    }
}

impl Orbit {
    /// Sectors for every full interval of length `dt` inside `[0, t_actual]`.
    ///
    /// Intervals start at `0, dt, 2·dt, …`; the first one ending past
    /// `t_actual` stops the sweep, so a trailing partial interval is never
    /// emitted. `t_actual < dt` yields no sectors.
    ///
    /// # Errors
    ///
    /// Returns [`OrbitError::InvalidInterval`] when `dt` is not positive and
    /// [`OrbitError::NonFinite`] for NaN or infinite inputs.
    pub fn sectors(&self, t_actual: f64, dt: f64) -> Result<Vec<Sector>, OrbitError> {
        if !t_actual.is_finite() {
            return Err(OrbitError::NonFinite {
                name: "t_actual",
                value: t_actual,
            });
        }
        if !dt.is_finite() {
            return Err(OrbitError::NonFinite {
                name: "dt",
                value: dt,
            });
        }
        if dt <= 0.0 {
            return Err(OrbitError::InvalidInterval(dt));
        }

        let focus = self.focus();
        let mut sectors = Vec::new();
        for index in 0.. {
            let t_start = index as f64 * dt;
            if t_start >= t_actual {
                break;
            }
            let t_end = t_start + dt;
            if t_end > t_actual {
                break;
            }

            let mut points = Vec::with_capacity(ARC_SAMPLES + 1);
            points.push(focus);
            points.extend(linspace(t_start, t_end, ARC_SAMPLES).map(|t| self.position_at(t).position));

            sectors.push(Sector {
                index,
                t_start,
                t_end,
                points,
            });
        }
        Ok(sectors)
    }

    /// Area swept by the focus-to-planet radius between `t_start` and `t_end`:
    /// `(a·b/2)·((E₂-E₁) - e(sin E₂ - sin E₁))`.
    ///
    /// The solver's `E` is monotonic in `t` across revolutions, so intervals
    /// spanning periapsis still measure a positive area.
    pub fn swept_area(&self, t_start: f64, t_end: f64) -> f64 {
        let e = self.eccentricity.value();
        let e1 = self.position_at(t_start).eccentric_anomaly;
        let e2 = self.position_at(t_end).eccentric_anomaly;
        0.5 * self.semi_major_axis
            * self.semi_minor_axis()
            * ((e2 - e1) - e * (e2.sin() - e1.sin()))
    }
}

/// Sectors for eccentricity `e` and interval `dt` up to `t_actual`.
///
/// Convenience over [`Orbit::sectors`] for the demonstration orbit.
pub fn generate_sectors(t_actual: f64, e: f64, dt: f64) -> Result<Vec<Sector>, OrbitError> {
    Orbit::new(Eccentricity::new(e)?).sectors(t_actual, dt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orbit::ORBITAL_PERIOD;
    use std::f64::consts::PI;

    #[test]
    fn test_no_sectors_at_time_zero() {
        assert!(generate_sectors(0.0, 0.5, 30.0).unwrap().is_empty());
    }

    #[test]
    fn test_no_sectors_before_first_interval_completes() {
        assert!(generate_sectors(29.9, 0.5, 30.0).unwrap().is_empty());
    }

    #[test]
    fn test_one_sector_after_first_interval() {
        let sectors = generate_sectors(35.0, 0.5, 30.0).unwrap();
        assert_eq!(sectors.len(), 1);
        assert_eq!(sectors[0].index, 0);
        assert_eq!(sectors[0].t_start, 0.0);
        assert_eq!(sectors[0].t_end, 30.0);
    }

    #[test]
    fn test_exact_boundary_includes_interval() {
        assert_eq!(generate_sectors(30.0, 0.5, 30.0).unwrap().len(), 1);
        assert_eq!(generate_sectors(60.0, 0.5, 30.0).unwrap().len(), 2);
    }

    #[test]
    fn test_full_period_sector_count() {
        // 365.25 / 30 = 12.175 -> 12 complete intervals.
        let sectors = generate_sectors(ORBITAL_PERIOD, 0.3, 30.0).unwrap();
        assert_eq!(sectors.len(), 12);
        for (i, s) in sectors.iter().enumerate() {
            assert_eq!(s.index, i);
            assert!((s.t_start - 30.0 * i as f64).abs() < 1e-12);
        }
    }

    #[test]
    fn test_polygon_starts_at_focus_and_samples_arc() {
        let orbit = Orbit::new(Eccentricity::new(0.5).unwrap());
        let sectors = orbit.sectors(70.0, 30.0).unwrap();
        for s in &sectors {
            assert_eq!(s.points.len(), ARC_SAMPLES + 1);
            assert_eq!(s.points[0], DVec2::new(-0.5, 0.0));
            assert_eq!(s.arc().len(), ARC_SAMPLES);
            assert_eq!(s.arc()[0], orbit.position_at(s.t_start).position);
            assert_eq!(s.arc()[ARC_SAMPLES - 1], orbit.position_at(s.t_end).position);
        }
    }

    #[test]
    fn test_rejects_bad_interval() {
        assert_eq!(
            generate_sectors(100.0, 0.5, 0.0),
            Err(OrbitError::InvalidInterval(0.0))
        );
        assert!(generate_sectors(100.0, 0.5, -5.0).is_err());
        assert!(generate_sectors(f64::NAN, 0.5, 30.0).is_err());
        assert!(generate_sectors(100.0, 0.5, f64::INFINITY).is_err());
        assert!(generate_sectors(100.0, 0.95, 30.0).is_err());
    }

    #[test]
    fn test_arc_of_empty_sector() {
        let sector = Sector {
            index: 0,
            t_start: 0.0,
            t_end: 30.0,
            points: Vec::new(),
        };
        assert!(sector.arc().is_empty());
    }

    #[test]
    fn test_negative_time_yields_nothing() {
        assert!(generate_sectors(-10.0, 0.5, 30.0).unwrap().is_empty());
    }

    #[test]
    fn test_equal_intervals_sweep_equal_areas() {
        for e in [0.0, 0.25, 0.5, 0.9] {
            let orbit = Orbit::new(Eccentricity::new(e).unwrap());
            let expected = PI * orbit.semi_major_axis * orbit.semi_minor_axis() * 30.0
                / orbit.period;
            for s in orbit.sectors(ORBITAL_PERIOD, 30.0).unwrap() {
                let area = s.area(&orbit);
                assert!(
                    (area - expected).abs() < 1e-6,
                    "e={e}, sector {}: {area} vs {expected}",
                    s.index
                );
            }
        }
    }

    #[test]
    fn test_full_period_sweeps_whole_ellipse() {
        let orbit = Orbit::new(Eccentricity::new(0.6).unwrap());
        let area = orbit.swept_area(0.0, ORBITAL_PERIOD);
        assert!((area - PI * 1.0 * 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_area_across_periapsis_is_positive() {
        let orbit = Orbit::new(Eccentricity::new(0.7).unwrap());
        let area = orbit.swept_area(ORBITAL_PERIOD - 10.0, ORBITAL_PERIOD + 10.0);
        let expected = PI * orbit.semi_minor_axis() * 20.0 / ORBITAL_PERIOD;
        assert!((area - expected).abs() < 1e-6);
    }
}
