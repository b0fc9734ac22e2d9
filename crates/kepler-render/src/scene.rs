//! The orbit plot as a list of drawable shapes.

use glam::DVec2;
use kepler_math::{Orbit, Sector};

use crate::canvas::Canvas;
use crate::color::Color;
use crate::viewport::Viewport;

/// Sector fill opacity.
pub const SECTOR_ALPHA: f32 = 0.6;
/// Sun marker diameter in pixels.
pub const SUN_SIZE: f64 = 20.0;
/// Planet marker diameter in pixels.
pub const PLANET_SIZE: f64 = 12.0;

/// A filled sector polygon in orbit-plane coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct SectorShape {
    pub points: Vec<DVec2>,
    pub fill: Color,
}

/// A round point marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub position: DVec2,
    /// Diameter in pixels.
    pub size: f64,
    pub color: Color,
}

/// Everything drawn for one frame, in paint order.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub orbit: Vec<DVec2>,
    pub sectors: Vec<SectorShape>,
    pub sun: Marker,
    pub planet: Marker,
}

impl Scene {
    /// Assemble the frame for clock value `t` with precomputed `sectors`.
    pub fn build(orbit: &Orbit, t: f64, sectors: &[Sector], orbit_samples: usize) -> Self {
        Self {
            orbit: orbit.trace(orbit_samples),
            sectors: sectors
                .iter()
                .map(|s| SectorShape {
                    points: s.points.clone(),
                    fill: Color::sector(s.index),
                })
                .collect(),
            sun: Marker {
                position: orbit.focus(),
                size: SUN_SIZE,
                color: Color::YELLOW,
            },
            planet: Marker {
                position: orbit.position_at(t).position,
                size: PLANET_SIZE,
                color: Color::PLANET,
            },
        }
    }

    /// Rasterize onto a fresh black canvas sized to `viewport`.
    pub fn render(&self, viewport: &Viewport) -> Canvas {
        let mut canvas = Canvas::new(viewport.width, viewport.height, Color::BLACK);
        let to_px = |pts: &[DVec2]| -> Vec<DVec2> { pts.iter().map(|&p| viewport.to_pixel(p)).collect() };

        canvas.stroke_polyline(&to_px(&self.orbit), Color::ORBIT, 1.0);
        for sector in &self.sectors {
            let px = to_px(&sector.points);
            canvas.fill_polygon(&px, sector.fill, SECTOR_ALPHA);
            canvas.stroke_polygon(&px, Color::BLACK, 1.0);
        }
        for marker in [self.sun, self.planet] {
            canvas.fill_circle(viewport.to_pixel(marker.position), marker.size / 2.0, marker.color);
        }
        canvas
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kepler_math::{Eccentricity, ORBITAL_PERIOD};

    fn orbit(e: f64) -> Orbit {
        Orbit::new(Eccentricity::new(e).unwrap())
    }

    #[test]
    fn test_build_colors_alternate() {
        let o = orbit(0.5);
        let sectors = o.sectors(100.0, 30.0).unwrap();
        let scene = Scene::build(&o, 100.0, &sectors, 200);
        assert_eq!(scene.sectors.len(), 3);
        assert_eq!(scene.sectors[0].fill, Color::SECTOR_EVEN);
        assert_eq!(scene.sectors[1].fill, Color::SECTOR_ODD);
        assert_eq!(scene.sectors[2].fill, Color::SECTOR_EVEN);
        assert_eq!(scene.orbit.len(), 200);
        assert_eq!(scene.sun.position, DVec2::new(-0.5, 0.0));
    }

    #[test]
    fn test_render_draws_markers() {
        let o = orbit(0.5);
        let scene = Scene::build(&o, 0.0, &[], 200);
        let vp = Viewport::orbit_plot(700, 600);
        let canvas = scene.render(&vp);

        let sun = vp.to_pixel(o.focus());
        assert_eq!(canvas.get(sun.x as u32, sun.y as u32), Some(Color::YELLOW));

        let planet = vp.to_pixel(DVec2::new(0.5, 0.0));
        assert_eq!(canvas.get(planet.x as u32, planet.y as u32), Some(Color::PLANET));

        assert_eq!(canvas.get(5, 5), Some(Color::BLACK));
    }

    #[test]
    fn test_render_fills_sector_translucently() {
        let o = orbit(0.0);
        let sectors = o.sectors(ORBITAL_PERIOD / 4.0 + 1.0, ORBITAL_PERIOD / 4.0).unwrap();
        assert_eq!(sectors.len(), 1);
        // Planet parked at apoapsis so its marker stays clear of the sample.
        let scene = Scene::build(&o, ORBITAL_PERIOD / 2.0, &sectors, 200);
        let vp = Viewport::orbit_plot(700, 600);
        let canvas = scene.render(&vp);

        let inside = vp.to_pixel(DVec2::new(0.4, 0.4));
        let expected = Color::SECTOR_EVEN.over(Color::BLACK, SECTOR_ALPHA);
        assert_eq!(canvas.get(inside.x as u32, inside.y as u32), Some(expected));

        let outside = vp.to_pixel(DVec2::new(-0.4, -0.4));
        assert_eq!(canvas.get(outside.x as u32, outside.y as u32), Some(Color::BLACK));
    }
}
