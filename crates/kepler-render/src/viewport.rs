//! Mapping from orbit-plane coordinates to pixel coordinates.

use glam::DVec2;

/// A world-space window mapped onto a pixel grid with equal x/y scale.
///
/// When the pixel aspect ratio differs from the window's, the window is
/// centered and the spare axis shows extra margin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    scale: f64,
    center: DVec2,
}

impl Viewport {
    /// Window `x ∈ [-2, 1.5]`, `y ∈ [-1.5, 1.5]` used for the orbit plot.
    pub fn orbit_plot(width: u32, height: u32) -> Self {
        Self::new(width, height, DVec2::new(-2.0, -1.5), DVec2::new(1.5, 1.5))
    }

    pub fn new(width: u32, height: u32, min: DVec2, max: DVec2) -> Self {
        let span = max - min;
        let scale = (width as f64 / span.x).min(height as f64 / span.y);
        Self {
            width,
            height,
            scale,
            center: (min + max) * 0.5,
        }
    }

    /// Pixels per world unit.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Pixel position of `p`; y grows downward.
    pub fn to_pixel(&self, p: DVec2) -> DVec2 {
        let half = DVec2::new(self.width as f64, self.height as f64) * 0.5;
        let d = (p - self.center) * self.scale;
        DVec2::new(half.x + d.x, half.y - d.y)
    }
}
