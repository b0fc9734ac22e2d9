//! RGBA pixel buffer with the few primitives the plot needs.

use glam::DVec2;

use crate::color::Color;

/// An RGBA8 frame buffer, rows top to bottom.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Canvas {
    /// A canvas filled with `background`.
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        let mut canvas = Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 4],
        };
        canvas.clear(background);
        canvas
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn clear(&mut self, color: Color) {
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&[color.r, color.g, color.b, 0xff]);
        }
    }

    /// Color at `(x, y)`, or `None` outside the canvas.
    pub fn get(&self, x: u32, y: u32) -> Option<Color> {
        let i = self.index(x as i64, y as i64)?;
        Some(Color::rgb(self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]))
    }

    /// Blend `color` into one pixel. Out-of-bounds writes are clipped.
    pub fn blend(&mut self, x: i64, y: i64, color: Color, alpha: f32) {
        let Some(i) = self.index(x, y) else {
            return;
        };
        let below = Color::rgb(self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]);
        let out = color.over(below, alpha);
        self.pixels[i] = out.r;
        self.pixels[i + 1] = out.g;
        self.pixels[i + 2] = out.b;
    }

    /// Even-odd scanline fill of a closed polygon given in pixel coordinates.
    ///
    /// A pixel is covered when its center lies inside the polygon.
    pub fn fill_polygon(&mut self, points: &[DVec2], color: Color, alpha: f32) {
        if points.len() < 3 {
            return;
        }
        let (min_y, max_y) = points
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p.y), hi.max(p.y))
            });
        let first_row = min_y.floor().max(0.0) as i64;
        let last_row = max_y.ceil().min(self.height as f64) as i64;

        let mut crossings = Vec::new();
        for row in first_row..last_row {
            let y = row as f64 + 0.5;
            crossings.clear();
            for (i, a) in points.iter().enumerate() {
                let b = points[(i + 1) % points.len()];
                if (a.y <= y) != (b.y <= y) {
                    crossings.push(a.x + (y - a.y) / (b.y - a.y) * (b.x - a.x));
                }
            }
            crossings.sort_by(f64::total_cmp);
            for pair in crossings.chunks_exact(2) {
                let start = (pair[0] - 0.5).ceil().max(0.0) as i64;
                let end = (pair[1] - 0.5).floor().min(self.width as f64 - 1.0) as i64;
                for x in start..=end {
                    self.blend(x, row, color, alpha);
                }
            }
        }
    }

    /// One-pixel polyline through `points`, in pixel coordinates.
    pub fn stroke_polyline(&mut self, points: &[DVec2], color: Color, alpha: f32) {
        for seg in points.windows(2) {
            self.stroke_segment(seg[0], seg[1], color, alpha);
        }
    }

    /// Closed one-pixel outline of a polygon.
    pub fn stroke_polygon(&mut self, points: &[DVec2], color: Color, alpha: f32) {
        self.stroke_polyline(points, color, alpha);
        if let (Some(&last), Some(&first)) = (points.last(), points.first()) {
            self.stroke_segment(last, first, color, alpha);
        }
    }

    /// Filled disc of `radius` pixels centered at `center`.
    pub fn fill_circle(&mut self, center: DVec2, radius: f64, color: Color) {
        let r2 = radius * radius;
        let x0 = (center.x - radius).floor() as i64;
        let x1 = (center.x + radius).ceil() as i64;
        let y0 = (center.y - radius).floor() as i64;
        let y1 = (center.y + radius).ceil() as i64;
        for y in y0..=y1 {
            for x in x0..=x1 {
                let d = DVec2::new(x as f64 + 0.5, y as f64 + 0.5) - center;
                if d.length_squared() <= r2 {
                    self.blend(x, y, color, 1.0);
                }
            }
        }
    }

    fn stroke_segment(&mut self, a: DVec2, b: DVec2, color: Color, alpha: f32) {
        let steps = (b - a).abs().max_element().ceil().max(1.0) as usize;
        // Plot each pixel once; segment endpoints are left to the next segment.
        let mut last = None;
        for i in 0..steps {
            let p = a.lerp(b, i as f64 / steps as f64);
            let px = (p.x.floor() as i64, p.y.floor() as i64);
            if last != Some(px) {
                self.blend(px.0, px.1, color, alpha);
                last = Some(px);
            }
        }
    }

    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * 4)
    }
}
