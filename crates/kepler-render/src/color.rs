//! Opaque sRGB colors and the plot palette.

/// An opaque 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const YELLOW: Self = Self::rgb(0xff, 0xff, 0);

    /// Orbit curve.
    pub const ORBIT: Self = Self::from_hex(0x444444);
    /// Even-indexed sectors.
    pub const SECTOR_EVEN: Self = Self::from_hex(0x1f77b4);
    /// Odd-indexed sectors.
    pub const SECTOR_ODD: Self = Self::from_hex(0xbcbd22);
    /// Planet marker.
    pub const PLANET: Self = Self::from_hex(0x00ffff);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// From a `0xRRGGBB` literal.
    pub const fn from_hex(hex: u32) -> Self {
        Self::rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    /// Fill color for the sector at `index`, alternating by parity.
    pub const fn sector(index: usize) -> Self {
        if index % 2 == 0 {
            Self::SECTOR_EVEN
        } else {
            Self::SECTOR_ODD
        }
    }

    /// `self` composited over `below` with coverage `alpha` in `[0, 1]`.
    pub fn over(self, below: Self, alpha: f32) -> Self {
        let a = alpha.clamp(0.0, 1.0);
        let mix = |top: u8, bottom: u8| -> u8 {
            (top as f32 * a + bottom as f32 * (1.0 - a)).round() as u8
        };
        Self::rgb(mix(self.r, below.r), mix(self.g, below.g), mix(self.b, below.b))
    }
}
