//! Software rendering of the orbit plot.
//!
//! Builds a [`Scene`] from the orbit state, rasterizes it into an RGBA
//! [`Canvas`] through a [`Viewport`], and encodes frames as PNG.

mod canvas;
mod color;
mod encode;
mod error;
mod scene;
mod viewport;

pub use canvas::Canvas;
pub use color::Color;
pub use encode::{encode_png, write_png};
pub use error::RenderError;
pub use scene::{Marker, Scene, SectorShape};
pub use viewport::Viewport;
