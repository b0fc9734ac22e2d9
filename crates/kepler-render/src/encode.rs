//! PNG encoding of rendered frames.

use std::path::Path;

use crate::canvas::Canvas;
use crate::error::RenderError;

/// Encode `canvas` as an 8-bit RGBA PNG.
pub fn encode_png(canvas: &Canvas) -> Result<Vec<u8>, RenderError> {
    let mut png_buf = Vec::new();
    {
        let mut encoder = png::Encoder::new(
            std::io::Cursor::new(&mut png_buf),
            canvas.width(),
            canvas.height(),
        );
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(canvas.pixels())?;
        writer.finish()?;
    }
    Ok(png_buf)
}

/// Encode `canvas` and write it to `path`, creating parent directories.
pub fn write_png(canvas: &Canvas, path: &Path) -> Result<(), RenderError> {
    let bytes = encode_png(canvas)?;
    let io_err = |source| RenderError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    std::fs::write(path, bytes).map_err(io_err)?;
    tracing::trace!(path = %path.display(), "frame written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn test_encode_png_header_and_size() {
        let canvas = Canvas::new(7, 5, Color::PLANET);
        let bytes = encode_png(&canvas).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

        let decoder = png::Decoder::new(std::io::Cursor::new(&bytes));
        let reader = decoder.read_info().unwrap();
        assert_eq!(reader.info().width, 7);
        assert_eq!(reader.info().height, 5);
        assert_eq!(reader.info().color_type, png::ColorType::Rgba);
    }

    #[test]
    fn test_write_png_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frames").join("frame.png");
        write_png(&Canvas::new(2, 2, Color::BLACK), &path).unwrap();
        assert!(path.exists());
    }
}
