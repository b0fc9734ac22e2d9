//! PNG frame output.

use std::path::{Path, PathBuf};

use kepler_render::{Canvas, RenderError, write_png};

/// Writes rendered frames into a directory.
#[derive(Debug)]
pub struct FrameWriter {
    dir: PathBuf,
    record: bool,
    written: u64,
}

impl FrameWriter {
    /// Overwrite `frame.png`, or with `record` write `frame_00000.png, …`.
    pub fn new(dir: &Path, record: bool) -> Self {
        Self {
            dir: dir.to_path_buf(),
            record,
            written: 0,
        }
    }

    /// Path the next frame will be written to.
    pub fn next_path(&self) -> PathBuf {
        if self.record {
            self.dir.join(format!("frame_{:05}.png", self.written))
        } else {
            self.dir.join("frame.png")
        }
    }

    pub fn write(&mut self, canvas: &Canvas) -> Result<PathBuf, RenderError> {
        let path = self.next_path();
        write_png(canvas, &path)?;
        self.written += 1;
        Ok(path)
    }

    /// Frames written so far.
    pub fn written(&self) -> u64 {
        self.written
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kepler_render::Color;

    #[test]
    fn test_overwrite_mode_reuses_path() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = FrameWriter::new(dir.path(), false);
        let canvas = Canvas::new(2, 2, Color::BLACK);
        let a = writer.write(&canvas).unwrap();
        let b = writer.write(&canvas).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.file_name().unwrap(), "frame.png");
        assert_eq!(writer.written(), 2);
    }

    #[test]
    fn test_record_mode_numbers_frames() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = FrameWriter::new(dir.path(), true);
        let canvas = Canvas::new(2, 2, Color::BLACK);
        writer.write(&canvas).unwrap();
        let second = writer.write(&canvas).unwrap();
        assert_eq!(second.file_name().unwrap(), "frame_00001.png");
        assert!(dir.path().join("frame_00000.png").exists());
    }
}
