//! Writing rendered frames to disk as a numbered PNG sequence.

use std::path::{Path, PathBuf};

use toolfield_common::error::{ToolfieldError, ToolfieldResult};

use crate::raster::RasterSurface;

/// Writes `frame_00000.png`, `frame_00001.png`, ... into a directory.
#[derive(Debug)]
pub struct FrameSequenceWriter {
    dir: PathBuf,
    frames_written: u64,
}

impl FrameSequenceWriter {
    /// Create the output directory if needed.
    ///
    /// Refuses to write into a directory that already holds a frame
    /// sequence so earlier renders are never partially overwritten.
    pub fn create(dir: impl Into<PathBuf>) -> ToolfieldResult<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        if dir.join(frame_file_name(0)).exists() {
            return Err(ToolfieldError::export(format!(
                "{} already contains a frame sequence",
                dir.display()
            )));
        }
        tracing::debug!(dir = %dir.display(), "Created frame sequence directory");
        Ok(Self {
            dir,
            frames_written: 0,
        })
    }

    /// Encode the surface as the next frame. Returns the file written.
    pub fn write(&mut self, surface: &RasterSurface) -> ToolfieldResult<PathBuf> {
        let path = self.dir.join(frame_file_name(self.frames_written));
        surface.save_png(&path)?;
        self.frames_written += 1;
        Ok(path)
    }

    pub fn frames_written(&self) -> u64 {
        self.frames_written
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

/// File name of the frame at `index`.
pub fn frame_file_name(index: u64) -> String {
    format!("frame_{index:05}.png")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::{Color, Paint};
    use crate::path::Path as VectorPath;
    use crate::surface::DrawSurface;

    #[test]
    fn test_frame_file_name() {
        assert_eq!(frame_file_name(0), "frame_00000.png");
        assert_eq!(frame_file_name(1234), "frame_01234.png");
    }

    #[test]
    fn test_writes_numbered_frames() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("renders").join("tools");
        let mut writer = FrameSequenceWriter::create(&out).unwrap();

        let mut surface = RasterSurface::new(16, 16);
        writer.write(&surface).unwrap();
        surface.fill_path(&VectorPath::rect(0.0, 0.0, 8.0, 8.0), &Paint::solid(Color::BLACK));
        let second = writer.write(&surface).unwrap();

        assert_eq!(writer.frames_written(), 2);
        assert!(out.join("frame_00000.png").exists());
        assert_eq!(second, out.join("frame_00001.png"));
    }

    #[test]
    fn test_refuses_existing_sequence() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = FrameSequenceWriter::create(dir.path()).unwrap();
        writer.write(&RasterSurface::new(4, 4)).unwrap();

        assert!(FrameSequenceWriter::create(dir.path()).is_err());
    }
}
